#![no_main]

libfuzzer_sys::fuzz_target!(|data: &[u8]| {
    let _ = jsonsplice::set_raw_bytes(data, "zzzz.zzzz.zzzz", b"123");
    let _ = jsonsplice::set_raw_bytes(data, "#.a.-1", b"123");
    let _ = jsonsplice::delete_bytes(data, "zzzz.0.#");
});
