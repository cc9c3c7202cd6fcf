#![no_main]

// editing a valid document must yield a valid document

libfuzzer_sys::fuzz_target!(|data: &[u8]| {
    if serde_json::from_slice::<serde_json::Value>(data).is_err() {
        return;
    }
    for path in ["a.b", "0.-1", "#.x"] {
        if let Ok(out) = jsonsplice::set_raw_bytes(data, path, b"[1,2]") {
            serde_json::from_slice::<serde_json::Value>(&out).unwrap();
        }
        if let Ok(out) = jsonsplice::delete_bytes(data, path) {
            if !out.is_empty() {
                serde_json::from_slice::<serde_json::Value>(&out).unwrap();
            }
        }
    }
});
