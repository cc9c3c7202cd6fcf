//! Skipping values in raw JSON.
//!
//! Every function here takes a byte slice and an offset and returns a new
//! offset. All of them are total: any byte sequence, well-formed or not,
//! yields an offset no greater than the input length, and malformed input
//! simply makes a value "end" at the next structurally significant byte
//! or at the end of the input.

/// Advance past JSON whitespace.
pub(crate) fn ws(json: &[u8], mut i: usize) -> usize {
    while let Some(b' ' | b'\t' | b'\n' | b'\r') = json.get(i) {
        i += 1;
    }
    i
}

/// Advance past the string whose opening quote sits at `i`.
///
/// Returns the offset just past the closing quote. Escape sequences are
/// skipped two bytes at a time, which covers `\"` and `\\` and leaves
/// longer sequences (`\uXXXX`) to be consumed as ordinary bytes.
/// An unterminated string ends at the end of the input.
pub(crate) fn string(json: &[u8], mut i: usize) -> usize {
    i += 1;
    while let Some(c) = json.get(i) {
        match c {
            b'"' => return i + 1,
            b'\\' => i += 2,
            _ => i += 1,
        }
    }
    json.len()
}

/// Advance past a number, greedily.
///
/// Once a number has started, every byte in `[0-9+-.eE]` belongs to it;
/// `42abc` ends before the `a`, and garbage like `1.2.3` is consumed
/// whole. The splicer only needs the extent, not the validity.
fn number(json: &[u8], mut i: usize) -> usize {
    while let Some(b'0'..=b'9' | b'+' | b'-' | b'.' | b'e' | b'E') = json.get(i) {
        i += 1;
    }
    i
}

/// Advance past `true`, `false`, `null`, or any other run of letters.
fn literal(json: &[u8], mut i: usize) -> usize {
    while json.get(i).is_some_and(|c| c.is_ascii_alphabetic()) {
        i += 1;
    }
    i
}

/// Advance past the container whose opening bracket sits at `i`.
///
/// Iterative depth counting; strings are opaque, so brackets inside them
/// do not count. `}` closes `[` on malformed input, which is fine: the
/// caller only needs a terminating extent.
fn container(json: &[u8], mut i: usize) -> usize {
    let mut depth = 0usize;
    while let Some(&c) = json.get(i) {
        match c {
            b'"' => {
                i = string(json, i);
                continue;
            }
            b'{' | b'[' => depth += 1,
            b'}' | b']' => {
                depth -= 1;
                if depth == 0 {
                    return i + 1;
                }
            }
            _ => (),
        }
        i += 1;
    }
    json.len()
}

/// Advance past exactly one value, consuming leading whitespace.
///
/// Returns the offset just past the value's end. When the first
/// non-whitespace byte starts no value at all, that offset is returned
/// unchanged and the caller treats the value as empty.
pub(crate) fn value(json: &[u8], i: usize) -> usize {
    let i = ws(json, i);
    match json.get(i) {
        Some(b'"') => string(json, i),
        Some(b'{' | b'[') => container(json, i),
        Some(b'0'..=b'9' | b'-' | b'+' | b'.') => number(json, i),
        Some(c) if c.is_ascii_alphabetic() => literal(json, i),
        _ => i,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(json: &str, from: usize) -> usize {
        value(json.as_bytes(), from)
    }

    #[test]
    fn scalars() {
        assert_eq!(spans("null", 0), 4);
        assert_eq!(spans("  true,", 0), 6);
        assert_eq!(spans("-12.5e3]", 0), 7);
        assert_eq!(spans(r#""a\"b" :"#, 0), 6);
    }

    #[test]
    fn containers() {
        assert_eq!(spans(r#"{"a":[1,{"b":"}"}]} ,"#, 0), 19);
        assert_eq!(spans("[[],[]]", 0), 7);
    }

    #[test]
    fn malformed_terminates() {
        assert_eq!(spans("", 0), 0);
        assert_eq!(spans(r#""unterminated"#, 0), 13);
        assert_eq!(spans("[1,2", 0), 4);
        assert_eq!(spans("}", 0), 0);
        // lone escape at the end of the input
        assert_eq!(spans("\"ab\\", 0), 4);
    }
}
