//! Setting any serializable value.
//!
//! The core API takes primitives; this module accepts anything that
//! implements [`serde::Serialize`] by encoding it with `serde_json` and
//! splicing the result as a raw fragment.

use crate::edit::{self, Op};
use crate::{Error, Value};
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::Serialize;

/// Serialize `value` with `serde_json` and set it at `path`.
///
/// ~~~
/// let doc = jsonsplice::serde::set_value("{}", "retries", &[1, 2, 3])?;
/// assert_eq!(doc, r#"{"retries":[1,2,3]}"#);
/// # Ok::<(), jsonsplice::Error>(())
/// ~~~
pub fn set_value<T: Serialize + ?Sized>(json: &str, path: &str, value: &T) -> Result<String, Error> {
    set_value_bytes(json.as_bytes(), path, value).map(crate::into_string)
}

/// Byte-buffer flavor of [`set_value`].
pub fn set_value_bytes<T: Serialize + ?Sized>(
    json: &[u8],
    path: &str,
    value: &T,
) -> Result<Vec<u8>, Error> {
    let raw = serde_json::to_vec(value).map_err(|e| Error::Value(e.to_string()))?;
    edit::edit(json, path, Op::Set(&Value::Raw(&raw)))
}
