//! In-place JSON editing by dotted paths.
//!
//! Give any of the entry points a JSON document, a path such as
//! `users.3.name`, and a value; get back a new document with just that
//! spot changed. The document is never parsed into a tree: the smallest
//! affected byte range is located by scanning, the new bytes are spliced
//! in, and everything around the edit is preserved verbatim.
//!
//! ~~~
//! let doc = r#"{"name":{"first":"Tom"},"age":37}"#;
//! let doc = jsonsplice::set(doc, "name.last", "Anderson")?;
//! assert_eq!(doc, r#"{"name":{"first":"Tom","last":"Anderson"},"age":37}"#);
//!
//! let doc = jsonsplice::delete(&doc, "age")?;
//! assert_eq!(doc, r#"{"name":{"first":"Tom","last":"Anderson"}}"#);
//! # Ok::<(), jsonsplice::Error>(())
//! ~~~
//!
//! Paths are segments separated by `.`; a backslash escapes the next
//! character. A segment that is a canonical integer addresses an array
//! position, `-1` addresses the append position (set) or the last
//! element (delete), `#` broadcasts the rest of the path over every
//! element of an array, and a leading `:` forces the segment to be an
//! object key. Setting through structure that does not exist creates it,
//! including `null` padding for array positions beyond the end.

#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

macro_rules! impl_from {
    ($from:ty, $to:ty, $proj:expr) => {
        impl From<$from> for $to {
            fn from(x: $from) -> Self {
                $proj(x)
            }
        }
    };
}

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod edit;
mod nav;
pub mod path;
mod scan;
mod value;

#[cfg(feature = "serde")]
pub mod serde;

pub use value::Value;

use alloc::string::String;
use alloc::vec::Vec;
use edit::Op;

/// Edit error.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// path parsing has failed
    Path(path::Error),
    /// the path descends into a value that is neither object nor array
    TypeMismatch,
    /// the value could not be encoded
    #[cfg(feature = "serde")]
    Value(String),
}

impl_from!(path::Error, Error, Error::Path);

use core::fmt::{self, Display};

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Error::*;
        match self {
            Path(e) => e.fmt(f),
            TypeMismatch => "cannot descend into a non-container value".fmt(f),
            #[cfg(feature = "serde")]
            Value(e) => e.fmt(f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for path::Error {}

/// Set a typed value at `path`, creating missing structure on the way.
///
/// ~~~
/// assert_eq!(jsonsplice::set("", "b.this.4", 4i64)?,
///            r#"{"b":{"this":[null,null,null,null,4]}}"#);
/// # Ok::<(), jsonsplice::Error>(())
/// ~~~
pub fn set<'a>(json: &str, path: &str, value: impl Into<Value<'a>>) -> Result<String, Error> {
    let value = value.into();
    edit::edit(json.as_bytes(), path, Op::Set(&value)).map(into_string)
}

/// Set a pre-encoded JSON fragment at `path`, spliced verbatim.
pub fn set_raw(json: &str, path: &str, raw: &str) -> Result<String, Error> {
    let value = Value::Raw(raw.as_bytes());
    edit::edit(json.as_bytes(), path, Op::Set(&value)).map(into_string)
}

/// Remove the member or element at `path`.
///
/// An absent path leaves the document unchanged; this is not an error.
pub fn delete(json: &str, path: &str) -> Result<String, Error> {
    edit::edit(json.as_bytes(), path, Op::Delete).map(into_string)
}

/// Byte-buffer flavor of [`set`].
pub fn set_bytes<'a>(
    json: &[u8],
    path: &str,
    value: impl Into<Value<'a>>,
) -> Result<Vec<u8>, Error> {
    let value = value.into();
    edit::edit(json, path, Op::Set(&value))
}

/// Byte-buffer flavor of [`set_raw`].
pub fn set_raw_bytes(json: &[u8], path: &str, raw: &[u8]) -> Result<Vec<u8>, Error> {
    edit::edit(json, path, Op::Set(&Value::Raw(raw)))
}

/// Byte-buffer flavor of [`delete`].
pub fn delete_bytes(json: &[u8], path: &str) -> Result<Vec<u8>, Error> {
    edit::edit(json, path, Op::Delete)
}

/// Set an integer at `path`.
pub fn set_int(json: &str, path: &str, value: i64) -> Result<String, Error> {
    set(json, path, value)
}

/// Set a float at `path`. Non-finite values are written as `null`.
pub fn set_float(json: &str, path: &str, value: f64) -> Result<String, Error> {
    set(json, path, value)
}

/// Set a boolean at `path`.
pub fn set_bool(json: &str, path: &str, value: bool) -> Result<String, Error> {
    set(json, path, value)
}

/// Set a string at `path`, escaped as a JSON string literal.
pub fn set_string(json: &str, path: &str, value: &str) -> Result<String, Error> {
    set(json, path, value)
}

/// Edits cut at value boundaries, so documents that went in as UTF-8 come
/// out as UTF-8; anything else is patched up instead of panicking.
fn into_string(buf: Vec<u8>) -> String {
    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => {
            let bytes = e.into_bytes();
            String::from_utf8_lossy(&bytes).into_owned()
        }
    }
}
