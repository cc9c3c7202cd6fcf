//! Dotted path expressions.
//!
//! A path is a sequence of segments separated by unescaped `.`. Parsing
//! consumes one segment at a time; the remainder is kept as a plain
//! subslice so that recursion over a path never allocates more than the
//! segments that actually contain escapes.

use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt::{self, Display};

/// Path parsing error.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// `\` with nothing after it
    TrailingEscape,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::TrailingEscape => "malformed escape at end of path".fmt(f),
        }
    }
}

/// One dot-delimited component of a path.
///
/// `part` borrows from the path unless the segment contained a backslash.
#[derive(Debug)]
pub(crate) struct Segment<'a> {
    part: Cow<'a, str>,
    rest: Option<&'a str>,
    force_key: bool,
    wildcard: bool,
}

impl<'a> Segment<'a> {
    /// Consume the first segment of `path`.
    ///
    /// A leading `:` forces the segment to be a key and is stripped.
    /// `\` followed by any character yields that character; a lone `\`
    /// at the end of the path is an error.
    pub fn parse(path: &'a str) -> Result<Self, Error> {
        let (force_key, path) = match path.strip_prefix(':') {
            Some(stripped) => (true, stripped),
            None => (false, path),
        };
        for (i, c) in path.char_indices() {
            match c {
                '.' => {
                    return Ok(Segment {
                        part: Cow::Borrowed(&path[..i]),
                        rest: Some(&path[i + 1..]),
                        force_key,
                        wildcard: !force_key && &path[..i] == "#",
                    })
                }
                '\\' => return Self::unescape(path, i, force_key),
                _ => (),
            }
        }
        Ok(Segment {
            part: Cow::Borrowed(path),
            rest: None,
            force_key,
            wildcard: !force_key && path == "#",
        })
    }

    /// Slow path: the segment contains at least one escape, so its
    /// decoded form differs from the raw bytes. A raw segment with an
    /// escape is never the wildcard.
    fn unescape(path: &'a str, from: usize, force_key: bool) -> Result<Self, Error> {
        let mut part = String::with_capacity(path.len());
        part.push_str(&path[..from]);
        let mut chars = path[from..].char_indices();
        while let Some((i, c)) = chars.next() {
            match c {
                '.' => {
                    return Ok(Segment {
                        part: Cow::Owned(part),
                        rest: Some(&path[from + i + 1..]),
                        force_key,
                        wildcard: false,
                    })
                }
                '\\' => match chars.next() {
                    Some((_, escaped)) => part.push(escaped),
                    None => return Err(Error::TrailingEscape),
                },
                c => part.push(c),
            }
        }
        Ok(Segment {
            part: Cow::Owned(part),
            rest: None,
            force_key,
            wildcard: false,
        })
    }

    /// Decoded segment text.
    pub fn part(&self) -> &str {
        &self.part
    }

    /// Path remaining after this segment, if a dot followed it.
    pub fn rest(&self) -> Option<&'a str> {
        self.rest
    }

    /// Raw segment was exactly `#`.
    pub fn is_wildcard(&self) -> bool {
        self.wildcard
    }

    /// Segment is the array append/last token `-1`.
    pub fn is_last_index(&self) -> bool {
        !self.force_key && self.part == "-1"
    }

    /// Segment as an array index: a canonical base-10 integer without
    /// leading zeros. Anything else (including `:`-forced segments and
    /// numbers beyond `usize`) is a key.
    pub fn index(&self) -> Option<usize> {
        if self.force_key {
            return None;
        }
        match self.part.as_bytes() {
            [b'0'] => Some(0),
            [b'1'..=b'9', rest @ ..] if rest.iter().all(u8::is_ascii_digit) => {
                self.part.parse().ok()
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(path: &str) -> Segment {
        Segment::parse(path).unwrap()
    }

    #[test]
    fn plain() {
        let s = seg("a.b.c");
        assert_eq!(s.part(), "a");
        assert_eq!(s.rest(), Some("b.c"));
        assert!(matches!(s.part, Cow::Borrowed(_)));

        let s = seg("tail");
        assert_eq!(s.part(), "tail");
        assert_eq!(s.rest(), None);
    }

    #[test]
    fn escapes() {
        let s = seg(r"app\.token.x");
        assert_eq!(s.part(), "app.token");
        assert_eq!(s.rest(), Some("x"));

        assert_eq!(seg(r"a\\b").part(), r"a\b");
        assert_eq!(seg(r"\:1").part(), ":1");
        assert_eq!(seg(r"\#").part(), "#");
        assert!(!seg(r"\#").is_wildcard());
        assert_eq!(Segment::parse(r"oops\").unwrap_err(), Error::TrailingEscape);
    }

    #[test]
    fn wildcard() {
        assert!(seg("#").is_wildcard());
        assert!(seg("#.rest").is_wildcard());
        assert!(!seg("#1").is_wildcard());
        assert!(!seg(":#").is_wildcard());
    }

    #[test]
    fn indices() {
        assert_eq!(seg("0").index(), Some(0));
        assert_eq!(seg("42.x").index(), Some(42));
        assert_eq!(seg("01").index(), None);
        assert_eq!(seg("-1").index(), None);
        assert!(seg("-1").is_last_index());
        assert!(!seg(":-1").is_last_index());
        assert_eq!(seg("99999999999999999999999999").index(), None);
    }

    #[test]
    fn force_key() {
        let s = seg(":1.x");
        assert_eq!(s.part(), "1");
        assert_eq!(s.index(), None);
        assert_eq!(s.rest(), Some("x"));
    }
}
