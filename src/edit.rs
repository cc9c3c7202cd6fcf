//! Splicing edits into documents.
//!
//! The editor recurses segment by segment. At each level it holds the
//! exact byte range of one value; an edit deeper down comes back as a
//! replacement for that range and is spliced between the untouched
//! prefix and suffix. Missing structure is synthesized on the way in,
//! deletion repairs the neighboring comma on the way out.

use crate::nav::{self, Found, Spot};
use crate::path::Segment;
use crate::scan;
use crate::value::{encode_str, Value};
use crate::Error;
use alloc::vec::Vec;

/// What to do at the end of the path.
#[derive(Clone, Copy)]
pub(crate) enum Op<'a> {
    Set(&'a Value<'a>),
    Delete,
}

/// Apply `op` at `path` inside `json`, returning the new document bytes.
pub(crate) fn edit(json: &[u8], path: &str, op: Op) -> Result<Vec<u8>, Error> {
    // an empty path names the document itself; deeper down an empty
    // segment is an ordinary (empty) key, see `descend`
    if path.is_empty() {
        return Ok(match op {
            Op::Set(v) => {
                let mut out = Vec::new();
                v.encode(&mut out);
                out
            }
            Op::Delete => Vec::new(),
        });
    }
    descend(json, path, op)
}

fn descend(json: &[u8], path: &str, op: Op) -> Result<Vec<u8>, Error> {
    let seg = Segment::parse(path)?;
    let start = scan::ws(json, 0);
    if start == json.len() {
        // no document yet
        return match op {
            Op::Delete => Ok(json.to_vec()),
            Op::Set(v) => {
                let mut out = Vec::new();
                build(path, v, &mut out)?;
                Ok(out)
            }
        };
    }
    match json[start] {
        b'{' => edit_object(json, start, &seg, op),
        b'[' => edit_array(json, start, &seg, op),
        _ => match op {
            Op::Delete => Ok(json.to_vec()),
            Op::Set(_) => Err(Error::TypeMismatch),
        },
    }
}

fn edit_object(json: &[u8], open: usize, seg: &Segment, op: Op) -> Result<Vec<u8>, Error> {
    if seg.is_wildcard() {
        // broadcasting over an object would have to invent an order to
        // destroy it in; refuse instead
        return match op {
            Op::Delete => Ok(json.to_vec()),
            Op::Set(_) => Err(Error::TypeMismatch),
        };
    }
    match nav::in_object(json, open, seg.part()) {
        Found::Here(spot) => splice_at(json, &spot, seg, op),
        Found::Missing { close, empty, .. } => match op {
            Op::Delete => Ok(json.to_vec()),
            Op::Set(v) => {
                let root_end = scan::value(json, open);
                let mut out = Vec::with_capacity(json.len() + 16);
                out.extend_from_slice(&json[..close]);
                if !empty {
                    out.push(b',');
                }
                encode_str(seg.part(), &mut out);
                out.push(b':');
                tail(seg, v, &mut out)?;
                out.extend_from_slice(&json[close..root_end.max(close)]);
                Ok(out)
            }
        },
    }
}

fn edit_array(json: &[u8], open: usize, seg: &Segment, op: Op) -> Result<Vec<u8>, Error> {
    if seg.is_wildcard() {
        return broadcast(json, open, seg.rest(), op);
    }
    if seg.is_last_index() {
        let (spots, close) = nav::elements(json, open);
        return match op {
            // append position
            Op::Set(v) => insert_elem(json, open, close, spots.len(), spots.len(), seg, v),
            // last element
            Op::Delete => Ok(match spots.last() {
                Some(spot) => delete_span(json, spot),
                None => json.to_vec(),
            }),
        };
    }
    let want = match seg.index() {
        Some(want) => want,
        // a key segment cannot address an array position
        None => {
            return match op {
                Op::Delete => Ok(json.to_vec()),
                Op::Set(_) => Err(Error::TypeMismatch),
            }
        }
    };
    match nav::in_array(json, open, want) {
        Found::Here(spot) => splice_at(json, &spot, seg, op),
        Found::Missing { close, len, .. } => match op {
            Op::Delete => Ok(json.to_vec()),
            Op::Set(v) => insert_elem(json, open, close, len, want, seg, v),
        },
    }
}

/// Splice a new element before `close`, padding positions `len..want`
/// with `null`.
fn insert_elem(
    json: &[u8],
    open: usize,
    close: usize,
    len: usize,
    want: usize,
    seg: &Segment,
    v: &Value,
) -> Result<Vec<u8>, Error> {
    let root_end = scan::value(json, open);
    let mut out = Vec::with_capacity(json.len() + 16);
    out.extend_from_slice(&json[..close]);
    if len == 0 {
        for _ in 0..want {
            out.extend_from_slice(b"null,");
        }
    } else {
        for _ in len..want {
            out.extend_from_slice(b",null");
        }
        out.push(b',');
    }
    tail(seg, v, &mut out)?;
    out.extend_from_slice(&json[close..root_end.max(close)]);
    Ok(out)
}

/// The segment named an existing item: descend, replace, or delete.
fn splice_at(json: &[u8], spot: &Spot, seg: &Segment, op: Op) -> Result<Vec<u8>, Error> {
    if let Some(rest) = seg.rest() {
        let sub = descend(&json[spot.begin..spot.end], rest, op)?;
        let mut out = Vec::with_capacity(json.len() + sub.len());
        out.extend_from_slice(&json[..spot.begin]);
        out.extend_from_slice(&sub);
        out.extend_from_slice(&json[spot.end..]);
        return Ok(out);
    }
    match op {
        Op::Set(v) => {
            let mut out = Vec::with_capacity(json.len() + 16);
            out.extend_from_slice(&json[..spot.begin]);
            v.encode(&mut out);
            out.extend_from_slice(&json[spot.end..]);
            Ok(out)
        }
        Op::Delete => Ok(delete_span(json, spot)),
    }
}

/// Remove an item together with exactly one neighboring comma: the one
/// before it when it has a predecessor, else the one after it, else none.
fn delete_span(json: &[u8], spot: &Spot) -> Vec<u8> {
    let (from, to) = match spot.comma {
        Some(comma) => (comma, spot.end),
        None => {
            let j = scan::ws(json, spot.end);
            match json.get(j) {
                Some(b',') => (spot.item, j + 1),
                _ => (spot.item, spot.end),
            }
        }
    };
    let mut out = Vec::with_capacity(json.len() - (to - from));
    out.extend_from_slice(&json[..from]);
    out.extend_from_slice(&json[to..]);
    out
}

/// Apply the remainder of the path to every element of the array.
///
/// Output is built left-to-right with a running cursor, so later element
/// offsets need no rebasing and the document is scanned once.
fn broadcast(json: &[u8], open: usize, rest: Option<&str>, op: Op) -> Result<Vec<u8>, Error> {
    let (spots, close) = nav::elements(json, open);
    if spots.is_empty() {
        // the wildcard edits elements, it never creates them
        return Ok(json.to_vec());
    }
    let rest = match rest {
        Some(rest) => rest,
        None => return Ok(broadcast_terminal(json, &spots, close, op)),
    };
    let mut out = Vec::with_capacity(json.len());
    let mut cursor = 0;
    for spot in &spots {
        out.extend_from_slice(&json[cursor..spot.begin]);
        match descend(&json[spot.begin..spot.end], rest, op) {
            Ok(sub) => out.extend_from_slice(&sub),
            // an element the path cannot descend into stays as it is
            Err(Error::TypeMismatch) => out.extend_from_slice(&json[spot.begin..spot.end]),
            Err(e) => return Err(e),
        }
        cursor = spot.end;
    }
    out.extend_from_slice(&json[cursor..]);
    Ok(out)
}

/// The wildcard was the last segment: the elements themselves are the
/// targets.
fn broadcast_terminal(json: &[u8], spots: &[Spot], close: usize, op: Op) -> Vec<u8> {
    match op {
        Op::Delete => {
            let mut out = Vec::with_capacity(json.len());
            out.extend_from_slice(&json[..spots[0].item]);
            out.extend_from_slice(&json[close..]);
            out
        }
        Op::Set(v) => {
            let mut out = Vec::with_capacity(json.len());
            let mut cursor = 0;
            for spot in spots {
                out.extend_from_slice(&json[cursor..spot.begin]);
                v.encode(&mut out);
                cursor = spot.end;
            }
            out.extend_from_slice(&json[cursor..]);
            out
        }
    }
}

/// Synthesize the containers for a whole remaining path, innermost value
/// included: objects for keys, arrays with `null` padding for indices,
/// one-element arrays for wildcard and last-index segments.
fn build(path: &str, v: &Value, out: &mut Vec<u8>) -> Result<(), Error> {
    let seg = Segment::parse(path)?;
    if seg.is_wildcard() || seg.is_last_index() {
        out.push(b'[');
        tail(&seg, v, out)?;
        out.push(b']');
    } else if let Some(n) = seg.index() {
        out.push(b'[');
        for _ in 0..n {
            out.extend_from_slice(b"null,");
        }
        tail(&seg, v, out)?;
        out.push(b']');
    } else {
        out.push(b'{');
        encode_str(seg.part(), out);
        out.push(b':');
        tail(&seg, v, out)?;
        out.push(b'}');
    }
    Ok(())
}

/// Emit the value itself, or the synthesized structure for the rest of
/// the path.
fn tail(seg: &Segment, v: &Value, out: &mut Vec<u8>) -> Result<(), Error> {
    match seg.rest() {
        None => {
            v.encode(out);
            Ok(())
        }
        Some(rest) => build(rest, v, out),
    }
}
