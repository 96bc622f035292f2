//! Read-only traversal of a value tree.

use tracing::{debug, trace};

use crate::error::{PathError, Result};
use crate::path::{Path, PathSegment};
use crate::value::{Value, NULL};

/// Look up the value at `path` in `root`.
///
/// The path is parsed leniently on every call. A missing object key yields
/// `Null` rather than an error, and so does any key applied to `Null`, so
/// `x.y` on `{}` is `Null`. A `[*]` segment returns the whole array it is
/// applied to, ignoring any segments after it.
///
/// # Errors
///
/// - [`PathError::NotAnObject`] if a key is applied to a bool, number, string
///   or array.
/// - [`PathError::NotAnArray`] if an index or `[*]` is applied to a non-array.
/// - [`PathError::IndexOutOfRange`] if an index is outside the array.
///
/// # Examples
///
/// ```
/// use treepath_core::{codec, get, Value};
///
/// let tree = codec::decode(r#"{"users":[{"name":"John","age":30}]}"#).unwrap();
/// assert_eq!(get(&tree, "users[0].name").unwrap(), &Value::from("John"));
/// assert_eq!(get(&tree, "users[0].email").unwrap(), &Value::Null);
/// assert_eq!(get(&tree, "users[0].email.domain").unwrap(), &Value::Null);
/// ```
pub fn get<'a>(root: &'a Value, path: &str) -> Result<&'a Value> {
    lookup(root, &Path::parse(path), Some(path))
}

/// Like [`get`], with a pre-parsed [`Path`].
///
/// Errors report the path in its canonical [`Display`](std::fmt::Display) form.
pub fn get_path<'a>(root: &'a Value, path: &Path) -> Result<&'a Value> {
    lookup(root, path, None)
}

fn lookup<'a>(root: &'a Value, path: &Path, source: Option<&str>) -> Result<&'a Value> {
    debug!(path = %path, segments = path.len(), "get");
    let path_text = || path.source_text(source);
    let mut current = root;

    for seg in path {
        trace!(segment = %seg, at = current.type_name(), "get step");
        current = match (seg, current) {
            (PathSegment::Key(k), Value::Object(map)) => map.get(k).unwrap_or(&NULL),
            // Reads past a missing key stay Null.
            (PathSegment::Key(_), Value::Null) => &NULL,
            (PathSegment::Key(_), other) => {
                return Err(PathError::NotAnObject {
                    path: path_text(),
                    found: other.type_name(),
                });
            }
            (PathSegment::Index(i), Value::Array(arr)) => {
                element(arr, *i).ok_or_else(|| PathError::IndexOutOfRange {
                    path: path_text(),
                    index: *i,
                    len: arr.len(),
                })?
            }
            (PathSegment::Wildcard, Value::Array(_)) => return Ok(current),
            (PathSegment::Index(_) | PathSegment::Wildcard, other) => {
                return Err(PathError::NotAnArray {
                    path: path_text(),
                    found: other.type_name(),
                });
            }
        };
    }

    Ok(current)
}

/// Bounds-checked element access for a possibly negative index.
fn element(arr: &[Value], index: i64) -> Option<&Value> {
    usize::try_from(index).ok().and_then(|i| arr.get(i))
}
