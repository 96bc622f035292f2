//! In-place assignment into a value tree.
//!
//! `set` mutates the caller's tree destructively. Intermediate object keys
//! that do not exist are created as empty objects on the way down; arrays are
//! never grown. There is no rollback: when a later segment fails, objects
//! created for earlier segments stay in the tree. Clone the root first if the
//! original must survive a failed assignment.

use tracing::{debug, trace};

use crate::error::{PathError, Result};
use crate::path::{Path, PathSegment};
use crate::value::{Map, Value};

/// Assign `value` at `path` inside `root`.
///
/// The path is parsed leniently on every call. Every segment but the last is
/// walked to find the parent container, creating missing object keys, and the
/// last segment is then assigned: a key is inserted or overwritten, an index
/// overwrites an existing element.
///
/// # Errors
///
/// - [`PathError::EmptyPath`] if the path has no segments.
/// - [`PathError::NotAnObject`] / [`PathError::NotAnArray`] on a container
///   type mismatch.
/// - [`PathError::IndexOutOfRange`] if an index is outside the array.
/// - [`PathError::UnsupportedWildcard`] if the path contains `[*]`.
///
/// # Examples
///
/// ```
/// use treepath_core::{codec, get, set, Value};
///
/// let mut tree = codec::decode("{}").unwrap();
/// set(&mut tree, "settings.theme", Value::from("dark")).unwrap();
/// assert_eq!(codec::encode(&tree).unwrap(), r#"{"settings":{"theme":"dark"}}"#);
/// ```
pub fn set(root: &mut Value, path: &str, value: Value) -> Result<()> {
    assign(root, &Path::parse(path), Some(path), value)
}

/// Like [`set`], with a pre-parsed [`Path`].
///
/// Errors report the path in its canonical [`Display`](std::fmt::Display) form.
pub fn set_path(root: &mut Value, path: &Path, value: Value) -> Result<()> {
    assign(root, path, None, value)
}

fn assign(root: &mut Value, path: &Path, source: Option<&str>, value: Value) -> Result<()> {
    debug!(path = %path, segments = path.len(), "set");
    let path_text = || path.source_text(source);

    let Some((last, parents)) = path.segments().split_last() else {
        return Err(PathError::EmptyPath { path: path_text() });
    };

    let mut current = root;
    for seg in parents {
        trace!(segment = %seg, at = current.type_name(), "set step");
        current = match (seg, current) {
            (PathSegment::Key(k), Value::Object(map)) => {
                if !map.contains_key(k) {
                    debug!(path = %path, key = %k, "creating intermediate object");
                }
                map.get_or_insert_with(k, || Value::Object(Map::new()))
            }
            (PathSegment::Key(_), other) => {
                return Err(PathError::NotAnObject {
                    path: path_text(),
                    found: other.type_name(),
                });
            }
            (PathSegment::Index(i), Value::Array(arr)) => {
                let len = arr.len();
                element_mut(arr, *i).ok_or_else(|| PathError::IndexOutOfRange {
                    path: path_text(),
                    index: *i,
                    len,
                })?
            }
            (PathSegment::Index(_), other) => {
                return Err(PathError::NotAnArray {
                    path: path_text(),
                    found: other.type_name(),
                });
            }
            (PathSegment::Wildcard, _) => {
                return Err(PathError::UnsupportedWildcard { path: path_text() });
            }
        };
    }

    trace!(segment = %last, at = current.type_name(), "set assign");
    match (last, current) {
        (PathSegment::Key(k), Value::Object(map)) => {
            map.insert(k.as_str(), value);
            Ok(())
        }
        (PathSegment::Key(_), other) => Err(PathError::NotAnObject {
            path: path_text(),
            found: other.type_name(),
        }),
        (PathSegment::Index(i), Value::Array(arr)) => {
            let len = arr.len();
            let slot = element_mut(arr, *i).ok_or_else(|| PathError::IndexOutOfRange {
                path: path_text(),
                index: *i,
                len,
            })?;
            *slot = value;
            Ok(())
        }
        (PathSegment::Index(_), other) => Err(PathError::NotAnArray {
            path: path_text(),
            found: other.type_name(),
        }),
        (PathSegment::Wildcard, _) => Err(PathError::UnsupportedWildcard { path: path_text() }),
    }
}

fn element_mut(arr: &mut [Value], index: i64) -> Option<&mut Value> {
    usize::try_from(index).ok().and_then(|i| arr.get_mut(i))
}
