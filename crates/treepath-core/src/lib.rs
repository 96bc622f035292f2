//! # treepath-core
//!
//! Read and write values inside a JSON-like tree with compact path
//! expressions such as `company.employees[0].skills[1]`, `matrix[0][1]` or
//! `users[*]`.
//!
//! ## Quick start
//!
//! ```rust
//! use treepath_core::{codec, get, set, Value};
//!
//! let mut tree = codec::decode(r#"{"matrix":[[1,2,3],[4,5,6]]}"#).unwrap();
//! assert_eq!(get(&tree, "matrix[0][1]").unwrap(), &Value::from(2));
//!
//! set(&mut tree, "matrix[0][1]", Value::from(99)).unwrap();
//! assert_eq!(codec::encode(&tree).unwrap(), r#"{"matrix":[[1,99,3],[4,5,6]]}"#);
//! ```
//!
//! ## Read and write policies differ
//!
//! [`get()`] reads a missing object key, and anything below it, as `Null`;
//! [`set()`] creates missing intermediate objects. Neither ever extends an array. A `[*]` segment makes
//! `get` return the whole array and is rejected by `set`.
//!
//! ## Modules
//!
//! - [`path`] — path string → [`Path`] (lenient or strict)
//! - [`get`](mod@get) — read-only lookup
//! - [`set`](mod@set) — in-place assignment with object creation
//! - [`value`] — the [`Value`] tree and its ordered [`Map`]
//! - [`codec`] — JSON text ⇄ [`Value`] via `serde_json`
//! - [`error`] — [`PathError`] and the crate `Result` alias

pub mod codec;
pub mod error;
pub mod get;
pub mod path;
pub mod set;
pub mod value;

pub use error::{PathError, Result};
pub use get::{get, get_path};
pub use path::{ParseMode, Path, PathSegment};
pub use set::{set, set_path};
pub use value::{Map, Value};
