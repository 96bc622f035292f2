//! Path expression parser.
//!
//! A path is a `.`-separated list of top-level segments. Each top-level
//! segment is an optional key followed by any number of bracket groups:
//!
//! ```text
//! path    := topseg ("." topseg)*
//! topseg  := key? bracket*
//! bracket := "[" ( integer | "*" ) "]"
//! key     := any run of characters not containing "." or "["
//! ```
//!
//! `company.employees[0].skills[1]` becomes
//! `[Key("company"), Key("employees"), Index(0), Key("skills"), Index(1)]`.
//!
//! # Lenient vs strict
//!
//! [`ParseMode::Lenient`] (the default, used by [`crate::get`] and
//! [`crate::set`]) never fails: bracket groups whose content is neither `*`
//! nor an integer are dropped, an unclosed `[` ends scanning of its
//! top-level segment, and text between bracket groups is skipped.
//! [`ParseMode::Strict`] produces the same segments for every well-formed
//! path and returns [`PathError::Parse`] for everything lenient mode would
//! silently discard.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{PathError, Result};

/// One step of a path expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Object field access.
    Key(String),
    /// Array element access. Bounds are checked only when applied.
    Index(i64),
    /// The whole array at this point (`[*]`).
    Wildcard,
}

/// How the parser treats malformed bracket syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Drop malformed tokens without signaling.
    #[default]
    Lenient,
    /// Reject malformed tokens with [`PathError::Parse`].
    Strict,
}

/// A parsed path: an ordered, immutable sequence of [`PathSegment`]s.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// Parse `path` leniently. Never fails.
    ///
    /// ```
    /// use treepath_core::{Path, PathSegment};
    ///
    /// let path = Path::parse("a.b[0][1].c");
    /// assert_eq!(
    ///     path.segments(),
    ///     &[
    ///         PathSegment::Key("a".into()),
    ///         PathSegment::Key("b".into()),
    ///         PathSegment::Index(0),
    ///         PathSegment::Index(1),
    ///         PathSegment::Key("c".into()),
    ///     ]
    /// );
    /// ```
    pub fn parse(path: &str) -> Path {
        let mut segments = Vec::new();
        for (offset, top) in split_top_level(path) {
            // Lenient scanning has no error path.
            let _ = scan_top_segment(path, top, offset, ParseMode::Lenient, &mut segments);
        }
        Path { segments }
    }

    /// Parse `path`, rejecting malformed bracket syntax and empty segments.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::Parse`] with the byte offset of the first problem.
    pub fn parse_strict(path: &str) -> Result<Path> {
        if path.is_empty() {
            return Ok(Path::default());
        }
        let mut segments = Vec::new();
        for (offset, top) in split_top_level(path) {
            if top.is_empty() {
                return Err(parse_error(path, offset, "empty path segment"));
            }
            scan_top_segment(path, top, offset, ParseMode::Strict, &mut segments)?;
        }
        Ok(Path { segments })
    }

    /// Parse `path` using the given mode.
    pub fn parse_with(path: &str, mode: ParseMode) -> Result<Path> {
        match mode {
            ParseMode::Lenient => Ok(Path::parse(path)),
            ParseMode::Strict => Path::parse_strict(path),
        }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathSegment> {
        self.segments.iter()
    }

    /// Text to report in errors: the caller's original string when there is
    /// one, otherwise the canonical rendering.
    pub(crate) fn source_text(&self, source: Option<&str>) -> String {
        match source {
            Some(s) => s.to_string(),
            None => self.to_string(),
        }
    }
}

impl FromStr for Path {
    type Err = PathError;

    /// Strict parse, so `"a[x]".parse::<Path>()` is an error.
    fn from_str(s: &str) -> Result<Self> {
        Path::parse_strict(s)
    }
}

impl From<Vec<PathSegment>> for Path {
    fn from(segments: Vec<PathSegment>) -> Self {
        Path { segments }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathSegment;
    type IntoIter = std::slice::Iter<'a, PathSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(k) => f.write_str(k),
            PathSegment::Index(i) => write!(f, "[{i}]"),
            PathSegment::Wildcard => f.write_str("[*]"),
        }
    }
}

/// Canonical form: keys joined by `.`, brackets attached to the preceding
/// segment. A leading bracket renders without a key (`[0].a`).
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 && matches!(seg, PathSegment::Key(_)) {
                f.write_str(".")?;
            }
            write!(f, "{seg}")?;
        }
        Ok(())
    }
}

/// Split on `.`, yielding each top-level segment with its byte offset.
fn split_top_level(path: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut offset = 0;
    path.split('.').map(move |top| {
        let start = offset;
        offset += top.len() + 1;
        (start, top)
    })
}

/// Scan one top-level segment, pushing its key (if any) and bracket groups.
///
/// `offset` is the byte offset of `top` within `path`, used for error
/// positions. Only strict mode returns errors.
fn scan_top_segment(
    path: &str,
    top: &str,
    offset: usize,
    mode: ParseMode,
    out: &mut Vec<PathSegment>,
) -> Result<()> {
    let strict = mode == ParseMode::Strict;

    let Some(first_bracket) = top.find('[') else {
        if !top.is_empty() {
            out.push(PathSegment::Key(top.to_string()));
        }
        return Ok(());
    };

    let key = &top[..first_bracket];
    if !key.is_empty() {
        out.push(PathSegment::Key(key.to_string()));
    }

    let mut cursor = first_bracket;
    while cursor < top.len() {
        let rest = &top[cursor..];
        let Some(open) = rest.find('[') else {
            if strict {
                return Err(parse_error(path, offset + cursor, "unexpected text after ']'"));
            }
            debug!(path = path, trailing = rest, "dropping trailing text after bracket group");
            break;
        };
        if open > 0 && strict {
            return Err(parse_error(path, offset + cursor, "unexpected text between bracket groups"));
        }

        let open = cursor + open;
        let Some(close) = top[open..].find(']') else {
            if strict {
                return Err(parse_error(path, offset + open, "unclosed '['"));
            }
            debug!(path = path, rest = &top[open..], "unclosed bracket, ignoring remainder of segment");
            break;
        };
        let close = open + close;

        let content = &top[open + 1..close];
        match parse_bracket(content) {
            Some(seg) => out.push(seg),
            None if strict => {
                return Err(parse_error(
                    path,
                    offset + open + 1,
                    &format!("expected an integer or '*' inside brackets, found '{content}'"),
                ));
            }
            None => debug!(path = path, content = content, "dropping unrecognized bracket content"),
        }
        cursor = close + 1;
    }
    Ok(())
}

fn parse_bracket(content: &str) -> Option<PathSegment> {
    if content == "*" {
        return Some(PathSegment::Wildcard);
    }
    content.parse::<i64>().ok().map(PathSegment::Index)
}

fn parse_error(path: &str, position: usize, message: &str) -> PathError {
    PathError::Parse {
        path: path.to_string(),
        position,
        message: message.to_string(),
    }
}
