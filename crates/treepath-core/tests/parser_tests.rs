/// Path parser tests: segment output for well-formed paths, lenient handling
/// of malformed brackets, and strict-mode rejection of the same inputs.
use treepath_core::{ParseMode, Path, PathError, PathSegment};

fn key(k: &str) -> PathSegment {
    PathSegment::Key(k.to_string())
}

fn idx(i: i64) -> PathSegment {
    PathSegment::Index(i)
}

fn segs(path: &str) -> Vec<PathSegment> {
    Path::parse(path).segments().to_vec()
}

// ============================================================================
// Well-formed paths
// ============================================================================

#[test]
fn parse_single_key() {
    assert_eq!(segs("name"), vec![key("name")]);
}

#[test]
fn parse_dotted_keys() {
    assert_eq!(
        segs("company.employees.count"),
        vec![key("company"), key("employees"), key("count")]
    );
}

#[test]
fn parse_chained_indices_and_keys() {
    assert_eq!(
        segs("a.b[0][1].c"),
        vec![key("a"), key("b"), idx(0), idx(1), key("c")]
    );
}

#[test]
fn parse_mixed_object_and_array_path() {
    assert_eq!(
        segs("company.employees[0].skills[1]"),
        vec![key("company"), key("employees"), idx(0), key("skills"), idx(1)]
    );
}

#[test]
fn parse_wildcard() {
    assert_eq!(segs("users[*]"), vec![key("users"), PathSegment::Wildcard]);
}

#[test]
fn parse_leading_bracket_emits_no_key() {
    assert_eq!(segs("[2].name"), vec![idx(2), key("name")]);
    assert_eq!(segs("[0][1]"), vec![idx(0), idx(1)]);
}

#[test]
fn parse_negative_and_signed_indices() {
    assert_eq!(segs("a[-1]"), vec![key("a"), idx(-1)]);
    assert_eq!(segs("a[+3]"), vec![key("a"), idx(3)]);
}

#[test]
fn parse_large_index_is_not_bounds_checked() {
    assert_eq!(segs("a[123456789]"), vec![key("a"), idx(123_456_789)]);
}

#[test]
fn parse_empty_path() {
    assert!(Path::parse("").is_empty());
    assert!(Path::parse_strict("").unwrap().is_empty());
}

#[test]
fn parse_keys_may_contain_closing_bracket_and_spaces() {
    assert_eq!(segs("odd]key.with space"), vec![key("odd]key"), key("with space")]);
}

// ============================================================================
// Lenient handling of malformed input
// ============================================================================

#[test]
fn lenient_drops_non_numeric_bracket() {
    assert_eq!(segs("a[abc].b"), vec![key("a"), key("b")]);
}

#[test]
fn lenient_drops_only_the_bad_group() {
    assert_eq!(segs("m[0][x][2]"), vec![key("m"), idx(0), idx(2)]);
}

#[test]
fn lenient_drops_empty_brackets() {
    assert_eq!(segs("a[]"), vec![key("a")]);
}

#[test]
fn lenient_unclosed_bracket_discards_rest_of_segment() {
    assert_eq!(segs("a[0][1.b"), vec![key("a"), idx(0), key("b")]);
    assert_eq!(segs("a[5"), vec![key("a")]);
}

#[test]
fn lenient_skips_text_between_brackets() {
    assert_eq!(segs("a[0]junk[1]"), vec![key("a"), idx(0), idx(1)]);
    assert_eq!(segs("a[0]tail"), vec![key("a"), idx(0)]);
}

#[test]
fn lenient_ignores_empty_segments() {
    assert_eq!(segs("a..b"), vec![key("a"), key("b")]);
    assert_eq!(segs(".a."), vec![key("a")]);
    assert!(segs("...").is_empty());
}

// ============================================================================
// Strict mode
// ============================================================================

fn strict_err(path: &str) -> (usize, String) {
    match Path::parse_strict(path) {
        Err(PathError::Parse {
            path: p,
            position,
            message,
        }) => {
            assert_eq!(p, path, "error must carry the original path");
            (position, message)
        }
        other => panic!("expected parse error for {path:?}, got {other:?}"),
    }
}

#[test]
fn strict_accepts_what_lenient_accepts_for_well_formed_paths() {
    for path in [
        "name",
        "a.b[0][1].c",
        "company.employees[0].skills[1]",
        "users[*]",
        "[2].name",
        "matrix[0][1]",
        "a[-1]",
    ] {
        assert_eq!(
            Path::parse_strict(path).unwrap(),
            Path::parse(path),
            "modes disagree on {path:?}"
        );
    }
}

#[test]
fn strict_rejects_non_numeric_bracket() {
    let (position, message) = strict_err("a[abc]");
    assert_eq!(position, 2);
    assert!(message.contains("abc"), "message: {message}");
}

#[test]
fn strict_rejects_unclosed_bracket() {
    let (position, message) = strict_err("a.b[1");
    assert_eq!(position, 3);
    assert!(message.contains("unclosed"), "message: {message}");
}

#[test]
fn strict_rejects_stray_text() {
    strict_err("a[0]junk[1]");
    strict_err("a[0]tail");
}

#[test]
fn strict_rejects_empty_segments() {
    let (position, _) = strict_err("a..b");
    assert_eq!(position, 2);
    strict_err("a.");
    strict_err(".a");
}

#[test]
fn parse_with_dispatches_on_mode() {
    assert_eq!(
        Path::parse_with("x[y]", ParseMode::Lenient).unwrap(),
        Path::parse("x")
    );
    assert!(Path::parse_with("x[y]", ParseMode::Strict).is_err());
    assert_eq!(ParseMode::default(), ParseMode::Lenient);
}

#[test]
fn from_str_is_strict() {
    assert!("a[0].b".parse::<Path>().is_ok());
    assert!("a[zero]".parse::<Path>().is_err());
}

// ============================================================================
// Display
// ============================================================================

#[test]
fn display_renders_canonical_form() {
    assert_eq!(Path::parse("a.b[0][1].c").to_string(), "a.b[0][1].c");
    assert_eq!(Path::parse("users[*]").to_string(), "users[*]");
    assert_eq!(Path::parse("[0].a").to_string(), "[0].a");
    assert_eq!(Path::parse("a..b[x][+2]").to_string(), "a.b[2]");
}

#[test]
fn display_reparses_to_same_segments() {
    let path = Path::parse("company.employees[0].skills[*]");
    assert_eq!(Path::parse(&path.to_string()), path);
}
