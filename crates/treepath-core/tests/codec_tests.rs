/// Codec boundary tests: decoding into the value model, number formatting,
/// key order preservation and serde integration.
use std::time::{Duration, Instant};
use treepath_core::{codec, get, set, PathError, Value};

#[test]
fn decode_scalars() {
    assert_eq!(codec::decode("null").unwrap(), Value::Null);
    assert_eq!(codec::decode("true").unwrap(), Value::Bool(true));
    assert_eq!(codec::decode("-2.5").unwrap(), Value::Number(-2.5));
    assert_eq!(codec::decode(r#""hi""#).unwrap(), Value::from("hi"));
}

#[test]
fn decode_invalid_json_is_json_error() {
    let err = codec::decode("{not json").unwrap_err();
    assert!(matches!(err, PathError::Json(_)));
    assert_eq!(err.path(), None);
}

#[test]
fn integers_survive_round_trip_without_fraction() {
    let t = codec::decode(r#"{"n":30,"neg":-4,"f":1.25}"#).unwrap();
    assert_eq!(codec::encode(&t).unwrap(), r#"{"n":30,"neg":-4,"f":1.25}"#);
}

#[test]
fn key_order_is_preserved() {
    let input = r#"{"zeta":1,"alpha":2,"mid":{"y":1,"b":2}}"#;
    let t = codec::decode(input).unwrap();
    assert_eq!(codec::encode(&t).unwrap(), input);
}

#[test]
fn new_keys_append_after_existing_ones() {
    let mut t = codec::decode(r#"{"b":1,"a":2}"#).unwrap();
    set(&mut t, "c", Value::from(3)).unwrap();
    set(&mut t, "b", Value::from(0)).unwrap();
    assert_eq!(codec::encode(&t).unwrap(), r#"{"b":0,"a":2,"c":3}"#);
}

#[test]
fn encode_pretty_uses_two_space_indent() {
    let t = codec::decode(r#"{"a":[1]}"#).unwrap();
    assert_eq!(codec::encode_pretty(&t).unwrap(), "{\n  \"a\": [\n    1\n  ]\n}");
}

#[test]
fn non_finite_numbers_encode_as_null() {
    let t = Value::Array(vec![Value::Number(f64::NAN), Value::Number(f64::INFINITY)]);
    assert_eq!(codec::encode(&t).unwrap(), "[null,null]");
}

#[test]
fn value_converts_to_and_from_serde_json() {
    let raw = serde_json::json!({"a": [1, "two", null, {"b": false}]});
    let value = Value::from(raw.clone());
    assert_eq!(serde_json::Value::from(&value), raw);
    assert_eq!(serde_json::Value::from(value), raw);
}

#[test]
fn value_implements_serde() {
    let value: Value = serde_json::from_str(r#"{"k":[1,2]}"#).unwrap();
    assert_eq!(value.get_path("k[1]").unwrap(), &Value::from(2));
    assert_eq!(serde_json::to_string(&value).unwrap(), r#"{"k":[1,2]}"#);
}

#[test]
fn negative_zero_survives_round_trip() {
    let t = codec::decode("[-0.0, 0]").unwrap();
    assert_eq!(codec::encode(&t).unwrap(), "[-0.0,0]");
}

/// Build `{"k0":0,"k1":1,...}` with `n` keys.
fn wide_object_json(n: usize) -> String {
    let fields: Vec<String> = (0..n).map(|i| format!("\"k{i}\":{i}")).collect();
    format!("{{{}}}", fields.join(","))
}

#[test]
fn wide_object_decodes_and_looks_up_every_key() {
    let n = 50_000;
    let json = wide_object_json(n);

    let start = Instant::now();
    let mut t = codec::decode(&json).unwrap();
    for i in (0..n).step_by(997) {
        assert_eq!(get(&t, &format!("k{i}")).unwrap(), &Value::from(i as u64));
    }
    set(&mut t, "k49999", Value::from("last")).unwrap();
    set(&mut t, "extra.nested", Value::Bool(true)).unwrap();
    let elapsed = start.elapsed();

    let map = t.as_object().unwrap();
    assert_eq!(map.len(), n + 1);
    assert_eq!(map.keys().next().map(String::as_str), Some("k0"));
    assert_eq!(map.keys().last().map(String::as_str), Some("extra"));
    assert_eq!(get(&t, "k49999").unwrap(), &Value::from("last"));
    // Hashed lookups keep this well under a second even in debug builds; a
    // scan per insert would take minutes.
    assert!(
        elapsed < Duration::from_secs(10),
        "decoding {n} keys took {elapsed:?}"
    );
}
