//! Boundary between JSON text and the [`Value`] tree.
//!
//! Decoding and encoding go through `serde_json::Value`. Numbers are held as
//! `f64`; on the way back out, a finite integral number within `i64` range is
//! written as an integer so `31` does not come back as `31.0`. Non-finite
//! numbers have no JSON form and encode as `null`; `-0.0` stays a float and
//! encodes as `-0.0`. Object key order survives the round trip (`serde_json`
//! is built with `preserve_order`).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Number;

use crate::error::Result;
use crate::value::{Map, Value};

/// Decode JSON text into a value tree.
///
/// # Errors
///
/// Returns [`crate::PathError::Json`] if the input is not valid JSON.
pub fn decode(json: &str) -> Result<Value> {
    let raw: serde_json::Value = serde_json::from_str(json)?;
    Ok(Value::from(raw))
}

/// Encode a value tree as compact JSON.
pub fn encode(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(&serde_json::Value::from(value))?)
}

/// Encode a value tree as pretty-printed JSON (two-space indent).
pub fn encode_pretty(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(&serde_json::Value::from(value))?)
}

impl From<serde_json::Value> for Value {
    fn from(raw: serde_json::Value) -> Self {
        match raw {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            // Every serde_json number has an f64 approximation; None only
            // occurs with arbitrary_precision, which is not enabled.
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => {
                Value::Array(arr.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect::<Map>(),
            ),
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => number_to_json(*n),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(arr) => {
                serde_json::Value::Array(arr.iter().map(serde_json::Value::from).collect())
            }
            Value::Object(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        serde_json::Value::from(&value)
    }
}

/// Largest magnitude at which every integral f64 is exactly an i64 value.
const I64_EXACT_LIMIT: f64 = 9_223_372_036_854_775_808.0;

fn number_to_json(n: f64) -> serde_json::Value {
    // -0.0 is integral but has no i64 form that keeps the sign.
    let negative_zero = n == 0.0 && n.is_sign_negative();
    if n.is_finite()
        && !negative_zero
        && n.fract() == 0.0
        && n >= -I64_EXACT_LIMIT
        && n < I64_EXACT_LIMIT
    {
        return serde_json::Value::Number(Number::from(n as i64));
    }
    Number::from_f64(n)
        .map(serde_json::Value::Number)
        .unwrap_or(serde_json::Value::Null)
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serde_json::Value::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_numbers_encode_as_integers() {
        assert_eq!(number_to_json(31.0), serde_json::json!(31));
        assert_eq!(number_to_json(-2.0), serde_json::json!(-2));
        assert_eq!(number_to_json(0.5), serde_json::json!(0.5));
    }

    #[test]
    fn non_finite_numbers_encode_as_null() {
        assert_eq!(number_to_json(f64::NAN), serde_json::Value::Null);
        assert_eq!(number_to_json(f64::INFINITY), serde_json::Value::Null);
    }

    #[test]
    fn negative_zero_keeps_its_sign() {
        let encoded = number_to_json(-0.0);
        let back = encoded.as_f64().unwrap();
        assert!(encoded.is_f64());
        assert_eq!(back, 0.0);
        assert!(back.is_sign_negative());
        assert_eq!(number_to_json(0.0), serde_json::json!(0));
    }

    #[test]
    fn huge_integral_numbers_stay_floats() {
        let big = 1e300;
        assert_eq!(number_to_json(big), serde_json::json!(1e300));
    }
}
