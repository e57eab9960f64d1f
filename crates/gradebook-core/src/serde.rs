//! Lenient deserializers for numeric request fields.
//!
//! Clients of the gradebook send ids and scores either as JSON numbers or as
//! numeric strings (`"score": "90"`). Both are accepted and narrowed to `i32`.

use serde::Deserializer;
use serde::de::{self, Visitor};
use std::fmt;

struct I32OrString;

impl<'de> Visitor<'de> for I32OrString {
    type Value = i32;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer or a string containing an integer")
    }

    fn visit_i64<E>(self, v: i64) -> Result<i32, E>
    where
        E: de::Error,
    {
        i32::try_from(v).map_err(|_| E::custom(format!("integer {} is out of range", v)))
    }

    fn visit_u64<E>(self, v: u64) -> Result<i32, E>
    where
        E: de::Error,
    {
        i32::try_from(v).map_err(|_| E::custom(format!("integer {} is out of range", v)))
    }

    fn visit_str<E>(self, v: &str) -> Result<i32, E>
    where
        E: de::Error,
    {
        v.trim()
            .parse::<i32>()
            .map_err(|_| E::custom(format!("invalid integer: {:?}", v)))
    }
}

/// Deserializes an `i32` from either a JSON number or a numeric string.
pub fn i32_or_string<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(I32OrString)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Score {
        #[serde(deserialize_with = "i32_or_string")]
        value: i32,
    }

    fn parse(json: &str) -> Result<i32, serde_json::Error> {
        serde_json::from_str::<Score>(json).map(|s| s.value)
    }

    #[test]
    fn test_accepts_number() {
        assert_eq!(parse(r#"{"value": 90}"#).unwrap(), 90);
        assert_eq!(parse(r#"{"value": -4}"#).unwrap(), -4);
    }

    #[test]
    fn test_accepts_numeric_string() {
        assert_eq!(parse(r#"{"value": "95"}"#).unwrap(), 95);
        assert_eq!(parse(r#"{"value": " 7 "}"#).unwrap(), 7);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse(r#"{"value": "ninety"}"#).is_err());
        assert!(parse(r#"{"value": 3000000000}"#).is_err());
        assert!(parse(r#"{"value": null}"#).is_err());
    }
}
