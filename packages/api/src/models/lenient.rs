//! Field decoders for values the backend is loose about.
//!
//! Ids come back as numbers from some endpoints and strings from others,
//! aggregate counts may be serialised as numeric strings, and optional lists
//! may be `null`. Timestamps arrive as RFC 3339 or as a naive
//! `YYYY-MM-DD HH:MM:SS` in UTC. These helpers accept all of those shapes.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Accept `7`, `"7"` or `"a1b2"` as an identifier.
pub(crate) fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Int(n) => n.to_string(),
        Scalar::Float(f) => f.to_string(),
        Scalar::Text(s) => s,
    })
}

/// Like [`id`], with `null` or absence meaning empty.
pub(crate) fn id_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        None => String::new(),
        Some(Scalar::Int(n)) => n.to_string(),
        Some(Scalar::Float(f)) => f.to_string(),
        Some(Scalar::Text(s)) => s,
    })
}

/// RFC 3339, naive UTC, or unix seconds. Anything else decodes as `None`.
pub(crate) fn timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        None | Some(Scalar::Float(_)) => None,
        Some(Scalar::Int(secs)) => DateTime::from_timestamp(secs, 0),
        Some(Scalar::Text(s)) => parse_timestamp(&s),
    })
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

/// Non-negative integer that may be a number, a numeric string, or `null`.
pub(crate) fn optional_number<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Scalar> = Option::deserialize(deserializer)?;
    Ok(match raw {
        None => None,
        Some(Scalar::Int(n)) => u32::try_from(n).ok(),
        Some(Scalar::Float(f)) if f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64 => {
            Some(f as u32)
        }
        Some(Scalar::Float(_)) => None,
        Some(Scalar::Text(s)) => s.trim().parse().ok(),
    })
}

/// Like [`optional_number`], with absence meaning zero.
pub(crate) fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_number(deserializer)?.unwrap_or(0))
}

/// A string that may be `null`.
pub(crate) fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A list that may be `null`.
pub(crate) fn list_or_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Stamped {
        #[serde(default, deserialize_with = "timestamp")]
        at: Option<DateTime<Utc>>,
    }

    fn decode(json: &str) -> Option<DateTime<Utc>> {
        serde_json::from_str::<Stamped>(json).unwrap().at
    }

    #[test]
    fn test_timestamp_shapes() {
        let expected = "2025-03-04T10:15:00Z".parse::<DateTime<Utc>>().ok();
        assert_eq!(decode(r#"{"at": "2025-03-04T10:15:00Z"}"#), expected);
        assert_eq!(decode(r#"{"at": "2025-03-04T11:15:00+01:00"}"#), expected);
        assert_eq!(decode(r#"{"at": "2025-03-04 10:15:00"}"#), expected);
        assert_eq!(decode(r#"{"at": "2025-03-04T10:15:00.000"}"#), expected);
        assert_eq!(decode(r#"{"at": null}"#), None);
        assert_eq!(decode(r#"{}"#), None);
        assert_eq!(decode(r#"{"at": "yesterday"}"#), None);
    }
}
