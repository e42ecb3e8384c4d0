//! Lenient deserializers for values produced by the forum platform.
//!
//! The platform's database driver may hand back integers as JSON strings and
//! booleans as `0`/`1`, depending on the deployment.

use serde::{de::Error, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

fn parse_number<E: Error>(value: Loose) -> Result<Option<i64>, E> {
    match value {
        Loose::Null => Ok(None),
        Loose::Int(v) => Ok(Some(v)),
        Loose::Float(v) if v.fract() == 0.0 && v.abs() < i64::MAX as f64 => Ok(Some(v as i64)),
        Loose::Float(v) => Err(E::custom(format!("expected an integer, found {}", v))),
        Loose::Text(s) if s.trim().is_empty() => Ok(None),
        Loose::Text(s) => s.trim().parse::<i64>().map(Some).map_err(E::custom),
        Loose::Bool(b) => Err(E::custom(format!("expected an integer, found {}", b))),
    }
}

/// Integer given either as a JSON number or a numeric string.
pub fn number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    parse_number::<D::Error>(Loose::deserialize(deserializer)?)?
        .ok_or_else(|| D::Error::custom("expected an integer, found null"))
}

/// Like [`number`], but `null` and empty strings become `None`.
pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    parse_number::<D::Error>(Loose::deserialize(deserializer)?)
}

/// Text that some deployments send as a bare number. `null` and empty strings become `None`.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Loose::deserialize(deserializer)? {
        Loose::Null => Ok(None),
        Loose::Text(s) if s.is_empty() => Ok(None),
        Loose::Text(s) => Ok(Some(s)),
        Loose::Int(v) => Ok(Some(v.to_string())),
        Loose::Float(v) => Ok(Some(v.to_string())),
        Loose::Bool(b) => Err(D::Error::custom(format!("expected text, found {}", b))),
    }
}

/// Boolean given as `true`/`false`, `0`/`1`, or their string forms.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Loose::deserialize(deserializer)? {
        Loose::Null => Ok(false),
        Loose::Bool(b) => Ok(b),
        Loose::Int(v) => Ok(v != 0),
        Loose::Float(v) => Ok(v != 0.0),
        Loose::Text(s) => match s.trim() {
            "1" | "true" => Ok(true),
            "0" | "false" | "" => Ok(false),
            other => Err(D::Error::custom(format!(
                "expected a boolean, found '{}'",
                other
            ))),
        },
    }
}
