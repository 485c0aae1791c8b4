//! Tolerant Numeric Decoding
//!
//! The Bbox API is inconsistent about how it encodes numbers: the same counter
//! (e.g. `wan.ip.stats.rx.bytes`) is a JSON number on some firmware versions and
//! a quoted string on others.
//!
//! - [`FlexibleNumber`] is the strict decoder: a JSON number or a string holding
//!   a decimal float becomes an `f64`, anything else is a decode error.
//! - [`NumericField`] is what the API payload types use. It never fails the
//!   surrounding struct: a bad value is kept as [`NumericField::Invalid`] so the
//!   projector can drop that one sample and keep the rest of the cycle.
//!
//! Neither type ever turns a malformed value into `0`.

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;

/// A number decoded from either a JSON number or a numeric JSON string
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct FlexibleNumber(pub f64);

impl FlexibleNumber {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<FlexibleNumber> for f64 {
    fn from(n: FlexibleNumber) -> Self {
        n.0
    }
}

struct FlexibleNumberVisitor;

impl<'de> Visitor<'de> for FlexibleNumberVisitor {
    type Value = FlexibleNumber;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number or a string containing a number")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(FlexibleNumber(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(FlexibleNumber(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(FlexibleNumber(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse::<f64>()
            .map(FlexibleNumber)
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for FlexibleNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FlexibleNumberVisitor)
    }
}

/// A numeric API field whose decoding problems stay local to the field
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NumericField {
    Value(f64),
    /// Present but not decodable; holds the decoder's message
    Invalid(String),
    #[default]
    Missing,
}

impl NumericField {
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            _ => None,
        }
    }

    /// Strictly positive decoded value; invalid or missing fields are never positive
    pub fn is_positive(&self) -> bool {
        self.value().is_some_and(|v| v > 0.0)
    }
}

impl From<f64> for NumericField {
    fn from(v: f64) -> Self {
        Self::Value(v)
    }
}

impl<'de> Deserialize<'de> for NumericField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(match FlexibleNumber::deserialize(&raw) {
            Ok(n) => Self::Value(n.0),
            Err(e) => Self::Invalid(e.to_string()),
        })
    }
}
