//! Typed values extracted from URL placeholders.
//!
//! Placeholder conversion produces a [`UrlValue`], a closed sum over the
//! built-in converter outputs plus a [`UrlValue::Custom`] escape hatch for
//! caller-registered converters. Handlers downcast with the `as_*` accessors
//! instead of reaching through an untyped `Any`-style container.

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

/// A value bound by a URL placeholder during matching
///
/// The variant is decided by the placeholder's converter tag: `<id>` and
/// `<string:id>` bind [`UrlValue::String`], `<int:id>` binds
/// [`UrlValue::Int`], and so on. The greedy `<path:rest>` placeholder binds
/// the joined tail as [`UrlValue::String`]. Caller-registered converters
/// return whichever variant fits; [`UrlValue::Custom`] carries arbitrary
/// JSON payloads for everything else.
///
/// Serializes untagged, so `{"id": 123}` comes out as plain JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UrlValue {
    /// Raw segment text, `<string:...>` output, or a joined `<path:...>` tail
    String(String),
    /// `<int:...>` output (base-10, full-token parse)
    Int(i64),
    /// `<float:...>` output
    Float(f64),
    /// `<uuid:...>` output (canonical hyphenated form)
    Uuid(Uuid),
    /// Payload produced by a caller-registered converter
    Custom(Value),
}

impl UrlValue {
    /// Borrow the inner text if this is a `String` value
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            UrlValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The inner integer if this is an `Int` value
    #[inline]
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            UrlValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The inner float if this is a `Float` value
    #[inline]
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            UrlValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// The inner UUID if this is a `Uuid` value
    #[inline]
    #[must_use]
    pub fn as_uuid(&self) -> Option<Uuid> {
        match self {
            UrlValue::Uuid(u) => Some(*u),
            _ => None,
        }
    }

    /// Borrow the JSON payload if this is a `Custom` value
    #[inline]
    #[must_use]
    pub fn as_custom(&self) -> Option<&Value> {
        match self {
            UrlValue::Custom(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for UrlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlValue::String(s) => write!(f, "{s}"),
            UrlValue::Int(n) => write!(f, "{n}"),
            UrlValue::Float(x) => write!(f, "{x}"),
            UrlValue::Uuid(u) => write!(f, "{u}"),
            UrlValue::Custom(v) => write!(f, "{v}"),
        }
    }
}

impl From<String> for UrlValue {
    fn from(s: String) -> Self {
        UrlValue::String(s)
    }
}

impl From<&str> for UrlValue {
    fn from(s: &str) -> Self {
        UrlValue::String(s.to_string())
    }
}

impl From<i64> for UrlValue {
    fn from(n: i64) -> Self {
        UrlValue::Int(n)
    }
}

impl From<f64> for UrlValue {
    fn from(x: f64) -> Self {
        UrlValue::Float(x)
    }
}

impl From<Uuid> for UrlValue {
    fn from(u: Uuid) -> Self {
        UrlValue::Uuid(u)
    }
}

impl From<Value> for UrlValue {
    fn from(v: Value) -> Self {
        UrlValue::Custom(v)
    }
}
