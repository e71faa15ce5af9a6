//! Typed wire values inferred from the text a router field renders as.
//!
//! Inference order is integer, then float, then string. Nothing is trimmed
//! first, so `" 42"` is a string.

use crate::upnp::NIL;

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum WireValue {
    /// Signed 64-bit integer, written with an `i` suffix.
    Integer(i64),
    /// Float, written as the original decimal text.
    Float(String),
    /// Anything else, written double-quoted and unescaped.
    Text(String),
}

impl WireValue {
    /// Coerce raw field text. Returns `None` for the nil marker, which
    /// means the field is left off the line.
    pub fn coerce(raw: &str) -> Option<Self> {
        if raw == NIL {
            return None;
        }
        if let Ok(n) = raw.parse::<i64>() {
            return Some(Self::Integer(n));
        }
        if raw.parse::<f64>().is_ok() {
            return Some(Self::Float(raw.to_string()));
        }
        Some(Self::Text(raw.to_string()))
    }
}

impl fmt::Display for WireValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}i", n),
            Self::Float(text) => f.write_str(text),
            Self::Text(text) => write!(f, "\"{}\"", text),
        }
    }
}
