//! Extracted stat values

use serde::Serialize;

/// A value pulled out of an item for one stat comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    /// Upper-cased categorical key
    Key(String),
    Keys(Vec<String>),
}

impl StatValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_key(&self) -> Option<&str> {
        match self {
            Self::Key(key) => Some(key),
            _ => None,
        }
    }

    pub fn as_keys(&self) -> Option<&[String]> {
        match self {
            Self::Keys(keys) => Some(keys),
            _ => None,
        }
    }
}
