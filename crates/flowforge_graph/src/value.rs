// SPDX-License-Identifier: MIT OR Apache-2.0
//! Property values stored on workflow nodes.

use serde::{Deserialize, Serialize};

/// A value held in a node's property bag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    /// Boolean flag
    Bool(bool),
    /// Numeric value
    Number(f64),
    /// Text value
    Text(String),
}

impl PropertyValue {
    /// Get the boolean value, if this is a `Bool`
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the numeric value, if this is a `Number`
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the text value, if this is a `Text`
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Whether this value counts as empty for validation purposes.
    ///
    /// Only text can be empty; numbers and booleans always carry a value.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert_eq!(PropertyValue::Bool(true).as_bool(), Some(true));
        assert_eq!(PropertyValue::Number(3.5).as_number(), Some(3.5));
        assert_eq!(PropertyValue::from("hi").as_text(), Some("hi"));
        assert_eq!(PropertyValue::Bool(true).as_text(), None);
    }

    #[test]
    fn test_is_empty() {
        assert!(PropertyValue::from("").is_empty());
        assert!(PropertyValue::from("   ").is_empty());
        assert!(!PropertyValue::from("x").is_empty());
        assert!(!PropertyValue::Number(0.0).is_empty());
        assert!(!PropertyValue::Bool(false).is_empty());
    }
}
