// SPDX-License-Identifier: MIT OR Apache-2.0
//! Validation rules evaluated against node property values.

use crate::schema::DependencyCondition;
use flowforge_graph::PropertyValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single validation rule for one property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValidationRule {
    /// Value must be present and non-empty
    Required,
    /// Text must be at least this many characters
    MinLength(usize),
    /// Text must be at most this many characters
    MaxLength(usize),
    /// Number must fall in the inclusive range
    Range {
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },
    /// Text must match the regular expression
    Pattern(String),
    /// Text must be one of the listed options
    OneOf(Vec<String>),
    /// Boolean must be true (e.g. a consent checkbox)
    MustBeTrue,
    /// Rule active only while another property satisfies a condition
    When {
        /// The property the condition inspects
        field: String,
        /// The condition gating the inner rule
        condition: DependencyCondition,
        /// Rule applied while the condition holds
        rule: Box<ValidationRule>,
    },
}

impl ValidationRule {
    /// Conditional-rule constructor
    pub fn when(
        field: impl Into<String>,
        condition: DependencyCondition,
        rule: ValidationRule,
    ) -> Self {
        Self::When {
            field: field.into(),
            condition,
            rule: Box::new(rule),
        }
    }

    /// Whether this is a dependency-conditional rule
    ///
    /// Structural rules are evaluated before conditional ones.
    pub fn is_conditional(&self) -> bool {
        matches!(self, Self::When { .. })
    }

    /// Evaluate this rule against a value, in the context of the node's
    /// full property map (needed by `When` rules)
    ///
    /// Returns a human-readable message on failure.
    pub fn check(
        &self,
        label: &str,
        value: Option<&PropertyValue>,
        properties: &IndexMap<String, PropertyValue>,
    ) -> Option<String> {
        match self {
            Self::Required => {
                if value.map_or(true, PropertyValue::is_empty) {
                    Some(format!("{label} is required"))
                } else {
                    None
                }
            }
            Self::MinLength(min) => {
                let len = value.and_then(PropertyValue::as_text).map_or(0, str::len);
                if len < *min {
                    Some(format!("{label} must be at least {min} characters"))
                } else {
                    None
                }
            }
            Self::MaxLength(max) => {
                let len = value.and_then(PropertyValue::as_text).map_or(0, str::len);
                if len > *max {
                    Some(format!("{label} must be at most {max} characters"))
                } else {
                    None
                }
            }
            Self::Range { min, max } => match value.and_then(PropertyValue::as_number) {
                Some(n) if n >= *min && n <= *max => None,
                _ => Some(format!("{label} must be between {min} and {max}")),
            },
            Self::Pattern(pattern) => {
                let text = value.and_then(PropertyValue::as_text).unwrap_or("");
                match regex_lite::Regex::new(pattern) {
                    Ok(re) if re.is_match(text) => None,
                    Ok(_) => Some(format!("{label} has an invalid format")),
                    Err(_) => {
                        tracing::warn!(pattern = %pattern, "invalid validation pattern, skipping rule");
                        None
                    }
                }
            }
            Self::OneOf(options) => {
                let text = value.and_then(PropertyValue::as_text).unwrap_or("");
                if options.iter().any(|o| o == text) {
                    None
                } else {
                    Some(format!("{label} must be one of: {}", options.join(", ")))
                }
            }
            Self::MustBeTrue => {
                if value.and_then(PropertyValue::as_bool) == Some(true) {
                    None
                } else {
                    Some(format!("{label} must be enabled"))
                }
            }
            Self::When { field, condition, rule } => {
                if condition.is_met(properties.get(field)) {
                    rule.check(label, value, properties)
                } else {
                    None
                }
            }
        }
    }
}
