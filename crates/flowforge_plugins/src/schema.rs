// SPDX-License-Identifier: MIT OR Apache-2.0
//! Property schema descriptors driving the dynamic properties form.

use flowforge_graph::PropertyValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Widget kind for a property field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldKind {
    /// Single-line text input
    Text,
    /// Multi-line text input
    TextArea,
    /// Numeric input
    Number,
    /// Boolean checkbox
    Checkbox,
    /// Dropdown over a fixed option set
    Select {
        /// The selectable option values
        options: Vec<String>,
    },
}

/// Comparison applied to another property's current value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DependencyCondition {
    /// Value equals the given value
    Equals(PropertyValue),
    /// Value differs from the given value
    NotEquals(PropertyValue),
    /// Text value contains the given substring
    Contains(String),
    /// Value is absent or empty
    IsEmpty,
    /// Value is present and non-empty
    IsNotEmpty,
    /// Numeric value is greater than the given number
    GreaterThan(f64),
    /// Numeric value is less than the given number
    LessThan(f64),
}

impl DependencyCondition {
    /// Evaluate the condition against a property's current value
    ///
    /// An absent value satisfies only `IsEmpty` and `NotEquals`.
    pub fn is_met(&self, value: Option<&PropertyValue>) -> bool {
        match self {
            Self::Equals(expected) => value == Some(expected),
            Self::NotEquals(expected) => value != Some(expected),
            Self::Contains(needle) => value
                .and_then(PropertyValue::as_text)
                .is_some_and(|s| s.contains(needle.as_str())),
            Self::IsEmpty => value.map_or(true, PropertyValue::is_empty),
            Self::IsNotEmpty => value.is_some_and(|v| !v.is_empty()),
            Self::GreaterThan(threshold) => value
                .and_then(PropertyValue::as_number)
                .is_some_and(|n| n > *threshold),
            Self::LessThan(threshold) => value
                .and_then(PropertyValue::as_number)
                .is_some_and(|n| n < *threshold),
        }
    }
}

/// A visibility/enablement dependency on another property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dependency {
    /// The property this depends on
    pub field: String,
    /// The condition that must hold
    pub condition: DependencyCondition,
}

impl Dependency {
    /// Create a new dependency
    pub fn new(field: impl Into<String>, condition: DependencyCondition) -> Self {
        Self {
            field: field.into(),
            condition,
        }
    }

    /// Shorthand for an equals-text dependency
    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, DependencyCondition::Equals(PropertyValue::Text(value.into())))
    }
}

/// Check that every dependency in a set is currently satisfied
pub fn dependencies_met(
    dependencies: &[Dependency],
    properties: &IndexMap<String, PropertyValue>,
) -> bool {
    dependencies
        .iter()
        .all(|dep| dep.condition.is_met(properties.get(&dep.field)))
}

/// An ordered field descriptor in a node type's property schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyField {
    /// Property ID, the key into the node's property bag
    pub id: String,
    /// Display label
    pub label: String,
    /// Widget kind
    pub kind: FieldKind,
    /// Default value for new nodes
    pub default: PropertyValue,
    /// Whether a value is required
    pub required: bool,
    /// Dependencies gating visibility/enablement; a field whose
    /// dependencies are unmet is skipped by validation entirely
    pub dependencies: Vec<Dependency>,
}

impl PropertyField {
    /// Create a new field descriptor
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        kind: FieldKind,
        default: PropertyValue,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            default,
            required: false,
            dependencies: Vec::new(),
        }
    }

    /// Shorthand for a text field with an empty default
    pub fn text(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, label, FieldKind::Text, PropertyValue::Text(String::new()))
    }

    /// Mark as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Add a dependency
    pub fn with_dependency(mut self, dependency: Dependency) -> Self {
        self.dependencies.push(dependency);
        self
    }
}

/// A collapsible section of the properties form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyGroup {
    /// Group ID
    pub id: String,
    /// Display label
    pub label: String,
    /// IDs of the fields shown in this group, in order
    pub field_ids: Vec<String>,
    /// Whether the group can be collapsed
    pub collapsible: bool,
    /// Visibility conditions for the whole group
    pub dependencies: Vec<Dependency>,
}

impl PropertyGroup {
    /// Create a new group
    pub fn new(id: impl Into<String>, label: impl Into<String>, field_ids: Vec<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            field_ids,
            collapsible: true,
            dependencies: Vec::new(),
        }
    }

    /// Add a visibility dependency
    pub fn with_dependency(mut self, dependency: Dependency) -> Self {
        self.dependencies.push(dependency);
        self
    }
}

/// One labeled outgoing path of a node type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchDescriptor {
    /// Branch ID, carried as the label on branch connections
    pub id: String,
    /// Display label
    pub label: String,
    /// Short description for tooltips
    pub description: String,
}

impl BranchDescriptor {
    /// Create a new branch descriptor
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: description.into(),
        }
    }
}
