// SPDX-License-Identifier: MIT OR Apache-2.0
//! If/else node: a two-way conditional branch.

use crate::plugin::NodeTypePlugin;
use crate::schema::{BranchDescriptor, FieldKind, PropertyField};
use flowforge_graph::PropertyValue;
use indexmap::IndexMap;

/// Routes the workflow down a yes or no path based on a condition
pub struct IfElsePlugin;

impl NodeTypePlugin for IfElsePlugin {
    fn type_id(&self) -> &str {
        "ifelse"
    }

    fn display_name(&self) -> &str {
        "If / Else"
    }

    fn property_schema(&self) -> Vec<PropertyField> {
        vec![PropertyField::new(
            "condition",
            "Condition",
            FieldKind::Text,
            PropertyValue::Text(String::new()),
        )
        .required()]
    }

    fn branches(&self, _properties: &IndexMap<String, PropertyValue>) -> Vec<BranchDescriptor> {
        vec![
            BranchDescriptor::new("yes", "Yes", "Condition holds"),
            BranchDescriptor::new("no", "No", "Condition does not hold"),
        ]
    }
}
