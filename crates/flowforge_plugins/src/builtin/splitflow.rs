// SPDX-License-Identifier: MIT OR Apache-2.0
//! Split flow node: a multi-way branch derived from a value list.

use crate::plugin::NodeTypePlugin;
use crate::schema::{BranchDescriptor, FieldKind, PropertyField};
use flowforge_graph::PropertyValue;
use indexmap::IndexMap;

/// Fans the workflow out over a configured comma-separated value list,
/// with a catch-all "other" path appended last
pub struct SplitFlowPlugin;

impl NodeTypePlugin for SplitFlowPlugin {
    fn type_id(&self) -> &str {
        "splitflow"
    }

    fn display_name(&self) -> &str {
        "Split Flow"
    }

    fn property_schema(&self) -> Vec<PropertyField> {
        vec![
            PropertyField::text("attribute", "Split on attribute").required(),
            PropertyField::new(
                "values",
                "Values (comma-separated)",
                FieldKind::TextArea,
                PropertyValue::Text(String::new()),
            ),
        ]
    }

    fn branches(&self, properties: &IndexMap<String, PropertyValue>) -> Vec<BranchDescriptor> {
        let values: Vec<&str> = properties
            .get("values")
            .and_then(PropertyValue::as_text)
            .map(|text| {
                text.split(',')
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let mut branches: Vec<BranchDescriptor> = if values.is_empty() {
            // Unconfigured: still expose a usable default pair.
            vec![BranchDescriptor::new("branch_1", "Branch 1", "First value")]
        } else {
            values
                .iter()
                .enumerate()
                .map(|(i, value)| {
                    BranchDescriptor::new(
                        format!("branch_{}", i + 1),
                        *value,
                        format!("Attribute equals \"{value}\""),
                    )
                })
                .collect()
        };

        branches.push(BranchDescriptor::new("other", "Other", "No value matched"));
        branches
    }
}
