// SPDX-License-Identifier: MIT OR Apache-2.0
//! Trigger node: the entry point of a workflow.

use crate::plugin::NodeTypePlugin;
use crate::rules::ValidationRule;
use crate::schema::{BranchDescriptor, Dependency, FieldKind, PropertyField};
use flowforge_graph::PropertyValue;
use indexmap::IndexMap;

/// Workflow entry point, fired manually, on a schedule, or by webhook
pub struct TriggerPlugin;

impl NodeTypePlugin for TriggerPlugin {
    fn type_id(&self) -> &str {
        "trigger"
    }

    fn display_name(&self) -> &str {
        "Trigger"
    }

    fn property_schema(&self) -> Vec<PropertyField> {
        vec![
            PropertyField::new(
                "triggerKind",
                "Trigger",
                FieldKind::Select {
                    options: vec![
                        "manual".to_string(),
                        "schedule".to_string(),
                        "webhook".to_string(),
                    ],
                },
                PropertyValue::from("manual"),
            )
            .required(),
            PropertyField::text("schedule", "Schedule")
                .required()
                .with_dependency(Dependency::equals("triggerKind", "schedule")),
        ]
    }

    fn validation_rules(&self) -> IndexMap<String, Vec<ValidationRule>> {
        let mut rules = IndexMap::new();
        rules.insert(
            "triggerKind".to_string(),
            vec![ValidationRule::OneOf(vec![
                "manual".to_string(),
                "schedule".to_string(),
                "webhook".to_string(),
            ])],
        );
        rules
    }

    fn branches(&self, _properties: &IndexMap<String, PropertyValue>) -> Vec<BranchDescriptor> {
        Vec::new()
    }
}
