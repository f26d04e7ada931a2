// SPDX-License-Identifier: MIT OR Apache-2.0
//! Control node: a wait/delay step.

use crate::plugin::NodeTypePlugin;
use crate::rules::ValidationRule;
use crate::schema::{BranchDescriptor, FieldKind, PropertyField};
use flowforge_graph::PropertyValue;
use indexmap::IndexMap;

/// Pauses the workflow for a configured number of seconds
pub struct ControlPlugin;

impl NodeTypePlugin for ControlPlugin {
    fn type_id(&self) -> &str {
        "control"
    }

    fn display_name(&self) -> &str {
        "Wait"
    }

    fn property_schema(&self) -> Vec<PropertyField> {
        vec![PropertyField::new(
            "waitSeconds",
            "Wait (seconds)",
            FieldKind::Number,
            PropertyValue::Number(60.0),
        )]
    }

    fn validation_rules(&self) -> IndexMap<String, Vec<ValidationRule>> {
        let mut rules = IndexMap::new();
        rules.insert(
            "waitSeconds".to_string(),
            vec![ValidationRule::Range {
                min: 0.0,
                max: 86_400.0,
            }],
        );
        rules
    }

    fn branches(&self, _properties: &IndexMap<String, PropertyValue>) -> Vec<BranchDescriptor> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_node;
    use crate::PluginRegistry;

    #[test]
    fn test_wait_range() {
        let mut registry = PluginRegistry::new();
        registry.register(Box::new(ControlPlugin));
        let mut node = registry.create_node("control").unwrap();

        assert!(validate_node(&registry, &node).is_empty());
        node.properties
            .insert("waitSeconds".to_string(), PropertyValue::Number(-5.0));
        assert!(validate_node(&registry, &node).contains_key("waitSeconds"));
    }
}
