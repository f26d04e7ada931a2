// SPDX-License-Identifier: MIT OR Apache-2.0
//! Validation engine evaluating plugin rules against node properties.

use crate::plugin::PluginRegistry;
use crate::rules::ValidationRule;
use crate::schema::{dependencies_met, PropertyField};
use flowforge_graph::{Node, PropertyValue};
use indexmap::IndexMap;

/// Validate a single property value against its rules.
///
/// Structural rules run first in declaration order, then
/// dependency-conditional (`When`) rules. Only the first failure is
/// reported.
pub fn validate_property(
    field: &PropertyField,
    value: Option<&PropertyValue>,
    rules: &[ValidationRule],
    properties: &IndexMap<String, PropertyValue>,
) -> Option<String> {
    let structural = rules.iter().filter(|r| !r.is_conditional());
    let conditional = rules.iter().filter(|r| r.is_conditional());

    for rule in structural.chain(conditional) {
        if let Some(message) = rule.check(&field.label, value, properties) {
            return Some(message);
        }
    }
    None
}

/// Validate every property of a node against its plugin's schema and rules.
///
/// Fields whose schema dependencies are not currently satisfied are
/// skipped entirely: a conditionally hidden field never surfaces errors,
/// regardless of its value. Returns a map of property ID to the first
/// failing rule's message.
pub fn validate_node(registry: &PluginRegistry, node: &Node) -> IndexMap<String, String> {
    let mut errors = IndexMap::new();

    let Some(plugin) = registry.get(&node.node_type) else {
        tracing::warn!(node_type = %node.node_type, "validating node with unknown type");
        return errors;
    };

    let rules = plugin.validation_rules();
    for field in plugin.property_schema() {
        if !dependencies_met(&field.dependencies, &node.properties) {
            continue;
        }

        let mut field_rules = rules.get(&field.id).cloned().unwrap_or_default();
        if field.required && !field_rules.contains(&ValidationRule::Required) {
            field_rules.insert(0, ValidationRule::Required);
        }

        let value = node.properties.get(&field.id);
        if let Some(message) = validate_property(&field, value, &field_rules, &node.properties) {
            errors.insert(field.id.clone(), message);
        }
    }

    errors
}
