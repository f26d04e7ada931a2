// SPDX-License-Identifier: MIT OR Apache-2.0
//! The node type plugin contract and its registry.

use crate::rules::ValidationRule;
use crate::schema::{BranchDescriptor, PropertyField, PropertyGroup};
use flowforge_graph::{Node, PropertyValue};
use indexmap::IndexMap;

/// Per-node-type behavior: schema, defaults, validation, branches.
///
/// Branch computation must be a pure, deterministic function of the
/// property values passed in; no hidden state.
pub trait NodeTypePlugin {
    /// Unique type identifier (the node's `node_type` discriminant)
    fn type_id(&self) -> &str;

    /// Human-readable type name
    fn display_name(&self) -> &str;

    /// Ordered field descriptors for the properties form
    fn property_schema(&self) -> Vec<PropertyField>;

    /// Collapsible form sections; default is a single ungrouped form
    fn property_groups(&self) -> Vec<PropertyGroup> {
        Vec::new()
    }

    /// Fresh default property values for a newly created node
    ///
    /// Each call yields an independent value; the default derives it
    /// from the schema's field defaults.
    fn initial_properties(&self) -> IndexMap<String, PropertyValue> {
        self.property_schema()
            .into_iter()
            .map(|field| (field.id, field.default))
            .collect()
    }

    /// Validation rules keyed by property ID
    fn validation_rules(&self) -> IndexMap<String, Vec<ValidationRule>> {
        IndexMap::new()
    }

    /// The current ordered branch set for the given property values
    ///
    /// Empty for single-path node types.
    fn branches(&self, properties: &IndexMap<String, PropertyValue>) -> Vec<BranchDescriptor>;

    /// Whether the node currently fans out into more than one branch
    fn has_multiple_branches(&self, properties: &IndexMap<String, PropertyValue>) -> bool {
        self.branches(properties).len() > 1
    }
}

/// Registry of available node type plugins
///
/// The registry is the single dispatch point over node type; construct
/// one per editor instance and pass it by reference.
#[derive(Default)]
pub struct PluginRegistry {
    /// Registered plugins by type ID
    plugins: IndexMap<String, Box<dyn NodeTypePlugin>>,
}

impl PluginRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            plugins: IndexMap::new(),
        }
    }

    /// Register a plugin
    ///
    /// Re-registering an existing type ID overwrites the previous plugin.
    pub fn register(&mut self, plugin: Box<dyn NodeTypePlugin>) {
        let type_id = plugin.type_id().to_string();
        if self.plugins.insert(type_id.clone(), plugin).is_some() {
            tracing::warn!(type_id = %type_id, "re-registered node type plugin, previous entry replaced");
        }
    }

    /// Get a plugin by type ID
    pub fn get(&self, type_id: &str) -> Option<&dyn NodeTypePlugin> {
        self.plugins.get(type_id).map(Box::as_ref)
    }

    /// Get all registered plugins
    pub fn plugins(&self) -> impl Iterator<Item = &dyn NodeTypePlugin> {
        self.plugins.values().map(Box::as_ref)
    }

    /// Number of registered plugins
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Whether no plugins are registered
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Create a node of the given type with fresh default properties
    pub fn create_node(&self, type_id: &str) -> Option<Node> {
        let plugin = self.get(type_id)?;
        Some(Node::new(type_id).with_properties(plugin.initial_properties()))
    }
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("types", &self.plugins.keys().collect::<Vec<_>>())
            .finish()
    }
}
