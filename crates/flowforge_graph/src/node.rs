// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node definitions for the workflow graph.

use crate::value::PropertyValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub Uuid);

impl NodeId {
    /// Create a new random node ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// A step in the workflow graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique instance ID, immutable for the node's lifetime
    pub id: NodeId,
    /// Node type ID (e.g. "trigger", "action", "splitflow")
    pub node_type: String,
    /// Position on the canvas
    pub position: [f32; 2],
    /// Last measured visual height; advisory only
    pub height: f32,
    /// Property values, keyed by property ID
    pub properties: IndexMap<String, PropertyValue>,
}

impl Node {
    /// Create a new node of the given type with an empty property bag
    pub fn new(node_type: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(),
            node_type: node_type.into(),
            position: [0.0, 0.0],
            height: 0.0,
            properties: IndexMap::new(),
        }
    }

    /// Set the position
    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.position = [x, y];
        self
    }

    /// Set the initial property values
    pub fn with_properties(mut self, properties: IndexMap<String, PropertyValue>) -> Self {
        self.properties = properties;
        self
    }

    /// Get a property value by ID
    pub fn property(&self, id: &str) -> Option<&PropertyValue> {
        self.properties.get(id)
    }
}
