// SPDX-License-Identifier: MIT OR Apache-2.0
//! Workflow document persistence.
//!
//! The persisted shape is exactly the graph's public data model: a flat
//! node list plus an edge list, serialized as RON. Loading rebuilds the
//! graph through its own mutation primitives so a corrupt document is
//! rejected before it ever reaches the editor.

use flowforge_graph::{Connection, ConnectionId, Graph, GraphError, Node, NodeId};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Error from loading a document
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Two node records share an ID
    #[error("Duplicate node in document: {0:?}")]
    DuplicateNode(NodeId),

    /// An edge references a node the document does not contain
    #[error("Edge references missing node: {0:?}")]
    DanglingEdge(NodeId),

    /// Two edge records share an ID
    #[error("Duplicate edge in document: {0:?}")]
    DuplicateEdge(ConnectionId),

    /// Two edges contest the same outgoing slot
    #[error("Conflicting edges for one outgoing slot on {0:?}")]
    SlotConflict(NodeId),
}

/// A serializable snapshot of one workflow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowDocument {
    /// Document format version
    pub version: u32,
    /// Workflow name
    pub name: String,
    /// Flat node records
    pub nodes: Vec<Node>,
    /// Edge list
    pub edges: Vec<Connection>,
}

impl WorkflowDocument {
    /// Current document format version
    pub const FORMAT_VERSION: u32 = 1;

    /// Snapshot a graph into a document
    pub fn from_graph(name: impl Into<String>, graph: &Graph) -> Self {
        Self {
            version: Self::FORMAT_VERSION,
            name: name.into(),
            nodes: graph.all_nodes(),
            edges: graph.all_connections(),
        }
    }

    /// Rebuild the graph through its own primitives
    ///
    /// Every structural invariant is re-checked; a document that cannot
    /// satisfy them is rejected wholesale.
    pub fn into_graph(self) -> Result<Graph, DocumentError> {
        let mut graph = Graph::new();
        for node in self.nodes {
            let id = node.id;
            graph.add_node(node).map_err(|_| DocumentError::DuplicateNode(id))?;
        }
        for edge in self.edges {
            let source = edge.source;
            graph.restore_connection(edge).map_err(|err| match err {
                GraphError::NotFound(id) => DocumentError::DanglingEdge(id),
                GraphError::DuplicateConnectionId(id) => DocumentError::DuplicateEdge(id),
                _ => DocumentError::SlotConflict(source),
            })?;
        }
        Ok(graph)
    }

    /// Serialize to RON format
    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }

    /// Deserialize from RON format
    pub fn from_ron(s: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(s)
    }

    /// Save the document to a file
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let ron_str = self
            .to_ron()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, ron_str)
    }

    /// Load a document from a file
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_ron(&contents)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }
}
