// SPDX-License-Identifier: MIT OR Apache-2.0
//! Connection (edge) definitions for the workflow graph.

use crate::node::NodeId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectionId(pub Uuid);

impl ConnectionId {
    /// Create a new random connection ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

/// Which outgoing slot of the source node a connection occupies
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectionKind {
    /// The single unconditional "next step" slot
    Default,
    /// A conditional slot, addressed by branch label (e.g. "yes", "branch_2")
    Branch {
        /// Branch descriptor ID from the source node's plugin
        label: String,
    },
}

impl ConnectionKind {
    /// Create a branch kind from a label
    pub fn branch(label: impl Into<String>) -> Self {
        Self::Branch { label: label.into() }
    }

    /// The branch label, if this is a branch connection
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Default => None,
            Self::Branch { label } => Some(label),
        }
    }
}

/// A directed link between two nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// Unique connection ID
    pub id: ConnectionId,
    /// Source node ID
    pub source: NodeId,
    /// Target node ID
    pub target: NodeId,
    /// Slot occupied on the source node
    pub kind: ConnectionKind,
}

impl Connection {
    /// Create a new connection
    pub fn new(source: NodeId, target: NodeId, kind: ConnectionKind) -> Self {
        Self {
            id: ConnectionId::new(),
            source,
            target,
            kind,
        }
    }

    /// Check if this connection involves a specific node
    pub fn involves(&self, node_id: NodeId) -> bool {
        self.source == node_id || self.target == node_id
    }

    /// Whether this is a branch connection
    pub fn is_branch(&self) -> bool {
        matches!(self.kind, ConnectionKind::Branch { .. })
    }
}
