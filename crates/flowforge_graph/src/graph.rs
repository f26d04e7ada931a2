// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graph data structure containing nodes and connections.

use crate::connection::{Connection, ConnectionId, ConnectionKind};
use crate::node::{Node, NodeId};
use crate::value::PropertyValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A workflow graph
///
/// All mutations either uphold the structural invariants (unique node
/// ids, valid endpoints, at most one connection per outgoing slot) or
/// fail without modifying the graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    /// Nodes in the graph
    nodes: IndexMap<NodeId, Node>,
    /// Connections between nodes
    connections: IndexMap<ConnectionId, Connection>,
}

impl Graph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to the graph
    ///
    /// Fails with [`GraphError::DuplicateId`] if a node with the same ID
    /// already exists.
    pub fn add_node(&mut self, node: Node) -> Result<NodeId, GraphError> {
        let id = node.id;
        if self.nodes.contains_key(&id) {
            return Err(GraphError::DuplicateId(id));
        }
        self.nodes.insert(id, node);
        Ok(id)
    }

    /// Remove a node and every connection touching it
    ///
    /// Returns the removed node together with the severed connections so
    /// callers can restore both losslessly.
    pub fn remove_node(&mut self, node_id: NodeId) -> Result<(Node, Vec<Connection>), GraphError> {
        let node = self
            .nodes
            .shift_remove(&node_id)
            .ok_or(GraphError::NotFound(node_id))?;

        let mut severed = Vec::new();
        self.connections.retain(|_, c| {
            if c.involves(node_id) {
                severed.push(c.clone());
                false
            } else {
                true
            }
        });

        Ok((node, severed))
    }

    /// Get a node by ID
    pub fn node(&self, node_id: NodeId) -> Option<&Node> {
        self.nodes.get(&node_id)
    }

    /// Get a mutable node by ID
    pub fn node_mut(&mut self, node_id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&node_id)
    }

    /// Get all nodes
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Get all node IDs
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Snapshot of all nodes
    ///
    /// Returns owned clones, so callers may iterate while mutating a
    /// separately held graph value.
    pub fn all_nodes(&self) -> Vec<Node> {
        self.nodes.values().cloned().collect()
    }

    /// Snapshot of all connections
    pub fn all_connections(&self) -> Vec<Connection> {
        self.connections.values().cloned().collect()
    }

    /// Add a connection between two nodes
    ///
    /// Fails with [`GraphError::NotFound`] if either endpoint is absent,
    /// or [`GraphError::SlotOccupied`] if the source's default slot (for
    /// default connections) or branch-label slot (for branch connections)
    /// is already taken. Existing occupants are never replaced implicitly;
    /// disconnect first.
    pub fn connect(
        &mut self,
        source: NodeId,
        target: NodeId,
        kind: ConnectionKind,
    ) -> Result<ConnectionId, GraphError> {
        if !self.nodes.contains_key(&source) {
            return Err(GraphError::NotFound(source));
        }
        if !self.nodes.contains_key(&target) {
            return Err(GraphError::NotFound(target));
        }
        if self.slot_occupied(source, &kind) {
            return Err(GraphError::SlotOccupied { source, kind });
        }

        let connection = Connection::new(source, target, kind);
        let id = connection.id;
        self.connections.insert(id, connection);
        Ok(id)
    }

    /// Re-insert a previously removed connection, preserving its ID
    ///
    /// Used by the undo path so restored connections keep their identity.
    /// Fails with [`GraphError::DuplicateConnectionId`] if the ID is
    /// already present; insertion never overwrites an existing connection.
    pub fn restore_connection(&mut self, connection: Connection) -> Result<ConnectionId, GraphError> {
        if self.connections.contains_key(&connection.id) {
            return Err(GraphError::DuplicateConnectionId(connection.id));
        }
        if !self.nodes.contains_key(&connection.source) {
            return Err(GraphError::NotFound(connection.source));
        }
        if !self.nodes.contains_key(&connection.target) {
            return Err(GraphError::NotFound(connection.target));
        }
        if self.slot_occupied(connection.source, &connection.kind) {
            return Err(GraphError::SlotOccupied {
                source: connection.source,
                kind: connection.kind,
            });
        }

        let id = connection.id;
        self.connections.insert(id, connection);
        Ok(id)
    }

    /// Remove a specific connection
    ///
    /// Idempotent: returns `None` when no such connection exists.
    pub fn disconnect(
        &mut self,
        source: NodeId,
        target: NodeId,
        kind: &ConnectionKind,
    ) -> Option<Connection> {
        let id = self
            .connections
            .values()
            .find(|c| c.source == source && c.target == target && c.kind == *kind)
            .map(|c| c.id)?;
        self.connections.shift_remove(&id)
    }

    /// Get a connection by ID
    pub fn connection(&self, connection_id: ConnectionId) -> Option<&Connection> {
        self.connections.get(&connection_id)
    }

    /// Get all connections
    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        self.connections.values()
    }

    /// Get the number of connections
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Get connections leaving a node
    pub fn outgoing(&self, node_id: NodeId) -> impl Iterator<Item = &Connection> {
        self.connections.values().filter(move |c| c.source == node_id)
    }

    /// Get branch connections leaving a node
    pub fn branch_outgoing(&self, node_id: NodeId) -> impl Iterator<Item = &Connection> {
        self.outgoing(node_id).filter(|c| c.is_branch())
    }

    /// Get connections arriving at a node
    pub fn incoming(&self, node_id: NodeId) -> impl Iterator<Item = &Connection> {
        self.connections.values().filter(move |c| c.target == node_id)
    }

    /// Shallow-merge a property patch into a node
    ///
    /// Returns the prior value of each patched key (`None` when the key
    /// was previously absent), in patch order, for lossless undo.
    pub fn update_node(
        &mut self,
        node_id: NodeId,
        patch: &IndexMap<String, PropertyValue>,
    ) -> Result<Vec<(String, Option<PropertyValue>)>, GraphError> {
        let node = self
            .nodes
            .get_mut(&node_id)
            .ok_or(GraphError::NotFound(node_id))?;

        let mut previous = Vec::with_capacity(patch.len());
        for (key, value) in patch {
            let old = node.properties.insert(key.clone(), value.clone());
            previous.push((key.clone(), old));
        }
        Ok(previous)
    }

    /// Set a node's position
    pub fn set_position(&mut self, node_id: NodeId, position: [f32; 2]) -> Result<(), GraphError> {
        let node = self
            .nodes
            .get_mut(&node_id)
            .ok_or(GraphError::NotFound(node_id))?;
        node.position = position;
        Ok(())
    }

    /// Record a node's measured visual height
    pub fn set_height(&mut self, node_id: NodeId, height: f32) -> Result<(), GraphError> {
        let node = self
            .nodes
            .get_mut(&node_id)
            .ok_or(GraphError::NotFound(node_id))?;
        node.height = height;
        Ok(())
    }

    fn slot_occupied(&self, source: NodeId, kind: &ConnectionKind) -> bool {
        self.connections
            .values()
            .any(|c| c.source == source && c.kind == *kind)
    }
}

/// Error from a graph mutation
// Display/Error are hand-written: thiserror would treat the spec-mandated
// `source` field of `SlotOccupied` as an error source, requiring
// `NodeId: std::error::Error`.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Referenced node is absent
    NotFound(NodeId),

    /// Node ID collision on insert
    DuplicateId(NodeId),

    /// Connection ID collision on restore
    DuplicateConnectionId(ConnectionId),

    /// The outgoing slot is already taken
    SlotOccupied {
        /// Source node whose slot is taken
        source: NodeId,
        /// The contested slot
        kind: ConnectionKind,
    },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "Node not found: {id:?}"),
            Self::DuplicateId(id) => write!(f, "Duplicate node ID: {id:?}"),
            Self::DuplicateConnectionId(id) => {
                write!(f, "Duplicate connection ID: {id:?}")
            }
            Self::SlotOccupied { source, kind } => {
                write!(f, "Outgoing slot already occupied on {source:?} ({kind:?})")
            }
        }
    }
}

impl std::error::Error for GraphError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_nodes(graph: &mut Graph) -> (NodeId, NodeId) {
        let a = graph.add_node(Node::new("trigger")).unwrap();
        let b = graph.add_node(Node::new("action")).unwrap();
        (a, b)
    }

    #[test]
    fn test_add_node_rejects_duplicate_id() {
        let mut graph = Graph::new();
        let node = Node::new("trigger");
        let dup = node.clone();
        graph.add_node(node).unwrap();
        assert_eq!(graph.add_node(dup.clone()), Err(GraphError::DuplicateId(dup.id)));
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_remove_node_severs_connections() {
        let mut graph = Graph::new();
        let (a, b) = two_nodes(&mut graph);
        let c = graph.add_node(Node::new("action")).unwrap();
        graph.connect(a, b, ConnectionKind::Default).unwrap();
        graph.connect(b, c, ConnectionKind::Default).unwrap();

        let (node, severed) = graph.remove_node(b).unwrap();
        assert_eq!(node.id, b);
        assert_eq!(severed.len(), 2);
        assert_eq!(graph.connection_count(), 0);
        assert!(graph.node(b).is_none());
    }

    #[test]
    fn test_remove_missing_node() {
        let mut graph = Graph::new();
        let ghost = NodeId::new();
        assert_eq!(graph.remove_node(ghost).unwrap_err(), GraphError::NotFound(ghost));
    }

    #[test]
    fn test_connect_requires_both_endpoints() {
        let mut graph = Graph::new();
        let a = graph.add_node(Node::new("trigger")).unwrap();
        let ghost = NodeId::new();
        assert_eq!(
            graph.connect(a, ghost, ConnectionKind::Default).unwrap_err(),
            GraphError::NotFound(ghost)
        );
        assert_eq!(graph.connection_count(), 0);
    }

    #[test]
    fn test_default_slot_occupied() {
        let mut graph = Graph::new();
        let (a, b) = two_nodes(&mut graph);
        let c = graph.add_node(Node::new("action")).unwrap();
        graph.connect(a, b, ConnectionKind::Default).unwrap();

        let err = graph.connect(a, c, ConnectionKind::Default).unwrap_err();
        assert!(matches!(err, GraphError::SlotOccupied { source, .. } if source == a));
        // Graph unchanged: A -> B persists as the only connection.
        assert_eq!(graph.connection_count(), 1);
        let conn = graph.all_connections().remove(0);
        assert_eq!((conn.source, conn.target), (a, b));
    }

    #[test]
    fn test_branch_slots_keyed_by_label() {
        let mut graph = Graph::new();
        let (a, b) = two_nodes(&mut graph);
        let c = graph.add_node(Node::new("action")).unwrap();

        graph.connect(a, b, ConnectionKind::branch("yes")).unwrap();
        // Same label is rejected, a different label is fine.
        assert!(graph.connect(a, c, ConnectionKind::branch("yes")).is_err());
        graph.connect(a, c, ConnectionKind::branch("no")).unwrap();
        assert_eq!(graph.branch_outgoing(a).count(), 2);
    }

    #[test]
    fn test_disconnect_is_idempotent() {
        let mut graph = Graph::new();
        let (a, b) = two_nodes(&mut graph);
        graph.connect(a, b, ConnectionKind::Default).unwrap();

        assert!(graph.disconnect(a, b, &ConnectionKind::Default).is_some());
        assert!(graph.disconnect(a, b, &ConnectionKind::Default).is_none());
        assert_eq!(graph.connection_count(), 0);
    }

    #[test]
    fn test_restore_connection_keeps_id() {
        let mut graph = Graph::new();
        let (a, b) = two_nodes(&mut graph);
        graph.connect(a, b, ConnectionKind::Default).unwrap();
        let removed = graph.disconnect(a, b, &ConnectionKind::Default).unwrap();

        let id = graph.restore_connection(removed.clone()).unwrap();
        assert_eq!(id, removed.id);
        assert_eq!(graph.connection(id), Some(&removed));
    }

    #[test]
    fn test_restore_connection_rejects_present_id() {
        let mut graph = Graph::new();
        let (a, b) = two_nodes(&mut graph);
        graph.connect(a, b, ConnectionKind::Default).unwrap();
        let existing = graph.all_connections().remove(0);

        // Same ID on a different slot must not overwrite the original.
        let mut clash = existing.clone();
        clash.kind = ConnectionKind::branch("yes");
        assert_eq!(
            graph.restore_connection(clash).unwrap_err(),
            GraphError::DuplicateConnectionId(existing.id)
        );
        assert_eq!(graph.all_connections(), [existing]);
    }

    #[test]
    fn test_update_node_returns_previous_values() {
        let mut graph = Graph::new();
        let a = graph.add_node(Node::new("action")).unwrap();
        let mut first = IndexMap::new();
        first.insert("actionType".to_string(), PropertyValue::from("email"));
        graph.update_node(a, &first).unwrap();

        let mut patch = IndexMap::new();
        patch.insert("actionType".to_string(), PropertyValue::from("webhook"));
        patch.insert("webhookUrl".to_string(), PropertyValue::from("https://x"));
        let previous = graph.update_node(a, &patch).unwrap();

        assert_eq!(previous.len(), 2);
        assert_eq!(previous[0], ("actionType".to_string(), Some(PropertyValue::from("email"))));
        assert_eq!(previous[1], ("webhookUrl".to_string(), None));
        assert_eq!(graph.node(a).unwrap().property("actionType"), Some(&PropertyValue::from("webhook")));
    }

    #[test]
    fn test_snapshots_are_independent() {
        let mut graph = Graph::new();
        let (a, b) = two_nodes(&mut graph);
        graph.connect(a, b, ConnectionKind::Default).unwrap();

        let nodes = graph.all_nodes();
        let connections = graph.all_connections();
        graph.remove_node(a).unwrap();

        assert_eq!(nodes.len(), 2);
        assert_eq!(connections.len(), 1);
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_invariants_hold_after_mixed_sequence() {
        let mut graph = Graph::new();
        let (a, b) = two_nodes(&mut graph);
        let c = graph.add_node(Node::new("ifelse")).unwrap();
        graph.connect(a, c, ConnectionKind::Default).unwrap();
        graph.connect(c, b, ConnectionKind::branch("yes")).unwrap();
        graph.disconnect(a, c, &ConnectionKind::Default).unwrap();
        graph.connect(a, b, ConnectionKind::Default).unwrap();
        graph.remove_node(c).unwrap();

        // Endpoints all resolve, and each (source, kind) slot is unique.
        let mut slots = std::collections::HashSet::new();
        for conn in graph.connections() {
            assert!(graph.node(conn.source).is_some());
            assert!(graph.node(conn.target).is_some());
            assert!(slots.insert((conn.source, conn.kind.clone())));
        }
        assert_eq!(graph.connection_count(), 1);
    }
}
