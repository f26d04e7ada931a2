// SPDX-License-Identifier: MIT OR Apache-2.0
//! Invertible editor commands.
//!
//! Each command captures exactly the state it needs to reverse itself
//! losslessly. `execute` and `undo` validate their preconditions before
//! mutating anything: a failing call leaves the graph untouched.

use flowforge_graph::{
    Connection, ConnectionKind, Graph, GraphError, Node, NodeId, PropertyValue,
};
use flowforge_plugins::PluginRegistry;
use indexmap::IndexMap;

/// Error from command execution or reversal
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommandError {
    /// Structural graph violation
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// The node's type has no registered plugin
    #[error("Unknown node type: {0}")]
    UnknownNodeType(String),

    /// Branch label not currently produced by the source node's plugin
    #[error("Invalid branch label {label:?} on {node:?}")]
    InvalidBranch {
        /// The branch source node
        node: NodeId,
        /// The offending label
        label: String,
    },

    /// A captured-state precondition no longer holds
    #[error("Command precondition failed: {0}")]
    Precondition(String),
}

/// A single invertible graph edit
///
/// Commands are executed through the
/// [`CommandManager`](crate::history::CommandManager), whose stack
/// discipline guarantees `execute` and `undo` alternate.
pub trait Command {
    /// Human-readable description (for undo menus)
    fn description(&self) -> &str;

    /// Apply the edit
    fn execute(&mut self, graph: &mut Graph, registry: &PluginRegistry)
        -> Result<(), CommandError>;

    /// Reverse the edit
    fn undo(&mut self, graph: &mut Graph, registry: &PluginRegistry) -> Result<(), CommandError>;
}

/// Check a branch label against the source node's plugin
///
/// The graph itself never consults plugins; the command layer is where
/// invalid branch labels are stopped.
fn check_branch_label(
    graph: &Graph,
    registry: &PluginRegistry,
    source: NodeId,
    kind: &ConnectionKind,
) -> Result<(), CommandError> {
    if matches!(kind, ConnectionKind::Default) {
        return Ok(());
    }
    let node = graph.node(source).ok_or(GraphError::NotFound(source))?;
    check_node_branch_label(registry, node, kind)
}

/// Variant of [`check_branch_label`] for a source node not yet inserted
fn check_node_branch_label(
    registry: &PluginRegistry,
    node: &Node,
    kind: &ConnectionKind,
) -> Result<(), CommandError> {
    let ConnectionKind::Branch { label } = kind else {
        return Ok(());
    };
    let plugin = registry
        .get(&node.node_type)
        .ok_or_else(|| CommandError::UnknownNodeType(node.node_type.clone()))?;

    if plugin.branches(&node.properties).iter().any(|b| b.id == *label) {
        Ok(())
    } else {
        Err(CommandError::InvalidBranch {
            node: node.id,
            label: label.clone(),
        })
    }
}

/// Command to insert a node, optionally wiring it to its neighbors
///
/// The new node can be attached as the target of an upstream edge, the
/// source of a downstream edge, or both at once (inserting it between
/// two existing nodes). Every edge the command creates is captured so
/// undo and redo stay lossless.
#[derive(Debug)]
pub struct AddNode {
    /// The node to insert (its ID is fixed across undo/redo)
    node: Node,
    /// Upstream attachment: connect `(source, kind)` to the new node
    upstream: Option<(NodeId, ConnectionKind)>,
    /// Downstream attachment: connect the new node's `kind` slot to a target
    downstream: Option<(NodeId, ConnectionKind)>,
    /// Connections created on first execute, preserved so redo restores
    /// identical connections
    attached: Vec<Connection>,
}

impl AddNode {
    /// Create a command inserting a free-standing node
    pub fn new(node: Node) -> Self {
        Self {
            node,
            upstream: None,
            downstream: None,
            attached: Vec::new(),
        }
    }

    /// Attach the new node as target of `source`'s given slot
    pub fn with_upstream(mut self, source: NodeId, kind: ConnectionKind) -> Self {
        self.upstream = Some((source, kind));
        self
    }

    /// Attach the new node as source, occupying its own given slot
    pub fn with_downstream(mut self, target: NodeId, kind: ConnectionKind) -> Self {
        self.downstream = Some((target, kind));
        self
    }

    /// The ID the inserted node carries
    pub fn node_id(&self) -> NodeId {
        self.node.id
    }
}

impl Command for AddNode {
    fn description(&self) -> &str {
        "Add Node"
    }

    fn execute(&mut self, graph: &mut Graph, registry: &PluginRegistry)
        -> Result<(), CommandError> {
        if graph.node(self.node.id).is_some() {
            return Err(GraphError::DuplicateId(self.node.id).into());
        }
        if let Some((source, kind)) = &self.upstream {
            if graph.node(*source).is_none() {
                return Err(GraphError::NotFound(*source).into());
            }
            check_branch_label(graph, registry, *source, kind)?;
            if graph.outgoing(*source).any(|c| c.kind == *kind) {
                return Err(GraphError::SlotOccupied {
                    source: *source,
                    kind: kind.clone(),
                }
                .into());
            }
        }
        if let Some((target, kind)) = &self.downstream {
            if graph.node(*target).is_none() {
                return Err(GraphError::NotFound(*target).into());
            }
            // The new node is not in the graph yet; check its branch
            // label against its own plugin directly. Its outgoing slots
            // are necessarily all free.
            check_node_branch_label(registry, &self.node, kind)?;
        }

        graph.add_node(self.node.clone())?;
        if self.attached.is_empty() {
            if let Some((source, kind)) = &self.upstream {
                let id = graph.connect(*source, self.node.id, kind.clone())?;
                self.attached.extend(graph.connection(id).cloned());
            }
            if let Some((target, kind)) = &self.downstream {
                let id = graph.connect(self.node.id, *target, kind.clone())?;
                self.attached.extend(graph.connection(id).cloned());
            }
        } else {
            // Redo path: restore the original connection identities.
            for conn in &self.attached {
                graph.restore_connection(conn.clone())?;
            }
        }
        Ok(())
    }

    fn undo(&mut self, graph: &mut Graph, _registry: &PluginRegistry)
        -> Result<(), CommandError> {
        // Removing the node severs the attachment connections with it.
        graph.remove_node(self.node.id)?;
        Ok(())
    }
}

/// Command to delete a node and every connection touching it
#[derive(Debug)]
pub struct DeleteNode {
    /// The node to remove
    id: NodeId,
    /// Full removed state captured on execute
    removed: Option<(Node, Vec<Connection>)>,
}

impl DeleteNode {
    /// Create a delete command
    pub fn new(id: NodeId) -> Self {
        Self { id, removed: None }
    }
}

impl Command for DeleteNode {
    fn description(&self) -> &str {
        "Delete Node"
    }

    fn execute(&mut self, graph: &mut Graph, _registry: &PluginRegistry)
        -> Result<(), CommandError> {
        let (node, severed) = graph.remove_node(self.id)?;
        self.removed = Some((node, severed));
        Ok(())
    }

    fn undo(&mut self, graph: &mut Graph, _registry: &PluginRegistry)
        -> Result<(), CommandError> {
        let Some((node, severed)) = &self.removed else {
            return Err(CommandError::Precondition(
                "delete was never executed".to_string(),
            ));
        };

        // Validate everything before touching the graph: the node slot
        // must be free and every severed connection must be restorable.
        if graph.node(node.id).is_some() {
            return Err(GraphError::DuplicateId(node.id).into());
        }
        for conn in severed {
            let other = if conn.source == node.id { conn.target } else { conn.source };
            if other != node.id && graph.node(other).is_none() {
                return Err(GraphError::NotFound(other).into());
            }
            if conn.source != node.id && graph.outgoing(conn.source).any(|c| c.kind == conn.kind) {
                return Err(GraphError::SlotOccupied {
                    source: conn.source,
                    kind: conn.kind.clone(),
                }
                .into());
            }
        }

        graph.add_node(node.clone())?;
        for conn in severed {
            graph.restore_connection(conn.clone())?;
        }
        Ok(())
    }
}

/// Command to move a node on the canvas
#[derive(Debug)]
pub struct MoveNode {
    /// The node to move
    id: NodeId,
    /// Destination position
    to: [f32; 2],
    /// Previous position, captured at first execute
    from: Option<[f32; 2]>,
}

impl MoveNode {
    /// Create a move command
    pub fn new(id: NodeId, to: [f32; 2]) -> Self {
        Self { id, to, from: None }
    }
}

impl Command for MoveNode {
    fn description(&self) -> &str {
        "Move Node"
    }

    fn execute(&mut self, graph: &mut Graph, _registry: &PluginRegistry)
        -> Result<(), CommandError> {
        let node = graph.node(self.id).ok_or(GraphError::NotFound(self.id))?;
        if self.from.is_none() {
            self.from = Some(node.position);
        }
        graph.set_position(self.id, self.to)?;
        Ok(())
    }

    fn undo(&mut self, graph: &mut Graph, _registry: &PluginRegistry)
        -> Result<(), CommandError> {
        let from = self
            .from
            .ok_or_else(|| CommandError::Precondition("move was never executed".to_string()))?;
        graph.set_position(self.id, from)?;
        Ok(())
    }
}

/// Command to merge a property patch into a node
///
/// If the patch changes the node's branch set, outgoing branch
/// connections whose labels no longer exist are auto-disconnected as
/// part of the same command and restored on undo.
#[derive(Debug)]
pub struct UpdateNode {
    /// The node to update
    id: NodeId,
    /// The property patch to merge
    patch: IndexMap<String, PropertyValue>,
    /// Prior values of exactly the patched keys (`None` = key was absent)
    previous: Option<Vec<(String, Option<PropertyValue>)>>,
    /// Branch connections orphaned by the patch
    orphaned: Vec<Connection>,
}

impl UpdateNode {
    /// Create an update command
    pub fn new(id: NodeId, patch: IndexMap<String, PropertyValue>) -> Self {
        Self {
            id,
            patch,
            previous: None,
            orphaned: Vec::new(),
        }
    }
}

impl Command for UpdateNode {
    fn description(&self) -> &str {
        "Edit Properties"
    }

    fn execute(&mut self, graph: &mut Graph, registry: &PluginRegistry)
        -> Result<(), CommandError> {
        let previous = graph.update_node(self.id, &self.patch)?;
        self.previous = Some(previous);
        self.orphaned.clear();

        // Auto-disconnect branch connections whose labels left the
        // plugin's branch set under the new properties.
        let node = graph.node(self.id).ok_or(GraphError::NotFound(self.id))?;
        if let Some(plugin) = registry.get(&node.node_type) {
            let valid: Vec<String> = plugin
                .branches(&node.properties)
                .into_iter()
                .map(|b| b.id)
                .collect();
            let stale: Vec<Connection> = graph
                .branch_outgoing(self.id)
                .filter(|c| c.kind.label().map_or(false, |l| !valid.iter().any(|v| v == l)))
                .cloned()
                .collect();
            for conn in stale {
                if let Some(removed) = graph.disconnect(conn.source, conn.target, &conn.kind) {
                    tracing::debug!(kind = ?removed.kind, "disconnected orphaned branch connection");
                    self.orphaned.push(removed);
                }
            }
        }
        Ok(())
    }

    fn undo(&mut self, graph: &mut Graph, _registry: &PluginRegistry)
        -> Result<(), CommandError> {
        let Some(previous) = &self.previous else {
            return Err(CommandError::Precondition(
                "update was never executed".to_string(),
            ));
        };
        let node = graph
            .node_mut(self.id)
            .ok_or(GraphError::NotFound(self.id))?;

        for (key, old) in previous {
            match old {
                Some(value) => {
                    node.properties.insert(key.clone(), value.clone());
                }
                None => {
                    node.properties.shift_remove(key);
                }
            }
        }
        for conn in &self.orphaned {
            graph.restore_connection(conn.clone())?;
        }
        Ok(())
    }
}

/// Command to connect two nodes
#[derive(Debug)]
pub struct ConnectNodes {
    /// Source node
    source: NodeId,
    /// Target node
    target: NodeId,
    /// Slot to occupy
    kind: ConnectionKind,
    /// The created connection, preserved across undo/redo
    connected: Option<Connection>,
}

impl ConnectNodes {
    /// Create a connect command
    pub fn new(source: NodeId, target: NodeId, kind: ConnectionKind) -> Self {
        Self {
            source,
            target,
            kind,
            connected: None,
        }
    }
}

impl Command for ConnectNodes {
    fn description(&self) -> &str {
        "Connect Nodes"
    }

    fn execute(&mut self, graph: &mut Graph, registry: &PluginRegistry)
        -> Result<(), CommandError> {
        if graph.node(self.source).is_none() {
            return Err(GraphError::NotFound(self.source).into());
        }
        check_branch_label(graph, registry, self.source, &self.kind)?;

        if let Some(conn) = &self.connected {
            graph.restore_connection(conn.clone())?;
        } else {
            let id = graph.connect(self.source, self.target, self.kind.clone())?;
            self.connected = graph.connection(id).cloned();
        }
        Ok(())
    }

    fn undo(&mut self, graph: &mut Graph, _registry: &PluginRegistry)
        -> Result<(), CommandError> {
        graph
            .disconnect(self.source, self.target, &self.kind)
            .ok_or_else(|| CommandError::Precondition("connection already gone".to_string()))?;
        Ok(())
    }
}

/// Command to remove a specific connection
#[derive(Debug)]
pub struct DisconnectNodes {
    /// Source node
    source: NodeId,
    /// Target node
    target: NodeId,
    /// Slot to vacate
    kind: ConnectionKind,
    /// The removed connection, captured for undo
    removed: Option<Connection>,
}

impl DisconnectNodes {
    /// Create a disconnect command
    pub fn new(source: NodeId, target: NodeId, kind: ConnectionKind) -> Self {
        Self {
            source,
            target,
            kind,
            removed: None,
        }
    }
}

impl Command for DisconnectNodes {
    fn description(&self) -> &str {
        "Disconnect Nodes"
    }

    fn execute(&mut self, graph: &mut Graph, _registry: &PluginRegistry)
        -> Result<(), CommandError> {
        let removed = graph
            .disconnect(self.source, self.target, &self.kind)
            .ok_or_else(|| CommandError::Precondition("no such connection".to_string()))?;
        self.removed = Some(removed);
        Ok(())
    }

    fn undo(&mut self, graph: &mut Graph, _registry: &PluginRegistry)
        -> Result<(), CommandError> {
        let Some(conn) = &self.removed else {
            return Err(CommandError::Precondition(
                "disconnect was never executed".to_string(),
            ));
        };
        graph.restore_connection(conn.clone())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowforge_plugins::create_default_registry;

    fn setup() -> (Graph, PluginRegistry) {
        (Graph::new(), create_default_registry())
    }

    fn add(graph: &mut Graph, registry: &PluginRegistry, type_id: &str) -> NodeId {
        let node = registry.create_node(type_id).unwrap();
        graph.add_node(node).unwrap()
    }

    #[test]
    fn test_add_node_round_trip() {
        let (mut graph, registry) = setup();
        let before = graph.clone();

        let node = registry.create_node("trigger").unwrap();
        let mut cmd = AddNode::new(node);
        cmd.execute(&mut graph, &registry).unwrap();
        assert_eq!(graph.node_count(), 1);

        cmd.undo(&mut graph, &registry).unwrap();
        assert_eq!(graph, before);
    }

    #[test]
    fn test_add_node_with_upstream() {
        let (mut graph, registry) = setup();
        let trigger = add(&mut graph, &registry, "trigger");

        let node = registry.create_node("action").unwrap();
        let id = node.id;
        let mut cmd = AddNode::new(node).with_upstream(trigger, ConnectionKind::Default);
        cmd.execute(&mut graph, &registry).unwrap();

        let conn = graph.all_connections().remove(0);
        assert_eq!((conn.source, conn.target), (trigger, id));

        // Undo removes both the node and its attachment; redo restores
        // the connection with its original identity.
        cmd.undo(&mut graph, &registry).unwrap();
        assert_eq!(graph.connection_count(), 0);
        cmd.execute(&mut graph, &registry).unwrap();
        assert_eq!(graph.all_connections().remove(0).id, conn.id);
    }

    #[test]
    fn test_add_node_with_downstream() {
        let (mut graph, registry) = setup();
        let action = add(&mut graph, &registry, "action");

        let node = registry.create_node("trigger").unwrap();
        let id = node.id;
        let mut cmd = AddNode::new(node).with_downstream(action, ConnectionKind::Default);
        cmd.execute(&mut graph, &registry).unwrap();

        let conn = graph.all_connections().remove(0);
        assert_eq!((conn.source, conn.target), (id, action));

        cmd.undo(&mut graph, &registry).unwrap();
        assert_eq!(graph.connection_count(), 0);
    }

    #[test]
    fn test_add_node_spliced_between_two_nodes() {
        let (mut graph, registry) = setup();
        let trigger = add(&mut graph, &registry, "trigger");
        let action = add(&mut graph, &registry, "action");
        let before = graph.clone();

        // Insert a wait step between the two: one upstream and one
        // downstream edge, both created by the same command.
        let node = registry.create_node("control").unwrap();
        let id = node.id;
        let mut cmd = AddNode::new(node)
            .with_upstream(trigger, ConnectionKind::Default)
            .with_downstream(action, ConnectionKind::Default);
        cmd.execute(&mut graph, &registry).unwrap();

        assert_eq!(graph.connection_count(), 2);
        let up = graph.outgoing(trigger).next().unwrap().clone();
        let down = graph.outgoing(id).next().unwrap().clone();
        assert_eq!(up.target, id);
        assert_eq!(down.target, action);

        // Undo removes the node and both edges; redo restores both with
        // their original identities.
        cmd.undo(&mut graph, &registry).unwrap();
        assert_eq!(graph, before);
        cmd.execute(&mut graph, &registry).unwrap();
        assert_eq!(graph.connection(up.id), Some(&up));
        assert_eq!(graph.connection(down.id), Some(&down));
    }

    #[test]
    fn test_add_node_upstream_invalid_branch_is_atomic() {
        let (mut graph, registry) = setup();
        let ifelse = add(&mut graph, &registry, "ifelse");

        let node = registry.create_node("action").unwrap();
        let mut cmd = AddNode::new(node).with_upstream(ifelse, ConnectionKind::branch("maybe"));
        let err = cmd.execute(&mut graph, &registry).unwrap_err();
        assert!(matches!(err, CommandError::InvalidBranch { .. }));
        // Nothing was inserted.
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.connection_count(), 0);
    }

    #[test]
    fn test_add_node_downstream_invalid_branch_is_atomic() {
        let (mut graph, registry) = setup();
        let action = add(&mut graph, &registry, "action");

        // The new ifelse node only produces "yes" and "no".
        let node = registry.create_node("ifelse").unwrap();
        let id = node.id;
        let mut cmd = AddNode::new(node).with_downstream(action, ConnectionKind::branch("maybe"));
        let err = cmd.execute(&mut graph, &registry).unwrap_err();
        assert_eq!(
            err,
            CommandError::InvalidBranch {
                node: id,
                label: "maybe".to_string()
            }
        );
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.connection_count(), 0);
    }

    #[test]
    fn test_delete_then_undo_restores_identical_edge() {
        let (mut graph, registry) = setup();
        let a = add(&mut graph, &registry, "trigger");
        let b = add(&mut graph, &registry, "action");
        graph.connect(a, b, ConnectionKind::Default).unwrap();
        let before = graph.clone();

        let mut cmd = DeleteNode::new(b);
        cmd.execute(&mut graph, &registry).unwrap();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.outgoing(a).count(), 0);

        cmd.undo(&mut graph, &registry).unwrap();
        assert_eq!(graph, before);
    }

    #[test]
    fn test_delete_missing_node_fails_cleanly() {
        let (mut graph, registry) = setup();
        let ghost = NodeId::new();
        let mut cmd = DeleteNode::new(ghost);
        assert!(cmd.execute(&mut graph, &registry).is_err());
        assert_eq!(graph, Graph::new());
    }

    #[test]
    fn test_move_node_round_trip() {
        let (mut graph, registry) = setup();
        let a = add(&mut graph, &registry, "trigger");
        graph.set_position(a, [5.0, 5.0]).unwrap();

        let mut cmd = MoveNode::new(a, [40.0, 80.0]);
        cmd.execute(&mut graph, &registry).unwrap();
        assert_eq!(graph.node(a).unwrap().position, [40.0, 80.0]);

        cmd.undo(&mut graph, &registry).unwrap();
        assert_eq!(graph.node(a).unwrap().position, [5.0, 5.0]);
    }

    #[test]
    fn test_update_node_round_trip() {
        let (mut graph, registry) = setup();
        let a = add(&mut graph, &registry, "action");
        let before = graph.clone();

        let mut patch = IndexMap::new();
        patch.insert("actionType".to_string(), PropertyValue::from("email"));
        patch.insert("extra".to_string(), PropertyValue::from("new-key"));
        let mut cmd = UpdateNode::new(a, patch);
        cmd.execute(&mut graph, &registry).unwrap();
        assert_eq!(
            graph.node(a).unwrap().property("actionType"),
            Some(&PropertyValue::from("email"))
        );

        // Undo restores replaced values and removes keys the patch added.
        cmd.undo(&mut graph, &registry).unwrap();
        assert_eq!(graph, before);
    }

    #[test]
    fn test_update_disconnects_orphaned_branches() {
        let (mut graph, registry) = setup();
        let split = add(&mut graph, &registry, "splitflow");
        let x = add(&mut graph, &registry, "action");
        let y = add(&mut graph, &registry, "action");

        let mut patch = IndexMap::new();
        patch.insert("values".to_string(), PropertyValue::from("Fred,Jane"));
        UpdateNode::new(split, patch)
            .execute(&mut graph, &registry)
            .unwrap();
        graph.connect(split, x, ConnectionKind::branch("branch_2")).unwrap();
        graph.connect(split, y, ConnectionKind::branch("other")).unwrap();
        let before = graph.clone();

        // Shrinking the value list to one entry orphans branch_2.
        let mut patch = IndexMap::new();
        patch.insert("values".to_string(), PropertyValue::from("Fred"));
        let mut cmd = UpdateNode::new(split, patch);
        cmd.execute(&mut graph, &registry).unwrap();

        let labels: Vec<String> = graph
            .branch_outgoing(split)
            .filter_map(|c| c.kind.label().map(String::from))
            .collect();
        assert_eq!(labels, ["other"]);

        cmd.undo(&mut graph, &registry).unwrap();
        assert_eq!(graph, before);
    }

    #[test]
    fn test_connect_rejects_invalid_branch_label() {
        let (mut graph, registry) = setup();
        let ifelse = add(&mut graph, &registry, "ifelse");
        let b = add(&mut graph, &registry, "action");
        let before = graph.clone();

        let mut cmd = ConnectNodes::new(ifelse, b, ConnectionKind::branch("maybe"));
        let err = cmd.execute(&mut graph, &registry).unwrap_err();
        assert_eq!(
            err,
            CommandError::InvalidBranch {
                node: ifelse,
                label: "maybe".to_string()
            }
        );
        assert_eq!(graph, before);

        let mut cmd = ConnectNodes::new(ifelse, b, ConnectionKind::branch("yes"));
        cmd.execute(&mut graph, &registry).unwrap();
        assert_eq!(graph.branch_outgoing(ifelse).count(), 1);
    }

    #[test]
    fn test_connect_occupied_slot_leaves_graph_unchanged() {
        let (mut graph, registry) = setup();
        let a = add(&mut graph, &registry, "trigger");
        let b = add(&mut graph, &registry, "action");
        let c = add(&mut graph, &registry, "action");

        ConnectNodes::new(a, b, ConnectionKind::Default)
            .execute(&mut graph, &registry)
            .unwrap();
        let before = graph.clone();

        let mut cmd = ConnectNodes::new(a, c, ConnectionKind::Default);
        assert!(matches!(
            cmd.execute(&mut graph, &registry),
            Err(CommandError::Graph(GraphError::SlotOccupied { .. }))
        ));
        assert_eq!(graph, before);
    }

    #[test]
    fn test_disconnect_round_trip() {
        let (mut graph, registry) = setup();
        let a = add(&mut graph, &registry, "trigger");
        let b = add(&mut graph, &registry, "action");
        graph.connect(a, b, ConnectionKind::Default).unwrap();
        let before = graph.clone();

        let mut cmd = DisconnectNodes::new(a, b, ConnectionKind::Default);
        cmd.execute(&mut graph, &registry).unwrap();
        assert_eq!(graph.connection_count(), 0);

        cmd.undo(&mut graph, &registry).unwrap();
        assert_eq!(graph, before);
    }

    #[test]
    fn test_disconnect_missing_fails() {
        let (mut graph, registry) = setup();
        let a = add(&mut graph, &registry, "trigger");
        let b = add(&mut graph, &registry, "action");
        let mut cmd = DisconnectNodes::new(a, b, ConnectionKind::Default);
        assert!(cmd.execute(&mut graph, &registry).is_err());
    }
}
