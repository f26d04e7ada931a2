// SPDX-License-Identifier: MIT OR Apache-2.0
//! The editor context object tying graph, plugins, and history together.

use crate::commands::{AddNode, Command, CommandError};
use crate::history::{CommandManager, HistoryError, HistoryState, ListenerToken};
use flowforge_graph::{Graph, NodeId};
use flowforge_plugins::PluginRegistry;
use indexmap::IndexMap;
use std::time::{Duration, Instant};

/// How long a freshly placed node keeps its highlight
const HIGHLIGHT_DURATION: Duration = Duration::from_millis(1500);

/// One editing session: the workflow graph, the plugin registry, and
/// linear undo/redo history
///
/// Explicitly constructed and passed by reference; independent editor
/// instances never share state.
#[derive(Debug)]
pub struct WorkflowEditor {
    /// The workflow being edited
    graph: Graph,
    /// Node type plugins
    registry: PluginRegistry,
    /// Undo/redo history
    history: CommandManager,
    /// Transient "just added" highlights, keyed by node
    recently_added: IndexMap<NodeId, Instant>,
}

impl WorkflowEditor {
    /// Create an editor over an empty graph
    pub fn new(registry: PluginRegistry) -> Self {
        Self::with_graph(registry, Graph::new())
    }

    /// Create an editor over an existing graph (e.g. a loaded document)
    pub fn with_graph(registry: PluginRegistry, graph: Graph) -> Self {
        Self {
            graph,
            registry,
            history: CommandManager::new(),
            recently_added: IndexMap::new(),
        }
    }

    /// Read access to the graph; mutations go through commands
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The plugin registry
    pub fn registry(&self) -> &PluginRegistry {
        &self.registry
    }

    /// Execute a command against the graph and record it in history
    pub fn execute(&mut self, cmd: Box<dyn Command>) -> Result<(), CommandError> {
        self.history.execute(cmd, &mut self.graph, &self.registry)
    }

    /// Undo the most recent command
    pub fn undo(&mut self) -> Result<(), HistoryError> {
        self.history.undo(&mut self.graph, &self.registry)
    }

    /// Redo the most recently undone command
    pub fn redo(&mut self) -> Result<(), HistoryError> {
        self.history.redo(&mut self.graph, &self.registry)
    }

    /// Current undo/redo availability
    pub fn history_state(&self) -> HistoryState {
        self.history.state()
    }

    /// Register a history listener
    pub fn add_history_listener(
        &mut self,
        listener: Box<dyn Fn(HistoryState)>,
    ) -> ListenerToken {
        self.history.add_listener(listener)
    }

    /// Remove a history listener
    pub fn remove_history_listener(&mut self, token: ListenerToken) -> bool {
        self.history.remove_listener(token)
    }

    /// Create a node of the given type at a position and add it via a
    /// command, marking it for the transient highlight
    pub fn add_node(
        &mut self,
        type_id: &str,
        position: [f32; 2],
        now: Instant,
    ) -> Result<NodeId, CommandError> {
        let node = self
            .registry
            .create_node(type_id)
            .ok_or_else(|| CommandError::UnknownNodeType(type_id.to_string()))?
            .with_position(position[0], position[1]);
        let id = node.id;

        self.execute(Box::new(AddNode::new(node)))?;
        self.recently_added.insert(id, now);
        Ok(id)
    }

    /// Whether a node still carries the "just added" highlight
    pub fn is_recently_added(&self, id: NodeId) -> bool {
        self.recently_added.contains_key(&id)
    }

    /// Expire stale highlights
    ///
    /// A highlight whose node has been deleted in the meantime is
    /// dropped silently; expiry never assumes the node still exists.
    pub fn tick(&mut self, now: Instant) {
        let graph = &self.graph;
        self.recently_added.retain(|id, added| {
            graph.node(*id).is_some() && now.duration_since(*added) < HIGHLIGHT_DURATION
        });
    }
}
