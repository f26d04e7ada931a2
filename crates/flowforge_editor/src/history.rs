// SPDX-License-Identifier: MIT OR Apache-2.0
//! Undo/redo history for editor commands.
//!
//! History is strictly linear: executing a fresh command clears the
//! redo stack. The manager enforces execute/undo alternation by stack
//! discipline alone; commands themselves are not re-validated.

use crate::commands::{Command, CommandError};
use flowforge_graph::Graph;
use flowforge_plugins::PluginRegistry;
use indexmap::IndexMap;
use std::collections::VecDeque;

/// Maximum undo history depth
const MAX_HISTORY: usize = 100;

/// History errors
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    /// Nothing to undo
    #[error("Nothing to undo")]
    NothingToUndo,

    /// Nothing to redo
    #[error("Nothing to redo")]
    NothingToRedo,

    /// The command's execute/undo reported failure
    #[error("Command failed: {0}")]
    CommandFailed(#[from] CommandError),
}

/// Undo/redo availability, handed to listeners on every history change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryState {
    /// Whether an undo is available
    pub can_undo: bool,
    /// Whether a redo is available
    pub can_redo: bool,
}

/// Handle for removing a registered history listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerToken(u64);

type Listener = Box<dyn Fn(HistoryState)>;

/// Owner of the undo and redo stacks
///
/// Construct one per editor instance and pass it by reference; there is
/// deliberately no global singleton, so independent editors (and tests)
/// never share history.
pub struct CommandManager {
    /// Undo stack
    undo_stack: VecDeque<Box<dyn Command>>,
    /// Redo stack
    redo_stack: VecDeque<Box<dyn Command>>,
    /// Listeners notified after every successful execute/undo/redo
    listeners: IndexMap<ListenerToken, Listener>,
    /// Next listener token
    next_token: u64,
    /// Maximum history depth
    max_depth: usize,
}

impl CommandManager {
    /// Create a new manager with the default history depth
    pub fn new() -> Self {
        Self::with_max_depth(MAX_HISTORY)
    }

    /// Create with a custom maximum depth
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            listeners: IndexMap::new(),
            next_token: 1,
            max_depth,
        }
    }

    /// Execute a command and push it onto the undo stack
    ///
    /// A fresh edit invalidates any previously undone future, so the
    /// redo stack is cleared. On failure the command is discarded and
    /// both stacks are left untouched.
    pub fn execute(
        &mut self,
        mut cmd: Box<dyn Command>,
        graph: &mut Graph,
        registry: &PluginRegistry,
    ) -> Result<(), CommandError> {
        cmd.execute(graph, registry)?;
        tracing::debug!(command = cmd.description(), "executed");

        self.redo_stack.clear();
        self.undo_stack.push_back(cmd);
        while self.undo_stack.len() > self.max_depth {
            self.undo_stack.pop_front();
        }
        self.notify();
        Ok(())
    }

    /// Undo the most recent command
    ///
    /// On command failure the edit is presumed still applied: the
    /// command is pushed back onto the undo stack and listeners are not
    /// notified.
    pub fn undo(
        &mut self,
        graph: &mut Graph,
        registry: &PluginRegistry,
    ) -> Result<(), HistoryError> {
        let mut cmd = self
            .undo_stack
            .pop_back()
            .ok_or(HistoryError::NothingToUndo)?;

        if let Err(err) = cmd.undo(graph, registry) {
            self.undo_stack.push_back(cmd);
            return Err(err.into());
        }

        self.redo_stack.push_back(cmd);
        self.notify();
        Ok(())
    }

    /// Redo the most recently undone command
    pub fn redo(
        &mut self,
        graph: &mut Graph,
        registry: &PluginRegistry,
    ) -> Result<(), HistoryError> {
        let mut cmd = self
            .redo_stack
            .pop_back()
            .ok_or(HistoryError::NothingToRedo)?;

        if let Err(err) = cmd.execute(graph, registry) {
            self.redo_stack.push_back(cmd);
            return Err(err.into());
        }

        self.undo_stack.push_back(cmd);
        self.notify();
        Ok(())
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get undo stack depth
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get redo stack depth
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Get description of the next undo operation
    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack.back().map(|c| c.description())
    }

    /// Get description of the next redo operation
    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack.back().map(|c| c.description())
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.notify();
    }

    /// Register a listener invoked with the history state after every
    /// successful execute/undo/redo
    pub fn add_listener(&mut self, listener: Listener) -> ListenerToken {
        let token = ListenerToken(self.next_token);
        self.next_token += 1;
        self.listeners.insert(token, listener);
        token
    }

    /// Remove a previously registered listener
    pub fn remove_listener(&mut self, token: ListenerToken) -> bool {
        self.listeners.shift_remove(&token).is_some()
    }

    /// Current history state
    pub fn state(&self) -> HistoryState {
        HistoryState {
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }
    }

    fn notify(&self) {
        let state = self.state();
        for listener in self.listeners.values() {
            listener(state);
        }
    }
}

impl Default for CommandManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CommandManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandManager")
            .field("undo_depth", &self.undo_stack.len())
            .field("redo_depth", &self.redo_stack.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
