// SPDX-License-Identifier: MIT OR Apache-2.0
//! Mutation engine for the Flowforge editor.
//!
//! Every change to the workflow graph goes through an invertible
//! [`Command`] executed by the [`CommandManager`], which owns linear
//! undo/redo history and notifies listeners of history state changes.
//!
//! The crate also provides:
//! - [`WorkflowEditor`], the explicitly constructed context object tying
//!   graph, plugin registry, and history together
//! - [`PropertyDraft`], batched Apply/Cancel property staging with
//!   debounced validation
//! - [`WorkflowDocument`], the flat persisted shape of a workflow

pub mod commands;
pub mod debounce;
pub mod document;
pub mod draft;
pub mod editor;
pub mod history;

pub use commands::{
    AddNode, Command, CommandError, ConnectNodes, DeleteNode, DisconnectNodes, MoveNode,
    UpdateNode,
};
pub use debounce::Debouncer;
pub use document::{DocumentError, WorkflowDocument};
pub use draft::{DraftError, PropertyDraft};
pub use editor::WorkflowEditor;
pub use history::{CommandManager, HistoryError, HistoryState, ListenerToken};
