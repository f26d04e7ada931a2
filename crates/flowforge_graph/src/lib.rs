// SPDX-License-Identifier: MIT OR Apache-2.0
//! Workflow graph data model for the Flowforge editor.
//!
//! This crate is the canonical in-memory representation of a workflow:
//! typed step nodes, directed default/branch connections, and the
//! structural operations that keep the graph consistent.
//!
//! ## Architecture
//!
//! The model is pure data plus query/mutation operations:
//! - Nodes carry an open type discriminant and a property bag
//! - Connections occupy labeled outgoing slots (one default slot,
//!   one slot per branch label)
//! - Every mutation either upholds the structural invariants or
//!   fails without touching the graph

pub mod connection;
pub mod graph;
pub mod node;
pub mod value;

pub use connection::{Connection, ConnectionId, ConnectionKind};
pub use graph::{Graph, GraphError};
pub use node::{Node, NodeId};
pub use value::PropertyValue;
