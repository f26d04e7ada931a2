// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node type plugins for the Flowforge editor.
//!
//! A plugin describes everything type-specific about a workflow node:
//! - The ordered property schema and groups driving the dynamic form
//! - Default property values for newly created nodes
//! - Validation rules, including cross-field dependency conditions
//! - The set of labeled outgoing branches as a pure function of the
//!   node's current properties
//!
//! Plugins are looked up through [`PluginRegistry`]; nothing outside the
//! registry switches on node type.

pub mod builtin;
pub mod plugin;
pub mod rules;
pub mod schema;
pub mod validation;

pub use builtin::create_default_registry;
pub use plugin::{NodeTypePlugin, PluginRegistry};
pub use rules::ValidationRule;
pub use schema::{
    BranchDescriptor, Dependency, DependencyCondition, FieldKind, PropertyField, PropertyGroup,
};
pub use validation::{validate_node, validate_property};
