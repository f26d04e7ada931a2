// SPDX-License-Identifier: MIT OR Apache-2.0
//! Built-in node type plugins.

mod action;
mod control;
mod ifelse;
mod splitflow;
mod trigger;

pub use action::ActionPlugin;
pub use control::ControlPlugin;
pub use ifelse::IfElsePlugin;
pub use splitflow::SplitFlowPlugin;
pub use trigger::TriggerPlugin;

use crate::plugin::PluginRegistry;

/// Create a registry with all built-in node types registered
pub fn create_default_registry() -> PluginRegistry {
    let mut registry = PluginRegistry::new();
    registry.register(Box::new(TriggerPlugin));
    registry.register(Box::new(ControlPlugin));
    registry.register(Box::new(ActionPlugin));
    registry.register(Box::new(IfElsePlugin));
    registry.register(Box::new(SplitFlowPlugin));
    registry
}
