// SPDX-License-Identifier: MIT OR Apache-2.0
//! Staged property edits with batched Apply/Cancel semantics.
//!
//! The properties form stages edits locally; the graph only sees them
//! when the user confirms, as a single `UpdateNode` command. Cancelled
//! drafts never reach the core.

use crate::commands::UpdateNode;
use crate::debounce::Debouncer;
use flowforge_graph::{Graph, NodeId, PropertyValue};
use flowforge_plugins::{validate_node, PluginRegistry};
use indexmap::IndexMap;
use std::time::{Duration, Instant};

/// Default settle time before staged edits are validated
const VALIDATION_DELAY: Duration = Duration::from_millis(300);

/// Error from confirming a draft
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DraftError {
    /// No staged edits to apply
    #[error("Nothing to apply")]
    Empty,

    /// The drafted node no longer exists
    #[error("Node was deleted while editing")]
    NodeMissing,

    /// Validation errors stand against the staged values
    #[error("{0} property value(s) failed validation")]
    Invalid(usize),
}

/// Uncommitted property edits for one node
#[derive(Debug)]
pub struct PropertyDraft {
    /// The node being edited
    node_id: NodeId,
    /// Staged values, not yet visible to the graph
    staged: IndexMap<String, PropertyValue>,
    /// Validation errors from the last completed pass
    errors: IndexMap<String, String>,
    /// Debounce for validation after rapid edits
    debounce: Debouncer,
}

impl PropertyDraft {
    /// Start a draft for a node
    pub fn new(node_id: NodeId) -> Self {
        Self::with_delay(node_id, VALIDATION_DELAY)
    }

    /// Start a draft with a custom validation settle time
    pub fn with_delay(node_id: NodeId, delay: Duration) -> Self {
        Self {
            node_id,
            staged: IndexMap::new(),
            errors: IndexMap::new(),
            debounce: Debouncer::new(delay),
        }
    }

    /// The node this draft edits
    pub fn node_id(&self) -> NodeId {
        self.node_id
    }

    /// Stage a value and re-arm the validation debounce
    pub fn set(&mut self, key: impl Into<String>, value: PropertyValue, now: Instant) {
        self.staged.insert(key.into(), value);
        self.debounce.arm(now);
    }

    /// Whether any edits are staged
    pub fn is_dirty(&self) -> bool {
        !self.staged.is_empty()
    }

    /// Errors from the last validation pass
    pub fn errors(&self) -> &IndexMap<String, String> {
        &self.errors
    }

    /// Run debounced validation if the settle deadline has passed
    ///
    /// Returns `true` when a validation pass actually ran. Safe no-op if
    /// the node has been deleted in the meantime.
    pub fn poll_validation(
        &mut self,
        graph: &Graph,
        registry: &PluginRegistry,
        now: Instant,
    ) -> bool {
        if !self.debounce.poll(now) {
            return false;
        }
        self.validate(graph, registry);
        true
    }

    /// Validate the staged values immediately
    pub fn validate(&mut self, graph: &Graph, registry: &PluginRegistry) {
        let Some(node) = graph.node(self.node_id) else {
            // Node deleted mid-edit; nothing sensible to report.
            self.errors.clear();
            return;
        };
        let mut preview = node.clone();
        for (key, value) in &self.staged {
            preview.properties.insert(key.clone(), value.clone());
        }
        self.errors = validate_node(registry, &preview);
    }

    /// Confirm the draft, producing a single `UpdateNode` command
    ///
    /// Validation runs on the settled values first; a draft with
    /// standing errors is refused.
    pub fn apply(mut self, graph: &Graph, registry: &PluginRegistry)
        -> Result<UpdateNode, DraftError> {
        if self.staged.is_empty() {
            return Err(DraftError::Empty);
        }
        if graph.node(self.node_id).is_none() {
            return Err(DraftError::NodeMissing);
        }
        self.validate(graph, registry);
        if !self.errors.is_empty() {
            return Err(DraftError::Invalid(self.errors.len()));
        }
        Ok(UpdateNode::new(self.node_id, self.staged))
    }

    /// Discard all staged edits; the core never sees them
    pub fn cancel(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Command;
    use flowforge_plugins::create_default_registry;

    fn setup() -> (Graph, PluginRegistry, NodeId) {
        let registry = create_default_registry();
        let mut graph = Graph::new();
        let node = registry.create_node("action").unwrap();
        let id = graph.add_node(node).unwrap();
        (graph, registry, id)
    }

    #[test]
    fn test_debounced_validation_waits_for_settle() {
        let (graph, registry, id) = setup();
        let start = Instant::now();
        let mut draft = PropertyDraft::with_delay(id, Duration::from_millis(100));

        draft.set("actionType", PropertyValue::from("email"), start);
        assert!(!draft.poll_validation(&graph, &registry, start + Duration::from_millis(50)));

        // A second edit resets the deadline.
        draft.set("emailSubject", PropertyValue::from(""), start + Duration::from_millis(50));
        assert!(!draft.poll_validation(&graph, &registry, start + Duration::from_millis(120)));
        assert!(draft.poll_validation(&graph, &registry, start + Duration::from_millis(150)));
        assert!(draft.errors().contains_key("emailSubject"));
    }

    #[test]
    fn test_apply_refused_while_invalid() {
        let (graph, registry, id) = setup();
        let mut draft = PropertyDraft::new(id);
        draft.set("actionType", PropertyValue::from("email"), Instant::now());

        // emailSubject stays empty, so the draft cannot be confirmed.
        let err = draft.apply(&graph, &registry).unwrap_err();
        assert!(matches!(err, DraftError::Invalid(_)));
    }

    #[test]
    fn test_apply_produces_update_command() {
        let (mut graph, registry, id) = setup();
        let mut draft = PropertyDraft::new(id);
        let now = Instant::now();
        draft.set("actionType", PropertyValue::from("email"), now);
        draft.set("emailSubject", PropertyValue::from("Hi"), now);
        draft.set("emailBody", PropertyValue::from("Hello"), now);

        let mut cmd = draft.apply(&graph, &registry).unwrap();
        cmd.execute(&mut graph, &registry).unwrap();
        assert_eq!(
            graph.node(id).unwrap().property("emailSubject"),
            Some(&PropertyValue::from("Hi"))
        );
    }

    #[test]
    fn test_empty_and_missing() {
        let (graph, registry, id) = setup();
        assert_eq!(
            PropertyDraft::new(id).apply(&graph, &registry).unwrap_err(),
            DraftError::Empty
        );

        let mut draft = PropertyDraft::new(NodeId::new());
        draft.set("actionType", PropertyValue::from("email"), Instant::now());
        assert_eq!(
            draft.apply(&graph, &registry).unwrap_err(),
            DraftError::NodeMissing
        );
    }

    #[test]
    fn test_validation_after_delete_is_safe() {
        let (mut graph, registry, id) = setup();
        let start = Instant::now();
        let mut draft = PropertyDraft::with_delay(id, Duration::from_millis(10));
        draft.set("actionType", PropertyValue::from("email"), start);

        graph.remove_node(id).unwrap();
        // The pending pass fires against a deleted node and bails out.
        assert!(draft.poll_validation(&graph, &registry, start + Duration::from_millis(20)));
        assert!(draft.errors().is_empty());
    }
}
