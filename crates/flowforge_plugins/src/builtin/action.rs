// SPDX-License-Identifier: MIT OR Apache-2.0
//! Action node: performs a side effect (email, notification, webhook).

use crate::plugin::NodeTypePlugin;
use crate::rules::ValidationRule;
use crate::schema::{BranchDescriptor, Dependency, FieldKind, PropertyField, PropertyGroup};
use flowforge_graph::PropertyValue;
use indexmap::IndexMap;

/// Executes one configured action when the workflow reaches it
pub struct ActionPlugin;

impl NodeTypePlugin for ActionPlugin {
    fn type_id(&self) -> &str {
        "action"
    }

    fn display_name(&self) -> &str {
        "Action"
    }

    fn property_schema(&self) -> Vec<PropertyField> {
        vec![
            PropertyField::new(
                "actionType",
                "Action",
                FieldKind::Select {
                    options: vec![
                        "notification".to_string(),
                        "email".to_string(),
                        "webhook".to_string(),
                    ],
                },
                PropertyValue::from("notification"),
            )
            .required(),
            PropertyField::text("emailSubject", "Subject")
                .required()
                .with_dependency(Dependency::equals("actionType", "email")),
            PropertyField::new(
                "emailBody",
                "Body",
                FieldKind::TextArea,
                PropertyValue::Text(String::new()),
            )
            .required()
            .with_dependency(Dependency::equals("actionType", "email")),
            PropertyField::text("webhookUrl", "Webhook URL")
                .required()
                .with_dependency(Dependency::equals("actionType", "webhook")),
        ]
    }

    fn property_groups(&self) -> Vec<PropertyGroup> {
        vec![
            PropertyGroup::new(
                "general",
                "General",
                vec!["actionType".to_string()],
            ),
            PropertyGroup::new(
                "email",
                "Email",
                vec!["emailSubject".to_string(), "emailBody".to_string()],
            )
            .with_dependency(Dependency::equals("actionType", "email")),
            PropertyGroup::new("webhook", "Webhook", vec!["webhookUrl".to_string()])
                .with_dependency(Dependency::equals("actionType", "webhook")),
        ]
    }

    fn validation_rules(&self) -> IndexMap<String, Vec<ValidationRule>> {
        let mut rules = IndexMap::new();
        rules.insert(
            "emailSubject".to_string(),
            vec![ValidationRule::MaxLength(200)],
        );
        rules.insert(
            "webhookUrl".to_string(),
            vec![ValidationRule::Pattern("^https?://".to_string())],
        );
        rules
    }

    fn branches(&self, _properties: &IndexMap<String, PropertyValue>) -> Vec<BranchDescriptor> {
        Vec::new()
    }
}
