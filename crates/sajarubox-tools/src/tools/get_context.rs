//! Topic lookup.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::instrument;

use crate::{context::ToolContext, error::ToolResult, traits::Tool};

/// Arguments for `get_context`.
#[derive(Debug, Deserialize)]
pub struct GetContextInput {
    /// Topic key.
    pub topic: String,
}

/// Reads the file (or bundle of files) behind a topic key.
pub struct GetContext;

#[async_trait]
impl Tool for GetContext {
    type Input = GetContextInput;

    fn name(&self) -> &'static str {
        "get_context"
    }

    fn description(&self) -> &'static str {
        "Obtiene documentacion de SajaruBox por tema. Topics disponibles: schema, roles, rules, platforms, sprint, authentication, user-roles, memberships, members, admin-setup, membership-plans, membership-assignments, payments, inventory, classes, reports, ios-structure, ios-mvvm, ios-di, ios-navigation, ios-design-system, ios-sync, ios-firestore, ios-auth, ios-session, ios-new-module, ios-theming, ios-inventory, ios-classes, ios-reports, all-business, all-ios-arch, all-ios-impl"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "topic": {
                    "type": "string",
                    "description": "El tema a consultar (ver lista en la descripcion)"
                }
            },
            "required": ["topic"]
        })
    }

    #[instrument(skip(self, ctx), fields(op_id = %ctx.operation_id))]
    async fn execute(&self, ctx: &ToolContext, input: GetContextInput) -> ToolResult<String> {
        Ok(ctx.catalog.resolve_topic(&ctx.store, &input.topic)?)
    }
}
