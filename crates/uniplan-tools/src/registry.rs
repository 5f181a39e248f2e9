//! Tool registry: name → typed handler.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use uniplan_errors::{invalid_input, ErrorKind, Result, UniError};

use crate::context::ToolContext;
use crate::tools;

/// A callable tool implementation.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    async fn call(&self, ctx: &ToolContext, args: Value) -> Result<Value>;
}

/// One registered tool.
pub struct ToolEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
    pub(crate) handler: Arc<dyn ToolHandler>,
}

impl std::fmt::Debug for ToolEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolEntry")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("input_schema", &self.input_schema)
            .finish_non_exhaustive()
    }
}

impl ToolEntry {
    pub fn new(
        name: &'static str,
        description: &'static str,
        input_schema: Value,
        handler: Arc<dyn ToolHandler>,
    ) -> Self {
        Self {
            name,
            description,
            input_schema,
            handler,
        }
    }
}

/// Listing form of a tool, as shown to the agent client.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

/// Immutable registry built at process start.
pub struct ToolRegistry {
    entries: BTreeMap<&'static str, ToolEntry>,
}

impl ToolRegistry {
    pub(crate) fn from_entries(entries: Vec<ToolEntry>) -> Self {
        let mut map = BTreeMap::new();
        for entry in entries {
            let replaced = map.insert(entry.name, entry);
            debug_assert!(replaced.is_none(), "duplicate tool name");
        }
        Self { entries: map }
    }

    /// Tool descriptors in name order.
    pub fn list(&self) -> Vec<ToolDescriptor> {
        self.entries
            .values()
            .map(|entry| ToolDescriptor {
                name: entry.name,
                description: entry.description,
                input_schema: entry.input_schema.clone(),
            })
            .collect()
    }

    /// Look up a tool by name.
    pub fn lookup(&self, name: &str) -> Result<&ToolEntry> {
        self.entries.get(name).ok_or_else(|| {
            UniError::new(ErrorKind::NotFound)
                .with_op("tool_lookup")
                .with_message(format!("unknown tool: {name}"))
        })
    }

    /// Invoke a tool with raw JSON arguments.
    pub async fn call(&self, name: &str, args: Value, ctx: &ToolContext) -> Result<Value> {
        let entry = self.lookup(name)?;
        tracing::debug!(tool = name, "tool invocation");
        entry.handler.call(ctx, args).await
    }
}

/// Build the full registry. Called once at startup; the result is shared
/// by reference.
pub fn build_registry() -> ToolRegistry {
    let mut entries = Vec::new();
    entries.extend(tools::schedule::entries());
    entries.extend(tools::employees::entries());
    entries.extend(tools::structure::entries());
    entries.extend(tools::auditories::entries());
    entries.extend(tools::events::entries());
    entries.extend(tools::system::entries());
    ToolRegistry::from_entries(entries)
}

/// Deserialize tool arguments into their typed form.
pub(crate) fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T> {
    serde_json::from_value(args).map_err(|err| invalid_input(format!("invalid arguments: {err}")))
}

/// Serialize a handler result back to JSON.
pub(crate) fn to_result_value<T: serde::Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|err| uniplan_errors::serialization("tool_result", err))
}
