//! Shared application state.

use std::sync::Arc;

use uniplan_tools::{ToolContext, ToolRegistry};

/// State handed to every handler. The tool context already carries the
/// engine and the repositories; the registry is built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub ctx: ToolContext,
    pub registry: Arc<ToolRegistry>,
}

impl AppState {
    pub fn new(ctx: ToolContext, registry: Arc<ToolRegistry>) -> Self {
        Self { ctx, registry }
    }
}
