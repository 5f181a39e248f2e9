//! Current-week tool.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use uniplan_errors::Result;

use crate::context::ToolContext;
use crate::registry::{ToolEntry, ToolHandler};

struct SystemCurrentWeek;

#[async_trait]
impl ToolHandler for SystemCurrentWeek {
    async fn call(&self, ctx: &ToolContext, _args: Value) -> Result<Value> {
        let week_number = ctx.week.get_current_week().await?;
        Ok(json!({ "week_number": week_number }))
    }
}

pub(crate) fn entries() -> Vec<ToolEntry> {
    vec![ToolEntry::new(
        "system_current_week",
        "Returns the current academic week number.",
        json!({ "type": "object", "properties": {} }),
        Arc::new(SystemCurrentWeek),
    )]
}
