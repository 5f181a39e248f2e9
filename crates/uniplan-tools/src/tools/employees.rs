//! Staff directory search tool.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use uniplan_errors::Result;

use crate::context::ToolContext;
use crate::registry::{parse_args, to_result_value, ToolEntry, ToolHandler};

fn default_limit() -> i64 {
    20
}

#[derive(Debug, Deserialize)]
struct EmployeesSearchArgs {
    q: String,
    #[serde(default = "default_limit")]
    limit: i64,
}

struct EmployeesSearch;

#[async_trait]
impl ToolHandler for EmployeesSearch {
    async fn call(&self, ctx: &ToolContext, args: Value) -> Result<Value> {
        let args: EmployeesSearchArgs = parse_args(args)?;
        let found = ctx.search.search(&args.q, args.limit).await?;
        to_result_value(&found)
    }
}

pub(crate) fn entries() -> Vec<ToolEntry> {
    vec![ToolEntry::new(
        "employees_search",
        "Searches employees (teachers) by name.",
        json!({
            "type": "object",
            "properties": {
                "q": { "type": "string", "minLength": 1 },
                "limit": { "type": "integer", "minimum": 1, "maximum": 100, "default": 20 },
            },
            "required": ["q"],
        }),
        Arc::new(EmployeesSearch),
    )]
}
