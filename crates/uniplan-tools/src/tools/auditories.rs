//! Free-auditorium tool.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use uniplan_errors::Result;

use crate::context::ToolContext;
use crate::registry::{parse_args, to_result_value, ToolEntry, ToolHandler};

#[derive(Debug, Deserialize)]
struct AuditoriesFreeArgs {
    day_of_week: String,
    week_number: i32,
    time: String,
    #[serde(default)]
    building_number: Option<i32>,
}

struct AuditoriesFree;

#[async_trait]
impl ToolHandler for AuditoriesFree {
    async fn call(&self, ctx: &ToolContext, args: Value) -> Result<Value> {
        let args: AuditoriesFreeArgs = parse_args(args)?;
        let rooms = ctx
            .rooms
            .free_rooms(
                &args.day_of_week,
                args.week_number,
                &args.time,
                args.building_number,
            )
            .await?;
        to_result_value(&rooms)
    }
}

pub(crate) fn entries() -> Vec<ToolEntry> {
    vec![ToolEntry::new(
        "auditories_free",
        "Returns auditories free at a specific moment.",
        json!({
            "type": "object",
            "properties": {
                "day_of_week": { "type": "string" },
                "week_number": { "type": "integer", "minimum": 1, "maximum": 4 },
                "time": { "type": "string", "pattern": "^\\d{2}:\\d{2}$" },
                "building_number": { "type": "integer", "minimum": 1 },
            },
            "required": ["day_of_week", "week_number", "time"],
        }),
        Arc::new(AuditoriesFree),
    )]
}
