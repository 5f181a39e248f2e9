//! Full-schedule retrieval tool.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use uniplan_core_types::EntityKind;
use uniplan_errors::Result;

use crate::context::ToolContext;
use crate::registry::{parse_args, ToolEntry, ToolHandler};

#[derive(Debug, Deserialize)]
struct ScheduleGetArgs {
    entity_type: EntityKind,
    entity_identifier: String,
}

struct ScheduleGet;

#[async_trait]
impl ToolHandler for ScheduleGet {
    async fn call(&self, ctx: &ToolContext, args: Value) -> Result<Value> {
        let args: ScheduleGetArgs = parse_args(args)?;
        ctx.engine
            .get_schedule(args.entity_type, &args.entity_identifier)
            .await
    }
}

pub(crate) fn entries() -> Vec<ToolEntry> {
    vec![ToolEntry::new(
        "schedule_get",
        "Returns the full schedule JSON for a group or an employee.",
        json!({
            "type": "object",
            "properties": {
                "entity_type": {
                    "type": "string",
                    "enum": ["group", "employee"],
                },
                "entity_identifier": {
                    "type": "string",
                    "description": "Group number (e.g. 221703) or employee name/url_id",
                },
            },
            "required": ["entity_type", "entity_identifier"],
        }),
        Arc::new(ScheduleGet),
    )]
}
