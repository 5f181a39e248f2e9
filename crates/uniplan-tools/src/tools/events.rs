//! Per-lesson event tools: pointed questions that do not need the full
//! schedule document.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use uniplan_errors::Result;

use crate::context::ToolContext;
use crate::registry::{parse_args, to_result_value, ToolEntry, ToolHandler};

#[derive(Debug, Deserialize)]
struct SearchEventArgs {
    q: String,
    entity_name: String,
    #[serde(default)]
    week_number: Option<i32>,
}

struct SearchEvent;

#[async_trait]
impl ToolHandler for SearchEvent {
    async fn call(&self, ctx: &ToolContext, args: Value) -> Result<Value> {
        let args: SearchEventArgs = parse_args(args)?;
        let events = ctx
            .events
            .search_events(&args.q, &args.entity_name, args.week_number)
            .await?;
        to_result_value(&events)
    }
}

#[derive(Debug, Deserialize)]
struct OccupancyArgs {
    auditory_name: String,
    week_number: i32,
    day_of_week: i32,
    #[serde(default)]
    time: Option<String>,
}

struct OccupancyCheck;

#[async_trait]
impl ToolHandler for OccupancyCheck {
    async fn call(&self, ctx: &ToolContext, args: Value) -> Result<Value> {
        let args: OccupancyArgs = parse_args(args)?;
        let events = ctx
            .events
            .auditory_events(
                &args.auditory_name,
                args.week_number,
                args.day_of_week,
                args.time.as_deref(),
            )
            .await?;
        to_result_value(&events)
    }
}

#[derive(Debug, Deserialize)]
struct ScheduleDayArgs {
    entity_name: String,
    day_of_week: i32,
    week_number: i32,
}

struct ScheduleDay;

#[async_trait]
impl ToolHandler for ScheduleDay {
    async fn call(&self, ctx: &ToolContext, args: Value) -> Result<Value> {
        let args: ScheduleDayArgs = parse_args(args)?;
        let events = ctx
            .events
            .day_events(&args.entity_name, args.week_number, args.day_of_week)
            .await?;
        to_result_value(&events)
    }
}

fn default_global_limit() -> i64 {
    10
}

#[derive(Debug, Deserialize)]
struct GlobalSearchArgs {
    q: String,
    #[serde(default = "default_global_limit")]
    limit: i64,
}

struct GlobalSearch;

#[async_trait]
impl ToolHandler for GlobalSearch {
    async fn call(&self, ctx: &ToolContext, args: Value) -> Result<Value> {
        let args: GlobalSearchArgs = parse_args(args)?;
        let events = ctx.events.global_subject_search(&args.q, args.limit).await?;
        to_result_value(&events)
    }
}

pub(crate) fn entries() -> Vec<ToolEntry> {
    vec![
        ToolEntry::new(
            "schedule_search_event",
            "Finds specific lessons by subject name inside one group's or \
             teacher's schedule. Prefer this over the full schedule for \
             questions like 'when is maths?'.",
            json!({
                "type": "object",
                "properties": {
                    "q": {
                        "type": "string",
                        "description": "Subject name or a fragment of it",
                    },
                    "entity_name": {
                        "type": "string",
                        "description": "Group number (e.g. '221703') or teacher url_id (e.g. 'ivanov-i-i')",
                    },
                    "week_number": {
                        "type": "integer",
                        "description": "Academic week filter",
                    },
                },
                "required": ["q", "entity_name"],
            }),
            Arc::new(SearchEvent),
        ),
        ToolEntry::new(
            "auditories_occupancy_check",
            "Checks who occupies one specific auditorium: a single moment \
             when 'time' is given, the whole day otherwise.",
            json!({
                "type": "object",
                "properties": {
                    "auditory_name": {
                        "type": "string",
                        "description": "Auditorium name, e.g. '305-2'",
                    },
                    "week_number": { "type": "integer", "minimum": 1, "maximum": 4 },
                    "day_of_week": {
                        "type": "integer",
                        "description": "1 = Monday .. 7 = Sunday",
                    },
                    "time": { "type": "string", "pattern": "^\\d{2}:\\d{2}$" },
                },
                "required": ["auditory_name", "week_number", "day_of_week"],
            }),
            Arc::new(OccupancyCheck),
        ),
        ToolEntry::new(
            "schedule_get_day",
            "One entity's lessons for a single day. Prefer this over \
             schedule_get for 'what do I have on Wednesday?'.",
            json!({
                "type": "object",
                "properties": {
                    "entity_name": {
                        "type": "string",
                        "description": "Group number or teacher url_id",
                    },
                    "day_of_week": {
                        "type": "integer",
                        "description": "1 = Monday .. 7 = Sunday",
                    },
                    "week_number": { "type": "integer", "minimum": 1, "maximum": 4 },
                },
                "required": ["entity_name", "day_of_week", "week_number"],
            }),
            Arc::new(ScheduleDay),
        ),
        ToolEntry::new(
            "global_subject_search",
            "Searches all schedules by subject. Use only to find which \
             teachers or groups are linked to a subject.",
            json!({
                "type": "object",
                "properties": {
                    "q": { "type": "string", "description": "Subject name" },
                    "limit": { "type": "integer", "maximum": 50, "default": 10 },
                },
                "required": ["q"],
            }),
            Arc::new(GlobalSearch),
        ),
    ]
}
