//! Shared state handed to every tool invocation.

use std::sync::Arc;

use uniplan_engine::{CurrentWeekService, ScheduleEngine};
use uniplan_store::{EmployeeSearchRepo, EventsRepo, RoomsRepo, StructureRepo};

/// Everything a tool handler may need, wired once at startup.
#[derive(Clone)]
pub struct ToolContext {
    pub engine: Arc<ScheduleEngine>,
    pub week: Arc<CurrentWeekService>,
    pub search: EmployeeSearchRepo,
    pub structure: StructureRepo,
    pub rooms: RoomsRepo,
    pub events: EventsRepo,
}
