//! Flattened per-lesson schedule events.
//!
//! Backs the agent tools that answer pointed questions ("when is maths?",
//! "who is in room 305-2 now?") without shipping the full schedule
//! document. Queries that surface results to a person join the employee
//! directory to build display names.

use chrono::NaiveTime;
use serde::Serialize;
use serde_json::Value;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uniplan_errors::Result;

use crate::errors::from_sqlx;
use crate::rooms::parse_check_time;
use crate::search::clamp_limit;

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleEvent {
    pub subject: String,
    pub subject_full: Option<String>,
    pub week_numbers: Vec<i32>,
    pub day_of_week: Option<i32>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub auditories: Vec<String>,
    pub entity_name: String,
    pub entity_type: String,
    /// Human-readable owner name: employee FIO when the directory join
    /// matched, the raw entity name (group number) otherwise.
    pub entity_display_name: Option<String>,
    pub teachers_display_names: Vec<String>,
    pub subgroup: Option<i32>,
}

#[derive(Debug, sqlx::FromRow)]
struct EventRow {
    subject: String,
    subject_full: Option<String>,
    week_numbers: Vec<i32>,
    day_of_week: Option<i32>,
    start_time: NaiveTime,
    end_time: NaiveTime,
    auditories: Vec<String>,
    entity_name: String,
    entity_type: String,
    related_employees: Option<Value>,
    subgroup: Option<i32>,
}

/// Event row plus the owner's directory names when the join matched.
#[derive(Debug, sqlx::FromRow)]
struct JoinedEventRow {
    #[sqlx(flatten)]
    event: EventRow,
    last_name: Option<String>,
    first_name: Option<String>,
    middle_name: Option<String>,
}

const EVENT_COLUMNS: &str = "e.subject, e.subject_full, e.week_numbers, e.day_of_week, \
     e.start_time, e.end_time, e.auditories, e.entity_name, e.entity_type, \
     e.related_employees, e.subgroup";

const JOINED_COLUMNS: &str = "e.subject, e.subject_full, e.week_numbers, e.day_of_week, \
     e.start_time, e.end_time, e.auditories, e.entity_name, e.entity_type, \
     e.related_employees, e.subgroup, emp.last_name, emp.first_name, emp.middle_name";

const EMPLOYEE_JOIN: &str = " LEFT JOIN employees emp \
     ON e.entity_type = 'employee' AND e.entity_name = emp.url_id";

/// Join the present name parts with spaces; the raw entity name is the
/// fallback when the directory had no row for the slug.
fn display_name(
    entity_name: &str,
    last_name: Option<&str>,
    first_name: Option<&str>,
    middle_name: Option<&str>,
) -> String {
    match last_name {
        Some(last) if !last.is_empty() => [Some(last), first_name, middle_name]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
        _ => entity_name.to_string(),
    }
}

/// Flatten the `related_employees` JSON array to display strings.
///
/// Expected element shape: `{"lastName", "firstName", "middleName",
/// "urlId", ...}`; elements with no name parts fall back to the url id,
/// nameless and idless elements are skipped.
fn teacher_display_names(related: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = related else {
        return Vec::new();
    };
    let mut names = Vec::new();
    for item in items {
        let Some(teacher) = item.as_object() else {
            continue;
        };
        let part = |key: &str| {
            teacher
                .get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
        };
        let name_parts: Vec<&str> = ["lastName", "firstName", "middleName"]
            .iter()
            .filter_map(|key| part(key))
            .collect();
        if !name_parts.is_empty() {
            names.push(name_parts.join(" "));
        } else if let Some(url_id) = part("urlId") {
            names.push(url_id.to_string());
        }
    }
    names
}

impl From<EventRow> for ScheduleEvent {
    fn from(row: EventRow) -> Self {
        let teachers_display_names = teacher_display_names(row.related_employees.as_ref());
        ScheduleEvent {
            subject: row.subject,
            subject_full: row.subject_full,
            week_numbers: row.week_numbers,
            day_of_week: row.day_of_week,
            start_time: row.start_time,
            end_time: row.end_time,
            auditories: row.auditories,
            entity_name: row.entity_name,
            entity_type: row.entity_type,
            entity_display_name: None,
            teachers_display_names,
            subgroup: row.subgroup,
        }
    }
}

impl From<JoinedEventRow> for ScheduleEvent {
    fn from(row: JoinedEventRow) -> Self {
        let name = display_name(
            &row.event.entity_name,
            row.last_name.as_deref(),
            row.first_name.as_deref(),
            row.middle_name.as_deref(),
        );
        let mut event = ScheduleEvent::from(row.event);
        event.entity_display_name = Some(name);
        event
    }
}

#[derive(Clone)]
pub struct EventsRepo {
    pool: PgPool,
}

impl EventsRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Subject search within one entity's schedule.
    pub async fn search_events(
        &self,
        subject_query: &str,
        entity_name: &str,
        week_number: Option<i32>,
    ) -> Result<Vec<ScheduleEvent>> {
        let pattern = format!("%{}%", subject_query.trim());
        let mut query: QueryBuilder<'_, Postgres> =
            QueryBuilder::new(format!("SELECT {JOINED_COLUMNS} FROM schedule_events e"));
        query.push(EMPLOYEE_JOIN);
        query.push(" WHERE e.entity_name = ").push_bind(entity_name);
        query.push(" AND (e.subject ILIKE ").push_bind(pattern.clone());
        query.push(" OR e.subject_full ILIKE ").push_bind(pattern);
        query.push(")");
        if let Some(week_number) = week_number {
            query.push(" AND ").push_bind(week_number);
            query.push(" = ANY(e.week_numbers)");
        }
        query.push(" ORDER BY e.day_of_week, e.start_time");

        let rows: Vec<JoinedEventRow> = query
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(from_sqlx("events_search"))?;
        Ok(rows.into_iter().map(ScheduleEvent::from).collect())
    }

    /// One entity's lessons for a single day of a single week.
    pub async fn day_events(
        &self,
        entity_name: &str,
        week_number: i32,
        day_of_week: i32,
    ) -> Result<Vec<ScheduleEvent>> {
        let sql = format!(
            "SELECT {EVENT_COLUMNS} FROM schedule_events e \
             WHERE e.entity_name = $1 AND e.day_of_week = $2 AND $3 = ANY(e.week_numbers) \
             ORDER BY e.start_time"
        );
        let rows: Vec<EventRow> = sqlx::query_as(&sql)
            .bind(entity_name)
            .bind(day_of_week)
            .bind(week_number)
            .fetch_all(&self.pool)
            .await
            .map_err(from_sqlx("events_day"))?;
        Ok(rows.into_iter().map(ScheduleEvent::from).collect())
    }

    /// Lessons held in one auditorium on a day, optionally narrowed to an
    /// `HH:MM` instant.
    pub async fn auditory_events(
        &self,
        auditory_name: &str,
        week_number: i32,
        day_of_week: i32,
        time: Option<&str>,
    ) -> Result<Vec<ScheduleEvent>> {
        let check_time = time.map(parse_check_time).transpose()?;

        let mut query: QueryBuilder<'_, Postgres> =
            QueryBuilder::new(format!("SELECT {EVENT_COLUMNS} FROM schedule_events e WHERE "));
        query.push_bind(auditory_name);
        query.push(" = ANY(e.auditories) AND ").push_bind(week_number);
        query.push(" = ANY(e.week_numbers) AND e.day_of_week = ");
        query.push_bind(day_of_week);
        if let Some(check_time) = check_time {
            query.push(" AND e.start_time <= ").push_bind(check_time);
            query.push(" AND e.end_time > ").push_bind(check_time);
        }
        query.push(" ORDER BY e.start_time");

        let rows: Vec<EventRow> = query
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(from_sqlx("events_auditory"))?;
        Ok(rows.into_iter().map(ScheduleEvent::from).collect())
    }

    /// Subject search across every schedule, capped at `limit` (clamped
    /// to [1, 50]).
    pub async fn global_subject_search(
        &self,
        subject_query: &str,
        limit: i64,
    ) -> Result<Vec<ScheduleEvent>> {
        let pattern = format!("%{}%", subject_query.trim());
        let sql = format!(
            "SELECT {JOINED_COLUMNS} FROM schedule_events e{EMPLOYEE_JOIN} \
             WHERE e.subject ILIKE $1 OR e.subject_full ILIKE $1 \
             LIMIT $2"
        );
        let rows: Vec<JoinedEventRow> = sqlx::query_as(&sql)
            .bind(&pattern)
            .bind(clamp_limit(limit, 50))
            .fetch_all(&self.pool)
            .await
            .map_err(from_sqlx("events_global_search"))?;
        Ok(rows.into_iter().map(ScheduleEvent::from).collect())
    }
}
