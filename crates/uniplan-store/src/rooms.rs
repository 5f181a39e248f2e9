//! Free auditorium lookup.
//!
//! An auditorium is free at an instant when no occupancy row for that
//! (day, week) contains the instant in its [start, end) interval.

use chrono::NaiveTime;
use serde::Serialize;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uniplan_errors::{invalid_input, Result};

use crate::errors::from_sqlx;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct FreeRoom {
    pub name: String,
    pub capacity: Option<i32>,
    pub auditory_type: Option<String>,
}

/// Parse an `HH:MM` wall-clock instant.
pub(crate) fn parse_check_time(time: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| invalid_input("Invalid time format. Use HH:MM"))
}

#[derive(Clone)]
pub struct RoomsRepo {
    pool: PgPool,
}

impl RoomsRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn free_rooms(
        &self,
        day_of_week: &str,
        week_number: i32,
        time: &str,
        building_number: Option<i32>,
    ) -> Result<Vec<FreeRoom>> {
        let check_time = parse_check_time(time)?;

        let mut query: QueryBuilder<'_, Postgres> = QueryBuilder::new(
            "SELECT a.name, a.capacity, a.auditory_type FROM auditories a \
             WHERE NOT EXISTS (SELECT 1 FROM occupancy_index o \
                WHERE o.auditory_id = a.id AND o.day_of_week = ",
        );
        query.push_bind(day_of_week);
        query.push(" AND o.week_number = ").push_bind(week_number);
        query.push(" AND o.start_time <= ").push_bind(check_time);
        query.push(" AND o.end_time > ").push_bind(check_time);
        query.push(")");
        if let Some(building_number) = building_number {
            query
                .push(" AND a.building_number = ")
                .push_bind(building_number.to_string());
        }
        query.push(" ORDER BY a.name");

        query
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(from_sqlx("free_rooms"))
    }
}
