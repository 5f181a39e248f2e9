//! Identifier resolution and cache-aside schedule retrieval.
//!
//! The engine orchestrates the collaborator ports declared in [`ports`]:
//! it builds the canonical cache key for an entity reference, attempts the
//! cache, falls back to resolution plus a temporal storage fetch,
//! repopulates the cache, and classifies failures into the three-way
//! taxonomy (not-found / ambiguous / unavailable).

pub mod ports;
pub mod resolver;
pub mod schedule;
pub mod week;

pub use ports::{EmployeeDirectory, KeyValueCache, SystemStateStore, TemporalDocumentStore};
pub use resolver::{resolve_employee, Resolution, FUZZY_CANDIDATE_LIMIT};
pub use schedule::ScheduleEngine;
pub use week::CurrentWeekService;
