//! Postgres access layer
//!
//! One repository struct per concern, each holding a clone of the shared
//! pool. Rows are mapped into explicit typed records at this boundary;
//! nothing above it sees untyped key-value maps. Driver failures are
//! classified as `Unavailable` here and nowhere else.

pub mod db;
pub mod errors;
pub mod events;
pub mod rooms;
pub mod rows;
pub mod schedule;
pub mod search;
pub mod structure;
pub mod system;

pub use db::connect;
pub use events::{EventsRepo, ScheduleEvent};
pub use rooms::{FreeRoom, RoomsRepo};
pub use schedule::ScheduleSnapshotRepo;
pub use search::EmployeeSearchRepo;
pub use structure::{
    Auditory, Department, Faculty, GroupInfo, Speciality, StructureRepo, StudentGroup,
};
pub use system::SystemStateRepo;
