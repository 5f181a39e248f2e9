//! Route handlers, one module per resource.

pub mod auditories;
pub mod employees;
pub mod schedule;
pub mod structure;
pub mod system;
pub mod tools;
