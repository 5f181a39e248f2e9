//! Tool implementations, one module per domain.

pub(crate) mod auditories;
pub(crate) mod employees;
pub(crate) mod events;
pub(crate) mod schedule;
pub(crate) mod structure;
pub(crate) mod system;
