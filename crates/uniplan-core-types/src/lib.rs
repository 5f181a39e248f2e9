//! Core types shared across uniplan facilities
//!
//! This crate provides the foundational types used by the error facility,
//! the retrieval engine, and the storage layer:
//!
//! - **Entity addressing**: EntityKind, DocumentLookup
//! - **Cache contract**: canonical key formats shared with the ETL writer
//! - **Directory records**: Employee (the ambiguity candidate shape)

pub mod employee;
pub mod entity;
pub mod keys;

pub use employee::Employee;
pub use entity::{DocumentLookup, EntityKind, UnknownEntityKind};
