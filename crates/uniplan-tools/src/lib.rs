//! Agent tool surface.
//!
//! Exposes the service operations as callable tools for an agent-style
//! client. The registry is an explicit mapping from operation name to a
//! typed handler, built once at process start by [`build_registry`] and
//! passed by reference into the transport; there is no module-level
//! registry and no mutable global state.
//!
//! Argument schemas are hand-written and deliberately flat (no `anyOf`,
//! no nullable type unions): optional fields are simply absent from
//! `required`, which every tool-calling client understands.

pub mod context;
pub mod registry;
mod tools;

pub use context::ToolContext;
pub use registry::{build_registry, ToolDescriptor, ToolEntry, ToolHandler, ToolRegistry};
