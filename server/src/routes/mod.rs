//! Request handlers: thin adapters from HTTP onto the core operations.

pub mod developers;
pub mod projects;
