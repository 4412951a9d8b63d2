//! # API crate — referential-integrity core for the developer/project service
//!
//! This crate is the transport-agnostic core of the service: every rule about
//! which mutations are allowed lives here, and the HTTP host in `server/` is a
//! thin adapter over it. Nothing in this crate knows about axum or JSON bodies;
//! operations take a [`sqlx::PgPool`] plus a payload and return domain results.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`associations`] | The many-to-many protocol linking projects to catalog technologies (add/remove with duplicate and not-found gates) |
//! | [`catalog`] | The fixed technology allow-list, its database lookup, and the startup seed |
//! | [`db`] | PostgreSQL connection pool and idempotent schema initialization |
//! | [`developers`] | Developer lifecycle operations and the one-to-one info record |
//! | [`error`] | The `NotFound` / `Conflict` / `Validation` / `Storage` taxonomy |
//! | [`guards`] | Read-only existence predicates run before every mutation |
//! | [`models`] | Row structs and request/response DTOs (camelCase on the wire) |
//! | [`projects`] | Project lifecycle operations |
//!
//! ## Control flow
//!
//! Every mutating operation opens a transaction, runs its guards on that
//! transaction, performs the mutation, and commits. Guards never mutate;
//! the schema's uniqueness constraints backstop any race between a guard and
//! its mutation, and constraint violations are remapped onto the same error
//! the guard would have produced.

pub mod associations;
pub mod catalog;
pub mod db;
pub mod developers;
pub mod error;
pub mod guards;
pub mod models;
pub mod projects;

pub use error::{Error, Result};
