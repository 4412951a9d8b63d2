//! Idempotent startup DDL.
//!
//! The uniqueness invariants live in the schema, not only in the guards:
//! `developers.email`, `developer_infos.developer_id`, and the composite
//! `(project_id, technology_id)` pair are all unique at this level, so a race
//! between two requests that both pass a guard still cannot corrupt data —
//! the violation comes back as a database error and is remapped to `Conflict`.
//!
//! Deletes cascade: removing a developer removes their info record and
//! projects, and removing a project removes its technology associations.

use sqlx::PgPool;

use crate::catalog;

const DDL: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS developers (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE
    )",
    "CREATE TABLE IF NOT EXISTS developer_infos (
        id SERIAL PRIMARY KEY,
        developer_since DATE NOT NULL,
        preferred_os TEXT NOT NULL CHECK (preferred_os IN ('Windows', 'Linux', 'MacOS')),
        developer_id INTEGER NOT NULL UNIQUE REFERENCES developers (id) ON DELETE CASCADE
    )",
    "CREATE TABLE IF NOT EXISTS projects (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT NOT NULL,
        estimated_time TEXT NOT NULL,
        repository TEXT NOT NULL,
        start_date DATE NOT NULL,
        end_date DATE,
        developer_id INTEGER NOT NULL REFERENCES developers (id) ON DELETE CASCADE
    )",
    "CREATE TABLE IF NOT EXISTS technologies (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL UNIQUE
    )",
    "CREATE TABLE IF NOT EXISTS project_technologies (
        id SERIAL PRIMARY KEY,
        added_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        project_id INTEGER NOT NULL REFERENCES projects (id) ON DELETE CASCADE,
        technology_id INTEGER NOT NULL REFERENCES technologies (id),
        UNIQUE (project_id, technology_id)
    )",
];

/// Create the tables if they don't exist and seed the technology catalog.
pub async fn init_schema(pool: &PgPool) -> sqlx::Result<()> {
    for statement in DDL {
        sqlx::query(statement).execute(pool).await?;
    }
    catalog::seed(pool).await?;
    tracing::debug!("database schema initialized");
    Ok(())
}
