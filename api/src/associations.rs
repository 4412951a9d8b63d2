//! # Association manager
//!
//! The many-to-many protocol linking projects to catalog technologies.
//!
//! Both operations evaluate their gates strictly left-to-right; the first
//! failing gate determines the reported error and later gates are not
//! evaluated, so an invalid project never leaks catalog-membership details.
//! Gates and mutation share one transaction, and the composite unique
//! constraint on `(project_id, technology_id)` turns a lost race into the
//! same `Conflict` the duplicate gate reports.

use sqlx::PgPool;

use crate::catalog;
use crate::error::{Error, Result};
use crate::guards;
use crate::models::ProjectTechnologyLink;

/// Associate a catalog technology with a project.
///
/// Gate order: project exists → name in the allow-list → name resolves in the
/// catalog table → pair not already associated.
pub async fn add_technology(
    pool: &PgPool,
    project_id: i32,
    name: &str,
) -> Result<ProjectTechnologyLink> {
    let mut tx = pool.begin().await?;

    if !guards::project_exists(&mut *tx, project_id).await? {
        return Err(Error::not_found("Project not found."));
    }
    if !catalog::is_supported(name) {
        return Err(Error::validation("Technology not supported.", &catalog::TECHNOLOGIES));
    }
    let Some(technology) = catalog::find_by_name(&mut *tx, name).await? else {
        return Err(Error::not_found("Technology not found."));
    };
    if guards::association_exists(&mut *tx, project_id, technology.id).await? {
        return Err(Error::conflict(
            "This technology is already associated with the project.",
        ));
    }

    sqlx::query("INSERT INTO project_technologies (project_id, technology_id) VALUES ($1, $2)")
        .bind(project_id)
        .bind(technology.id)
        .execute(&mut *tx)
        .await?;

    let link: ProjectTechnologyLink = sqlx::query_as(
        "SELECT pt.project_id,
                p.name AS project_name,
                p.description AS project_description,
                p.estimated_time AS project_estimated_time,
                p.repository AS project_repository,
                pt.technology_id,
                t.name AS technology_name,
                pt.added_at
         FROM project_technologies pt
         JOIN projects p ON p.id = pt.project_id
         JOIN technologies t ON t.id = pt.technology_id
         WHERE pt.project_id = $1 AND pt.technology_id = $2",
    )
    .bind(project_id)
    .bind(technology.id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(link)
}

/// Remove a technology association from a project.
///
/// Gate order: project exists → name in the allow-list → name resolves in the
/// catalog table → pair currently associated.
pub async fn remove_technology(pool: &PgPool, project_id: i32, name: &str) -> Result<()> {
    let mut tx = pool.begin().await?;

    if !guards::project_exists(&mut *tx, project_id).await? {
        return Err(Error::not_found("Project not found."));
    }
    if !catalog::is_supported(name) {
        return Err(Error::validation("Technology not supported.", &catalog::TECHNOLOGIES));
    }
    let Some(technology) = catalog::find_by_name(&mut *tx, name).await? else {
        return Err(Error::not_found("Technology not found."));
    };
    if !guards::association_exists(&mut *tx, project_id, technology.id).await? {
        return Err(Error::invalid("Technology not related to the project."));
    }

    sqlx::query("DELETE FROM project_technologies WHERE project_id = $1 AND technology_id = $2")
        .bind(project_id)
        .bind(technology.id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(())
}
