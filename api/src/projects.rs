//! # Project lifecycle operations
//!
//! Create/read/update/delete for projects. A project can only come into
//! existence under a verified owner, and an update that moves it to another
//! developer re-verifies the new owner first.

use sqlx::PgPool;

use crate::error::{Error, Result};
use crate::guards;
use crate::models::{NewProject, Project, ProjectPatch, ProjectWithTechnologies, TechnologyRef};

/// Create a project. Not-found unless the owning developer exists.
pub async fn create_project(pool: &PgPool, payload: NewProject) -> Result<ProjectWithTechnologies> {
    let mut tx = pool.begin().await?;

    if !guards::developer_exists(&mut *tx, payload.developer_id).await? {
        return Err(Error::not_found("Developer not found."));
    }

    let project: Project = sqlx::query_as(
        "INSERT INTO projects
             (name, description, estimated_time, repository, start_date, end_date, developer_id)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING *",
    )
    .bind(&payload.name)
    .bind(&payload.description)
    .bind(&payload.estimated_time)
    .bind(&payload.repository)
    .bind(payload.start_date)
    .bind(payload.end_date)
    .bind(payload.developer_id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(ProjectWithTechnologies {
        project,
        technologies: Vec::new(),
    })
}

/// Read a project with all associated technologies. Zero associations yields
/// an empty list.
pub async fn get_project(pool: &PgPool, id: i32) -> Result<ProjectWithTechnologies> {
    let project: Option<Project> = sqlx::query_as("SELECT * FROM projects WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    let Some(project) = project else {
        return Err(Error::not_found("Project not found."));
    };

    let technologies: Vec<TechnologyRef> = sqlx::query_as(
        "SELECT t.id AS technology_id, t.name AS technology_name
         FROM project_technologies pt
         JOIN technologies t ON t.id = pt.technology_id
         WHERE pt.project_id = $1
         ORDER BY pt.added_at",
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    Ok(ProjectWithTechnologies {
        project,
        technologies,
    })
}

/// Partial update. Not-found if the project is missing, or if the patch moves
/// it to a developer that does not exist.
pub async fn update_project(pool: &PgPool, id: i32, patch: ProjectPatch) -> Result<Project> {
    let mut tx = pool.begin().await?;

    if !guards::project_exists(&mut *tx, id).await? {
        return Err(Error::not_found("Project not found."));
    }
    if let Some(developer_id) = patch.developer_id {
        if !guards::developer_exists(&mut *tx, developer_id).await? {
            return Err(Error::not_found("Developer not found."));
        }
    }

    let project: Project = sqlx::query_as(
        "UPDATE projects
         SET name = COALESCE($1, name),
             description = COALESCE($2, description),
             estimated_time = COALESCE($3, estimated_time),
             repository = COALESCE($4, repository),
             start_date = COALESCE($5, start_date),
             end_date = COALESCE($6, end_date),
             developer_id = COALESCE($7, developer_id)
         WHERE id = $8
         RETURNING *",
    )
    .bind(patch.name)
    .bind(patch.description)
    .bind(patch.estimated_time)
    .bind(patch.repository)
    .bind(patch.start_date)
    .bind(patch.end_date)
    .bind(patch.developer_id)
    .bind(id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(project)
}

/// Delete a project. Its technology associations cascade at the schema level.
pub async fn delete_project(pool: &PgPool, id: i32) -> Result<()> {
    let mut tx = pool.begin().await?;

    if !guards::project_exists(&mut *tx, id).await? {
        return Err(Error::not_found("Project not found."));
    }

    sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(())
}
