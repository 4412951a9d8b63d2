//! Existence guards: read-only predicates checked before every mutation.
//!
//! Each guard is a single point lookup. Guards never mutate and never produce
//! a domain error themselves; the calling operation translates a negative
//! result into `NotFound` and a positive duplicate check into `Conflict`.
//! They are generic over [`PgExecutor`] so an operation can run them on the
//! same transaction that performs its mutation.

use sqlx::PgExecutor;

/// Whether a developer with this id exists.
pub async fn developer_exists<'e>(executor: impl PgExecutor<'e>, id: i32) -> sqlx::Result<bool> {
    let row: Option<(i32,)> = sqlx::query_as("SELECT id FROM developers WHERE id = $1")
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(row.is_some())
}

/// Whether a project with this id exists.
pub async fn project_exists<'e>(executor: impl PgExecutor<'e>, id: i32) -> sqlx::Result<bool> {
    let row: Option<(i32,)> = sqlx::query_as("SELECT id FROM projects WHERE id = $1")
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(row.is_some())
}

/// Whether any developer already uses this email.
pub async fn email_in_use<'e>(executor: impl PgExecutor<'e>, email: &str) -> sqlx::Result<bool> {
    let row: Option<(i32,)> = sqlx::query_as("SELECT id FROM developers WHERE email = $1")
        .bind(email)
        .fetch_optional(executor)
        .await?;
    Ok(row.is_some())
}

/// Whether a developer other than `id` already uses this email. Used by the
/// update path so a developer may keep their own address.
pub async fn email_in_use_by_other<'e>(
    executor: impl PgExecutor<'e>,
    email: &str,
    id: i32,
) -> sqlx::Result<bool> {
    let row: Option<(i32,)> =
        sqlx::query_as("SELECT id FROM developers WHERE email = $1 AND id <> $2")
            .bind(email)
            .bind(id)
            .fetch_optional(executor)
            .await?;
    Ok(row.is_some())
}

/// Whether this developer already has an info record.
pub async fn developer_info_exists<'e>(
    executor: impl PgExecutor<'e>,
    developer_id: i32,
) -> sqlx::Result<bool> {
    let row: Option<(i32,)> =
        sqlx::query_as("SELECT id FROM developer_infos WHERE developer_id = $1")
            .bind(developer_id)
            .fetch_optional(executor)
            .await?;
    Ok(row.is_some())
}

/// Whether this project/technology pair is already associated.
pub async fn association_exists<'e>(
    executor: impl PgExecutor<'e>,
    project_id: i32,
    technology_id: i32,
) -> sqlx::Result<bool> {
    let row: Option<(i32,)> = sqlx::query_as(
        "SELECT id FROM project_technologies WHERE project_id = $1 AND technology_id = $2",
    )
    .bind(project_id)
    .bind(technology_id)
    .fetch_optional(executor)
    .await?;
    Ok(row.is_some())
}
