//! # Developer lifecycle operations
//!
//! Create/read/update/delete for developers plus the one-to-one info record.
//! Each mutating operation runs its guard sequence and the mutation inside a
//! single transaction; the schema's unique constraints backstop the gap
//! between a guard and its mutation.

use sqlx::PgPool;

use crate::error::{Error, Result};
use crate::guards;
use crate::models::{
    Developer, DeveloperInfo, DeveloperInfoSummary, DeveloperPatch, DeveloperWithInfo,
    NewDeveloper, NewDeveloperInfo, PreferredOs,
};

/// Create a developer. Conflict if the email is already in use.
pub async fn create_developer(pool: &PgPool, payload: NewDeveloper) -> Result<Developer> {
    let mut tx = pool.begin().await?;

    if guards::email_in_use(&mut *tx, &payload.email).await? {
        return Err(Error::conflict("Email already in use."));
    }

    let developer: Developer =
        sqlx::query_as("INSERT INTO developers (name, email) VALUES ($1, $2) RETURNING *")
            .bind(&payload.name)
            .bind(&payload.email)
            .fetch_one(&mut *tx)
            .await?;

    tx.commit().await?;
    Ok(developer)
}

/// Read a developer joined with its optional info record.
pub async fn get_developer(pool: &PgPool, id: i32) -> Result<DeveloperWithInfo> {
    let row: Option<(i32, String, String, Option<chrono::NaiveDate>, Option<String>)> =
        sqlx::query_as(
            "SELECT d.id, d.name, d.email, di.developer_since, di.preferred_os
             FROM developers d
             LEFT JOIN developer_infos di ON di.developer_id = d.id
             WHERE d.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

    let Some((id, name, email, developer_since, preferred_os)) = row else {
        return Err(Error::not_found("Developer not found."));
    };

    let info = match (developer_since, preferred_os) {
        (Some(developer_since), Some(preferred_os)) => Some(DeveloperInfoSummary {
            developer_since,
            preferred_os,
        }),
        _ => None,
    };

    Ok(DeveloperWithInfo {
        id,
        name,
        email,
        info,
    })
}

/// Partial update. Not-found if the developer is missing; conflict if the new
/// email belongs to a different developer.
pub async fn update_developer(pool: &PgPool, id: i32, patch: DeveloperPatch) -> Result<Developer> {
    let mut tx = pool.begin().await?;

    if !guards::developer_exists(&mut *tx, id).await? {
        return Err(Error::not_found("Developer not found."));
    }
    if let Some(email) = patch.email.as_deref() {
        if guards::email_in_use_by_other(&mut *tx, email, id).await? {
            return Err(Error::conflict("Email already in use."));
        }
    }

    let developer: Developer = sqlx::query_as(
        "UPDATE developers
         SET name = COALESCE($1, name), email = COALESCE($2, email)
         WHERE id = $3
         RETURNING *",
    )
    .bind(patch.name)
    .bind(patch.email)
    .bind(id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(developer)
}

/// Delete a developer. Owned projects and the info record cascade at the
/// schema level.
pub async fn delete_developer(pool: &PgPool, id: i32) -> Result<()> {
    let mut tx = pool.begin().await?;

    if !guards::developer_exists(&mut *tx, id).await? {
        return Err(Error::not_found("Developer not found."));
    }

    sqlx::query("DELETE FROM developers WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(())
}

/// Write or replace the single info record keyed by `developer_id`.
///
/// The OS value is validated before any round trip; the info-exists guard
/// picks INSERT vs UPDATE and the `developer_id` unique constraint backstops
/// the race between the two.
pub async fn upsert_developer_info(
    pool: &PgPool,
    developer_id: i32,
    payload: NewDeveloperInfo,
) -> Result<DeveloperInfo> {
    let Some(os) = PreferredOs::parse(&payload.preferred_os) else {
        return Err(Error::validation("Invalid OS option.", &PreferredOs::OPTIONS));
    };

    let mut tx = pool.begin().await?;

    if !guards::developer_exists(&mut *tx, developer_id).await? {
        return Err(Error::not_found("Developer not found."));
    }

    let info: DeveloperInfo = if guards::developer_info_exists(&mut *tx, developer_id).await? {
        sqlx::query_as(
            "UPDATE developer_infos
             SET developer_since = $1, preferred_os = $2
             WHERE developer_id = $3
             RETURNING *",
        )
        .bind(payload.developer_since)
        .bind(os.as_str())
        .bind(developer_id)
        .fetch_one(&mut *tx)
        .await?
    } else {
        sqlx::query_as(
            "INSERT INTO developer_infos (developer_since, preferred_os, developer_id)
             VALUES ($1, $2, $3)
             RETURNING *",
        )
        .bind(payload.developer_since)
        .bind(os.as_str())
        .bind(developer_id)
        .fetch_one(&mut *tx)
        .await?
    };

    tx.commit().await?;
    Ok(info)
}
