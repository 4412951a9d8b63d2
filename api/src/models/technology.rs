//! Technology models: the catalog row and the association views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Catalog record from the `technologies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Technology {
    pub id: i32,
    pub name: String,
}

/// Payload naming a catalog technology.
#[derive(Debug, Clone, Deserialize)]
pub struct TechnologyName {
    pub name: String,
}

/// A technology as listed under a project.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnologyRef {
    pub technology_id: i32,
    pub technology_name: String,
}

/// A created association, enriched with the joined project and technology
/// display fields.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTechnologyLink {
    pub project_id: i32,
    pub project_name: String,
    pub project_description: String,
    pub project_estimated_time: String,
    pub project_repository: String,
    pub technology_id: i32,
    pub technology_name: String,
    pub added_at: DateTime<Utc>,
}
