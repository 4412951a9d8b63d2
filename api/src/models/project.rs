//! Project models. Every project belongs to exactly one developer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::technology::TechnologyRef;

/// Full project record from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub estimated_time: String,
    pub repository: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub developer_id: i32,
}

/// Payload for creating a project. The owner must already exist.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub estimated_time: String,
    pub repository: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub developer_id: i32,
}

/// Partial update: only the provided fields change.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub estimated_time: Option<String>,
    pub repository: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub developer_id: Option<i32>,
}

/// Read representation: the project plus its associated technologies.
/// Zero associations is an empty list, never null.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithTechnologies {
    #[serde(flatten)]
    pub project: Project,
    pub technologies: Vec<TechnologyRef>,
}
