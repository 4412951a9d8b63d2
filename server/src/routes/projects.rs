//! `/projects` routes, including the technology association endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use sqlx::PgPool;

use api::models::{
    NewProject, Project, ProjectPatch, ProjectTechnologyLink, ProjectWithTechnologies,
    TechnologyName,
};

use crate::error::AppError;

pub fn router() -> Router<PgPool> {
    Router::new()
        .route("/projects", post(create))
        .route("/projects/:id", get(show).patch(update).delete(remove))
        .route("/projects/:id/technologies", post(add_technology))
        .route(
            "/projects/:id/technologies/:name",
            delete(remove_technology),
        )
}

async fn create(
    State(pool): State<PgPool>,
    Json(payload): Json<NewProject>,
) -> Result<(StatusCode, Json<ProjectWithTechnologies>), AppError> {
    let project = api::projects::create_project(&pool, payload).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

async fn show(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
) -> Result<Json<ProjectWithTechnologies>, AppError> {
    let project = api::projects::get_project(&pool, id).await?;
    Ok(Json(project))
}

async fn update(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
    Json(patch): Json<ProjectPatch>,
) -> Result<Json<Project>, AppError> {
    let project = api::projects::update_project(&pool, id, patch).await?;
    Ok(Json(project))
}

async fn remove(State(pool): State<PgPool>, Path(id): Path<i32>) -> Result<StatusCode, AppError> {
    api::projects::delete_project(&pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn add_technology(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
    Json(payload): Json<TechnologyName>,
) -> Result<(StatusCode, Json<ProjectTechnologyLink>), AppError> {
    let link = api::associations::add_technology(&pool, id, &payload.name).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

async fn remove_technology(
    State(pool): State<PgPool>,
    Path((id, name)): Path<(i32, String)>,
) -> Result<StatusCode, AppError> {
    api::associations::remove_technology(&pool, id, &name).await?;
    Ok(StatusCode::NO_CONTENT)
}
