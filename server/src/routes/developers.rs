//! `/developers` routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use sqlx::PgPool;

use api::models::{
    Developer, DeveloperInfo, DeveloperPatch, DeveloperWithInfo, NewDeveloper, NewDeveloperInfo,
};

use crate::error::AppError;

pub fn router() -> Router<PgPool> {
    Router::new()
        .route("/developers", post(create))
        .route("/developers/:id", get(show).patch(update).delete(remove))
        .route("/developers/:id/infos", post(upsert_info))
}

async fn create(
    State(pool): State<PgPool>,
    Json(payload): Json<NewDeveloper>,
) -> Result<(StatusCode, Json<Developer>), AppError> {
    let developer = api::developers::create_developer(&pool, payload).await?;
    Ok((StatusCode::CREATED, Json(developer)))
}

async fn show(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
) -> Result<Json<DeveloperWithInfo>, AppError> {
    let developer = api::developers::get_developer(&pool, id).await?;
    Ok(Json(developer))
}

async fn update(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
    Json(patch): Json<DeveloperPatch>,
) -> Result<Json<Developer>, AppError> {
    let developer = api::developers::update_developer(&pool, id, patch).await?;
    Ok(Json(developer))
}

async fn remove(State(pool): State<PgPool>, Path(id): Path<i32>) -> Result<StatusCode, AppError> {
    api::developers::delete_developer(&pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn upsert_info(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
    Json(payload): Json<NewDeveloperInfo>,
) -> Result<(StatusCode, Json<DeveloperInfo>), AppError> {
    let info = api::developers::upsert_developer_info(&pool, id, payload).await?;
    Ok((StatusCode::CREATED, Json(info)))
}
