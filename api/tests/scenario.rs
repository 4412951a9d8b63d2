//! End-to-end database scenarios.
//!
//! These tests run against a real PostgreSQL instance and are ignored by
//! default; set `DATABASE_URL` and run `cargo test -- --ignored` to exercise
//! them. Each test creates its own uniquely-named rows so the suite can run
//! repeatedly against the same database.

use std::time::{SystemTime, UNIX_EPOCH};

use api::models::{DeveloperPatch, NewDeveloper, NewDeveloperInfo, NewProject};
use api::{associations, developers, projects, Error};
use chrono::NaiveDate;
use sqlx::PgPool;

async fn pool() -> PgPool {
    dotenvy::dotenv().ok();
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = api::db::connect(&url).await.expect("connect");
    api::db::init_schema(&pool).await.expect("init schema");
    pool
}

fn unique_email(tag: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{tag}-{nanos}@example.com")
}

async fn create_dev(pool: &PgPool, tag: &str) -> api::models::Developer {
    developers::create_developer(
        pool,
        NewDeveloper {
            name: "Ana".into(),
            email: unique_email(tag),
        },
    )
    .await
    .expect("create developer")
}

fn project_payload(developer_id: i32) -> NewProject {
    NewProject {
        name: "P1".into(),
        description: "portfolio site".into(),
        estimated_time: "2 months".into(),
        repository: "github.com/ana/p1".into(),
        start_date: NaiveDate::from_ymd_opt(2023, 3, 1).unwrap(),
        end_date: None,
        developer_id,
    }
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn duplicate_email_is_a_conflict_and_leaves_the_first_row_unmodified() {
    let pool = pool().await;
    let d1 = create_dev(&pool, "dup").await;

    let err = developers::create_developer(
        &pool,
        NewDeveloper {
            name: "Impostor".into(),
            email: d1.email.clone(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, Error::Conflict(_)), "got {err:?}");

    let unchanged = developers::get_developer(&pool, d1.id).await.unwrap();
    assert_eq!(unchanged.name, d1.name);
    assert_eq!(unchanged.email, d1.email);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn missing_resources_yield_not_found() {
    let pool = pool().await;

    let err = developers::delete_developer(&pool, -1).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)), "got {err:?}");

    let err = projects::create_project(&pool, project_payload(-1))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)), "got {err:?}");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn invalid_preferred_os_is_rejected_even_for_a_valid_developer() {
    let pool = pool().await;
    let dev = create_dev(&pool, "os").await;

    let err = developers::upsert_developer_info(
        &pool,
        dev.id,
        NewDeveloperInfo {
            developer_since: NaiveDate::from_ymd_opt(2019, 6, 1).unwrap(),
            preferred_os: "TempleOS".into(),
        },
    )
    .await
    .unwrap_err();

    match err {
        Error::Validation { options, .. } => {
            assert_eq!(options, vec!["Windows", "Linux", "MacOS"]);
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn info_record_is_written_then_replaced() {
    let pool = pool().await;
    let dev = create_dev(&pool, "info").await;

    let first = developers::upsert_developer_info(
        &pool,
        dev.id,
        NewDeveloperInfo {
            developer_since: NaiveDate::from_ymd_opt(2019, 6, 1).unwrap(),
            preferred_os: "Linux".into(),
        },
    )
    .await
    .unwrap();
    assert_eq!(first.preferred_os, "Linux");

    let second = developers::upsert_developer_info(
        &pool,
        dev.id,
        NewDeveloperInfo {
            developer_since: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            preferred_os: "MacOS".into(),
        },
    )
    .await
    .unwrap();
    assert_eq!(second.id, first.id, "replace, not a second record");
    assert_eq!(second.preferred_os, "MacOS");

    let read = developers::get_developer(&pool, dev.id).await.unwrap();
    let info = read.info.expect("info present");
    assert_eq!(info.preferred_os, "MacOS");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn a_project_with_no_technologies_reads_back_with_an_empty_list() {
    let pool = pool().await;
    let dev = create_dev(&pool, "empty").await;
    let created = projects::create_project(&pool, project_payload(dev.id))
        .await
        .unwrap();
    assert!(created.technologies.is_empty());

    let read = projects::get_project(&pool, created.project.id)
        .await
        .unwrap();
    assert!(read.technologies.is_empty());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn technology_add_remove_protocol() {
    let pool = pool().await;
    let dev = create_dev(&pool, "tech").await;
    let project = projects::create_project(&pool, project_payload(dev.id))
        .await
        .unwrap()
        .project;

    // First add succeeds and carries the joined display fields.
    let link = associations::add_technology(&pool, project.id, "React")
        .await
        .unwrap();
    assert_eq!(link.technology_name, "React");
    assert_eq!(link.project_name, project.name);

    // Second identical add is a conflict.
    let err = associations::add_technology(&pool, project.id, "React")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Conflict(_)), "got {err:?}");

    // Unsupported names fail the catalog gate with the option list.
    let err = associations::add_technology(&pool, project.id, "COBOL")
        .await
        .unwrap_err();
    match err {
        Error::Validation { options, .. } => assert_eq!(options.len(), 9),
        other => panic!("expected Validation, got {other:?}"),
    }

    // Removal succeeds once, then reports "not related".
    associations::remove_technology(&pool, project.id, "React")
        .await
        .unwrap();
    let err = associations::remove_technology(&pool, project.id, "React")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation { .. }), "got {err:?}");

    // An invalid project fails before the catalog gate is consulted.
    let err = associations::add_technology(&pool, -1, "COBOL")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)), "got {err:?}");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn update_paths_enforce_ownership_and_email_uniqueness() {
    let pool = pool().await;
    let d1 = create_dev(&pool, "upd1").await;
    let d2 = create_dev(&pool, "upd2").await;

    // A developer may keep their own email through an update.
    let kept = developers::update_developer(
        &pool,
        d1.id,
        DeveloperPatch {
            name: Some("Ana Maria".into()),
            email: Some(d1.email.clone()),
        },
    )
    .await
    .unwrap();
    assert_eq!(kept.name, "Ana Maria");

    // Taking another developer's email is a conflict.
    let err = developers::update_developer(
        &pool,
        d1.id,
        DeveloperPatch {
            name: None,
            email: Some(d2.email.clone()),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, Error::Conflict(_)), "got {err:?}");

    // Moving a project to a missing owner is not-found.
    let project = projects::create_project(&pool, project_payload(d1.id))
        .await
        .unwrap()
        .project;
    let err = projects::update_project(
        &pool,
        project.id,
        api::models::ProjectPatch {
            developer_id: Some(-1),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)), "got {err:?}");

    // Moving it to a real owner works and leaves other fields alone.
    let moved = projects::update_project(
        &pool,
        project.id,
        api::models::ProjectPatch {
            developer_id: Some(d2.id),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(moved.developer_id, d2.id);
    assert_eq!(moved.name, project.name);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn deleting_a_project_then_rereading_is_not_found() {
    let pool = pool().await;
    let dev = create_dev(&pool, "del").await;
    let project = projects::create_project(&pool, project_payload(dev.id))
        .await
        .unwrap()
        .project;

    associations::add_technology(&pool, project.id, "PostgreSQL")
        .await
        .unwrap();
    projects::delete_project(&pool, project.id).await.unwrap();

    let err = projects::get_project(&pool, project.id).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)), "got {err:?}");

    let err = projects::delete_project(&pool, project.id).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)), "got {err:?}");
}
