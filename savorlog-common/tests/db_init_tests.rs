//! Integration tests for database initialization
//!
//! Covers automatic database creation, idempotent schema setup, and the
//! weak-reference shape of the meal_plan table.

use savorlog_common::db::init::{create_schema, init_database};
use tempfile::TempDir;

#[tokio::test]
async fn test_database_creation_when_missing() {
    let dir = TempDir::new().expect("tempdir");
    let db_path = dir.path().join("savorlog.db");
    assert!(!db_path.exists());

    let result = init_database(&db_path).await;
    assert!(
        result.is_ok(),
        "Database initialization failed: {:?}",
        result.err()
    );
    assert!(db_path.exists(), "Database file was not created");
}

#[tokio::test]
async fn test_database_creates_parent_directory() {
    let dir = TempDir::new().expect("tempdir");
    let db_path = dir.path().join("nested").join("deeper").join("savorlog.db");

    let result = init_database(&db_path).await;
    assert!(result.is_ok(), "init failed: {:?}", result.err());
    assert!(db_path.exists());
}

#[tokio::test]
async fn test_database_opens_existing() {
    let dir = TempDir::new().expect("tempdir");
    let db_path = dir.path().join("savorlog.db");

    let pool1 = init_database(&db_path).await.expect("first open");
    pool1.close().await;

    // Second open must succeed and keep the schema intact
    let pool2 = init_database(&db_path).await.expect("second open");
    let tables: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('recipes', 'meal_plan')",
    )
    .fetch_one(&pool2)
    .await
    .expect("count tables");
    assert_eq!(tables, 2);
}

#[tokio::test]
async fn test_schema_tables_accept_rows() {
    let dir = TempDir::new().expect("tempdir");
    let db_path = dir.path().join("savorlog.db");
    let pool = init_database(&db_path).await.expect("init");

    sqlx::query(
        "INSERT INTO recipes (guid, title, ingredients, instructions, prep_time) \
         VALUES ('r1', 'Pasta', '[\"pasta\"]', 'boil', 20)",
    )
    .execute(&pool)
    .await
    .expect("insert recipe");

    sqlx::query(
        "INSERT INTO meal_plan (guid, recipe_id, scheduled_date) \
         VALUES ('p1', 'r1', '2025-06-01T18:00:00+00:00')",
    )
    .execute(&pool)
    .await
    .expect("insert plan entry");

    let meal_type: String = sqlx::query_scalar("SELECT meal_type FROM meal_plan WHERE guid = 'p1'")
        .fetch_one(&pool)
        .await
        .expect("select meal_type");
    assert_eq!(meal_type, "Dinner");
}

#[tokio::test]
async fn test_meal_plan_rejects_unknown_meal_type() {
    let dir = TempDir::new().expect("tempdir");
    let db_path = dir.path().join("savorlog.db");
    let pool = init_database(&db_path).await.expect("init");

    let result = sqlx::query(
        "INSERT INTO meal_plan (guid, recipe_id, scheduled_date, meal_type) \
         VALUES ('p1', 'r1', '2025-06-01T18:00:00+00:00', 'Brunch')",
    )
    .execute(&pool)
    .await;
    assert!(result.is_err(), "CHECK constraint should reject 'Brunch'");
}

#[tokio::test]
async fn test_deleting_recipe_leaves_plan_entries() {
    // recipe_id is a weak reference: no cascade on recipe deletion
    let dir = TempDir::new().expect("tempdir");
    let db_path = dir.path().join("savorlog.db");
    let pool = init_database(&db_path).await.expect("init");

    sqlx::query(
        "INSERT INTO recipes (guid, title, ingredients, instructions, prep_time) \
         VALUES ('r1', 'Pasta', '[\"pasta\"]', 'boil', 20)",
    )
    .execute(&pool)
    .await
    .expect("insert recipe");
    sqlx::query(
        "INSERT INTO meal_plan (guid, recipe_id, scheduled_date) \
         VALUES ('p1', 'r1', '2025-06-01T18:00:00+00:00')",
    )
    .execute(&pool)
    .await
    .expect("insert plan entry");

    sqlx::query("DELETE FROM recipes WHERE guid = 'r1'")
        .execute(&pool)
        .await
        .expect("delete recipe");

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM meal_plan")
        .fetch_one(&pool)
        .await
        .expect("count entries");
    assert_eq!(remaining, 1, "plan entry must survive recipe deletion");
}

#[tokio::test]
async fn test_create_schema_idempotent_in_memory() {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("memory pool");

    create_schema(&pool).await.expect("first create");
    create_schema(&pool).await.expect("second create");
}
