//! Database initialization
//!
//! Opens (creating if necessary) the SQLite database and brings the schema
//! up to date. Schema creation is idempotent; every statement is
//! `CREATE ... IF NOT EXISTS`.

use crate::Result;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use tracing::info;

/// Initialize database connection and create tables if needed
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    // Enable foreign keys
    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await?;

    // WAL mode allows concurrent readers with one writer, so requests
    // touching distinct records do not contend
    sqlx::query("PRAGMA journal_mode = WAL")
        .execute(&pool)
        .await?;

    sqlx::query("PRAGMA busy_timeout = 5000")
        .execute(&pool)
        .await?;

    create_schema(&pool).await?;

    Ok(pool)
}

/// Create all tables and indexes (idempotent, safe to call multiple times)
pub async fn create_schema(pool: &SqlitePool) -> Result<()> {
    create_recipes_table(pool).await?;
    create_meal_plan_table(pool).await?;
    Ok(())
}

/// Create the recipes table
///
/// `ingredients` and `tags` are JSON arrays of strings stored in TEXT
/// columns.
async fn create_recipes_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS recipes (
            guid TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            ingredients TEXT NOT NULL,
            instructions TEXT NOT NULL,
            prep_time INTEGER NOT NULL,
            cook_time INTEGER NOT NULL DEFAULT 0,
            servings INTEGER NOT NULL DEFAULT 1,
            cuisine TEXT NOT NULL DEFAULT 'General',
            tags TEXT NOT NULL DEFAULT '[]',
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            CHECK (title <> ''),
            CHECK (prep_time >= 1),
            CHECK (cook_time >= 0),
            CHECK (servings >= 1)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_recipes_created_at ON recipes(created_at)")
        .execute(pool)
        .await?;

    Ok(())
}

/// Create the meal_plan table
///
/// `recipe_id` is a weak reference: no foreign-key constraint, because
/// deleting a recipe must not cascade into its scheduled entries. A
/// dangling reference simply fails to populate on read.
async fn create_meal_plan_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS meal_plan (
            guid TEXT PRIMARY KEY,
            recipe_id TEXT NOT NULL,
            scheduled_date TIMESTAMP NOT NULL,
            meal_type TEXT NOT NULL DEFAULT 'Dinner'
                CHECK (meal_type IN ('Breakfast', 'Lunch', 'Dinner', 'Snack', 'Other')),
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_meal_plan_scheduled ON meal_plan(scheduled_date)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_meal_plan_recipe ON meal_plan(recipe_id)")
        .execute(pool)
        .await?;

    Ok(())
}
