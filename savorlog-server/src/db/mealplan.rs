//! Meal-plan store
//!
//! `recipe_id` is stored as a bare TEXT reference; resolution happens at
//! the API layer so a dangling reference never fails a read here.

use chrono::{DateTime, Utc};
use savorlog_common::db::models::{MealPlanEntry, MealType};
use savorlog_common::{Error, Result};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

fn entry_from_row(row: &SqliteRow) -> Result<MealPlanEntry> {
    let guid: String = row.try_get("guid")?;
    let id = Uuid::parse_str(&guid)
        .map_err(|e| Error::Internal(format!("invalid plan guid '{guid}': {e}")))?;

    let recipe_raw: String = row.try_get("recipe_id")?;
    let recipe_ref = Uuid::parse_str(&recipe_raw)
        .map_err(|e| Error::Internal(format!("invalid recipe reference '{recipe_raw}': {e}")))?;

    let meal_raw: String = row.try_get("meal_type")?;
    let meal_type = MealType::parse(&meal_raw)
        .ok_or_else(|| Error::Internal(format!("unknown meal_type '{meal_raw}'")))?;

    Ok(MealPlanEntry {
        id,
        recipe_ref,
        scheduled_date: row.try_get::<DateTime<Utc>, _>("scheduled_date")?,
        meal_type,
        created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
        updated_at: row.try_get::<DateTime<Utc>, _>("updated_at")?,
    })
}

pub async fn insert(pool: &SqlitePool, entry: &MealPlanEntry) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO meal_plan
            (guid, recipe_id, scheduled_date, meal_type, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(entry.id.to_string())
    .bind(entry.recipe_ref.to_string())
    .bind(entry.scheduled_date)
    .bind(entry.meal_type.as_str())
    .bind(entry.created_at)
    .bind(entry.updated_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// All entries ordered by scheduled date ascending
pub async fn list(pool: &SqlitePool) -> Result<Vec<MealPlanEntry>> {
    let rows = sqlx::query("SELECT * FROM meal_plan ORDER BY scheduled_date ASC, rowid ASC")
        .fetch_all(pool)
        .await?;

    rows.iter().map(entry_from_row).collect()
}

pub async fn get(pool: &SqlitePool, id: &Uuid) -> Result<Option<MealPlanEntry>> {
    let row = sqlx::query("SELECT * FROM meal_plan WHERE guid = ?")
        .bind(id.to_string())
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(entry_from_row).transpose()
}

/// Persist a rescheduled entry; the recipe reference is never rewritten
pub async fn update(pool: &SqlitePool, entry: &MealPlanEntry) -> Result<bool> {
    let result = sqlx::query(
        "UPDATE meal_plan SET scheduled_date = ?, meal_type = ?, updated_at = ? WHERE guid = ?",
    )
    .bind(entry.scheduled_date)
    .bind(entry.meal_type.as_str())
    .bind(entry.updated_at)
    .bind(entry.id.to_string())
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete(pool: &SqlitePool, id: &Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM meal_plan WHERE guid = ?")
        .bind(id.to_string())
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
