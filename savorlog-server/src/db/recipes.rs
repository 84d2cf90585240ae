//! Recipe store
//!
//! `ingredients` and `tags` travel as JSON arrays inside TEXT columns;
//! everything else maps directly.

use chrono::{DateTime, Utc};
use savorlog_common::db::models::Recipe;
use savorlog_common::{Error, Result};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

fn encode_lines(lines: &[String]) -> Result<String> {
    serde_json::to_string(lines).map_err(|e| Error::Internal(format!("JSON encode failed: {e}")))
}

fn decode_lines(raw: &str, column: &str) -> Result<Vec<String>> {
    serde_json::from_str(raw)
        .map_err(|e| Error::Internal(format!("corrupt {column} column: {e}")))
}

fn recipe_from_row(row: &SqliteRow) -> Result<Recipe> {
    let guid: String = row.try_get("guid")?;
    let id = Uuid::parse_str(&guid)
        .map_err(|e| Error::Internal(format!("invalid recipe guid '{guid}': {e}")))?;

    let ingredients_raw: String = row.try_get("ingredients")?;
    let tags_raw: String = row.try_get("tags")?;

    Ok(Recipe {
        id,
        title: row.try_get("title")?,
        ingredients: decode_lines(&ingredients_raw, "ingredients")?,
        instructions: row.try_get("instructions")?,
        prep_time: row.try_get("prep_time")?,
        cook_time: row.try_get("cook_time")?,
        servings: row.try_get("servings")?,
        cuisine: row.try_get("cuisine")?,
        tags: decode_lines(&tags_raw, "tags")?,
        created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
        updated_at: row.try_get::<DateTime<Utc>, _>("updated_at")?,
    })
}

pub async fn insert(pool: &SqlitePool, recipe: &Recipe) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO recipes
            (guid, title, ingredients, instructions, prep_time, cook_time,
             servings, cuisine, tags, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(recipe.id.to_string())
    .bind(&recipe.title)
    .bind(encode_lines(&recipe.ingredients)?)
    .bind(&recipe.instructions)
    .bind(recipe.prep_time)
    .bind(recipe.cook_time)
    .bind(recipe.servings)
    .bind(&recipe.cuisine)
    .bind(encode_lines(&recipe.tags)?)
    .bind(recipe.created_at)
    .bind(recipe.updated_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// All recipes, newest-created first (rowid breaks same-instant ties)
pub async fn list(pool: &SqlitePool) -> Result<Vec<Recipe>> {
    let rows = sqlx::query("SELECT * FROM recipes ORDER BY created_at DESC, rowid DESC")
        .fetch_all(pool)
        .await?;

    rows.iter().map(recipe_from_row).collect()
}

pub async fn get(pool: &SqlitePool, id: &Uuid) -> Result<Option<Recipe>> {
    let row = sqlx::query("SELECT * FROM recipes WHERE guid = ?")
        .bind(id.to_string())
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(recipe_from_row).transpose()
}

/// Overwrite a stored record (last writer wins); false when the id is gone
pub async fn update(pool: &SqlitePool, recipe: &Recipe) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE recipes
        SET title = ?, ingredients = ?, instructions = ?, prep_time = ?,
            cook_time = ?, servings = ?, cuisine = ?, tags = ?, updated_at = ?
        WHERE guid = ?
        "#,
    )
    .bind(&recipe.title)
    .bind(encode_lines(&recipe.ingredients)?)
    .bind(&recipe.instructions)
    .bind(recipe.prep_time)
    .bind(recipe.cook_time)
    .bind(recipe.servings)
    .bind(&recipe.cuisine)
    .bind(encode_lines(&recipe.tags)?)
    .bind(recipe.updated_at)
    .bind(recipe.id.to_string())
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete(pool: &SqlitePool, id: &Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM recipes WHERE guid = ?")
        .bind(id.to_string())
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
