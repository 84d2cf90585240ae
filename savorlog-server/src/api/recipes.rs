//! Recipe CRUD endpoints
//!
//! All operations exchange JSON over HTTP. Identifier format is checked
//! before any store access; malformed ids short-circuit to a client error.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use savorlog_common::db::models::{Recipe, RecipeInput};
use savorlog_common::{uuid_utils, validate::validate_recipe};
use tracing::info;
use uuid::Uuid;

use crate::api::{ApiError, Confirmation};
use crate::{db, AppState};

fn parse_recipe_id(raw: &str) -> Result<Uuid, ApiError> {
    uuid_utils::parse(raw)
        .map_err(|_| ApiError::InvalidId("Invalid recipe ID format.".to_string()))
}

/// POST /api/recipes
///
/// Validates required fields, then stores the record and returns it with
/// its generated id and timestamps.
pub async fn create_recipe(
    State(state): State<AppState>,
    Json(input): Json<RecipeInput>,
) -> Result<(StatusCode, Json<Recipe>), ApiError> {
    let violations = validate_recipe(&input);
    if !violations.is_empty() {
        return Err(ApiError::Validation(violations));
    }

    let recipe = Recipe::from_input(input);
    db::recipes::insert(&state.db, &recipe).await?;

    info!("Created recipe {} ('{}')", recipe.id, recipe.title);
    Ok((StatusCode::CREATED, Json(recipe)))
}

/// GET /api/recipes
///
/// Returns all recipes, newest-created first.
pub async fn list_recipes(
    State(state): State<AppState>,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    let recipes = db::recipes::list(&state.db).await?;
    Ok(Json(recipes))
}

/// GET /api/recipes/:id
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Recipe>, ApiError> {
    let id = parse_recipe_id(&id)?;

    match db::recipes::get(&state.db, &id).await? {
        Some(recipe) => Ok(Json(recipe)),
        None => Err(ApiError::NotFound("Recipe not found.".to_string())),
    }
}

/// PUT /api/recipes/:id
///
/// Merges the partial body over the stored record and re-validates the
/// result against the same required-field rules as creation.
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<RecipeInput>,
) -> Result<Json<Recipe>, ApiError> {
    let id = parse_recipe_id(&id)?;

    let existing = db::recipes::get(&state.db, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Recipe not found.".to_string()))?;

    let merged = patch.merged_over(&existing);
    let violations = validate_recipe(&merged);
    if !violations.is_empty() {
        return Err(ApiError::Validation(violations));
    }

    let updated = Recipe::updated_from(&existing, merged);
    if !db::recipes::update(&state.db, &updated).await? {
        // Row vanished between the read and the write
        return Err(ApiError::NotFound("Recipe not found.".to_string()));
    }

    info!("Updated recipe {}", updated.id);
    Ok(Json(updated))
}

/// DELETE /api/recipes/:id
///
/// Removing a recipe does not touch its meal-plan entries; those keep a
/// dangling reference and fail to populate on read.
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Confirmation>, ApiError> {
    let id = parse_recipe_id(&id)?;

    if !db::recipes::delete(&state.db, &id).await? {
        return Err(ApiError::NotFound("Recipe not found.".to_string()));
    }

    info!("Deleted recipe {}", id);
    Ok(Json(Confirmation::new("Recipe removed successfully.")))
}
