//! Meal-plan endpoints: schedule, list, reschedule, unschedule
//!
//! Entries keep only a weak reference to their recipe; reads enrich the
//! response by embedding the referenced recipe, and a reference that no
//! longer resolves yields `recipe: null` instead of failing the request.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use savorlog_common::db::models::{
    MealPlanEntry, MealType, PopulatedEntry, RescheduleInput, ScheduleInput,
};
use savorlog_common::validate::{validate_schedule, Violation};
use savorlog_common::{time, uuid_utils};
use std::collections::HashMap;
use tracing::info;
use uuid::Uuid;

use crate::api::{ApiError, Confirmation};
use crate::{db, AppState};

fn parse_plan_id(raw: &str) -> Result<Uuid, ApiError> {
    uuid_utils::parse(raw)
        .map_err(|_| ApiError::InvalidId("Invalid meal plan ID format.".to_string()))
}

/// POST /api/mealplan
///
/// Schedules a recipe: validates the body, checks `recipeId`
/// well-formedness before persisting, stores the entry, then returns it
/// with the referenced recipe embedded at read time.
pub async fn schedule_meal(
    State(state): State<AppState>,
    Json(input): Json<ScheduleInput>,
) -> Result<(StatusCode, Json<PopulatedEntry>), ApiError> {
    let violations = validate_schedule(&input);
    if !violations.is_empty() {
        return Err(ApiError::Validation(violations));
    }

    let recipe_ref = uuid_utils::parse(input.recipe_id.as_deref().unwrap_or_default())
        .map_err(|_| ApiError::InvalidId("Invalid recipe ID format provided.".to_string()))?;

    let scheduled_date = input
        .scheduled_date
        .as_deref()
        .and_then(time::parse_rfc3339)
        .ok_or_else(|| {
            ApiError::Validation(vec![Violation::new(
                "scheduledDate",
                "must be an RFC 3339 date-time",
            )])
        })?;

    let meal_type = match input.meal_type.as_deref() {
        None => MealType::default(),
        Some(raw) => MealType::parse(raw).ok_or_else(|| {
            ApiError::Validation(vec![Violation::new(
                "mealType",
                "must be one of Breakfast, Lunch, Dinner, Snack, Other",
            )])
        })?,
    };

    let entry = MealPlanEntry::new(recipe_ref, scheduled_date, meal_type);
    db::mealplan::insert(&state.db, &entry).await?;

    let recipe = db::recipes::get(&state.db, &entry.recipe_ref).await?;
    info!(
        "Scheduled recipe {} at {} ({})",
        entry.recipe_ref,
        entry.scheduled_date,
        entry.meal_type.as_str()
    );

    Ok((StatusCode::CREATED, Json(PopulatedEntry { entry, recipe })))
}

/// GET /api/mealplan
///
/// Returns all entries ordered by scheduled date ascending, each with its
/// recipe embedded.
pub async fn list_meal_plan(
    State(state): State<AppState>,
) -> Result<Json<Vec<PopulatedEntry>>, ApiError> {
    let entries = db::mealplan::list(&state.db).await?;

    // Many entries may reference the same recipe; fetch each once
    let mut cache: HashMap<Uuid, Option<savorlog_common::db::models::Recipe>> = HashMap::new();
    let mut populated = Vec::with_capacity(entries.len());

    for entry in entries {
        let recipe = match cache.get(&entry.recipe_ref) {
            Some(cached) => cached.clone(),
            None => {
                let fetched = db::recipes::get(&state.db, &entry.recipe_ref).await?;
                cache.insert(entry.recipe_ref, fetched.clone());
                fetched
            }
        };
        populated.push(PopulatedEntry { entry, recipe });
    }

    Ok(Json(populated))
}

/// PUT /api/mealplan/:id
///
/// Reschedules an entry: only `scheduledDate` and `mealType` are mutable;
/// the recipe reference cannot be changed through this operation.
pub async fn reschedule_meal(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<RescheduleInput>,
) -> Result<Json<MealPlanEntry>, ApiError> {
    let id = parse_plan_id(&id)?;

    let mut entry = db::mealplan::get(&state.db, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Meal plan entry not found.".to_string()))?;

    if let Some(raw) = input.scheduled_date.as_deref() {
        entry.scheduled_date = time::parse_rfc3339(raw).ok_or_else(|| {
            ApiError::Validation(vec![Violation::new(
                "scheduledDate",
                "must be an RFC 3339 date-time",
            )])
        })?;
    }

    if let Some(raw) = input.meal_type.as_deref() {
        entry.meal_type = MealType::parse(raw).ok_or_else(|| {
            ApiError::Validation(vec![Violation::new(
                "mealType",
                "must be one of Breakfast, Lunch, Dinner, Snack, Other",
            )])
        })?;
    }

    entry.updated_at = time::now();
    if !db::mealplan::update(&state.db, &entry).await? {
        return Err(ApiError::NotFound("Meal plan entry not found.".to_string()));
    }

    info!("Rescheduled entry {} to {}", entry.id, entry.scheduled_date);
    Ok(Json(entry))
}

/// DELETE /api/mealplan/:id
pub async fn unschedule_meal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Confirmation>, ApiError> {
    let id = parse_plan_id(&id)?;

    if !db::mealplan::delete(&state.db, &id).await? {
        return Err(ApiError::NotFound("Meal plan entry not found.".to_string()));
    }

    info!("Unscheduled entry {}", id);
    Ok(Json(Confirmation::new("Meal plan entry removed successfully.")))
}
