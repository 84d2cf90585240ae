//! Record models and wire types
//!
//! All JSON field names are camelCase; `Recipe` and `MealPlanEntry` are the
//! persisted shapes, the `*Input` types are request bodies. Input fields
//! are all optional so that missing values surface as named validation
//! violations instead of deserialization failures.

use crate::{time, uuid_utils};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted dish definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    /// One ingredient per entry, order preserved
    pub ingredients: Vec<String>,
    pub instructions: String,
    /// Preparation time in minutes, at least 1
    pub prep_time: i64,
    /// Cooking time in minutes
    pub cook_time: i64,
    pub servings: i64,
    pub cuisine: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Recipe create/update body (partial; merged and validated by the API)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeInput {
    pub title: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<String>,
    pub prep_time: Option<i64>,
    pub cook_time: Option<i64>,
    pub servings: Option<i64>,
    pub cuisine: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl RecipeInput {
    /// Fill unset fields from an existing record, producing the effective
    /// input an update describes. Validation runs on the merged result.
    pub fn merged_over(self, existing: &Recipe) -> Self {
        Self {
            title: self.title.or_else(|| Some(existing.title.clone())),
            ingredients: self
                .ingredients
                .or_else(|| Some(existing.ingredients.clone())),
            instructions: self
                .instructions
                .or_else(|| Some(existing.instructions.clone())),
            prep_time: self.prep_time.or(Some(existing.prep_time)),
            cook_time: self.cook_time.or(Some(existing.cook_time)),
            servings: self.servings.or(Some(existing.servings)),
            cuisine: self.cuisine.or_else(|| Some(existing.cuisine.clone())),
            tags: self.tags.or_else(|| Some(existing.tags.clone())),
        }
    }
}

impl Recipe {
    /// Build a new record from validated input; the store assigns the id
    /// and both timestamps here.
    pub fn from_input(input: RecipeInput) -> Self {
        let now = time::now();
        Self::with_fields(input, uuid_utils::generate(), now, now)
    }

    /// Build the updated record from validated merged input, keeping the
    /// original id and creation timestamp.
    pub fn updated_from(existing: &Recipe, input: RecipeInput) -> Self {
        Self::with_fields(input, existing.id, existing.created_at, time::now())
    }

    fn with_fields(
        input: RecipeInput,
        id: Uuid,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        let cuisine = input
            .cuisine
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| "General".to_string());

        Self {
            id,
            title: input.title.unwrap_or_default().trim().to_string(),
            ingredients: input
                .ingredients
                .unwrap_or_default()
                .into_iter()
                .map(|line| line.trim().to_string())
                .collect(),
            instructions: input.instructions.unwrap_or_default(),
            prep_time: input.prep_time.unwrap_or(1),
            cook_time: input.cook_time.unwrap_or(0),
            servings: input.servings.unwrap_or(1),
            cuisine,
            tags: input
                .tags
                .unwrap_or_default()
                .into_iter()
                .map(|tag| tag.trim().to_string())
                .filter(|tag| !tag.is_empty())
                .collect(),
            created_at,
            updated_at,
        }
    }
}

/// Meal category of a scheduled entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    Lunch,
    #[default]
    Dinner,
    Snack,
    Other,
}

impl MealType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snack => "Snack",
            Self::Other => "Other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Breakfast" => Some(Self::Breakfast),
            "Lunch" => Some(Self::Lunch),
            "Dinner" => Some(Self::Dinner),
            "Snack" => Some(Self::Snack),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// A persisted scheduling record linking a recipe to a date/time
///
/// `recipe_ref` is a weak reference: the referenced recipe may no longer
/// exist, in which case reads fail to populate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanEntry {
    pub id: Uuid,
    pub recipe_ref: Uuid,
    pub scheduled_date: DateTime<Utc>,
    pub meal_type: MealType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MealPlanEntry {
    pub fn new(recipe_ref: Uuid, scheduled_date: DateTime<Utc>, meal_type: MealType) -> Self {
        let now = time::now();
        Self {
            id: uuid_utils::generate(),
            recipe_ref,
            scheduled_date,
            meal_type,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A meal-plan entry with its recipe populated at read time
///
/// The store keeps only the reference; `recipe` is null when it no longer
/// resolves.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulatedEntry {
    #[serde(flatten)]
    pub entry: MealPlanEntry,
    pub recipe: Option<Recipe>,
}

/// Schedule request body (POST /api/mealplan)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleInput {
    pub recipe_id: Option<String>,
    /// RFC 3339 date-time; parsed (not deserialized) so a bad value is a
    /// named validation violation rather than a body rejection
    pub scheduled_date: Option<String>,
    pub meal_type: Option<String>,
}

/// Reschedule request body (PUT /api/mealplan/:id); both fields optional,
/// `recipeRef` is immutable through this operation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleInput {
    pub scheduled_date: Option<String>,
    pub meal_type: Option<String>,
}
