//! Field-level record validation
//!
//! Each record type has one validation function returning the list of
//! violated fields; an empty list means the record is acceptable. The API
//! layer runs these before every create and update, so nothing invalid
//! reaches the store.

use crate::db::models::{MealType, RecipeInput, ScheduleInput};
use crate::time;
use std::fmt;

/// A single violated field and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Wire-format (camelCase) field name
    pub field: &'static str,
    pub message: String,
}

impl Violation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a recipe create body or a merged update result
pub fn validate_recipe(input: &RecipeInput) -> Vec<Violation> {
    let mut violations = Vec::new();

    match &input.title {
        Some(title) if !title.trim().is_empty() => {}
        _ => violations.push(Violation::new("title", "is required and must be non-empty")),
    }

    match &input.ingredients {
        Some(lines) if !lines.is_empty() => {
            if lines.iter().any(|line| line.trim().is_empty()) {
                violations.push(Violation::new(
                    "ingredients",
                    "every ingredient line must be non-empty",
                ));
            }
        }
        _ => violations.push(Violation::new(
            "ingredients",
            "is required and must list at least one ingredient",
        )),
    }

    match &input.instructions {
        Some(text) if !text.trim().is_empty() => {}
        _ => violations.push(Violation::new(
            "instructions",
            "is required and must be non-empty",
        )),
    }

    match input.prep_time {
        Some(minutes) if minutes >= 1 => {}
        Some(_) => violations.push(Violation::new("prepTime", "must be at least 1 minute")),
        None => violations.push(Violation::new("prepTime", "is required")),
    }

    if matches!(input.cook_time, Some(minutes) if minutes < 0) {
        violations.push(Violation::new("cookTime", "must not be negative"));
    }

    if matches!(input.servings, Some(count) if count < 1) {
        violations.push(Violation::new("servings", "must be at least 1"));
    }

    violations
}

/// Validate a schedule body (POST /api/mealplan)
///
/// `recipeId` format is checked separately (malformed-identifier error,
/// before any store access); this only reports missing required fields and
/// unusable values.
pub fn validate_schedule(input: &ScheduleInput) -> Vec<Violation> {
    let mut violations = Vec::new();

    if input.recipe_id.as_deref().map_or(true, str::is_empty) {
        violations.push(Violation::new("recipeId", "is required"));
    }

    match input.scheduled_date.as_deref() {
        None | Some("") => violations.push(Violation::new("scheduledDate", "is required")),
        Some(raw) if time::parse_rfc3339(raw).is_none() => violations.push(Violation::new(
            "scheduledDate",
            "must be an RFC 3339 date-time",
        )),
        Some(_) => {}
    }

    if let Some(raw) = input.meal_type.as_deref() {
        if MealType::parse(raw).is_none() {
            violations.push(Violation::new(
                "mealType",
                "must be one of Breakfast, Lunch, Dinner, Snack, Other",
            ));
        }
    }

    violations
}

/// Render violations as a single diagnostic string ("title: ..., prepTime: ...")
pub fn describe(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The violated field names, for "check required fields (...)" messages
pub fn field_list(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.field)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_recipe() -> RecipeInput {
        RecipeInput {
            title: Some("Pasta".to_string()),
            ingredients: Some(vec!["pasta".to_string(), "sauce".to_string()]),
            instructions: Some("boil".to_string()),
            prep_time: Some(20),
            ..Default::default()
        }
    }

    #[test]
    fn accepts_valid_recipe() {
        assert!(validate_recipe(&valid_recipe()).is_empty());
    }

    #[test]
    fn rejects_each_missing_required_field() {
        for field in ["title", "ingredients", "instructions", "prepTime"] {
            let mut input = valid_recipe();
            match field {
                "title" => input.title = None,
                "ingredients" => input.ingredients = None,
                "instructions" => input.instructions = None,
                "prepTime" => input.prep_time = None,
                _ => unreachable!(),
            }
            let violations = validate_recipe(&input);
            assert_eq!(violations.len(), 1, "field: {}", field);
            assert_eq!(violations[0].field, field);
        }
    }

    #[test]
    fn rejects_blank_title() {
        let mut input = valid_recipe();
        input.title = Some("   ".to_string());
        assert_eq!(validate_recipe(&input)[0].field, "title");
    }

    #[test]
    fn rejects_empty_ingredient_list() {
        let mut input = valid_recipe();
        input.ingredients = Some(Vec::new());
        assert_eq!(validate_recipe(&input)[0].field, "ingredients");
    }

    #[test]
    fn rejects_blank_ingredient_line() {
        let mut input = valid_recipe();
        input.ingredients = Some(vec!["pasta".to_string(), "  ".to_string()]);
        assert_eq!(validate_recipe(&input)[0].field, "ingredients");
    }

    #[test]
    fn rejects_zero_prep_time() {
        let mut input = valid_recipe();
        input.prep_time = Some(0);
        let violations = validate_recipe(&input);
        assert_eq!(violations[0].field, "prepTime");
    }

    #[test]
    fn rejects_negative_cook_time_and_zero_servings() {
        let mut input = valid_recipe();
        input.cook_time = Some(-5);
        input.servings = Some(0);
        let fields: Vec<_> = validate_recipe(&input)
            .into_iter()
            .map(|v| v.field)
            .collect();
        assert_eq!(fields, vec!["cookTime", "servings"]);
    }

    #[test]
    fn reports_all_violations_at_once() {
        let input = RecipeInput::default();
        let fields: Vec<_> = validate_recipe(&input)
            .into_iter()
            .map(|v| v.field)
            .collect();
        assert_eq!(
            fields,
            vec!["title", "ingredients", "instructions", "prepTime"]
        );
    }

    #[test]
    fn schedule_requires_recipe_and_date() {
        let violations = validate_schedule(&ScheduleInput::default());
        let fields: Vec<_> = violations.iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["recipeId", "scheduledDate"]);
    }

    #[test]
    fn schedule_rejects_bad_date_and_meal_type() {
        let input = ScheduleInput {
            recipe_id: Some("0191d8a0-0000-0000-0000-000000000000".to_string()),
            scheduled_date: Some("next tuesday".to_string()),
            meal_type: Some("Brunch".to_string()),
        };
        let fields: Vec<_> = validate_schedule(&input)
            .into_iter()
            .map(|v| v.field)
            .collect();
        assert_eq!(fields, vec!["scheduledDate", "mealType"]);
    }

    #[test]
    fn schedule_accepts_valid_input() {
        let input = ScheduleInput {
            recipe_id: Some("0191d8a0-0000-0000-0000-000000000000".to_string()),
            scheduled_date: Some("2025-06-01T18:00:00Z".to_string()),
            meal_type: None,
        };
        assert!(validate_schedule(&input).is_empty());
    }

    #[test]
    fn describe_joins_violations() {
        let input = RecipeInput::default();
        let described = describe(&validate_recipe(&input));
        assert!(described.contains("title:"));
        assert!(described.contains("prepTime:"));
        assert_eq!(
            field_list(&validate_recipe(&input)),
            "title, ingredients, instructions, prepTime"
        );
    }
}
