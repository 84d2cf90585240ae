//! HTTP API handlers for savorlog-server

use serde::Serialize;

pub mod error;
pub mod health;
pub mod mealplan;
pub mod recipes;
pub mod ui;

pub use error::ApiError;
pub use health::{api_root, health_routes};
pub use mealplan::{list_meal_plan, reschedule_meal, schedule_meal, unschedule_meal};
pub use recipes::{create_recipe, delete_recipe, get_recipe, list_recipes, update_recipe};
pub use ui::{serve_app_css, serve_app_js, serve_index};

/// Deletion confirmation body
#[derive(Debug, Serialize)]
pub struct Confirmation {
    pub message: String,
}

impl Confirmation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
