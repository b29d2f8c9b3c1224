//! Meal recommendations: menu rows are merged per dish, filtered against
//! the student's dietary preferences and ranked with favorites first.

pub mod aggregate;
mod dto;
pub mod filter;
pub mod handlers;
pub mod rank;
pub mod services;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
