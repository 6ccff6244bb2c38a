pub mod data;
pub mod handlers;
mod password;
mod repo;
pub mod services;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::seed_routes()
}
