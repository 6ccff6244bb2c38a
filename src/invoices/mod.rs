pub mod dto;
pub mod error;
pub mod handlers;
pub mod repo;
pub mod repo_types;
pub mod services;
mod validation;

#[cfg(test)]
pub(crate) mod testing;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::invoice_routes()
}
