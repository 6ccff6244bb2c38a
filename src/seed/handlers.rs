use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use tracing::{error, info, instrument};

use crate::invoices::services::INVOICES_PATH;
use crate::state::AppState;

use super::data::SeedData;
use super::services::seed_database;

pub fn seed_routes() -> Router<AppState> {
    Router::new().route("/seed", get(seed))
}

#[derive(Debug, Serialize)]
pub struct SeedMessage {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SeedFailure {
    pub error: String,
}

#[instrument(skip(state))]
pub async fn seed(
    State(state): State<AppState>,
) -> Result<Json<SeedMessage>, (StatusCode, Json<SeedFailure>)> {
    info!("seeding database");
    match seed_database(&state.db, &SeedData::placeholder()).await {
        Ok(_) => {
            state.pages.revalidate_path(INVOICES_PATH).await;
            Ok(Json(SeedMessage {
                message: "Database seeded successfully",
            }))
        }
        Err(e) => {
            error!(error = ?e, "seed failed");
            // outermost context only; the driver error stays in the log
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SeedFailure {
                    error: e.to_string(),
                }),
            ))
        }
    }
}
