use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Form, Json, Router,
};
use tracing::instrument;
use uuid::Uuid;

use crate::state::AppState;

use super::dto::{InvoiceForEdit, InvoiceForm, InvoiceListItem, ListQuery};
use super::error::{ActionError, ActionRedirect};
use super::services;

pub fn invoice_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard/invoices", get(list_invoices).post(create_invoice))
        .route("/dashboard/invoices/:id", get(get_invoice))
        .route("/dashboard/invoices/:id/edit", post(update_invoice))
        .route("/dashboard/invoices/:id/delete", post(delete_invoice))
}

#[instrument(skip(state, form))]
pub async fn create_invoice(
    State(state): State<AppState>,
    Form(form): Form<InvoiceForm>,
) -> Result<ActionRedirect, ActionError> {
    services::create_invoice(state.invoices.as_ref(), &state.pages, &form).await
}

#[instrument(skip(state, form))]
pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<InvoiceForm>,
) -> Result<ActionRedirect, ActionError> {
    services::update_invoice(state.invoices.as_ref(), &state.pages, id, &form).await
}

#[instrument(skip(state))]
pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<ActionRedirect, ActionError> {
    services::delete_invoice(state.invoices.as_ref(), &state.pages, id).await
}

#[instrument(skip(state))]
pub async fn get_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InvoiceForEdit>, ActionError> {
    let invoice = services::fetch_invoice(state.invoices.as_ref(), id).await?;
    Ok(Json(InvoiceForEdit {
        id: invoice.id,
        customer_id: invoice.customer_id,
        amount: f64::from(invoice.amount) / 100.0,
        status: invoice.status,
        date: invoice.date,
    }))
}

#[instrument(skip(state))]
pub async fn list_invoices(
    State(state): State<AppState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Vec<InvoiceListItem>>, ActionError> {
    let items =
        services::list_invoices(state.invoices.as_ref(), &state.pages, q.query.trim(), q.page)
            .await?;
    Ok(Json(items))
}
