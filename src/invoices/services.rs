use time::OffsetDateTime;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::cache::PathCache;

use super::dto::{InvoiceForm, InvoiceListItem};
use super::error::{ActionError, ActionRedirect};
use super::repo::InvoiceStore;
use super::repo_types::{Invoice, InvoiceChanges, NewInvoice};
use super::validation::validate_form;

pub const INVOICES_PATH: &str = "/dashboard/invoices";

pub type InvoicePages = PathCache<Vec<InvoiceListItem>>;

pub async fn create_invoice(
    store: &dyn InvoiceStore,
    pages: &InvoicePages,
    form: &InvoiceForm,
) -> Result<ActionRedirect, ActionError> {
    let valid = validate_form(form).map_err(|errors| {
        debug!(?errors, "create invoice rejected");
        ActionError::Validation {
            errors,
            message: "Missing Fields. Failed to Create Invoice.",
        }
    })?;

    let invoice = NewInvoice {
        customer_id: valid.customer_id,
        amount: valid.amount_cents,
        status: valid.status,
        date: OffsetDateTime::now_utc().date(),
    };

    if let Err(e) = store.insert(&invoice).await {
        error!(error = ?e, "create invoice failed");
        return Err(ActionError::Database {
            message: "Database Error: Failed to Create Invoice.",
        });
    }

    info!(customer_id = %invoice.customer_id, amount = invoice.amount, status = %invoice.status, "invoice created");
    Ok(finish(pages).await)
}

pub async fn update_invoice(
    store: &dyn InvoiceStore,
    pages: &InvoicePages,
    id: Uuid,
    form: &InvoiceForm,
) -> Result<ActionRedirect, ActionError> {
    let valid = validate_form(form).map_err(|errors| {
        debug!(?errors, %id, "update invoice rejected");
        ActionError::Validation {
            errors,
            message: "Missing Fields. Failed to Update Invoice.",
        }
    })?;

    let changes = InvoiceChanges {
        customer_id: valid.customer_id,
        amount: valid.amount_cents,
        status: valid.status,
    };

    if let Err(e) = store.update(id, &changes).await {
        error!(error = ?e, %id, "update invoice failed");
        return Err(ActionError::Database {
            message: "Database Error: Failed to Update Invoice.",
        });
    }

    info!(%id, "invoice updated");
    Ok(finish(pages).await)
}

pub async fn delete_invoice(
    store: &dyn InvoiceStore,
    pages: &InvoicePages,
    id: Uuid,
) -> Result<ActionRedirect, ActionError> {
    match store.delete(id).await {
        Ok(rows) => info!(%id, rows, "invoice deleted"),
        Err(e) => {
            error!(error = ?e, %id, "delete invoice failed");
            return Err(ActionError::Database {
                message: "Database Error: Failed to Delete Invoice.",
            });
        }
    }
    Ok(finish(pages).await)
}

pub async fn fetch_invoice(store: &dyn InvoiceStore, id: Uuid) -> Result<Invoice, ActionError> {
    match store.find(id).await {
        Ok(Some(invoice)) => Ok(invoice),
        Ok(None) => Err(ActionError::NotFound),
        Err(e) => {
            error!(error = ?e, %id, "fetch invoice failed");
            Err(ActionError::Database {
                message: "Database Error: Failed to Fetch Invoice.",
            })
        }
    }
}

/// Cached read of one page of the invoices list.
pub async fn list_invoices(
    store: &dyn InvoiceStore,
    pages: &InvoicePages,
    query: &str,
    page: i64,
) -> Result<Vec<InvoiceListItem>, ActionError> {
    let page = page.max(1);
    let variant = format!("query={}&page={}", query, page);
    let generation = pages.generation(INVOICES_PATH).await;
    if let Some(hit) = pages.get(INVOICES_PATH, &variant).await {
        debug!(%variant, "invoices page cache hit");
        return Ok(hit);
    }

    let rows = store.list_filtered(query, page).await.map_err(|e| {
        error!(error = ?e, "list invoices failed");
        ActionError::Database {
            message: "Database Error: Failed to Fetch Invoices.",
        }
    })?;

    let items: Vec<InvoiceListItem> = rows
        .into_iter()
        .map(|r| InvoiceListItem {
            id: r.id,
            customer_id: r.customer_id,
            name: r.name,
            email: r.email,
            image_url: r.image_url,
            amount: r.amount,
            status: r.status,
            date: r.date,
        })
        .collect();
    pages.put(INVOICES_PATH, &variant, generation, items.clone()).await;
    Ok(items)
}

async fn finish(pages: &InvoicePages) -> ActionRedirect {
    pages.revalidate_path(INVOICES_PATH).await;
    ActionRedirect { to: INVOICES_PATH }
}
