use sqlx::FromRow;
use time::Date;
use uuid::Uuid;

use super::dto::InvoiceStatus;

/// Invoice row as stored.
#[derive(Debug, Clone, FromRow, PartialEq, Eq)]
pub struct Invoice {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub amount: i32,        // cents
    pub status: String,     // 'pending' | 'paid'
    pub date: Date,
}

/// Values for a new invoice row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInvoice {
    pub customer_id: String,
    pub amount: i32,
    pub status: InvoiceStatus,
    pub date: Date,
}

/// Columns an update may change; `date` is never updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceChanges {
    pub customer_id: String,
    pub amount: i32,
    pub status: InvoiceStatus,
}

#[derive(Debug, Clone, FromRow)]
pub struct InvoiceWithCustomer {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub amount: i32,
    pub status: String,
    pub date: Date,
}
