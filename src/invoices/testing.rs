use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use super::repo::InvoiceStore;
use super::repo_types::{Invoice, InvoiceChanges, InvoiceWithCustomer, NewInvoice};

/// In-memory `InvoiceStore` that records every write.
#[derive(Default)]
pub struct SpyStore {
    fail: bool,
    rows: Mutex<HashMap<Uuid, Invoice>>,
    inserted: Mutex<Vec<NewInvoice>>,
    writes: AtomicUsize,
    list_calls: AtomicUsize,
}

impl SpyStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn with_rows(rows: Vec<Invoice>) -> Self {
        Self {
            rows: Mutex::new(rows.into_iter().map(|r| (r.id, r)).collect()),
            ..Default::default()
        }
    }

    pub fn inserted(&self) -> Vec<NewInvoice> {
        self.inserted.lock().unwrap().clone()
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn check(&self) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("connection refused");
        }
        Ok(())
    }
}

#[async_trait]
impl InvoiceStore for SpyStore {
    async fn insert(&self, invoice: &NewInvoice) -> anyhow::Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        let customer_id = Uuid::parse_str(&invoice.customer_id)?;
        let id = Uuid::new_v4();
        self.rows.lock().unwrap().insert(
            id,
            Invoice {
                id,
                customer_id,
                amount: invoice.amount,
                status: invoice.status.as_str().into(),
                date: invoice.date,
            },
        );
        self.inserted.lock().unwrap().push(invoice.clone());
        Ok(())
    }

    async fn update(&self, id: Uuid, changes: &InvoiceChanges) -> anyhow::Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        let customer_id = Uuid::parse_str(&changes.customer_id)?;
        if let Some(row) = self.rows.lock().unwrap().get_mut(&id) {
            row.customer_id = customer_id;
            row.amount = changes.amount;
            row.status = changes.status.as_str().into();
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<u64> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.rows.lock().unwrap().remove(&id).map_or(0, |_| 1))
    }

    async fn find(&self, id: Uuid) -> anyhow::Result<Option<Invoice>> {
        self.check()?;
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn list_filtered(&self, _query: &str, _page: i64) -> anyhow::Result<Vec<InvoiceWithCustomer>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .values()
            .map(|r| InvoiceWithCustomer {
                id: r.id,
                customer_id: r.customer_id,
                name: String::new(),
                email: String::new(),
                image_url: String::new(),
                amount: r.amount,
                status: r.status.clone(),
                date: r.date,
            })
            .collect())
    }
}
