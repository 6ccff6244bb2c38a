use anyhow::Context;
use sqlx::PgPool;
use tracing::info;

use super::data::SeedData;
use super::password::hash_password;
use super::repo;

/// Rows actually inserted per table; zero everywhere on a re-run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub users: u64,
    pub customers: u64,
    pub invoices: u64,
    pub revenue: u64,
}

/// Create the schema and insert `data` in one transaction. Any failure rolls
/// every table back to its state before the call.
pub async fn seed_database(db: &PgPool, data: &SeedData<'_>) -> anyhow::Result<SeedReport> {
    let users = data
        .users
        .iter()
        .map(|u| -> anyhow::Result<_> { Ok((*u, hash_password(u.password)?)) })
        .collect::<anyhow::Result<Vec<_>>>()
        .context("hash seed passwords")?;

    let mut tx = db.begin().await.context("begin tx")?;

    repo::ensure_uuid_extension(&mut tx).await?;
    let report = SeedReport {
        users: repo::seed_users(&mut tx, &users)
            .await
            .context("seed users")?,
        customers: repo::seed_customers(&mut tx, data.customers)
            .await
            .context("seed customers")?,
        invoices: repo::seed_invoices(&mut tx, data.invoices)
            .await
            .context("seed invoices")?,
        revenue: repo::seed_revenue(&mut tx, data.revenue)
            .await
            .context("seed revenue")?,
    };

    tx.commit().await.context("commit tx")?;

    info!(
        users = report.users,
        customers = report.customers,
        invoices = report.invoices,
        revenue = report.revenue,
        "database seeded"
    );
    Ok(report)
}
