use anyhow::Context;
use sqlx::PgConnection;

use super::data::{SeedCustomer, SeedInvoice, SeedRevenue, SeedUser};

pub async fn ensure_uuid_extension(conn: &mut PgConnection) -> anyhow::Result<()> {
    sqlx::query(r#"CREATE EXTENSION IF NOT EXISTS "uuid-ossp""#)
        .execute(&mut *conn)
        .await
        .context("create uuid-ossp extension")?;
    Ok(())
}

/// Create `users` if absent and insert users whose id is not yet present.
/// `users` pairs each seed user with its password hash.
pub async fn seed_users(
    conn: &mut PgConnection,
    users: &[(SeedUser, String)],
) -> anyhow::Result<u64> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL
        )
        "#,
    )
    .execute(&mut *conn)
    .await
    .context("create users table")?;

    let mut inserted = 0;
    for (user, hash) in users {
        let res = sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(user.id)
        .bind(user.name)
        .bind(user.email)
        .bind(hash)
        .execute(&mut *conn)
        .await
        .with_context(|| format!("insert user {}", user.id))?;
        inserted += res.rows_affected();
    }
    Ok(inserted)
}

pub async fn seed_customers(
    conn: &mut PgConnection,
    customers: &[SeedCustomer],
) -> anyhow::Result<u64> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS customers (
            id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL,
            image_url VARCHAR(255) NOT NULL
        )
        "#,
    )
    .execute(&mut *conn)
    .await
    .context("create customers table")?;

    let mut inserted = 0;
    for customer in customers {
        let res = sqlx::query(
            r#"
            INSERT INTO customers (id, name, email, image_url)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(customer.id)
        .bind(customer.name)
        .bind(customer.email)
        .bind(customer.image_url)
        .execute(&mut *conn)
        .await
        .with_context(|| format!("insert customer {}", customer.id))?;
        inserted += res.rows_affected();
    }
    Ok(inserted)
}

pub async fn seed_invoices(
    conn: &mut PgConnection,
    invoices: &[SeedInvoice],
) -> anyhow::Result<u64> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS invoices (
            id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
            customer_id UUID NOT NULL,
            amount INT NOT NULL,
            status VARCHAR(255) NOT NULL CHECK (status IN ('pending', 'paid')),
            date DATE NOT NULL
        )
        "#,
    )
    .execute(&mut *conn)
    .await
    .context("create invoices table")?;

    let mut inserted = 0;
    for invoice in invoices {
        let id = invoice.id();
        let res = sqlx::query(
            r#"
            INSERT INTO invoices (id, customer_id, amount, status, date)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(id)
        .bind(invoice.customer_id)
        .bind(invoice.amount)
        .bind(invoice.status.as_str())
        .bind(invoice.date)
        .execute(&mut *conn)
        .await
        .with_context(|| format!("insert invoice {}", id))?;
        inserted += res.rows_affected();
    }
    Ok(inserted)
}

pub async fn seed_revenue(
    conn: &mut PgConnection,
    revenue: &[SeedRevenue],
) -> anyhow::Result<u64> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS revenue (
            month VARCHAR(4) NOT NULL PRIMARY KEY,
            revenue INT NOT NULL
        )
        "#,
    )
    .execute(&mut *conn)
    .await
    .context("create revenue table")?;

    let mut inserted = 0;
    for rev in revenue {
        let res = sqlx::query(
            r#"
            INSERT INTO revenue (month, revenue)
            VALUES ($1, $2)
            ON CONFLICT (month) DO NOTHING
            "#,
        )
        .bind(rev.month)
        .bind(rev.revenue)
        .execute(&mut *conn)
        .await
        .with_context(|| format!("insert revenue {}", rev.month))?;
        inserted += res.rows_affected();
    }
    Ok(inserted)
}
