use time::{macros::date, Date};
use uuid::{uuid, Uuid};

use crate::invoices::dto::InvoiceStatus::{self, Paid, Pending};

/// Namespace for deterministic seed invoice ids.
const INVOICE_NAMESPACE: Uuid = uuid!("7f1b5a2e-3c4d-4e8f-9a0b-1c2d3e4f5a6b");

#[derive(Debug, Clone, Copy)]
pub struct SeedUser {
    pub id: Uuid,
    pub name: &'static str,
    pub email: &'static str,
    pub password: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SeedCustomer {
    pub id: Uuid,
    pub name: &'static str,
    pub email: &'static str,
    pub image_url: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SeedInvoice {
    pub customer_id: Uuid,
    pub amount: i32,
    pub status: InvoiceStatus,
    pub date: Date,
}

impl SeedInvoice {
    /// Stable id derived from the row's contents so reseeding hits `ON CONFLICT (id)`.
    pub fn id(&self) -> Uuid {
        let name = format!(
            "{}:{}:{}:{}",
            self.customer_id, self.amount, self.status, self.date
        );
        Uuid::new_v5(&INVOICE_NAMESPACE, name.as_bytes())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SeedRevenue {
    pub month: &'static str,
    pub revenue: i32,
}

#[derive(Debug, Clone, Copy)]
pub struct SeedData<'a> {
    pub users: &'a [SeedUser],
    pub customers: &'a [SeedCustomer],
    pub invoices: &'a [SeedInvoice],
    pub revenue: &'a [SeedRevenue],
}

impl SeedData<'static> {
    pub fn placeholder() -> Self {
        Self {
            users: USERS,
            customers: CUSTOMERS,
            invoices: INVOICES,
            revenue: REVENUE,
        }
    }
}

const EVIL_RABBIT: Uuid = uuid!("d6e15727-9fe1-4961-8c5b-ea44a9bd81aa");
const DELBA: Uuid = uuid!("3958dc9e-712f-4377-85e9-fec4b6a6442a");
const LEE: Uuid = uuid!("3958dc9e-742f-4377-85e9-fec4b6a6442a");
const MICHAEL: Uuid = uuid!("76d65c26-f784-44a2-ac19-586678f7c2f2");
const AMY: Uuid = uuid!("cc27c14a-0acf-4f4a-a6c9-d45682c144b9");
const BALAZS: Uuid = uuid!("13d07535-c59e-4157-a011-f8d2ef4e0cbb");

pub const USERS: &[SeedUser] = &[SeedUser {
    id: uuid!("410544b2-4001-4271-9855-fec4b6a6442a"),
    name: "User",
    email: "user@nextmail.com",
    password: "123456",
}];

pub const CUSTOMERS: &[SeedCustomer] = &[
    SeedCustomer {
        id: EVIL_RABBIT,
        name: "Evil Rabbit",
        email: "evil@rabbit.com",
        image_url: "/customers/evil-rabbit.png",
    },
    SeedCustomer {
        id: DELBA,
        name: "Delba de Oliveira",
        email: "delba@oliveira.com",
        image_url: "/customers/delba-de-oliveira.png",
    },
    SeedCustomer {
        id: LEE,
        name: "Lee Robinson",
        email: "lee@robinson.com",
        image_url: "/customers/lee-robinson.png",
    },
    SeedCustomer {
        id: MICHAEL,
        name: "Michael Novotny",
        email: "michael@novotny.com",
        image_url: "/customers/michael-novotny.png",
    },
    SeedCustomer {
        id: AMY,
        name: "Amy Burns",
        email: "amy@burns.com",
        image_url: "/customers/amy-burns.png",
    },
    SeedCustomer {
        id: BALAZS,
        name: "Balazs Orban",
        email: "balazs@orban.com",
        image_url: "/customers/balazs-orban.png",
    },
];

const fn invoice(customer_id: Uuid, amount: i32, status: InvoiceStatus, date: Date) -> SeedInvoice {
    SeedInvoice {
        customer_id,
        amount,
        status,
        date,
    }
}

pub const INVOICES: &[SeedInvoice] = &[
    invoice(EVIL_RABBIT, 15795, Pending, date!(2022 - 12 - 06)),
    invoice(DELBA, 20348, Pending, date!(2022 - 11 - 14)),
    invoice(AMY, 3040, Paid, date!(2022 - 10 - 29)),
    invoice(MICHAEL, 44800, Paid, date!(2023 - 09 - 10)),
    invoice(BALAZS, 34577, Pending, date!(2023 - 08 - 05)),
    invoice(LEE, 54246, Pending, date!(2023 - 07 - 16)),
    invoice(EVIL_RABBIT, 666, Pending, date!(2023 - 06 - 27)),
    invoice(MICHAEL, 32545, Paid, date!(2023 - 06 - 09)),
    invoice(AMY, 1250, Paid, date!(2023 - 06 - 17)),
    invoice(BALAZS, 8546, Paid, date!(2023 - 06 - 07)),
    invoice(DELBA, 500, Paid, date!(2023 - 08 - 19)),
    invoice(BALAZS, 8945, Paid, date!(2023 - 06 - 03)),
    invoice(LEE, 1000, Paid, date!(2022 - 06 - 05)),
];

pub const REVENUE: &[SeedRevenue] = &[
    SeedRevenue { month: "Jan", revenue: 2000 },
    SeedRevenue { month: "Feb", revenue: 1800 },
    SeedRevenue { month: "Mar", revenue: 2200 },
    SeedRevenue { month: "Apr", revenue: 2500 },
    SeedRevenue { month: "May", revenue: 2300 },
    SeedRevenue { month: "Jun", revenue: 3200 },
    SeedRevenue { month: "Jul", revenue: 3500 },
    SeedRevenue { month: "Aug", revenue: 3700 },
    SeedRevenue { month: "Sep", revenue: 2500 },
    SeedRevenue { month: "Oct", revenue: 2800 },
    SeedRevenue { month: "Nov", revenue: 3000 },
    SeedRevenue { month: "Dec", revenue: 4800 },
];
