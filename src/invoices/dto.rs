use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

/// Raw invoice form as submitted. Every field is optional so that a missing
/// field surfaces as a validation error instead of an extractor rejection.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct InvoiceForm {
    #[serde(rename = "customerId")]
    pub customer_id: Option<String>,
    pub amount: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }
}

impl FromStr for InvoiceStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(InvoiceStatus::Pending),
            "paid" => Ok(InvoiceStatus::Paid),
            _ => Err(()),
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Form after validation, amount already in cents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidInvoice {
    pub customer_id: String,
    pub amount_cents: i32,
    pub status: InvoiceStatus,
}

/// Per-field validation messages, serialized with the form's field names.
#[derive(Debug, Default, Clone, Serialize, PartialEq, Eq)]
pub struct FieldErrors {
    #[serde(rename = "customerId", skip_serializing_if = "Vec::is_empty")]
    pub customer_id: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub amount: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.customer_id.is_empty() && self.amount.is_empty() && self.status.is_empty()
    }
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub query: String,
    #[serde(default = "default_page")]
    pub page: i64,
}
fn default_page() -> i64 {
    1
}

#[derive(Debug, Clone, Serialize)]
pub struct InvoiceListItem {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub amount: i32,
    pub status: String,
    #[serde(with = "crate::invoices::dto::iso_date")]
    pub date: Date,
}

/// Invoice as shown on the edit form; `amount` is back in currency units.
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceForEdit {
    pub id: Uuid,
    #[serde(rename = "customerId")]
    pub customer_id: Uuid,
    pub amount: f64,
    pub status: String,
    #[serde(with = "crate::invoices::dto::iso_date")]
    pub date: Date,
}

pub(crate) mod iso_date {
    use serde::Serializer;
    use time::{macros::format_description, Date};

    pub fn serialize<S: Serializer>(date: &Date, s: S) -> Result<S::Ok, S::Error> {
        let fmt = format_description!("[year]-[month]-[day]");
        let out = date.format(&fmt).map_err(serde::ser::Error::custom)?;
        s.serialize_str(&out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_only_known_values() {
        assert_eq!("pending".parse::<InvoiceStatus>(), Ok(InvoiceStatus::Pending));
        assert_eq!("paid".parse::<InvoiceStatus>(), Ok(InvoiceStatus::Paid));
        assert!("Paid".parse::<InvoiceStatus>().is_err());
        assert!("overdue".parse::<InvoiceStatus>().is_err());
    }

    #[test]
    fn field_errors_serialize_with_form_names() {
        let errors = FieldErrors {
            customer_id: vec!["Please select a customer.".into()],
            ..Default::default()
        };
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["customerId"][0], "Please select a customer.");
        assert!(json.get("amount").is_none());
        assert!(json.get("status").is_none());
    }

    #[test]
    fn list_item_date_is_calendar_day() {
        let item = InvoiceListItem {
            id: Uuid::nil(),
            customer_id: Uuid::nil(),
            name: "Lee Robinson".into(),
            email: "lee@robinson.com".into(),
            image_url: "/customers/lee-robinson.png".into(),
            amount: 1000,
            status: "paid".into(),
            date: time::macros::date!(2022 - 06 - 05),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["date"], "2022-06-05");
    }
}
