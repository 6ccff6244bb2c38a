use super::dto::{FieldErrors, InvoiceForm, InvoiceStatus, ValidInvoice};

pub(crate) const MSG_CUSTOMER: &str = "Please select a customer.";
pub(crate) const MSG_AMOUNT_MISSING: &str = "Please enter an amount.";
pub(crate) const MSG_AMOUNT_INVALID: &str = "Please enter a valid amount.";
pub(crate) const MSG_AMOUNT_RANGE: &str = "Amount is too large.";
pub(crate) const MSG_STATUS_MISSING: &str = "Please select an invoice status.";
pub(crate) const MSG_STATUS_INVALID: &str = "Invalid status. Expected 'pending' or 'paid'.";

/// Validate a submitted form. All fields are checked so every failing field
/// is reported at once.
pub fn validate_form(form: &InvoiceForm) -> Result<ValidInvoice, FieldErrors> {
    let mut errors = FieldErrors::default();

    let customer_id = match form.customer_id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => Some(id.to_string()),
        _ => {
            errors.customer_id.push(MSG_CUSTOMER.into());
            None
        }
    };

    let amount_cents = match form.amount.as_deref().map(str::trim) {
        None | Some("") => {
            errors.amount.push(MSG_AMOUNT_MISSING.into());
            None
        }
        Some(raw) => match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => match to_cents(v) {
                Some(cents) => Some(cents),
                None => {
                    errors.amount.push(MSG_AMOUNT_RANGE.into());
                    None
                }
            },
            _ => {
                errors.amount.push(MSG_AMOUNT_INVALID.into());
                None
            }
        },
    };

    let status = match form.status.as_deref() {
        None | Some("") => {
            errors.status.push(MSG_STATUS_MISSING.into());
            None
        }
        Some(raw) => match raw.parse::<InvoiceStatus>() {
            Ok(s) => Some(s),
            Err(()) => {
                errors.status.push(MSG_STATUS_INVALID.into());
                None
            }
        },
    };

    match (customer_id, amount_cents, status) {
        (Some(customer_id), Some(amount_cents), Some(status)) => Ok(ValidInvoice {
            customer_id,
            amount_cents,
            status,
        }),
        _ => {
            debug_assert!(!errors.is_empty());
            Err(errors)
        }
    }
}

/// Convert a currency amount to cents for the `INT` column.
///
/// Rounds to the nearest cent so values such as `19.99` (which is
/// `1998.999...` after scaling) land on `1999`.
pub fn to_cents(amount: f64) -> Option<i32> {
    let cents = (amount * 100.0).round();
    if cents < i32::MIN as f64 || cents > i32::MAX as f64 {
        return None;
    }
    Some(cents as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(customer_id: Option<&str>, amount: Option<&str>, status: Option<&str>) -> InvoiceForm {
        InvoiceForm {
            customer_id: customer_id.map(Into::into),
            amount: amount.map(Into::into),
            status: status.map(Into::into),
        }
    }

    #[test]
    fn valid_form_converts_amount_to_cents() {
        let valid = validate_form(&form(Some("c1"), Some("50.00"), Some("pending"))).unwrap();
        assert_eq!(
            valid,
            ValidInvoice {
                customer_id: "c1".into(),
                amount_cents: 5000,
                status: InvoiceStatus::Pending,
            }
        );
    }

    #[test]
    fn amount_tolerates_surrounding_whitespace() {
        let valid = validate_form(&form(Some("c1"), Some(" 12.5 "), Some("paid"))).unwrap();
        assert_eq!(valid.amount_cents, 1250);
        assert_eq!(valid.status, InvoiceStatus::Paid);
    }

    #[test]
    fn to_cents_rounds_float_artifacts() {
        assert_eq!(to_cents(19.99), Some(1999));
        assert_eq!(to_cents(0.1 + 0.2), Some(30));
        assert_eq!(to_cents(157.95), Some(15795));
        assert_eq!(to_cents(0.0), Some(0));
        assert_eq!(to_cents(-3.5), Some(-350));
    }

    #[test]
    fn to_cents_rejects_out_of_range() {
        assert_eq!(to_cents(1e12), None);
        assert_eq!(to_cents(-1e12), None);
    }

    #[test]
    fn missing_customer_is_reported() {
        let errors = validate_form(&form(None, Some("10"), Some("paid"))).unwrap_err();
        assert_eq!(errors.customer_id, vec![MSG_CUSTOMER.to_string()]);
        assert!(errors.amount.is_empty());
        assert!(errors.status.is_empty());

        let errors = validate_form(&form(Some("  "), Some("10"), Some("paid"))).unwrap_err();
        assert_eq!(errors.customer_id, vec![MSG_CUSTOMER.to_string()]);
    }

    #[test]
    fn non_numeric_amount_is_reported() {
        for raw in ["abc", "12,50", "NaN", "inf", "1.2.3"] {
            let errors = validate_form(&form(Some("c1"), Some(raw), Some("paid"))).unwrap_err();
            assert_eq!(errors.amount, vec![MSG_AMOUNT_INVALID.to_string()], "{raw}");
        }
    }

    #[test]
    fn empty_amount_is_missing() {
        let errors = validate_form(&form(Some("c1"), Some(""), Some("paid"))).unwrap_err();
        assert_eq!(errors.amount, vec![MSG_AMOUNT_MISSING.to_string()]);
    }

    #[test]
    fn huge_amount_is_out_of_range() {
        let errors = validate_form(&form(Some("c1"), Some("99999999999"), Some("paid"))).unwrap_err();
        assert_eq!(errors.amount, vec![MSG_AMOUNT_RANGE.to_string()]);
    }

    #[test]
    fn unknown_status_is_reported() {
        let errors = validate_form(&form(Some("c1"), Some("1"), Some("overdue"))).unwrap_err();
        assert_eq!(errors.status, vec![MSG_STATUS_INVALID.to_string()]);

        let errors = validate_form(&form(Some("c1"), Some("1"), None)).unwrap_err();
        assert_eq!(errors.status, vec![MSG_STATUS_MISSING.to_string()]);
    }

    #[test]
    fn every_failing_field_is_reported() {
        let errors = validate_form(&InvoiceForm::default()).unwrap_err();
        assert_eq!(errors.customer_id.len(), 1);
        assert_eq!(errors.amount.len(), 1);
        assert_eq!(errors.status.len(), 1);
    }
}
