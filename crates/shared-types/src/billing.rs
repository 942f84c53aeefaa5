use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
}

/// An invoice for a consultant's work on a project over a billing period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    pub id: String,
    pub consultant_id: String,
    pub project_id: String,
    pub amount: f64,
    pub billing_period_start: String,
    pub billing_period_end: String,
    pub status: InvoiceStatus,
    pub generated_on: String,
}

/// Headline figures for the billing panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BillingSummary {
    pub billable_hours: u32,
    pub outstanding_amount: f64,
    pub outstanding_invoices: u32,
    pub paid_amount: f64,
    pub paid_invoices: u32,
}

impl BillingSummary {
    /// Summarize a set of invoices plus the month's billable hours.
    pub fn from_invoices(billable_hours: u32, invoices: &[Invoice]) -> Self {
        let mut summary = Self {
            billable_hours,
            outstanding_amount: 0.0,
            outstanding_invoices: 0,
            paid_amount: 0.0,
            paid_invoices: 0,
        };
        for invoice in invoices {
            match invoice.status {
                InvoiceStatus::Paid => {
                    summary.paid_amount += invoice.amount;
                    summary.paid_invoices += 1;
                }
                InvoiceStatus::Sent => {
                    summary.outstanding_amount += invoice.amount;
                    summary.outstanding_invoices += 1;
                }
                InvoiceStatus::Draft => {}
            }
        }
        summary
    }
}

/// Group digits with commas, e.g. `1,248`.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a dollar amount with thousands separators and no cents, e.g. `$23,450`.
pub fn format_usd(amount: f64) -> String {
    let whole = amount.round() as i64;
    let grouped = format_count(whole.unsigned_abs());
    if whole < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
