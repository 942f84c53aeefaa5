use dioxus::prelude::*;
use shared_types::{demo, format_count, format_usd, Tone};
use shared_ui::{PageHeader, PageTitle};

use super::StatCard;

#[component]
pub fn BillingPanel() -> Element {
    let summary = demo::billing_summary();

    rsx! {
        div { class: "panel",
            PageHeader {
                PageTitle { "Billing & Invoices" }
            }
            div { class: "stat-grid",
                StatCard {
                    title: "Total Billable Hours",
                    value: format_count(u64::from(summary.billable_hours)),
                    detail: "This month",
                    tone: Tone::Info,
                }
                StatCard {
                    title: "Outstanding Invoices",
                    value: format_usd(summary.outstanding_amount),
                    detail: "{summary.outstanding_invoices} invoices pending",
                    tone: Tone::Warning,
                }
                StatCard {
                    title: "Paid This Month",
                    value: format_usd(summary.paid_amount),
                    detail: "{summary.paid_invoices} invoices paid",
                    tone: Tone::Positive,
                }
            }
        }
    }
}
