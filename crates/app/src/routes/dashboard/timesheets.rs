use dioxus::prelude::*;
use shared_types::{
    can_review_timesheets, can_submit_timesheet, demo, timesheets_heading, Timesheet,
    TimesheetStatus, UserRole,
};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent, DataTable,
    DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, PageActions,
    PageHeader, PageTitle,
};

#[component]
pub fn TimesheetsPanel(role: UserRole) -> Element {
    let timesheets = demo::timesheets();
    let reviewer = can_review_timesheets(role);

    rsx! {
        div { class: "panel",
            PageHeader {
                PageTitle { "{timesheets_heading(role)}" }
                if can_submit_timesheet(role) {
                    PageActions {
                        Button { "Submit New Timesheet" }
                    }
                }
            }

            Card {
                CardContent { class: "flush",
                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "Date" }
                            DataTableColumn { "Project" }
                            DataTableColumn { "Hours" }
                            DataTableColumn { "Status" }
                            DataTableColumn { "Actions" }
                        }
                        DataTableBody {
                            for timesheet in timesheets {
                                TimesheetRow { key: "{timesheet.id}", timesheet: timesheet.clone(), reviewer }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn status_variant(status: TimesheetStatus) -> BadgeVariant {
    match status {
        TimesheetStatus::Pending => BadgeVariant::Warning,
        TimesheetStatus::Approved => BadgeVariant::Success,
        TimesheetStatus::Rejected => BadgeVariant::Destructive,
    }
}

#[component]
fn TimesheetRow(timesheet: Timesheet, reviewer: bool) -> Element {
    rsx! {
        DataTableRow {
            DataTableCell { "{timesheet.date}" }
            DataTableCell { "{timesheet.project_name}" }
            DataTableCell { "{timesheet.hours_display()}" }
            DataTableCell {
                Badge { variant: status_variant(timesheet.status), "{timesheet.status.label()}" }
            }
            DataTableCell {
                if reviewer {
                    div { class: "row-actions",
                        Button { variant: ButtonVariant::Outline, size: ButtonSize::Small, class: "approve", "Approve" }
                        Button { variant: ButtonVariant::Outline, size: ButtonSize::Small, class: "reject", "Reject" }
                    }
                } else {
                    Button { variant: ButtonVariant::Outline, size: ButtonSize::Small, "View" }
                }
            }
        }
    }
}
