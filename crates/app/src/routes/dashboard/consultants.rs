use dioxus::prelude::*;
use shared_types::{demo, Consultant};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent, DataTable,
    DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, PageActions,
    PageHeader, PageTitle,
};

/// Admin-only roster of consultants.
#[component]
pub fn ConsultantsPanel() -> Element {
    let consultants = demo::consultants();

    rsx! {
        div { class: "panel",
            PageHeader {
                PageTitle { "Consultants" }
                PageActions {
                    Button { "Add New Consultant" }
                }
            }

            Card {
                CardContent { class: "flush",
                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "Name" }
                            DataTableColumn { "Type" }
                            DataTableColumn { "Skills" }
                            DataTableColumn { "Status" }
                            DataTableColumn { "Actions" }
                        }
                        DataTableBody {
                            for consultant in consultants {
                                ConsultantRow { key: "{consultant.id}", consultant: consultant.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ConsultantRow(consultant: Consultant) -> Element {
    let status_variant = if consultant.availability {
        BadgeVariant::Success
    } else {
        BadgeVariant::Secondary
    };

    rsx! {
        DataTableRow {
            DataTableCell {
                div { class: "cell-primary", "{consultant.name}" }
                div { class: "cell-secondary", "{consultant.email}" }
            }
            DataTableCell {
                Badge { variant: BadgeVariant::Secondary, "{consultant.kind.label()}" }
            }
            DataTableCell {
                div { class: "tag-list",
                    for skill in consultant.skills.iter() {
                        Badge { key: "{skill}", variant: BadgeVariant::Outline, "{skill}" }
                    }
                }
            }
            DataTableCell {
                Badge { variant: status_variant, "{consultant.availability_label()}" }
            }
            DataTableCell {
                Button { variant: ButtonVariant::Outline, size: ButtonSize::Small, "View Details" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_demo_consultant() {
        let html = dioxus_ssr::render_element(rsx! { ConsultantsPanel {} });
        assert!(html.contains("John Doe"), "{html}");
        assert!(html.contains("john@company.com"), "{html}");
        assert!(html.contains("In-house"), "{html}");
        assert!(html.contains("TypeScript"), "{html}");
        assert!(html.contains("Available"), "{html}");
        assert!(html.contains("Add New Consultant"), "{html}");
    }
}
