use dioxus::prelude::*;
use shared_types::{demo, format_usd};
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader, PageTitle};

#[component]
pub fn ReportsPanel() -> Element {
    let utilization = demo::utilization();
    let costs = demo::project_costs();

    rsx! {
        div { class: "panel",
            PageHeader {
                PageTitle { "Reports & Analytics" }
            }

            div { class: "two-column",
                Card {
                    CardHeader {
                        CardTitle { "Consultant Utilization" }
                        CardDescription { "Hours worked vs available hours" }
                    }
                    CardContent {
                        for entry in utilization {
                            div { class: "utilization-entry",
                                div { class: "utilization-row",
                                    span { "{entry.consultant_name}" }
                                    span { class: "utilization-percent", "{entry.percent}%" }
                                }
                                div { class: "utilization-track",
                                    div { class: "utilization-fill", style: "{entry.bar_style()}" }
                                }
                            }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "Project Cost Overview" }
                        CardDescription { "Cost breakdown by project" }
                    }
                    CardContent {
                        ul { class: "cost-list",
                            for cost in costs {
                                li { class: "cost-row",
                                    span { "{cost.project_name}" }
                                    span { class: "cost-amount", "{format_usd(cost.cost)}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
