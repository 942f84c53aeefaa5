use dioxus::prelude::*;
use shared_types::{demo, Identity};
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};

use super::StatCard;

#[component]
pub fn OverviewPanel(identity: Identity) -> Element {
    let stats = demo::overview_stats();
    let activity = demo::recent_activity();

    rsx! {
        div { class: "panel",
            div { class: "panel-intro",
                h2 { class: "page-title", "Welcome back, {identity.name}!" }
                p { class: "panel-subtitle",
                    "Here's an overview of your consultancy management system."
                }
            }

            div { class: "stat-grid",
                for stat in stats {
                    StatCard {
                        key: "{stat.title}",
                        title: stat.title.clone(),
                        value: stat.value,
                        detail: stat.detail,
                        tone: stat.tone,
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Recent Activity" }
                    CardDescription { "Latest updates from your consultancy system" }
                }
                CardContent {
                    ul { class: "activity-list",
                        for item in activity {
                            li { class: "activity-item", "data-tone": item.tone.as_str(),
                                span { class: "activity-dot" }
                                div {
                                    p { class: "activity-message", "{item.message}" }
                                    p { class: "activity-when", "{item.when}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared_types::UserRole;

    #[test]
    fn greets_by_name_and_shows_stats() {
        let identity = Identity {
            id: "2".into(),
            email: "pm@company.com".into(),
            name: "Project Manager".into(),
            role: UserRole::ProjectManager,
            created_at: Utc::now(),
        };
        let html = dioxus_ssr::render_element(rsx! { OverviewPanel { identity } });
        assert!(html.contains("Welcome back, Project Manager!"), "{html}");
        assert!(html.contains("Pending Timesheets"), "{html}");
        assert!(html.contains("$45,200"), "{html}");
        assert!(html.contains("Timesheet approved for John Doe"), "{html}");
    }
}
