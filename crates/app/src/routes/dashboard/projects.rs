use dioxus::prelude::*;
use shared_types::{can_create_project, demo, projects_heading, Project, ProjectStatus, UserRole};
use shared_ui::{
    Badge, BadgeVariant, Button, Card, CardContent, CardDescription, CardHeader, CardTitle,
    PageActions, PageHeader, PageTitle,
};

#[component]
pub fn ProjectsPanel(role: UserRole) -> Element {
    let projects = demo::projects();

    rsx! {
        div { class: "panel",
            PageHeader {
                PageTitle { "{projects_heading(role)}" }
                if can_create_project(role) {
                    PageActions {
                        Button { "Create New Project" }
                    }
                }
            }

            div { class: "project-grid",
                for project in projects {
                    ProjectCard { key: "{project.id}", project: project.clone() }
                }
            }
        }
    }
}

fn status_variant(status: ProjectStatus) -> BadgeVariant {
    match status {
        ProjectStatus::Active => BadgeVariant::Success,
        ProjectStatus::Completed => BadgeVariant::Secondary,
        ProjectStatus::OnHold => BadgeVariant::Warning,
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    rsx! {
        Card {
            CardHeader {
                div { class: "project-card-heading",
                    div {
                        CardTitle { "{project.name}" }
                        CardDescription { "{project.project_code}" }
                    }
                    Badge { variant: status_variant(project.status), "{project.status.label()}" }
                }
            }
            CardContent {
                p { class: "project-description", "{project.description}" }
                dl { class: "project-facts",
                    div {
                        dt { "Consultants:" }
                        dd { "{project.consultant_count}" }
                    }
                    div {
                        dt { "Billing:" }
                        dd { "{project.billing_cycle.label()}" }
                    }
                    div {
                        dt { "End Date:" }
                        dd { "{project.end_date_display()}" }
                    }
                }
            }
        }
    }
}
