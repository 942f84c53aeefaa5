pub mod billing;
pub mod consultants;
pub mod denied;
pub mod overview;
pub mod profile;
pub mod projects;
pub mod reports;
pub mod timesheets;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdClock, LdFileText, LdLogOut, LdUser};
use dioxus_free_icons::Icon;
use shared_types::{
    nav_items_for, Identity, Section, SectionIcon, Tone, UserRole, View, ViewComposer,
};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardHeader, CardTitle, Sidebar, SidebarMenu, SidebarMenuButton, SidebarMenuItem, ToastOptions,
};

use crate::auth::{sign_out, use_auth, use_session};

/// Signed-in shell: header, role navigation and the selected panel.
///
/// `initial_section` seeds the selection; later sidebar clicks change it
/// without touching the URL.
#[component]
pub fn Dashboard(initial_section: String) -> Element {
    let mut auth = use_auth();
    let session = use_session();
    let toast = use_toast();
    let mut composer = use_signal(|| ViewComposer::starting_at(initial_section.clone()));

    let Some(identity) = auth.current_user.read().clone() else {
        return rsx! {};
    };
    let view = composer.read().render(&identity);
    let active = composer.read().active_section().to_string();

    let handle_logout = move |_| {
        sign_out(&session, &mut auth);
        toast.success(
            "Logged Out".to_string(),
            ToastOptions::new().description("You have been successfully logged out."),
        );
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard",
            DashboardHeader { identity: identity.clone(), on_logout: handle_logout }
            div { class: "dashboard-body",
                SectionNav {
                    role: identity.role,
                    active,
                    on_select: move |section: Section| composer.write().select_section(section.id()),
                }
                main { class: "dashboard-main",
                    PanelOutlet { identity: identity.clone(), view }
                }
            }
        }
    }
}

/// Badge colour per role.
pub fn role_badge_variant(role: UserRole) -> BadgeVariant {
    match role {
        UserRole::Admin => BadgeVariant::Destructive,
        UserRole::ProjectManager => BadgeVariant::Info,
        UserRole::Consultant => BadgeVariant::Success,
        UserRole::FinanceHead => BadgeVariant::Accent,
    }
}

#[component]
pub fn DashboardHeader(identity: Identity, on_logout: EventHandler<MouseEvent>) -> Element {
    rsx! {
        header { class: "dashboard-header",
            h1 { class: "dashboard-title", "Consultancy Management System" }
            div { class: "dashboard-user",
                span { class: "dashboard-user-name", "{identity.name}" }
                Badge { variant: role_badge_variant(identity.role), "{identity.role.badge_label()}" }
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Small,
                    onclick: move |evt| on_logout.call(evt),
                    Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                    span { "Logout" }
                }
            }
        }
    }
}

fn nav_icon(icon: SectionIcon) -> Element {
    match icon {
        SectionIcon::User => rsx! { Icon::<LdUser> { icon: LdUser, width: 20, height: 20 } },
        SectionIcon::FileText => {
            rsx! { Icon::<LdFileText> { icon: LdFileText, width: 20, height: 20 } }
        }
        SectionIcon::Clock => rsx! { Icon::<LdClock> { icon: LdClock, width: 20, height: 20 } },
    }
}

/// Sidebar entries for `role`, in display order.
#[component]
pub fn SectionNav(role: UserRole, active: String, on_select: EventHandler<Section>) -> Element {
    rsx! {
        Sidebar {
            SidebarMenu {
                for item in nav_items_for(role).iter().copied() {
                    SidebarMenuItem { key: "{item.section.id()}",
                        SidebarMenuButton {
                            active: active == item.section.id(),
                            onclick: move |_| on_select.call(item.section),
                            {nav_icon(item.icon)}
                            span { "{item.label}" }
                        }
                    }
                }
            }
        }
    }
}

/// Dispatch a composed [`View`] to its panel.
#[component]
pub fn PanelOutlet(identity: Identity, view: View) -> Element {
    match view {
        View::Denied(_) => rsx! { denied::AccessDenied {} },
        View::Panel(Section::Overview) => rsx! { overview::OverviewPanel { identity } },
        View::Panel(Section::Consultants) => rsx! { consultants::ConsultantsPanel {} },
        View::Panel(Section::Projects) => rsx! { projects::ProjectsPanel { role: identity.role } },
        View::Panel(Section::Timesheets) => {
            rsx! { timesheets::TimesheetsPanel { role: identity.role } }
        }
        View::Panel(Section::Profile) => rsx! { profile::ProfilePanel { identity } },
        View::Panel(Section::Billing) => rsx! { billing::BillingPanel {} },
        View::Panel(Section::Reports) => rsx! { reports::ReportsPanel {} },
    }
}

/// Headline number with a coloured detail line.
#[component]
pub fn StatCard(title: String, value: String, detail: String, tone: Tone) -> Element {
    rsx! {
        Card { class: "stat-card",
            CardHeader {
                CardTitle { class: "stat-title", "{title}" }
            }
            CardContent {
                div { class: "stat-value", "{value}" }
                p { class: "stat-detail", "data-tone": tone.as_str(), "{detail}" }
            }
        }
    }
}
