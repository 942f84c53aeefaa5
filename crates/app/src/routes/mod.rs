pub mod dashboard;
pub mod login;
pub mod not_found;

use crate::auth::use_auth;
use dashboard::Dashboard;
use dioxus::prelude::*;
use login::Login;
use not_found::NotFound;
use shared_types::Section;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(SessionGate)]
    #[route("/")]
    Home {},
    /// Deep link to a dashboard section. Access is still checked when the
    /// section renders.
    #[route("/section/:id")]
    SectionView { id: String },
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Shows the login form until a session exists.
#[component]
fn SessionGate() -> Element {
    let auth = use_auth();

    if !*auth.restored.read() {
        return rsx! {
            div { class: "session-loading",
                p { "Loading..." }
            }
        };
    }

    if auth.is_authenticated() {
        rsx! { Outlet::<Route> {} }
    } else {
        rsx! { Login {} }
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        Dashboard { initial_section: Section::Overview.id().to_string() }
    }
}

#[component]
fn SectionView(id: String) -> Element {
    rsx! {
        Dashboard { key: "{id}", initial_section: id.clone() }
    }
}
