use dioxus::prelude::*;

/// Placeholder for a section the current role may not open.
#[component]
pub fn AccessDenied() -> Element {
    rsx! {
        div { class: "access-denied", role: "alert", "Access denied" }
    }
}
