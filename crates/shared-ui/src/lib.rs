//! Styled Dioxus components shared by the dashboard screens.

pub mod components;

pub use components::*;
