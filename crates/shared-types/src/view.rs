use serde::{Deserialize, Serialize};

use crate::access::is_authorized;
use crate::models::{Identity, UserRole};
use crate::navigation::Section;

/// Outcome of composing the main content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Render the panel for this section.
    Panel(Section),
    /// The role may not see the requested section.
    Denied(Section),
}

impl View {
    pub fn is_denied(&self) -> bool {
        matches!(self, View::Denied(_))
    }
}

/// Decide what to render for `identity` when `section_id` is selected.
///
/// Ids without a renderer fall back to the overview panel.
pub fn compose(identity: &Identity, section_id: &str) -> View {
    let section = Section::from_id(section_id).unwrap_or(Section::Overview);
    if is_authorized(identity.role, section) {
        View::Panel(section)
    } else {
        View::Denied(section)
    }
}

/// Holds the selected section for the dashboard.
///
/// Selection stores the raw id unchecked; validation happens in
/// [`ViewComposer::render`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewComposer {
    active_section: String,
}

impl Default for ViewComposer {
    fn default() -> Self {
        Self {
            active_section: Section::Overview.id().to_string(),
        }
    }
}

impl ViewComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start on a specific section id, e.g. from a deep link.
    pub fn starting_at(section_id: impl Into<String>) -> Self {
        Self {
            active_section: section_id.into(),
        }
    }

    pub fn select_section(&mut self, section_id: impl Into<String>) {
        self.active_section = section_id.into();
    }

    pub fn active_section(&self) -> &str {
        &self.active_section
    }

    /// Whether a sidebar entry for `section` should be highlighted.
    pub fn is_active(&self, section: Section) -> bool {
        self.active_section == section.id()
    }

    pub fn render(&self, identity: &Identity) -> View {
        compose(identity, &self.active_section)
    }
}

// ---------------------------------------------------------------------------
// Panel presentation
//
// These only pick labels and which buttons appear. Access is decided by
// `compose`, never here.
// ---------------------------------------------------------------------------

pub fn projects_heading(role: UserRole) -> &'static str {
    if role == UserRole::Admin {
        "All Projects"
    } else {
        "My Projects"
    }
}

pub fn can_create_project(role: UserRole) -> bool {
    role == UserRole::Admin
}

pub fn timesheets_heading(role: UserRole) -> &'static str {
    if role == UserRole::ProjectManager {
        "Timesheet Approvals"
    } else {
        "My Timesheets"
    }
}

pub fn can_submit_timesheet(role: UserRole) -> bool {
    role == UserRole::Consultant
}

pub fn can_review_timesheets(role: UserRole) -> bool {
    role == UserRole::ProjectManager
}
