use serde::{Deserialize, Serialize};

use crate::models::UserRole;

/// A dashboard section reachable from the sidebar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Overview,
    Consultants,
    Projects,
    Timesheets,
    Profile,
    Billing,
    Reports,
}

/// Every section that has a panel renderer.
pub const ALL_SECTIONS: &[Section] = &[
    Section::Overview,
    Section::Consultants,
    Section::Projects,
    Section::Timesheets,
    Section::Profile,
    Section::Billing,
    Section::Reports,
];

impl Section {
    /// Stable identifier used in URLs and the composer state.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Overview => "overview",
            Section::Consultants => "consultants",
            Section::Projects => "projects",
            Section::Timesheets => "timesheets",
            Section::Profile => "profile",
            Section::Billing => "billing",
            Section::Reports => "reports",
        }
    }

    /// Look up a section by identifier. Unknown ids yield `None`.
    pub fn from_id(id: &str) -> Option<Self> {
        ALL_SECTIONS.iter().copied().find(|s| s.id() == id)
    }

    /// Default label when no role-specific label applies.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Consultants => "Consultants",
            Section::Projects => "Projects",
            Section::Timesheets => "Timesheets",
            Section::Profile => "My Profile",
            Section::Billing => "Billing",
            Section::Reports => "Reports",
        }
    }
}

/// Icon reference for a nav item. Rendering is up to the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionIcon {
    User,
    FileText,
    Clock,
}

/// One sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub section: Section,
    pub label: &'static str,
    pub icon: SectionIcon,
}

const fn item(section: Section, label: &'static str, icon: SectionIcon) -> NavItem {
    NavItem {
        section,
        label,
        icon,
    }
}

const OVERVIEW: NavItem = item(Section::Overview, "Overview", SectionIcon::User);

const BASE_NAV: &[NavItem] = &[OVERVIEW];

const ADMIN_NAV: &[NavItem] = &[
    OVERVIEW,
    item(Section::Consultants, "Consultants", SectionIcon::User),
    item(Section::Projects, "Projects", SectionIcon::FileText),
    item(Section::Reports, "Reports", SectionIcon::FileText),
];

const PROJECT_MANAGER_NAV: &[NavItem] = &[
    OVERVIEW,
    item(Section::Projects, "My Projects", SectionIcon::FileText),
    item(Section::Timesheets, "Timesheet Approval", SectionIcon::Clock),
];

const CONSULTANT_NAV: &[NavItem] = &[
    OVERVIEW,
    item(Section::Profile, "My Profile", SectionIcon::User),
    item(Section::Timesheets, "Timesheets", SectionIcon::Clock),
    item(Section::Projects, "My Projects", SectionIcon::FileText),
];

const FINANCE_HEAD_NAV: &[NavItem] = &[
    OVERVIEW,
    item(Section::Billing, "Billing", SectionIcon::FileText),
    item(Section::Reports, "Financial Reports", SectionIcon::FileText),
];

/// Sidebar entries for a role, in display order. Always starts with Overview.
pub fn nav_items_for(role: UserRole) -> &'static [NavItem] {
    match role {
        UserRole::Admin => ADMIN_NAV,
        UserRole::ProjectManager => PROJECT_MANAGER_NAV,
        UserRole::Consultant => CONSULTANT_NAV,
        UserRole::FinanceHead => FINANCE_HEAD_NAV,
    }
}

/// Sidebar entries for a raw role string. Unmapped roles only get Overview.
pub fn nav_items_for_name(role: &str) -> &'static [NavItem] {
    UserRole::parse(role).map(nav_items_for).unwrap_or(BASE_NAV)
}

/// Ordered sections visible to a role.
pub fn sections_for(role: UserRole) -> Vec<Section> {
    nav_items_for(role).iter().map(|i| i.section).collect()
}

/// Ordered sections for a raw role string, falling back to `[Overview]`.
pub fn sections_for_name(role: &str) -> Vec<Section> {
    nav_items_for_name(role).iter().map(|i| i.section).collect()
}
