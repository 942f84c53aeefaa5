use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Dashboard user role controlling navigation and panel access.
///
/// - `Admin`: manages consultants, sees every project and the reports.
/// - `ProjectManager`: owns projects and approves timesheets.
/// - `Consultant`: maintains a profile and submits timesheets.
/// - `FinanceHead`: billing and financial reports.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Consultant,
    ProjectManager,
    FinanceHead,
}

/// All roles in display order.
pub const ALL_ROLES: &[UserRole] = &[
    UserRole::Admin,
    UserRole::ProjectManager,
    UserRole::Consultant,
    UserRole::FinanceHead,
];

impl UserRole {
    /// Parse a stored role string. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(UserRole::Admin),
            "consultant" => Some(UserRole::Consultant),
            "project_manager" => Some(UserRole::ProjectManager),
            "finance_head" => Some(UserRole::FinanceHead),
            _ => None,
        }
    }

    /// Snake-case key, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Consultant => "consultant",
            UserRole::ProjectManager => "project_manager",
            UserRole::FinanceHead => "finance_head",
        }
    }

    /// Uppercase label shown in the header badge.
    pub fn badge_label(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::Consultant => "CONSULTANT",
            UserRole::ProjectManager => "PROJECT MANAGER",
            UserRole::FinanceHead => "FINANCE HEAD",
        }
    }

    /// Title-cased label used in profile details.
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Consultant => "Consultant",
            UserRole::ProjectManager => "Project Manager",
            UserRole::FinanceHead => "Finance Head",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An authenticated dashboard user.
///
/// Issued by the session manager on login and never mutated afterwards;
/// a new login replaces it wholesale. Serialized as a flat object so it can
/// be written to the session store as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl Identity {
    pub fn has_role(&self, role: UserRole) -> bool {
        self.role == role
    }
}
