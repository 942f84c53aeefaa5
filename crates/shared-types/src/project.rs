use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How a project is invoiced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BillingCycle {
    Hourly,
    Daily,
    Monthly,
    ProjectBased,
}

impl BillingCycle {
    pub fn label(&self) -> &'static str {
        match self {
            BillingCycle::Hourly => "Hourly",
            BillingCycle::Daily => "Daily",
            BillingCycle::Monthly => "Monthly",
            BillingCycle::ProjectBased => "Project-based",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Active,
    Completed,
    OnHold,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::OnHold => "On Hold",
        }
    }
}

/// A client engagement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: String,
    pub project_code: String,
    pub name: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub billing_cycle: BillingCycle,
    pub start_date: String,
    pub end_date: String,
    pub status: ProjectStatus,
    pub created_by: String,
    /// Number of consultants currently assigned.
    #[serde(default)]
    pub consultant_count: u32,
}

impl Project {
    /// End date as `Dec 31, 2024`; unparseable dates are shown verbatim.
    pub fn end_date_display(&self) -> String {
        NaiveDate::parse_from_str(&self.end_date, "%Y-%m-%d")
            .map(|d| d.format("%b %-d, %Y").to_string())
            .unwrap_or_else(|_| self.end_date.clone())
    }
}

/// A consultant's placement on a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assignment {
    pub id: String,
    pub consultant_id: String,
    pub project_id: String,
    pub start_date: String,
    pub end_date: String,
    pub status: AssignmentStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    Active,
    Completed,
}
