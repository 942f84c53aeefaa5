use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TimesheetStatus {
    Pending,
    Approved,
    Rejected,
}

impl TimesheetStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TimesheetStatus::Pending => "Pending",
            TimesheetStatus::Approved => "Approved",
            TimesheetStatus::Rejected => "Rejected",
        }
    }
}

/// One day of logged work.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Timesheet {
    pub id: String,
    pub consultant_id: String,
    pub project_id: String,
    /// Display name of the project, denormalized for tables.
    pub project_name: String,
    pub date: String,
    pub hours_worked: f64,
    pub description: String,
    pub status: TimesheetStatus,
    pub submitted_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<String>,
}

impl Timesheet {
    /// Hours with one decimal place, as shown in tables.
    pub fn hours_display(&self) -> String {
        format!("{:.1}", self.hours_worked)
    }
}
