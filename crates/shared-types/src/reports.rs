use serde::{Deserialize, Serialize};

/// Colour hint for a stat's trend line or an activity dot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Positive,
    Info,
    Warning,
    Accent,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Positive => "positive",
            Tone::Info => "info",
            Tone::Warning => "warning",
            Tone::Accent => "accent",
        }
    }
}

/// A headline number on the overview panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverviewStat {
    pub title: String,
    pub value: String,
    pub detail: String,
    pub tone: Tone,
}

/// An entry in the recent-activity feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityItem {
    pub message: String,
    pub when: String,
    pub tone: Tone,
}

/// Hours worked against hours available for one consultant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UtilizationEntry {
    pub consultant_name: String,
    /// Whole percent, 0..=100.
    pub percent: u8,
}

impl UtilizationEntry {
    /// Inline style for the progress bar fill.
    pub fn bar_style(&self) -> String {
        format!("width: {}%;", self.percent.min(100))
    }
}

/// Cost to date of one project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectCost {
    pub project_name: String,
    pub cost: f64,
}
