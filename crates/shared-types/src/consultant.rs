use serde::{Deserialize, Serialize};

/// Employment arrangement of a consultant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConsultantType {
    InHouse,
    Freelancer,
}

impl ConsultantType {
    pub fn label(&self) -> &'static str {
        match self {
            ConsultantType::InHouse => "In-house",
            ConsultantType::Freelancer => "Freelancer",
        }
    }
}

/// A consultant on the roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Consultant {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub kind: ConsultantType,
    pub skills: Vec<String>,
    pub availability: bool,
    pub hourly_rate: f64,
    pub daily_rate: f64,
    pub monthly_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub profile_completed: bool,
    pub created_at: String,
}

impl Consultant {
    pub fn availability_label(&self) -> &'static str {
        if self.availability {
            "Available"
        } else {
            "Unavailable"
        }
    }
}
