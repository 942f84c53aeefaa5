//! Fixed demo dataset shown by the dashboard panels.

use crate::billing::BillingSummary;
use crate::consultant::{Consultant, ConsultantType};
use crate::project::{BillingCycle, Project, ProjectStatus};
use crate::reports::{ActivityItem, OverviewStat, ProjectCost, Tone, UtilizationEntry};
use crate::timesheet::{Timesheet, TimesheetStatus};

const CREATED: &str = "2024-01-01T00:00:00Z";

fn skills(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn stat(title: &str, value: &str, detail: &str, tone: Tone) -> OverviewStat {
    OverviewStat {
        title: title.into(),
        value: value.into(),
        detail: detail.into(),
        tone,
    }
}

pub fn overview_stats() -> Vec<OverviewStat> {
    vec![
        stat("Active Projects", "12", "+2 from last month", Tone::Positive),
        stat("Total Consultants", "48", "6 freelancers, 42 in-house", Tone::Info),
        stat("Pending Timesheets", "23", "Requires approval", Tone::Warning),
        stat("Monthly Revenue", "$45,200", "+8.2% from last month", Tone::Positive),
    ]
}

pub fn recent_activity() -> Vec<ActivityItem> {
    vec![
        ActivityItem {
            message: "New project \"Mobile App Development\" created".into(),
            when: "2 hours ago".into(),
            tone: Tone::Info,
        },
        ActivityItem {
            message: "Timesheet approved for John Doe".into(),
            when: "4 hours ago".into(),
            tone: Tone::Positive,
        },
        ActivityItem {
            message: "New consultant Sarah Wilson onboarded".into(),
            when: "1 day ago".into(),
            tone: Tone::Accent,
        },
    ]
}

pub fn consultants() -> Vec<Consultant> {
    vec![Consultant {
        id: "c1".into(),
        user_id: "3".into(),
        name: "John Doe".into(),
        email: "john@company.com".into(),
        kind: ConsultantType::InHouse,
        skills: skills(&["React", "TypeScript", "Node.js"]),
        availability: true,
        hourly_rate: 75.0,
        daily_rate: 600.0,
        monthly_rate: 12000.0,
        phone: None,
        profile_completed: true,
        created_at: CREATED.into(),
    }]
}

/// The consultant record linked to a user account, if any.
pub fn consultant_for_user(user_id: &str) -> Option<Consultant> {
    consultants().into_iter().find(|c| c.user_id == user_id)
}

pub fn projects() -> Vec<Project> {
    vec![Project {
        id: "p1".into(),
        project_code: "PRJ-001".into(),
        name: "E-commerce Platform".into(),
        description: "Building a modern e-commerce platform with React and Node.js".into(),
        required_skills: skills(&["React", "Node.js"]),
        billing_cycle: BillingCycle::Hourly,
        start_date: "2024-01-15".into(),
        end_date: "2024-12-31".into(),
        status: ProjectStatus::Active,
        created_by: "1".into(),
        consultant_count: 5,
    }]
}

pub fn timesheets() -> Vec<Timesheet> {
    vec![Timesheet {
        id: "t1".into(),
        consultant_id: "c1".into(),
        project_id: "p1".into(),
        project_name: "E-commerce Platform".into(),
        date: "2024-06-24".into(),
        hours_worked: 8.0,
        description: "Checkout flow implementation".into(),
        status: TimesheetStatus::Pending,
        submitted_at: "2024-06-24T18:00:00Z".into(),
        reviewed_by: None,
        reviewed_at: None,
    }]
}

pub fn billing_summary() -> BillingSummary {
    BillingSummary {
        billable_hours: 1248,
        outstanding_amount: 23450.0,
        outstanding_invoices: 12,
        paid_amount: 89200.0,
        paid_invoices: 45,
    }
}

pub fn utilization() -> Vec<UtilizationEntry> {
    vec![UtilizationEntry {
        consultant_name: "John Doe".into(),
        percent: 85,
    }]
}

pub fn project_costs() -> Vec<ProjectCost> {
    vec![
        ProjectCost {
            project_name: "E-commerce Platform".into(),
            cost: 45200.0,
        },
        ProjectCost {
            project_name: "Mobile App".into(),
            cost: 32800.0,
        },
        ProjectCost {
            project_name: "Web Portal".into(),
            cost: 28500.0,
        },
    ]
}
