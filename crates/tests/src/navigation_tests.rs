use pretty_assertions::assert_eq;
use shared_types::{
    is_authorized, nav_items_for, required_role, sections_for, sections_for_name, Section,
    UserRole, ALL_ROLES, ALL_SECTIONS,
};

const GATED: [(Section, UserRole); 3] = [
    (Section::Consultants, UserRole::Admin),
    (Section::Profile, UserRole::Consultant),
    (Section::Billing, UserRole::FinanceHead),
];

#[test]
fn test_every_role_starts_with_overview() {
    for &role in ALL_ROLES {
        assert_eq!(sections_for(role)[0], Section::Overview, "{role}");
    }
}

#[test]
fn test_ungated_sections_open_to_all_roles() {
    let ungated = ALL_SECTIONS
        .iter()
        .filter(|s| !GATED.iter().any(|(g, _)| g == *s));
    for &section in ungated {
        for &role in ALL_ROLES {
            assert!(is_authorized(role, section), "{role} {section:?}");
        }
    }
}

#[test]
fn test_gated_sections_open_to_exactly_one_role() {
    for (section, owner) in GATED {
        assert_eq!(required_role(section), Some(owner));
        for &role in ALL_ROLES {
            assert_eq!(is_authorized(role, section), role == owner, "{role} {section:?}");
        }
    }
}

#[test]
fn test_role_navigation_tables() {
    let labels = |role| -> Vec<&str> { nav_items_for(role).iter().map(|i| i.label).collect() };

    assert_eq!(
        labels(UserRole::Admin),
        vec!["Overview", "Consultants", "Projects", "Reports"]
    );
    assert_eq!(
        labels(UserRole::ProjectManager),
        vec!["Overview", "My Projects", "Timesheet Approval"]
    );
    assert_eq!(
        labels(UserRole::Consultant),
        vec!["Overview", "My Profile", "Timesheets", "My Projects"]
    );
    assert_eq!(
        labels(UserRole::FinanceHead),
        vec!["Overview", "Billing", "Financial Reports"]
    );
}

#[test]
fn test_navigation_only_offers_authorized_sections() {
    for &role in ALL_ROLES {
        for section in sections_for(role) {
            assert!(is_authorized(role, section), "{role} {section:?}");
        }
    }
}

#[test]
fn test_unknown_role_name_gets_overview_only() {
    assert_eq!(sections_for_name("guest"), vec![Section::Overview]);
    assert_eq!(sections_for_name("admin"), sections_for(UserRole::Admin));
}
