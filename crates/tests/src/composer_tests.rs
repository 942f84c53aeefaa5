use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use shared_types::{
    is_authorized, Identity, Section, UserRole, View, ViewComposer, ALL_ROLES, ALL_SECTIONS,
};

use crate::common::{self, CONSULTANT};

fn identity(role: UserRole) -> Identity {
    Identity {
        id: "t".into(),
        email: "t@company.com".into(),
        name: "Tester".into(),
        role,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

#[tokio::test]
async fn test_consultant_selecting_billing_is_denied() {
    let (_manager, _store, consultant) = common::logged_in(CONSULTANT).await;
    let mut composer = ViewComposer::new();

    composer.select_section("billing");

    assert_eq!(composer.render(&consultant), View::Denied(Section::Billing));
}

#[test]
fn test_render_matches_authorization_for_every_pair() {
    for &role in ALL_ROLES {
        let who = identity(role);
        for &section in ALL_SECTIONS {
            let view = ViewComposer::starting_at(section.id()).render(&who);
            let expected = if is_authorized(role, section) {
                View::Panel(section)
            } else {
                View::Denied(section)
            };
            assert_eq!(view, expected, "{role} {section:?}");
        }
    }
}

#[test]
fn test_selection_is_not_validated_until_render() {
    let mut composer = ViewComposer::new();
    composer.select_section("does-not-exist");
    assert_eq!(composer.active_section(), "does-not-exist");
    assert_eq!(
        composer.render(&identity(UserRole::FinanceHead)),
        View::Panel(Section::Overview)
    );
}

#[test]
fn test_deep_link_still_gated() {
    let composer = ViewComposer::starting_at("consultants");
    assert!(composer.render(&identity(UserRole::ProjectManager)).is_denied());
    assert_eq!(
        composer.render(&identity(UserRole::Admin)),
        View::Panel(Section::Consultants)
    );
}

#[test]
fn test_composer_starts_on_overview() {
    let composer = ViewComposer::new();
    assert!(composer.is_active(Section::Overview));
    for &role in ALL_ROLES {
        assert_eq!(composer.render(&identity(role)), View::Panel(Section::Overview));
    }
}
