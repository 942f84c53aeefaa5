use crate::models::UserRole;
use crate::navigation::Section;

/// The single role allowed to open a gated section, if any.
///
/// Ungated sections are open to whoever can navigate to them; the sidebar
/// table already limits which roles see them.
pub fn required_role(section: Section) -> Option<UserRole> {
    match section {
        Section::Consultants => Some(UserRole::Admin),
        Section::Profile => Some(UserRole::Consultant),
        Section::Billing => Some(UserRole::FinanceHead),
        Section::Overview | Section::Projects | Section::Timesheets | Section::Reports => None,
    }
}

/// Whether `role` may see the panel for `section`.
///
/// Checked at render time regardless of how the section was selected, so a
/// section id injected through a deep link is gated the same as a click.
pub fn is_authorized(role: UserRole, section: Section) -> bool {
    match required_role(section) {
        Some(required) => role == required,
        None => true,
    }
}
