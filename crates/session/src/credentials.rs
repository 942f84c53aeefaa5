use chrono::{DateTime, TimeZone, Utc};
use shared_types::{AuthError, Identity, UserRole};
use std::collections::HashMap;

/// A demo login: the identity issued on success plus its password.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoAccount {
    pub identity: Identity,
    pub password: String,
}

/// Fixed email → password table with the identity each email maps to.
#[derive(Debug, Clone, Default)]
pub struct CredentialTable {
    users: Vec<Identity>,
    passwords: HashMap<String, String>,
}

fn demo_created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn account(id: &str, email: &str, name: &str, role: UserRole, password: &str) -> DemoAccount {
    DemoAccount {
        identity: Identity {
            id: id.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            role,
            created_at: demo_created_at(),
        },
        password: password.to_string(),
    }
}

/// One account per role, used by the demo login screen.
pub fn demo_accounts() -> Vec<DemoAccount> {
    vec![
        account("1", "admin@company.com", "Admin User", UserRole::Admin, "admin123"),
        account("2", "pm@company.com", "Project Manager", UserRole::ProjectManager, "pm123"),
        account(
            "3",
            "consultant@company.com",
            "John Consultant",
            UserRole::Consultant,
            "consultant123",
        ),
        account("4", "finance@company.com", "Finance Head", UserRole::FinanceHead, "finance123"),
    ]
}

impl CredentialTable {
    pub fn new(accounts: impl IntoIterator<Item = DemoAccount>) -> Self {
        let mut table = Self::default();
        for DemoAccount { identity, password } in accounts {
            table.passwords.insert(identity.email.clone(), password);
            table.users.push(identity);
        }
        table
    }

    pub fn demo() -> Self {
        Self::new(demo_accounts())
    }

    pub fn users(&self) -> &[Identity] {
        &self.users
    }

    /// Check an email/password pair.
    ///
    /// Email lookup and password comparison are both exact. Either
    /// mismatch yields the same error.
    pub fn verify(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let user = self.users.iter().find(|u| u.email == email);
        let password_ok = self
            .passwords
            .get(email)
            .is_some_and(|expected| expected == password);

        match user {
            Some(user) if password_ok => Ok(user.clone()),
            _ => Err(AuthError::InvalidCredentials),
        }
    }
}
