//! Static operator directory.

use crate::Role;

/// Outcome of resolving an operator identifier.
///
/// An unknown name and an empty input both end in "no access granted", but
/// the caller distinguishes them for messaging: an empty input means the
/// operator has not logged in yet, not that the login failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The identifier matched the directory.
    Granted { user: String, role: Role },
    /// A non-empty identifier with no directory entry.
    UnknownUser,
    /// The operator has not entered an identifier.
    NotEntered,
}

/// Static name → role table, built once at startup.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    entries: Vec<(String, Role)>,
}

impl UserDirectory {
    pub fn new(entries: Vec<(String, Role)>) -> Self {
        Self { entries }
    }

    /// The reference shop staff: one employee and one administrator.
    pub fn reference() -> Self {
        Self::new(vec![
            ("empleado1".to_string(), Role::Staff),
            ("admin1".to_string(), Role::Administrator),
        ])
    }

    /// Exact, case-sensitive lookup.
    pub fn resolve(&self, identifier: &str) -> LoginOutcome {
        if identifier.is_empty() {
            return LoginOutcome::NotEntered;
        }
        match self.entries.iter().find(|(name, _)| name == identifier) {
            Some((name, role)) => LoginOutcome::Granted {
                user: name.clone(),
                role: *role,
            },
            None => LoginOutcome::UnknownUser,
        }
    }
}
