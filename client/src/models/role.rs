use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

const PRIVILEGED_ROLES: [&str; 2] = ["admin", "coordinator"];

/// Role names attached to the active session. Membership is case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSet {
    roles: BTreeSet<String>,
}

impl RoleSet {
    pub fn new<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let roles = roles
            .into_iter()
            .map(|role| role.as_ref().trim().to_lowercase())
            .filter(|role| !role.is_empty())
            .collect();
        Self { roles }
    }

    /// Parses the comma separated form kept in preferences.
    pub fn from_csv(csv: &str) -> Self {
        Self::new(csv.split(','))
    }

    pub fn contains(&self, role: &str) -> bool {
        self.roles.contains(&role.trim().to_lowercase())
    }

    /// Admins and coordinators see every booking.
    pub fn is_privileged(&self) -> bool {
        PRIVILEGED_ROLES.iter().any(|role| self.roles.contains(*role))
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(String::as_str)
    }
}
