use std::sync::Arc;

use super::prefs::{Preferences, StoreError};
use crate::models::RoleSet;

const TOKEN: &str = "token";
const USER_NAME: &str = "userName";
const ROLES: &str = "roles_csv";
const JOIN_DATE: &str = "joinDate";

/// Read side of the active session, handed explicitly to whoever needs it.
#[cfg_attr(test, mockall::automock)]
pub trait SessionStore: Send + Sync {
    fn token(&self) -> Option<String>;
    fn user_name(&self) -> Option<String>;
    fn roles(&self) -> RoleSet;
    fn clear(&self) -> Result<(), StoreError>;

    fn is_authenticated(&self) -> bool {
        self.token().is_some_and(|token| !token.trim().is_empty())
    }
}

/// Typed view over the session preference keys.
#[derive(Clone)]
pub struct UserPrefs {
    store: Arc<dyn Preferences>,
}

impl UserPrefs {
    pub fn new(store: Arc<dyn Preferences>) -> Self {
        Self { store }
    }

    pub fn join_date(&self) -> Option<String> {
        self.store.get(JOIN_DATE)
    }

    pub fn set_token(&self, token: &str) -> Result<(), StoreError> {
        self.store.set(TOKEN, token)
    }

    pub fn set_user_basics(
        &self,
        user_name: &str,
        roles: &[String],
        join_date: Option<&str>,
    ) -> Result<(), StoreError> {
        self.store.set(USER_NAME, user_name)?;
        self.store.set(ROLES, &roles.join(","))?;
        match join_date {
            Some(date) => self.store.set(JOIN_DATE, date),
            None => self.store.remove(JOIN_DATE),
        }
    }
}

impl SessionStore for UserPrefs {
    fn token(&self) -> Option<String> {
        self.store.get(TOKEN)
    }

    fn user_name(&self) -> Option<String> {
        self.store.get(USER_NAME)
    }

    fn roles(&self) -> RoleSet {
        self.store
            .get(ROLES)
            .map(|csv| RoleSet::from_csv(&csv))
            .unwrap_or_default()
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.store.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::prefs::MemoryPreferences;

    fn prefs() -> UserPrefs {
        UserPrefs::new(Arc::new(MemoryPreferences::new()))
    }

    #[test]
    fn empty_store_is_unauthenticated_and_unprivileged() {
        let prefs = prefs();
        assert!(prefs.token().is_none());
        assert!(!prefs.is_authenticated());
        assert!(prefs.roles().is_empty());
    }

    #[test]
    fn blank_token_is_not_authenticated() {
        let prefs = prefs();
        prefs.set_token("   ").unwrap();
        assert!(!prefs.is_authenticated());
        prefs.set_token("abc").unwrap();
        assert!(prefs.is_authenticated());
    }

    #[test]
    fn user_basics_round_trip_through_csv() {
        let prefs = prefs();
        prefs
            .set_user_basics(
                "alice",
                &["Admin".to_string(), "Lecturer".to_string()],
                Some("2023-01-15"),
            )
            .unwrap();
        assert_eq!(prefs.user_name().as_deref(), Some("alice"));
        assert_eq!(prefs.join_date().as_deref(), Some("2023-01-15"));
        let roles = prefs.roles();
        assert_eq!(roles.len(), 2);
        assert!(roles.is_privileged());

        prefs.set_user_basics("alice", &[], None).unwrap();
        assert!(prefs.join_date().is_none());
        assert!(prefs.roles().is_empty());
    }

    #[test]
    fn clear_removes_everything() {
        let prefs = prefs();
        prefs.set_token("abc").unwrap();
        prefs
            .set_user_basics("alice", &["Admin".to_string()], None)
            .unwrap();
        prefs.clear().unwrap();
        assert!(prefs.token().is_none());
        assert!(prefs.user_name().is_none());
        assert!(!prefs.roles().is_privileged());
    }

    #[test]
    fn roles_are_read_fresh_on_every_call() {
        let prefs = prefs();
        prefs
            .set_user_basics("coord", &["Coordinator".to_string()], None)
            .unwrap();
        assert!(prefs.roles().is_privileged());
        prefs
            .set_user_basics("student", &["Student".to_string()], None)
            .unwrap();
        assert!(!prefs.roles().is_privileged());
    }
}
