use std::sync::Arc;

use crate::{
    api::{ApiClient, LoginRequest},
    error::ApiError,
    models::User,
    state::{SessionStore, StoreError, UserPrefs},
};

pub const MISSING_CREDENTIALS_MESSAGE: &str = "Please enter both username and password.";

#[derive(Clone)]
pub struct AuthRepository {
    client: Arc<ApiClient>,
    prefs: UserPrefs,
}

impl AuthRepository {
    pub fn new_with_client(client: Arc<ApiClient>, prefs: UserPrefs) -> Self {
        Self { client, prefs }
    }

    /// Signs in and persists the session. A rejected login leaves the stored
    /// session as it was; a failed write clears it.
    pub async fn login(&self, user_name: &str, password: &str) -> Result<User, ApiError> {
        let user_name = user_name.trim();
        if user_name.is_empty() || password.trim().is_empty() {
            return Err(ApiError::validation(MISSING_CREDENTIALS_MESSAGE));
        }

        let request = LoginRequest {
            user_name: user_name.to_string(),
            password: password.to_string(),
        };
        let mut user = User::from(self.client.login(&request).await?);
        if user.token.is_empty() {
            tracing::warn!(user_name, "Login response carried no token");
            return Err(ApiError::login_failed());
        }
        if user.user_name.is_empty() {
            user.user_name = user_name.to_string();
        }

        if let Err(err) = self.persist(&user) {
            tracing::warn!(error = %err, "Failed to store session, clearing it");
            if let Err(clear_err) = self.prefs.clear() {
                tracing::warn!(error = %clear_err, "Failed to clear session");
            }
            return Err(err.into());
        }
        tracing::info!(user_name = %user.user_name, roles = ?user.roles, "Signed in");
        Ok(user)
    }

    /// Token goes last so it is never stored beside another user's roles.
    fn persist(&self, user: &User) -> Result<(), StoreError> {
        self.prefs
            .set_user_basics(&user.user_name, &user.roles, user.join_date.as_deref())?;
        self.prefs.set_token(&user.token)
    }

    pub fn logout(&self) -> Result<(), ApiError> {
        self.prefs.clear()?;
        tracing::info!("Signed out");
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.prefs.is_authenticated()
    }
}
