use std::sync::Arc;

use crate::{
    api::ApiClient,
    config::ClientConfig,
    repositories::{
        AuthRepository, DocumentsRepository, FaqRepository, LinksRepository, ModulesRepository,
        NotificationsRepository, SchedulerRepository,
    },
    state::{FilePreferences, Preferences, SessionStore, StoreError, UserPrefs},
};

/// Wires the preference store, API client and repositories from one config.
#[derive(Clone)]
pub struct Portal {
    config: ClientConfig,
    prefs: UserPrefs,
    client: Arc<ApiClient>,
}

impl Portal {
    /// Opens the preference file named by the config.
    pub fn from_config(config: ClientConfig) -> Result<Self, StoreError> {
        let store = FilePreferences::open(&config.prefs_path)?;
        Ok(Self::with_store(config, Arc::new(store)))
    }

    pub fn with_store(config: ClientConfig, store: Arc<dyn Preferences>) -> Self {
        let prefs = UserPrefs::new(store);
        let session: Arc<dyn SessionStore> = Arc::new(prefs.clone());
        let client = Arc::new(ApiClient::new(&config, session));
        tracing::debug!(base_url = %client.base_url(), "Portal client ready");
        Self {
            config,
            prefs,
            client,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn prefs(&self) -> &UserPrefs {
        &self.prefs
    }

    pub fn client(&self) -> Arc<ApiClient> {
        Arc::clone(&self.client)
    }

    pub fn auth(&self) -> AuthRepository {
        AuthRepository::new_with_client(self.client(), self.prefs.clone())
    }

    pub fn notifications(&self) -> NotificationsRepository {
        NotificationsRepository::new_with_client(self.client())
    }

    pub fn modules(&self) -> ModulesRepository {
        ModulesRepository::new_with_client(self.client())
    }

    pub fn documents(&self) -> DocumentsRepository {
        DocumentsRepository::new_with_client(self.client())
    }

    pub fn faq(&self) -> FaqRepository {
        FaqRepository::new_with_client(self.client())
    }

    pub fn links(&self) -> LinksRepository {
        LinksRepository::new_with_client(self.client(), self.config.list_page_size)
    }

    pub fn scheduler(&self) -> SchedulerRepository {
        SchedulerRepository::new_with_client(self.client())
    }
}
