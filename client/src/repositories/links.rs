use std::sync::Arc;

use serde::Serialize;

use crate::{
    api::ApiClient,
    error::ApiError,
    models::{Document, RepositoryLink},
};

/// Both repository lists. A failed side is empty and reported in `error`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RepositoryOverview {
    pub external: Vec<RepositoryLink>,
    pub internal: Vec<Document>,
    pub error: Option<ApiError>,
}

#[derive(Clone)]
pub struct LinksRepository {
    client: Arc<ApiClient>,
    page_size: u32,
}

impl LinksRepository {
    pub fn new_with_client(client: Arc<ApiClient>, page_size: u32) -> Self {
        Self { client, page_size }
    }

    pub async fn load(&self) -> RepositoryOverview {
        let (external, internal) = tokio::join!(
            self.client.external_repositories(1, self.page_size),
            self.client.internal_repository_documents(1, self.page_size),
        );
        combine(
            external.map(|items| items.into_iter().map(RepositoryLink::from).collect()),
            internal.map(|items| items.into_iter().map(Document::from).collect()),
        )
    }
}

fn combine(
    external: Result<Vec<RepositoryLink>, ApiError>,
    internal: Result<Vec<Document>, ApiError>,
) -> RepositoryOverview {
    let mut overview = RepositoryOverview::default();
    let mut internal_error = None;
    match external {
        Ok(items) => overview.external = items,
        Err(err) => overview.error = Some(err),
    }
    match internal {
        Ok(items) => overview.internal = items,
        Err(err) => internal_error = Some(err),
    }
    if let Some(err) = &overview.error {
        tracing::warn!(error = %err, "External repositories unavailable");
    }
    if let Some(err) = &internal_error {
        tracing::warn!(error = %err, "Internal repository unavailable");
    }
    overview.error = overview.error.or(internal_error);
    overview
}
