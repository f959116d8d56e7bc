use super::{
    client::{page_query, ApiClient},
    types::{DocumentDto, RepositoryDto},
};
use crate::error::ApiError;

impl ApiClient {
    /// Public cards; the bearer token is still sent when present.
    pub async fn external_repositories(
        &self,
        page: u32,
        size: u32,
    ) -> Result<Vec<RepositoryDto>, ApiError> {
        self.get_json("api/Repository/external", &page_query(page, size))
            .await
    }

    pub async fn internal_repository_documents(
        &self,
        page: u32,
        size: u32,
    ) -> Result<Vec<DocumentDto>, ApiError> {
        self.get_json("api/Repository", &page_query(page, size))
            .await
    }
}
