use reqwest::Method;

use super::{
    client::{page_query, ApiClient},
    types::FaqEntryDto,
};
use crate::error::ApiError;

impl ApiClient {
    pub async fn get_faqs(
        &self,
        page: u32,
        size: u32,
        search: Option<&str>,
    ) -> Result<Vec<FaqEntryDto>, ApiError> {
        let mut params = page_query(page, size);
        if let Some(term) = search {
            if !term.is_empty() {
                params.push(("searchTerm", term.to_string()));
            }
        }
        self.get_json("api/Faq", &params).await
    }

    pub async fn create_faq(&self, entry: &FaqEntryDto) -> Result<(), ApiError> {
        let builder = self.request(Method::POST, "api/Faq/create").json(entry);
        self.send_empty(builder).await
    }

    pub async fn update_faq(&self, id: i32, entry: &FaqEntryDto) -> Result<(), ApiError> {
        let builder = self
            .request(Method::PUT, &format!("api/Faq/update/{}", id))
            .json(entry);
        self.send_empty(builder).await
    }

    pub async fn delete_faq(&self, id: i32) -> Result<(), ApiError> {
        let builder = self.request(Method::DELETE, &format!("api/Faq/{}", id));
        self.send_empty(builder).await
    }
}
