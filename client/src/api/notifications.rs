use reqwest::Method;

use super::{
    client::{page_query, ApiClient},
    types::NotificationDto,
};
use crate::error::ApiError;

impl ApiClient {
    /// The backend also sends a `Pagination` header; only the body is used.
    pub async fn get_notifications(
        &self,
        page: u32,
        size: u32,
    ) -> Result<Vec<NotificationDto>, ApiError> {
        self.get_json("api/Notifications", &page_query(page, size))
            .await
    }

    pub async fn mark_notification_read(&self, id: i32) -> Result<(), ApiError> {
        let builder = self.request(Method::POST, &format!("api/Notifications/{}/read", id));
        self.send_empty(builder).await
    }
}
