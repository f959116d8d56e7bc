use std::sync::Arc;

use reqwest::{header, Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{config::ClientConfig, error::ApiError, state::SessionStore};

/// REST client for the portal backend. Cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, session: Arc<dyn SessionStore>) -> Self {
        Self::new_with_base_url(&config.api_base_url, session)
    }

    pub fn new_with_base_url(base_url: impl Into<String>, session: Arc<dyn SessionStore>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Builds a request with the bearer token attached when one is stored.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match self.session.token() {
            Some(token) if !token.trim().is_empty() => {
                builder.header(header::AUTHORIZATION, format!("Bearer {}", token.trim()))
            }
            _ => builder,
        }
    }

    /// Sends the request and maps any non-success status to an [`ApiError`].
    /// A 401 on an authenticated call drops the stored session.
    pub(crate) async fn execute(
        &self,
        builder: RequestBuilder,
        authenticated: bool,
    ) -> Result<Response, ApiError> {
        let request = builder.build().map_err(ApiError::network)?;
        let method = request.method().clone();
        let path = request.url().path().to_string();
        tracing::debug!(%method, %path, "Sending portal request");

        let response = self
            .client
            .execute(request)
            .await
            .map_err(ApiError::network)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        tracing::warn!(%method, %path, status = status.as_u16(), "Portal request failed");
        if authenticated {
            self.handle_unauthorized_status(status);
        }
        Err(ApiError::from_status(status))
    }

    pub(crate) async fn get_json<T>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let builder = self.request(Method::GET, path).query(query);
        let response = self.execute(builder, true).await?;
        decode(response).await
    }

    pub(crate) async fn send_empty(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        self.execute(builder, true).await.map(|_| ())
    }

    fn handle_unauthorized_status(&self, status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            if let Err(err) = self.session.clear() {
                tracing::warn!(error = %err, "Failed to clear session after 401");
            } else {
                tracing::info!("Session cleared after 401");
            }
        }
    }
}

pub(crate) async fn decode<T>(response: Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    response.json::<T>().await.map_err(ApiError::decode)
}

pub(crate) fn page_query(page: u32, size: u32) -> Vec<(&'static str, String)> {
    vec![
        ("pageNumber", page.to_string()),
        ("pageSize", size.to_string()),
    ]
}
