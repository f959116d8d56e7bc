use reqwest::Method;

use super::{
    client::{decode, ApiClient},
    types::{LoginRequest, UserDto},
};
use crate::error::ApiError;

impl ApiClient {
    /// Credentials are checked by the server; a 401 here means bad
    /// credentials, so the stored session is left alone.
    pub async fn login(&self, request: &LoginRequest) -> Result<UserDto, ApiError> {
        let builder = self
            .request(Method::POST, "api/Account/login")
            .json(request);
        let response = self.execute(builder, false).await?;
        decode(response).await
    }
}
