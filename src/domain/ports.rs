use crate::domain::model::{ApiRequest, ApiResponse};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Executes a resolved request. One attempt, no retries.
///
/// Implementations return `Ok` only for 2xx responses; anything else is an
/// error carrying whatever the transport observed.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn token(&self) -> &str;
}
