use crate::adapters::http::ReqwestTransport;
use crate::config::ClientConfig;
use crate::domain::model::{ApiRequest, ApiResponse, Headers, HttpMethod, RequestOptions};
use crate::domain::ports::Transport;
use crate::utils::error::Result;
use std::sync::Arc;

/// The shared client facade. Every outbound call goes through here and gets
/// `Content-Type: application/json` and `Authorization: Token <token>`
/// unless the call overrides them.
///
/// Cloning is cheap; clones share the same configuration and transport.
pub struct ApiClient<T: Transport = ReqwestTransport> {
    config: Arc<ClientConfig>,
    transport: Arc<T>,
}

impl<T: Transport> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl ApiClient<ReqwestTransport> {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            config: Arc::new(config),
            transport: Arc::new(transport),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn default_headers(&self) -> Headers {
        vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Authorization".to_string(), format!("Token {}", self.config.token)),
        ]
    }

    /// Resolve a relative path and per-call options into a concrete request.
    pub fn build_request(
        &self,
        method: HttpMethod,
        path: &str,
        options: RequestOptions,
    ) -> ApiRequest {
        ApiRequest {
            method,
            path: path.to_string(),
            url: join_url(&self.config.base_url, path),
            headers: merge_headers(self.default_headers(), options.headers),
            query: options.query,
            body: options.body,
        }
    }

    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse> {
        let request = self.build_request(method, path, options);
        tracing::debug!(
            "{} {} (query params: {})",
            request.method,
            request.url,
            request.query.len()
        );
        self.transport.send(request).await
    }

    pub async fn get(&self, path: &str, options: RequestOptions) -> Result<ApiResponse> {
        self.request(HttpMethod::Get, path, options).await
    }

    pub async fn post(&self, path: &str, options: RequestOptions) -> Result<ApiResponse> {
        self.request(HttpMethod::Post, path, options).await
    }

    pub async fn put(&self, path: &str, options: RequestOptions) -> Result<ApiResponse> {
        self.request(HttpMethod::Put, path, options).await
    }

    pub async fn patch(&self, path: &str, options: RequestOptions) -> Result<ApiResponse> {
        self.request(HttpMethod::Patch, path, options).await
    }

    pub async fn delete(&self, path: &str, options: RequestOptions) -> Result<ApiResponse> {
        self.request(HttpMethod::Delete, path, options).await
    }
}

/// `base` + `/` + `path`, collapsing one trailing slash on the base and any
/// leading slashes on the path.
pub fn join_url(base: &str, path: &str) -> String {
    if path.is_empty() {
        return base.to_string();
    }
    let base = base.strip_suffix('/').unwrap_or(base);
    format!("{}/{}", base, path.trim_start_matches('/'))
}

/// Overrides replace defaults with the same name (case-insensitive); new
/// names are appended in the order given.
pub fn merge_headers(defaults: Headers, overrides: Headers) -> Headers {
    let mut merged = defaults;
    for (name, value) in overrides {
        match merged
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            Some(slot) => slot.1 = value,
            None => merged.push((name, value)),
        }
    }
    merged
}
