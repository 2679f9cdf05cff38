use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type QueryParams = Vec<(String, String)>;
pub type Headers = Vec<(String, String)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved outbound request.
///
/// `path` is what the caller asked for (it may already carry a query string),
/// `url` is that path joined onto the configured base URL. `query` holds the
/// extra pairs appended after any inline query, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub url: String,
    pub headers: Headers,
    pub query: QueryParams,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A successful (2xx) response with its body parsed as JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: Headers,
    pub data: serde_json::Value,
}

impl ApiResponse {
    /// Decode `data` into a caller-chosen type.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.data.clone())?)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Per-call extras layered on top of the client defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub query: QueryParams,
    pub headers: Headers,
    pub body: Option<serde_json::Value>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn queries<K, V, I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        self.query
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.to_string())));
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_options_builder_keeps_order() {
        let options = RequestOptions::new()
            .query("category", 10)
            .queries([("equipment", "3"), ("muscles", "1")])
            .header("X-Trace", "abc")
            .body(json!({"a": 1}));

        assert_eq!(
            options.query,
            vec![
                ("category".to_string(), "10".to_string()),
                ("equipment".to_string(), "3".to_string()),
                ("muscles".to_string(), "1".to_string()),
            ]
        );
        assert_eq!(options.headers, vec![("X-Trace".to_string(), "abc".to_string())]);
        assert_eq!(options.body, Some(json!({"a": 1})));
    }

    #[test]
    fn test_response_json_decodes_into_type() {
        #[derive(Deserialize)]
        struct Category {
            id: u64,
            name: String,
        }

        let response = ApiResponse {
            status: 200,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            data: json!({"id": 8, "name": "Arms"}),
        };

        let category: Category = response.json().unwrap();
        assert_eq!(category.id, 8);
        assert_eq!(category.name, "Arms");
        assert_eq!(response.header("content-type"), Some("application/json"));
    }

    #[test]
    fn test_response_json_type_mismatch_is_error() {
        let response = ApiResponse {
            status: 200,
            headers: vec![],
            data: json!("not an object"),
        };

        let decoded: Result<std::collections::HashMap<String, u64>> = response.json();
        assert!(decoded.is_err());
    }
}
