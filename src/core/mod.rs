pub mod client;
pub mod routes;
pub mod service;

pub use crate::domain::model::{ApiRequest, ApiResponse, HttpMethod, RequestOptions};
pub use crate::domain::ports::{ConfigProvider, Transport};
pub use crate::utils::error::Result;
