pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::http::ReqwestTransport;
pub use config::{toml_config::TomlConfig, ClientConfig};
pub use core::{
    client::ApiClient,
    routes::Route,
    service::{ExerciseQuery, WgerService},
};
pub use domain::model::{ApiRequest, ApiResponse, HttpMethod, RequestOptions};
pub use domain::ports::Transport;
pub use utils::error::{Result, WgerError};
