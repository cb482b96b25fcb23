//! Client configuration
//!
//! The browser has no config file next to an executable, so the defaults are
//! embedded in the bundle and parsed once on first use.

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::shared::rest::RestError;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    pub endpoint: EndpointSettings,
    pub session: SessionSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EndpointSettings {
    /// Path prefix under which every collection is served
    pub rest_prefix: String,
    /// Page port of the local dev server
    pub dev_port: String,
    /// Backend origin used while the page is served from `dev_port`
    pub dev_backend_origin: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SessionSettings {
    pub login_path: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[endpoint]
rest_prefix = "/my/app/rest"
dev_port = "3000"
dev_backend_origin = "http://localhost:3500"

[session]
login_path = "/login"
"#;

static EMBEDDED: Lazy<Result<ClientConfig, String>> =
    Lazy::new(|| toml::from_str(DEFAULT_CONFIG).map_err(|e| e.to_string()));

impl ClientConfig {
    /// Embedded defaults, parsed on first call
    pub fn embedded() -> Result<&'static ClientConfig, RestError> {
        Lazy::force(&EMBEDDED)
            .as_ref()
            .map_err(|e| RestError::Config(e.clone()))
    }

    pub fn from_toml(contents: &str) -> Result<ClientConfig, RestError> {
        toml::from_str(contents).map_err(|e| RestError::Config(e.to_string()))
    }
}
