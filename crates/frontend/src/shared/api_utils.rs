//! API utilities for frontend-backend communication
//!
//! Resolves the REST base URL and the login URL from the page's own location.
//! Resolution is pure: it never probes the network.

use crate::shared::config::{ClientConfig, EndpointSettings, SessionSettings};
use crate::shared::rest::RestError;

/// The parts of `window.location` the client cares about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    /// Includes the trailing colon, e.g. "https:"
    pub protocol: String,
    pub hostname: String,
    /// Empty when the page is served on the protocol's default port
    pub port: String,
}

impl PageLocation {
    pub fn new(protocol: &str, hostname: &str, port: &str) -> Self {
        Self {
            protocol: protocol.to_string(),
            hostname: hostname.to_string(),
            port: port.to_string(),
        }
    }

    /// Read the location of the current browser page
    pub fn current() -> Result<Self, RestError> {
        let window = web_sys::window().ok_or(RestError::NoWindow)?;
        let location = window.location();
        let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
        let hostname = location
            .hostname()
            .unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = location.port().unwrap_or_default();
        Ok(Self {
            protocol,
            hostname,
            port,
        })
    }

    /// `<protocol>//<hostname>:<port>`
    ///
    /// The colon is kept even when `port` is empty; URL parsers read
    /// `https://host:/x` as the default port.
    pub fn origin(&self) -> String {
        format!("{}//{}:{}", self.protocol, self.hostname, self.port)
    }
}

/// Base URL resolved once per client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    pub base_url: String,
}

impl EndpointConfig {
    pub fn resolve(location: &PageLocation, settings: &EndpointSettings) -> Self {
        Self {
            base_url: resolve_base_url(location, settings),
        }
    }

    /// Build a full API URL from a collection path like "/products"
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Get the base URL for API requests
///
/// Pages served from the dev port talk to the dev backend on localhost,
/// everything else assumes the backend shares the page's origin.
///
/// # Example
/// ```rust,ignore
/// let base = resolve_base_url(&PageLocation::new("https:", "shop.example", "8443"), &settings);
/// assert_eq!(base, "https://shop.example:8443/my/app/rest");
/// ```
pub fn resolve_base_url(location: &PageLocation, settings: &EndpointSettings) -> String {
    if location.port == settings.dev_port {
        format!("{}{}", settings.dev_backend_origin, settings.rest_prefix)
    } else {
        format!("{}{}", location.origin(), settings.rest_prefix)
    }
}

/// Full-page login target used when the session has expired
pub fn login_url(location: &PageLocation, settings: &SessionSettings) -> String {
    format!("{}{}", location.origin(), settings.login_path)
}

/// Resolve both URLs for the current page with the embedded configuration
pub fn current_page_urls() -> Result<(EndpointConfig, String), RestError> {
    let config = ClientConfig::embedded()?;
    let location = PageLocation::current()?;
    Ok((
        EndpointConfig::resolve(&location, &config.endpoint),
        login_url(&location, &config.session),
    ))
}
