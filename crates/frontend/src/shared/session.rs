//! Session-expiry handling at the application boundary
//!
//! The REST layer only classifies a 401 as [`RestError::AuthExpired`]; leaving
//! the page is decided here.

use std::sync::Arc;

use crate::shared::rest::RestError;

/// Performs a full-page navigation
pub trait Navigator: Send + Sync {
    fn navigate(&self, url: &str);
}

/// Sets `window.location.href`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            log::error!("Cannot navigate to {}: no window", url);
            return;
        };
        if let Err(e) = window.location().set_href(url) {
            log::error!("Navigation to {} failed: {:?}", url, e);
        }
    }
}

#[derive(Clone)]
pub struct SessionShell {
    login_url: String,
    navigator: Arc<dyn Navigator>,
}

impl SessionShell {
    pub fn new(login_url: String, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            login_url,
            navigator,
        }
    }

    pub fn browser(login_url: String) -> Self {
        Self::new(login_url, Arc::new(BrowserNavigator))
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }

    /// Redirect to login on an expired session, then hand the result back
    /// unchanged so the caller's own error path still runs.
    pub fn observe<T>(&self, result: Result<T, RestError>) -> Result<T, RestError> {
        if let Err(RestError::AuthExpired) = &result {
            log::warn!("Session expired, redirecting to {}", self.login_url);
            self.navigator.navigate(&self.login_url);
        }
        result
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Navigator;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct RecordingNavigator {
        visited: Mutex<Vec<String>>,
    }

    impl RecordingNavigator {
        pub fn visited(&self) -> Vec<String> {
            self.visited.lock().unwrap().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, url: &str) {
            self.visited.lock().unwrap().push(url.to_string());
        }
    }
}
