//! REST services handed to every view through Leptos context

use leptos::prelude::*;

use crate::shared::api_utils::current_page_urls;
use crate::shared::rest::{RestClient, RestError};
use crate::shared::session::SessionShell;

/// The one configured client plus the shell that reacts to session expiry
#[derive(Clone)]
pub struct ApiContext {
    pub client: RestClient,
    pub session: SessionShell,
}

impl ApiContext {
    pub fn new(client: RestClient, session: SessionShell) -> Self {
        Self { client, session }
    }

    /// Resolve endpoints from the current page once and build browser services
    pub fn for_current_page() -> Result<Self, RestError> {
        let (endpoint, login_url) = current_page_urls()?;
        let api = Self::new(
            RestClient::browser(endpoint),
            SessionShell::browser(login_url),
        );
        log::info!(
            "REST base URL: {}, login: {}",
            api.client.base_url(),
            api.session.login_url()
        );
        Ok(api)
    }
}

pub fn use_api() -> ApiContext {
    use_context::<ApiContext>().expect("ApiContext not found in context")
}
