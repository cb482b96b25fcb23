use super::model;
use contracts::domain::a001_product::aggregate::{Product, ProductDraft};
use contracts::domain::common::RestCollection;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

use crate::shared::api_context::ApiContext;

/// ViewModel for the product create form
#[derive(Clone, Copy)]
pub struct ProductCreateViewModel {
    pub form: RwSignal<ProductDraft>,
    pub error: RwSignal<Option<String>>,
    pub status: RwSignal<Option<String>>,
    pub submitting: RwSignal<bool>,
}

impl ProductCreateViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ProductDraft::default()),
            error: RwSignal::new(None),
            status: RwSignal::new(None),
            submitting: RwSignal::new(false),
        }
    }

    pub fn title() -> String {
        format!("Add {}", Product::element_name().to_lowercase())
    }

    pub fn set_name(&self, value: String) {
        self.form.update(|f| f.name = value);
    }

    pub fn set_price(&self, value: String) {
        self.form.update(|f| f.price = Some(value));
    }

    /// Send the current draft in the background
    pub fn submit_command(&self, api: ApiContext) {
        spawn_local(self.submit(api));
    }

    /// The draft is reset only after the server accepted it; on failure it
    /// stays in the form for another try. Product lists are not touched.
    pub fn submit(&self, api: ApiContext) -> impl Future<Output = ()> + 'static {
        let draft = self.form.get_untracked();
        let vm = *self;
        vm.submitting.set(true);
        vm.status.set(None);

        async move {
            let result = api
                .session
                .observe(model::create_product(&api.client, &draft).await);
            vm.submitting.set(false);
            match result {
                Ok(response) => {
                    let message = match response.json::<Product>() {
                        Ok(created) => {
                            format!("{} #{} created", Product::element_name(), created.id)
                        }
                        Err(_) => format!("{} created", Product::element_name()),
                    };
                    vm.status.set(Some(message));
                    vm.error.set(None);
                    vm.form.set(ProductDraft::default());
                }
                Err(e) => vm
                    .error
                    .set(Some(format!("Failed to create product: {}", e))),
            }
        }
    }
}

impl Default for ProductCreateViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::EndpointConfig;
    use crate::shared::rest::testing::MockTransport;
    use crate::shared::rest::RestClient;
    use crate::shared::session::testing::RecordingNavigator;
    use crate::shared::session::SessionShell;
    use std::sync::Arc;

    fn api(mock: &Arc<MockTransport>) -> (ApiContext, Arc<RecordingNavigator>) {
        let navigator = Arc::new(RecordingNavigator::default());
        let client = RestClient::new(
            EndpointConfig {
                base_url: "http://shop:80/my/app/rest".to_string(),
            },
            mock.clone(),
        );
        let session = SessionShell::new("http://shop:80/login".to_string(), navigator.clone());
        (ApiContext::new(client, session), navigator)
    }

    fn filled(vm: &ProductCreateViewModel) {
        vm.set_name("cup".to_string());
        vm.set_price("3".to_string());
    }

    #[test]
    fn test_title() {
        assert_eq!(ProductCreateViewModel::title(), "Add product");
    }

    #[tokio::test]
    async fn test_success_resets_draft() {
        let owner = Owner::new();
        owner.set();
        let mock = Arc::new(MockTransport::new());
        mock.respond(201, r#"{"id":10,"name":"cup","price":"3"}"#);
        let (api, _) = api(&mock);

        let vm = ProductCreateViewModel::new();
        filled(&vm);
        let pending = vm.submit(api);
        assert!(vm.submitting.get_untracked());
        pending.await;

        assert!(!vm.submitting.get_untracked());
        assert_eq!(vm.form.get_untracked(), ProductDraft::default());
        assert_eq!(vm.error.get_untracked(), None);
        assert_eq!(
            vm.status.get_untracked().as_deref(),
            Some("Product #10 created")
        );
        assert_eq!(
            mock.requests()[0].body.as_deref(),
            Some(r#"{"name":"cup","price":"3"}"#)
        );
    }

    #[tokio::test]
    async fn test_failure_keeps_draft_and_sets_error() {
        let owner = Owner::new();
        owner.set();
        let mock = Arc::new(MockTransport::new());
        mock.respond(400, r#"{"error":"price"}"#);
        let (api, navigator) = api(&mock);

        let vm = ProductCreateViewModel::new();
        filled(&vm);
        vm.submit(api).await;

        assert!(!vm.submitting.get_untracked());
        assert_eq!(
            vm.form.get_untracked(),
            ProductDraft {
                name: "cup".to_string(),
                price: Some("3".to_string()),
            }
        );
        let error = vm.error.get_untracked().unwrap();
        assert!(error.contains("400"), "{error}");
        assert_eq!(vm.status.get_untracked(), None);
        assert!(navigator.visited().is_empty());
    }

    #[tokio::test]
    async fn test_expired_session_redirects_and_keeps_draft() {
        let owner = Owner::new();
        owner.set();
        let mock = Arc::new(MockTransport::new());
        mock.respond(401, "");
        let (api, navigator) = api(&mock);

        let vm = ProductCreateViewModel::new();
        filled(&vm);
        vm.submit(api).await;

        assert_eq!(vm.form.get_untracked().name, "cup");
        assert!(vm.error.get_untracked().is_some());
        assert_eq!(navigator.visited(), vec!["http://shop:80/login"]);
    }
}
