//! Load a remote collection into reactive state
//!
//! Every list view goes through [`use_collection`]: fetch on mount, keep the
//! list in a signal, show errors, allow a manual reload.

use contracts::domain::common::RestCollection;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use crate::shared::api_context::{use_api, ApiContext};
use crate::shared::rest::{RestClient, RestError};

/// `GET /<collection>` and hand the decoded list to `on_loaded`
///
/// `on_loaded` runs at most once and only on success.
pub async fn fetch_collection<T, F>(client: &RestClient, on_loaded: F) -> Result<(), RestError>
where
    T: RestCollection,
    F: FnOnce(Vec<T>),
{
    let response = client.get(&T::collection_path()).await?;
    let items = response.json::<Vec<T>>()?;
    log::debug!("Loaded {} {}", items.len(), T::collection_name());
    on_loaded(items);
    Ok(())
}

/// Hands out tickets so only the newest load of a live view may apply
#[derive(Clone, Default)]
pub struct LoadTracker {
    latest: Arc<AtomicU64>,
    disposed: Arc<AtomicBool>,
}

impl LoadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> LoadTicket {
        let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        LoadTicket {
            id,
            tracker: self.clone(),
        }
    }

    /// Called when the owning view unmounts; no ticket is current afterwards
    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::SeqCst);
    }
}

pub struct LoadTicket {
    id: u64,
    tracker: LoadTracker,
}

impl LoadTicket {
    pub fn is_current(&self) -> bool {
        !self.tracker.disposed.load(Ordering::SeqCst)
            && self.tracker.latest.load(Ordering::SeqCst) == self.id
    }
}

/// Reactive state of one collection view
#[derive(Clone)]
pub struct CollectionResource<T: Send + Sync + 'static> {
    /// Always a list, empty until the first load lands
    pub items: RwSignal<Vec<T>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    api: ApiContext,
    tracker: LoadTracker,
}

impl<T> CollectionResource<T>
where
    T: RestCollection + Send + Sync,
{
    pub fn new(api: ApiContext) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            api,
            tracker: LoadTracker::new(),
        }
    }

    /// Replace `items` with a fresh copy from the server
    ///
    /// On failure `items` keeps its previous content and `error` is set.
    pub fn load(&self) {
        spawn_local(self.reload());
    }

    /// The load itself. The ticket is taken when this is called, not when
    /// the returned future first runs.
    pub fn reload(&self) -> impl Future<Output = ()> + 'static {
        let ticket = self.tracker.begin();
        let this = self.clone();
        self.loading.set(true);

        async move {
            let items = this.items;
            let result = fetch_collection::<T, _>(&this.api.client, |list| {
                if ticket.is_current() {
                    items.set(list);
                }
            })
            .await;
            let result = this.api.session.observe(result);

            if !ticket.is_current() {
                log::debug!("Dropping stale {} load", T::collection_name());
                return;
            }
            this.loading.set(false);
            match result {
                Ok(()) => this.error.set(None),
                Err(e) => this.error.set(Some(format!(
                    "Failed to load {}: {}",
                    T::collection_name(),
                    e
                ))),
            }
        }
    }

    pub fn dispose(&self) {
        self.tracker.dispose();
    }
}

/// Fetch-on-mount binding used by every list view
pub fn use_collection<T>() -> CollectionResource<T>
where
    T: RestCollection + Send + Sync,
{
    let resource = CollectionResource::<T>::new(use_api());
    let handle = resource.clone();
    on_cleanup(move || handle.dispose());
    resource.load();
    resource
}
