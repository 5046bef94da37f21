//! Reactive Store Handle
//!
//! Wraps the wish store in a `Copy` handle that views receive as a prop.
//! Store change notifications bump a version signal, so any view that reads
//! through this handle re-renders when wishes, sort preferences, or the
//! loading flag change.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wishlist_core::{
    ApiConfig, ReqwestTransport, SortByDate, SortByPrice, SubmitOutcome, Wish, WishForm, WishId,
    WishStore,
};

pub type Backend = WishStore<ReqwestTransport>;

#[derive(Clone, Copy)]
pub struct AppStore {
    backend: StoredValue<Backend>,
    /// Bumped on every store change
    version: RwSignal<u64>,
    /// Set once the first fetch has settled, successful or not
    loaded: RwSignal<bool>,
}

impl AppStore {
    pub fn new(config: ApiConfig) -> Self {
        log::info!("[STORE] Backend at {}", config.base_url);
        let backend = WishStore::new(ReqwestTransport::new(), config);
        let version = RwSignal::new(0u64);
        backend.subscribe(move || {
            version.try_update(|v| *v += 1);
        });
        Self {
            backend: StoredValue::new(backend),
            version,
            loaded: RwSignal::new(false),
        }
    }

    /// Cloned store handle for use inside a task
    pub fn backend(&self) -> Backend {
        self.backend.get_value()
    }

    // ========================
    // Tracked Reads
    // ========================

    pub fn sorted(&self) -> Vec<Wish> {
        self.version.track();
        self.backend.with_value(|store| store.sorted())
    }

    pub fn get_by_id(&self, id: &WishId) -> Option<Wish> {
        self.version.track();
        self.backend.with_value(|store| store.get_by_id(id))
    }

    pub fn loading(&self) -> bool {
        self.version.track();
        self.backend.with_value(|store| store.loading())
    }

    pub fn loaded(&self) -> bool {
        self.loaded.get()
    }

    pub fn sort_by_date(&self) -> SortByDate {
        self.version.track();
        self.backend.with_value(|store| store.sort_by_date())
    }

    pub fn sort_by_price(&self) -> SortByPrice {
        self.version.track();
        self.backend.with_value(|store| store.sort_by_price())
    }

    // ========================
    // Actions
    // ========================

    pub fn set_sort_by_date(&self, sort: SortByDate) {
        self.backend().set_sort_by_date(sort);
    }

    pub fn set_sort_by_price(&self, sort: SortByPrice) {
        self.backend().set_sort_by_price(sort);
    }

    /// Reload the whole collection from the backend
    pub fn refresh(&self) {
        let backend = self.backend();
        let loaded = self.loaded;
        spawn_local(async move {
            backend.fetch_all().await;
            loaded.try_set(true);
        });
    }

    /// Reload only if nothing has been fetched yet (direct links to a detail page)
    pub fn ensure_loaded(&self) {
        if !self.loaded.get_untracked() {
            self.refresh();
        }
    }

    /// Validate and save in the background; `on_done` gets the outcome
    pub fn submit(&self, mut form: WishForm, on_done: Callback<SubmitOutcome>) {
        let backend = self.backend();
        spawn_local(async move {
            let outcome = backend.submit(&mut form).await;
            on_done.run(outcome);
        });
    }

    /// Delete in the background; `on_done` gets the success flag
    pub fn delete(&self, id: WishId, on_done: Callback<bool>) {
        let backend = self.backend();
        spawn_local(async move {
            let success = backend.delete(&id).await;
            on_done.run(success);
        });
    }
}
