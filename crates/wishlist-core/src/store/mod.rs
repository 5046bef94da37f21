//! Wish Store
//!
//! Owns the canonical in-memory wish collection and the sort preferences.
//! Mutations go to the backend first; local state only changes once the
//! backend has confirmed, and then it takes the backend's version of the
//! wish. Every operation reports a plain `bool`, never an error.
//!
//! The store is a cheap `Clone` handle. State sits behind a lock that is
//! never held across an `.await`, and listeners run after it is released.

use std::sync::{Arc, RwLock};

use chrono::Utc;

use crate::api::WishApi;
use crate::config::ApiConfig;
use crate::domain::{
    sorted_view, NewWish, SortByDate, SortByPrice, Wish, WishForm, WishFormData, WishId,
};
use crate::http::{RequestStatus, Transport};
use crate::notify::{Notification, Operation};
use crate::observe::Listeners;
use crate::sync::{read, write};

pub use crate::observe::Subscription;

#[derive(Debug, Default)]
struct WishState {
    wishes: Vec<Wish>,
    sort_by_date: SortByDate,
    sort_by_price: SortByPrice,
}

/// Result of submitting the add/edit form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent
    Rejected,
    Saved(Operation),
    Failed(Operation),
}

impl SubmitOutcome {
    pub fn notification(&self) -> Option<Notification> {
        match self {
            SubmitOutcome::Rejected => None,
            SubmitOutcome::Saved(op) => Some(Notification::for_outcome(*op, true)),
            SubmitOutcome::Failed(op) => Some(Notification::for_outcome(*op, false)),
        }
    }
}

pub struct WishStore<T> {
    api: Arc<WishApi<T>>,
    state: Arc<RwLock<WishState>>,
    listeners: Listeners,
}

impl<T> Clone for WishStore<T> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            state: Arc::clone(&self.state),
            listeners: self.listeners.clone(),
        }
    }
}

impl<T: Transport> WishStore<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        let listeners = Listeners::new();
        Self {
            api: Arc::new(WishApi::with_listeners(transport, config, listeners.clone())),
            state: Arc::new(RwLock::new(WishState::default())),
            listeners,
        }
    }

    pub fn api(&self) -> &WishApi<T> {
        &self.api
    }

    // ========================
    // Backend Operations
    // ========================

    /// Replace the whole collection with the backend's. On failure the old collection stays.
    pub async fn fetch_all(&self) -> bool {
        match self.api.list().await {
            Ok(wishes) => {
                log::info!("[STORE] Loaded {} wishes", wishes.len());
                self.mutate(|state| state.wishes = wishes);
                true
            }
            Err(_) => false,
        }
    }

    /// Stamp `createdAt` and create. Validation is the caller's job.
    pub async fn add(&self, form: &WishFormData) -> bool {
        let new_wish = NewWish::stamped(form.clone(), Utc::now());
        match self.api.create(&new_wish).await {
            Ok(created) => {
                log::info!("[STORE] Added wish {}", created.id);
                self.mutate(|state| {
                    state.wishes.retain(|wish| wish.id != created.id);
                    state.wishes.push(created);
                });
                true
            }
            Err(_) => false,
        }
    }

    /// Patch the form fields of `id` and swap in the backend's updated wish.
    /// Only an entry already in the collection is replaced; nothing is appended.
    pub async fn update(&self, id: &WishId, form: &WishFormData) -> bool {
        match self.api.update(id, form).await {
            Ok(updated) => {
                log::info!("[STORE] Updated wish {}", id);
                self.mutate(|state| {
                    if let Some(entry) = state.wishes.iter_mut().find(|wish| wish.id == *id) {
                        *entry = updated;
                    }
                });
                true
            }
            Err(_) => false,
        }
    }

    /// Delete `id` and filter it out of the collection.
    pub async fn delete(&self, id: &WishId) -> bool {
        match self.api.delete(id).await {
            Ok(()) => {
                log::info!("[STORE] Deleted wish {}", id);
                self.mutate(|state| state.wishes.retain(|wish| wish.id != *id));
                true
            }
            Err(_) => false,
        }
    }

    /// Validate, then add or update depending on what the form is editing.
    /// A rejected form never reaches the backend.
    pub async fn submit(&self, form: &mut WishForm) -> SubmitOutcome {
        if !form.validate() {
            return SubmitOutcome::Rejected;
        }
        let data = form.data.clone();
        match form.editing().cloned() {
            Some(id) => {
                if self.update(&id, &data).await {
                    SubmitOutcome::Saved(Operation::Update)
                } else {
                    SubmitOutcome::Failed(Operation::Update)
                }
            }
            None => {
                if self.add(&data).await {
                    SubmitOutcome::Saved(Operation::Add)
                } else {
                    SubmitOutcome::Failed(Operation::Add)
                }
            }
        }
    }
}

impl<T> WishStore<T> {
    // ========================
    // Reads
    // ========================

    pub fn wishes(&self) -> Vec<Wish> {
        read(&self.state).wishes.clone()
    }

    pub fn len(&self) -> usize {
        read(&self.state).wishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Linear scan; `None` when the id is unknown
    pub fn get_by_id(&self, id: &WishId) -> Option<Wish> {
        read(&self.state).wishes.iter().find(|wish| wish.id == *id).cloned()
    }

    /// Fresh sorted copy of the collection under the current preferences
    pub fn sorted(&self) -> Vec<Wish> {
        let state = read(&self.state);
        sorted_view(&state.wishes, state.sort_by_date, state.sort_by_price)
    }

    // ========================
    // Sort Preferences
    // ========================

    pub fn sort_by_date(&self) -> SortByDate {
        read(&self.state).sort_by_date
    }

    pub fn sort_by_price(&self) -> SortByPrice {
        read(&self.state).sort_by_price
    }

    pub fn set_sort_by_date(&self, sort: SortByDate) {
        if self.sort_by_date() != sort {
            self.mutate(|state| state.sort_by_date = sort);
        }
    }

    pub fn set_sort_by_price(&self, sort: SortByPrice) {
        if self.sort_by_price() != sort {
            self.mutate(|state| state.sort_by_price = sort);
        }
    }

    // ========================
    // Request Flags & Listeners
    // ========================

    pub fn status(&self) -> RequestStatus {
        self.api.executor().status()
    }

    pub fn loading(&self) -> bool {
        self.status().loading
    }

    pub fn error(&self) -> Option<String> {
        self.status().error
    }

    /// Called after every collection, preference, or loading/error change
    pub fn subscribe(&self, listener: impl Fn() + Send + Sync + 'static) -> Subscription {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&self, subscription: Subscription) {
        self.listeners.unsubscribe(subscription);
    }

    fn mutate(&self, change: impl FnOnce(&mut WishState)) {
        change(&mut write(&self.state));
        self.listeners.notify();
    }
}

impl<T> std::fmt::Debug for WishStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WishStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners)
            .finish()
    }
}
