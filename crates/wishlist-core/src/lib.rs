//! Wishlist Core
//!
//! Layered architecture:
//! - domain: wish entities, form rules, ordering and display helpers
//! - http: request execution with loading/error tracking over a pluggable transport
//! - api: typed REST client for the `/wishes` collection
//! - store: the canonical in-memory collection and its CRUD orchestration
//! - navigation: when the detail view falls back to the list

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod http;
pub mod navigation;
pub mod notify;
pub mod observe;
pub mod store;
mod sync;

pub use api::WishApi;
pub use config::ApiConfig;
pub use domain::{
    FormErrors, FormField, NewWish, SortByDate, SortByPrice, Wish, WishForm, WishFormData, WishId,
};
pub use error::{ApiError, ApiResult};
pub use http::{
    HttpExecutor, HttpRequest, HttpResponse, RequestStatus, ReqwestTransport, Transport,
};
pub use navigation::DetailLookup;
pub use notify::{Notification, NotificationKind, Operation};
pub use store::{SubmitOutcome, Subscription, WishStore};
