//! Wishlist Frontend App
//!
//! Router plus the app-wide store and toast handles. Both handles are
//! created once here and passed down as props.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;
use wishlist_core::ApiConfig;

use crate::components::{Dashboard, Snackbar, Toast, WishPage};
use crate::store::AppStore;

#[component]
pub fn App() -> impl IntoView {
    let store = AppStore::new(ApiConfig::from_build_env());
    let toast = Toast::new();

    view! {
        <Router>
            <main class="app-layout">
                <Routes fallback=|| view! { <Redirect path="/"/> }>
                    <Route path=path!("/") view=move || view! { <Dashboard store=store toast=toast/> }/>
                    <Route path=path!("/wish/:id") view=move || view! { <WishPage store=store toast=toast/> }/>
                </Routes>
            </main>
            <Snackbar toast=toast/>
        </Router>
    }
}
