//! Wish Page
//!
//! Detail view for `/wish/:id`. Works on a cold load by fetching the
//! collection first; an id that is still unknown once loading settles sends
//! the user back to the list.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use wishlist_core::domain::{format_detail_date, format_price, FALLBACK_DETAIL_IMAGE};
use wishlist_core::notify::REDIRECT_AFTER_DELETE_MS;
use wishlist_core::{DetailLookup, Notification, Operation, SubmitOutcome, WishId};

use super::confirm_dialog::ConfirmDialog;
use super::image::swap_to_fallback;
use super::snackbar::Toast;
use super::wish_form_modal::WishFormModal;
use crate::store::AppStore;

#[component]
pub fn WishPage(store: AppStore, toast: Toast) -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();

    let wish = Memo::new(move |_| {
        let id = params.read().get("id").map(WishId::from)?;
        store.get_by_id(&id)
    });

    let (edit_open, set_edit_open) = signal(false);
    let (delete_open, set_delete_open) = signal(false);
    // Set once this page deleted its own wish; suppresses the not-found redirect
    let (leaving, set_leaving) = signal(false);

    Effect::new(move |_| store.ensure_loaded());

    let redirect = navigate.clone();
    Effect::new(move |_| {
        let lookup = DetailLookup {
            found: wish.with(Option::is_some),
            loaded: store.loaded(),
            loading: store.loading(),
            leaving: leaving.get(),
        };
        if lookup.should_redirect() {
            log::warn!("[WISH] Unknown wish, back to list");
            redirect("/", Default::default());
        }
    });

    Effect::new(move |_| {
        if leaving.get() {
            let navigate = navigate.clone();
            spawn_local(async move {
                TimeoutFuture::new(REDIRECT_AFTER_DELETE_MS).await;
                navigate("/", Default::default());
            });
        }
    });

    let on_saved = move |outcome: SubmitOutcome| {
        if let Some(notification) = outcome.notification() {
            toast.show(notification);
        }
    };
    let confirm_delete = move |_: ()| {
        let Some(current) = wish.get_untracked() else { return };
        log::info!("[WISH] Deleting wish {}", current.id);
        store.delete(
            current.id,
            Callback::new(move |success: bool| {
                toast.show(Notification::for_outcome(Operation::Delete, success));
                if success {
                    set_leaving.set(true);
                }
            }),
        );
    };

    view! {
        {move || wish.get().map(|current| {
            let price = format!("${}", format_price(current.price));
            let added = format!("Added {}", format_detail_date(&current.created_at));
            let alt = current.title.clone();
            view! {
                <div class="wish-page">
                    <a class="back-link" href="/">"← Back to list"</a>
                    <div class="wish-detail">
                        <div class="wish-detail-image">
                            <img
                                src=current.image_url
                                alt=alt
                                on:error=move |ev| swap_to_fallback(&ev, FALLBACK_DETAIL_IMAGE)
                            />
                        </div>
                        <div class="wish-detail-body">
                            <h1 class="wish-detail-title">{current.title}</h1>
                            <span class="wish-detail-date">{added}</span>
                            <div class="wish-detail-price">{price}</div>
                            <p class="wish-detail-description">{current.description}</p>
                            <div class="wish-detail-actions">
                                <button type="button" class="btn-primary" on:click=move |_| set_edit_open.set(true)>
                                    "Edit Wish"
                                </button>
                                <button
                                    type="button"
                                    class="btn-delete"
                                    title="Delete"
                                    on:click=move |_| set_delete_open.set(true)
                                >
                                    "🗑"
                                </button>
                            </div>
                        </div>
                    </div>
                </div>
            }
        })}

        <WishFormModal
            store=store
            open=edit_open
            editing=wish
            on_close=move |_: ()| set_edit_open.set(false)
            on_done=on_saved
        />
        <ConfirmDialog
            open=delete_open
            title="Delete wish"
            message="Are you sure? This action cannot be undone."
            on_close=move |_: ()| set_delete_open.set(false)
            on_confirm=confirm_delete
        />
    }
}
