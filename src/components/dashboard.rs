//! Dashboard
//!
//! The list view: header, filter bar, and the wish grid in the current order.
//! Owns the add/edit modal and the delete confirmation.

use leptos::prelude::*;
use wishlist_core::{Notification, Operation, SubmitOutcome, Wish, WishId};

use super::confirm_dialog::ConfirmDialog;
use super::filter_bar::FilterBar;
use super::snackbar::Toast;
use super::wish_card::WishCard;
use super::wish_form_modal::WishFormModal;
use crate::store::AppStore;

#[component]
pub fn Dashboard(store: AppStore, toast: Toast) -> impl IntoView {
    let (form_open, set_form_open) = signal(false);
    let (editing, set_editing) = signal::<Option<Wish>>(None);
    let (delete_target, set_delete_target) = signal::<Option<WishId>>(None);

    // Load wishes on mount
    Effect::new(move |_| {
        log::info!("[DASHBOARD] Loading wishes");
        store.refresh();
    });

    let open_add = move |_: ()| {
        set_editing.set(None);
        set_form_open.set(true);
    };
    let open_edit = move |wish: Wish| {
        set_editing.set(Some(wish));
        set_form_open.set(true);
    };
    let close_form = move |_: ()| {
        set_form_open.set(false);
        set_editing.set(None);
    };
    let on_saved = move |outcome: SubmitOutcome| {
        if let Some(notification) = outcome.notification() {
            toast.show(notification);
        }
    };
    let confirm_delete = move |_: ()| {
        let Some(id) = delete_target.get_untracked() else { return };
        log::info!("[DASHBOARD] Deleting wish {}", id);
        store.delete(
            id,
            Callback::new(move |success: bool| {
                toast.show(Notification::for_outcome(Operation::Delete, success));
            }),
        );
    };

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>"Wishlist"</h1>
                <p class="subtitle">"Things you want to get"</p>
            </header>

            <FilterBar store=store on_add=open_add/>

            {move || {
                if store.loading() {
                    view! {
                        <div class="loading-state">
                            <div class="spinner"></div>
                        </div>
                    }
                        .into_any()
                } else if store.sorted().is_empty() {
                    view! {
                        <div class="empty-state">
                            <h2 class="empty-title">"No wishes yet"</h2>
                            <p class="empty-hint">"Create your first wish to get started"</p>
                            <button type="button" class="btn-primary" on:click=move |_| open_add(())>
                                "Add Wish"
                            </button>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="wish-grid">
                            <For
                                each=move || store.sorted()
                                // Composite key so an edited wish re-renders its card
                                key=|wish| (
                                    wish.id.clone(),
                                    wish.title.clone(),
                                    wish.description.clone(),
                                    wish.price.to_bits(),
                                    wish.image_url.clone(),
                                )
                                children=move |wish| view! {
                                    <WishCard
                                        wish=wish
                                        on_edit=open_edit
                                        on_delete=move |id: WishId| set_delete_target.set(Some(id))
                                    />
                                }
                            />
                        </div>
                    }
                        .into_any()
                }
            }}

            <WishFormModal
                store=store
                open=form_open
                editing=editing
                on_close=close_form
                on_done=on_saved
            />
            <ConfirmDialog
                open=Signal::derive(move || delete_target.get().is_some())
                title="Delete wish"
                message="Are you sure? This action cannot be undone."
                on_close=move |_: ()| set_delete_target.set(None)
                on_confirm=confirm_delete
            />
        </div>
    }
}
