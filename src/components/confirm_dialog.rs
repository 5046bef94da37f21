//! Confirm Dialog Component
//!
//! Two-button confirmation built on `Modal`. Confirming runs `on_confirm`
//! and then closes.

use leptos::prelude::*;

use super::modal::Modal;

#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal open=open title=Signal::stored(title) on_close=on_close>
            <div class="confirm-body">
                <p class="confirm-message">{message.clone()}</p>
                <div class="form-actions">
                    <button type="button" class="btn-secondary" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button
                        type="button"
                        class="btn-danger"
                        on:click=move |_| {
                            on_confirm.run(());
                            on_close.run(());
                        }
                    >
                        "Delete"
                    </button>
                </div>
            </div>
        </Modal>
    }
}
