//! Wish Form Modal
//!
//! Add/edit form inside a `Modal`. The form resets from `editing` each time
//! the modal opens. Validation errors show inline and keep the modal open;
//! a valid form is handed to the store and the modal closes right away.

use leptos::prelude::*;
use wishlist_core::{FormField, SubmitOutcome, Wish, WishForm};

use super::modal::Modal;
use crate::store::AppStore;

#[component]
pub fn WishFormModal(
    store: AppStore,
    #[prop(into)] open: Signal<bool>,
    /// Wish being edited, `None` for a new wish
    #[prop(into)]
    editing: Signal<Option<Wish>>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_done: Callback<SubmitOutcome>,
) -> impl IntoView {
    let form = RwSignal::new(WishForm::blank());

    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        let fresh = editing.with(|wish| match wish {
            Some(wish) => WishForm::for_wish(wish),
            None => WishForm::blank(),
        });
        form.set(fresh);
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut staged = form.get_untracked();
        if !staged.validate() {
            log::debug!("[FORM] Rejected with {} error(s)", staged.errors.len());
            form.set(staged);
            return;
        }
        store.submit(staged, on_done);
        on_close.run(());
    };

    let title = Signal::derive(move || form.with(|f| f.heading().to_string()));

    view! {
        <Modal open=open title=title on_close=on_close>
            <form class="wish-form" novalidate=true on:submit=submit>
                <div class="form-group">
                    <label for="wish-title">"Title"</label>
                    <input
                        id="wish-title"
                        type="text"
                        class="input-field"
                        name=FormField::Title.name()
                        placeholder="e.g., Wireless headphones"
                        prop:value=move || form.with(|f| f.value(FormField::Title))
                        on:input=move |ev| form.update(|f| f.set_field(FormField::Title, &event_target_value(&ev)))
                    />
                    <FieldError form=form field=FormField::Title/>
                </div>
                <div class="form-group">
                    <label for="wish-description">"Description"</label>
                    <textarea
                        id="wish-description"
                        class="input-field"
                        name=FormField::Description.name()
                        rows="3"
                        placeholder="Why do you want it?"
                        prop:value=move || form.with(|f| f.value(FormField::Description))
                        on:input=move |ev| form.update(|f| f.set_field(FormField::Description, &event_target_value(&ev)))
                    ></textarea>
                    <FieldError form=form field=FormField::Description/>
                </div>
                <div class="form-group">
                    <label for="wish-price">"Price"</label>
                    <input
                        id="wish-price"
                        type="number"
                        class="input-field"
                        name=FormField::Price.name()
                        min="0"
                        step="0.01"
                        placeholder="0.00"
                        prop:value=move || form.with(|f| f.value(FormField::Price))
                        on:input=move |ev| form.update(|f| f.set_field(FormField::Price, &event_target_value(&ev)))
                    />
                    <FieldError form=form field=FormField::Price/>
                </div>
                <div class="form-group">
                    <label for="wish-image">"Image URL"</label>
                    <input
                        id="wish-image"
                        type="url"
                        class="input-field"
                        name=FormField::ImageUrl.name()
                        placeholder="https://"
                        prop:value=move || form.with(|f| f.value(FormField::ImageUrl))
                        on:input=move |ev| form.update(|f| f.set_field(FormField::ImageUrl, &event_target_value(&ev)))
                    />
                    <FieldError form=form field=FormField::ImageUrl/>
                </div>
                <div class="form-actions">
                    <button type="button" class="btn-secondary" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn-primary">
                        {move || form.with(|f| f.submit_label())}
                    </button>
                </div>
            </form>
        </Modal>
    }
}

/// Inline message under an input, hidden while the field is valid
#[component]
fn FieldError(form: RwSignal<WishForm>, field: FormField) -> impl IntoView {
    move || {
        form.with(|f| f.errors.get(field))
            .map(|message| view! { <p class="field-error">{message}</p> })
    }
}
