//! Wish Card
//!
//! Grid tile: image, title, description, price, short date, and actions.

use leptos::prelude::*;
use wishlist_core::domain::{format_card_date, format_price, FALLBACK_CARD_IMAGE};
use wishlist_core::{Wish, WishId};

use super::image::swap_to_fallback;

#[component]
pub fn WishCard(
    wish: Wish,
    #[prop(into)] on_edit: Callback<Wish>,
    #[prop(into)] on_delete: Callback<WishId>,
) -> impl IntoView {
    let href = format!("/wish/{}", wish.id);
    let price = format!("${}", format_price(wish.price));
    let date = format_card_date(&wish.created_at);
    let delete_id = wish.id.clone();
    let alt = wish.title.clone();
    let edit_target = wish.clone();

    view! {
        <div class="wish-card">
            <div class="wish-card-image">
                <img
                    src=wish.image_url
                    alt=alt
                    loading="lazy"
                    on:error=move |ev| swap_to_fallback(&ev, FALLBACK_CARD_IMAGE)
                />
            </div>
            <div class="wish-card-body">
                <h3 class="wish-card-title">{wish.title}</h3>
                <p class="wish-card-description">{wish.description}</p>
                <div class="wish-card-meta">
                    <span class="wish-card-price">{price}</span>
                    <span class="wish-card-date">{date}</span>
                </div>
                <div class="wish-card-actions">
                    <a class="btn-view" href=href>"View"</a>
                    <button type="button" class="btn-edit" on:click=move |_| on_edit.run(edit_target.clone())>
                        "Edit"
                    </button>
                    <button
                        type="button"
                        class="btn-delete"
                        title="Delete"
                        on:click=move |_| on_delete.run(delete_id.clone())
                    >
                        "🗑"
                    </button>
                </div>
            </div>
        </div>
    }
}
