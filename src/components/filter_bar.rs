//! Filter Bar
//!
//! Date and price ordering selects, plus the "Add Wish" button.

use leptos::prelude::*;
use wishlist_core::{SortByDate, SortByPrice};

use crate::store::AppStore;

#[component]
pub fn FilterBar(store: AppStore, #[prop(into)] on_add: Callback<()>) -> impl IntoView {
    view! {
        <div class="filter-bar">
            <div class="filter-selects">
                <select
                    class="select-field"
                    name="sortByDate"
                    on:change=move |ev| store.set_sort_by_date(SortByDate::from_str(&event_target_value(&ev)))
                >
                    {SortByDate::ALL
                        .into_iter()
                        .map(|sort| view! {
                            <option value=sort.as_str() prop:selected=move || store.sort_by_date() == sort>
                                {sort.label()}
                            </option>
                        })
                        .collect_view()}
                </select>
                <select
                    class="select-field"
                    name="sortByPrice"
                    on:change=move |ev| store.set_sort_by_price(SortByPrice::from_str(&event_target_value(&ev)))
                >
                    {SortByPrice::ALL
                        .into_iter()
                        .map(|sort| view! {
                            <option value=sort.as_str() prop:selected=move || store.sort_by_price() == sort>
                                {sort.label()}
                            </option>
                        })
                        .collect_view()}
                </select>
            </div>
            <button type="button" class="btn-primary" on:click=move |_| on_add.run(())>
                "Add Wish"
            </button>
        </div>
    }
}
