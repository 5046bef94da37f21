//! Domain Layer
//!
//! Wish entities and the pure rules around them. Nothing in here touches the network.

mod display;
mod form;
mod sort;
mod wish;

pub use display::{
    format_card_date, format_detail_date, format_price, FALLBACK_CARD_IMAGE, FALLBACK_DETAIL_IMAGE,
};
pub use form::{parse_price_input, FormErrors, FormField, WishForm};
pub use sort::{compare_wishes, sorted_view, SortByDate, SortByPrice};
pub use wish::{format_timestamp, parse_timestamp, NewWish, Wish, WishFormData, WishId};
