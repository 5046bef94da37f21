//! UI Components
//!
//! Pages and the reusable pieces they are built from.

mod confirm_dialog;
mod dashboard;
mod filter_bar;
mod image;
mod modal;
mod snackbar;
mod wish_card;
mod wish_form_modal;
mod wish_page;

pub use dashboard::Dashboard;
pub use snackbar::{Snackbar, Toast};
pub use wish_page::WishPage;
