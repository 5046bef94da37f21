//! Swaps a broken image for a fallback picture.

use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

/// `on:error` handler body; leaves the image alone once it already shows `fallback`
pub fn swap_to_fallback(ev: &web_sys::Event, fallback: &str) {
    let Some(img) = ev
        .target()
        .and_then(|target| target.dyn_into::<HtmlImageElement>().ok())
    else {
        return;
    };
    if img.src() != fallback {
        img.set_src(fallback);
    }
}
