//! Snackbar
//!
//! One toast at a time. A newer toast replaces the current one, and each
//! toast's timer only dismisses the toast it was started for.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wishlist_core::notify::TOAST_DURATION_MS;
use wishlist_core::Notification;

/// Copy handle for raising toasts from any view
#[derive(Clone, Copy)]
pub struct Toast {
    current: RwSignal<Option<(u64, Notification)>>,
    next_id: StoredValue<u64>,
}

impl Toast {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            next_id: StoredValue::new(0),
        }
    }

    pub fn show(&self, notification: Notification) {
        self.next_id.update_value(|id| *id += 1);
        let id = self.next_id.get_value();
        log::debug!("[TOAST] {}", notification.message);
        self.current.set(Some((id, notification)));

        let current = self.current;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            let still_shown = current
                .try_with_untracked(|shown| {
                    matches!(shown, Some((shown_id, _)) if *shown_id == id)
                })
                .unwrap_or(false);
            if still_shown {
                current.try_set(None);
            }
        });
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }
}

impl Default for Toast {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn Snackbar(toast: Toast) -> impl IntoView {
    view! {
        {move || toast.current.get().map(|(_, notification)| {
            let (class, icon) = if notification.is_error() {
                ("snackbar snackbar-error", "✕")
            } else {
                ("snackbar snackbar-success", "✓")
            };
            view! {
                <div class="snackbar-container">
                    <div class=class role="status">
                        <span class="snackbar-icon">{icon}</span>
                        <p class="snackbar-message">{notification.message}</p>
                        <button type="button" class="snackbar-close" on:click=move |_| toast.dismiss()>
                            "×"
                        </button>
                    </div>
                </div>
            }
        })}
    }
}
