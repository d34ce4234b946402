//! Browser side effects used by the components: alerts, timers, the body
//! scroll lock and the Escape key.
//!
//! During server rendering effects never run, so the browser calls are
//! compiled out there.

use std::cell::Cell;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use leptos::prelude::*;

use crate::core::scroll_lock::{LockChange, ScrollLockCounter};

thread_local! {
    static SCROLL_LOCK: Cell<ScrollLockCounter> = const { Cell::new(ScrollLockCounter::new()) };
}

/// Show a blocking alert
pub fn notify(message: &str) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(feature = "ssr")]
    {
        leptos::logging::log!("alert: {}", message);
    }
}

/// Stand-in for a network round trip
pub async fn simulate_round_trip(delay: Duration) {
    #[cfg(not(feature = "ssr"))]
    {
        let ms = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
    #[cfg(feature = "ssr")]
    {
        let _ = delay;
    }
}

/// Lock body scrolling while `active` is true. The hold is released when
/// `active` turns false or the calling component unmounts.
pub fn use_body_scroll_lock(active: Signal<bool>) {
    let held = Arc::new(AtomicBool::new(false));

    Effect::new({
        let held = Arc::clone(&held);
        move |_| {
            let want = active.get();
            if held.swap(want, Ordering::Relaxed) != want {
                if want {
                    update_scroll_lock(ScrollLockCounter::acquire);
                } else {
                    update_scroll_lock(ScrollLockCounter::release);
                }
            }
        }
    });

    on_cleanup(move || {
        if held.swap(false, Ordering::Relaxed) {
            update_scroll_lock(ScrollLockCounter::release);
        }
    });
}

fn update_scroll_lock(change: fn(&mut ScrollLockCounter) -> LockChange) {
    let outcome = SCROLL_LOCK.with(|cell| {
        let mut counter = cell.get();
        let outcome = change(&mut counter);
        cell.set(counter);
        outcome
    });

    match outcome {
        LockChange::Lock => set_body_overflow(Some("hidden")),
        LockChange::Unlock => set_body_overflow(None),
        LockChange::Unchanged => {}
    }
}

fn set_body_overflow(value: Option<&str>) {
    #[cfg(not(feature = "ssr"))]
    {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            return;
        };
        let style = body.style();
        let _ = match value {
            Some(v) => style.set_property("overflow", v),
            None => style.remove_property("overflow").map(|_| ()),
        };
    }
    #[cfg(feature = "ssr")]
    {
        let _ = value;
    }
}

/// Run `on_escape` when Escape is pressed while `active` is true
pub fn use_escape_key(active: Signal<bool>, on_escape: Callback<()>) {
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && active.get_untracked() {
                on_escape.run(());
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }
    #[cfg(feature = "ssr")]
    {
        let _ = (active, on_escape);
    }
}
