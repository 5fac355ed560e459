//! Browser signal sources for the page.
//!
//! Components never touch `web_sys` directly; they receive plain
//! signals from the two helpers here. Both register against the live
//! DOM on mount and tear down on cleanup, so nothing leaks a listener
//! past unmount.

use irma_core::view_state::RevealLatch;
use leptos::html::Div;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Current window scroll offset as a signal.
///
/// The handler recomputes the offset from `scroll_y()` on every event
/// rather than tracking deltas, so it is idempotent and history-free.
/// The listener is removed again on cleanup.
pub fn window_scroll_signal() -> Signal<f64> {
    let (scroll_y, set_scroll_y) = signal(0.0_f64);

    Effect::new(move || {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Ok(y) = window.scroll_y() {
            set_scroll_y.set(y);
        }

        let callback = Closure::<dyn Fn()>::new(move || {
            if let Some(win) = web_sys::window() {
                if let Ok(y) = win.scroll_y() {
                    set_scroll_y.set(y);
                }
            }
        });
        let _ = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());

        // `on_cleanup` requires `Send + Sync`; the wasm-bindgen closure is
        // neither, but the page is single-threaded, so SendWrapper is sound.
        let callback = SendWrapper::new(callback);
        on_cleanup(move || {
            if let Some(win) = web_sys::window() {
                let _ = win.remove_event_listener_with_callback(
                    "scroll",
                    callback.as_ref().unchecked_ref(),
                );
            }
        });
    });

    scroll_y.into()
}

/// Fire-once viewport-entry signal for `node`.
///
/// Backed by an `IntersectionObserver` that feeds a [`RevealLatch`]:
/// the element is unobserved after its first entry, so the signal can
/// never flip back and the animation never replays. If the observer
/// cannot be constructed the element is revealed immediately — content
/// must degrade to visible, never stay hidden.
pub fn reveal_on_enter(node: NodeRef<Div>) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);
    let latch = StoredValue::new(RevealLatch::default());

    Effect::new(move || {
        let Some(el) = node.get() else {
            return;
        };

        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    let intersecting = entry.is_intersecting();
                    latch.update_value(|l| {
                        l.observe(intersecting);
                    });
                    if latch.with_value(|l| l.is_revealed()) {
                        set_revealed.set(true);
                        observer.unobserve(&entry.target());
                    }
                }
            },
        );

        match web_sys::IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(&el);
                let handles = SendWrapper::new((observer, callback));
                on_cleanup(move || {
                    let (observer, callback) = handles.take();
                    observer.disconnect();
                    drop(callback);
                });
            }
            Err(_) => set_revealed.set(true),
        }
    });

    revealed
}
