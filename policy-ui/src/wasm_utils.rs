//! WASM utilities for browser interop
//!
//! # Cleanup Pattern
//!
//! A JavaScript callback backed by a Rust `Closure` must outlive its
//! registration. `closure.forget()` leaks it and leaves the registration in
//! place forever, so instead the closure is stored in a struct whose `Drop`
//! undoes the registration:
//!
//! ```ignore
//! // Listener is attached when EventListener is created
//! let listener = EventListener::new(button.into(), "click", callback);
//!
//! // Listener is removed when `listener` goes out of scope or is dropped
//! drop(listener);
//! ```

use wasm_bindgen_x::prelude::*;

/// An event listener that removes itself when dropped.
pub struct EventListener {
    target: web_sys_x::EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)>,
}

impl EventListener {
    /// Attaches `callback` to `target` for `event_name`.
    pub fn new(
        target: web_sys_x::EventTarget,
        event_name: &'static str,
        callback: impl FnMut(wasm_bindgen_x::JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)> =
            Closure::wrap(Box::new(callback));

        target
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok();

        Self {
            target,
            event_name,
            callback,
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
