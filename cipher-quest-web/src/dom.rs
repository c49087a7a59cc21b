use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Storage, Window};

/// Retrieve the global `window` object. Always `None` off the browser.
#[must_use]
pub fn window() -> Option<Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Access the browser `localStorage` handle, if the page is allowed one.
#[must_use]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// Wall clock in epoch milliseconds.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn now_ms() -> u64 {
    let now = js_sys::Date::now();
    if now.is_finite() && now > 0.0 {
        now as u64
    } else {
        0
    }
}

/// Wall clock in epoch milliseconds.
#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |elapsed| {
            u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
        })
}

/// A repeating `setInterval` timer, cleared when dropped.
#[cfg(target_arch = "wasm32")]
pub struct Interval {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

#[cfg(target_arch = "wasm32")]
impl Interval {
    /// Start calling `tick` every `period_ms` milliseconds.
    ///
    /// # Errors
    /// Returns an error if there is no window or the timer cannot be scheduled.
    pub fn new(period_ms: i32, tick: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut()>::new(tick);
        let handle = window()
            .ok_or_else(|| JsValue::from_str("window unavailable"))?
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                period_ms,
            )?;
        Ok(Self {
            handle,
            _callback: callback,
        })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(win) = window() {
            win.clear_interval_with_handle(self.handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_is_past_2020() {
        assert!(now_ms() > 1_577_836_800_000);
    }

    #[test]
    fn local_storage_unavailable_off_browser() {
        assert!(window().is_none());
        assert!(local_storage().is_none());
    }
}
