use js_sys::Function;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

/// Retrieve the global `window` object, if the code runs in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Fire `callback` once after `delay_ms` via the browser event loop.
///
/// The callback runs on the same execution context as UI events, so the
/// game controller never sees concurrent mutation. Outside a browser
/// this is a no-op; callers guard staleness through the controller's
/// timer epoch, not through cancellation.
pub fn schedule_timeout(delay_ms: u64, callback: impl FnOnce() + 'static) {
    let Some(window) = window() else {
        return;
    };
    let closure = Closure::once(callback);
    let function: &Function = closure.as_ref().unchecked_ref();
    let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
    if let Err(err) = window.set_timeout_with_callback_and_timeout_and_arguments_0(function, delay)
    {
        log::warn!("timeout not scheduled: {err:?}");
    }
    // The browser owns the callback lifetime from here.
    closure.forget();
}
