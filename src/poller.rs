use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::error::ClientError;

/// A browser interval that runs `tick` every `period_ms` until dropped.
pub struct Poller {
    window: Window,
    handle: i32,
    _tick: Closure<dyn FnMut()>,
}

impl Poller {
    pub fn start<F>(period_ms: u32, tick: F) -> Result<Self, ClientError>
    where
        F: FnMut() + 'static,
    {
        let window = web_sys::window().ok_or(ClientError::NoWindow)?;
        let tick = Closure::wrap(Box::new(tick) as Box<dyn FnMut()>);
        let timeout = i32::try_from(period_ms).unwrap_or(i32::MAX);
        let handle = window
            .set_interval_with_callback_and_timeout_and_arguments_0(tick.as_ref().unchecked_ref(), timeout)
            .map_err(|e| ClientError::from_js(&e))?;
        Ok(Self { window, handle, _tick: tick })
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        // Clear before the closure is freed so the browser never calls a dropped callback
        self.window.clear_interval_with_handle(self.handle);
    }
}
