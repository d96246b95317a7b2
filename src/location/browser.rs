//! Browser-backed location using `window.location` and `replaceState`.

use super::{LocationError, LocationPort};

/// The real address bar.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLocation;

impl BrowserLocation {
    pub fn new() -> Self {
        Self
    }
}

impl LocationPort for BrowserLocation {
    fn fragment(&self) -> String {
        let Some(window) = web_sys::window() else {
            return String::new();
        };

        window.location().hash().unwrap_or_default()
    }

    fn replace_fragment(&mut self, fragment: &str) -> Result<(), LocationError> {
        let window = web_sys::window().ok_or(LocationError::NoWindow)?;
        let history = window.history().map_err(|_| LocationError::NoHistory)?;

        history
            .replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(fragment))
            .map_err(|e| LocationError::ReplaceFailed(format!("{:?}", e)))
    }
}
