//! Access to the browser location fragment.
//!
//! The address bar is the only shared mutable resource the codecs touch, so
//! it sits behind [`LocationPort`]: one read and one in-place replace. On
//! WASM targets the default port talks to `window.location` and
//! `window.history`. On native targets there is no address bar, and the
//! in-memory [`MemoryLocation`] is used instead (also the test stub).

#[cfg(target_arch = "wasm32")]
mod browser;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserLocation;

/// Errors that can occur when writing the location.
#[derive(Debug, Clone)]
pub enum LocationError {
    /// No `window` object is available.
    NoWindow,
    /// The window has no history object.
    NoHistory,
    /// `history.replaceState` rejected the new URL.
    ReplaceFailed(String),
}

impl std::fmt::Display for LocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationError::NoWindow => write!(f, "No window available"),
            LocationError::NoHistory => write!(f, "No history available"),
            LocationError::ReplaceFailed(msg) => write!(f, "Replace state failed: {}", msg),
        }
    }
}

impl std::error::Error for LocationError {}

/// Read/replace access to the current location fragment.
///
/// Note: no `Send` bound; the browser event loop is single-threaded and JS
/// handles cannot cross threads.
pub trait LocationPort {
    /// Returns the current fragment including the leading `#`, or an empty
    /// string when there is none.
    fn fragment(&self) -> String;

    /// Replaces the current history entry's fragment without creating a new
    /// history entry.
    fn replace_fragment(&mut self, fragment: &str) -> Result<(), LocationError>;
}

/// Location used by [`UrlState::new`](crate::UrlState::new).
#[cfg(target_arch = "wasm32")]
pub type DefaultLocation = BrowserLocation;

/// Location used by [`UrlState::new`](crate::UrlState::new).
#[cfg(not(target_arch = "wasm32"))]
pub type DefaultLocation = MemoryLocation;

/// An in-memory location fragment.
#[derive(Debug, Clone, Default)]
pub struct MemoryLocation {
    fragment: String,
    writes: usize,
}

impl MemoryLocation {
    pub fn new(fragment: impl Into<String>) -> Self {
        Self {
            fragment: fragment.into(),
            writes: 0,
        }
    }

    /// Number of successful `replace_fragment` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl LocationPort for MemoryLocation {
    fn fragment(&self) -> String {
        self.fragment.clone()
    }

    fn replace_fragment(&mut self, fragment: &str) -> Result<(), LocationError> {
        self.fragment = fragment.to_string();
        self.writes += 1;
        Ok(())
    }
}

impl<L: LocationPort + ?Sized> LocationPort for &mut L {
    fn fragment(&self) -> String {
        (**self).fragment()
    }

    fn replace_fragment(&mut self, fragment: &str) -> Result<(), LocationError> {
        (**self).replace_fragment(fragment)
    }
}
