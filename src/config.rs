//! Configuration for address-bar synchronization.

use serde::{Deserialize, Serialize};

/// Settings for how state is written to the location fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlStateConfig {
    /// Route written when the current fragment has none (e.g. `#` or empty).
    pub default_route: String,
    /// Decimal places for latitude and longitude.
    pub coordinate_precision: usize,
    /// Decimal places for zoom.
    pub zoom_precision: usize,
    /// Viewports closer than this on every component are not rewritten.
    pub viewport_epsilon: f64,
}

impl Default for UrlStateConfig {
    fn default() -> Self {
        Self {
            default_route: "/".to_string(),
            coordinate_precision: 5, // ~1 m at the equator
            zoom_precision: 2,
            viewport_epsilon: 1e-4,
        }
    }
}

impl UrlStateConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_route(mut self, route: impl Into<String>) -> Self {
        self.default_route = route.into();
        self
    }

    pub fn with_coordinate_precision(mut self, digits: usize) -> Self {
        self.coordinate_precision = digits;
        self
    }

    pub fn with_zoom_precision(mut self, digits: usize) -> Self {
        self.zoom_precision = digits;
        self
    }

    pub fn with_viewport_epsilon(mut self, epsilon: f64) -> Self {
        self.viewport_epsilon = epsilon;
        self
    }
}
