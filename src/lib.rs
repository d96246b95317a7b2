#![warn(clippy::all)]

//! Chronomap - address-bar state for a web-based historical map.
//!
//! The map client keeps its view (selected year, inspected area or marker,
//! result limit and camera position) in the hash route of the page URL, so a
//! view can be bookmarked, shared and restored on reload. This crate owns
//! that synchronization: decoding untrusted fragments into typed state,
//! merging partial updates without disturbing unrelated parameters, and
//! normalizing years into the supported historical range.

pub mod config;
pub mod location;
pub mod state;
pub mod url;

pub use config::UrlStateConfig;
pub use location::{DefaultLocation, LocationError, LocationPort, MemoryLocation};
pub use state::{
    clamp_year, format_year_for_display, is_valid_year, viewports_approximately_equal,
    EntityType, UrlState, ViewState, ViewportState, DEFAULT_YEAR, MAX_YEAR, MIN_YEAR,
};

#[cfg(target_arch = "wasm32")]
pub use location::BrowserLocation;
