//! Address-bar backed view state.
//!
//! This module contains the codecs that translate between the location
//! fragment and the in-memory view: the year normalizer, the view-state
//! record, the map viewport, and [`UrlState`] which binds them to a
//! location.

pub mod url_state;
pub mod view_state;
pub mod viewport;
pub mod year;

pub use url_state::UrlState;
pub use view_state::{
    EntityType, UnknownEntityType, ViewState, LIMIT_PARAM, TYPE_PARAM, VALUE_PARAM, YEAR_PARAM,
};
pub use viewport::{
    viewports_approximately_equal, ViewportState, LAT_PARAM, LON_PARAM, VIEWPORT_PARAMS,
    ZOOM_PARAM,
};
pub use year::{
    clamp_year, format_year_for_display, is_valid_year, DEFAULT_YEAR, MAX_YEAR, MIN_YEAR,
};
