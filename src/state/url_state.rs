//! Two-way sync between the map view and the hash route.
//!
//! The selected year, inspected entity, result limit and map camera live in
//! the query part of the hash route (`#/?year=1500&type=area&value=Rome`).
//! Nothing is cached: every read decodes the location afresh and every write
//! is a read-modify-write that replaces the current history entry.

use crate::config::UrlStateConfig;
use crate::location::{DefaultLocation, LocationPort};
use crate::url::{Fragment, QueryParams};

use super::view_state::ViewState;
use super::viewport::{viewports_approximately_equal, ViewportState, VIEWPORT_PARAMS};

/// Synchronizes view state with a location fragment.
pub struct UrlState<L: LocationPort = DefaultLocation> {
    location: L,
    config: UrlStateConfig,
}

impl UrlState<DefaultLocation> {
    /// Uses the platform's default location (the address bar on WASM).
    pub fn new() -> Self {
        Self::with_location(DefaultLocation::default())
    }
}

impl Default for UrlState<DefaultLocation> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: LocationPort> UrlState<L> {
    pub fn with_location(location: L) -> Self {
        Self::with_config(location, UrlStateConfig::default())
    }

    pub fn with_config(location: L, config: UrlStateConfig) -> Self {
        Self { location, config }
    }

    pub fn config(&self) -> &UrlStateConfig {
        &self.config
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    fn read(&self) -> (Fragment, QueryParams) {
        let fragment = Fragment::parse(&self.location.fragment());
        let params = QueryParams::parse(&fragment.query);
        (fragment, params)
    }

    fn write(&mut self, mut fragment: Fragment, params: &QueryParams) {
        fragment.query = params.to_query_string();
        let new_fragment = fragment.to_fragment_string(&self.config.default_route);

        log::debug!("Replacing location fragment: {}", new_fragment);
        if let Err(e) = self.location.replace_fragment(&new_fragment) {
            log::warn!("Failed to update location: {}", e);
        }
    }

    /// Decodes the view state from the current location. Invalid or missing
    /// fields are absent; this never fails.
    pub fn parse_url_state(&self) -> ViewState {
        let (_, params) = self.read();
        ViewState::from_query(&params)
    }

    /// Merges the set fields of `partial` into the location.
    ///
    /// Fields that are `None` are left as they are; use
    /// [`clear_url_params`](Self::clear_url_params) to remove them. The year
    /// is written as given, without clamping.
    pub fn update_url_state(&mut self, partial: &ViewState) {
        let (fragment, mut params) = self.read();
        partial.write_query(&mut params);
        self.write(fragment, &params);
    }

    /// Removes exactly the named parameters, including ones outside the
    /// view-state vocabulary.
    pub fn clear_url_params(&mut self, names: &[&str]) {
        let (fragment, mut params) = self.read();
        if !params.remove_all(names) {
            return;
        }
        self.write(fragment, &params);
    }

    /// True iff the location holds both a valid entity type and a value.
    pub fn has_drawer_params(&self) -> bool {
        self.parse_url_state().has_drawer_params()
    }

    /// Decodes the map viewport, if all three components are valid.
    pub fn parse_viewport(&self) -> Option<ViewportState> {
        let (_, params) = self.read();
        ViewportState::from_query(&params)
    }

    /// Writes the viewport unless the location already holds the same one,
    /// compared at the written precision and within the configured epsilon.
    /// Returns true if the location was written.
    pub fn update_viewport(&mut self, viewport: &ViewportState) -> bool {
        if !viewport.is_valid() {
            log::warn!("Ignoring invalid viewport: {:?}", viewport);
            return false;
        }

        let (fragment, mut params) = self.read();
        let target = viewport.quantized(&self.config);
        if let Some(current) = ViewportState::from_query(&params) {
            if viewports_approximately_equal(&current, &target, self.config.viewport_epsilon) {
                log::debug!("Viewport unchanged, skipping location write");
                return false;
            }
        }

        viewport.write_query(&mut params, &self.config);
        self.write(fragment, &params);
        true
    }

    /// Removes the viewport parameters.
    pub fn clear_viewport(&mut self) {
        self.clear_url_params(&VIEWPORT_PARAMS);
    }
}
