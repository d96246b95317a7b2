//! Property-based invariant tests for address-bar state.
//!
//! 1. Writing a full view state and reading it back yields the same state.
//! 2. Clamping is idempotent and always lands in the supported range.
//! 3. Clearing drawer params leaves the year intact.
//! 4. Decode, re-encode, decode is stable for arbitrary fragments.
//! 5. Unrelated parameters survive updates untouched.
//! 6. Viewports round-trip within the written precision.

use chronomap::{
    clamp_year, is_valid_year, EntityType, LocationPort, MemoryLocation, UrlState, ViewState,
    ViewportState, MAX_YEAR, MIN_YEAR,
};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn entity_type_strategy() -> impl Strategy<Value = EntityType> {
    prop_oneof![Just(EntityType::Area), Just(EntityType::Marker)]
}

fn view_state_strategy() -> impl Strategy<Value = ViewState> {
    (
        MIN_YEAR..=MAX_YEAR,
        entity_type_strategy(),
        "[^&=]{1,16}",
        any::<u32>(),
    )
        .prop_map(|(year, entity_type, value, limit)| {
            ViewState::new()
                .with_year(year)
                .with_entity_type(entity_type)
                .with_value(value)
                .with_limit(limit)
        })
}

fn url_state(fragment: &str) -> UrlState<MemoryLocation> {
    UrlState::with_location(MemoryLocation::new(fragment))
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn full_view_state_round_trips(written in view_state_strategy()) {
        let mut state = url_state("");
        state.update_url_state(&written);
        prop_assert_eq!(state.parse_url_state(), written);
    }

    #[test]
    fn clamp_is_idempotent_and_in_range(x in any::<f64>()) {
        let once = clamp_year(x);
        prop_assert!((MIN_YEAR..=MAX_YEAR).contains(&once));
        prop_assert!(is_valid_year(once as f64));
        if x.is_finite() {
            prop_assert_eq!(clamp_year(once as f64), once);
        }
    }

    #[test]
    fn clearing_drawer_params_keeps_year(written in view_state_strategy()) {
        let mut state = url_state("");
        state.update_url_state(&written);
        state.clear_url_params(&["type", "value"]);

        let parsed = state.parse_url_state();
        prop_assert_eq!(parsed.year, written.year);
        prop_assert_eq!(parsed.limit, written.limit);
        prop_assert!(parsed.entity_type.is_none());
        prop_assert!(parsed.value.is_none());
        prop_assert!(!state.has_drawer_params());
    }

    #[test]
    fn decode_encode_decode_is_stable(query in "[a-z0-9=&%+ -]{0,40}") {
        let mut state = url_state(&format!("#/?{}", query));
        let first = state.parse_url_state();
        state.update_url_state(&first);
        prop_assert_eq!(state.parse_url_state(), first);
    }

    #[test]
    fn unrelated_params_survive_updates(
        extra in "[a-z]{1,8}=[A-Za-z0-9%]{0,8}",
        written in view_state_strategy(),
    ) {
        prop_assume!(!["year", "type", "value", "limit"]
            .iter()
            .any(|key| extra.starts_with(&format!("{}=", key))));

        let mut state = url_state(&format!("#/?{}", extra));
        state.update_url_state(&written);

        let fragment = state.location().fragment();
        let expected_prefix = format!("#/?{}&", extra);
        prop_assert!(fragment.starts_with(&expected_prefix));
    }

    #[test]
    fn viewport_round_trips_within_precision(
        latitude in -90.0f64..=90.0,
        longitude in -180.0f64..=180.0,
        zoom in 0.0f64..=22.0,
    ) {
        let mut state = url_state("#/?year=1000");
        let written = ViewportState::new(latitude, longitude, zoom);
        state.update_viewport(&written);

        let parsed = state.parse_viewport().expect("viewport decodes");
        prop_assert!((parsed.latitude - latitude).abs() <= 5.1e-6);
        prop_assert!((parsed.longitude - longitude).abs() <= 5.1e-6);
        prop_assert!((parsed.zoom - zoom).abs() <= 5.1e-3);
        prop_assert_eq!(state.parse_url_state().year, Some(1000));
    }
}
