//! Map camera position carried in the address bar.
//!
//! Uses the same query-string discipline as [`ViewState`](super::ViewState):
//! decoding never fails, writes merge into the existing parameters, and
//! unrelated parameters are left untouched.

use geo_types::Coord;
use serde::{Deserialize, Serialize};

use crate::config::UrlStateConfig;
use crate::url::QueryParams;

pub const LAT_PARAM: &str = "lat";
pub const LON_PARAM: &str = "lon";
pub const ZOOM_PARAM: &str = "zoom";

/// All parameter names owned by the viewport.
pub const VIEWPORT_PARAMS: [&str; 3] = [LAT_PARAM, LON_PARAM, ZOOM_PARAM];

/// Camera center and zoom level of the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
}

impl ViewportState {
    pub fn new(latitude: f64, longitude: f64, zoom: f64) -> Self {
        Self {
            latitude,
            longitude,
            zoom,
        }
    }

    /// Builds a viewport from a map coordinate (x = lon, y = lat).
    pub fn from_center(center: Coord<f64>, zoom: f64) -> Self {
        Self::new(center.y, center.x, zoom)
    }

    /// Map center as a coordinate (x = lon, y = lat).
    pub fn center(&self) -> Coord<f64> {
        Coord {
            x: self.longitude,
            y: self.latitude,
        }
    }

    /// True when every component is finite, latitude is within `[-90, 90]`
    /// and zoom is non-negative. Only valid viewports are read or written.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.zoom.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && self.zoom >= 0.0
    }

    /// The viewport exactly as it reads back after [`write_query`](Self::write_query).
    pub fn quantized(&self, config: &UrlStateConfig) -> Self {
        let coord = config.coordinate_precision;
        Self::new(
            round_to(self.latitude, coord),
            round_to(self.longitude, coord),
            round_to(self.zoom, config.zoom_precision),
        )
    }

    /// Decodes a viewport. All three parameters must be present and valid.
    pub fn from_query(params: &QueryParams) -> Option<Self> {
        let latitude = parse_component(params, LAT_PARAM)?;
        let longitude = parse_component(params, LON_PARAM)?;
        let zoom = parse_component(params, ZOOM_PARAM)?;

        Some(Self::new(latitude, longitude, zoom)).filter(Self::is_valid)
    }

    /// Writes the three parameters at the configured precision.
    pub fn write_query(&self, params: &mut QueryParams, config: &UrlStateConfig) {
        let coord = config.coordinate_precision;
        params.set(LAT_PARAM, &format!("{:.*}", coord, self.latitude));
        params.set(LON_PARAM, &format!("{:.*}", coord, self.longitude));
        params.set(
            ZOOM_PARAM,
            &format!("{:.*}", config.zoom_precision, self.zoom),
        );
    }
}

// Round-trips through the same text `write_query` produces.
fn round_to(value: f64, digits: usize) -> f64 {
    format!("{:.*}", digits, value).parse().unwrap_or(value)
}

fn parse_component(params: &QueryParams, key: &str) -> Option<f64> {
    params
        .get(key)?
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// True iff every component of `a` and `b` differs by at most `epsilon`.
///
/// A negative or NaN epsilon never matches.
pub fn viewports_approximately_equal(a: &ViewportState, b: &ViewportState, epsilon: f64) -> bool {
    if epsilon.is_nan() || epsilon < 0.0 {
        return false;
    }

    (a.latitude - b.latitude).abs() <= epsilon
        && (a.longitude - b.longitude).abs() <= epsilon
        && (a.zoom - b.zoom).abs() <= epsilon
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(query: &str) -> Option<ViewportState> {
        ViewportState::from_query(&QueryParams::parse(query))
    }

    #[test]
    fn test_decode_viewport() {
        let viewport = decode("lat=41.9&lon=12.5&zoom=6").unwrap();
        assert!((viewport.latitude - 41.9).abs() < 1e-9);
        assert!((viewport.longitude - 12.5).abs() < 1e-9);
        assert!((viewport.zoom - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_decode_requires_all_components() {
        assert!(decode("lat=41.9&lon=12.5").is_none());
        assert!(decode("lat=41.9&zoom=3").is_none());
        assert!(decode("").is_none());
    }

    #[test]
    fn test_decode_rejects_invalid_components() {
        assert!(decode("lat=abc&lon=12.5&zoom=6").is_none());
        assert!(decode("lat=NaN&lon=12.5&zoom=6").is_none());
        assert!(decode("lat=inf&lon=12.5&zoom=6").is_none());
        assert!(decode("lat=91&lon=12.5&zoom=6").is_none());
        assert!(decode("lat=41&lon=12.5&zoom=-1").is_none());
    }

    #[test]
    fn test_longitude_may_wrap() {
        let viewport = decode("lat=0&lon=200.5&zoom=2").unwrap();
        assert!((viewport.longitude - 200.5).abs() < 1e-9);
    }

    #[test]
    fn test_write_query_precision() {
        let mut params = QueryParams::parse("year=1500");
        ViewportState::new(41.902_782_1, 12.496_366_4, 6.123)
            .write_query(&mut params, &UrlStateConfig::default());
        assert_eq!(
            params.to_query_string(),
            "year=1500&lat=41.90278&lon=12.49637&zoom=6.12"
        );
    }

    #[test]
    fn test_negative_values_written_plainly() {
        let mut params = QueryParams::new();
        ViewportState::new(-33.5, -70.25, 0.0).write_query(&mut params, &UrlStateConfig::default());
        assert_eq!(
            params.to_query_string(),
            "lat=-33.50000&lon=-70.25000&zoom=0.00"
        );
    }

    #[test]
    fn test_is_valid() {
        assert!(ViewportState::new(90.0, 540.0, 0.0).is_valid());
        assert!(!ViewportState::new(95.0, 12.5, 3.0).is_valid());
        assert!(!ViewportState::new(41.9, 12.5, -0.5).is_valid());
        assert!(!ViewportState::new(41.9, f64::INFINITY, 3.0).is_valid());
    }

    #[test]
    fn test_quantized_matches_decoded() {
        let config = UrlStateConfig::default();
        let viewport = ViewportState::new(41.902_782_1, 12.496_366_4, 6.123);

        let mut params = QueryParams::new();
        viewport.write_query(&mut params, &config);
        let decoded = ViewportState::from_query(&params).unwrap();

        assert_eq!(viewport.quantized(&config), decoded);
        assert_eq!(decoded.zoom, 6.12);
    }

    #[test]
    fn test_center_conversion() {
        let viewport = ViewportState::new(37.98, 23.72, 8.0);
        let center = viewport.center();
        assert_eq!(center.x, 23.72);
        assert_eq!(center.y, 37.98);
        assert_eq!(ViewportState::from_center(center, 8.0), viewport);
    }

    #[test]
    fn test_approximately_equal() {
        let a = ViewportState::new(10.0, 20.0, 3.0);
        let b = ViewportState::new(10.00005, 19.99995, 3.00001);
        assert!(viewports_approximately_equal(&a, &b, 1e-4));
        assert!(!viewports_approximately_equal(&a, &b, 1e-6));
        assert!(viewports_approximately_equal(&a, &a, 0.0));
    }

    #[test]
    fn test_approximately_equal_rejects_bad_epsilon() {
        let a = ViewportState::new(10.0, 20.0, 3.0);
        assert!(!viewports_approximately_equal(&a, &a, -1.0));
        assert!(!viewports_approximately_equal(&a, &a, f64::NAN));
    }

    #[test]
    fn test_approximately_equal_does_not_mutate() {
        let a = ViewportState::new(10.0, 20.0, 3.0);
        let b = ViewportState::new(10.5, 20.0, 3.0);
        let (a_before, b_before) = (a, b);
        viewports_approximately_equal(&a, &b, 1.0);
        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }
}
