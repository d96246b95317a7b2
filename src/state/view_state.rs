//! The partial view-state record carried in the address bar.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::url::QueryParams;

/// Query parameter names owned by [`ViewState`].
pub const YEAR_PARAM: &str = "year";
pub const TYPE_PARAM: &str = "type";
pub const VALUE_PARAM: &str = "value";
pub const LIMIT_PARAM: &str = "limit";

/// Category of the entity currently inspected in the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Area,
    Marker,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Area => "area",
            EntityType::Marker => "marker",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not exactly `area` or `marker`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEntityType(pub String);

impl fmt::Display for UnknownEntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown entity type: {}", self.0)
    }
}

impl std::error::Error for UnknownEntityType {}

impl FromStr for EntityType {
    type Err = UnknownEntityType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "area" => Ok(EntityType::Area),
            "marker" => Ok(EntityType::Marker),
            other => Err(UnknownEntityType(other.to_string())),
        }
    }
}

/// What the UI currently shows. Every field is independently optional; an
/// absent field is omitted from the address bar entirely.
///
/// The same type doubles as the partial update passed to
/// [`UrlState::update_url_state`](crate::UrlState::update_url_state): only
/// `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Selected year. Not clamped on decode; see [`clamp_year`](crate::clamp_year).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    /// Category of the inspected entity.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<EntityType>,

    /// Identifier or name of the inspected entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Maximum result count for queries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_entity_type(mut self, entity_type: EntityType) -> Self {
        self.entity_type = Some(entity_type);
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.year.is_none()
            && self.entity_type.is_none()
            && self.value.is_none()
            && self.limit.is_none()
    }

    /// True iff both the entity type and a non-empty value are present.
    pub fn has_drawer_params(&self) -> bool {
        self.entity_type.is_some() && self.value.as_deref().is_some_and(|v| !v.is_empty())
    }

    /// Overwrites fields with those set in `other`; unset fields are kept.
    pub fn merge(&mut self, other: &ViewState) {
        if let Some(year) = other.year {
            self.year = Some(year);
        }
        if let Some(entity_type) = other.entity_type {
            self.entity_type = Some(entity_type);
        }
        if let Some(value) = &other.value {
            self.value = Some(value.clone());
        }
        if let Some(limit) = other.limit {
            self.limit = Some(limit);
        }
    }

    /// Decodes the fields from query parameters. Invalid fields are absent.
    pub fn from_query(params: &QueryParams) -> Self {
        Self {
            year: params.get(YEAR_PARAM).as_deref().and_then(parse_year),
            entity_type: params
                .get(TYPE_PARAM)
                .and_then(|raw| raw.parse::<EntityType>().ok()),
            value: params.get(VALUE_PARAM).filter(|value| !value.is_empty()),
            limit: params.get(LIMIT_PARAM).as_deref().and_then(parse_limit),
        }
    }

    /// Writes the set fields into `params`, leaving every other pair alone.
    ///
    /// An empty `value` is not written since it could not be read back.
    pub fn write_query(&self, params: &mut QueryParams) {
        if let Some(year) = self.year {
            params.set(YEAR_PARAM, &year.to_string());
        }
        if let Some(entity_type) = self.entity_type {
            params.set(TYPE_PARAM, entity_type.as_str());
        }
        if let Some(value) = self.value.as_deref().filter(|v| !v.is_empty()) {
            params.set(VALUE_PARAM, value);
        }
        if let Some(limit) = self.limit {
            params.set(LIMIT_PARAM, &limit.to_string());
        }
    }
}

// Integer `parse` accepts exactly `[+-]?[0-9]+`, so surrounding text,
// whitespace and fractions all drop the field.
fn parse_year(raw: &str) -> Option<i32> {
    match raw.parse() {
        Ok(year) => Some(year),
        Err(_) => {
            log::trace!("Ignoring invalid year parameter: {:?}", raw);
            None
        }
    }
}

fn parse_limit(raw: &str) -> Option<u32> {
    let limit: i64 = raw.parse().ok()?;
    u32::try_from(limit).ok()
}
