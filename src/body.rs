//! Near-Earth object records, shaped like the NeoWs feed JSON.
//!
//! The engine never talks to the network; it accepts bodies that have
//! already been materialized (a saved feed page, or a bare array of
//! records). Velocity fields arrive as strings in the feed and are parsed
//! leniently: a non-numeric value counts as absent, never as an error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::error::Result;

/// One page of a NeoWs feed response: bodies grouped by approach date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedPage {
    #[serde(default)]
    pub element_count: u64,
    /// Keys are ISO dates, so BTreeMap ordering is chronological.
    #[serde(default)]
    pub near_earth_objects: BTreeMap<String, Vec<Body>>,
}

impl FeedPage {
    /// Flatten the page into a single date-ordered list.
    pub fn bodies(&self) -> Vec<&Body> {
        self.near_earth_objects.values().flatten().collect()
    }

    /// Flatten the page, consuming it.
    pub fn into_bodies(self) -> Vec<Body> {
        self.near_earth_objects.into_values().flatten().collect()
    }
}

/// An asteroid/meteor record with physical and approach attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub id: String,
    pub name: String,
    /// Display-only; the engine does not consume it.
    #[serde(default)]
    pub absolute_magnitude_h: Option<f64>,
    #[serde(default)]
    pub estimated_diameter: Option<EstimatedDiameter>,
    #[serde(default)]
    pub is_potentially_hazardous_asteroid: bool,
    #[serde(default)]
    pub close_approach_data: Vec<CloseApproach>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatedDiameter {
    #[serde(default)]
    pub meters: Option<DiameterRange>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiameterRange {
    pub estimated_diameter_min: f64,
    pub estimated_diameter_max: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloseApproach {
    #[serde(default)]
    pub close_approach_date: Option<String>,
    #[serde(default)]
    pub relative_velocity: Option<RelativeVelocity>,
}

/// Feed velocities are decimal strings, e.g. `"18.127"` km/s.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelativeVelocity {
    #[serde(default)]
    pub kilometers_per_second: Option<String>,
    #[serde(default)]
    pub kilometers_per_hour: Option<String>,
}

impl RelativeVelocity {
    /// Velocity in km/s, if the field is present and numeric.
    pub fn km_per_s(&self) -> Option<f64> {
        parse_lenient(self.kilometers_per_second.as_deref())
    }

    /// Velocity in km/h, if the field is present and numeric.
    pub fn km_per_h(&self) -> Option<f64> {
        parse_lenient(self.kilometers_per_hour.as_deref())
    }
}

/// Parse a feed numeric string; anything non-numeric counts as absent.
fn parse_lenient(field: Option<&str>) -> Option<f64> {
    field
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

impl Body {
    /// Arithmetic mean of the estimated diameter bounds, in meters.
    ///
    /// Returns `None` when the feed omitted diameter data or the mean is
    /// not a positive finite number. Callers treat `None` as "nothing to
    /// simulate", not as a fault.
    pub fn mean_diameter_m(&self) -> Option<f64> {
        let range = self.estimated_diameter.as_ref()?.meters.as_ref()?;
        let mean = (range.estimated_diameter_min + range.estimated_diameter_max) / 2.0;
        (mean.is_finite() && mean > 0.0).then_some(mean)
    }

    /// First close-approach record, the one parameter resolution reads.
    pub fn first_approach(&self) -> Option<&CloseApproach> {
        self.close_approach_data.first()
    }
}

/// Parse bodies from JSON text: either a full feed page or a bare array.
pub fn bodies_from_json(text: &str) -> Result<Vec<Body>> {
    if text.trim_start().starts_with('[') {
        Ok(serde_json::from_str::<Vec<Body>>(text)?)
    } else {
        let page: FeedPage = serde_json::from_str(text)?;
        Ok(page.into_bodies())
    }
}
