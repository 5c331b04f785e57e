//! Exposure estimation: damage radii to order-of-magnitude person counts.
//!
//! Each zone count uses the area of the full circle at that zone's
//! cumulative radius, not the ring between radii. Outer zones therefore
//! double-count the inner population. This is a deliberate simplification
//! carried over from the model's history, not an error to fix.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::core::error::{GroundfallError, Result};
use crate::engine::physics::ImpactResult;

/// Named population density presets (people per km²).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DensityTemplate {
    Rural,
    Suburban,
    Urban,
    DenseMetro,
}

impl DensityTemplate {
    pub fn people_per_km2(self) -> f64 {
        match self {
            DensityTemplate::Rural => 25.0,
            DensityTemplate::Suburban => 500.0,
            DensityTemplate::Urban => 2_000.0,
            DensityTemplate::DenseMetro => 10_000.0,
        }
    }
}

impl std::str::FromStr for DensityTemplate {
    type Err = GroundfallError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "rural" => Ok(Self::Rural),
            "suburban" => Ok(Self::Suburban),
            "urban" => Ok(Self::Urban),
            "dense-metro" => Ok(Self::DenseMetro),
            other => Err(GroundfallError::UnknownTemplate(other.to_string())),
        }
    }
}

/// Population density assumption: a preset template or a custom value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PopulationDensity {
    Template(DensityTemplate),
    Custom(f64),
}

impl PopulationDensity {
    pub fn people_per_km2(&self) -> f64 {
        match self {
            PopulationDensity::Template(t) => t.people_per_km2(),
            PopulationDensity::Custom(v) => *v,
        }
    }

    pub fn confidence(&self) -> Confidence {
        match self {
            PopulationDensity::Template(_) => Confidence::Medium,
            PopulationDensity::Custom(_) => Confidence::Low,
        }
    }
}

/// Confidence label attached to an exposure estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Medium,
    Low,
}

/// Estimated people inside each damage zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExposureEstimate {
    pub crater_count: u64,
    pub severe_count: u64,
    pub moderate_count: u64,
    pub light_count: u64,
    /// The density assumption the counts were computed from (people/km²).
    pub density_per_km2: f64,
    pub confidence: Confidence,
}

/// Circle area in km² for a radius in meters.
fn area_km2(radius_m: f64) -> f64 {
    PI * radius_m * radius_m / 1e6
}

fn zone_count(density_per_km2: f64, radius_m: f64) -> u64 {
    (density_per_km2 * area_km2(radius_m)).round().max(0.0) as u64
}

/// Convert damage radii into per-zone person counts.
pub fn estimate(result: &ImpactResult, density: &PopulationDensity) -> ExposureEstimate {
    let per_km2 = density.people_per_km2();
    ExposureEstimate {
        crater_count: zone_count(per_km2, result.crater_radius_m),
        severe_count: zone_count(per_km2, result.severe_radius_m),
        moderate_count: zone_count(per_km2, result.moderate_radius_m),
        light_count: zone_count(per_km2, result.light_radius_m),
        density_per_km2: per_km2,
        confidence: density.confidence(),
    }
}
