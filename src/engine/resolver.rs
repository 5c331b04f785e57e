//! Parameter resolution: merge a body record with user overrides into a
//! complete, defaulted parameter set.
//!
//! Absence of a body (or of usable diameter data) means "nothing to
//! simulate" and resolves to `None`, never to an error. Malformed feed
//! values fall through the default chain silently.

use serde::{Deserialize, Serialize};

use crate::body::Body;
use crate::core::constants::{
    DEFAULT_ANGLE_DEG, DEFAULT_DENSITY_KG_M3, FALLBACK_VELOCITY_M_S, HAZARDOUS_DENSITY_KG_M3,
};
use crate::core::error::{GroundfallError, Result};
use crate::engine::exposure::PopulationDensity;

/// Largest custom population density accepted at the override boundary
/// (people/km²; the densest real districts are around 50k).
const MAX_CUSTOM_DENSITY_PER_KM2: f64 = 100_000.0;

/// User-chosen overrides for one simulation run. All fields optional;
/// omitted fields take the documented defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Overrides {
    /// Entry velocity in m/s.
    pub velocity_m_s: Option<f64>,
    /// Entry angle from horizontal, degrees.
    pub angle_deg: Option<f64>,
    /// Bulk density in kg/m³.
    pub density_kg_m3: Option<f64>,
    /// Population density assumption for exposure estimation.
    pub population_density: Option<PopulationDensity>,
}

impl Overrides {
    /// Validate overrides at the boundary. The engine itself clamps
    /// degenerate values; this rejects input that is nonsense rather than
    /// merely degenerate (non-finite numbers, out-of-range custom
    /// population densities).
    pub fn validate(&self) -> Result<()> {
        if let Some(v) = self.velocity_m_s {
            if !v.is_finite() || v <= 0.0 {
                return Err(GroundfallError::InvalidOverride(format!(
                    "velocity must be a positive number of m/s, got {v}"
                )));
            }
        }
        if let Some(a) = self.angle_deg {
            if !a.is_finite() {
                return Err(GroundfallError::InvalidOverride(
                    "angle must be a finite number of degrees".into(),
                ));
            }
        }
        if let Some(d) = self.density_kg_m3 {
            if !d.is_finite() {
                return Err(GroundfallError::InvalidOverride(
                    "density must be a finite number of kg/m³".into(),
                ));
            }
        }
        if let Some(PopulationDensity::Custom(d)) = self.population_density {
            if !d.is_finite() || !(0.0..=MAX_CUSTOM_DENSITY_PER_KM2).contains(&d) {
                return Err(GroundfallError::InvalidOverride(format!(
                    "custom population density must be in 0..={MAX_CUSTOM_DENSITY_PER_KM2} people/km², got {d}"
                )));
            }
        }
        Ok(())
    }
}

/// Complete parameter set for one engine invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactParameters {
    /// Mean of the body's estimated diameter bounds, meters. Always > 0.
    pub diameter_m: f64,
    /// Bulk density, kg/m³. Floored at 1.0.
    pub density_kg_m3: f64,
    /// Entry velocity before any gravitational-focusing correction, m/s.
    pub velocity_in_m_s: f64,
    /// Entry angle from horizontal, degrees, clamped into [0, 90]. The
    /// physics sine floor keeps grazing entries bounded.
    pub angle_deg: f64,
}

/// Merge a body with overrides into a defaulted parameter set.
///
/// Velocity resolution order: override, close-approach km/s, close-approach
/// km/h converted, then the 20 km/s fallback. Density defaults on the
/// hazard flag; angle defaults to 45°.
pub fn resolve(body: Option<&Body>, overrides: &Overrides) -> Option<ImpactParameters> {
    let body = body?;
    let diameter_m = body.mean_diameter_m()?;

    let velocity_in_m_s = overrides
        .velocity_m_s
        .or_else(|| velocity_from_approach(body))
        .unwrap_or_else(|| {
            tracing::debug!(body = %body.id, "no velocity data, using fallback");
            FALLBACK_VELOCITY_M_S
        });

    let default_density = if body.is_potentially_hazardous_asteroid {
        HAZARDOUS_DENSITY_KG_M3
    } else {
        DEFAULT_DENSITY_KG_M3
    };
    let density_kg_m3 = overrides.density_kg_m3.unwrap_or(default_density).max(1.0);

    let angle_deg = overrides.angle_deg.unwrap_or(DEFAULT_ANGLE_DEG);
    let angle_clamped = angle_deg.clamp(0.0, 90.0);
    if angle_clamped != angle_deg {
        tracing::warn!(angle_deg, "entry angle clamped into [0, 90]");
    }

    Some(ImpactParameters {
        diameter_m,
        density_kg_m3,
        velocity_in_m_s,
        angle_deg: angle_clamped,
    })
}

/// Velocity from the body's first close-approach record, preferring the
/// km/s field over km/h. Non-numeric strings count as absent.
fn velocity_from_approach(body: &Body) -> Option<f64> {
    let velocity = body.first_approach()?.relative_velocity.as_ref()?;
    velocity
        .km_per_s()
        .map(|v| v * 1000.0)
        .or_else(|| velocity.km_per_h().map(|v| v / 3.6))
}
