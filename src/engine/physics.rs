//! The impact physics model: mass, energy, airburst classification and
//! nested damage radii.
//!
//! This is an explainable heuristic, not an entry simulation. Every step
//! is deterministic and total: for any valid parameter set the model
//! returns finite, non-negative radii in non-decreasing order. Steps that
//! went through mutually inconsistent revisions (angle handling, crater
//! law) are selected by strategy enums in [`EngineConfig`] and are never
//! mixed within one run.

use serde::{Deserialize, Serialize};

use crate::core::config::{AnglePolicy, CraterLaw, EngineConfig};
use crate::core::constants::*;
use crate::engine::resolver::ImpactParameters;

/// Material strength tier, selected by bulk density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialTier {
    Iron,
    Rocky,
    Friable,
}

impl MaterialTier {
    pub fn from_density(density_kg_m3: f64) -> Self {
        if density_kg_m3 >= IRON_DENSITY_KG_M3 {
            MaterialTier::Iron
        } else if density_kg_m3 >= ROCKY_DENSITY_KG_M3 {
            MaterialTier::Rocky
        } else {
            MaterialTier::Friable
        }
    }

    /// Breakup strength in Pa.
    pub fn strength_pa(self) -> f64 {
        match self {
            MaterialTier::Iron => IRON_STRENGTH_PA,
            MaterialTier::Rocky => ROCKY_STRENGTH_PA,
            MaterialTier::Friable => FRIABLE_STRENGTH_PA,
        }
    }
}

/// Engine output, recomputed on every call. Never cached or mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactResult {
    pub mass_kg: f64,
    /// Input velocity, optionally composed with escape velocity.
    pub velocity_effective_m_s: f64,
    pub energy_j: f64,
    pub energy_mt: f64,
    pub energy_kt: f64,
    pub airburst: bool,
    /// Estimated breakup altitude, meters. 0 when not an airburst.
    pub fragmentation_altitude_m: f64,
    pub material: MaterialTier,
    pub crater_radius_m: f64,
    pub severe_radius_m: f64,
    pub moderate_radius_m: f64,
    pub light_radius_m: f64,
}

/// Replace non-finite or negative intermediates with 0.
fn non_negative(x: f64) -> f64 {
    if x.is_finite() && x > 0.0 {
        x
    } else {
        0.0
    }
}

/// Compute the full impact result for a resolved parameter set.
///
/// Total for valid parameters: never panics, never returns NaN or a
/// negative radius, and upholds
/// `crater <= severe <= moderate <= light`.
pub fn compute(params: &ImpactParameters, config: &EngineConfig) -> ImpactResult {
    let radius_m = params.diameter_m / 2.0;
    let mass_kg = params.density_kg_m3
        * (4.0 / 3.0)
        * std::f64::consts::PI
        * radius_m.powi(3);

    // Gravitational focusing: infall acceleration approximated by
    // composing with escape velocity.
    let velocity_effective_m_s = if config.gravity_focusing {
        (params.velocity_in_m_s.powi(2) + EARTH_ESCAPE_VELOCITY_M_S.powi(2)).sqrt()
    } else {
        params.velocity_in_m_s
    };

    let sin_angle = params
        .angle_deg
        .to_radians()
        .sin()
        .max(MIN_SIN_ANGLE);

    // Energy bookkeeping per the selected angle policy. `energy_j` is the
    // reported kinetic energy; `deposited_mt` is what the blast scaling
    // sees. The two policies are not numerically equivalent.
    let (energy_j, deposited_mt) = match config.angle_policy {
        AnglePolicy::VerticalComponent => {
            let vertical = velocity_effective_m_s * sin_angle;
            let e = 0.5 * mass_kg * vertical * vertical;
            (e, e / JOULES_PER_MEGATON)
        }
        AnglePolicy::DepositionEfficiency => {
            let e = 0.5 * mass_kg * velocity_effective_m_s * velocity_effective_m_s;
            (e, e / JOULES_PER_MEGATON * sin_angle)
        }
    };
    let energy_mt = energy_j / JOULES_PER_MEGATON;
    let energy_kt = energy_j / JOULES_PER_KILOTON;

    let material = MaterialTier::from_density(params.density_kg_m3);
    let fragmentation_altitude_m =
        breakup_altitude_m(velocity_effective_m_s, material.strength_pa());

    // Airburst gate: three joint conditions. Relaxing any one changes
    // which bodies burst, so all three are checked explicitly.
    let airburst = fragmentation_altitude_m > 0.0
        && params.diameter_m < config.airburst_diameter_threshold_m
        && params.density_kg_m3 < AIRBURST_MAX_DENSITY_KG_M3;

    if airburst {
        tracing::debug!(
            altitude_m = fragmentation_altitude_m,
            diameter_m = params.diameter_m,
            "classified as airburst"
        );
    }

    let crater_radius_m = if airburst {
        0.0
    } else {
        match config.crater_law {
            CraterLaw::PiScaling => pi_scaling_crater_radius_m(
                params,
                velocity_effective_m_s * sin_angle,
            ),
            CraterLaw::CubeRoot => non_negative(
                (1000.0 * energy_mt.max(0.0).cbrt()).max(10.0 * params.diameter_m),
            ),
        }
    };

    // Blast radii: cube-root scaling on the coupled fraction of deposited
    // energy. The airburst branch couples more energy into the atmosphere
    // but attenuates with burst altitude.
    let coupled_mt = if airburst {
        deposited_mt
            * AIRBURST_COUPLING
            * (-fragmentation_altitude_m.max(0.0) / AIRBURST_ATTENUATION_SCALE_M).exp()
    } else {
        deposited_mt * GROUND_COUPLING
    };
    let cbrt_mt = non_negative(coupled_mt).cbrt();

    let severe = (SEVERE_RADIUS_M_PER_CBRT_MT * cbrt_mt)
        .max(SEVERE_CRATER_FLOOR * crater_radius_m);
    let moderate = (MODERATE_RADIUS_M_PER_CBRT_MT * cbrt_mt)
        .max(MODERATE_CRATER_FLOOR * crater_radius_m)
        .max(severe);
    let light = (LIGHT_RADIUS_M_PER_CBRT_MT * cbrt_mt)
        .max(LIGHT_CRATER_FLOOR * crater_radius_m)
        .max(moderate);

    ImpactResult {
        mass_kg: non_negative(mass_kg),
        velocity_effective_m_s: non_negative(velocity_effective_m_s),
        energy_j: non_negative(energy_j),
        energy_mt: non_negative(energy_mt),
        energy_kt: non_negative(energy_kt),
        airburst,
        fragmentation_altitude_m: if airburst { fragmentation_altitude_m } else { 0.0 },
        material,
        crater_radius_m: non_negative(crater_radius_m),
        severe_radius_m: non_negative(severe),
        moderate_radius_m: non_negative(moderate),
        light_radius_m: non_negative(light),
    }
}

/// Breakup altitude from an exponential atmosphere:
/// `h = H * ln(rho0 * v^2 / (2S))`.
///
/// Negative values mean the body reaches the ground intact; callers treat
/// them as "no breakup".
fn breakup_altitude_m(velocity_m_s: f64, strength_pa: f64) -> f64 {
    if strength_pa <= 0.0 || velocity_m_s <= 0.0 {
        return 0.0;
    }
    let ram_pressure_ratio =
        SEA_LEVEL_AIR_DENSITY_KG_M3 * velocity_m_s * velocity_m_s / (2.0 * strength_pa);
    if ram_pressure_ratio <= 0.0 {
        return 0.0;
    }
    SCALE_HEIGHT_M * ram_pressure_ratio.ln()
}

/// Pi-group style crater scaling:
/// `D = K * g^-0.17 * (rho_body/rho_target)^0.26 * d^0.78 * (v sinθ)^0.44`
/// with a +30% correction in the complex-crater regime (D > 3 km).
fn pi_scaling_crater_radius_m(params: &ImpactParameters, vertical_velocity_m_s: f64) -> f64 {
    if vertical_velocity_m_s <= 0.0 || params.diameter_m <= 0.0 {
        return 0.0;
    }
    let mut diameter = CRATER_SCALING_K
        * SURFACE_GRAVITY_M_S2.powf(-0.17)
        * (params.density_kg_m3 / TARGET_DENSITY_KG_M3).powf(0.26)
        * params.diameter_m.powf(0.78)
        * vertical_velocity_m_s.powf(0.44);
    if diameter > COMPLEX_CRATER_DIAMETER_M {
        diameter *= COMPLEX_CRATER_CORRECTION;
    }
    non_negative(diameter / 2.0)
}
