//! Physical constants for the impact model - all tunable values in one place
//!
//! These values are deliberately simple; the model is an explainable
//! heuristic, not a calibrated entry simulation.

// Earth
pub const EARTH_ESCAPE_VELOCITY_M_S: f64 = 11_200.0;
pub const SURFACE_GRAVITY_M_S2: f64 = 9.81;

// Atmosphere (exponential density model)
pub const SCALE_HEIGHT_M: f64 = 8_000.0;
pub const SEA_LEVEL_AIR_DENSITY_KG_M3: f64 = 1.225;

// Energy conversion
pub const JOULES_PER_MEGATON: f64 = 4.184e15;
pub const JOULES_PER_KILOTON: f64 = 4.184e12;

// Parameter defaults (velocity chain fallback, densities by hazard flag)
pub const FALLBACK_VELOCITY_M_S: f64 = 20_000.0;
pub const HAZARDOUS_DENSITY_KG_M3: f64 = 3_500.0;
pub const DEFAULT_DENSITY_KG_M3: f64 = 3_000.0;
pub const DEFAULT_ANGLE_DEG: f64 = 45.0;

// Angle handling: sin(angle) is clamped to this floor before any division
// so radii stay bounded as the entry angle approaches grazing.
pub const MIN_SIN_ANGLE: f64 = 0.1;

// Material strength tiers (breakup strength, Pa) keyed on bulk density
pub const IRON_DENSITY_KG_M3: f64 = 7_000.0;
pub const ROCKY_DENSITY_KG_M3: f64 = 2_500.0;
pub const IRON_STRENGTH_PA: f64 = 5.0e6;
pub const ROCKY_STRENGTH_PA: f64 = 1.0e6;
pub const FRIABLE_STRENGTH_PA: f64 = 0.2e6;

// Airburst gate: bodies at or above this density never burst (iron-dense)
pub const AIRBURST_MAX_DENSITY_KG_M3: f64 = 5_000.0;

// Crater scaling (pi-group style law)
pub const CRATER_SCALING_K: f64 = 20.0;
pub const TARGET_DENSITY_KG_M3: f64 = 2_500.0;
pub const COMPLEX_CRATER_DIAMETER_M: f64 = 3_000.0;
pub const COMPLEX_CRATER_CORRECTION: f64 = 1.3;

// Blast energy coupling into the atmosphere
pub const GROUND_COUPLING: f64 = 0.3;
pub const AIRBURST_COUPLING: f64 = 0.7;
pub const AIRBURST_ATTENUATION_SCALE_M: f64 = 10_000.0;

// Blast zone radii per cube root of coupled megatonnage (meters).
// Calibrated against roughly 20 / 5 / 1 psi overpressure thresholds.
pub const SEVERE_RADIUS_M_PER_CBRT_MT: f64 = 2_300.0;
pub const MODERATE_RADIUS_M_PER_CBRT_MT: f64 = 5_400.0;
pub const LIGHT_RADIUS_M_PER_CBRT_MT: f64 = 11_000.0;

// Crater-derived floors on the blast radii (monotonicity invariant)
pub const SEVERE_CRATER_FLOOR: f64 = 1.5;
pub const MODERATE_CRATER_FLOOR: f64 = 2.5;
pub const LIGHT_CRATER_FLOOR: f64 = 4.0;
