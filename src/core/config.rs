//! Engine configuration with documented knobs
//!
//! Collects every behavior toggle of the impact model in one place. Several
//! knobs exist because the model went through mutually inconsistent
//! revisions; each historical behavior is preserved as a named strategy
//! selected here instead of being silently conflated.
//!
//! The config is always passed explicitly into the engine. There is no
//! global accessor: the engine must stay a pure function of its inputs.

use serde::{Deserialize, Serialize};

use crate::core::error::{GroundfallError, Result};

/// How the entry angle enters the energy bookkeeping.
///
/// The two variants are not numerically equivalent and must never be mixed
/// within one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnglePolicy {
    /// Only the vertical velocity component deposits energy:
    /// `E = ½·m·(v·sinθ)²`.
    VerticalComponent,
    /// Full kinetic energy `½·m·v²`; the (clamped) sine is applied as a
    /// post-hoc efficiency multiplier on deposited megatonnage.
    DepositionEfficiency,
}

/// Which crater scaling law the ground-impact branch uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CraterLaw {
    /// Pi-group style law with a complex-crater correction above 3 km.
    PiScaling,
    /// Earlier revision: `radius = max(1000·Mt^(1/3), 10·diameter)`.
    CubeRoot,
}

/// Configuration for one engine invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Compose the input velocity with Earth's escape velocity,
    /// `v_eff = sqrt(v² + v_esc²)`, approximating gravitational
    /// acceleration during infall.
    ///
    /// Enabled by default; later model revisions disable it and use the
    /// raw input velocity directly.
    pub gravity_focusing: bool,

    /// Bodies with a mean diameter below this (meters) are airburst
    /// candidates. The heuristic band is 50-100 m; the default sits in
    /// the middle.
    pub airburst_diameter_threshold_m: f64,

    /// Angle treatment strategy (see [`AnglePolicy`]).
    pub angle_policy: AnglePolicy,

    /// Crater scaling strategy (see [`CraterLaw`]).
    pub crater_law: CraterLaw,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            gravity_focusing: true,
            airburst_diameter_threshold_m: 75.0,
            angle_policy: AnglePolicy::DepositionEfficiency,
            crater_law: CraterLaw::PiScaling,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text. Missing fields take their defaults.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if !self.airburst_diameter_threshold_m.is_finite()
            || self.airburst_diameter_threshold_m <= 0.0
        {
            return Err(GroundfallError::InvalidConfig(format!(
                "airburst_diameter_threshold_m must be a positive number, got {}",
                self.airburst_diameter_threshold_m
            )));
        }
        Ok(())
    }
}

impl std::str::FromStr for AnglePolicy {
    type Err = GroundfallError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "vertical-component" => Ok(Self::VerticalComponent),
            "deposition-efficiency" => Ok(Self::DepositionEfficiency),
            other => Err(GroundfallError::InvalidConfig(format!(
                "unknown angle policy: {other} (expected vertical-component or deposition-efficiency)"
            ))),
        }
    }
}

impl std::str::FromStr for CraterLaw {
    type Err = GroundfallError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pi-scaling" => Ok(Self::PiScaling),
            "cube-root" => Ok(Self::CubeRoot),
            other => Err(GroundfallError::InvalidConfig(format!(
                "unknown crater law: {other} (expected pi-scaling or cube-root)"
            ))),
        }
    }
}
