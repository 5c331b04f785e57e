//! The estimation pipeline: resolve parameters, run the physics model,
//! optionally estimate population exposure.
//!
//! Every stage is a pure transformation of its inputs; nothing is retained
//! between invocations.

pub mod exposure;
pub mod physics;
pub mod resolver;

use serde::{Deserialize, Serialize};

use crate::body::Body;
use crate::core::config::EngineConfig;

pub use exposure::{Confidence, DensityTemplate, ExposureEstimate, PopulationDensity};
pub use physics::{compute, ImpactResult, MaterialTier};
pub use resolver::{resolve, ImpactParameters, Overrides};

/// One complete impact assessment: the parameters that were resolved, the
/// physics result, and (when a population density was supplied) the
/// exposure estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactAssessment {
    pub parameters: ImpactParameters,
    pub result: ImpactResult,
    pub exposure: Option<ExposureEstimate>,
}

/// Run the full pipeline for one body.
///
/// Returns `None` when there is nothing to simulate (no body, or no usable
/// diameter data). Exposure is only estimated when the overrides carry a
/// population density.
pub fn assess(
    body: Option<&Body>,
    overrides: &Overrides,
    config: &EngineConfig,
) -> Option<ImpactAssessment> {
    let parameters = resolver::resolve(body, overrides)?;
    let result = physics::compute(&parameters, config);
    let exposure = overrides
        .population_density
        .as_ref()
        .map(|density| exposure::estimate(&result, density));
    Some(ImpactAssessment {
        parameters,
        result,
        exposure,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{Body, DiameterRange, EstimatedDiameter};

    fn body(diameter_min: f64, diameter_max: f64) -> Body {
        Body {
            id: "pipeline".into(),
            name: "Pipeline Test".into(),
            absolute_magnitude_h: None,
            estimated_diameter: Some(EstimatedDiameter {
                meters: Some(DiameterRange {
                    estimated_diameter_min: diameter_min,
                    estimated_diameter_max: diameter_max,
                }),
            }),
            is_potentially_hazardous_asteroid: false,
            close_approach_data: Vec::new(),
        }
    }

    #[test]
    fn test_assess_without_body_is_none() {
        assert!(assess(None, &Overrides::default(), &EngineConfig::default()).is_none());
    }

    #[test]
    fn test_assess_without_population_density_skips_exposure() {
        let b = body(20.0, 40.0);
        let assessment = assess(Some(&b), &Overrides::default(), &EngineConfig::default()).unwrap();
        assert!(assessment.exposure.is_none());
        assert_eq!(assessment.parameters.diameter_m, 30.0);
    }

    #[test]
    fn test_assess_with_template_density() {
        let b = body(20.0, 40.0);
        let overrides = Overrides {
            population_density: Some(PopulationDensity::Template(DensityTemplate::Urban)),
            ..Default::default()
        };
        let assessment = assess(Some(&b), &overrides, &EngineConfig::default()).unwrap();
        let exposure = assessment.exposure.unwrap();
        assert_eq!(exposure.confidence, Confidence::Medium);
        assert_eq!(exposure.density_per_km2, 2000.0);
    }

    #[test]
    fn test_assessment_serializes() {
        let b = body(20.0, 40.0);
        let assessment = assess(Some(&b), &Overrides::default(), &EngineConfig::default()).unwrap();
        let json = serde_json::to_string(&assessment).unwrap();
        let back: ImpactAssessment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, assessment);
    }
}
