//! Groundfall - Entry Point
//!
//! Command-line shell around the estimation engine: reads a file of
//! already-materialized NeoWs body records (a saved feed page or a bare
//! array), applies user overrides, and prints one assessment per body.

use clap::Parser;
use serde::Serialize;

use groundfall::body::{bodies_from_json, Body};
use groundfall::core::config::EngineConfig;
use groundfall::core::error::{GroundfallError, Result};
use groundfall::engine::{assess, DensityTemplate, ImpactAssessment, Overrides, PopulationDensity};

/// Estimate impact consequences for near-Earth object records
#[derive(Parser, Debug)]
#[command(name = "groundfall")]
#[command(about = "Estimate impact consequences for near-Earth object records")]
struct Args {
    /// JSON file of bodies: a NeoWs feed page or a bare array of records
    #[arg(long, short = 'i')]
    input: String,

    /// Only assess bodies flagged as potentially hazardous
    #[arg(long)]
    hazardous_only: bool,

    /// Override entry velocity (m/s)
    #[arg(long)]
    velocity: Option<f64>,

    /// Override entry angle from horizontal (degrees)
    #[arg(long)]
    angle: Option<f64>,

    /// Override bulk density (kg/m³)
    #[arg(long)]
    density: Option<f64>,

    /// Population density: a template name (rural, suburban, urban,
    /// dense-metro) or a custom people/km² value
    #[arg(long)]
    population_density: Option<String>,

    /// Use the raw input velocity instead of composing with escape velocity
    #[arg(long)]
    no_gravity_focusing: bool,

    /// Airburst diameter threshold (meters)
    #[arg(long)]
    airburst_threshold: Option<f64>,

    /// Angle policy: vertical-component or deposition-efficiency
    #[arg(long)]
    angle_policy: Option<String>,

    /// Crater law: pi-scaling or cube-root
    #[arg(long)]
    crater_law: Option<String>,

    /// Optional TOML engine config; flags above take precedence over it
    #[arg(long)]
    config: Option<String>,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,
}

/// JSON output structure, one per input body
#[derive(Serialize)]
struct BodyReport {
    id: String,
    name: String,
    hazardous: bool,
    /// `None` means there was nothing to simulate for this body.
    assessment: Option<ImpactAssessment>,
}

fn parse_population_density(text: &str) -> Result<PopulationDensity> {
    if let Ok(template) = text.parse::<DensityTemplate>() {
        return Ok(PopulationDensity::Template(template));
    }
    match text.parse::<f64>() {
        Ok(value) => Ok(PopulationDensity::Custom(value)),
        Err(_) => Err(GroundfallError::UnknownTemplate(text.to_string())),
    }
}

fn build_config(args: &Args) -> Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::from_toml(&std::fs::read_to_string(path)?)?,
        None => EngineConfig::default(),
    };
    if args.no_gravity_focusing {
        config.gravity_focusing = false;
    }
    if let Some(threshold) = args.airburst_threshold {
        config.airburst_diameter_threshold_m = threshold;
    }
    if let Some(policy) = &args.angle_policy {
        config.angle_policy = policy.parse()?;
    }
    if let Some(law) = &args.crater_law {
        config.crater_law = law.parse()?;
    }
    config.validate()?;
    Ok(config)
}

fn print_text_report(body: &Body, assessment: Option<&ImpactAssessment>) {
    match assessment {
        None => {
            println!("{} ({}): nothing to simulate (no diameter data)", body.name, body.id);
        }
        Some(a) => {
            let r = &a.result;
            println!("{} ({})", body.name, body.id);
            println!(
                "  diameter {:.1} m, density {:.0} kg/m³, velocity {:.0} m/s, angle {:.0}°",
                a.parameters.diameter_m,
                a.parameters.density_kg_m3,
                a.parameters.velocity_in_m_s,
                a.parameters.angle_deg,
            );
            println!(
                "  mass {:.3e} kg, energy {:.2} Mt ({:.3e} J)",
                r.mass_kg, r.energy_mt, r.energy_j
            );
            if r.airburst {
                println!(
                    "  airburst at {:.1} km altitude ({:?} body)",
                    r.fragmentation_altitude_m / 1000.0,
                    r.material
                );
            } else {
                println!(
                    "  ground impact, crater radius {:.2} km ({:?} body)",
                    r.crater_radius_m / 1000.0,
                    r.material
                );
            }
            println!(
                "  damage radii: severe {:.2} km, moderate {:.2} km, light {:.2} km",
                r.severe_radius_m / 1000.0,
                r.moderate_radius_m / 1000.0,
                r.light_radius_m / 1000.0,
            );
            if let Some(exposure) = &a.exposure {
                println!(
                    "  exposure at {:.0} people/km² ({:?} confidence): crater {}, severe {}, moderate {}, light {}",
                    exposure.density_per_km2,
                    exposure.confidence,
                    exposure.crater_count,
                    exposure.severe_count,
                    exposure.moderate_count,
                    exposure.light_count,
                );
            }
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("groundfall=info")
        .init();

    let args = Args::parse();

    let overrides = Overrides {
        velocity_m_s: args.velocity,
        angle_deg: args.angle,
        density_kg_m3: args.density,
        population_density: args
            .population_density
            .as_deref()
            .map(parse_population_density)
            .transpose()?,
    };
    overrides.validate()?;

    let config = build_config(&args)?;

    let text = std::fs::read_to_string(&args.input)?;
    let mut bodies = bodies_from_json(&text)?;
    if args.hazardous_only {
        bodies.retain(|b| b.is_potentially_hazardous_asteroid);
    }
    tracing::info!(count = bodies.len(), input = %args.input, "assessing bodies");

    if args.format == "json" {
        let reports: Vec<BodyReport> = bodies
            .iter()
            .map(|body| BodyReport {
                id: body.id.clone(),
                name: body.name.clone(),
                hazardous: body.is_potentially_hazardous_asteroid,
                assessment: assess(Some(body), &overrides, &config),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for body in &bodies {
            let assessment = assess(Some(body), &overrides, &config);
            print_text_report(body, assessment.as_ref());
        }
    }

    Ok(())
}
