pub mod cold_stress;
pub mod engine;
pub mod excess_rainfall;
pub mod extreme_heat;
pub mod fungal_risk;
pub mod soil_ph;

pub use engine::RiskEngine;

use crate::models::{CropRecord, SoilSample, WeatherObservation};

/// Inputs a risk rule may inspect.
#[derive(Debug, Clone, Copy)]
pub struct AdvisoryContext<'a> {
    pub crop: &'a CropRecord,
    pub soil: &'a SoilSample,
    pub weather: Option<&'a WeatherObservation>,
}

impl<'a> AdvisoryContext<'a> {
    pub fn new(
        crop: &'a CropRecord,
        soil: &'a SoilSample,
        weather: Option<&'a WeatherObservation>,
    ) -> Self {
        Self { crop, soil, weather }
    }
}

/// Trait for agronomic risk rules
pub trait RiskRule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate the rule and return an alert if its condition holds
    fn evaluate(&self, ctx: &AdvisoryContext<'_>) -> Option<String>;
}
