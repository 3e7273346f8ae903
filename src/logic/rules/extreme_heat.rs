use super::{AdvisoryContext, RiskRule};

pub const EXTREME_HEAT_C: f64 = 40.0;

/// Extreme heat alert
///
/// Conditions:
/// - Air temperature above 40°C
///
/// Moisture loss outpaces uptake at these temperatures regardless of crop.
pub struct ExtremeHeatRule;

impl RiskRule for ExtremeHeatRule {
    fn id(&self) -> &'static str {
        "extreme_heat"
    }

    fn name(&self) -> &'static str {
        "Extreme Heat"
    }

    fn evaluate(&self, ctx: &AdvisoryContext<'_>) -> Option<String> {
        let weather = ctx.weather?;
        if weather.temperature_c <= EXTREME_HEAT_C {
            return None;
        }

        Some(format!(
            "Extreme heat ({}°C) at {}. Apply mulching and increase irrigation frequency.",
            weather.temperature_c, weather.location
        ))
    }
}
