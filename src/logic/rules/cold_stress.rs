use super::{AdvisoryContext, RiskRule};
use crate::models::Season;

pub const COLD_STRESS_C: f64 = 5.0;

/// Cold snap during a monsoon-sown crop
///
/// Conditions:
/// - Air temperature below 5°C
/// - Crop is a kharif crop
pub struct ColdStressRule;

impl RiskRule for ColdStressRule {
    fn id(&self) -> &'static str {
        "kharif_cold_stress"
    }

    fn name(&self) -> &'static str {
        "Kharif Cold Stress"
    }

    fn evaluate(&self, ctx: &AdvisoryContext<'_>) -> Option<String> {
        let weather = ctx.weather?;
        if weather.temperature_c >= COLD_STRESS_C || ctx.crop.season != Season::Kharif {
            return None;
        }

        Some(
            "Unexpectedly cold conditions for a kharif crop. \
             Protect seedlings with polythene covers."
                .to_string(),
        )
    }
}
