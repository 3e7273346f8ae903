use super::{AdvisoryContext, RiskRule};

pub const FUNGAL_HUMIDITY_PCT: f64 = 85.0;

/// Fungal disease pressure
///
/// Blast, blight and mildews spread quickly in saturated air.
///
/// Conditions:
/// - Relative humidity above 85%
pub struct FungalRiskRule;

impl RiskRule for FungalRiskRule {
    fn id(&self) -> &'static str {
        "fungal_risk"
    }

    fn name(&self) -> &'static str {
        "Fungal Disease Risk"
    }

    fn evaluate(&self, ctx: &AdvisoryContext<'_>) -> Option<String> {
        let weather = ctx.weather?;
        if weather.humidity_pct <= FUNGAL_HUMIDITY_PCT {
            return None;
        }

        Some(format!(
            "High humidity ({}%). Monitor for fungal diseases; apply preventive fungicide.",
            weather.humidity_pct
        ))
    }
}
