use super::{AdvisoryContext, RiskRule};

pub const EXCESS_RAINFALL_MM: f64 = 200.0;

/// Waterlogging risk after heavy rain
///
/// Conditions:
/// - Recent rainfall above 200 mm
pub struct ExcessRainfallRule;

impl RiskRule for ExcessRainfallRule {
    fn id(&self) -> &'static str {
        "excess_rainfall"
    }

    fn name(&self) -> &'static str {
        "Excess Rainfall"
    }

    fn evaluate(&self, ctx: &AdvisoryContext<'_>) -> Option<String> {
        let weather = ctx.weather?;
        if weather.rainfall_mm <= EXCESS_RAINFALL_MM {
            return None;
        }

        Some(format!(
            "Excess rainfall ({} mm) detected. \
             Ensure drainage channels are clear to prevent waterlogging.",
            weather.rainfall_mm
        ))
    }
}
