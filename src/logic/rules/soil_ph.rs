use super::{AdvisoryContext, RiskRule};

pub const ALUMINIUM_TOXICITY_PH: f64 = 5.5;
pub const MICRONUTRIENT_LOCKUP_PH: f64 = 8.5;

/// Strong acidity releases exchangeable aluminium into the root zone.
///
/// Conditions:
/// - Soil pH below 5.5, independent of weather
pub struct AcidSoilRule;

impl RiskRule for AcidSoilRule {
    fn id(&self) -> &'static str {
        "soil_acidity"
    }

    fn name(&self) -> &'static str {
        "Strongly Acidic Soil"
    }

    fn evaluate(&self, ctx: &AdvisoryContext<'_>) -> Option<String> {
        (ctx.soil.ph < ALUMINIUM_TOXICITY_PH).then(|| {
            "Strongly acidic soil may cause aluminium toxicity. Apply lime before sowing."
                .to_string()
        })
    }
}

/// Strong alkalinity locks up zinc, iron and manganese.
///
/// Conditions:
/// - Soil pH above 8.5, independent of weather
pub struct AlkalineSoilRule;

impl RiskRule for AlkalineSoilRule {
    fn id(&self) -> &'static str {
        "soil_alkalinity"
    }

    fn name(&self) -> &'static str {
        "Strongly Alkaline Soil"
    }

    fn evaluate(&self, ctx: &AdvisoryContext<'_>) -> Option<String> {
        (ctx.soil.ph > MICRONUTRIENT_LOCKUP_PH).then(|| {
            "Strongly alkaline soil may cause micronutrient deficiencies. \
             Apply zinc sulphate 25 kg/ha."
                .to_string()
        })
    }
}
