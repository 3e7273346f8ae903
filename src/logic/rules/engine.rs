use super::{
    cold_stress::ColdStressRule, excess_rainfall::ExcessRainfallRule, extreme_heat::ExtremeHeatRule,
    fungal_risk::FungalRiskRule, soil_ph::AcidSoilRule, soil_ph::AlkalineSoilRule,
    AdvisoryContext, RiskRule,
};

/// Ordered set of risk rules. Alerts come back in registration order.
pub struct RiskEngine {
    rules: Vec<Box<dyn RiskRule>>,
}

impl RiskEngine {
    pub fn new() -> Self {
        let rules: Vec<Box<dyn RiskRule>> = vec![
            Box::new(ExtremeHeatRule),
            Box::new(ColdStressRule),
            Box::new(ExcessRainfallRule),
            Box::new(FungalRiskRule),
            Box::new(AcidSoilRule),
            Box::new(AlkalineSoilRule),
        ];

        Self { rules }
    }

    pub fn evaluate(&self, ctx: &AdvisoryContext<'_>) -> Vec<String> {
        self.rules
            .iter()
            .filter_map(|rule| {
                let alert = rule.evaluate(ctx)?;
                tracing::debug!(rule = rule.id(), crop = %ctx.crop.name, "risk alert raised");
                Some(alert)
            })
            .collect()
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RiskEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RiskEngine")
            .field("rules", &self.list_rules())
            .finish()
    }
}
