use super::plans::{fertilizer_plan, irrigation_schedule};
use super::rules::{AdvisoryContext, RiskEngine};
use super::soil;
use crate::models::{Advisory, CropRecord, SoilSample, WeatherObservation, DISCLAIMER};

/// Composes crop advisories from soil analysis, stage templates and risk rules.
///
/// Holds no per-call state; the same inputs always produce the same advisory.
#[derive(Debug, Default)]
pub struct CropAdvisor {
    risks: RiskEngine,
}

impl CropAdvisor {
    pub fn new() -> Self {
        Self {
            risks: RiskEngine::new(),
        }
    }

    pub fn advise(
        &self,
        crop: &CropRecord,
        soil: &SoilSample,
        weather: Option<&WeatherObservation>,
    ) -> Advisory {
        let mut recommendations = vec![
            format!(
                "{} is a {} crop requiring {} water and {} days to mature.",
                crop.name, crop.season, crop.water_requirement, crop.growth_days
            ),
            format!(
                "Compatible soil types: {}. Current soil type is {}.",
                crop.soil_types.join(", "),
                soil.soil_type
            ),
        ];

        // Drop the trailing disclaimer; the advisory carries it once.
        let findings = soil::analyze(soil);
        if let Some((_, body)) = findings.split_last() {
            recommendations.extend_from_slice(body);
        }

        let risk_alerts = self
            .risks
            .evaluate(&AdvisoryContext::new(crop, soil, weather));

        tracing::debug!(
            crop = %crop.name,
            alerts = risk_alerts.len(),
            with_weather = weather.is_some(),
            "advisory composed"
        );

        Advisory {
            crop: crop.clone(),
            soil: soil.clone(),
            recommendations,
            fertilizer_plan: fertilizer_plan(&crop.name),
            irrigation_schedule: irrigation_schedule(crop.water_requirement),
            risk_alerts,
            disclaimer: DISCLAIMER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::plans::crop_key;
    use crate::logic::CropCatalogue;

    fn darbhanga_soil() -> SoilSample {
        SoilSample::new(6.3, 125.0, 11.0, 148.0, 0.72, "alluvial").unwrap()
    }

    fn monsoon_weather() -> WeatherObservation {
        WeatherObservation::new("Darbhanga, Bihar", 34.0, 92.0, 240.0).unwrap()
    }

    #[test]
    fn rice_in_monsoon_flood() {
        let db = CropCatalogue::new();
        let rice = db.by_name("Rice").unwrap();
        let advisory = CropAdvisor::new().advise(rice, &darbhanga_soil(), Some(&monsoon_weather()));

        assert!(advisory
            .risk_alerts
            .iter()
            .any(|a| a.contains("rainfall") && a.contains("waterlogging")));
        assert!(advisory
            .risk_alerts
            .iter()
            .any(|a| a.contains("humidity") && a.contains("fungal")));
        assert_eq!(advisory.risk_alerts.len(), 2);

        assert!(advisory.fertilizer_plan.contains_stage("basal"));
        assert!(advisory.fertilizer_plan.contains_stage("tillering"));
        assert_eq!(advisory.irrigation_schedule.len(), 4);
        assert!(advisory
            .irrigation_schedule
            .get("reproductive")
            .unwrap()
            .contains("4-5 days"));
        assert_eq!(advisory.disclaimer, DISCLAIMER);
    }

    #[test]
    fn recommendations_open_with_summary_lines() {
        let db = CropCatalogue::new();
        let rice = db.by_name("Rice").unwrap();
        let advisory = CropAdvisor::new().advise(rice, &darbhanga_soil(), None);

        assert_eq!(
            advisory.recommendations[0],
            "Rice is a kharif crop requiring high water and 120 days to mature."
        );
        assert_eq!(
            advisory.recommendations[1],
            "Compatible soil types: alluvial, clay, loam. Current soil type is alluvial."
        );
        assert_eq!(advisory.recommendations.len(), 7);
        assert!(advisory.recommendations[3].contains("Nitrogen 125.0 ppm is LOW"));
        assert!(!advisory.recommendations.iter().any(|r| r == DISCLAIMER));
    }

    #[test]
    fn no_weather_means_only_soil_alerts() {
        let db = CropCatalogue::new();
        let wheat = db.by_name("Wheat").unwrap();
        let acidic = SoilSample::new(5.0, 200.0, 18.0, 180.0, 0.75, "loam").unwrap();
        let advisory = CropAdvisor::new().advise(wheat, &acidic, None);
        assert_eq!(advisory.risk_alerts.len(), 1);
        assert!(advisory.risk_alerts[0].contains("aluminium"));

        let neutral = SoilSample::new(7.0, 200.0, 18.0, 180.0, 0.75, "loam").unwrap();
        assert!(!CropAdvisor::new().advise(wheat, &neutral, None).has_risks());
    }

    #[test]
    fn crop_specific_and_default_fertilizer_plans() {
        let db = CropCatalogue::new();
        let advisor = CropAdvisor::new();
        let soil = darbhanga_soil();

        let wheat = advisor.advise(db.by_name("Wheat").unwrap(), &soil, None);
        assert!(wheat.fertilizer_plan.contains_stage("crown root initiation"));

        let cotton = advisor.advise(db.by_name("Cotton").unwrap(), &soil, None);
        assert!(cotton.fertilizer_plan.contains_stage("squaring"));

        let default_stages = vec!["basal", "vegetative", "reproductive"];
        for crop in db.iter() {
            let key = crop_key(&crop.name);
            if ["rice", "wheat", "cotton"].contains(&key.as_str()) {
                continue;
            }
            let advisory = advisor.advise(crop, &soil, None);
            assert_eq!(
                advisory.fertilizer_plan.stages().collect::<Vec<_>>(),
                default_stages,
                "{}",
                crop.name
            );
        }
    }

    #[test]
    fn irrigation_follows_water_requirement() {
        let db = CropCatalogue::new();
        let advisor = CropAdvisor::new();
        let soil = darbhanga_soil();

        let barley = advisor.advise(db.by_name("Barley").unwrap(), &soil, None);
        assert!(barley
            .irrigation_schedule
            .get("reproductive")
            .unwrap()
            .contains("One critical irrigation"));

        let maize = advisor.advise(db.by_name("Maize").unwrap(), &soil, None);
        assert!(maize
            .irrigation_schedule
            .get("reproductive")
            .unwrap()
            .contains("7-10 days"));
    }

    #[test]
    fn advise_is_idempotent() {
        let db = CropCatalogue::new();
        let rice = db.by_name("Rice").unwrap();
        let advisor = CropAdvisor::new();
        let soil = darbhanga_soil();
        let weather = monsoon_weather();

        let first = advisor.advise(rice, &soil, Some(&weather));
        let second = advisor.advise(rice, &soil, Some(&weather));
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn advisory_echoes_inputs() {
        let db = CropCatalogue::new();
        let rice = db.by_name("Rice").unwrap();
        let soil = darbhanga_soil();
        let advisory = CropAdvisor::new().advise(rice, &soil, None);
        assert_eq!(&advisory.crop, rice);
        assert_eq!(advisory.soil, soil);
    }
}
