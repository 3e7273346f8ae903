use super::{CropRecord, SoilSample};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

pub const DISCLAIMER: &str =
    "Verify recommendations with local agricultural experts before application.";

/// Growth stage to instruction mapping that keeps template order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StagePlan {
    stages: Vec<(String, String)>,
}

impl StagePlan {
    pub fn from_template(template: &[(&str, &str)]) -> Self {
        Self {
            stages: template
                .iter()
                .map(|(stage, text)| (stage.to_string(), text.to_string()))
                .collect(),
        }
    }

    pub fn get(&self, stage: &str) -> Option<&str> {
        self.stages
            .iter()
            .find(|(s, _)| s == stage)
            .map(|(_, text)| text.as_str())
    }

    pub fn contains_stage(&self, stage: &str) -> bool {
        self.get(stage).is_some()
    }

    pub fn stages(&self) -> impl Iterator<Item = &str> {
        self.stages.iter().map(|(s, _)| s.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.stages.iter().map(|(s, t)| (s.as_str(), t.as_str()))
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl Serialize for StagePlan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.stages.len()))?;
        for (stage, text) in &self.stages {
            map.serialize_entry(stage, text)?;
        }
        map.end()
    }
}

/// Full advisory for one crop, soil and (optional) weather combination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advisory {
    pub crop: CropRecord,
    pub soil: SoilSample,
    pub recommendations: Vec<String>,
    pub fertilizer_plan: StagePlan,
    pub irrigation_schedule: StagePlan,
    pub risk_alerts: Vec<String>,
    pub disclaimer: &'static str,
}

impl Advisory {
    pub fn has_risks(&self) -> bool {
        !self.risk_alerts.is_empty()
    }
}
