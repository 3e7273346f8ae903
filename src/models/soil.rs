use crate::error::{check_range, FarmBrainError, Result};
use serde::{Deserialize, Serialize};

/// Chemical profile of a soil sample.
///
/// Every constructor path validates, so a `SoilSample` in hand is always
/// within range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SoilFields")]
pub struct SoilSample {
    pub ph: f64,
    pub nitrogen_ppm: f64,
    pub phosphorus_ppm: f64,
    pub potassium_ppm: f64,
    pub organic_carbon_pct: f64,
    pub soil_type: String,
}

impl SoilSample {
    pub fn new(
        ph: f64,
        nitrogen_ppm: f64,
        phosphorus_ppm: f64,
        potassium_ppm: f64,
        organic_carbon_pct: f64,
        soil_type: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            ph: check_range("ph", ph, 0.0, 14.0)?,
            nitrogen_ppm: check_range("nitrogen_ppm", nitrogen_ppm, 0.0, f64::INFINITY)?,
            phosphorus_ppm: check_range("phosphorus_ppm", phosphorus_ppm, 0.0, f64::INFINITY)?,
            potassium_ppm: check_range("potassium_ppm", potassium_ppm, 0.0, f64::INFINITY)?,
            organic_carbon_pct: check_range("organic_carbon_pct", organic_carbon_pct, 0.0, 100.0)?,
            soil_type: soil_type.into(),
        })
    }
}

#[derive(Deserialize)]
struct SoilFields {
    ph: f64,
    nitrogen_ppm: f64,
    phosphorus_ppm: f64,
    potassium_ppm: f64,
    organic_carbon_pct: f64,
    soil_type: String,
}

impl TryFrom<SoilFields> for SoilSample {
    type Error = FarmBrainError;

    fn try_from(raw: SoilFields) -> Result<Self> {
        SoilSample::new(
            raw.ph,
            raw.nitrogen_ppm,
            raw.phosphorus_ppm,
            raw.potassium_ppm,
            raw.organic_carbon_pct,
            raw.soil_type,
        )
    }
}
