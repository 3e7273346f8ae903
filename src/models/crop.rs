use crate::error::{FarmBrainError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Kharif,
    Rabi,
    Zaid,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Kharif => "kharif",
            Season::Rabi => "rabi",
            Season::Zaid => "zaid",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "kharif" => Some(Season::Kharif),
            "rabi" => Some(Season::Rabi),
            "zaid" => Some(Season::Zaid),
            _ => None,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterRequirement {
    Low,
    Medium,
    High,
}

impl WaterRequirement {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaterRequirement::Low => "low",
            WaterRequirement::Medium => "medium",
            WaterRequirement::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(WaterRequirement::Low),
            "medium" => Some(WaterRequirement::Medium),
            "high" => Some(WaterRequirement::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for WaterRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A crop and the cultivation attributes used for filtering and advice.
///
/// `soil_types` keeps the display order of the source table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CropFields")]
pub struct CropRecord {
    pub name: String,
    pub season: Season,
    pub water_requirement: WaterRequirement,
    pub soil_types: Vec<String>,
    pub growth_days: u32,
}

impl CropRecord {
    pub fn new(
        name: impl Into<String>,
        season: Season,
        water_requirement: WaterRequirement,
        soil_types: Vec<String>,
        growth_days: u32,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(FarmBrainError::validation("name", "must not be empty"));
        }
        if growth_days == 0 {
            return Err(FarmBrainError::validation(
                "growth_days",
                "must be greater than 0",
            ));
        }
        Ok(Self {
            name,
            season,
            water_requirement,
            soil_types,
            growth_days,
        })
    }

    /// Case-insensitive match against the compatible soil-type tags.
    pub fn grows_in(&self, soil_type: &str) -> bool {
        let wanted = soil_type.to_lowercase();
        self.soil_types.iter().any(|s| s.to_lowercase() == wanted)
    }
}

#[derive(Deserialize)]
struct CropFields {
    name: String,
    season: String,
    water_requirement: String,
    soil_types: Vec<String>,
    growth_days: i64,
}

impl TryFrom<CropFields> for CropRecord {
    type Error = FarmBrainError;

    fn try_from(raw: CropFields) -> Result<Self> {
        let season = Season::from_str(&raw.season).ok_or_else(|| {
            FarmBrainError::validation(
                "season",
                format!("must be one of kharif, rabi, zaid, got '{}'", raw.season),
            )
        })?;
        let water_requirement =
            WaterRequirement::from_str(&raw.water_requirement).ok_or_else(|| {
                FarmBrainError::validation(
                    "water_requirement",
                    format!(
                        "must be one of low, medium, high, got '{}'",
                        raw.water_requirement
                    ),
                )
            })?;
        let growth_days = u32::try_from(raw.growth_days)
            .map_err(|_| FarmBrainError::validation("growth_days", "must be greater than 0"))?;

        CropRecord::new(
            raw.name,
            season,
            water_requirement,
            raw.soil_types,
            growth_days,
        )
    }
}
