use crate::error::{FarmBrainError, Result};
use crate::models::{CropRecord, Season, WaterRequirement};

use Season::{Kharif, Rabi, Zaid};
use WaterRequirement::{High, Low, Medium};

type CropRow = (&'static str, Season, WaterRequirement, &'static [&'static str], u32);

const BUILTIN_CROPS: &[CropRow] = &[
    // Kharif
    ("Rice", Kharif, High, &["alluvial", "clay", "loam"], 120),
    ("Maize", Kharif, Medium, &["loam", "sandy loam", "alluvial"], 90),
    ("Sorghum (Jowar)", Kharif, Low, &["black", "loam", "red"], 100),
    ("Pearl Millet (Bajra)", Kharif, Low, &["sandy", "sandy loam", "loam"], 75),
    ("Cotton", Kharif, Medium, &["black", "alluvial", "loam"], 180),
    ("Sugarcane", Kharif, High, &["alluvial", "loam", "clay loam"], 365),
    ("Soybean", Kharif, Medium, &["black", "loam", "clay loam"], 100),
    ("Groundnut", Kharif, Medium, &["sandy loam", "loam", "red"], 120),
    ("Sesame (Til)", Kharif, Low, &["loam", "sandy loam", "alluvial"], 80),
    ("Pigeonpea (Arhar/Tur)", Kharif, Low, &["black", "red", "loam"], 160),
    ("Blackgram (Urad)", Kharif, Low, &["loam", "sandy loam", "alluvial"], 70),
    ("Greengram (Moong)", Kharif, Low, &["loam", "sandy loam", "alluvial"], 65),
    ("Jute", Kharif, High, &["alluvial", "loam", "clay"], 120),
    ("Turmeric", Kharif, Medium, &["loam", "clay loam", "red"], 270),
    ("Ginger", Kharif, Medium, &["loam", "sandy loam", "red"], 210),
    ("Banana", Kharif, High, &["alluvial", "loam", "clay loam"], 365),
    ("Okra (Bhindi)", Kharif, Medium, &["loam", "sandy loam", "alluvial"], 60),
    ("Bitter Gourd", Kharif, Medium, &["loam", "sandy loam"], 70),
    ("Cowpea (Lobia)", Kharif, Low, &["sandy loam", "loam", "red"], 75),
    ("Castor", Kharif, Low, &["black", "red", "alluvial"], 200),
    // Rabi
    ("Wheat", Rabi, Medium, &["alluvial", "loam", "clay loam"], 120),
    ("Barley", Rabi, Low, &["loam", "sandy loam", "alluvial"], 100),
    ("Chickpea (Chana)", Rabi, Low, &["black", "loam", "red"], 100),
    ("Lentil (Masoor)", Rabi, Low, &["loam", "clay loam", "alluvial"], 100),
    ("Mustard (Sarson)", Rabi, Low, &["loam", "alluvial", "sandy loam"], 110),
    ("Rapeseed", Rabi, Low, &["loam", "alluvial", "clay loam"], 115),
    ("Linseed", Rabi, Low, &["black", "loam", "alluvial"], 120),
    ("Sunflower", Rabi, Medium, &["loam", "clay loam", "alluvial"], 100),
    ("Pea (Matar)", Rabi, Low, &["loam", "sandy loam", "alluvial"], 90),
    ("Potato", Rabi, Medium, &["loam", "sandy loam", "alluvial"], 90),
    ("Onion", Rabi, Medium, &["loam", "alluvial", "black"], 130),
    ("Garlic", Rabi, Medium, &["loam", "clay loam", "alluvial"], 150),
    ("Coriander", Rabi, Low, &["loam", "sandy loam"], 60),
    ("Fenugreek (Methi)", Rabi, Low, &["loam", "clay loam", "alluvial"], 60),
    ("Carrot", Rabi, Medium, &["loam", "sandy loam", "alluvial"], 70),
    ("Cabbage", Rabi, Medium, &["loam", "clay loam", "alluvial"], 80),
    ("Cauliflower", Rabi, Medium, &["loam", "clay loam", "alluvial"], 75),
    ("Spinach (Palak)", Rabi, Medium, &["loam", "sandy loam"], 40),
    // Zaid
    ("Watermelon", Zaid, Medium, &["sandy loam", "loam"], 90),
    ("Muskmelon", Zaid, Medium, &["sandy loam", "loam"], 75),
    ("Cucumber", Zaid, Medium, &["loam", "sandy loam"], 55),
    ("Pumpkin", Zaid, Medium, &["loam", "clay loam"], 80),
    ("Summer Squash", Zaid, Medium, &["loam", "sandy loam"], 50),
    ("Moong (Zaid)", Zaid, Low, &["loam", "sandy loam"], 65),
    ("Cowpea (Zaid)", Zaid, Low, &["sandy loam", "loam"], 70),
    ("Bottle Gourd", Zaid, Medium, &["loam", "clay loam"], 65),
    ("Ridge Gourd", Zaid, Medium, &["loam", "sandy loam"], 60),
    ("Snake Gourd", Zaid, Medium, &["loam", "sandy loam"], 65),
    ("Bitter Melon (Zaid)", Zaid, Medium, &["loam", "sandy loam"], 70),
    ("Cluster Beans (Guar)", Zaid, Low, &["sandy loam", "loam"], 90),
    ("Amaranth (Rajgira)", Zaid, Low, &["loam", "sandy loam", "red"], 100),
];

/// Read-only catalogue of Indian field and vegetable crops.
///
/// Records are built once from the compiled-in table and never change.
#[derive(Debug, Clone)]
pub struct CropCatalogue {
    crops: Vec<CropRecord>,
}

impl CropCatalogue {
    pub fn new() -> Self {
        let crops = BUILTIN_CROPS
            .iter()
            .map(|&(name, season, water_requirement, soil_types, growth_days)| CropRecord {
                name: name.to_string(),
                season,
                water_requirement,
                soil_types: soil_types.iter().map(|s| s.to_string()).collect(),
                growth_days,
            })
            .collect();

        Self { crops }
    }

    /// Every crop, in table order. The returned vector is the caller's own copy.
    pub fn all(&self) -> Vec<CropRecord> {
        self.crops.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CropRecord> {
        self.crops.iter()
    }

    pub fn by_name(&self, name: &str) -> Option<&CropRecord> {
        let wanted = name.to_lowercase();
        let found = self.crops.iter().find(|c| c.name.to_lowercase() == wanted);
        if found.is_none() {
            tracing::debug!(crop = name, "crop not in catalogue");
        }
        found
    }

    /// Like [`by_name`](Self::by_name), but a miss is a `NotFound` error.
    pub fn find(&self, name: &str) -> Result<&CropRecord> {
        self.by_name(name).ok_or_else(|| {
            FarmBrainError::NotFound(format!("Crop '{}' not found in database.", name))
        })
    }

    /// Unknown seasons yield an empty list.
    pub fn by_season(&self, season: &str) -> Vec<CropRecord> {
        match Season::from_str(season) {
            Some(season) => self
                .crops
                .iter()
                .filter(|c| c.season == season)
                .cloned()
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn by_soil_type(&self, soil_type: &str) -> Vec<CropRecord> {
        self.crops
            .iter()
            .filter(|c| c.grows_in(soil_type))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }
}

impl Default for CropCatalogue {
    fn default() -> Self {
        Self::new()
    }
}
