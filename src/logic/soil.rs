use super::catalogue::CropCatalogue;
use crate::models::{CropRecord, SoilSample, WaterRequirement, DISCLAIMER};
use std::sync::Arc;

// Soil fertility bands (ICAR soil test ratings). Values on a threshold count
// as adequate.
pub const PH_LOW: f64 = 6.0;
pub const PH_HIGH: f64 = 7.5;
pub const NITROGEN_LOW_PPM: f64 = 140.0;
pub const NITROGEN_HIGH_PPM: f64 = 280.0;
pub const PHOSPHORUS_LOW_PPM: f64 = 10.0;
pub const PHOSPHORUS_HIGH_PPM: f64 = 25.0;
pub const POTASSIUM_LOW_PPM: f64 = 108.0;
pub const POTASSIUM_HIGH_PPM: f64 = 280.0;
pub const ORGANIC_CARBON_LOW_PCT: f64 = 0.5;

// pH compatibility bands used when shortlisting crops.
pub const STRONGLY_ACIDIC_PH: f64 = 5.5;
pub const STRONGLY_ALKALINE_PH: f64 = 8.0;

/// Crops kept on strongly acidic soils regardless of water needs.
const ACID_TOLERANT_CROPS: [&str; 4] = ["Rice", "Jute", "Turmeric", "Ginger"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Low,
    Adequate,
    High,
}

impl Band {
    pub fn classify(value: f64, low: f64, high: f64) -> Self {
        if value < low {
            Band::Low
        } else if value > high {
            Band::High
        } else {
            Band::Adequate
        }
    }
}

/// Soil test recommendations: one message per factor (pH, nitrogen,
/// phosphorus, potassium, organic carbon) followed by the disclaimer.
pub fn analyze(soil: &SoilSample) -> Vec<String> {
    let mut recs = Vec::with_capacity(6);

    let ph = soil.ph;
    recs.push(match Band::classify(ph, PH_LOW, PH_HIGH) {
        Band::Low => format!(
            "Soil pH {:.1} is acidic. Apply agricultural lime at 2-4 tonnes/hectare \
             to raise pH to 6.0-7.5 range.",
            ph
        ),
        Band::High => format!(
            "Soil pH {:.1} is alkaline. Apply gypsum or sulphur to lower pH towards \
             6.0-7.5 range.",
            ph
        ),
        Band::Adequate => format!("Soil pH {:.1} is within the optimal range (6.0-7.5).", ph),
    });

    let n = soil.nitrogen_ppm;
    recs.push(
        match Band::classify(n, NITROGEN_LOW_PPM, NITROGEN_HIGH_PPM) {
            Band::Low => format!(
                "Nitrogen {:.1} ppm is LOW. Apply urea (46% N) at 120-150 kg/ha or \
                 incorporate green manure crops like dhaincha.",
                n
            ),
            Band::High => format!(
                "Nitrogen {:.1} ppm is HIGH. Reduce nitrogenous fertilizer applications \
                 and monitor for vegetative imbalance.",
                n
            ),
            Band::Adequate => format!("Nitrogen {:.1} ppm is adequate.", n),
        },
    );

    let p = soil.phosphorus_ppm;
    recs.push(
        match Band::classify(p, PHOSPHORUS_LOW_PPM, PHOSPHORUS_HIGH_PPM) {
            Band::Low => format!(
                "Phosphorus {:.1} ppm is LOW. Apply DAP (18-46-0) at 100-125 kg/ha or \
                 single super phosphate (SSP).",
                p
            ),
            Band::High => format!(
                "Phosphorus {:.1} ppm is HIGH. Skip phosphatic fertilizers this season.",
                p
            ),
            Band::Adequate => format!("Phosphorus {:.1} ppm is adequate.", p),
        },
    );

    let k = soil.potassium_ppm;
    recs.push(
        match Band::classify(k, POTASSIUM_LOW_PPM, POTASSIUM_HIGH_PPM) {
            Band::Low => format!(
                "Potassium {:.1} ppm is LOW. Apply muriate of potash (MOP) at 60-80 kg/ha \
                 or use potassium sulphate for chloride-sensitive crops.",
                k
            ),
            Band::High => format!(
                "Potassium {:.1} ppm is HIGH. No additional potassic fertilizer required.",
                k
            ),
            Band::Adequate => format!("Potassium {:.1} ppm is adequate.", k),
        },
    );

    let oc = soil.organic_carbon_pct;
    recs.push(if oc < ORGANIC_CARBON_LOW_PCT {
        format!(
            "Organic carbon {:.2}% is below 0.50%. Incorporate farmyard manure \
             (10-15 tonnes/ha) or vermicompost to improve soil health.",
            oc
        )
    } else {
        format!("Organic carbon {:.2}% is satisfactory.", oc)
    });

    recs.push(DISCLAIMER.to_string());
    recs
}

/// pH compatibility heuristic for a crop that already matches the soil type.
///
/// Below pH 5.5 only high-water and named acid-tolerant crops qualify; above
/// 8.0 only low-water crops do.
pub fn tolerates_ph(crop: &CropRecord, ph: f64) -> bool {
    if ph < STRONGLY_ACIDIC_PH {
        crop.water_requirement == WaterRequirement::High
            || ACID_TOLERANT_CROPS.contains(&crop.name.as_str())
    } else if ph <= STRONGLY_ALKALINE_PH {
        true
    } else {
        crop.water_requirement == WaterRequirement::Low
    }
}

/// Soil analysis bound to a crop catalogue for suitability filtering.
#[derive(Debug, Clone)]
pub struct SoilAnalyzer {
    catalogue: Arc<CropCatalogue>,
}

impl SoilAnalyzer {
    pub fn new(catalogue: Arc<CropCatalogue>) -> Self {
        Self { catalogue }
    }

    pub fn analyze(&self, soil: &SoilSample) -> Vec<String> {
        analyze(soil)
    }

    /// Catalogue crops matching the soil type and tolerating its pH, in
    /// catalogue order.
    pub fn suitable_crops(&self, soil: &SoilSample) -> Vec<CropRecord> {
        let suitable: Vec<CropRecord> = self
            .catalogue
            .iter()
            .filter(|crop| crop.grows_in(&soil.soil_type))
            .filter(|crop| tolerates_ph(crop, soil.ph))
            .cloned()
            .collect();

        tracing::debug!(
            soil_type = %soil.soil_type,
            ph = soil.ph,
            count = suitable.len(),
            "shortlisted suitable crops"
        );
        suitable
    }
}

impl Default for SoilAnalyzer {
    fn default() -> Self {
        Self::new(Arc::new(CropCatalogue::new()))
    }
}
