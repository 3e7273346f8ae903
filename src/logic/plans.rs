use crate::models::{StagePlan, WaterRequirement};

type Template = &'static [(&'static str, &'static str)];

const RICE_FERTILIZER: Template = &[
    ("basal", "Apply DAP 50 kg/ha + MOP 25 kg/ha at transplanting."),
    ("tillering", "Top-dress urea 30 kg/ha at 21 DAT."),
    (
        "panicle initiation",
        "Apply urea 30 kg/ha + potassium sulphate 20 kg/ha.",
    ),
];

const WHEAT_FERTILIZER: Template = &[
    ("basal", "Apply DAP 50 kg/ha + MOP 20 kg/ha at sowing."),
    (
        "crown root initiation",
        "Top-dress urea 60 kg/ha at CRI stage (20-25 DAS).",
    ),
    ("jointing", "Apply urea 30 kg/ha at jointing stage."),
];

const COTTON_FERTILIZER: Template = &[
    ("basal", "Apply SSP 150 kg/ha + MOP 25 kg/ha at sowing."),
    ("squaring", "Apply urea 40 kg/ha + boron 1 kg/ha at squaring."),
    ("boll development", "Top-dress NPK 12:32:16 at 50 kg/ha."),
];

const DEFAULT_FERTILIZER: Template = &[
    (
        "basal",
        "Apply recommended NPK complex fertilizer at sowing/planting.",
    ),
    (
        "vegetative",
        "Top-dress nitrogen source at active vegetative growth.",
    ),
    (
        "reproductive",
        "Apply potassium-rich fertilizer at flowering/fruiting.",
    ),
];

const HIGH_WATER_IRRIGATION: Template = &[
    (
        "establishment",
        "Irrigate immediately after sowing/transplanting.",
    ),
    (
        "vegetative",
        "Maintain field capacity; irrigate every 5-7 days.",
    ),
    (
        "reproductive",
        "Critical stage — do not stress; irrigate every 4-5 days.",
    ),
    (
        "maturation",
        "Reduce irrigation; withhold 10-15 days before harvest.",
    ),
];

const MEDIUM_WATER_IRRIGATION: Template = &[
    ("establishment", "Apply light irrigation at sowing."),
    (
        "vegetative",
        "Irrigate every 10-12 days or at 50% soil moisture depletion.",
    ),
    (
        "reproductive",
        "Irrigate every 7-10 days at flowering/grain fill.",
    ),
    ("maturation", "Reduce irrigation 2-3 weeks before harvest."),
];

const LOW_WATER_IRRIGATION: Template = &[
    ("establishment", "One irrigation at sowing if soil is dry."),
    (
        "vegetative",
        "Irrigate every 15-20 days or rely on rainfall.",
    ),
    (
        "reproductive",
        "One critical irrigation at flowering if rainfall is inadequate.",
    ),
    ("maturation", "Withhold irrigation 3 weeks before harvest."),
];

/// Lookup key for crop-specific plans: the display name lowercased, cut at
/// the first parenthesis and trimmed ("Sorghum (Jowar)" -> "sorghum").
pub fn crop_key(name: &str) -> String {
    let base = match name.find('(') {
        Some(idx) => &name[..idx],
        None => name,
    };
    base.trim().to_lowercase()
}

/// Three-stage fertilizer plan for the crop, falling back to a generic
/// basal/vegetative/reproductive plan.
pub fn fertilizer_plan(crop_name: &str) -> StagePlan {
    let template = match crop_key(crop_name).as_str() {
        "rice" => RICE_FERTILIZER,
        "wheat" => WHEAT_FERTILIZER,
        "cotton" => COTTON_FERTILIZER,
        _ => DEFAULT_FERTILIZER,
    };
    StagePlan::from_template(template)
}

pub fn irrigation_schedule(water: WaterRequirement) -> StagePlan {
    let template = match water {
        WaterRequirement::High => HIGH_WATER_IRRIGATION,
        WaterRequirement::Medium => MEDIUM_WATER_IRRIGATION,
        WaterRequirement::Low => LOW_WATER_IRRIGATION,
    };
    StagePlan::from_template(template)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crop_key_strips_parenthetical() {
        assert_eq!(crop_key("Sorghum (Jowar)"), "sorghum");
        assert_eq!(crop_key("Cowpea (Zaid)"), "cowpea");
        assert_eq!(crop_key("Pigeonpea (Arhar/Tur)"), "pigeonpea");
        assert_eq!(crop_key("Rice"), "rice");
        assert_eq!(crop_key("  WHEAT  "), "wheat");
        assert_eq!(crop_key("Bitter Gourd"), "bitter gourd");
        assert_eq!(crop_key("(odd)"), "");
    }

    #[test]
    fn crop_specific_fertilizer_plans() {
        let rice = fertilizer_plan("Rice");
        assert_eq!(
            rice.stages().collect::<Vec<_>>(),
            vec!["basal", "tillering", "panicle initiation"]
        );

        let wheat = fertilizer_plan("Wheat");
        assert!(wheat.contains_stage("crown root initiation"));
        assert!(wheat.contains_stage("jointing"));

        let cotton = fertilizer_plan("COTTON");
        assert!(cotton.get("squaring").unwrap().contains("boron"));
        assert!(cotton.contains_stage("boll development"));
    }

    #[test]
    fn unknown_crop_uses_default_plan() {
        for name in ["Maize", "Sorghum (Jowar)", "Watermelon", "Rice Bean"] {
            let plan = fertilizer_plan(name);
            assert_eq!(
                plan.stages().collect::<Vec<_>>(),
                vec!["basal", "vegetative", "reproductive"],
                "{}",
                name
            );
        }
    }

    #[test]
    fn irrigation_templates_have_four_stages() {
        for water in [
            WaterRequirement::High,
            WaterRequirement::Medium,
            WaterRequirement::Low,
        ] {
            let schedule = irrigation_schedule(water);
            assert_eq!(
                schedule.stages().collect::<Vec<_>>(),
                vec!["establishment", "vegetative", "reproductive", "maturation"]
            );
        }
        assert_eq!(
            irrigation_schedule(WaterRequirement::High).get("reproductive"),
            Some("Critical stage — do not stress; irrigate every 4-5 days.")
        );
        assert!(irrigation_schedule(WaterRequirement::Low)
            .get("reproductive")
            .unwrap()
            .contains("One critical irrigation"));
    }
}
