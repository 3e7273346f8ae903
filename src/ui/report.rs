use crate::models::{Advisory, CropRecord, StagePlan, DISCLAIMER};
use std::fmt::Write;

const RULE_WIDTH: usize = 60;

fn rule(ch: char) -> String {
    std::iter::repeat(ch).take(RULE_WIDTH).collect()
}

fn push_plan(out: &mut String, heading: &str, plan: &StagePlan) {
    let _ = writeln!(out, "\n{}:", heading);
    for (stage, instruction) in plan.iter() {
        let _ = writeln!(out, "  [{}] {}", stage.to_uppercase(), instruction);
    }
}

/// Console layout for a full crop advisory.
pub fn render_advisory(advisory: &Advisory) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", rule('='));
    let _ = writeln!(out, "CROP ADVISORY: {}", advisory.crop.name.to_uppercase());
    let _ = writeln!(out, "{}", rule('='));

    let _ = writeln!(out, "\nRECOMMENDATIONS:");
    for rec in &advisory.recommendations {
        let _ = writeln!(out, "  - {}", rec);
    }

    push_plan(&mut out, "FERTILIZER PLAN", &advisory.fertilizer_plan);
    push_plan(&mut out, "IRRIGATION SCHEDULE", &advisory.irrigation_schedule);

    if advisory.has_risks() {
        let _ = writeln!(out, "\nRISK ALERTS:");
        for alert in &advisory.risk_alerts {
            let _ = writeln!(out, "  WARNING: {}", alert);
        }
    }

    let _ = writeln!(out, "\nDISCLAIMER: {}", advisory.disclaimer);
    out
}

/// Soil findings followed by the shortlisted crops.
///
/// `recommendations` is the raw analyzer output; its trailing disclaimer is
/// printed once in the footer.
pub fn render_soil_report(recommendations: &[String], suitable: &[CropRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", rule('='));
    let _ = writeln!(out, "SOIL ANALYSIS");
    let _ = writeln!(out, "{}", rule('='));

    let _ = writeln!(out, "\nRECOMMENDATIONS:");
    for rec in recommendations.iter().filter(|r| *r != DISCLAIMER) {
        let _ = writeln!(out, "  - {}", rec);
    }

    let _ = writeln!(out, "\nSUITABLE CROPS ({}):", suitable.len());
    if suitable.is_empty() {
        let _ = writeln!(out, "  (none for this soil type and pH)");
    }
    for crop in suitable {
        let _ = writeln!(
            out,
            "  - {} ({}, {} water, {} days)",
            crop.name, crop.season, crop.water_requirement, crop.growth_days
        );
    }

    let _ = writeln!(out, "\nDISCLAIMER: {}", DISCLAIMER);
    out
}

pub fn render_crop_table(crops: &[CropRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nAVAILABLE CROPS ({} total):", crops.len());
    let _ = writeln!(out, "{:<30} {:<10} {:<10} {:>6}", "Name", "Season", "Water", "Days");
    let _ = writeln!(out, "{}", rule('-'));
    for c in crops {
        let _ = writeln!(
            out,
            "{:<30} {:<10} {:<10} {:>6}",
            c.name,
            c.season.as_str(),
            c.water_requirement.as_str(),
            c.growth_days
        );
    }
    let _ = writeln!(out, "\n{}", DISCLAIMER);
    out
}
