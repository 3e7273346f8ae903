use crate::error::{check_range, FarmBrainError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_FORECAST_DAYS: u32 = 7;
pub const MAX_FORECAST_DAYS: u32 = 30;

/// Current conditions at the growing location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WeatherFields")]
pub struct WeatherObservation {
    pub location: String,
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub rainfall_mm: f64,
    pub forecast_days: u32,
}

impl WeatherObservation {
    pub fn new(
        location: impl Into<String>,
        temperature_c: f64,
        humidity_pct: f64,
        rainfall_mm: f64,
    ) -> Result<Self> {
        Self::with_forecast_days(
            location,
            temperature_c,
            humidity_pct,
            rainfall_mm,
            DEFAULT_FORECAST_DAYS,
        )
    }

    pub fn with_forecast_days(
        location: impl Into<String>,
        temperature_c: f64,
        humidity_pct: f64,
        rainfall_mm: f64,
        forecast_days: u32,
    ) -> Result<Self> {
        if !(1..=MAX_FORECAST_DAYS).contains(&forecast_days) {
            return Err(FarmBrainError::validation(
                "forecast_days",
                format!(
                    "must be between 1 and {}, got {}",
                    MAX_FORECAST_DAYS, forecast_days
                ),
            ));
        }
        Ok(Self {
            location: location.into(),
            temperature_c: check_range(
                "temperature_c",
                temperature_c,
                f64::NEG_INFINITY,
                f64::INFINITY,
            )?,
            humidity_pct: check_range("humidity_pct", humidity_pct, 0.0, 100.0)?,
            rainfall_mm: check_range("rainfall_mm", rainfall_mm, 0.0, f64::INFINITY)?,
            forecast_days,
        })
    }
}

fn default_forecast_days() -> i64 {
    DEFAULT_FORECAST_DAYS as i64
}

#[derive(Deserialize)]
struct WeatherFields {
    location: String,
    temperature_c: f64,
    humidity_pct: f64,
    rainfall_mm: f64,
    #[serde(default = "default_forecast_days")]
    forecast_days: i64,
}

impl TryFrom<WeatherFields> for WeatherObservation {
    type Error = FarmBrainError;

    fn try_from(raw: WeatherFields) -> Result<Self> {
        let forecast_days = u32::try_from(raw.forecast_days).map_err(|_| {
            FarmBrainError::validation(
                "forecast_days",
                format!(
                    "must be between 1 and {}, got {}",
                    MAX_FORECAST_DAYS, raw.forecast_days
                ),
            )
        })?;
        WeatherObservation::with_forecast_days(
            raw.location,
            raw.temperature_c,
            raw.humidity_pct,
            raw.rainfall_mm,
            forecast_days,
        )
    }
}
