use std::ops::RangeInclusive;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::FieldError;

pub const LAT_RANGE: RangeInclusive<f64> = -90.0..=90.0;
pub const LNG_RANGE: RangeInclusive<f64> = -180.0..=180.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationUpdate {
    pub order_id: String,
    pub courier_id: String,
    pub position: GeoPoint,
    pub bearing: Option<f64>,
    pub speed_mps: Option<f64>,
    #[serde(deserialize_with = "deserialize_utc_timestamp")]
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSnapshot {
    pub position: GeoPoint,
    pub timestamp: DateTime<Utc>,
    pub eta_minutes: Option<u32>,
}

impl LocationUpdate {
    /// Checks every declared constraint, collecting all violations instead
    /// of stopping at the first.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.order_id.trim().is_empty() {
            errors.push(FieldError::new("orderId", "must not be empty"));
        }

        if self.courier_id.trim().is_empty() {
            errors.push(FieldError::new("courierId", "must not be empty"));
        }

        if !LAT_RANGE.contains(&self.position.lat) {
            errors.push(FieldError::new(
                "position.lat",
                format!("{} is outside [-90, 90]", self.position.lat),
            ));
        }

        if !LNG_RANGE.contains(&self.position.lng) {
            errors.push(FieldError::new(
                "position.lng",
                format!("{} is outside [-180, 180]", self.position.lng),
            ));
        }

        if let Some(speed) = self.speed_mps {
            if speed < 0.0 {
                errors.push(FieldError::new(
                    "speedMps",
                    format!("{speed} is negative"),
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

fn deserialize_utc_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_utc_timestamp(&raw).map_err(serde::de::Error::custom)
}

// Offset-aware instants are converted to UTC; naive ones are assumed UTC.
fn parse_utc_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(instant.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
        .map_err(|_| format!("invalid timestamp: {raw}"))
}
