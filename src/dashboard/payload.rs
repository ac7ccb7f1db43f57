use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::error::PayloadError;

/// One month of the amortization schedule.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScheduleRow {
    pub month: u32,
    #[serde(deserialize_with = "amount")]
    pub installment_value: f64,
    #[serde(deserialize_with = "amount")]
    pub interest_paid: f64,
    #[serde(deserialize_with = "amount")]
    pub amortized_value: f64,
    #[serde(deserialize_with = "amount")]
    pub remaining_balance: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SummaryData {
    pub amortization_schedule: Vec<ScheduleRow>,
    #[serde(deserialize_with = "amount")]
    pub total_principal: f64,
    #[serde(deserialize_with = "amount")]
    pub total_interest: f64,
}

impl SummaryData {
    pub fn from_json(text: &str) -> Result<Self, PayloadError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, PayloadError> {
        let text = fs::read_to_string(path).map_err(|source| PayloadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn first_installment(&self) -> f64 {
        self.amortization_schedule
            .first()
            .map(|row| row.installment_value)
            .unwrap_or(0.0)
    }

    pub fn total_paid(&self) -> f64 {
        self.total_principal + self.total_interest
    }
}

/// Server totals arrive either as numbers or as `"%.2f"` strings.
fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid amount {s:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "amortization_schedule": [
            {"month": 1, "installment_value": 1000.0, "interest_paid": 100.0, "amortized_value": 900.0, "remaining_balance": 9100.0},
            {"month": 2, "installment_value": 1000.0, "interest_paid": 91.0, "amortized_value": 909.0, "remaining_balance": 8191.0}
        ],
        "total_principal": "1809.00",
        "total_interest": 191
    }"#;

    #[test]
    fn parses_numbers_and_numeric_strings() {
        let data = SummaryData::from_json(SAMPLE).unwrap();
        assert_eq!(data.amortization_schedule.len(), 2);
        assert_eq!(data.amortization_schedule[1].month, 2);
        assert_eq!(data.total_principal, 1809.0);
        assert_eq!(data.total_interest, 191.0);
        assert_eq!(data.first_installment(), 1000.0);
        assert_eq!(data.total_paid(), 2000.0);
    }

    #[test]
    fn rejects_malformed_payload() {
        assert!(matches!(
            SummaryData::from_json("{\"amortization_schedule\": 3}"),
            Err(PayloadError::Parse(_))
        ));
        assert!(SummaryData::from_json(
            r#"{"amortization_schedule": [], "total_principal": "abc", "total_interest": 0}"#
        )
        .is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SummaryData::from_file(Path::new("/nonexistent/summary.json")).unwrap_err();
        assert!(matches!(err, PayloadError::Io { .. }));
    }

    #[test]
    fn empty_schedule_has_zero_first_installment() {
        let data = SummaryData::from_json(
            r#"{"amortization_schedule": [], "total_principal": 0, "total_interest": 0}"#,
        )
        .unwrap();
        assert_eq!(data.first_installment(), 0.0);
    }
}
