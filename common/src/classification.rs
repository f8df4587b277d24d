//! Classification result type

use serde::{Deserialize, Serialize};

use crate::category::WasteCategory;
use crate::error::{ClassifyError, Result};

/// The structured outcome of one classification call.
///
/// Field names match the response schema sent to the endpoint. The struct
/// is immutable once produced; a failed validation discards it entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub waste_type: String,
    pub confidence: f64,
    pub reasoning: String,
    pub disposal_method: String,
}

impl Classification {
    /// Category used for display styling. Unrecognized labels fall back to
    /// Non-Recyclable; after `validate` this lookup cannot fall back.
    pub fn category(&self) -> WasteCategory {
        WasteCategory::from_label_or_default(&self.waste_type)
    }

    /// Confidence rendered as a percentage with one decimal, e.g. "92.0%".
    pub fn confidence_percent(&self) -> String {
        format!("{:.1}%", self.confidence * 100.0)
    }

    /// Enforce the response contract the instruction only advises.
    ///
    /// `waste_type` must normalize onto the closed category set,
    /// `disposal_method` must be exactly the prescribed method for that
    /// category, and `confidence` must lie in 0.0-1.0. Violations are
    /// classification errors; the schema hint sent to the endpoint is not
    /// trusted on its own.
    pub fn validate(&self) -> Result<()> {
        let category = WasteCategory::from_loose_label(&self.waste_type).ok_or_else(|| {
            ClassifyError::Classification(format!(
                "Unrecognized waste type in response: '{}'",
                self.waste_type
            ))
        })?;

        if self.disposal_method != category.disposal_method() {
            return Err(ClassifyError::Classification(format!(
                "Disposal method '{}' does not match the prescribed guidance for {}",
                self.disposal_method,
                category.label()
            )));
        }

        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(ClassifyError::Classification(format!(
                "Confidence {} is outside the 0.0-1.0 range",
                self.confidence
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_result() -> Classification {
        Classification {
            waste_type: "E-waste".to_string(),
            confidence: 0.92,
            reasoning: "Visible circuit board".to_string(),
            disposal_method: "Certified E-waste Recycler or Manufacturer Take-back Program"
                .to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_canonical_result() {
        assert!(valid_result().validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_loose_label_spelling() {
        let mut result = valid_result();
        result.waste_type = "e-WASTE".to_string();
        assert!(result.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_waste_type() {
        let mut result = valid_result();
        result.waste_type = "Space Debris".to_string();
        let err = result.validate().unwrap_err();
        assert!(matches!(err, ClassifyError::Classification(_)));
        assert!(format!("{}", err).contains("Space Debris"));
    }

    #[test]
    fn test_validate_rejects_mismatched_disposal_method() {
        let mut result = valid_result();
        // valid method, wrong category
        result.disposal_method = "Recycling at a municipal facility".to_string();
        let err = result.validate().unwrap_err();
        assert!(format!("{}", err).contains("does not match"));
    }

    #[test]
    fn test_validate_rejects_out_of_range_confidence() {
        let mut result = valid_result();
        result.confidence = 1.5;
        assert!(result.validate().is_err());
        result.confidence = -0.1;
        assert!(result.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_confidence_bounds() {
        let mut result = valid_result();
        result.confidence = 0.0;
        assert!(result.validate().is_ok());
        result.confidence = 1.0;
        assert!(result.validate().is_ok());
    }

    #[test]
    fn test_confidence_percent_formatting() {
        assert_eq!(valid_result().confidence_percent(), "92.0%");
        let mut result = valid_result();
        result.confidence = 0.875;
        assert_eq!(result.confidence_percent(), "87.5%");
        result.confidence = 1.0;
        assert_eq!(result.confidence_percent(), "100.0%");
    }

    #[test]
    fn test_category_lookup() {
        assert_eq!(valid_result().category(), WasteCategory::Ewaste);
    }

    #[test]
    fn test_serde_round_trip_field_names() {
        let json = serde_json::to_string(&valid_result()).expect("serialize failed");
        assert!(json.contains("\"waste_type\":\"E-waste\""));
        assert!(json.contains("\"confidence\":0.92"));
        assert!(json.contains("\"disposal_method\""));

        let parsed: Classification = serde_json::from_str(&json).expect("deserialize failed");
        assert_eq!(parsed, valid_result());
    }
}
