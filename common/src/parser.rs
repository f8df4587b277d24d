//! API response parser
//!
//! The endpoint returns JSON whose candidate text is itself a JSON-encoded
//! object, so the classification is parsed a second time out of that text
//! and then validated against the taxonomy.

use crate::classification::Classification;
use crate::error::{ClassifyError, Result};

/// Extract the JSON object from a model response.
///
/// Extraction order:
/// 1. a ```json ... ``` fenced block
/// 2. the outermost `{...}` object
/// 3. error
///
/// The endpoint is asked for `application/json`, so the fallbacks only
/// matter when the model wraps the object in prose anyway.
///
/// # Arguments
/// * `response` - candidate text from the API response
///
/// # Returns
/// * `Ok(&str)` - the extracted JSON slice
/// * `Err` - no JSON object found
pub fn extract_json(response: &str) -> Result<&str> {
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + 7; // length of "```json"
        if let Some(end_offset) = response[start..].find("```") {
            let end = start + end_offset;
            return Ok(response[start..end].trim());
        }
    }

    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if end >= start {
                return Ok(&response[start..=end]);
            }
        }
    }

    Err(ClassifyError::Classification(
        "No JSON object found in response".to_string(),
    ))
}

/// Parse and validate the classification carried in the candidate text.
///
/// # Arguments
/// * `response` - candidate text from the API response
///
/// # Returns
/// * `Ok(Classification)` - a result that satisfies the taxonomy contract
/// * `Err` - no JSON found, malformed JSON, or a contract violation
pub fn parse_classification(response: &str) -> Result<Classification> {
    let json_str = extract_json(response)?;
    let classification: Classification = serde_json::from_str(json_str.trim())
        .map_err(|e| ClassifyError::Classification(format!("Malformed classification JSON: {}", e)))?;
    classification.validate()?;
    Ok(classification)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::WasteCategory;

    const VALID_RESPONSE: &str = r#"{"waste_type":"E-waste","confidence":0.92,"reasoning":"Visible circuit board","disposal_method":"Certified E-waste Recycler or Manufacturer Take-back Program"}"#;

    // =============================================
    // extract_json
    // =============================================

    #[test]
    fn test_extract_json_raw_object() {
        let json = extract_json(VALID_RESPONSE).unwrap();
        assert_eq!(json, VALID_RESPONSE);
    }

    #[test]
    fn test_extract_json_fenced_block() {
        let response = format!("Here is the result:\n```json\n{}\n```\nDone.", VALID_RESPONSE);
        let json = extract_json(&response).unwrap();
        assert_eq!(json, VALID_RESPONSE);
    }

    #[test]
    fn test_extract_json_with_surrounding_text() {
        let response = format!("The classification is {} as requested.", VALID_RESPONSE);
        let json = extract_json(&response).unwrap();
        assert_eq!(json, VALID_RESPONSE);
    }

    #[test]
    fn test_extract_json_error_on_plain_text() {
        let result = extract_json("No JSON here, just plain text.");
        assert!(result.is_err());
    }

    // =============================================
    // parse_classification
    // =============================================

    #[test]
    fn test_parse_valid_classification() {
        let classification = parse_classification(VALID_RESPONSE).unwrap();
        assert_eq!(classification.waste_type, "E-waste");
        assert_eq!(classification.confidence, 0.92);
        assert_eq!(classification.category(), WasteCategory::Ewaste);
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let err = parse_classification(r#"{"waste_type": "E-waste", "confidence":"#).unwrap_err();
        assert!(matches!(err, ClassifyError::Classification(_)));
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        // no disposal_method
        let response = r#"{"waste_type":"E-waste","confidence":0.9,"reasoning":"board"}"#;
        assert!(parse_classification(response).is_err());
    }

    #[test]
    fn test_parse_rejects_taxonomy_violation() {
        let response = r#"{"waste_type":"Quantum Waste","confidence":0.9,"reasoning":"?","disposal_method":"Recycling at a municipal facility"}"#;
        let err = parse_classification(response).unwrap_err();
        assert!(format!("{}", err).contains("Quantum Waste"));
    }

    #[test]
    fn test_parse_rejects_guidance_mismatch() {
        let response = r#"{"waste_type":"Hazardous Waste","confidence":0.8,"reasoning":"paint can","disposal_method":"Landfill or Incineration with energy recovery"}"#;
        let err = parse_classification(response).unwrap_err();
        assert!(format!("{}", err).contains("does not match"));
    }
}
