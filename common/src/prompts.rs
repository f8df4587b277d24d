//! Prompt generation
//!
//! Builds the fixed classification instruction from the taxonomy so the
//! category list, the disposal guidance and the validation logic can never
//! drift apart.

use crate::category::WasteCategory;

/// Build the classification instruction sent with every image.
///
/// Enumerates the six categories, prescribes exactly one disposal method
/// per category, and demands a single JSON object with the four expected
/// fields.
pub fn classification_prompt() -> String {
    let categories = WasteCategory::enumerated_labels();

    let guidance = WasteCategory::ALL
        .iter()
        .map(|c| {
            let hint = c
                .prompt_hint()
                .map(|h| format!(" ({})", h))
                .unwrap_or_default();
            format!(
                "{}. {}{}: Use '{}'.",
                c.number(),
                c.label(),
                hint,
                c.disposal_method()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"Analyze the image and classify the waste into one of the following six categories: {categories}.
Based on the classification, determine the single most 'Optimal Disposal Method'. Use the following guidelines strictly:
{guidance}
Respond ONLY with a valid JSON object containing 'waste_type', 'confidence', 'reasoning', and 'disposal_method' (which must be a string from the guidance above)."#
    )
}
