//! Waste taxonomy
//!
//! The six categories the classifier recognizes, each paired with exactly
//! one prescribed disposal method. The pairing is the contract the model
//! response is validated against; it is never derived from the response.

/// The closed set of waste categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WasteCategory {
    Biodegradable,
    Recyclable,
    NonRecyclable,
    Hazardous,
    Biomedical,
    Ewaste,
}

impl WasteCategory {
    /// All categories in presentation order.
    pub const ALL: [WasteCategory; 6] = [
        WasteCategory::Biodegradable,
        WasteCategory::Recyclable,
        WasteCategory::NonRecyclable,
        WasteCategory::Hazardous,
        WasteCategory::Biomedical,
        WasteCategory::Ewaste,
    ];

    /// 1-based display number.
    pub fn number(self) -> u8 {
        match self {
            WasteCategory::Biodegradable => 1,
            WasteCategory::Recyclable => 2,
            WasteCategory::NonRecyclable => 3,
            WasteCategory::Hazardous => 4,
            WasteCategory::Biomedical => 5,
            WasteCategory::Ewaste => 6,
        }
    }

    /// Canonical label, as the instruction asks the model to return it.
    pub fn label(self) -> &'static str {
        match self {
            WasteCategory::Biodegradable => "Biodegradable Waste",
            WasteCategory::Recyclable => "Recyclable Waste",
            WasteCategory::NonRecyclable => "Non-Recyclable Waste",
            WasteCategory::Hazardous => "Hazardous Waste",
            WasteCategory::Biomedical => "Biomedical Waste",
            WasteCategory::Ewaste => "E-waste",
        }
    }

    /// The single prescribed disposal method for this category.
    pub fn disposal_method(self) -> &'static str {
        match self {
            WasteCategory::Biodegradable => {
                "Composting or Anaerobic Digestion (for biogas/fertilizer)"
            }
            WasteCategory::Recyclable => "Recycling at a municipal facility",
            WasteCategory::NonRecyclable => "Landfill or Incineration with energy recovery",
            WasteCategory::Hazardous => {
                "Take to a designated Hazardous Waste Collection Center (Neutralization/Stabilization)"
            }
            WasteCategory::Biomedical => {
                "Specialized Medical Waste Disposal (Autoclaving or Incineration)"
            }
            WasteCategory::Ewaste => "Certified E-waste Recycler or Manufacturer Take-back Program",
        }
    }

    /// Example items listed after the label in the instruction text.
    pub fn prompt_hint(self) -> Option<&'static str> {
        match self {
            WasteCategory::Biodegradable => None,
            WasteCategory::Recyclable => Some("Paper, Glass, Metal, non-PVC/PS Plastics"),
            WasteCategory::NonRecyclable => Some("Contaminated or unrecyclable items"),
            WasteCategory::Hazardous => Some("Batteries, Paint, Chemicals"),
            WasteCategory::Biomedical => Some("Infectious"),
            WasteCategory::Ewaste => Some("Electronics, phones"),
        }
    }

    /// CSS class suffix for result styling.
    pub fn css_class(self) -> &'static str {
        match self {
            WasteCategory::Biodegradable => "biodegradable",
            WasteCategory::Recyclable => "recyclable",
            WasteCategory::NonRecyclable => "nonrecyclable",
            WasteCategory::Hazardous => "hazardous",
            WasteCategory::Biomedical => "biomedical",
            WasteCategory::Ewaste => "ewaste",
        }
    }

    /// Match a model-returned label against the taxonomy.
    ///
    /// The label is case-folded, the word "waste" is stripped, and hyphens
    /// and whitespace are removed before matching, so "e-waste", "E-Waste"
    /// and "Ewaste" all resolve to the same category.
    ///
    /// # Arguments
    /// * `raw` - label as returned by the model
    ///
    /// # Returns
    /// The matching category, or `None` if the normalized label is not in
    /// the taxonomy
    pub fn from_loose_label(raw: &str) -> Option<Self> {
        let key = normalize_label(raw);
        WasteCategory::ALL
            .into_iter()
            .find(|c| c.css_class() == key)
    }

    /// Presentation lookup: unrecognized labels fall back to
    /// Non-Recyclable styling. The verbatim label is still displayed.
    pub fn from_label_or_default(raw: &str) -> Self {
        Self::from_loose_label(raw).unwrap_or(WasteCategory::NonRecyclable)
    }

    /// Quoted category labels as one enumeration, e.g.
    /// `'Biodegradable Waste', ..., or 'E-waste'`. Used by the instruction
    /// text and the response schema.
    pub fn enumerated_labels() -> String {
        let labels: Vec<String> = Self::ALL.iter().map(|c| format!("'{}'", c.label())).collect();
        let (last, init) = labels.split_last().expect("taxonomy is non-empty");
        format!("{}, or {}", init.join(", "), last)
    }
}

fn normalize_label(raw: &str) -> String {
    raw.to_lowercase()
        .replace(" waste", "")
        .replace('-', "")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // Label normalization
    // =============================================

    #[test]
    fn test_from_loose_label_canonical() {
        for category in WasteCategory::ALL {
            assert_eq!(WasteCategory::from_loose_label(category.label()), Some(category));
        }
    }

    #[test]
    fn test_from_loose_label_case_insensitive() {
        assert_eq!(
            WasteCategory::from_loose_label("BIODEGRADABLE WASTE"),
            Some(WasteCategory::Biodegradable)
        );
        assert_eq!(
            WasteCategory::from_loose_label("e-WASTE"),
            Some(WasteCategory::Ewaste)
        );
    }

    #[test]
    fn test_from_loose_label_hyphen_and_spacing_variants() {
        assert_eq!(
            WasteCategory::from_loose_label("NonRecyclable Waste"),
            Some(WasteCategory::NonRecyclable)
        );
        assert_eq!(
            WasteCategory::from_loose_label("Ewaste"),
            Some(WasteCategory::Ewaste)
        );
        assert_eq!(
            WasteCategory::from_loose_label("  Hazardous   Waste  "),
            Some(WasteCategory::Hazardous)
        );
    }

    #[test]
    fn test_from_loose_label_unknown() {
        assert_eq!(WasteCategory::from_loose_label("Nuclear Waste"), None);
        assert_eq!(WasteCategory::from_loose_label(""), None);
    }

    #[test]
    fn test_from_label_or_default_falls_back() {
        assert_eq!(
            WasteCategory::from_label_or_default("Mystery Item"),
            WasteCategory::NonRecyclable
        );
    }

    // =============================================
    // Guidance table
    // =============================================

    #[test]
    fn test_numbers_are_one_through_six() {
        let numbers: Vec<u8> = WasteCategory::ALL.iter().map(|c| c.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_disposal_methods_are_distinct() {
        let mut methods: Vec<&str> = WasteCategory::ALL
            .iter()
            .map(|c| c.disposal_method())
            .collect();
        methods.sort();
        methods.dedup();
        assert_eq!(methods.len(), 6);
    }

    #[test]
    fn test_enumerated_labels() {
        let enumerated = WasteCategory::enumerated_labels();
        assert!(enumerated.starts_with("'Biodegradable Waste', "));
        assert!(enumerated.ends_with(", or 'E-waste'"));
        for category in WasteCategory::ALL {
            assert!(enumerated.contains(category.label()));
        }
    }

    #[test]
    fn test_ewaste_guidance() {
        assert_eq!(
            WasteCategory::Ewaste.disposal_method(),
            "Certified E-waste Recycler or Manufacturer Take-back Program"
        );
    }
}
