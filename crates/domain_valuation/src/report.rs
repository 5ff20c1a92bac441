//! Output contract of the valuation engine
//!
//! One [`ValuationReport`] is produced per note: the numeric breakdown, the
//! freight decision, a processing summary with the ordered audit trail, and
//! the raw note echoed for audit. All types serialize to the JSON shape
//! consumed by the declaration assembly layer.

use serde::{Deserialize, Serialize};

use core_kernel::Amount;

use crate::freight::FreightSource;

/// The numeric CIF components for one note.
///
/// `total_cif` is the rounded sum of the present components; it stays unset
/// only when nothing at all could be extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CifBreakdown {
    /// Goods-only value (cost)
    pub cost: Option<Amount>,
    /// Stated or derived insurance
    pub insurance: Option<Amount>,
    /// Resolved freight
    pub freight: Option<Amount>,
    /// Invoice-side charges included in the total
    pub invoice_charges: Option<Amount>,
    /// The CIF total
    pub total_cif: Option<Amount>,
}

/// How the freight figure was arrived at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreightAnalysis {
    /// Provenance of the freight figure
    pub freight_source: FreightSource,
    /// True when freight was recovered from a bundled invoice total
    pub disaggregation_applied: bool,
    /// BOL charges reported for audit but excluded from the total
    pub other_bol_charges: Option<Amount>,
}

/// Run-level bookkeeping for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingSummary {
    /// How many of cost/insurance/freight ended up set
    pub components_extracted: usize,
    /// Whether a CIF total was produced
    pub total_calculated: bool,
    /// The ordered audit trail
    pub processing_notes: Vec<String>,
}

/// The complete result of processing one valuation note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuationReport {
    pub cif_breakdown: CifBreakdown,
    pub freight_analysis: FreightAnalysis,
    pub processing_summary: ProcessingSummary,
    /// The note as received, echoed for audit
    pub raw_input: String,
}

impl ValuationReport {
    /// The empty variant returned for absent or null-like input.
    pub fn empty(raw_input: &str, reason: impl Into<String>) -> Self {
        Self {
            cif_breakdown: CifBreakdown {
                cost: None,
                insurance: None,
                freight: None,
                invoice_charges: None,
                total_cif: None,
            },
            freight_analysis: FreightAnalysis {
                freight_source: FreightSource::NoneFound,
                disaggregation_applied: false,
                other_bol_charges: None,
            },
            processing_summary: ProcessingSummary {
                components_extracted: 0,
                total_calculated: false,
                processing_notes: vec![reason.into()],
            },
            raw_input: raw_input.to_string(),
        }
    }

    /// Convenience accessor for the CIF total.
    pub fn total_cif(&self) -> Option<Amount> {
        self.cif_breakdown.total_cif
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_shape() {
        let report = ValuationReport::empty("", "No valuation note data provided");
        assert_eq!(report.cif_breakdown.total_cif, None);
        assert_eq!(report.processing_summary.components_extracted, 0);
        assert!(!report.processing_summary.total_calculated);
        assert_eq!(
            report.processing_summary.processing_notes,
            ["No valuation note data provided"]
        );
    }

    #[test]
    fn test_empty_report_echoes_raw_input() {
        let report = ValuationReport::empty("n/a", "No valuation note data provided");
        assert_eq!(report.raw_input, "n/a");
    }

    #[test]
    fn test_report_serializes_with_contract_keys() {
        let report = ValuationReport::empty("", "nothing");
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("cif_breakdown").is_some());
        assert!(json.get("freight_analysis").is_some());
        assert!(json.get("processing_summary").is_some());
        assert!(json.get("raw_input").is_some());
        assert_eq!(
            json["freight_analysis"]["freight_source"],
            "None found"
        );
    }
}
