//! Valuation domain services
//!
//! [`ValuationService`] runs the single-pass pipeline over one note:
//! extraction, freight resolution, insurance estimation, totaling, and
//! validation, each stage appending to the shared audit trail. The service
//! holds no per-call state, so one instance can be shared across threads and
//! called concurrently.

use rust_decimal_macros::dec;
use tracing::instrument;

use core_kernel::Amount;

use crate::audit::AuditTrail;
use crate::extraction::extract_fields;
use crate::freight::{resolve_freight, FreightResolution};
use crate::insurance::estimate_insurance;
use crate::report::{CifBreakdown, FreightAnalysis, ProcessingSummary, ValuationReport};
use crate::vocabulary::NULL_LIKE_NOTES;

/// Processes valuation notes into CIF reports.
pub struct ValuationService;

impl ValuationService {
    /// Creates a new valuation service
    pub fn new() -> Self {
        Self
    }

    /// Processes one valuation note.
    ///
    /// This method:
    /// 1. Short-circuits empty or null-like input to the empty report
    /// 2. Extracts every recognized field from the note
    /// 3. Resolves a single freight figure with provenance
    /// 4. Derives insurance from the transport mode when none is stated
    /// 5. Totals the present components into a CIF figure
    /// 6. Sanity-checks the result, annotating rather than failing
    ///
    /// # Arguments
    ///
    /// * `note` - The raw valuation note text from upstream extraction
    /// * `transport_mode` - Transport-mode code from the external classifier
    ///   (e.g. "SEA", "AIR", "ROAD"), if one is known
    ///
    /// # Returns
    ///
    /// A [`ValuationReport`]; this method never fails for malformed input —
    /// anomalies degrade to defaults plus audit notes.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let service = ValuationService::new();
    /// let report = service.process("Goods value: 1000\nFreight charges (BOL): 100", Some("SEA"));
    /// assert!(report.total_cif().is_some());
    /// ```
    #[instrument(skip_all, fields(note_len = note.len(), transport_mode = ?transport_mode))]
    pub fn process(&self, note: &str, transport_mode: Option<&str>) -> ValuationReport {
        if is_null_like(note) {
            return ValuationReport::empty(note, "No valuation note data provided");
        }

        let mut audit = AuditTrail::new();

        let fields = extract_fields(note, &mut audit);
        let freight = resolve_freight(&fields, &mut audit);

        let insurance = match fields.insurance {
            Some(stated) => stated,
            None => estimate_insurance(fields.goods_value, transport_mode, &mut audit),
        };

        // Invoice charges default to zero in the breakdown once a note has
        // been processed; "absent" and "zero" read the same to the totaler.
        let invoice_charges = fields.invoice_charges.unwrap_or_else(Amount::zero);

        let total_cif = compute_total(
            fields.goods_value,
            Some(insurance),
            Some(freight.amount),
            invoice_charges,
            &mut audit,
        );

        let breakdown = CifBreakdown {
            cost: fields.goods_value,
            insurance: Some(insurance),
            freight: Some(freight.amount),
            invoice_charges: Some(invoice_charges),
            total_cif,
        };

        validate(&breakdown, &freight, &mut audit);

        let components_extracted = [breakdown.cost, breakdown.insurance, breakdown.freight]
            .iter()
            .filter(|c| c.is_some())
            .count();

        ValuationReport {
            freight_analysis: FreightAnalysis {
                freight_source: freight.source,
                disaggregation_applied: freight.disaggregation_applied,
                other_bol_charges: fields.other_bol_charges,
            },
            processing_summary: ProcessingSummary {
                components_extracted,
                total_calculated: breakdown.total_cif.is_some(),
                processing_notes: audit.into_notes(),
            },
            cif_breakdown: breakdown,
            raw_input: note.to_string(),
        }
    }
}

impl Default for ValuationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns just the CIF total for a note, zero when none could be computed.
///
/// Convenience for callers that only fill the declaration's value box and do
/// not need the full report.
pub fn direct_cif_value(note: &str, transport_mode: Option<&str>) -> Amount {
    ValuationService::new()
        .process(note, transport_mode)
        .total_cif()
        .unwrap_or_else(Amount::zero)
}

/// True for input that means "no note at all": empty after trimming, or one
/// of the null-like words upstream extraction emits for missing documents.
fn is_null_like(note: &str) -> bool {
    let trimmed = note.trim();
    trimmed.is_empty() || NULL_LIKE_NOTES.contains(&trimmed.to_lowercase().as_str())
}

/// Sums the present components into a rounded CIF total.
///
/// Invoice charges join the sum only when positive. When no component is
/// present at all, the goods value alone stands in as the total; with no
/// goods value either, the total stays unset.
fn compute_total(
    cost: Option<Amount>,
    insurance: Option<Amount>,
    freight: Option<Amount>,
    invoice_charges: Amount,
    audit: &mut AuditTrail,
) -> Option<Amount> {
    let mut components: Vec<Amount> = [cost, insurance, freight].into_iter().flatten().collect();

    if invoice_charges.is_positive() {
        audit.record(format!("Invoice charges included in CIF: {invoice_charges}"));
        components.push(invoice_charges);
    }

    if !components.is_empty() {
        let total = components.into_iter().sum::<Amount>().rounded();
        audit.record(format!("Total CIF calculated: {total}"));
        Some(total)
    } else if let Some(goods) = cost {
        audit.record("Using goods value as total CIF");
        Some(goods)
    } else {
        None
    }
}

/// Sanity-checks the finished breakdown, appending warnings and notes.
///
/// This stage never fails the run; out-of-range totals are the caller's
/// decision to act on.
fn validate(breakdown: &CifBreakdown, freight: &FreightResolution, audit: &mut AuditTrail) {
    if breakdown.cost.is_none() && breakdown.insurance.is_none() && breakdown.freight.is_none() {
        audit.warning("No CIF components could be extracted");
    }

    if let Some(total) = breakdown.total_cif {
        if !total.is_positive() {
            audit.warning("Total CIF value is zero or negative");
        } else if total.value() > dec!(1000000) {
            audit.notice("Total CIF value exceeds 1 million");
        }
    }

    if freight.disaggregation_applied {
        audit.notice("Freight costs were disaggregated from invoice total");
    }

    if freight.amount.is_positive() {
        audit.record(format!("Freight source: {}", freight.source));
    }
}
