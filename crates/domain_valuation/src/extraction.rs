//! Field extraction from valuation notes
//!
//! A valuation note is an unstructured block of `Label: value` lines produced
//! by upstream document extraction. Nothing here parses a grammar: each field
//! is located by a case-insensitive labeled probe, and a label that is absent,
//! or followed by anything other than a numeric literal (`null`, `none`, free
//! text), leaves the field unset. A literal that fails to parse is skipped
//! without aborting the scan.

use core_kernel::Amount;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::audit::AuditTrail;
use crate::vocabulary::{
    BOL_FREIGHT_LABEL, GOODS_VALUE_LABELS, INSURANCE_LABEL, INVOICE_CHARGE_INDICATORS,
    INVOICE_FREIGHT_LABEL, INVOICE_TOTAL_WITH_FREIGHT_LABEL, OTHER_BOL_CHARGES_LABEL,
};

/// Grammar of a single numeric literal: integer part with optional
/// comma-grouped thousands and an optional exactly-two-digit fraction.
const NUMERIC_LITERAL: &str = r"\d+(?:,\d{3})*(?:\.\d{2})?";

static ALL_NUMBERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(NUMERIC_LITERAL).expect("numeric literal pattern compiles"));

/// A case-insensitive probe for one labeled field.
///
/// `anchor` detects the label anywhere in the note; `with_value` additionally
/// requires a colon and a numeric literal directly after it. The distinction
/// matters: a label followed by `null` is "explicitly unset", which some
/// fields must audit differently from "label never present".
#[derive(Debug)]
struct LabeledProbe {
    label: &'static str,
    anchor: Regex,
    with_value: Regex,
}

impl LabeledProbe {
    fn new(label: &'static str) -> Self {
        let escaped = regex::escape(label);
        Self {
            label,
            anchor: Regex::new(&format!(r"(?i){escaped}"))
                .expect("fixed vocabulary patterns compile"),
            with_value: Regex::new(&format!(r"(?i){escaped}\s*:\s*({NUMERIC_LITERAL})"))
                .expect("fixed vocabulary patterns compile"),
        }
    }

    /// Returns true if the label appears anywhere in the note
    fn is_present(&self, note: &str) -> bool {
        self.anchor.is_match(note)
    }

    /// Returns the byte offset of the label's first occurrence
    fn position(&self, note: &str) -> Option<usize> {
        self.anchor.find(note).map(|m| m.start())
    }

    /// Extracts the literal following `label:`, if present and parseable
    fn amount(&self, note: &str) -> Option<Amount> {
        let captures = self.with_value.captures(note)?;
        Amount::parse_literal(captures.get(1)?.as_str()).ok()
    }
}

static GOODS_VALUE_PROBES: Lazy<Vec<LabeledProbe>> =
    Lazy::new(|| GOODS_VALUE_LABELS.iter().copied().map(LabeledProbe::new).collect());
static INVOICE_TOTAL_PROBE: Lazy<LabeledProbe> =
    Lazy::new(|| LabeledProbe::new(INVOICE_TOTAL_WITH_FREIGHT_LABEL));
static BOL_FREIGHT_PROBE: Lazy<LabeledProbe> = Lazy::new(|| LabeledProbe::new(BOL_FREIGHT_LABEL));
static INVOICE_FREIGHT_PROBE: Lazy<LabeledProbe> =
    Lazy::new(|| LabeledProbe::new(INVOICE_FREIGHT_LABEL));
static INSURANCE_PROBE: Lazy<LabeledProbe> = Lazy::new(|| LabeledProbe::new(INSURANCE_LABEL));
static OTHER_BOL_CHARGES_PROBE: Lazy<LabeledProbe> =
    Lazy::new(|| LabeledProbe::new(OTHER_BOL_CHARGES_LABEL));
static CHARGE_INDICATOR_PROBES: Lazy<Vec<LabeledProbe>> = Lazy::new(|| {
    INVOICE_CHARGE_INDICATORS
        .iter()
        .copied()
        .map(LabeledProbe::new)
        .collect()
});

/// The optional monetary fields recognized in a valuation note.
///
/// Each value, if present, is a non-negative decimal. A field explicitly
/// marked `null`/`none`/`nil` in the note, or carrying a zero where the
/// business rules treat zero as "not stated", extracts to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    /// Goods-only value of the consignment (the "cost" in CIF)
    pub goods_value: Option<Amount>,
    /// Invoice total known to bundle freight into one figure
    pub invoice_total_with_freight: Option<Amount>,
    /// Freight itemized on the bill of lading
    pub bol_freight: Option<Amount>,
    /// Freight itemized on the commercial invoice
    pub invoice_freight: Option<Amount>,
    /// Explicitly stated insurance
    pub insurance: Option<Amount>,
    /// Non-CIF charges from the bill of lading, reported for audit only
    pub other_bol_charges: Option<Amount>,
    /// Invoice-side charges that belong in the CIF total
    pub invoice_charges: Option<Amount>,
}

/// Scans a valuation note and returns every recognized field.
///
/// The scan order matches the downstream pipeline's needs: the bundled
/// invoice total is located first because freight disaggregation depends on
/// it, then the goods value, the competing freight fields, insurance, and
/// finally the charge blocks. Every extraction and every notable miss appends
/// one line to the audit trail.
pub fn extract_fields(note: &str, audit: &mut AuditTrail) -> ExtractedFields {
    let mut fields = ExtractedFields::default();

    fields.invoice_total_with_freight = extract_invoice_total(note, audit);
    fields.goods_value = extract_goods_value(note, audit);
    fields.bol_freight = extract_bol_freight(note, audit);
    fields.invoice_freight = extract_invoice_freight(note, audit);
    fields.insurance = extract_insurance(note, audit);
    fields.other_bol_charges = extract_other_bol_charges(note, audit);
    fields.invoice_charges = extract_invoice_charges(note, audit);

    fields
}

fn extract_invoice_total(note: &str, audit: &mut AuditTrail) -> Option<Amount> {
    let total = INVOICE_TOTAL_PROBE.amount(note)?;
    audit.record(format!("Invoice total with freight: {total}"));
    Some(total)
}

fn extract_goods_value(note: &str, audit: &mut AuditTrail) -> Option<Amount> {
    for probe in GOODS_VALUE_PROBES.iter() {
        if let Some(goods) = probe.amount(note) {
            audit.record(format!("Goods value extracted: {goods}"));
            return Some(goods);
        }
    }
    infer_goods_value_from_largest_literal(note, audit)
}

/// Best-effort fallback when no goods-value label matched: take the largest
/// numeric literal anywhere in the note. This is a heuristic with no
/// correctness guarantee (an unrelated large figure can win), which is why it
/// is audited as an inference and kept out of the labeled extraction path.
fn infer_goods_value_from_largest_literal(note: &str, audit: &mut AuditTrail) -> Option<Amount> {
    let largest = all_literals(note).into_iter().max()?;
    audit.record(format!(
        "Goods value inferred from largest value: {largest}"
    ));
    Some(largest)
}

fn extract_bol_freight(note: &str, audit: &mut AuditTrail) -> Option<Amount> {
    if !BOL_FREIGHT_PROBE.is_present(note) {
        return None;
    }
    match BOL_FREIGHT_PROBE.amount(note) {
        Some(freight) if freight.is_positive() => {
            audit.record(format!("Freight from BOL: {freight}"));
            Some(freight)
        }
        _ => {
            // Present but null, zero, or unparseable: explicitly not stated.
            audit.record("BOL freight explicitly marked as null/none");
            None
        }
    }
}

fn extract_invoice_freight(note: &str, audit: &mut AuditTrail) -> Option<Amount> {
    if !INVOICE_FREIGHT_PROBE.is_present(note) {
        audit.record("No invoice freight field found");
        return None;
    }
    match INVOICE_FREIGHT_PROBE.amount(note) {
        Some(freight) if freight.is_positive() => {
            audit.record(format!("Invoice freight found: {freight}"));
            Some(freight)
        }
        _ => {
            audit.record("Invoice freight explicitly marked as null/none");
            None
        }
    }
}

fn extract_insurance(note: &str, audit: &mut AuditTrail) -> Option<Amount> {
    match INSURANCE_PROBE.amount(note) {
        Some(insurance) if insurance.is_positive() => {
            audit.record(format!("Insurance extracted: {insurance}"));
            Some(insurance)
        }
        // Absent, null, or zero: leave unset so the estimator runs.
        _ => None,
    }
}

/// Sums every literal from the "Other charges (BOL)" label to the end of the
/// note. These charges are excluded from the CIF total but reported for a
/// complete cost picture.
fn extract_other_bol_charges(note: &str, audit: &mut AuditTrail) -> Option<Amount> {
    let start = OTHER_BOL_CHARGES_PROBE.position(note)?;
    let literals = all_literals(&note[start..]);
    if literals.is_empty() {
        return None;
    }
    let total: Amount = literals.into_iter().sum();
    audit.record(format!(
        "Other BOL charges (excluded from CIF): {total}"
    ));
    Some(total)
}

/// Probes each charge indicator once and sums every positive match.
fn extract_invoice_charges(note: &str, audit: &mut AuditTrail) -> Option<Amount> {
    let mut total = Amount::zero();
    let mut matched = false;

    for probe in CHARGE_INDICATOR_PROBES.iter() {
        if let Some(charge) = probe.amount(note) {
            if charge.is_positive() {
                total = total + charge;
                matched = true;
                audit.record(format!("Invoice charge ({}): {charge}", probe.label));
            }
        }
    }

    if matched {
        audit.record(format!("Total invoice charges included in CIF: {total}"));
        Some(total)
    } else {
        audit.record("No additional invoice charges found");
        None
    }
}

/// Collects every parseable literal in the given text, in match order.
fn all_literals(text: &str) -> Vec<Amount> {
    ALL_NUMBERS
        .find_iter(text)
        .filter_map(|m| Amount::parse_literal(m.as_str()).ok())
        .collect()
}
