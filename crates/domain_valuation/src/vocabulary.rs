//! Fixed vocabulary for valuation-note scanning
//!
//! Upstream extraction emits `Label: value` lines with a known spelling, so
//! the label text is effectively part of the interface contract. Everything
//! the scanner looks for lives in this module as a named table; control flow
//! elsewhere never embeds a literal label.

/// Labels that identify the goods-only value of the consignment.
///
/// Probed in order; the first label with a parseable value wins.
pub const GOODS_VALUE_LABELS: &[&str] = &[
    "Invoice value (goods only)",
    "Goods value",
    "Commercial value",
    "Base price",
    "Subtotal",
    "Line item total",
];

/// Label for an invoice total that bundles freight into one figure.
pub const INVOICE_TOTAL_WITH_FREIGHT_LABEL: &str = "Invoice total (including freight)";

/// Label for freight itemized on the bill of lading.
pub const BOL_FREIGHT_LABEL: &str = "Freight charges (BOL)";

/// Label for freight itemized on the commercial invoice.
pub const INVOICE_FREIGHT_LABEL: &str = "Freight charges (invoice)";

/// Label for explicitly stated insurance.
pub const INSURANCE_LABEL: &str = "Insurance charges";

/// Label introducing the non-CIF charges block on the bill of lading.
pub const OTHER_BOL_CHARGES_LABEL: &str = "Other charges (BOL)";

/// Indicator words for invoice-side charges that belong in the CIF total.
///
/// Each indicator is probed once as an `INDICATOR: <number>` labeled field.
pub const INVOICE_CHARGE_INDICATORS: &[&str] = &[
    "TAX",
    "SHIPPING",
    "HANDLING",
    "PROCESSING",
    "ADMINISTRATIVE",
    "DOCUMENTATION",
    "CUSTOMS",
    "DUTY",
    "EXCISE",
];

/// Transport-mode codes that map to the sea insurance rate.
pub const SEA_TRANSPORT_CODES: &[&str] = &["SEA", "OCEAN", "MARITIME", "VESSEL", "SHIP"];

/// Transport-mode codes that map to the air insurance rate.
pub const AIR_TRANSPORT_CODES: &[&str] = &["AIR", "AIRFREIGHT", "AIRWAY", "FLIGHT"];

/// Whole-note values that mean "no data", after trimming, case-insensitive.
pub const NULL_LIKE_NOTES: &[&str] = &["null", "none", "n/a"];
