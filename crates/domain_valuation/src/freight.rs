//! Freight-source resolution
//!
//! A note can carry up to three competing freight signals: an itemized BOL
//! figure, an itemized invoice figure, and an implied amount recoverable from
//! a freight-inclusive invoice total. Exactly one figure is chosen per note,
//! with its provenance recorded; the precedence chain never produces a
//! negative amount.

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::Amount;

use crate::audit::AuditTrail;
use crate::extraction::ExtractedFields;

/// Provenance of the freight figure used in the CIF total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FreightSource {
    /// Itemized on the bill of lading
    #[serde(rename = "BOL")]
    Bol,
    /// Itemized on the commercial invoice
    #[serde(rename = "Invoice")]
    Invoice,
    /// Disaggregated from a freight-inclusive invoice total
    #[serde(rename = "Calculated (disaggregated)")]
    Calculated,
    /// No usable freight signal in the note
    #[serde(rename = "None found")]
    NoneFound,
}

impl fmt::Display for FreightSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FreightSource::Bol => "BOL",
            FreightSource::Invoice => "Invoice",
            FreightSource::Calculated => "Calculated (disaggregated)",
            FreightSource::NoneFound => "None found",
        };
        write!(f, "{name}")
    }
}

/// The single freight decision made for a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreightResolution {
    /// The freight amount used in the CIF total (zero when none found)
    pub amount: Amount,
    /// Where the amount came from
    pub source: FreightSource,
    /// True when the amount was recovered by subtracting goods value from a
    /// freight-inclusive invoice total
    pub disaggregation_applied: bool,
}

impl FreightResolution {
    fn none_found(audit: &mut AuditTrail) -> Self {
        audit.record("No freight charges found - set to 0");
        Self {
            amount: Amount::zero(),
            source: FreightSource::NoneFound,
            disaggregation_applied: false,
        }
    }
}

/// Chooses one freight figure from the extracted fields.
///
/// Decision order, first match wins:
/// 1. explicit BOL freight;
/// 2. explicit invoice freight;
/// 3. disaggregation, when a freight-inclusive invoice total exceeds the
///    goods value;
/// 4. none found, amount zero.
///
/// An invoice total that is not strictly greater than the goods value cannot
/// be disaggregated; the chain falls through to "none found" rather than
/// emitting zero or negative freight.
pub fn resolve_freight(fields: &ExtractedFields, audit: &mut AuditTrail) -> FreightResolution {
    if let Some(bol) = fields.bol_freight {
        audit.record(format!("BOL freight used for CIF calculation: {bol}"));
        return FreightResolution {
            amount: bol,
            source: FreightSource::Bol,
            disaggregation_applied: false,
        };
    }

    if let Some(invoice) = fields.invoice_freight {
        audit.record(format!("Invoice freight used for CIF calculation: {invoice}"));
        return FreightResolution {
            amount: invoice,
            source: FreightSource::Invoice,
            disaggregation_applied: false,
        };
    }

    if let (Some(total), Some(goods)) = (fields.invoice_total_with_freight, fields.goods_value) {
        match total.checked_sub(&goods) {
            Ok(diff) if diff.is_positive() => {
                audit.record(format!(
                    "Freight disaggregated from invoice total: {diff} \
                     (Invoice total: {total} - Goods value: {goods})"
                ));
                return FreightResolution {
                    amount: diff,
                    source: FreightSource::Calculated,
                    disaggregation_applied: true,
                };
            }
            _ => return FreightResolution::none_found(audit),
        }
    }

    FreightResolution::none_found(audit)
}
