//! Insurance estimation by transport mode
//!
//! When a note states no insurance, the engine derives one as a percentage of
//! the goods value, keyed by how the consignment travelled. The transport-mode
//! code is supplied by an external classifier; this module only buckets it.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Amount, Rate};

use crate::audit::AuditTrail;
use crate::vocabulary::{AIR_TRANSPORT_CODES, SEA_TRANSPORT_CODES};

/// Insurance-rate bucket for a transport-mode code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportMode {
    /// Sea carriage (SEA, OCEAN, MARITIME, VESSEL, SHIP)
    Sea,
    /// Air carriage (AIR, AIRFREIGHT, AIRWAY, FLIGHT)
    Air,
    /// Road, rail, or any unrecognized code
    Other,
}

impl TransportMode {
    /// Buckets a transport-mode code, case-insensitively.
    pub fn classify(code: &str) -> Self {
        let code = code.trim().to_uppercase();
        if SEA_TRANSPORT_CODES.contains(&code.as_str()) {
            TransportMode::Sea
        } else if AIR_TRANSPORT_CODES.contains(&code.as_str()) {
            TransportMode::Air
        } else {
            TransportMode::Other
        }
    }

    /// The insurance rate applied to the goods value for this bucket.
    pub fn insurance_rate(&self) -> Rate {
        match self {
            TransportMode::Sea => Rate::new(dec!(0.015)),
            TransportMode::Air | TransportMode::Other => Rate::new(dec!(0.01)),
        }
    }
}

/// Derives an insurance figure when the note states none.
///
/// Returns zero (with an audit note) when no transport mode was supplied or
/// when there is no positive goods value to rate against. Otherwise the
/// bucket's rate is applied to the goods value and the product rounded to
/// 2 decimal places, half away from zero.
pub fn estimate_insurance(
    goods_value: Option<Amount>,
    transport_mode: Option<&str>,
    audit: &mut AuditTrail,
) -> Amount {
    let Some(code) = transport_mode else {
        audit.record("No transport mode provided, insurance set to 0");
        return Amount::zero();
    };

    let Some(goods) = goods_value.filter(Amount::is_positive) else {
        audit.record("No goods value available for insurance calculation");
        return Amount::zero();
    };

    let mode = TransportMode::classify(code);
    let rate = mode.insurance_rate();
    let insurance = rate.apply(&goods).rounded();

    match mode {
        TransportMode::Sea => audit.record(format!(
            "Insurance calculated for sea transport: {goods} x {rate} = {insurance}"
        )),
        TransportMode::Air => audit.record(format!(
            "Insurance calculated for air transport: {goods} x {rate} = {insurance}"
        )),
        TransportMode::Other => audit.record(format!(
            "Insurance calculated for {} transport (default rate): {goods} x {rate} = {insurance}",
            code.trim().to_uppercase()
        )),
    }

    insurance
}
