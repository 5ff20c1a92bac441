//! Monetary amounts with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values in the
//! declaration's reporting currency, using rust_decimal for precise
//! calculations without floating-point errors. Valuation notes carry a single
//! currency per note; conversion happens upstream, so `Amount` is deliberately
//! currency-less.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when constructing or combining amounts
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("Not a monetary literal: {0}")]
    InvalidLiteral(String),

    #[error("Amount would be negative: {0}")]
    Negative(String),
}

/// A monetary amount in the reporting currency
///
/// Amounts are backed by `rust_decimal` so that extraction and totaling stay
/// exact and reproducible. Rounding is never implicit: callers that need a
/// 2-decimal figure (derived insurance, CIF totals) call [`Amount::rounded`],
/// which rounds half away from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// Creates a new amount from a decimal value
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self(dec!(0))
    }

    /// Returns the underlying decimal value
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Rounds to 2 decimal places, half away from zero
    ///
    /// This is the reporting convention for every derived figure in the
    /// valuation engine: `20.985` rounds to `20.99`, never `20.98`.
    pub fn rounded(&self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Checked subtraction that refuses to go below zero
    ///
    /// Freight disaggregation subtracts goods value from an invoice total;
    /// a negative difference means the figures cannot be reconciled, so the
    /// subtraction is rejected rather than producing a negative charge.
    pub fn checked_sub(&self, other: &Amount) -> Result<Amount, AmountError> {
        if other.0 > self.0 {
            return Err(AmountError::Negative(format!("{} - {}", self.0, other.0)));
        }
        Ok(Self(self.0 - other.0))
    }

    /// Parses a formatted numeric literal as an amount
    ///
    /// Accepts the literal grammar used by valuation notes: digits with
    /// optional comma-grouped thousands and an optional two-digit fraction
    /// (`1,399`, `211.71`). Thousands separators are stripped before parsing.
    pub fn parse_literal(literal: &str) -> Result<Amount, AmountError> {
        let cleaned = literal.replace(',', "");
        let value = Decimal::from_str(cleaned.trim())
            .map_err(|_| AmountError::InvalidLiteral(literal.to_string()))?;
        if value.is_sign_negative() {
            return Err(AmountError::Negative(literal.to_string()));
        }
        Ok(Self(value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::zero(), Add::add)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Amount::parse_literal(s)
    }
}

/// Represents a percentage rate (e.g., an insurance rate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate {
    /// The rate as a decimal (e.g., 0.015 for 1.5%)
    value: Decimal,
}

impl Rate {
    /// Creates a rate from a decimal value (e.g., 0.015 for 1.5%)
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Creates a rate from a percentage (e.g., 1.5 for 1.5%)
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self {
            value: percentage / dec!(100),
        }
    }

    /// Returns the rate as a decimal
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Returns the rate as a percentage
    pub fn as_percentage(&self) -> Decimal {
        self.value * dec!(100)
    }

    /// Applies this rate to an amount
    ///
    /// The product is exact; callers round when reporting.
    pub fn apply(&self, amount: &Amount) -> Amount {
        Amount::new(amount.value() * self.value)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().normalize())
    }
}
