//! Core Kernel - Foundational types and utilities for the customs valuation system
//!
//! This crate provides the fundamental building blocks used across the domain modules:
//! - Monetary amounts with precise decimal arithmetic
//! - Percentage rates for derived charges
//! - Parsing for the formatted numeric literals found in valuation notes

pub mod money;

pub use money::{Amount, AmountError, Rate};
