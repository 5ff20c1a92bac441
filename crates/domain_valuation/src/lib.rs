//! Customs Valuation Domain
//!
//! This crate implements the CIF (Cost, Insurance, Freight) reconciliation
//! engine: it extracts monetary components from the loosely structured
//! valuation notes produced by upstream document extraction, resolves
//! conflicting freight evidence, derives insurance when none is stated, and
//! totals the result for a trade declaration — emitting an ordered audit
//! trail of every inference made.
//!
//! # Pipeline
//!
//! ```text
//! note -> Extractor -> Freight Resolver -> Insurance Estimator -> Totaler -> Validator
//!              \____________________ shared audit trail ____________________/
//! ```
//!
//! Each invocation is stateless and synchronous; a [`ValuationService`] can
//! be shared across threads freely.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_valuation::ValuationService;
//!
//! let service = ValuationService::new();
//! let report = service.process(
//!     "Invoice value (goods only): 1399.0\n\
//!      Freight charges (BOL): 211.71\n\
//!      Insurance charges: null",
//!     Some("SEA"),
//! );
//!
//! assert_eq!(report.freight_analysis.freight_source.to_string(), "BOL");
//! ```

pub mod audit;
pub mod extraction;
pub mod freight;
pub mod insurance;
pub mod report;
pub mod services;
pub mod vocabulary;

pub use audit::AuditTrail;
pub use extraction::{extract_fields, ExtractedFields};
pub use freight::{resolve_freight, FreightResolution, FreightSource};
pub use insurance::{estimate_insurance, TransportMode};
pub use report::{CifBreakdown, FreightAnalysis, ProcessingSummary, ValuationReport};
pub use services::{direct_cif_value, ValuationService};
