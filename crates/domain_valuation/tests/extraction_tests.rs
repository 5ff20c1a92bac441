//! Field extraction tests
//!
//! Tests cover the labeled-probe vocabulary, the explicit-null rules for
//! freight and insurance, charge summation, and the numeric literal grammar.
//!
//! # Test Organization
//!
//! - `goods_value_tests` - label vocabulary and the largest-literal fallback
//! - `freight_field_tests` - BOL/invoice freight extraction and null handling
//! - `charge_tests` - other BOL charges and invoice charge indicators
//! - `literal_grammar_tests` - the numeric literal shape

use domain_valuation::{extract_fields, AuditTrail, ExtractedFields};
use rust_decimal_macros::dec;

use core_kernel::Amount;

fn extract(note: &str) -> ExtractedFields {
    extract_fields(note, &mut AuditTrail::new())
}

fn amount(d: rust_decimal::Decimal) -> Option<Amount> {
    Some(Amount::new(d))
}

mod goods_value_tests {
    use super::*;

    #[test]
    fn test_every_goods_label_is_recognized() {
        for label in [
            "Invoice value (goods only)",
            "Goods value",
            "Commercial value",
            "Base price",
            "Subtotal",
            "Line item total",
        ] {
            let fields = extract(&format!("{label}: 820.50"));
            assert_eq!(
                fields.goods_value,
                amount(dec!(820.50)),
                "label {label:?} should extract the goods value"
            );
        }
    }

    #[test]
    fn test_labels_match_case_insensitively() {
        let fields = extract("INVOICE VALUE (GOODS ONLY): 1399.0");
        assert_eq!(fields.goods_value, amount(dec!(1399)));
    }

    #[test]
    fn test_first_matching_label_wins() {
        let note = "Invoice value (goods only): 1000\nSubtotal: 900";
        let fields = extract(note);
        assert_eq!(fields.goods_value, amount(dec!(1000)));
    }

    #[test]
    fn test_fallback_picks_the_largest_literal() {
        let note = "shipment of 12 cartons, declared total 4,500.00, deposit 300";
        let fields = extract(note);
        assert_eq!(fields.goods_value, amount(dec!(4500.00)));
    }

    #[test]
    fn test_no_numbers_means_no_goods_value() {
        let fields = extract("value to be confirmed by importer");
        assert_eq!(fields.goods_value, None);
    }

    #[test]
    fn test_labelled_null_falls_back_to_largest_literal() {
        // A null goods label leaves the labeled path empty; the heuristic
        // then picks up whatever numbers remain.
        let note = "Goods value: null\nFreight charges (BOL): 75.00";
        let fields = extract(note);
        assert_eq!(fields.goods_value, amount(dec!(75.00)));
    }
}

mod freight_field_tests {
    use super::*;

    #[test]
    fn test_bol_and_invoice_freight_extract_independently() {
        let note = "Freight charges (BOL): 100.00\nFreight charges (invoice): 50.00";
        let fields = extract(note);
        assert_eq!(fields.bol_freight, amount(dec!(100.00)));
        assert_eq!(fields.invoice_freight, amount(dec!(50.00)));
    }

    #[test]
    fn test_null_freight_is_unset_not_zero() {
        let note = "Freight charges (BOL): null\nFreight charges (invoice): none";
        let fields = extract(note);
        assert_eq!(fields.bol_freight, None);
        assert_eq!(fields.invoice_freight, None);
    }

    #[test]
    fn test_zero_freight_is_treated_as_explicitly_null() {
        let note = "Freight charges (BOL): 0\nFreight charges (invoice): 0";
        let fields = extract(note);
        assert_eq!(fields.bol_freight, None);
        assert_eq!(fields.invoice_freight, None);
    }

    #[test]
    fn test_null_markers_are_audited() {
        let mut audit = AuditTrail::new();
        extract_fields("Freight charges (BOL): null", &mut audit);
        assert!(
            audit
                .notes()
                .iter()
                .any(|n| n == "BOL freight explicitly marked as null/none"),
            "explicit null must leave a trace, got {:?}",
            audit.notes()
        );
    }

    #[test]
    fn test_invoice_total_with_freight_label() {
        let fields = extract("Invoice total (including freight): 1610.71");
        assert_eq!(fields.invoice_total_with_freight, amount(dec!(1610.71)));
    }
}

mod charge_tests {
    use super::*;

    #[test]
    fn test_other_bol_charges_sum_everything_after_the_label() {
        let note = "Goods value: 1399\nOther charges (BOL): 5,000.00\nwharfage 700.00\nstamp 50.00";
        let fields = extract(note);
        assert_eq!(fields.other_bol_charges, amount(dec!(5750.00)));
    }

    #[test]
    fn test_other_bol_charges_absent_label_is_unset() {
        let fields = extract("Goods value: 1399");
        assert_eq!(fields.other_bol_charges, None);
    }

    #[test]
    fn test_each_indicator_contributes_once() {
        let note = "Tax: 10.00\nShipping: 20.00\nHandling: 30.00\nDocumentation: 5.50";
        let fields = extract(note);
        assert_eq!(fields.invoice_charges, amount(dec!(65.50)));
    }

    #[test]
    fn test_zero_valued_indicators_are_ignored() {
        let note = "Tax: 0\nHandling: 25.00";
        let fields = extract(note);
        assert_eq!(fields.invoice_charges, amount(dec!(25.00)));
    }

    #[test]
    fn test_indicator_words_without_values_do_not_count() {
        let note = "goods moved by SHIPPING line, customs cleared\nGoods value: 100";
        let fields = extract(note);
        assert_eq!(fields.invoice_charges, None);
    }

    #[test]
    fn test_insurance_extraction_requires_positive_value() {
        assert_eq!(
            extract("Insurance charges: 42.50").insurance,
            amount(dec!(42.50))
        );
        assert_eq!(extract("Insurance charges: 0").insurance, None);
        assert_eq!(extract("Insurance charges: null").insurance, None);
        assert_eq!(extract("Goods value: 10").insurance, None);
    }
}

mod literal_grammar_tests {
    use super::*;

    #[test]
    fn test_thousands_groups_parse_exactly() {
        let fields = extract("Goods value: 1,250,000.00");
        assert_eq!(fields.goods_value, amount(dec!(1250000.00)));
    }

    #[test]
    fn test_fraction_is_exactly_two_digits() {
        // A one-digit fraction is not part of the literal: "1399.0" reads
        // as 1399.
        let fields = extract("Goods value: 1399.0");
        assert_eq!(fields.goods_value, amount(dec!(1399)));
    }

    #[test]
    fn test_three_digit_fraction_takes_two() {
        let fields = extract("Goods value: 12.345");
        assert_eq!(fields.goods_value, amount(dec!(12.34)));
    }

    #[test]
    fn test_no_number_after_colon_leaves_field_unset() {
        let fields = extract("Invoice total (including freight): pending");
        assert_eq!(fields.invoice_total_with_freight, None);
    }
}
