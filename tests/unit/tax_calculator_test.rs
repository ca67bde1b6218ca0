// Property-based tests for per-line GST calculation
//
// Properties:
// - taxable_value = quantity × unit_price, gst = taxable_value × rate / 100, exactly
// - intra-state: cgst == sgst == gst / 2, igst == 0
// - inter-state: cgst == sgst == 0, igst == gst
// - the same inputs always give the same line
// - amounts too large for Decimal are rejected, never a panic

use gstdesk::core::AppError;
use gstdesk::taxes::{calculate_line_tax, checked_line_tax, SupplyType, TaxCalculator};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const SLABS_BASIS_POINTS: [u32; 7] = [0, 25, 300, 500, 1200, 1800, 2800];

fn quantity() -> impl Strategy<Value = Decimal> {
    // up to 10,000 units with up to 3 decimals (metres, square feet)
    (0u32..=10_000_000u32).prop_map(|milli| Decimal::new(milli as i64, 3))
}

fn unit_price() -> impl Strategy<Value = Decimal> {
    // up to ₹1 crore in paise
    (0u64..=1_000_000_000u64).prop_map(|paise| Decimal::new(paise as i64, 2))
}

fn tax_rate() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        prop::sample::select(SLABS_BASIS_POINTS.to_vec()),
        0u32..=10_000u32,
    ]
    .prop_map(|basis_points| Decimal::new(basis_points as i64, 2))
}

proptest! {
    #[test]
    fn test_taxable_value_and_gst_are_exact(
        q in quantity(),
        p in unit_price(),
        r in tax_rate(),
        intra in any::<bool>(),
    ) {
        let supply = if intra { SupplyType::IntraState } else { SupplyType::InterState };
        let line = TaxCalculator::new().calculate_line(q, p, r, supply).unwrap();

        prop_assert_eq!(line.taxable_value, q * p);
        prop_assert_eq!(line.gst_amount, q * p * r / dec!(100));
        prop_assert_eq!(line.total, line.taxable_value + line.gst_amount);
    }

    #[test]
    fn test_intra_state_split(q in quantity(), p in unit_price(), r in tax_rate()) {
        let line = calculate_line_tax(q, p, r, true);

        prop_assert_eq!(line.cgst_amount, line.sgst_amount);
        prop_assert_eq!(line.cgst_amount + line.sgst_amount, line.gst_amount);
        prop_assert_eq!(line.igst_amount, Decimal::ZERO);
    }

    #[test]
    fn test_inter_state_split(q in quantity(), p in unit_price(), r in tax_rate()) {
        let line = calculate_line_tax(q, p, r, false);

        prop_assert_eq!(line.cgst_amount, Decimal::ZERO);
        prop_assert_eq!(line.sgst_amount, Decimal::ZERO);
        prop_assert_eq!(line.igst_amount, line.gst_amount);
    }

    #[test]
    fn test_split_never_mixes(q in quantity(), p in unit_price(), r in tax_rate(), intra in any::<bool>()) {
        let line = calculate_line_tax(q, p, r, intra);
        let state_split = line.cgst_amount + line.sgst_amount;

        prop_assert!(state_split.is_zero() || line.igst_amount.is_zero());
    }

    #[test]
    fn test_calculation_is_deterministic(q in quantity(), p in unit_price(), r in tax_rate()) {
        let calculator = TaxCalculator::new();
        let first = calculator.calculate_line(q, p, r, SupplyType::IntraState).unwrap();
        let second = calculator.calculate_line(q, p, r, SupplyType::IntraState).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_checked_matches_unchecked(q in quantity(), p in unit_price(), r in tax_rate(), intra in any::<bool>()) {
        prop_assert_eq!(checked_line_tax(q, p, r, intra), Some(calculate_line_tax(q, p, r, intra)));
    }

    #[test]
    fn test_negative_quantity_rejected(q in 1u32..1_000_000u32, p in unit_price(), r in tax_rate()) {
        let result = TaxCalculator::new().calculate_line(-Decimal::from(q), p, r, SupplyType::IntraState);

        prop_assert!(
            matches!(result, Err(AppError::InvalidAmount { ref field, .. }) if field == "quantity"),
            "negative quantity must be rejected"
        );
    }
}

#[test]
fn test_scenario_intra_state() {
    let line = TaxCalculator::new()
        .calculate_line(dec!(2), dec!(1000), dec!(18), SupplyType::IntraState)
        .unwrap();

    assert_eq!(line.taxable_value, dec!(2000));
    assert_eq!(line.gst_amount, dec!(360));
    assert_eq!(line.cgst_amount, dec!(180));
    assert_eq!(line.sgst_amount, dec!(180));
    assert_eq!(line.igst_amount, dec!(0));
    assert_eq!(line.total, dec!(2360));
}

#[test]
fn test_scenario_inter_state() {
    let line = TaxCalculator::new()
        .calculate_line(dec!(2), dec!(1000), dec!(18), SupplyType::InterState)
        .unwrap();

    assert_eq!(line.cgst_amount, dec!(0));
    assert_eq!(line.sgst_amount, dec!(0));
    assert_eq!(line.igst_amount, dec!(360));
    assert_eq!(line.total, dec!(2360));
}

#[test]
fn test_zero_quantity_and_nil_rate() {
    let calculator = TaxCalculator::new();

    let line = calculator
        .calculate_line(dec!(0), dec!(4500), dec!(18), SupplyType::IntraState)
        .unwrap();
    assert_eq!(line.total, Decimal::ZERO);

    let line = calculator
        .calculate_line(dec!(3), dec!(4500), dec!(0), SupplyType::InterState)
        .unwrap();
    assert_eq!(line.gst_amount, Decimal::ZERO);
    assert_eq!(line.total, dec!(13500));
}

#[test]
fn test_rate_outside_percentage_rejected() {
    let calculator = TaxCalculator::new();

    for rate in [dec!(-5), dec!(100.5), dec!(180)] {
        let result = calculator.calculate_line(dec!(1), dec!(100), rate, SupplyType::IntraState);
        assert!(
            matches!(result, Err(AppError::InvalidAmount { ref field, .. }) if field == "tax_rate"),
            "rate {} must be rejected",
            rate
        );
    }
}

#[test]
fn test_overflowing_line_rejected() {
    let calculator = TaxCalculator::new();

    let result = calculator.calculate_line(Decimal::MAX, dec!(2), dec!(18), SupplyType::IntraState);
    assert!(matches!(
        result,
        Err(AppError::InvalidAmount { ref field, .. }) if field == "unit_price"
    ));

    // taxable value fits, the line total does not
    let result = calculator.calculate_line(Decimal::MAX, dec!(1), dec!(100), SupplyType::InterState);
    assert!(matches!(result, Err(AppError::InvalidAmount { .. })));

    assert_eq!(checked_line_tax(Decimal::MAX, dec!(1.5), dec!(5), true), None);
}
