//! German VAT rates.
//!
//! Rates are fractions, not percentages: the standard rate is `0.19`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::config::VatRateChoice;

/// Sorted list of (rate fraction, label) pairs; the rate set German
/// invoicing uses today.
static GERMAN_VAT_RATES: &[(Decimal, &str)] = &[
    (dec!(0.00), "0 %"),
    (dec!(0.07), "7 %"),
    (dec!(0.19), "19 %"),
];

/// Check whether `rate` is one of the known German VAT rates.
pub fn is_known_vat_rate(rate: Decimal) -> bool {
    GERMAN_VAT_RATES.iter().any(|(known, _)| *known == rate)
}

/// The choice list [`super::BillingConfig`] defaults to.
pub fn default_choices() -> Vec<VatRateChoice> {
    GERMAN_VAT_RATES
        .iter()
        .map(|(rate, label)| VatRateChoice {
            rate: *rate,
            label: (*label).to_string(),
        })
        .collect()
}
