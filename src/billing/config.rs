use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::rates;
use crate::error::KontorError;

/// One selectable VAT rate with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatRateChoice {
    /// Rate as a fraction (e.g. `0.19`).
    pub rate: Decimal,
    /// Display label (e.g. `"19 %"`).
    pub label: String,
}

/// Billing configuration.
///
/// Passed explicitly into the checks that need it; the crate reads no
/// process-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingConfig {
    /// Days a customer has to settle an invoice after issue or reminder.
    pub payment_timeframe: i64,
    /// VAT rates offered when entering items.
    pub vat_rate_choices: Vec<VatRateChoice>,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            payment_timeframe: 14,
            vat_rate_choices: rates::default_choices(),
        }
    }
}

impl BillingConfig {
    /// Reject out-of-range rates, unsorted or duplicate choices, and a
    /// negative timeframe.
    pub fn validate(&self) -> Result<(), KontorError> {
        if self.payment_timeframe < 0 {
            return Err(KontorError::Config(
                "payment timeframe must not be negative".into(),
            ));
        }
        for choice in &self.vat_rate_choices {
            if choice.rate < Decimal::ZERO || choice.rate >= Decimal::ONE {
                return Err(KontorError::Config(format!(
                    "VAT rate {} is not a fraction below 1",
                    choice.rate
                )));
            }
        }
        for pair in self.vat_rate_choices.windows(2) {
            if pair[0].rate >= pair[1].rate {
                return Err(KontorError::Config(
                    "VAT rate choices must be sorted ascending without duplicates".into(),
                ));
            }
        }
        Ok(())
    }
}
