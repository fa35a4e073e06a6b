use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::config::BillingConfig;
use crate::error::KontorError;

/// Opaque customer key.
///
/// The surrounding system owns the customer model; invoices and items only
/// carry this reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(String);

impl CustomerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CustomerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CustomerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Billing interval for recurring items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    Month,
    Year,
}

impl Unit {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "month" => Some(Self::Month),
            "year" => Some(Self::Year),
            _ => None,
        }
    }
}

/// A customer invoice.
///
/// `net` and `gross` are derived values, written by [`Invoice::recalculate`]
/// and never authoritative input. The pair `(customer, number)` is unique;
/// the store enforces the constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Customer the invoice is addressed to.
    pub customer: CustomerId,
    /// Day-derived number, unique per customer (see [`super::DayNumberSequence`]).
    pub number: u64,
    /// Snapshot of the customer address at issue time.
    pub address: String,
    /// Net total, recomputed on demand.
    pub net: Decimal,
    /// Gross total, recomputed on demand.
    pub gross: Decimal,
    /// Issue date.
    pub created: NaiveDate,
    /// Date of the last payment reminder, if any.
    pub reminded: Option<NaiveDate>,
    /// Date the invoice was settled, if any.
    pub paid: Option<NaiveDate>,
}

impl Invoice {
    /// Whether the invoice needs no chasing on `today`: it is either paid,
    /// or the payment deadline has not passed yet. The deadline is the last
    /// reminder date (or the issue date when never reminded) plus the
    /// configured timeframe.
    pub fn is_okay(&self, config: &BillingConfig, today: NaiveDate) -> bool {
        if self.paid.is_some() {
            return true;
        }
        let base = self.reminded.unwrap_or(self.created);
        today <= base + Duration::days(config.payment_timeframe)
    }
}

impl std::fmt::Display for Invoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invoice {}", self.number)
    }
}

/// A single invoice line.
///
/// Items may exist "loose", not yet attached to any invoice, while they
/// accumulate between billing runs. Subtotal, discount amount, and line
/// total are computed properties (see the totals module), never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceItem {
    /// Number of the owning invoice; `None` while the item is loose.
    pub invoice: Option<u64>,
    /// Customer the item is billed to; see [`InvoiceItem::default_customer`].
    pub customer: Option<CustomerId>,
    /// Ordering within the invoice; uniqueness per invoice is the store's
    /// constraint.
    pub position: Option<u32>,
    /// Invoiced quantity.
    pub quantity: Decimal,
    /// Stock-keeping unit (e.g. article number); may be empty.
    pub sku: String,
    /// Line description.
    pub text: String,
    /// Start of the billing period.
    pub begin: NaiveDate,
    /// End of the billing period; `None` marks a one-time charge.
    pub end: Option<NaiveDate>,
    /// Unit price.
    pub price: Decimal,
    /// Billing interval for recurring items.
    pub unit: Option<Unit>,
    /// Discount as a fraction of the subtotal, `0.00..=1.00`.
    pub discount: Decimal,
    /// VAT rate as a fraction (e.g. `0.19`).
    pub vat_rate: Decimal,
}

impl InvoiceItem {
    /// True while the item is not attached to any invoice.
    pub fn is_loose(&self) -> bool {
        self.invoice.is_none()
    }

    /// Discount as a percentage for display.
    pub fn discount_percentage(&self) -> Decimal {
        self.discount * dec!(100)
    }

    /// Billing period label, e.g. `"01.06.2024 – 31.05.2025"` or
    /// `"01.06.2024 – one-time"` for open-ended items.
    pub fn period(&self) -> String {
        let begin = self.begin.format("%d.%m.%Y");
        match self.end {
            Some(end) => format!("{} – {}", begin, end.format("%d.%m.%Y")),
            None => format!("{begin} – one-time"),
        }
    }

    /// Fill in the customer before the item is stored.
    ///
    /// Defaulting from the invoice only runs when the item has *no* invoice,
    /// which leaves nothing to copy the customer from, so an unset customer
    /// is always an error.
    // TODO: the guard direction looks inverted (it rejects exactly the case
    // where an invoice to copy from is present); confirm the intended
    // behavior with product before changing it.
    pub fn default_customer(&mut self, invoice: Option<&Invoice>) -> Result<(), KontorError> {
        if self.customer.is_some() {
            return Ok(());
        }
        match invoice {
            Some(_) => Err(KontorError::Item(
                "the customer must be set if no invoice is given".into(),
            )),
            None => Err(KontorError::Item(
                "no invoice to take the customer from".into(),
            )),
        }
    }
}

impl std::fmt::Display for InvoiceItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {}", self.position.unwrap_or(0), self.text)
    }
}
