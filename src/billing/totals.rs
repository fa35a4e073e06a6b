//! Invoice totals and VAT breakdown.
//!
//! Every money-bearing intermediate (each line subtotal, each discount
//! amount, each VAT group amount) is rounded to the cent on its own before
//! any summation. Rounding only the final sum gives off-by-a-cent results;
//! the per-line ordering here matches what goes on the printed invoice.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::{Invoice, InvoiceItem};

/// One group of the VAT breakdown: all items sharing `rate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatGroup {
    /// VAT rate as a fraction (e.g. `0.19`).
    pub rate: Decimal,
    /// VAT amount for the group, rounded to the cent.
    pub amount: Decimal,
}

/// Round to the nearest cent, half away from zero (commercial rounding).
pub fn round_to_cent(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

impl InvoiceItem {
    /// `quantity * price`, rounded to the cent.
    pub fn subtotal(&self) -> Decimal {
        round_to_cent(self.quantity * self.price)
    }

    /// Discount share of the subtotal, rounded to the cent.
    pub fn discount_amount(&self) -> Decimal {
        round_to_cent(self.discount * self.subtotal())
    }

    /// Line total: subtotal minus discount amount.
    pub fn total(&self) -> Decimal {
        self.subtotal() - self.discount_amount()
    }
}

/// Compute the VAT breakdown for an item snapshot.
///
/// Items are partitioned by nonzero rate; each group contributes one
/// amount, `round_to_cent(rate * sum of group line totals)`. The result is
/// sorted ascending by rate and carries no duplicate rates. Items with a
/// rate of exactly zero are left out entirely, not even as a zero-amount
/// entry.
pub fn vat_breakdown(items: &[InvoiceItem]) -> Vec<VatGroup> {
    let mut groups: HashMap<Decimal, Decimal> = HashMap::new();
    for item in items {
        if item.vat_rate.is_zero() {
            continue;
        }
        *groups.entry(item.vat_rate).or_insert(Decimal::ZERO) += item.total();
    }

    let mut breakdown: Vec<VatGroup> = groups
        .into_iter()
        .map(|(rate, base)| VatGroup {
            rate,
            amount: round_to_cent(rate * base),
        })
        .collect();
    breakdown.sort_by(|a, b| a.rate.cmp(&b.rate));
    breakdown
}

impl Invoice {
    /// Recompute `net` and `gross` from the given item snapshot and return
    /// the VAT breakdown.
    ///
    /// Mutates the invoice in place; storing the result is the caller's
    /// job. The snapshot is passed in on every call so there is no cached
    /// item list that could go stale. An empty snapshot yields zero totals
    /// and an empty breakdown.
    pub fn recalculate(&mut self, items: &[InvoiceItem]) -> Vec<VatGroup> {
        self.net = items.iter().map(InvoiceItem::total).sum();
        let breakdown = vat_breakdown(items);
        let vat_total: Decimal = breakdown.iter().map(|group| group.amount).sum();
        self.gross = self.net + vat_total;
        debug!(
            number = self.number,
            items = items.len(),
            net = %self.net,
            gross = %self.gross,
            "recalculated invoice totals"
        );
        breakdown
    }

    /// VAT breakdown for the snapshot without touching the stored totals.
    pub fn vat(&self, items: &[InvoiceItem]) -> Vec<VatGroup> {
        vat_breakdown(items)
    }
}
