use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use super::types::{CustomerId, Invoice, InvoiceItem, Unit};
use crate::error::KontorError;

/// Builder for invoices.
///
/// ```
/// use chrono::NaiveDate;
/// use kontor::billing::*;
///
/// let invoice = InvoiceBuilder::new(CustomerId::from("K-0001"), 19889001, "Kunde AG\n80331 München")
///     .created(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
///     .build()
///     .unwrap();
/// assert_eq!(invoice.number, 19889001);
/// ```
pub struct InvoiceBuilder {
    customer: CustomerId,
    number: u64,
    address: String,
    created: Option<NaiveDate>,
    reminded: Option<NaiveDate>,
    paid: Option<NaiveDate>,
}

impl InvoiceBuilder {
    pub fn new(customer: CustomerId, number: u64, address: impl Into<String>) -> Self {
        Self {
            customer,
            number,
            address: address.into(),
            created: None,
            reminded: None,
            paid: None,
        }
    }

    /// Issue date; defaults to today.
    pub fn created(mut self, date: NaiveDate) -> Self {
        self.created = Some(date);
        self
    }

    pub fn reminded(mut self, date: NaiveDate) -> Self {
        self.reminded = Some(date);
        self
    }

    pub fn paid(mut self, date: NaiveDate) -> Self {
        self.paid = Some(date);
        self
    }

    /// Build the invoice with zeroed totals; run
    /// [`Invoice::recalculate`](super::Invoice::recalculate) against an item
    /// snapshot to fill them.
    pub fn build(self) -> Result<Invoice, KontorError> {
        if self.address.trim().is_empty() {
            return Err(KontorError::Builder(
                "address snapshot is required".into(),
            ));
        }
        Ok(Invoice {
            customer: self.customer,
            number: self.number,
            address: self.address,
            net: Decimal::ZERO,
            gross: Decimal::ZERO,
            created: self.created.unwrap_or_else(|| Utc::now().date_naive()),
            reminded: self.reminded,
            paid: self.paid,
        })
    }
}

/// Builder for invoice items.
///
/// Quantity defaults to 1, discount and VAT rate to 0, the period begin to
/// today. Items built without an invoice number stay loose.
pub struct InvoiceItemBuilder {
    invoice: Option<u64>,
    customer: Option<CustomerId>,
    position: Option<u32>,
    quantity: Decimal,
    sku: String,
    text: String,
    begin: Option<NaiveDate>,
    end: Option<NaiveDate>,
    price: Decimal,
    unit: Option<Unit>,
    discount: Decimal,
    vat_rate: Decimal,
}

impl InvoiceItemBuilder {
    pub fn new(text: impl Into<String>, price: Decimal) -> Self {
        Self {
            invoice: None,
            customer: None,
            position: None,
            quantity: Decimal::ONE,
            sku: String::new(),
            text: text.into(),
            begin: None,
            end: None,
            price,
            unit: None,
            discount: Decimal::ZERO,
            vat_rate: Decimal::ZERO,
        }
    }

    /// Attach the item to an invoice by number.
    pub fn invoice(mut self, number: u64) -> Self {
        self.invoice = Some(number);
        self
    }

    pub fn customer(mut self, customer: CustomerId) -> Self {
        self.customer = Some(customer);
        self
    }

    pub fn position(mut self, position: u32) -> Self {
        self.position = Some(position);
        self
    }

    pub fn quantity(mut self, quantity: Decimal) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = sku.into();
        self
    }

    pub fn begin(mut self, date: NaiveDate) -> Self {
        self.begin = Some(date);
        self
    }

    pub fn end(mut self, date: NaiveDate) -> Self {
        self.end = Some(date);
        self
    }

    pub fn unit(mut self, unit: Unit) -> Self {
        self.unit = Some(unit);
        self
    }

    /// Discount as a fraction of the subtotal, `0.00..=1.00`.
    pub fn discount(mut self, discount: Decimal) -> Self {
        self.discount = discount;
        self
    }

    /// VAT rate as a fraction (e.g. `0.19`).
    pub fn vat_rate(mut self, rate: Decimal) -> Self {
        self.vat_rate = rate;
        self
    }

    pub fn build(self) -> Result<InvoiceItem, KontorError> {
        if self.text.trim().is_empty() {
            return Err(KontorError::Builder("description is required".into()));
        }
        if self.text.chars().count() > 200 {
            return Err(KontorError::Builder(
                "description cannot exceed 200 characters".into(),
            ));
        }
        if self.sku.chars().count() > 20 {
            return Err(KontorError::Builder(
                "SKU cannot exceed 20 characters".into(),
            ));
        }
        if self.discount < Decimal::ZERO || self.discount > Decimal::ONE {
            return Err(KontorError::Builder(
                "discount must be a fraction between 0 and 1".into(),
            ));
        }
        if self.vat_rate < Decimal::ZERO || self.vat_rate >= Decimal::ONE {
            return Err(KontorError::Builder(
                "VAT rate must be a fraction below 1".into(),
            ));
        }
        let begin = self.begin.unwrap_or_else(|| Utc::now().date_naive());
        if let Some(end) = self.end {
            if end < begin {
                return Err(KontorError::Builder(
                    "billing period cannot end before it begins".into(),
                ));
            }
        }
        Ok(InvoiceItem {
            invoice: self.invoice,
            customer: self.customer,
            position: self.position,
            quantity: self.quantity,
            sku: self.sku,
            text: self.text,
            begin,
            end: self.end,
            price: self.price,
            unit: self.unit,
            discount: self.discount,
            vat_rate: self.vat_rate,
        })
    }
}
