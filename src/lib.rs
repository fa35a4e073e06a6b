//! # kontor
//!
//! Billing and banking core for small-organization administration:
//! customer invoices with line items and VAT totals, day-derived invoice
//! numbering, payment-deadline tracking, and a typed model of bank
//! accounts and account transactions.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Persistence is the caller's concern: load your records from the store,
//! run the computations here, and save the results yourself. In particular
//! the totals engine takes the item snapshot as an argument on every call;
//! nothing is cached on the aggregate.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use kontor::billing::*;
//! use rust_decimal_macros::dec;
//!
//! let customer = CustomerId::from("K-0001");
//! let mut invoice = InvoiceBuilder::new(customer.clone(), 19889001, "Kunde AG\nMarienplatz 1\n80331 München")
//!     .created(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
//!     .build()
//!     .unwrap();
//!
//! let items = vec![
//!     InvoiceItemBuilder::new("Softwareentwicklung", dec!(120))
//!         .customer(customer)
//!         .quantity(dec!(80))
//!         .vat_rate(dec!(0.19))
//!         .begin(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
//!         .build()
//!         .unwrap(),
//! ];
//!
//! let vat = invoice.recalculate(&items);
//! assert_eq!(invoice.net, dec!(9600.00));
//! assert_eq!(vat[0].amount, dec!(1824.00));
//! assert_eq!(invoice.gross, dec!(11424.00));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `billing` (default) | Invoices, line items, VAT totals, numbering, configuration |
//! | `banking` (default) | Accounts, transaction records, statement CSV export |

mod error;

#[cfg(feature = "billing")]
pub mod billing;

#[cfg(feature = "banking")]
pub mod banking;

pub use crate::error::KontorError;

// Re-export the billing types at the crate root for convenience
#[cfg(feature = "billing")]
pub use crate::billing::*;
