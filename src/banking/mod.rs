//! Bank accounts and account transactions.
//!
//! Transactions are a typed record of what the bank feed delivered;
//! persistence and matching live elsewhere. Records are constructed whole
//! and never modified afterwards.

mod csv;
mod types;

pub use csv::*;
pub use types::*;
