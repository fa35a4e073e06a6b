use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::KontorError;

/// Opaque bank account key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A bank account transactions are recorded against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    /// Account name as shown in the administration.
    pub name: String,
}

/// Debit/credit marker of a transaction ("S"/"H" in German bank feeds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DebitCredit {
    /// Soll: money leaving the account.
    Debit,
    /// Haben: money arriving on the account.
    Credit,
}

impl DebitCredit {
    /// Feed code letter.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Debit => "S",
            Self::Credit => "H",
        }
    }

    /// Parse from a feed code; accepts the S/H and D/C letter pairs.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "S" | "D" => Some(Self::Debit),
            "H" | "C" => Some(Self::Credit),
            _ => None,
        }
    }
}

/// A recorded account transaction.
///
/// The amount is unsigned; the direction is carried by `debit_credit`.
/// Corrections are booked as new transactions, never as edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Account the transaction is recorded against.
    pub account: AccountId,
    /// Booking date.
    pub entry_date: NaiveDate,
    /// Value date.
    pub value_date: NaiveDate,
    /// Business transaction code from the bank feed.
    pub text_key: String,
    /// Bank-side batch number.
    pub primanota: String,
    /// Counterparty account holder.
    pub account_holder: String,
    /// Counterparty account number or IBAN.
    pub account_number: String,
    /// Counterparty bank code or BIC.
    pub bank_code: String,
    /// Free-text payment reference.
    pub reference: String,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Unsigned amount.
    pub amount: Decimal,
    pub debit_credit: DebitCredit,
}

impl Transaction {
    /// Amount signed by direction: debits negative, credits positive.
    pub fn signed_amount(&self) -> Decimal {
        match self.debit_credit {
            DebitCredit::Debit => -self.amount,
            DebitCredit::Credit => self.amount,
        }
    }
}

/// Builder for transaction records.
///
/// The value date defaults to the entry date, the currency to `"EUR"`, and
/// the counterparty and reference fields to empty strings, matching feeds
/// that omit them.
pub struct TransactionBuilder {
    account: AccountId,
    entry_date: NaiveDate,
    value_date: Option<NaiveDate>,
    text_key: String,
    primanota: String,
    account_holder: String,
    account_number: String,
    bank_code: String,
    reference: String,
    currency: String,
    amount: Decimal,
    debit_credit: DebitCredit,
}

impl TransactionBuilder {
    pub fn new(
        account: AccountId,
        entry_date: NaiveDate,
        amount: Decimal,
        debit_credit: DebitCredit,
    ) -> Self {
        Self {
            account,
            entry_date,
            value_date: None,
            text_key: String::new(),
            primanota: String::new(),
            account_holder: String::new(),
            account_number: String::new(),
            bank_code: String::new(),
            reference: String::new(),
            currency: "EUR".to_string(),
            amount,
            debit_credit,
        }
    }

    pub fn value_date(mut self, date: NaiveDate) -> Self {
        self.value_date = Some(date);
        self
    }

    pub fn text_key(mut self, key: impl Into<String>) -> Self {
        self.text_key = key.into();
        self
    }

    pub fn primanota(mut self, primanota: impl Into<String>) -> Self {
        self.primanota = primanota.into();
        self
    }

    /// Counterparty bank details.
    pub fn counterparty(
        mut self,
        holder: impl Into<String>,
        account_number: impl Into<String>,
        bank_code: impl Into<String>,
    ) -> Self {
        self.account_holder = holder.into();
        self.account_number = account_number.into();
        self.bank_code = bank_code.into();
        self
    }

    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = reference.into();
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency = code.into();
        self
    }

    pub fn build(self) -> Result<Transaction, KontorError> {
        if self.amount < Decimal::ZERO {
            return Err(KontorError::Builder(
                "amount is unsigned; use the debit/credit marker for direction".into(),
            ));
        }
        if self.currency.len() != 3 {
            return Err(KontorError::Builder(
                "currency code must be 3 characters (ISO 4217)".into(),
            ));
        }
        Ok(Transaction {
            account: self.account,
            entry_date: self.entry_date,
            value_date: self.value_date.unwrap_or(self.entry_date),
            text_key: self.text_key,
            primanota: self.primanota,
            account_holder: self.account_holder,
            account_number: self.account_number,
            bank_code: self.bank_code,
            reference: self.reference,
            currency: self.currency,
            amount: self.amount,
            debit_credit: self.debit_credit,
        })
    }
}
