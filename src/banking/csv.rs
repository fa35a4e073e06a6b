//! Statement CSV generation.
//!
//! Headerless CSV with semicolon separators and German locale (comma
//! decimal separator, `dd.mm.yyyy` dates), the format the surrounding
//! accounting tooling imports.

use rust_decimal::Decimal;
use tracing::debug;

use super::types::Transaction;

/// Render transactions as statement CSV, one row per record.
///
/// Columns: Buchungsdatum;Wertstellung;Textschluessel;Primanota;
///          Kontoinhaber;Kontonummer;Bankleitzahl;Verwendungszweck;
///          Waehrung;Betrag;SollHaben
pub fn export_transactions(transactions: &[Transaction]) -> String {
    let mut out = String::new();
    for tx in transactions {
        out.push_str(&tx.entry_date.format("%d.%m.%Y").to_string());
        out.push(';');
        out.push_str(&tx.value_date.format("%d.%m.%Y").to_string());
        out.push(';');
        csv_field_str(&mut out, &tx.text_key);
        out.push(';');
        csv_field_str(&mut out, &tx.primanota);
        out.push(';');
        csv_field_str(&mut out, &tx.account_holder);
        out.push(';');
        csv_field_str(&mut out, &tx.account_number);
        out.push(';');
        csv_field_str(&mut out, &tx.bank_code);
        out.push(';');
        csv_field_str(&mut out, &tx.reference);
        out.push(';');
        csv_field_str(&mut out, &tx.currency);
        out.push(';');
        csv_field_decimal(&mut out, tx.amount);
        out.push(';');
        csv_field_str(&mut out, tx.debit_credit.code());
        out.push_str("\r\n");
    }
    debug!(rows = transactions.len(), "rendered statement CSV");
    out
}

fn csv_field_str(out: &mut String, value: &str) {
    out.push('"');
    // Escape internal double quotes
    for ch in value.chars() {
        if ch == '"' {
            out.push_str("\"\"");
        } else {
            out.push(ch);
        }
    }
    out.push('"');
}

fn csv_field_decimal(out: &mut String, d: Decimal) {
    let scaled = d.round_dp(2);
    let s = format!("{scaled:.2}");
    out.push_str(&s.replace('.', ","));
}
