use chrono::NaiveDate;
use kontor::banking::*;
use rust_decimal_macros::dec;

fn main() {
    let giro = AccountId::from("giro");

    let transactions = vec![
        TransactionBuilder::new(
            giro.clone(),
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            dec!(1234.56),
            DebitCredit::Credit,
        )
        .value_date(NaiveDate::from_ymd_opt(2024, 6, 16).unwrap())
        .text_key("051")
        .primanota("8000")
        .counterparty("Kunde AG", "DE89370400440532013000", "COBADEFFXXX")
        .reference("RE 19889001")
        .build()
        .expect("transaction should be valid"),
        TransactionBuilder::new(
            giro.clone(),
            NaiveDate::from_ymd_opt(2024, 6, 17).unwrap(),
            dec!(89.90),
            DebitCredit::Debit,
        )
        .counterparty("Stadtwerke", "DE02120300000000202051", "BYLADEM1001")
        .reference("Abschlag Strom")
        .build()
        .expect("transaction should be valid"),
    ];

    for tx in &transactions {
        println!(
            "{} {:>10} {} {}",
            tx.entry_date,
            tx.signed_amount(),
            tx.currency,
            tx.reference,
        );
    }

    println!("---");
    print!("{}", export_transactions(&transactions));
}
