use chrono::NaiveDate;
use kontor::billing::*;
use rust_decimal_macros::dec;

fn main() {
    let customer = CustomerId::from("K-0001");
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    // Numbers are day-derived and unique per customer
    let mut registry = NumberRegistry::new();
    let number = registry
        .next_for(&customer, today)
        .expect("number sequence should not be exhausted");

    let mut invoice = InvoiceBuilder::new(
        customer.clone(),
        number,
        "Kunde AG\nMarienplatz 1\n80331 München",
    )
    .created(today)
    .build()
    .expect("invoice should be valid");

    let items = vec![
        InvoiceItemBuilder::new("Softwareentwicklung", dec!(120))
            .customer(customer.clone())
            .invoice(number)
            .position(1)
            .quantity(dec!(80))
            .vat_rate(dec!(0.19))
            .begin(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
            .build()
            .expect("item should be valid"),
        InvoiceItemBuilder::new("Hosting (monatlich)", dec!(49.90))
            .customer(customer.clone())
            .invoice(number)
            .position(2)
            .vat_rate(dec!(0.19))
            .unit(Unit::Month)
            .begin(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
            .end(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap())
            .build()
            .expect("item should be valid"),
    ];

    let vat = invoice.recalculate(&items);

    println!("{invoice}");
    println!("Customer: {}", invoice.customer);
    println!("Created:  {}", invoice.created);
    println!("---");
    for item in &items {
        println!(
            "  {} x {} @ {} = {}  ({})",
            item.quantity,
            item.text,
            item.price,
            item.total(),
            item.period(),
        );
    }
    println!("---");
    println!("Net:   {} EUR", invoice.net);
    for group in &vat {
        println!("VAT {}: {} EUR", group.rate, group.amount);
    }
    println!("Gross: {} EUR", invoice.gross);

    let config = BillingConfig::default();
    println!(
        "Okay on {}: {}",
        today,
        invoice.is_okay(&config, today)
    );
}
