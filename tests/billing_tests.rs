use chrono::NaiveDate;
use kontor::billing::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn customer() -> CustomerId {
    CustomerId::from("K-0001")
}

fn invoice() -> Invoice {
    InvoiceBuilder::new(customer(), 19889001, "Kunde AG\nMarienplatz 1\n80331 München")
        .created(date(2024, 6, 15))
        .build()
        .unwrap()
}

fn item(text: &str, quantity: Decimal, price: Decimal, vat_rate: Decimal) -> InvoiceItem {
    InvoiceItemBuilder::new(text, price)
        .customer(customer())
        .quantity(quantity)
        .vat_rate(vat_rate)
        .begin(date(2024, 6, 1))
        .build()
        .unwrap()
}

// --- Totals Engine ---

#[test]
fn mixed_rate_invoice() {
    let mut inv = invoice();
    let items = vec![
        item("Beratung", dec!(1), dec!(100.00), dec!(0.19)),
        item("Hosting", dec!(1), dec!(50.00), dec!(0.19)),
        item("Bücher", dec!(1), dec!(20.00), dec!(0.07)),
    ];

    let vat = inv.recalculate(&items);

    // 100.00 + 50.00 + 20.00
    assert_eq!(inv.net, dec!(170.00));
    // 0.07 * 20.00 = 1.40, 0.19 * 150.00 = 28.50, ascending by rate
    assert_eq!(vat.len(), 2);
    assert_eq!(vat[0].rate, dec!(0.07));
    assert_eq!(vat[0].amount, dec!(1.40));
    assert_eq!(vat[1].rate, dec!(0.19));
    assert_eq!(vat[1].amount, dec!(28.50));
    assert_eq!(inv.gross, dec!(199.90));
}

#[test]
fn zero_rate_items_are_excluded_from_breakdown() {
    let mut inv = invoice();
    let items = vec![
        item("Spende", dec!(1), dec!(80.00), dec!(0)),
        item("Beratung", dec!(1), dec!(100.00), dec!(0.19)),
    ];

    let vat = inv.recalculate(&items);

    assert_eq!(inv.net, dec!(180.00));
    // no zero-amount entry for the 0% item
    assert_eq!(vat.len(), 1);
    assert_eq!(vat[0].rate, dec!(0.19));
    assert_eq!(inv.gross, dec!(199.00));
}

#[test]
fn lines_round_independently_before_summation() {
    // 3 * 0.335 = 1.005 rounds to 1.01 per line; summing first and rounding
    // once would give 2.01 instead of 2.02
    let a = item("Briefmarken", dec!(3), dec!(0.335), dec!(0));
    let b = item("Briefmarken", dec!(3), dec!(0.335), dec!(0));
    assert_eq!(a.subtotal(), dec!(1.01));
    assert_eq!(a.total(), dec!(1.01));

    let mut inv = invoice();
    inv.recalculate(&[a, b]);
    assert_eq!(inv.net, dec!(2.02));
}

#[test]
fn discount_is_rounded_on_its_own() {
    let discounted = InvoiceItemBuilder::new("Wartung", dec!(99.99))
        .customer(customer())
        .discount(dec!(0.10))
        .begin(date(2024, 6, 1))
        .build()
        .unwrap();

    // 0.10 * 99.99 = 9.999 rounds to 10.00
    assert_eq!(discounted.subtotal(), dec!(99.99));
    assert_eq!(discounted.discount_amount(), dec!(10.00));
    assert_eq!(discounted.total(), dec!(89.99));
    assert_eq!(discounted.discount_percentage(), dec!(10));
}

#[test]
fn empty_snapshot_zeroes_the_totals() {
    let mut inv = invoice();
    inv.recalculate(&[item("Beratung", dec!(1), dec!(100.00), dec!(0.19))]);
    assert_eq!(inv.net, dec!(100.00));

    let vat = inv.recalculate(&[]);
    assert_eq!(inv.net, dec!(0));
    assert_eq!(inv.gross, dec!(0));
    assert!(vat.is_empty());
}

#[test]
fn recalculate_always_uses_the_given_snapshot() {
    let mut inv = invoice();
    let first = vec![item("Beratung", dec!(1), dec!(100.00), dec!(0.19))];
    inv.recalculate(&first);
    assert_eq!(inv.net, dec!(100.00));

    // a grown snapshot is fully visible on the next call
    let mut second = first.clone();
    second.push(item("Hosting", dec!(1), dec!(50.00), dec!(0.19)));
    inv.recalculate(&second);
    assert_eq!(inv.net, dec!(150.00));
    assert_eq!(inv.gross, dec!(178.50));
}

#[test]
fn vat_does_not_touch_stored_totals() {
    let inv = invoice();
    let items = vec![item("Beratung", dec!(1), dec!(100.00), dec!(0.19))];
    let vat = inv.vat(&items);
    assert_eq!(vat.len(), 1);
    assert_eq!(inv.net, dec!(0));
    assert_eq!(inv.gross, dec!(0));
}

#[test]
fn gross_is_net_plus_vat() {
    let mut inv = invoice();
    let items = vec![
        item("A", dec!(7), dec!(13.37), dec!(0.19)),
        item("B", dec!(2), dec!(0.05), dec!(0.07)),
        item("C", dec!(1), dec!(99.99), dec!(0)),
    ];
    let vat = inv.recalculate(&items);
    let vat_total: Decimal = vat.iter().map(|group| group.amount).sum();
    assert_eq!(inv.gross, inv.net + vat_total);
}

// --- Payment Eligibility ---

#[test]
fn okay_until_the_deadline_passes() {
    let config = BillingConfig::default();
    let inv = invoice(); // created 2024-06-15, timeframe 14 days

    assert!(inv.is_okay(&config, date(2024, 6, 15)));
    assert!(inv.is_okay(&config, date(2024, 6, 29)));
    assert!(!inv.is_okay(&config, date(2024, 6, 30)));
}

#[test]
fn reminder_restarts_the_deadline() {
    let config = BillingConfig::default();
    let inv = InvoiceBuilder::new(customer(), 19889001, "Kunde AG")
        .created(date(2024, 6, 15))
        .reminded(date(2024, 7, 10))
        .build()
        .unwrap();

    assert!(inv.is_okay(&config, date(2024, 7, 24)));
    assert!(!inv.is_okay(&config, date(2024, 7, 25)));
}

#[test]
fn paid_invoices_are_always_okay() {
    let config = BillingConfig::default();
    let inv = InvoiceBuilder::new(customer(), 19889001, "Kunde AG")
        .created(date(2024, 6, 15))
        .paid(date(2024, 6, 20))
        .build()
        .unwrap();

    assert!(inv.is_okay(&config, date(2030, 1, 1)));
}

#[test]
fn timeframe_comes_from_the_config() {
    let config = BillingConfig {
        payment_timeframe: 30,
        ..BillingConfig::default()
    };
    let inv = invoice();

    assert!(inv.is_okay(&config, date(2024, 7, 15)));
    assert!(!inv.is_okay(&config, date(2024, 7, 16)));
}

// --- Item Save Guard ---

#[test]
fn item_with_customer_passes_the_guard() {
    let mut it = item("Beratung", dec!(1), dec!(100.00), dec!(0.19));
    assert!(it.default_customer(Some(&invoice())).is_ok());
    assert!(it.default_customer(None).is_ok());
}

#[test]
fn customerless_item_is_rejected() {
    let mut it = InvoiceItemBuilder::new("Beratung", dec!(100.00))
        .begin(date(2024, 6, 1))
        .build()
        .unwrap();

    let inv = invoice();
    let err = it.default_customer(Some(&inv)).unwrap_err();
    assert!(
        err.to_string()
            .contains("customer must be set if no invoice is given")
    );
    assert!(it.default_customer(None).is_err());
}

// --- Loose Items & Periods ---

#[test]
fn loose_items_and_attachment() {
    let loose = item("Beratung", dec!(1), dec!(100.00), dec!(0.19));
    assert!(loose.is_loose());

    let attached = InvoiceItemBuilder::new("Beratung", dec!(100.00))
        .customer(customer())
        .invoice(19889001)
        .position(1)
        .begin(date(2024, 6, 1))
        .build()
        .unwrap();
    assert!(!attached.is_loose());
    assert_eq!(attached.invoice, Some(19889001));
}

#[test]
fn period_labels() {
    let recurring = InvoiceItemBuilder::new("Hosting", dec!(49.90))
        .customer(customer())
        .begin(date(2024, 6, 1))
        .end(date(2025, 5, 31))
        .unit(Unit::Month)
        .build()
        .unwrap();
    assert_eq!(recurring.period(), "01.06.2024 – 31.05.2025");

    let one_time = item("Einrichtung", dec!(1), dec!(250.00), dec!(0.19));
    assert_eq!(one_time.period(), "01.06.2024 – one-time");
}

// --- Builder Validation ---

#[test]
fn builder_rejects_bad_input() {
    assert!(
        InvoiceItemBuilder::new("", dec!(1))
            .build()
            .is_err()
    );
    assert!(
        InvoiceItemBuilder::new("x".repeat(201), dec!(1))
            .build()
            .is_err()
    );
    assert!(
        InvoiceItemBuilder::new("Beratung", dec!(1))
            .sku("x".repeat(21))
            .build()
            .is_err()
    );
    assert!(
        InvoiceItemBuilder::new("Beratung", dec!(1))
            .discount(dec!(1.5))
            .build()
            .is_err()
    );
    assert!(
        InvoiceItemBuilder::new("Beratung", dec!(1))
            .vat_rate(dec!(1))
            .build()
            .is_err()
    );
    assert!(
        InvoiceItemBuilder::new("Beratung", dec!(1))
            .begin(date(2024, 6, 15))
            .end(date(2024, 6, 14))
            .build()
            .is_err()
    );
    assert!(
        InvoiceBuilder::new(customer(), 19889001, "   ")
            .build()
            .is_err()
    );
}

// --- Configuration ---

#[test]
fn default_config_is_valid() {
    let config = BillingConfig::default();
    assert_eq!(config.payment_timeframe, 14);
    assert_eq!(config.vat_rate_choices.len(), 3);
    assert!(config.validate().is_ok());
}

#[test]
fn config_validation_rejects_bad_values() {
    let negative = BillingConfig {
        payment_timeframe: -1,
        ..BillingConfig::default()
    };
    assert!(negative.validate().is_err());

    let mut duplicated = BillingConfig::default();
    duplicated
        .vat_rate_choices
        .push(duplicated.vat_rate_choices[2].clone());
    assert!(duplicated.validate().is_err());

    let out_of_range = BillingConfig {
        vat_rate_choices: vec![VatRateChoice {
            rate: dec!(19),
            label: "19 %".into(),
        }],
        ..BillingConfig::default()
    };
    assert!(out_of_range.validate().is_err());
}

#[test]
fn known_vat_rates() {
    assert!(is_known_vat_rate(dec!(0.19)));
    assert!(!is_known_vat_rate(dec!(0.21)));
}

// --- Serialization ---

#[test]
fn invoice_and_items_roundtrip_through_json() {
    let mut inv = invoice();
    let items = vec![item("Beratung", dec!(2), dec!(100.00), dec!(0.19))];
    inv.recalculate(&items);

    let json = serde_json::to_string(&inv).unwrap();
    let parsed: Invoice = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, inv);
    assert_eq!(parsed.net, dec!(200.00));

    let json = serde_json::to_string(&items).unwrap();
    let parsed: Vec<InvoiceItem> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, items);
}

// --- Numbering ---

#[test]
fn numbers_are_day_derived_and_per_customer() {
    let mut registry = NumberRegistry::new();
    let first = registry.next_for(&customer(), date(2024, 6, 15)).unwrap();
    let second = registry.next_for(&customer(), date(2024, 6, 15)).unwrap();
    let other = registry
        .next_for(&CustomerId::from("K-0002"), date(2024, 6, 15))
        .unwrap();

    // 2024-06-15 is day 19889 since the epoch
    assert_eq!(first, 19889001);
    assert_eq!(second, 19889002);
    assert_eq!(other, 19889001);
}
