use order_reverse::{load_orders_from, ErrorKind, Order, OrderError, OrderLoader, Result};
use order_reverse::{LocalStorage, DEFAULT_ORDERS_FILE};
use rust_decimal::Decimal;
use tempfile::TempDir;

fn write_orders(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_load_literal_file() {
    let dir = TempDir::new().unwrap();
    let path = write_orders(&dir, "1_9.csv", "1;Widget;19.99\n2;Gadget;5.00\n");

    let orders: Vec<Order> = load_orders_from(path).collect::<Result<_>>().unwrap();

    assert_eq!(
        orders,
        vec![
            Order::new(1, "Widget", Decimal::new(1999, 2)),
            Order::new(2, "Gadget", Decimal::new(500, 2)),
        ]
    );
}

#[test]
fn test_default_file_under_storage_root() {
    let dir = TempDir::new().unwrap();
    write_orders(&dir, DEFAULT_ORDERS_FILE, "10;Stapler;12.50\r\n11;Paper;3.10\r\n");

    let loader = OrderLoader::new(LocalStorage::new(dir.path()), DEFAULT_ORDERS_FILE);
    let orders: Vec<Order> = loader.collect::<Result<_>>().unwrap();

    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].to_string(), "10. Item: Stapler. Price: 12.50");
    assert_eq!(orders[1].customer_name, "Paper");
}

#[test]
fn test_malformed_amount_on_first_element() {
    let dir = TempDir::new().unwrap();
    let path = write_orders(&dir, "bad.csv", "1;Widget;notanumber\n");

    let mut loader = load_orders_from(path);
    let err = loader.next().unwrap().unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ParseError);
    assert!(matches!(err, OrderError::InvalidAmount { line: 1, .. }));
    assert!(loader.next().is_none());
}

#[test]
fn test_missing_file_on_first_traversal() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.csv");

    // Building the loader touches nothing.
    let mut loader = load_orders_from(missing.to_str().unwrap());

    let err = loader.next().unwrap().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FileNotFound);
    assert!(loader.next().is_none());
}

#[test]
fn test_partial_consumption_skips_later_errors() {
    let dir = TempDir::new().unwrap();
    let path = write_orders(
        &dir,
        "orders.csv",
        "1;Widget;19.99\n2;Gadget;5.00\nthree;Broken;1.00\n",
    );

    let first_two: Vec<Order> = load_orders_from(path)
        .take(2)
        .collect::<Result<_>>()
        .unwrap();

    assert_eq!(first_two.len(), 2);
}

#[test]
fn test_semicolon_in_description_shifts_fields() {
    let dir = TempDir::new().unwrap();
    let path = write_orders(&dir, "orders.csv", "1;Nuts; bolts;4.00\n");

    let err = load_orders_from(path).next().unwrap().unwrap_err();

    assert!(matches!(err, OrderError::InvalidAmount { .. }));
}

#[test]
fn test_non_utf8_description_still_loads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(DEFAULT_ORDERS_FILE);
    // cp1251 "Стол"
    std::fs::write(&path, b"1;\xD1\xF2\xEE\xEB;19.99\n2;Gadget;5.00\n").unwrap();

    let orders: Vec<Order> = load_orders_from(path.to_str().unwrap())
        .collect::<Result<_>>()
        .unwrap();

    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].id, 1);
    assert_eq!(orders[0].customer_name, "\u{FFFD}".repeat(4));
    assert_eq!(orders[0].amount, Decimal::new(1999, 2));
}
