mod common;

use common::write_stock_csv;
use rust_decimal_macros::dec;
use tempfile::tempdir;
use vendomat::application::machine::{Machine, SaleProgress};
use vendomat::domain::coin::Denomination;
use vendomat::domain::money::Money;
use vendomat::domain::ports::StockStore;
use vendomat::error::VendError;
use vendomat::infrastructure::csv_file::CsvStockStore;

#[test]
fn stock_survives_a_save_and_restock_cycle() {
    let dir = tempdir().unwrap();
    let stock_path = dir.path().join("stock.csv");
    write_stock_csv(
        &stock_path,
        &[("Cola", "1.25", 3), ("Chips", "3.00", 1)],
        &[("1.00", 5), ("0.20", 2)],
    )
    .unwrap();
    let store = CsvStockStore::new(&stock_path);

    let mut machine = Machine::new();
    machine.restock(&store).unwrap();
    assert_eq!(machine.cashier_status().total, Money::new(dec!(5.40)));

    // Buy a Cola with the exact amount.
    machine.select_item(0).unwrap();
    machine.insert_coin(Denomination::OnePound).unwrap();
    machine.insert_coin(Denomination::TwentyPence).unwrap();
    let done = machine.insert_coin(Denomination::FivePence).unwrap();
    assert!(matches!(done, SaleProgress::Dispensed { .. }));

    let saved_path = dir.path().join("saved.csv");
    let saved_store = CsvStockStore::new(&saved_path);
    machine.save_stock(&saved_store).unwrap();

    let mut restored = Machine::new();
    restored.restock(&saved_store).unwrap();

    assert_eq!(restored.items(), machine.items());
    assert_eq!(restored.cashier_status(), machine.cashier_status());
    assert_eq!(restored.item(0).unwrap().stock, 2);
    assert_eq!(restored.cashier_status().total, Money::new(dec!(6.65)));
}

#[test]
fn saved_coins_are_sorted_ascending() {
    let dir = tempdir().unwrap();
    let stock_path = dir.path().join("stock.csv");
    write_stock_csv(&stock_path, &[], &[("2.00", 1), ("0.01", 9)]).unwrap();
    let store = CsvStockStore::new(&stock_path);

    let mut machine = Machine::new();
    machine.restock(&store).unwrap();

    let out_path = dir.path().join("out.csv");
    machine.save_stock(&CsvStockStore::new(&out_path)).unwrap();

    let text = std::fs::read_to_string(&out_path).unwrap();
    let penny = text.find("coin,0.01,,9").unwrap();
    let two_pounds = text.find("coin,2.00,,1").unwrap();
    assert!(penny < two_pounds);

    // Every denomination is written, stocked or not.
    assert!(text.contains("coin,0.50,,0"));
}

#[test]
fn failed_restock_from_disk_leaves_the_machine_empty() {
    let dir = tempdir().unwrap();
    let stock_path = dir.path().join("stock.csv");
    write_stock_csv(&stock_path, &[("Cola", "1.25", 3)], &[("1.00", 5)]).unwrap();
    let store = CsvStockStore::new(&stock_path);

    let mut machine = Machine::new();
    machine.restock(&store).unwrap();

    let bad_path = dir.path().join("bad.csv");
    std::fs::write(&bad_path, "kind,name,price,count\nitem,Cola,not_a_price,10\n").unwrap();

    let err = machine.restock(&CsvStockStore::new(&bad_path)).unwrap_err();
    assert!(matches!(err, VendError::Csv(_)));
    assert!(machine.items().is_empty());
    assert_eq!(machine.cashier_status().total, Money::ZERO);
}

#[test]
fn add_stock_from_disk_merges_items_and_coins() {
    let dir = tempdir().unwrap();
    let stock_path = dir.path().join("stock.csv");
    write_stock_csv(&stock_path, &[("Cola", "1.50", 3)], &[("0.50", 4)]).unwrap();

    let add_path = dir.path().join("addstock.csv");
    write_stock_csv(
        &add_path,
        &[("Cola", "1.75", 5), ("Water", "0.90", 4)],
        &[("0.50", 6)],
    )
    .unwrap();

    let mut machine = Machine::new();
    machine.restock(&CsvStockStore::new(&stock_path)).unwrap();
    machine.add_stock(&CsvStockStore::new(&add_path)).unwrap();

    let cola = machine.item(0).unwrap();
    assert_eq!(cola.stock, 8);
    assert_eq!(cola.price, Money::new(dec!(1.75)));
    assert_eq!(machine.item(1).unwrap().name, "Water");
    assert_eq!(machine.cashier_status().total, Money::new(dec!(5.00)));
}

#[test]
fn missing_stock_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let store = CsvStockStore::new(dir.path().join("nope.csv"));
    assert!(matches!(store.load().unwrap_err(), VendError::Io(_)));
}
