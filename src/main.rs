use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::io::{self, BufRead};
use std::path::PathBuf;
use vendomat::application::machine::{Machine, SaleProgress};
use vendomat::domain::coin::Denomination;
use vendomat::infrastructure::csv_file::CsvStockStore;
use vendomat::interfaces::command::{Command, decode};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Stock file loaded on startup, used by the restock command and saved
    /// on exit
    #[arg(long, default_value = "stock.csv")]
    stock: PathBuf,

    /// Stock file used by the addstock command
    #[arg(long, default_value = "addstock.csv")]
    add_stock: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let stock_store = CsvStockStore::new(&cli.stock);
    let add_store = CsvStockStore::new(&cli.add_stock);

    let mut machine = Machine::new();
    if let Err(e) = machine.restock(&stock_store) {
        eprintln!("Warning: starting empty, could not load stock: {e}");
    }

    println!("vendomat");
    print_items(&machine);
    print_help();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.into_diagnostic()?;
        let Some(command) = decode(&line) else {
            continue;
        };
        match command {
            Ok(command) => {
                if execute(command, &mut machine, &stock_store, &add_store) {
                    break;
                }
            }
            Err(e) => eprintln!("{e}"),
        }
    }

    Ok(())
}

/// Runs one command against the machine. Returns true when the session
/// should end.
fn execute(
    command: Command,
    machine: &mut Machine,
    stock_store: &CsvStockStore,
    add_store: &CsvStockStore,
) -> bool {
    match command {
        Command::Help => print_help(),
        Command::View => print_items(machine),
        Command::Status => print_status(machine),
        Command::Select(id) => match machine.select_item(id) {
            Ok(item) => println!(
                "Selected {} at {}. Insert coins, or type refund to cancel.",
                item.name, item.price
            ),
            Err(e) => eprintln!("{e}"),
        },
        Command::Insert(denomination) => match machine.insert_coin(denomination) {
            Ok(SaleProgress::AwaitingFunds {
                inserted,
                remaining,
            }) => println!("Inserted {inserted} so far, {remaining} remaining"),
            Ok(SaleProgress::Dispensed { item, change }) => {
                if change.is_empty() {
                    println!("Please take your {item}. Exact amount, no change.");
                } else {
                    println!(
                        "Please take your {item}. Your change: {}",
                        format_coins(&change)
                    );
                }
            }
            Ok(SaleProgress::Aborted { refunded }) => {
                println!(
                    "Unable to provide exact change. Coins refunded: {}",
                    format_coins(&refunded)
                );
            }
            Err(e) => eprintln!("{e}"),
        },
        Command::Refund => {
            let refunded = machine.refund();
            if refunded.is_empty() {
                println!("Nothing to refund");
            } else {
                println!("Coins refunded: {}", format_coins(&refunded));
            }
        }
        Command::Restock => {
            refund_open_sale(machine);
            match machine.restock(stock_store) {
                Ok(()) => {
                    println!("Restock completed");
                    print_status(machine);
                }
                Err(e) => eprintln!("Restock failed, the machine is now empty: {e}"),
            }
        }
        Command::AddStock => {
            refund_open_sale(machine);
            match machine.add_stock(add_store) {
                Ok(()) => {
                    println!("Stock updated");
                    print_status(machine);
                }
                Err(e) => eprintln!("Could not add stock: {e}"),
            }
        }
        Command::Exit => {
            refund_open_sale(machine);
            match machine.save_stock(stock_store) {
                Ok(()) => println!("Stock saved"),
                Err(e) => eprintln!("Could not save stock: {e}"),
            }
            println!("Exiting");
            return true;
        }
    }
    false
}

/// Stock operations and exit refuse to run over an open sale, so hand the
/// customer their coins back first.
fn refund_open_sale(machine: &mut Machine) {
    if machine.sale_in_progress() {
        let refunded = machine.refund();
        println!("Open sale cancelled. Coins refunded: {}", format_coins(&refunded));
    }
}

fn format_coins(coins: &[Denomination]) -> String {
    coins
        .iter()
        .map(|coin| coin.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_items(machine: &Machine) {
    println!("Current items:");
    for (id, item) in machine.items().iter().enumerate() {
        println!(
            "  ID: {id}\t{}\tprice: {}\tin stock: {} units",
            item.name, item.price, item.stock
        );
    }
}

fn print_status(machine: &Machine) {
    print_items(machine);
    println!("Cashier contents:");
    let status = machine.cashier_status();
    for line in &status.lines {
        println!(
            "  Coin: {} stock: {}\tsubtotal: {}",
            line.denomination, line.count, line.subtotal
        );
    }
    println!("Total sum: {}", status.total);
}

fn print_help() {
    println!("Available commands:");
    println!("  help          - print this list");
    println!("  view          - print all items");
    println!("  select <id>   - start buying an item");
    println!("  insert <coin> - insert a coin (a bare value like 0.50 works too)");
    println!("  refund        - cancel the open sale and return inserted coins");
    println!("  status        - print items and cashier contents");
    println!("  restock       - replace coins and items from the stock file");
    println!("  addstock      - add coins and items from the addstock file");
    println!("  exit          - save current stock and power off");
}
