//! CSV adapters for the stock file format.
//!
//! One file holds both ledgers as `kind,name,price,count` rows: items carry
//! a price, coins leave it empty and use the denomination's textual encoding
//! as the name.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub mod stock_reader;
pub mod stock_writer;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub(crate) enum RecordKind {
    Item,
    Coin,
}

/// The raw row shape shared by the reader and the writer.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub(crate) struct StockRecord {
    pub kind: RecordKind,
    pub name: String,
    pub price: Option<Decimal>,
    pub count: u32,
}
