use super::{RecordKind, StockRecord};
use crate::domain::money::Money;
use crate::domain::ports::{CoinRecord, ItemRecord, StockSnapshot};
use crate::error::{Result, VendError};
use std::io::Read;

/// Reads a stock file from any CSV source.
///
/// Wraps `csv::Reader` with whitespace trimming and flexible record lengths.
/// Unlike a streaming transaction log, a stock file is applied
/// all-or-nothing by its callers, so any malformed row fails the whole load.
pub struct StockReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> StockReader<R> {
    /// Creates a new `StockReader` from any `Read` source (e.g. File,
    /// Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Deserializes every row into a snapshot, preserving row order.
    pub fn read(self) -> Result<StockSnapshot> {
        let mut snapshot = StockSnapshot::default();
        for record in self.reader.into_deserialize::<StockRecord>() {
            let record = record?;
            match record.kind {
                RecordKind::Item => {
                    let price = record.price.ok_or_else(|| {
                        VendError::MalformedStock(format!("item {} has no price", record.name))
                    })?;
                    if price.is_sign_negative() {
                        return Err(VendError::MalformedStock(format!(
                            "item {} has a negative price",
                            record.name
                        )));
                    }
                    snapshot.items.push(ItemRecord {
                        name: record.name,
                        price: Money::new(price),
                        stock: record.count,
                    });
                }
                RecordKind::Coin => {
                    let denomination = record.name.parse()?;
                    snapshot.coins.push(CoinRecord {
                        denomination,
                        count: record.count,
                    });
                }
            }
        }
        Ok(snapshot)
    }
}
