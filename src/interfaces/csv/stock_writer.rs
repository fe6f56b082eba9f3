use super::{RecordKind, StockRecord};
use crate::domain::ports::StockSnapshot;
use crate::error::Result;
use std::io::Write;

/// Writes a stock snapshot as CSV to any sink, items first, then coins in
/// the order the snapshot provides them (the machine hands coins over
/// ascending by face value, keeping saved files deterministic).
pub struct StockWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> StockWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write(mut self, snapshot: &StockSnapshot) -> Result<()> {
        for item in &snapshot.items {
            self.writer.serialize(StockRecord {
                kind: RecordKind::Item,
                name: item.name.clone(),
                price: Some(item.price.value()),
                count: item.stock,
            })?;
        }
        for coin in &snapshot.coins {
            self.writer.serialize(StockRecord {
                kind: RecordKind::Coin,
                name: coin.denomination.to_string(),
                price: None,
                count: coin.count,
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
