use crate::domain::ports::{StockSnapshot, StockStore};
use crate::error::Result;
use crate::interfaces::csv::stock_reader::StockReader;
use crate::interfaces::csv::stock_writer::StockWriter;
use std::fs::File;
use std::path::PathBuf;

/// A stock store backed by a single CSV file on disk.
///
/// Load failures (missing file, malformed rows) surface as errors; callers
/// decide what a failed load means for machine state.
pub struct CsvStockStore {
    path: PathBuf,
}

impl CsvStockStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StockStore for CsvStockStore {
    fn load(&self) -> Result<StockSnapshot> {
        let file = File::open(&self.path)?;
        StockReader::new(file).read()
    }

    fn save(&self, snapshot: &StockSnapshot) -> Result<()> {
        let file = File::create(&self.path)?;
        StockWriter::new(file).write(snapshot)
    }
}
