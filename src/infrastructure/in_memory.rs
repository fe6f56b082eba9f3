use crate::domain::ports::{StockSnapshot, StockStore};
use crate::error::Result;
use std::cell::RefCell;

/// A stock store backed by an owned snapshot.
///
/// Used by tests and anywhere a machine should be seeded without touching
/// the filesystem. Interior mutability keeps the `StockStore` trait free of
/// `&mut self`; the machine is single-threaded, so a `RefCell` is enough.
#[derive(Debug, Default)]
pub struct InMemoryStockStore {
    snapshot: RefCell<StockSnapshot>,
}

impl InMemoryStockStore {
    pub fn new(snapshot: StockSnapshot) -> Self {
        Self {
            snapshot: RefCell::new(snapshot),
        }
    }

    /// The last saved snapshot.
    pub fn snapshot(&self) -> StockSnapshot {
        self.snapshot.borrow().clone()
    }
}

impl StockStore for InMemoryStockStore {
    fn load(&self) -> Result<StockSnapshot> {
        Ok(self.snapshot.borrow().clone())
    }

    fn save(&self, snapshot: &StockSnapshot) -> Result<()> {
        *self.snapshot.borrow_mut() = snapshot.clone();
        Ok(())
    }
}
