use crate::domain::coin::Denomination;
use crate::domain::money::Money;
use crate::error::Result;

/// One item row in a stock source.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRecord {
    pub name: String,
    pub price: Money,
    pub stock: u32,
}

/// One coin row in a stock source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoinRecord {
    pub denomination: Denomination,
    pub count: u32,
}

/// Everything a stock source holds: the item catalog and the coin ledger.
/// The wire format is left to the implementation behind [`StockStore`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockSnapshot {
    pub items: Vec<ItemRecord>,
    pub coins: Vec<CoinRecord>,
}

/// Port for loading and saving machine stock.
pub trait StockStore {
    fn load(&self) -> Result<StockSnapshot>;
    fn save(&self, snapshot: &StockSnapshot) -> Result<()>;
}
