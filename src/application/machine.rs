use crate::domain::cashier::Cashier;
use crate::domain::coin::Denomination;
use crate::domain::item::{Item, ItemCatalog};
use crate::domain::money::Money;
use crate::domain::ports::{CoinRecord, ItemRecord, StockSnapshot, StockStore};
use crate::error::{Result, VendError};

/// Outcome of feeding one coin into an open sale.
#[derive(Debug, Clone, PartialEq)]
pub enum SaleProgress {
    /// Not enough money yet; the sale stays open.
    AwaitingFunds { inserted: Money, remaining: Money },
    /// Sale committed: the item is dispensed together with any change.
    Dispensed {
        item: String,
        change: Vec<Denomination>,
    },
    /// Exact change was impossible. Every inserted coin comes back and the
    /// sale is aborted; item stock and machine coins are untouched.
    Aborted { refunded: Vec<Denomination> },
}

/// Per-denomination line of a cashier status report.
#[derive(Debug, Clone, PartialEq)]
pub struct CoinLine {
    pub denomination: Denomination,
    pub count: u32,
    pub subtotal: Money,
}

/// Read-only view over the machine's coin holdings, ascending by face value.
#[derive(Debug, Clone, PartialEq)]
pub struct CashierStatus {
    pub lines: Vec<CoinLine>,
    pub total: Money,
}

/// The vending machine: one item catalog, one cashier, at most one open
/// sale.
///
/// A sale walks Idle -> selected -> awaiting funds -> settled. Selection
/// fails without state change for unknown or empty slots; each inserted
/// coin either reports the shortfall or settles the sale, committing the
/// pending coins and one unit of item stock together, or refunding
/// everything when exact change cannot be made.
#[derive(Debug, Default)]
pub struct Machine {
    catalog: ItemCatalog,
    cashier: Cashier,
    active_sale: Option<usize>,
}

impl Machine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items currently on offer, in catalog order. An item's id is its
    /// position.
    pub fn items(&self) -> &[Item] {
        self.catalog.items()
    }

    pub fn item(&self, id: usize) -> Result<&Item> {
        self.catalog.get(id).ok_or(VendError::ItemNotFound(id))
    }

    /// True while a sale is open.
    pub fn sale_in_progress(&self) -> bool {
        self.active_sale.is_some()
    }

    /// Starts a sale for the given item. Fails without any state change
    /// when the id is unknown or the slot is empty.
    pub fn select_item(&mut self, id: usize) -> Result<&Item> {
        let item = self.catalog.get(id).ok_or(VendError::ItemNotFound(id))?;
        if !item.is_available() {
            return Err(VendError::ItemOutOfStock(item.name.clone()));
        }
        self.active_sale = Some(id);
        Ok(item)
    }

    /// Feeds one coin into the open sale. The sale settles the moment the
    /// inserted total covers the price; until then each call reports the
    /// remaining shortfall and the sale stays open.
    pub fn insert_coin(&mut self, denomination: Denomination) -> Result<SaleProgress> {
        let id = self.active_sale.ok_or(VendError::NoActiveSale)?;
        self.cashier.deposit_pending(denomination);

        let price = self.item(id)?.price;
        let inserted = self.cashier.pending_total();
        if inserted < price {
            return Ok(SaleProgress::AwaitingFunds {
                inserted,
                remaining: price - inserted,
            });
        }
        self.settle(id, inserted - price)
    }

    /// Commit or abort once the customer has paid enough. Either the change
    /// succeeds and the pending coins plus one unit of item stock move
    /// together, or nothing moves and the customer gets every coin back.
    fn settle(&mut self, id: usize, change_due: Money) -> Result<SaleProgress> {
        self.active_sale = None;
        let name = self.item(id)?.name.clone();
        match self.cashier.make_change(change_due) {
            Ok(change) => {
                self.cashier.commit_pending();
                self.catalog.take_one(id);
                Ok(SaleProgress::Dispensed { item: name, change })
            }
            Err(VendError::ChangeUnavailable(_)) => Ok(SaleProgress::Aborted {
                refunded: self.cashier.refund_pending(),
            }),
            Err(other) => Err(other),
        }
    }

    /// Aborts the open sale and returns every pending coin, highest face
    /// value first. With nothing pending this is a no-op returning an empty
    /// list.
    pub fn refund(&mut self) -> Vec<Denomination> {
        self.active_sale = None;
        self.cashier.refund_pending()
    }

    /// Full replace from a stock source.
    ///
    /// The catalog and the coin ledger are cleared before the source is
    /// read, so a source that fails to load leaves the machine empty rather
    /// than reverting to its previous stock. Refused while a sale is open.
    pub fn restock(&mut self, store: &dyn StockStore) -> Result<()> {
        if self.active_sale.is_some() {
            return Err(VendError::SaleInProgress);
        }
        self.catalog.clear();
        self.cashier.clear_all_stock();

        let snapshot = store.load()?;
        for record in snapshot.items {
            self.catalog
                .push(Item::new(record.name, record.price, record.stock));
        }
        for coin in snapshot.coins {
            self.cashier.stock_coin(coin.denomination, coin.count);
        }
        Ok(())
    }

    /// Additive merge from a stock source: existing items gain stock and
    /// take the incoming price, unseen items are appended, coin counts are
    /// added. Nothing is mutated when the load fails. Refused while a sale
    /// is open.
    pub fn add_stock(&mut self, store: &dyn StockStore) -> Result<()> {
        if self.active_sale.is_some() {
            return Err(VendError::SaleInProgress);
        }
        let snapshot = store.load()?;
        for record in snapshot.items {
            self.catalog
                .merge(Item::new(record.name, record.price, record.stock));
        }
        for coin in snapshot.coins {
            self.cashier.add_coin(coin.denomination, coin.count);
        }
        Ok(())
    }

    /// Writes the current catalog and coin stock to the store, coins
    /// ascending by face value for deterministic output.
    pub fn save_stock(&self, store: &dyn StockStore) -> Result<()> {
        let items = self
            .catalog
            .items()
            .iter()
            .map(|item| ItemRecord {
                name: item.name.clone(),
                price: item.price,
                stock: item.stock,
            })
            .collect();
        let stock = self.cashier.snapshot();
        let coins = Denomination::DESCENDING
            .iter()
            .rev()
            .map(|&denomination| CoinRecord {
                denomination,
                count: stock.count(denomination),
            })
            .collect();
        store.save(&StockSnapshot { items, coins })
    }

    /// Per-denomination holdings plus the grand total, ascending by face
    /// value. Every accepted denomination gets a line, stocked or not.
    pub fn cashier_status(&self) -> CashierStatus {
        let stock = self.cashier.snapshot();
        let lines = Denomination::DESCENDING
            .iter()
            .rev()
            .map(|&denomination| {
                let count = stock.count(denomination);
                CoinLine {
                    denomination,
                    count,
                    subtotal: denomination.value() * count,
                }
            })
            .collect();
        CashierStatus {
            lines,
            total: self.cashier.total_stock_value(),
        }
    }
}
