use crate::domain::money::Money;

/// A purchasable item slot: name, unit price and remaining stock.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    pub price: Money,
    pub stock: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, price: Money, stock: u32) -> Self {
        Self {
            name: name.into(),
            price,
            stock,
        }
    }

    pub fn is_available(&self) -> bool {
        self.stock > 0
    }
}

/// Ordered collection of items. An item's id is its position, which is what
/// customers key in; names are unique within the catalog.
#[derive(Debug, Default, Clone)]
pub struct ItemCatalog {
    items: Vec<Item>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: usize) -> Option<&Item> {
        self.items.get(id)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Additive merge: an item with a matching name gains the incoming stock
    /// and takes the incoming price; an unseen name is appended as a new
    /// catalog entry.
    pub fn merge(&mut self, incoming: Item) {
        match self.items.iter_mut().find(|item| item.name == incoming.name) {
            Some(existing) => {
                existing.stock += incoming.stock;
                existing.price = incoming.price;
            }
            None => self.items.push(incoming),
        }
    }

    /// Removes one unit of the item's stock after a committed sale.
    pub fn take_one(&mut self, id: usize) {
        if let Some(item) = self.items.get_mut(id) {
            item.stock = item.stock.saturating_sub(1);
        }
    }
}
