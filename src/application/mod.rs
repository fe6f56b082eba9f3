//! Application layer: the transaction coordinator that drives one purchase
//! at a time over the domain ledgers and the stock store port.

pub mod machine;
