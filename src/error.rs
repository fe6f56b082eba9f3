use crate::domain::money::Money;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, VendError>;

#[derive(Error, Debug)]
pub enum VendError {
    #[error("coin not accepted: {0}")]
    UnknownDenomination(String),
    #[error("no item with id {0}")]
    ItemNotFound(usize),
    #[error("out of stock: {0}")]
    ItemOutOfStock(String),
    #[error("no item selected")]
    NoActiveSale,
    #[error("a sale is in progress")]
    SaleInProgress,
    #[error("cannot make exact change for {0}")]
    ChangeUnavailable(Money),
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("malformed stock record: {0}")]
    MalformedStock(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
