use crate::domain::coin::Denomination;
use crate::error::{Result, VendError};

/// A decoded user command, ready for the machine to act on.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    View,
    Status,
    Select(usize),
    Insert(Denomination),
    Refund,
    Restock,
    AddStock,
    Exit,
}

/// Decodes one input line into a command.
///
/// Pure: no I/O and no machine state. Blank lines decode to `None`. A bare
/// coin value ("0.50") is shorthand for inserting that coin, so a customer
/// can feed coins without typing `insert` every time. Extra words after a
/// complete command are ignored.
pub fn decode(line: &str) -> Option<Result<Command>> {
    let mut words = line.split_whitespace();
    let head = words.next()?;

    let command = match head {
        "help" => Ok(Command::Help),
        "view" => Ok(Command::View),
        "status" => Ok(Command::Status),
        "refund" => Ok(Command::Refund),
        "restock" => Ok(Command::Restock),
        "addstock" => Ok(Command::AddStock),
        "exit" => Ok(Command::Exit),
        "select" => match words.next().map(str::parse) {
            Some(Ok(id)) => Ok(Command::Select(id)),
            _ => Err(VendError::UnknownCommand(line.trim().to_string())),
        },
        "insert" => match words.next() {
            Some(coin) => coin.parse().map(Command::Insert),
            None => Err(VendError::UnknownCommand(line.trim().to_string())),
        },
        other => {
            // Anything that looks like a number is a coin attempt; report
            // it as such rather than as an unknown command.
            if other.starts_with(|c: char| c.is_ascii_digit()) {
                other.parse().map(Command::Insert)
            } else {
                Err(VendError::UnknownCommand(other.to_string()))
            }
        }
    };
    Some(command)
}
