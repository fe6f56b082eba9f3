use crate::domain::money::Money;
use crate::error::VendError;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// One of the accepted coin face values.
///
/// Variants are declared ascending so the derived `Ord` agrees with face
/// value; the change algorithm walks [`Denomination::DESCENDING`] instead.
///
/// `FromStr` and `Display` are the single source of truth for the textual
/// encoding ("0.50"), shared by stock parsing, coin insertion and change
/// formatting. A string that does not name an accepted coin fails to parse,
/// so an invalid denomination can never reach the ledgers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Denomination {
    OnePenny,
    TwoPence,
    FivePence,
    TenPence,
    TwentyPence,
    FiftyPence,
    OnePound,
    TwoPounds,
}

impl Denomination {
    /// Every accepted denomination, largest face value first. This is the
    /// traversal order of the greedy change pass.
    pub const DESCENDING: [Denomination; 8] = [
        Denomination::TwoPounds,
        Denomination::OnePound,
        Denomination::FiftyPence,
        Denomination::TwentyPence,
        Denomination::TenPence,
        Denomination::FivePence,
        Denomination::TwoPence,
        Denomination::OnePenny,
    ];

    pub fn value(self) -> Money {
        let value = match self {
            Denomination::TwoPounds => dec!(2.00),
            Denomination::OnePound => dec!(1.00),
            Denomination::FiftyPence => dec!(0.50),
            Denomination::TwentyPence => dec!(0.20),
            Denomination::TenPence => dec!(0.10),
            Denomination::FivePence => dec!(0.05),
            Denomination::TwoPence => dec!(0.02),
            Denomination::OnePenny => dec!(0.01),
        };
        Money::new(value)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Denomination::TwoPounds => "2.00",
            Denomination::OnePound => "1.00",
            Denomination::FiftyPence => "0.50",
            Denomination::TwentyPence => "0.20",
            Denomination::TenPence => "0.10",
            Denomination::FivePence => "0.05",
            Denomination::TwoPence => "0.02",
            Denomination::OnePenny => "0.01",
        }
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Denomination {
    type Err = VendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2.00" => Ok(Denomination::TwoPounds),
            "1.00" => Ok(Denomination::OnePound),
            "0.50" => Ok(Denomination::FiftyPence),
            "0.20" => Ok(Denomination::TwentyPence),
            "0.10" => Ok(Denomination::TenPence),
            "0.05" => Ok(Denomination::FivePence),
            "0.02" => Ok(Denomination::TwoPence),
            "0.01" => Ok(Denomination::OnePenny),
            other => Err(VendError::UnknownDenomination(other.to_string())),
        }
    }
}

/// Count ledger: accepted denomination to number of physical coins.
///
/// Zero counts are never stored, so two ledgers holding the same coins are
/// structurally equal regardless of how they got there. Counts are unsigned;
/// a negative count is unrepresentable.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CoinStock {
    counts: BTreeMap<Denomination, u32>,
}

impl CoinStock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, denomination: Denomination) -> u32 {
        self.counts.get(&denomination).copied().unwrap_or(0)
    }

    /// Absolute set. A zero count removes the entry.
    pub fn set(&mut self, denomination: Denomination, count: u32) {
        if count == 0 {
            self.counts.remove(&denomination);
        } else {
            self.counts.insert(denomination, count);
        }
    }

    pub fn add(&mut self, denomination: Denomination, count: u32) {
        if count > 0 {
            *self.counts.entry(denomination).or_insert(0) += count;
        }
    }

    /// Removes a single coin. Returns false, without touching the ledger,
    /// when the denomination is out of stock.
    pub fn take_one(&mut self, denomination: Denomination) -> bool {
        match self.counts.get_mut(&denomination) {
            Some(count) => {
                *count -= 1;
                if *count == 0 {
                    self.counts.remove(&denomination);
                }
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of count times face value over every denomination.
    pub fn total(&self) -> Money {
        self.counts
            .iter()
            .map(|(&denomination, &count)| denomination.value() * count)
            .sum()
    }

    /// Non-zero entries, ascending by face value.
    pub fn iter(&self) -> impl Iterator<Item = (Denomination, u32)> + '_ {
        self.counts
            .iter()
            .map(|(&denomination, &count)| (denomination, count))
    }

    /// Empties the ledger, handing back what it held.
    pub fn drain(&mut self) -> Vec<(Denomination, u32)> {
        std::mem::take(&mut self.counts).into_iter().collect()
    }
}
