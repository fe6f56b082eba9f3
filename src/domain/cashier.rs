use crate::domain::coin::{CoinStock, Denomination};
use crate::domain::money::Money;
use crate::error::{Result, VendError};

/// Coin custody for the machine.
///
/// Three ledgers: `stock` holds the coins the machine owns, `pending` holds
/// what the current customer has inserted, and `reserved` mirrors coins
/// provisionally pulled out of `stock` while a change computation is in
/// flight so a failed attempt can be undone exactly.
///
/// Invariants: `pending` is empty outside an active sale; `reserved` is
/// empty outside [`Cashier::make_change`].
#[derive(Debug, Default, Clone)]
pub struct Cashier {
    stock: CoinStock,
    pending: CoinStock,
    reserved: CoinStock,
}

impl Cashier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Absolute restock: `stock[denomination] = count`.
    pub fn stock_coin(&mut self, denomination: Denomination, count: u32) {
        self.stock.set(denomination, count);
    }

    /// Additive restock: `stock[denomination] += count`.
    pub fn add_coin(&mut self, denomination: Denomination, count: u32) {
        self.stock.add(denomination, count);
    }

    /// Zeroes every denomination held by the machine.
    pub fn clear_all_stock(&mut self) {
        self.stock.clear();
    }

    /// Registers a coin inserted by the customer. Denomination validity is
    /// enforced at the parse boundary, so every value that reaches this
    /// method is an accepted coin.
    pub fn deposit_pending(&mut self, denomination: Denomination) {
        self.pending.add(denomination, 1);
    }

    /// Moves every pending coin into machine stock. Called when a sale
    /// commits.
    pub fn commit_pending(&mut self) {
        for (denomination, count) in self.pending.drain() {
            self.stock.add(denomination, count);
        }
    }

    /// Hands the customer's coins back, one entry per coin, highest face
    /// value first, and empties the pending ledger. Machine stock is not
    /// touched. Returns an empty list when nothing was pending.
    pub fn refund_pending(&mut self) -> Vec<Denomination> {
        let mut refunded = Vec::new();
        for denomination in Denomination::DESCENDING {
            for _ in 0..self.pending.count(denomination) {
                refunded.push(denomination);
            }
        }
        self.pending.clear();
        refunded
    }

    /// Value of the coins the customer has inserted so far.
    pub fn pending_total(&self) -> Money {
        self.pending.total()
    }

    /// Value of everything the machine holds.
    pub fn total_stock_value(&self) -> Money {
        self.stock.total()
    }

    /// Owned copy of the machine's coin stock; mutating the copy cannot
    /// touch the live ledger.
    pub fn snapshot(&self) -> CoinStock {
        self.stock.clone()
    }

    /// Greedy change computation, largest denomination first.
    ///
    /// Coins leave `stock` as they are picked and are mirrored in
    /// `reserved`. Once a denomination runs out the pass moves on to the
    /// next one, even if the remainder still covers it; there is no
    /// backtracking. If the pass cannot bring the remainder below one minor
    /// unit, every reserved coin is put back and the ledger is exactly as it
    /// was before the call.
    pub fn make_change(&mut self, amount: Money) -> Result<Vec<Denomination>> {
        if amount.is_zero() {
            return Ok(Vec::new());
        }

        let mut remaining = amount;
        let mut coins = Vec::new();
        for denomination in Denomination::DESCENDING {
            let value = denomination.value();
            while remaining >= value {
                if !self.stock.take_one(denomination) {
                    break;
                }
                remaining -= value;
                self.reserved.add(denomination, 1);
                coins.push(denomination);
            }
        }

        if remaining < Money::MINOR_UNIT {
            // The picked coins have permanently left stock.
            self.reserved.clear();
            Ok(coins)
        } else {
            for (denomination, count) in self.reserved.drain() {
                self.stock.add(denomination, count);
            }
            Err(VendError::ChangeUnavailable(amount))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn money(value: rust_decimal::Decimal) -> Money {
        Money::new(value)
    }

    /// A nearly empty float: one 0.20, one 0.05, nothing else.
    fn sparse_cashier() -> Cashier {
        let mut cashier = Cashier::new();
        cashier.stock_coin(Denomination::TwentyPence, 1);
        cashier.stock_coin(Denomination::FivePence, 1);
        cashier
    }

    #[test]
    fn change_for_zero_is_empty_and_touches_nothing() {
        let mut cashier = sparse_cashier();
        let before = cashier.snapshot();
        assert_eq!(cashier.make_change(Money::ZERO).unwrap(), vec![]);
        assert_eq!(cashier.snapshot(), before);
    }

    #[test]
    fn greedy_change_succeeds_with_sparse_stock() {
        let mut cashier = sparse_cashier();
        let change = cashier.make_change(money(dec!(0.25))).unwrap();
        assert_eq!(
            change,
            vec![Denomination::TwentyPence, Denomination::FivePence]
        );
        assert_eq!(cashier.snapshot().count(Denomination::TwentyPence), 0);
        assert_eq!(cashier.snapshot().count(Denomination::FivePence), 0);
    }

    #[test]
    fn failed_change_restores_stock_exactly() {
        // Greedy takes 0.20 (0.10 left), the 0.10 slot is empty, takes the
        // only 0.05 (0.05 left), runs dry. Everything must be rolled back.
        let mut cashier = sparse_cashier();
        let before = cashier.snapshot();

        let err = cashier.make_change(money(dec!(0.30))).unwrap_err();
        assert!(matches!(err, VendError::ChangeUnavailable(_)));
        assert_eq!(cashier.snapshot(), before);
    }

    #[test]
    fn greedy_takes_largest_denominations_first() {
        let mut cashier = Cashier::new();
        cashier.stock_coin(Denomination::OnePound, 5);
        cashier.stock_coin(Denomination::FiftyPence, 5);
        cashier.stock_coin(Denomination::TwentyPence, 5);
        cashier.stock_coin(Denomination::TenPence, 5);

        let change = cashier.make_change(money(dec!(1.80))).unwrap();
        assert_eq!(
            change,
            vec![
                Denomination::OnePound,
                Denomination::FiftyPence,
                Denomination::TwentyPence,
                Denomination::TenPence
            ]
        );
    }

    #[test]
    fn change_is_deterministic_for_a_fixed_stock() {
        let mut first = Cashier::new();
        first.stock_coin(Denomination::FiftyPence, 2);
        first.stock_coin(Denomination::TwentyPence, 4);
        let mut second = first.clone();

        let a = first.make_change(money(dec!(0.90))).unwrap();
        let b = second.make_change(money(dec!(0.90))).unwrap();
        assert_eq!(a, b);
        assert_eq!(first.snapshot(), second.snapshot());
    }

    #[test]
    fn commit_moves_pending_into_stock() {
        let mut cashier = Cashier::new();
        cashier.stock_coin(Denomination::OnePound, 1);
        cashier.deposit_pending(Denomination::FiftyPence);
        cashier.deposit_pending(Denomination::FiftyPence);

        assert_eq!(cashier.pending_total(), money(dec!(1.00)));
        cashier.commit_pending();

        assert_eq!(cashier.pending_total(), Money::ZERO);
        assert_eq!(cashier.total_stock_value(), money(dec!(2.00)));
        assert_eq!(cashier.snapshot().count(Denomination::FiftyPence), 2);
    }

    #[test]
    fn refund_returns_pending_coins_largest_first() {
        let mut cashier = Cashier::new();
        cashier.deposit_pending(Denomination::FivePence);
        cashier.deposit_pending(Denomination::TwoPounds);
        cashier.deposit_pending(Denomination::FivePence);

        let refunded = cashier.refund_pending();
        assert_eq!(
            refunded,
            vec![
                Denomination::TwoPounds,
                Denomination::FivePence,
                Denomination::FivePence
            ]
        );
        assert_eq!(cashier.pending_total(), Money::ZERO);
    }

    #[test]
    fn refund_with_nothing_pending_is_a_noop() {
        let mut cashier = Cashier::new();
        cashier.stock_coin(Denomination::OnePound, 3);
        let before = cashier.snapshot();

        assert!(cashier.refund_pending().is_empty());
        assert_eq!(cashier.snapshot(), before);
    }

    #[test]
    fn snapshot_is_detached_from_the_live_ledger() {
        let mut cashier = Cashier::new();
        cashier.stock_coin(Denomination::OnePound, 1);

        let mut copy = cashier.snapshot();
        copy.set(Denomination::OnePound, 99);

        assert_eq!(cashier.snapshot().count(Denomination::OnePound), 1);
    }
}
