//! Stock ledger policy tests
//!
//! Models the ledger's adjustment contract: relative deltas, lazy entry
//! creation, uniform reject-below-zero policy, and lost-update-free
//! serialization of adjustments on the same (product, store) key.

use proptest::prelude::*;
use std::collections::HashMap;

type Key = (u32, u32); // (product, store)

/// In-memory model of the ledger's atomic upsert-and-check
#[derive(Default, Debug, Clone)]
struct LedgerModel {
    entries: HashMap<Key, i64>,
}

impl LedgerModel {
    /// 0 for an unknown pair, never an error
    fn get_quantity(&self, key: Key) -> i64 {
        *self.entries.get(&key).unwrap_or(&0)
    }

    /// Insert-or-accumulate, rejecting a result below zero.
    /// On rejection the entry is unchanged (absent stays absent).
    fn adjust(&mut self, key: Key, delta: i64) -> Result<i64, &'static str> {
        let result = self.get_quantity(key) + delta;
        if result < 0 {
            return Err("insufficient stock");
        }
        self.entries.insert(key, result);
        Ok(result)
    }

    fn total(&self, product: u32) -> i64 {
        self.entries
            .iter()
            .filter(|((p, _), _)| *p == product)
            .map(|(_, q)| q)
            .sum()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[test]
fn unknown_pair_reads_zero() {
    let ledger = LedgerModel::default();
    assert_eq!(ledger.get_quantity((1, 1)), 0);
}

#[test]
fn entry_created_lazily_on_first_credit() {
    let mut ledger = LedgerModel::default();
    assert_eq!(ledger.adjust((1, 1), 5), Ok(5));
    assert_eq!(ledger.get_quantity((1, 1)), 5);
}

#[test]
fn debit_on_absent_entry_rejected() {
    let mut ledger = LedgerModel::default();
    assert!(ledger.adjust((1, 1), -1).is_err());
    // Rejection leaves no entry behind
    assert_eq!(ledger.get_quantity((1, 1)), 0);
}

#[test]
fn rejected_debit_leaves_quantity_unchanged() {
    let mut ledger = LedgerModel::default();
    ledger.adjust((1, 1), 10).unwrap();
    assert!(ledger.adjust((1, 1), -11).is_err());
    assert_eq!(ledger.get_quantity((1, 1)), 10);
}

#[test]
fn exact_drain_reaches_zero() {
    let mut ledger = LedgerModel::default();
    ledger.adjust((1, 1), 10).unwrap();
    assert_eq!(ledger.adjust((1, 1), -10), Ok(0));
    assert!(ledger.adjust((1, 1), -1).is_err());
}

/// 100 adjustments of -1 starting from 100 end at exactly 0.
/// The database upsert serializes concurrent adjustments on the row lock,
/// so any interleaving is equivalent to this serial application.
#[test]
fn hundred_decrements_drain_exactly() {
    let mut ledger = LedgerModel::default();
    ledger.adjust((7, 3), 100).unwrap();

    for _ in 0..100 {
        ledger.adjust((7, 3), -1).unwrap();
    }

    assert_eq!(ledger.get_quantity((7, 3)), 0);
    assert!(ledger.adjust((7, 3), -1).is_err());
}

#[test]
fn transfer_conserves_total() {
    let mut ledger = LedgerModel::default();
    ledger.adjust((1, 1), 100).unwrap();

    let before = ledger.total(1);
    ledger.adjust((1, 1), -30).unwrap();
    ledger.adjust((1, 2), 30).unwrap();

    assert_eq!(ledger.get_quantity((1, 1)), 70);
    assert_eq!(ledger.get_quantity((1, 2)), 30);
    assert_eq!(ledger.total(1), before);
}

// ============================================================================
// Property-Based Tests
// ============================================================================

fn delta_strategy() -> impl Strategy<Value = i64> {
    -50i64..=50
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// No sequence of adjustments ever leaves a negative quantity
    #[test]
    fn quantities_never_negative(deltas in prop::collection::vec(delta_strategy(), 1..100)) {
        let mut ledger = LedgerModel::default();
        for delta in deltas {
            let _ = ledger.adjust((1, 1), delta);
            prop_assert!(ledger.get_quantity((1, 1)) >= 0);
        }
    }

    /// A rejected adjustment is a no-op on the observed quantity
    #[test]
    fn rejection_is_a_noop(initial in 0i64..100, debit in 1i64..200) {
        let mut ledger = LedgerModel::default();
        if initial > 0 {
            ledger.adjust((1, 1), initial).unwrap();
        }

        let before = ledger.get_quantity((1, 1));
        let result = ledger.adjust((1, 1), -debit);

        if debit > initial {
            prop_assert!(result.is_err());
            prop_assert_eq!(ledger.get_quantity((1, 1)), before);
        } else {
            prop_assert_eq!(result, Ok(initial - debit));
        }
    }

    /// Transfers between stores conserve the product's system-wide total
    #[test]
    fn transfers_conserve_total(
        initial in 1i64..1000,
        moves in prop::collection::vec((0u32..4, 0u32..4, 1i64..50), 1..40)
    ) {
        let mut ledger = LedgerModel::default();
        ledger.adjust((1, 0), initial).unwrap();

        for (from, to, qty) in moves {
            if from == to {
                continue;
            }
            // Debit first; only credit when the debit was accepted
            if ledger.adjust((1, from), -qty).is_ok() {
                ledger.adjust((1, to), qty).unwrap();
            }
        }

        prop_assert_eq!(ledger.total(1), initial);
    }

    /// Interleaving order of accepted single-unit debits never loses an update
    #[test]
    fn no_lost_updates(initial in 0i64..200, attempts in 0usize..300) {
        let mut ledger = LedgerModel::default();
        if initial > 0 {
            ledger.adjust((1, 1), initial).unwrap();
        }

        let mut accepted = 0i64;
        for _ in 0..attempts {
            if ledger.adjust((1, 1), -1).is_ok() {
                accepted += 1;
            }
        }

        prop_assert_eq!(ledger.get_quantity((1, 1)), initial - accepted);
        prop_assert_eq!(accepted, initial.min(attempts as i64));
    }
}
