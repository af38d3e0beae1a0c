//! Distribution coordinator tests
//!
//! Covers the pending -> completed state machine, idempotent completion,
//! conservation of stock across transfers, and atomicity of creation.

use proptest::prelude::*;
use shared::types::DistributionStatus;
use std::collections::HashMap;

/// In-memory model of distribution creation and completion
#[derive(Default)]
struct DistributionModel {
    stock: HashMap<u32, i64>, // store -> quantity of one product
    records: Vec<DistributionStatus>,
}

impl DistributionModel {
    /// Create a pending distribution, moving stock from -> to atomically
    fn create(&mut self, from: u32, to: u32, quantity: i64) -> Result<usize, &'static str> {
        if quantity <= 0 {
            return Err("quantity must be positive");
        }
        if from == to {
            return Err("source and destination must differ");
        }
        let source = *self.stock.get(&from).unwrap_or(&0);
        if source - quantity < 0 {
            // Debit rejected: neither record nor credit persists
            return Err("insufficient stock");
        }
        self.stock.insert(from, source - quantity);
        *self.stock.entry(to).or_insert(0) += quantity;
        self.records.push(DistributionStatus::Pending);
        Ok(self.records.len() - 1)
    }

    /// Pure status transition; completing a completed record is a no-op
    fn complete(&mut self, id: usize) -> Result<DistributionStatus, &'static str> {
        let status = self.records.get_mut(id).ok_or("not found")?;
        if status.can_transition_to(DistributionStatus::Completed) {
            *status = DistributionStatus::Completed;
        }
        Ok(*status)
    }

    fn total(&self) -> i64 {
        self.stock.values().sum()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[test]
fn state_machine_is_one_directional() {
    assert!(DistributionStatus::Pending.can_transition_to(DistributionStatus::Completed));
    assert!(!DistributionStatus::Completed.can_transition_to(DistributionStatus::Pending));
    assert!(DistributionStatus::Completed.is_terminal());
}

/// Destination with no prior stock entry gets one created by the transfer
#[test]
fn distribution_creates_destination_entry_lazily() {
    let mut model = DistributionModel::default();
    model.stock.insert(1, 10);

    let id = model.create(1, 2, 5).unwrap();

    assert_eq!(model.stock[&1], 5);
    assert_eq!(model.stock[&2], 5);
    assert_eq!(model.records[id], DistributionStatus::Pending);

    // Completion changes status only; stock moved at creation time
    assert_eq!(model.complete(id), Ok(DistributionStatus::Completed));
    assert_eq!(model.stock[&1], 5);
    assert_eq!(model.stock[&2], 5);
}

/// Completing twice yields completed both times with no stock effect
#[test]
fn completion_is_idempotent() {
    let mut model = DistributionModel::default();
    model.stock.insert(1, 10);
    let id = model.create(1, 2, 4).unwrap();

    assert_eq!(model.complete(id), Ok(DistributionStatus::Completed));
    let stock_after_first = model.stock.clone();

    assert_eq!(model.complete(id), Ok(DistributionStatus::Completed));
    assert_eq!(model.stock, stock_after_first);
}

#[test]
fn completing_unknown_distribution_fails() {
    let mut model = DistributionModel::default();
    assert!(model.complete(42).is_err());
}

#[test]
fn insufficient_source_leaves_nothing_behind() {
    let mut model = DistributionModel::default();
    model.stock.insert(1, 3);

    assert!(model.create(1, 2, 5).is_err());

    // No record, no credit, source untouched
    assert!(model.records.is_empty());
    assert_eq!(model.stock[&1], 3);
    assert_eq!(*model.stock.get(&2).unwrap_or(&0), 0);
}

#[test]
fn self_transfer_rejected() {
    let mut model = DistributionModel::default();
    model.stock.insert(1, 10);
    assert!(model.create(1, 1, 5).is_err());
    assert_eq!(model.stock[&1], 10);
}

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Any sequence of distributions conserves the system-wide total
    #[test]
    fn conservation_across_transfers(
        initial in 1i64..1000,
        moves in prop::collection::vec((0u32..5, 0u32..5, 1i64..60), 0..60)
    ) {
        let mut model = DistributionModel::default();
        model.stock.insert(0, initial);

        for (from, to, quantity) in moves {
            let _ = model.create(from, to, quantity);
            prop_assert_eq!(model.total(), initial);
            prop_assert!(model.stock.values().all(|q| *q >= 0));
        }
    }

    /// Completion never changes any quantity, however often it is applied
    #[test]
    fn completion_never_moves_stock(
        initial in 10i64..1000,
        quantity in 1i64..10,
        completions in 1usize..5
    ) {
        let mut model = DistributionModel::default();
        model.stock.insert(0, initial);

        let id = model.create(0, 1, quantity).unwrap();
        let snapshot = model.stock.clone();

        for _ in 0..completions {
            prop_assert_eq!(model.complete(id), Ok(DistributionStatus::Completed));
            prop_assert_eq!(&model.stock, &snapshot);
        }
    }
}
