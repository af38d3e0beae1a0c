//! Sales recorder tests
//!
//! Covers total-price capture in integral currency units and the atomicity
//! contract: a sale whose stock debit is rejected leaves no transaction row.

use proptest::prelude::*;

/// In-memory model of one store's stock plus the sales journal
#[derive(Default)]
struct SalesModel {
    stock: i64,
    journal: Vec<i64>, // captured total_price per recorded sale
}

impl SalesModel {
    /// Record-and-debit as a single all-or-nothing unit
    fn record_sale(&mut self, price: i64, quantity: i64) -> Result<i64, &'static str> {
        if quantity <= 0 {
            return Err("quantity must be positive");
        }
        if self.stock - quantity < 0 {
            // Debit rejected: the journal entry must not persist either
            return Err("insufficient stock");
        }
        let total_price = price * quantity;
        self.journal.push(total_price);
        self.stock -= quantity;
        Ok(total_price)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[test]
fn total_price_captured_at_sale_time() {
    let mut model = SalesModel {
        stock: 10,
        ..Default::default()
    };
    let total = model.record_sale(150_000, 2).unwrap();
    assert_eq!(total, 300_000);
    assert_eq!(model.journal, vec![300_000]);
}

/// Price 1000, 10 units on hand: a sale within stock succeeds, one beyond it fails cleanly
#[test]
fn sale_scenario_with_insufficient_followup() {
    let mut model = SalesModel {
        stock: 10,
        ..Default::default()
    };

    // RecordSale(P, salesman, S1, 3)
    assert_eq!(model.record_sale(1000, 3), Ok(3000));
    assert_eq!(model.stock, 7);

    // RecordSale(P, salesman, S1, 20) -> InsufficientStock, quantity unchanged
    assert!(model.record_sale(1000, 20).is_err());
    assert_eq!(model.stock, 7);

    // The failed attempt left no transaction row
    assert_eq!(model.journal.len(), 1);
}

#[test]
fn non_positive_quantities_rejected() {
    let mut model = SalesModel {
        stock: 10,
        ..Default::default()
    };
    assert!(model.record_sale(1000, 0).is_err());
    assert!(model.record_sale(1000, -3).is_err());
    assert_eq!(model.stock, 10);
    assert!(model.journal.is_empty());

    assert!(shared::validate_quantity(0).is_err());
    assert!(shared::validate_quantity(-1).is_err());
    assert!(shared::validate_quantity(1).is_ok());
}

#[test]
fn money_arithmetic_is_integral() {
    // 150000 units * 3 stays exact; no floating point involved
    let price: i64 = 150_000;
    let quantity: i64 = 3;
    assert_eq!(price * quantity, 450_000);
}

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every journal entry corresponds to an accepted debit,
    /// so stock plus units sold always equals the initial stock
    #[test]
    fn journal_and_stock_stay_consistent(
        initial in 0i64..500,
        price in 1i64..1_000_000,
        quantities in prop::collection::vec(-5i64..50, 0..50)
    ) {
        let mut model = SalesModel {
            stock: initial,
            ..Default::default()
        };

        let mut sold = 0i64;
        for quantity in quantities {
            if model.record_sale(price, quantity).is_ok() {
                sold += quantity;
            }
        }

        prop_assert_eq!(model.stock + sold, initial);
        prop_assert!(model.stock >= 0);
    }

    /// Captured totals are exactly price x quantity for accepted sales
    #[test]
    fn totals_match_price_times_quantity(
        price in 1i64..1_000_000,
        quantity in 1i64..100
    ) {
        let mut model = SalesModel {
            stock: quantity,
            ..Default::default()
        };
        let total = model.record_sale(price, quantity).unwrap();
        prop_assert_eq!(total, price * quantity);
    }

    /// A rejected sale changes neither the journal nor the stock
    #[test]
    fn failed_sale_has_no_side_effects(
        initial in 0i64..50,
        price in 1i64..1_000_000,
        over in 1i64..100
    ) {
        let mut model = SalesModel {
            stock: initial,
            ..Default::default()
        };

        let journal_before = model.journal.len();
        let result = model.record_sale(price, initial + over);

        prop_assert!(result.is_err());
        prop_assert_eq!(model.stock, initial);
        prop_assert_eq!(model.journal.len(), journal_before);
    }
}
