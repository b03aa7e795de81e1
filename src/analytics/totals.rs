//! Income/expense totals and period-over-period trends.

use serde::Serialize;

use crate::{Transaction, TransactionKind};

/// The income, expense and balance aggregate over a set of transactions.
///
/// `balance` is always `income - expenses`, for any subset of transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Totals {
    /// Sum of the amounts of all income transactions.
    pub income: f64,
    /// Sum of the amounts of all expense transactions.
    pub expenses: f64,
    /// Net result, `income - expenses`.
    pub balance: f64,
}

/// Sums income and expenses over `transactions`.
///
/// The sum is order-independent and an empty input yields all-zero totals.
pub fn totals<'a, I>(transactions: I) -> Totals
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut result = Totals::default();

    for transaction in transactions {
        match transaction.kind() {
            TransactionKind::Income => result.income += transaction.amount(),
            TransactionKind::Expense => result.expenses += transaction.amount(),
        }
        result.balance = result.income - result.expenses;
    }

    result
}

/// The percentage change from `previous` to `current`, rounded to a whole
/// number.
///
/// Going from nothing to something counts as a full positive swing (100),
/// and staying at nothing counts as no change (0); this branch also keeps
/// the division well-defined. Rounding is half away from zero, so a change
/// of 20.5% reports as 21 and -20.5% as -21.
pub fn trend_percentage(previous: f64, current: f64) -> i64 {
    if previous == 0.0 {
        return if current > 0.0 { 100 } else { 0 };
    }

    (((current - previous) / previous.abs()) * 100.0).round() as i64
}

#[cfg(test)]
mod totals_tests {
    use time::macros::date;

    use super::{totals, trend_percentage};
    use crate::{Transaction, TransactionKind};

    fn transaction(amount: f64, kind: TransactionKind) -> Transaction {
        Transaction::build(amount, date!(2024 - 01 - 15), kind)
            .finalise(None)
            .unwrap()
    }

    #[test]
    fn totals_sums_income_and_expenses_separately() {
        let transactions = vec![
            transaction(1000.0, TransactionKind::Income),
            transaction(200.0, TransactionKind::Expense),
            transaction(100.0, TransactionKind::Expense),
        ];

        let result = totals(&transactions);

        assert_eq!(result.income, 1000.0);
        assert_eq!(result.expenses, 300.0);
        assert_eq!(result.balance, 700.0);
    }

    #[test]
    fn totals_balance_equals_income_minus_expenses() {
        let transactions = vec![
            transaction(12.5, TransactionKind::Income),
            transaction(0.1, TransactionKind::Expense),
            transaction(99.99, TransactionKind::Income),
            transaction(45.0, TransactionKind::Expense),
        ];

        let result = totals(&transactions);

        assert_eq!(result.balance, result.income - result.expenses);
    }

    #[test]
    fn totals_of_empty_input_are_zero() {
        let empty: Vec<Transaction> = Vec::new();
        let result = totals(&empty);

        assert_eq!(result.income, 0.0);
        assert_eq!(result.expenses, 0.0);
        assert_eq!(result.balance, 0.0);
    }

    #[test]
    fn totals_is_order_independent() {
        let forwards = vec![
            transaction(10.0, TransactionKind::Income),
            transaction(3.0, TransactionKind::Expense),
            transaction(7.0, TransactionKind::Income),
        ];
        let mut backwards = forwards.clone();
        backwards.reverse();

        assert_eq!(totals(&forwards), totals(&backwards));
    }

    #[test]
    fn trend_from_zero_to_zero_is_zero() {
        assert_eq!(trend_percentage(0.0, 0.0), 0);
    }

    #[test]
    fn trend_from_zero_to_positive_is_full_swing() {
        assert_eq!(trend_percentage(0.0, 50.0), 100);
    }

    #[test]
    fn trend_reports_relative_change() {
        assert_eq!(trend_percentage(100.0, 150.0), 50);
        assert_eq!(trend_percentage(100.0, 50.0), -50);
    }

    #[test]
    fn trend_rounds_fractional_changes() {
        // (500 - 700) / 700 = -28.57...%
        assert_eq!(trend_percentage(700.0, 500.0), -29);
    }

    #[test]
    fn trend_rounds_half_away_from_zero() {
        assert_eq!(trend_percentage(200.0, 241.0), 21);
        assert_eq!(trend_percentage(200.0, 159.0), -21);
    }

    #[test]
    fn trend_uses_magnitude_of_negative_previous() {
        // A balance can go negative; the denominator is its magnitude.
        assert_eq!(trend_percentage(-100.0, 50.0), 150);
        assert_eq!(trend_percentage(-100.0, -150.0), -50);
    }
}
