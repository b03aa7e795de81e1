//! Per-month summary statistics for the report's monthly breakdown table.

use serde::Serialize;

use crate::Transaction;

use super::{grouping::group_by_month, month::MonthKey, totals::totals};

/// Summary statistics over one month's transactions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    /// Sum of income amounts in the month.
    pub income: f64,
    /// Sum of expense amounts in the month.
    pub expenses: f64,
    /// Net result, `income - expenses`.
    pub balance: f64,
    /// Number of transactions in the month.
    pub transaction_count: usize,
    /// Mean transaction magnitude, 0 for an empty month.
    pub avg_transaction_amount: f64,
    /// The smallest raw amount in the month.
    ///
    /// The extremes are taken over raw amounts without filtering by kind,
    /// so an income can appear here; downstream displays rely on exactly
    /// this behavior. Both extremes are 0 for an empty month.
    pub largest_expense: f64,
    /// The largest raw amount in the month, likewise unfiltered by kind.
    pub largest_income: f64,
}

/// One row of the monthly series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyEntry {
    /// The month the summary covers.
    pub month: MonthKey,
    /// The summary statistics for that month.
    pub summary: MonthlySummary,
}

/// Summarizes one month's bucket of transactions.
pub fn monthly_summary(transactions: &[&Transaction]) -> MonthlySummary {
    let totals = totals(transactions.iter().copied());

    let avg_transaction_amount = if transactions.is_empty() {
        0.0
    } else {
        let magnitude_sum: f64 = transactions.iter().map(|t| t.amount().abs()).sum();
        magnitude_sum / transactions.len() as f64
    };

    let largest_expense = transactions
        .iter()
        .map(|t| t.amount())
        .reduce(f64::min)
        .unwrap_or(0.0);
    let largest_income = transactions
        .iter()
        .map(|t| t.amount())
        .reduce(f64::max)
        .unwrap_or(0.0);

    MonthlySummary {
        income: totals.income,
        expenses: totals.expenses,
        balance: totals.balance,
        transaction_count: transactions.len(),
        avg_transaction_amount,
        largest_expense,
        largest_income,
    }
}

/// Summarizes every month bucket, most recent month first.
pub fn monthly_series(transactions: &[Transaction]) -> Vec<MonthlyEntry> {
    let mut series: Vec<MonthlyEntry> = group_by_month(transactions)
        .into_iter()
        .map(|(month, bucket)| MonthlyEntry {
            month,
            summary: monthly_summary(&bucket),
        })
        .collect();

    series.sort_by(|a, b| b.month.cmp(&a.month));
    series
}
