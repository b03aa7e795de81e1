//! Composes the engine's calculators into the dashboard and report view
//! models.
//!
//! Nothing here computes anything new: this module only filters the
//! snapshot by month, wires the calculators together, and packages their
//! results. The reference date is an explicit parameter so the composition
//! stays deterministic; [ReportService](crate::ReportService) supplies it
//! from a clock at the application boundary.

use serde::Serialize;
use time::Date;

use crate::Transaction;

use super::{
    category::{CategoryEntry, TopCategory, category_series, top_categories},
    insights::{Insight, generate_insights},
    month::MonthKey,
    monthly::{MonthlyEntry, monthly_series},
    totals::{Totals, totals, trend_percentage},
};

/// The headline numbers and rankings for the dashboard page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Income, expenses and balance for the current month.
    pub totals: Totals,
    /// Balance change vs the previous month, as a rounded percentage.
    pub balance_trend: i64,
    /// Income change vs the previous month, as a rounded percentage.
    pub income_trend: i64,
    /// Expense change vs the previous month, as a rounded percentage.
    pub expenses_trend: i64,
    /// The current month's five largest categories by raw amount.
    pub top_categories: Vec<TopCategory>,
}

/// The full report view model handed to the report page and its charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Date of the earliest transaction, or the reference date if none.
    pub start_date: Date,
    /// Date of the latest transaction, or the reference date if none.
    pub end_date: Date,
    /// The current month's income.
    pub total_income: f64,
    /// The current month's expenses.
    pub total_expenses: f64,
    /// The current month's net balance.
    pub net_balance: f64,
    /// Share of the current month's income left over, as a rounded
    /// percentage; 0 when there is no income.
    pub savings_rate: i64,
    /// Income change vs the previous month.
    pub income_trend: i64,
    /// Expense change vs the previous month.
    pub expenses_trend: i64,
    /// Per-month summaries over the whole snapshot, most recent first.
    pub monthly: Vec<MonthlyEntry>,
    /// Per-category summaries over the whole snapshot, largest net flow
    /// first.
    pub categories: Vec<CategoryEntry>,
    /// Rule-derived advisory messages.
    pub insights: Vec<Insight>,
}

/// The earliest and latest transaction dates in the snapshot.
///
/// An empty snapshot has no dates to report, so both ends default to
/// `today`.
pub fn date_range(transactions: &[Transaction], today: Date) -> (Date, Date) {
    let mut dates = transactions.iter().map(Transaction::date);

    match dates.next() {
        None => (today, today),
        Some(first) => dates.fold((first, first), |(start, end), date| {
            (start.min(date), end.max(date))
        }),
    }
}

/// Builds the dashboard view model for the month `today` falls in.
pub fn dashboard_summary(transactions: &[Transaction], today: Date) -> DashboardSummary {
    let current_month = MonthKey::from_date(today);
    let previous_month = current_month.previous();

    let current_totals = totals(transactions_in_month(transactions, current_month));
    let previous_totals = totals(transactions_in_month(transactions, previous_month));

    DashboardSummary {
        totals: current_totals,
        balance_trend: trend_percentage(previous_totals.balance, current_totals.balance),
        income_trend: trend_percentage(previous_totals.income, current_totals.income),
        expenses_trend: trend_percentage(previous_totals.expenses, current_totals.expenses),
        top_categories: top_categories(transactions_in_month(transactions, current_month)),
    }
}

/// Builds the full report view model.
///
/// The summary metrics cover the month `today` falls in; the monthly and
/// category series cover the whole snapshot. An empty snapshot produces a
/// report with zeroed metrics, empty series and no insights.
pub fn build_report(transactions: &[Transaction], today: Date) -> Report {
    tracing::debug!(
        transaction_count = transactions.len(),
        reference_date = %today,
        "building report"
    );

    let (start_date, end_date) = date_range(transactions, today);

    let current_month = MonthKey::from_date(today);
    let previous_month = current_month.previous();

    let current_totals = totals(transactions_in_month(transactions, current_month));
    let previous_totals = totals(transactions_in_month(transactions, previous_month));

    let savings_rate = if current_totals.income > 0.0 {
        ((current_totals.balance / current_totals.income) * 100.0).round() as i64
    } else {
        0
    };

    let income_trend = trend_percentage(previous_totals.income, current_totals.income);
    let expenses_trend = trend_percentage(previous_totals.expenses, current_totals.expenses);

    let monthly = monthly_series(transactions);
    let categories = category_series(transactions);

    let insights = if transactions.is_empty() {
        Vec::new()
    } else {
        generate_insights(expenses_trend, income_trend, savings_rate, &categories)
    };

    Report {
        start_date,
        end_date,
        total_income: current_totals.income,
        total_expenses: current_totals.expenses,
        net_balance: current_totals.balance,
        savings_rate,
        income_trend,
        expenses_trend,
        monthly,
        categories,
        insights,
    }
}

fn transactions_in_month(
    transactions: &[Transaction],
    month: MonthKey,
) -> impl Iterator<Item = &Transaction> {
    transactions
        .iter()
        .filter(move |transaction| MonthKey::from_date(transaction.date()) == month)
}
