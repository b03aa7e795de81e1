//! Per-category breakdowns.
//!
//! Two distinct computations live here. The report's category series splits
//! each category into income and expenses and expresses its net total as a
//! share of the gross transacted volume. The dashboard's top-categories list
//! is simpler: it ranks categories by their summed raw amount, whatever the
//! kind, and takes the five largest. The two must not be conflated; their
//! percentages mean different things.

use std::{cmp::Ordering, collections::HashMap};

use serde::Serialize;

use crate::Transaction;

use super::{grouping::group_by_category, totals::totals};

/// How many categories the dashboard ranking keeps.
const TOP_CATEGORY_LIMIT: usize = 5;

/// Summary of one category's activity for the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    /// Sum of income amounts in the category.
    pub income: f64,
    /// Sum of expense amounts in the category.
    pub expenses: f64,
    /// Net flow, `income - expenses`; negative for expense categories.
    pub total: f64,
    /// Number of transactions in the category.
    pub transaction_count: usize,
    /// The category's share of gross volume: `|total|` over the sum of
    /// `|amount|` across all transactions, as a rounded percentage.
    ///
    /// Because the numerator is a net and the denominator is gross, a
    /// category whose income and expenses offset each other understates
    /// its share; report consumers depend on exactly this number.
    pub percentage: i64,
}

/// One row of the report's category series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryEntry {
    /// The raw category label.
    pub category: String,
    /// The summary for that category.
    pub summary: CategorySummary,
}

/// One row of the dashboard's top-categories list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopCategory {
    /// The raw category label.
    pub name: String,
    /// Sum of raw transaction amounts in the category, income and expenses
    /// alike.
    pub amount: f64,
    /// The category's rounded share of the summed amounts of all
    /// categories.
    pub percentage: i64,
}

/// Summarizes one category bucket.
///
/// `total_volume` is the sum of `|amount|` over all transactions in all
/// categories; it is computed once by [category_series] and shared so every
/// percentage has the same denominator. A non-positive volume yields a zero
/// percentage.
pub fn category_summary(transactions: &[&Transaction], total_volume: f64) -> CategorySummary {
    let totals = totals(transactions.iter().copied());

    let percentage = if total_volume > 0.0 {
        ((totals.balance.abs() / total_volume) * 100.0).round() as i64
    } else {
        0
    };

    CategorySummary {
        income: totals.income,
        expenses: totals.expenses,
        total: totals.balance,
        transaction_count: transactions.len(),
        percentage,
    }
}

/// Summarizes every category, sorted by net-flow magnitude descending.
///
/// Ties in `|total|` order by category name so the ranking is
/// deterministic.
pub fn category_series(transactions: &[Transaction]) -> Vec<CategoryEntry> {
    let total_volume: f64 = transactions.iter().map(|t| t.amount().abs()).sum();

    let mut series: Vec<CategoryEntry> = group_by_category(transactions)
        .into_iter()
        .map(|(category, bucket)| CategoryEntry {
            category: category.to_owned(),
            summary: category_summary(&bucket, total_volume),
        })
        .collect();

    series.sort_by(|a, b| {
        b.summary
            .total
            .abs()
            .partial_cmp(&a.summary.total.abs())
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });
    series
}

/// Ranks categories by summed raw amount and keeps the largest five.
///
/// This is the dashboard path: it does not separate income from expenses,
/// and each percentage is the category's share of the summed amounts of
/// *all* categories, not just the surviving five. An all-zero amount sum
/// yields zero percentages.
pub fn top_categories<'a, I>(transactions: I) -> Vec<TopCategory>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut amounts: HashMap<&str, f64> = HashMap::new();
    for transaction in transactions {
        *amounts.entry(transaction.category()).or_insert(0.0) += transaction.amount();
    }

    let mut ranked: Vec<(String, f64)> = amounts
        .into_iter()
        .map(|(category, amount)| (category.to_owned(), amount))
        .collect();

    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });

    let total_amount: f64 = ranked.iter().map(|(_, amount)| amount).sum();

    ranked
        .into_iter()
        .take(TOP_CATEGORY_LIMIT)
        .map(|(name, amount)| {
            let percentage = if total_amount > 0.0 {
                ((amount / total_amount) * 100.0).round() as i64
            } else {
                0
            };

            TopCategory {
                name,
                amount,
                percentage,
            }
        })
        .collect()
}
