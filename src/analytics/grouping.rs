//! Partitions a transaction set into month and category buckets.
//!
//! Buckets preserve the relative input order of their transactions. Bucket
//! iteration order is unspecified; consumers that need a particular order
//! (the monthly and category series do) sort after grouping.

use std::collections::HashMap;

use crate::Transaction;

use super::month::MonthKey;

/// Groups transactions by the calendar month they fall in.
pub fn group_by_month(transactions: &[Transaction]) -> HashMap<MonthKey, Vec<&Transaction>> {
    let mut groups: HashMap<MonthKey, Vec<&Transaction>> = HashMap::new();

    for transaction in transactions {
        groups
            .entry(MonthKey::from_date(transaction.date()))
            .or_default()
            .push(transaction);
    }

    groups
}

/// Groups transactions by their raw category label.
///
/// Labels are not normalized: "Food" and "food" are distinct buckets, and
/// the empty string is a bucket of its own.
pub fn group_by_category(transactions: &[Transaction]) -> HashMap<&str, Vec<&Transaction>> {
    let mut groups: HashMap<&str, Vec<&Transaction>> = HashMap::new();

    for transaction in transactions {
        groups
            .entry(transaction.category())
            .or_default()
            .push(transaction);
    }

    groups
}
