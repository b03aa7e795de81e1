//! Finsight is the analytics engine behind a personal finance app.
//!
//! Given a snapshot of dated, categorized income and expense transactions,
//! this library computes the numbers the dashboard and report pages display:
//! month totals, month-over-month trends, per-category breakdowns, monthly
//! summaries, rule-based textual insights, and the chart configurations that
//! visualize them.
//!
//! The engine is a pure-function pipeline: every computation is a
//! deterministic transform of an in-memory transaction slice. Where a
//! calculation depends on "today" (trends compare the current calendar month
//! against the previous one), the reference date is an explicit parameter;
//! [`ReportService`] is the only place a [`Clock`] is consulted.

#![warn(missing_docs)]

pub mod analytics;
mod charts;
mod clock;
mod currency;
mod logging;
mod service;
mod store;
mod transaction;

pub use charts::{ReportChart, category_chart, report_charts, trend_chart};
pub use clock::{Clock, FixedClock, SystemClock};
pub use currency::{format_currency, format_currency_rounded};
pub use logging::setup_logging;
pub use service::ReportService;
pub use store::{MemoryTransactionStore, TransactionStore};
pub use transaction::{Transaction, TransactionBuilder, TransactionKind};

/// Alias for the integer type used for transaction IDs.
pub type TransactionId = i64;

/// Alias for the integer type used for user IDs.
pub type UserId = i64;

/// The errors that may occur in the engine and its store boundary.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A negative or non-finite amount was used to create a transaction.
    ///
    /// Transaction amounts are magnitudes; whether money came in or went out
    /// is carried by [`TransactionKind`], not by the sign of the amount.
    #[error("{0} is not a valid transaction amount")]
    InvalidAmount(f64),

    /// The requested transaction could not be found in the store.
    #[error("the requested transaction could not be found")]
    NotFound,

    /// Tried to update a transaction that does not exist.
    #[error("tried to update a transaction that is not in the store")]
    UpdateMissingTransaction,

    /// Tried to delete a transaction that does not exist.
    #[error("tried to delete a transaction that is not in the store")]
    DeleteMissingTransaction,

    /// An invalid canonical timezone string was used to create a clock.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),
}
