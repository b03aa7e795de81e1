//! The application-facing entry point tying the store, the clock and the
//! engine together.

use crate::{
    Clock, Error, ReportChart, TransactionStore,
    analytics::{DashboardSummary, Report, build_report, dashboard_summary},
    charts::report_charts,
};

/// Produces dashboard and report view models from a transaction store.
///
/// This is the outermost orchestration boundary: the one place the current
/// date is read from a [Clock] before being threaded through the engine as
/// an explicit parameter. The service holds no state of its own; every call
/// fetches a fresh snapshot and recomputes from scratch.
#[derive(Debug)]
pub struct ReportService<S, C> {
    store: S,
    clock: C,
}

impl<S, C> ReportService<S, C>
where
    S: TransactionStore,
    C: Clock,
{
    /// Create a service over `store`, using `clock` for the reference date.
    pub fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// The underlying store, for the surrounding CRUD glue.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Builds the dashboard view model for the current month.
    ///
    /// # Errors
    /// Returns whatever error the store raised while listing transactions.
    pub fn dashboard(&self) -> Result<DashboardSummary, Error> {
        let transactions = self.store.list().inspect_err(|error| {
            tracing::error!("could not list transactions for the dashboard: {error}");
        })?;

        Ok(dashboard_summary(&transactions, self.clock.today()))
    }

    /// Builds the full report view model.
    ///
    /// # Errors
    /// Returns whatever error the store raised while listing transactions.
    pub fn report(&self) -> Result<Report, Error> {
        let transactions = self.store.list().inspect_err(|error| {
            tracing::error!("could not list transactions for the report: {error}");
        })?;

        Ok(build_report(&transactions, self.clock.today()))
    }

    /// Builds the report together with its chart configurations.
    ///
    /// # Errors
    /// Returns whatever error the store raised while listing transactions.
    pub fn report_with_charts(&self) -> Result<(Report, [ReportChart; 2]), Error> {
        let report = self.report()?;
        let charts = report_charts(&report);

        Ok((report, charts))
    }
}
