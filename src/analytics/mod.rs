//! Transaction analytics.
//!
//! Pure functions that turn a transaction snapshot into totals, trends,
//! monthly and category summaries, insights, and the dashboard/report view
//! models. Nothing in this module touches a clock or a store: computations
//! that depend on "today" take an explicit reference date.

mod category;
mod grouping;
mod insights;
mod month;
mod monthly;
mod report;
mod totals;

pub use category::{
    CategoryEntry, CategorySummary, TopCategory, category_series, category_summary, top_categories,
};
pub use grouping::{group_by_category, group_by_month};
pub use insights::{Insight, InsightKind, generate_insights};
pub use month::MonthKey;
pub use monthly::{MonthlyEntry, MonthlySummary, monthly_series, monthly_summary};
pub use report::{DashboardSummary, Report, build_report, dashboard_summary, date_range};
pub use totals::{Totals, totals, trend_percentage};
