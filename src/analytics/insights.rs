//! Rule-based advisory messages for the report page.

use serde::Serialize;

use crate::currency::format_currency;

use super::category::CategoryEntry;

/// Expense growth (percent) beyond which spending counts as increased.
const INCREASED_SPENDING_THRESHOLD: i64 = 20;
/// Savings rate (percent) above which savings count as healthy.
const HEALTHY_SAVINGS_THRESHOLD: i64 = 20;
/// Savings rate (percent) below which savings count as low.
const LOW_SAVINGS_THRESHOLD: i64 = 10;
/// Income change (percent) below which income counts as decreased.
const DECREASED_INCOME_THRESHOLD: i64 = -10;

/// The severity of an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    /// Something worth fixing, e.g. a spending spike.
    Warning,
    /// Something going well, e.g. a healthy savings rate.
    Success,
    /// Neutral information, e.g. the top expense category.
    Info,
}

/// A short, rule-derived advisory message about spending or saving
/// behavior.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    /// The severity of the message.
    pub kind: InsightKind,
    /// A pictographic marker shown next to the title.
    pub icon: &'static str,
    /// The headline, e.g. "Increased Spending".
    pub title: String,
    /// The full advisory sentence.
    pub description: String,
}

/// Applies the fixed rule set over the computed metrics.
///
/// Rule application order is also output order: increased spending, the
/// savings-rate band, top expense category, decreased income. The
/// savings-rate rules are mutually exclusive and a rate inside `[10, 20]`
/// yields neither. Callers with no transactions at all should skip this
/// function; the rules only see aggregate metrics and would otherwise
/// report a low savings rate for an empty ledger.
pub fn generate_insights(
    expenses_trend: i64,
    income_trend: i64,
    savings_rate: i64,
    categories: &[CategoryEntry],
) -> Vec<Insight> {
    let mut insights = Vec::new();

    if expenses_trend > INCREASED_SPENDING_THRESHOLD {
        insights.push(Insight {
            kind: InsightKind::Warning,
            icon: "⚠️",
            title: "Increased Spending".to_owned(),
            description: format!(
                "Your expenses have increased by {expenses_trend}% compared to last month. \
                 Consider reviewing your budget."
            ),
        });
    }

    if savings_rate > HEALTHY_SAVINGS_THRESHOLD {
        insights.push(Insight {
            kind: InsightKind::Success,
            icon: "💰",
            title: "Healthy Savings".to_owned(),
            description: format!(
                "Great job! You're saving {savings_rate}% of your income this month."
            ),
        });
    } else if savings_rate < LOW_SAVINGS_THRESHOLD {
        insights.push(Insight {
            kind: InsightKind::Warning,
            icon: "📊",
            title: "Low Savings Rate".to_owned(),
            description: "Your savings rate is below 10%. Consider ways to increase your savings."
                .to_owned(),
        });
    }

    // The series is already ranked by |total| descending, so the first
    // net-negative entry is the biggest outflow.
    let top_expense_category = categories
        .iter()
        .find(|entry| entry.summary.total < 0.0);

    if let Some(entry) = top_expense_category {
        insights.push(Insight {
            kind: InsightKind::Info,
            icon: "📈",
            title: "Top Expense Category".to_owned(),
            description: format!(
                "{} is your highest expense category at {}",
                entry.category,
                format_currency(entry.summary.total.abs())
            ),
        });
    }

    if income_trend < DECREASED_INCOME_THRESHOLD {
        insights.push(Insight {
            kind: InsightKind::Warning,
            icon: "📉",
            title: "Decreased Income".to_owned(),
            description: format!(
                "Your income has decreased by {}% compared to last month.",
                income_trend.abs()
            ),
        });
    }

    insights
}
