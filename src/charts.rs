//! Chart generation for the report page.
//!
//! Builds the two ECharts visualizations fed by the report view model:
//! - **Trend Chart**: monthly income and expense totals as lines
//! - **Category Chart**: a doughnut of each category's net flow magnitude
//!
//! Each chart is generated as JSON configuration for the ECharts library,
//! paired with the HTML container ID the front end mounts it in. The monthly
//! series arrives most-recent-first and is reversed here so charts render
//! oldest to newest, left to right.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, Tooltip, Trigger},
    series::{Line, Pie},
};

use crate::analytics::{CategoryEntry, MonthlyEntry, Report};

/// A report chart with its HTML container ID and ECharts configuration.
#[derive(Debug, Clone)]
pub struct ReportChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Builds both report charts from a finished report.
pub fn report_charts(report: &Report) -> [ReportChart; 2] {
    [
        ReportChart {
            id: "trend-chart",
            options: trend_chart(&report.monthly).to_string(),
        },
        ReportChart {
            id: "category-chart",
            options: category_chart(&report.categories).to_string(),
        },
    ]
}

/// Line chart of monthly income and expense totals, oldest month first.
pub fn trend_chart(monthly: &[MonthlyEntry]) -> Chart {
    let labels: Vec<String> = monthly.iter().rev().map(|entry| entry.month.label()).collect();
    let income: Vec<f64> = monthly.iter().rev().map(|entry| entry.summary.income).collect();
    let expenses: Vec<f64> = monthly
        .iter()
        .rev()
        .map(|entry| entry.summary.expenses)
        .collect();

    Chart::new()
        .title(Title::new().text("Income vs Expenses").subtext("By month"))
        .tooltip(currency_tooltip())
        .legend(Legend::new())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(Line::new().name("Income").data(income))
        .series(Line::new().name("Expenses").data(expenses))
}

/// Doughnut chart of each category's share of net flow.
pub fn category_chart(categories: &[CategoryEntry]) -> Chart {
    let data: Vec<(f64, &str)> = categories
        .iter()
        .map(|entry| (entry.summary.total.abs(), entry.category.as_str()))
        .collect();

    Chart::new()
        .title(Title::new().text("Spending by Category"))
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .legend(Legend::new())
        .series(
            Pie::new()
                .name("Categories")
                .radius(vec!["40%", "70%"])
                .data(data),
        )
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}
