//! Reports module for VerziBiz
//!
//! Derived views over the budget session: category totals, the expense
//! breakdown pie, the weekly income vs spend bars, and the combined
//! dashboard.

pub mod breakdown;
pub mod category_totals;
pub mod chart;
pub mod dashboard;
pub mod weekly;

pub use breakdown::{ExpenseBreakdown, Slice, PALETTE};
pub use category_totals::{CategoryTotal, CategoryTotals};
pub use chart::{ChartData, Dataset, Fill};
pub use dashboard::Dashboard;
pub use weekly::{DayComparison, WeeklyComparison};
