use serde::{Deserialize, Serialize};
use std::fmt;

/// A logged expense entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Database row id
    pub id: i64,
    /// Short description of the expense (max 256 characters)
    pub title: String,
    /// Expense amount (always positive)
    pub amount: f64,
    /// Category label (Food, Transport, Shopping, ...)
    pub category: String,
    /// Optional free-form note
    pub note: Option<String>,
    /// ISO 8601 calendar date: YYYY-MM-DD
    pub date: String,
    /// ISO 8601 time of day: HH:MM:SS
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateExpenseRequest {
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub note: Option<String>,
    /// Optional date override (YYYY-MM-DD) - uses today if not provided
    pub date: Option<String>,
    /// Optional time override (HH:MM:SS) - uses current time if not provided
    pub time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateExpenseRequest {
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub note: Option<String>,
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseListResponse {
    pub expenses: Vec<Expense>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteExpenseResponse {
    pub deleted: bool,
    pub success_message: String,
}

/// Recurring period over which a budget resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CycleType {
    Monthly,
    Weekly,
}

impl fmt::Display for CycleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CycleType::Monthly => write!(f, "MONTHLY"),
            CycleType::Weekly => write!(f, "WEEKLY"),
        }
    }
}

/// A recurring budget tracked against expenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Database row id
    pub id: i64,
    pub name: String,
    /// Total budget amount for one cycle
    pub amount: f64,
    /// ISO 8601 date the budget was started: YYYY-MM-DD
    pub start_date: String,
    pub cycle_type: CycleType,
    /// For MONTHLY: day of month (1-31), for WEEKLY: day of week (0=Sunday .. 6=Saturday)
    pub cycle_value: u32,
    /// Only one budget can be active at a time
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBudgetRequest {
    pub name: String,
    pub amount: f64,
    /// Optional start date override (YYYY-MM-DD) - uses today if not provided
    pub start_date: Option<String>,
    pub cycle_type: CycleType,
    pub cycle_value: u32,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateBudgetRequest {
    pub name: String,
    pub amount: f64,
    pub start_date: String,
    pub cycle_type: CycleType,
    pub cycle_value: u32,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetResponse {
    pub budget: Budget,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetListResponse {
    pub budgets: Vec<Budget>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveBudgetResponse {
    pub budget: Option<Budget>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteBudgetResponse {
    pub deleted: bool,
    pub success_message: String,
}

/// Inclusive date range covered by the current budget cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleWindow {
    /// First day of the cycle (YYYY-MM-DD, inclusive)
    pub start: String,
    /// Last day of the cycle (YYYY-MM-DD, inclusive)
    pub end: String,
}

/// Snapshot of the active budget's current cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetStatusResponse {
    /// The active budget, or None if no budget is active
    pub budget: Option<Budget>,
    /// Current cycle window, present whenever a budget is active
    pub window: Option<CycleWindow>,
    /// Sum of expense amounts inside the window
    pub total_spent: f64,
    /// Budget amount minus total spent (negative when over budget)
    pub remaining: f64,
}

/// Per-category spending total within a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub total_amount: f64,
    /// Share of the grand total, e.g. 33.92 (0 when the grand total is 0)
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummaryResponse {
    pub start_date: String,
    pub end_date: String,
    pub grand_total: f64,
    pub categories: Vec<CategorySummary>,
}

/// Reporting period for the category summary view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Daily,
    Weekly,
    Monthly,
}
