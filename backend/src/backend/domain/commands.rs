//! Domain-level command and query types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer is responsible for mapping the
//! public DTOs defined in the `shared` crate to these internal types.

pub mod expenses {
    use super::super::models::expense::Expense as DomainExpense;

    /// Input for creating a new expense.
    #[derive(Debug, Clone)]
    pub struct CreateExpenseCommand {
        pub title: String,
        pub amount: f64,
        pub category: String,
        pub note: Option<String>,
        /// Optional date override (YYYY-MM-DD), defaults to today.
        pub date: Option<String>,
        /// Optional time override (HH:MM:SS), defaults to the current time.
        pub time: Option<String>,
    }

    /// Input for updating an existing expense.
    #[derive(Debug, Clone)]
    pub struct UpdateExpenseCommand {
        pub id: i64,
        pub title: String,
        pub amount: f64,
        pub category: String,
        pub note: Option<String>,
        pub date: String,
        pub time: String,
    }

    /// Query parameters for listing expenses.
    #[derive(Debug, Clone, Default)]
    pub struct ExpenseListQuery {
        pub start_date: Option<String>,
        pub end_date: Option<String>,
    }

    /// Result of listing expenses.
    #[derive(Debug, Clone)]
    pub struct ExpenseListResult {
        pub expenses: Vec<DomainExpense>,
    }

    /// Result of deleting an expense.
    #[derive(Debug, Clone)]
    pub struct DeleteExpenseResult {
        pub deleted: bool,
        pub success_message: String,
    }
}

pub mod budgets {
    use super::super::models::budget::{Budget as DomainBudget, CycleType};

    /// Input for creating a new budget.
    #[derive(Debug, Clone)]
    pub struct CreateBudgetCommand {
        pub name: String,
        pub amount: f64,
        /// Optional start date override (YYYY-MM-DD), defaults to today.
        pub start_date: Option<String>,
        pub cycle_type: CycleType,
        pub cycle_value: u32,
        pub active: bool,
    }

    /// Input for updating an existing budget.
    #[derive(Debug, Clone)]
    pub struct UpdateBudgetCommand {
        pub id: i64,
        pub name: String,
        pub amount: f64,
        pub start_date: String,
        pub cycle_type: CycleType,
        pub cycle_value: u32,
        pub active: bool,
    }

    /// Result of creating or updating a budget.
    #[derive(Debug, Clone)]
    pub struct BudgetResult {
        pub budget: DomainBudget,
        pub success_message: String,
    }

    /// Result of listing budgets.
    #[derive(Debug, Clone)]
    pub struct BudgetListResult {
        pub budgets: Vec<DomainBudget>,
    }

    /// Result of deleting a budget.
    #[derive(Debug, Clone)]
    pub struct DeleteBudgetResult {
        pub deleted: bool,
        pub success_message: String,
    }
}

pub mod reports {
    use super::super::cycle::{CycleWindow, Timeframe};
    use super::super::models::budget::Budget as DomainBudget;

    /// Snapshot of the active budget's current cycle.
    #[derive(Debug, Clone)]
    pub struct BudgetStatusResult {
        /// The active budget, if any
        pub budget: Option<DomainBudget>,
        /// Current cycle window, present whenever a budget is active
        pub window: Option<CycleWindow>,
        pub total_spent: f64,
        pub remaining: f64,
    }

    /// Query for a per-category spending summary. Either an explicit range
    /// or a timeframe around a reference date.
    #[derive(Debug, Clone)]
    pub struct CategorySummaryQuery {
        pub timeframe: Option<Timeframe>,
        /// Reference date for the timeframe (YYYY-MM-DD), defaults to today.
        pub date: Option<String>,
        pub start_date: Option<String>,
        pub end_date: Option<String>,
    }

    /// One category's share of spending in the queried range.
    #[derive(Debug, Clone, PartialEq)]
    pub struct CategoryTotal {
        pub category: String,
        pub total_amount: f64,
        pub percentage: f64,
    }

    /// Result of a category summary query.
    #[derive(Debug, Clone)]
    pub struct CategorySummaryResult {
        pub start_date: String,
        pub end_date: String,
        pub grand_total: f64,
        pub categories: Vec<CategoryTotal>,
    }
}
