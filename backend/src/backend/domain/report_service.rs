use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use log::info;

use crate::backend::domain::commands::reports::{
    BudgetStatusResult, CategorySummaryQuery, CategorySummaryResult, CategoryTotal,
};
use crate::backend::domain::cycle::{CycleService, Timeframe, DATE_FORMAT};
use crate::backend::domain::expense_service::ExpenseService;
use crate::backend::storage::{BudgetRepository, DbConnection, ExpenseRepository};

/// Service for spending reports: the active budget's cycle status and
/// per-category summaries.
#[derive(Clone)]
pub struct ReportService {
    expense_repository: ExpenseRepository,
    budget_repository: BudgetRepository,
    cycle_service: CycleService,
}

impl ReportService {
    /// Create a new ReportService
    pub fn new(db: DbConnection, cycle_service: CycleService) -> Self {
        Self {
            expense_repository: ExpenseRepository::new(db.clone()),
            budget_repository: BudgetRepository::new(db),
            cycle_service,
        }
    }

    /// Current cycle status of the active budget
    pub async fn budget_status(&self) -> Result<BudgetStatusResult> {
        self.budget_status_on(Local::now().date_naive()).await
    }

    /// Cycle status of the active budget as of a given reference date.
    /// When no budget is active the result carries no budget and zero totals
    /// rather than an error.
    pub async fn budget_status_on(&self, today: NaiveDate) -> Result<BudgetStatusResult> {
        let budget = match self.budget_repository.get_active_budget().await? {
            Some(budget) => budget,
            None => {
                info!("No active budget, reporting empty status");
                return Ok(BudgetStatusResult {
                    budget: None,
                    window: None,
                    total_spent: 0.0,
                    remaining: 0.0,
                });
            }
        };

        let window = self.cycle_service.current_window(&budget, today);
        let start = window.start.format(DATE_FORMAT).to_string();
        let end = window.end.format(DATE_FORMAT).to_string();

        let total_spent = self
            .expense_repository
            .total_between_dates(&start, &end)
            .await?;
        let remaining = budget.amount - total_spent;

        info!(
            "Budget '{}' cycle {} to {}: spent {:.2} of {:.2}, remaining {:.2}",
            budget.name, start, end, total_spent, budget.amount, remaining
        );

        Ok(BudgetStatusResult {
            budget: Some(budget),
            window: Some(window),
            total_spent,
            remaining,
        })
    }

    /// Per-category spending summary for an explicit date range or a
    /// timeframe around a reference date (defaults to this month).
    pub async fn category_summary(
        &self,
        query: CategorySummaryQuery,
    ) -> Result<CategorySummaryResult> {
        let (start_date, end_date) = self.resolve_range(&query)?;

        let totals = self
            .expense_repository
            .category_totals_between_dates(&start_date, &end_date)
            .await?;

        let grand_total: f64 = totals.iter().map(|(_, total)| total).sum();

        let categories = totals
            .into_iter()
            .map(|(category, total_amount)| {
                let percentage = if grand_total > 0.0 {
                    (total_amount / grand_total) * 100.0
                } else {
                    0.0
                };
                CategoryTotal {
                    category,
                    total_amount,
                    percentage,
                }
            })
            .collect();

        info!(
            "Category summary {} to {}: grand total {:.2}",
            start_date, end_date, grand_total
        );

        Ok(CategorySummaryResult {
            start_date,
            end_date,
            grand_total,
            categories,
        })
    }

    fn resolve_range(&self, query: &CategorySummaryQuery) -> Result<(String, String)> {
        if let (Some(start), Some(end)) = (&query.start_date, &query.end_date) {
            return Ok((
                ExpenseService::validate_date(start)?,
                ExpenseService::validate_date(end)?,
            ));
        }
        if query.start_date.is_some() || query.end_date.is_some() {
            return Err(anyhow!(
                "Invalid date range: start_date and end_date must be provided together"
            ));
        }

        let reference = match &query.date {
            Some(date) => NaiveDate::parse_from_str(date, DATE_FORMAT)
                .map_err(|_| anyhow!("Invalid date: expected YYYY-MM-DD, got '{}'", date))?,
            None => Local::now().date_naive(),
        };

        let timeframe = query.timeframe.unwrap_or(Timeframe::Monthly);
        let (start, end) = self.cycle_service.timeframe_range(timeframe, reference);

        Ok((
            start.format(DATE_FORMAT).to_string(),
            end.format(DATE_FORMAT).to_string(),
        ))
    }
}
