use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate, NaiveTime};
use log::{info, warn};

use crate::backend::domain::commands::expenses::{
    CreateExpenseCommand, DeleteExpenseResult, ExpenseListQuery, ExpenseListResult,
    UpdateExpenseCommand,
};
use crate::backend::domain::cycle::{DATE_FORMAT, TIME_FORMAT};
use crate::backend::domain::models::expense::{Expense, MAX_TITLE_LENGTH};
use crate::backend::storage::{DbConnection, ExpenseRepository};

/// Service for managing expense entries
#[derive(Clone)]
pub struct ExpenseService {
    expense_repository: ExpenseRepository,
}

impl ExpenseService {
    /// Create a new ExpenseService
    pub fn new(db: DbConnection) -> Self {
        Self {
            expense_repository: ExpenseRepository::new(db),
        }
    }

    /// Create a new expense. Date and time default to "now" when omitted.
    pub async fn create_expense(&self, command: CreateExpenseCommand) -> Result<Expense> {
        info!("Creating expense: {:?}", command);

        Self::validate_title(&command.title)?;
        Self::validate_amount(command.amount)?;
        Self::validate_category(&command.category)?;

        let now = Local::now();
        let date = match command.date {
            Some(date) => Self::validate_date(&date)?,
            None => now.date_naive().format(DATE_FORMAT).to_string(),
        };
        let time = match command.time {
            Some(time) => Self::validate_time(&time)?,
            None => now.time().format(TIME_FORMAT).to_string(),
        };

        let mut expense = Expense {
            id: 0,
            title: command.title,
            amount: command.amount,
            category: command.category,
            note: command.note,
            date,
            time,
        };

        expense.id = self.expense_repository.insert_expense(&expense).await?;

        info!(
            "Created expense {} ({}: {:.2})",
            expense.id, expense.category, expense.amount
        );

        Ok(expense)
    }

    /// List expenses, most recent first, optionally restricted to an
    /// inclusive date range.
    pub async fn list_expenses(&self, query: ExpenseListQuery) -> Result<ExpenseListResult> {
        let expenses = match (query.start_date, query.end_date) {
            (Some(start), Some(end)) => {
                let start = Self::validate_date(&start)?;
                let end = Self::validate_date(&end)?;
                self.expense_repository
                    .list_expenses_between_dates(&start, &end)
                    .await?
            }
            (None, None) => self.expense_repository.list_expenses().await?,
            _ => {
                return Err(anyhow!(
                    "Invalid date range: start_date and end_date must be provided together"
                ))
            }
        };

        info!("Listed {} expenses", expenses.len());

        Ok(ExpenseListResult { expenses })
    }

    /// Get a single expense by id
    pub async fn get_expense(&self, id: i64) -> Result<Option<Expense>> {
        self.expense_repository.get_expense(id).await
    }

    /// Update an existing expense
    pub async fn update_expense(&self, command: UpdateExpenseCommand) -> Result<Expense> {
        info!("Updating expense: {:?}", command);

        Self::validate_title(&command.title)?;
        Self::validate_amount(command.amount)?;
        Self::validate_category(&command.category)?;
        let date = Self::validate_date(&command.date)?;
        let time = Self::validate_time(&command.time)?;

        let expense = Expense {
            id: command.id,
            title: command.title,
            amount: command.amount,
            category: command.category,
            note: command.note,
            date,
            time,
        };

        let updated = self.expense_repository.update_expense(&expense).await?;
        if !updated {
            return Err(anyhow!("Expense not found: {}", expense.id));
        }

        Ok(expense)
    }

    /// Delete an expense by id
    pub async fn delete_expense(&self, id: i64) -> Result<DeleteExpenseResult> {
        let deleted = self.expense_repository.delete_expense(id).await?;

        if deleted {
            info!("Deleted expense {}", id);
        } else {
            warn!("No expense found to delete: {}", id);
        }

        Ok(DeleteExpenseResult {
            deleted,
            success_message: if deleted {
                "Expense deleted successfully".to_string()
            } else {
                format!("Expense not found: {}", id)
            },
        })
    }

    /// Count all stored expenses
    pub async fn expense_count(&self) -> Result<i64> {
        self.expense_repository.count_expenses().await
    }

    fn validate_title(title: &str) -> Result<()> {
        if title.trim().is_empty() {
            return Err(anyhow!("Invalid title: must not be empty"));
        }
        if title.len() > MAX_TITLE_LENGTH {
            return Err(anyhow!(
                "Invalid title: must be at most {} characters",
                MAX_TITLE_LENGTH
            ));
        }
        Ok(())
    }

    fn validate_amount(amount: f64) -> Result<()> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(anyhow!("Invalid amount: must be a positive number"));
        }
        if amount > 1_000_000.0 {
            return Err(anyhow!("Invalid amount: amount is too large"));
        }
        Ok(())
    }

    fn validate_category(category: &str) -> Result<()> {
        if category.trim().is_empty() {
            return Err(anyhow!("Invalid category: must not be empty"));
        }
        Ok(())
    }

    /// Validate and normalize a YYYY-MM-DD date string
    pub(crate) fn validate_date(date: &str) -> Result<String> {
        let parsed = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|_| anyhow!("Invalid date: expected YYYY-MM-DD, got '{}'", date))?;
        Ok(parsed.format(DATE_FORMAT).to_string())
    }

    /// Validate and normalize an HH:MM:SS time string
    pub(crate) fn validate_time(time: &str) -> Result<String> {
        let parsed = NaiveTime::parse_from_str(time, TIME_FORMAT)
            .map_err(|_| anyhow!("Invalid time: expected HH:MM:SS, got '{}'", time))?;
        Ok(parsed.format(TIME_FORMAT).to_string())
    }
}
