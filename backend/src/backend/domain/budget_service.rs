use anyhow::{anyhow, Result};
use chrono::Local;
use log::{info, warn};

use crate::backend::domain::commands::budgets::{
    BudgetListResult, BudgetResult, CreateBudgetCommand, DeleteBudgetResult, UpdateBudgetCommand,
};
use crate::backend::domain::cycle::DATE_FORMAT;
use crate::backend::domain::expense_service::ExpenseService;
use crate::backend::domain::models::budget::{Budget, CycleType};
use crate::backend::storage::{BudgetRepository, DbConnection};

/// Service for managing budgets.
///
/// At most one budget is active at a time; creating or updating an active
/// budget deactivates all others inside the same database transaction.
#[derive(Clone)]
pub struct BudgetService {
    budget_repository: BudgetRepository,
}

impl BudgetService {
    /// Create a new BudgetService
    pub fn new(db: DbConnection) -> Self {
        Self {
            budget_repository: BudgetRepository::new(db),
        }
    }

    /// Create a new budget. The start date defaults to today.
    pub async fn create_budget(&self, command: CreateBudgetCommand) -> Result<BudgetResult> {
        info!("Creating budget: {:?}", command);

        Self::validate_name(&command.name)?;
        Self::validate_amount(command.amount)?;
        Self::validate_cycle_value(command.cycle_type, command.cycle_value)?;

        let start_date = match command.start_date {
            Some(date) => ExpenseService::validate_date(&date)?,
            None => Local::now().date_naive().format(DATE_FORMAT).to_string(),
        };

        let mut budget = Budget {
            id: 0,
            name: command.name,
            amount: command.amount,
            start_date,
            cycle_type: command.cycle_type,
            cycle_value: command.cycle_value,
            active: command.active,
        };

        budget.id = self.budget_repository.insert_budget(&budget).await?;

        info!(
            "Created budget {} '{}' ({} cycle, active: {})",
            budget.id,
            budget.name,
            budget.cycle_type.as_str(),
            budget.active
        );

        Ok(BudgetResult {
            budget,
            success_message: "Budget created successfully".to_string(),
        })
    }

    /// Update an existing budget
    pub async fn update_budget(&self, command: UpdateBudgetCommand) -> Result<BudgetResult> {
        info!("Updating budget: {:?}", command);

        Self::validate_name(&command.name)?;
        Self::validate_amount(command.amount)?;
        Self::validate_cycle_value(command.cycle_type, command.cycle_value)?;
        let start_date = ExpenseService::validate_date(&command.start_date)?;

        let budget = Budget {
            id: command.id,
            name: command.name,
            amount: command.amount,
            start_date,
            cycle_type: command.cycle_type,
            cycle_value: command.cycle_value,
            active: command.active,
        };

        let updated = self.budget_repository.update_budget(&budget).await?;
        if !updated {
            return Err(anyhow!("Budget not found: {}", budget.id));
        }

        Ok(BudgetResult {
            budget,
            success_message: "Budget updated successfully".to_string(),
        })
    }

    /// Delete a budget by id
    pub async fn delete_budget(&self, id: i64) -> Result<DeleteBudgetResult> {
        let deleted = self.budget_repository.delete_budget(id).await?;

        if deleted {
            info!("Deleted budget {}", id);
        } else {
            warn!("No budget found to delete: {}", id);
        }

        Ok(DeleteBudgetResult {
            deleted,
            success_message: if deleted {
                "Budget deleted successfully".to_string()
            } else {
                format!("Budget not found: {}", id)
            },
        })
    }

    /// Get the currently active budget, if any
    pub async fn get_active_budget(&self) -> Result<Option<Budget>> {
        self.budget_repository.get_active_budget().await
    }

    /// List all budgets, newest first
    pub async fn list_budgets(&self) -> Result<BudgetListResult> {
        let budgets = self.budget_repository.list_budgets().await?;

        info!("Found {} budgets", budgets.len());

        Ok(BudgetListResult { budgets })
    }

    /// Start a new cycle for a budget: reset its start date to today while
    /// keeping the amount and cycle settings.
    pub async fn start_new_cycle(&self, id: i64) -> Result<BudgetResult> {
        let mut budget = self
            .budget_repository
            .get_budget(id)
            .await?
            .ok_or_else(|| anyhow!("Budget not found: {}", id))?;

        budget.start_date = Local::now().date_naive().format(DATE_FORMAT).to_string();

        self.budget_repository.update_budget(&budget).await?;

        info!("Started new cycle for budget {} on {}", id, budget.start_date);

        Ok(BudgetResult {
            budget,
            success_message: "New budget cycle started".to_string(),
        })
    }

    fn validate_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(anyhow!("Invalid name: must not be empty"));
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

    fn validate_cycle_value(cycle_type: CycleType, value: u32) -> Result<()> {
        if !Budget::is_valid_cycle_value(cycle_type, value) {
            return Err(match cycle_type {
                CycleType::Monthly => anyhow!(
                    "Invalid cycle value: {}. Must be a day of month between 1 and 31",
                    value
                ),
                CycleType::Weekly => anyhow!(
                    "Invalid cycle value: {}. Must be a day of week between 0 (Sunday) and 6 (Saturday)",
                    value
                ),
            });
        }
        Ok(())
    }
}
