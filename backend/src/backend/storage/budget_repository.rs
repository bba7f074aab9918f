use anyhow::{anyhow, Result};
use sqlx::Row;

use crate::backend::domain::models::budget::{Budget, CycleType};
use crate::backend::storage::connection::DbConnection;

/// Repository for budget operations.
///
/// Writes that activate a budget run inside a transaction so the
/// single-active-budget invariant holds even across multi-step updates.
#[derive(Clone)]
pub struct BudgetRepository {
    db: DbConnection,
}

impl BudgetRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Insert a budget and return the assigned row id.
    /// Inserting an active budget deactivates all other budgets first.
    pub async fn insert_budget(&self, budget: &Budget) -> Result<i64> {
        let mut tx = self.db.pool().begin().await?;

        if budget.active {
            sqlx::query("UPDATE budget SET active = 0")
                .execute(&mut *tx)
                .await?;
        }

        let result = sqlx::query(
            r#"
            INSERT INTO budget (name, amount, start_date, cycle_type, cycle_value, active)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&budget.name)
        .bind(budget.amount)
        .bind(&budget.start_date)
        .bind(budget.cycle_type.as_str())
        .bind(budget.cycle_value)
        .bind(budget.active)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(result.last_insert_rowid())
    }

    /// Update an existing budget.
    /// Activating a budget deactivates all other budgets first.
    /// Returns true if a row was updated.
    pub async fn update_budget(&self, budget: &Budget) -> Result<bool> {
        let mut tx = self.db.pool().begin().await?;

        if budget.active {
            sqlx::query("UPDATE budget SET active = 0 WHERE id != ?")
                .bind(budget.id)
                .execute(&mut *tx)
                .await?;
        }

        let result = sqlx::query(
            r#"
            UPDATE budget
            SET name = ?, amount = ?, start_date = ?, cycle_type = ?, cycle_value = ?, active = ?
            WHERE id = ?
            "#,
        )
        .bind(&budget.name)
        .bind(budget.amount)
        .bind(&budget.start_date)
        .bind(budget.cycle_type.as_str())
        .bind(budget.cycle_value)
        .bind(budget.active)
        .bind(budget.id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a budget by id
    /// Returns true if a row was deleted
    pub async fn delete_budget(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM budget WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Get a budget by id
    pub async fn get_budget(&self, id: i64) -> Result<Option<Budget>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, amount, start_date, cycle_type, cycle_value, active
            FROM budget
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        match row {
            Some(r) => Ok(Some(Self::row_to_budget(&r)?)),
            None => Ok(None),
        }
    }

    /// Get the currently active budget
    pub async fn get_active_budget(&self) -> Result<Option<Budget>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, amount, start_date, cycle_type, cycle_value, active
            FROM budget
            WHERE active = 1
            "#,
        )
        .fetch_optional(self.db.pool())
        .await?;

        match row {
            Some(r) => Ok(Some(Self::row_to_budget(&r)?)),
            None => Ok(None),
        }
    }

    /// List all budgets, newest first
    pub async fn list_budgets(&self) -> Result<Vec<Budget>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, amount, start_date, cycle_type, cycle_value, active
            FROM budget
            ORDER BY id DESC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::row_to_budget).collect()
    }

    fn row_to_budget(row: &sqlx::sqlite::SqliteRow) -> Result<Budget> {
        let cycle_type_raw: String = row.get("cycle_type");
        let cycle_type = CycleType::parse(&cycle_type_raw)
            .ok_or_else(|| anyhow!("Unknown cycle type in database: {}", cycle_type_raw))?;

        Ok(Budget {
            id: row.get("id"),
            name: row.get("name"),
            amount: row.get("amount"),
            start_date: row.get("start_date"),
            cycle_type,
            cycle_value: row.get("cycle_value"),
            active: row.get("active"),
        })
    }
}
