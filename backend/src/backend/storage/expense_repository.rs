use anyhow::Result;
use sqlx::Row;

use crate::backend::domain::models::expense::Expense;
use crate::backend::storage::connection::DbConnection;

/// Repository for expense operations
#[derive(Clone)]
pub struct ExpenseRepository {
    db: DbConnection,
}

impl ExpenseRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Insert an expense and return the assigned row id
    pub async fn insert_expense(&self, expense: &Expense) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO expense (title, amount, category, note, date, time)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&expense.title)
        .bind(expense.amount)
        .bind(&expense.category)
        .bind(&expense.note)
        .bind(&expense.date)
        .bind(&expense.time)
        .execute(self.db.pool())
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Get an expense by id
    pub async fn get_expense(&self, id: i64) -> Result<Option<Expense>> {
        let row = sqlx::query(
            r#"
            SELECT id, title, amount, category, note, date, time
            FROM expense
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.map(|r| Self::row_to_expense(&r)))
    }

    /// List all expenses, most recent first
    pub async fn list_expenses(&self) -> Result<Vec<Expense>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, amount, category, note, date, time
            FROM expense
            ORDER BY date DESC, time DESC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows.iter().map(Self::row_to_expense).collect())
    }

    /// List expenses with date inside an inclusive range, most recent first.
    /// Dates are zero-padded ISO strings so plain string comparison is
    /// chronological.
    pub async fn list_expenses_between_dates(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<Expense>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, amount, category, note, date, time
            FROM expense
            WHERE date >= ? AND date <= ?
            ORDER BY date DESC, time DESC
            "#,
        )
        .bind(start_date)
        .bind(end_date)
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows.iter().map(Self::row_to_expense).collect())
    }

    /// Sum expense amounts with date inside an inclusive range
    pub async fn total_between_dates(&self, start_date: &str, end_date: &str) -> Result<f64> {
        let row = sqlx::query(
            r#"
            SELECT SUM(amount) AS total
            FROM expense
            WHERE date >= ? AND date <= ?
            "#,
        )
        .bind(start_date)
        .bind(end_date)
        .fetch_one(self.db.pool())
        .await?;

        let total: Option<f64> = row.get("total");
        Ok(total.unwrap_or(0.0))
    }

    /// Per-category totals within an inclusive date range, largest first
    pub async fn category_totals_between_dates(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<(String, f64)>> {
        let rows = sqlx::query(
            r#"
            SELECT category, SUM(amount) AS total_amount
            FROM expense
            WHERE date >= ? AND date <= ?
            GROUP BY category
            ORDER BY total_amount DESC
            "#,
        )
        .bind(start_date)
        .bind(end_date)
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows
            .iter()
            .map(|r| (r.get("category"), r.get("total_amount")))
            .collect())
    }

    /// Update an existing expense
    /// Returns true if a row was updated
    pub async fn update_expense(&self, expense: &Expense) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE expense
            SET title = ?, amount = ?, category = ?, note = ?, date = ?, time = ?
            WHERE id = ?
            "#,
        )
        .bind(&expense.title)
        .bind(expense.amount)
        .bind(&expense.category)
        .bind(&expense.note)
        .bind(&expense.date)
        .bind(&expense.time)
        .bind(expense.id)
        .execute(self.db.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete an expense by id
    /// Returns true if a row was deleted
    pub async fn delete_expense(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM expense WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Count all expenses
    pub async fn count_expenses(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM expense")
            .fetch_one(self.db.pool())
            .await?;

        Ok(row.get("count"))
    }

    fn row_to_expense(row: &sqlx::sqlite::SqliteRow) -> Expense {
        Expense {
            id: row.get("id"),
            title: row.get("title"),
            amount: row.get("amount"),
            category: row.get("category"),
            note: row.get("note"),
            date: row.get("date"),
            time: row.get("time"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Setup a new test database for each test
    async fn setup_test() -> ExpenseRepository {
        let db = DbConnection::init_test()
            .await
            .expect("Failed to create test database");
        ExpenseRepository::new(db)
    }

    fn test_expense(title: &str, amount: f64, category: &str, date: &str, time: &str) -> Expense {
        Expense {
            id: 0,
            title: title.to_string(),
            amount,
            category: category.to_string(),
            note: None,
            date: date.to_string(),
            time: time.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_get_expense() {
        let repo = setup_test().await;

        let expense = test_expense("Groceries", 42.50, "Food", "2024-03-05", "12:30:00");
        let id = repo.insert_expense(&expense).await.expect("insert failed");
        assert!(id > 0);

        let stored = repo
            .get_expense(id)
            .await
            .expect("get failed")
            .expect("expense should exist");
        assert_eq!(stored.title, "Groceries");
        assert_eq!(stored.amount, 42.50);
        assert_eq!(stored.category, "Food");
        assert_eq!(stored.note, None);
        assert_eq!(stored.date, "2024-03-05");
        assert_eq!(stored.time, "12:30:00");
    }

    #[tokio::test]
    async fn test_get_nonexistent_expense() {
        let repo = setup_test().await;

        let result = repo.get_expense(999).await.expect("query failed");
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_list_expenses_ordering() {
        let repo = setup_test().await;

        // Insert out of chronological order
        repo.insert_expense(&test_expense("Lunch", 12.0, "Food", "2024-03-02", "12:00:00"))
            .await
            .expect("insert failed");
        repo.insert_expense(&test_expense("Dinner", 30.0, "Food", "2024-03-02", "19:30:00"))
            .await
            .expect("insert failed");
        repo.insert_expense(&test_expense("Bus", 2.5, "Transport", "2024-03-03", "08:00:00"))
            .await
            .expect("insert failed");

        let expenses = repo.list_expenses().await.expect("list failed");
        assert_eq!(expenses.len(), 3);

        // Most recent first: date DESC, then time DESC within the same date
        assert_eq!(expenses[0].title, "Bus");
        assert_eq!(expenses[1].title, "Dinner");
        assert_eq!(expenses[2].title, "Lunch");
    }

    #[tokio::test]
    async fn test_list_expenses_between_dates() {
        let repo = setup_test().await;

        repo.insert_expense(&test_expense("Before", 1.0, "Misc", "2024-02-26", "10:00:00"))
            .await
            .expect("insert failed");
        repo.insert_expense(&test_expense("Start", 2.0, "Misc", "2024-02-27", "10:00:00"))
            .await
            .expect("insert failed");
        repo.insert_expense(&test_expense("End", 3.0, "Misc", "2024-03-26", "10:00:00"))
            .await
            .expect("insert failed");
        repo.insert_expense(&test_expense("After", 4.0, "Misc", "2024-03-27", "10:00:00"))
            .await
            .expect("insert failed");

        let in_range = repo
            .list_expenses_between_dates("2024-02-27", "2024-03-26")
            .await
            .expect("query failed");
        assert_eq!(in_range.len(), 2);
        assert!(in_range.iter().all(|e| e.title == "Start" || e.title == "End"));
    }

    #[tokio::test]
    async fn test_total_between_dates() {
        let repo = setup_test().await;

        // Empty range sums to zero
        let empty = repo
            .total_between_dates("2024-01-01", "2024-01-31")
            .await
            .expect("query failed");
        assert_eq!(empty, 0.0);

        repo.insert_expense(&test_expense("A", 10.0, "Food", "2024-01-10", "09:00:00"))
            .await
            .expect("insert failed");
        repo.insert_expense(&test_expense("B", 5.5, "Transport", "2024-01-20", "09:00:00"))
            .await
            .expect("insert failed");
        repo.insert_expense(&test_expense("C", 99.0, "Food", "2024-02-01", "09:00:00"))
            .await
            .expect("insert failed");

        let total = repo
            .total_between_dates("2024-01-01", "2024-01-31")
            .await
            .expect("query failed");
        assert_eq!(total, 15.5);
    }

    #[tokio::test]
    async fn test_category_totals_between_dates() {
        let repo = setup_test().await;

        repo.insert_expense(&test_expense("A", 10.0, "Food", "2024-01-10", "09:00:00"))
            .await
            .expect("insert failed");
        repo.insert_expense(&test_expense("B", 20.0, "Food", "2024-01-11", "09:00:00"))
            .await
            .expect("insert failed");
        repo.insert_expense(&test_expense("C", 5.0, "Transport", "2024-01-12", "09:00:00"))
            .await
            .expect("insert failed");

        let totals = repo
            .category_totals_between_dates("2024-01-01", "2024-01-31")
            .await
            .expect("query failed");

        // Largest category first
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0], ("Food".to_string(), 30.0));
        assert_eq!(totals[1], ("Transport".to_string(), 5.0));
    }

    #[tokio::test]
    async fn test_update_expense() {
        let repo = setup_test().await;

        let mut expense = test_expense("Coffee", 3.0, "Food", "2024-03-05", "08:00:00");
        let id = repo.insert_expense(&expense).await.expect("insert failed");

        expense.id = id;
        expense.title = "Espresso".to_string();
        expense.amount = 2.5;
        expense.note = Some("double shot".to_string());

        let updated = repo.update_expense(&expense).await.expect("update failed");
        assert!(updated);

        let stored = repo
            .get_expense(id)
            .await
            .expect("get failed")
            .expect("expense should exist");
        assert_eq!(stored.title, "Espresso");
        assert_eq!(stored.amount, 2.5);
        assert_eq!(stored.note, Some("double shot".to_string()));
    }

    #[tokio::test]
    async fn test_update_nonexistent_expense() {
        let repo = setup_test().await;

        let mut expense = test_expense("Ghost", 1.0, "Misc", "2024-03-05", "08:00:00");
        expense.id = 424242;

        let updated = repo.update_expense(&expense).await.expect("update failed");
        assert!(!updated);
    }

    #[tokio::test]
    async fn test_delete_expense() {
        let repo = setup_test().await;

        let id = repo
            .insert_expense(&test_expense("Doomed", 1.0, "Misc", "2024-03-05", "08:00:00"))
            .await
            .expect("insert failed");

        let deleted = repo.delete_expense(id).await.expect("delete failed");
        assert!(deleted);

        let gone = repo.get_expense(id).await.expect("get failed");
        assert!(gone.is_none());

        // Deleting again reports nothing removed
        let deleted_again = repo.delete_expense(id).await.expect("delete failed");
        assert!(!deleted_again);
    }

    #[tokio::test]
    async fn test_count_expenses() {
        let repo = setup_test().await;

        assert_eq!(repo.count_expenses().await.expect("count failed"), 0);

        repo.insert_expense(&test_expense("A", 1.0, "Misc", "2024-03-05", "08:00:00"))
            .await
            .expect("insert failed");
        repo.insert_expense(&test_expense("B", 2.0, "Misc", "2024-03-06", "08:00:00"))
            .await
            .expect("insert failed");

        assert_eq!(repo.count_expenses().await.expect("count failed"), 2);
    }
}
