//! # Storage Layer
//!
//! SQLite persistence for expenses and budgets. The `DbConnection` owns the
//! connection pool and creates the schema; repositories provide row-level
//! operations on top of it.

pub mod budget_repository;
pub mod connection;
pub mod expense_repository;

pub use budget_repository::BudgetRepository;
pub use connection::DbConnection;
pub use expense_repository::ExpenseRepository;
