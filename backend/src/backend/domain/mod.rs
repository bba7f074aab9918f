//! # Domain Layer
//!
//! Business logic for the expense tracker: models, internal command types,
//! and the services that implement expense CRUD, budget management, cycle
//! computation, and spending reports.

pub mod budget_service;
pub mod commands;
pub mod cycle;
pub mod expense_service;
pub mod models;
pub mod report_service;

pub use budget_service::BudgetService;
pub use cycle::CycleService;
pub use expense_service::ExpenseService;
pub use report_service::ReportService;
