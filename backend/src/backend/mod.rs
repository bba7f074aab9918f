//! # Backend Module
//!
//! Contains all non-UI logic for the expense tracker application.
//!
//! The backend follows a layered architecture:
//! - **Domain**: Business logic for expenses, budgets, and reporting
//! - **Storage**: Data persistence (SQLite)
//! - **IO**: REST interface layer that exposes functionality to clients

pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use log::info;
use tower_http::cors::{Any, CorsLayer};

use crate::backend::domain::{BudgetService, CycleService, ExpenseService, ReportService};
use crate::backend::storage::DbConnection;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub expense_service: ExpenseService,
    pub budget_service: BudgetService,
    pub report_service: ReportService,
}

/// Initialize the backend with all required services
pub async fn initialize_backend() -> Result<AppState> {
    info!("Setting up database");
    let db_conn = DbConnection::init().await?;

    info!("Setting up domain services");
    let expense_service = ExpenseService::new(db_conn.clone());
    let budget_service = BudgetService::new(db_conn.clone());
    let report_service = ReportService::new(db_conn, CycleService::new());

    Ok(AppState {
        expense_service,
        budget_service,
        report_service,
    })
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    // CORS setup to allow frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin("http://localhost:8080".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    // Set up our application routes
    let api_routes = Router::new()
        .nest("/expenses", io::rest::expense_apis::router())
        .nest("/budgets", io::rest::budget_apis::router())
        .nest("/report", io::rest::report_apis::router());

    // Define our main application router
    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state)
}
