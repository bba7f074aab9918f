//! # REST API for Expenses
//!
//! Endpoints for listing, creating, updating, and deleting expenses.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use log::{error, info};
use serde::Deserialize;

use crate::backend::domain::commands::expenses::{
    CreateExpenseCommand, ExpenseListQuery, UpdateExpenseCommand,
};
use crate::backend::io::rest::mappers::expense_mapper::ExpenseMapper;
use crate::backend::AppState;
use shared::{CreateExpenseRequest, DeleteExpenseResponse, ExpenseListResponse, UpdateExpenseRequest};

/// Create a router for expense related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_expenses).post(create_expense))
        .route(
            "/:id",
            get(get_expense).put(update_expense).delete(delete_expense),
        )
}

// Query parameters for the expense listing API
#[derive(Debug, Deserialize)]
pub struct ExpenseListParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// List expenses with optional date-range filtering
pub async fn list_expenses(
    State(state): State<AppState>,
    Query(params): Query<ExpenseListParams>,
) -> impl IntoResponse {
    info!("GET /api/expenses - params: {:?}", params);

    let query = ExpenseListQuery {
        start_date: params.start_date,
        end_date: params.end_date,
    };

    match state.expense_service.list_expenses(query).await {
        Ok(result) => {
            let response = ExpenseListResponse {
                expenses: result.expenses.into_iter().map(ExpenseMapper::to_dto).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to list expenses: {}", e);
            let status = if e.to_string().contains("Invalid") {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, e.to_string()).into_response()
        }
    }
}

/// Create a new expense
pub async fn create_expense(
    State(state): State<AppState>,
    Json(request): Json<CreateExpenseRequest>,
) -> impl IntoResponse {
    info!("POST /api/expenses - request: {:?}", request);

    let command = CreateExpenseCommand {
        title: request.title,
        amount: request.amount,
        category: request.category,
        note: request.note,
        date: request.date,
        time: request.time,
    };

    match state.expense_service.create_expense(command).await {
        Ok(expense) => (StatusCode::CREATED, Json(ExpenseMapper::to_dto(expense))).into_response(),
        Err(e) => {
            error!("Failed to create expense: {}", e);
            let status = if e.to_string().contains("Invalid") {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, e.to_string()).into_response()
        }
    }
}

/// Get a single expense by id
pub async fn get_expense(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    info!("GET /api/expenses/{}", id);

    match state.expense_service.get_expense(id).await {
        Ok(Some(expense)) => (StatusCode::OK, Json(ExpenseMapper::to_dto(expense))).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Expense not found").into_response(),
        Err(e) => {
            error!("Failed to get expense {}: {}", id, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error retrieving expense").into_response()
        }
    }
}

/// Update an existing expense
pub async fn update_expense(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateExpenseRequest>,
) -> impl IntoResponse {
    info!("PUT /api/expenses/{} - request: {:?}", id, request);

    let command = UpdateExpenseCommand {
        id,
        title: request.title,
        amount: request.amount,
        category: request.category,
        note: request.note,
        date: request.date,
        time: request.time,
    };

    match state.expense_service.update_expense(command).await {
        Ok(expense) => (StatusCode::OK, Json(ExpenseMapper::to_dto(expense))).into_response(),
        Err(e) => {
            error!("Failed to update expense {}: {}", id, e);
            let status = if e.to_string().contains("not found") {
                StatusCode::NOT_FOUND
            } else if e.to_string().contains("Invalid") {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, e.to_string()).into_response()
        }
    }
}

/// Delete an expense
pub async fn delete_expense(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    info!("DELETE /api/expenses/{}", id);

    match state.expense_service.delete_expense(id).await {
        Ok(result) => {
            let status = if result.deleted {
                StatusCode::OK
            } else {
                StatusCode::NOT_FOUND
            };
            let response = DeleteExpenseResponse {
                deleted: result.deleted,
                success_message: result.success_message,
            };
            (status, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to delete expense {}: {}", id, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error deleting expense").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::{BudgetService, CycleService, ExpenseService, ReportService};
    use crate::backend::storage::DbConnection;

    async fn setup_test_state() -> AppState {
        let db = DbConnection::init_test()
            .await
            .expect("Failed to init test DB");
        AppState {
            expense_service: ExpenseService::new(db.clone()),
            budget_service: BudgetService::new(db.clone()),
            report_service: ReportService::new(db, CycleService::new()),
        }
    }

    fn create_request(title: &str, amount: f64) -> CreateExpenseRequest {
        CreateExpenseRequest {
            title: title.to_string(),
            amount,
            category: "Food".to_string(),
            note: None,
            date: Some("2024-03-05".to_string()),
            time: Some("12:00:00".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_expense_handler() {
        let state = setup_test_state().await;

        let response = create_expense(State(state), Json(create_request("Lunch", 12.0))).await;

        assert_eq!(response.into_response().status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_create_expense_validation_error() {
        let state = setup_test_state().await;

        let response = create_expense(State(state), Json(create_request("", 12.0))).await;

        assert_eq!(response.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_expense_not_found() {
        let state = setup_test_state().await;

        let response = get_expense(State(state), Path(999)).await;

        assert_eq!(response.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_expenses_handler() {
        let state = setup_test_state().await;

        state
            .expense_service
            .create_expense(CreateExpenseCommand {
                title: "Lunch".to_string(),
                amount: 12.0,
                category: "Food".to_string(),
                note: None,
                date: Some("2024-03-05".to_string()),
                time: Some("12:00:00".to_string()),
            })
            .await
            .expect("create failed");

        let params = ExpenseListParams {
            start_date: None,
            end_date: None,
        };
        let response = list_expenses(State(state), Query(params)).await;

        assert_eq!(response.into_response().status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_expenses_half_open_range_rejected() {
        let state = setup_test_state().await;

        let params = ExpenseListParams {
            start_date: Some("2024-03-01".to_string()),
            end_date: None,
        };
        let response = list_expenses(State(state), Query(params)).await;

        assert_eq!(response.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_expense_not_found() {
        let state = setup_test_state().await;

        let request = UpdateExpenseRequest {
            title: "Ghost".to_string(),
            amount: 1.0,
            category: "Misc".to_string(),
            note: None,
            date: "2024-03-05".to_string(),
            time: "10:00:00".to_string(),
        };
        let response = update_expense(State(state), Path(999), Json(request)).await;

        assert_eq!(response.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_expense_handler() {
        let state = setup_test_state().await;

        let expense = state
            .expense_service
            .create_expense(CreateExpenseCommand {
                title: "Doomed".to_string(),
                amount: 5.0,
                category: "Misc".to_string(),
                note: None,
                date: Some("2024-03-05".to_string()),
                time: Some("12:00:00".to_string()),
            })
            .await
            .expect("create failed");

        let response = delete_expense(State(state.clone()), Path(expense.id)).await;
        assert_eq!(response.into_response().status(), StatusCode::OK);

        let response = delete_expense(State(state), Path(expense.id)).await;
        assert_eq!(response.into_response().status(), StatusCode::NOT_FOUND);
    }
}
