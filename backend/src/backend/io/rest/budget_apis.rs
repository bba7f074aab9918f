//! # REST API for Budgets
//!
//! Endpoints for managing budgets and their cycles.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post, put},
    Router,
};
use log::{error, info};

use crate::backend::domain::commands::budgets::{CreateBudgetCommand, UpdateBudgetCommand};
use crate::backend::io::rest::mappers::budget_mapper::BudgetMapper;
use crate::backend::AppState;
use shared::{
    ActiveBudgetResponse, BudgetListResponse, BudgetResponse, CreateBudgetRequest,
    DeleteBudgetResponse, UpdateBudgetRequest,
};

/// Create a router for budget related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_budgets).post(create_budget))
        .route("/active", get(get_active_budget))
        .route("/:id", put(update_budget).delete(delete_budget))
        .route("/:id/new-cycle", post(start_new_cycle))
}

/// List all budgets, newest first
pub async fn list_budgets(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/budgets");

    match state.budget_service.list_budgets().await {
        Ok(result) => {
            let response = BudgetListResponse {
                budgets: result.budgets.into_iter().map(BudgetMapper::to_dto).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to list budgets: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error listing budgets").into_response()
        }
    }
}

/// Create a new budget
pub async fn create_budget(
    State(state): State<AppState>,
    Json(request): Json<CreateBudgetRequest>,
) -> impl IntoResponse {
    info!("POST /api/budgets - request: {:?}", request);

    let command = CreateBudgetCommand {
        name: request.name,
        amount: request.amount,
        start_date: request.start_date,
        cycle_type: BudgetMapper::cycle_type_to_domain(request.cycle_type),
        cycle_value: request.cycle_value,
        active: request.active,
    };

    match state.budget_service.create_budget(command).await {
        Ok(result) => {
            let response = BudgetResponse {
                budget: BudgetMapper::to_dto(result.budget),
                success_message: result.success_message,
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to create budget: {}", e);
            let status = if e.to_string().contains("Invalid") {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, e.to_string()).into_response()
        }
    }
}

/// Get the currently active budget
pub async fn get_active_budget(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/budgets/active");

    match state.budget_service.get_active_budget().await {
        Ok(budget) => {
            let response = ActiveBudgetResponse {
                budget: budget.map(BudgetMapper::to_dto),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to get active budget: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error retrieving active budget").into_response()
        }
    }
}

/// Update an existing budget
pub async fn update_budget(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateBudgetRequest>,
) -> impl IntoResponse {
    info!("PUT /api/budgets/{} - request: {:?}", id, request);

    let command = UpdateBudgetCommand {
        id,
        name: request.name,
        amount: request.amount,
        start_date: request.start_date,
        cycle_type: BudgetMapper::cycle_type_to_domain(request.cycle_type),
        cycle_value: request.cycle_value,
        active: request.active,
    };

    match state.budget_service.update_budget(command).await {
        Ok(result) => {
            let response = BudgetResponse {
                budget: BudgetMapper::to_dto(result.budget),
                success_message: result.success_message,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to update budget {}: {}", id, e);
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

/// Delete a budget
pub async fn delete_budget(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    info!("DELETE /api/budgets/{}", id);

    match state.budget_service.delete_budget(id).await {
        Ok(result) => {
            let status = if result.deleted {
                StatusCode::OK
            } else {
                StatusCode::NOT_FOUND
            };
            let response = DeleteBudgetResponse {
                deleted: result.deleted,
                success_message: result.success_message,
            };
            (status, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to delete budget {}: {}", id, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error deleting budget").into_response()
        }
    }
}

/// Start a new cycle for a budget, resetting its start date to today
pub async fn start_new_cycle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    info!("POST /api/budgets/{}/new-cycle", id);

    match state.budget_service.start_new_cycle(id).await {
        Ok(result) => {
            let response = BudgetResponse {
                budget: BudgetMapper::to_dto(result.budget),
                success_message: result.success_message,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to start new cycle for budget {}: {}", id, e);
            let status = if e.to_string().contains("not found") {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, e.to_string()).into_response()
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

    fn create_request(name: &str, active: bool) -> CreateBudgetRequest {
        CreateBudgetRequest {
            name: name.to_string(),
            amount: 500.0,
            start_date: Some("2024-01-01".to_string()),
            cycle_type: shared::CycleType::Monthly,
            cycle_value: 1,
            active,
        }
    }

    #[tokio::test]
    async fn test_create_budget_handler() {
        let state = setup_test_state().await;

        let response = create_budget(State(state), Json(create_request("Groceries", true))).await;

        assert_eq!(response.into_response().status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_create_budget_invalid_cycle_value() {
        let state = setup_test_state().await;

        let mut request = create_request("Groceries", true);
        request.cycle_value = 42;

        let response = create_budget(State(state), Json(request)).await;

        assert_eq!(response.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_active_budget_handler() {
        let state = setup_test_state().await;

        // OK with no budget at all
        let response = get_active_budget(State(state.clone())).await;
        assert_eq!(response.into_response().status(), StatusCode::OK);

        create_budget(State(state.clone()), Json(create_request("Groceries", true)))
            .await
            .into_response();

        let response = get_active_budget(State(state)).await;
        assert_eq!(response.into_response().status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_update_budget_not_found() {
        let state = setup_test_state().await;

        let request = UpdateBudgetRequest {
            name: "Ghost".to_string(),
            amount: 100.0,
            start_date: "2024-01-01".to_string(),
            cycle_type: shared::CycleType::Weekly,
            cycle_value: 0,
            active: false,
        };
        let response = update_budget(State(state), Path(999), Json(request)).await;

        assert_eq!(response.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_budget_handler() {
        let state = setup_test_state().await;

        let created = state
            .budget_service
            .create_budget(CreateBudgetCommand {
                name: "Doomed".to_string(),
                amount: 100.0,
                start_date: Some("2024-01-01".to_string()),
                cycle_type: crate::backend::domain::models::budget::CycleType::Monthly,
                cycle_value: 1,
                active: false,
            })
            .await
            .expect("create failed");

        let response = delete_budget(State(state.clone()), Path(created.budget.id)).await;
        assert_eq!(response.into_response().status(), StatusCode::OK);

        let response = delete_budget(State(state), Path(created.budget.id)).await;
        assert_eq!(response.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_start_new_cycle_not_found() {
        let state = setup_test_state().await;

        let response = start_new_cycle(State(state), Path(999)).await;

        assert_eq!(response.into_response().status(), StatusCode::NOT_FOUND);
    }
}
