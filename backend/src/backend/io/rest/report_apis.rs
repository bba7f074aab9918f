//! # REST API for Reports
//!
//! Endpoints for the active budget's cycle status and per-category
//! spending summaries.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use log::{error, info};
use serde::Deserialize;

use crate::backend::domain::commands::reports::CategorySummaryQuery;
use crate::backend::domain::cycle::{Timeframe as DomainTimeframe, DATE_FORMAT};
use crate::backend::io::rest::mappers::budget_mapper::BudgetMapper;
use crate::backend::AppState;
use shared::{
    BudgetStatusResponse, CategorySummary, CategorySummaryResponse, CycleWindow, Timeframe,
};

/// Create a router for report related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/status", get(get_budget_status))
        .route("/categories", get(get_category_summary))
}

/// Get the active budget's current cycle status
pub async fn get_budget_status(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/report/status");

    match state.report_service.budget_status().await {
        Ok(result) => {
            let response = BudgetStatusResponse {
                budget: result.budget.map(BudgetMapper::to_dto),
                window: result.window.map(|w| CycleWindow {
                    start: w.start.format(DATE_FORMAT).to_string(),
                    end: w.end.format(DATE_FORMAT).to_string(),
                }),
                total_spent: result.total_spent,
                remaining: result.remaining,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to compute budget status: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error computing budget status").into_response()
        }
    }
}

// Query parameters for the category summary API
#[derive(Debug, Deserialize)]
pub struct CategorySummaryParams {
    pub timeframe: Option<Timeframe>,
    pub date: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Get per-category spending totals and percentages
pub async fn get_category_summary(
    State(state): State<AppState>,
    Query(params): Query<CategorySummaryParams>,
) -> impl IntoResponse {
    info!("GET /api/report/categories - params: {:?}", params);

    let query = CategorySummaryQuery {
        timeframe: params.timeframe.map(timeframe_to_domain),
        date: params.date,
        start_date: params.start_date,
        end_date: params.end_date,
    };

    match state.report_service.category_summary(query).await {
        Ok(result) => {
            let response = CategorySummaryResponse {
                start_date: result.start_date,
                end_date: result.end_date,
                grand_total: result.grand_total,
                categories: result
                    .categories
                    .into_iter()
                    .map(|c| CategorySummary {
                        category: c.category,
                        total_amount: c.total_amount,
                        percentage: c.percentage,
                    })
                    .collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to compute category summary: {}", e);
            let status = if e.to_string().contains("Invalid") {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, e.to_string()).into_response()
        }
    }
}

fn timeframe_to_domain(timeframe: Timeframe) -> DomainTimeframe {
    match timeframe {
        Timeframe::Daily => DomainTimeframe::Daily,
        Timeframe::Weekly => DomainTimeframe::Weekly,
        Timeframe::Monthly => DomainTimeframe::Monthly,
    }
}
