use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::comparison::use_cases::compare::{
    ComparePricesParams, ComparePricesUseCase,
};
use business::domain::comparison::use_cases::dashboard::DashboardUseCase;
use business::domain::comparison::use_cases::history::{PriceHistoryParams, PriceHistoryUseCase};

use crate::api::comparison::dto::{
    DashboardResponse, PriceComparisonResponse, PriceHistoryResponse,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_id};
use crate::api::tags::ApiTags;

pub struct ComparisonApi {
    compare_use_case: Arc<dyn ComparePricesUseCase>,
    history_use_case: Arc<dyn PriceHistoryUseCase>,
    dashboard_use_case: Arc<dyn DashboardUseCase>,
}

impl ComparisonApi {
    pub fn new(
        compare_use_case: Arc<dyn ComparePricesUseCase>,
        history_use_case: Arc<dyn PriceHistoryUseCase>,
        dashboard_use_case: Arc<dyn DashboardUseCase>,
    ) -> Self {
        Self {
            compare_use_case,
            history_use_case,
            dashboard_use_case,
        }
    }
}

/// Price comparison, history and dashboard API
#[OpenApi]
impl ComparisonApi {
    /// Compare distributors for a product
    ///
    /// Uses the latest quote of each distributor, cheapest first.
    #[oai(path = "/products/:id/comparison", method = "get", tag = "ApiTags::Comparison")]
    async fn compare(&self, id: Path<String>) -> ComparisonResponse {
        let product_id = match parse_id(&id.0, "product.invalid_id") {
            Ok(id) => id,
            Err(json) => return ComparisonResponse::BadRequest(json),
        };

        match self
            .compare_use_case
            .execute(ComparePricesParams { product_id })
            .await
        {
            Ok(comparison) => ComparisonResponse::Ok(Json(comparison.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ComparisonResponse::NotFound(json),
                    _ => ComparisonResponse::InternalError(json),
                }
            }
        }
    }

    /// Price history of a product
    ///
    /// Oldest first, optionally limited to one distributor.
    #[oai(path = "/products/:id/history", method = "get", tag = "ApiTags::Comparison")]
    async fn history(
        &self,
        id: Path<String>,
        distributor_id: Query<Option<String>>,
    ) -> HistoryResponse {
        let product_id = match parse_id(&id.0, "product.invalid_id") {
            Ok(id) => id,
            Err(json) => return HistoryResponse::BadRequest(json),
        };
        let distributor_id = match distributor_id.0.filter(|d| !d.trim().is_empty()) {
            Some(raw) => match parse_id(&raw, "distributor.invalid_id") {
                Ok(id) => Some(id),
                Err(json) => return HistoryResponse::BadRequest(json),
            },
            None => None,
        };

        match self
            .history_use_case
            .execute(PriceHistoryParams {
                product_id,
                distributor_id,
            })
            .await
        {
            Ok(history) => HistoryResponse::Ok(Json(history.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => HistoryResponse::NotFound(json),
                    _ => HistoryResponse::InternalError(json),
                }
            }
        }
    }

    /// Dashboard figures
    #[oai(path = "/dashboard", method = "get", tag = "ApiTags::Comparison")]
    async fn dashboard(&self) -> GetDashboardResponse {
        match self.dashboard_use_case.execute().await {
            Ok(stats) => GetDashboardResponse::Ok(Json(stats.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetDashboardResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ComparisonResponse {
    #[oai(status = 200)]
    Ok(Json<PriceComparisonResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum HistoryResponse {
    #[oai(status = 200)]
    Ok(Json<PriceHistoryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetDashboardResponse {
    #[oai(status = 200)]
    Ok(Json<DashboardResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
