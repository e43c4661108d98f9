use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::price::use_cases::create::{CreatePriceParams, CreatePriceUseCase};
use business::domain::price::use_cases::delete::{DeletePriceParams, DeletePriceUseCase};
use business::domain::price::use_cases::get_all::{GetAllPricesParams, GetAllPricesUseCase};
use business::domain::price::use_cases::get_by_product::{
    GetPricesByProductParams, GetPricesByProductUseCase,
};
use business::domain::price::use_cases::update::{UpdatePriceParams, UpdatePriceUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_id};
use crate::api::price::dto::{CreatePriceRequest, PriceResponse, UpdatePriceRequest};
use crate::api::tags::ApiTags;

const INVALID_ID: &str = "price.invalid_id";

pub struct PriceApi {
    create_use_case: Arc<dyn CreatePriceUseCase>,
    get_all_use_case: Arc<dyn GetAllPricesUseCase>,
    get_by_product_use_case: Arc<dyn GetPricesByProductUseCase>,
    update_use_case: Arc<dyn UpdatePriceUseCase>,
    delete_use_case: Arc<dyn DeletePriceUseCase>,
}

impl PriceApi {
    pub fn new(
        create_use_case: Arc<dyn CreatePriceUseCase>,
        get_all_use_case: Arc<dyn GetAllPricesUseCase>,
        get_by_product_use_case: Arc<dyn GetPricesByProductUseCase>,
        update_use_case: Arc<dyn UpdatePriceUseCase>,
        delete_use_case: Arc<dyn DeletePriceUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_product_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Price quotes API
#[OpenApi]
impl PriceApi {
    /// Record a price
    ///
    /// Adds a new quote; older quotes of the same pair stay as history.
    #[oai(path = "/prices", method = "post", tag = "ApiTags::Prices")]
    async fn create_price(&self, body: Json<CreatePriceRequest>) -> CreatePriceResponse {
        let params = CreatePriceParams {
            product_id: body.0.product_id,
            distributor_id: body.0.distributor_id,
            price: body.0.price,
            min_quantity: body.0.min_quantity,
            validity: body.0.validity,
        };

        match self.create_use_case.execute(params).await {
            Ok(price) => CreatePriceResponse::Created(Json(price.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreatePriceResponse::BadRequest(json),
                    422 => CreatePriceResponse::UnprocessableEntity(json),
                    _ => CreatePriceResponse::InternalError(json),
                }
            }
        }
    }

    /// List prices
    ///
    /// Newest first, with product and distributor names. `q` filters by either name.
    #[oai(path = "/prices", method = "get", tag = "ApiTags::Prices")]
    async fn get_all_prices(&self, q: Query<Option<String>>) -> GetPricesResponse {
        match self
            .get_all_use_case
            .execute(GetAllPricesParams { search: q.0 })
            .await
        {
            Ok(prices) => GetPricesResponse::Ok(Json(prices.into_iter().map(|p| p.into()).collect())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetPricesResponse::InternalError(json)
            }
        }
    }

    /// List the prices of one product
    #[oai(path = "/products/:id/prices", method = "get", tag = "ApiTags::Prices")]
    async fn get_prices_by_product(&self, id: Path<String>) -> GetProductPricesResponse {
        let product_id = match parse_id(&id.0, "product.invalid_id") {
            Ok(id) => id,
            Err(json) => return GetProductPricesResponse::BadRequest(json),
        };

        match self
            .get_by_product_use_case
            .execute(GetPricesByProductParams { product_id })
            .await
        {
            Ok(prices) => {
                GetProductPricesResponse::Ok(Json(prices.into_iter().map(|p| p.into()).collect()))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    422 => GetProductPricesResponse::NotFound(json),
                    _ => GetProductPricesResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a price
    ///
    /// Edits the quote in place; the recording date is kept.
    #[oai(path = "/prices/:id", method = "put", tag = "ApiTags::Prices")]
    async fn update_price(&self, id: Path<String>, body: Json<UpdatePriceRequest>) -> UpdatePriceResponse {
        let id = match parse_id(&id.0, INVALID_ID) {
            Ok(id) => id,
            Err(json) => return UpdatePriceResponse::BadRequest(json),
        };

        let params = UpdatePriceParams {
            id,
            distributor_id: body.0.distributor_id,
            price: body.0.price,
            min_quantity: body.0.min_quantity,
            validity: body.0.validity,
        };

        match self.update_use_case.execute(params).await {
            Ok(price) => UpdatePriceResponse::Ok(Json(price.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdatePriceResponse::BadRequest(json),
                    404 => UpdatePriceResponse::NotFound(json),
                    422 => UpdatePriceResponse::UnprocessableEntity(json),
                    _ => UpdatePriceResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a price
    #[oai(path = "/prices/:id", method = "delete", tag = "ApiTags::Prices")]
    async fn delete_price(&self, id: Path<String>) -> DeletePriceResponse {
        let id = match parse_id(&id.0, INVALID_ID) {
            Ok(id) => id,
            Err(json) => return DeletePriceResponse::BadRequest(json),
        };

        match self.delete_use_case.execute(DeletePriceParams { id }).await {
            Ok(()) => DeletePriceResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeletePriceResponse::NotFound(json),
                    _ => DeletePriceResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreatePriceResponse {
    #[oai(status = 201)]
    Created(Json<PriceResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetPricesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<PriceResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductPricesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<PriceResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdatePriceResponse {
    #[oai(status = 200)]
    Ok(Json<PriceResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeletePriceResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
