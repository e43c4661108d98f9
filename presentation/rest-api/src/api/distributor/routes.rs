use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::distributor::use_cases::create::{
    CreateDistributorParams, CreateDistributorUseCase,
};
use business::domain::distributor::use_cases::delete::{
    DeleteDistributorParams, DeleteDistributorUseCase,
};
use business::domain::distributor::use_cases::get_all::{
    GetAllDistributorsParams, GetAllDistributorsUseCase,
};
use business::domain::distributor::use_cases::get_by_id::{
    GetDistributorByIdParams, GetDistributorByIdUseCase,
};
use business::domain::distributor::use_cases::update::{
    UpdateDistributorParams, UpdateDistributorUseCase,
};

use crate::api::distributor::dto::{
    CascadeDeleteResponse, DistributorRequest, DistributorResponse,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_id};
use crate::api::tags::ApiTags;

const INVALID_ID: &str = "distributor.invalid_id";

pub struct DistributorApi {
    create_use_case: Arc<dyn CreateDistributorUseCase>,
    get_all_use_case: Arc<dyn GetAllDistributorsUseCase>,
    get_by_id_use_case: Arc<dyn GetDistributorByIdUseCase>,
    update_use_case: Arc<dyn UpdateDistributorUseCase>,
    delete_use_case: Arc<dyn DeleteDistributorUseCase>,
}

impl DistributorApi {
    pub fn new(
        create_use_case: Arc<dyn CreateDistributorUseCase>,
        get_all_use_case: Arc<dyn GetAllDistributorsUseCase>,
        get_by_id_use_case: Arc<dyn GetDistributorByIdUseCase>,
        update_use_case: Arc<dyn UpdateDistributorUseCase>,
        delete_use_case: Arc<dyn DeleteDistributorUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Distributor management API
#[OpenApi]
impl DistributorApi {
    /// Create a distributor
    #[oai(path = "/distributors", method = "post", tag = "ApiTags::Distributors")]
    async fn create_distributor(&self, body: Json<DistributorRequest>) -> CreateDistributorResponse {
        let params = CreateDistributorParams {
            name: body.0.name,
            cnpj: body.0.cnpj,
            contact: body.0.contact,
            notes: body.0.notes,
        };

        match self.create_use_case.execute(params).await {
            Ok(distributor) => CreateDistributorResponse::Created(Json(distributor.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateDistributorResponse::BadRequest(json),
                    409 => CreateDistributorResponse::Conflict(json),
                    _ => CreateDistributorResponse::InternalError(json),
                }
            }
        }
    }

    /// List distributors
    ///
    /// Ordered by name. `q` filters by name or CNPJ.
    #[oai(path = "/distributors", method = "get", tag = "ApiTags::Distributors")]
    async fn get_all_distributors(&self, q: Query<Option<String>>) -> GetAllDistributorsResponse {
        match self
            .get_all_use_case
            .execute(GetAllDistributorsParams { search: q.0 })
            .await
        {
            Ok(distributors) => GetAllDistributorsResponse::Ok(Json(
                distributors.into_iter().map(|d| d.into()).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllDistributorsResponse::InternalError(json)
            }
        }
    }

    /// Get a distributor by ID
    #[oai(path = "/distributors/:id", method = "get", tag = "ApiTags::Distributors")]
    async fn get_distributor_by_id(&self, id: Path<String>) -> GetDistributorByIdResponse {
        let id = match parse_id(&id.0, INVALID_ID) {
            Ok(id) => id,
            Err(json) => return GetDistributorByIdResponse::BadRequest(json),
        };

        match self
            .get_by_id_use_case
            .execute(GetDistributorByIdParams { id })
            .await
        {
            Ok(distributor) => GetDistributorByIdResponse::Ok(Json(distributor.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetDistributorByIdResponse::NotFound(json),
                    _ => GetDistributorByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a distributor
    #[oai(path = "/distributors/:id", method = "put", tag = "ApiTags::Distributors")]
    async fn update_distributor(
        &self,
        id: Path<String>,
        body: Json<DistributorRequest>,
    ) -> UpdateDistributorResponse {
        let id = match parse_id(&id.0, INVALID_ID) {
            Ok(id) => id,
            Err(json) => return UpdateDistributorResponse::BadRequest(json),
        };

        let params = UpdateDistributorParams {
            id,
            name: body.0.name,
            cnpj: body.0.cnpj,
            contact: body.0.contact,
            notes: body.0.notes,
        };

        match self.update_use_case.execute(params).await {
            Ok(distributor) => UpdateDistributorResponse::Ok(Json(distributor.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateDistributorResponse::BadRequest(json),
                    404 => UpdateDistributorResponse::NotFound(json),
                    409 => UpdateDistributorResponse::Conflict(json),
                    _ => UpdateDistributorResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a distributor
    ///
    /// Removes the distributor's prices first, then the distributor.
    #[oai(path = "/distributors/:id", method = "delete", tag = "ApiTags::Distributors")]
    async fn delete_distributor(&self, id: Path<String>) -> DeleteDistributorResponse {
        let id = match parse_id(&id.0, INVALID_ID) {
            Ok(id) => id,
            Err(json) => return DeleteDistributorResponse::BadRequest(json),
        };

        match self
            .delete_use_case
            .execute(DeleteDistributorParams { id })
            .await
        {
            Ok(removed_prices) => {
                DeleteDistributorResponse::Ok(Json(CascadeDeleteResponse { removed_prices }))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteDistributorResponse::NotFound(json),
                    _ => DeleteDistributorResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateDistributorResponse {
    #[oai(status = 201)]
    Created(Json<DistributorResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllDistributorsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<DistributorResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetDistributorByIdResponse {
    #[oai(status = 200)]
    Ok(Json<DistributorResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateDistributorResponse {
    #[oai(status = 200)]
    Ok(Json<DistributorResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteDistributorResponse {
    #[oai(status = 200)]
    Ok(Json<CascadeDeleteResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
