use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::shopping_item::use_cases::add_product::{
    AddProductToListParams, AddProductToListUseCase,
};
use business::domain::shopping_item::use_cases::clear::ClearShoppingListUseCase;
use business::domain::shopping_item::use_cases::delete::{
    DeleteShoppingItemParams, DeleteShoppingItemUseCase,
};
use business::domain::shopping_item::use_cases::get_all::GetShoppingListUseCase;
use business::domain::shopping_item::use_cases::save_prices::SaveListPricesUseCase;
use business::domain::shopping_item::use_cases::update::{
    UpdateShoppingItemParams, UpdateShoppingItemUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_id};
use crate::api::shopping_item::dto::{
    AddToListRequest, ClearListResponse, SavePricesResponse, ShoppingItemResponse,
    ShoppingListResponse, UpdateShoppingItemRequest,
};
use crate::api::tags::ApiTags;

pub struct ShoppingItemApi {
    get_all_use_case: Arc<dyn GetShoppingListUseCase>,
    add_product_use_case: Arc<dyn AddProductToListUseCase>,
    update_use_case: Arc<dyn UpdateShoppingItemUseCase>,
    delete_use_case: Arc<dyn DeleteShoppingItemUseCase>,
    clear_use_case: Arc<dyn ClearShoppingListUseCase>,
    save_prices_use_case: Arc<dyn SaveListPricesUseCase>,
}

impl ShoppingItemApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetShoppingListUseCase>,
        add_product_use_case: Arc<dyn AddProductToListUseCase>,
        update_use_case: Arc<dyn UpdateShoppingItemUseCase>,
        delete_use_case: Arc<dyn DeleteShoppingItemUseCase>,
        clear_use_case: Arc<dyn ClearShoppingListUseCase>,
        save_prices_use_case: Arc<dyn SaveListPricesUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            add_product_use_case,
            update_use_case,
            delete_use_case,
            clear_use_case,
            save_prices_use_case,
        }
    }
}

/// Shopping list API
///
/// Lines snapshot the product and distributor names at the time they were set.
#[OpenApi]
impl ShoppingItemApi {
    /// Get the shopping list
    ///
    /// Lines in insertion order together with the list total.
    #[oai(path = "/shopping-list", method = "get", tag = "ApiTags::ShoppingList")]
    async fn get_all(&self) -> GetShoppingListResponse {
        match self.get_all_use_case.execute().await {
            Ok(list) => GetShoppingListResponse::Ok(Json(list.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetShoppingListResponse::InternalError(json)
            }
        }
    }

    /// Add a product to the list
    ///
    /// Uses the product's latest quote. Adding a listed product bumps its quantity.
    #[oai(path = "/shopping-list", method = "post", tag = "ApiTags::ShoppingList")]
    async fn add(&self, body: Json<AddToListRequest>) -> AddToListResponse {
        match self
            .add_product_use_case
            .execute(AddProductToListParams {
                product_id: body.0.product_id,
            })
            .await
        {
            Ok(item) => AddToListResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddToListResponse::BadRequest(json),
                    422 => AddToListResponse::UnprocessableEntity(json),
                    _ => AddToListResponse::InternalError(json),
                }
            }
        }
    }

    /// Clear the shopping list
    #[oai(path = "/shopping-list", method = "delete", tag = "ApiTags::ShoppingList")]
    async fn clear(&self) -> ClearShoppingListResponse {
        match self.clear_use_case.execute().await {
            Ok(removed) => ClearShoppingListResponse::Ok(Json(ClearListResponse { removed })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ClearShoppingListResponse::InternalError(json)
            }
        }
    }

    /// Update a line
    ///
    /// Changes quantity, unit price or distributor. Omitted fields are kept.
    #[oai(path = "/shopping-list/:id", method = "put", tag = "ApiTags::ShoppingList")]
    async fn update(
        &self,
        id: Path<String>,
        body: Json<UpdateShoppingItemRequest>,
    ) -> UpdateShoppingItemResponse {
        let id = match parse_id(&id.0, "shopping_item.invalid_id") {
            Ok(id) => id,
            Err(json) => return UpdateShoppingItemResponse::BadRequest(json),
        };
        let body = body.0;

        match self
            .update_use_case
            .execute(UpdateShoppingItemParams {
                id,
                quantity: body.quantity,
                price: body.price,
                distributor_id: body.distributor_id,
            })
            .await
        {
            Ok(item) => UpdateShoppingItemResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateShoppingItemResponse::BadRequest(json),
                    404 => UpdateShoppingItemResponse::NotFound(json),
                    422 => UpdateShoppingItemResponse::UnprocessableEntity(json),
                    _ => UpdateShoppingItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a line
    #[oai(path = "/shopping-list/:id", method = "delete", tag = "ApiTags::ShoppingList")]
    async fn delete(&self, id: Path<String>) -> DeleteShoppingItemResponse {
        let id = match parse_id(&id.0, "shopping_item.invalid_id") {
            Ok(id) => id,
            Err(json) => return DeleteShoppingItemResponse::BadRequest(json),
        };

        match self
            .delete_use_case
            .execute(DeleteShoppingItemParams { id })
            .await
        {
            Ok(()) => DeleteShoppingItemResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteShoppingItemResponse::NotFound(json),
                    _ => DeleteShoppingItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Record list prices
    ///
    /// Stores every line with a distributor and a positive price as a new quote.
    #[oai(
        path = "/shopping-list/save-prices",
        method = "post",
        tag = "ApiTags::ShoppingList"
    )]
    async fn save_prices(&self) -> SaveListPricesResponse {
        match self.save_prices_use_case.execute().await {
            Ok(report) => SaveListPricesResponse::Ok(Json(report.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                SaveListPricesResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetShoppingListResponse {
    #[oai(status = 200)]
    Ok(Json<ShoppingListResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddToListResponse {
    #[oai(status = 200)]
    Ok(Json<ShoppingItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearShoppingListResponse {
    #[oai(status = 200)]
    Ok(Json<ClearListResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateShoppingItemResponse {
    #[oai(status = 200)]
    Ok(Json<ShoppingItemResponse>),
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
pub enum DeleteShoppingItemResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SaveListPricesResponse {
    #[oai(status = 200)]
    Ok(Json<SavePricesResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
