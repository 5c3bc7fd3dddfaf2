// handler/services.rs
use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    response::IntoResponse,
    routing::{delete, get, put},
    Extension, Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::{categorydb::CategoryExt, servicedb::ServiceExt},
    dtos::{
        servicedtos::{CreateServiceDto, ServiceDto, ServiceFilterDto, UpdateServiceDto},
        ApiResponse,
    },
    error::{ErrorMessage, HttpError},
    models::catalogmodel::ServiceCategory,
    utils::price::parse_price,
    AppState,
};

pub fn services_handler() -> Router {
    Router::new()
        .route("/", get(get_services).post(create_service))
        .route("/:service_id", get(get_service))
        .route("/:service_id", put(update_service))
        .route("/:service_id", delete(delete_service))
}

pub async fn get_services(
    Query(filter): Query<ServiceFilterDto>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let services = app_state.db_client.get_services(filter.category_id).await?;

    let categories: HashMap<Uuid, ServiceCategory> = app_state
        .db_client
        .get_categories()
        .await?
        .into_iter()
        .map(|category| (category.id, category))
        .collect();

    let data: Vec<ServiceDto> = services
        .into_iter()
        .map(|service| match categories.get(&service.category_id) {
            Some(category) => ServiceDto::with_category(service, category.clone()),
            None => ServiceDto::from(service),
        })
        .collect();

    Ok(Json(ApiResponse::success(
        "Services retrieved successfully",
        data,
    )))
}

pub async fn get_service(
    Path(service_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let service = app_state.db_client.get_service(service_id).await?;

    let data = match service {
        Some(service) => {
            let category = app_state.db_client.get_category(service.category_id).await?;
            Some(match category {
                Some(category) => ServiceDto::with_category(service, category),
                None => ServiceDto::from(service),
            })
        }
        None => None,
    };

    Ok(Json(ApiResponse::success(
        "Service retrieved successfully",
        data,
    )))
}

pub async fn create_service(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<CreateServiceDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate().map_err(HttpError::validation)?;

    let price = parse_price(body.price)
        .ok_or_else(|| HttpError::bad_request("Price must be a positive number"))?;

    let service = app_state
        .db_client
        .save_service(
            body.name,
            body.description,
            price,
            body.image_url,
            body.category_id,
        )
        .await?;

    Ok(Json(ApiResponse::success(
        "Service created successfully",
        ServiceDto::from(service),
    )))
}

pub async fn update_service(
    Path(service_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<UpdateServiceDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate().map_err(HttpError::validation)?;

    let price = match body.price {
        Some(value) => Some(
            parse_price(value)
                .ok_or_else(|| HttpError::bad_request("Price must be a positive number"))?,
        ),
        None => None,
    };

    let service = app_state
        .db_client
        .update_service(
            service_id,
            body.name,
            body.description,
            price,
            body.image_url,
            body.category_id,
        )
        .await?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::RecordNotFound.to_string()))?;

    Ok(Json(ApiResponse::success(
        "Service updated successfully",
        ServiceDto::from(service),
    )))
}

pub async fn delete_service(
    Path(service_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let service = app_state
        .db_client
        .delete_service(service_id)
        .await?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::RecordNotFound.to_string()))?;

    Ok(Json(ApiResponse::success(
        "Service deleted successfully",
        ServiceDto::from(service),
    )))
}
