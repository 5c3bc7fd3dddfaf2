// handler/categories.rs
use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::Path,
    response::IntoResponse,
    routing::{delete, get, put},
    Extension, Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::{categorydb::CategoryExt, servicedb::ServiceExt},
    dtos::{
        categorydtos::{CategoryDto, CreateCategoryDto, UpdateCategoryDto},
        servicedtos::ServiceDto,
        ApiResponse,
    },
    error::{ErrorMessage, HttpError},
    AppState,
};

pub fn categories_handler() -> Router {
    Router::new()
        .route("/", get(get_categories).post(create_category))
        .route("/:category_id", get(get_category))
        .route("/:category_id", put(update_category))
        .route("/:category_id", delete(delete_category))
}

pub async fn get_categories(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let categories = app_state.db_client.get_categories().await?;
    let services = app_state.db_client.get_services(None).await?;

    let mut services_by_category: HashMap<Uuid, Vec<ServiceDto>> = HashMap::new();
    for service in services {
        services_by_category
            .entry(service.category_id)
            .or_default()
            .push(ServiceDto::from(service));
    }

    let data: Vec<CategoryDto> = categories
        .into_iter()
        .map(|category| {
            let services = services_by_category
                .remove(&category.id)
                .unwrap_or_default();
            CategoryDto::with_services(category, services)
        })
        .collect();

    Ok(Json(ApiResponse::success(
        "Categories retrieved successfully",
        data,
    )))
}

pub async fn get_category(
    Path(category_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let category = app_state.db_client.get_category(category_id).await?;

    // A missing id is not an error here: the envelope simply carries null.
    let data = match category {
        Some(category) => {
            let services = app_state
                .db_client
                .get_services(Some(category.id))
                .await?
                .into_iter()
                .map(ServiceDto::from)
                .collect();
            Some(CategoryDto::with_services(category, services))
        }
        None => None,
    };

    Ok(Json(ApiResponse::success(
        "Category retrieved successfully",
        data,
    )))
}

pub async fn create_category(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<CreateCategoryDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate().map_err(HttpError::validation)?;

    let category = app_state
        .db_client
        .save_category(body.name, body.description)
        .await?;

    Ok(Json(ApiResponse::success(
        "Category created successfully",
        CategoryDto::from(category),
    )))
}

pub async fn update_category(
    Path(category_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<UpdateCategoryDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate().map_err(HttpError::validation)?;

    let category = app_state
        .db_client
        .update_category(category_id, body.name, body.description)
        .await?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::RecordNotFound.to_string()))?;

    Ok(Json(ApiResponse::success(
        "Category updated successfully",
        CategoryDto::from(category),
    )))
}

pub async fn delete_category(
    Path(category_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let category = app_state
        .db_client
        .delete_category(category_id)
        .await?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::RecordNotFound.to_string()))?;

    Ok(Json(ApiResponse::success(
        "Category deleted successfully",
        CategoryDto::from(category),
    )))
}
