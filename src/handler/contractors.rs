// handler/contractors.rs
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
    db::{bookingdb::BookingExt, contractordb::ContractorExt},
    dtos::{
        bookingdtos::BookingDto,
        contractordtos::{
            ContractorDto, ContractorFilterDto, CreateContractorDto, UpdateContractorDto,
        },
        ApiResponse,
    },
    error::{ErrorMessage, HttpError},
    AppState,
};

pub fn contractors_handler() -> Router {
    Router::new()
        .route("/", get(get_contractors).post(create_contractor))
        .route("/:contractor_id", get(get_contractor))
        .route("/:contractor_id", put(update_contractor))
        .route("/:contractor_id", delete(delete_contractor))
}

pub async fn get_contractors(
    Query(filter): Query<ContractorFilterDto>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let contractors = app_state
        .db_client
        .get_contractors(filter.specialization.as_deref())
        .await?;

    let data: Vec<ContractorDto> = contractors.into_iter().map(ContractorDto::from).collect();

    Ok(Json(ApiResponse::success(
        "Contractors retrieved successfully",
        data,
    )))
}

pub async fn get_contractor(
    Path(contractor_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let contractor = app_state.db_client.get_contractor(contractor_id).await?;

    let data = match contractor {
        Some(contractor) => {
            let bookings = app_state
                .db_client
                .get_bookings(None, Some(contractor.id), None)
                .await?
                .into_iter()
                .map(BookingDto::for_contractor_view)
                .collect();
            Some(ContractorDto::with_bookings(contractor, bookings))
        }
        None => None,
    };

    Ok(Json(ApiResponse::success(
        "Contractor retrieved successfully",
        data,
    )))
}

pub async fn create_contractor(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<CreateContractorDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate().map_err(HttpError::validation)?;

    let contractor = app_state
        .db_client
        .save_contractor(
            body.name,
            body.phone,
            body.email,
            body.specialization,
            body.rating,
        )
        .await?;

    Ok(Json(ApiResponse::success(
        "Contractor created successfully",
        ContractorDto::from(contractor),
    )))
}

pub async fn update_contractor(
    Path(contractor_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<UpdateContractorDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate().map_err(HttpError::validation)?;

    let contractor = app_state
        .db_client
        .update_contractor(
            contractor_id,
            body.name,
            body.phone,
            body.email,
            body.specialization,
            body.rating,
        )
        .await?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::RecordNotFound.to_string()))?;

    Ok(Json(ApiResponse::success(
        "Contractor updated successfully",
        ContractorDto::from(contractor),
    )))
}

pub async fn delete_contractor(
    Path(contractor_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let contractor = app_state
        .db_client
        .delete_contractor(contractor_id)
        .await?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::RecordNotFound.to_string()))?;

    Ok(Json(ApiResponse::success(
        "Contractor deleted successfully",
        ContractorDto::from(contractor),
    )))
}
