// handler/bookings.rs
use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    response::IntoResponse,
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::{bookingdb::BookingExt, customerdb::CustomerExt},
    dtos::{
        bookingdtos::{
            BookingDto, BookingFilterDto, CreateBookingDto, PublicBookingDto, UpdateBookingDto,
        },
        ApiResponse,
    },
    error::{ErrorMessage, HttpError},
    models::bookingmodel::BookingStatus,
    AppState,
};

pub fn bookings_handler() -> Router {
    Router::new()
        .route("/", get(get_bookings).post(create_booking))
        .route("/public", post(create_public_booking))
        .route("/:booking_id", get(get_booking))
        .route("/:booking_id", put(update_booking))
        .route("/:booking_id", delete(delete_booking))
}

pub async fn get_bookings(
    Query(filter): Query<BookingFilterDto>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let bookings = app_state
        .db_client
        .get_bookings(filter.customer_id, filter.contractor_id, filter.status)
        .await?;

    let data: Vec<BookingDto> = bookings
        .into_iter()
        .map(BookingDto::with_relations)
        .collect();

    Ok(Json(ApiResponse::success(
        "Bookings retrieved successfully",
        data,
    )))
}

pub async fn get_booking(
    Path(booking_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let booking = app_state.db_client.get_booking(booking_id).await?;

    let data = booking.map(BookingDto::with_relations);

    Ok(Json(ApiResponse::success(
        "Booking retrieved successfully",
        data,
    )))
}

pub async fn create_booking(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate().map_err(HttpError::validation)?;

    let booking = app_state
        .db_client
        .save_booking(
            body.service_id,
            body.customer_id,
            body.contractor_id,
            body.date,
            body.status,
        )
        .await?;

    Ok(Json(ApiResponse::success(
        "Booking created successfully",
        BookingDto::from(booking),
    )))
}

/// Booking placed from the public service page. Looks up the customer by
/// email and registers them on the fly when they are new. The customer and
/// booking writes are two independent statements, so a failed booking can
/// leave a fresh customer row behind.
pub async fn create_public_booking(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<PublicBookingDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate().map_err(HttpError::validation)?;

    if body.date <= Utc::now() {
        return Err(HttpError::bad_request("Date must be in the future"));
    }

    let customer = match app_state.db_client.get_customer_by_email(&body.email).await? {
        Some(customer) => customer,
        None => {
            app_state
                .db_client
                .save_customer(body.name, body.email, body.phone)
                .await?
        }
    };

    let booking = app_state
        .db_client
        .save_booking(
            body.service_id,
            customer.id,
            body.contractor_id,
            body.date,
            Some(BookingStatus::Pending),
        )
        .await?;

    Ok(Json(ApiResponse::success(
        "Booking created successfully",
        BookingDto::from(booking),
    )))
}

pub async fn update_booking(
    Path(booking_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<UpdateBookingDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate().map_err(HttpError::validation)?;

    let booking = app_state
        .db_client
        .update_booking(
            booking_id,
            body.service_id,
            body.customer_id,
            body.contractor_id,
            body.date,
            body.status,
        )
        .await?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::RecordNotFound.to_string()))?;

    Ok(Json(ApiResponse::success(
        "Booking updated successfully",
        BookingDto::from(booking),
    )))
}

pub async fn delete_booking(
    Path(booking_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let booking = app_state
        .db_client
        .delete_booking(booking_id)
        .await?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::RecordNotFound.to_string()))?;

    Ok(Json(ApiResponse::success(
        "Booking deleted successfully",
        BookingDto::from(booking),
    )))
}
