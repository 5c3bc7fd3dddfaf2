// handler/customers.rs
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
    db::{bookingdb::BookingExt, customerdb::CustomerExt},
    dtos::{
        bookingdtos::BookingDto,
        customerdtos::{CreateCustomerDto, CustomerDto, UpdateCustomerDto},
        ApiResponse,
    },
    error::{ErrorMessage, HttpError},
    AppState,
};

pub fn customers_handler() -> Router {
    Router::new()
        .route("/", get(get_customers).post(create_customer))
        .route("/:customer_id", get(get_customer))
        .route("/:customer_id", put(update_customer))
        .route("/:customer_id", delete(delete_customer))
}

pub async fn get_customers(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let customers = app_state.db_client.get_customers().await?;

    let data: Vec<CustomerDto> = customers.into_iter().map(CustomerDto::from).collect();

    Ok(Json(ApiResponse::success(
        "Customers retrieved successfully",
        data,
    )))
}

pub async fn get_customer(
    Path(customer_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let customer = app_state.db_client.get_customer(customer_id).await?;

    let data = match customer {
        Some(customer) => {
            let bookings = app_state
                .db_client
                .get_bookings(Some(customer.id), None, None)
                .await?
                .into_iter()
                .map(BookingDto::for_customer_view)
                .collect();
            Some(CustomerDto::with_bookings(customer, bookings))
        }
        None => None,
    };

    Ok(Json(ApiResponse::success(
        "Customer retrieved successfully",
        data,
    )))
}

pub async fn create_customer(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<CreateCustomerDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate().map_err(HttpError::validation)?;

    let customer = app_state
        .db_client
        .save_customer(body.name, body.email, body.phone)
        .await?;

    Ok(Json(ApiResponse::success(
        "Customer created successfully",
        CustomerDto::from(customer),
    )))
}

pub async fn update_customer(
    Path(customer_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<UpdateCustomerDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate().map_err(HttpError::validation)?;

    let customer = app_state
        .db_client
        .update_customer(customer_id, body.name, body.email, body.phone)
        .await?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::RecordNotFound.to_string()))?;

    Ok(Json(ApiResponse::success(
        "Customer updated successfully",
        CustomerDto::from(customer),
    )))
}

pub async fn delete_customer(
    Path(customer_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let customer = app_state
        .db_client
        .delete_customer(customer_id)
        .await?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::RecordNotFound.to_string()))?;

    Ok(Json(ApiResponse::success(
        "Customer deleted successfully",
        CustomerDto::from(customer),
    )))
}
