// handler/users.rs
use std::sync::Arc;

use axum::{
    extract::Path,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::userdb::UserExt,
    dtos::{
        userdtos::{CreateUserDto, FilterUserDto, UpdateUserDto, UserData, UserResponseDto},
        ApiResponse,
    },
    error::{ErrorMessage, HttpError},
    middleware::{identity, require_admin, CurrentUser},
    AppState,
};

/// Reads stay open so the dashboard can render names next to bookings.
/// Every mutation requires an identified admin.
pub fn users_handler() -> Router {
    Router::new()
        .route("/me", get(get_me).layer(middleware::from_fn(identity)))
        .route("/", get(get_users))
        .route(
            "/",
            post(create_user)
                .layer(middleware::from_fn(require_admin))
                .layer(middleware::from_fn(identity)),
        )
        .route("/:user_id", get(get_user))
        .route(
            "/:user_id",
            put(update_user)
                .layer(middleware::from_fn(require_admin))
                .layer(middleware::from_fn(identity)),
        )
        .route(
            "/:user_id",
            delete(delete_user)
                .layer(middleware::from_fn(require_admin))
                .layer(middleware::from_fn(identity)),
        )
}

pub async fn get_me(
    Extension(current_user): Extension<CurrentUser>,
) -> Result<impl IntoResponse, HttpError> {
    let filtered_user = FilterUserDto::filter_user(&current_user.user);

    let response_data = UserResponseDto {
        status: "success".to_string(),
        data: UserData {
            user: filtered_user,
        },
    };

    Ok(Json(response_data))
}

pub async fn get_users(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let users = app_state.db_client.get_users().await?;

    Ok(Json(ApiResponse::success(
        "Users retrieved successfully",
        FilterUserDto::filter_users(&users),
    )))
}

pub async fn get_user(
    Path(user_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let user = app_state.db_client.get_user(Some(user_id), None).await?;

    let data = user.as_ref().map(FilterUserDto::filter_user);

    Ok(Json(ApiResponse::success(
        "User retrieved successfully",
        data,
    )))
}

pub async fn create_user(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<CreateUserDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate().map_err(HttpError::validation)?;

    let user = app_state
        .db_client
        .save_user(
            body.name,
            body.email,
            body.image,
            body.is_admin.unwrap_or(false),
        )
        .await?;

    Ok(Json(ApiResponse::success(
        "User created successfully",
        FilterUserDto::filter_user(&user),
    )))
}

pub async fn update_user(
    Path(user_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
    Json(body): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, HttpError> {
    body.validate().map_err(HttpError::validation)?;

    let user = app_state
        .db_client
        .update_user(user_id, body.name, body.email, body.image, body.is_admin)
        .await?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::RecordNotFound.to_string()))?;

    Ok(Json(ApiResponse::success(
        "User updated successfully",
        FilterUserDto::filter_user(&user),
    )))
}

pub async fn delete_user(
    Path(user_id): Path<Uuid>,
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let user = app_state
        .db_client
        .delete_user(user_id)
        .await?
        .ok_or_else(|| HttpError::not_found(ErrorMessage::RecordNotFound.to_string()))?;

    Ok(Json(ApiResponse::success(
        "User deleted successfully",
        FilterUserDto::filter_user(&user),
    )))
}
