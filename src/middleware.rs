use std::sync::Arc;

use axum::{
    body::{self, Body},
    extract::Request,
    http::{header, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Extension, Json,
};

use axum_extra::extract::cookie::CookieJar;
use serde_json::Value;

use crate::{
    db::cache::{CacheHelper, RESPONSE_CACHE_TTL},
    db::userdb::UserExt,
    error::{ErrorMessage, HttpError},
    models::usermodel::User,
    AppState,
};

/// The user resolved by the identity middleware, available to handlers
/// and downstream middleware as a request extension.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: User,
}

/// Resolves the caller from the `user_id` cookie or `x-user-id` header.
/// Session management itself lives with the external identity provider;
/// this service only trusts the id it hands over.
pub async fn identity(
    cookie_jar: CookieJar,
    Extension(app_state): Extension<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
    let resolved_id = cookie_jar
        .get("user_id")
        .map(|cookie| cookie.value().to_string())
        .or_else(|| {
            req.headers()
                .get("x-user-id")
                .and_then(|value| value.to_str().ok())
                .map(|value| value.to_owned())
        });

    let resolved_id = resolved_id
        .ok_or_else(|| HttpError::unauthorized(ErrorMessage::UserNotAuthenticated.to_string()))?;

    let user_id = uuid::Uuid::parse_str(&resolved_id)
        .map_err(|_| HttpError::unauthorized(ErrorMessage::UserNotAuthenticated.to_string()))?;

    let user = app_state
        .db_client
        .get_user(Some(user_id), None)
        .await
        .map_err(|_| HttpError::unauthorized(ErrorMessage::UserNoLongerExist.to_string()))?;

    let user =
        user.ok_or_else(|| HttpError::unauthorized(ErrorMessage::UserNoLongerExist.to_string()))?;

    req.extensions_mut().insert(CurrentUser { user });

    Ok(next.run(req).await)
}

pub async fn require_admin(req: Request, next: Next) -> Result<impl IntoResponse, HttpError> {
    let current = req
        .extensions()
        .get::<CurrentUser>()
        .ok_or_else(|| HttpError::unauthorized(ErrorMessage::UserNotAuthenticated.to_string()))?;

    if !current.user.is_admin {
        return Err(HttpError::new(
            ErrorMessage::PermissionDenied.to_string(),
            StatusCode::FORBIDDEN,
        ));
    }

    Ok(next.run(req).await)
}

/// Caches successful GET responses in Redis (1 hour TTL) and drops the
/// affected entries after successful POST/PUT/DELETE requests. Without
/// Redis every request passes straight through.
pub async fn cache_layer(req: Request, next: Next) -> Result<impl IntoResponse, HttpError> {
    let app_state = req
        .extensions()
        .get::<Arc<AppState>>()
        .cloned()
        .ok_or_else(|| {
            HttpError::server_error("AppState missing from request extensions".to_string())
        })?;

    let redis_opt = app_state.db_client.redis_client.clone();

    if req.method() == Method::GET {
        let uri = req.uri().to_string();
        let user_tag = resolve_user_tag(&req);
        let cache_key = format!("cache:GET:{}:{}", uri, user_tag);

        if let Some(ref redis) = redis_opt {
            if let Ok(Some(cached_value)) = CacheHelper::get::<Value>(redis, &cache_key).await {
                return Ok(Json(cached_value).into_response());
            }
        }

        let response = next.run(req).await;

        if let Some(ref redis) = redis_opt {
            if response.status().is_success() && is_json(&response) {
                // Buffer the body so it can be stored, then hand the
                // original bytes back to the client untouched.
                let (parts, response_body) = response.into_parts();
                let bytes = body::to_bytes(response_body, 1024 * 1024).await.map_err(|_| {
                    HttpError::server_error(
                        "Failed to buffer response body for caching".to_string(),
                    )
                })?;

                if let Ok(json_value) = serde_json::from_slice::<Value>(&bytes) {
                    let _ =
                        CacheHelper::set(redis, &cache_key, &json_value, RESPONSE_CACHE_TTL).await;
                }

                return Ok(Response::from_parts(parts, Body::from(bytes)));
            }
        }

        return Ok(response);
    }

    let path = req.uri().path().to_string();
    let response = next.run(req).await;

    if response.status().is_success() {
        if let Some(ref redis) = redis_opt {
            for collection in affected_collections(&path) {
                let delete_pattern = format!("cache:*/api/{}*", collection);
                let _ = CacheHelper::delete_pattern(redis, &delete_pattern).await;
            }
        }
    }

    Ok(response)
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|ct| ct.to_str().ok())
        .map(|ct| ct.contains("application/json"))
        .unwrap_or(false)
}

// The cache key carries a user tag so authenticated responses such as
// /api/users/me never leak across callers. This runs before the identity
// middleware, so fall back to the raw header/cookie when the extension
// is absent.
fn resolve_user_tag(req: &Request) -> String {
    if let Some(current) = req.extensions().get::<CurrentUser>() {
        return current.user.id.to_string();
    }

    if let Some(id) = req.headers().get("x-user-id").and_then(|v| v.to_str().ok()) {
        return id.to_string();
    }

    if let Some(cookie_header) = req.headers().get(header::COOKIE).and_then(|h| h.to_str().ok()) {
        if let Some(pair) = cookie_header
            .split(';')
            .map(|s| s.trim())
            .find(|s| s.starts_with("user_id="))
        {
            if let Some(id) = pair.strip_prefix("user_id=") {
                return id.to_string();
            }
        }
    }

    "anon".to_string()
}

/// Collections whose cached responses a mutation under `path` can
/// invalidate. Responses embed related rows (bookings carry their
/// service, customer, and contractor; category reads carry services;
/// contractor and customer details carry bookings), so a write to one
/// table stales the collections that embed it.
fn affected_collections(path: &str) -> &'static [&'static str] {
    let collection = path
        .split('/')
        .filter(|seg| !seg.is_empty())
        .nth(1)
        .unwrap_or_default();

    match collection {
        "categories" => &["categories", "services"],
        "services" => &["services", "categories", "bookings"],
        "contractors" => &["contractors", "bookings"],
        "customers" => &["customers", "bookings"],
        "bookings" => &["bookings", "contractors", "customers"],
        "users" => &["users"],
        _ => &[],
    }
}
