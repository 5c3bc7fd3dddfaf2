// tests/api.rs
//
// End-to-end tests against the real router and a live PostgreSQL. The
// suite is skipped when DATABASE_URL is unset so it still passes on
// machines without a database. Every test provisions its own rows with
// unique emails and removes them in reverse dependency order.
use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use dotenv::dotenv;
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use tower::ServiceExt;
use uuid::Uuid;

use finishhub::config::Config;
use finishhub::db::db::DBClient;
use finishhub::routes::create_router;
use finishhub::AppState;

async fn spawn_app() -> Option<(Router, Pool<Postgres>)> {
    dotenv().ok();

    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL missing; skipping API tests.");
        return None;
    };

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("failed to connect to the test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run migrations");

    let config = Config {
        database_url,
        frontend_origin: "http://localhost:3000".to_string(),
        redis_url: None,
        port: 0,
    };

    let app_state = Arc::new(AppState::new(DBClient::new(pool.clone()), config));

    Some((create_router(app_state), pool))
}

async fn request(
    app: &Router,
    method: Method,
    uri: &str,
    user_id: Option<Uuid>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(user_id) = user_id {
        builder = builder.header("x-user-id", user_id.to_string());
    }

    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    request(app, Method::GET, uri, None, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    request(app, Method::POST, uri, None, Some(body)).await
}

async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    request(app, Method::PUT, uri, None, Some(body)).await
}

async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    request(app, Method::DELETE, uri, None, None).await
}

fn id_of(body: &Value) -> String {
    body["data"]["id"].as_str().expect("response data.id").to_string()
}

async fn create_category(app: &Router, name: &str) -> String {
    let (status, body) = post(
        app,
        "/api/categories",
        json!({ "name": name, "description": "created by the api tests" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create category: {body}");
    id_of(&body)
}

async fn create_service(app: &Router, name: &str, price: f64, category_id: &str) -> String {
    let (status, body) = post(
        app,
        "/api/services",
        json!({ "name": name, "price": price, "categoryId": category_id }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create service: {body}");
    id_of(&body)
}

async fn create_contractor(app: &Router, name: &str, email: &str, specialization: Option<&str>) -> String {
    let (status, body) = post(
        app,
        "/api/contractors",
        json!({
            "name": name,
            "phone": "+1234567890",
            "email": email,
            "specialization": specialization,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create contractor: {body}");
    id_of(&body)
}

async fn create_customer(app: &Router, name: &str, email: &str) -> String {
    let (status, body) = post(
        app,
        "/api/customers",
        json!({ "name": name, "email": email, "phone": "+1234567890" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create customer: {body}");
    id_of(&body)
}

#[tokio::test]
async fn health_check_reports_ok() {
    let Some((app, _pool)) = spawn_app().await else { return };

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["message"], "Server is running");
}

#[tokio::test]
async fn booking_crud_and_filters_cover_the_dashboard_flow() {
    let Some((app, _pool)) = spawn_app().await else { return };
    let suffix = Uuid::new_v4();

    let customer_id = create_customer(
        &app,
        "Test Customer for Booking",
        &format!("booking-customer-{suffix}@example.com"),
    )
    .await;
    let contractor_id = create_contractor(
        &app,
        "Test Contractor for Booking",
        &format!("booking-contractor-{suffix}@example.com"),
        Some("General"),
    )
    .await;
    let category_id = create_category(&app, &format!("Booking Category {suffix}")).await;
    let service_id =
        create_service(&app, &format!("Booking Service {suffix}"), 100.0, &category_id).await;

    let (status, body) = post(
        &app,
        "/api/bookings",
        json!({
            "serviceId": service_id,
            "customerId": customer_id,
            "contractorId": contractor_id,
            "date": (Utc::now() + Duration::days(7)).to_rfc3339(),
            "status": "PENDING",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create booking: {body}");
    assert_eq!(body["message"], "Booking created successfully");
    let booking_id = id_of(&body);

    // getAll embeds every relation
    let (status, body) = get(&app, "/api/bookings").await;
    assert_eq!(status, StatusCode::OK);
    let bookings = body["data"].as_array().unwrap();
    let created = bookings
        .iter()
        .find(|b| b["id"] == booking_id.as_str())
        .expect("created booking listed");
    assert!(created["service"].is_object());
    assert!(created["customer"].is_object());
    assert!(created["contractor"].is_object());

    // filter by customer
    let (_, body) = get(&app, &format!("/api/bookings?customerId={customer_id}")).await;
    let bookings = body["data"].as_array().unwrap();
    assert!(!bookings.is_empty());
    assert!(bookings
        .iter()
        .all(|b| b["customerId"] == customer_id.as_str()));

    // filter by contractor
    let (_, body) = get(&app, &format!("/api/bookings?contractorId={contractor_id}")).await;
    let bookings = body["data"].as_array().unwrap();
    assert!(!bookings.is_empty());
    assert!(bookings
        .iter()
        .all(|b| b["contractorId"] == contractor_id.as_str()));

    // filter by status
    let (_, body) = get(&app, "/api/bookings?status=PENDING").await;
    let bookings = body["data"].as_array().unwrap();
    assert!(bookings.iter().any(|b| b["id"] == booking_id.as_str()));
    assert!(bookings.iter().all(|b| b["status"] == "PENDING"));

    // getById carries the same relations
    let (status, body) = get(&app, &format!("/api/bookings/{booking_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], booking_id.as_str());
    assert_eq!(body["data"]["service"]["id"], service_id.as_str());
    assert_eq!(body["data"]["customer"]["id"], customer_id.as_str());
    assert_eq!(body["data"]["contractor"]["id"], contractor_id.as_str());

    // update moves the booking through the pipeline
    let (status, body) = put(
        &app,
        &format!("/api/bookings/{booking_id}"),
        json!({ "status": "IN_PROGRESS" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "IN_PROGRESS");

    // clean up in reverse dependency order
    for uri in [
        format!("/api/bookings/{booking_id}"),
        format!("/api/services/{service_id}"),
        format!("/api/categories/{category_id}"),
        format!("/api/customers/{customer_id}"),
        format!("/api/contractors/{contractor_id}"),
    ] {
        let (status, body) = delete(&app, &uri).await;
        assert_eq!(status, StatusCode::OK, "cleanup {uri}: {body}");
    }

    let (status, body) = get(&app, &format!("/api/bookings/{booking_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn booking_created_without_status_starts_pending() {
    let Some((app, _pool)) = spawn_app().await else { return };
    let suffix = Uuid::new_v4();

    let customer_id = create_customer(
        &app,
        "Pending Customer",
        &format!("pending-{suffix}@example.com"),
    )
    .await;
    let contractor_id = create_contractor(
        &app,
        "Pending Contractor",
        &format!("pending-contractor-{suffix}@example.com"),
        None,
    )
    .await;
    let category_id = create_category(&app, &format!("Pending Category {suffix}")).await;
    let service_id =
        create_service(&app, &format!("Pending Service {suffix}"), 80.0, &category_id).await;

    let (status, body) = post(
        &app,
        "/api/bookings",
        json!({
            "serviceId": service_id,
            "customerId": customer_id,
            "contractorId": contractor_id,
            "date": (Utc::now() + Duration::days(3)).to_rfc3339(),
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create booking: {body}");
    assert_eq!(body["data"]["status"], "PENDING");
    let booking_id = id_of(&body);

    for uri in [
        format!("/api/bookings/{booking_id}"),
        format!("/api/services/{service_id}"),
        format!("/api/categories/{category_id}"),
        format!("/api/customers/{customer_id}"),
        format!("/api/contractors/{contractor_id}"),
    ] {
        let (status, _) = delete(&app, &uri).await;
        assert_eq!(status, StatusCode::OK);
    }
}

#[tokio::test]
async fn service_price_keeps_the_submitted_decimal_shape() {
    let Some((app, _pool)) = spawn_app().await else { return };
    let suffix = Uuid::new_v4();

    let category_id = create_category(&app, &format!("Price Category {suffix}")).await;

    let (status, body) = post(
        &app,
        "/api/services",
        json!({
            "name": format!("Price Service {suffix}"),
            "price": 150,
            "categoryId": category_id,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create service: {body}");
    assert_eq!(body["data"]["price"], "150");
    let service_id = id_of(&body);

    let (status, body) = put(
        &app,
        &format!("/api/services/{service_id}"),
        json!({ "price": 99.99 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["price"], "99.99");

    let (status, _) = delete(&app, &format!("/api/services/{service_id}")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = delete(&app, &format!("/api/categories/{category_id}")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn services_embed_their_category_and_filter_by_it() {
    let Some((app, _pool)) = spawn_app().await else { return };
    let suffix = Uuid::new_v4();

    let category_a = create_category(&app, &format!("Filter Category A {suffix}")).await;
    let category_b = create_category(&app, &format!("Filter Category B {suffix}")).await;
    let service_a = create_service(&app, &format!("Filter Service A {suffix}"), 50.0, &category_a).await;
    let service_b = create_service(&app, &format!("Filter Service B {suffix}"), 60.0, &category_b).await;

    let (status, body) = get(&app, &format!("/api/services?categoryId={category_a}")).await;
    assert_eq!(status, StatusCode::OK);
    let services = body["data"].as_array().unwrap();
    assert!(services.iter().any(|s| s["id"] == service_a.as_str()));
    assert!(services.iter().all(|s| s["id"] != service_b.as_str()));
    assert!(services
        .iter()
        .all(|s| s["categoryId"] == category_a.as_str()));

    let (status, body) = get(&app, &format!("/api/services/{service_a}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["category"]["id"], category_a.as_str());

    for uri in [
        format!("/api/services/{service_a}"),
        format!("/api/services/{service_b}"),
        format!("/api/categories/{category_a}"),
        format!("/api/categories/{category_b}"),
    ] {
        let (status, _) = delete(&app, &uri).await;
        assert_eq!(status, StatusCode::OK);
    }
}

#[tokio::test]
async fn category_detail_embeds_its_services() {
    let Some((app, _pool)) = spawn_app().await else { return };
    let suffix = Uuid::new_v4();

    let category_id = create_category(&app, &format!("Embed Category {suffix}")).await;
    let first = create_service(&app, &format!("Embed Service 1 {suffix}"), 10.0, &category_id).await;
    let second = create_service(&app, &format!("Embed Service 2 {suffix}"), 20.0, &category_id).await;

    let (status, body) = get(&app, &format!("/api/categories/{category_id}")).await;
    assert_eq!(status, StatusCode::OK);
    let services = body["data"]["services"].as_array().unwrap();
    assert_eq!(services.len(), 2);
    assert!(services.iter().any(|s| s["id"] == first.as_str()));
    assert!(services.iter().any(|s| s["id"] == second.as_str()));

    let (status, body) = get(&app, "/api/categories").await;
    assert_eq!(status, StatusCode::OK);
    let listed = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["id"] == category_id.as_str())
        .expect("category listed")
        .clone();
    assert_eq!(listed["services"].as_array().unwrap().len(), 2);

    for uri in [
        format!("/api/services/{first}"),
        format!("/api/services/{second}"),
        format!("/api/categories/{category_id}"),
    ] {
        let (status, _) = delete(&app, &uri).await;
        assert_eq!(status, StatusCode::OK);
    }
}

#[tokio::test]
async fn contractor_filter_matches_substring_and_skips_unspecialized() {
    let Some((app, _pool)) = spawn_app().await else { return };
    let suffix = Uuid::new_v4();
    let marker = format!("Painting {suffix}");

    let specialized = create_contractor(
        &app,
        "Specialized Contractor",
        &format!("specialized-{suffix}@example.com"),
        Some(&marker),
    )
    .await;
    let unspecialized = create_contractor(
        &app,
        "Unspecialized Contractor",
        &format!("unspecialized-{suffix}@example.com"),
        None,
    )
    .await;

    let (status, body) = get(&app, &format!("/api/contractors?specialization={suffix}")).await;
    assert_eq!(status, StatusCode::OK);
    let contractors = body["data"].as_array().unwrap();
    assert!(contractors.iter().any(|c| c["id"] == specialized.as_str()));
    assert!(contractors
        .iter()
        .all(|c| c["id"] != unspecialized.as_str()));
    assert!(contractors.iter().all(|c| c["specialization"]
        .as_str()
        .map(|s| s.contains(&suffix.to_string()))
        .unwrap_or(false)));

    // the match is case-sensitive
    let (_, body) = get(&app, "/api/contractors?specialization=painting").await;
    let contractors = body["data"].as_array().unwrap();
    assert!(contractors.iter().all(|c| c["id"] != specialized.as_str()));

    for uri in [
        format!("/api/contractors/{specialized}"),
        format!("/api/contractors/{unspecialized}"),
    ] {
        let (status, _) = delete(&app, &uri).await;
        assert_eq!(status, StatusCode::OK);
    }
}

#[tokio::test]
async fn contractor_detail_embeds_its_bookings() {
    let Some((app, _pool)) = spawn_app().await else { return };
    let suffix = Uuid::new_v4();

    let customer_id = create_customer(
        &app,
        "History Customer",
        &format!("history-{suffix}@example.com"),
    )
    .await;
    let contractor_id = create_contractor(
        &app,
        "History Contractor",
        &format!("history-contractor-{suffix}@example.com"),
        Some("General"),
    )
    .await;
    let category_id = create_category(&app, &format!("History Category {suffix}")).await;
    let service_id =
        create_service(&app, &format!("History Service {suffix}"), 75.0, &category_id).await;

    let (status, body) = post(
        &app,
        "/api/bookings",
        json!({
            "serviceId": service_id,
            "customerId": customer_id,
            "contractorId": contractor_id,
            "date": (Utc::now() + Duration::days(10)).to_rfc3339(),
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create booking: {body}");
    let booking_id = id_of(&body);

    let (status, body) = get(&app, &format!("/api/contractors/{contractor_id}")).await;
    assert_eq!(status, StatusCode::OK);
    let bookings = body["data"]["bookings"].as_array().unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0]["id"], booking_id.as_str());
    assert!(bookings[0]["service"].is_object());
    assert!(bookings[0]["customer"].is_object());
    // the embedding side is left out of its own history
    assert!(bookings[0].get("contractor").is_none());

    let (status, body) = get(&app, &format!("/api/customers/{customer_id}")).await;
    assert_eq!(status, StatusCode::OK);
    let bookings = body["data"]["bookings"].as_array().unwrap();
    assert_eq!(bookings.len(), 1);
    assert!(bookings[0]["contractor"].is_object());
    assert!(bookings[0].get("customer").is_none());

    for uri in [
        format!("/api/bookings/{booking_id}"),
        format!("/api/services/{service_id}"),
        format!("/api/categories/{category_id}"),
        format!("/api/customers/{customer_id}"),
        format!("/api/contractors/{contractor_id}"),
    ] {
        let (status, _) = delete(&app, &uri).await;
        assert_eq!(status, StatusCode::OK);
    }
}

#[tokio::test]
async fn deleting_a_category_with_services_is_rejected() {
    let Some((app, _pool)) = spawn_app().await else { return };
    let suffix = Uuid::new_v4();

    let category_id = create_category(&app, &format!("Occupied Category {suffix}")).await;
    let service_id =
        create_service(&app, &format!("Occupant Service {suffix}"), 45.0, &category_id).await;

    let (status, body) = delete(&app, &format!("/api/categories/{category_id}")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], "fail");
    assert_eq!(
        body["message"],
        "Cannot complete the operation: other records depend on this one"
    );

    let (status, _) = delete(&app, &format!("/api/services/{service_id}")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = delete(&app, &format!("/api/categories/{category_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], category_id.as_str());

    let (status, body) = get(&app, "/api/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]
        .as_array()
        .unwrap()
        .iter()
        .all(|c| c["id"] != category_id.as_str()));

    let (status, body) = get(&app, &format!("/api/categories/{category_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn missing_records_return_null_for_reads_and_404_for_writes() {
    let Some((app, _pool)) = spawn_app().await else { return };
    let ghost = Uuid::new_v4();

    let (status, body) = get(&app, &format!("/api/services/{ghost}")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].is_null());

    let (status, body) = get(&app, &format!("/api/contractors/{ghost}")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].is_null());

    let (status, body) = put(
        &app,
        &format!("/api/customers/{ghost}"),
        json!({ "name": "Ghost" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "Record not found");

    let (status, _) = delete(&app, &format!("/api/bookings/{ghost}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn validation_errors_list_every_failing_field() {
    let Some((app, _pool)) = spawn_app().await else { return };

    let (status, body) = post(
        &app,
        "/api/contractors",
        json!({ "name": "", "phone": "", "email": "not-an-email" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "Validation failed");
    assert_eq!(body["errors"]["name"][0], "Name is required");
    assert_eq!(body["errors"]["phone"][0], "Phone is required");
    assert_eq!(body["errors"]["email"][0], "Invalid email address");

    // a bad price is caught before the category reference is ever checked
    let (status, body) = post(
        &app,
        "/api/services",
        json!({
            "name": "Negative Service",
            "price": -5,
            "categoryId": Uuid::new_v4(),
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["price"][0], "Price must be a positive number");

    // an out-of-range rating fails validation before the row is even looked up
    let (status, body) = put(
        &app,
        &format!("/api/contractors/{}", Uuid::new_v4()),
        json!({ "rating": 7.5 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"]["rating"][0],
        "Rating must be between 0 and 5"
    );
}

#[tokio::test]
async fn public_booking_reuses_the_customer_for_a_returning_email() {
    let Some((app, _pool)) = spawn_app().await else { return };
    let suffix = Uuid::new_v4();
    let email = format!("walkin-{suffix}@example.com");

    let contractor_id = create_contractor(
        &app,
        "Public Contractor",
        &format!("public-contractor-{suffix}@example.com"),
        Some("General"),
    )
    .await;
    let category_id = create_category(&app, &format!("Public Category {suffix}")).await;
    let service_id =
        create_service(&app, &format!("Public Service {suffix}"), 120.0, &category_id).await;

    // a past date never reaches the database
    let (status, body) = post(
        &app,
        "/api/bookings/public",
        json!({
            "name": "Walk-in One",
            "email": email,
            "phone": "0100000001",
            "serviceId": service_id,
            "contractorId": contractor_id,
            "date": (Utc::now() - Duration::days(1)).to_rfc3339(),
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Date must be in the future");

    let (status, body) = post(
        &app,
        "/api/bookings/public",
        json!({
            "name": "Walk-in One",
            "email": email,
            "phone": "0100000001",
            "serviceId": service_id,
            "contractorId": contractor_id,
            "date": (Utc::now() + Duration::days(14)).to_rfc3339(),
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "first public booking: {body}");
    assert_eq!(body["data"]["status"], "PENDING");
    let first_booking = id_of(&body);
    let customer_id = body["data"]["customerId"].as_str().unwrap().to_string();

    // the same email books again under a different name
    let (status, body) = post(
        &app,
        "/api/bookings/public",
        json!({
            "name": "Walk-in Again",
            "email": email,
            "phone": "0100000002",
            "serviceId": service_id,
            "contractorId": contractor_id,
            "date": (Utc::now() + Duration::days(21)).to_rfc3339(),
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "second public booking: {body}");
    assert_eq!(body["data"]["customerId"], customer_id.as_str());
    let second_booking = id_of(&body);

    let (_, body) = get(&app, "/api/customers").await;
    let with_email: Vec<&Value> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|c| c["email"] == email.as_str())
        .collect();
    assert_eq!(with_email.len(), 1);

    for uri in [
        format!("/api/bookings/{first_booking}"),
        format!("/api/bookings/{second_booking}"),
        format!("/api/services/{service_id}"),
        format!("/api/categories/{category_id}"),
        format!("/api/customers/{customer_id}"),
        format!("/api/contractors/{contractor_id}"),
    ] {
        let (status, _) = delete(&app, &uri).await;
        assert_eq!(status, StatusCode::OK);
    }
}

#[tokio::test]
async fn user_mutations_demand_an_admin_identity() {
    let Some((app, pool)) = spawn_app().await else { return };
    let suffix = Uuid::new_v4();
    let admin_email = format!("admin-{suffix}@finishing.com");

    let (status, body) = post(
        &app,
        "/api/users",
        json!({ "name": "Nobody", "email": format!("nobody-{suffix}@example.com") }),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Authentication required. Please sign in");

    // the first admin comes from the seed, not the API
    let admin_id: Uuid = sqlx::query_scalar(
        "INSERT INTO users (name, email, is_admin) VALUES ($1, $2, TRUE) RETURNING id",
    )
    .bind("Test Admin")
    .bind(&admin_email)
    .fetch_one(&pool)
    .await
    .unwrap();

    let (status, body) = request(&app, Method::GET, "/api/users/me", Some(admin_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["user"]["email"], admin_email.as_str());
    assert_eq!(body["data"]["user"]["isAdmin"], true);

    // the session cookie works as well as the header
    let cookie_request = Request::builder()
        .method(Method::GET)
        .uri("/api/users/me")
        .header(header::COOKIE, format!("user_id={admin_id}"))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(cookie_request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // an id that no longer resolves is rejected
    let (status, body) =
        request(&app, Method::GET, "/api/users/me", Some(Uuid::new_v4()), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body["message"],
        "User belonging to this session no longer exists"
    );

    let (status, body) = request(
        &app,
        Method::POST,
        "/api/users",
        Some(admin_id),
        Some(json!({ "name": "Regular Member", "email": format!("member-{suffix}@example.com") })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "admin creates user: {body}");
    assert_eq!(body["data"]["isAdmin"], false);
    let member_id: Uuid = body["data"]["id"].as_str().unwrap().parse().unwrap();

    // a plain member cannot mutate users
    let (status, body) = request(
        &app,
        Method::POST,
        "/api/users",
        Some(member_id),
        Some(json!({ "name": "Intruder", "email": format!("intruder-{suffix}@example.com") })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "You are not allowed to perform this action");

    let (status, body) = request(
        &app,
        Method::PUT,
        &format!("/api/users/{member_id}"),
        Some(admin_id),
        Some(json!({ "name": "Renamed Member" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Renamed Member");

    // reads stay public
    let (status, body) = get(&app, "/api/users").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]
        .as_array()
        .unwrap()
        .iter()
        .any(|u| u["email"] == admin_email.as_str()));

    let (status, _) = request(
        &app,
        Method::DELETE,
        &format!("/api/users/{member_id}"),
        Some(admin_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = request(
        &app,
        Method::DELETE,
        &format!("/api/users/{admin_id}"),
        Some(admin_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}
