// db/bookingdb.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::db::DBClient;

use crate::models::bookingmodel::{Booking, BookingStatus, BookingWithRelations};

/// Booking rows joined with their service, customer, and contractor.
/// Related columns carry s_/cu_/co_ prefixes so
/// `BookingWithRelations::from_row` can split one result row back into
/// the four entities.
const BOOKING_WITH_RELATIONS_SELECT: &str = r#"
    SELECT
        b.id, b.service_id, b.customer_id, b.contractor_id, b.date, b.status,
        b.created_at, b.updated_at,
        s.id AS s_id, s.name AS s_name, s.description AS s_description,
        s.price AS s_price, s.image_url AS s_image_url,
        s.category_id AS s_category_id, s.created_at AS s_created_at,
        s.updated_at AS s_updated_at,
        cu.id AS cu_id, cu.name AS cu_name, cu.email AS cu_email,
        cu.phone AS cu_phone, cu.created_at AS cu_created_at,
        cu.updated_at AS cu_updated_at,
        co.id AS co_id, co.name AS co_name, co.phone AS co_phone,
        co.email AS co_email, co.specialization AS co_specialization,
        co.rating AS co_rating, co.created_at AS co_created_at,
        co.updated_at AS co_updated_at
    FROM bookings b
    JOIN services s ON s.id = b.service_id
    JOIN customers cu ON cu.id = b.customer_id
    JOIN contractors co ON co.id = b.contractor_id
"#;

#[async_trait]
pub trait BookingExt {
    async fn get_bookings(
        &self,
        customer_id: Option<Uuid>,
        contractor_id: Option<Uuid>,
        status: Option<BookingStatus>,
    ) -> Result<Vec<BookingWithRelations>, sqlx::Error>;

    async fn get_booking(
        &self,
        booking_id: Uuid,
    ) -> Result<Option<BookingWithRelations>, sqlx::Error>;

    async fn save_booking(
        &self,
        service_id: Uuid,
        customer_id: Uuid,
        contractor_id: Uuid,
        date: DateTime<Utc>,
        status: Option<BookingStatus>,
    ) -> Result<Booking, sqlx::Error>;

    async fn update_booking(
        &self,
        booking_id: Uuid,
        service_id: Option<Uuid>,
        customer_id: Option<Uuid>,
        contractor_id: Option<Uuid>,
        date: Option<DateTime<Utc>>,
        status: Option<BookingStatus>,
    ) -> Result<Option<Booking>, sqlx::Error>;

    async fn delete_booking(&self, booking_id: Uuid) -> Result<Option<Booking>, sqlx::Error>;
}

#[async_trait]
impl BookingExt for DBClient {
    async fn get_bookings(
        &self,
        customer_id: Option<Uuid>,
        contractor_id: Option<Uuid>,
        status: Option<BookingStatus>,
    ) -> Result<Vec<BookingWithRelations>, sqlx::Error> {
        let query = format!(
            r#"
            {BOOKING_WITH_RELATIONS_SELECT}
            WHERE ($1::uuid IS NULL OR b.customer_id = $1)
              AND ($2::uuid IS NULL OR b.contractor_id = $2)
              AND ($3::booking_status IS NULL OR b.status = $3)
            ORDER BY b.date DESC
            "#
        );

        sqlx::query_as::<_, BookingWithRelations>(&query)
            .bind(customer_id)
            .bind(contractor_id)
            .bind(status)
            .fetch_all(&self.pool)
            .await
    }

    async fn get_booking(
        &self,
        booking_id: Uuid,
    ) -> Result<Option<BookingWithRelations>, sqlx::Error> {
        let query = format!(
            r#"
            {BOOKING_WITH_RELATIONS_SELECT}
            WHERE b.id = $1
            "#
        );

        sqlx::query_as::<_, BookingWithRelations>(&query)
            .bind(booking_id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn save_booking(
        &self,
        service_id: Uuid,
        customer_id: Uuid,
        contractor_id: Uuid,
        date: DateTime<Utc>,
        status: Option<BookingStatus>,
    ) -> Result<Booking, sqlx::Error> {
        sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (service_id, customer_id, contractor_id, date, status)
            VALUES ($1, $2, $3, $4, COALESCE($5, 'PENDING'::booking_status))
            RETURNING id, service_id, customer_id, contractor_id, date, status,
                      created_at, updated_at
            "#,
        )
        .bind(service_id)
        .bind(customer_id)
        .bind(contractor_id)
        .bind(date)
        .bind(status)
        .fetch_one(&self.pool)
        .await
    }

    // Status transitions are not validated here: any status may replace
    // any other, exactly like the dashboard expects.
    async fn update_booking(
        &self,
        booking_id: Uuid,
        service_id: Option<Uuid>,
        customer_id: Option<Uuid>,
        contractor_id: Option<Uuid>,
        date: Option<DateTime<Utc>>,
        status: Option<BookingStatus>,
    ) -> Result<Option<Booking>, sqlx::Error> {
        sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings
            SET service_id = COALESCE($2, service_id),
                customer_id = COALESCE($3, customer_id),
                contractor_id = COALESCE($4, contractor_id),
                date = COALESCE($5, date),
                status = COALESCE($6, status),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, service_id, customer_id, contractor_id, date, status,
                      created_at, updated_at
            "#,
        )
        .bind(booking_id)
        .bind(service_id)
        .bind(customer_id)
        .bind(contractor_id)
        .bind(date)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete_booking(&self, booking_id: Uuid) -> Result<Option<Booking>, sqlx::Error> {
        sqlx::query_as::<_, Booking>(
            r#"
            DELETE FROM bookings
            WHERE id = $1
            RETURNING id, service_id, customer_id, contractor_id, date, status,
                      created_at, updated_at
            "#,
        )
        .bind(booking_id)
        .fetch_optional(&self.pool)
        .await
    }
}
