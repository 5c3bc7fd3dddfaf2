use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::Row;
use uuid::Uuid;

use crate::models::catalogmodel::Service;
use crate::models::contractormodel::Contractor;
use crate::models::customermodel::Customer;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "booking_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct Booking {
    pub id: Uuid,
    pub service_id: Uuid,
    pub customer_id: Uuid,
    pub contractor_id: Uuid,
    pub date: DateTime<Utc>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One booking row joined with the service, customer and contractor it
/// references. Joined columns arrive with s_/cu_/co_ prefixes so the four
/// tables' columns stay apart in a single result row.
#[derive(Debug, Clone)]
pub struct BookingWithRelations {
    pub booking: Booking,
    pub service: Service,
    pub customer: Customer,
    pub contractor: Contractor,
}

impl<'r> sqlx::FromRow<'r, PgRow> for BookingWithRelations {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(BookingWithRelations {
            booking: Booking {
                id: row.try_get("id")?,
                service_id: row.try_get("service_id")?,
                customer_id: row.try_get("customer_id")?,
                contractor_id: row.try_get("contractor_id")?,
                date: row.try_get("date")?,
                status: row.try_get("status")?,
                created_at: row.try_get("created_at")?,
                updated_at: row.try_get("updated_at")?,
            },
            service: Service {
                id: row.try_get("s_id")?,
                name: row.try_get("s_name")?,
                description: row.try_get("s_description")?,
                price: row.try_get("s_price")?,
                image_url: row.try_get("s_image_url")?,
                category_id: row.try_get("s_category_id")?,
                created_at: row.try_get("s_created_at")?,
                updated_at: row.try_get("s_updated_at")?,
            },
            customer: Customer {
                id: row.try_get("cu_id")?,
                name: row.try_get("cu_name")?,
                email: row.try_get("cu_email")?,
                phone: row.try_get("cu_phone")?,
                created_at: row.try_get("cu_created_at")?,
                updated_at: row.try_get("cu_updated_at")?,
            },
            contractor: Contractor {
                id: row.try_get("co_id")?,
                name: row.try_get("co_name")?,
                phone: row.try_get("co_phone")?,
                email: row.try_get("co_email")?,
                specialization: row.try_get("co_specialization")?,
                rating: row.try_get("co_rating")?,
                created_at: row.try_get("co_created_at")?,
                updated_at: row.try_get("co_updated_at")?,
            },
        })
    }
}
