use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::dtos::contractordtos::ContractorDto;
use crate::dtos::customerdtos::CustomerDto;
use crate::dtos::servicedtos::ServiceDto;
use crate::models::bookingmodel::{Booking, BookingStatus, BookingWithRelations};

#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingDto {
    pub service_id: Uuid,
    pub customer_id: Uuid,
    pub contractor_id: Uuid,
    pub date: DateTime<Utc>,
    pub status: Option<BookingStatus>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingDto {
    pub service_id: Option<Uuid>,
    pub customer_id: Option<Uuid>,
    pub contractor_id: Option<Uuid>,
    pub date: Option<DateTime<Utc>>,
    pub status: Option<BookingStatus>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BookingFilterDto {
    pub customer_id: Option<Uuid>,
    pub contractor_id: Option<Uuid>,
    pub status: Option<BookingStatus>,
}

/// Booking placed from the public service page: contact details plus the
/// chosen service/contractor. The booking always starts out PENDING.
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PublicBookingDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone: String,

    pub service_id: Uuid,
    pub contractor_id: Uuid,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: Uuid,
    pub service_id: Uuid,
    pub customer_id: Uuid,
    pub contractor_id: Uuid,
    pub date: DateTime<Utc>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<ServiceDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contractor: Option<ContractorDto>,
}

impl From<Booking> for BookingDto {
    fn from(booking: Booking) -> Self {
        BookingDto {
            id: booking.id,
            service_id: booking.service_id,
            customer_id: booking.customer_id,
            contractor_id: booking.contractor_id,
            date: booking.date,
            status: booking.status,
            created_at: booking.created_at,
            updated_at: booking.updated_at,
            service: None,
            customer: None,
            contractor: None,
        }
    }
}

impl BookingDto {
    /// List/detail shape: service, customer and contractor all embedded.
    pub fn with_relations(rel: BookingWithRelations) -> Self {
        BookingDto {
            service: Some(ServiceDto::from(rel.service)),
            customer: Some(CustomerDto::from(rel.customer)),
            contractor: Some(ContractorDto::from(rel.contractor)),
            ..BookingDto::from(rel.booking)
        }
    }

    /// Shape embedded in a contractor detail view.
    pub fn for_contractor_view(rel: BookingWithRelations) -> Self {
        BookingDto {
            contractor: None,
            ..BookingDto::with_relations(rel)
        }
    }

    /// Shape embedded in a customer detail view.
    pub fn for_customer_view(rel: BookingWithRelations) -> Self {
        BookingDto {
            customer: None,
            ..BookingDto::with_relations(rel)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_screaming_snake_wire_form() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::InProgress).unwrap(),
            "\"IN_PROGRESS\""
        );
        assert_eq!(
            serde_json::from_str::<BookingStatus>("\"CANCELLED\"").unwrap(),
            BookingStatus::Cancelled
        );
    }

    #[test]
    fn filter_accepts_partial_query_strings() {
        let filter: BookingFilterDto = serde_json::from_str("{\"status\":\"PENDING\"}").unwrap();
        assert_eq!(filter.status, Some(BookingStatus::Pending));
        assert!(filter.customer_id.is_none());
        assert!(filter.contractor_id.is_none());
    }

    #[test]
    fn public_booking_requires_contact_details() {
        let dto = PublicBookingDto {
            name: "".to_string(),
            email: "omar.bahgat".to_string(),
            phone: "".to_string(),
            service_id: Uuid::new_v4(),
            contractor_id: Uuid::new_v4(),
            date: Utc::now(),
        };
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("phone"));
    }
}
