use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::dtos::bookingdtos::BookingDto;
use crate::models::customermodel::Customer;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateCustomerDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, Default)]
pub struct UpdateCustomerDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookings: Option<Vec<BookingDto>>,
}

impl From<Customer> for CustomerDto {
    fn from(customer: Customer) -> Self {
        CustomerDto {
            id: customer.id,
            name: customer.name,
            email: customer.email,
            phone: customer.phone,
            created_at: customer.created_at,
            updated_at: customer.updated_at,
            bookings: None,
        }
    }
}

impl CustomerDto {
    pub fn with_bookings(customer: Customer, bookings: Vec<BookingDto>) -> Self {
        CustomerDto {
            bookings: Some(bookings),
            ..CustomerDto::from(customer)
        }
    }
}
