use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::dtos::bookingdtos::BookingDto;
use crate::models::contractormodel::Contractor;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateContractorDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    pub specialization: Option<String>,

    #[validate(range(min = 0.0, max = 5.0, message = "Rating must be between 0 and 5"))]
    pub rating: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Default)]
pub struct UpdateContractorDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: Option<String>,

    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    pub specialization: Option<String>,

    #[validate(range(min = 0.0, max = 5.0, message = "Rating must be between 0 and 5"))]
    pub rating: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ContractorFilterDto {
    pub specialization: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ContractorDto {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub specialization: Option<String>,
    pub rating: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    // only the detail view carries the booking history
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookings: Option<Vec<BookingDto>>,
}

impl From<Contractor> for ContractorDto {
    fn from(contractor: Contractor) -> Self {
        ContractorDto {
            id: contractor.id,
            name: contractor.name,
            phone: contractor.phone,
            email: contractor.email,
            specialization: contractor.specialization,
            rating: contractor.rating,
            created_at: contractor.created_at,
            updated_at: contractor.updated_at,
            bookings: None,
        }
    }
}

impl ContractorDto {
    pub fn with_bookings(contractor: Contractor, bookings: Vec<BookingDto>) -> Self {
        ContractorDto {
            bookings: Some(bookings),
            ..ContractorDto::from(contractor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_outside_bounds_is_rejected() {
        let dto = UpdateContractorDto {
            rating: Some(5.5),
            ..UpdateContractorDto::default()
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("rating"));

        let dto = UpdateContractorDto {
            rating: Some(-0.1),
            ..UpdateContractorDto::default()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn rating_at_bounds_is_accepted() {
        for rating in [0.0, 4.6, 5.0] {
            let dto = CreateContractorDto {
                name: "Omar Bahgat".to_string(),
                phone: "01012345678".to_string(),
                email: "omar@gmail.com".to_string(),
                specialization: Some("Painting".to_string()),
                rating: Some(rating),
            };
            assert!(dto.validate().is_ok(), "rating {} should pass", rating);
        }
    }

    #[test]
    fn create_contractor_requires_valid_email() {
        let dto = CreateContractorDto {
            name: "Nader Fouad".to_string(),
            phone: "01233445566".to_string(),
            email: "nader.electric".to_string(),
            specialization: None,
            rating: None,
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }
}
