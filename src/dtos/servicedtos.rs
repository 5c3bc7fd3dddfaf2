use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::BigDecimal;
use uuid::Uuid;
use validator::Validate;

use crate::dtos::categorydtos::CategoryDto;
use crate::models::catalogmodel::{Service, ServiceCategory};
use crate::utils::price::validate_price;

#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    pub description: Option<String>,

    #[validate(custom = "validate_price")]
    pub price: f64,

    #[validate(url(message = "Invalid image URL"))]
    pub image_url: Option<String>,

    pub category_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(custom = "validate_price")]
    pub price: Option<f64>,

    #[validate(url(message = "Invalid image URL"))]
    pub image_url: Option<String>,

    pub category_id: Option<Uuid>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServiceFilterDto {
    pub category_id: Option<Uuid>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub image_url: Option<String>,
    pub category_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryDto>,
}

impl From<Service> for ServiceDto {
    fn from(service: Service) -> Self {
        ServiceDto {
            id: service.id,
            name: service.name,
            description: service.description,
            price: service.price,
            image_url: service.image_url,
            category_id: service.category_id,
            created_at: service.created_at,
            updated_at: service.updated_at,
            category: None,
        }
    }
}

impl ServiceDto {
    pub fn with_category(service: Service, category: ServiceCategory) -> Self {
        ServiceDto {
            category: Some(CategoryDto::from(category)),
            ..ServiceDto::from(service)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_service_rejects_non_positive_price() {
        let dto = CreateServiceDto {
            name: "Interior Wall Painting".to_string(),
            description: None,
            price: -10.0,
            image_url: None,
            category_id: Uuid::new_v4(),
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));
    }

    #[test]
    fn create_service_rejects_malformed_image_url() {
        let dto = CreateServiceDto {
            name: "Ceramic Tiling".to_string(),
            description: None,
            price: 4000.0,
            image_url: Some("not-a-url".to_string()),
            category_id: Uuid::new_v4(),
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("image_url"));
    }

    #[test]
    fn update_service_allows_empty_body() {
        let dto = UpdateServiceDto::default();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn service_price_serializes_as_decimal_string() {
        use std::str::FromStr;

        let dto = ServiceDto {
            id: Uuid::new_v4(),
            name: "Interior Wall Painting".to_string(),
            description: None,
            price: BigDecimal::from_str("2500").unwrap(),
            image_url: None,
            category_id: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            category: None,
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["price"], "2500");
    }
}
