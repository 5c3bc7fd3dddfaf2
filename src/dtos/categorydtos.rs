use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::dtos::servicedtos::ServiceDto;
use crate::models::catalogmodel::ServiceCategory;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateCategoryDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Default)]
pub struct UpdateCategoryDto {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,

    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    // present on list/detail reads, absent on mutation responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<ServiceDto>>,
}

impl From<ServiceCategory> for CategoryDto {
    fn from(category: ServiceCategory) -> Self {
        CategoryDto {
            id: category.id,
            name: category.name,
            description: category.description,
            created_at: category.created_at,
            updated_at: category.updated_at,
            services: None,
        }
    }
}

impl CategoryDto {
    pub fn with_services(category: ServiceCategory, services: Vec<ServiceDto>) -> Self {
        CategoryDto {
            services: Some(services),
            ..CategoryDto::from(category)
        }
    }
}
