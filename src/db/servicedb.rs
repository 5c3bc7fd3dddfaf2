// db/servicedb.rs
use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use super::db::DBClient;

use crate::models::catalogmodel::Service;

#[async_trait]
pub trait ServiceExt {
    async fn get_services(
        &self,
        category_id: Option<Uuid>,
    ) -> Result<Vec<Service>, sqlx::Error>;

    async fn get_service(&self, service_id: Uuid) -> Result<Option<Service>, sqlx::Error>;

    async fn save_service<T: Into<String> + Send>(
        &self,
        name: T,
        description: Option<String>,
        price: BigDecimal,
        image_url: Option<String>,
        category_id: Uuid,
    ) -> Result<Service, sqlx::Error>;

    async fn update_service(
        &self,
        service_id: Uuid,
        name: Option<String>,
        description: Option<String>,
        price: Option<BigDecimal>,
        image_url: Option<String>,
        category_id: Option<Uuid>,
    ) -> Result<Option<Service>, sqlx::Error>;

    async fn delete_service(&self, service_id: Uuid) -> Result<Option<Service>, sqlx::Error>;
}

#[async_trait]
impl ServiceExt for DBClient {
    async fn get_services(
        &self,
        category_id: Option<Uuid>,
    ) -> Result<Vec<Service>, sqlx::Error> {
        sqlx::query_as::<_, Service>(
            r#"
            SELECT id, name, description, price, image_url, category_id, created_at, updated_at
            FROM services
            WHERE ($1::uuid IS NULL OR category_id = $1)
            ORDER BY created_at
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn get_service(&self, service_id: Uuid) -> Result<Option<Service>, sqlx::Error> {
        sqlx::query_as::<_, Service>(
            r#"
            SELECT id, name, description, price, image_url, category_id, created_at, updated_at
            FROM services
            WHERE id = $1
            "#,
        )
        .bind(service_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn save_service<T: Into<String> + Send>(
        &self,
        name: T,
        description: Option<String>,
        price: BigDecimal,
        image_url: Option<String>,
        category_id: Uuid,
    ) -> Result<Service, sqlx::Error> {
        sqlx::query_as::<_, Service>(
            r#"
            INSERT INTO services (name, description, price, image_url, category_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, price, image_url, category_id, created_at, updated_at
            "#,
        )
        .bind(name.into())
        .bind(description)
        .bind(price)
        .bind(image_url)
        .bind(category_id)
        .fetch_one(&self.pool)
        .await
    }

    async fn update_service(
        &self,
        service_id: Uuid,
        name: Option<String>,
        description: Option<String>,
        price: Option<BigDecimal>,
        image_url: Option<String>,
        category_id: Option<Uuid>,
    ) -> Result<Option<Service>, sqlx::Error> {
        sqlx::query_as::<_, Service>(
            r#"
            UPDATE services
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                price = COALESCE($4, price),
                image_url = COALESCE($5, image_url),
                category_id = COALESCE($6, category_id),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, description, price, image_url, category_id, created_at, updated_at
            "#,
        )
        .bind(service_id)
        .bind(name)
        .bind(description)
        .bind(price)
        .bind(image_url)
        .bind(category_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete_service(&self, service_id: Uuid) -> Result<Option<Service>, sqlx::Error> {
        sqlx::query_as::<_, Service>(
            r#"
            DELETE FROM services
            WHERE id = $1
            RETURNING id, name, description, price, image_url, category_id, created_at, updated_at
            "#,
        )
        .bind(service_id)
        .fetch_optional(&self.pool)
        .await
    }
}
