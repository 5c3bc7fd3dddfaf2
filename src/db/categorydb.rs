// db/categorydb.rs
use async_trait::async_trait;
use uuid::Uuid;

use super::db::DBClient;

use crate::models::catalogmodel::ServiceCategory;

#[async_trait]
pub trait CategoryExt {
    async fn get_categories(&self) -> Result<Vec<ServiceCategory>, sqlx::Error>;

    async fn get_category(
        &self,
        category_id: Uuid,
    ) -> Result<Option<ServiceCategory>, sqlx::Error>;

    async fn save_category<T: Into<String> + Send>(
        &self,
        name: T,
        description: Option<String>,
    ) -> Result<ServiceCategory, sqlx::Error>;

    async fn update_category(
        &self,
        category_id: Uuid,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<Option<ServiceCategory>, sqlx::Error>;

    async fn delete_category(
        &self,
        category_id: Uuid,
    ) -> Result<Option<ServiceCategory>, sqlx::Error>;
}

#[async_trait]
impl CategoryExt for DBClient {
    async fn get_categories(&self) -> Result<Vec<ServiceCategory>, sqlx::Error> {
        sqlx::query_as::<_, ServiceCategory>(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM service_categories
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn get_category(
        &self,
        category_id: Uuid,
    ) -> Result<Option<ServiceCategory>, sqlx::Error> {
        sqlx::query_as::<_, ServiceCategory>(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM service_categories
            WHERE id = $1
            "#,
        )
        .bind(category_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn save_category<T: Into<String> + Send>(
        &self,
        name: T,
        description: Option<String>,
    ) -> Result<ServiceCategory, sqlx::Error> {
        sqlx::query_as::<_, ServiceCategory>(
            r#"
            INSERT INTO service_categories (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(name.into())
        .bind(description)
        .fetch_one(&self.pool)
        .await
    }

    // Absent fields keep their stored values
    async fn update_category(
        &self,
        category_id: Uuid,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<Option<ServiceCategory>, sqlx::Error> {
        sqlx::query_as::<_, ServiceCategory>(
            r#"
            UPDATE service_categories
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(category_id)
        .bind(name)
        .bind(description)
        .fetch_optional(&self.pool)
        .await
    }

    // Returns the deleted row; a category with services still attached
    // fails on the foreign key instead.
    async fn delete_category(
        &self,
        category_id: Uuid,
    ) -> Result<Option<ServiceCategory>, sqlx::Error> {
        sqlx::query_as::<_, ServiceCategory>(
            r#"
            DELETE FROM service_categories
            WHERE id = $1
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(category_id)
        .fetch_optional(&self.pool)
        .await
    }
}
