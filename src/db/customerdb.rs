// db/customerdb.rs
use async_trait::async_trait;
use uuid::Uuid;

use super::db::DBClient;

use crate::models::customermodel::Customer;

#[async_trait]
pub trait CustomerExt {
    async fn get_customers(&self) -> Result<Vec<Customer>, sqlx::Error>;

    async fn get_customer(&self, customer_id: Uuid) -> Result<Option<Customer>, sqlx::Error>;

    async fn get_customer_by_email(&self, email: &str) -> Result<Option<Customer>, sqlx::Error>;

    async fn save_customer<T: Into<String> + Send>(
        &self,
        name: T,
        email: T,
        phone: T,
    ) -> Result<Customer, sqlx::Error>;

    async fn update_customer(
        &self,
        customer_id: Uuid,
        name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
    ) -> Result<Option<Customer>, sqlx::Error>;

    async fn delete_customer(&self, customer_id: Uuid) -> Result<Option<Customer>, sqlx::Error>;
}

#[async_trait]
impl CustomerExt for DBClient {
    async fn get_customers(&self) -> Result<Vec<Customer>, sqlx::Error> {
        sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, email, phone, created_at, updated_at
            FROM customers
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn get_customer(&self, customer_id: Uuid) -> Result<Option<Customer>, sqlx::Error> {
        sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, email, phone, created_at, updated_at
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(customer_id)
        .fetch_optional(&self.pool)
        .await
    }

    // Emails are not unique across customers; the public booking flow
    // reuses the earliest row for a returning email.
    async fn get_customer_by_email(&self, email: &str) -> Result<Option<Customer>, sqlx::Error> {
        sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, email, phone, created_at, updated_at
            FROM customers
            WHERE email = $1
            ORDER BY created_at
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
    }

    async fn save_customer<T: Into<String> + Send>(
        &self,
        name: T,
        email: T,
        phone: T,
    ) -> Result<Customer, sqlx::Error> {
        sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (name, email, phone)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, phone, created_at, updated_at
            "#,
        )
        .bind(name.into())
        .bind(email.into())
        .bind(phone.into())
        .fetch_one(&self.pool)
        .await
    }

    async fn update_customer(
        &self,
        customer_id: Uuid,
        name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
    ) -> Result<Option<Customer>, sqlx::Error> {
        sqlx::query_as::<_, Customer>(
            r#"
            UPDATE customers
            SET name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, email, phone, created_at, updated_at
            "#,
        )
        .bind(customer_id)
        .bind(name)
        .bind(email)
        .bind(phone)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete_customer(&self, customer_id: Uuid) -> Result<Option<Customer>, sqlx::Error> {
        sqlx::query_as::<_, Customer>(
            r#"
            DELETE FROM customers
            WHERE id = $1
            RETURNING id, name, email, phone, created_at, updated_at
            "#,
        )
        .bind(customer_id)
        .fetch_optional(&self.pool)
        .await
    }
}
