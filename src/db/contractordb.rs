// db/contractordb.rs
use async_trait::async_trait;
use uuid::Uuid;

use super::db::DBClient;

use crate::models::contractormodel::Contractor;

#[async_trait]
pub trait ContractorExt {
    async fn get_contractors(
        &self,
        specialization: Option<&str>,
    ) -> Result<Vec<Contractor>, sqlx::Error>;

    async fn get_contractor(
        &self,
        contractor_id: Uuid,
    ) -> Result<Option<Contractor>, sqlx::Error>;

    async fn save_contractor<T: Into<String> + Send>(
        &self,
        name: T,
        phone: T,
        email: T,
        specialization: Option<String>,
        rating: Option<f64>,
    ) -> Result<Contractor, sqlx::Error>;

    async fn update_contractor(
        &self,
        contractor_id: Uuid,
        name: Option<String>,
        phone: Option<String>,
        email: Option<String>,
        specialization: Option<String>,
        rating: Option<f64>,
    ) -> Result<Option<Contractor>, sqlx::Error>;

    async fn delete_contractor(
        &self,
        contractor_id: Uuid,
    ) -> Result<Option<Contractor>, sqlx::Error>;
}

#[async_trait]
impl ContractorExt for DBClient {
    // The specialization filter is a case-sensitive substring match and
    // never matches rows whose specialization is NULL.
    async fn get_contractors(
        &self,
        specialization: Option<&str>,
    ) -> Result<Vec<Contractor>, sqlx::Error> {
        sqlx::query_as::<_, Contractor>(
            r#"
            SELECT id, name, phone, email, specialization, rating, created_at, updated_at
            FROM contractors
            WHERE ($1::text IS NULL
                   OR (specialization IS NOT NULL AND strpos(specialization, $1) > 0))
            ORDER BY created_at
            "#,
        )
        .bind(specialization)
        .fetch_all(&self.pool)
        .await
    }

    async fn get_contractor(
        &self,
        contractor_id: Uuid,
    ) -> Result<Option<Contractor>, sqlx::Error> {
        sqlx::query_as::<_, Contractor>(
            r#"
            SELECT id, name, phone, email, specialization, rating, created_at, updated_at
            FROM contractors
            WHERE id = $1
            "#,
        )
        .bind(contractor_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn save_contractor<T: Into<String> + Send>(
        &self,
        name: T,
        phone: T,
        email: T,
        specialization: Option<String>,
        rating: Option<f64>,
    ) -> Result<Contractor, sqlx::Error> {
        sqlx::query_as::<_, Contractor>(
            r#"
            INSERT INTO contractors (name, phone, email, specialization, rating)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, phone, email, specialization, rating, created_at, updated_at
            "#,
        )
        .bind(name.into())
        .bind(phone.into())
        .bind(email.into())
        .bind(specialization)
        .bind(rating)
        .fetch_one(&self.pool)
        .await
    }

    async fn update_contractor(
        &self,
        contractor_id: Uuid,
        name: Option<String>,
        phone: Option<String>,
        email: Option<String>,
        specialization: Option<String>,
        rating: Option<f64>,
    ) -> Result<Option<Contractor>, sqlx::Error> {
        sqlx::query_as::<_, Contractor>(
            r#"
            UPDATE contractors
            SET name = COALESCE($2, name),
                phone = COALESCE($3, phone),
                email = COALESCE($4, email),
                specialization = COALESCE($5, specialization),
                rating = COALESCE($6, rating),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, phone, email, specialization, rating, created_at, updated_at
            "#,
        )
        .bind(contractor_id)
        .bind(name)
        .bind(phone)
        .bind(email)
        .bind(specialization)
        .bind(rating)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete_contractor(
        &self,
        contractor_id: Uuid,
    ) -> Result<Option<Contractor>, sqlx::Error> {
        sqlx::query_as::<_, Contractor>(
            r#"
            DELETE FROM contractors
            WHERE id = $1
            RETURNING id, name, phone, email, specialization, rating, created_at, updated_at
            "#,
        )
        .bind(contractor_id)
        .fetch_optional(&self.pool)
        .await
    }
}
