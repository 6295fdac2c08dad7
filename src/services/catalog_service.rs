use sqlx::SqlitePool;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::{GymError, Result};
use crate::models::validation::{validate_required, validate_text, TITLE_MAX_LENGTH};
use crate::models::{CreateService, Service, UpdateService};

/// Persistence for the gym's catalog of `Service` offerings.
pub struct CatalogService {
    db: SqlitePool,
}

impl CatalogService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    #[instrument(skip(self, service_data), fields(name = %service_data.name))]
    pub async fn create_service(&self, service_data: CreateService) -> Result<Service> {
        validate_text(&service_data.name, "Name", TITLE_MAX_LENGTH)?;
        validate_required(&service_data.description, "Description")?;

        let service = sqlx::query_as::<_, Service>(
            r#"
            INSERT INTO services (id, name, description, price)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, name, description, price
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&service_data.name)
        .bind(&service_data.description)
        .bind(service_data.price)
        .fetch_one(&self.db)
        .await
        .map_err(|e| GymError::from_write(e, "service"))?;

        info!(service_id = %service.id, "Created service");
        Ok(service)
    }

    pub async fn get_service_by_id(&self, service_id: Uuid) -> Result<Option<Service>> {
        let service = sqlx::query_as::<_, Service>(
            "SELECT id, name, description, price FROM services WHERE id = ?1",
        )
        .bind(service_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(service)
    }

    pub async fn get_service_by_name(&self, name: &str) -> Result<Option<Service>> {
        let service = sqlx::query_as::<_, Service>(
            "SELECT id, name, description, price FROM services WHERE name = ?1",
        )
        .bind(name)
        .fetch_optional(&self.db)
        .await?;

        Ok(service)
    }

    pub async fn list_services(&self, limit: Option<i64>, offset: Option<i64>) -> Result<Vec<Service>> {
        let limit = limit.unwrap_or(50);
        let offset = offset.unwrap_or(0);

        let services = sqlx::query_as::<_, Service>(
            "SELECT id, name, description, price FROM services ORDER BY name ASC LIMIT ?1 OFFSET ?2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await?;

        Ok(services)
    }

    #[instrument(skip(self, service_data))]
    pub async fn update_service(&self, service_id: Uuid, service_data: UpdateService) -> Result<Option<Service>> {
        if let Some(name) = &service_data.name {
            validate_text(name, "Name", TITLE_MAX_LENGTH)?;
        }
        if let Some(description) = &service_data.description {
            validate_required(description, "Description")?;
        }

        let service = sqlx::query_as::<_, Service>(
            r#"
            UPDATE services
            SET name = COALESCE(?2, name),
                description = COALESCE(?3, description),
                price = COALESCE(?4, price)
            WHERE id = ?1
            RETURNING id, name, description, price
            "#,
        )
        .bind(service_id)
        .bind(service_data.name)
        .bind(service_data.description)
        .bind(service_data.price)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| GymError::from_write(e, "service"))?;

        Ok(service)
    }

    #[instrument(skip(self))]
    pub async fn delete_service(&self, service_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM services WHERE id = ?1")
            .bind(service_id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count_services(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM services")
            .fetch_one(&self.db)
            .await?;

        Ok(count)
    }
}
