use sqlx::SqlitePool;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::{GymError, Result};
use crate::models::validation::{validate_text, DAYS_OF_WEEK_MAX_LENGTH, TITLE_MAX_LENGTH};
use crate::models::{CreateGymClass, GymClass, GymClassDetail, UpdateGymClass};
use crate::services::TrainerService;

pub struct GymClassService {
    db: SqlitePool,
}

impl GymClassService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    #[instrument(skip(self, class_data), fields(name = %class_data.name, trainer_id = %class_data.trainer_id))]
    pub async fn create_class(&self, class_data: CreateGymClass) -> Result<GymClass> {
        validate_text(&class_data.name, "Name", TITLE_MAX_LENGTH)?;
        validate_text(&class_data.days_of_week, "Days of week", DAYS_OF_WEEK_MAX_LENGTH)?;

        let class = sqlx::query_as::<_, GymClass>(
            r#"
            INSERT INTO gym_classes (id, name, trainer_id, start_time, end_time, days_of_week, max_capacity)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            RETURNING id, name, trainer_id, start_time, end_time, days_of_week, max_capacity
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&class_data.name)
        .bind(class_data.trainer_id)
        .bind(class_data.start_time)
        .bind(class_data.end_time)
        .bind(&class_data.days_of_week)
        .bind(class_data.max_capacity)
        .fetch_one(&self.db)
        .await
        .map_err(|e| GymError::from_write(e, "trainer"))?;

        info!(class_id = %class.id, "Created gym class");
        Ok(class)
    }

    pub async fn get_class_by_id(&self, class_id: Uuid) -> Result<Option<GymClass>> {
        let class = sqlx::query_as::<_, GymClass>(
            "SELECT id, name, trainer_id, start_time, end_time, days_of_week, max_capacity FROM gym_classes WHERE id = ?1",
        )
        .bind(class_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(class)
    }

    pub async fn get_class_by_name(&self, name: &str) -> Result<Option<GymClass>> {
        let class = sqlx::query_as::<_, GymClass>(
            "SELECT id, name, trainer_id, start_time, end_time, days_of_week, max_capacity FROM gym_classes WHERE name = ?1",
        )
        .bind(name)
        .fetch_optional(&self.db)
        .await?;

        Ok(class)
    }

    /// Loads the class along with its trainer.
    pub async fn get_class_detail(&self, class_id: Uuid) -> Result<Option<GymClassDetail>> {
        let Some(class) = self.get_class_by_id(class_id).await? else {
            return Ok(None);
        };

        let trainer = TrainerService::new(self.db.clone())
            .get_trainer_by_id(class.trainer_id)
            .await?
            .ok_or(GymError::NotFound { entity: "trainer" })?;

        Ok(Some(GymClassDetail { class, trainer }))
    }

    pub async fn list_classes(&self, limit: Option<i64>, offset: Option<i64>) -> Result<Vec<GymClass>> {
        let limit = limit.unwrap_or(50);
        let offset = offset.unwrap_or(0);

        let classes = sqlx::query_as::<_, GymClass>(
            "SELECT id, name, trainer_id, start_time, end_time, days_of_week, max_capacity FROM gym_classes ORDER BY start_time ASC, name ASC LIMIT ?1 OFFSET ?2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await?;

        Ok(classes)
    }

    pub async fn list_classes_for_trainer(&self, trainer_id: Uuid) -> Result<Vec<GymClass>> {
        let classes = sqlx::query_as::<_, GymClass>(
            "SELECT id, name, trainer_id, start_time, end_time, days_of_week, max_capacity FROM gym_classes WHERE trainer_id = ?1 ORDER BY start_time ASC, name ASC",
        )
        .bind(trainer_id)
        .fetch_all(&self.db)
        .await?;

        Ok(classes)
    }

    #[instrument(skip(self, class_data))]
    pub async fn update_class(&self, class_id: Uuid, class_data: UpdateGymClass) -> Result<Option<GymClass>> {
        if let Some(name) = &class_data.name {
            validate_text(name, "Name", TITLE_MAX_LENGTH)?;
        }
        if let Some(days_of_week) = &class_data.days_of_week {
            validate_text(days_of_week, "Days of week", DAYS_OF_WEEK_MAX_LENGTH)?;
        }

        let class = sqlx::query_as::<_, GymClass>(
            r#"
            UPDATE gym_classes
            SET name = COALESCE(?2, name),
                start_time = COALESCE(?3, start_time),
                end_time = COALESCE(?4, end_time),
                days_of_week = COALESCE(?5, days_of_week),
                max_capacity = COALESCE(?6, max_capacity)
            WHERE id = ?1
            RETURNING id, name, trainer_id, start_time, end_time, days_of_week, max_capacity
            "#,
        )
        .bind(class_id)
        .bind(class_data.name)
        .bind(class_data.start_time)
        .bind(class_data.end_time)
        .bind(class_data.days_of_week)
        .bind(class_data.max_capacity)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| GymError::from_write(e, "trainer"))?;

        Ok(class)
    }

    /// Deleting a class also removes its bookings.
    #[instrument(skip(self))]
    pub async fn delete_class(&self, class_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM gym_classes WHERE id = ?1")
            .bind(class_id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count_classes(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM gym_classes")
            .fetch_one(&self.db)
            .await?;

        Ok(count)
    }
}
