use sqlx::SqlitePool;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::{GymError, Result};
use crate::models::validation::{
    validate_email, validate_optional, validate_text, NAME_MAX_LENGTH, PHONE_MAX_LENGTH,
    TITLE_MAX_LENGTH,
};
use crate::models::{CreateTrainer, Trainer, UpdateTrainer};

pub struct TrainerService {
    db: SqlitePool,
}

impl TrainerService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    #[instrument(skip(self, trainer_data), fields(email = %trainer_data.email))]
    pub async fn create_trainer(&self, trainer_data: CreateTrainer) -> Result<Trainer> {
        validate_text(&trainer_data.first_name, "First name", NAME_MAX_LENGTH)?;
        validate_text(&trainer_data.last_name, "Last name", NAME_MAX_LENGTH)?;
        validate_text(&trainer_data.expertise, "Expertise", TITLE_MAX_LENGTH)?;
        validate_email(&trainer_data.email)?;
        let phone = trainer_data.phone.as_deref();
        validate_optional(phone, "Phone", PHONE_MAX_LENGTH)?;
        let set_phone = trainer_data.phone.is_some();
        let set_bio = trainer_data.bio.is_some();

        let trainer = sqlx::query_as::<_, Trainer>(
            r#"
            INSERT INTO trainers (id, first_name, last_name, expertise, email, phone, bio)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            RETURNING id, first_name, last_name, expertise, email, phone, bio
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&trainer_data.first_name)
        .bind(&trainer_data.last_name)
        .bind(&trainer_data.expertise)
        .bind(&trainer_data.email)
        .bind(&trainer_data.phone)
        .bind(&trainer_data.bio)
        .fetch_one(&self.db)
        .await
        .map_err(|e| GymError::from_write(e, "trainer"))?;

        info!(trainer_id = %trainer.id, "Created trainer");
        Ok(trainer)
    }

    pub async fn get_trainer_by_id(&self, trainer_id: Uuid) -> Result<Option<Trainer>> {
        let trainer = sqlx::query_as::<_, Trainer>(
            "SELECT id, first_name, last_name, expertise, email, phone, bio FROM trainers WHERE id = ?1",
        )
        .bind(trainer_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(trainer)
    }

    pub async fn get_trainer_by_email(&self, email: &str) -> Result<Option<Trainer>> {
        let trainer = sqlx::query_as::<_, Trainer>(
            "SELECT id, first_name, last_name, expertise, email, phone, bio FROM trainers WHERE email = ?1",
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await?;

        Ok(trainer)
    }

    pub async fn list_trainers(&self, limit: Option<i64>, offset: Option<i64>) -> Result<Vec<Trainer>> {
        let limit = limit.unwrap_or(50);
        let offset = offset.unwrap_or(0);

        let trainers = sqlx::query_as::<_, Trainer>(
            "SELECT id, first_name, last_name, expertise, email, phone, bio FROM trainers ORDER BY last_name ASC, first_name ASC LIMIT ?1 OFFSET ?2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await?;

        Ok(trainers)
    }

    #[instrument(skip(self, trainer_data))]
    pub async fn update_trainer(&self, trainer_id: Uuid, trainer_data: UpdateTrainer) -> Result<Option<Trainer>> {
        if let Some(first_name) = &trainer_data.first_name {
            validate_text(first_name, "First name", NAME_MAX_LENGTH)?;
        }
        if let Some(last_name) = &trainer_data.last_name {
            validate_text(last_name, "Last name", NAME_MAX_LENGTH)?;
        }
        if let Some(expertise) = &trainer_data.expertise {
            validate_text(expertise, "Expertise", TITLE_MAX_LENGTH)?;
        }
        if let Some(email) = &trainer_data.email {
            validate_email(email)?;
        }
        let phone = trainer_data.phone.as_ref().and_then(|phone| phone.as_deref());
        validate_optional(phone, "Phone", PHONE_MAX_LENGTH)?;
        let set_phone = trainer_data.phone.is_some();
        let set_bio = trainer_data.bio.is_some();

        let trainer = sqlx::query_as::<_, Trainer>(
            r#"
            UPDATE trainers
            SET first_name = COALESCE(?2, first_name),
                last_name = COALESCE(?3, last_name),
                expertise = COALESCE(?4, expertise),
                email = COALESCE(?5, email),
                phone = CASE WHEN ?8 THEN ?6 ELSE phone END,
                bio = CASE WHEN ?9 THEN ?7 ELSE bio END
            WHERE id = ?1
            RETURNING id, first_name, last_name, expertise, email, phone, bio
            "#,
        )
        .bind(trainer_id)
        .bind(trainer_data.first_name)
        .bind(trainer_data.last_name)
        .bind(trainer_data.expertise)
        .bind(trainer_data.email)
        .bind(trainer_data.phone.flatten())
        .bind(trainer_data.bio.flatten())
        .bind(set_phone)
        .bind(set_bio)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| GymError::from_write(e, "trainer"))?;

        Ok(trainer)
    }

    /// Deleting a trainer also removes the classes they lead.
    #[instrument(skip(self))]
    pub async fn delete_trainer(&self, trainer_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM trainers WHERE id = ?1")
            .bind(trainer_id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count_trainers(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM trainers")
            .fetch_one(&self.db)
            .await?;

        Ok(count)
    }
}
