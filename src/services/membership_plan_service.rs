use sqlx::SqlitePool;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::{GymError, Result};
use crate::models::validation::{validate_required, validate_text, PLAN_NAME_MAX_LENGTH};
use crate::models::{CreateMembershipPlan, MembershipPlan, UpdateMembershipPlan};

pub struct MembershipPlanService {
    db: SqlitePool,
}

impl MembershipPlanService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    #[instrument(skip(self, plan_data), fields(name = %plan_data.name))]
    pub async fn create_plan(&self, plan_data: CreateMembershipPlan) -> Result<MembershipPlan> {
        validate_text(&plan_data.name, "Name", PLAN_NAME_MAX_LENGTH)?;
        validate_required(&plan_data.description, "Description")?;

        let plan = sqlx::query_as::<_, MembershipPlan>(
            r#"
            INSERT INTO membership_plans (id, name, description, price, duration_months)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, name, description, price, duration_months
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&plan_data.name)
        .bind(&plan_data.description)
        .bind(plan_data.price)
        .bind(plan_data.duration_months)
        .fetch_one(&self.db)
        .await
        .map_err(|e| GymError::from_write(e, "membership plan"))?;

        info!(plan_id = %plan.id, "Created membership plan");
        Ok(plan)
    }

    pub async fn get_plan_by_id(&self, plan_id: Uuid) -> Result<Option<MembershipPlan>> {
        let plan = sqlx::query_as::<_, MembershipPlan>(
            "SELECT id, name, description, price, duration_months FROM membership_plans WHERE id = ?1",
        )
        .bind(plan_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(plan)
    }

    pub async fn get_plan_by_name(&self, name: &str) -> Result<Option<MembershipPlan>> {
        let plan = sqlx::query_as::<_, MembershipPlan>(
            "SELECT id, name, description, price, duration_months FROM membership_plans WHERE name = ?1",
        )
        .bind(name)
        .fetch_optional(&self.db)
        .await?;

        Ok(plan)
    }

    pub async fn list_plans(&self, limit: Option<i64>, offset: Option<i64>) -> Result<Vec<MembershipPlan>> {
        let limit = limit.unwrap_or(50);
        let offset = offset.unwrap_or(0);

        let plans = sqlx::query_as::<_, MembershipPlan>(
            "SELECT id, name, description, price, duration_months FROM membership_plans ORDER BY price ASC, name ASC LIMIT ?1 OFFSET ?2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await?;

        Ok(plans)
    }

    #[instrument(skip(self, plan_data))]
    pub async fn update_plan(&self, plan_id: Uuid, plan_data: UpdateMembershipPlan) -> Result<Option<MembershipPlan>> {
        if let Some(name) = &plan_data.name {
            validate_text(name, "Name", PLAN_NAME_MAX_LENGTH)?;
        }
        if let Some(description) = &plan_data.description {
            validate_required(description, "Description")?;
        }

        let plan = sqlx::query_as::<_, MembershipPlan>(
            r#"
            UPDATE membership_plans
            SET name = COALESCE(?2, name),
                description = COALESCE(?3, description),
                price = COALESCE(?4, price),
                duration_months = COALESCE(?5, duration_months)
            WHERE id = ?1
            RETURNING id, name, description, price, duration_months
            "#,
        )
        .bind(plan_id)
        .bind(plan_data.name)
        .bind(plan_data.description)
        .bind(plan_data.price)
        .bind(plan_data.duration_months)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| GymError::from_write(e, "membership plan"))?;

        Ok(plan)
    }

    /// Deleting a plan also removes every subscription to it.
    #[instrument(skip(self))]
    pub async fn delete_plan(&self, plan_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM membership_plans WHERE id = ?1")
            .bind(plan_id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count_plans(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM membership_plans")
            .fetch_one(&self.db)
            .await?;

        Ok(count)
    }
}
