use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::{GymError, Result};
use crate::models::{CreateSubscription, Subscription, SubscriptionDetail, UpdateSubscription};
use crate::services::{MemberService, MembershipPlanService};

pub struct SubscriptionService {
    db: SqlitePool,
}

impl SubscriptionService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// start_date is today; end_date is taken as given.
    #[instrument(skip(self, subscription_data), fields(member_id = %subscription_data.member_id))]
    pub async fn create_subscription(&self, subscription_data: CreateSubscription) -> Result<Subscription> {
        let subscription = sqlx::query_as::<_, Subscription>(
            r#"
            INSERT INTO subscriptions (id, member_id, membership_plan_id, start_date, end_date)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, member_id, membership_plan_id, start_date, end_date
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(subscription_data.member_id)
        .bind(subscription_data.membership_plan_id)
        .bind(Utc::now().date_naive())
        .bind(subscription_data.end_date)
        .fetch_one(&self.db)
        .await
        .map_err(|e| GymError::from_write(e, "member or membership plan"))?;

        info!(subscription_id = %subscription.id, "Created subscription");
        Ok(subscription)
    }

    pub async fn get_subscription_by_id(&self, subscription_id: Uuid) -> Result<Option<Subscription>> {
        let subscription = sqlx::query_as::<_, Subscription>(
            "SELECT id, member_id, membership_plan_id, start_date, end_date FROM subscriptions WHERE id = ?1",
        )
        .bind(subscription_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(subscription)
    }

    pub async fn get_subscription_detail(&self, subscription_id: Uuid) -> Result<Option<SubscriptionDetail>> {
        let Some(subscription) = self.get_subscription_by_id(subscription_id).await? else {
            return Ok(None);
        };

        let member = MemberService::new(self.db.clone())
            .get_member_by_id(subscription.member_id)
            .await?
            .ok_or(GymError::NotFound { entity: "member" })?;
        let plan = MembershipPlanService::new(self.db.clone())
            .get_plan_by_id(subscription.membership_plan_id)
            .await?
            .ok_or(GymError::NotFound { entity: "membership plan" })?;

        Ok(Some(SubscriptionDetail {
            subscription,
            member,
            plan,
        }))
    }

    pub async fn list_subscriptions(&self, limit: Option<i64>, offset: Option<i64>) -> Result<Vec<Subscription>> {
        let limit = limit.unwrap_or(50);
        let offset = offset.unwrap_or(0);

        let subscriptions = sqlx::query_as::<_, Subscription>(
            "SELECT id, member_id, membership_plan_id, start_date, end_date FROM subscriptions ORDER BY start_date DESC LIMIT ?1 OFFSET ?2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await?;

        Ok(subscriptions)
    }

    pub async fn list_subscriptions_for_member(&self, member_id: Uuid) -> Result<Vec<Subscription>> {
        let subscriptions = sqlx::query_as::<_, Subscription>(
            "SELECT id, member_id, membership_plan_id, start_date, end_date FROM subscriptions WHERE member_id = ?1 ORDER BY start_date DESC",
        )
        .bind(member_id)
        .fetch_all(&self.db)
        .await?;

        Ok(subscriptions)
    }

    #[instrument(skip(self, subscription_data))]
    pub async fn update_subscription(
        &self,
        subscription_id: Uuid,
        subscription_data: UpdateSubscription,
    ) -> Result<Option<Subscription>> {
        let subscription = sqlx::query_as::<_, Subscription>(
            r#"
            UPDATE subscriptions
            SET end_date = COALESCE(?2, end_date)
            WHERE id = ?1
            RETURNING id, member_id, membership_plan_id, start_date, end_date
            "#,
        )
        .bind(subscription_id)
        .bind(subscription_data.end_date)
        .fetch_optional(&self.db)
        .await?;

        Ok(subscription)
    }

    #[instrument(skip(self))]
    pub async fn delete_subscription(&self, subscription_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM subscriptions WHERE id = ?1")
            .bind(subscription_id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count_subscriptions(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM subscriptions")
            .fetch_one(&self.db)
            .await?;

        Ok(count)
    }
}
