use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::{GymError, Result};
use crate::models::validation::{
    validate_email, validate_optional, validate_text, NAME_MAX_LENGTH, PHONE_MAX_LENGTH,
};
use crate::models::{CreateMember, Member, UpdateMember};

pub struct MemberService {
    db: SqlitePool,
}

impl MemberService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    #[instrument(skip(self, member_data), fields(email = %member_data.email))]
    pub async fn create_member(&self, member_data: CreateMember) -> Result<Member> {
        validate_text(&member_data.first_name, "First name", NAME_MAX_LENGTH)?;
        validate_text(&member_data.last_name, "Last name", NAME_MAX_LENGTH)?;
        validate_email(&member_data.email)?;
        let phone = member_data.phone.as_deref();
        validate_optional(phone, "Phone", PHONE_MAX_LENGTH)?;
        let set_phone = member_data.phone.is_some();

        let member = sqlx::query_as::<_, Member>(
            r#"
            INSERT INTO members (id, first_name, last_name, email, phone, date_of_birth, gender, join_date, membership_active)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            RETURNING id, first_name, last_name, email, phone, date_of_birth, gender, join_date, membership_active
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&member_data.first_name)
        .bind(&member_data.last_name)
        .bind(&member_data.email)
        .bind(&member_data.phone)
        .bind(member_data.date_of_birth)
        .bind(member_data.gender)
        .bind(Utc::now().date_naive())
        .bind(member_data.membership_active.unwrap_or(true))
        .fetch_one(&self.db)
        .await
        .map_err(|e| GymError::from_write(e, "member"))?;

        info!(member_id = %member.id, "Created member");
        Ok(member)
    }

    pub async fn get_member_by_id(&self, member_id: Uuid) -> Result<Option<Member>> {
        let member = sqlx::query_as::<_, Member>(
            "SELECT id, first_name, last_name, email, phone, date_of_birth, gender, join_date, membership_active FROM members WHERE id = ?1",
        )
        .bind(member_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(member)
    }

    pub async fn get_member_by_email(&self, email: &str) -> Result<Option<Member>> {
        let member = sqlx::query_as::<_, Member>(
            "SELECT id, first_name, last_name, email, phone, date_of_birth, gender, join_date, membership_active FROM members WHERE email = ?1",
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await?;

        Ok(member)
    }

    pub async fn list_members(&self, limit: Option<i64>, offset: Option<i64>) -> Result<Vec<Member>> {
        let limit = limit.unwrap_or(50);
        let offset = offset.unwrap_or(0);

        let members = sqlx::query_as::<_, Member>(
            "SELECT id, first_name, last_name, email, phone, date_of_birth, gender, join_date, membership_active FROM members ORDER BY last_name ASC, first_name ASC LIMIT ?1 OFFSET ?2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await?;

        Ok(members)
    }

    /// join_date is not updatable.
    #[instrument(skip(self, member_data))]
    pub async fn update_member(&self, member_id: Uuid, member_data: UpdateMember) -> Result<Option<Member>> {
        if let Some(first_name) = &member_data.first_name {
            validate_text(first_name, "First name", NAME_MAX_LENGTH)?;
        }
        if let Some(last_name) = &member_data.last_name {
            validate_text(last_name, "Last name", NAME_MAX_LENGTH)?;
        }
        if let Some(email) = &member_data.email {
            validate_email(email)?;
        }
        let phone = member_data.phone.as_ref().and_then(|phone| phone.as_deref());
        validate_optional(phone, "Phone", PHONE_MAX_LENGTH)?;
        let set_phone = member_data.phone.is_some();

        let member = sqlx::query_as::<_, Member>(
            r#"
            UPDATE members
            SET first_name = COALESCE(?2, first_name),
                last_name = COALESCE(?3, last_name),
                email = COALESCE(?4, email),
                phone = CASE WHEN ?9 THEN ?5 ELSE phone END,
                date_of_birth = COALESCE(?6, date_of_birth),
                gender = COALESCE(?7, gender),
                membership_active = COALESCE(?8, membership_active)
            WHERE id = ?1
            RETURNING id, first_name, last_name, email, phone, date_of_birth, gender, join_date, membership_active
            "#,
        )
        .bind(member_id)
        .bind(member_data.first_name)
        .bind(member_data.last_name)
        .bind(member_data.email)
        .bind(member_data.phone.flatten())
        .bind(member_data.date_of_birth)
        .bind(member_data.gender)
        .bind(member_data.membership_active)
        .bind(set_phone)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| GymError::from_write(e, "member"))?;

        Ok(member)
    }

    /// Deleting a member also removes their subscriptions and bookings.
    #[instrument(skip(self))]
    pub async fn delete_member(&self, member_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM members WHERE id = ?1")
            .bind(member_id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count_members(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM members")
            .fetch_one(&self.db)
            .await?;

        Ok(count)
    }
}
