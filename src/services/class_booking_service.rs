use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::{GymError, Result};
use crate::models::{ClassBooking, ClassBookingDetail, CreateClassBooking};
use crate::services::{GymClassService, MemberService};

/// Bookings are not checked against class capacity or for duplicates.
pub struct ClassBookingService {
    db: SqlitePool,
}

impl ClassBookingService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    #[instrument(skip(self, booking_data), fields(member_id = %booking_data.member_id, gym_class_id = %booking_data.gym_class_id))]
    pub async fn create_booking(&self, booking_data: CreateClassBooking) -> Result<ClassBooking> {
        let booking = sqlx::query_as::<_, ClassBooking>(
            r#"
            INSERT INTO class_bookings (id, member_id, gym_class_id, booking_date)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, member_id, gym_class_id, booking_date
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(booking_data.member_id)
        .bind(booking_data.gym_class_id)
        .bind(Utc::now().date_naive())
        .fetch_one(&self.db)
        .await
        .map_err(|e| GymError::from_write(e, "member or gym class"))?;

        info!(booking_id = %booking.id, "Created class booking");
        Ok(booking)
    }

    pub async fn get_booking_by_id(&self, booking_id: Uuid) -> Result<Option<ClassBooking>> {
        let booking = sqlx::query_as::<_, ClassBooking>(
            "SELECT id, member_id, gym_class_id, booking_date FROM class_bookings WHERE id = ?1",
        )
        .bind(booking_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(booking)
    }

    pub async fn get_booking_detail(&self, booking_id: Uuid) -> Result<Option<ClassBookingDetail>> {
        let Some(booking) = self.get_booking_by_id(booking_id).await? else {
            return Ok(None);
        };

        let member = MemberService::new(self.db.clone())
            .get_member_by_id(booking.member_id)
            .await?
            .ok_or(GymError::NotFound { entity: "member" })?;
        let class = GymClassService::new(self.db.clone())
            .get_class_detail(booking.gym_class_id)
            .await?
            .ok_or(GymError::NotFound { entity: "gym class" })?;

        Ok(Some(ClassBookingDetail {
            booking,
            member,
            class,
        }))
    }

    pub async fn list_bookings(&self, limit: Option<i64>, offset: Option<i64>) -> Result<Vec<ClassBooking>> {
        let limit = limit.unwrap_or(50);
        let offset = offset.unwrap_or(0);

        let bookings = sqlx::query_as::<_, ClassBooking>(
            "SELECT id, member_id, gym_class_id, booking_date FROM class_bookings ORDER BY booking_date DESC LIMIT ?1 OFFSET ?2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await?;

        Ok(bookings)
    }

    pub async fn list_bookings_for_member(&self, member_id: Uuid) -> Result<Vec<ClassBooking>> {
        let bookings = sqlx::query_as::<_, ClassBooking>(
            "SELECT id, member_id, gym_class_id, booking_date FROM class_bookings WHERE member_id = ?1 ORDER BY booking_date DESC",
        )
        .bind(member_id)
        .fetch_all(&self.db)
        .await?;

        Ok(bookings)
    }

    pub async fn list_bookings_for_class(&self, gym_class_id: Uuid) -> Result<Vec<ClassBooking>> {
        let bookings = sqlx::query_as::<_, ClassBooking>(
            "SELECT id, member_id, gym_class_id, booking_date FROM class_bookings WHERE gym_class_id = ?1 ORDER BY booking_date DESC",
        )
        .bind(gym_class_id)
        .fetch_all(&self.db)
        .await?;

        Ok(bookings)
    }

    #[instrument(skip(self))]
    pub async fn delete_booking(&self, booking_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM class_bookings WHERE id = ?1")
            .bind(booking_id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count_bookings(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM class_bookings")
            .fetch_one(&self.db)
            .await?;

        Ok(count)
    }
}
