use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

use super::{GymClassDetail, Member};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ClassBooking {
    pub id: Uuid,
    pub member_id: Uuid,
    pub gym_class_id: Uuid,
    pub booking_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClassBooking {
    pub member_id: Uuid,
    pub gym_class_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassBookingDetail {
    pub booking: ClassBooking,
    pub member: Member,
    pub class: GymClassDetail,
}

impl fmt::Display for ClassBookingDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.member, self.class)
    }
}
