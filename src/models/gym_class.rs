use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

use super::Trainer;

/// A recurring class led by one trainer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GymClass {
    pub id: Uuid,
    pub name: String,
    pub trainer_id: Uuid,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// Free text such as "Monday, Wednesday, Friday".
    pub days_of_week: String,
    /// Informational only; bookings are not counted against it.
    pub max_capacity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGymClass {
    pub name: String,
    pub trainer_id: Uuid,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub days_of_week: String,
    pub max_capacity: u32,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateGymClass {
    pub name: Option<String>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub days_of_week: Option<String>,
    pub max_capacity: Option<u32>,
}

/// A class together with the trainer who leads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GymClassDetail {
    pub class: GymClass,
    pub trainer: Trainer,
}

impl fmt::Display for GymClassDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.class.name, self.trainer)
    }
}
