use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

use super::Price;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MembershipPlan {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub duration_months: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMembershipPlan {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub duration_months: u32,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateMembershipPlan {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Price>,
    pub duration_months: Option<u32>,
}

impl fmt::Display for MembershipPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}/month", self.name, self.price)
    }
}
