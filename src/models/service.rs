use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

use super::Price;

/// An offering on the gym's catalog, e.g. personal training or yoga.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Price,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateService {
    pub name: String,
    pub description: String,
    pub price: Price,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateService {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Price>,
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
