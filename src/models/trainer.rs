use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Trainer {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub expertise: String,
    pub email: String,
    pub phone: Option<String>,
    pub bio: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTrainer {
    pub first_name: String,
    pub last_name: String,
    pub expertise: String,
    pub email: String,
    pub phone: Option<String>,
    pub bio: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateTrainer {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub expertise: Option<String>,
    pub email: Option<String>,
    /// `Some(None)` clears the stored value.
    #[serde(default, deserialize_with = "crate::models::patch::nullable", skip_serializing_if = "Option::is_none")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::models::patch::nullable", skip_serializing_if = "Option::is_none")]
    pub bio: Option<Option<String>>,
}

impl fmt::Display for Trainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} - {}", self.first_name, self.last_name, self.expertise)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trainer_label() {
        let trainer = Trainer {
            id: Uuid::new_v4(),
            first_name: "Sam".to_string(),
            last_name: "Ortiz".to_string(),
            expertise: "Yoga".to_string(),
            email: "sam@example.com".to_string(),
            phone: None,
            bio: None,
        };

        assert_eq!(trainer.to_string(), "Sam Ortiz - Yoga");
    }
}
