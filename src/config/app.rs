use anyhow::Result;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub log_level: String,
    pub seed_demo_data: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let seed_demo_data = env::var("SEED_DEMO_DATA")
            .map(|value| parse_flag(&value))
            .unwrap_or(false);

        Ok(AppConfig {
            environment,
            log_level,
            seed_demo_data,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Demo data is never seeded into a production database.
    pub fn should_seed_demo_data(&self) -> bool {
        self.seed_demo_data && !self.is_production()
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" YES "));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }

    fn config(environment: &str, seed_demo_data: bool) -> AppConfig {
        AppConfig {
            environment: environment.to_string(),
            log_level: "warn".to_string(),
            seed_demo_data,
        }
    }

    #[test]
    fn test_environment_checks() {
        assert!(config("production", false).is_production());
        assert!(!config("development", false).is_production());
        assert!(!config("staging", false).is_production());
    }

    #[test]
    fn test_seeding_is_skipped_in_production() {
        assert!(config("development", true).should_seed_demo_data());
        assert!(config("staging", true).should_seed_demo_data());
        assert!(!config("development", false).should_seed_demo_data());
        assert!(!config("production", true).should_seed_demo_data());
    }
}
