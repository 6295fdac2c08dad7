#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime, Utc};
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use gym_manager::config::{run_migrations, DatabaseConfig};
use gym_manager::models::*;
use sqlx::SqlitePool;
use std::sync::Once;
use uuid::Uuid;

static INIT: Once = Once::new();

/// Initialize test logging
pub fn init_test_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("gym_manager=debug")
            .with_test_writer()
            .init();
    });
}

/// Fresh in-memory database with the schema applied
pub struct TestDatabase {
    pub pool: SqlitePool,
}

impl TestDatabase {
    pub async fn new() -> Self {
        init_test_logging();

        let pool = DatabaseConfig::in_memory()
            .create_pool()
            .await
            .expect("Failed to open in-memory database");

        run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self { pool }
    }

    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count rows")
    }
}

/// Mock data generators
pub struct MockDataGenerator;

impl MockDataGenerator {
    fn unique_suffix() -> String {
        Uuid::new_v4().simple().to_string()[..8].to_string()
    }

    pub fn service() -> CreateService {
        CreateService {
            name: format!("Service {}", Self::unique_suffix()),
            description: Sentence(3..8).fake(),
            price: Price::from_cents((500..10_000).fake()).unwrap(),
        }
    }

    pub fn member() -> CreateMember {
        CreateMember {
            first_name: FirstName().fake(),
            last_name: LastName().fake(),
            email: format!("member-{}@example.com", Uuid::new_v4().simple()),
            phone: Some(format!("555-{:04}", (0..10_000).fake::<u32>())),
            date_of_birth: NaiveDate::from_ymd_opt((1960..2005).fake(), (1..13).fake(), (1..29).fake()).unwrap(),
            gender: Gender::Other,
            membership_active: None,
        }
    }

    pub fn named_member(first_name: &str, last_name: &str) -> CreateMember {
        CreateMember {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            ..Self::member()
        }
    }

    pub fn trainer() -> CreateTrainer {
        let specialties = ["Yoga", "Pilates", "Boxing", "Spin", "Strength"];

        CreateTrainer {
            first_name: FirstName().fake(),
            last_name: LastName().fake(),
            expertise: specialties[(0..specialties.len()).fake::<usize>()].to_string(),
            email: format!("trainer-{}@example.com", Uuid::new_v4().simple()),
            phone: None,
            bio: Some(Sentence(5..10).fake()),
        }
    }

    pub fn gym_class(trainer_id: Uuid) -> CreateGymClass {
        CreateGymClass {
            name: format!("Class {}", Self::unique_suffix()),
            trainer_id,
            start_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            days_of_week: "Tuesday, Thursday".to_string(),
            max_capacity: (5..30).fake(),
        }
    }

    pub fn membership_plan() -> CreateMembershipPlan {
        CreateMembershipPlan {
            name: format!("Plan {}", Self::unique_suffix()),
            description: Sentence(3..8).fake(),
            price: Price::from_cents((1_000..10_000).fake()).unwrap(),
            duration_months: (1..13).fake(),
        }
    }

    pub fn subscription(member_id: Uuid, membership_plan_id: Uuid) -> CreateSubscription {
        CreateSubscription {
            member_id,
            membership_plan_id,
            end_date: Utc::now().date_naive() + chrono::Duration::days(30),
        }
    }
}
