use anyhow::Result;
use chrono::{Months, NaiveDate, NaiveTime, Utc};
use sqlx::SqlitePool;

use crate::models::*;
use crate::services::*;

pub struct DatabaseSeeder {
    pool: SqlitePool,
}

impl DatabaseSeeder {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts a small demo gym. Running it twice leaves the data unchanged.
    pub async fn seed_all(&self) -> Result<()> {
        tracing::info!("Starting database seeding...");

        self.seed_services().await?;
        self.seed_membership_plans().await?;
        self.seed_trainers().await?;
        self.seed_classes().await?;
        self.seed_members().await?;
        self.seed_subscriptions().await?;
        self.seed_bookings().await?;

        tracing::info!("Database seeding completed!");
        Ok(())
    }

    async fn seed_services(&self) -> Result<()> {
        let catalog = CatalogService::new(self.pool.clone());

        let demo_services = vec![
            CreateService {
                name: "Personal Training".to_string(),
                description: "One-to-one session with a certified trainer.".to_string(),
                price: "45.00".parse()?,
            },
            CreateService {
                name: "Sauna Access".to_string(),
                description: "Day pass for the sauna and steam room.".to_string(),
                price: "8.50".parse()?,
            },
        ];

        for service_data in demo_services {
            if catalog.get_service_by_name(&service_data.name).await?.is_none() {
                catalog.create_service(service_data).await?;
                tracing::info!("Created demo service");
            }
        }

        Ok(())
    }

    async fn seed_membership_plans(&self) -> Result<()> {
        let plan_service = MembershipPlanService::new(self.pool.clone());

        let demo_plans = vec![
            CreateMembershipPlan {
                name: "Basic".to_string(),
                description: "Gym floor access during staffed hours.".to_string(),
                price: "29.99".parse()?,
                duration_months: 1,
            },
            CreateMembershipPlan {
                name: "Premium".to_string(),
                description: "Unlimited access including all group classes.".to_string(),
                price: "49.99".parse()?,
                duration_months: 12,
            },
        ];

        for plan_data in demo_plans {
            if plan_service.get_plan_by_name(&plan_data.name).await?.is_none() {
                plan_service.create_plan(plan_data).await?;
                tracing::info!("Created demo membership plan");
            }
        }

        Ok(())
    }

    async fn seed_trainers(&self) -> Result<()> {
        let trainer_service = TrainerService::new(self.pool.clone());

        let demo_trainers = vec![
            CreateTrainer {
                first_name: "Maya".to_string(),
                last_name: "Chen".to_string(),
                expertise: "Yoga".to_string(),
                email: "maya.chen@example.com".to_string(),
                phone: Some("555-0101".to_string()),
                bio: Some("Vinyasa and restorative yoga teacher.".to_string()),
            },
            CreateTrainer {
                first_name: "Luis".to_string(),
                last_name: "Ortega".to_string(),
                expertise: "Strength and Conditioning".to_string(),
                email: "luis.ortega@example.com".to_string(),
                phone: None,
                bio: None,
            },
        ];

        for trainer_data in demo_trainers {
            if trainer_service.get_trainer_by_email(&trainer_data.email).await?.is_none() {
                trainer_service.create_trainer(trainer_data).await?;
                tracing::info!("Created demo trainer");
            }
        }

        Ok(())
    }

    async fn seed_classes(&self) -> Result<()> {
        let class_service = GymClassService::new(self.pool.clone());
        let trainer_service = TrainerService::new(self.pool.clone());

        let Some(trainer) = trainer_service.get_trainer_by_email("maya.chen@example.com").await? else {
            return Ok(());
        };

        if class_service.get_class_by_name("Morning Flow").await?.is_none() {
            class_service
                .create_class(CreateGymClass {
                    name: "Morning Flow".to_string(),
                    trainer_id: trainer.id,
                    start_time: time(7, 0)?,
                    end_time: time(8, 0)?,
                    days_of_week: "Monday, Wednesday, Friday".to_string(),
                    max_capacity: 20,
                })
                .await?;
            tracing::info!("Created demo gym class");
        }

        Ok(())
    }

    async fn seed_members(&self) -> Result<()> {
        let member_service = MemberService::new(self.pool.clone());

        let demo_members = vec![
            CreateMember {
                first_name: "Ann".to_string(),
                last_name: "Lee".to_string(),
                email: "ann.lee@example.com".to_string(),
                phone: Some("555-0199".to_string()),
                date_of_birth: date(1990, 4, 12)?,
                gender: Gender::Female,
                membership_active: None,
            },
            CreateMember {
                first_name: "Omar".to_string(),
                last_name: "Haddad".to_string(),
                email: "omar.haddad@example.com".to_string(),
                phone: None,
                date_of_birth: date(1985, 11, 3)?,
                gender: Gender::Male,
                membership_active: Some(false),
            },
        ];

        for member_data in demo_members {
            if member_service.get_member_by_email(&member_data.email).await?.is_none() {
                member_service.create_member(member_data).await?;
                tracing::info!("Created demo member");
            }
        }

        Ok(())
    }

    async fn seed_subscriptions(&self) -> Result<()> {
        let subscription_service = SubscriptionService::new(self.pool.clone());
        let member_service = MemberService::new(self.pool.clone());
        let plan_service = MembershipPlanService::new(self.pool.clone());

        let Some(member) = member_service.get_member_by_email("ann.lee@example.com").await? else {
            return Ok(());
        };
        let Some(plan) = plan_service.get_plan_by_name("Basic").await? else {
            return Ok(());
        };

        let existing = subscription_service.list_subscriptions_for_member(member.id).await?;
        if existing.is_empty() {
            let end_date = Utc::now()
                .date_naive()
                .checked_add_months(Months::new(plan.duration_months))
                .ok_or_else(|| anyhow::anyhow!("Subscription end date out of range"))?;

            subscription_service
                .create_subscription(CreateSubscription {
                    member_id: member.id,
                    membership_plan_id: plan.id,
                    end_date,
                })
                .await?;
            tracing::info!("Created demo subscription");
        }

        Ok(())
    }

    async fn seed_bookings(&self) -> Result<()> {
        let booking_service = ClassBookingService::new(self.pool.clone());
        let member_service = MemberService::new(self.pool.clone());
        let class_service = GymClassService::new(self.pool.clone());

        let Some(member) = member_service.get_member_by_email("ann.lee@example.com").await? else {
            return Ok(());
        };
        let Some(class) = class_service.get_class_by_name("Morning Flow").await? else {
            return Ok(());
        };

        let existing = booking_service.list_bookings_for_member(member.id).await?;
        if existing.is_empty() {
            booking_service
                .create_booking(CreateClassBooking {
                    member_id: member.id,
                    gym_class_id: class.id,
                })
                .await?;
            tracing::info!("Created demo class booking");
        }

        Ok(())
    }
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| anyhow::anyhow!("Invalid date {}-{}-{}", year, month, day))
}

fn time(hour: u32, minute: u32) -> Result<NaiveTime> {
    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| anyhow::anyhow!("Invalid time {}:{}", hour, minute))
}
