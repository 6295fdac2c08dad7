use anyhow::Result;
use gym_manager::config::{run_migrations, AppConfig, DatabaseConfig, DatabaseSeeder};
use gym_manager::services::*;
use sqlx::SqlitePool;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let app_config = AppConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&app_config.log_level)),
        )
        .init();

    let db_config = DatabaseConfig::from_env()?;
    let pool = db_config.create_pool().await?;

    run_migrations(&pool).await?;
    info!(environment = %app_config.environment, "Schema is up to date");

    if app_config.should_seed_demo_data() {
        DatabaseSeeder::new(pool.clone()).seed_all().await?;
    } else if app_config.seed_demo_data {
        warn!("SEED_DEMO_DATA is ignored in production");
    }

    report_row_counts(&pool).await?;

    pool.close().await;
    Ok(())
}

async fn report_row_counts(pool: &SqlitePool) -> Result<()> {
    let services = CatalogService::new(pool.clone()).count_services().await?;
    let members = MemberService::new(pool.clone()).count_members().await?;
    let trainers = TrainerService::new(pool.clone()).count_trainers().await?;
    let gym_classes = GymClassService::new(pool.clone()).count_classes().await?;
    let membership_plans = MembershipPlanService::new(pool.clone()).count_plans().await?;
    let subscriptions = SubscriptionService::new(pool.clone()).count_subscriptions().await?;
    let class_bookings = ClassBookingService::new(pool.clone()).count_bookings().await?;

    info!(
        services,
        members,
        trainers,
        gym_classes,
        membership_plans,
        subscriptions,
        class_bookings,
        "Row counts"
    );
    Ok(())
}
