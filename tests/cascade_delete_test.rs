mod common;

use gym_manager::models::*;
use gym_manager::services::*;
use sqlx::SqlitePool;

use common::{MockDataGenerator, TestDatabase};

/// A member subscribed to one plan and booked into one class.
struct GymFixture {
    member: Member,
    trainer: Trainer,
    class: GymClass,
    plan: MembershipPlan,
    subscription: Subscription,
    booking: ClassBooking,
}

async fn build_fixture(pool: &SqlitePool) -> GymFixture {
    let member = MemberService::new(pool.clone())
        .create_member(MockDataGenerator::member())
        .await
        .unwrap();
    let trainer = TrainerService::new(pool.clone())
        .create_trainer(MockDataGenerator::trainer())
        .await
        .unwrap();
    let class = GymClassService::new(pool.clone())
        .create_class(MockDataGenerator::gym_class(trainer.id))
        .await
        .unwrap();
    let plan = MembershipPlanService::new(pool.clone())
        .create_plan(MockDataGenerator::membership_plan())
        .await
        .unwrap();
    let subscription = SubscriptionService::new(pool.clone())
        .create_subscription(MockDataGenerator::subscription(member.id, plan.id))
        .await
        .unwrap();
    let booking = ClassBookingService::new(pool.clone())
        .create_booking(CreateClassBooking {
            member_id: member.id,
            gym_class_id: class.id,
        })
        .await
        .unwrap();

    GymFixture {
        member,
        trainer,
        class,
        plan,
        subscription,
        booking,
    }
}

#[cfg(test)]
mod cascade_delete_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_deleting_trainer_deletes_their_classes() {
        let test_db = TestDatabase::new().await;
        let fixture = build_fixture(&test_db.pool).await;
        let class_service = GymClassService::new(test_db.pool.clone());

        let second_class = class_service
            .create_class(MockDataGenerator::gym_class(fixture.trainer.id))
            .await
            .unwrap();
        let other_trainer = TrainerService::new(test_db.pool.clone())
            .create_trainer(MockDataGenerator::trainer())
            .await
            .unwrap();
        let unrelated_class = class_service
            .create_class(MockDataGenerator::gym_class(other_trainer.id))
            .await
            .unwrap();

        let deleted = TrainerService::new(test_db.pool.clone())
            .delete_trainer(fixture.trainer.id)
            .await
            .unwrap();

        assert!(deleted);
        assert!(class_service.get_class_by_id(fixture.class.id).await.unwrap().is_none());
        assert!(class_service.get_class_by_id(second_class.id).await.unwrap().is_none());
        assert!(class_service.get_class_by_id(unrelated_class.id).await.unwrap().is_some());
        assert!(class_service
            .list_classes_for_trainer(fixture.trainer.id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_deleting_trainer_removes_bookings_of_their_classes() {
        let test_db = TestDatabase::new().await;
        let fixture = build_fixture(&test_db.pool).await;

        TrainerService::new(test_db.pool.clone())
            .delete_trainer(fixture.trainer.id)
            .await
            .unwrap();

        let booking = ClassBookingService::new(test_db.pool.clone())
            .get_booking_by_id(fixture.booking.id)
            .await
            .unwrap();
        assert!(booking.is_none());

        // The member and their subscription are untouched
        assert_eq!(test_db.count("members").await, 1);
        assert_eq!(test_db.count("subscriptions").await, 1);
    }

    #[tokio::test]
    async fn test_deleting_member_deletes_subscriptions_and_bookings() {
        let test_db = TestDatabase::new().await;
        let fixture = build_fixture(&test_db.pool).await;

        let other_member = MemberService::new(test_db.pool.clone())
            .create_member(MockDataGenerator::member())
            .await
            .unwrap();
        SubscriptionService::new(test_db.pool.clone())
            .create_subscription(MockDataGenerator::subscription(other_member.id, fixture.plan.id))
            .await
            .unwrap();

        let deleted = MemberService::new(test_db.pool.clone())
            .delete_member(fixture.member.id)
            .await
            .unwrap();
        assert!(deleted);

        let subscription_service = SubscriptionService::new(test_db.pool.clone());
        let booking_service = ClassBookingService::new(test_db.pool.clone());

        assert!(subscription_service
            .get_subscription_by_id(fixture.subscription.id)
            .await
            .unwrap()
            .is_none());
        assert!(subscription_service
            .list_subscriptions_for_member(fixture.member.id)
            .await
            .unwrap()
            .is_empty());
        assert!(booking_service
            .list_bookings_for_member(fixture.member.id)
            .await
            .unwrap()
            .is_empty());

        // Referenced plan and class survive, as does the other member's subscription
        assert_eq!(test_db.count("membership_plans").await, 1);
        assert_eq!(test_db.count("gym_classes").await, 1);
        assert_eq!(test_db.count("subscriptions").await, 1);
    }

    #[tokio::test]
    async fn test_deleting_plan_deletes_its_subscriptions() {
        let test_db = TestDatabase::new().await;
        let fixture = build_fixture(&test_db.pool).await;

        MembershipPlanService::new(test_db.pool.clone())
            .delete_plan(fixture.plan.id)
            .await
            .unwrap();

        assert_eq!(test_db.count("subscriptions").await, 0);
        assert_eq!(test_db.count("members").await, 1);
        assert_eq!(test_db.count("class_bookings").await, 1);
    }

    #[tokio::test]
    async fn test_deleting_class_deletes_its_bookings() {
        let test_db = TestDatabase::new().await;
        let fixture = build_fixture(&test_db.pool).await;

        GymClassService::new(test_db.pool.clone())
            .delete_class(fixture.class.id)
            .await
            .unwrap();

        assert_eq!(test_db.count("class_bookings").await, 0);
        assert_eq!(test_db.count("trainers").await, 1);
        assert_eq!(test_db.count("members").await, 1);
    }

    #[tokio::test]
    async fn test_deleting_subscription_or_booking_leaves_parents() {
        let test_db = TestDatabase::new().await;
        let fixture = build_fixture(&test_db.pool).await;

        assert!(SubscriptionService::new(test_db.pool.clone())
            .delete_subscription(fixture.subscription.id)
            .await
            .unwrap());
        assert!(ClassBookingService::new(test_db.pool.clone())
            .delete_booking(fixture.booking.id)
            .await
            .unwrap());

        assert_eq!(test_db.count("members").await, 1);
        assert_eq!(test_db.count("membership_plans").await, 1);
        assert_eq!(test_db.count("gym_classes").await, 1);
    }

    #[tokio::test]
    async fn test_deleting_missing_record_reports_nothing_removed() {
        let test_db = TestDatabase::new().await;
        let fixture = build_fixture(&test_db.pool).await;
        let member_service = MemberService::new(test_db.pool.clone());

        assert!(member_service.delete_member(fixture.member.id).await.unwrap());
        assert!(!member_service.delete_member(fixture.member.id).await.unwrap());
    }
}
