// Data-access services, one per record type

pub mod catalog_service;
pub mod member_service;
pub mod trainer_service;
pub mod gym_class_service;
pub mod membership_plan_service;
pub mod subscription_service;
pub mod class_booking_service;

pub use catalog_service::CatalogService;
pub use member_service::MemberService;
pub use trainer_service::TrainerService;
pub use gym_class_service::GymClassService;
pub use membership_plan_service::MembershipPlanService;
pub use subscription_service::SubscriptionService;
pub use class_booking_service::ClassBookingService;
