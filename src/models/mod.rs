// Persisted record types and their create/update payloads

pub mod price;
pub mod service;
pub mod member;
pub mod trainer;
pub mod gym_class;
pub mod membership_plan;
pub mod subscription;
pub mod class_booking;
pub mod validation;
pub mod patch;

pub use price::*;
pub use service::*;
pub use member::*;
pub use trainer::*;
pub use gym_class::*;
pub use membership_plan::*;
pub use subscription::*;
pub use class_booking::*;
