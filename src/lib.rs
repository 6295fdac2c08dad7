//! Persistent schema for a gym: members, trainers, services, classes,
//! membership plans, subscriptions and class bookings.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use error::{GymError, Result};
