use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

use super::{Member, MembershipPlan};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Subscription {
    pub id: Uuid,
    pub member_id: Uuid,
    pub membership_plan_id: Uuid,
    /// Set when the subscription is created.
    pub start_date: NaiveDate,
    /// Supplied by the caller; not derived from the plan duration.
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSubscription {
    pub member_id: Uuid,
    pub membership_plan_id: Uuid,
    pub end_date: NaiveDate,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateSubscription {
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionDetail {
    pub subscription: Subscription,
    pub member: Member,
    pub plan: MembershipPlan,
}

impl fmt::Display for SubscriptionDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.member, self.plan)
    }
}
