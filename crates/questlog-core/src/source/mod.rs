//! External planner boundary.
//!
//! A [`PlanSource`] turns a [`CreateQuest`] request into a [`RawPlan`]. The
//! call is fire-and-forget: one request, no retry, no cancellation. Every
//! failure surfaces as [`crate::QuestError::PlanFetch`] so that callers can
//! refuse to create a quest.

use std::future::Future;

use crate::{error::Result, intake::RawPlan, params::CreateQuest};

pub mod http;

pub use http::HttpPlanSource;

/// Something that can produce a step plan for a goal.
pub trait PlanSource: Send + Sync {
    /// Requests a plan for the given goal.
    fn fetch_plan(&self, request: &CreateQuest) -> impl Future<Output = Result<RawPlan>> + Send;
}
