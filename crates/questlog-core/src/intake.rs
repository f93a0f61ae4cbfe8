//! Plan intake adapter.
//!
//! Turns the step plan handed over by the external planner into canonical
//! [`QuestStep`]s before anything reaches the store. Missing `completed`
//! flags default to `false` and missing `day` ordinals default to the
//! 1-based input position. Input order is kept as is.
//!
//! [`normalize`] only fills defaults. [`validate_days`] enforces that the
//! resulting ordinals are positive, unique and strictly ascending, and
//! [`prepare`] runs both; the board creates quests through [`prepare`] so a
//! plan with broken numbering is rejected instead of stored.

use serde::{Deserialize, Serialize};

use crate::{
    error::{QuestError, Result},
    models::QuestStep,
};

/// A step as supplied by the planner, before defaults are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct RawStep {
    /// Ordinal of the step; defaults to its 1-based position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
    /// Short title of the task
    #[serde(default)]
    pub task_title: String,
    /// Free-text description of the task
    #[serde(default)]
    pub task_description: String,
    /// Free-text effort estimate
    #[serde(default)]
    pub duration: String,
    /// Reward for the step
    #[serde(default)]
    pub xp: u32,
    /// Completion flag; defaults to `false`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// A generated plan as returned by the planner.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct RawPlan {
    /// Title proposed by the planner
    #[serde(default)]
    pub quest_title: String,
    /// Ordered steps; required, an absent plan is not an empty one
    pub plan: Vec<RawStep>,
}

/// Applies `day` and `completed` defaults, preserving order.
pub fn normalize(raw: Vec<RawStep>) -> Vec<QuestStep> {
    raw.into_iter()
        .enumerate()
        .map(|(index, step)| QuestStep {
            day: step.day.unwrap_or(index as u32 + 1),
            task_title: step.task_title,
            task_description: step.task_description,
            duration: step.duration,
            xp: step.xp,
            completed: step.completed.unwrap_or(false),
        })
        .collect()
}

/// Normalizes an untyped plan value.
///
/// # Errors
///
/// * `QuestError::InvalidInput` - When the value is not a JSON array
/// * `QuestError::Serialization` - When an element is not a step object
pub fn normalize_value(value: &serde_json::Value) -> Result<Vec<QuestStep>> {
    if !value.is_array() {
        return Err(QuestError::invalid_input("plan").with_reason(format!(
            "expected a sequence of steps, got {}",
            json_kind(value)
        )));
    }

    let raw: Vec<RawStep> = serde_json::from_value(value.clone())?;
    Ok(normalize(raw))
}

/// Checks that every `day` is positive and that days strictly ascend, which
/// also makes them unique.
///
/// # Errors
///
/// * `QuestError::InvalidInput` - On a zero, duplicated or out-of-order day
pub fn validate_days(steps: &[QuestStep]) -> Result<()> {
    let mut previous: Option<u32> = None;

    for step in steps {
        if step.day == 0 {
            return Err(QuestError::invalid_input("day").with_reason("day must be positive"));
        }
        if let Some(prev) = previous {
            if step.day == prev {
                return Err(QuestError::invalid_input("day")
                    .with_reason(format!("duplicate day {}", step.day)));
            }
            if step.day < prev {
                return Err(QuestError::invalid_input("day").with_reason(format!(
                    "day {} appears after day {prev}",
                    step.day
                )));
            }
        }
        previous = Some(step.day);
    }

    Ok(())
}

/// Normalizes and validates a raw plan.
///
/// # Errors
///
/// See [`validate_days`].
pub fn prepare(raw: Vec<RawStep>) -> Result<Vec<QuestStep>> {
    let steps = normalize(raw);
    validate_days(&steps)?;
    Ok(steps)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
