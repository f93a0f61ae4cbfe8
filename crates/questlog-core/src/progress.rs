//! Progress engine.
//!
//! Pure functions over one quest's ordered step list. Nothing here is cached;
//! every call walks the plan again. Plans are assumed to be ordered by
//! ascending `day` and the engine never re-sorts.

use crate::models::{Difficulty, FocusView, QuestKind, QuestMetadata, QuestStep};

/// Derives the focus view of a plan.
///
/// Today's step is the first step that is not completed and tomorrow's step
/// is the one right after it. Missed steps are the open steps before today's
/// step; since today's step is the *first* open one, that list is empty for
/// every input.
///
/// # Examples
///
/// ```rust
/// use questlog_core::{models::QuestStep, progress::derive_focus};
///
/// let step = |day, completed| QuestStep {
///     day,
///     task_title: format!("Day {day}"),
///     task_description: String::new(),
///     duration: "1h".to_string(),
///     xp: 10,
///     completed,
/// };
/// let view = derive_focus(&[step(1, true), step(2, false), step(3, false)]);
///
/// assert_eq!(view.todays_step.map(|s| s.day), Some(2));
/// assert_eq!(view.tomorrows_step.map(|s| s.day), Some(3));
/// assert_eq!(view.overall_progress, 33);
/// assert_eq!(view.total_xp, 30);
/// ```
pub fn derive_focus(plan: &[QuestStep]) -> FocusView {
    let (todays_step, tomorrows_step, missed_steps) =
        match plan.iter().position(|step| !step.completed) {
            Some(i) => (
                Some(plan[i].clone()),
                plan.get(i + 1).cloned(),
                plan[..i]
                    .iter()
                    .filter(|step| !step.completed)
                    .cloned()
                    .collect(),
            ),
            None => (None, None, Vec::new()),
        };

    FocusView {
        todays_step,
        tomorrows_step,
        missed_steps,
        overall_progress: overall_progress(plan),
        is_fully_completed: is_fully_completed(plan),
        total_xp: total_xp(plan),
    }
}

/// Number of completed steps.
pub fn completed_count(plan: &[QuestStep]) -> usize {
    plan.iter().filter(|step| step.completed).count()
}

/// Completion percentage rounded half up, `0` for an empty plan.
pub fn overall_progress(plan: &[QuestStep]) -> u8 {
    let total = plan.len() as u64;
    if total == 0 {
        return 0;
    }
    let completed = completed_count(plan) as u64;

    // round(100 * c / t) with halves rounding up, in integers
    ((200 * completed + total) / (2 * total)) as u8
}

/// Sum of XP over every step regardless of completion.
pub fn total_xp(plan: &[QuestStep]) -> u64 {
    plan.iter().map(|step| u64::from(step.xp)).sum()
}

/// Sum of XP over completed steps.
pub fn earned_xp(plan: &[QuestStep]) -> u64 {
    plan.iter()
        .filter(|step| step.completed)
        .map(|step| u64::from(step.xp))
        .sum()
}

/// True when the plan is non-empty and every step is done.
pub fn is_fully_completed(plan: &[QuestStep]) -> bool {
    !plan.is_empty() && overall_progress(plan) == 100
}

/// Picks a category label by sniffing keywords in the title and the original
/// goal description.
pub fn classify_kind(title: &str, metadata: &QuestMetadata) -> QuestKind {
    let mut text = title.to_lowercase();
    if let Some(description) = &metadata.original_description {
        text.push(' ');
        text.push_str(&description.to_lowercase());
    }

    let mentions = |words: &[&str]| words.iter().any(|word| text.contains(word));

    if mentions(&["daily", "every day", "each day"]) {
        QuestKind::Daily
    } else if mentions(&["weekly", "every week", "each week"]) {
        QuestKind::Weekly
    } else if mentions(&["read", "learn", "study", "course", "book"]) {
        QuestKind::Knowledge
    } else {
        QuestKind::Plan
    }
}

/// Buckets a plan into a difficulty by its number of steps.
pub fn classify_difficulty(plan: &[QuestStep]) -> Difficulty {
    match plan.len() {
        0..=3 => Difficulty::Easy,
        4..=7 => Difficulty::Medium,
        _ => Difficulty::Hard,
    }
}
