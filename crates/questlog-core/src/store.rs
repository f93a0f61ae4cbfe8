//! In-memory quest store.
//!
//! [`QuestStore`] owns the session's quests and is the only writer of a
//! step's `completed` flag. It is a plain struct with no interior locking;
//! callers that share it across tasks wrap it the way
//! [`crate::board::QuestBoard`] does.

use jiff::Timestamp;
use log::debug;

use crate::models::{Quest, QuestId, QuestMetadata, QuestStep};

/// Collection of active quests, most recently created first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestStore {
    quests: Vec<Quest>,
}

impl QuestStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new quest in front of the existing ones and returns it.
    ///
    /// The plan is taken as already normalized; see [`crate::intake`].
    pub fn create(
        &mut self,
        title: impl Into<String>,
        plan: Vec<QuestStep>,
        metadata: QuestMetadata,
    ) -> Quest {
        let quest = Quest {
            id: QuestId::generate(),
            quest_title: title.into(),
            plan,
            created_at: Timestamp::now(),
            metadata,
        };

        debug!(
            "created quest {} with {} steps",
            quest.id,
            quest.plan.len()
        );
        self.quests.insert(0, quest.clone());
        quest
    }

    /// Flips `completed` on the step identified by `(quest_id, day)`.
    ///
    /// An unknown quest or day leaves the store untouched. The quest is
    /// replaced by a new value rather than edited in place.
    pub fn toggle_step(&mut self, quest_id: &QuestId, day: u32) {
        let Some(index) = self.quests.iter().position(|q| &q.id == quest_id) else {
            debug!("toggle ignored: no quest {quest_id}");
            return;
        };

        let current = &self.quests[index];
        if current.step(day).is_none() {
            debug!("toggle ignored: quest {quest_id} has no day {day}");
            return;
        }

        let replacement = Quest {
            plan: current
                .plan
                .iter()
                .map(|step| {
                    if step.day == day {
                        step.toggled()
                    } else {
                        step.clone()
                    }
                })
                .collect(),
            ..current.clone()
        };
        self.quests[index] = replacement;
    }

    /// Returns the quests, most recent first.
    pub fn list(&self) -> &[Quest] {
        &self.quests
    }

    /// Looks up a quest by ID.
    pub fn get(&self, quest_id: &QuestId) -> Option<&Quest> {
        self.quests.iter().find(|q| &q.id == quest_id)
    }

    /// Number of stored quests.
    pub fn len(&self) -> usize {
        self.quests.len()
    }

    /// Whether the store holds no quest.
    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::derive_focus;

    fn step(day: u32, xp: u32) -> QuestStep {
        QuestStep {
            day,
            task_title: format!("Task {day}"),
            task_description: String::new(),
            duration: "30 minutes".to_string(),
            xp,
            completed: false,
        }
    }

    fn seeded_store() -> (QuestStore, QuestId) {
        let mut store = QuestStore::new();
        let quest = store.create(
            "Write a novel",
            vec![step(1, 50), step(2, 40), step(3, 75)],
            QuestMetadata {
                original_description: Some("Finish the first draft".to_string()),
                target_date: Some("2026-12-01".to_string()),
            },
        );
        (store, quest.id)
    }

    #[test]
    fn test_create_prepends() {
        let mut store = QuestStore::new();
        let first = store.create("First", vec![], QuestMetadata::default());
        let second = store.create("Second", vec![], QuestMetadata::default());

        let ids: Vec<&QuestId> = store.list().iter().map(|q| &q.id).collect();
        assert_eq!(ids, vec![&second.id, &first.id]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_create_allocates_unique_ids() {
        let mut store = QuestStore::new();
        let mut ids: Vec<QuestId> = (0..200)
            .map(|i| store.create(format!("Quest {i}"), vec![], QuestMetadata::default()).id)
            .collect();
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        ids.dedup();
        assert_eq!(ids.len(), 200);
    }

    #[test]
    fn test_create_keeps_metadata() {
        let (store, id) = seeded_store();
        let quest = store.get(&id).expect("quest exists");
        assert_eq!(quest.metadata.target_date.as_deref(), Some("2026-12-01"));
        assert_eq!(quest.plan.len(), 3);
    }

    #[test]
    fn test_toggle_flips_only_the_addressed_step() {
        let (mut store, id) = seeded_store();
        store.toggle_step(&id, 2);

        let quest = store.get(&id).unwrap();
        let flags: Vec<bool> = quest.plan.iter().map(|s| s.completed).collect();
        assert_eq!(flags, vec![false, true, false]);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let (mut store, id) = seeded_store();
        let before = store.clone();

        store.toggle_step(&id, 1);
        assert_ne!(store, before);
        store.toggle_step(&id, 1);
        assert_eq!(store, before);
    }

    #[test]
    fn test_toggle_unknown_quest_is_noop() {
        let (mut store, _) = seeded_store();
        let before = store.clone();
        store.toggle_step(&QuestId::from("quest-missing"), 1);
        assert_eq!(store, before);
    }

    #[test]
    fn test_toggle_unknown_day_is_noop() {
        let (mut store, id) = seeded_store();
        let before = store.clone();
        store.toggle_step(&id, 42);
        assert_eq!(store, before);
    }

    #[test]
    fn test_toggle_keeps_identity_and_creation_time() {
        let (mut store, id) = seeded_store();
        let created_at = store.get(&id).unwrap().created_at;
        store.toggle_step(&id, 3);
        let quest = store.get(&id).unwrap();
        assert_eq!(quest.id, id);
        assert_eq!(quest.created_at, created_at);
        assert_eq!(store.list()[0].id, id);
    }

    #[test]
    fn test_end_to_end_progression() {
        let (mut store, id) = seeded_store();
        let focus = |store: &QuestStore| derive_focus(&store.get(&id).unwrap().plan);

        let view = focus(&store);
        assert_eq!(view.overall_progress, 0);
        assert_eq!(view.todays_step.as_ref().map(|s| s.day), Some(1));
        assert_eq!(view.tomorrows_step.as_ref().map(|s| s.day), Some(2));
        assert_eq!(view.total_xp, 165);

        store.toggle_step(&id, 1);
        let view = focus(&store);
        assert_eq!(view.overall_progress, 33);
        assert_eq!(view.todays_step.as_ref().map(|s| s.day), Some(2));
        assert_eq!(view.tomorrows_step.as_ref().map(|s| s.day), Some(3));

        store.toggle_step(&id, 2);
        let view = focus(&store);
        assert_eq!(view.overall_progress, 67);
        assert_eq!(view.todays_step.as_ref().map(|s| s.day), Some(3));
        assert!(view.tomorrows_step.is_none());

        store.toggle_step(&id, 3);
        let view = focus(&store);
        assert_eq!(view.overall_progress, 100);
        assert!(view.is_fully_completed);
        assert!(view.todays_step.is_none());
        assert!(view.missed_steps.is_empty());
    }
}
