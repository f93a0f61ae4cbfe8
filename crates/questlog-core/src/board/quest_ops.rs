//! Quest operations for the QuestBoard.

use log::{info, warn};

use super::QuestBoard;
use crate::{
    display::QuestSummaries,
    error::Result,
    intake,
    models::{FocusView, Quest, QuestId, QuestStep, QuestSummary},
    params::{CreateQuest, Id, ImportQuest, ToggleStep},
    progress,
    source::PlanSource,
};

impl<S: PlanSource> QuestBoard<S> {
    /// Fetches a plan for the goal and creates a quest from it.
    ///
    /// The store is only touched once the plan has been fetched and
    /// prepared, so any failure leaves the board unchanged.
    ///
    /// # Errors
    ///
    /// * `QuestError::PlanFetch` - When the planner call fails
    /// * `QuestError::InvalidInput` - When the plan's day numbering is broken
    pub async fn create_quest(&self, params: &CreateQuest) -> Result<Quest> {
        let raw = self.source.fetch_plan(params).await.inspect_err(|e| {
            warn!("quest '{}' not created: {e}", params.title);
        })?;

        let steps = intake::prepare(raw.plan)?;
        let title = if raw.quest_title.trim().is_empty() {
            params.title.clone()
        } else {
            raw.quest_title
        };

        let quest = self.store.lock().await.create(title, steps, params.metadata());
        info!("created quest {} ({} steps)", quest.id, quest.plan.len());
        Ok(quest)
    }

    /// Creates a quest from a plan supplied by the caller.
    ///
    /// # Errors
    ///
    /// * `QuestError::InvalidInput` - When the plan's day numbering is broken
    pub async fn import_quest(&self, params: &ImportQuest) -> Result<Quest> {
        let steps = intake::prepare(params.plan.clone())?;
        let quest = self
            .store
            .lock()
            .await
            .create(params.title.clone(), steps, params.metadata());
        info!("imported quest {} ({} steps)", quest.id, quest.plan.len());
        Ok(quest)
    }

    /// Flips one step and returns it as it is now, or `None` when the quest
    /// or day does not exist.
    pub async fn toggle_step(&self, params: &ToggleStep) -> Option<QuestStep> {
        let quest_id = QuestId::from(params.quest_id.as_str());
        let mut store = self.store.lock().await;

        store.toggle_step(&quest_id, params.day);
        store
            .get(&quest_id)
            .and_then(|quest| quest.step(params.day))
            .cloned()
    }

    /// All quests, most recent first.
    pub async fn list_quests(&self) -> Vec<Quest> {
        self.store.lock().await.list().to_vec()
    }

    /// Summaries of all quests, most recent first.
    pub async fn list_summaries(&self) -> QuestSummaries {
        let store = self.store.lock().await;
        QuestSummaries(store.list().iter().map(QuestSummary::from).collect())
    }

    /// Looks up one quest.
    pub async fn get_quest(&self, params: &Id) -> Option<Quest> {
        let quest_id = QuestId::from(params.id.as_str());
        self.store.lock().await.get(&quest_id).cloned()
    }

    /// Derives the focus view of one quest.
    pub async fn focus(&self, params: &Id) -> Option<FocusView> {
        let quest_id = QuestId::from(params.id.as_str());
        self.store
            .lock()
            .await
            .get(&quest_id)
            .map(|quest| progress::derive_focus(&quest.plan))
    }
}
