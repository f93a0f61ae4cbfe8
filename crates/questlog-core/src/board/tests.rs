//! Tests for the board module.

use std::sync::Mutex as StdMutex;

use super::*;
use crate::{
    error::{QuestError, Result},
    intake::{RawPlan, RawStep},
    params::{CreateQuest, Id, ImportQuest, ToggleStep},
};

/// Plan source answering with a canned result and recording requests.
struct FakePlanner {
    response: StdMutex<Option<Result<RawPlan>>>,
    requests: StdMutex<Vec<CreateQuest>>,
}

impl FakePlanner {
    fn answering(response: Result<RawPlan>) -> Self {
        Self {
            response: StdMutex::new(Some(response)),
            requests: StdMutex::new(Vec::new()),
        }
    }
}

impl PlanSource for FakePlanner {
    async fn fetch_plan(&self, request: &CreateQuest) -> Result<RawPlan> {
        self.requests.lock().unwrap().push(request.clone());
        self.response
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(QuestError::plan_fetch("no more canned responses")))
    }
}

fn raw_step(day: Option<u32>, xp: u32) -> RawStep {
    RawStep {
        day,
        task_title: format!("Task {xp}"),
        task_description: "Generated".to_string(),
        duration: "1 hour".to_string(),
        xp,
        completed: None,
    }
}

fn novel_plan() -> RawPlan {
    RawPlan {
        quest_title: "Write a Novel".to_string(),
        plan: vec![raw_step(Some(1), 50), raw_step(Some(2), 40), raw_step(Some(3), 75)],
    }
}

fn create_params() -> CreateQuest {
    CreateQuest {
        title: "novel".to_string(),
        description: "Finish a first draft".to_string(),
        target_date: "2026-12-31".to_string(),
        use_ai: true,
    }
}

#[tokio::test]
async fn test_create_quest_from_planner() {
    let board = QuestBoardBuilder::new().build_with_source(FakePlanner::answering(Ok(novel_plan())));

    let quest = board.create_quest(&create_params()).await.expect("create quest");

    assert_eq!(quest.quest_title, "Write a Novel");
    assert_eq!(quest.plan.len(), 3);
    assert!(quest.plan.iter().all(|s| !s.completed));
    assert_eq!(
        quest.metadata.original_description.as_deref(),
        Some("Finish a first draft")
    );
    assert_eq!(quest.metadata.target_date.as_deref(), Some("2026-12-31"));

    let requests = board.source().requests.lock().unwrap().clone();
    assert_eq!(requests, vec![create_params()]);
}

#[tokio::test]
async fn test_create_quest_falls_back_to_form_title() {
    let plan = RawPlan {
        quest_title: "  ".to_string(),
        ..novel_plan()
    };
    let board = QuestBoard::with_source(FakePlanner::answering(Ok(plan)));

    let quest = board.create_quest(&create_params()).await.unwrap();
    assert_eq!(quest.quest_title, "novel");
}

#[tokio::test]
async fn test_fetch_failure_creates_nothing() {
    let board = QuestBoard::with_source(FakePlanner::answering(Err(QuestError::plan_fetch(
        "HTTP error! status: 503",
    ))));

    let error = board.create_quest(&create_params()).await.unwrap_err();
    assert!(error.is_plan_fetch());
    assert!(error.to_string().contains("HTTP error! status: 503"));
    assert!(board.list_quests().await.is_empty());
}

#[tokio::test]
async fn test_rejected_plan_creates_nothing() {
    let plan = RawPlan {
        quest_title: "Broken".to_string(),
        plan: vec![raw_step(Some(1), 10), raw_step(Some(1), 20)],
    };
    let board = QuestBoard::with_source(FakePlanner::answering(Ok(plan)));

    let error = board.create_quest(&create_params()).await.unwrap_err();
    assert!(matches!(error, QuestError::InvalidInput { .. }));
    assert!(board.list_quests().await.is_empty());
}

#[tokio::test]
async fn test_import_quest_applies_defaults() {
    let board = QuestBoard::with_source(FakePlanner::answering(Ok(RawPlan::default())));

    let quest = board
        .import_quest(&ImportQuest {
            title: "Garden".to_string(),
            plan: vec![raw_step(None, 5), raw_step(None, 15)],
            original_description: None,
            target_date: None,
        })
        .await
        .unwrap();

    let days: Vec<u32> = quest.plan.iter().map(|s| s.day).collect();
    assert_eq!(days, vec![1, 2]);
    assert!(board.source().requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_is_most_recent_first() {
    let board = QuestBoard::with_source(FakePlanner::answering(Ok(RawPlan::default())));
    for title in ["First", "Second", "Third"] {
        board
            .import_quest(&ImportQuest {
                title: title.to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
    }

    let titles: Vec<String> = board
        .list_quests()
        .await
        .into_iter()
        .map(|q| q.quest_title)
        .collect();
    assert_eq!(titles, vec!["Third", "Second", "First"]);

    let summaries = board.list_summaries().await;
    assert_eq!(summaries.len(), 3);
    assert_eq!(summaries[0].title, "Third");
}

#[tokio::test]
async fn test_toggle_and_focus_roundtrip() {
    let board = QuestBoard::with_source(FakePlanner::answering(Ok(novel_plan())));
    let quest = board.create_quest(&create_params()).await.unwrap();
    let id = Id {
        id: quest.id.to_string(),
    };

    let toggled = board
        .toggle_step(&ToggleStep {
            quest_id: quest.id.to_string(),
            day: 1,
        })
        .await
        .expect("day 1 exists");
    assert!(toggled.completed);

    let focus = board.focus(&id).await.unwrap();
    assert_eq!(focus.overall_progress, 33);
    assert_eq!(focus.todays_step.map(|s| s.day), Some(2));
    assert_eq!(focus.tomorrows_step.map(|s| s.day), Some(3));

    let toggled_back = board
        .toggle_step(&ToggleStep {
            quest_id: quest.id.to_string(),
            day: 1,
        })
        .await
        .unwrap();
    assert!(!toggled_back.completed);
    assert_eq!(board.get_quest(&id).await.unwrap(), quest);
}

#[tokio::test]
async fn test_toggle_unknown_targets_leave_board_unchanged() {
    let board = QuestBoard::with_source(FakePlanner::answering(Ok(novel_plan())));
    let quest = board.create_quest(&create_params()).await.unwrap();
    let before = board.list_quests().await;

    let missing_quest = board
        .toggle_step(&ToggleStep {
            quest_id: "quest-unknown".to_string(),
            day: 1,
        })
        .await;
    let missing_day = board
        .toggle_step(&ToggleStep {
            quest_id: quest.id.to_string(),
            day: 9,
        })
        .await;

    assert!(missing_quest.is_none());
    assert!(missing_day.is_none());
    assert_eq!(board.list_quests().await, before);
}

#[tokio::test]
async fn test_clones_share_the_session() {
    let board = QuestBoard::with_source(FakePlanner::answering(Ok(RawPlan::default())));
    let other = board.clone();

    other
        .import_quest(&ImportQuest {
            title: "Shared".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(board.list_quests().await.len(), 1);
}

#[tokio::test]
async fn test_focus_and_get_for_unknown_quest() {
    let board = QuestBoard::with_source(FakePlanner::answering(Ok(RawPlan::default())));
    let id = Id {
        id: "quest-nope".to_string(),
    };
    assert!(board.focus(&id).await.is_none());
    assert!(board.get_quest(&id).await.is_none());
}

#[test]
fn test_builder_overrides_config() {
    let config = QuestBoardBuilder::new()
        .with_config(crate::config::BoardConfig::default())
        .with_planner_url(Some("http://planner.test/plan"))
        .with_timeout_secs(3)
        .resolve_config()
        .unwrap();
    assert_eq!(config.planner_url, "http://planner.test/plan");
    assert_eq!(config.timeout_secs, 3);
}
