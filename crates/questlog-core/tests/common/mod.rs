use questlog_core::{
    CreateQuest, PlanSource, QuestBoard, QuestBoardBuilder, QuestError, RawPlan, RawStep, Result,
};

/// Plan source that always returns a fixed plan, or always fails.
pub struct CannedPlanner {
    pub plan: Option<RawPlan>,
}

impl PlanSource for CannedPlanner {
    async fn fetch_plan(&self, _request: &CreateQuest) -> Result<RawPlan> {
        self.plan
            .clone()
            .ok_or_else(|| QuestError::plan_fetch("planner offline"))
    }
}

/// Helper function to create a board whose planner returns `plan`.
pub fn create_test_board(plan: Option<RawPlan>) -> QuestBoard<CannedPlanner> {
    QuestBoardBuilder::new().build_with_source(CannedPlanner { plan })
}

/// The three-step plan used across the end-to-end tests.
pub fn novel_plan() -> RawPlan {
    let step = |day: u32, title: &str, xp: u32| RawStep {
        day: Some(day),
        task_title: title.to_string(),
        task_description: format!("{title} for the novel"),
        duration: "1 hour".to_string(),
        xp,
        completed: Some(false),
    };

    RawPlan {
        quest_title: "Write a Novel".to_string(),
        plan: vec![step(1, "Outline", 50), step(2, "Draft", 40), step(3, "Revise", 75)],
    }
}

pub fn create_params() -> CreateQuest {
    CreateQuest {
        title: "Novel".to_string(),
        description: "Write the first draft of a novel".to_string(),
        target_date: "2026-12-31".to_string(),
        use_ai: true,
    }
}
