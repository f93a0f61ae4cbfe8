//! Builder for creating and configuring QuestBoard instances.

use super::QuestBoard;
use crate::{
    config::BoardConfig,
    error::Result,
    source::{HttpPlanSource, PlanSource},
};

/// Builder for creating and configuring QuestBoard instances.
#[derive(Debug, Clone, Default)]
pub struct QuestBoardBuilder {
    config: Option<BoardConfig>,
    planner_url: Option<String>,
    timeout_secs: Option<u64>,
}

impl QuestBoardBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the given configuration instead of loading one.
    pub fn with_config(mut self, config: BoardConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Overrides the planner endpoint.
    ///
    /// If not specified, the endpoint comes from `QUESTLOG_PLANNER_URL`,
    /// then `$XDG_CONFIG_HOME/questlog/config.json`, then the built-in
    /// default.
    pub fn with_planner_url<U: Into<String>>(mut self, url: Option<U>) -> Self {
        if let Some(url) = url {
            self.planner_url = Some(url.into());
        }
        self
    }

    /// Overrides the planner request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Resolves the effective configuration.
    ///
    /// # Errors
    ///
    /// Returns `QuestError::Configuration` or `QuestError::FileSystem` if
    /// the config file exists but cannot be used.
    pub fn resolve_config(&self) -> Result<BoardConfig> {
        let mut config = match &self.config {
            Some(config) => config.clone(),
            None => BoardConfig::load()?,
        };

        if let Some(url) = &self.planner_url {
            config.planner_url = url.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout_secs = secs;
        }

        Ok(config)
    }

    /// Builds a board talking to the HTTP planner.
    ///
    /// # Errors
    ///
    /// See [`QuestBoardBuilder::resolve_config`] and [`HttpPlanSource::new`].
    pub fn build(self) -> Result<QuestBoard<HttpPlanSource>> {
        let config = self.resolve_config()?;
        let source = HttpPlanSource::new(&config)?;
        Ok(QuestBoard::with_source(source))
    }

    /// Builds a board around a caller-supplied plan source. Configuration is
    /// not consulted.
    pub fn build_with_source<S: PlanSource>(self, source: S) -> QuestBoard<S> {
        QuestBoard::with_source(source)
    }
}
