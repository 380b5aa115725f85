//! Configured entry point for the home and results views.

use serde::Serialize;

use crate::app_config::{AppConfig, SelectionMode};
use crate::interpret::{
    recent_form, select_next_and_last, team_fixtures, FormEntry, SelectionPolicy, TeamLabel,
    DEFAULT_FORM_LIMIT,
};
use crate::record::MatchRecord;

/// Everything the home view shows for one squad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamSummary<'a> {
    pub team: TeamLabel,
    pub form: Vec<FormEntry<'a>>,
    pub next: Option<&'a MatchRecord>,
    pub last: Option<&'a MatchRecord>,
}

/// Everything the results view shows for one squad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamFixtures<'a> {
    pub team: TeamLabel,
    pub matches: Vec<&'a MatchRecord>,
}

/// Match interpretation bound to a club and a selection policy.
#[derive(Debug, Clone)]
pub struct MatchInterpreter {
    club_name: String,
    policy: SelectionPolicy,
    form_limit: usize,
}

impl MatchInterpreter {
    #[must_use]
    pub fn new(club_name: impl Into<String>) -> Self {
        Self {
            club_name: club_name.into(),
            policy: SelectionPolicy::default(),
            form_limit: DEFAULT_FORM_LIMIT,
        }
    }

    /// Builds an interpreter from loaded configuration.
    ///
    /// A time-gated policy is pinned to the current instant at construction.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let policy = match config.selection_mode {
            SelectionMode::StatusOnly => SelectionPolicy::StatusOnly,
            SelectionMode::TimeGated => SelectionPolicy::TimeGated {
                now: chrono::Utc::now(),
            },
        };
        Self::new(config.club_name.clone())
            .with_policy(policy)
            .with_form_limit(config.form_limit)
    }

    #[must_use]
    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_form_limit(mut self, form_limit: usize) -> Self {
        self.form_limit = form_limit;
        self
    }

    #[must_use]
    pub fn club_name(&self) -> &str {
        &self.club_name
    }

    #[must_use]
    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    #[must_use]
    pub fn summary<'a>(&self, records: &'a [MatchRecord], team: &TeamLabel) -> TeamSummary<'a> {
        let selected = select_next_and_last(records, team, self.policy);
        TeamSummary {
            team: team.clone(),
            form: recent_form(records, team, &self.club_name, self.form_limit),
            next: selected.next,
            last: selected.last,
        }
    }

    #[must_use]
    pub fn fixtures<'a>(&self, records: &'a [MatchRecord], team: &TeamLabel) -> TeamFixtures<'a> {
        TeamFixtures {
            team: team.clone(),
            matches: team_fixtures(records, team),
        }
    }
}
