//! Match interpretation for a club scoreboard.
//!
//! Pure functions over loosely shaped match records: team-label
//! normalization, club results, next/last selection and recent form.

pub mod app_config;
pub mod config;
pub mod dates;
pub mod interpret;
pub mod normalize;
pub mod record;
pub mod summary;

use thiserror::Error;

pub use app_config::{AppConfig, SelectionMode};
pub use config::{
    build_app_config, load_app_config_with_overrides, parse_selection_mode, with_overrides,
};
pub use dates::{format_match_date, parse_match_date};
pub use interpret::{
    club_result, format_score, normalized_status, recent_form, resolve_team_label,
    select_next_and_last, team_fixtures, ClubResult, FormEntry, NextAndLast, SelectionPolicy,
    TeamLabel, DEFAULT_FORM_LIMIT,
};
pub use normalize::normalize_text;
pub use record::MatchRecord;
pub use summary::{MatchInterpreter, TeamFixtures, TeamSummary};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
