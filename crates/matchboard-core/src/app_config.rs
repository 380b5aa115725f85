use std::fmt;

/// How the home view picks next/last matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Trust the match `status` field only.
    #[default]
    StatusOnly,
    /// Also compare match dates against the current time.
    TimeGated,
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMode::StatusOnly => write!(f, "status"),
            SelectionMode::TimeGated => write!(f, "time-gated"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Scores API root; matches are read from `{api_base_url}/api/matches`.
    pub api_base_url: String,
    /// The club whose point of view decides win/loss/draw.
    pub club_name: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub selection_mode: SelectionMode,
    pub form_limit: usize,
}
