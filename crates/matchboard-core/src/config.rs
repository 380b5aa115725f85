use crate::app_config::{AppConfig, SelectionMode};
use crate::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "https://apiscore-vv2y.onrender.com";
pub const DEFAULT_CLUB_NAME: &str = "Bidart";
pub const DEFAULT_USER_AGENT: &str = "matchboard/0.1 (match-board)";

/// Load application configuration from environment variables, letting
/// `overrides` shadow them.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files first. A variable
/// named in `overrides` is never read from the environment, so an invalid
/// env value is ignored when an override replaces it.
///
/// # Errors
///
/// Returns `ConfigError` if a remaining variable holds an invalid value.
pub fn load_app_config_with_overrides(
    overrides: &[(&str, String)],
) -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_app_config(with_overrides(overrides, |key| std::env::var(key)))
}

/// Wraps an env-var lookup so keys present in `overrides` win.
pub fn with_overrides<'a, F>(
    overrides: &'a [(&'a str, String)],
    fallback: F,
) -> impl Fn(&str) -> Result<String, std::env::VarError> + 'a
where
    F: Fn(&str) -> Result<String, std::env::VarError> + 'a,
{
    move |key| {
        overrides
            .iter()
            .find(|(var, _)| *var == key)
            .map_or_else(|| fallback(key), |(_, value)| Ok(value.clone()))
    }
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; the lookup is injected so tests can pass a
/// plain `HashMap` instead of touching the process environment.
///
/// # Errors
///
/// Returns `ConfigError` if a variable holds an invalid value.
pub fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let non_blank = |var: &str, default: &str| -> Result<String, ConfigError> {
        let value = or_default(var, default);
        if value.trim().is_empty() {
            return Err(invalid(var, "must not be blank".to_string()));
        }
        Ok(value.trim().to_string())
    };

    let log_level = or_default("MATCHBOARD_LOG_LEVEL", "info");

    let api_base_url = non_blank("MATCHBOARD_API_BASE_URL", DEFAULT_API_BASE_URL)?;
    let club_name = non_blank("MATCHBOARD_CLUB_NAME", DEFAULT_CLUB_NAME)?;

    let request_timeout_secs = parse_u64("MATCHBOARD_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("MATCHBOARD_USER_AGENT", DEFAULT_USER_AGENT);

    let selection_mode = parse_selection_mode(&or_default("MATCHBOARD_SELECTION_POLICY", "status"))
        .ok_or_else(|| {
            invalid(
                "MATCHBOARD_SELECTION_POLICY",
                "expected `status` or `time-gated`".to_string(),
            )
        })?;

    let form_limit = parse_usize("MATCHBOARD_FORM_LIMIT", "5")?;

    Ok(AppConfig {
        log_level,
        api_base_url,
        club_name,
        request_timeout_secs,
        user_agent,
        selection_mode,
        form_limit,
    })
}

/// Parse a selection policy name. Returns `None` for unknown names.
#[must_use]
pub fn parse_selection_mode(s: &str) -> Option<SelectionMode> {
    match s.trim().to_ascii_lowercase().as_str() {
        "status" | "status-only" => Some(SelectionMode::StatusOnly),
        "time-gated" | "time" => Some(SelectionMode::TimeGated),
        _ => None,
    }
}
