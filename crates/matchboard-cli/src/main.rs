mod render;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use matchboard_client::MatchesClient;
use matchboard_core::{AppConfig, MatchInterpreter, MatchRecord, SelectionMode, TeamLabel};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "matchboard")]
#[command(about = "Club match board: recent form, fixtures and results")]
struct Cli {
    /// Club whose point of view decides win/loss/draw (overrides MATCHBOARD_CLUB_NAME)
    #[arg(long, global = true)]
    club: Option<String>,
    /// Scores API base URL (overrides MATCHBOARD_API_BASE_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,
    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    /// Trust the match status only
    Status,
    /// Also compare match dates with the current time
    TimeGated,
}

impl From<PolicyArg> for SelectionMode {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Status => SelectionMode::StatusOnly,
            PolicyArg::TimeGated => SelectionMode::TimeGated,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Recent form plus next and last match per squad
    Home {
        /// Squad to show; repeatable (defaults to premiere and reserve)
        #[arg(long = "team")]
        teams: Vec<String>,
        /// Next/last selection policy (overrides MATCHBOARD_SELECTION_POLICY)
        #[arg(long, value_enum)]
        policy: Option<PolicyArg>,
        /// Number of results in the form line (overrides MATCHBOARD_FORM_LIMIT)
        #[arg(long)]
        form_limit: Option<usize>,
    },
    /// Every match per squad in chronological order
    Results {
        /// Squad to show; repeatable (defaults to premiere and reserve)
        #[arg(long = "team")]
        teams: Vec<String>,
    },
}

#[derive(Debug, Serialize)]
struct Report<T: Serialize> {
    club: String,
    teams: Vec<T>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = matchboard_core::load_app_config_with_overrides(&cli_overrides(&cli))?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?config, "configuration loaded");

    let command = cli.command.unwrap_or(Commands::Home {
        teams: Vec::new(),
        policy: None,
        form_limit: None,
    });

    match command {
        Commands::Home { teams, .. } => {
            let teams = resolve_teams(&teams)?;
            let records = load_matches(&config)
                .await
                .context("could not load match data (API or network unavailable)")?;
            let interpreter = MatchInterpreter::from_config(&config);
            let summaries: Vec<_> = teams
                .iter()
                .map(|team| interpreter.summary(&records, team))
                .collect();
            match cli.format {
                OutputFormat::Text => {
                    print!("{}", render::render_home(&summaries, &chrono::Local)?);
                }
                OutputFormat::Json => print_json(&config, summaries)?,
            }
        }
        Commands::Results { teams } => {
            let teams = resolve_teams(&teams)?;
            let records = load_matches(&config)
                .await
                .context("could not load the match list")?;
            let interpreter = MatchInterpreter::from_config(&config);
            let tables: Vec<_> = teams
                .iter()
                .map(|team| interpreter.fixtures(&records, team))
                .collect();
            match cli.format {
                OutputFormat::Text => {
                    print!("{}", render::render_results(&tables, &chrono::Local)?);
                }
                OutputFormat::Json => print_json(&config, tables)?,
            }
        }
    }

    Ok(())
}

/// Command-line values that replace the matching environment variables.
///
/// Blank `--club`/`--api-url` values are skipped so the env or default applies.
fn cli_overrides(cli: &Cli) -> Vec<(&'static str, String)> {
    let mut overrides = Vec::new();
    if let Some(club) = cli.club.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        overrides.push(("MATCHBOARD_CLUB_NAME", club.to_string()));
    }
    if let Some(url) = cli.api_url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
        overrides.push(("MATCHBOARD_API_BASE_URL", url.to_string()));
    }
    if let Some(Commands::Home {
        policy, form_limit, ..
    }) = &cli.command
    {
        if let Some(policy) = policy {
            overrides.push((
                "MATCHBOARD_SELECTION_POLICY",
                SelectionMode::from(*policy).to_string(),
            ));
        }
        if let Some(limit) = form_limit {
            overrides.push(("MATCHBOARD_FORM_LIMIT", limit.to_string()));
        }
    }
    overrides
}

/// Maps `--team` arguments to squad labels, defaulting to both squads.
fn resolve_teams(raw: &[String]) -> anyhow::Result<Vec<TeamLabel>> {
    if raw.is_empty() {
        return Ok(vec![TeamLabel::Premiere, TeamLabel::Reserve]);
    }
    raw.iter()
        .map(|t| {
            TeamLabel::classify(t).ok_or_else(|| anyhow::anyhow!("team name must not be blank"))
        })
        .collect()
}

async fn load_matches(config: &AppConfig) -> anyhow::Result<Vec<MatchRecord>> {
    let client = MatchesClient::from_config(config)?;
    match client.fetch_matches().await {
        Ok(records) => Ok(records),
        Err(e) => {
            tracing::error!(error = %e, url = %client.matches_url(), "match fetch failed");
            Err(e.into())
        }
    }
}

fn print_json<T: Serialize>(config: &AppConfig, teams: Vec<T>) -> anyhow::Result<()> {
    let report = Report {
        club: config.club_name.clone(),
        teams,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[cfg(test)]
mod tests;
