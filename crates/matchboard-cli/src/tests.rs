use std::collections::HashMap;
use std::env::VarError;

use matchboard_core::{build_app_config, with_overrides, ConfigError};

use super::*;

fn config_from(cli: &Cli, env: &HashMap<&str, &str>) -> Result<AppConfig, ConfigError> {
    let overrides = cli_overrides(cli);
    build_app_config(with_overrides(&overrides, |key| {
        env.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }))
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["matchboard"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
    assert_eq!(cli.format, OutputFormat::Text);
}

#[test]
fn parses_home_with_defaults() {
    let cli = Cli::try_parse_from(["matchboard", "home"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Home {
            ref teams,
            policy: None,
            form_limit: None
        }) if teams.is_empty()
    ));
}

#[test]
fn parses_home_with_repeated_teams_and_policy() {
    let cli = Cli::try_parse_from([
        "matchboard",
        "home",
        "--team",
        "premiere",
        "--team",
        "Vétérans",
        "--policy",
        "time-gated",
        "--form-limit",
        "3",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Home {
            ref teams,
            policy: Some(PolicyArg::TimeGated),
            form_limit: Some(3)
        }) if teams == &["premiere".to_string(), "Vétérans".to_string()]
    ));
}

#[test]
fn parses_results_with_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "matchboard",
        "results",
        "--format",
        "json",
        "--club",
        "Anglet",
    ])
    .expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Results { ref teams }) if teams.is_empty()));
    assert_eq!(cli.format, OutputFormat::Json);
    assert_eq!(cli.club.as_deref(), Some("Anglet"));
}

#[test]
fn rejects_unknown_policy() {
    let result = Cli::try_parse_from(["matchboard", "home", "--policy", "whenever"]);
    assert!(result.is_err());
}

#[test]
fn overrides_replace_config_values() {
    let cli = Cli::try_parse_from([
        "matchboard",
        "--club",
        " Anglet ",
        "--api-url",
        "http://localhost:9000",
        "home",
        "--policy",
        "time-gated",
        "--form-limit",
        "2",
    ])
    .expect("expected valid cli args");
    let mut env = HashMap::new();
    env.insert("MATCHBOARD_CLUB_NAME", "Bidart");
    env.insert("MATCHBOARD_FORM_LIMIT", "5");
    let config = config_from(&cli, &env).expect("valid config");
    assert_eq!(config.club_name, "Anglet");
    assert_eq!(config.api_base_url, "http://localhost:9000");
    assert_eq!(config.selection_mode, SelectionMode::TimeGated);
    assert_eq!(config.form_limit, 2);
}

#[test]
fn blank_overrides_are_ignored() {
    let cli = Cli::try_parse_from(["matchboard", "--club", "  ", "results"])
        .expect("expected valid cli args");
    let mut env = HashMap::new();
    env.insert("MATCHBOARD_CLUB_NAME", "Anglet");
    let config = config_from(&cli, &env).expect("valid config");
    assert_eq!(config.club_name, "Anglet");
}

#[test]
fn form_limit_flag_replaces_invalid_env_value() {
    let cli = Cli::try_parse_from(["matchboard", "home", "--form-limit", "3"])
        .expect("expected valid cli args");
    let mut env = HashMap::new();
    env.insert("MATCHBOARD_FORM_LIMIT", "x");
    let config = config_from(&cli, &env).expect("flag should win over the bad env value");
    assert_eq!(config.form_limit, 3);
}

#[test]
fn club_flag_replaces_blank_env_value() {
    let cli = Cli::try_parse_from(["matchboard", "--club", "Bidart", "results"])
        .expect("expected valid cli args");
    let mut env = HashMap::new();
    env.insert("MATCHBOARD_CLUB_NAME", " ");
    let config = config_from(&cli, &env).expect("flag should win over the blank env value");
    assert_eq!(config.club_name, "Bidart");
}

#[test]
fn invalid_env_value_without_flag_is_rejected() {
    let cli = Cli::try_parse_from(["matchboard", "home"]).expect("expected valid cli args");
    let mut env = HashMap::new();
    env.insert("MATCHBOARD_FORM_LIMIT", "x");
    let result = config_from(&cli, &env);
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MATCHBOARD_FORM_LIMIT"),
        "expected InvalidEnvVar(MATCHBOARD_FORM_LIMIT), got: {result:?}"
    );
}

#[test]
fn help_parses_without_reading_config() {
    let err = Cli::try_parse_from(["matchboard", "--help"]).expect_err("help exits early");
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}

#[test]
fn resolve_teams_defaults_to_both_squads() {
    let teams = resolve_teams(&[]).expect("defaults");
    assert_eq!(teams, vec![TeamLabel::Premiere, TeamLabel::Reserve]);
}

#[test]
fn resolve_teams_classifies_like_record_data() {
    let teams = resolve_teams(&["Équipe 1 Première".to_string(), "Vétérans".to_string()])
        .expect("valid teams");
    assert_eq!(
        teams,
        vec![TeamLabel::Premiere, TeamLabel::Other("veterans".to_string())]
    );
}

#[test]
fn resolve_teams_rejects_blank_names() {
    assert!(resolve_teams(&["   ".to_string()]).is_err());
}
