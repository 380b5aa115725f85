//! Plain-text rendering of the home and results views.
//!
//! Renderers build a `String` so they can be tested without capturing
//! stdout; `main` prints the result. Formatting errors propagate as
//! `fmt::Error`.

use std::fmt::{self, Write as _};

use chrono::TimeZone;
use matchboard_core::{
    format_match_date, format_score, normalized_status, ClubResult, MatchRecord, TeamFixtures,
    TeamSummary,
};

const DASH: &str = "\u{2014}";

pub(crate) const NO_RESULTS: &str = "no results yet";
pub(crate) const NO_NEXT: &str = "no upcoming match found";
pub(crate) const NO_LAST: &str = "no played match found";
pub(crate) const NO_MATCHES: &str = "no matches found";

fn result_letter(result: ClubResult) -> char {
    match result {
        ClubResult::Win => 'W',
        ClubResult::Loss => 'L',
        ClubResult::Draw => 'D',
    }
}

fn date_text<Tz>(record: &MatchRecord, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    record
        .match_date
        .as_deref()
        .map_or_else(|| DASH.to_string(), |d| format_match_date(d, tz))
}

fn side(name: Option<&str>) -> &str {
    name.filter(|n| !n.trim().is_empty()).unwrap_or(DASH)
}

/// Renders the home view: form line plus next and last match per squad.
pub(crate) fn render_home<Tz>(
    summaries: &[TeamSummary<'_>],
    tz: &Tz,
) -> Result<String, fmt::Error>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut out = String::new();
    for (i, summary) in summaries.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        writeln!(out, "== {} ==", summary.team.as_str().to_uppercase())?;

        if summary.form.is_empty() {
            writeln!(out, "Form: {NO_RESULTS}")?;
        } else {
            let letters: Vec<String> = summary
                .form
                .iter()
                .map(|e| result_letter(e.result).to_string())
                .collect();
            writeln!(out, "Form: {}", letters.join(" "))?;
            for entry in &summary.form {
                let rec = entry.record;
                let score = format_score(rec).unwrap_or_else(|| "score unknown".to_string());
                writeln!(
                    out,
                    "  {} : {} {} {} ({})",
                    date_text(rec, tz),
                    side(rec.home_team.as_deref()),
                    score,
                    side(rec.away_team.as_deref()),
                    entry.result
                )?;
            }
        }

        out.push_str("Next match:\n");
        render_match_block(&mut out, summary.next, NO_NEXT, tz)?;
        out.push_str("Last match:\n");
        render_match_block(&mut out, summary.last, NO_LAST, tz)?;
    }
    Ok(out)
}

fn render_match_block<Tz>(
    out: &mut String,
    record: Option<&MatchRecord>,
    empty: &str,
    tz: &Tz,
) -> fmt::Result
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let Some(rec) = record else {
        return writeln!(out, "  {empty}");
    };

    writeln!(
        out,
        "  {} vs {}",
        side(rec.home_team.as_deref()),
        side(rec.away_team.as_deref())
    )?;
    writeln!(out, "  Date: {}", date_text(rec, tz))?;
    if let Some(score) = format_score(rec) {
        writeln!(out, "  Score: {score}")?;
    }
    let status = rec.status.as_deref().unwrap_or(DASH);
    let folded = normalized_status(rec).filter(|s| !s.is_empty());
    match folded {
        Some(ref f) if f != status => writeln!(out, "  Status: {status} ({f})")?,
        _ => writeln!(out, "  Status: {status}")?,
    }
    if let Some(notes) = rec.notes_text() {
        writeln!(out, "  Notes: {notes}")?;
    }
    Ok(())
}

/// Renders the results view: one chronological table per squad.
pub(crate) fn render_results<Tz>(
    tables: &[TeamFixtures<'_>],
    tz: &Tz,
) -> Result<String, fmt::Error>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut out = String::new();
    for (i, table) in tables.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        writeln!(out, "== {} ==", table.team.as_str().to_uppercase())?;

        if table.matches.is_empty() {
            writeln!(out, "{NO_MATCHES}")?;
            continue;
        }

        writeln!(
            out,
            "{:<18}{:<24}{:<24}{:<9}{:<12}NOTES",
            "DATE", "HOME", "AWAY", "SCORE", "STATUS"
        )?;
        for rec in &table.matches {
            let score = format_score(rec).unwrap_or_else(|| DASH.to_string());
            writeln!(
                out,
                "{:<18}{:<24}{:<24}{:<9}{:<12}{}",
                date_text(rec, tz),
                truncate(side(rec.home_team.as_deref()), 22),
                truncate(side(rec.away_team.as_deref()), 22),
                score,
                rec.status.as_deref().unwrap_or(DASH),
                rec.notes_text().unwrap_or(DASH)
            )?;
        }
    }
    Ok(out)
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        format!("{}...", s.chars().take(max.saturating_sub(3)).collect::<String>())
    } else {
        s.to_string()
    }
}
