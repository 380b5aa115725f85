//! Derivations over match records: squad labels, results from the club's
//! point of view, next/last match selection and recent form.
//!
//! Every function here is total. Missing or malformed fields produce `None`
//! or an empty list, never a panic.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use crate::dates::{self, cmp_ascending, cmp_descending};
use crate::normalize::{normalize_opt, normalize_text, same_name};
use crate::record::MatchRecord;

pub const STATUS_PLAYED: &str = "played";
pub const STATUS_SCHEDULED: &str = "scheduled";

/// Default number of matches shown in a form line.
pub const DEFAULT_FORM_LIMIT: usize = 5;

/// Which squad a match belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TeamLabel {
    Premiere,
    Reserve,
    /// Unrecognized squad, carrying its normalized name.
    Other(String),
}

impl TeamLabel {
    /// Classifies free text the same way record team fields are classified.
    ///
    /// Matching is a plain substring test on the normalized text: anything
    /// containing `prem` is the first team, otherwise anything containing
    /// `res` is the reserve. A name like "President FC" therefore lands in
    /// `Premiere`. Blank text has no label.
    #[must_use]
    pub fn classify(raw: &str) -> Option<Self> {
        let folded = normalize_text(raw);
        if folded.is_empty() {
            None
        } else if folded.contains("prem") {
            Some(Self::Premiere)
        } else if folded.contains("res") {
            Some(Self::Reserve)
        } else {
            Some(Self::Other(folded))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Premiere => "premiere",
            Self::Reserve => "reserve",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for TeamLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TeamLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Outcome of a played match for the club.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClubResult {
    Win,
    Loss,
    Draw,
}

impl ClubResult {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Loss => "loss",
            Self::Draw => "draw",
        }
    }
}

impl fmt::Display for ClubResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How next/last matches are picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPolicy {
    /// Trust the `status` field only.
    #[default]
    StatusOnly,
    /// Also require `last` to be at or before `now` and `next` at or after
    /// `now`. Records with unparseable dates are never selected.
    TimeGated { now: DateTime<Utc> },
}

/// Result of [`select_next_and_last`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct NextAndLast<'a> {
    pub next: Option<&'a MatchRecord>,
    pub last: Option<&'a MatchRecord>,
}

/// One entry of a form line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormEntry<'a> {
    pub result: ClubResult,
    pub record: &'a MatchRecord,
}

/// Resolves the squad label of a record from its team field.
#[must_use]
pub fn resolve_team_label(record: &MatchRecord) -> Option<TeamLabel> {
    record.team.as_deref().and_then(TeamLabel::classify)
}

/// Normalized status of a record (`"played"`, `"scheduled"`, ...).
#[must_use]
pub fn normalized_status(record: &MatchRecord) -> Option<String> {
    normalize_opt(record.status.as_deref())
}

fn has_status(record: &MatchRecord, wanted: &str) -> bool {
    normalized_status(record).as_deref() == Some(wanted)
}

/// Result of a match from `club_name`'s point of view.
///
/// `None` unless the match is played, both scores are recorded and the club
/// is one of the two sides.
#[must_use]
pub fn club_result(record: &MatchRecord, club_name: &str) -> Option<ClubResult> {
    if !has_status(record, STATUS_PLAYED) {
        return None;
    }
    let (home, away) = record.scores()?;

    let is_club = |name: Option<&str>| name.is_some_and(|n| same_name(n, club_name));
    let is_home = is_club(record.home_team.as_deref());
    let is_away = is_club(record.away_team.as_deref());
    if !is_home && !is_away {
        return None;
    }

    let mut diff = i128::from(home) - i128::from(away);
    if is_away {
        diff = -diff;
    }

    Some(match diff.signum() {
        1 => ClubResult::Win,
        -1 => ClubResult::Loss,
        _ => ClubResult::Draw,
    })
}

fn belongs_to(record: &MatchRecord, label: &TeamLabel) -> bool {
    resolve_team_label(record).as_ref() == Some(label)
}

/// Picks the most recent played match and the earliest scheduled match for
/// a squad.
#[must_use]
pub fn select_next_and_last<'a>(
    records: &'a [MatchRecord],
    label: &TeamLabel,
    policy: SelectionPolicy,
) -> NextAndLast<'a> {
    let mut played = Vec::new();
    let mut scheduled = Vec::new();

    for record in records.iter().filter(|r| belongs_to(r, label)) {
        let when = dates::parse_opt(record.match_date.as_deref());
        if has_status(record, STATUS_PLAYED) {
            if policy_allows(policy, when.as_ref(), |d, now| d <= now) {
                played.push((when, record));
            }
        } else if has_status(record, STATUS_SCHEDULED)
            && policy_allows(policy, when.as_ref(), |d, now| d >= now)
        {
            scheduled.push((when, record));
        }
    }

    played.sort_by(|a, b| cmp_descending(a.0.as_ref(), b.0.as_ref()));
    scheduled.sort_by(|a, b| cmp_ascending(a.0.as_ref(), b.0.as_ref()));

    NextAndLast {
        next: scheduled.first().map(|(_, r)| *r),
        last: played.first().map(|(_, r)| *r),
    }
}

fn policy_allows(
    policy: SelectionPolicy,
    when: Option<&DateTime<Utc>>,
    gate: impl Fn(&DateTime<Utc>, &DateTime<Utc>) -> bool,
) -> bool {
    match policy {
        SelectionPolicy::StatusOnly => true,
        SelectionPolicy::TimeGated { now } => when.is_some_and(|d| gate(d, &now)),
    }
}

/// The club's last `limit` results for a squad, most recent first.
#[must_use]
pub fn recent_form<'a>(
    records: &'a [MatchRecord],
    label: &TeamLabel,
    club_name: &str,
    limit: usize,
) -> Vec<FormEntry<'a>> {
    let mut entries: Vec<(Option<DateTime<Utc>>, FormEntry<'a>)> = records
        .iter()
        .filter(|r| belongs_to(r, label))
        .filter_map(|record| {
            let result = club_result(record, club_name)?;
            let when = dates::parse_opt(record.match_date.as_deref());
            Some((when, FormEntry { result, record }))
        })
        .collect();

    entries.sort_by(|a, b| cmp_descending(a.0.as_ref(), b.0.as_ref()));
    entries.into_iter().take(limit).map(|(_, e)| e).collect()
}

/// Every match of a squad in chronological order.
#[must_use]
pub fn team_fixtures<'a>(records: &'a [MatchRecord], label: &TeamLabel) -> Vec<&'a MatchRecord> {
    let mut fixtures: Vec<(Option<DateTime<Utc>>, &MatchRecord)> = records
        .iter()
        .filter(|r| belongs_to(r, label))
        .map(|r| (dates::parse_opt(r.match_date.as_deref()), r))
        .collect();
    fixtures.sort_by(|a, b| cmp_ascending(a.0.as_ref(), b.0.as_ref()));
    fixtures.into_iter().map(|(_, r)| r).collect()
}

/// `"H - A"` when both scores are recorded.
#[must_use]
pub fn format_score(record: &MatchRecord) -> Option<String> {
    record.scores().map(|(h, a)| format!("{h} - {a}"))
}
