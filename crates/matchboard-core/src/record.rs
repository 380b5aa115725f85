//! Input adapter for match records returned by the scores API.
//!
//! Upstream sources disagree on key names, so each logical field is read
//! through an ordered list of candidate keys: the first key whose value is
//! present and not `null` wins. Reading a record never fails; anything that
//! cannot be interpreted is treated as absent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Candidate keys for the squad ("team label") field.
pub const TEAM_KEYS: &[&str] = &["Equipe", "equipe", "team", "Team", "TEAM"];
pub const HOME_TEAM_KEYS: &[&str] = &["home_team", "homeTeam"];
pub const AWAY_TEAM_KEYS: &[&str] = &["away_team", "awayTeam"];
pub const MATCH_DATE_KEYS: &[&str] = &["match_date", "matchDate"];
pub const HOME_SCORE_KEYS: &[&str] = &["home_score", "homeScore"];
pub const AWAY_SCORE_KEYS: &[&str] = &["away_score", "awayScore"];
pub const STATUS_KEYS: &[&str] = &["status"];
pub const NOTES_KEYS: &[&str] = &["notes"];

/// A single match as delivered by the API, with raw (un-normalized) values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct MatchRecord {
    /// Raw squad label, e.g. `"Première"` or `"Réserve"`.
    pub team: Option<String>,
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    /// Raw timestamp text; see [`crate::dates::parse_match_date`].
    pub match_date: Option<String>,
    pub home_score: Option<i64>,
    pub away_score: Option<i64>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

impl MatchRecord {
    /// Reads a record out of an arbitrary JSON value.
    ///
    /// Non-object values yield a record with every field absent.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        Self {
            team: text_field(obj, TEAM_KEYS),
            home_team: text_field(obj, HOME_TEAM_KEYS),
            away_team: text_field(obj, AWAY_TEAM_KEYS),
            match_date: text_field(obj, MATCH_DATE_KEYS),
            home_score: score_field(obj, HOME_SCORE_KEYS),
            away_score: score_field(obj, AWAY_SCORE_KEYS),
            status: text_field(obj, STATUS_KEYS),
            notes: text_field(obj, NOTES_KEYS),
        }
    }

    /// Both scores, when both have been recorded.
    #[must_use]
    pub fn scores(&self) -> Option<(i64, i64)> {
        Some((self.home_score?, self.away_score?))
    }

    /// Notes with blank text treated as absent.
    #[must_use]
    pub fn notes_text(&self) -> Option<&str> {
        self.notes.as_deref().filter(|n| !n.trim().is_empty())
    }
}

impl From<Value> for MatchRecord {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

/// Returns the first value among `keys` that is present and not `null`.
fn first_present<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|k| obj.get(*k))
        .find(|v| !v.is_null())
}

fn text_field(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    first_present(obj, keys).map(value_to_text)
}

fn score_field(obj: &Map<String, Value>, keys: &[&str]) -> Option<i64> {
    first_present(obj, keys).and_then(value_to_score)
}

/// Coerces a scalar JSON value to text.
fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn value_to_score(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e15)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn reads_snake_case_wire_format() {
        let rec = MatchRecord::from_value(&json!({
            "Equipe": "Première",
            "home_team": "Bidart",
            "away_team": "Anglet",
            "match_date": "2024-03-10T15:00:00Z",
            "home_score": 3,
            "away_score": 1,
            "status": "played",
            "notes": "derby"
        }));

        assert_eq!(rec.team.as_deref(), Some("Première"));
        assert_eq!(rec.home_team.as_deref(), Some("Bidart"));
        assert_eq!(rec.away_team.as_deref(), Some("Anglet"));
        assert_eq!(rec.match_date.as_deref(), Some("2024-03-10T15:00:00Z"));
        assert_eq!(rec.scores(), Some((3, 1)));
        assert_eq!(rec.status.as_deref(), Some("played"));
        assert_eq!(rec.notes_text(), Some("derby"));
    }

    #[test]
    fn reads_camel_case_aliases() {
        let rec = MatchRecord::from_value(&json!({
            "team": "Reserve",
            "homeTeam": "X",
            "awayTeam": "Bidart",
            "matchDate": "2024-01-01",
            "homeScore": 0,
            "awayScore": 2
        }));
        assert_eq!(rec.home_team.as_deref(), Some("X"));
        assert_eq!(rec.away_team.as_deref(), Some("Bidart"));
        assert_eq!(rec.match_date.as_deref(), Some("2024-01-01"));
        assert_eq!(rec.scores(), Some((0, 2)));
    }

    #[test]
    fn team_key_priority_skips_nulls() {
        let rec = MatchRecord::from_value(&json!({
            "Equipe": null,
            "equipe": null,
            "team": "reserve",
            "TEAM": "premiere"
        }));
        assert_eq!(rec.team.as_deref(), Some("reserve"));
    }

    #[test]
    fn team_key_priority_prefers_earlier_keys() {
        let rec = MatchRecord::from_value(&json!({
            "TEAM": "reserve",
            "Equipe": "premiere"
        }));
        assert_eq!(rec.team.as_deref(), Some("premiere"));
    }

    #[test]
    fn coerces_scalar_text_fields() {
        let rec = MatchRecord::from_value(&json!({ "team": 2, "status": true }));
        assert_eq!(rec.team.as_deref(), Some("2"));
        assert_eq!(rec.status.as_deref(), Some("true"));
    }

    #[test]
    fn lenient_scores() {
        let rec = MatchRecord::from_value(&json!({ "home_score": "4", "away_score": 2.0 }));
        assert_eq!(rec.scores(), Some((4, 2)));

        let rec = MatchRecord::from_value(&json!({ "home_score": 1.5, "away_score": "n/a" }));
        assert_eq!(rec.home_score, None);
        assert_eq!(rec.away_score, None);
        assert_eq!(rec.scores(), None);
    }

    #[test]
    fn missing_score_means_not_recorded() {
        let rec = MatchRecord::from_value(&json!({ "home_score": 1, "away_score": null }));
        assert_eq!(rec.home_score, Some(1));
        assert_eq!(rec.scores(), None);
    }

    #[test]
    fn non_object_values_yield_empty_record() {
        assert_eq!(MatchRecord::from_value(&json!(42)), MatchRecord::default());
        assert_eq!(MatchRecord::from_value(&json!(null)), MatchRecord::default());
        assert_eq!(MatchRecord::from_value(&json!(["a"])), MatchRecord::default());
    }

    #[test]
    fn blank_notes_are_absent() {
        let rec = MatchRecord::from_value(&json!({ "notes": "   " }));
        assert_eq!(rec.notes.as_deref(), Some("   "));
        assert_eq!(rec.notes_text(), None);
    }

    #[test]
    fn deserializes_a_list_through_the_adapter() {
        let records: Vec<MatchRecord> = serde_json::from_value(json!([
            { "equipe": "premiere", "home_team": "A" },
            "garbage"
        ]))
        .expect("adapter never fails");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].team.as_deref(), Some("premiere"));
        assert_eq!(records[1], MatchRecord::default());
    }
}
