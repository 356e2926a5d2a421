use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::Game;

/// Lifecycle state of a match as reported upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    NotStarted,
    Running,
    Finished,
    #[serde(other)]
    Other,
}

/// A team occupying one side of a match. Absent while the bracket is TBD.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub acronym: Option<String>,
    pub image_url: Option<String>,
}

/// One opponent slot of a match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpponentSlot {
    pub opponent: Option<Team>,
}

/// A per-opponent score entry, present once the match has results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u32,
    pub team_id: Option<u64>,
}

/// A broadcast stream for a match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stream {
    pub language: String,
    pub raw_url: String,
    pub official: bool,
}

/// Name of the league a match belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct League {
    pub name: String,
}

/// A series within a league (e.g. a split). The full name is preferred
/// for display when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Serie {
    pub name: Option<String>,
    pub full_name: Option<String>,
}

/// A tournament stage within a series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tournament {
    pub name: String,
}

/// Wire shape of one match object from the upstream listing endpoint.
///
/// Identifiers are unique within one fetch cycle only; each refresh fully
/// replaces the record set, so no cross-cycle reconciliation is attempted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMatch {
    pub id: u64,
    pub status: MatchStatus,
    pub scheduled_at: DateTime<Utc>,
    pub match_type: String,
    pub number_of_games: u32,
    #[serde(default)]
    pub opponents: Vec<OpponentSlot>,
    #[serde(default)]
    pub results: Vec<MatchResult>,
    pub league: Option<League>,
    pub serie: Option<Serie>,
    pub tournament: Option<Tournament>,
    #[serde(default)]
    pub streams_list: Vec<Stream>,
}

/// An upstream match tagged with the game feed it was fetched from.
#[derive(Debug, Clone, Serialize)]
pub struct MatchRecord {
    pub game: Game,
    pub id: u64,
    pub status: MatchStatus,
    pub scheduled_at: DateTime<Utc>,
    pub match_type: String,
    pub number_of_games: u32,
    pub opponents: Vec<OpponentSlot>,
    pub results: Vec<MatchResult>,
    pub league: Option<League>,
    pub serie: Option<Serie>,
    pub tournament: Option<Tournament>,
    pub streams_list: Vec<Stream>,
}

impl MatchRecord {
    pub(crate) fn from_api(game: Game, api: ApiMatch) -> Self {
        Self {
            game,
            id: api.id,
            status: api.status,
            scheduled_at: api.scheduled_at,
            match_type: api.match_type,
            number_of_games: api.number_of_games,
            opponents: api.opponents,
            results: api.results,
            league: api.league,
            serie: api.serie,
            tournament: api.tournament,
            streams_list: api.streams_list,
        }
    }

    /// Short format descriptor for match cards: `BO3` for a best-of-3,
    /// otherwise the raw upstream kind.
    pub fn format_label(&self) -> String {
        if self.match_type == "best_of" {
            format!("BO{}", self.number_of_games)
        } else {
            self.match_type.clone()
        }
    }
}

#[cfg(test)]
impl MatchRecord {
    /// Minimal record for pipeline tests.
    pub(crate) fn fixture(game: Game, id: u64, scheduled_at: &str, league: &str) -> Self {
        Self {
            game,
            id,
            status: MatchStatus::NotStarted,
            scheduled_at: scheduled_at.parse().expect("fixture timestamp"),
            match_type: "best_of".to_string(),
            number_of_games: 3,
            opponents: Vec::new(),
            results: Vec::new(),
            league: Some(League {
                name: league.to_string(),
            }),
            serie: None,
            tournament: None,
            streams_list: Vec::new(),
        }
    }

    pub(crate) fn with_serie(mut self, full_name: &str) -> Self {
        self.serie = Some(Serie {
            name: None,
            full_name: Some(full_name.to_string()),
        });
        self
    }

    pub(crate) fn with_tournament(mut self, name: &str) -> Self {
        self.tournament = Some(Tournament {
            name: name.to_string(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "id": 812345,
        "status": "not_started",
        "scheduled_at": "2024-06-01T10:00:00Z",
        "match_type": "best_of",
        "number_of_games": 5,
        "opponents": [
            { "opponent": { "name": "Bilibili Gaming", "acronym": "BLG", "image_url": "https://cdn.example/blg.png" } },
            { "opponent": null }
        ],
        "results": [
            { "score": 2, "team_id": 101 },
            { "score": 0, "team_id": 102 }
        ],
        "league": { "name": "LPL" },
        "serie": { "name": "Spring", "full_name": "Spring 2024" },
        "tournament": { "name": "Playoffs" },
        "streams_list": [
            { "language": "zh", "raw_url": "https://live.example/1", "official": true }
        ]
    }"#;

    #[test]
    fn decodes_upstream_match_object() {
        let api: ApiMatch = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(api.id, 812345);
        assert_eq!(api.status, MatchStatus::NotStarted);
        assert_eq!(api.opponents.len(), 2);
        assert!(api.opponents[1].opponent.is_none());
        assert_eq!(api.results[0].score, 2);
        assert_eq!(api.league.as_ref().unwrap().name, "LPL");
        assert_eq!(api.serie.as_ref().unwrap().full_name.as_deref(), Some("Spring 2024"));
        assert!(api.streams_list[0].official);

        let record = MatchRecord::from_api(Game::Lol, api);
        assert_eq!(record.game, Game::Lol);
        assert_eq!(record.format_label(), "BO5");
    }

    #[test]
    fn unknown_status_maps_to_other() {
        let api: ApiMatch = serde_json::from_str(
            r#"{
                "id": 1,
                "status": "postponed",
                "scheduled_at": "2024-06-01T10:00:00Z",
                "match_type": "best_of",
                "number_of_games": 1,
                "league": null,
                "serie": null,
                "tournament": null
            }"#,
        )
        .unwrap();
        assert_eq!(api.status, MatchStatus::Other);
        assert!(api.opponents.is_empty());
        assert!(api.streams_list.is_empty());
    }
}
