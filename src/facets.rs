//! Group labels and the per-game filter facet index.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::{Game, MatchRecord};
use crate::translate::translate;

/// The localized label a record is grouped and filtered under:
/// league name (or "Unknown"), plus `" - "` and the serie name when one
/// exists, run through the phrase table. Label identity is purely the
/// resulting string; distinct leagues that translate to the same text
/// collapse into one facet.
pub fn group_label(record: &MatchRecord) -> String {
    translate(&base_label(record))
}

/// The label shown on a match card: the group label plus the
/// tournament-stage name, unless the stage is the generic "Playoffs".
/// Display only; filtering always uses [`group_label`].
pub fn display_label(record: &MatchRecord) -> String {
    let mut full = base_label(record);
    if let Some(tournament) = record.tournament.as_ref().map(|t| t.name.as_str()) {
        if tournament != "Playoffs" {
            full.push(' ');
            full.push_str(tournament);
        }
    }
    translate(&full)
}

/// Untranslated league + serie text, `"Unknown"` when the league is absent.
fn base_label(record: &MatchRecord) -> String {
    let league = record
        .league
        .as_ref()
        .map(|l| l.name.as_str())
        .unwrap_or("Unknown");
    let serie = record
        .serie
        .as_ref()
        .and_then(|s| s.full_name.as_deref().or(s.name.as_deref()));

    match serie {
        Some(serie) => format!("{league} - {serie}"),
        None => league.to_string(),
    }
}

/// Build the filter facets: per game, the distinct group labels observed,
/// sorted lexicographically on the localized string.
pub fn facet_index(records: &[MatchRecord]) -> BTreeMap<Game, Vec<String>> {
    let mut sets: BTreeMap<Game, BTreeSet<String>> = BTreeMap::new();
    for record in records {
        sets.entry(record.game).or_default().insert(group_label(record));
    }
    sets.into_iter()
        .map(|(game, labels)| (game, labels.into_iter().collect()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_combines_league_and_serie_and_translates() {
        let record =
            MatchRecord::fixture(Game::Lol, 1, "2024-06-01T10:00:00Z", "LPL").with_serie("Spring 2024");
        assert_eq!(group_label(&record), "英雄联盟职业联赛 - 春季赛 2024");
    }

    #[test]
    fn label_without_serie_is_just_the_league() {
        let record = MatchRecord::fixture(Game::Csgo, 1, "2024-06-01T10:00:00Z", "IEM Katowice");
        assert_eq!(group_label(&record), "Intel极限大师赛 Katowice");
    }

    #[test]
    fn missing_league_falls_back_to_unknown() {
        let mut record = MatchRecord::fixture(Game::Valorant, 1, "2024-06-01T10:00:00Z", "x");
        record.league = None;
        assert_eq!(group_label(&record), "Unknown");
    }

    #[test]
    fn label_derivation_is_idempotent_per_record() {
        let record =
            MatchRecord::fixture(Game::Lol, 1, "2024-06-01T10:00:00Z", "LCK").with_serie("Summer");
        assert_eq!(group_label(&record), group_label(&record));
    }

    #[test]
    fn display_label_appends_stage_except_playoffs() {
        let quarterfinal = MatchRecord::fixture(Game::Lol, 1, "2024-06-01T10:00:00Z", "LCK")
            .with_tournament("Quarterfinal");
        assert_eq!(display_label(&quarterfinal), "韩国英雄联盟冠军联赛 四分之一决赛");

        let playoffs = MatchRecord::fixture(Game::Lol, 2, "2024-06-01T10:00:00Z", "LCK")
            .with_tournament("Playoffs");
        assert_eq!(display_label(&playoffs), "韩国英雄联盟冠军联赛");
        assert_eq!(display_label(&playoffs), group_label(&playoffs));
    }

    #[test]
    fn facets_are_distinct_and_sorted_per_game() {
        let records = vec![
            MatchRecord::fixture(Game::Lol, 1, "2024-06-01T10:00:00Z", "LPL"),
            MatchRecord::fixture(Game::Lol, 2, "2024-06-02T10:00:00Z", "LPL"),
            MatchRecord::fixture(Game::Lol, 3, "2024-06-03T10:00:00Z", "LCK"),
            MatchRecord::fixture(Game::Csgo, 4, "2024-06-01T12:00:00Z", "BLAST Premier"),
        ];
        let facets = facet_index(&records);

        let lol = &facets[&Game::Lol];
        assert_eq!(lol.len(), 2);
        assert!(lol.windows(2).all(|pair| pair[0] < pair[1]));

        // Two LPL records collapse to one facet entry.
        assert_eq!(lol.iter().filter(|l| l.contains("英雄联盟职业联赛")).count(), 1);
        assert_eq!(facets[&Game::Csgo].len(), 1);
        assert!(!facets.contains_key(&Game::Valorant));
    }
}
