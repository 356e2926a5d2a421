use serde::{Deserialize, Serialize};

/// The game titles a deployment fetches schedules for.
///
/// The variant slug doubles as the upstream path segment
/// (`https://api.pandascore.co/<slug>/matches`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Game {
    Lol,
    Csgo,
    Valorant,
}

impl Game {
    /// Human-readable title, as shown on game filter buttons.
    pub fn title(&self) -> &'static str {
        match self {
            Game::Lol => "League of Legends",
            Game::Csgo => "CS2",
            Game::Valorant => "Valorant",
        }
    }

    /// The default selection: every configured title.
    pub fn all() -> [Game; 3] {
        [Game::Lol, Game::Csgo, Game::Valorant]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_matches_upstream_path_segment() {
        assert_eq!(Game::Lol.to_string(), "lol");
        assert_eq!(Game::Csgo.to_string(), "csgo");
        assert_eq!(Game::Valorant.to_string(), "valorant");
    }
}
