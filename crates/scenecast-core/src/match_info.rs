//! Per-match overlay state.
//!
//! The overlay shows both players' names, races, MMR, and season game
//! counts while a game runs. All fields start out unknown and are
//! filled in by the embedding application as its lookups complete; the
//! whole struct is reset whenever a new game starts.

use serde::{Deserialize, Serialize};

use crate::snapshot::Race;

/// A matchup from the tracked player's point of view, rendered `XvY`
/// with canonical race initials (e.g. `ZvT`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matchup {
    pub mine: Race,
    pub theirs: Race,
}

impl std::fmt::Display for Matchup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}v{}", self.mine.initial(), self.theirs.initial())
    }
}

/// Everything the overlay knows about the current match. Unknown until
/// the relevant lookup has completed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    pub my_name: Option<String>,
    pub my_race: Option<Race>,
    pub my_mmr: Option<i32>,
    pub games_played_this_season: Option<u32>,
    pub opponent_name: Option<String>,
    pub opponent_race: Option<Race>,
    pub opponent_mmr: Option<i32>,
    pub opponent_stream: Option<String>,
    pub opponent_games_played_this_season: Option<u32>,
}

impl MatchInfo {
    /// Back to the empty state, as when a new game starts.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The matchup, once both races are known.
    pub fn matchup(&self) -> Option<Matchup> {
        Some(Matchup {
            mine: self.my_race?,
            theirs: self.opponent_race?,
        })
    }
}

// ===========================================================================
// Tests
// ===========================================================================
