//! Snapshot types mirroring the SC2 client's `/game` and `/ui` payloads.
//!
//! Both snapshots are ephemeral: the poller reads them fresh each tick
//! and nothing in this crate retains them. Field and variant renames
//! track the client's wire names exactly, including its provisional
//! result labels.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Races and servers
// ---------------------------------------------------------------------------

/// Race code as the `/game` endpoint reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RaceCode {
    Terr,
    Prot,
    Zerg,
    #[serde(rename = "random")]
    Random,
}

/// Canonical race, as shown on the overlay and stored in configs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Race {
    Protoss,
    Terran,
    Zerg,
    Random,
}

impl From<RaceCode> for Race {
    fn from(code: RaceCode) -> Self {
        match code {
            RaceCode::Terr => Race::Terran,
            RaceCode::Prot => Race::Protoss,
            RaceCode::Zerg => Race::Zerg,
            RaceCode::Random => Race::Random,
        }
    }
}

impl Race {
    /// Single-letter initial used in matchup strings like `ZvT`.
    pub fn initial(self) -> char {
        match self {
            Race::Protoss => 'P',
            Race::Terran => 'T',
            Race::Zerg => 'Z',
            Race::Random => 'R',
        }
    }
}

/// Ladder server a tracked account plays on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Server {
    Europe,
    Americas,
    Asia,
    China,
}

// ---------------------------------------------------------------------------
// Players
// ---------------------------------------------------------------------------

/// Whether a roster slot is a human or the built-in AI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    User,
    Computer,
}

/// Per-player result field. The client reports provisional labels while
/// the game is still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerResult {
    #[serde(rename = "undecided")]
    Undecided,
    #[serde(rename = "winidk")]
    Win,
    #[serde(rename = "lossidk")]
    Loss,
}

/// One roster entry in the `/game` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PlayerKind,
    pub race: RaceCode,
    pub result: PlayerResult,
}

// ---------------------------------------------------------------------------
// Game kind
// ---------------------------------------------------------------------------

/// Coarse classification of a roster, used to decide whether a game is
/// worth showing match info for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameKind {
    #[serde(rename = "1v1")]
    OneVsOne,
    #[serde(rename = "vsComputer")]
    VsComputer,
    #[serde(rename = "other")]
    Other,
}

// ---------------------------------------------------------------------------
// Snapshots
// ---------------------------------------------------------------------------

/// Point-in-time read of the client's `/game` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub is_replay: bool,
    /// Game clock in seconds.
    pub display_time: f64,
    pub players: Vec<Player>,
}

impl GameSnapshot {
    /// True if any roster entry has exactly this name.
    pub fn contains_player(&self, name: &str) -> bool {
        self.players.iter().any(|p| p.name == name)
    }

    /// Classify the roster. Anything that is not exactly two players is
    /// [`GameKind::Other`]; two players with a computer among them are
    /// [`GameKind::VsComputer`].
    pub fn kind(&self) -> GameKind {
        match self.players.as_slice() {
            [a, b] => {
                if a.kind == PlayerKind::Computer || b.kind == PlayerKind::Computer {
                    GameKind::VsComputer
                } else {
                    GameKind::OneVsOne
                }
            }
            _ => GameKind::Other,
        }
    }
}

/// Point-in-time read of the client's `/ui` endpoint. An empty screen
/// list means no overlay screen is up and the game (or a replay) is
/// foregrounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiSnapshot {
    pub active_screens: Vec<String>,
}

// ===========================================================================
// Tests
// ===========================================================================
