//! Tracked accounts: the streamer's own ladder identities.
//!
//! A roster is "tracked" when any enabled account's exact in-game name
//! appears on it; that bit is what separates `toNewGameFromMenu` from
//! `toObserveGame` in the transition classifier.

use serde::{Deserialize, Serialize};
use std::path::Path;

use scenecast_core::snapshot::{GameSnapshot, Race, Server};

use crate::loader::{self, DataLoadError};

/// Base name of the accounts data file (`accounts.{ron,toml,json}`).
pub const ACCOUNTS_FILE: &str = "accounts";

/// One configured ladder identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedAccount {
    pub id: u32,
    pub enabled: bool,
    /// Twitch login the overlay announces under.
    #[serde(rename = "twitchname")]
    pub twitch_name: String,
    /// Exact in-game name, as it appears on rosters.
    pub name: String,
    pub race: Race,
    pub server: Server,
}

/// The full set of configured accounts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackedAccounts {
    accounts: Vec<TrackedAccount>,
}

impl TrackedAccounts {
    pub fn new(accounts: Vec<TrackedAccount>) -> Self {
        Self { accounts }
    }

    /// Load `accounts.{ron,toml,json}` from `dir`. The TOML form keeps
    /// rows under an `accounts` key.
    pub fn load(dir: &Path) -> Result<Self, DataLoadError> {
        let path = loader::require(dir, ACCOUNTS_FILE)?;
        Ok(Self::new(loader::read_list(&path, ACCOUNTS_FILE)?))
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackedAccount> {
        self.accounts.iter()
    }

    pub fn iter_enabled(&self) -> impl Iterator<Item = &TrackedAccount> {
        self.accounts.iter().filter(|a| a.enabled)
    }

    /// The first enabled account present on the roster, if any.
    pub fn find_in_roster<'a>(&'a self, game: &GameSnapshot) -> Option<&'a TrackedAccount> {
        self.iter_enabled()
            .find(|account| game.contains_player(&account.name))
    }

    /// Does the roster contain any enabled tracked identity? This is
    /// the `contains_tracked_player` input to the transition classifier.
    pub fn matches_roster(&self, game: &GameSnapshot) -> bool {
        self.find_in_roster(game).is_some()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
