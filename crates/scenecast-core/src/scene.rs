//! Scene classification: what the client is currently showing.
//!
//! The only observable signal separating "in game" from "in menu" is
//! whether the UI overlay has any active screens. The loading screen is
//! the single special case with a fixed, known identifier; every other
//! non-empty screen list is uniformly a menu, no matter which screens
//! it names.

use serde::{Deserialize, Serialize};

use crate::snapshot::{GameSnapshot, UiSnapshot};

/// Screen identifier the client reports while loading into a game or
/// replay. It is the only screen identifier the classifier inspects.
pub const LOADING_SCREEN: &str = "ScreenLoading/ScreenLoading";

/// The externally observable mode of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Scene {
    /// A live game is foregrounded.
    Game,
    /// Some menu screen is up.
    Menu,
    /// A replay is foregrounded.
    Replay,
    /// The loading screen is up. Treated as a transient sub-state, not
    /// a real scene of its own -- see [`crate::transition`].
    Loading,
    /// Nothing has been observed yet (the tracker's starting state).
    Unknown,
}

/// Classify the current scene from a snapshot pair.
///
/// Pure and total: every snapshot pair maps to exactly one [`Scene`].
/// A single active screen that is not the loading screen still counts
/// as a menu; length one is not special beyond the loading check.
pub fn classify_scene(game: &GameSnapshot, ui: &UiSnapshot) -> Scene {
    match ui.active_screens.as_slice() {
        [] => {
            if game.is_replay {
                Scene::Replay
            } else {
                Scene::Game
            }
        }
        [screen] if screen.as_str() == LOADING_SCREEN => Scene::Loading,
        _ => Scene::Menu,
    }
}

// ===========================================================================
// Tests
// ===========================================================================
