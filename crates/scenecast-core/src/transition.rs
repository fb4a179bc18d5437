//! Transition classification: how the scene changed between two polls.
//!
//! [`classify_transition`] is the labeled-edge function of a small
//! transition system over [`Scene`]: self-loops are always
//! [`Transition::NoChange`], and arriving at the loading screen is
//! absorbed as [`Transition::NoChange`] too, because loading is a
//! transient sub-state between real scenes rather than a scene change
//! worth reacting to.
//!
//! The match below is deliberately written without a wildcard over the
//! previous scene, so adding a [`Scene`] variant fails to compile here
//! instead of silently falling through.

use serde::{Deserialize, Serialize};

use crate::scene::Scene;

/// Classification of a scene change between two successive polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Transition {
    /// A tracked player left the menus and entered a game.
    ToNewGameFromMenu,
    /// A game started right after a replay was being watched.
    ToNewGameFromReplay,
    /// A game started that no tracked player is part of.
    ToObserveGame,
    /// A replay started from the menus.
    ToReplayFromMenu,
    /// A running game turned into a replay playback.
    ToReplayFromGame,
    /// Back to the menus, from anywhere.
    ToMenu,
    /// Same scene as last poll, or the transient loading screen.
    NoChange,
    /// The change could not be classified.
    Unknown,
}

/// Classify the change from `previous` to `next`.
///
/// Pure and total over all scene pairs and both values of
/// `contains_tracked_player`; the tracked-player bit only matters when
/// entering a game from the menus (or from the unobserved starting
/// state), where it separates playing from observing.
pub fn classify_transition(
    previous: Scene,
    next: Scene,
    contains_tracked_player: bool,
) -> Transition {
    match next {
        // Loading is a transient sub-state, never a scene change.
        Scene::Loading => Transition::NoChange,

        Scene::Game => match previous {
            Scene::Game => Transition::NoChange,
            Scene::Menu | Scene::Unknown => {
                if contains_tracked_player {
                    Transition::ToNewGameFromMenu
                } else {
                    Transition::ToObserveGame
                }
            }
            Scene::Replay => Transition::ToNewGameFromReplay,
            // TODO: decide whether a game entered straight from the
            // loading screen counts as a new game; needs the scene
            // before loading to be carried along.
            Scene::Loading => Transition::Unknown,
        },

        Scene::Replay => match previous {
            Scene::Replay => Transition::NoChange,
            Scene::Menu | Scene::Unknown => Transition::ToReplayFromMenu,
            Scene::Game => Transition::ToReplayFromGame,
            Scene::Loading => Transition::Unknown,
        },

        Scene::Menu => match previous {
            Scene::Menu => Transition::NoChange,
            Scene::Game | Scene::Replay | Scene::Loading | Scene::Unknown => Transition::ToMenu,
        },

        Scene::Unknown => match previous {
            Scene::Unknown => Transition::NoChange,
            Scene::Game | Scene::Menu | Scene::Replay | Scene::Loading => Transition::Unknown,
        },
    }
}

// ===========================================================================
// Tests
// ===========================================================================
