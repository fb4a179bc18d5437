//! Scene tracking across polls.
//!
//! The classifiers in [`crate::scene`] and [`crate::transition`] are
//! pure; something still has to remember the scene from the last poll.
//! [`SceneTracker`] is that something: it owns the previous scene
//! (starting at [`Scene::Unknown`] before the first poll), composes the
//! two classifiers per observation, and keeps a bounded journal of the
//! scene changes it has seen so the overlay can show a session history.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::scene::{Scene, classify_scene};
use crate::snapshot::{GameSnapshot, UiSnapshot};
use crate::transition::{Transition, classify_transition};

/// Journal entries kept by default.
pub const DEFAULT_JOURNAL_CAPACITY: usize = 256;

/// One recorded scene change. `NoChange` observations are not recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneChange {
    /// Game clock at the poll that saw the change.
    pub display_time: f64,
    pub from: Scene,
    pub to: Scene,
    pub transition: Transition,
}

/// Owns the previous scene between polls and journals scene changes.
#[derive(Debug, Clone)]
pub struct SceneTracker {
    scene: Scene,
    journal: VecDeque<SceneChange>,
    journal_capacity: usize,
}

impl Default for SceneTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneTracker {
    pub fn new() -> Self {
        Self::with_journal_capacity(DEFAULT_JOURNAL_CAPACITY)
    }

    /// A tracker whose journal keeps at most `capacity` entries; the
    /// oldest entry is dropped when full.
    pub fn with_journal_capacity(capacity: usize) -> Self {
        Self {
            scene: Scene::Unknown,
            journal: VecDeque::new(),
            journal_capacity: capacity,
        }
    }

    /// The scene as of the last observation.
    pub fn scene(&self) -> Scene {
        self.scene
    }

    /// Classify a snapshot pair against the stored scene, store the new
    /// scene (including [`Scene::Loading`]), and return the transition.
    ///
    /// `contains_tracked_player` is the caller's answer to "is a tracked
    /// identity on this roster", typically
    /// `accounts.matches_roster(game)`.
    pub fn observe(
        &mut self,
        game: &GameSnapshot,
        ui: &UiSnapshot,
        contains_tracked_player: bool,
    ) -> Transition {
        let next = classify_scene(game, ui);
        let transition = classify_transition(self.scene, next, contains_tracked_player);

        if transition != Transition::NoChange {
            self.journal.push_back(SceneChange {
                display_time: game.display_time,
                from: self.scene,
                to: next,
                transition,
            });
            while self.journal.len() > self.journal_capacity {
                self.journal.pop_front();
            }
        }

        self.scene = next;
        transition
    }

    /// Recorded scene changes, oldest to newest.
    pub fn recent(&self) -> impl Iterator<Item = &SceneChange> {
        self.journal.iter()
    }

    /// The most recent scene change, if any was recorded.
    pub fn last_change(&self) -> Option<&SceneChange> {
        self.journal.back()
    }

    /// Forget everything, as after a client reconnect.
    pub fn reset(&mut self) {
        self.scene = Scene::Unknown;
        self.journal.clear();
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::LOADING_SCREEN;

    fn game(is_replay: bool, display_time: f64) -> GameSnapshot {
        GameSnapshot {
            is_replay,
            display_time,
            players: vec![],
        }
    }

    fn ui(screens: &[&str]) -> UiSnapshot {
        UiSnapshot {
            active_screens: screens.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn starts_unknown() {
        assert_eq!(SceneTracker::new().scene(), Scene::Unknown);
    }

    #[test]
    fn first_live_game_counts_as_new_game_when_tracked() {
        let mut tracker = SceneTracker::new();
        let transition = tracker.observe(&game(false, 0.0), &ui(&[]), true);
        assert_eq!(transition, Transition::ToNewGameFromMenu);
        assert_eq!(tracker.scene(), Scene::Game);
    }

    #[test]
    fn first_live_game_is_observed_when_untracked() {
        let mut tracker = SceneTracker::new();
        let transition = tracker.observe(&game(false, 0.0), &ui(&[]), false);
        assert_eq!(transition, Transition::ToObserveGame);
    }

    #[test]
    fn loading_is_stored_but_not_journaled() {
        let mut tracker = SceneTracker::new();
        tracker.observe(&game(false, 0.0), &ui(&["ScreenHome/ScreenHome"]), false);
        let transition = tracker.observe(&game(false, 0.0), &ui(&[LOADING_SCREEN]), false);
        assert_eq!(transition, Transition::NoChange);
        assert_eq!(tracker.scene(), Scene::Loading);
        // Only the menu arrival is in the journal.
        assert_eq!(tracker.recent().count(), 1);
    }

    #[test]
    fn journal_records_changes_in_order() {
        let mut tracker = SceneTracker::new();
        tracker.observe(&game(false, 0.0), &ui(&["ScreenHome/ScreenHome"]), true);
        tracker.observe(&game(false, 0.0), &ui(&[LOADING_SCREEN]), true);
        tracker.observe(&game(false, 1.5), &ui(&[]), true);
        tracker.observe(&game(false, 300.0), &ui(&["ScreenScore/ScreenScore"]), true);

        let transitions: Vec<Transition> = tracker.recent().map(|c| c.transition).collect();
        // Menu arrival, then the post-loading gap, then back to menu.
        assert_eq!(
            transitions,
            vec![Transition::ToMenu, Transition::Unknown, Transition::ToMenu]
        );
        assert_eq!(tracker.last_change().unwrap().to, Scene::Menu);
    }

    #[test]
    fn steady_state_polls_do_not_grow_the_journal() {
        let mut tracker = SceneTracker::new();
        for tick in 0..100 {
            tracker.observe(&game(false, f64::from(tick)), &ui(&[]), true);
        }
        assert_eq!(tracker.recent().count(), 1);
    }

    #[test]
    fn journal_is_bounded() {
        let mut tracker = SceneTracker::with_journal_capacity(4);
        for tick in 0..20 {
            // Alternate menu and game so every poll records a change.
            if tick % 2 == 0 {
                tracker.observe(&game(false, 0.0), &ui(&["ScreenHome/ScreenHome"]), true);
            } else {
                tracker.observe(&game(false, 0.0), &ui(&[]), true);
            }
        }
        assert_eq!(tracker.recent().count(), 4);
    }

    #[test]
    fn reset_forgets_scene_and_journal() {
        let mut tracker = SceneTracker::new();
        tracker.observe(&game(false, 0.0), &ui(&[]), true);
        tracker.reset();
        assert_eq!(tracker.scene(), Scene::Unknown);
        assert_eq!(tracker.recent().count(), 0);
    }
}
