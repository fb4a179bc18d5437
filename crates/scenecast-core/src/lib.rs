//! Scenecast Core -- the decision core for a StarCraft II stream overlay.
//!
//! This crate classifies what the SC2 client is currently showing from
//! polled snapshots of its game and UI state, and labels how the scene
//! changed between two successive polls. Everything here is pure and
//! synchronous: the embedding application owns the polling loop, the
//! transport, and all side effects (rating lookups, overlay updates,
//! match resets) dispatched on the resulting labels.
//!
//! # Poll Tick
//!
//! Each poll tick the embedding application:
//!
//! 1. Reads a [`snapshot::GameSnapshot`] and a [`snapshot::UiSnapshot`]
//!    from the client.
//! 2. Calls [`scene::classify_scene`] to label the current scene.
//! 3. Calls [`transition::classify_transition`] against the previously
//!    stored scene, or lets a [`tracker::SceneTracker`] do steps 2-3 and
//!    the bookkeeping in one call.
//! 4. Dispatches on the returned [`transition::Transition`].
//!
//! # Key Types
//!
//! - [`snapshot::GameSnapshot`] / [`snapshot::UiSnapshot`] -- point-in-time
//!   reads of the client's `/game` and `/ui` endpoints.
//! - [`scene::Scene`] -- the five scene labels (game, menu, replay,
//!   loading, unknown).
//! - [`transition::Transition`] -- the eight scene-change labels.
//! - [`tracker::SceneTracker`] -- owns the previous scene and a bounded
//!   journal of scene changes.
//! - [`match_info::MatchInfo`] -- per-match overlay state, reset on each
//!   new game.
//! - [`gametime`] -- the `M:SS` game-clock format used by build orders.

pub mod gametime;
pub mod match_info;
pub mod scene;
pub mod snapshot;
pub mod tracker;
pub mod transition;
