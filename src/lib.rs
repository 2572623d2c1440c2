//! Habitboard - client engine for the Habits social service.
//!
//! Given raw per-user, per-habit counts from the backend, the crate ranks
//! users within each habit, derives leaderboard and followed-user feed items
//! with their comparison messages, and reconciles each cycle's sectioned item
//! lists against the previously presented state so only real changes reach
//! the presentation layer.
//!
//! Data flows one way: statistics snapshot → ranked view items → render diff.
//! Everything up to the reconciler is pure; [`refresh::HomeFeed`] adds the
//! concurrency contract (superseding in-flight fetches, atomic application).

pub mod adapters;
pub mod api;
pub mod engine;
pub mod logging;
pub mod models;
pub mod prelude;
pub mod reconcile;
pub mod refresh;
pub mod settings;
pub mod traits;
pub mod view_state;
