//! Automated players.
//!
//! Policies are trait-based to allow customization:
//! - `PlayerPolicy`: decide a play or a draw, then a follow-up after drawing
//! - `FirstPlayable`: the default, deterministic, no lookahead

pub mod policy;

pub use policy::{choose_color, Decision, FirstPlayable, PlayerPolicy};
