//! # rust-chargeup
//!
//! Scoring engine and match-document codec for the Charged Up grid game.
//!
//! ## Design Principles
//!
//! 1. **Pure Scoring**: Scores are recomputed from the current state on
//!    every query. Nothing is cached, nothing is global.
//!
//! 2. **Shape in the Type**: The grid is three fixed arrays of nine cells;
//!    a short or ragged row cannot be represented.
//!
//! 3. **Never Trust a Document**: Decoding validates every field and fails
//!    as a whole on the first violation.
//!
//! ## Editions
//!
//! - **Single-team**: one robot, per-team values are scalars.
//! - **Three-team**: an alliance; placements and actions carry a team and
//!   scores can be scoped to one team. Links count toward the alliance
//!   total only.
//!
//! ## Modules
//!
//! - `core`: Teams, pieces, grid, link detection, configuration, state
//! - `rules`: Point values and score computation
//! - `document`: JSON encoding, validated decoding, `.frc` files
//! - `edit`: Editing session applying UI intents
//! - `error`: Error types

pub mod core;
pub mod rules;
pub mod document;
pub mod edit;
pub mod error;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    TeamId, TeamMap,
    GamePiece, GridHeight, ChargeAction, Placement,
    Grid, Link, Links,
    Edition, MatchConfig, MatchState,
};

pub use crate::rules::{score, score_action, score_grid, score_piece, link_bonus, Scoreboard};

pub use crate::document::{decode, encode};

pub use crate::edit::Session;

pub use crate::error::{DecodeError, EditError, Error, Result, ScoreError};
