//! Core match types: teams, pieces, the grid, configuration, state.
//!
//! This module is the data model every other layer builds on. It holds no
//! scoring rules beyond link detection, which is a property of the grid.

pub mod team;
pub mod piece;
pub mod grid;
pub mod config;
pub mod state;

pub use team::{TeamId, TeamMap, MAX_TEAMS};
pub use piece::{ChargeAction, GamePiece, GridHeight, Placement};
pub use grid::{Grid, Link, Links, Row, COLUMNS, HEIGHTS, LINK_LENGTH, MAX_LINKS};
pub use config::{Edition, MatchConfig};
pub use state::MatchState;
