//! Scoring rules.
//!
//! - Pieces: Low 2, Mid 3, High 5, +1 if scored in auto
//! - Links: 5 each, credited to the alliance only
//! - Charge station: Park 2, Docked 6, Engaged 10, +2 in auto (no Park in auto)
//! - Mobility: 3 per team

pub mod scoring;

pub use scoring::{
    link_bonus, score, score_action, score_grid, score_piece, Scoreboard, AUTO_CHARGE_BONUS,
    AUTO_PIECE_BONUS, LINK_POINTS, MOBILITY_POINTS,
};
