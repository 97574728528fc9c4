//! Applying UI intents to a match.
//!
//! The session owns the match state and the little UI context that edits
//! depend on (selected team, stroke snapshot).

pub mod session;

pub use session::Session;
