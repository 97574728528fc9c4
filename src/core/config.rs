//! Match configuration.
//!
//! A match is configured by:
//! - `Edition`: single-team or three-team (alliance) scoring
//! - `MatchConfig`: edition plus the team display names
//!
//! The edition fixes the length of every per-team collection and decides
//! how per-team values are laid out in a saved document.

use serde::{Deserialize, Serialize};

use super::team::TeamId;

/// Which variant of the score sheet is in use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edition {
    /// One robot. Per-team values are stored as plain scalars.
    SingleTeam,
    /// A three-robot alliance. Per-team values are 3-element arrays and
    /// every placement records its team.
    #[default]
    ThreeTeam,
}

impl Edition {
    /// Number of teams scored in this edition.
    #[must_use]
    pub const fn team_count(self) -> usize {
        match self {
            Edition::SingleTeam => 1,
            Edition::ThreeTeam => 3,
        }
    }

    /// Check whether `team` exists in this edition.
    #[must_use]
    pub const fn has_team(self, team: TeamId) -> bool {
        team.index() < self.team_count()
    }

    /// Whether placements and actions are scoped per team.
    #[must_use]
    pub const fn is_multi_team(self) -> bool {
        matches!(self, Edition::ThreeTeam)
    }
}

impl std::fmt::Display for Edition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Edition::SingleTeam => f.write_str("single-team"),
            Edition::ThreeTeam => f.write_str("three-team"),
        }
    }
}

/// Complete match configuration.
///
/// Callers provide this when starting a fresh match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchConfig {
    /// Scoring edition.
    pub edition: Edition,

    /// Display name for each team, one per team in the edition.
    pub team_names: Vec<String>,
}

impl MatchConfig {
    /// Create a configuration with default team names "1", "2", "3".
    #[must_use]
    pub fn new(edition: Edition) -> Self {
        Self {
            edition,
            team_names: TeamId::all(edition.team_count())
                .map(|t| (t.index() + 1).to_string())
                .collect(),
        }
    }

    /// Set the team display names.
    ///
    /// Ignored entries past the edition's team count are dropped; missing
    /// entries keep their default name.
    #[must_use]
    pub fn with_team_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        for (slot, name) in self.team_names.iter_mut().zip(names) {
            *slot = name.into();
        }
        self
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(Edition::default())
    }
}
