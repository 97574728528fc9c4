//! Match state: everything a score sheet records.
//!
//! ## MatchState
//!
//! - Edition (decides the team count)
//! - Grid placements
//! - Per-team auto action, end action and mobility
//! - Per-team display names
//!
//! The state is a plain value. Whoever holds it owns the grid; a saved
//! document is a self-contained copy with no references back.

use super::config::{Edition, MatchConfig};
use super::grid::Grid;
use super::piece::ChargeAction;
use super::team::{TeamId, TeamMap};

/// Scoring-relevant state for one match.
///
/// Every `TeamMap` has exactly `edition.team_count()` entries. The only
/// persisted form is the match document built by `document::encode`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchState {
    edition: Edition,

    /// Grid placements.
    pub grid: Grid,

    /// Charge-station action at the end of auto.
    pub auto_action: TeamMap<Option<ChargeAction>>,

    /// Charge-station action at the end of the match.
    pub end_action: TeamMap<Option<ChargeAction>>,

    /// Whether the robot left the community during auto.
    pub mobility: TeamMap<bool>,

    /// Team display names.
    pub teams: TeamMap<String>,
}

impl MatchState {
    /// Create an empty match with default team names.
    #[must_use]
    pub fn new(edition: Edition) -> Self {
        Self::with_config(&MatchConfig::new(edition))
    }

    /// Create an empty match from a configuration.
    #[must_use]
    pub fn with_config(config: &MatchConfig) -> Self {
        let team_count = config.edition.team_count();

        Self {
            edition: config.edition,
            grid: Grid::new(),
            auto_action: TeamMap::with_value(team_count, None),
            end_action: TeamMap::with_value(team_count, None),
            mobility: TeamMap::with_value(team_count, false),
            teams: TeamMap::new(team_count, |t| {
                config
                    .team_names
                    .get(t.index())
                    .cloned()
                    .unwrap_or_else(|| (t.index() + 1).to_string())
            }),
        }
    }

    /// Assemble a state from parts already sized for `edition`.
    ///
    /// # Panics
    ///
    /// Panics if any per-team map does not have one entry per team.
    #[must_use]
    pub fn from_parts(
        edition: Edition,
        grid: Grid,
        auto_action: TeamMap<Option<ChargeAction>>,
        end_action: TeamMap<Option<ChargeAction>>,
        mobility: TeamMap<bool>,
        teams: TeamMap<String>,
    ) -> Self {
        let team_count = edition.team_count();
        assert_eq!(auto_action.team_count(), team_count, "auto_action sized for wrong edition");
        assert_eq!(end_action.team_count(), team_count, "end_action sized for wrong edition");
        assert_eq!(mobility.team_count(), team_count, "mobility sized for wrong edition");
        assert_eq!(teams.team_count(), team_count, "teams sized for wrong edition");

        Self {
            edition,
            grid,
            auto_action,
            end_action,
            mobility,
            teams,
        }
    }

    /// Get the edition.
    #[must_use]
    pub fn edition(&self) -> Edition {
        self.edition
    }

    /// Get team count.
    #[must_use]
    pub fn team_count(&self) -> usize {
        self.edition.team_count()
    }

    /// Iterate over all team IDs.
    pub fn team_ids(&self) -> impl Iterator<Item = TeamId> {
        TeamId::all(self.team_count())
    }

    /// Reset grid, actions and mobility. Team names are kept.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.auto_action.fill(None);
        self.end_action.fill(None);
        self.mobility.fill(false);
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(Edition::default())
    }
}
