//! Editing session: a match plus the UI context needed to apply intents.
//!
//! The UI resolves raw input (pointer position, keys) into intents such as
//! "paint cell (Mid, 4)" or "cycle the end action" and calls the matching
//! method here. The session is an ordinary value; nothing is global.
//!
//! ## Strokes
//!
//! A pointer drag repeatedly paints every cell it passes over. Each paint is
//! resolved against the grid as it was when the stroke began, so dragging
//! back and forth over a cell does not toggle it on every frame. Call
//! [`Session::begin_stroke`] when the pointer is pressed.

use log::debug;

use crate::core::{ChargeAction, Edition, GamePiece, Grid, GridHeight, MatchState, Placement, TeamId};
use crate::error::{EditError, ScoreError};
use crate::rules::{self, Scoreboard};

/// A match being edited.
#[derive(Clone, Debug)]
pub struct Session {
    state: MatchState,
    stroke_origin: Grid,
    selected_team: TeamId,
}

impl Session {
    /// Start a fresh match.
    #[must_use]
    pub fn new(edition: Edition) -> Self {
        Self::from_state(MatchState::new(edition))
    }

    /// Start editing an existing match (e.g. one just loaded from disk).
    #[must_use]
    pub fn from_state(state: MatchState) -> Self {
        Self {
            stroke_origin: state.grid.clone(),
            state,
            selected_team: TeamId::new(0),
        }
    }

    /// Current match state.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Take the match state out of the session.
    #[must_use]
    pub fn into_state(self) -> MatchState {
        self.state
    }

    /// Replace the whole match, keeping the selected team if it still exists.
    pub fn load(&mut self, state: MatchState) {
        if !state.edition().has_team(self.selected_team) {
            self.selected_team = TeamId::new(0);
        }
        self.stroke_origin = state.grid.clone();
        self.state = state;
    }

    /// Team whose pieces and actions are being edited.
    #[must_use]
    pub fn selected_team(&self) -> TeamId {
        self.selected_team
    }

    /// Choose the team to edit.
    pub fn select_team(&mut self, team: TeamId) -> Result<(), EditError> {
        self.check_team(team)?;
        self.selected_team = team;
        Ok(())
    }

    fn check_team(&self, team: TeamId) -> Result<(), EditError> {
        if self.state.edition().has_team(team) {
            Ok(())
        } else {
            Err(EditError::UnknownTeam {
                team,
                team_count: self.state.team_count(),
            })
        }
    }

    // === Grid ===

    /// Snapshot the grid at the start of a pointer stroke.
    pub fn begin_stroke(&mut self) {
        self.stroke_origin = self.state.grid.clone();
    }

    /// What painting a cell would produce, given the stroke's starting grid.
    ///
    /// - Another team's piece is left alone.
    /// - An empty cell gets the suggested piece for the selected team.
    /// - The selected team's piece has its auto flag flipped if
    ///   `toggle_auto`, otherwise it is removed.
    #[must_use]
    pub fn paint_result(&self, height: GridHeight, column: usize, toggle_auto: bool) -> Option<Placement> {
        match self.stroke_origin.get(height, column) {
            Some(prev) if prev.team != self.selected_team => Some(*prev),
            None => {
                let placement = Placement::new(GamePiece::suggested(height, column), self.selected_team);
                Some(if toggle_auto { placement.in_auto() } else { placement })
            }
            Some(prev) if toggle_auto => Some(prev.toggled_auto()),
            Some(_) => None,
        }
    }

    /// Paint a cell. Returns the cell's new occupant.
    ///
    /// # Panics
    ///
    /// Panics if `column >= COLUMNS`.
    pub fn paint(&mut self, height: GridHeight, column: usize, toggle_auto: bool) -> Option<Placement> {
        let next = self.paint_result(height, column, toggle_auto);
        self.state.grid.set(height, column, next);
        next
    }

    // === Actions ===

    /// Advance the selected team's auto action: None, Docked, Engaged.
    ///
    /// Only one robot can claim the charge station in auto. A team may cycle
    /// its own auto action, or claim one while no team has; otherwise nothing
    /// changes. Returns whether the action changed.
    pub fn cycle_auto_action(&mut self) -> bool {
        let team = self.selected_team;
        let holds_own = self.state.auto_action[team].is_some();
        let station_free = self.state.auto_action.values().all(Option::is_none);

        if !holds_own && !station_free {
            debug!("{} auto action unchanged: charge station already claimed", team);
            return false;
        }

        let slot = &mut self.state.auto_action[team];
        *slot = ChargeAction::next_auto(*slot);
        true
    }

    /// Advance the selected team's end action: None, Park, Docked, Engaged.
    pub fn cycle_end_action(&mut self) -> Option<ChargeAction> {
        let slot = &mut self.state.end_action[self.selected_team];
        *slot = ChargeAction::next_end(*slot);
        *slot
    }

    /// Flip the selected team's mobility. Returns the new value.
    pub fn toggle_mobility(&mut self) -> bool {
        let slot = &mut self.state.mobility[self.selected_team];
        *slot = !*slot;
        *slot
    }

    /// Clear the grid, actions and mobility. Team names are kept.
    pub fn clear(&mut self) {
        self.state.reset();
        self.stroke_origin.clear();
    }

    /// Rename every team at once.
    pub fn set_team_names<S: Into<String>>(&mut self, names: impl IntoIterator<Item = S>) -> Result<(), EditError> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let expected = self.state.team_count();
        if names.len() != expected {
            return Err(EditError::TeamNameCount {
                expected,
                found: names.len(),
            });
        }

        for (team, name) in self.state.team_ids().zip(names) {
            self.state.teams[team] = name;
        }
        Ok(())
    }

    // === Scores ===

    /// Score the match, optionally scoped to one team.
    pub fn score(&self, team: Option<TeamId>) -> Result<u32, ScoreError> {
        rules::score(&self.state, team)
    }

    /// Alliance total and every team's score.
    pub fn scoreboard(&self) -> Result<Scoreboard, ScoreError> {
        Scoreboard::compute(&self.state)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Edition::default())
    }
}
