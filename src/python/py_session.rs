//! Session bindings for Python.

use pyo3::prelude::*;

use crate::document;
use crate::edit::Session;
use crate::error::Error;

use super::py_core::{action_name, cell, check_column, edition, parse_height, team, CellView};

/// Python wrapper for an editing session.
///
/// Heights are passed as "Low", "Mid" or "High"; teams as 0-based indices.
#[pyclass(name = "Session")]
pub struct PySession(pub Session);

#[pymethods]
impl PySession {
    /// Start a fresh match.
    #[new]
    #[pyo3(signature = (three_team = true))]
    fn new(three_team: bool) -> Self {
        Self(Session::new(edition(three_team)))
    }

    /// Parse a match document from JSON text.
    #[staticmethod]
    #[pyo3(signature = (text, three_team = true))]
    fn from_json(text: &str, three_team: bool) -> PyResult<Self> {
        let state = document::from_str(text, edition(three_team))?;
        Ok(Self(Session::from_state(state)))
    }

    /// Serialize the match to JSON text.
    fn to_json(&self) -> String {
        document::to_string(self.0.state())
    }

    /// Save the match to a file.
    fn save(&self, path: &str) -> PyResult<()> {
        document::save(path, self.0.state())?;
        Ok(())
    }

    /// Replace the match with one loaded from a file.
    ///
    /// On error the current match is left untouched.
    fn load(&mut self, path: &str) -> PyResult<()> {
        let state = document::load(path, self.0.state().edition())?;
        self.0.load(state);
        Ok(())
    }

    #[getter]
    fn selected_team(&self) -> u8 {
        self.0.selected_team().0
    }

    fn select_team(&mut self, index: u8) -> PyResult<()> {
        self.0.select_team(crate::core::TeamId::new(index)).map_err(Error::from)?;
        Ok(())
    }

    /// Snapshot the grid when the pointer is pressed.
    fn begin_stroke(&mut self) {
        self.0.begin_stroke();
    }

    /// Paint a cell; returns its new occupant.
    #[pyo3(signature = (height, column, toggle_auto = false))]
    fn paint(&mut self, height: &str, column: usize, toggle_auto: bool) -> PyResult<Option<CellView>> {
        let height = parse_height(height)?;
        let column = check_column(column)?;
        Ok(cell(self.0.paint(height, column, toggle_auto)))
    }

    /// Current occupant of a cell.
    fn cell(&self, height: &str, column: usize) -> PyResult<Option<CellView>> {
        let height = parse_height(height)?;
        let column = check_column(column)?;
        Ok(cell(self.0.state().grid.get(height, column).copied()))
    }

    /// Every link as (height, first column).
    fn links(&self) -> Vec<(String, usize)> {
        self.0
            .state()
            .grid
            .links()
            .map(|link| (link.height.to_string(), link.column))
            .collect()
    }

    fn cycle_auto_action(&mut self) -> bool {
        self.0.cycle_auto_action()
    }

    fn cycle_end_action(&mut self) -> &'static str {
        action_name(self.0.cycle_end_action())
    }

    fn toggle_mobility(&mut self) -> bool {
        self.0.toggle_mobility()
    }

    /// Action names per team: (auto actions, end actions).
    fn actions(&self) -> (Vec<&'static str>, Vec<&'static str>) {
        let state = self.0.state();
        (
            state.auto_action.values().map(|a| action_name(*a)).collect(),
            state.end_action.values().map(|a| action_name(*a)).collect(),
        )
    }

    fn mobility(&self) -> Vec<bool> {
        self.0.state().mobility.values().copied().collect()
    }

    fn clear(&mut self) {
        self.0.clear();
    }

    #[getter]
    fn team_names(&self) -> Vec<String> {
        self.0.state().teams.values().cloned().collect()
    }

    fn set_team_names(&mut self, names: Vec<String>) -> PyResult<()> {
        self.0.set_team_names(names).map_err(Error::from)?;
        Ok(())
    }

    /// Alliance total, or one team's score.
    #[pyo3(signature = (team_index = None))]
    fn score(&self, team_index: Option<u8>) -> PyResult<u32> {
        Ok(self.0.score(team(team_index)).map_err(Error::from)?)
    }

    /// (alliance total, [score per team]).
    fn scoreboard(&self) -> PyResult<(u32, Vec<u32>)> {
        let board = self.0.scoreboard().map_err(Error::from)?;
        Ok((board.total, board.teams.values().copied().collect()))
    }

    fn __repr__(&self) -> String {
        let state = self.0.state();
        format!(
            "Session({}, placements={}, selected_team={})",
            state.edition(),
            state.grid.occupied_count(),
            self.0.selected_team().0
        )
    }
}

/// Score a match document without keeping a session.
#[pyfunction]
#[pyo3(signature = (text, three_team = true, team_index = None))]
pub fn score_document(text: &str, three_team: bool, team_index: Option<u8>) -> PyResult<u32> {
    let state = document::from_str(text, edition(three_team))?;
    Ok(crate::rules::score(&state, team(team_index)).map_err(Error::from)?)
}
