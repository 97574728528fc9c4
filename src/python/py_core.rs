//! Conversions between Python values and core types.

use pyo3::exceptions::{PyIOError, PyIndexError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::{ChargeAction, Edition, GamePiece, GridHeight, Placement, TeamId, COLUMNS};
use crate::error::{Error, ScoreError};

impl From<Error> for PyErr {
    fn from(err: Error) -> Self {
        match err {
            Error::Io(e) => PyIOError::new_err(e.to_string()),
            Error::Score(e @ ScoreError::ContractViolation { .. }) => PyRuntimeError::new_err(e.to_string()),
            other => PyValueError::new_err(other.to_string()),
        }
    }
}

/// Cell as seen from Python: (piece name, auto flag, team index).
pub type CellView = (&'static str, bool, u8);

pub(crate) fn edition(three_team: bool) -> Edition {
    if three_team {
        Edition::ThreeTeam
    } else {
        Edition::SingleTeam
    }
}

pub(crate) fn parse_height(name: &str) -> PyResult<GridHeight> {
    match name.to_ascii_lowercase().as_str() {
        "low" => Ok(GridHeight::Low),
        "mid" => Ok(GridHeight::Mid),
        "high" => Ok(GridHeight::High),
        _ => Err(PyValueError::new_err(format!("unknown grid height: {name}"))),
    }
}

pub(crate) fn check_column(column: usize) -> PyResult<usize> {
    if column < COLUMNS {
        Ok(column)
    } else {
        Err(PyIndexError::new_err(format!("column {column} out of range 0..{COLUMNS}")))
    }
}

pub(crate) fn team(index: Option<u8>) -> Option<TeamId> {
    index.map(TeamId::new)
}

pub(crate) fn cell(placement: Option<Placement>) -> Option<CellView> {
    placement.map(|p| {
        let piece = match p.piece {
            GamePiece::Cube => "Cube",
            GamePiece::Cone => "Cone",
        };
        (piece, p.auto, p.team.0)
    })
}

pub(crate) fn action_name(action: Option<ChargeAction>) -> &'static str {
    match action {
        None => "None",
        Some(ChargeAction::Park) => "Park",
        Some(ChargeAction::Docked) => "Docked",
        Some(ChargeAction::Engaged) => "Engaged",
    }
}
