//! Match document encoding and validated decoding.
//!
//! ## Layout
//!
//! ```text
//! {
//!   "grid":        [[cell; 9]; 3],       // Low, Mid, High
//!   "auto_action": action | [action; 3],
//!   "end_action":  action | [action; 3],
//!   "mobility":    bool   | [bool; 3],
//!   "teams":       [string; 3]           // three-team edition only
//! }
//! cell   = null | [piece, auto] | [piece, auto, team]
//! piece  = 0 (Cube) | 1 (Cone)
//! action = null | 0 (Park) | 1 (Docked) | 2 (Engaged)
//! ```
//!
//! Scalars and 2-element cells belong to the single-team edition; arrays of
//! three and 3-element cells to the three-team edition.
//!
//! Decoding never trusts its input. The first violation aborts with a
//! [`DecodeError`] and no partial state is produced.

use log::debug;
use serde_json::{json, Map, Value};

use crate::core::{
    ChargeAction, Edition, GamePiece, Grid, GridHeight, MatchConfig, MatchState, Placement, Row,
    TeamId, TeamMap, COLUMNS, HEIGHTS,
};
use crate::error::{DecodeError, Error};

pub const GRID: &str = "grid";
pub const AUTO_ACTION: &str = "auto_action";
pub const END_ACTION: &str = "end_action";
pub const MOBILITY: &str = "mobility";
pub const TEAMS: &str = "teams";

/// Keys a document must contain, in the order they are checked.
#[must_use]
pub fn required_fields(edition: Edition) -> &'static [&'static str] {
    match edition {
        Edition::SingleTeam => &[GRID, AUTO_ACTION, END_ACTION, MOBILITY],
        Edition::ThreeTeam => &[GRID, AUTO_ACTION, END_ACTION, MOBILITY, TEAMS],
    }
}

// === Encoding ===

fn piece_code(piece: GamePiece) -> u8 {
    match piece {
        GamePiece::Cube => 0,
        GamePiece::Cone => 1,
    }
}

fn action_code(action: Option<ChargeAction>) -> Value {
    match action {
        None => Value::Null,
        Some(ChargeAction::Park) => json!(0),
        Some(ChargeAction::Docked) => json!(1),
        Some(ChargeAction::Engaged) => json!(2),
    }
}

fn encode_cell(cell: Option<&Placement>, edition: Edition) -> Value {
    match (cell, edition) {
        (None, _) => Value::Null,
        (Some(p), Edition::SingleTeam) => json!([piece_code(p.piece), p.auto]),
        (Some(p), Edition::ThreeTeam) => json!([piece_code(p.piece), p.auto, p.team.0]),
    }
}

/// Encode the grid as three rows of nine cells.
#[must_use]
pub fn encode_grid(grid: &Grid, edition: Edition) -> Value {
    GridHeight::ALL
        .iter()
        .map(|&height| {
            grid.row(height)
                .iter()
                .map(|cell| encode_cell(cell.as_ref(), edition))
                .collect::<Value>()
        })
        .collect()
}

fn encode_per_team<T>(map: &TeamMap<T>, edition: Edition, f: impl Fn(&T) -> Value) -> Value {
    match edition {
        Edition::SingleTeam => f(&map[TeamId::new(0)]),
        Edition::ThreeTeam => map.values().map(f).collect(),
    }
}

/// Encode a whole match. Always succeeds.
#[must_use]
pub fn encode(state: &MatchState) -> Value {
    let edition = state.edition();
    let mut doc = Map::new();

    doc.insert(GRID.into(), encode_grid(&state.grid, edition));
    doc.insert(
        AUTO_ACTION.into(),
        encode_per_team(&state.auto_action, edition, |a| action_code(*a)),
    );
    doc.insert(
        END_ACTION.into(),
        encode_per_team(&state.end_action, edition, |a| action_code(*a)),
    );
    doc.insert(
        MOBILITY.into(),
        encode_per_team(&state.mobility, edition, |m| Value::Bool(*m)),
    );
    if edition.is_multi_team() {
        doc.insert(
            TEAMS.into(),
            state.teams.values().map(|name| Value::from(name.as_str())).collect(),
        );
    }

    Value::Object(doc)
}

/// Encode a match as JSON text.
#[must_use]
pub fn to_string(state: &MatchState) -> String {
    encode(state).to_string()
}

// === Decoding ===

/// Short description of a value's JSON type, for shape errors.
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".into(),
        Value::Bool(_) => "a boolean".into(),
        Value::Number(_) => "a number".into(),
        Value::String(_) => "a string".into(),
        Value::Array(items) => format!("an array of {}", items.len()),
        Value::Object(_) => "an object".into(),
    }
}

fn expect_array<'a>(value: &'a Value, path: &str, len: usize, what: &str) -> Result<&'a [Value], DecodeError> {
    match value.as_array() {
        Some(items) if items.len() == len => Ok(items),
        _ => Err(DecodeError::shape(
            path,
            format!("an array of {len} {what}"),
            describe(value),
        )),
    }
}

fn decode_cell(value: &Value, path: &str, edition: Edition) -> Result<Option<Placement>, DecodeError> {
    if value.is_null() {
        return Ok(None);
    }

    let (arity, constraint) = match edition {
        Edition::SingleTeam => (2, "cell must be null or a [piece, auto] pair"),
        Edition::ThreeTeam => (3, "cell must be null or a [piece, auto, team] triple"),
    };
    let fields = match value.as_array() {
        Some(fields) if fields.len() == arity => fields,
        _ => return Err(DecodeError::value(path, constraint, value)),
    };

    let piece = match fields[0].as_u64() {
        Some(0) => GamePiece::Cube,
        Some(1) => GamePiece::Cone,
        _ => {
            return Err(DecodeError::value(
                format!("{path}[0]"),
                "piece code must be 0 or 1",
                &fields[0],
            ))
        }
    };

    let auto = fields[1].as_bool().ok_or_else(|| {
        DecodeError::value(format!("{path}[1]"), "auto flag must be a boolean", &fields[1])
    })?;

    let team = match edition {
        Edition::SingleTeam => TeamId::new(0),
        Edition::ThreeTeam => match fields[2].as_u64() {
            Some(n) if n < edition.team_count() as u64 => TeamId::new(n as u8),
            _ => {
                return Err(DecodeError::value(
                    format!("{path}[2]"),
                    "team index must be 0, 1 or 2",
                    &fields[2],
                ))
            }
        },
    };

    Ok(Some(Placement { piece, auto, team }))
}

/// Check that the grid is three rows of nine cells, without looking at any
/// cell.
fn grid_rows(value: &Value) -> Result<[&[Value]; HEIGHTS], DecodeError> {
    let source = expect_array(value, GRID, HEIGHTS, "rows")?;
    let mut rows: [&[Value]; HEIGHTS] = Default::default();

    for (h, (row, cells)) in rows.iter_mut().zip(source).enumerate() {
        *row = expect_array(cells, &format!("{GRID}[{h}]"), COLUMNS, "cells")?;
    }

    Ok(rows)
}

fn decode_cells(rows: [&[Value]; HEIGHTS], edition: Edition) -> Result<Grid, DecodeError> {
    let mut grid: [Row; HEIGHTS] = Default::default();

    for (h, (row, cells)) in grid.iter_mut().zip(rows).enumerate() {
        for (c, (slot, cell)) in row.iter_mut().zip(cells).enumerate() {
            *slot = decode_cell(cell, &format!("{GRID}[{h}][{c}]"), edition)?;
        }
    }

    Ok(Grid::from_rows(grid))
}

/// Decode and validate a grid. Every row length is checked before any cell.
pub fn decode_grid(value: &Value, edition: Edition) -> Result<Grid, DecodeError> {
    decode_cells(grid_rows(value)?, edition)
}

fn decode_action(value: &Value, path: &str) -> Result<Option<ChargeAction>, DecodeError> {
    if value.is_null() {
        return Ok(None);
    }
    match value.as_u64() {
        Some(0) => Ok(Some(ChargeAction::Park)),
        Some(1) => Ok(Some(ChargeAction::Docked)),
        Some(2) => Ok(Some(ChargeAction::Engaged)),
        _ => Err(DecodeError::value(
            path,
            "action code must be null, 0, 1 or 2",
            value,
        )),
    }
}

fn decode_mobility(value: &Value, path: &str) -> Result<bool, DecodeError> {
    value
        .as_bool()
        .ok_or_else(|| DecodeError::value(path, "mobility must be a boolean", value))
}

fn decode_team_name(value: &Value, path: &str) -> Result<String, DecodeError> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| DecodeError::value(path, "team name must be a string", value))
}

/// Entries of a per-team field: the value itself in the single-team
/// edition, an array of one entry per team otherwise.
fn per_team_entries<'a>(value: &'a Value, key: &str, edition: Edition) -> Result<&'a [Value], DecodeError> {
    match edition {
        Edition::SingleTeam => Ok(std::slice::from_ref(value)),
        Edition::ThreeTeam => expect_array(value, key, edition.team_count(), "entries"),
    }
}

fn decode_per_team<T>(
    entries: &[Value],
    key: &str,
    edition: Edition,
    f: impl Fn(&Value, &str) -> Result<T, DecodeError>,
) -> Result<TeamMap<T>, DecodeError> {
    let values = entries
        .iter()
        .enumerate()
        .map(|(i, item)| match edition {
            Edition::SingleTeam => f(item, key),
            Edition::ThreeTeam => f(item, &format!("{key}[{i}]")),
        })
        .collect::<Result<Vec<_>, _>>()?;

    TeamMap::from_vec(values).map_err(|values| {
        DecodeError::shape(
            key,
            format!("{} entries", edition.team_count()),
            values.len().to_string(),
        )
    })
}

/// Decode and validate a match document for `edition`.
///
/// Checks, in order: the document is an object, every required key is
/// present, the grid has 3 rows of 9 cells and every per-team array has one
/// entry per team, then every cell, action, mobility flag and team name in
/// document order.
///
/// An auto action of Park decodes; scoring reports it as a contract
/// violation.
pub fn decode(value: &Value, edition: Edition) -> Result<MatchState, DecodeError> {
    let doc = value
        .as_object()
        .ok_or_else(|| DecodeError::shape("document", "an object", describe(value)))?;

    for &key in required_fields(edition) {
        if !doc.contains_key(key) {
            return Err(DecodeError::MissingField(key));
        }
    }

    let rows = grid_rows(&doc[GRID])?;
    let auto_entries = per_team_entries(&doc[AUTO_ACTION], AUTO_ACTION, edition)?;
    let end_entries = per_team_entries(&doc[END_ACTION], END_ACTION, edition)?;
    let mobility_entries = per_team_entries(&doc[MOBILITY], MOBILITY, edition)?;
    let team_entries = match edition {
        Edition::ThreeTeam => Some(per_team_entries(&doc[TEAMS], TEAMS, edition)?),
        Edition::SingleTeam => None,
    };

    let grid = decode_cells(rows, edition)?;
    let auto_action = decode_per_team(auto_entries, AUTO_ACTION, edition, decode_action)?;
    let end_action = decode_per_team(end_entries, END_ACTION, edition, decode_action)?;
    let mobility = decode_per_team(mobility_entries, MOBILITY, edition, decode_mobility)?;
    let teams = match team_entries {
        Some(entries) => decode_per_team(entries, TEAMS, edition, decode_team_name)?,
        None => {
            let config = MatchConfig::new(edition);
            TeamMap::new(edition.team_count(), |t| config.team_names[t.index()].clone())
        }
    };

    debug!(
        "decoded {} match with {} placements",
        edition,
        grid.occupied_count()
    );

    Ok(MatchState::from_parts(
        edition,
        grid,
        auto_action,
        end_action,
        mobility,
        teams,
    ))
}

/// Parse JSON text and decode it.
pub fn from_str(text: &str, edition: Edition) -> Result<MatchState, Error> {
    let value: Value = serde_json::from_str(text)?;
    Ok(decode(&value, edition)?)
}
