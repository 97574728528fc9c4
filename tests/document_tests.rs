//! Match document tests.
//!
//! Validation failures for hand-written documents, compatibility with files
//! saved by the desktop score sheet, and round-trip properties.

use proptest::prelude::*;
use serde_json::{json, Value};

use rust_chargeup::core::{
    ChargeAction, Edition, GamePiece, Grid, GridHeight, MatchState, Placement, Row, TeamId,
    TeamMap,
};
use rust_chargeup::document::{self, decode, encode};
use rust_chargeup::rules::score;
use rust_chargeup::{DecodeError, Error, ScoreError};

fn empty_grid_json() -> Value {
    json!([
        [null, null, null, null, null, null, null, null, null],
        [null, null, null, null, null, null, null, null, null],
        [null, null, null, null, null, null, null, null, null]
    ])
}

fn three_team_doc() -> Value {
    json!({
        "grid": empty_grid_json(),
        "auto_action": [null, null, null],
        "end_action": [null, null, null],
        "mobility": [false, false, false],
        "teams": ["1", "2", "3"]
    })
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_outer_grid_length_two_is_shape_error() {
    let mut doc = three_team_doc();
    doc["grid"].as_array_mut().unwrap().pop();

    assert!(matches!(
        decode(&doc, Edition::ThreeTeam),
        Err(DecodeError::Shape { .. })
    ));
}

#[test]
fn test_invalid_piece_code_is_value_error() {
    let mut doc = three_team_doc();
    doc["grid"][0][0] = json!([2, true, 0]);

    let err = decode(&doc, Edition::ThreeTeam).unwrap_err();
    match err {
        DecodeError::Value { path, value, .. } => {
            assert_eq!(path, "grid[0][0][0]");
            assert_eq!(value, "2");
        }
        other => panic!("expected value error, got {other:?}"),
    }
}

#[test]
fn test_missing_teams_is_missing_field() {
    let mut doc = three_team_doc();
    doc.as_object_mut().unwrap().remove("teams");

    assert_eq!(
        decode(&doc, Edition::ThreeTeam),
        Err(DecodeError::MissingField("teams"))
    );
}

/// Missing keys are reported before any grid validation.
#[test]
fn test_missing_field_checked_before_shape() {
    let doc = json!({ "grid": [], "auto_action": [null, null, null] });
    assert_eq!(
        decode(&doc, Edition::ThreeTeam),
        Err(DecodeError::MissingField("end_action"))
    );
}

/// The first violation in document order is the one reported.
#[test]
fn test_first_violation_wins() {
    let mut doc = three_team_doc();
    doc["grid"][1][4] = json!([0, "yes", 0]);
    doc["grid"][2][0] = json!([5, true, 0]);
    doc["end_action"] = json!([null, 7, null]);

    let err = decode(&doc, Edition::ThreeTeam).unwrap_err();
    assert!(matches!(err, DecodeError::Value { ref path, .. } if path == "grid[1][4][1]"));
}

#[test]
fn test_bad_action_code() {
    let mut doc = three_team_doc();
    doc["end_action"] = json!([null, 3, null]);

    let err = decode(&doc, Edition::ThreeTeam).unwrap_err();
    assert!(matches!(err, DecodeError::Value { ref path, .. } if path == "end_action[1]"));
}

#[test]
fn test_bad_mobility_and_team_name() {
    let mut doc = three_team_doc();
    doc["mobility"] = json!([false, 1, false]);
    assert!(matches!(
        decode(&doc, Edition::ThreeTeam),
        Err(DecodeError::Value { .. })
    ));

    let mut doc = three_team_doc();
    doc["teams"] = json!(["555", 254, "1678"]);
    assert!(matches!(
        decode(&doc, Edition::ThreeTeam),
        Err(DecodeError::Value { .. })
    ));
}

/// Row lengths are all checked before any cell is read.
#[test]
fn test_ragged_row_reported_before_bad_cell() {
    let mut doc = three_team_doc();
    doc["grid"][0][0] = json!([2, true, 0]);
    doc["grid"][2].as_array_mut().unwrap().pop();

    let err = decode(&doc, Edition::ThreeTeam).unwrap_err();
    assert!(matches!(err, DecodeError::Shape { ref path, .. } if path == "grid[2]"));
}

/// Park is a valid action code anywhere; scoring it in auto is the error.
#[test]
fn test_auto_park_decodes_then_fails_to_score() {
    let mut doc = three_team_doc();
    doc["auto_action"] = json!([0, null, null]);

    let state = decode(&doc, Edition::ThreeTeam).unwrap();
    assert_eq!(state.auto_action[TeamId::new(0)], Some(ChargeAction::Park));
    assert_eq!(
        score(&state, None),
        Err(ScoreError::ContractViolation {
            action: ChargeAction::Park
        })
    );
    assert_eq!(score(&state, Some(TeamId::new(1))), Ok(0));
    assert_eq!(encode(&state), doc);
}

#[test]
fn test_malformed_text() {
    assert!(matches!(
        document::from_str("[1, 2", Edition::SingleTeam),
        Err(Error::Json(_))
    ));
}

// =============================================================================
// Compatibility
// =============================================================================

/// A single-team file as saved by the desktop score sheet.
#[test]
fn test_decode_single_team_file() {
    let text = r#"{"grid": [[[0, true], null, null, null, null, null, null, null, null],
                           [null, null, null, null, null, null, null, null, null],
                           [[1, false], [0, false], [1, true], null, null, null, null, null, null]],
                  "auto_action": 2, "end_action": 1, "mobility": true}"#;

    let state = document::from_str(text, Edition::SingleTeam).unwrap();

    assert_eq!(
        state.grid.get(GridHeight::Low, 0),
        Some(&Placement::new(GamePiece::Cube, TeamId::new(0)).in_auto())
    );
    assert_eq!(state.auto_action[TeamId::new(0)], Some(ChargeAction::Engaged));
    assert_eq!(state.end_action[TeamId::new(0)], Some(ChargeAction::Docked));

    // Low auto 3 + High 5+5+6 + link 5 + engaged auto 12 + docked 6 + mobility 3
    assert_eq!(score(&state, None), Ok(3 + 16 + 5 + 12 + 6 + 3));
}

/// A three-team file as saved by the desktop score sheet.
#[test]
fn test_decode_three_team_file() {
    let mut doc = three_team_doc();
    doc["grid"][1][3] = json!([1, false, 2]);
    doc["auto_action"] = json!([1, null, null]);
    doc["end_action"] = json!([0, 2, null]);
    doc["mobility"] = json!([true, false, true]);
    doc["teams"] = json!(["555", "1678", "254"]);

    let state = decode(&doc, Edition::ThreeTeam).unwrap();

    assert_eq!(state.grid.get(GridHeight::Mid, 3).unwrap().team, TeamId::new(2));
    assert_eq!(state.teams[TeamId::new(2)], "254");
    assert_eq!(encode(&state), doc);
}

// =============================================================================
// Round Trip
// =============================================================================

fn placement_strategy(team_count: u8) -> impl Strategy<Value = Placement> + Clone {
    (any::<bool>(), any::<bool>(), 0..team_count).prop_map(|(cone, auto, team)| Placement {
        piece: if cone { GamePiece::Cone } else { GamePiece::Cube },
        auto,
        team: TeamId::new(team),
    })
}

fn grid_strategy(team_count: u8) -> impl Strategy<Value = Grid> {
    let row = proptest::array::uniform9(proptest::option::of(placement_strategy(team_count)));
    proptest::array::uniform3(row).prop_map(|rows: [Row; 3]| Grid::from_rows(rows))
}

fn action_strategy(is_auto: bool) -> impl Strategy<Value = Option<ChargeAction>> {
    let actions: Vec<Option<ChargeAction>> = if is_auto {
        vec![None, Some(ChargeAction::Docked), Some(ChargeAction::Engaged)]
    } else {
        vec![
            None,
            Some(ChargeAction::Park),
            Some(ChargeAction::Docked),
            Some(ChargeAction::Engaged),
        ]
    };
    proptest::sample::select(actions)
}

fn state_strategy(edition: Edition) -> impl Strategy<Value = MatchState> {
    let n = edition.team_count();
    (
        grid_strategy(n as u8),
        proptest::collection::vec(action_strategy(true), n),
        proptest::collection::vec(action_strategy(false), n),
        proptest::collection::vec(any::<bool>(), n),
        proptest::collection::vec("[A-Za-z0-9 ]{0,12}", n),
    )
        .prop_map(move |(grid, auto, end, mobility, teams)| {
            let teams = match edition {
                Edition::ThreeTeam => TeamMap::from_vec(teams).unwrap(),
                Edition::SingleTeam => TeamMap::with_value(1, "1".to_string()),
            };
            MatchState::from_parts(
                edition,
                grid,
                TeamMap::from_vec(auto).unwrap(),
                TeamMap::from_vec(end).unwrap(),
                TeamMap::from_vec(mobility).unwrap(),
                teams,
            )
        })
}

proptest! {
    #[test]
    fn prop_three_team_round_trip(state in state_strategy(Edition::ThreeTeam)) {
        let decoded = decode(&encode(&state), Edition::ThreeTeam).unwrap();
        prop_assert_eq!(score(&decoded, None), score(&state, None));
        prop_assert_eq!(&decoded, &state);
    }

    #[test]
    fn prop_single_team_round_trip(state in state_strategy(Edition::SingleTeam)) {
        let text = document::to_string(&state);
        let decoded = document::from_str(&text, Edition::SingleTeam).unwrap();
        prop_assert_eq!(score(&decoded, None), score(&state, None));
        prop_assert_eq!(&decoded, &state);
    }

    #[test]
    fn prop_team_scores_never_include_links(state in state_strategy(Edition::ThreeTeam)) {
        let total = score(&state, None).unwrap();
        let team_sum: u32 = TeamId::all(3).map(|t| score(&state, Some(t)).unwrap()).sum();
        prop_assert_eq!(total - team_sum, rust_chargeup::rules::link_bonus(&state.grid));
    }
}
