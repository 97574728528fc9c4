//! Point values and score computation.
//!
//! Every function here is a pure recomputation from the state passed in;
//! nothing is cached between queries.
//!
//! ## Link bonus attribution
//!
//! Links belong to the alliance, not to the team that placed any one of
//! their pieces. The alliance total (`team = None`) counts every link once;
//! a team-scoped score never includes link points.

use log::warn;

use crate::core::{ChargeAction, Grid, GridHeight, MatchState, Placement, TeamId, TeamMap};
use crate::error::ScoreError;

/// Points for each link.
pub const LINK_POINTS: u32 = 5;

/// Bonus for a piece scored during auto.
pub const AUTO_PIECE_BONUS: u32 = 1;

/// Bonus for a docked or engaged robot at the end of auto.
pub const AUTO_CHARGE_BONUS: u32 = 2;

/// Points for leaving the community during auto.
pub const MOBILITY_POINTS: u32 = 3;

impl GridHeight {
    /// Teleop value of a piece on this tier.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            GridHeight::Low => 2,
            GridHeight::Mid => 3,
            GridHeight::High => 5,
        }
    }
}

impl ChargeAction {
    /// End-game value, before any auto bonus.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            ChargeAction::Park => 2,
            ChargeAction::Docked => 6,
            ChargeAction::Engaged => 10,
        }
    }
}

/// Value of one cell. Piece type does not matter.
#[must_use]
pub fn score_piece(placement: Option<&Placement>, height: GridHeight) -> u32 {
    match placement {
        None => 0,
        Some(p) if p.auto => height.points() + AUTO_PIECE_BONUS,
        Some(_) => height.points(),
    }
}

/// Total link bonus for the grid, independent of team.
#[must_use]
pub fn link_bonus(grid: &Grid) -> u32 {
    grid.links().count() as u32 * LINK_POINTS
}

/// Score the grid.
///
/// - `team = None`: link bonus plus every piece.
/// - `team = Some(t)`: only pieces owned by `t`, no link bonus.
#[must_use]
pub fn score_grid(grid: &Grid, team: Option<TeamId>) -> u32 {
    let pieces: u32 = grid
        .placements()
        .filter(|(_, _, p)| team.map_or(true, |t| p.team == t))
        .map(|(height, _, p)| score_piece(Some(p), height))
        .sum();

    match team {
        None => link_bonus(grid) + pieces,
        Some(_) => pieces,
    }
}

/// Score a charge-station action.
///
/// Park cannot be declared for auto; asking for its auto score is a caller
/// bug and returns [`ScoreError::ContractViolation`].
///
/// ```
/// use rust_chargeup::core::ChargeAction;
/// use rust_chargeup::rules::score_action;
///
/// assert_eq!(score_action(false, Some(ChargeAction::Docked)), Ok(6));
/// assert_eq!(score_action(true, Some(ChargeAction::Engaged)), Ok(12));
/// assert!(score_action(true, Some(ChargeAction::Park)).is_err());
/// ```
pub fn score_action(is_auto: bool, action: Option<ChargeAction>) -> Result<u32, ScoreError> {
    let bonus = if is_auto { AUTO_CHARGE_BONUS } else { 0 };

    match action {
        None => Ok(0),
        Some(ChargeAction::Park) if is_auto => {
            warn!("rejected auto score request for Park");
            Err(ScoreError::ContractViolation {
                action: ChargeAction::Park,
            })
        }
        Some(ChargeAction::Park) => Ok(ChargeAction::Park.points()),
        Some(action @ (ChargeAction::Docked | ChargeAction::Engaged)) => Ok(action.points() + bonus),
    }
}

fn mobility_points(moved: bool) -> u32 {
    if moved {
        MOBILITY_POINTS
    } else {
        0
    }
}

/// Score one team's auto action, end action and mobility.
fn team_actions(state: &MatchState, team: TeamId) -> Result<u32, ScoreError> {
    Ok(score_action(true, state.auto_action[team])?
        + score_action(false, state.end_action[team])?
        + mobility_points(state.mobility[team]))
}

/// Score a match.
///
/// - `team = None`: the alliance total. Grid with link bonus, plus every
///   team's actions and mobility. For the single-team edition this is the
///   whole score sheet.
/// - `team = Some(t)`: team `t`'s pieces, actions and mobility; no links.
pub fn score(state: &MatchState, team: Option<TeamId>) -> Result<u32, ScoreError> {
    match team {
        None => {
            let mut total = score_grid(&state.grid, None);
            for t in state.team_ids() {
                total += team_actions(state, t)?;
            }
            Ok(total)
        }
        Some(t) if state.edition().has_team(t) => {
            Ok(score_grid(&state.grid, Some(t)) + team_actions(state, t)?)
        }
        Some(t) => Err(ScoreError::UnknownTeam {
            team: t,
            team_count: state.team_count(),
        }),
    }
}

/// Alliance total plus each team's scoped score.
///
/// The team scores do not sum to the total: links only count toward the
/// total.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scoreboard {
    pub total: u32,
    pub teams: TeamMap<u32>,
}

impl Scoreboard {
    /// Compute every score for a match.
    pub fn compute(state: &MatchState) -> Result<Self, ScoreError> {
        let total = score(state, None)?;

        let mut teams = TeamMap::with_value(state.team_count(), 0);
        for t in state.team_ids() {
            teams[t] = score(state, Some(t))?;
        }

        Ok(Self { total, teams })
    }

    /// Points not attributed to any team (the link bonus).
    #[must_use]
    pub fn unattributed(&self) -> u32 {
        self.total - self.teams.values().sum::<u32>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Edition, GamePiece};

    fn piece(team: u8) -> Placement {
        Placement::new(GamePiece::Cone, TeamId::new(team))
    }

    #[test]
    fn test_score_piece_values() {
        assert_eq!(score_piece(None, GridHeight::High), 0);
        assert_eq!(score_piece(Some(&piece(0)), GridHeight::Low), 2);
        assert_eq!(score_piece(Some(&piece(0)), GridHeight::Mid), 3);
        assert_eq!(score_piece(Some(&piece(0)), GridHeight::High), 5);
        assert_eq!(score_piece(Some(&piece(0).in_auto()), GridHeight::Low), 3);
        assert_eq!(score_piece(Some(&piece(0).in_auto()), GridHeight::High), 6);
    }

    #[test]
    fn test_piece_type_irrelevant() {
        let cube = Placement::new(GamePiece::Cube, TeamId::new(0));
        let cone = Placement::new(GamePiece::Cone, TeamId::new(0));
        for height in GridHeight::ALL {
            assert_eq!(score_piece(Some(&cube), height), score_piece(Some(&cone), height));
        }
    }

    #[test]
    fn test_score_action_table() {
        for is_auto in [false, true] {
            assert_eq!(score_action(is_auto, None), Ok(0));
        }
        assert_eq!(score_action(false, Some(ChargeAction::Park)), Ok(2));
        assert_eq!(score_action(false, Some(ChargeAction::Docked)), Ok(6));
        assert_eq!(score_action(false, Some(ChargeAction::Engaged)), Ok(10));
        assert_eq!(score_action(true, Some(ChargeAction::Docked)), Ok(8));
        assert_eq!(score_action(true, Some(ChargeAction::Engaged)), Ok(12));
    }

    #[test]
    fn test_auto_park_is_contract_violation() {
        assert_eq!(
            score_action(true, Some(ChargeAction::Park)),
            Err(ScoreError::ContractViolation {
                action: ChargeAction::Park
            })
        );
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::new();
        assert_eq!(score_grid(&grid, None), 0);
        assert_eq!(score_grid(&grid, Some(TeamId::new(0))), 0);
    }

    #[test]
    fn test_single_auto_high_piece() {
        let mut grid = Grid::new();
        grid.set(GridHeight::High, 0, Some(piece(0).in_auto()));
        assert_eq!(score_grid(&grid, None), 6);
    }

    #[test]
    fn test_team_scope_excludes_links() {
        let mut grid = Grid::new();
        for column in 0..3 {
            grid.set(GridHeight::Low, column, Some(piece(1)));
        }

        assert_eq!(score_grid(&grid, None), 6 + LINK_POINTS);
        assert_eq!(score_grid(&grid, Some(TeamId::new(1))), 6);
        assert_eq!(score_grid(&grid, Some(TeamId::new(0))), 0);
    }

    #[test]
    fn test_score_unknown_team() {
        let state = MatchState::new(Edition::SingleTeam);
        assert_eq!(
            score(&state, Some(TeamId::new(1))),
            Err(ScoreError::UnknownTeam {
                team: TeamId::new(1),
                team_count: 1
            })
        );
    }

    #[test]
    fn test_score_propagates_contract_violation() {
        let mut state = MatchState::new(Edition::ThreeTeam);
        state.auto_action[TeamId::new(2)] = Some(ChargeAction::Park);

        assert!(score(&state, None).is_err());
        assert!(score(&state, Some(TeamId::new(2))).is_err());
        assert_eq!(score(&state, Some(TeamId::new(0))), Ok(0));
    }

    #[test]
    fn test_scoreboard_unattributed_is_link_bonus() {
        let mut state = MatchState::new(Edition::ThreeTeam);
        for column in 0..6 {
            state
                .grid
                .set(GridHeight::Mid, column, Some(piece((column % 3) as u8)));
        }
        state.mobility[TeamId::new(0)] = true;

        let board = Scoreboard::compute(&state).unwrap();
        assert_eq!(board.unattributed(), 2 * LINK_POINTS);
        assert_eq!(board.total, 6 * 3 + 2 * LINK_POINTS + MOBILITY_POINTS);
        assert_eq!(board.teams[TeamId::new(0)], 6 + MOBILITY_POINTS);
    }
}
