//! Pieces, grid tiers, charge-station actions and placements.
//!
//! These are closed enums: every `match` over them is exhaustive, so adding
//! a variant forces every scoring and codec site to be revisited.

use serde::{Deserialize, Serialize};

use super::team::TeamId;

/// Physical game piece occupying a grid cell.
///
/// Cube and Cone score identically; the type only matters for which cells
/// the UI suggests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePiece {
    Cube,
    Cone,
}

impl GamePiece {
    /// Piece the UI places by default in an empty cell.
    ///
    /// The Low tier and columns 1, 4 and 7 take cubes; everything else
    /// takes cones.
    ///
    /// ```
    /// use rust_chargeup::core::{GamePiece, GridHeight};
    ///
    /// assert_eq!(GamePiece::suggested(GridHeight::High, 4), GamePiece::Cube);
    /// assert_eq!(GamePiece::suggested(GridHeight::Mid, 0), GamePiece::Cone);
    /// assert_eq!(GamePiece::suggested(GridHeight::Low, 0), GamePiece::Cube);
    /// ```
    #[must_use]
    pub const fn suggested(height: GridHeight, column: usize) -> Self {
        if matches!(height, GridHeight::Low) || column % 3 == 1 {
            GamePiece::Cube
        } else {
            GamePiece::Cone
        }
    }
}

/// One of the three horizontal tiers of the grid, ordered by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GridHeight {
    Low,
    Mid,
    High,
}

impl GridHeight {
    /// All tiers in storage and document order.
    pub const ALL: [GridHeight; 3] = [GridHeight::Low, GridHeight::Mid, GridHeight::High];

    /// Row index in storage and document order (Low = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            GridHeight::Low => 0,
            GridHeight::Mid => 1,
            GridHeight::High => 2,
        }
    }
}

impl std::fmt::Display for GridHeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GridHeight::Low => "Low",
            GridHeight::Mid => "Mid",
            GridHeight::High => "High",
        };
        f.write_str(name)
    }
}

/// A robot's declared state on the charge station.
///
/// Absence (`Option::None`) means no action was taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChargeAction {
    Park,
    Docked,
    Engaged,
}

impl ChargeAction {
    /// Next end-game action in the UI cycle: None, Park, Docked, Engaged.
    #[must_use]
    pub const fn next_end(action: Option<ChargeAction>) -> Option<ChargeAction> {
        match action {
            None => Some(ChargeAction::Park),
            Some(ChargeAction::Park) => Some(ChargeAction::Docked),
            Some(ChargeAction::Docked) => Some(ChargeAction::Engaged),
            Some(ChargeAction::Engaged) => None,
        }
    }

    /// Next autonomous action in the UI cycle: None, Docked, Engaged.
    ///
    /// Park is never produced since it cannot score in auto.
    #[must_use]
    pub const fn next_auto(action: Option<ChargeAction>) -> Option<ChargeAction> {
        match action {
            None | Some(ChargeAction::Park) => Some(ChargeAction::Docked),
            Some(ChargeAction::Docked) => Some(ChargeAction::Engaged),
            Some(ChargeAction::Engaged) => None,
        }
    }
}

impl std::fmt::Display for ChargeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ChargeAction::Park => "Park",
            ChargeAction::Docked => "Docked",
            ChargeAction::Engaged => "Engaged",
        };
        f.write_str(name)
    }
}

/// The occupant of a grid cell.
///
/// Placements are never edited in place; an edit replaces the whole value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// Piece type.
    pub piece: GamePiece,

    /// Scored during the autonomous period.
    pub auto: bool,

    /// Owning team. Always team 0 in the single-team edition.
    pub team: TeamId,
}

impl Placement {
    /// Create a teleop placement for `team`.
    #[must_use]
    pub const fn new(piece: GamePiece, team: TeamId) -> Self {
        Self {
            piece,
            auto: false,
            team,
        }
    }

    /// Mark as scored during auto.
    #[must_use]
    pub const fn in_auto(mut self) -> Self {
        self.auto = true;
        self
    }

    /// Same placement with the auto flag flipped.
    #[must_use]
    pub const fn toggled_auto(self) -> Self {
        Self {
            auto: !self.auto,
            ..self
        }
    }
}
