//! Teams on a score sheet.
//!
//! A sheet tracks either one robot or a three-robot alliance. `TeamId`
//! names a slot on the sheet; `TeamMap` holds one value per slot (auto
//! action, end action, mobility, display name) and is always exactly as
//! long as the edition's team count.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

/// Largest team count any edition supports.
pub const MAX_TEAMS: usize = 3;

/// Slot of a team on the sheet, 0-based.
///
/// Displayed 1-based, the way the sheet labels its columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(pub u8);

impl TeamId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Every slot of a sheet with `team_count` teams.
    ///
    /// ```
    /// use rust_chargeup::core::TeamId;
    ///
    /// let teams: Vec<_> = TeamId::all(3).collect();
    /// assert_eq!(teams, vec![TeamId::new(0), TeamId::new(1), TeamId::new(2)]);
    /// ```
    pub fn all(team_count: usize) -> impl Iterator<Item = TeamId> {
        (0..team_count as u8).map(TeamId)
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team {}", self.0 + 1)
    }
}

/// One value per team, stored inline.
///
/// ```
/// use rust_chargeup::core::{TeamId, TeamMap};
///
/// let mut mobility: TeamMap<bool> = TeamMap::with_value(3, false);
/// mobility[TeamId::new(1)] = true;
///
/// assert_eq!(mobility.values().filter(|m| **m).count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TeamMap<T> {
    slots: SmallVec<[T; MAX_TEAMS]>,
}

impl<T> TeamMap<T> {
    /// Build a map by asking `factory` for each team's value.
    ///
    /// # Panics
    ///
    /// Panics unless `1 <= team_count <= MAX_TEAMS`.
    pub fn new(team_count: usize, factory: impl Fn(TeamId) -> T) -> Self {
        assert!(team_count > 0, "Must have at least 1 team");
        assert!(team_count <= MAX_TEAMS, "At most {MAX_TEAMS} teams supported");

        Self {
            slots: TeamId::all(team_count).map(factory).collect(),
        }
    }

    /// Every team starts with `value`.
    pub fn with_value(team_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(team_count, |_| value.clone())
    }

    /// Wrap values already in team order.
    ///
    /// Hands the values back when there are none or more than `MAX_TEAMS`.
    pub fn from_vec(values: Vec<T>) -> Result<Self, Vec<T>> {
        if values.is_empty() || values.len() > MAX_TEAMS {
            return Err(values);
        }
        Ok(Self {
            slots: SmallVec::from_vec(values),
        })
    }

    #[must_use]
    pub fn team_count(&self) -> usize {
        self.slots.len()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.slots.iter()
    }

    /// Reset every team to `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.slots.fill(value);
    }
}

impl<T> Index<TeamId> for TeamMap<T> {
    type Output = T;

    fn index(&self, team: TeamId) -> &T {
        &self.slots[team.index()]
    }
}

impl<T> IndexMut<TeamId> for TeamMap<T> {
    fn index_mut(&mut self, team: TeamId) -> &mut T {
        &mut self.slots[team.index()]
    }
}
