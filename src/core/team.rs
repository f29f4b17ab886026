//! Team identification and per-team data storage.
//!
//! ## TeamId
//!
//! A match always has exactly two teams, `A` and `B`. Team A opens the
//! match and the teams alternate rounds from then on.
//!
//! ## TeamMap
//!
//! Fixed two-slot storage indexed by `TeamId`, used for names, scores
//! and per-team statistics.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two teams in a match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamId {
    /// The team that plays the first round of every set.
    #[default]
    A,
    /// The team that plays the second round of every set.
    B,
}

impl TeamId {
    /// Get the raw team index (A = 0, B = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            TeamId::A => 0,
            TeamId::B => 1,
        }
    }

    /// The opposing team.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            TeamId::A => TeamId::B,
            TeamId::B => TeamId::A,
        }
    }

    /// Iterate over both teams in play order.
    ///
    /// ```
    /// use taboo_engine::core::TeamId;
    ///
    /// let teams: Vec<_> = TeamId::all().collect();
    /// assert_eq!(teams, vec![TeamId::A, TeamId::B]);
    /// ```
    pub fn all() -> impl Iterator<Item = TeamId> {
        [TeamId::A, TeamId::B].into_iter()
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamId::A => write!(f, "Team A"),
            TeamId::B => write!(f, "Team B"),
        }
    }
}

/// Per-team data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use taboo_engine::core::{TeamId, TeamMap};
///
/// let mut scores: TeamMap<u32> = TeamMap::with_value(0);
/// scores[TeamId::B] += 10;
///
/// assert_eq!(scores[TeamId::A], 0);
/// assert_eq!(scores[TeamId::B], 10);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamMap<T> {
    data: [T; 2],
}

impl<T> TeamMap<T> {
    /// Create a TeamMap with values from a factory function.
    pub fn new(factory: impl Fn(TeamId) -> T) -> Self {
        Self {
            data: [factory(TeamId::A), factory(TeamId::B)],
        }
    }

    /// Create a TeamMap from explicit values for A and B.
    pub fn from_pair(a: T, b: T) -> Self {
        Self { data: [a, b] }
    }

    /// Create a TeamMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a team's data.
    #[must_use]
    pub fn get(&self, team: TeamId) -> &T {
        &self.data[team.index()]
    }

    /// Get a mutable reference to a team's data.
    pub fn get_mut(&mut self, team: TeamId) -> &mut T {
        &mut self.data[team.index()]
    }

    /// Iterate over (TeamId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (TeamId, &T)> {
        TeamId::all().zip(self.data.iter())
    }

    /// Map both entries into a new TeamMap.
    pub fn map<U>(&self, f: impl Fn(TeamId, &T) -> U) -> TeamMap<U> {
        TeamMap::new(|team| f(team, self.get(team)))
    }
}

impl<T> Index<TeamId> for TeamMap<T> {
    type Output = T;

    fn index(&self, team: TeamId) -> &Self::Output {
        self.get(team)
    }
}

impl<T> IndexMut<TeamId> for TeamMap<T> {
    fn index_mut(&mut self, team: TeamId) -> &mut Self::Output {
        self.get_mut(team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_id_basics() {
        assert_eq!(TeamId::A.index(), 0);
        assert_eq!(TeamId::B.index(), 1);
        assert_eq!(TeamId::A.other(), TeamId::B);
        assert_eq!(TeamId::B.other(), TeamId::A);
        assert_eq!(format!("{}", TeamId::B), "Team B");
    }

    #[test]
    fn test_team_map_new() {
        let map: TeamMap<usize> = TeamMap::new(|t| t.index() * 10);

        assert_eq!(map[TeamId::A], 0);
        assert_eq!(map[TeamId::B], 10);
    }

    #[test]
    fn test_team_map_mutation() {
        let mut map = TeamMap::from_pair("Red".to_string(), "Blue".to_string());
        map[TeamId::A].push_str(" Foxes");

        assert_eq!(map[TeamId::A], "Red Foxes");
        assert_eq!(map[TeamId::B], "Blue");
    }

    #[test]
    fn test_team_map_iter_and_map() {
        let map: TeamMap<u32> = TeamMap::from_pair(3, 7);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(TeamId::A, &3), (TeamId::B, &7)]);

        let doubled = map.map(|_, v| v * 2);
        assert_eq!(doubled, TeamMap::from_pair(6, 14));
    }

    #[test]
    fn test_team_map_serialization() {
        let map = TeamMap::from_pair(1u32, 2u32);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: TeamMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
