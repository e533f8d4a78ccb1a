//! Player roster types and ordering
//!
//! A roster is a plain slice of [`Player`] records. Team formation
//! consumes the roster strictly in order, so the only levers over who
//! lands on which team are the ordering helpers here, applied once
//! before generation starts.

use serde::{Deserialize, Serialize};

/// Competitive skill bracket of a player or match
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum SkillLevel {
    /// New or casual players
    Beginner,
    /// Club regulars
    Intermediate,
    /// Competitive players
    Advanced,
    /// Tournament-level players
    Professional,
    /// No single bracket, used for matches drawing from the whole roster
    #[default]
    Mixed,
}

impl SkillLevel {
    /// Numeric rank backing the descending skill sort
    ///
    /// `Mixed` ranks below every concrete bracket so unclassified
    /// players sort last.
    const fn rank(self) -> u8 {
        match self {
            Self::Professional => 5,
            Self::Advanced => 4,
            Self::Intermediate => 3,
            Self::Beginner => 2,
            Self::Mixed => 1,
        }
    }
}

/// A roster entry eligible for team assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Opaque identifier carried through into generated participants
    pub id: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Skill bracket, consulted only by the roster ordering helpers
    pub skill_level: SkillLevel,
}

/// How a roster is ordered before teams are formed
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RosterOrder {
    /// Keep the caller's order
    #[default]
    Unchanged,
    /// Strongest players first, ties keeping their relative order
    SkillDescending,
    /// Random order from the thread-local generator
    Random,
}

/// Returns the roster sorted by descending skill rank
///
/// The sort is stable, so players of equal rank keep their relative
/// order and repeated calls over the same roster yield the same
/// sequence.
pub fn sorted_by_skill(players: &[Player]) -> Vec<Player> {
    let mut sorted = players.to_vec();
    sorted.sort_by_key(|player| std::cmp::Reverse(player.skill_level.rank()));
    sorted
}

/// Returns the roster in a random order
pub fn shuffled(players: &[Player]) -> Vec<Player> {
    let mut shuffled = players.to_vec();
    fastrand::shuffle(&mut shuffled);
    shuffled
}

/// Applies the requested ordering to the roster
pub fn ordered(players: &[Player], order: RosterOrder) -> Vec<Player> {
    match order {
        RosterOrder::Unchanged => players.to_vec(),
        RosterOrder::SkillDescending => sorted_by_skill(players),
        RosterOrder::Random => shuffled(players),
    }
}
