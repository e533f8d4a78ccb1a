//! Match templates
//!
//! The engine's unit of output: a provisional match record shaped for
//! the persistence layer. Pairing leaves the scheduling fields unset;
//! the schedule pass fills them in, and unset fields stay out of the
//! serialized form entirely.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{participant::GeneratedParticipant, player::SkillLevel};

/// Format of play a match record represents
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum MatchType {
    /// One player per side
    Singles,
    /// Two or more players per side
    #[default]
    Doubles,
    /// Bracketed competitive play
    Tournament,
    /// Court upkeep block, no players
    Maintenance,
    /// Casual open play
    Social,
    /// No single format for the block
    Mixed,
}

/// A provisional match ready to be persisted
///
/// `court_id`, `date` and `time` start as `None` and are only set by
/// the schedule pass. `time` is rendered `"HH:MM"` to match the stored
/// record format.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchTemplate {
    /// Provisional id, unique within one generation run
    pub id: String,
    /// Headline naming both teams
    pub title: String,
    /// Format of play
    pub match_type: MatchType,
    /// Skill bracket of the match as a whole
    pub skill_level: SkillLevel,
    /// Assigned court, unset until scheduled
    pub court_id: Option<String>,
    /// Assigned calendar day, unset until scheduled
    pub date: Option<NaiveDate>,
    /// Assigned start time as `"HH:MM"`, unset until scheduled
    pub time: Option<String>,
    /// Length of the match in minutes
    pub duration_minutes: u32,
    /// Seat capacity across both sides
    pub max_players: usize,
    /// Longer summary naming the pairing
    pub description: String,
    /// Free-form notes carried onto the stored record
    pub notes: Option<String>,
    /// Seat assignments, the first team's players then the second's
    pub participants: Vec<GeneratedParticipant>,
}
