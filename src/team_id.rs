//! Team identifier allocation
//!
//! This module provides the team id token type and the positional
//! allocator that hands out stable, human-readable identifiers for a
//! generation run. The Nth team formed always receives the Nth id in
//! sequence, either from a caller-supplied list or from the uppercase
//! alphabet.

use std::{fmt::Display, str::FromStr};

use itertools::Itertools;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use thiserror::Error;

use crate::constants;

/// Errors that can occur when parsing a team id from text
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseTeamIdError {
    /// The input was empty or contained only whitespace
    #[error("team id cannot be empty")]
    Empty,
}

/// A short token identifying one team within a single generation run
///
/// Team ids are purely positional: they carry no meaning beyond their
/// place in the allocation sequence, and no two teams produced by the
/// same run share one. They serialize as their bare token (`"A"`,
/// `"Team 1"`), matching how the surrounding application stores them.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::From,
    SerializeDisplay,
    DeserializeFromStr,
)]
pub struct TeamId(String);

impl TeamId {
    /// Returns the token as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TeamId {
    /// Wraps a borrowed token without validation
    fn from(token: &str) -> Self {
        Self(token.to_owned())
    }
}

impl Display for TeamId {
    /// Formats the team id as its bare token
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamId {
    type Err = ParseTeamIdError;

    /// Parses a team id from text
    ///
    /// # Errors
    ///
    /// Returns [`ParseTeamIdError::Empty`] if the input is empty or
    /// contains only whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ParseTeamIdError::Empty);
        }
        Ok(Self(s.to_owned()))
    }
}

/// Allocates an ordered sequence of team ids
///
/// When `custom_names` is supplied and holds at least `count` entries,
/// its first `count` entries are returned verbatim, preserving
/// caller-chosen naming. Otherwise the first `count` letters of the
/// uppercase alphabet are used, silently truncating past the 26th team.
/// The truncation is a known ceiling rather than a failure: callers
/// that want more teams than letters must supply their own list.
///
/// # Arguments
///
/// * `count` - Number of team ids to allocate; zero yields an empty sequence
/// * `custom_names` - Optional replacement list of tokens
///
/// # Returns
///
/// An ordered list of at most `min(count, 26)` team ids (custom lists
/// are never truncated below `count`).
pub fn allocate_team_ids(count: usize, custom_names: Option<&[String]>) -> Vec<TeamId> {
    match custom_names {
        Some(names) if names.len() >= count => {
            names.iter().take(count).cloned().map(TeamId::from).collect_vec()
        }
        _ => constants::team::ALPHABET
            .chars()
            .take(count)
            .map(|letter| TeamId(letter.to_string()))
            .collect_vec(),
    }
}
