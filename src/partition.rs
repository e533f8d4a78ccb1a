//! Team partitioning plans
//!
//! Given a roster size and an optional preferred team size, the
//! calculator produces a [`TeamPartitionPlan`]: how many teams to form
//! and how many players land on each. Plans are data all the way down.
//! Impossible inputs come back as a plan with `is_valid` unset and a
//! human-readable reason, never as an error value the caller has to
//! catch.
//!
//! The partition arithmetic lives in exactly one place
//! ([`folded_team_sizes`]) so the calculator and the participant
//! builder can never disagree about where leftover players go.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants;

/// Reasons a partition request cannot be satisfied
///
/// The `Display` rendering of each variant is the exact description
/// carried by the invalid [`TeamPartitionPlan`] it produces.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionError {
    /// The roster is smaller than the minimum the request needs
    #[error("Not enough players for team matches (minimum {minimum} required)")]
    BelowMinimum {
        /// Player count the request would need to proceed
        minimum: usize,
    },
    /// The roster fills one team of the preferred size but not two
    #[error("Not enough players to form more than one full team of preferred size")]
    SingleTeamOnly,
    /// No candidate size produces a balanced set of teams
    #[error("Unable to create balanced teams with current player count")]
    NoBalancedConfiguration,
}

/// Preference for an odd or even number of teams
///
/// Only consulted when a preferred team size is supplied; flexible
/// sizing picks its own count.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display,
)]
pub enum TeamCountPreference {
    /// Accept whatever count the partition arithmetic produces
    #[default]
    #[display("auto")]
    Auto,
    /// Nudge the team count to the nearest viable odd number
    #[display("odd")]
    Odd,
    /// Nudge the team count to the nearest viable even number
    #[display("even")]
    Even,
}

/// One ranked partition candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamConfiguration {
    /// Base size every team except possibly the last is built at
    pub team_size: usize,
    /// Number of teams formed
    pub team_count: usize,
    /// Player count per team, in team order
    pub players_per_team: Vec<usize>,
    /// Human-readable summary of the split
    pub description: String,
    /// Share of the roster the split consumes, in percent
    ///
    /// Unbalanced candidates are filtered out before ranking, so this
    /// is always 100 and acts only as the leading tiebreaker.
    pub efficiency: u8,
    /// Whether every team ends up exactly `team_size` players
    pub is_optimal: bool,
}

/// The calculator's answer for one roster size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamPartitionPlan {
    /// Base team size the plan was built around, 0 when invalid
    pub team_size: usize,
    /// Number of teams to form, 0 when invalid
    pub team_count: usize,
    /// Player count per team, in team order, empty when invalid
    pub players_per_team: Vec<usize>,
    /// Whether the plan can actually be used to form teams
    ///
    /// Callers must check this before reading `players_per_team`.
    pub is_valid: bool,
    /// Summary of the split, or the reason no split exists
    pub description: String,
    /// Every viable candidate, best first, empty when invalid
    pub options: Vec<TeamConfiguration>,
}

impl TeamPartitionPlan {
    /// Builds the canonical invalid plan for `error`
    ///
    /// Invalid plans carry zeroed counts and an empty split so callers
    /// that skip the `is_valid` check still see harmless values.
    fn invalid(error: PartitionError) -> Self {
        Self {
            team_size: 0,
            team_count: 0,
            players_per_team: Vec::new(),
            is_valid: false,
            description: error.to_string(),
            options: Vec::new(),
        }
    }
}

/// Calculates how to partition `total_players` into teams
///
/// With a preferred team size, the roster must fill at least two full
/// teams; any leftover players fold onto the last team, which may grow
/// well past the preferred size. Without one, base sizes from 3 up to
/// `min(6, total_players / 2)` are searched and ranked, and the plan's
/// `options` list every viable candidate in rank order.
///
/// # Arguments
///
/// * `total_players` - Roster size to partition
/// * `preferred_team_size` - Exact base team size, or `None` for
///   flexible sizing
///
/// # Returns
///
/// A [`TeamPartitionPlan`]; degenerate inputs yield a plan with
/// `is_valid` unset rather than an error.
pub fn calculate_team_sizes(
    total_players: usize,
    preferred_team_size: Option<usize>,
) -> TeamPartitionPlan {
    match preferred_team_size {
        Some(team_size) => preferred_size_plan(total_players, team_size, TeamCountPreference::Auto),
        None => flexible_plan(total_players),
    }
}

/// Calculates a partition while steering toward an odd or even team count
///
/// [`TeamCountPreference::Auto`] reproduces [`calculate_team_sizes`]
/// exactly. `Odd`/`Even` move the preferred-size team count by one when
/// the natural count has the wrong parity and a neighbor is viable
/// (at least 2 teams, at least 3 players each); the reduced count wins
/// when both neighbors qualify. An adjusted count re-splits the roster
/// evenly with extra players going to the **first** teams, unlike the
/// fold-to-last rule of the unadjusted path. Flexible sizing ignores
/// the preference.
pub fn calculate_team_sizes_with_preference(
    total_players: usize,
    preferred_team_size: Option<usize>,
    preference: TeamCountPreference,
) -> TeamPartitionPlan {
    match preferred_team_size {
        Some(team_size) => preferred_size_plan(total_players, team_size, preference),
        None => flexible_plan(total_players),
    }
}

/// Splits `total_players` into full teams of `team_size`, folding any
/// remainder onto the last team
///
/// One enlarged final team is the intended outcome: leftover players
/// never spawn an extra undersized team and never spread across teams.
/// Returns an empty split when `team_size` is zero or no full team
/// fits.
pub(crate) fn folded_team_sizes(total_players: usize, team_size: usize) -> Vec<usize> {
    if team_size == 0 {
        return Vec::new();
    }
    let full_teams = total_players / team_size;
    let remainder = total_players % team_size;
    let mut players_per_team = vec![team_size; full_teams];
    if remainder > 0 {
        if let Some(last) = players_per_team.last_mut() {
            *last += remainder;
        }
    }
    players_per_team
}

/// Renders the standard split summary
fn describe_split(team_count: usize, team_size: usize, remainder: usize) -> String {
    if remainder == 0 {
        format!("{team_count} teams of {team_size} players each")
    } else {
        format!(
            "{} teams of {team_size} players + 1 team of {} players",
            team_count - 1,
            team_size + remainder
        )
    }
}

fn preferred_size_plan(
    total_players: usize,
    team_size: usize,
    preference: TeamCountPreference,
) -> TeamPartitionPlan {
    let minimum = team_size * 2;
    if total_players < minimum {
        return TeamPartitionPlan::invalid(PartitionError::BelowMinimum { minimum });
    }

    // Full-team division is undefined for a zero team size, so that
    // input falls through to the single-team rejection with the other
    // boundary cases the minimum check cannot reach.
    if team_size == 0 || total_players / team_size < 2 {
        return TeamPartitionPlan::invalid(PartitionError::SingleTeamOnly);
    }

    let base_count = total_players / team_size;
    let remainder = total_players % team_size;
    let adjusted_count = adjusted_team_count(base_count, total_players, preference);

    let (players_per_team, description) = if adjusted_count == base_count {
        (
            folded_team_sizes(total_players, team_size),
            describe_split(base_count, team_size, remainder),
        )
    } else {
        let spread = spread_team_sizes(total_players, adjusted_count);
        let description = format!(
            "{adjusted_count} teams ({preference} preference) with {} players",
            spread.iter().join(", ")
        );
        (spread, description)
    };

    let configuration = TeamConfiguration {
        team_size,
        team_count: adjusted_count,
        players_per_team: players_per_team.clone(),
        description: description.clone(),
        efficiency: constants::sizing::FULL_EFFICIENCY,
        is_optimal: remainder == 0 && adjusted_count == base_count,
    };

    TeamPartitionPlan {
        team_size,
        team_count: adjusted_count,
        players_per_team,
        is_valid: true,
        description,
        options: vec![configuration],
    }
}

fn flexible_plan(total_players: usize) -> TeamPartitionPlan {
    if total_players < constants::sizing::MIN_FLEXIBLE_PLAYERS {
        return TeamPartitionPlan::invalid(PartitionError::BelowMinimum {
            minimum: constants::sizing::MIN_FLEXIBLE_PLAYERS,
        });
    }

    let options = ranked_flexible_configurations(total_players);
    let Some(best) = options.first().cloned() else {
        return TeamPartitionPlan::invalid(PartitionError::NoBalancedConfiguration);
    };

    TeamPartitionPlan {
        team_size: best.team_size,
        team_count: best.team_count,
        players_per_team: best.players_per_team,
        is_valid: true,
        description: best.description,
        options,
    }
}

/// Enumerates and ranks every balanced flexible-size split
///
/// Candidate base sizes run from 3 to `min(6, total_players / 2)` so
/// at least two teams always form. Ranking is efficiency first, then
/// perfect divisions, then fewer teams.
fn ranked_flexible_configurations(total_players: usize) -> Vec<TeamConfiguration> {
    let max_size = constants::sizing::FLEXIBLE_MAX_TEAM_SIZE.min(total_players / 2);
    let mut configurations = (constants::sizing::FLEXIBLE_MIN_TEAM_SIZE..=max_size)
        .filter_map(|team_size| flexible_configuration(total_players, team_size))
        .collect_vec();

    configurations.sort_by(|a, b| {
        b.efficiency
            .cmp(&a.efficiency)
            .then_with(|| b.is_optimal.cmp(&a.is_optimal))
            .then_with(|| a.team_count.cmp(&b.team_count))
    });

    configurations
}

/// Evaluates one flexible candidate size, or rejects it
///
/// A nonzero remainder folds into the last team only while that team
/// stays within the flexible maximum; otherwise the candidate is
/// dropped entirely.
fn flexible_configuration(total_players: usize, team_size: usize) -> Option<TeamConfiguration> {
    let team_count = total_players / team_size;
    if team_count < constants::sizing::MIN_TEAM_COUNT {
        return None;
    }

    let remainder = total_players % team_size;
    if remainder > 0 && team_size + remainder > constants::sizing::FLEXIBLE_MAX_TEAM_SIZE {
        return None;
    }

    Some(TeamConfiguration {
        team_size,
        team_count,
        players_per_team: folded_team_sizes(total_players, team_size),
        description: describe_split(team_count, team_size, remainder),
        efficiency: constants::sizing::FULL_EFFICIENCY,
        is_optimal: remainder == 0,
    })
}

/// Moves the team count by one toward the requested parity
///
/// Returns `base_count` unchanged when it already matches, when the
/// preference is `Auto`, or when neither neighbor is viable. Neighbors
/// must keep at least 2 teams and at least 3 players per team.
fn adjusted_team_count(
    base_count: usize,
    total_players: usize,
    preference: TeamCountPreference,
) -> usize {
    let wants_odd = match preference {
        TeamCountPreference::Auto => return base_count,
        TeamCountPreference::Odd => true,
        TeamCountPreference::Even => false,
    };

    if (base_count % 2 == 1) == wants_odd {
        return base_count;
    }

    let max_viable = total_players / constants::sizing::FLEXIBLE_MIN_TEAM_SIZE;
    let mut candidates = Vec::new();
    if base_count - 1 >= constants::sizing::MIN_TEAM_COUNT {
        candidates.push(base_count - 1);
    }
    if base_count + 1 <= max_viable {
        candidates.push(base_count + 1);
    }

    candidates
        .into_iter()
        .find(|&count| (count % 2 == 1) == wants_odd)
        .unwrap_or(base_count)
}

/// Splits `total_players` into `team_count` near-even teams, giving
/// the first `total_players mod team_count` teams one extra player
fn spread_team_sizes(total_players: usize, team_count: usize) -> Vec<usize> {
    let base = total_players / team_count;
    let remainder = total_players % team_count;
    (0..team_count)
        .map(|index| if index < remainder { base + 1 } else { base })
        .collect_vec()
}
