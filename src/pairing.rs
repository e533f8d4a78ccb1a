//! Pairwise match generation
//!
//! Builds provisional match templates from per-team rosters. The two
//! strategies share one match constructor and differ only in which
//! team pairs meet: round robin visits every unordered pair once,
//! team-vs-team plays adjacent teams against each other.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    constants,
    participant::GeneratedParticipant,
    player::{Player, SkillLevel},
    team_id::TeamId,
    template::{MatchTemplate, MatchType},
};

/// Which team pairs meet
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PairingStrategy {
    /// Every team plays every other team exactly once
    #[default]
    RoundRobin,
    /// Adjacent teams pair off: first against second, third against
    /// fourth, with a trailing unpaired team sitting out
    TeamVsTeam,
}

/// Generates one match template per team pairing
///
/// Per side, the smaller of the preferred size and either roster
/// decides how many players take the court, drawn from the front of
/// each team's list. A pairing with an empty side is skipped without
/// disturbing the ids of the matches that follow, and fewer than two
/// teams produce no matches at all.
///
/// # Arguments
///
/// * `teams` - Per-team rosters in team order
/// * `preferred_team_size` - Upper bound on players fielded per side
/// * `strategy` - Which team pairs meet
pub fn generate_matches(
    teams: &[(TeamId, Vec<Player>)],
    preferred_team_size: usize,
    strategy: PairingStrategy,
) -> Vec<MatchTemplate> {
    let pairs: Vec<_> = match strategy {
        PairingStrategy::RoundRobin => teams.iter().tuple_combinations().collect(),
        PairingStrategy::TeamVsTeam => teams.iter().tuples().collect(),
    };

    let mut matches = Vec::new();
    for ((team_a, roster_a), (team_b, roster_b)) in pairs {
        let players_per_side = preferred_team_size.min(roster_a.len()).min(roster_b.len());
        if players_per_side == 0 {
            continue;
        }
        matches.push(build_match(
            matches.len(),
            strategy,
            team_a,
            roster_a,
            team_b,
            roster_b,
            players_per_side,
        ));
    }
    matches
}

/// Generates participant-less round-robin templates for pre-formed teams
///
/// One Doubles template per unordered team pair, with the seats left
/// open for a later assignment pass.
pub fn round_robin_shells(teams: &[TeamId]) -> Vec<MatchTemplate> {
    teams
        .iter()
        .tuple_combinations()
        .enumerate()
        .map(|(index, (team_a, team_b))| MatchTemplate {
            id: format!("rr-match-{index}"),
            title: format!("Team {team_a} vs Team {team_b}"),
            match_type: MatchType::Doubles,
            skill_level: SkillLevel::Mixed,
            court_id: None,
            date: None,
            time: None,
            duration_minutes: constants::matches::DEFAULT_DURATION_MINUTES,
            max_players: 4,
            description: format!("Round Robin: Team {team_a} vs Team {team_b}"),
            notes: Some("Round Robin tournament match".to_string()),
            participants: Vec::new(),
        })
        .collect_vec()
}

fn build_match(
    index: usize,
    strategy: PairingStrategy,
    team_a: &TeamId,
    roster_a: &[Player],
    team_b: &TeamId,
    roster_b: &[Player],
    players_per_side: usize,
) -> MatchTemplate {
    let match_type = if players_per_side == 1 {
        MatchType::Singles
    } else {
        MatchType::Doubles
    };

    let participants = front_of_team(team_a, roster_a, players_per_side)
        .chain(front_of_team(team_b, roster_b, players_per_side))
        .collect_vec();

    let (id, description, notes) = match strategy {
        PairingStrategy::RoundRobin => (
            format!("rr-match-{index}"),
            format!("Round Robin: Team {team_a} vs Team {team_b}"),
            "Round Robin tournament match",
        ),
        PairingStrategy::TeamVsTeam => (
            format!("tvsm-{index}"),
            format!("Team vs Team: {team_a} vs {team_b}"),
            "Paired team match with balanced player assignments",
        ),
    };

    MatchTemplate {
        id,
        title: format!("Team {team_a} vs Team {team_b}"),
        match_type,
        skill_level: SkillLevel::Mixed,
        court_id: None,
        date: None,
        time: None,
        duration_minutes: constants::matches::DEFAULT_DURATION_MINUTES,
        max_players: players_per_side * 2,
        description,
        notes: Some(notes.to_string()),
        participants,
    }
}

/// The first `count` players of a team, as seat assignments
fn front_of_team<'a>(
    team: &'a TeamId,
    roster: &'a [Player],
    count: usize,
) -> impl Iterator<Item = GeneratedParticipant> + 'a {
    roster.iter().take(count).map(move |player| GeneratedParticipant {
        player_id: player.id.clone(),
        team: team.clone(),
    })
}
