//! Participant assignment
//!
//! Turns an ordered roster into concrete team assignments. The builder
//! asks the calculator for a partition plan and walks the roster front
//! to back, dealing each team its share of players in input order. When
//! the plan is rejected it degrades through a ladder of smaller splits,
//! down to the two-teams-of-two minimum, and finally to the explicit
//! "no match possible" value. Nothing in this module fails; callers
//! check [`ParticipantAssignment::team_count`] instead of catching
//! errors.

use std::collections::HashMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    constants,
    partition::{calculate_team_sizes, folded_team_sizes},
    player::Player,
    team_id::{TeamId, allocate_team_ids},
};

/// One player's seat on a team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedParticipant {
    /// Id of the assigned player, as given in the roster
    pub player_id: String,
    /// Team the player was dealt onto
    pub team: TeamId,
}

/// The builder's result: every seat assignment plus the team count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantAssignment {
    /// Seat assignments, contiguous per team, in roster order
    pub participants: Vec<GeneratedParticipant>,
    /// Number of teams that received players
    pub team_count: usize,
}

impl ParticipantAssignment {
    /// The "no match possible" value
    ///
    /// Not an error: a roster too small for any split produces this,
    /// and callers treat it as nothing to schedule.
    fn none() -> Self {
        Self {
            participants: Vec::new(),
            team_count: 0,
        }
    }

    /// Whether the roster could not be split into any teams
    pub fn is_empty(&self) -> bool {
        self.team_count == 0
    }
}

/// Assigns players to teams using the preferred team size
///
/// Equivalent to [`build_participants_with_names`] with alphabet team
/// ids.
pub fn build_participants(players: &[Player], preferred_team_size: usize) -> ParticipantAssignment {
    build_participants_with_names(players, preferred_team_size, None)
}

/// Assigns players to teams, optionally under caller-chosen team names
///
/// The calculator's plan drives the split whenever it is valid for the
/// requested size. A rejected plan falls back to whatever full teams
/// the roster can fill, then to a two-team split, and finally to the
/// no-match value when fewer than 4 players remain. Players are always
/// consumed from the front of the roster in order, so identical inputs
/// produce identical assignments.
///
/// # Arguments
///
/// * `players` - Ordered roster to assign
/// * `preferred_team_size` - Base team size to aim for
/// * `custom_team_names` - Optional team id list, applied when it
///   covers every team formed
pub fn build_participants_with_names(
    players: &[Player],
    preferred_team_size: usize,
    custom_team_names: Option<&[String]>,
) -> ParticipantAssignment {
    if preferred_team_size == 0 {
        return ParticipantAssignment::none();
    }

    let plan = calculate_team_sizes(players.len(), Some(preferred_team_size));
    if plan.is_valid && plan.team_size == preferred_team_size && !plan.players_per_team.is_empty()
    {
        return assign_sequentially(players, &plan.players_per_team, custom_team_names);
    }

    fallback_assignment(players, preferred_team_size, custom_team_names)
}

/// Groups an assignment back into per-team rosters, in team order
///
/// Assignments keep each team's participants contiguous, so one
/// grouping pass rebuilds the rosters without sorting. Participants
/// whose player id is not in `players` are skipped.
pub fn team_rosters(
    players: &[Player],
    assignment: &ParticipantAssignment,
) -> Vec<(TeamId, Vec<Player>)> {
    let players_by_id: HashMap<&str, &Player> = players
        .iter()
        .map(|player| (player.id.as_str(), player))
        .collect();

    let grouped = assignment
        .participants
        .iter()
        .chunk_by(|participant| participant.team.clone());

    let mut rosters = Vec::new();
    for (team, group) in &grouped {
        let roster = group
            .filter_map(|participant| players_by_id.get(participant.player_id.as_str()).copied())
            .cloned()
            .collect_vec();
        rosters.push((team, roster));
    }
    rosters
}

/// Splits that remain possible after the calculator rejects the roster
fn fallback_assignment(
    players: &[Player],
    preferred_team_size: usize,
    custom_team_names: Option<&[String]>,
) -> ParticipantAssignment {
    let full_team_count = players.len() / preferred_team_size;

    if full_team_count >= constants::sizing::MIN_TEAM_COUNT {
        let players_per_team = folded_team_sizes(players.len(), preferred_team_size);
        return assign_sequentially(players, &players_per_team, custom_team_names);
    }

    if players.len() >= preferred_team_size * 2 {
        // Near-even halves with the odd player on the first team.
        let half = players.len() / 2;
        let players_per_team = vec![half + players.len() % 2, half];
        return assign_sequentially(players, &players_per_team, custom_team_names);
    }

    if players.len() >= constants::sizing::MIN_MATCH_PLAYERS {
        // Two teams of two is the smallest playable match. An odd
        // leftover player sits out entirely here rather than joining
        // either half.
        let half = players.len() / 2;
        let players_per_team = vec![half, half];
        return assign_sequentially(players, &players_per_team, custom_team_names);
    }

    ParticipantAssignment::none()
}

/// Deals players into teams front to back
///
/// Team `i` receives the next `players_per_team[i]` players from the
/// roster, capped at however many remain.
fn assign_sequentially(
    players: &[Player],
    players_per_team: &[usize],
    custom_team_names: Option<&[String]>,
) -> ParticipantAssignment {
    let team_ids = allocate_team_ids(players_per_team.len(), custom_team_names);
    let mut participants = Vec::new();
    let mut next_player = 0;

    for (team_id, &target_size) in team_ids.iter().zip(players_per_team) {
        let take = target_size.min(players.len() - next_player);
        for player in &players[next_player..next_player + take] {
            participants.push(GeneratedParticipant {
                player_id: player.id.clone(),
                team: team_id.clone(),
            });
        }
        next_player += take;
    }

    ParticipantAssignment {
        participants,
        team_count: team_ids.len(),
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::player::SkillLevel;

    fn create_test_players(count: usize) -> Vec<Player> {
        (1..=count)
            .map(|i| Player {
                id: format!("p{i}"),
                first_name: format!("First{i}"),
                last_name: format!("Last{i}"),
                skill_level: SkillLevel::Intermediate,
            })
            .collect()
    }

    fn players_on_team(assignment: &ParticipantAssignment, team: &str) -> usize {
        assignment
            .participants
            .iter()
            .filter(|participant| participant.team == TeamId::from(team))
            .count()
    }

    #[test]
    fn test_build_even_split_consumes_everyone() {
        let players = create_test_players(18);
        let assignment = build_participants(&players, 3);

        assert_eq!(assignment.team_count, 6);
        assert_eq!(assignment.participants.len(), 18);
        for team in ["A", "B", "C", "D", "E", "F"] {
            assert_eq!(players_on_team(&assignment, team), 3);
        }
    }

    #[test]
    fn test_build_folds_remainder_onto_last_team() {
        let players = create_test_players(22);
        let assignment = build_participants(&players, 3);

        assert_eq!(assignment.team_count, 7);
        assert_eq!(assignment.participants.len(), 22);
        for team in ["A", "B", "C", "D", "E", "F"] {
            assert_eq!(players_on_team(&assignment, team), 3);
        }
        assert_eq!(players_on_team(&assignment, "G"), 4);
    }

    #[test]
    fn test_build_large_fold() {
        let players = create_test_players(23);
        let assignment = build_participants(&players, 5);

        assert_eq!(assignment.team_count, 4);
        assert_eq!(players_on_team(&assignment, "D"), 8);
    }

    #[test]
    fn test_build_assigns_in_roster_order() {
        let players = create_test_players(8);
        let assignment = build_participants(&players, 4);

        for (index, participant) in assignment.participants.iter().enumerate() {
            assert_eq!(participant.player_id, players[index].id);
        }
        assert_eq!(players_on_team(&assignment, "A"), 4);
        assert_eq!(players_on_team(&assignment, "B"), 4);
    }

    #[test]
    fn test_build_no_player_appears_twice() {
        let players = create_test_players(17);
        let assignment = build_participants(&players, 4);

        let unique: HashSet<&str> = assignment
            .participants
            .iter()
            .map(|participant| participant.player_id.as_str())
            .collect();
        assert_eq!(unique.len(), assignment.participants.len());
        assert_eq!(assignment.participants.len(), 17);
    }

    #[test]
    fn test_build_four_players_minimum_split() {
        let players = create_test_players(4);
        let assignment = build_participants(&players, 3);

        assert_eq!(assignment.team_count, 2);
        assert_eq!(assignment.participants.len(), 4);
        assert_eq!(players_on_team(&assignment, "A"), 2);
        assert_eq!(players_on_team(&assignment, "B"), 2);
    }

    #[test]
    fn test_build_five_players_drops_the_odd_one_out() {
        // The minimum-viable split plays 2v2 and leaves the fifth
        // player unassigned. Known boundary, asserted on purpose.
        let players = create_test_players(5);
        let assignment = build_participants(&players, 3);

        assert_eq!(assignment.team_count, 2);
        assert_eq!(assignment.participants.len(), 4);
        assert!(
            assignment
                .participants
                .iter()
                .all(|participant| participant.player_id != "p5")
        );
    }

    #[test]
    fn test_build_large_preferred_size_still_plays_two_on_two() {
        let players = create_test_players(5);
        let assignment = build_participants(&players, 6);

        assert_eq!(assignment.team_count, 2);
        assert_eq!(assignment.participants.len(), 4);
    }

    #[test]
    fn test_build_too_few_players_is_no_match() {
        for count in 0..4 {
            let players = create_test_players(count);
            let assignment = build_participants(&players, 3);

            assert!(assignment.is_empty(), "{count} players cannot form a match");
            assert_eq!(assignment.team_count, 0);
            assert!(assignment.participants.is_empty());
        }
    }

    #[test]
    fn test_build_zero_team_size_is_no_match() {
        let players = create_test_players(10);
        let assignment = build_participants(&players, 0);

        assert!(assignment.is_empty());
    }

    #[test]
    fn test_build_with_custom_team_names() {
        let players = create_test_players(8);
        let names = vec!["Eagles".to_string(), "Hawks".to_string()];
        let assignment = build_participants_with_names(&players, 4, Some(&names));

        assert_eq!(players_on_team(&assignment, "Eagles"), 4);
        assert_eq!(players_on_team(&assignment, "Hawks"), 4);
    }

    #[test]
    fn test_build_short_custom_list_falls_back_to_alphabet() {
        let players = create_test_players(8);
        let names = vec!["Eagles".to_string()];
        let assignment = build_participants_with_names(&players, 4, Some(&names));

        assert_eq!(players_on_team(&assignment, "A"), 4);
        assert_eq!(players_on_team(&assignment, "B"), 4);
    }

    #[test]
    fn test_build_is_deterministic() {
        let players = create_test_players(13);
        let first = build_participants(&players, 4);

        for _ in 0..5 {
            assert_eq!(build_participants(&players, 4), first);
        }
    }

    #[test]
    fn test_team_rosters_preserve_assignment_order() {
        let players = create_test_players(10);
        let assignment = build_participants(&players, 4);
        let rosters = team_rosters(&players, &assignment);

        assert_eq!(rosters.len(), 2);
        assert_eq!(rosters[0].0, TeamId::from("A"));
        assert_eq!(rosters[0].1.len(), 4);
        assert_eq!(rosters[1].0, TeamId::from("B"));
        assert_eq!(rosters[1].1.len(), 6);
        assert_eq!(rosters[1].1[0].id, "p5");
    }

    #[test]
    fn test_team_rosters_empty_assignment() {
        let players = create_test_players(3);
        let assignment = build_participants(&players, 3);

        assert!(team_rosters(&players, &assignment).is_empty());
    }

    #[test]
    fn test_participant_serialization() {
        let participant = GeneratedParticipant {
            player_id: "p1".to_string(),
            team: TeamId::from("A"),
        };
        let serialized = serde_json::to_string(&participant).unwrap();
        assert_eq!(serialized, "{\"player_id\":\"p1\",\"team\":\"A\"}");
    }
}
