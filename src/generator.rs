//! End-to-end match generation
//!
//! Chains the engine's stages into one call: order the roster, compute
//! the partition plan, deal players onto teams, pair the teams into
//! matches, then assign courts and start times. Every stage keeps its
//! data-not-errors contract, so the pipeline is total: impossible
//! inputs come back as an invalid plan with an empty match list.

use chrono::NaiveDate;
use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::{
    constants,
    pairing::{PairingStrategy, generate_matches},
    participant::{ParticipantAssignment, build_participants_with_names, team_rosters},
    partition::{TeamPartitionPlan, calculate_team_sizes},
    player::{Player, RosterOrder, ordered},
    schedule::{ScheduleOptions, assign_courts_and_times},
    template::MatchTemplate,
};

/// Caller-facing settings for one generation run
///
/// Validation is the caller's gate: run [`Validate::validate`] on
/// values arriving from outside before generating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct GenerationOptions {
    /// Base team size the partition aims for
    #[garde(range(min = 1))]
    pub preferred_team_size: usize,
    /// How the roster is ordered before teams form
    #[garde(skip)]
    pub roster_order: RosterOrder,
    /// Which team pairs meet
    #[garde(skip)]
    pub strategy: PairingStrategy,
    /// Caller-chosen team names, used when the list covers every team
    #[garde(skip)]
    pub team_names: Option<Vec<String>>,
    /// Courts, playable window and calendar day for the schedule pass
    #[garde(dive)]
    pub schedule: ScheduleOptions,
}

impl GenerationOptions {
    /// Standard settings for `date`: teams of 4, roster order kept,
    /// full round robin, alphabet team names, club-day schedule
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            preferred_team_size: constants::sizing::DEFAULT_TEAM_SIZE,
            roster_order: RosterOrder::Unchanged,
            strategy: PairingStrategy::RoundRobin,
            team_names: None,
            schedule: ScheduleOptions::for_date(date),
        }
    }
}

/// Everything one generation run produces
///
/// The plan reports what the calculator thought of the roster size.
/// It can be invalid while `matches` is still populated: the
/// participant builder degrades to smaller splits the calculator's
/// strict gate rejects, and those teams still play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOutcome {
    /// The partition plan for the roster size
    pub plan: TeamPartitionPlan,
    /// Seat assignments backing the matches
    pub assignment: ParticipantAssignment,
    /// Scheduled match templates, ready to persist
    pub matches: Vec<MatchTemplate>,
}

impl GenerationOutcome {
    /// Converts the outcome to a JSON string for persistence
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_record(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}

/// Runs the whole engine over one roster
///
/// Identical inputs produce identical outcomes for every roster order
/// except [`RosterOrder::Random`], which draws from the thread-local
/// generator once, up front; the stages beneath stay deterministic in
/// the shuffled roster.
///
/// # Arguments
///
/// * `players` - Available roster, in the caller's order
/// * `options` - Settings for every stage, taken as given
///
/// # Returns
///
/// The partition plan, the seat assignments, and the scheduled
/// matches. Callers check `plan.is_valid` and
/// [`ParticipantAssignment::is_empty`] rather than handling errors.
pub fn generate(players: &[Player], options: &GenerationOptions) -> GenerationOutcome {
    let roster = ordered(players, options.roster_order);

    let plan = calculate_team_sizes(roster.len(), Some(options.preferred_team_size));
    let assignment = build_participants_with_names(
        &roster,
        options.preferred_team_size,
        options.team_names.as_deref(),
    );

    let rosters = team_rosters(&roster, &assignment);
    let mut matches = generate_matches(&rosters, options.preferred_team_size, options.strategy);

    let slots = options.schedule.time_slots();
    assign_courts_and_times(
        &mut matches,
        &slots,
        &options.schedule.courts,
        options.schedule.date,
        options.schedule.start_time,
    );

    GenerationOutcome {
        plan,
        assignment,
        matches,
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use chrono::NaiveDate;

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

    fn create_test_options(preferred_team_size: usize) -> GenerationOptions {
        let mut options =
            GenerationOptions::for_date(NaiveDate::from_ymd_opt(2025, 6, 14).unwrap());
        options.preferred_team_size = preferred_team_size;
        options.schedule.courts = vec!["court-1".to_string(), "court-2".to_string()];
        options
    }

    #[test]
    fn test_generate_full_pipeline() {
        let players = create_test_players(8);
        let options = create_test_options(4);

        let outcome = generate(&players, &options);

        assert!(outcome.plan.is_valid);
        assert_eq!(outcome.plan.players_per_team, vec![4, 4]);
        assert_eq!(outcome.assignment.team_count, 2);
        assert_eq!(outcome.assignment.participants.len(), 8);

        assert_eq!(outcome.matches.len(), 1);
        let team_match = &outcome.matches[0];
        assert_eq!(team_match.id, "rr-match-0");
        assert_eq!(team_match.title, "Team A vs Team B");
        assert_eq!(team_match.participants.len(), 8);
        assert_eq!(team_match.max_players, 8);
        assert_eq!(team_match.court_id.as_deref(), Some("court-1"));
        assert_eq!(team_match.time.as_deref(), Some("09:00"));
        assert_eq!(team_match.date, Some(options.schedule.date));
    }

    #[test]
    fn test_generate_round_robin_match_count() {
        let players = create_test_players(12);
        let options = create_test_options(3);

        let outcome = generate(&players, &options);

        assert_eq!(outcome.assignment.team_count, 4);
        assert_eq!(outcome.matches.len(), 6);
    }

    #[test]
    fn test_generate_team_vs_team_match_count() {
        let players = create_test_players(12);
        let mut options = create_test_options(3);
        options.strategy = PairingStrategy::TeamVsTeam;

        let outcome = generate(&players, &options);

        assert_eq!(outcome.matches.len(), 2);
        assert_eq!(outcome.matches[0].id, "tvsm-0");
    }

    #[test]
    fn test_generate_small_roster_plays_despite_invalid_plan() {
        let players = create_test_players(5);
        let options = create_test_options(3);

        let outcome = generate(&players, &options);

        assert!(!outcome.plan.is_valid);
        assert_eq!(outcome.assignment.team_count, 2);
        assert_eq!(outcome.assignment.participants.len(), 4);
        assert_eq!(outcome.matches.len(), 1);
        assert_eq!(outcome.matches[0].participants.len(), 4);
    }

    #[test]
    fn test_generate_too_few_players_produces_nothing() {
        let players = create_test_players(3);
        let options = create_test_options(3);

        let outcome = generate(&players, &options);

        assert!(!outcome.plan.is_valid);
        assert!(outcome.assignment.is_empty());
        assert!(outcome.matches.is_empty());
    }

    #[test]
    fn test_generate_is_deterministic_without_shuffle() {
        let players = create_test_players(13);
        let options = create_test_options(4);

        let first = generate(&players, &options);
        for _ in 0..5 {
            assert_eq!(generate(&players, &options), first);
        }
    }

    #[test]
    fn test_generate_skill_ordering_fills_first_team_with_strongest() {
        let skills = [
            SkillLevel::Beginner,
            SkillLevel::Professional,
            SkillLevel::Beginner,
            SkillLevel::Advanced,
            SkillLevel::Intermediate,
            SkillLevel::Professional,
            SkillLevel::Beginner,
            SkillLevel::Advanced,
        ];
        let players: Vec<Player> = skills
            .iter()
            .enumerate()
            .map(|(i, &skill_level)| Player {
                id: format!("p{}", i + 1),
                first_name: format!("First{}", i + 1),
                last_name: format!("Last{}", i + 1),
                skill_level,
            })
            .collect();

        let mut options = create_test_options(4);
        options.roster_order = RosterOrder::SkillDescending;

        let outcome = generate(&players, &options);

        let first_team: Vec<&str> = outcome
            .assignment
            .participants
            .iter()
            .take(4)
            .map(|participant| participant.player_id.as_str())
            .collect();
        assert_eq!(first_team, vec!["p2", "p6", "p4", "p8"]);
    }

    #[test]
    fn test_generate_without_courts_leaves_matches_unscheduled() {
        let players = create_test_players(8);
        let mut options = create_test_options(4);
        options.schedule.courts.clear();

        let outcome = generate(&players, &options);

        assert_eq!(outcome.matches.len(), 1);
        assert_eq!(outcome.matches[0].court_id, None);
        assert_eq!(outcome.matches[0].date, None);
        assert_eq!(outcome.matches[0].time, None);
    }

    #[test]
    fn test_generate_with_custom_team_names() {
        let players = create_test_players(8);
        let mut options = create_test_options(4);
        options.team_names = Some(vec!["North".to_string(), "South".to_string()]);

        let outcome = generate(&players, &options);

        assert_eq!(outcome.matches[0].title, "Team North vs Team South");
    }

    #[test]
    fn test_options_validation() {
        let valid = create_test_options(4);
        assert!(valid.validate().is_ok());

        let mut zero_size = create_test_options(4);
        zero_size.preferred_team_size = 0;
        assert!(zero_size.validate().is_err());

        let mut bad_schedule = create_test_options(4);
        bad_schedule.schedule.duration_minutes = 5;
        assert!(bad_schedule.validate().is_err());
    }

    #[test]
    fn test_outcome_serialization() {
        let players = create_test_players(8);
        let options = create_test_options(4);

        let outcome = generate(&players, &options);
        let serialized = outcome.to_record();
        assert!(serialized.contains("rr-match-0"));

        let deserialized: GenerationOutcome = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, outcome);
    }
}
