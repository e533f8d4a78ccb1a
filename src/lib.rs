//! # Matchgen Library
//!
//! This library provides the core roster logic for club match days. It
//! partitions a roster of players into balanced teams, assigns every player
//! to a team, generates match templates by pairing teams against each other,
//! and spreads the resulting matches across courts and time slots.
//!
//! Every stage is a pure function over its inputs: impossible rosters come
//! back as descriptive data (an invalid plan, an empty assignment) rather
//! than panics, so callers can surface the reason to the person organizing
//! the day.

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::similar_names)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::ignored_unit_patterns)]
#![allow(clippy::struct_field_names)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::wildcard_imports)]

pub mod constants;

pub mod generator;
pub mod pairing;
pub mod participant;
pub mod partition;
pub mod player;
pub mod schedule;
pub mod team_id;
pub mod template;

pub use generator::{GenerationOptions, GenerationOutcome, generate};
pub use pairing::{PairingStrategy, generate_matches, round_robin_shells};
pub use participant::{
    GeneratedParticipant, ParticipantAssignment, build_participants,
    build_participants_with_names, team_rosters,
};
pub use partition::{
    PartitionError, TeamConfiguration, TeamCountPreference, TeamPartitionPlan,
    calculate_team_sizes, calculate_team_sizes_with_preference,
};
pub use player::{Player, RosterOrder, SkillLevel};
pub use schedule::{ScheduleOptions, assign_courts_and_times};
pub use team_id::{TeamId, allocate_team_ids};
pub use template::{MatchTemplate, MatchType};
