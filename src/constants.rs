//! Configuration constants for the match generation engine
//!
//! This module contains the sizing thresholds, naming alphabet, and
//! scheduling defaults used throughout the engine. Keeping them in one
//! place ensures the calculator, builder, and schedule pass agree on
//! the same boundaries.

/// Team sizing thresholds used by the partition calculator
pub mod sizing {
    /// Minimum player count when no preferred team size is given
    pub const MIN_FLEXIBLE_PLAYERS: usize = 6;
    /// Smallest base team size the flexible search will consider
    pub const FLEXIBLE_MIN_TEAM_SIZE: usize = 3;
    /// Largest team size the flexible search will ever produce, enlarged last team included
    pub const FLEXIBLE_MAX_TEAM_SIZE: usize = 6;
    /// A viable partition always has at least this many teams
    pub const MIN_TEAM_COUNT: usize = 2;
    /// Team size used when the caller does not pick one
    pub const DEFAULT_TEAM_SIZE: usize = 4;
    /// Minimum roster for any match at all (two teams of two)
    pub const MIN_MATCH_PLAYERS: usize = 4;
    /// Efficiency score assigned to every accepted configuration
    pub const FULL_EFFICIENCY: u8 = 100;
}

/// Team identifier configuration constants
pub mod team {
    /// Ordered alphabet the allocator draws positional team ids from
    pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
}

/// Match template configuration constants
pub mod matches {
    /// Default duration of a generated match in minutes
    pub const DEFAULT_DURATION_MINUTES: u32 = 90;
    /// Minimum allowed match duration in minutes
    pub const MIN_DURATION_MINUTES: u32 = 10;
    /// Maximum allowed match duration in minutes
    pub const MAX_DURATION_MINUTES: u32 = 480;
}

/// Schedule configuration constants
pub mod schedule {
    /// Default start of the playable window
    pub const DEFAULT_START_TIME: &str = "09:00";
    /// Default end of the playable window
    pub const DEFAULT_END_TIME: &str = "17:00";
    /// Default break between consecutive matches in minutes
    pub const DEFAULT_BREAK_MINUTES: u32 = 15;
    /// Minimum allowed break between matches in minutes
    pub const MIN_BREAK_MINUTES: u32 = 0;
    /// Maximum allowed break between matches in minutes
    pub const MAX_BREAK_MINUTES: u32 = 120;
}
