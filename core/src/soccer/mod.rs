//! Typed client for the Soccer Team API (players, teams, lineups, matches).

pub mod api;
pub mod client;
pub mod error;
pub mod operations;
pub mod types;

pub use api::SoccerTeamApi;
pub use client::SoccerTeamClient;
pub use error::{SoccerTeamError, SoccerTeamResult};
pub use types::{
    Goal, GoalType, Lineup, Match, MatchFilter, MatchResult, MatchStatus, Player, PlayerFilter,
    PlayerStats, PlayerStatus, Position, Team,
};
