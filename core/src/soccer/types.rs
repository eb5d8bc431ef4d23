//! Soccer Team schema types.
//!
//! Field names follow the Soccer Team OpenAPI document (camelCase, `type`
//! for the goal kind). Server-assigned ids are optional and omitted when
//! absent. Dates use `chrono`: `dateOfBirth` is a calendar date,
//! `scheduledDate` an RFC 3339 timestamp.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "DF")]
    Defender,
    #[serde(rename = "MF")]
    Midfielder,
    #[serde(rename = "FW")]
    Forward,
}

impl Position {
    pub fn as_str(self) -> &'static str {
        match self {
            Position::Goalkeeper => "GK",
            Position::Defender => "DF",
            Position::Midfielder => "MF",
            Position::Forward => "FW",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerStatus {
    Active,
    Injured,
    Suspended,
}

impl PlayerStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PlayerStatus::Active => "active",
            PlayerStatus::Injured => "injured",
            PlayerStatus::Suspended => "suspended",
        }
    }
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Scheduled,
    InProgress,
    Finished,
    Cancelled,
}

impl MatchStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "scheduled",
            MatchStatus::InProgress => "in_progress",
            MatchStatus::Finished => "finished",
            MatchStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    Regular,
    Penalty,
    OwnGoal,
    FreeKick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assists: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yellow_cards: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub red_cards: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appearances: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub position: Position,
    pub jersey_number: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    /// Centimetres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Kilograms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PlayerStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<PlayerStats>,
}

impl Player {
    pub fn new(name: impl Into<String>, position: Position, jersey_number: i32) -> Self {
        Self {
            id: None,
            name: name.into(),
            position,
            jersey_number,
            date_of_birth: None,
            nationality: None,
            height: None,
            weight: None,
            status: None,
            team_id: None,
            stats: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founded_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_stadium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub league: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub players: Option<Vec<Player>>,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            founded_year: None,
            home_stadium: None,
            league: None,
            manager: None,
            players: None,
        }
    }
}

/// A starting eleven plus substitutes.
///
/// Nothing here checks that `captain` is one of `player_ids`, and the server
/// contract does not say whether it does. Use [`Lineup::captain_is_starter`]
/// when the caller needs that guarantee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lineup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub formation: String,
    pub player_ids: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substitute_ids: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captain: Option<i64>,
}

impl Lineup {
    /// True when there is no captain or the captain is in the starting list.
    pub fn captain_is_starter(&self) -> bool {
        match self.captain {
            Some(captain) => self.player_ids.contains(&captain),
            None => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub player_id: i64,
    pub minute: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assist_player_id: Option<i64>,
    #[serde(rename = "type")]
    pub goal_type: GoalType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub home_score: i32,
    pub away_score: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scorers: Option<Vec<Goal>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub scheduled_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MatchStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<MatchResult>,
}

/// Query filters for `getPlayers`. Unset filters are not sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerFilter {
    pub position: Option<Position>,
    pub status: Option<PlayerStatus>,
}

impl PlayerFilter {
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn status(mut self, status: PlayerStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Query filters for `getMatches`. Unset filters are not sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchFilter {
    pub team_id: Option<i64>,
    pub status: Option<MatchStatus>,
}

impl MatchFilter {
    pub fn team_id(mut self, team_id: i64) -> Self {
        self.team_id = Some(team_id);
        self
    }

    pub fn status(mut self, status: MatchStatus) -> Self {
        self.status = Some(status);
        self
    }
}
