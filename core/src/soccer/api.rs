//! Stateless request builder and response classifier for the Soccer Team API.
//!
//! Mirrors [`PetStoreApi`](crate::PetStoreApi): `build_*` produces an
//! `HttpRequest`, `parse_*` classifies an `HttpResponse` through the
//! operation's response union and maps each variant to a value or a
//! [`SoccerTeamError`].

use tracing::warn;

use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

use super::error::{SoccerTeamError, SoccerTeamResult};
use super::operations::{
    AddPlayerResponse, CreateMatchResponse, CreateTeamResponse, DeletePlayerResponse,
    GetMatchesResponse, GetPlayerByIdResponse, GetPlayersResponse, GetTeamByIdResponse,
    GetTeamsResponse, SetLineupResponse, UpdateMatchResultResponse, UpdatePlayerResponse,
};
use super::types::{Lineup, Match, MatchFilter, MatchResult, Player, PlayerFilter, Team};

#[derive(Debug, Clone)]
pub struct SoccerTeamApi {
    base_url: String,
}

impl SoccerTeamApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    // --- players ---

    pub fn build_add_player(&self, player: &Player) -> SoccerTeamResult<HttpRequest> {
        HttpRequest::new(HttpMethod::Post, self.url("/players"))
            .with_json_body(player)
            .map_err(ClientError::Serialization)
    }

    pub fn build_get_players(&self, filter: &PlayerFilter) -> HttpRequest {
        HttpRequest::new(HttpMethod::Get, self.url("/players"))
            .with_optional_query("position", filter.position)
            .with_optional_query("status", filter.status)
    }

    pub fn build_get_player(&self, id: i64) -> HttpRequest {
        HttpRequest::new(HttpMethod::Get, self.url(&format!("/players/{id}")))
    }

    pub fn build_update_player(&self, id: i64, player: &Player) -> SoccerTeamResult<HttpRequest> {
        HttpRequest::new(HttpMethod::Put, self.url(&format!("/players/{id}")))
            .with_json_body(player)
            .map_err(ClientError::Serialization)
    }

    pub fn build_delete_player(&self, id: i64) -> HttpRequest {
        HttpRequest::new(HttpMethod::Delete, self.url(&format!("/players/{id}")))
    }

    pub fn parse_add_player(&self, response: HttpResponse) -> SoccerTeamResult<Player> {
        match AddPlayerResponse::from_http(response).map_err(ClientError::Deserialization)? {
            AddPlayerResponse::Created(player) => Ok(player),
            AddPlayerResponse::BadRequest => Err(SoccerTeamError::InvalidInput.into()),
            AddPlayerResponse::Undocumented { status, .. } => Err(undocumented("addPlayer", status)),
        }
    }

    pub fn parse_get_players(&self, response: HttpResponse) -> SoccerTeamResult<Vec<Player>> {
        match GetPlayersResponse::from_http(response).map_err(ClientError::Deserialization)? {
            GetPlayersResponse::Ok(players) => Ok(players),
            GetPlayersResponse::Undocumented { status, .. } => {
                Err(undocumented("getPlayers", status))
            }
        }
    }

    pub fn parse_get_player(&self, response: HttpResponse) -> SoccerTeamResult<Player> {
        match GetPlayerByIdResponse::from_http(response).map_err(ClientError::Deserialization)? {
            GetPlayerByIdResponse::Ok(player) => Ok(player),
            GetPlayerByIdResponse::NotFound => Err(SoccerTeamError::PlayerNotFound.into()),
            GetPlayerByIdResponse::Undocumented { status, .. } => {
                Err(undocumented("getPlayerById", status))
            }
        }
    }

    pub fn parse_update_player(&self, response: HttpResponse) -> SoccerTeamResult<Player> {
        match UpdatePlayerResponse::from_http(response).map_err(ClientError::Deserialization)? {
            UpdatePlayerResponse::Ok(player) => Ok(player),
            UpdatePlayerResponse::BadRequest => Err(SoccerTeamError::InvalidInput.into()),
            UpdatePlayerResponse::NotFound => Err(SoccerTeamError::PlayerNotFound.into()),
            UpdatePlayerResponse::Undocumented { status, .. } => {
                Err(undocumented("updatePlayer", status))
            }
        }
    }

    pub fn parse_delete_player(&self, response: HttpResponse) -> SoccerTeamResult<()> {
        match DeletePlayerResponse::from_http(response).map_err(ClientError::Deserialization)? {
            DeletePlayerResponse::NoContent => Ok(()),
            DeletePlayerResponse::NotFound => Err(SoccerTeamError::PlayerNotFound.into()),
            DeletePlayerResponse::Undocumented { status, .. } => {
                Err(undocumented("deletePlayer", status))
            }
        }
    }

    // --- teams ---

    pub fn build_create_team(&self, team: &Team) -> SoccerTeamResult<HttpRequest> {
        HttpRequest::new(HttpMethod::Post, self.url("/teams"))
            .with_json_body(team)
            .map_err(ClientError::Serialization)
    }

    pub fn build_get_teams(&self, league: Option<&str>) -> HttpRequest {
        HttpRequest::new(HttpMethod::Get, self.url("/teams")).with_optional_query("league", league)
    }

    pub fn build_get_team(&self, id: i64) -> HttpRequest {
        HttpRequest::new(HttpMethod::Get, self.url(&format!("/teams/{id}")))
    }

    pub fn build_set_lineup(&self, team_id: i64, lineup: &Lineup) -> SoccerTeamResult<HttpRequest> {
        HttpRequest::new(HttpMethod::Put, self.url(&format!("/teams/{team_id}/lineup")))
            .with_json_body(lineup)
            .map_err(ClientError::Serialization)
    }

    pub fn parse_create_team(&self, response: HttpResponse) -> SoccerTeamResult<Team> {
        match CreateTeamResponse::from_http(response).map_err(ClientError::Deserialization)? {
            CreateTeamResponse::Created(team) => Ok(team),
            CreateTeamResponse::BadRequest => Err(SoccerTeamError::InvalidInput.into()),
            CreateTeamResponse::Undocumented { status, .. } => Err(undocumented("createTeam", status)),
        }
    }

    pub fn parse_get_teams(&self, response: HttpResponse) -> SoccerTeamResult<Vec<Team>> {
        match GetTeamsResponse::from_http(response).map_err(ClientError::Deserialization)? {
            GetTeamsResponse::Ok(teams) => Ok(teams),
            GetTeamsResponse::Undocumented { status, .. } => Err(undocumented("getTeams", status)),
        }
    }

    pub fn parse_get_team(&self, response: HttpResponse) -> SoccerTeamResult<Team> {
        match GetTeamByIdResponse::from_http(response).map_err(ClientError::Deserialization)? {
            GetTeamByIdResponse::Ok(team) => Ok(team),
            GetTeamByIdResponse::NotFound => Err(SoccerTeamError::TeamNotFound.into()),
            GetTeamByIdResponse::Undocumented { status, .. } => {
                Err(undocumented("getTeamById", status))
            }
        }
    }

    pub fn parse_set_lineup(&self, response: HttpResponse) -> SoccerTeamResult<Lineup> {
        match SetLineupResponse::from_http(response).map_err(ClientError::Deserialization)? {
            SetLineupResponse::Ok(lineup) => Ok(lineup),
            SetLineupResponse::BadRequest => Err(SoccerTeamError::InvalidLineup.into()),
            SetLineupResponse::NotFound => Err(SoccerTeamError::TeamNotFound.into()),
            SetLineupResponse::Undocumented { status, .. } => Err(undocumented("setLineup", status)),
        }
    }

    // --- matches ---

    pub fn build_create_match(&self, fixture: &Match) -> SoccerTeamResult<HttpRequest> {
        HttpRequest::new(HttpMethod::Post, self.url("/matches"))
            .with_json_body(fixture)
            .map_err(ClientError::Serialization)
    }

    pub fn build_get_matches(&self, filter: &MatchFilter) -> HttpRequest {
        HttpRequest::new(HttpMethod::Get, self.url("/matches"))
            .with_optional_query("teamId", filter.team_id)
            .with_optional_query("status", filter.status)
    }

    pub fn build_update_match_result(
        &self,
        match_id: i64,
        result: &MatchResult,
    ) -> SoccerTeamResult<HttpRequest> {
        HttpRequest::new(HttpMethod::Put, self.url(&format!("/matches/{match_id}/result")))
            .with_json_body(result)
            .map_err(ClientError::Serialization)
    }

    pub fn parse_create_match(&self, response: HttpResponse) -> SoccerTeamResult<Match> {
        match CreateMatchResponse::from_http(response).map_err(ClientError::Deserialization)? {
            CreateMatchResponse::Created(fixture) => Ok(fixture),
            CreateMatchResponse::BadRequest => Err(SoccerTeamError::InvalidInput.into()),
            CreateMatchResponse::Undocumented { status, .. } => {
                Err(undocumented("createMatch", status))
            }
        }
    }

    pub fn parse_get_matches(&self, response: HttpResponse) -> SoccerTeamResult<Vec<Match>> {
        match GetMatchesResponse::from_http(response).map_err(ClientError::Deserialization)? {
            GetMatchesResponse::Ok(matches) => Ok(matches),
            GetMatchesResponse::Undocumented { status, .. } => {
                Err(undocumented("getMatches", status))
            }
        }
    }

    pub fn parse_update_match_result(&self, response: HttpResponse) -> SoccerTeamResult<Match> {
        match UpdateMatchResultResponse::from_http(response).map_err(ClientError::Deserialization)? {
            UpdateMatchResultResponse::Ok(fixture) => Ok(fixture),
            UpdateMatchResultResponse::BadRequest => Err(SoccerTeamError::InvalidResult.into()),
            UpdateMatchResultResponse::NotFound => Err(SoccerTeamError::MatchNotFound.into()),
            UpdateMatchResultResponse::Undocumented { status, .. } => {
                Err(undocumented("updateMatchResult", status))
            }
        }
    }
}

fn undocumented(operation: &'static str, status: u16) -> ClientError<SoccerTeamError> {
    warn!(operation, status, "undocumented response status");
    SoccerTeamError::UnexpectedResponse {
        status_code: status,
    }
    .into()
}
