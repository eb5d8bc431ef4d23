//! Response unions for the Soccer Team operations.
//!
//! Same shape as the Pet Store unions: documented statuses become variants,
//! success bodies are decoded eagerly, anything else is `Undocumented`.

use crate::http::HttpResponse;

use super::types::{Lineup, Match, Player, Team};

/// `POST /players`
#[derive(Debug, Clone, PartialEq)]
pub enum AddPlayerResponse {
    Created(Player),
    BadRequest,
    Undocumented { status: u16, body: String },
}

impl AddPlayerResponse {
    pub fn from_http(response: HttpResponse) -> Result<Self, serde_json::Error> {
        Ok(match response.status {
            201 => AddPlayerResponse::Created(serde_json::from_str(&response.body)?),
            400 => AddPlayerResponse::BadRequest,
            status => AddPlayerResponse::Undocumented {
                status,
                body: response.body,
            },
        })
    }
}

/// `GET /players`
#[derive(Debug, Clone, PartialEq)]
pub enum GetPlayersResponse {
    Ok(Vec<Player>),
    Undocumented { status: u16, body: String },
}

impl GetPlayersResponse {
    pub fn from_http(response: HttpResponse) -> Result<Self, serde_json::Error> {
        Ok(match response.status {
            200 => GetPlayersResponse::Ok(serde_json::from_str(&response.body)?),
            status => GetPlayersResponse::Undocumented {
                status,
                body: response.body,
            },
        })
    }
}

/// `GET /players/{playerId}`
#[derive(Debug, Clone, PartialEq)]
pub enum GetPlayerByIdResponse {
    Ok(Player),
    NotFound,
    Undocumented { status: u16, body: String },
}

impl GetPlayerByIdResponse {
    pub fn from_http(response: HttpResponse) -> Result<Self, serde_json::Error> {
        Ok(match response.status {
            200 => GetPlayerByIdResponse::Ok(serde_json::from_str(&response.body)?),
            404 => GetPlayerByIdResponse::NotFound,
            status => GetPlayerByIdResponse::Undocumented {
                status,
                body: response.body,
            },
        })
    }
}

/// `PUT /players/{playerId}`
#[derive(Debug, Clone, PartialEq)]
pub enum UpdatePlayerResponse {
    Ok(Player),
    BadRequest,
    NotFound,
    Undocumented { status: u16, body: String },
}

impl UpdatePlayerResponse {
    pub fn from_http(response: HttpResponse) -> Result<Self, serde_json::Error> {
        Ok(match response.status {
            200 => UpdatePlayerResponse::Ok(serde_json::from_str(&response.body)?),
            400 => UpdatePlayerResponse::BadRequest,
            404 => UpdatePlayerResponse::NotFound,
            status => UpdatePlayerResponse::Undocumented {
                status,
                body: response.body,
            },
        })
    }
}

/// `DELETE /players/{playerId}`
#[derive(Debug, Clone, PartialEq)]
pub enum DeletePlayerResponse {
    NoContent,
    NotFound,
    Undocumented { status: u16, body: String },
}

impl DeletePlayerResponse {
    pub fn from_http(response: HttpResponse) -> Result<Self, serde_json::Error> {
        Ok(match response.status {
            204 => DeletePlayerResponse::NoContent,
            404 => DeletePlayerResponse::NotFound,
            status => DeletePlayerResponse::Undocumented {
                status,
                body: response.body,
            },
        })
    }
}

/// `POST /teams`
#[derive(Debug, Clone, PartialEq)]
pub enum CreateTeamResponse {
    Created(Team),
    BadRequest,
    Undocumented { status: u16, body: String },
}

impl CreateTeamResponse {
    pub fn from_http(response: HttpResponse) -> Result<Self, serde_json::Error> {
        Ok(match response.status {
            201 => CreateTeamResponse::Created(serde_json::from_str(&response.body)?),
            400 => CreateTeamResponse::BadRequest,
            status => CreateTeamResponse::Undocumented {
                status,
                body: response.body,
            },
        })
    }
}

/// `GET /teams`
#[derive(Debug, Clone, PartialEq)]
pub enum GetTeamsResponse {
    Ok(Vec<Team>),
    Undocumented { status: u16, body: String },
}

impl GetTeamsResponse {
    pub fn from_http(response: HttpResponse) -> Result<Self, serde_json::Error> {
        Ok(match response.status {
            200 => GetTeamsResponse::Ok(serde_json::from_str(&response.body)?),
            status => GetTeamsResponse::Undocumented {
                status,
                body: response.body,
            },
        })
    }
}

/// `GET /teams/{teamId}`
#[derive(Debug, Clone, PartialEq)]
pub enum GetTeamByIdResponse {
    Ok(Team),
    NotFound,
    Undocumented { status: u16, body: String },
}

impl GetTeamByIdResponse {
    pub fn from_http(response: HttpResponse) -> Result<Self, serde_json::Error> {
        Ok(match response.status {
            200 => GetTeamByIdResponse::Ok(serde_json::from_str(&response.body)?),
            404 => GetTeamByIdResponse::NotFound,
            status => GetTeamByIdResponse::Undocumented {
                status,
                body: response.body,
            },
        })
    }
}

/// `PUT /teams/{teamId}/lineup`
#[derive(Debug, Clone, PartialEq)]
pub enum SetLineupResponse {
    Ok(Lineup),
    BadRequest,
    NotFound,
    Undocumented { status: u16, body: String },
}

impl SetLineupResponse {
    pub fn from_http(response: HttpResponse) -> Result<Self, serde_json::Error> {
        Ok(match response.status {
            200 => SetLineupResponse::Ok(serde_json::from_str(&response.body)?),
            400 => SetLineupResponse::BadRequest,
            404 => SetLineupResponse::NotFound,
            status => SetLineupResponse::Undocumented {
                status,
                body: response.body,
            },
        })
    }
}

/// `POST /matches`
#[derive(Debug, Clone, PartialEq)]
pub enum CreateMatchResponse {
    Created(Match),
    BadRequest,
    Undocumented { status: u16, body: String },
}

impl CreateMatchResponse {
    pub fn from_http(response: HttpResponse) -> Result<Self, serde_json::Error> {
        Ok(match response.status {
            201 => CreateMatchResponse::Created(serde_json::from_str(&response.body)?),
            400 => CreateMatchResponse::BadRequest,
            status => CreateMatchResponse::Undocumented {
                status,
                body: response.body,
            },
        })
    }
}

/// `GET /matches`
#[derive(Debug, Clone, PartialEq)]
pub enum GetMatchesResponse {
    Ok(Vec<Match>),
    Undocumented { status: u16, body: String },
}

impl GetMatchesResponse {
    pub fn from_http(response: HttpResponse) -> Result<Self, serde_json::Error> {
        Ok(match response.status {
            200 => GetMatchesResponse::Ok(serde_json::from_str(&response.body)?),
            status => GetMatchesResponse::Undocumented {
                status,
                body: response.body,
            },
        })
    }
}

/// `PUT /matches/{matchId}/result`
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateMatchResultResponse {
    Ok(Match),
    BadRequest,
    NotFound,
    Undocumented { status: u16, body: String },
}

impl UpdateMatchResultResponse {
    pub fn from_http(response: HttpResponse) -> Result<Self, serde_json::Error> {
        Ok(match response.status {
            200 => UpdateMatchResultResponse::Ok(serde_json::from_str(&response.body)?),
            400 => UpdateMatchResultResponse::BadRequest,
            404 => UpdateMatchResultResponse::NotFound,
            status => UpdateMatchResultResponse::Undocumented {
                status,
                body: response.body,
            },
        })
    }
}
