use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::Db;

const POSITIONS: [&str; 4] = ["GK", "DF", "MF", "FW"];
const PLAYER_STATUSES: [&str; 3] = ["active", "injured", "suspended"];
const STARTERS: usize = 11;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub position: String,
    pub jersey_number: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Player {
    fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && POSITIONS.contains(&self.position.as_str())
            && (1..=99).contains(&self.jersey_number)
            && self
                .status
                .as_deref()
                .is_none_or(|status| PLAYER_STATUSES.contains(&status))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub league: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub players: Option<Vec<Player>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
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

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub home_score: i32,
    pub away_score: i32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub scheduled_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<MatchResult>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Match {
    fn involves(&self, team_id: i64) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }
}

#[derive(Deserialize)]
struct PlayerQuery {
    position: Option<String>,
    status: Option<String>,
}

#[derive(Deserialize)]
struct TeamQuery {
    league: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchQuery {
    team_id: Option<i64>,
    status: Option<String>,
}

pub fn routes() -> Router<Db> {
    Router::new()
        .route("/players", get(get_players).post(add_player))
        .route(
            "/players/{playerId}",
            get(get_player).put(update_player).delete(delete_player),
        )
        .route("/teams", get(get_teams).post(create_team))
        .route("/teams/{teamId}", get(get_team))
        .route("/teams/{teamId}/lineup", put(set_lineup))
        .route("/matches", get(get_matches).post(create_match))
        .route("/matches/{matchId}/result", put(update_match_result))
}

// --- players ---

async fn add_player(
    State(db): State<Db>,
    body: Result<Json<Player>, JsonRejection>,
) -> Result<(StatusCode, Json<Player>), StatusCode> {
    let Json(mut player) = body.map_err(|rejection| {
        debug!(%rejection, "addPlayer body rejected");
        StatusCode::BAD_REQUEST
    })?;
    if !player.is_valid() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let mut store = db.write().await;
    let id = store.claim_id(player.id).ok_or(StatusCode::BAD_REQUEST)?;
    player.id = Some(id);
    store.players.insert(id, player.clone());
    info!(id, name = %player.name, "player added");
    Ok((StatusCode::CREATED, Json(player)))
}

async fn get_players(
    State(db): State<Db>,
    Query(query): Query<PlayerQuery>,
) -> Json<Vec<Player>> {
    let store = db.read().await;
    let players = store
        .players
        .values()
        .filter(|player| {
            query
                .position
                .as_deref()
                .is_none_or(|position| player.position == position)
        })
        .filter(|player| {
            query
                .status
                .as_deref()
                .is_none_or(|status| player.status.as_deref() == Some(status))
        })
        .cloned()
        .collect();
    Json(players)
}

async fn get_player(
    State(db): State<Db>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Player>, StatusCode> {
    let Path(id) = id.map_err(|_| StatusCode::NOT_FOUND)?;
    let store = db.read().await;
    store.players.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_player(
    State(db): State<Db>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<Player>, JsonRejection>,
) -> Result<Json<Player>, StatusCode> {
    let Path(id) = id.map_err(|_| StatusCode::NOT_FOUND)?;
    let mut store = db.write().await;
    if !store.players.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }

    let Json(mut player) = body.map_err(|_| StatusCode::BAD_REQUEST)?;
    if !player.is_valid() {
        return Err(StatusCode::BAD_REQUEST);
    }
    player.id = Some(id);
    store.players.insert(id, player.clone());
    Ok(Json(player))
}

async fn delete_player(
    State(db): State<Db>,
    id: Result<Path<i64>, PathRejection>,
) -> StatusCode {
    let Ok(Path(id)) = id else {
        return StatusCode::NOT_FOUND;
    };
    match db.write().await.players.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT,
        None => StatusCode::NOT_FOUND,
    }
}

// --- teams ---

async fn create_team(
    State(db): State<Db>,
    body: Result<Json<Team>, JsonRejection>,
) -> Result<(StatusCode, Json<Team>), StatusCode> {
    let Json(mut team) = body.map_err(|_| StatusCode::BAD_REQUEST)?;
    if team.name.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let mut store = db.write().await;
    let id = store.claim_id(team.id).ok_or(StatusCode::BAD_REQUEST)?;
    team.id = Some(id);
    team.players = None;
    store.teams.insert(id, team.clone());
    info!(id, name = %team.name, "team created");
    Ok((StatusCode::CREATED, Json(team)))
}

async fn get_teams(State(db): State<Db>, Query(query): Query<TeamQuery>) -> Json<Vec<Team>> {
    let store = db.read().await;
    let teams = store
        .teams
        .values()
        .filter(|team| {
            query
                .league
                .as_deref()
                .is_none_or(|league| team.league.as_deref() == Some(league))
        })
        .cloned()
        .collect();
    Json(teams)
}

/// Returns the team with its registered players attached.
async fn get_team(
    State(db): State<Db>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Team>, StatusCode> {
    let Path(id) = id.map_err(|_| StatusCode::NOT_FOUND)?;
    let store = db.read().await;
    let mut team = store.teams.get(&id).cloned().ok_or(StatusCode::NOT_FOUND)?;
    let roster: Vec<Player> = store
        .players
        .values()
        .filter(|player| player.team_id == Some(id))
        .cloned()
        .collect();
    if !roster.is_empty() {
        team.players = Some(roster);
    }
    Ok(Json(team))
}

async fn set_lineup(
    State(db): State<Db>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<Lineup>, JsonRejection>,
) -> Result<Json<Lineup>, StatusCode> {
    let Path(team_id) = id.map_err(|_| StatusCode::NOT_FOUND)?;
    let mut store = db.write().await;
    if !store.teams.contains_key(&team_id) {
        return Err(StatusCode::NOT_FOUND);
    }

    let Json(mut lineup) = body.map_err(|_| StatusCode::BAD_REQUEST)?;
    if lineup.player_ids.len() != STARTERS {
        debug!(starters = lineup.player_ids.len(), "lineup rejected");
        return Err(StatusCode::BAD_REQUEST);
    }
    let id = store.claim_id(None).ok_or(StatusCode::BAD_REQUEST)?;
    lineup.id = Some(id);
    store.lineups.insert(team_id, lineup.clone());
    Ok(Json(lineup))
}

// --- matches ---

async fn create_match(
    State(db): State<Db>,
    body: Result<Json<Match>, JsonRejection>,
) -> Result<(StatusCode, Json<Match>), StatusCode> {
    let Json(mut fixture) = body.map_err(|_| StatusCode::BAD_REQUEST)?;
    if fixture.home_team_id == fixture.away_team_id {
        return Err(StatusCode::BAD_REQUEST);
    }

    let mut store = db.write().await;
    let id = store.claim_id(fixture.id).ok_or(StatusCode::BAD_REQUEST)?;
    fixture.id = Some(id);
    fixture.status.get_or_insert_with(|| "scheduled".to_string());
    store.matches.insert(id, fixture.clone());
    info!(
        id,
        home = fixture.home_team_id,
        away = fixture.away_team_id,
        "match created"
    );
    Ok((StatusCode::CREATED, Json(fixture)))
}

async fn get_matches(State(db): State<Db>, Query(query): Query<MatchQuery>) -> Json<Vec<Match>> {
    let store = db.read().await;
    let matches = store
        .matches
        .values()
        .filter(|fixture| query.team_id.is_none_or(|team_id| fixture.involves(team_id)))
        .filter(|fixture| {
            query
                .status
                .as_deref()
                .is_none_or(|status| fixture.status.as_deref() == Some(status))
        })
        .cloned()
        .collect();
    Json(matches)
}

async fn update_match_result(
    State(db): State<Db>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<MatchResult>, JsonRejection>,
) -> Result<Json<Match>, StatusCode> {
    let Path(id) = id.map_err(|_| StatusCode::NOT_FOUND)?;
    let mut store = db.write().await;
    let fixture = store.matches.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;

    let Json(result) = body.map_err(|_| StatusCode::BAD_REQUEST)?;
    if result.home_score < 0 || result.away_score < 0 {
        return Err(StatusCode::BAD_REQUEST);
    }
    fixture.result = Some(result);
    fixture.status = Some("finished".to_string());
    Ok(Json(fixture.clone()))
}
