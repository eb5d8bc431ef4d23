//! Async Soccer Team client over any [`Transport`].
//!
//! Same shape as the Pet Store client: build, send, parse.

use tracing::{instrument, warn};

use crate::config::{ClientConfig, DEFAULT_SOCCER_TEAM_URL};
use crate::error::TransportError;
use crate::transport::{ReqwestTransport, Transport};

use super::api::SoccerTeamApi;
use super::error::SoccerTeamResult;
use super::types::{Lineup, Match, MatchFilter, MatchResult, Player, PlayerFilter, Team};

/// Async Soccer Team client over a [`Transport`].
#[derive(Debug, Clone)]
pub struct SoccerTeamClient<T = ReqwestTransport> {
    api: SoccerTeamApi,
    transport: T,
}

impl SoccerTeamClient<ReqwestTransport> {
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, ReqwestTransport::new())
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, TransportError> {
        Ok(Self::with_transport(
            &config.base_url,
            ReqwestTransport::from_config(config)?,
        ))
    }
}

impl Default for SoccerTeamClient<ReqwestTransport> {
    fn default() -> Self {
        Self::new(DEFAULT_SOCCER_TEAM_URL)
    }
}

impl<T: Transport> SoccerTeamClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            api: SoccerTeamApi::new(base_url),
            transport,
        }
    }

    pub fn api(&self) -> &SoccerTeamApi {
        &self.api
    }

    #[instrument(skip(self, player), fields(player.name = %player.name))]
    pub async fn add_player(&self, player: &Player) -> SoccerTeamResult<Player> {
        let request = self.api.build_add_player(player)?;
        let response = self.transport.send(request).await?;
        self.api.parse_add_player(response)
    }

    #[instrument(skip(self))]
    pub async fn get_players(&self, filter: &PlayerFilter) -> SoccerTeamResult<Vec<Player>> {
        let response = self.transport.send(self.api.build_get_players(filter)).await?;
        self.api.parse_get_players(response)
    }

    #[instrument(skip(self))]
    pub async fn get_player(&self, id: i64) -> SoccerTeamResult<Player> {
        let response = self.transport.send(self.api.build_get_player(id)).await?;
        self.api.parse_get_player(response)
    }

    #[instrument(skip(self, player))]
    pub async fn update_player(&self, id: i64, player: &Player) -> SoccerTeamResult<Player> {
        let request = self.api.build_update_player(id, player)?;
        let response = self.transport.send(request).await?;
        self.api.parse_update_player(response)
    }

    #[instrument(skip(self))]
    pub async fn delete_player(&self, id: i64) -> SoccerTeamResult<()> {
        let response = self.transport.send(self.api.build_delete_player(id)).await?;
        self.api.parse_delete_player(response)
    }

    #[instrument(skip(self, team), fields(team.name = %team.name))]
    pub async fn create_team(&self, team: &Team) -> SoccerTeamResult<Team> {
        let request = self.api.build_create_team(team)?;
        let response = self.transport.send(request).await?;
        self.api.parse_create_team(response)
    }

    #[instrument(skip(self))]
    pub async fn get_teams(&self, league: Option<&str>) -> SoccerTeamResult<Vec<Team>> {
        let response = self.transport.send(self.api.build_get_teams(league)).await?;
        self.api.parse_get_teams(response)
    }

    #[instrument(skip(self))]
    pub async fn get_team(&self, id: i64) -> SoccerTeamResult<Team> {
        let response = self.transport.send(self.api.build_get_team(id)).await?;
        self.api.parse_get_team(response)
    }

    /// Replaces the team's lineup. A captain outside the starting list is
    /// logged and sent as-is.
    #[instrument(skip(self, lineup), fields(formation = %lineup.formation))]
    pub async fn set_lineup(&self, team_id: i64, lineup: &Lineup) -> SoccerTeamResult<Lineup> {
        if !lineup.captain_is_starter() {
            warn!(captain = ?lineup.captain, "lineup captain is not in the starting list");
        }
        let request = self.api.build_set_lineup(team_id, lineup)?;
        let response = self.transport.send(request).await?;
        self.api.parse_set_lineup(response)
    }

    #[instrument(skip(self, fixture))]
    pub async fn create_match(&self, fixture: &Match) -> SoccerTeamResult<Match> {
        let request = self.api.build_create_match(fixture)?;
        let response = self.transport.send(request).await?;
        self.api.parse_create_match(response)
    }

    #[instrument(skip(self))]
    pub async fn get_matches(&self, filter: &MatchFilter) -> SoccerTeamResult<Vec<Match>> {
        let response = self.transport.send(self.api.build_get_matches(filter)).await?;
        self.api.parse_get_matches(response)
    }

    #[instrument(skip(self, result))]
    pub async fn update_match_result(
        &self,
        match_id: i64,
        result: &MatchResult,
    ) -> SoccerTeamResult<Match> {
        let request = self.api.build_update_match_result(match_id, result)?;
        let response = self.transport.send(request).await?;
        self.api.parse_update_match_result(response)
    }
}
