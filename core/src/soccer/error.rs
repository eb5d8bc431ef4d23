//! Soccer Team error kinds and the result alias used by its client.

use thiserror::Error;

use crate::error::ClientError;

/// Failures documented by the Soccer Team API, plus the undocumented catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SoccerTeamError {
    #[error("invalid input data")]
    InvalidInput,

    #[error("player not found")]
    PlayerNotFound,

    #[error("team not found")]
    TeamNotFound,

    #[error("match not found")]
    MatchNotFound,

    #[error("invalid lineup (for example, a wrong number of players)")]
    InvalidLineup,

    #[error("invalid match result data")]
    InvalidResult,

    #[error("unexpected response (status code: {status_code})")]
    UnexpectedResponse { status_code: u16 },
}

impl SoccerTeamError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            SoccerTeamError::UnexpectedResponse { status_code } => Some(*status_code),
            _ => None,
        }
    }
}

impl From<SoccerTeamError> for ClientError<SoccerTeamError> {
    fn from(err: SoccerTeamError) -> Self {
        ClientError::Api(err)
    }
}

pub type SoccerTeamResult<T> = Result<T, ClientError<SoccerTeamError>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_fixed() {
        assert_eq!(SoccerTeamError::PlayerNotFound.to_string(), "player not found");
        assert_eq!(SoccerTeamError::TeamNotFound.to_string(), "team not found");
        assert_eq!(SoccerTeamError::MatchNotFound.to_string(), "match not found");
        assert_eq!(SoccerTeamError::InvalidResult.to_string(), "invalid match result data");
        assert_eq!(
            SoccerTeamError::UnexpectedResponse { status_code: 500 }.to_string(),
            "unexpected response (status code: 500)"
        );
    }

    #[test]
    fn status_code_accessor() {
        assert_eq!(SoccerTeamError::InvalidLineup.status_code(), None);
        assert_eq!(
            SoccerTeamError::UnexpectedResponse { status_code: 409 }.status_code(),
            Some(409)
        );
    }
}
