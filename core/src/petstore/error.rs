//! Pet Store error kinds.

use thiserror::Error;

use crate::error::ClientError;

/// Failures documented by the Pet Store API, plus the undocumented catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PetStoreError {
    #[error("invalid input data")]
    InvalidInput,

    #[error("invalid ID supplied")]
    InvalidId,

    #[error("pet not found")]
    PetNotFound,

    #[error("invalid status value")]
    InvalidStatus,

    #[error("validation exception")]
    ValidationError,

    #[error("invalid pet value")]
    InvalidPetValue,

    #[error("invalid username/password supplied")]
    InvalidCredentials,

    #[error("unexpected response (status code: {status_code})")]
    UnexpectedResponse { status_code: u16 },
}

impl PetStoreError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            PetStoreError::UnexpectedResponse { status_code } => Some(*status_code),
            _ => None,
        }
    }
}

impl From<PetStoreError> for ClientError<PetStoreError> {
    fn from(err: PetStoreError) -> Self {
        ClientError::Api(err)
    }
}

pub type PetStoreResult<T> = Result<T, ClientError<PetStoreError>>;
