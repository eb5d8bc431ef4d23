//! Error envelope shared by every API client.
//!
//! # Design
//! Each API surface defines a closed domain error enum (one variant per
//! documented failure status plus an `UnexpectedResponse` catch-all).
//! `ClientError<E>` wraps that enum and keeps the failures this layer does
//! not classify in their own variants: JSON encode/decode failures from the
//! schema codec and network failures from the transport. Decode errors on a
//! success status are never folded into a domain error.

use thiserror::Error;

/// Network-level failure raised by a [`Transport`](crate::Transport).
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Errors returned by the typed API clients.
#[derive(Debug, Error)]
pub enum ClientError<E> {
    /// The server answered with a documented failure status, or with a
    /// status the API does not document.
    #[error(transparent)]
    Api(E),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// A success response carried a body that does not match the schema.
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// The transport failed before a response was received.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl<E> ClientError<E> {
    /// The domain error, if the failure was classified from a response.
    pub fn api(&self) -> Option<&E> {
        match self {
            ClientError::Api(err) => Some(err),
            _ => None,
        }
    }

    pub fn into_api(self) -> Option<E> {
        match self {
            ClientError::Api(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_deserialization(&self) -> bool {
        matches!(self, ClientError::Deserialization(_))
    }
}
