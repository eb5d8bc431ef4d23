//! Typed API clients for the Pet Store and Soccer Team REST services.
//!
//! # Overview
//! Each service has a stateless API type (`PetStoreApi`, `SoccerTeamApi`)
//! that builds `HttpRequest` values and classifies `HttpResponse` values
//! without touching the network (host-does-IO pattern). The async clients
//! (`PetStoreClient`, `SoccerTeamClient`) pair an API type with a
//! [`Transport`] and expose one method per remote operation.
//!
//! # Design
//! - Every operation has a response union in `operations`: one variant per
//!   documented status plus `Undocumented`. Classification never fails on an
//!   unknown status; only a bad body on a documented success is an error.
//! - Failures surface as `ClientError<E>`, where `E` is the service's error
//!   enum and the other variants cover encoding, decoding and transport.
//! - Clients hold no mutable state and can be shared across tasks.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod config;
pub mod error;
pub mod http;
pub mod petstore;
pub mod soccer;
pub mod transport;

pub use config::{ClientConfig, DEFAULT_PETSTORE_URL, DEFAULT_SOCCER_TEAM_URL};
pub use error::{ClientError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use petstore::{PetStoreApi, PetStoreClient, PetStoreError, PetStoreResult};
pub use soccer::{SoccerTeamApi, SoccerTeamClient, SoccerTeamError, SoccerTeamResult};
pub use transport::{ReqwestTransport, Transport};
