//! Typed client for the Pet Store API (pets and users).

pub mod api;
pub mod client;
pub mod error;
pub mod operations;
pub mod types;

pub use api::PetStoreApi;
pub use client::PetStoreClient;
pub use error::{PetStoreError, PetStoreResult};
pub use types::{Category, Pet, PetStatus, Tag, User};
