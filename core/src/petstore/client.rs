//! Async Pet Store client that pairs [`PetStoreApi`] with a [`Transport`].
//!
//! # Design
//! Each method builds the request, hands it to the transport and parses the
//! reply. Transport failures surface as `ClientError::Transport`; everything
//! else comes from the matching `parse_*` call.

use tracing::instrument;

use crate::config::{ClientConfig, DEFAULT_PETSTORE_URL};
use crate::error::TransportError;
use crate::transport::{ReqwestTransport, Transport};

use super::api::PetStoreApi;
use super::error::PetStoreResult;
use super::types::{Pet, PetStatus, User};

/// Async Pet Store client: builds each request with [`PetStoreApi`], sends it
/// through `T`, and classifies the response.
///
/// The client keeps no per-call state, so one instance can serve many
/// concurrent tasks. Dropping a returned future abandons the request.
#[derive(Debug, Clone)]
pub struct PetStoreClient<T = ReqwestTransport> {
    api: PetStoreApi,
    transport: T,
}

impl PetStoreClient<ReqwestTransport> {
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

impl Default for PetStoreClient<ReqwestTransport> {
    fn default() -> Self {
        Self::new(DEFAULT_PETSTORE_URL)
    }
}

impl<T: Transport> PetStoreClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            api: PetStoreApi::new(base_url),
            transport,
        }
    }

    pub fn api(&self) -> &PetStoreApi {
        &self.api
    }

    #[instrument(skip(self, pet), fields(pet.name = %pet.name))]
    pub async fn add_pet(&self, pet: &Pet) -> PetStoreResult<Pet> {
        let request = self.api.build_add_pet(pet)?;
        let response = self.transport.send(request).await?;
        self.api.parse_add_pet(response)
    }

    #[instrument(skip(self))]
    pub async fn get_pet(&self, id: i64) -> PetStoreResult<Pet> {
        let response = self.transport.send(self.api.build_get_pet(id)).await?;
        self.api.parse_get_pet(response)
    }

    #[instrument(skip(self))]
    pub async fn find_pets(&self, status: PetStatus) -> PetStoreResult<Vec<Pet>> {
        let response = self.transport.send(self.api.build_find_pets(status)).await?;
        self.api.parse_find_pets(response)
    }

    pub async fn find_available_pets(&self) -> PetStoreResult<Vec<Pet>> {
        self.find_pets(PetStatus::Available).await
    }

    #[instrument(skip(self, pet))]
    pub async fn update_pet(&self, id: i64, pet: &Pet) -> PetStoreResult<Pet> {
        let request = self.api.build_update_pet(id, pet)?;
        let response = self.transport.send(request).await?;
        self.api.parse_update_pet(response)
    }

    #[instrument(skip(self))]
    pub async fn delete_pet(&self, id: i64) -> PetStoreResult<()> {
        let response = self.transport.send(self.api.build_delete_pet(id)).await?;
        self.api.parse_delete_pet(response)
    }

    #[instrument(skip(self, user))]
    pub async fn create_user(&self, user: &User) -> PetStoreResult<()> {
        let request = self.api.build_create_user(user)?;
        let response = self.transport.send(request).await?;
        self.api.parse_create_user(response)
    }

    #[instrument(skip(self, password))]
    pub async fn login_user(&self, username: &str, password: &str) -> PetStoreResult<String> {
        let request = self.api.build_login_user(username, password);
        let response = self.transport.send(request).await?;
        self.api.parse_login_user(response)
    }
}
