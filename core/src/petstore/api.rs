//! Stateless request builder and response classifier for the Pet Store API.
//!
//! # Design
//! `PetStoreApi` holds only a `base_url`. Each operation is split into a
//! `build_*` method producing an `HttpRequest` and a `parse_*` method that
//! turns an `HttpResponse` into the operation's response union and then maps
//! every variant, with an exhaustive `match`, to a value or a
//! [`PetStoreError`]. No I/O happens here; see
//! [`PetStoreClient`](super::PetStoreClient) for the async round-trip.

use tracing::{debug, warn};

use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

use super::error::{PetStoreError, PetStoreResult};
use super::operations::{
    AddPetResponse, CreateUserResponse, DeletePetResponse, FindPetsByStatusResponse,
    GetPetByIdResponse, LoginUserResponse, UpdatePetResponse,
};
use super::types::{Pet, PetStatus, User};

#[derive(Debug, Clone)]
pub struct PetStoreApi {
    base_url: String,
}

impl PetStoreApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub fn build_add_pet(&self, pet: &Pet) -> PetStoreResult<HttpRequest> {
        HttpRequest::new(HttpMethod::Post, self.url("/pet"))
            .with_json_body(pet)
            .map_err(ClientError::Serialization)
    }

    pub fn build_get_pet(&self, id: i64) -> HttpRequest {
        HttpRequest::new(HttpMethod::Get, self.url(&format!("/pet/{id}")))
    }

    pub fn build_find_pets(&self, status: PetStatus) -> HttpRequest {
        HttpRequest::new(HttpMethod::Get, self.url("/pet/findByStatus")).with_query("status", status)
    }

    pub fn build_update_pet(&self, id: i64, pet: &Pet) -> PetStoreResult<HttpRequest> {
        HttpRequest::new(HttpMethod::Put, self.url(&format!("/pet/{id}")))
            .with_json_body(pet)
            .map_err(ClientError::Serialization)
    }

    pub fn build_delete_pet(&self, id: i64) -> HttpRequest {
        HttpRequest::new(HttpMethod::Delete, self.url(&format!("/pet/{id}")))
    }

    pub fn build_create_user(&self, user: &User) -> PetStoreResult<HttpRequest> {
        HttpRequest::new(HttpMethod::Post, self.url("/user"))
            .with_json_body(user)
            .map_err(ClientError::Serialization)
    }

    pub fn build_login_user(&self, username: &str, password: &str) -> HttpRequest {
        HttpRequest::new(HttpMethod::Get, self.url("/user/login"))
            .with_query("username", username)
            .with_query("password", password)
    }

    pub fn parse_add_pet(&self, response: HttpResponse) -> PetStoreResult<Pet> {
        match AddPetResponse::from_http(response).map_err(ClientError::Deserialization)? {
            AddPetResponse::Ok(pet) => Ok(pet),
            AddPetResponse::BadRequest => Err(PetStoreError::InvalidInput.into()),
            AddPetResponse::Undocumented { status, .. } => Err(undocumented("addPet", status)),
        }
    }

    pub fn parse_get_pet(&self, response: HttpResponse) -> PetStoreResult<Pet> {
        match GetPetByIdResponse::from_http(response).map_err(ClientError::Deserialization)? {
            GetPetByIdResponse::Ok(pet) => Ok(pet),
            GetPetByIdResponse::BadRequest => Err(PetStoreError::InvalidId.into()),
            GetPetByIdResponse::NotFound => Err(PetStoreError::PetNotFound.into()),
            GetPetByIdResponse::Undocumented { status, .. } => {
                Err(undocumented("getPetById", status))
            }
        }
    }

    pub fn parse_find_pets(&self, response: HttpResponse) -> PetStoreResult<Vec<Pet>> {
        match FindPetsByStatusResponse::from_http(response).map_err(ClientError::Deserialization)? {
            FindPetsByStatusResponse::Ok(pets) => Ok(pets),
            FindPetsByStatusResponse::BadRequest => Err(PetStoreError::InvalidStatus.into()),
            FindPetsByStatusResponse::Undocumented { status, .. } => {
                Err(undocumented("findPetsByStatus", status))
            }
        }
    }

    pub fn parse_update_pet(&self, response: HttpResponse) -> PetStoreResult<Pet> {
        match UpdatePetResponse::from_http(response).map_err(ClientError::Deserialization)? {
            UpdatePetResponse::Ok(pet) => Ok(pet),
            UpdatePetResponse::BadRequest => Err(PetStoreError::InvalidId.into()),
            UpdatePetResponse::NotFound => Err(PetStoreError::PetNotFound.into()),
            UpdatePetResponse::UnprocessableContent => Err(PetStoreError::ValidationError.into()),
            UpdatePetResponse::Undocumented { status, .. } => Err(undocumented("updatePet", status)),
        }
    }

    pub fn parse_delete_pet(&self, response: HttpResponse) -> PetStoreResult<()> {
        match DeletePetResponse::from_http(response).map_err(ClientError::Deserialization)? {
            DeletePetResponse::Ok => Ok(()),
            DeletePetResponse::BadRequest => Err(PetStoreError::InvalidPetValue.into()),
            DeletePetResponse::Undocumented { status, .. } => Err(undocumented("deletePet", status)),
        }
    }

    pub fn parse_create_user(&self, response: HttpResponse) -> PetStoreResult<()> {
        let succeeded = response.is_success();
        match CreateUserResponse::from_http(response).map_err(ClientError::Deserialization)? {
            CreateUserResponse::Default { .. } if succeeded => Ok(()),
            CreateUserResponse::Default { status, .. } => {
                debug!(status, "createUser default response is not a success");
                Err(PetStoreError::UnexpectedResponse {
                    status_code: status,
                }
                .into())
            }
        }
    }

    pub fn parse_login_user(&self, response: HttpResponse) -> PetStoreResult<String> {
        match LoginUserResponse::from_http(response).map_err(ClientError::Deserialization)? {
            LoginUserResponse::Ok(token) => Ok(token),
            LoginUserResponse::BadRequest => Err(PetStoreError::InvalidCredentials.into()),
            LoginUserResponse::Undocumented { status, .. } => Err(undocumented("loginUser", status)),
        }
    }
}

fn undocumented(operation: &'static str, status: u16) -> ClientError<PetStoreError> {
    warn!(operation, status, "undocumented response status");
    PetStoreError::UnexpectedResponse {
        status_code: status,
    }
    .into()
}
