//! Response unions for the Pet Store operations.
//!
//! # Design
//! Every operation gets a closed enum over the statuses its OpenAPI
//! document declares, plus `Undocumented` for anything else. `from_http`
//! only decodes bodies for success statuses; a body that does not match the
//! schema is a `serde_json::Error`, never a different variant. Documented
//! error statuses carry no payload.

use crate::http::HttpResponse;

use super::types::Pet;

/// `POST /pet`
#[derive(Debug, Clone, PartialEq)]
pub enum AddPetResponse {
    Ok(Pet),
    BadRequest,
    Undocumented { status: u16, body: String },
}

impl AddPetResponse {
    pub fn from_http(response: HttpResponse) -> Result<Self, serde_json::Error> {
        Ok(match response.status {
            200 => AddPetResponse::Ok(serde_json::from_str(&response.body)?),
            400 => AddPetResponse::BadRequest,
            status => AddPetResponse::Undocumented {
                status,
                body: response.body,
            },
        })
    }
}

/// `GET /pet/{petId}`
#[derive(Debug, Clone, PartialEq)]
pub enum GetPetByIdResponse {
    Ok(Pet),
    BadRequest,
    NotFound,
    Undocumented { status: u16, body: String },
}

impl GetPetByIdResponse {
    pub fn from_http(response: HttpResponse) -> Result<Self, serde_json::Error> {
        Ok(match response.status {
            200 => GetPetByIdResponse::Ok(serde_json::from_str(&response.body)?),
            400 => GetPetByIdResponse::BadRequest,
            404 => GetPetByIdResponse::NotFound,
            status => GetPetByIdResponse::Undocumented {
                status,
                body: response.body,
            },
        })
    }
}

/// `GET /pet/findByStatus`
#[derive(Debug, Clone, PartialEq)]
pub enum FindPetsByStatusResponse {
    Ok(Vec<Pet>),
    BadRequest,
    Undocumented { status: u16, body: String },
}

impl FindPetsByStatusResponse {
    pub fn from_http(response: HttpResponse) -> Result<Self, serde_json::Error> {
        Ok(match response.status {
            200 => FindPetsByStatusResponse::Ok(serde_json::from_str(&response.body)?),
            400 => FindPetsByStatusResponse::BadRequest,
            status => FindPetsByStatusResponse::Undocumented {
                status,
                body: response.body,
            },
        })
    }
}

/// `PUT /pet/{petId}`
#[derive(Debug, Clone, PartialEq)]
pub enum UpdatePetResponse {
    Ok(Pet),
    BadRequest,
    NotFound,
    UnprocessableContent,
    Undocumented { status: u16, body: String },
}

impl UpdatePetResponse {
    pub fn from_http(response: HttpResponse) -> Result<Self, serde_json::Error> {
        Ok(match response.status {
            200 => UpdatePetResponse::Ok(serde_json::from_str(&response.body)?),
            400 => UpdatePetResponse::BadRequest,
            404 => UpdatePetResponse::NotFound,
            422 => UpdatePetResponse::UnprocessableContent,
            status => UpdatePetResponse::Undocumented {
                status,
                body: response.body,
            },
        })
    }
}

/// `DELETE /pet/{petId}`
#[derive(Debug, Clone, PartialEq)]
pub enum DeletePetResponse {
    Ok,
    BadRequest,
    Undocumented { status: u16, body: String },
}

impl DeletePetResponse {
    pub fn from_http(response: HttpResponse) -> Result<Self, serde_json::Error> {
        Ok(match response.status {
            200 => DeletePetResponse::Ok,
            400 => DeletePetResponse::BadRequest,
            status => DeletePetResponse::Undocumented {
                status,
                body: response.body,
            },
        })
    }
}

/// `POST /user`. The document declares only a `default` response.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateUserResponse {
    Default { status: u16, body: String },
}

impl CreateUserResponse {
    pub fn from_http(response: HttpResponse) -> Result<Self, serde_json::Error> {
        Ok(CreateUserResponse::Default {
            status: response.status,
            body: response.body,
        })
    }
}

/// `GET /user/login`. The token is a bare JSON string.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginUserResponse {
    Ok(String),
    BadRequest,
    Undocumented { status: u16, body: String },
}

impl LoginUserResponse {
    pub fn from_http(response: HttpResponse) -> Result<Self, serde_json::Error> {
        Ok(match response.status {
            200 => LoginUserResponse::Ok(serde_json::from_str(&response.body)?),
            400 => LoginUserResponse::BadRequest,
            status => LoginUserResponse::Undocumented {
                status,
                body: response.body,
            },
        })
    }
}
