//! Data Transfer Objects - request/response types for the API.
//!
//! Field names are camelCase on the wire. `author` is always a nested
//! `{ "firstName", "lastName" }` object.

use serde::{Deserialize, Serialize};

/// Author as sent and received over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub first_name: String,
    pub last_name: String,
}

/// Request to create a post. The ID is assigned by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub author: AuthorDto,
}

/// Full replacement of a post's mutable fields.
///
/// `id` may be echoed back by clients; when present it must match the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    pub author: AuthorDto,
}

/// A post as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: AuthorDto,
    pub created_at: String,
}
