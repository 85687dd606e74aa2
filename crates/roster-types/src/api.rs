//! HTTP request and response bodies

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::UserId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub id: UserId,
}

/// Body of the mutate-by-name endpoint.
///
/// `meta` stays untyped until the boundary check turns it into a
/// [`Meta`](crate::Meta), so a malformed payload gets the dedicated message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertRequest {
    pub name: String,
    #[serde(default)]
    pub meta: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertResponse {
    pub status: String,
    pub result: bool,
}

impl UpsertResponse {
    pub fn ok(result: bool) -> Self {
        Self {
            status: "ok".to_string(),
            result,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
