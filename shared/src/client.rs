//! Client-related types shared between transport and callers
//!
//! Request/response DTOs for the auth endpoints.

use serde::{Deserialize, Serialize};

use crate::models::UserInfo;

/// Login request (`POST /auth/login`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}
