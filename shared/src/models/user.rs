//! User Models

use serde::{Deserialize, Serialize};

/// Authenticated user identity
///
/// Returned by `POST /auth/login` and cached in the session store.
/// `permissions` may be empty on older stored sessions; callers refresh
/// it via `GET /users/permissions` when that happens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub is_staff: bool,
    /// Superusers hold every permission regardless of the explicit set
    #[serde(default)]
    pub is_superuser: bool,
    pub role: Option<String>,
    pub role_display: Option<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Response of `GET /users/permissions`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionInfo {
    pub role: String,
    pub role_display: String,
    pub permissions: Vec<String>,
}

/// Admin user listing entry (`GET /users`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub is_active: bool,
    pub date_joined: Option<String>,
    pub last_login: Option<String>,
    /// Number of sales recorded by this user
    #[serde(default)]
    pub sales_count: u64,
    /// Total value of sales recorded by this user
    #[serde(default)]
    pub sales_total: f64,
}
