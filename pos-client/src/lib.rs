//! POS Client - HTTP client for the retail backend
//!
//! Typed REST calls, session/permission state and the checkout flow for
//! the point-of-sale terminal.

pub mod api;
pub mod checkout;
pub mod config;
pub mod error;
pub mod http;
pub mod session;

pub use api::ApiClient;
pub use checkout::{CacheInvalidation, CheckoutFlow, CheckoutReceipt, SaleTransport};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use session::{Session, SessionStore};

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, LoginResponse};
pub use shared::models::{PermissionInfo, UserInfo};
