//! Typed endpoint surface
//!
//! `ApiClient` pairs the HTTP transport with the session store. Every
//! authenticated call funnels through one interception point: a 401
//! tears down the stored session before the error reaches the caller,
//! so no screen handles authorization loss on its own.

use shared::client::{LoginRequest, LoginResponse};
use shared::models::{
    AnalyticsReport, Category, CategoryCreate, PermissionInfo, Product, ProductCreate,
    ProductUpdate, Sale, SaleSubmission, UserSummary,
};

use crate::{ClientConfig, ClientError, ClientResult, HttpClient, Session, SessionStore};

/// Client for the retail backend REST API
#[derive(Debug)]
pub struct ApiClient {
    http: HttpClient,
    session: SessionStore,
}

impl ApiClient {
    /// Create a new API client from configuration.
    ///
    /// When the config carries a data directory, a previously persisted
    /// session is rehydrated from it.
    pub fn new(config: &ClientConfig) -> Self {
        let session = match &config.data_dir {
            Some(dir) => SessionStore::load(dir),
            None => SessionStore::in_memory(),
        };

        Self {
            http: HttpClient::new(config),
            session,
        }
    }

    /// The session store backing this client
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn token(&self) -> Option<String> {
        self.session.token()
    }

    /// Single interception point for authenticated calls: a 401 clears
    /// the stored credentials before the error propagates.
    fn intercept<T>(&self, result: ClientResult<T>) -> ClientResult<T> {
        if let Err(ClientError::Unauthorized) = &result {
            tracing::warn!("Backend reported 401; clearing stored session");
            self.session.clear();
        }
        result
    }

    // ========== Auth API ==========

    /// Login with email and password.
    ///
    /// On success the `{token, user}` pair replaces the session
    /// wholesale; when the returned permission set is empty the
    /// permissions are refreshed immediately, so gated actions never
    /// evaluate against a session that predates permission data.
    /// Credential rejections return `Ok(false)` with no partial session
    /// stored; transport failures propagate as errors.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<bool> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response: LoginResponse =
            match self.http.post("/auth/login", None, &request).await {
                Ok(response) => response,
                Err(
                    ClientError::Unauthorized
                    | ClientError::Forbidden(_)
                    | ClientError::Validation { .. },
                ) => return Ok(false),
                Err(err) => return Err(err),
            };

        let needs_refresh = response.user.permissions.is_empty();
        self.session.set(Session::new(response.token, response.user));
        tracing::info!(email = %email, "Logged in");

        if needs_refresh {
            tracing::debug!("Login response carried no permissions; refreshing");
            self.refresh_permissions().await;
        }

        Ok(true)
    }

    /// Logout: best-effort server-side token revocation, then drop the
    /// local session unconditionally.
    pub async fn logout(&self) -> ClientResult<()> {
        if let Some(token) = self.token() {
            let result: ClientResult<serde_json::Value> =
                self.http.post_empty("/auth/logout", Some(&token)).await;
            if let Err(err) = result {
                tracing::debug!(%err, "Logout call failed; clearing session anyway");
            }
        }
        self.session.clear();
        Ok(())
    }

    /// Re-fetch the permission set for the current token and replace the
    /// cached set wholesale.
    ///
    /// Fails soft: on error the previously cached permissions stay in
    /// place (stale-but-valid gating beats locking the operator out on a
    /// transient fault) and the condition is logged. A 401 still tears
    /// the session down via the interception point.
    pub async fn refresh_permissions(&self) {
        let Some(token) = self.token() else {
            return;
        };

        let result: ClientResult<PermissionInfo> = self
            .intercept(self.http.get("/users/permissions", Some(&token)).await);

        match result {
            Ok(info) => {
                self.session
                    .replace_permissions(info.role, info.role_display, info.permissions);
            }
            Err(err) => {
                tracing::warn!(%err, "Permission refresh failed; keeping cached set");
            }
        }
    }

    // ========== Catalog API ==========

    /// List product categories
    pub async fn fetch_categories(&self) -> ClientResult<Vec<Category>> {
        let token = self.token();
        self.intercept(self.http.get("/categories", token.as_deref()).await)
    }

    /// Create a category
    pub async fn create_category(&self, category: &CategoryCreate) -> ClientResult<Category> {
        let token = self.token();
        self.intercept(
            self.http
                .post("/categories", token.as_deref(), category)
                .await,
        )
    }

    /// List the product catalog
    pub async fn fetch_products(&self) -> ClientResult<Vec<Product>> {
        let token = self.token();
        self.intercept(self.http.get("/products", token.as_deref()).await)
    }

    /// Create a product
    pub async fn create_product(&self, product: &ProductCreate) -> ClientResult<Product> {
        let token = self.token();
        self.intercept(self.http.post("/products", token.as_deref(), product).await)
    }

    /// Update a product
    pub async fn update_product(&self, id: i64, update: &ProductUpdate) -> ClientResult<Product> {
        let token = self.token();
        self.intercept(
            self.http
                .put(&format!("/products/{id}"), token.as_deref(), update)
                .await,
        )
    }

    /// Delete a product
    pub async fn delete_product(&self, id: i64) -> ClientResult<()> {
        let token = self.token();
        self.intercept(
            self.http
                .delete(&format!("/products/{id}"), token.as_deref())
                .await,
        )
    }

    // ========== Sales API ==========

    /// Sales history, newest first
    pub async fn fetch_sales(&self) -> ClientResult<Vec<Sale>> {
        let token = self.token();
        self.intercept(self.http.get("/sales", token.as_deref()).await)
    }

    /// Record a completed sale
    pub async fn submit_sale(&self, submission: &SaleSubmission) -> ClientResult<Sale> {
        let token = self.token();
        self.intercept(self.http.post("/sales", token.as_deref(), submission).await)
    }

    // ========== Admin API ==========

    /// Precomputed dashboard aggregates
    pub async fn fetch_analytics(&self) -> ClientResult<AnalyticsReport> {
        let token = self.token();
        self.intercept(self.http.get("/analytics", token.as_deref()).await)
    }

    /// User listing with per-user sales stats
    pub async fn fetch_users(&self) -> ClientResult<Vec<UserSummary>> {
        let token = self.token();
        self.intercept(self.http.get("/users", token.as_deref()).await)
    }
}

#[async_trait::async_trait]
impl crate::checkout::SaleTransport for ApiClient {
    async fn submit_sale(&self, submission: &SaleSubmission) -> ClientResult<Sale> {
        ApiClient::submit_sale(self, submission).await
    }
}
