use super::types::{ApiResponse, AuthRequest, LoginData};
use crate::client::{ClientError, HttpClient};
use serde_json::Value;
use tracing::{debug, instrument};

/// Account endpoints. A successful login stores the token in the client's
/// session, so every later call made through the same client is authenticated.
#[derive(Debug, Clone)]
pub struct AuthApi {
    client: HttpClient,
}

impl AuthApi {
    #[must_use]
    pub const fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// `POST /auth/register`
    ///
    /// # Errors
    /// Returns the client error after it has been reported.
    #[instrument(skip(self))]
    pub async fn register(&self, request: &AuthRequest) -> Result<Value, ClientError> {
        self.client.post("/auth/register", request).await
    }

    /// `POST /auth/login`, then stores the returned token.
    ///
    /// # Errors
    /// Returns the client error after it has been reported. A response without a
    /// token is reported and returned as `Decode`.
    #[instrument(skip(self))]
    pub async fn login(&self, request: &AuthRequest) -> Result<String, ClientError> {
        let payload = self.client.post("/auth/login", request).await?;

        let token = ApiResponse::<LoginData>::from_value(payload)
            .ok()
            .and_then(|response| response.data)
            .map(|data| data.token)
            .filter(|token| !token.trim().is_empty());

        let Some(token) = token else {
            let err = ClientError::Decode("login response has no token".to_string());
            self.client.report(&err);
            return Err(err);
        };

        self.client.session().set_token(token.clone());
        debug!("session token stored");

        Ok(token)
    }

    /// Forgets the session token. The service keeps no server-side logout.
    pub fn logout(&self) {
        self.client.session().clear();
        debug!("session token cleared");
    }
}
