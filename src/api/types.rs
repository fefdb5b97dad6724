use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

/// Credentials for `/auth/login` and `/auth/register`.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthRequest {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for AuthRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthRequest")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitNovelRequest {
    pub novel_id: String,
    pub topic: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextChapterRequest {
    pub novel_id: String,
}

/// The `{code, msg, data}` body most service endpoints answer with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i64,
    pub msg: String,
    pub data: Option<T>,
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Reads a JSON payload as an `ApiResponse`.
    ///
    /// # Errors
    /// Returns an error if the payload does not have the expected shape.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginData {
    pub token: String,
}
