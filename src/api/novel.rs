use super::types::{InitNovelRequest, NextChapterRequest};
use crate::client::{ClientError, HttpClient};
use serde_json::Value;
use tracing::instrument;

/// Novel endpoints of the writing service.
#[derive(Debug, Clone)]
pub struct NovelApi {
    client: HttpClient,
}

impl NovelApi {
    #[must_use]
    pub const fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// `POST /novel/init`: creates the novel and generates its first chapter.
    ///
    /// # Errors
    /// Returns the client error after it has been reported.
    #[instrument(skip(self))]
    pub async fn init_novel(&self, request: &InitNovelRequest) -> Result<Value, ClientError> {
        self.client.post("/novel/init", request).await
    }

    /// `POST /novel/next_chapter`
    ///
    /// # Errors
    /// Returns the client error after it has been reported.
    #[instrument(skip(self))]
    pub async fn next_chapter(&self, request: &NextChapterRequest) -> Result<Value, ClientError> {
        self.client.post("/novel/next_chapter", request).await
    }

    /// `GET /novel/status/{novel_id}`
    ///
    /// # Errors
    /// Returns the client error after it has been reported.
    #[instrument(skip(self))]
    pub async fn status(&self, novel_id: &str) -> Result<Value, ClientError> {
        let path = format!("/novel/status/{}", urlencoding::encode(novel_id));
        self.client.get(&path).await
    }

    /// `GET /novel/list`
    ///
    /// # Errors
    /// Returns the client error after it has been reported.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Value, ClientError> {
        self.client.get("/novel/list").await
    }

    /// `GET /novel/export/{novel_id}`. The export is plain text on the server
    /// side, but it is returned as raw bytes without any parsing.
    ///
    /// # Errors
    /// Returns the client error after it has been reported.
    #[instrument(skip(self))]
    pub async fn export(&self, novel_id: &str) -> Result<Vec<u8>, ClientError> {
        let path = format!("/novel/export/{}", urlencoding::encode(novel_id));
        self.client.get_bytes(&path).await
    }
}
