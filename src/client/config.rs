//! Connection settings for the HTTP client. The base URL and timeout come from
//! CLI flags or `NOVELIST_*` environment variables; values are public, do not put
//! credentials here.

use super::errors::ClientError;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
/// Chapter generation can take many minutes, so the ceiling is generous.
pub const DEFAULT_TIMEOUT_MS: u64 = 1_200_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl ClientConfig {
    /// Builds a config for `base_url` with the default timeout.
    ///
    /// # Errors
    /// Returns `InvalidUrl` if `base_url` is not an absolute http(s) URL.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = normalize_base_url(base_url)?;
        Ok(Self {
            base_url,
            ..Self::default()
        })
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Joins the base URL and `path`.
    ///
    /// # Errors
    /// Returns `InvalidUrl` if the result does not parse.
    pub fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        let base = self.base_url.trim().trim_end_matches('/');
        let path = path.trim().trim_start_matches('/');
        let joined = format!("{base}/{path}");

        Url::parse(&joined).map_err(|err| ClientError::InvalidUrl(format!("{joined}: {err}")))
    }
}

fn normalize_base_url(base_url: &str) -> Result<String, ClientError> {
    let trimmed = base_url.trim();
    let url = Url::parse(trimmed)
        .map_err(|err| ClientError::InvalidUrl(format!("{trimmed}: {err}")))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(ClientError::InvalidUrl(format!(
                "{trimmed}: unsupported scheme {scheme}"
            )));
        }
    }

    if url.host().is_none() {
        return Err(ClientError::InvalidUrl(format!("{trimmed}: no host specified")));
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_constants() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(1200));
    }

    #[test]
    fn new_trims_trailing_slash() -> Result<(), ClientError> {
        let config = ClientConfig::new("  http://localhost:8000/ ")?;
        assert_eq!(config.base_url, "http://localhost:8000");
        Ok(())
    }

    #[test]
    fn new_rejects_bad_urls() {
        assert!(ClientConfig::new("not a url").is_err());
        assert!(ClientConfig::new("ftp://files.example.com").is_err());
        assert!(ClientConfig::new("").is_err());
    }

    #[test]
    fn endpoint_joins_without_double_slash() -> Result<(), ClientError> {
        let config = ClientConfig::new("http://localhost:8000/api/")?;
        assert_eq!(
            config.endpoint("/novel/list")?.as_str(),
            "http://localhost:8000/api/novel/list"
        );
        assert_eq!(
            config.endpoint("novel/status/n1")?.as_str(),
            "http://localhost:8000/api/novel/status/n1"
        );
        Ok(())
    }

    #[test]
    fn with_timeout_overrides() -> Result<(), ClientError> {
        let config = ClientConfig::new("http://localhost:8000")?.with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Duration::from_secs(5));
        Ok(())
    }
}
