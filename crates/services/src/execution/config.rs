use std::env;

use url::Url;

use crate::error::ExecutionError;

pub const DEFAULT_ENDPOINT: &str = "https://emkc.org/api/v2/piston/execute";
pub const DEFAULT_LANGUAGE: &str = "c++";
pub const DEFAULT_VERSION: &str = "10.2.0";

/// Where submitted code is sent and which toolchain runs it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutionConfig {
    pub endpoint: Url,
    pub language: String,
    pub version: String,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint should be valid"),
            language: DEFAULT_LANGUAGE.into(),
            version: DEFAULT_VERSION.into(),
        }
    }
}

impl ExecutionConfig {
    /// Read `REVIEW_EXEC_URL`, `REVIEW_EXEC_LANGUAGE` and `REVIEW_EXEC_VERSION`,
    /// falling back to the public Piston endpoint running C++.
    ///
    /// # Errors
    ///
    /// Returns `ExecutionError::InvalidEndpoint` if `REVIEW_EXEC_URL` is set
    /// but does not parse.
    pub fn from_env() -> Result<Self, ExecutionError> {
        let mut config = Self::default();
        if let Some(raw) = env::var("REVIEW_EXEC_URL").ok().filter(|v| !v.trim().is_empty()) {
            config = config.with_endpoint(&raw)?;
        }
        if let Some(language) = env::var("REVIEW_EXEC_LANGUAGE")
            .ok()
            .filter(|v| !v.trim().is_empty())
        {
            config.language = language;
        }
        if let Some(version) = env::var("REVIEW_EXEC_VERSION")
            .ok()
            .filter(|v| !v.trim().is_empty())
        {
            config.version = version;
        }
        Ok(config)
    }

    /// Replace the endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ExecutionError::InvalidEndpoint` if `raw` is not a URL.
    pub fn with_endpoint(mut self, raw: &str) -> Result<Self, ExecutionError> {
        self.endpoint = Url::parse(raw.trim())?;
        Ok(self)
    }
}
