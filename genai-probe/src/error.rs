//! Error definitions for the probe.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{var} environment variable is required")]
    MissingCredential { var: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("HTTP client error: {source}")]
    HttpClient {
        #[from]
        source: reqwest::Error,
    },

    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Parse error: {message}")]
    Parse { message: String },

    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl Error {
    /// 配置类错误（在任何网络请求之前产生）。
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(
            self,
            Self::MissingCredential { .. } | Self::InvalidConfig { .. }
        )
    }

    /// 远程调用类错误。
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::HttpClient { .. }
                | Self::ApiError { .. }
                | Self::Parse { .. }
                | Self::Serialization { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
