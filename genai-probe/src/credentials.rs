//! API key loading.

use std::fmt;

use crate::error::{Error, Result};

/// 默认的 API Key 环境变量。
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Gemini API Key。
///
/// Never empty. `Debug` is redacted so the key cannot leak through logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// 校验并包装 API Key。
    ///
    /// # Errors
    /// 当值为空或仅含空白字符时返回 `Error::InvalidConfig`。
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(Error::InvalidConfig {
                message: "API key must not be empty".into(),
            });
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// 从进程环境变量读取 API Key。
///
/// # Errors
/// 当变量缺失或为空时返回 `Error::MissingCredential`。
pub fn load_api_key(var: &str) -> Result<ApiKey> {
    load_api_key_with(var, |key| std::env::var(key).ok())
}

/// 通过自定义查找函数读取 API Key。
///
/// # Errors
/// 当变量缺失或为空时返回 `Error::MissingCredential`。
pub fn load_api_key_with<F>(var: &str, lookup: F) -> Result<ApiKey>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .and_then(|value| ApiKey::new(value).ok())
        .ok_or_else(|| Error::MissingCredential {
            var: var.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::with_env;

    #[test]
    fn loads_present_key() {
        let key = load_api_key_with(API_KEY_ENV, |_| Some("secret".into())).unwrap();
        assert_eq!(key.expose(), "secret");
    }

    #[test]
    fn missing_key_errors() {
        let err = load_api_key_with(API_KEY_ENV, |_| None).unwrap_err();
        assert!(matches!(err, Error::MissingCredential { var } if var == API_KEY_ENV));
    }

    #[test]
    fn blank_key_errors() {
        let err = load_api_key_with(API_KEY_ENV, |_| Some("  ".into())).unwrap_err();
        assert!(matches!(err, Error::MissingCredential { .. }));
    }

    #[test]
    fn debug_is_redacted() {
        let key = ApiKey::new("super-secret").unwrap();
        let rendered = format!("{key:?}");
        assert!(!rendered.contains("super-secret"));
    }

    #[test]
    fn reads_process_environment() {
        with_env(&[("GENAI_PROBE_TEST_KEY", Some("env-key"))], || {
            let key = load_api_key("GENAI_PROBE_TEST_KEY").unwrap();
            assert_eq!(key.expose(), "env-key");
        });
        with_env(&[("GENAI_PROBE_TEST_KEY", Some(""))], || {
            assert!(load_api_key("GENAI_PROBE_TEST_KEY").is_err());
        });
    }
}
