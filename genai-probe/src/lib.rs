//! Gemini API model listing and connectivity probe.
//!
//! The library carries everything the `check-models` and `test-gemini`
//! binaries do: load the API key, build a [`Client`], enumerate models and
//! send a single test prompt.

pub mod client;
pub mod credentials;
pub mod error;
mod http_response;
pub mod listing;
pub mod models;
pub mod probe;

#[cfg(test)]
mod test_support;

pub use genai_probe_types as types;

pub use client::{Client, ClientBuilder, ClientConfig, HttpOptions};
pub use credentials::{load_api_key, ApiKey, API_KEY_ENV};
pub use error::{Error, Result};
pub use listing::ModelFilter;
pub use probe::ProbeOutcome;
