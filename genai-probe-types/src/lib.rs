//! Shared types for genai-probe.

pub mod content;
pub mod enums;
pub mod models;
pub mod response;
