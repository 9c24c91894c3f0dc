//! One-shot content request used as a connectivity check.

use std::io::Write;

use genai_probe_types::content::Content;
use genai_probe_types::response::GenerateContentResponse;

use crate::error::Result;
use crate::models::Models;

/// 默认测试模型。
pub const DEFAULT_MODEL: &str = "gemini-pro";
/// 默认测试提示词。
pub const DEFAULT_PROMPT: &str = "Say hello!";

/// 测试请求的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// 模型返回的文本。
    Response(String),
    /// 请求失败或响应中没有文本时的错误描述。
    Failed(String),
}

impl ProbeOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Response(_))
    }
}

/// 向 `model` 发送一次 `prompt`，失败不会向上传播。
pub async fn request_text(models: &Models, model: &str, prompt: &str) -> ProbeOutcome {
    match models
        .generate_content(model, vec![Content::text(prompt)])
        .await
    {
        Ok(response) => outcome_from_response(&response),
        Err(err) => {
            tracing::warn!(model, error = %err, "test request failed");
            ProbeOutcome::Failed(err.to_string())
        }
    }
}

fn outcome_from_response(response: &GenerateContentResponse) -> ProbeOutcome {
    if let Some(text) = response.text() {
        return ProbeOutcome::Response(text);
    }
    let reason = response
        .prompt_feedback
        .as_ref()
        .and_then(|feedback| feedback.block_reason)
        .map(|reason| format!(" (prompt blocked: {reason:?})"))
        .or_else(|| {
            response
                .candidates
                .first()
                .and_then(|candidate| candidate.finish_reason)
                .map(|reason| format!(" (finish reason: {reason:?})"))
        })
        .unwrap_or_default();
    ProbeOutcome::Failed(format!("response contained no text{reason}"))
}

/// 打印测试结果（前置一个空行）。
///
/// # Errors
/// 写入失败时返回 `Error::Io`。
pub fn print_outcome<W: Write>(outcome: &ProbeOutcome, out: &mut W) -> Result<()> {
    match outcome {
        ProbeOutcome::Response(text) => writeln!(out, "\nTest response: {text}")?,
        ProbeOutcome::Failed(message) => writeln!(out, "\nError: {message}")?,
    }
    out.flush()?;
    Ok(())
}
