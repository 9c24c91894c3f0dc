//! Human-readable model listings.

use std::io::Write;
use std::pin::pin;

use futures_util::{Stream, TryStreamExt};
use genai_probe_types::models::{Model, GENERATE_CONTENT};

use crate::error::Result;

/// Width of the separator printed after each model.
pub const SEPARATOR_WIDTH: usize = 50;

/// 选择要打印的模型。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelFilter {
    /// 全部模型。
    All,
    /// 仅支持指定生成方法的模型。
    SupportsMethod(String),
}

impl ModelFilter {
    /// 仅保留支持 `generateContent` 的模型。
    #[must_use]
    pub fn generate_content() -> Self {
        Self::SupportsMethod(GENERATE_CONTENT.to_string())
    }

    #[must_use]
    pub fn matches(&self, model: &Model) -> bool {
        match self {
            Self::All => true,
            Self::SupportsMethod(method) => model.supports(method),
        }
    }
}

/// Renders the method list as `[a, b, c]`, keeping the service's order and spelling.
#[must_use]
pub fn format_methods(methods: &[String]) -> String {
    format!("[{}]", methods.join(", "))
}

/// 打印单个模型及其分隔线。
///
/// # Errors
/// 写入失败时返回 `Error::Io`。
pub fn write_model<W: Write>(out: &mut W, model: &Model) -> Result<()> {
    writeln!(out, "Model name: {}", model.name.as_deref().unwrap_or_default())?;
    writeln!(
        out,
        "Display name: {}",
        model.display_name.as_deref().unwrap_or_default()
    )?;
    writeln!(
        out,
        "Description: {}",
        model.description.as_deref().unwrap_or_default()
    )?;
    writeln!(
        out,
        "Generation methods: {}",
        format_methods(&model.supported_generation_methods)
    )?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    Ok(())
}

/// 消费模型流，打印符合过滤条件的模型，返回打印数量。
///
/// Models are written as they arrive, so a failure on a later page leaves the
/// earlier entries on `out`.
///
/// # Errors
/// 远程调用失败或写入失败时返回错误。
pub async fn print_models<S, W>(models: S, filter: &ModelFilter, out: &mut W) -> Result<usize>
where
    S: Stream<Item = Result<Model>>,
    W: Write,
{
    let mut models = pin!(models);
    let mut printed = 0;
    while let Some(model) = models.try_next().await? {
        if !filter.matches(&model) {
            tracing::trace!(name = ?model.name, "skipping model");
            continue;
        }
        write_model(out, &model)?;
        printed += 1;
    }
    out.flush()?;
    Ok(printed)
}
