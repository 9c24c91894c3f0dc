//! Models API surface.

use std::sync::Arc;

use futures_util::{stream, Stream, TryStreamExt};
use genai_probe_types::content::Content;
use genai_probe_types::models::{
    GenerateContentConfig, GenerateContentRequest, ListModelsConfig, ListModelsResponse, Model,
};
use genai_probe_types::response::GenerateContentResponse;

use crate::client::ClientInner;
use crate::error::{Error, Result};
use crate::http_response::ensure_success;

#[derive(Clone)]
pub struct Models {
    pub(crate) inner: Arc<ClientInner>,
}

impl Models {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// 生成内容（默认配置）。
    pub async fn generate_content(
        &self,
        model: impl Into<String>,
        contents: Vec<Content>,
    ) -> Result<GenerateContentResponse> {
        self.generate_content_with_config(model, contents, GenerateContentConfig::default())
            .await
    }

    /// 生成内容（自定义配置）。
    pub async fn generate_content_with_config(
        &self,
        model: impl Into<String>,
        contents: Vec<Content>,
        config: GenerateContentConfig,
    ) -> Result<GenerateContentResponse> {
        let model = model.into();
        if contents.is_empty() {
            return Err(Error::InvalidConfig {
                message: "generateContent requires at least one content".into(),
            });
        }
        let request = GenerateContentRequest::new(contents, config);
        let url = build_model_method_url(&self.inner, &model, "generateContent");

        let request = self.inner.http.post(url).json(&request);
        let response = ensure_success(self.inner.send(request).await?).await?;
        Ok(response.json::<GenerateContentResponse>().await?)
    }

    /// 列出模型（单页）。
    pub async fn list(&self) -> Result<ListModelsResponse> {
        self.list_with_config(ListModelsConfig::default()).await
    }

    /// 列出模型（带配置，单页）。
    pub async fn list_with_config(&self, config: ListModelsConfig) -> Result<ListModelsResponse> {
        let url = build_models_list_url(&self.inner, &config)?;
        let request = self.inner.http.get(url);
        let response = ensure_success(self.inner.send(request).await?).await?;
        let result = response.json::<ListModelsResponse>().await?;
        tracing::debug!(
            count = result.models.len(),
            has_next_page = result.next_page_token.as_deref().is_some_and(|t| !t.is_empty()),
            "listed models page"
        );
        Ok(result)
    }

    /// 逐个产出所有模型（惰性翻页）。
    ///
    /// Each page is fetched only when the previous one has been consumed.
    /// Every call starts a fresh enumeration from the first page.
    pub fn stream(&self) -> impl Stream<Item = Result<Model>> + 'static {
        self.stream_with_config(ListModelsConfig::default())
    }

    /// 逐个产出所有模型（带配置，惰性翻页）。
    pub fn stream_with_config(
        &self,
        config: ListModelsConfig,
    ) -> impl Stream<Item = Result<Model>> + 'static {
        let models = self.clone();
        stream::try_unfold(Some(config), move |state| {
            let models = models.clone();
            async move {
                let Some(config) = state else {
                    return Ok::<_, Error>(None);
                };
                let response = models.list_with_config(config.clone()).await?;
                let next = match response.next_page_token {
                    Some(token) if !token.is_empty() => Some(ListModelsConfig {
                        page_token: Some(token),
                        ..config
                    }),
                    _ => None,
                };
                let page = stream::iter(response.models.into_iter().map(Ok::<Model, Error>));
                Ok(Some((page, next)))
            }
        })
        .try_flatten()
    }

    /// 列出所有模型（自动翻页）。
    pub async fn all(&self) -> Result<Vec<Model>> {
        self.stream().try_collect().await
    }

    /// 获取单个模型信息。
    pub async fn get(&self, model: impl Into<String>) -> Result<Model> {
        let url = build_model_get_url(&self.inner, &model.into());
        let request = self.inner.http.get(url);
        let response = ensure_success(self.inner.send(request).await?).await?;
        Ok(response.json::<Model>().await?)
    }
}

fn transform_model_name(model: &str) -> String {
    if model.starts_with("models/") || model.starts_with("tunedModels/") {
        model.to_string()
    } else {
        format!("models/{model}")
    }
}

fn build_model_method_url(inner: &ClientInner, model: &str, method: &str) -> String {
    let model = transform_model_name(model);
    let base = &inner.api_client.base_url;
    let version = &inner.api_client.api_version;
    format!("{base}{version}/{model}:{method}")
}

fn build_model_get_url(inner: &ClientInner, model: &str) -> String {
    let model = transform_model_name(model);
    let base = &inner.api_client.base_url;
    let version = &inner.api_client.api_version;
    format!("{base}{version}/{model}")
}

fn build_models_list_url(inner: &ClientInner, config: &ListModelsConfig) -> Result<String> {
    let base = &inner.api_client.base_url;
    let version = &inner.api_client.api_version;
    add_list_query_params(&format!("{base}{version}/models"), config)
}

fn add_list_query_params(url: &str, config: &ListModelsConfig) -> Result<String> {
    let mut url = reqwest::Url::parse(url).map_err(|err| Error::InvalidConfig {
        message: err.to_string(),
    })?;
    if config.page_size.is_some() || config.page_token.is_some() {
        let mut pairs = url.query_pairs_mut();
        if let Some(page_size) = config.page_size {
            pairs.append_pair("pageSize", &page_size.to_string());
        }
        if let Some(page_token) = &config.page_token {
            pairs.append_pair("pageToken", page_token);
        }
    }
    Ok(url.to_string())
}
