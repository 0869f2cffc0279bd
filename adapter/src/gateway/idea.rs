use crate::redis::{
    model::{CachedIdeaText, IdeaCacheKey},
    RedisClient,
};
use async_trait::async_trait;
use kernel::{gateway::idea::IdeaGateway, model::id::UserId};
use reqwest::Client;
use serde::Deserialize;
use shared::{
    config::IdeasConfig,
    error::{AppError, AppResult},
};
use std::sync::Arc;

/// HTTP client for the hosted text-generation service. It answers with one
/// free-text block holding a numbered list of activity ideas; segmentation
/// happens in the kernel. Responses are cached per user in the key-value
/// store so page reloads do not trigger a fresh generation.
pub struct IdeaGatewayImpl {
    client: Client,
    kv: Arc<RedisClient>,
    endpoint: String,
    api_key: String,
    cache_ttl: u64,
}

#[derive(Deserialize)]
struct IdeasResponseBody {
    text: String,
}

impl IdeaGatewayImpl {
    pub fn new(config: &IdeasConfig, kv: Arc<RedisClient>) -> Self {
        Self {
            client: Client::new(),
            kv,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            cache_ttl: config.cache_ttl,
        }
    }

    async fn request_generation(&self, user_id: UserId) -> AppResult<String> {
        let res = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({ "user_id": user_id.to_string() }))
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("idea service error: {e}")))?;

        if !res.status().is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "idea service answered with status {}",
                res.status()
            )));
        }

        let body: IdeasResponseBody = res
            .json()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("broken idea response: {e}")))?;

        Ok(body.text)
    }
}

#[async_trait]
impl IdeaGateway for IdeaGatewayImpl {
    async fn generate(&self, user_id: UserId) -> AppResult<String> {
        let key = IdeaCacheKey(user_id);
        if let Some(cached) = self.kv.get(&key).await? {
            return Ok(cached.0);
        }

        let text = self.request_generation(user_id).await?;
        self.kv
            .set_ex(&key, &CachedIdeaText(text.clone()), self.cache_ttl)
            .await?;

        Ok(text)
    }
}
