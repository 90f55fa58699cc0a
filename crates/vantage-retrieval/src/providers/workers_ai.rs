//! Cloudflare Workers AI embedding provider (`@cf/baai/bge-base-en-v1.5`).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use vantage_core::errors::{RagResult, RetrievalError};
use vantage_core::traits::IEmbeddingProvider;

const MODEL: &str = "@cf/baai/bge-base-en-v1.5";

/// Embeddings via the Cloudflare Workers AI accounts API.
pub struct WorkersAiEmbeddings {
    client: reqwest::Client,
    account_id: String,
    api_token: String,
}

#[derive(Serialize)]
struct WorkersAiRequest<'a> {
    text: Vec<&'a str>,
}

#[derive(Deserialize)]
struct WorkersAiResponse {
    result: WorkersAiResult,
    success: bool,
}

#[derive(Deserialize)]
struct WorkersAiResult {
    data: Vec<Vec<f32>>,
}

impl WorkersAiEmbeddings {
    pub fn new(account_id: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            account_id: account_id.into(),
            api_token: api_token.into(),
        }
    }

    fn error(reason: String) -> RetrievalError {
        RetrievalError::Provider {
            provider: "workers-ai".to_string(),
            reason,
        }
    }
}

#[async_trait]
impl IEmbeddingProvider for WorkersAiEmbeddings {
    async fn embed(&self, text: &str) -> RagResult<Vec<f32>> {
        let url = format!(
            "https://api.cloudflare.com/client/v4/accounts/{}/ai/run/{}",
            self.account_id, MODEL
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_token)
            .json(&WorkersAiRequest { text: vec![text] })
            .send()
            .await
            .map_err(|e| Self::error(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error(format!("http status {}", response.status())).into());
        }

        let body: WorkersAiResponse =
            response.json().await.map_err(|e| Self::error(e.to_string()))?;
        if !body.success {
            return Err(Self::error("api reported failure".to_string()).into());
        }

        body.result
            .data
            .into_iter()
            .next()
            .ok_or_else(|| Self::error("empty embedding response".to_string()).into())
    }

    fn name(&self) -> &str {
        "workers-ai"
    }

    fn is_available(&self) -> bool {
        !self.account_id.is_empty() && !self.api_token.is_empty()
    }
}
