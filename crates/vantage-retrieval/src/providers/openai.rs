//! OpenAI embedding provider (`text-embedding-3-small`, 1536 dims).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use vantage_core::errors::{RagResult, RetrievalError};
use vantage_core::traits::IEmbeddingProvider;

const API_URL: &str = "https://api.openai.com/v1/embeddings";
const MODEL: &str = "text-embedding-3-small";
const DIMENSIONS: usize = 1536;

/// Embeddings via the OpenAI API.
pub struct OpenAiEmbeddings {
    client: reqwest::Client,
    api_key: String,
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
    dimensions: usize,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

impl OpenAiEmbeddings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
        }
    }

    fn error(reason: String) -> RetrievalError {
        RetrievalError::Provider {
            provider: "openai".to_string(),
            reason,
        }
    }
}

#[async_trait]
impl IEmbeddingProvider for OpenAiEmbeddings {
    async fn embed(&self, text: &str) -> RagResult<Vec<f32>> {
        let response = self
            .client
            .post(API_URL)
            .bearer_auth(&self.api_key)
            .json(&EmbeddingRequest {
                model: MODEL,
                input: text,
                dimensions: DIMENSIONS,
            })
            .send()
            .await
            .map_err(|e| Self::error(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error(format!("http status {}", response.status())).into());
        }

        let body: EmbeddingResponse =
            response.json().await.map_err(|e| Self::error(e.to_string()))?;
        body.data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| Self::error("empty embedding response".to_string()).into())
    }

    fn name(&self) -> &str {
        "openai"
    }

    fn is_available(&self) -> bool {
        !self.api_key.is_empty()
    }
}
