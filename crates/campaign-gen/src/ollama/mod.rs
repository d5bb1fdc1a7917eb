//! Schema-constrained generation through a local Ollama service.
//!
//! One non-streaming `POST /api/generate` per batch, with the output forced
//! through a JSON Schema (`format` field) so the model cannot drift into
//! prose. Compact encoded fields in the response are mapped back to full
//! domain values by [`decode`].

pub mod decode;

use std::time::Duration;

use serde_json::{json, Value};

use crate::data::{CampaignProductRow, FeedbackRecord, SaleRow};
use crate::error::{GenError, GenResult};
use crate::vocab::{ALLOWED_COMMENTS, ALLOWED_COUNTRIES, ALLOWED_PRODUCTS};

const SYSTEM_PROMPT: &str = "You are a data generator. Output strictly JSON that matches the schema. \
     Do not include explanations or extra text.";

#[derive(Clone, Debug)]
pub struct OllamaConfig {
    /// Host and port of the Ollama service, e.g. `127.0.0.1:11434`.
    pub host: String,
    pub model: String,
    pub temperature: f64,
    pub timeout: Duration,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1:11434".to_string(),
            model: "llama3.2".to_string(),
            temperature: 0.7,
            timeout: Duration::from_secs(300),
        }
    }
}

pub struct OllamaClient {
    http: reqwest::Client,
    config: OllamaConfig,
}

impl OllamaClient {
    pub fn new(config: OllamaConfig) -> GenResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GenError::GenerationService(format!("failed to build http client: {e}")))?;
        Ok(Self { http, config })
    }

    /// Request exactly `count` feedback records. A zero count short-circuits
    /// to an empty batch without touching the network.
    pub async fn generate_feedback(&self, count: usize) -> GenResult<Vec<FeedbackRecord>> {
        if count == 0 {
            return Ok(Vec::new());
        }
        let items = self
            .generate_items(feedback_schema(count), &feedback_prompt(count))
            .await?;
        decode::feedback_from_items(items, count)
    }

    /// Request exactly `count` sales rows plus their campaign/product
    /// mapping rows.
    pub async fn generate_sales(
        &self,
        count: usize,
    ) -> GenResult<(Vec<SaleRow>, Vec<CampaignProductRow>)> {
        if count == 0 {
            return Ok((Vec::new(), Vec::new()));
        }
        let items = self
            .generate_items(sales_schema(count), &sales_prompt(count))
            .await?;
        decode::sales_from_items(items, count)
    }

    async fn generate_items(&self, schema: Value, user_prompt: &str) -> GenResult<Value> {
        let url = format!("http://{}/api/generate", self.config.host);
        let payload = json!({
            "model": self.config.model,
            "prompt": format!("{SYSTEM_PROMPT}\n\n{user_prompt}"),
            "format": schema,
            "stream": false,
            "options": { "temperature": self.config.temperature },
        });

        tracing::debug!(%url, model = %self.config.model, "sending generation request");

        let response = self
            .http
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| GenError::GenerationService(format!("ollama call failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenError::GenerationService(format!(
                "ollama returned status {status} for {url}"
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| GenError::GenerationService(format!("ollama body was not JSON: {e}")))?;

        decode::extract_items(&body)
    }
}

/// JSON Schema forcing an array of exactly `count` feedback items.
pub fn feedback_schema(count: usize) -> Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "username": { "type": "string" },
                "feedback_date": { "type": "string", "pattern": "^[0-9]{4}-[0-9]{2}-[0-9]{2}$" },
                "campaign_id": { "type": "string" },
                "comment": { "type": "integer" },
            },
            "required": ["username", "feedback_date", "campaign_id", "comment"],
            "additionalProperties": false,
        },
        "minItems": count,
        "maxItems": count,
    })
}

/// JSON Schema forcing an array of exactly `count` compact sales items.
pub fn sales_schema(count: usize) -> Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "username": { "type": "string" },
                "sale_date": { "type": "string", "pattern": "^[0-9]{4}-[0-9]{2}-[0-9]{2}$" },
                "campaign_id": { "type": "string" },
                "product_id": { "type": "integer" },
                "country_id": { "type": "integer" },
                "quantity": { "type": "integer" },
                "unit_price_part1": { "type": "integer" },
                "unit_price_part2": { "type": "integer" },
            },
            "required": [
                "username", "sale_date", "campaign_id", "product_id",
                "country_id", "quantity", "unit_price_part1", "unit_price_part2",
            ],
            "additionalProperties": false,
        },
        "minItems": count,
        "maxItems": count,
    })
}

fn feedback_prompt(count: usize) -> String {
    format!(
        "Generate {count} distinct feedback objects as a JSON array.\n\
         Rules:\n\
         - \"username\": random usernames like in social networks, no obscene name.\n\
         - \"feedback_date\": valid date \"YYYY-MM-DD\" in the years 2024, 2025 and 2026.\n\
         - \"campaign_id\": \"CAMP\" followed by three digits (e.g. CAMP147).\n\
         - \"comment\": choose a random number between 1 and {comments}\n\
         Ensure all items are valid and diverse. Return only JSON.",
        comments = ALLOWED_COMMENTS.len(),
    )
}

fn sales_prompt(count: usize) -> String {
    format!(
        "Generate {count} distinct sales as a JSON array.\n\
         Rules:\n\
         - \"username\": random usernames like in social networks, no obscene name.\n\
         - \"sale_date\": valid date \"YYYY-MM-DD\" in the years 2024, 2025 and 2026.\n\
         - \"campaign_id\": \"CAMP\" followed by three digits (e.g. CAMP147).\n\
         - \"product_id\": choose a random number between 1 and {products}\n\
         - \"country_id\": choose a random number between 1 and {countries}\n\
         - \"quantity\": choose a random number between 1 and 999\n\
         - \"unit_price_part1\": choose a random number between 1 and 199\n\
         - \"unit_price_part2\": choose a random number between 1 and 99\n\
         Ensure all items are valid and diverse. Return only JSON.",
        products = ALLOWED_PRODUCTS.len(),
        countries = ALLOWED_COUNTRIES.len(),
    )
}
