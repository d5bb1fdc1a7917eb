//! Routing between generation strategies and output sinks.

use std::collections::HashMap;

use crate::config::{AppConfig, GenerationMode};
use crate::csv_out;
use crate::data::random::{generate_feedback_rows, generate_sales_rows};
use crate::data::{CampaignProductRow, FeedbackRecord, SaleRow};
use crate::delivery::{deliver_json, DeliveryResponse, RetryPolicy};
use crate::error::GenResult;
use crate::ollama::{OllamaClient, OllamaConfig};

/// Produce `count` feedback records with the selected strategy.
///
/// Generation errors from the Ollama path propagate as-is; there is no
/// automatic fallback to random generation.
pub async fn generate_feedback(
    mode: GenerationMode,
    seed: u64,
    count: usize,
    ollama: &OllamaConfig,
) -> GenResult<Vec<FeedbackRecord>> {
    match mode {
        GenerationMode::Ollama => {
            tracing::info!(model = %ollama.model, host = %ollama.host, "ollama generation mode");
            OllamaClient::new(ollama.clone())?.generate_feedback(count).await
        }
        GenerationMode::Random => {
            tracing::info!(seed, "random generation mode");
            Ok(generate_feedback_rows(seed, count))
        }
    }
}

/// Produce `count` sales rows and their mapping rows with the selected
/// strategy.
pub async fn generate_sales(
    mode: GenerationMode,
    seed: u64,
    count: usize,
    ollama: &OllamaConfig,
) -> GenResult<(Vec<SaleRow>, Vec<CampaignProductRow>)> {
    match mode {
        GenerationMode::Ollama => {
            tracing::info!(model = %ollama.model, host = %ollama.host, "ollama generation mode");
            OllamaClient::new(ollama.clone())?.generate_sales(count).await
        }
        GenerationMode::Random => {
            tracing::info!(seed, "random generation mode");
            Ok(generate_sales_rows(seed, count))
        }
    }
}

/// Generate a feedback batch and deliver it as one JSON array payload.
pub async fn push_feedback(
    config: &AppConfig,
    mode: GenerationMode,
    seed: u64,
    count: usize,
) -> GenResult<DeliveryResponse> {
    let records = generate_feedback(mode, seed, count, &config.ollama.client_config()).await?;
    let payload = serde_json::to_value(&records)?;
    let endpoint = config.api.endpoint()?;

    let http = reqwest::Client::new();
    let response = deliver_json(
        &http,
        &endpoint,
        &payload,
        &HashMap::new(),
        &RetryPolicy::default(),
    )
    .await?;

    tracing::info!(status = response.status, records = records.len(), "push finished");
    Ok(response)
}

/// Generate a sales batch and write both CSV files. Generation failure
/// prevents any file write.
pub async fn write_sales_files(
    config: &AppConfig,
    mode: GenerationMode,
    seed: u64,
    count: usize,
) -> GenResult<()> {
    let (sales, mappings) = generate_sales(mode, seed, count, &config.ollama.client_config()).await?;
    csv_out::write_sales_files(
        &config.csv.sales_file,
        &config.csv.campaign_product_file,
        &sales,
        &mappings,
    )
}
