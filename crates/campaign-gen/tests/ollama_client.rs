use std::time::Duration;

use campaign_gen::error::GenError;
use campaign_gen::ollama::{OllamaClient, OllamaConfig};

fn unreachable_config() -> OllamaConfig {
    OllamaConfig {
        // Reserved port nothing listens on; any network call fails fast.
        host: "127.0.0.1:9".to_string(),
        timeout: Duration::from_millis(250),
        ..OllamaConfig::default()
    }
}

#[tokio::test]
async fn zero_count_returns_empty_without_network_calls() {
    let client = OllamaClient::new(unreachable_config()).expect("client builds");

    // The host is unreachable, so a non-empty result proves nothing was sent.
    let feedback = client.generate_feedback(0).await.expect("no network, no error");
    assert!(feedback.is_empty());

    let (sales, mappings) = client.generate_sales(0).await.expect("no network, no error");
    assert!(sales.is_empty());
    assert!(mappings.is_empty());
}

#[tokio::test]
async fn unreachable_service_is_a_generation_service_error() {
    let client = OllamaClient::new(unreachable_config()).expect("client builds");

    let err = client.generate_feedback(3).await.expect_err("must fail");
    assert!(matches!(err, GenError::GenerationService(_)), "got {err}");
}
