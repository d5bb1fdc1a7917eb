//! End-to-end shape of the payload handed to the delivery layer.

use campaign_gen::config::GenerationMode;
use campaign_gen::dispatch::generate_feedback;
use campaign_gen::ollama::OllamaConfig;
use campaign_gen::vocab::ALLOWED_COMMENTS;

#[tokio::test]
async fn random_mode_batch_serializes_to_schema_valid_json_array() {
    let records = generate_feedback(GenerationMode::Random, 42, 3, &OllamaConfig::default())
        .await
        .expect("random generation cannot fail");

    let payload = serde_json::to_value(&records).expect("serializes");
    let items = payload.as_array().expect("payload is a JSON array");
    assert_eq!(items.len(), 3);

    for item in items {
        let object = item.as_object().expect("item is an object");
        assert_eq!(object.len(), 4);

        let username = object["username"].as_str().expect("username is a string");
        assert!(username.starts_with("user_"));

        let date = object["feedback_date"].as_str().expect("date is a string");
        let (year, rest) = date.split_at(4);
        assert!(year.parse::<u16>().is_ok_and(|y| (2024..=2026).contains(&y)));
        assert_eq!(rest.len(), 6);
        assert!(rest.starts_with('-'));

        let campaign_id = object["campaign_id"].as_str().expect("campaign id is a string");
        assert!(campaign_id.starts_with("CAMP"));

        let comment = object["comment"].as_str().expect("comment is a string");
        assert!(ALLOWED_COMMENTS.contains(&comment));
    }
}
