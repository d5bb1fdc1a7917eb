use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One user feedback entry, delivered as part of a JSON array payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub username: String,
    pub feedback_date: NaiveDate,
    pub campaign_id: String,
    pub comment: String,
}

/// One sales line of the sales CSV output.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaleRow {
    pub username: String,
    pub sale_date: NaiveDate,
    pub country: String,
    pub product: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub total_amount: f64,
}

/// Companion line of the campaign/product mapping CSV. Row `i` of the mapping
/// output corresponds to row `i` of the sales output.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CampaignProductRow {
    pub campaign_id: String,
    pub product: String,
}

/// Round to two decimals, the precision of every monetary field.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
