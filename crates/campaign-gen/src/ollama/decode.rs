//! Decoding of Ollama generation responses into canonical records.
//!
//! Everything here is pure: the raw HTTP exchange lives in the parent module,
//! so decode behavior can be tested without a running model service. The
//! model stays untrusted: the batch size is re-checked after decoding, since
//! the schema's `minItems`/`maxItems` is a request, not a guarantee.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use crate::data::{round2, CampaignProductRow, FeedbackRecord, SaleRow};
use crate::error::{GenError, GenResult};
use crate::vocab::{ALLOWED_COMMENTS, ALLOWED_COUNTRIES, ALLOWED_PRODUCTS};

/// How much of an unparseable `response` payload is kept for diagnostics.
const PREVIEW_CHARS: usize = 200;

fn preview(content: &str) -> String {
    content.chars().take(PREVIEW_CHARS).collect()
}

/// Extract the generated item array from a decoded `/api/generate` body.
///
/// The `response` key may hold either a JSON-encoded string or an already
/// structured value; both shapes decode to the same result.
pub fn extract_items(body: &Value) -> GenResult<Value> {
    let response = body.get("response").ok_or_else(|| {
        GenError::ResponseDecode("generation body has no 'response' key".to_string())
    })?;

    match response {
        Value::String(raw) => serde_json::from_str(raw).map_err(|e| {
            GenError::ResponseDecode(format!("non-JSON response: {e}; content: {}...", preview(raw)))
        }),
        other => Ok(other.clone()),
    }
}

/// Feedback item exactly as the schema makes the model emit it: the comment
/// is a compact integer id into [`ALLOWED_COMMENTS`].
#[derive(Debug, Deserialize)]
pub struct RawFeedbackItem {
    pub username: String,
    pub feedback_date: NaiveDate,
    pub campaign_id: String,
    pub comment: u64,
}

/// Sales item in the model's compact encoding: country/product as integer
/// ids, unit price split into whole and cents parts so the model is never
/// asked for an exact decimal.
#[derive(Debug, Deserialize)]
pub struct RawSaleItem {
    pub username: String,
    pub sale_date: NaiveDate,
    pub campaign_id: String,
    pub product_id: u64,
    pub country_id: u64,
    pub quantity: u32,
    pub unit_price_part1: u32,
    pub unit_price_part2: u32,
}

fn resolve(table: &[&str], id: u64) -> String {
    // Modulo wrap tolerates ids one past the end (or further) of the table.
    table[id as usize % table.len()].to_string()
}

fn check_batch_size(actual: usize, expected: usize) -> GenResult<()> {
    if actual != expected {
        return Err(GenError::ResponseDecode(format!(
            "model returned {actual} items, expected exactly {expected}"
        )));
    }
    Ok(())
}

pub fn feedback_from_items(items: Value, expected: usize) -> GenResult<Vec<FeedbackRecord>> {
    let raw: Vec<RawFeedbackItem> = serde_json::from_value(items)
        .map_err(|e| GenError::ResponseDecode(format!("unexpected feedback item shape: {e}")))?;
    check_batch_size(raw.len(), expected)?;

    Ok(raw
        .into_iter()
        .map(|item| FeedbackRecord {
            username: item.username,
            feedback_date: item.feedback_date,
            campaign_id: item.campaign_id,
            comment: resolve(&ALLOWED_COMMENTS, item.comment),
        })
        .collect())
}

pub fn sales_from_items(
    items: Value,
    expected: usize,
) -> GenResult<(Vec<SaleRow>, Vec<CampaignProductRow>)> {
    let raw: Vec<RawSaleItem> = serde_json::from_value(items)
        .map_err(|e| GenError::ResponseDecode(format!("unexpected sales item shape: {e}")))?;
    check_batch_size(raw.len(), expected)?;

    let mut sales = Vec::with_capacity(raw.len());
    let mut mappings = Vec::with_capacity(raw.len());

    for item in raw {
        let product = resolve(&ALLOWED_PRODUCTS, item.product_id);
        let unit_price = round2(f64::from(item.unit_price_part1) + f64::from(item.unit_price_part2) / 100.0);

        sales.push(SaleRow {
            username: item.username,
            sale_date: item.sale_date,
            country: resolve(&ALLOWED_COUNTRIES, item.country_id),
            product: product.clone(),
            quantity: item.quantity,
            unit_price,
            total_amount: round2(f64::from(item.quantity) * unit_price),
        });
        mappings.push(CampaignProductRow {
            campaign_id: item.campaign_id,
            product,
        });
    }

    Ok((sales, mappings))
}
