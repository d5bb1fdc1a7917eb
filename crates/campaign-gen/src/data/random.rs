//! Local pseudo-random generator for both record families.
//!
//! Fully deterministic for a given seed, so fixtures can be regenerated
//! byte-for-byte and tests can assert on exact output.

use chrono::{Duration, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::records::{round2, CampaignProductRow, FeedbackRecord, SaleRow};
use crate::vocab::{ALLOWED_COMMENTS, ALLOWED_COUNTRIES, ALLOWED_PRODUCTS};

/// Calendar bounds every generated date falls within.
pub const DATE_RANGE: ((i32, u32, u32), (i32, u32, u32)) = ((2024, 1, 1), (2026, 12, 31));

fn date_bound((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("DATE_RANGE holds valid calendar dates")
}

/// Linear interpolation over the day span with a proportion drawn in `[0,1)`.
fn sample_date<R: Rng>(rng: &mut R) -> NaiveDate {
    let start = date_bound(DATE_RANGE.0);
    let end = date_bound(DATE_RANGE.1);
    let span_days = (end - start).num_days();
    let prop: f64 = rng.gen();
    start + Duration::days((prop * span_days as f64) as i64)
}

fn sample_username<R: Rng>(rng: &mut R) -> String {
    format!("user_{}", rng.gen_range(1..=4999))
}

fn sample_campaign_id<R: Rng>(rng: &mut R) -> String {
    format!("CAMP{}", rng.gen_range(1..=999))
}

/// Generate exactly `count` feedback records from the seeded generator.
pub fn generate_feedback_rows(seed: u64, count: usize) -> Vec<FeedbackRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut out = Vec::with_capacity(count);

    for _ in 0..count {
        let comment_idx = rng.gen_range(0..ALLOWED_COMMENTS.len());
        let record = FeedbackRecord {
            username: sample_username(&mut rng),
            feedback_date: sample_date(&mut rng),
            campaign_id: sample_campaign_id(&mut rng),
            comment: ALLOWED_COMMENTS[comment_idx].to_string(),
        };
        tracing::debug!(?record, "generated random feedback");
        out.push(record);
    }

    out
}

/// Generate exactly `count` sales rows plus their index-correlated
/// campaign/product mapping rows.
pub fn generate_sales_rows(seed: u64, count: usize) -> (Vec<SaleRow>, Vec<CampaignProductRow>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut sales = Vec::with_capacity(count);
    let mut mappings = Vec::with_capacity(count);

    for _ in 0..count {
        let quantity: u32 = rng.gen_range(1..=999);
        let unit_price = round2(rng.gen_range(1.00..=200.00));
        let product = ALLOWED_PRODUCTS[rng.gen_range(0..ALLOWED_PRODUCTS.len())];
        let country = ALLOWED_COUNTRIES[rng.gen_range(0..ALLOWED_COUNTRIES.len())];

        sales.push(SaleRow {
            username: sample_username(&mut rng),
            sale_date: sample_date(&mut rng),
            country: country.to_string(),
            product: product.to_string(),
            quantity,
            unit_price,
            total_amount: round2(quantity as f64 * unit_price),
        });
        mappings.push(CampaignProductRow {
            campaign_id: sample_campaign_id(&mut rng),
            product: product.to_string(),
        });
    }

    (sales, mappings)
}
