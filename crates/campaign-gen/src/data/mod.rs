pub mod random;
pub mod records;

pub use records::{round2, CampaignProductRow, FeedbackRecord, SaleRow};
