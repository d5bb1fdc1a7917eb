//! Fabricated marketing-campaign test data for a downstream analytics system.
//!
//! Two record families (user feedback, sales + campaign/product mapping) and
//! two generation strategies: a seeded local random generator, and
//! schema-constrained generation through a local Ollama service. Feedback
//! batches are POSTed to an HTTP endpoint through a retrying delivery layer;
//! sales batches land as a pair of index-correlated CSV files.

pub mod cli;
pub mod config;
pub mod csv_out;
pub mod data;
pub mod delivery;
pub mod dispatch;
pub mod error;
pub mod ollama;
pub mod vocab;

pub use error::{GenError, GenResult};
