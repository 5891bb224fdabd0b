//! Quote request/response model and computation pipeline

mod data;
mod engine;

pub use data::{CoverageLine, Customer, QuoteRequest, QuoteResponse, Vehicle};
pub use engine::{QuoteEngine, ValidationError};
