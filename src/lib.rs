//! Quote Engine - Insurance premium quoting with risk-adjusted rating and stacking discounts
//!
//! This library provides:
//! - Per-coverage premium rating (liability, collision) with driver-age and
//!   vehicle-age risk adjustments
//! - Independently stacked customer discounts against the undiscounted base
//! - A single-pass quote pipeline: validate, rate, discount, assemble

pub mod coverage;
pub mod discount;
pub mod quote;

// Re-export commonly used types
pub use coverage::Coverage;
pub use discount::DiscountSummary;
pub use quote::{Customer, QuoteEngine, QuoteRequest, QuoteResponse, ValidationError, Vehicle};
