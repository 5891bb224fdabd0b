//! Quote request and response data structures

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A customer requesting coverage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Unique customer identifier
    pub id: String,

    /// Display name (required for quoting)
    pub name: String,

    /// Age in years
    pub age: i32,

    /// Whether the customer already holds an auto policy
    #[serde(default)]
    pub has_auto_policy: bool,

    /// Whether the customer already holds a home policy
    #[serde(default)]
    pub has_home_policy: bool,

    /// Tenure as a customer in whole years
    #[serde(default)]
    pub years_as_customer: u32,

    /// Qualifies for the safe-driver program
    #[serde(default)]
    pub safe_driver: bool,
}

impl Customer {
    /// Create a customer with no policies, no tenure, and no safe-driver flag
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            has_auto_policy: false,
            has_home_policy: false,
            years_as_customer: 0,
            safe_driver: false,
        }
    }
}

/// The vehicle being quoted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub make: String,

    pub model: String,

    /// Model year
    pub year: i32,

    /// Vehicle identification number (informational, not used in rating)
    #[serde(default)]
    pub vin: Option<String>,
}

impl Vehicle {
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: i32) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year,
            vin: None,
        }
    }
}

/// A request for a premium quote
///
/// Customer and vehicle are optional at this layer; a missing reference is a
/// validation outcome, not a construction error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Customer being quoted
    #[serde(default)]
    pub customer: Option<Customer>,

    /// Vehicle to cover
    #[serde(default)]
    pub vehicle: Option<Vehicle>,

    /// Requested coverage type keys, matched case-insensitively in order
    #[serde(default)]
    pub coverage_types: Vec<String>,

    /// Requested effective date (informational, not used in rating)
    pub effective_date: NaiveDate,
}

/// One line of the per-coverage premium breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageLine {
    /// Coverage display name
    pub coverage: String,

    /// Calculated premium for this coverage
    pub amount: f64,
}

/// A priced quote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResponse {
    /// Unique identifier for this quote, fresh on every call
    pub request_id: Uuid,

    /// Name of the quoted customer
    pub customer_name: String,

    /// Sum of coverage premiums before discounts, rounded to cents
    pub base_premium: f64,

    /// Per-coverage premiums in the order each coverage was first matched
    pub coverage_breakdown: Vec<CoverageLine>,

    /// Labels for each discount applied, in evaluation order
    pub discounts_applied: Vec<String>,

    /// Total discount against the base premium, rounded to cents
    pub discount_amount: f64,

    /// Base premium less discounts, rounded to cents
    pub final_premium: f64,
}
