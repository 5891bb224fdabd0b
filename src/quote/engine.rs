//! Quote computation pipeline
//!
//! Single pass: validate the request, rate each requested coverage, stack
//! discounts, and assemble the response. The engine holds no per-call state;
//! concurrent invocations are independent.

use chrono::{Datelike, NaiveDate};
use log::debug;
use thiserror::Error;
use uuid::Uuid;

use crate::coverage::Coverage;
use crate::discount;

use super::data::{CoverageLine, Customer, QuoteRequest, QuoteResponse, Vehicle};

/// Reason a quote request failed validation
///
/// Any error is a rejection; no partial response is produced. The same
/// request always fails the same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("quote request has no customer")]
    MissingCustomer,

    #[error("customer name is empty")]
    MissingCustomerName,

    #[error("quote request has no vehicle")]
    MissingVehicle,

    #[error("no coverage types requested")]
    NoCoverageTypes,
}

/// Quote pipeline service
#[derive(Debug, Clone, Copy, Default)]
pub struct QuoteEngine;

impl QuoteEngine {
    pub fn new() -> Self {
        Self
    }

    /// Validate a request, returning the customer and vehicle references
    ///
    /// Checks run in a fixed order and stop at the first failure: missing
    /// customer, empty customer name, missing vehicle, empty coverage list.
    /// Everything else is accepted as-is, including out-of-range ages and
    /// unrecognized coverage keys.
    pub fn validate(request: &QuoteRequest) -> Result<(&Customer, &Vehicle), ValidationError> {
        let customer = request
            .customer
            .as_ref()
            .ok_or(ValidationError::MissingCustomer)?;
        if customer.name.is_empty() {
            return Err(ValidationError::MissingCustomerName);
        }
        let vehicle = request
            .vehicle
            .as_ref()
            .ok_or(ValidationError::MissingVehicle)?;
        if request.coverage_types.is_empty() {
            return Err(ValidationError::NoCoverageTypes);
        }
        Ok((customer, vehicle))
    }

    /// Compute a quote for the request, priced as of `today`
    ///
    /// Requested coverage keys are matched case-insensitively against the
    /// registered coverages; unrecognized keys are skipped without failing
    /// the request. Monetary fields are rounded to cents independently at
    /// assembly; intermediate arithmetic keeps full precision.
    pub fn get_quote(
        &self,
        request: &QuoteRequest,
        today: NaiveDate,
    ) -> Result<QuoteResponse, ValidationError> {
        let (customer, vehicle) = Self::validate(request)?;
        let quote_year = today.year();

        let mut coverage_breakdown: Vec<CoverageLine> = Vec::new();
        let mut base_premium = 0.0;

        for key in &request.coverage_types {
            let coverage = match Coverage::from_key(key) {
                Some(coverage) => coverage,
                None => {
                    debug!("ignoring unrecognized coverage type {:?}", key);
                    continue;
                }
            };

            let amount = coverage.calculate(vehicle, customer, quote_year);
            base_premium += amount;

            // One breakdown line per coverage, kept at first-match position
            if !coverage_breakdown.iter().any(|line| line.coverage == coverage.name()) {
                coverage_breakdown.push(CoverageLine {
                    coverage: coverage.name().to_string(),
                    amount,
                });
            }
        }

        let discounts = discount::compute(customer, base_premium);
        let final_premium = base_premium - discounts.amount;

        Ok(QuoteResponse {
            request_id: Uuid::new_v4(),
            customer_name: customer.name.clone(),
            base_premium: round2(base_premium),
            coverage_breakdown,
            discounts_applied: discounts.applied,
            discount_amount: round2(discounts.amount),
            final_premium: round2(final_premium),
        })
    }
}

/// Round to cents
///
/// Applied only at the response boundary; base, discount, and final premium
/// are each rounded from their unrounded values.
fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
