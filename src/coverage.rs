//! Coverage rating calculators
//!
//! Each coverage type maps (vehicle, customer) to a premium amount: a base
//! rate scaled by a shared risk-adjustment rule. Calculators are pure; the
//! quote year is passed in rather than read from a clock.

use serde::{Deserialize, Serialize};

use crate::quote::{Customer, Vehicle};

/// Base annual rate for liability coverage
pub const BASE_LIABILITY_RATE: f64 = 500.0;

/// Base annual rate for collision coverage
pub const BASE_COLLISION_RATE: f64 = 300.0;

/// A rateable coverage type
///
/// The set is closed; adding a coverage means adding a variant here plus a
/// key in [`Coverage::from_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Coverage {
    Liability,
    Collision,
}

impl Coverage {
    /// Look up a coverage by its request key (case-insensitive)
    ///
    /// Unknown keys return `None`; the pipeline skips them rather than
    /// failing the request.
    pub fn from_key(key: &str) -> Option<Coverage> {
        match key.to_ascii_lowercase().as_str() {
            "liability" => Some(Coverage::Liability),
            "collision" => Some(Coverage::Collision),
            _ => None,
        }
    }

    /// Display name used in quote breakdowns
    pub fn name(&self) -> &'static str {
        match self {
            Coverage::Liability => "Liability",
            Coverage::Collision => "Collision",
        }
    }

    /// Base rate before risk adjustment
    pub fn base_rate(&self) -> f64 {
        match self {
            Coverage::Liability => BASE_LIABILITY_RATE,
            Coverage::Collision => BASE_COLLISION_RATE,
        }
    }

    /// Calculate the premium for this coverage
    ///
    /// `quote_year` is the calendar year the quote is priced in; vehicle age
    /// is measured against it. Driver-age and vehicle-age surcharges stack
    /// multiplicatively, vehicle after driver.
    pub fn calculate(&self, vehicle: &Vehicle, customer: &Customer, quote_year: i32) -> f64 {
        let mut premium = self.base_rate();

        if customer.age < 25 {
            premium *= 1.5; // young driver surcharge
        } else if customer.age > 65 {
            premium *= 1.2; // senior surcharge
        }

        let vehicle_age = quote_year - vehicle.year;
        if vehicle_age < 3 {
            premium *= 1.1; // new vehicle surcharge
        }

        premium
    }
}
