//! Discount stacking engine
//!
//! Every rule is evaluated independently against the same un-reduced base
//! premium and the results are summed, never compounded on a running total.
//! The combined amount is not clamped.

use serde::{Deserialize, Serialize};

use crate::quote::Customer;

/// Result of a discount evaluation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscountSummary {
    /// Total discount amount against the base premium
    pub amount: f64,

    /// Human-readable label for each discount applied, in evaluation order
    pub applied: Vec<String>,
}

/// Evaluate all discount rules for a customer against a base premium
///
/// Rules fire on customer attributes alone, so labels are appended even when
/// the base premium (and therefore every amount) is zero.
pub fn compute(customer: &Customer, base_premium: f64) -> DiscountSummary {
    let mut total = 0.0;
    let mut applied = Vec::new();

    // Safe driver: requires at least a year of tenure and a mature driver
    if customer.safe_driver && customer.years_as_customer > 0 && customer.age >= 25 {
        total += base_premium * 0.10;
        applied.push("Safe Driver (-10%)".to_string());
    }

    if customer.has_auto_policy {
        total += base_premium * 0.05;
        applied.push("Multi-Policy Auto (-5%)".to_string());
    }

    if customer.has_home_policy {
        total += base_premium * 0.05;
        applied.push("Multi-Policy Home (-5%)".to_string());
    }

    if customer.has_auto_policy && customer.has_home_policy {
        total += base_premium * 0.05;
        applied.push("Bundle Bonus (-5%)".to_string());
        // Bundle customers get the multi-policy rate a second time,
        // with no matching label
        total += base_premium * 0.05;
    }

    // Loyalty tiers are mutually exclusive; highest tier wins
    if customer.years_as_customer >= 5 {
        total += base_premium * 0.08;
        applied.push("Loyalty 5+ Years (-8%)".to_string());
    } else if customer.years_as_customer >= 3 {
        total += base_premium * 0.05;
        applied.push("Loyalty 3+ Years (-5%)".to_string());
    } else if customer.years_as_customer >= 1 {
        total += base_premium * 0.02;
        applied.push("Loyalty 1+ Years (-2%)".to_string());
    }

    DiscountSummary {
        amount: total,
        applied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn test_customer(age: i32) -> Customer {
        Customer::new("TEST-001", "Test User", age)
    }

    #[test]
    fn test_no_discounts_for_fresh_customer() {
        let summary = compute(&test_customer(30), 1000.0);

        assert_abs_diff_eq!(summary.amount, 0.0, epsilon = 1e-10);
        assert!(summary.applied.is_empty());
    }

    #[test]
    fn test_safe_driver_discount() {
        let customer = Customer {
            safe_driver: true,
            years_as_customer: 2,
            ..test_customer(35)
        };
        let summary = compute(&customer, 550.0);

        assert!(summary.applied.contains(&"Safe Driver (-10%)".to_string()));
        // 10% of base plus the 1-year loyalty tier (2%)
        assert_abs_diff_eq!(summary.amount, 55.0 + 11.0, epsilon = 1e-10);
    }

    #[test]
    fn test_safe_driver_requires_tenure() {
        let customer = Customer {
            safe_driver: true,
            years_as_customer: 0,
            ..test_customer(35)
        };
        let summary = compute(&customer, 550.0);

        assert!(!summary.applied.contains(&"Safe Driver (-10%)".to_string()));
        assert_abs_diff_eq!(summary.amount, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_safe_driver_requires_mature_age() {
        let customer = Customer {
            safe_driver: true,
            years_as_customer: 2,
            ..test_customer(22)
        };
        let summary = compute(&customer, 550.0);

        assert!(!summary.applied.contains(&"Safe Driver (-10%)".to_string()));
    }

    #[test]
    fn test_bundle_double_counts_multi_policy() {
        let customer = Customer {
            has_auto_policy: true,
            has_home_policy: true,
            ..test_customer(40)
        };
        let summary = compute(&customer, 1000.0);

        assert_eq!(
            summary.applied,
            vec![
                "Multi-Policy Auto (-5%)".to_string(),
                "Multi-Policy Home (-5%)".to_string(),
                "Bundle Bonus (-5%)".to_string(),
            ]
        );
        // The labels imply 150.0, but bundled customers carry an extra
        // unlabeled 5% of base: 50 + 50 + 50 + 50 = 200
        assert_abs_diff_eq!(summary.amount, 200.0, epsilon = 1e-10);
    }

    #[test]
    fn test_loyalty_highest_tier_wins() {
        let five = compute(
            &Customer { years_as_customer: 6, ..test_customer(40) },
            1000.0,
        );
        let three = compute(
            &Customer { years_as_customer: 4, ..test_customer(40) },
            1000.0,
        );
        let one = compute(
            &Customer { years_as_customer: 1, ..test_customer(40) },
            1000.0,
        );

        assert_eq!(five.applied, vec!["Loyalty 5+ Years (-8%)".to_string()]);
        assert_eq!(three.applied, vec!["Loyalty 3+ Years (-5%)".to_string()]);
        assert_eq!(one.applied, vec!["Loyalty 1+ Years (-2%)".to_string()]);

        assert_abs_diff_eq!(five.amount, 80.0, epsilon = 1e-10);
        assert_abs_diff_eq!(three.amount, 50.0, epsilon = 1e-10);
        assert_abs_diff_eq!(one.amount, 20.0, epsilon = 1e-10);
    }

    #[test]
    fn test_stacking_uses_base_not_running_total() {
        // Auto + home on 1000: each is 5% of 1000, not 5% of 1000 then 5% of 950
        let customer = Customer {
            has_auto_policy: true,
            has_home_policy: false,
            years_as_customer: 5,
            ..test_customer(40)
        };
        let summary = compute(&customer, 1000.0);

        assert_abs_diff_eq!(summary.amount, 50.0 + 80.0, epsilon = 1e-10);
    }

    #[test]
    fn test_maximum_stack() {
        // Safe driver + auto + home + bundle (labeled and unlabeled) + loyalty 5+
        let customer = Customer {
            has_auto_policy: true,
            has_home_policy: true,
            years_as_customer: 6,
            safe_driver: true,
            ..test_customer(35)
        };
        let summary = compute(&customer, 1000.0);

        assert_eq!(summary.applied.len(), 5);
        assert_abs_diff_eq!(summary.amount, 380.0, epsilon = 1e-10);
    }

    #[test]
    fn test_zero_base_still_labels() {
        let customer = Customer {
            has_auto_policy: true,
            ..test_customer(40)
        };
        let summary = compute(&customer, 0.0);

        assert_eq!(summary.applied, vec!["Multi-Policy Auto (-5%)".to_string()]);
        assert_abs_diff_eq!(summary.amount, 0.0, epsilon = 1e-10);
    }
}
