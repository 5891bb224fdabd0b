//! Quote Engine CLI
//!
//! Command-line driver that prices a sample quote and prints the report

use chrono::Local;
use quote_engine::{Customer, QuoteEngine, QuoteRequest, Vehicle};

fn main() {
    env_logger::init();

    let today = Local::now().date_naive();

    // Sample customer with both auto and home policies
    let customer = Customer {
        has_auto_policy: true,
        has_home_policy: true,
        years_as_customer: 6,
        safe_driver: true,
        ..Customer::new("CUST-001", "Jane Smith", 35)
    };

    let vehicle = Vehicle::new("Toyota", "Camry", 2022);

    let request = QuoteRequest {
        customer: Some(customer),
        vehicle: Some(vehicle),
        coverage_types: vec!["liability".to_string(), "collision".to_string()],
        effective_date: today,
    };

    let engine = QuoteEngine::new();
    match engine.get_quote(&request, today) {
        Ok(quote) => {
            println!("{}", "=".repeat(50));
            println!("INSURANCE QUOTE");
            println!("{}", "=".repeat(50));
            println!("Customer: {}", quote.customer_name);
            println!("Quote ID: {}", quote.request_id);
            println!();
            println!("Coverage Breakdown:");
            for line in &quote.coverage_breakdown {
                println!("  {}: ${:.2}", line.coverage, line.amount);
            }
            println!();
            println!("Base Premium: ${:.2}", quote.base_premium);
            println!();
            println!("Discounts Applied:");
            for discount in &quote.discounts_applied {
                println!("  {}", discount);
            }
            println!("Total Discounts: -${:.2}", quote.discount_amount);
            println!();
            println!("Final Premium: ${:.2}", quote.final_premium);
            println!("{}", "=".repeat(50));
        }
        Err(err) => println!("Failed to generate quote: {}", err),
    }
}
