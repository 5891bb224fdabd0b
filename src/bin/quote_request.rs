//! Price a quote request from a JSON file
//!
//! Reads a `QuoteRequest` in JSON form, runs the quote pipeline, and prints
//! either a human-readable report or the raw response JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;

use quote_engine::{QuoteEngine, QuoteRequest, QuoteResponse};

#[derive(Parser, Debug)]
#[command(name = "quote_request", about = "Price an insurance quote request from JSON")]
struct Args {
    /// Path to the JSON quote request file
    request: PathBuf,

    /// Emit the response as JSON instead of a report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<ExitCode> {
    env_logger::init();

    let args = Args::parse();

    let raw = std::fs::read_to_string(&args.request)
        .with_context(|| format!("reading {}", args.request.display()))?;
    let request: QuoteRequest = serde_json::from_str(&raw).context("parsing quote request")?;

    let engine = QuoteEngine::new();
    match engine.get_quote(&request, Local::now().date_naive()) {
        Ok(quote) if args.json => {
            println!("{}", serde_json::to_string_pretty(&quote)?);
            Ok(ExitCode::SUCCESS)
        }
        Ok(quote) => {
            print_report(&quote);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("Quote rejected: {}", err);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_report(quote: &QuoteResponse) {
    println!("Quote {} for {}", quote.request_id, quote.customer_name);
    println!();
    println!("Coverage Breakdown:");
    for line in &quote.coverage_breakdown {
        println!("  {:<12} ${:>10.2}", line.coverage, line.amount);
    }
    println!("  {:<12} ${:>10.2}", "Base", quote.base_premium);
    println!();
    if quote.discounts_applied.is_empty() {
        println!("No discounts applied");
    } else {
        println!("Discounts Applied:");
        for discount in &quote.discounts_applied {
            println!("  {}", discount);
        }
        println!("  {:<12} -${:>9.2}", "Total", quote.discount_amount);
    }
    println!();
    println!("Final Premium: ${:.2}", quote.final_premium);
}
