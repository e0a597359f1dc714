//! Calendar command implementation
//!
//! Generates a month fare calendar and prints it as JSON, CSV, or a table.

use tracing::info;

use fare_core::types::{Date, Month};
use fare_pricing::{generate_month_calendar, CalendarResult};

use super::{load_policy, parse_trip};
use crate::{CliError, Result};

/// Run the calendar command
#[allow(clippy::too_many_arguments)]
pub fn run(
    origin: &str,
    destination: &str,
    month: Option<&str>,
    cabin: &str,
    booking_date: Option<&str>,
    policy_path: Option<&str>,
    format: &str,
) -> Result<()> {
    let policy = load_policy(policy_path)?;
    let (route, cabin, booking) = parse_trip(origin, destination, cabin, booking_date)?;
    let month = match month {
        Some(raw) => Month::parse(raw)?,
        None => Month::containing(Date::today()),
    };

    info!("Generating calendar...");
    info!("  Route: {}", route);
    info!("  Month: {}", month);
    info!("  Cabin: {}", cabin);
    info!("  Booking date: {}", booking);

    let calendar = generate_month_calendar(&route, month, cabin, booking, &policy);

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&calendar)?);
        }
        "csv" => {
            println!("date,price,currency");
            for day in &calendar.days {
                println!("{},{},{}", day.date, day.price, calendar.currency);
            }
        }
        "table" => {
            print_table(&calendar);
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, csv, table",
                other
            )));
        }
    }

    info!("Calendar complete");
    Ok(())
}

fn print_table(calendar: &CalendarResult) {
    let symbol = calendar.currency.symbol();
    println!("\n┌────────────┬────────────┐");
    println!("│ Date       │ Price      │");
    println!("├────────────┼────────────┤");
    for day in &calendar.days {
        println!("│ {} │ {}{:>9} │", day.date, symbol, day.price);
    }
    println!("└────────────┴────────────┘");
}
