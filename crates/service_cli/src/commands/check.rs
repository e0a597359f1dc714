//! Check command implementation
//!
//! Loads the pricing policy, validates it, and prints the effective
//! parameters.

use tracing::info;

use super::load_policy;
use crate::Result;

/// Run the check command
pub fn run(policy_path: Option<&str>) -> Result<()> {
    match policy_path {
        Some(p) => info!("Checking policy file {}...", p),
        None => info!("Checking built-in default policy..."),
    }

    // load_policy validates on the way in
    let policy = load_policy(policy_path)?;

    println!("Policy OK");
    println!("  currency:          {}", policy.currency);
    println!(
        "  base fare band:    {}..{}",
        policy.base_fare_min, policy.base_fare_max
    );
    println!(
        "  cabin multipliers: economy {} / premium {} / business {}",
        policy.cabin_economy, policy.cabin_premium, policy.cabin_business
    );
    println!("  weekend uplift:    {}", policy.weekend_uplift);
    println!(
        "  peak months:       {:?} (x{})",
        policy.peak_months, policy.peak_uplift
    );
    println!(
        "  shoulder months:   {:?} (x{})",
        policy.shoulder_months, policy.shoulder_discount
    );
    println!(
        "  lead-time uplifts: <{}d x{} / <{}d x{}",
        policy.urgent_days, policy.urgent_uplift, policy.near_days, policy.near_uplift
    );
    println!("  jitter:            ±{}%", policy.jitter * 100.0);
    println!(
        "  price clamp:       [{}, {}]",
        policy.floor_price, policy.ceiling_price
    );

    Ok(())
}
