// demos/pricing_demo.rs

//! Demonstration of Black-Scholes pricing and Greeks
//!
//! This example shows how to:
//! 1. Price a European call/put pair from raw market inputs
//! 2. Read the full Greeks ladder from the result
//! 3. Generate the 21-point spot sensitivity curve
//! 4. Inspect put-call parity on the computed prices

use anyhow::Result;
use greeks_lib::{compute_option_prices, compute_sensitivity_curve};

fn main() -> Result<()> {
    println!("Black-Scholes Pricing and Greeks Demo");
    println!("=====================================");

    // Canonical ATM scenario: spot 1800, strike 1800, 1% rate, 30 days, 20% vol
    let (spot, strike, rate_pct, days, vol_pct) = (1800.0, 1800.0, 1.0, 30.0, 20.0);

    println!("\nInputs:");
    println!("  Spot:       ${:.2}", spot);
    println!("  Strike:     ${:.2}", strike);
    println!("  Rate:       {:.2}%", rate_pct);
    println!("  Expiry:     {:.0} days", days);
    println!("  Volatility: {:.2}%", vol_pct);

    println!("\nStep 1: Pricing...");
    let result = compute_option_prices(spot, strike, rate_pct, days, vol_pct)?;

    println!("\nPrices:");
    println!("  Call: ${:.4}", result.call_price);
    println!("  Put:  ${:.4}", result.put_price);

    println!("\nGreeks:");
    println!("  {:<12} {:>12} {:>12}", "", "Call", "Put");
    println!("  {}", "-".repeat(38));
    println!(
        "  {:<12} {:>12.4} {:>12.4}",
        "Delta", result.call_delta, result.put_delta
    );
    println!(
        "  {:<12} {:>12.6} {:>12.6}",
        "Gamma", result.gamma, result.gamma
    );
    println!(
        "  {:<12} {:>12.4} {:>12.4}",
        "Vega", result.vega, result.vega
    );
    println!(
        "  {:<12} {:>12.4} {:>12.4}",
        "Theta/day", result.call_theta, result.put_theta
    );
    println!(
        "  {:<12} {:>12.4} {:>12.4}",
        "Rho", result.call_rho, result.put_rho
    );

    // Sanity check the parity identity on the computed prices
    let parity_gap = (result.call_price - result.put_price)
        - (spot - strike * (-rate_pct / 100.0 * days / 365.0_f64).exp());
    println!("\nPut-call parity gap: {:.2e}", parity_gap.abs());

    println!("\nStep 2: Generating sensitivity curve...");
    let curve = compute_sensitivity_curve(spot, strike, rate_pct, days, vol_pct)?;

    println!("Curve points: {}", curve.len());
    println!("\n  {:>10} {:>12} {:>12}", "Spot", "Call", "Put");
    println!("  {}", "-".repeat(36));
    for point in &curve {
        println!(
            "  {:>10.2} {:>12.4} {:>12.4}",
            point.spot_price, point.call_price, point.put_price
        );
    }

    Ok(())
}
