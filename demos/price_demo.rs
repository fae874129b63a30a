// demos/price_demo.rs

//! Demonstration of single-point Black-Scholes-Merton call pricing
//!
//! This example shows how to:
//! 1. Build explicit pricing parameters
//! 2. Price a single European call
//! 3. Sweep volatility and watch the price respond
//! 4. Compare a near-zero-volatility price with intrinsic value

use anyhow::Result;
use bsm_surface::{price_call, rate_from_percent, PricingParameters};

fn main() -> Result<()> {
    println!("Black-Scholes-Merton Call Pricing Demo");
    println!("======================================");

    // ATM reference contract: spot 100, strike 100, one year, 5% rate
    let atm = PricingParameters::new(100.0, 100.0, 1.0, rate_from_percent(5.0), 0.2);
    let price = price_call(&atm)?;

    println!("\nReference contract:");
    println!("  S = {:.0}, K = {:.0}, T = {:.1}y, r = {:.1}%, sigma = {:.0}%",
        atm.spot,
        atm.strike,
        atm.maturity,
        atm.rate * 100.0,
        atm.volatility * 100.0
    );
    println!("  Call price: ${:.4}", price);

    println!("\nVolatility ladder (same contract):");
    println!("{:<10} {:<12}", "Sigma", "Call Price");
    println!("{}", "-".repeat(22));
    for sigma in [0.05, 0.10, 0.20, 0.40, 0.80] {
        let p = price_call(&PricingParameters {
            volatility: sigma,
            ..atm
        })?;
        println!("{:<10.2} {:<12.4}", sigma, p);
    }

    // As volatility vanishes the call collapses to discounted intrinsic value
    let deep_itm = PricingParameters::new(150.0, 100.0, 1.0, 0.05, 1e-4);
    let intrinsic = deep_itm.spot - deep_itm.strike * (-deep_itm.rate * deep_itm.maturity).exp();
    println!("\nDeep ITM contract at near-zero volatility:");
    println!("  model price:     {:.6}", price_call(&deep_itm)?);
    println!("  intrinsic value: {:.6}", intrinsic);

    Ok(())
}
