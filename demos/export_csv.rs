// demos/export_csv.rs

// Evaluates a surface scenario and writes it as long-format CSV
// (spot,volatility,call_price), one record per grid cell.
//
// Usage:
//     cargo run --example export_csv -- [scenario.toml] [output.csv]
//
// Without a scenario file the reference 50x50 scenario is used. The output
// defaults to call_surface.csv in the working directory.

use std::env;
use std::fs;

use anyhow::Result;
use bsm_surface::{evaluate_surface, SurfaceRequest};

fn main() -> Result<()> {
    let request = match env::args().nth(1) {
        Some(path) => {
            println!("Loading scenario from {}", path);
            SurfaceRequest::from_toml_str(&fs::read_to_string(&path)?)?
        }
        None => {
            println!("No scenario file given, using the reference scenario");
            SurfaceRequest::reference()
        }
    };

    let surface = evaluate_surface(&request)?;
    let (rows, cols) = surface.shape();
    let (min_price, max_price) = surface.price_bounds();

    let out_path = env::args()
        .nth(2)
        .unwrap_or_else(|| "call_surface.csv".to_string());
    let file = fs::File::create(&out_path)?;
    surface.write_csv(file)?;

    println!("Scenario: K = {}, T = {}y, r = {}", request.strike, request.maturity, request.rate);
    println!(
        "Wrote {} cells ({} vols x {} spots) to {}",
        rows * cols,
        rows,
        cols,
        out_path
    );
    println!("Price range: [{:.4}, {:.4}]", min_price, max_price);

    Ok(())
}
