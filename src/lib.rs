//! # Bsm-Surface: Black-Scholes-Merton Call Price Surfaces
//!
//! `bsm-surface` is a small Rust library for pricing European call options
//! under the Black-Scholes-Merton model and evaluating those prices across a
//! two-dimensional spot × volatility grid, ready for rendering as a surface.
//!
//! ## Core Features
//!
//! - **Closed-Form Pricing**: the BSM call formula with a double-precision
//!   normal CDF
//! - **Grid Evaluation**: inclusive linearly-spaced axes and a per-cell
//!   price matrix aligned to them
//! - **Scenario Configs**: TOML-loadable requests with named presets
//! - **Validated Inputs**: rejections name the offending parameter or axis
//!
//! ## Quick Start
//!
//! ```rust
//! use bsm_surface::{evaluate_surface, price_call, PricingParameters, SurfaceRequest};
//!
//! // Single-point pricing
//! let params = PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.2);
//! let price = price_call(&params)?;
//! assert!((price - 10.4506).abs() < 1e-3);
//!
//! // Full 50×50 surface over the reference scenario
//! let surface = evaluate_surface(&SurfaceRequest::reference())?;
//! assert_eq!(surface.shape(), (50, 50));
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Scope
//!
//! European calls only: American exercise, dividends, Greeks and
//! implied-volatility inversion are out of scope. Rendering belongs to the
//! consumer; the demos show an SVG surface plot and a CSV export built on
//! the three sequences a [`PriceSurface`] carries.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod models;
pub mod params;
pub mod surface;

// ================================================================================================
// IMPORTS
// ================================================================================================

use anyhow::Result;

use models::bs::bs_call_price;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Parameter and axis types
pub use params::{rate_from_percent, PricingParameters};
pub use surface::types::{AxisRange, PriceSurface};

// Scenario configuration and the grid evaluator
pub use surface::config::SurfaceRequest;
pub use surface::grid::evaluate_surface;

// ================================================================================================
// TOP-LEVEL API
// ================================================================================================

/// Price a single European call option.
///
/// Thin wrapper over [`models::bs::bs_call_price`] taking the explicit
/// [`PricingParameters`] struct. Pure and deterministic: identical inputs
/// produce bit-identical outputs.
///
/// # Errors
///
/// Fails when `spot`, `strike`, `maturity` or `volatility` is not strictly
/// positive; the message names the offending parameter.
///
/// # Example
///
/// ```rust
/// use bsm_surface::{price_call, PricingParameters};
///
/// let atm = PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.2);
/// let price = price_call(&atm)?;
/// assert!(price > 0.0 && price <= atm.spot);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn price_call(params: &PricingParameters) -> Result<f64> {
    bs_call_price(
        params.spot,
        params.strike,
        params.maturity,
        params.rate,
        params.volatility,
    )
}
