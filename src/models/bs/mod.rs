// Black-Scholes-Merton call pricing for the surface evaluator.  Puts,
// dividends, Greeks and implied-volatility inversion are intentionally
// omitted to keep the lightweight focus of bsm-surface.

use anyhow::{bail, Result};

/// Standard normal cumulative distribution function.
///
/// Accurate to well below 1e-10 over [-10, 10]; the surface tests pin this
/// against a reference distribution implementation.
pub fn norm_cdf(x: f64) -> f64 {
    // 0.5 * [1 + erf(x / sqrt(2))]
    0.5 * (1.0 + libm::erf(x / (2.0_f64).sqrt()))
}

/// Price of a European call option under Black-Scholes-Merton assumptions.
///
/// `S`, `K`, `T` and `sigma` must be strictly positive: the formula divides
/// by `sigma * sqrt(T)` and takes `ln(S / K)`, so zero or negative values
/// have no defined price here. `r` is unconstrained (negative rates are
/// legal). Rejections name the offending parameter.
#[allow(non_snake_case)]
pub fn bs_call_price(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> Result<f64> {
    // `!(x > 0.0)` also rejects NaN inputs.
    if !(S > 0.0) {
        bail!("spot price must be strictly positive, got: {}", S);
    }
    if !(K > 0.0) {
        bail!("strike price must be strictly positive, got: {}", K);
    }
    if !(T > 0.0) {
        bail!("time to maturity must be strictly positive, got: {}", T);
    }
    if !(sigma > 0.0) {
        bail!("volatility must be strictly positive, got: {}", sigma);
    }

    let d1 = ((S / K).ln() + (r + 0.5 * sigma.powi(2)) * T) / (sigma * T.sqrt());
    let d2 = d1 - sigma * T.sqrt();
    Ok(S * norm_cdf(d1) - K * (-r * T).exp() * norm_cdf(d2))
}
