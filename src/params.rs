/// Market and contract inputs for a single Black-Scholes-Merton call price.
///
/// A plain value type: construct it, price it, drop it. The pricer rejects
/// non-positive `spot`, `strike`, `maturity` or `volatility`; `rate` may be
/// negative.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingParameters {
    /// Spot price of the underlying asset
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Time to maturity in years
    pub maturity: f64,
    /// Annualized risk-free rate (as decimal, e.g. 0.05 for 5%)
    pub rate: f64,
    /// Annualized volatility (as decimal, e.g. 0.25 for 25%)
    pub volatility: f64,
}

impl PricingParameters {
    pub fn new(spot: f64, strike: f64, maturity: f64, rate: f64, volatility: f64) -> Self {
        Self {
            spot,
            strike,
            maturity,
            rate,
            volatility,
        }
    }
}

/// Convert a rate quoted in percent (e.g. 5.0) into the decimal form the
/// pricer expects. Front ends usually collect rates as percentages.
pub fn rate_from_percent(percent: f64) -> f64 {
    percent / 100.0
}
