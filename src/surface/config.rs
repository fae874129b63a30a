use anyhow::{bail, Result};

use crate::surface::types::AxisRange;

/// Scenario inputs for one surface evaluation: the contract terms shared by
/// every grid cell plus the two axis specifications.
///
/// The struct deserializes from TOML (with the `serde` feature), so front
/// ends can keep scenarios in config files:
///
/// ```toml
/// strike = 100.0
/// maturity = 1.0
/// rate = 0.05
///
/// [spot_axis]
/// min = 50.0
/// max = 150.0
///
/// [vol_axis]
/// min = 0.01
/// max = 1.0
/// count = 50
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceRequest {
    /// Strike price
    pub strike: f64,
    /// Time to maturity in years
    pub maturity: f64,
    /// Annualized risk-free rate as a decimal (default: 0.0)
    #[cfg_attr(feature = "serde", serde(default))]
    pub rate: f64,
    /// Spot-price axis (grid columns)
    pub spot_axis: AxisRange,
    /// Volatility axis (grid rows)
    pub vol_axis: AxisRange,
}

impl SurfaceRequest {
    /// Reference scenario: ATM strike 100, one year to maturity, 5% rate,
    /// spot 50 to 150 and volatility 1% to 100%, 50 samples per axis.
    pub fn reference() -> Self {
        Self {
            strike: 100.0,
            maturity: 1.0,
            rate: 0.05,
            spot_axis: AxisRange::new(50.0, 150.0, 50),
            vol_axis: AxisRange::new(0.01, 1.0, 50),
        }
    }

    /// Coarse 20×20 variant of the reference scenario, for quick previews.
    pub fn coarse() -> Self {
        Self {
            spot_axis: AxisRange::new(50.0, 150.0, 20),
            vol_axis: AxisRange::new(0.01, 1.0, 20),
            ..Self::reference()
        }
    }

    /// Fine 200×200 variant of the reference scenario, for smooth renders.
    pub fn fine() -> Self {
        Self {
            spot_axis: AxisRange::new(50.0, 150.0, 200),
            vol_axis: AxisRange::new(0.01, 1.0, 200),
            ..Self::reference()
        }
    }

    /// Parse a scenario from a TOML document.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Check the whole request before evaluation: contract terms, axis
    /// invariants, and strict positivity of the axis values that feed the
    /// pricer as spot and volatility.
    pub fn validate(&self) -> Result<()> {
        if !(self.strike > 0.0) {
            bail!("strike price must be strictly positive, got: {}", self.strike);
        }
        if !(self.maturity > 0.0) {
            bail!(
                "time to maturity must be strictly positive, got: {}",
                self.maturity
            );
        }
        self.spot_axis.validate("spot")?;
        self.vol_axis.validate("volatility")?;
        if !(self.spot_axis.min > 0.0) {
            bail!(
                "spot axis minimum must be strictly positive, got: {}",
                self.spot_axis.min
            );
        }
        if !(self.vol_axis.min > 0.0) {
            bail!(
                "volatility axis minimum must be strictly positive, got: {}",
                self.vol_axis.min
            );
        }
        Ok(())
    }
}
