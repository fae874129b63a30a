use anyhow::{bail, Result};

/// Inclusive linear axis specification for one grid dimension.
///
/// `count` sample points run from `min` to `max` with uniform step
/// `(max - min) / (count - 1)`; both endpoints are included. A `count` of 1
/// degenerates to the single value `min`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    /// Number of sample points, endpoints included (default: 50)
    #[cfg_attr(feature = "serde", serde(default = "default_axis_count"))]
    pub count: usize,
}

#[cfg(feature = "serde")]
fn default_axis_count() -> usize {
    50
}

impl AxisRange {
    pub fn new(min: f64, max: f64, count: usize) -> Self {
        Self { min, max, count }
    }

    /// Check the axis invariants, reporting violations against `name`
    /// (e.g. "spot", "volatility") so callers can tell the axes apart.
    pub fn validate(&self, name: &str) -> Result<()> {
        if self.count < 1 {
            bail!("{} axis must have at least one sample point", name);
        }
        if !self.min.is_finite() || !self.max.is_finite() {
            bail!(
                "{} axis bounds must be finite, got: [{}, {}]",
                name,
                self.min,
                self.max
            );
        }
        if self.min > self.max {
            bail!(
                "{} axis is reversed: min {} exceeds max {}",
                name,
                self.min,
                self.max
            );
        }
        Ok(())
    }

    /// Materialize the axis as a sorted vector of sample values.
    pub fn values(&self) -> Vec<f64> {
        if self.count == 1 {
            return vec![self.min];
        }
        let step = (self.max - self.min) / (self.count - 1) as f64;
        let mut values: Vec<f64> = (0..self.count)
            .map(|i| self.min + step * i as f64)
            .collect();
        // Pin the endpoint so the last sample is exactly `max` regardless of
        // accumulated rounding in the step arithmetic.
        values[self.count - 1] = self.max;
        values
    }
}

/// Evaluated call-price surface over a spot × volatility grid.
///
/// `prices[i][j]` is the call price at `(spots[j], vols[i])`: rows follow
/// the volatility axis, columns the spot axis. Renderers need all three
/// sequences to draw a labeled surface.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceSurface {
    /// Spot-price axis values (grid columns)
    pub spots: Vec<f64>,
    /// Volatility axis values (grid rows)
    pub vols: Vec<f64>,
    /// Price matrix, `vols.len()` rows × `spots.len()` columns
    pub prices: Vec<Vec<f64>>,
}

impl PriceSurface {
    /// Grid dimensions as `(rows, columns)` = `(vols, spots)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.vols.len(), self.spots.len())
    }

    /// Price at volatility row `i`, spot column `j`.
    pub fn price_at(&self, i: usize, j: usize) -> f64 {
        self.prices[i][j]
    }

    /// Smallest and largest price on the grid, for color scaling.
    pub fn price_bounds(&self) -> (f64, f64) {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for row in &self.prices {
            for &p in row {
                lo = lo.min(p);
                hi = hi.max(p);
            }
        }
        (lo, hi)
    }

    /// Write the surface as long-format CSV rows `spot,volatility,call_price`,
    /// one record per grid cell, row-major.
    pub fn write_csv<W: std::io::Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(["spot", "volatility", "call_price"])?;
        for (i, &vol) in self.vols.iter().enumerate() {
            for (j, &spot) in self.spots.iter().enumerate() {
                wtr.write_record(&[
                    spot.to_string(),
                    vol.to_string(),
                    self.prices[i][j].to_string(),
                ])?;
            }
        }
        wtr.flush()?;
        Ok(())
    }
}
