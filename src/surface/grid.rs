use anyhow::{Context, Result};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::models::bs::bs_call_price;
use crate::surface::config::SurfaceRequest;
use crate::surface::types::PriceSurface;

/// Evaluate the call-price surface described by `request`.
///
/// The grid is `vol_axis.count` rows × `spot_axis.count` columns; cell
/// `(i, j)` holds `bs_call_price(spots[j], strike, maturity, rate, vols[i])`.
/// Every cell is independent, so evaluation order never affects the result
/// and repeated calls are bit-identical.
///
/// The request is validated up front; a cell that still fails to price
/// aborts the evaluation and the error carries the cell's `(row, column)`
/// coordinates.
pub fn evaluate_surface(request: &SurfaceRequest) -> Result<PriceSurface> {
    request.validate()?;

    let spots = request.spot_axis.values();
    let vols = request.vol_axis.values();
    let prices = price_rows(&spots, &vols, request)?;

    Ok(PriceSurface {
        spots,
        vols,
        prices,
    })
}

fn price_row(spots: &[f64], vol: f64, request: &SurfaceRequest, row: usize) -> Result<Vec<f64>> {
    spots
        .iter()
        .enumerate()
        .map(|(col, &spot)| {
            bs_call_price(spot, request.strike, request.maturity, request.rate, vol)
                .with_context(|| format!("pricing failed at grid cell ({}, {})", row, col))
        })
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn price_rows(spots: &[f64], vols: &[f64], request: &SurfaceRequest) -> Result<Vec<Vec<f64>>> {
    vols.iter()
        .enumerate()
        .map(|(row, &vol)| price_row(spots, vol, request, row))
        .collect()
}

/// Rows are embarrassingly parallel; rayon joins them back in axis order.
#[cfg(feature = "parallel")]
fn price_rows(spots: &[f64], vols: &[f64], request: &SurfaceRequest) -> Result<Vec<Vec<f64>>> {
    vols.par_iter()
        .enumerate()
        .map(|(row, &vol)| price_row(spots, vol, request, row))
        .collect()
}
