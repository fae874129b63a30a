// demos/surface_plot.rs

// Evaluates the reference call-price surface and renders it as a labeled 3D
// SVG with a viridis color map and a colorbar, the three sequences the core
// hands a renderer: spot axis, volatility axis, price matrix.
//
// Usage:
//     cargo run --example surface_plot -- [output.svg]
//
// The output image defaults to call_surface.svg in the working directory.

use std::collections::HashMap;
use std::env;

use anyhow::Result;
use bsm_surface::{evaluate_surface, SurfaceRequest};
use plotters::prelude::*;
use plotters::style::colors::colormaps::ViridisRGB;

fn main() -> Result<()> {
    let out_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "call_surface.svg".to_string());

    let request = SurfaceRequest::reference();
    let surface = evaluate_surface(&request)?;
    let (rows, cols) = surface.shape();
    let (min_price, max_price) = surface.price_bounds();
    let span = (max_price - min_price).max(f64::EPSILON);

    println!(
        "Evaluated {}x{} surface, prices in [{:.4}, {:.4}]",
        rows, cols, min_price, max_price
    );

    // Cell lookup keyed by exact axis values, for the surface series closure
    let mut cell: HashMap<(u64, u64), f64> = HashMap::new();
    for (i, &vol) in surface.vols.iter().enumerate() {
        for (j, &spot) in surface.spots.iter().enumerate() {
            cell.insert((spot.to_bits(), vol.to_bits()), surface.prices[i][j]);
        }
    }

    let root = SVGBackend::new(&out_path, (1080, 760)).into_drawing_area();
    root.fill(&WHITE)?;
    let (chart_area, bar_area) = root.split_horizontally(960);

    let mut chart = ChartBuilder::on(&chart_area)
        .caption(
            "Black-Scholes Call Option Price Surface",
            ("sans-serif", 28),
        )
        .margin(20)
        .build_cartesian_3d(
            request.spot_axis.min..request.spot_axis.max,
            0.0..max_price * 1.05,
            request.vol_axis.min..request.vol_axis.max,
        )?;

    chart.with_projection(|mut pb| {
        pb.yaw = 0.9;
        pb.pitch = 0.25;
        pb.scale = 0.85;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .x_labels(10)
        .y_labels(8)
        .z_labels(8)
        .light_grid_style(BLACK.mix(0.15))
        .max_light_lines(3)
        .draw()?;

    chart.draw_series(
        SurfaceSeries::xoz(
            surface.spots.iter().copied(),
            surface.vols.iter().copied(),
            |spot, vol| cell[&(spot.to_bits(), vol.to_bits())],
        )
        .style_func(&|&price| {
            let t = ((price - min_price) / span).clamp(0.0, 1.0);
            ViridisRGB::get_color(t).filled()
        }),
    )?;

    chart_area.draw(&Text::new(
        "x = spot price S, y = call price, z = volatility",
        (30, 720),
        ("sans-serif", 16),
    ))?;

    draw_colorbar(&bar_area, min_price, max_price)?;

    root.present()?;
    println!("Surface written to {}", out_path);
    Ok(())
}

/// Vertical viridis gradient with min/max price labels, highest price on top.
fn draw_colorbar<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    min_price: f64,
    max_price: f64,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let top = 80;
    let bottom = 680;
    let steps = 120;
    let step_px = (bottom - top) as f64 / steps as f64;

    for k in 0..steps {
        let t = 1.0 - k as f64 / (steps - 1) as f64;
        let y0 = top + (k as f64 * step_px) as i32;
        let y1 = top + ((k + 1) as f64 * step_px) as i32;
        area.draw(&Rectangle::new(
            [(30, y0), (60, y1)],
            ViridisRGB::get_color(t).filled(),
        ))?;
    }

    area.draw(&Text::new(
        format!("{:.1}", max_price),
        (66, top),
        ("sans-serif", 14),
    ))?;
    area.draw(&Text::new(
        format!("{:.1}", min_price),
        (66, bottom - 14),
        ("sans-serif", 14),
    ))?;
    area.draw(&Text::new("price", (30, top - 30), ("sans-serif", 14)))?;

    Ok(())
}
