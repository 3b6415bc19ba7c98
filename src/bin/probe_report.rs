#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::cast_precision_loss)]

use std::error::Error;

use env_logger::Builder;
use log::{LevelFilter, info};
use lpmap::{LinearMap, ProbeStats};
use plotters::prelude::*;
use rand::Rng;

// Entries inserted into every table
const ENTRY_COUNT: usize = 200_000;
// Fill ratios from 0.1 to 0.95 in 10 steps
const NUM_FILL_RATIOS: usize = 10;
// Share of entries deleted before the tombstone measurement
const DELETE_SHARE: usize = 3;

fn initialize_logger() {
    let mut builder = Builder::new();
    builder.filter_level(LevelFilter::Info).format_timestamp_millis().parse_default_env();
    let _ = builder.try_init();
}

/// Fills a table sized for `ENTRY_COUNT` entries at `fill_ratio`, then deletes
/// every `DELETE_SHARE`-th key and inserts as many fresh keys.
///
/// Returns statistics for the freshly filled table and for the table carrying
/// tombstones.
fn measure(fill_ratio: f64, keys: &[u64], fresh_keys: &[u64]) -> (ProbeStats, ProbeStats) {
    let mut map = LinearMap::new(ENTRY_COUNT, fill_ratio);
    for (i, &key) in keys.iter().enumerate() {
        map.set(key, i);
    }
    let filled = map.probe_stats();

    for (key, &fresh) in keys.iter().step_by(DELETE_SHARE).zip(fresh_keys) {
        map.delete(key);
        map.set(fresh, 0);
    }
    let churned = map.probe_stats();

    (filled, churned)
}

fn draw_chart(
    path: &str,
    caption: &str,
    y_desc: &str,
    fill_ratios: &[f64],
    series: &[(&str, Vec<f64>)],
) -> Result<(), Box<dyn Error>> {
    let font_family = "sans-serif";
    let colors = [RGBColor(220, 50, 50), RGBColor(50, 90, 220)];

    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_y = series
        .iter()
        .flat_map(|(_, values)| values.iter())
        .fold(0.0_f64, |max, &x| max.max(x)) *
        1.1; // Add 10% margin

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, (font_family, 35))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..1.0, 0.0..max_y)?;

    chart
        .configure_mesh()
        .x_desc("Fill Ratio")
        .y_desc(y_desc)
        .axis_desc_style((font_family, 16))
        .draw()?;

    for (series_idx, (label, values)) in series.iter().enumerate() {
        let color = colors[series_idx % colors.len()];
        let line_style = ShapeStyle::from(&color).stroke_width(2);

        chart
            .draw_series(LineSeries::new(
                fill_ratios.iter().copied().zip(values.iter().copied()),
                line_style,
            ))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series(
            fill_ratios
                .iter()
                .copied()
                .zip(values.iter().copied())
                .map(|point| Circle::new(point, 4, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    info!("wrote {path}");
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    initialize_logger();

    let fill_ratios: Vec<f64> = (0..NUM_FILL_RATIOS)
        .map(|i| 0.1 + (0.95 - 0.1) * (i as f64) / ((NUM_FILL_RATIOS - 1) as f64))
        .collect();

    let mut rng = rand::rng();
    let keys: Vec<u64> = (0..ENTRY_COUNT).map(|_| rng.random()).collect();
    let fresh_keys: Vec<u64> = (0..ENTRY_COUNT / DELETE_SHARE + 1).map(|_| rng.random()).collect();

    let mut filled_mean = Vec::with_capacity(NUM_FILL_RATIOS);
    let mut filled_max = Vec::with_capacity(NUM_FILL_RATIOS);
    let mut churned_mean = Vec::with_capacity(NUM_FILL_RATIOS);
    let mut churned_max = Vec::with_capacity(NUM_FILL_RATIOS);

    for &fill_ratio in &fill_ratios {
        info!("measuring fill ratio {fill_ratio:.2}");
        let (filled, churned) = measure(fill_ratio, &keys, &fresh_keys);

        println!(
            "fill {fill_ratio:.2}: load {:.3}, mean probes {:.2}, worst {} | after churn: {} tombstones, mean {:.2}, worst {}",
            filled.load_factor,
            filled.mean_probe_length,
            filled.max_probe_length,
            churned.tombstones,
            churned.mean_probe_length,
            churned.max_probe_length,
        );

        filled_mean.push(filled.mean_probe_length);
        filled_max.push(filled.max_probe_length as f64);
        churned_mean.push(churned.mean_probe_length);
        churned_max.push(churned.max_probe_length as f64);
    }

    draw_chart(
        "mean_probe_length.png",
        "Linear Probing: Mean Successful Probe Length",
        "Slots Visited",
        &fill_ratios,
        &[("Freshly filled", filled_mean), ("With tombstones", churned_mean)],
    )?;
    draw_chart(
        "max_probe_length.png",
        "Linear Probing: Worst-Case Probe Length",
        "Slots Visited",
        &fill_ratios,
        &[("Freshly filled", filled_max), ("With tombstones", churned_max)],
    )?;

    Ok(())
}
