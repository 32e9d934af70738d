//! Histogram rendering to PNG files
//!
//! This module draws the density and cumulative views of a [`Histogram`]
//! using the [`plotters`] bitmap backend. Charts are saved as PNG files with
//! fixed 1200x800 resolution into the path the caller names; an existing
//! file at that path is overwritten.

use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

use crate::histogram::Histogram;

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

/// CSS "antiquewhite", the fill color of the histogram bars.
const ANTIQUE_WHITE: RGBColor = RGBColor(250, 235, 215);

/// File name for the density plot of the variant named `label`.
pub fn pdf_plot_name(label: &str) -> String {
    format!("{}_pdf_plot.png", label)
}

/// File name for the cumulative plot of the variant named `label`.
pub fn cdf_plot_name(label: &str) -> String {
    format!("{}_cdf_plot.png", label)
}

/// Renders the density view of `hist` (bar area sums to 1) as a PNG file
///
/// # Arguments
/// * `hist` - The histogram to draw
/// * `title` - Optional caption displayed at the top of the chart
/// * `output_path` - Path where the PNG file should be saved
///
/// # Returns
/// * `Ok(())` - If the chart was successfully created and saved
/// * `Err(PlotError)` - If an error occurred during chart generation
pub fn render_density_histogram(
    hist: &Histogram,
    title: Option<&str>,
    output_path: &Path,
) -> Result<()> {
    render_bars(hist, &hist.density_bars(), title, output_path)
}

/// Renders the cumulative view of `hist` (bars climb to 1) as a PNG file
///
/// # Arguments
/// * `hist` - The histogram to draw
/// * `title` - Optional caption displayed at the top of the chart
/// * `output_path` - Path where the PNG file should be saved
///
/// # Returns
/// * `Ok(())` - If the chart was successfully created and saved
/// * `Err(PlotError)` - If an error occurred during chart generation
pub fn render_cumulative_histogram(
    hist: &Histogram,
    title: Option<&str>,
    output_path: &Path,
) -> Result<()> {
    render_bars(hist, &hist.cumulative_bars(), title, output_path)
}

/// Draws one bar per bin, antique-white fill with a black outline, x tick
/// labels at 18pt and y tick labels at 12pt.
fn render_bars(
    hist: &Histogram,
    bars: &[f64],
    title: Option<&str>,
    output_path: &Path,
) -> Result<()> {
    let y_max = bars.iter().cloned().fold(0.0_f64, f64::max);
    if !y_max.is_finite() || y_max <= 0.0 {
        return Err(PlotError::InvalidData(format!(
            "bar heights must contain a positive finite value, got maximum {}",
            y_max
        )));
    }

    // Create the drawing area (1200x800 PNG)
    let root = BitMapBackend::new(output_path, (1200, 800));
    let drawing_area = root.into_drawing_area();

    drawing_area
        .fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut builder = ChartBuilder::on(&drawing_area);
    builder.margin(20).x_label_area_size(60).y_label_area_size(70);
    if let Some(caption) = title {
        builder.caption(caption, ("sans-serif", 40));
    }
    let mut chart = builder
        .build_cartesian_2d(hist.lo()..hist.hi(), 0.0..y_max * 1.1)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_label_style(("sans-serif", 18))
        .y_label_style(("sans-serif", 12))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series((0..hist.bins()).map(|i| {
            let (x0, x1) = hist.bin_edges(i);
            Rectangle::new([(x0, 0.0), (x1, bars[i])], ANTIQUE_WHITE.filled())
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Bar outlines go on top of the fills.
    chart
        .draw_series((0..hist.bins()).map(|i| {
            let (x0, x1) = hist.bin_edges(i);
            Rectangle::new([(x0, 0.0), (x1, bars[i])], BLACK.stroke_width(1))
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Ensure everything is properly rendered and saved
    drawing_area
        .present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dist::TruncExpon;
    use crate::sample::draw_samples;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::fs;

    fn sample_histogram() -> Histogram {
        let dist = TruncExpon::new(64.0, 1500.0, 782.0).unwrap();
        let mut rng = SmallRng::seed_from_u64(11);
        let samples = draw_samples(&mut rng, 2_000, |u| dist.inv_cdf(u)).unwrap();
        Histogram::from_samples(&samples, 40).unwrap()
    }

    #[test]
    fn plot_names_follow_the_label_scheme() {
        assert_eq!(pdf_plot_name("inv_expon"), "inv_expon_pdf_plot.png");
        assert_eq!(cdf_plot_name("inv_t_expon1"), "inv_t_expon1_cdf_plot.png");
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn renders_density_and_cumulative_histograms() {
        let temp_dir = std::env::temp_dir();
        let hist = sample_histogram();

        let pdf_path = temp_dir.join("truncated_expon_test_pdf.png");
        let _ = fs::remove_file(&pdf_path);
        render_density_histogram(&hist, Some("truncated pdf"), &pdf_path).unwrap();
        assert!(pdf_path.exists());

        let cdf_path = temp_dir.join("truncated_expon_test_cdf.png");
        let _ = fs::remove_file(&cdf_path);
        render_cumulative_histogram(&hist, None, &cdf_path).unwrap();
        assert!(cdf_path.exists());

        let _ = fs::remove_file(&pdf_path);
        let _ = fs::remove_file(&cdf_path);
    }
}
