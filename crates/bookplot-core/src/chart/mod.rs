use plotters::prelude::*;

use crate::models::{CoreError, FavoriteRow};
use crate::price;

const CHART_SIZE: (u32, u32) = (960, 720);
const BAR_FILL: RGBColor = RGBColor(135, 206, 235);

/// Render a bar chart of favorite prices and return the encoded image bytes.
///
/// Rows whose stored price does not parse are dropped together with their
/// title, so labels stay paired with the values actually plotted. Transport
/// encoding of the payload is the caller's concern.
pub fn render(rows: &[FavoriteRow]) -> Result<Vec<u8>, CoreError> {
    let series: Vec<(String, f64)> = rows
        .iter()
        .filter_map(|row| {
            let parsed = price::from_stored_text(row.price.as_deref()?)?;
            Some((truncate_title(&row.title), parsed))
        })
        .collect();

    if series.is_empty() {
        return Err(render_error("no rows with a parsable price"));
    }

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(|error| render_error(error.to_string()))?;

        let bar_count = series.len() as f64;
        let y_max = series
            .iter()
            .map(|(_, value)| *value)
            .fold(0.0_f64, f64::max);

        // Bars are centered on integer positions so the axis labels line up
        // under them.
        let mut chart = ChartBuilder::on(&root)
            .margin(24)
            .x_label_area_size(120)
            .y_label_area_size(64)
            .build_cartesian_2d(-0.5_f64..bar_count - 0.5, 0.0_f64..y_max * 1.1)
            .map_err(|error| render_error(error.to_string()))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(series.len())
            .x_label_formatter(&|position| label_at(&series, *position))
            .x_desc("Book Title")
            .y_desc("Price (£)")
            .draw()
            .map_err(|error| render_error(error.to_string()))?;

        chart
            .draw_series(series.iter().enumerate().map(|(index, (_, value))| {
                let center = index as f64;
                Rectangle::new(
                    [(center - 0.35, 0.0), (center + 0.35, *value)],
                    BAR_FILL.filled(),
                )
            }))
            .map_err(|error| render_error(error.to_string()))?;

        root.present().map_err(|error| render_error(error.to_string()))?;
    }

    Ok(svg.into_bytes())
}

/// Shorten a title to its first two words, marking the cut with `".."`.
pub fn truncate_title(title: &str) -> String {
    let words: Vec<&str> = title.split_whitespace().collect();
    if words.len() <= 2 {
        title.trim().to_string()
    } else {
        format!("{} {}..", words[0], words[1])
    }
}

fn label_at(series: &[(String, f64)], position: f64) -> String {
    let index = position.round();
    if index < 0.0 {
        return String::new();
    }
    series
        .get(index as usize)
        .map(|(title, _)| title.clone())
        .unwrap_or_default()
}

fn render_error(message: impl Into<String>) -> CoreError {
    CoreError::Render {
        message: message.into(),
    }
}
