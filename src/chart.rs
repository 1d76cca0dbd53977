//! Results chart rendering.
//!
//! Produces a single PNG artifact with two stacked panels: cumulative
//! outcome counts over time, and the sliding-window win percentage. The
//! heavy lifting is `plotters`; this module only shapes the timeline
//! into the two series and lays out the panels.

use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::{PigeonstatsError, Result};
use crate::series::{self, CumulativePoint, WIN_RATE_WINDOW};
use crate::summary::Summary;

const WIDTH: u32 = 1024;
const HEIGHT: u32 = 768;

const WIN_COLOR: RGBColor = RGBColor(46, 139, 87);
const LOSS_COLOR: RGBColor = RGBColor(178, 34, 34);
const DRAW_COLOR: RGBColor = RGBColor(112, 128, 144);

/// Renders the results chart for a summary into a PNG file.
///
/// The upper panel plots cumulative counts, one point per dated outcome.
/// The lower panel plots the win percentage over each window of
/// [`WIN_RATE_WINDOW`] consecutive outcomes; with fewer outcomes than
/// that, an explanatory caption takes its place.
pub fn render(summary: &Summary, output: &Path) -> Result<()> {
    let root = BitMapBackend::new(output, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let panels = root.split_evenly((2, 1));

    if summary.timeline.is_empty() {
        caption(&panels[0], "No dated outcomes to plot")?;
    } else {
        let points = series::cumulative_counts(&summary.timeline);
        draw_cumulative(&panels[0], &points)?;
    }

    let rates = series::windowed_win_rate(&summary.timeline, WIN_RATE_WINDOW);
    if rates.is_empty() {
        caption(
            &panels[1],
            &format!("Win rate needs at least {WIN_RATE_WINDOW} dated games"),
        )?;
    } else {
        draw_win_rate(&panels[1], &rates)?;
    }

    root.present().map_err(chart_err)?;
    Ok(())
}

fn draw_cumulative<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    points: &[CumulativePoint],
) -> Result<()> {
    let x_range = time_range(points.iter().map(|p| p.timestamp));
    let y_max = points
        .last()
        .map(|p| p.wins.max(p.losses).max(p.draws))
        .unwrap_or(0)
        + 1;

    let mut chart = ChartBuilder::on(area)
        .caption("Cumulative results", ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(x_range, 0u64..y_max)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .x_labels(6)
        .x_label_formatter(&|ts: &DateTime<Utc>| ts.format("%b %d").to_string())
        .y_desc("games")
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(LineSeries::new(
            points.iter().map(|p| (p.timestamp, p.wins)),
            &WIN_COLOR,
        ))
        .map_err(chart_err)?
        .label("Wins")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], &WIN_COLOR));

    chart
        .draw_series(LineSeries::new(
            points.iter().map(|p| (p.timestamp, p.losses)),
            &LOSS_COLOR,
        ))
        .map_err(chart_err)?
        .label("Losses")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], &LOSS_COLOR));

    chart
        .draw_series(LineSeries::new(
            points.iter().map(|p| (p.timestamp, p.draws)),
            &DRAW_COLOR,
        ))
        .map_err(chart_err)?
        .label("Draws")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], &DRAW_COLOR));

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()
        .map_err(chart_err)?;

    Ok(())
}

fn draw_win_rate<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    rates: &[(DateTime<Utc>, f64)],
) -> Result<()> {
    let x_range = time_range(rates.iter().map(|(ts, _)| *ts));

    let mut chart = ChartBuilder::on(area)
        .caption(
            format!("Win rate over last {WIN_RATE_WINDOW} games"),
            ("sans-serif", 22),
        )
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(x_range, 0f64..100f64)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .x_labels(6)
        .x_label_formatter(&|ts: &DateTime<Utc>| ts.format("%b %d").to_string())
        .y_desc("win %")
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(LineSeries::new(rates.iter().copied(), &WIN_COLOR))
        .map_err(chart_err)?;

    Ok(())
}

/// Draws an explanatory caption in place of a panel's series.
fn caption<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>, message: &str) -> Result<()> {
    let (_, h) = area.dim_in_pixel();
    area.draw(&Text::new(
        message.to_string(),
        (20, h as i32 / 2),
        ("sans-serif", 18).into_font().color(&BLACK),
    ))
    .map_err(chart_err)?;
    Ok(())
}

/// Builds the x-axis range, padded when all samples share one timestamp.
fn time_range(
    timestamps: impl Iterator<Item = DateTime<Utc>>,
) -> std::ops::Range<DateTime<Utc>> {
    let mut start: Option<DateTime<Utc>> = None;
    let mut end: Option<DateTime<Utc>> = None;

    for ts in timestamps {
        start = Some(start.map_or(ts, |s: DateTime<Utc>| s.min(ts)));
        end = Some(end.map_or(ts, |e: DateTime<Utc>| e.max(ts)));
    }

    let start = start.unwrap_or(DateTime::<Utc>::MIN_UTC);
    let mut end = end.unwrap_or(start);
    if end <= start {
        end = start + Duration::hours(1);
    }

    start..end
}

fn chart_err<E: std::fmt::Display>(err: E) -> PigeonstatsError {
    PigeonstatsError::Chart(err.to_string())
}
