use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoints, Points};

use crate::color::SpeciesPalette;
use crate::error::ViewError;
use crate::views::histogram::{BarMode, Histogram};
use crate::views::scatter::Scatter;
use crate::views::ViewResult;

// ---------------------------------------------------------------------------
// Chart card (right column)
// ---------------------------------------------------------------------------

/// Render a histogram artifact, or the reason it could not be produced.
pub fn histogram_view(ui: &mut Ui, id: &str, result: &ViewResult<Histogram>, palette: &SpeciesPalette) {
    match result {
        Ok(hist) => draw_histogram(ui, id, hist, palette),
        Err(e) => view_error(ui, e),
    }
}

/// Render the scatterplot artifact, or the reason it could not be produced.
pub fn scatter_view(ui: &mut Ui, id: &str, result: &ViewResult<Scatter>, palette: &SpeciesPalette) {
    match result {
        Ok(scatter) => draw_scatter(ui, id, scatter, palette),
        Err(e) => view_error(ui, e),
    }
}

fn draw_histogram(ui: &mut Ui, id: &str, hist: &Histogram, palette: &SpeciesPalette) {
    title(ui, hist.title, &format!("{} values in {} bins", hist.total(), hist.bin_count()));

    let width = hist.bin_width();
    let mut charts: Vec<BarChart> = Vec::with_capacity(hist.series.len());
    for series in &hist.series {
        let bars: Vec<Bar> = series
            .counts
            .iter()
            .enumerate()
            .map(|(bin, &count)| Bar::new(hist.bin_center(bin), f64::from(count)).width(width))
            .collect();

        let color = palette.color_for(series.species);
        let chart = BarChart::new(bars).name(series.species.as_str());
        let chart = match hist.mode {
            BarMode::Stacked => {
                let below: Vec<&BarChart> = charts.iter().collect();
                chart.color(color).stack_on(&below)
            }
            BarMode::Layered => chart.color(color.gamma_multiply(0.55)),
        };
        charts.push(chart);
    }

    Plot::new(id)
        .legend(Legend::default())
        .x_axis_label(hist.x_label.as_str())
        .y_axis_label(hist.y_label)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

fn draw_scatter(ui: &mut Ui, id: &str, scatter: &Scatter, palette: &SpeciesPalette) {
    title(ui, scatter.title, &format!("{} penguins", scatter.point_count()));

    Plot::new(id)
        .legend(Legend::default())
        .x_axis_label(scatter.x_label)
        .y_axis_label(scatter.y_label)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &scatter.series {
                let points = Points::new(PlotPoints::from(series.points.clone()))
                    .name(series.species.as_str())
                    .color(palette.color_for(series.species))
                    .radius(3.0);
                plot_ui.points(points);
            }
        });
}

fn title(ui: &mut Ui, text: &str, caption: &str) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(text);
        ui.weak(caption);
    });
}

/// In-place message for a view without an artifact. Other views are unaffected.
pub fn view_error(ui: &mut Ui, error: &ViewError) {
    ui.centered_and_justified(|ui: &mut Ui| {
        match error {
            ViewError::NotReady => ui.label(RichText::new("Waiting for selections…").weak()),
            ViewError::Empty { .. } => ui.label(
                RichText::new(format!("{error}. Select at least one species and island."))
                    .italics(),
            ),
            ViewError::InvalidBinCount { .. } => {
                ui.label(RichText::new(error.to_string()).color(Color32::RED))
            }
        };
    });
}
