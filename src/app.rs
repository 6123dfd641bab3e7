use std::sync::Arc;

use eframe::egui::{self, Ui};

use crate::color::SpeciesPalette;
use crate::config::DashboardConfig;
use crate::data::model::PenguinDataset;
use crate::state::{InputState, Session};
use crate::ui::{panels, plot, table, ChartTab, DataTab};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PenguinDashApp {
    session: Session,
    config: DashboardConfig,
    palette: SpeciesPalette,
    sidebar_fill: egui::Color32,
    sidebar_open: bool,
    data_tab: DataTab,
    chart_tab: ChartTab,
}

impl PenguinDashApp {
    pub fn new(dataset: Arc<PenguinDataset>, config: DashboardConfig) -> Self {
        let inputs = InputState::from_config(&config);
        let sidebar_fill = config
            .sidebar_color()
            .unwrap_or(egui::Color32::from_gray(0xf8));
        Self {
            session: Session::new(dataset, inputs),
            sidebar_open: config.sidebar_open,
            palette: SpeciesPalette::default(),
            sidebar_fill,
            config,
            data_tab: DataTab::default(),
            chart_tab: ChartTab::default(),
        }
    }
}

impl eframe::App for PenguinDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title + sidebar toggle ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.config.title, &mut self.sidebar_open, &mut self.session);
        });

        // ---- Left side panel: inputs ----
        let frame = egui::Frame::side_top_panel(&ctx.style()).fill(self.sidebar_fill);
        egui::SidePanel::left("sidebar")
            .default_width(240.0)
            .resizable(true)
            .frame(frame)
            .show_animated(ctx, self.sidebar_open, |ui| {
                panels::side_panel(ui, &mut self.session, &self.config, &self.palette);
            });

        // ---- Central panel: two tabbed cards ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |columns| {
                data_card(&mut columns[0], &mut self.session, &mut self.data_tab);
                chart_card(&mut columns[1], &mut self.session, &mut self.chart_tab, &self.palette);
            });
        });
    }
}

/// Pill-style tab strip; returns nothing, writes the choice into `current`.
fn tab_strip<T: Copy + PartialEq>(ui: &mut Ui, current: &mut T, tabs: &[T], label: impl Fn(T) -> &'static str) {
    ui.horizontal(|ui: &mut Ui| {
        for &tab in tabs {
            ui.selectable_value(current, tab, label(tab));
        }
    });
    ui.separator();
}

/// Only the visible tab reads its view, so hidden views stay lazy.
fn data_card(ui: &mut Ui, session: &mut Session, tab: &mut DataTab) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        tab_strip(ui, tab, &DataTab::ALL, DataTab::label);
        match *tab {
            DataTab::Table => table::data_table(ui, session.data_table()),
            DataTab::Grid => {
                let sort = session.inputs.grid_sort.get().copied().flatten();
                if let Some(column) = table::data_grid(ui, session.data_grid(), sort) {
                    session.toggle_grid_sort(column);
                }
            }
        }
    });
}

fn chart_card(ui: &mut Ui, session: &mut Session, tab: &mut ChartTab, palette: &SpeciesPalette) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        tab_strip(ui, tab, &ChartTab::ALL, ChartTab::label);
        match *tab {
            ChartTab::PlotlyHistogram => {
                plot::histogram_view(ui, "plotly_histogram", session.plotly_histogram(), palette)
            }
            ChartTab::SeabornHistogram => {
                plot::histogram_view(ui, "seaborn_histogram", session.seaborn_histogram(), palette)
            }
            ChartTab::Scatterplot => {
                plot::scatter_view(ui, "scatterplot", session.scatterplot(), palette)
            }
        }
    });
}
