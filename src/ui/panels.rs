use std::collections::BTreeSet;
use std::fmt::Display;

use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::color::SpeciesPalette;
use crate::config::{DashboardConfig, SEABORN_BIN_RANGE};
use crate::data::model::{Attribute, Island, Species};
use crate::state::Session;

// ---------------------------------------------------------------------------
// Left side panel – inputs
// ---------------------------------------------------------------------------

/// Render the sidebar and write any edited values back into the session inputs.
pub fn side_panel(
    ui: &mut Ui,
    session: &mut Session,
    config: &DashboardConfig,
    palette: &SpeciesPalette,
) {
    ui.heading("Sidebar");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Attribute selector ----
            ui.strong("Selected attribute");
            let mut attribute = session
                .inputs
                .selected_attribute
                .get()
                .copied()
                .unwrap_or(config.default_attribute);
            egui::ComboBox::from_id_salt("selected_attribute")
                .selected_text(attribute.column())
                .show_ui(ui, |ui: &mut Ui| {
                    for candidate in Attribute::ALL {
                        ui.selectable_value(&mut attribute, candidate, candidate.column());
                    }
                });
            session.set_selected_attribute(attribute);
            ui.add_space(6.0);

            // ---- Bin counts ----
            ui.strong("Plotly bin count");
            let mut plotly_bins = session
                .inputs
                .plotly_bin_count
                .get()
                .copied()
                .unwrap_or(config.plotly_bin_count);
            ui.add(egui::DragValue::new(&mut plotly_bins).speed(1));
            session.set_plotly_bin_count(plotly_bins);
            ui.add_space(6.0);

            ui.strong("Seaborn bin count");
            let mut seaborn_bins = session
                .inputs
                .seaborn_bin_count
                .get()
                .copied()
                .unwrap_or(config.seaborn_bin_count);
            ui.add(egui::Slider::new(&mut seaborn_bins, SEABORN_BIN_RANGE));
            session.set_seaborn_bin_count(seaborn_bins);
            ui.separator();

            // ---- Species / island checkbox groups ----
            ui.strong("Selected species");
            let species = session
                .inputs
                .selected_species_list
                .get()
                .cloned()
                .unwrap_or_default();
            let species = checkbox_group(ui, &Species::ALL, species, |ui, s, checked| {
                let text = RichText::new(s.as_str()).color(palette.color_for(*s));
                ui.checkbox(checked, text).changed()
            });
            session.set_species(species);
            ui.add_space(6.0);

            ui.strong("Selected islands");
            let islands = session
                .inputs
                .selected_island_list
                .get()
                .cloned()
                .unwrap_or_default();
            let islands = checkbox_group(ui, &Island::ALL, islands, |ui, i, checked| {
                ui.checkbox(checked, i.as_str()).changed()
            });
            session.set_islands(islands);

            ui.separator();
            ui.add(
                egui::Hyperlink::from_label_and_url("GitHub", &config.github_url)
                    .open_in_new_tab(true),
            );
        });
}

/// One checkbox per option; returns the updated selection.
fn checkbox_group<T: Ord + Copy + Display>(
    ui: &mut Ui,
    options: &[T],
    mut selected: BTreeSet<T>,
    mut checkbox: impl FnMut(&mut Ui, &T, &mut bool) -> bool,
) -> BTreeSet<T> {
    for option in options {
        let mut checked = selected.contains(option);
        if checkbox(ui, option, &mut checked) {
            log::debug!("{option} toggled to {checked}");
            if checked {
                selected.insert(*option);
            } else {
                selected.remove(option);
            }
        }
    }
    selected
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar with the sidebar toggle and record counts.
pub fn top_bar(ui: &mut Ui, title: &str, sidebar_open: &mut bool, session: &mut Session) {
    ui.horizontal(|ui: &mut Ui| {
        let toggle = if *sidebar_open { "◀" } else { "☰" };
        if ui.button(toggle).on_hover_text("Toggle sidebar").clicked() {
            *sidebar_open = !*sidebar_open;
        }
        ui.heading(title);

        ui.separator();

        let total = session.dataset().len();
        let summary = match session.filtered_data() {
            Some(view) => format!("{} of {total} penguins selected", view.len()),
            None => format!("{total} penguins loaded"),
        };
        let counts = session.recompute_counts();
        ui.label(summary).on_hover_text(format!(
            "recomputations: filter {}, table {}, grid {}, plotly {}, seaborn {}, scatter {}",
            counts.filtered,
            counts.data_table,
            counts.data_grid,
            counts.plotly_histogram,
            counts.seaborn_histogram,
            counts.scatterplot,
        ));
    });
}
