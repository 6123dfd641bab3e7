use eframe::egui::{self, Align, Layout, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::views::table::{GridSort, TableArtifact};
use crate::views::ViewResult;

use super::plot::view_error;

const ROW_HEIGHT: f32 = 18.0;
const HEADER_HEIGHT: f32 = 22.0;

// ---------------------------------------------------------------------------
// Data card (left column)
// ---------------------------------------------------------------------------

/// Plain striped table of the filtered rows.
pub fn data_table(ui: &mut Ui, result: &ViewResult<TableArtifact>) {
    match result {
        Ok(table) => {
            rows_table(ui, table, None);
        }
        Err(e) => view_error(ui, e),
    }
}

/// Grid of the filtered rows with clickable, sortable headers.
///
/// Returns the column whose header was clicked this frame.
pub fn data_grid(
    ui: &mut Ui,
    result: &ViewResult<TableArtifact>,
    sort: Option<GridSort>,
) -> Option<usize> {
    match result {
        Ok(table) => rows_table(ui, table, Some(sort)),
        Err(e) => {
            view_error(ui, e);
            None
        }
    }
}

/// `sortable` is `None` for a static header, otherwise the active sort order.
fn rows_table(ui: &mut Ui, table: &TableArtifact, sortable: Option<Option<GridSort>>) -> Option<usize> {
    ui.label(format!("{} rows", table.rows.len()));
    if table.is_empty() {
        ui.label(RichText::new("No rows match the current selection.").italics());
    }

    let mut clicked = None;
    TableBuilder::new(ui)
        .striped(sortable.is_none())
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .columns(Column::auto().at_least(60.0), table.columns.len())
        .header(HEADER_HEIGHT, |mut header| {
            for (i, name) in table.columns.iter().enumerate() {
                header.col(|ui: &mut Ui| match sortable {
                    None => {
                        ui.strong(*name);
                    }
                    Some(sort) => {
                        let arrow = match sort {
                            Some(s) if s.column == i && s.descending => " ⏷",
                            Some(s) if s.column == i => " ⏶",
                            _ => "",
                        };
                        if ui
                            .add(egui::Button::new(RichText::new(format!("{name}{arrow}")).strong()).frame(false))
                            .clicked()
                        {
                            clicked = Some(i);
                        }
                    }
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, table.rows.len(), |mut row| {
                let cells = &table.rows[row.index()];
                for cell in cells {
                    row.col(|ui: &mut Ui| {
                        ui.label(cell.as_str());
                    });
                }
            });
        });
    clicked
}
