use eframe::egui::{self, Context, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::Grid;
use crate::state::{AppState, Intent};

/// Floating window holding the data table.
pub fn table_window(ctx: &Context, state: &AppState, intents: &mut Vec<Intent>) {
    let mut open = state.windows.table;
    egui::Window::new("Table View")
        .open(&mut open)
        .default_size([640.0, 420.0])
        .show(ctx, |ui: &mut Ui| match &state.dataset {
            Some(ds) => data_table(ui, &ds.grid),
            None => {
                ui.label("No dataset loaded.");
            }
        });
    if !open {
        intents.push(Intent::CloseTable);
    }
}

/// One header cell per column, one row per data row, cells verbatim.
///
/// Columns follow the header; short rows show empty cells.
pub fn data_table(ui: &mut Ui, grid: &Grid) {
    let header = grid.header();
    let rows = grid.data_rows();

    egui::ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .columns(Column::auto().at_least(60.0), header.len())
            .min_scrolled_height(0.0)
            .header(20.0, |mut row| {
                for name in header {
                    row.col(|ui: &mut Ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, rows.len(), |mut row| {
                    let cells = &rows[row.index()];
                    for col in 0..header.len() {
                        row.col(|ui: &mut Ui| {
                            ui.label(Grid::cell(cells, col));
                        });
                    }
                });
            });
    });
}
