use eframe::egui;

use crate::state::{AppState, Intent};
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct VizDeskApp {
    pub state: AppState,
}

impl eframe::App for VizDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut intents = Vec::new();

        // A file dropped on the window loads like Start → Load CSV…
        let dropped = ctx.input(|i| i.raw.dropped_files.iter().find_map(|f| f.path.clone()));
        if let Some(path) = dropped {
            intents.push(Intent::LoadFile(path));
        }

        // ---- Top panel: start menu ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state, &mut intents);
        });

        // ---- Bottom panel: dataset stats ----
        panels::stats_panel(ctx, &self.state);

        // ---- Central panel: the desktop ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.dataset.is_none() {
                ui.centered_and_justified(|ui| {
                    ui.weak("Start → Load CSV… to open a dataset");
                });
            }
        });

        // ---- Floating windows ----
        table::table_window(ctx, &self.state, &mut intents);
        plot::projection_window(ctx, &self.state, &mut intents);
        panels::about_window(ctx, &self.state, &mut intents);

        self.state.dispatch_all(intents);
    }
}
