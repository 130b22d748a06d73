use eframe::egui::{self, Color32, Context, RichText, Ui};

use crate::data::loader::CSV_EXTENSIONS;
use crate::state::{AppState, Intent};

pub const SOURCE_URL: &str = "https://github.com/AvaAvarai/VizDesk";

const ABOUT_TEXT: &str = "What if there was a locally 🏠 sessioned computer desktop 🖥️ \
metaphor for data science 📈 and visualization tools 🛠️?";

// ---------------------------------------------------------------------------
// Top bar – the start menu
// ---------------------------------------------------------------------------

/// Render the menu bar with the start menu.
pub fn top_bar(ui: &mut Ui, state: &AppState, intents: &mut Vec<Intent>) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("Start", |ui: &mut Ui| {
            if ui.button("Load CSV…").clicked() {
                if let Some(path) = pick_csv_file() {
                    intents.push(Intent::LoadFile(path));
                }
                ui.close_menu();
            }
            if ui.button("Table view").clicked() {
                intents.push(Intent::OpenTable);
                ui.close_menu();
            }
            if ui.button("Parallel coordinates").clicked() {
                intents.push(Intent::OpenProjection);
                ui.close_menu();
            }
            ui.separator();
            if ui.button("About").clicked() {
                intents.push(Intent::ShowAbout);
                ui.close_menu();
            }
            if ui.hyperlink_to("See code", SOURCE_URL).clicked() {
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Bottom panel – dataset stats
// ---------------------------------------------------------------------------

/// One-line summary of the loaded dataset, hidden until a file is loaded.
pub fn stats_panel(ctx: &Context, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };
    egui::TopBottomPanel::bottom("stats_panel").show(ctx, |ui: &mut Ui| {
        ui.label(dataset.summary.to_string());
    });
}

// ---------------------------------------------------------------------------
// About window
// ---------------------------------------------------------------------------

pub fn about_window(ctx: &Context, state: &AppState, intents: &mut Vec<Intent>) {
    let mut open = state.windows.about;
    egui::Window::new("About")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui: &mut Ui| {
            ui.label(ABOUT_TEXT);
            ui.hyperlink_to("Source code", SOURCE_URL);
        });
    if !open {
        intents.push(Intent::CloseAbout);
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn pick_csv_file() -> Option<std::path::PathBuf> {
    rfd::FileDialog::new()
        .set_title("Load CSV dataset")
        .add_filter("CSV", CSV_EXTENSIONS)
        .add_filter("All files", &["*"])
        .pick_file()
}
