use std::path::PathBuf;

use crate::color::ColorMap;
use crate::data::loader::load_file;
use crate::data::model::Dataset;
use crate::projection::{project, ProjectionError};
use crate::scene::{scene_for, SceneSpec};

// ---------------------------------------------------------------------------
// Intents published by the UI
// ---------------------------------------------------------------------------

/// A user action, queued during a frame and applied after it.
#[derive(Debug, Clone)]
pub enum Intent {
    LoadFile(PathBuf),
    DatasetLoaded(Dataset),
    OpenTable,
    CloseTable,
    OpenProjection,
    CloseProjection,
    ShowAbout,
    CloseAbout,
}

/// Which floating windows are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Windows {
    pub table: bool,
    pub projection: bool,
    pub about: bool,
}

/// Plot state derived from the current dataset.
#[derive(Debug, Clone)]
pub struct ProjectionView {
    pub scene: SceneSpec,
    pub color_map: ColorMap,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None until user loads a file).
    pub dataset: Option<Dataset>,

    /// Scene for the projection window, built on demand.
    pub projection: Option<ProjectionView>,

    pub windows: Windows,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Apply queued intents in order.
    pub fn dispatch_all(&mut self, intents: impl IntoIterator<Item = Intent>) {
        for intent in intents {
            self.dispatch(intent);
        }
    }

    pub fn dispatch(&mut self, intent: Intent) {
        match intent {
            Intent::LoadFile(path) => self.load_path(path),
            Intent::DatasetLoaded(dataset) => self.set_dataset(dataset),
            Intent::OpenTable => self.windows.table = true,
            Intent::CloseTable => self.windows.table = false,
            Intent::OpenProjection => {
                if let Some(e) = self.open_projection().err() {
                    self.status_message = Some(format!("Error: {e}"));
                }
            }
            Intent::CloseProjection => self.windows.projection = false,
            Intent::ShowAbout => self.windows.about = true,
            Intent::CloseAbout => self.windows.about = false,
        }
    }

    fn load_path(&mut self, path: PathBuf) {
        match load_file(&path) {
            Ok(dataset) => {
                log::info!("Loaded {}", dataset.summary);
                self.dispatch(Intent::DatasetLoaded(dataset));
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Replace the session with a newly loaded dataset.
    ///
    /// The table window opens. An open projection window is rebuilt from the
    /// new data, or closed when the new data cannot be projected.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.dataset = Some(dataset);
        self.projection = None;
        self.status_message = None;
        self.windows.table = true;

        if self.windows.projection {
            if let Some(e) = self.open_projection().err() {
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Project the current dataset and show the projection window.
    ///
    /// On error nothing is built and the window stays closed.
    pub fn open_projection(&mut self) -> Result<&ProjectionView, ProjectionError> {
        self.projection = None;
        self.windows.projection = false;

        let dataset = self.dataset.as_ref().ok_or_else(|| {
            log::error!("Projection requested with no dataset loaded");
            ProjectionError::NoDataset
        })?;
        let projection = project(&dataset.grid)?;
        if projection.coerced_cells > 0 {
            log::debug!(
                "{}: {} non-numeric cell(s) projected as 0",
                dataset.summary.file_name,
                projection.coerced_cells
            );
        }

        let view = ProjectionView {
            scene: scene_for(&projection),
            color_map: ColorMap::new(&projection.labels),
        };
        self.windows.projection = true;
        Ok(self.projection.insert(view))
    }
}
