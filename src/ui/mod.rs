//! egui rendering: menu bar, stats panel and the floating windows.
//!
//! Widgets only read [`crate::state::AppState`]; every change goes out as an
//! [`crate::state::Intent`] pushed onto the frame's intent list.

pub mod panels;
pub mod plot;
pub mod table;
