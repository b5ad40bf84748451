//! egui-based dashboard UI: controller, render state, and panels.

pub mod controller;
pub mod state;
pub mod ui;
pub mod view_model;
