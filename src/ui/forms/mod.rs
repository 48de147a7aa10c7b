//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `prediction_form`: The vehicle attribute form and its action panel

mod field_renderer;
mod prediction_form;

pub use prediction_form::{draw_action_panel, draw_prediction_form};
