//! Application state module

mod app_state;
mod attributes;
mod forms;
mod prediction;

pub use app_state::*;
pub use attributes::*;
pub use forms::*;
pub use prediction::*;
