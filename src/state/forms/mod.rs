//! Form domain layer
//!
//! Owns the attribute values being edited and the cursor that moves
//! between fields and the action buttons.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{FormCursor, FormStateStore};
