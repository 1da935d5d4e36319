//! Form domain layer
//!
//! Raw field values live here as text; numbers are only parsed when the
//! derivation engine needs them.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{FieldId, PexForm};
