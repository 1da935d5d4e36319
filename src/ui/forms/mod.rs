//! Form rendering module
//!
//! - `field_renderer`: single field boxes
//! - `pex_form`: the pricing exception form sections

mod field_renderer;
mod pex_form;

pub use pex_form::draw_pex_form;
