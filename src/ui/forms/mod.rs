//! Form rendering module
//!
//! - `field_renderer`: one list row per form field
//! - `step_form`: the field list of the current step

mod field_renderer;
mod step_form;

pub use step_form::draw_step_form;
