//! Application state module

mod app_state;
mod forms;
mod navigator;
mod profile;
mod updates;

pub use app_state::*;
pub use forms::*;
pub use navigator::*;
pub use profile::*;
pub use updates::*;
