//! Application state module

mod app_state;
mod forms;
mod seasonal;
mod submission;
mod ui_area;
mod wave;

pub use app_state::*;
pub use forms::*;
pub use seasonal::*;
pub use submission::*;
pub use ui_area::*;
pub use wave::*;
