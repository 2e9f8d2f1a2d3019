//! Output rendering: the JSON specification file and its viewer page.

pub mod html;
pub mod json;

pub use html::{ViewerPage, render_viewer_page};
pub use json::render_document;
