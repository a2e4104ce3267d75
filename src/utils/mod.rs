pub mod html;
pub mod logging;

pub use html::html_escape;
pub use logging::{truncate_text, RunStats};
