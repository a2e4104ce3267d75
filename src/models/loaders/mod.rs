pub mod txt_loader;

pub use txt_loader::{load_question, load_subject_dir, parse_filename, FilenameInfo};
