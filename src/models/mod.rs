pub mod era;
pub mod loaders;
pub mod question;
pub mod subject;

pub use era::{era_label, Era};
pub use loaders::{load_question, load_subject_dir, parse_filename};
pub use question::Question;
pub use subject::{display_order_key, subject_label, Subject};
