pub mod front_matter;
pub mod home_page;
pub mod page_writer;
pub mod subject_index;

pub use front_matter::{read_existing_tags_and_memo, PageMeta, DEFAULT_MEMO};
pub use home_page::write_home;
pub use page_writer::write_question_page;
pub use subject_index::write_subject_index;
