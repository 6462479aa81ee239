pub mod html_writer;
pub mod json_writer;
pub mod summary;
