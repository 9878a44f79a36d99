pub mod baby;
pub mod milestone;
pub mod records;
pub mod timeline;
