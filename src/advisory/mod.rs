pub mod download;
pub mod records;
