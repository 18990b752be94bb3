// crates/pentrace-cli/src/io/mod.rs

pub mod drawing_file;
pub mod image_file;
