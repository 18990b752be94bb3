// crates/pentrace-core/src/format/mod.rs

pub mod binary;
pub mod checksum;
pub mod text;
pub mod varint;
