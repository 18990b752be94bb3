// crates/pentrace-cli/src/cmd/mod.rs

pub mod analyze;
pub mod decode;
pub mod encode;
pub mod inspect;
pub mod verify;
