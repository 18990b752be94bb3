// crates/pentrace-cli/src/io/drawing_file.rs

use anyhow::{Context, Result};
use pentrace_core::format::{binary, text};
use pentrace_core::Drawing;

/// `.pdr` paths hold the packed binary form; everything else is text.
pub fn is_packed(path: &str) -> bool {
    std::path::Path::new(path)
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("pdr"))
}

pub fn load_drawing(path: &str) -> Result<Drawing> {
    if is_packed(path) {
        let bytes = std::fs::read(path).with_context(|| format!("read drawing {path}"))?;
        binary::decode(&bytes).with_context(|| format!("decode packed drawing {path}"))
    } else {
        let src =
            std::fs::read_to_string(path).with_context(|| format!("read drawing {path}"))?;
        text::parse_drawing(&src).with_context(|| format!("parse drawing {path}"))
    }
}

/// Write a drawing; returns the number of bytes written.
pub fn save_drawing(path: &str, drawing: &Drawing) -> Result<usize> {
    let bytes = if is_packed(path) {
        binary::encode(drawing).with_context(|| format!("pack drawing {path}"))?
    } else {
        text::format_drawing(drawing).into_bytes()
    };
    std::fs::write(path, &bytes).with_context(|| format!("write drawing {path}"))?;
    Ok(bytes.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_picks_format() {
        assert!(is_packed("out/cat.pdr"));
        assert!(is_packed("CAT.PDR"));
        assert!(!is_packed("cat.txt"));
        assert!(!is_packed("pdr"));
    }
}
