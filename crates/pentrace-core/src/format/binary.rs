// crates/pentrace-core/src/format/binary.rs

use crate::drawing::{Command, Drawing};
use crate::error::{PenError, Result};
use crate::format::checksum::{blake3_16, crc32, hex};
use crate::format::varint;
use crate::geom::Direction;
use crate::validate::validate_drawing;

const MAGIC: &[u8; 4] = b"PDR1";
const VERSION: u16 = 1;

const PAINT_FLAG: u8 = 0b0000_0100;

/// Packed drawing (.pdr).
/// Layout:
/// MAGIC[4]
/// version:u16 (LE)
/// height:varint width:varint
/// background:u8
/// count:varint
/// commands: repeated { tag:u8, distance:varint }
///   tag bits 0-1 direction (up, down, left, right), bit 2 paint, bits 4-7 color
/// crc32:u32 (LE)   (over everything before crc32)
/// id:[16]          (blake3 prefix over everything before id)
pub fn encode(d: &Drawing) -> Result<Vec<u8>> {
    validate_drawing(d)?;

    let mut b = Vec::with_capacity(16 + d.commands.len() * 2 + 20);
    b.extend_from_slice(MAGIC);
    b.extend_from_slice(&VERSION.to_le_bytes());
    varint::put_u64(d.height as u64, &mut b);
    varint::put_u64(d.width as u64, &mut b);
    b.push(d.background);
    varint::put_u64(d.commands.len() as u64, &mut b);

    for c in &d.commands {
        let mut tag = c.direction.code();
        if let Some(color) = c.paint {
            tag |= PAINT_FLAG | (color << 4);
        }
        b.push(tag);
        varint::put_u64(c.distance as u64, &mut b);
    }

    let crc = crc32(&b);
    b.extend_from_slice(&crc.to_le_bytes());

    let id = blake3_16(&b);
    b.extend_from_slice(&id);

    Ok(b)
}

pub fn decode(bytes: &[u8]) -> Result<Drawing> {
    if bytes.len() < 4 + 2 + 4 + 16 || &bytes[0..4] != MAGIC {
        return Err(PenError::Format("bad magic".into()));
    }

    let id_off = bytes.len() - 16;
    if blake3_16(&bytes[..id_off]) != bytes[id_off..] {
        return Err(PenError::Format("drawing id mismatch".into()));
    }

    let crc_off = id_off - 4;
    let crc_expected = u32::from_le_bytes([
        bytes[crc_off],
        bytes[crc_off + 1],
        bytes[crc_off + 2],
        bytes[crc_off + 3],
    ]);
    if crc32(&bytes[..crc_off]) != crc_expected {
        return Err(PenError::Format("crc32 mismatch".into()));
    }

    let body = &bytes[..crc_off];
    let mut i = 4usize;

    let version = u16::from_le_bytes([body[4], body[5]]);
    i += 2;
    if version != VERSION {
        return Err(PenError::Format(format!("unsupported version {version}")));
    }

    let height: usize = varint::get_as(body, &mut i, "height")?;
    let width: usize = varint::get_as(body, &mut i, "width")?;
    let background = *body
        .get(i)
        .ok_or_else(|| PenError::Format("unexpected eof reading background".into()))?;
    i += 1;

    let count: usize = varint::get_as(body, &mut i, "command count")?;
    // every command takes at least two bytes
    if count > body.len().saturating_sub(i) / 2 {
        return Err(PenError::Format(format!("command count {count} exceeds payload")));
    }

    let mut drawing = Drawing::new(height, width, background);
    drawing.commands.reserve(count);
    for _ in 0..count {
        let tag = *body
            .get(i)
            .ok_or_else(|| PenError::Format("unexpected eof reading command".into()))?;
        i += 1;
        if tag & 0b0000_1000 != 0 {
            return Err(PenError::Format(format!("reserved tag bit set: {tag:#04x}")));
        }
        let distance: u32 = varint::get_as(body, &mut i, "distance")?;
        let paint = (tag & PAINT_FLAG != 0).then_some(tag >> 4);
        drawing.push(Command {
            direction: Direction::from_code(tag),
            distance,
            paint,
        });
    }

    if i != body.len() {
        return Err(PenError::Format("trailing bytes".into()));
    }

    validate_drawing(&drawing)?;
    Ok(drawing)
}

/// 32 hex chars identifying the packed drawing.
pub fn drawing_id_hex(d: &Drawing) -> Result<String> {
    let bytes = encode(d)?;
    Ok(hex(&bytes[bytes.len() - 16..]))
}
