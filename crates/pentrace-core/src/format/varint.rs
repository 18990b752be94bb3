// crates/pentrace-core/src/format/varint.rs
//
// LEB128 unsigned varints for command distances and header sizes.

use crate::error::{PenError, Result};

pub fn put_u64(mut v: u64, out: &mut Vec<u8>) {
    while v >= 0x80 {
        out.push((v as u8 & 0x7F) | 0x80);
        v >>= 7;
    }
    out.push(v as u8);
}

pub fn get_u64(bytes: &[u8], pos: &mut usize) -> Result<u64> {
    let mut acc: u64 = 0;
    let mut shift: u32 = 0;

    loop {
        let Some(&b) = bytes.get(*pos) else {
            return Err(PenError::Format("varint: eof".into()));
        };
        *pos += 1;

        let low = (b & 0x7F) as u64;
        if shift == 63 && low > 1 {
            return Err(PenError::Format("varint: overflow".into()));
        }
        acc |= low << shift;

        if b & 0x80 == 0 {
            return Ok(acc);
        }
        shift += 7;
        if shift > 63 {
            return Err(PenError::Format("varint: too long".into()));
        }
    }
}

/// Read a varint that must fit the target integer type.
pub fn get_as<T: TryFrom<u64>>(bytes: &[u8], pos: &mut usize, what: &str) -> Result<T> {
    let v = get_u64(bytes, pos)?;
    T::try_from(v).map_err(|_| PenError::Format(format!("{what} out of range: {v}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        for v in [0u64, 1, 127, 128, 300, 16_383, 16_384, u32::MAX as u64, u64::MAX] {
            let mut out = Vec::new();
            put_u64(v, &mut out);
            let mut pos = 0;
            assert_eq!(get_u64(&out, &mut pos).unwrap(), v);
            assert_eq!(pos, out.len());
        }
    }

    #[test]
    fn rejects_truncated_and_oversized() {
        let mut pos = 0;
        assert!(get_u64(&[0x80, 0x80], &mut pos).is_err());

        let mut pos = 0;
        assert!(get_u64(&[0xFF; 11], &mut pos).is_err());

        let mut out = Vec::new();
        put_u64(u32::MAX as u64 + 1, &mut out);
        let mut pos = 0;
        assert!(get_as::<u32>(&out, &mut pos, "distance").is_err());
    }
}
