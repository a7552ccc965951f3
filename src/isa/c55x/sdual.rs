//! Packed-pair ("soft dual") reconstruction.
//!
//! A packed pair starts with a byte `10001xxx` and stores the first bytes of
//! two instructions interleaved in one 32-bit word. The halves are rebuilt
//! into the byte streams they would have as standalone instructions; any
//! extension bytes follow the packed word in memory.

use crate::memory::Memory;
use crate::table::leading_width;

use super::patterns::PATTERNS;

pub fn is_marker(first: u8) -> bool {
    first & 0xF8 == 0x88
}

/// Expands a 6-bit packed memory field into the `AAAAAAAI` form.
fn unpack_mem(p: u8) -> u8 {
    const LOW: [u8; 8] = [0, 1, 2, 3, 9, 4, 10, 5];
    ((LOW[(p & 7) as usize] | ((p << 1) & 0x70)) << 1) | 1
}

fn width(word: u32) -> u8 {
    leading_width(PATTERNS, word)
}

/// (head, tail) byte streams of the packed pair at `ea`, or `None` when the
/// word does not split into two known instructions.
pub fn unpack(mem: &dyn Memory, ea: u32) -> Option<(Vec<u8>, Vec<u8>)> {
    let word = mem.read_be(ea, 4).ok()?;
    let opc1 = (((word >> 20) & 0xF0) | ((word >> 8) & 0x0F)) as u8;
    let opc2 = (word & 0xFF) as u8;
    if opc2 & 0x80 != 0 {
        with_memory_fields(mem, ea, word, opc1, opc2)
    } else {
        with_short_tail(mem, ea, word, opc1)
    }
}

/// Bytes at offsets `from..to` past `ea`, wrapping at the top of the address space.
fn bytes(mem: &dyn Memory, ea: u32, from: u32, to: u32) -> Option<Vec<u8>> {
    (from..to).map(|off| mem.read_u8(ea.wrapping_add(off)).ok()).collect()
}

/// Both halves carry a packed memory operand in their second byte.
fn with_memory_fields(mem: &dyn Memory, ea: u32, word: u32, opc1: u8, opc2: u8) -> Option<(Vec<u8>, Vec<u8>)> {
    let byte = |off: u32| mem.read_u8(ea.wrapping_add(off)).ok().map(u32::from);
    let ops1 = ((word >> 18) & 0x3F) as u8;
    let ops2 = ((word >> 12) & 0x3F) as u8;

    let len1 = width((opc1 as u32) << 24) as u32;
    if len1 < 2 {
        return None;
    }
    let mut probe = (opc2 as u32) << 24;
    let mut len2 = width(probe) as u32;
    if len2 < 2 {
        probe |= byte(len1 + 2)? << 8;
        len2 = width(probe) as u32;
        if len2 < 2 {
            probe |= byte(len1 + 3)?;
            len2 = width(probe) as u32;
        }
    }
    if len2 < 2 {
        return None;
    }

    let mut head = vec![opc1, unpack_mem(ops1)];
    head.extend(bytes(mem, ea, 4, len1 + 2)?);
    let mut tail = vec![opc2, unpack_mem(ops2)];
    tail.extend(bytes(mem, ea, len1 + 2, len1 + len2)?);
    Some((head, tail))
}

/// The second half is a three-byte register instruction.
fn with_short_tail(mem: &dyn Memory, ea: u32, word: u32, opc1: u8) -> Option<(Vec<u8>, Vec<u8>)> {
    let byte = |off: u32| mem.read_u8(ea.wrapping_add(off)).ok().map(u32::from);
    let mut w1 = ((opc1 as u32) << 24) | (word & 0x00FF_0000);
    let w2 = (((word & 0xF0) | 4) << 24) | (word & 0xF000) | ((word & 0x0F) << 8);

    let mut len1 = width(w1);
    if len1 == 0 {
        w1 |= byte(4)? << 8;
        len1 = width(w1);
        if len1 < 3 {
            w1 |= byte(5)?;
            len1 = width(w1);
            if len1 != 4 {
                return None;
            }
        }
    }
    if len1 < 2 || width(w2) != 3 {
        return None;
    }

    let len1 = len1 as u32;
    let mut head = vec![(w1 >> 24) as u8, (w1 >> 16) as u8];
    head.extend(bytes(mem, ea, 4, len1 + 2)?);
    let tail = vec![(w2 >> 24) as u8, byte(len1 + 2)? as u8, (w2 >> 8) as u8];
    Some((head, tail))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_memory_fields_expand_to_indirect_forms() {
        // *AR0, *AR0+, *AR0-, *(AR0+T0)
        assert_eq!(unpack_mem(0), 0x01);
        assert_eq!(unpack_mem(1), 0x03);
        assert_eq!(unpack_mem(2), 0x05);
        assert_eq!(unpack_mem(3), 0x07);
        // ARn selection moves into the top bits
        assert_eq!(unpack_mem(0x08), 0x21);
        assert_eq!(unpack_mem(0x3F), 0xEB);
    }

    #[test]
    fn marker_covers_eight_first_bytes() {
        assert!((0x88..=0x8F).all(is_marker));
        assert!(!is_marker(0x87) && !is_marker(0x90));
    }

    /// Eight bytes starting four below the top of the address space.
    struct AcrossZero([u8; 8]);

    impl Memory for AcrossZero {
        fn read_u8(&self, addr: u32) -> Result<u8, crate::MemoryError> {
            let off = addr.wrapping_add(4) as usize;
            self.0.get(off).copied().ok_or(crate::MemoryError::Unmapped { addr })
        }
    }

    #[test]
    fn extension_bytes_wrap_past_the_top_of_memory() {
        let mem = AcrossZero([0x88, 0x00, 0x00, 0x10, 0x12, 0x34, 0x00, 0x00]);
        let (head, tail) = unpack(&mem, 0xFFFF_FFFC).unwrap();
        assert_eq!(head, vec![0x80, 0x00, 0x12]);
        assert_eq!(tail, vec![0x14, 0x34, 0x00]);
    }

    #[test]
    fn short_tail_must_be_three_bytes() {
        // 0x20 in the tail opcode selects a two-byte form
        let mem = AcrossZero([0x88, 0x00, 0x00, 0x20, 0x00, 0x00, 0x00, 0x00]);
        assert_eq!(unpack(&mem, 0xFFFF_FFFC), None);
    }
}
