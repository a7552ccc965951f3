use serde::{Deserialize, Serialize};

use crate::error::MemoryError;

/// Read-only view of a target address space, one byte per address.
pub trait Memory {
    fn read_u8(&self, addr: u32) -> Result<u8, MemoryError>;

    fn is_mapped(&self, addr: u32) -> bool {
        self.read_u8(addr).is_ok()
    }

    fn read_be(&self, addr: u32, n: u32) -> Result<u32, MemoryError> {
        let mut v = 0u32;
        for i in 0..n {
            v = (v << 8) | self.read_u8(addr.wrapping_add(i))? as u32;
        }
        Ok(v)
    }
}

impl<T: Memory + ?Sized> Memory for &T {
    fn read_u8(&self, addr: u32) -> Result<u8, MemoryError> {
        (**self).read_u8(addr)
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct LinearMemory {
    pub mem: Vec<u8>,
    pub base: u32,
}

impl LinearMemory {
    pub fn new(size: usize) -> Self {
        Self {
            mem: vec![0; size],
            base: 0,
        }
    }

    pub fn from_bytes(base: u32, bytes: &[u8]) -> Self {
        Self {
            mem: bytes.to_vec(),
            base,
        }
    }

    fn offset(&self, addr: u32) -> Option<usize> {
        let off = addr.checked_sub(self.base)? as usize;
        (off < self.mem.len()).then_some(off)
    }

    pub fn write_u8(&mut self, addr: u32, val: u8) -> Result<(), MemoryError> {
        let off = self.offset(addr).ok_or(MemoryError::Unmapped { addr })?;
        self.mem[off] = val;
        Ok(())
    }

    pub fn write_bytes(&mut self, addr: u32, bytes: &[u8]) -> Result<(), MemoryError> {
        for (i, b) in bytes.iter().enumerate() {
            self.write_u8(addr.wrapping_add(i as u32), *b)?;
        }
        Ok(())
    }
}

impl Memory for LinearMemory {
    fn read_u8(&self, addr: u32) -> Result<u8, MemoryError> {
        self.offset(addr)
            .map(|off| self.mem[off])
            .ok_or(MemoryError::Unmapped { addr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_are_relative_to_base() {
        let mut mem = LinearMemory::from_bytes(0x100, &[1, 2, 3]);
        assert_eq!(mem.read_u8(0x101).unwrap(), 2);
        assert_eq!(mem.read_be(0x100, 3).unwrap(), 0x010203);
        assert_eq!(mem.read_u8(0xFF), Err(MemoryError::Unmapped { addr: 0xFF }));
        assert!(mem.write_u8(0x103, 0).is_err());
        mem.write_bytes(0x101, &[9, 9]).unwrap();
        assert_eq!(mem.mem, vec![1, 9, 9]);
    }
}
