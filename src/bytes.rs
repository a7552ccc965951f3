use crate::memory::Memory;

/// Maximum number of bytes cached for a single decode attempt.
pub const CACHE_SIZE: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteError {
    Unmapped(u32),
    /// Read past the end of the cache.
    Exhausted,
}

/// Lazy byte cache over the address space starting at one instruction address.
pub struct ByteSource<'m> {
    mem: &'m dyn Memory,
    base: u32,
    bytes: [u8; CACHE_SIZE],
    len: usize,
    pos: usize,
}

impl<'m> ByteSource<'m> {
    pub fn new(mem: &'m dyn Memory, base: u32) -> Self {
        Self { mem, base, bytes: [0; CACHE_SIZE], len: 0, pos: 0 }
    }

    /// A stream whose first bytes are `prefix`; later offsets read memory at `base + offset`.
    pub fn primed(mem: &'m dyn Memory, base: u32, prefix: &[u8]) -> Self {
        let len = prefix.len().min(CACHE_SIZE);
        let mut bytes = [0; CACHE_SIZE];
        bytes[..len].copy_from_slice(&prefix[..len]);
        Self { mem, base, bytes, len, pos: 0 }
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn reset(&mut self) {
        self.pos = 0;
    }

    pub fn next(&mut self) -> Result<u8, ByteError> {
        let b = self.at(self.pos)?;
        self.pos += 1;
        Ok(b)
    }

    /// Returns a cached byte without touching the address space.
    pub fn peek(&self, offset: usize) -> Option<u8> {
        (offset < self.len).then(|| self.bytes[offset])
    }

    /// Random access by offset, filling the cache in order up to `offset`.
    pub fn at(&mut self, offset: usize) -> Result<u8, ByteError> {
        if offset >= CACHE_SIZE { return Err(ByteError::Exhausted); }
        while self.len <= offset {
            let addr = self.base.wrapping_add(self.len as u32);
            self.bytes[self.len] = self.mem.read_u8(addr).map_err(|_| ByteError::Unmapped(addr))?;
            self.len += 1;
        }
        Ok(self.bytes[offset])
    }

    pub fn cached(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::LinearMemory;
    use std::cell::Cell;

    struct Counting { inner: LinearMemory, reads: Cell<usize> }

    impl Memory for Counting {
        fn read_u8(&self, addr: u32) -> Result<u8, crate::error::MemoryError> {
            self.reads.set(self.reads.get() + 1);
            self.inner.read_u8(addr)
        }
    }

    #[test]
    fn fetches_each_offset_once() {
        let mem = Counting { inner: LinearMemory::from_bytes(0x10, &[0xAA, 0xBB, 0xCC]), reads: Cell::new(0) };
        let mut src = ByteSource::new(&mem, 0x10);
        assert_eq!(src.next(), Ok(0xAA));
        assert_eq!(src.next(), Ok(0xBB));
        src.reset();
        assert_eq!(src.next(), Ok(0xAA));
        assert_eq!(src.next(), Ok(0xBB));
        assert_eq!(mem.reads.get(), 2);
        assert_eq!(src.peek(1), Some(0xBB));
        assert_eq!(src.peek(2), None);
        assert_eq!(src.at(3), Err(ByteError::Unmapped(0x13)));
    }

    #[test]
    fn primed_prefix_shadows_memory() {
        let mem = LinearMemory::from_bytes(0x20, &[0xEE, 0xEE, 0x33]);
        let mut src = ByteSource::primed(&mem, 0x20, &[1, 2]);
        assert_eq!(src.next(), Ok(1));
        assert_eq!(src.next(), Ok(2));
        assert_eq!(src.next(), Ok(0x33));
        assert_eq!(src.next(), Err(ByteError::Unmapped(0x23)));
        assert_eq!(src.cached(), &[1, 2, 0x33]);
    }
}
