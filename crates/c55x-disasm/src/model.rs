use anyhow::Result;
use std::path::Path;

use c55x_rs::{Memory, MemoryError};

#[derive(Debug, Clone)]
pub struct Segment {
    pub name: String,
    pub base: u32,
    pub bytes: Vec<u8>,
    pub perms: &'static str, // e.g., "r-x"
    pub kind: &'static str,  // e.g., "raw"
}

impl Segment {
    pub fn end(&self) -> u32 {
        self.base.wrapping_add(self.bytes.len() as u32)
    }

    fn contains(&self, addr: u32) -> bool {
        addr >= self.base && addr < self.end()
    }
}

#[derive(Debug, Clone)]
pub struct Image {
    pub segments: Vec<Segment>,
}

impl Memory for Image {
    fn read_u8(&self, addr: u32) -> Result<u8, MemoryError> {
        self.segments
            .iter()
            .find(|s| s.contains(addr))
            .map(|s| s.bytes[(addr - s.base) as usize])
            .ok_or(MemoryError::Unmapped { addr })
    }
}

pub fn load_raw_bin(path: &Path, base: u32, skip: usize, len: Option<usize>) -> Result<Image> {
    let file = std::fs::read(path)?;
    anyhow::ensure!(skip <= file.len(), "--skip exceeds file size");
    let mut payload = &file[skip..];
    if let Some(lim) = len {
        anyhow::ensure!(lim <= payload.len(), "--len exceeds remaining file size after skip");
        payload = &payload[..lim];
    }
    let seg = Segment { name: "segment0".into(), base, bytes: payload.to_vec(), perms: "r-x", kind: "raw" };
    Ok(Image { segments: vec![seg] })
}

pub fn read_bytes(img: &Image, addr: u32, n: u8) -> Vec<u8> {
    (0..n as u32).filter_map(|i| img.read_u8(addr.wrapping_add(i)).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loader_maps_skip_and_len() {
        let path = std::env::temp_dir().join("_c55x_model_test.bin");
        std::fs::write(&path, [0u8, 1, 2, 3, 4, 5]).unwrap();
        let img = load_raw_bin(&path, 0x10000, 2, Some(3)).unwrap();
        assert_eq!(img.segments.len(), 1);
        let s = &img.segments[0];
        assert_eq!(s.base, 0x10000);
        assert_eq!(s.bytes, vec![2, 3, 4]);
        assert_eq!(img.read_be(0x10000, 3).unwrap(), 0x020304);
        assert!(img.read_u8(0x10003).is_err());
        assert_eq!(read_bytes(&img, 0x10001, 4), vec![3, 4]);
        let _ = std::fs::remove_file(&path);
    }
}
