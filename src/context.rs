use std::collections::{BTreeMap, HashMap};

use tracing::debug;

/// Address-indexed addressing-mode context (page and mode registers).
///
/// A value written at an address holds from there up to the next write of
/// the same register. `None` records an explicitly unknown value. Registers
/// never written read as their default, if any.
#[derive(Debug, Clone, Default)]
pub struct ContextStore {
    defaults: HashMap<u16, u32>,
    values: HashMap<u16, BTreeMap<u32, Option<u32>>>,
    version: u64,
}

impl ContextStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default(mut self, reg: u16, value: u32) -> Self {
        self.defaults.insert(reg, value);
        self
    }

    pub fn get(&self, address: u32, reg: u16) -> Option<u32> {
        match self.values.get(&reg).and_then(|m| m.range(..=address).next_back()) {
            Some((_, v)) => *v,
            None => self.defaults.get(&reg).copied(),
        }
    }

    pub fn set(&mut self, address: u32, reg: u16, value: Option<u32>) {
        let slot = self.values.entry(reg).or_default();
        if slot.get(&address) == Some(&value) { return; }
        debug!(address, reg, ?value, "context write");
        slot.insert(address, value);
        self.version += 1;
    }

    /// Incremented by every write that changed the store.
    pub fn version(&self) -> u64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_hold_until_the_next_write() {
        let mut ctx = ContextStore::new().with_default(7, 1);
        assert_eq!(ctx.get(0x10, 7), Some(1));
        assert_eq!(ctx.get(0x10, 8), None);
        ctx.set(0x20, 7, Some(5));
        ctx.set(0x40, 7, None);
        assert_eq!(ctx.get(0x1F, 7), Some(1));
        assert_eq!(ctx.get(0x30, 7), Some(5));
        assert_eq!(ctx.get(0x40, 7), None);
        let v = ctx.version();
        ctx.set(0x20, 7, Some(5));
        assert_eq!(ctx.version(), v);
    }
}
