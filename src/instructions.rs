use bitflags::bitflags;
use serde::Serialize;

use crate::instruction::Kind;

bitflags! {
    /// Per-kind operand usage and control-flow features.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
    pub struct Features: u32 {
        const USE1 = 1 << 0;
        const USE2 = 1 << 1;
        const USE3 = 1 << 2;
        const USE4 = 1 << 3;
        const USE5 = 1 << 4;
        const USE6 = 1 << 5;
        const CHG1 = 1 << 6;
        const CHG2 = 1 << 7;
        const CHG3 = 1 << 8;
        const CHG4 = 1 << 9;
        const CHG5 = 1 << 10;
        const CHG6 = 1 << 11;
        const STOP = 1 << 12; // no fallthrough
        const CALL = 1 << 13;
    }
}

impl Default for Features {
    fn default() -> Self {
        Self::empty()
    }
}

impl Features {
    pub fn uses(self, slot: usize) -> bool {
        slot < 6 && self.bits() & (Self::USE1.bits() << slot) != 0
    }

    pub fn changes(self, slot: usize) -> bool {
        slot < 6 && self.bits() & (Self::CHG1.bits() << slot) != 0
    }
}

/// One row of a kind-indexed mnemonic table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mnemonic {
    pub name: &'static str,
    /// Name of the second line for two-line (parallel) mnemonics.
    pub second: Option<&'static str>,
    pub features: Features,
}

impl Mnemonic {
    pub const fn new(name: &'static str, second: Option<&'static str>, features: Features) -> Self {
        Self { name, second, features }
    }

    pub fn same_names(&self, other: &Mnemonic) -> bool {
        self.name == other.name && self.second == other.second
    }
}

pub fn lookup(table: &[Mnemonic], kind: Kind) -> Option<&Mnemonic> {
    table.get(kind.0 as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_queries() {
        let f = Features::USE1 | Features::CHG2 | Features::USE2;
        assert!(f.uses(0) && f.uses(1) && !f.uses(2));
        assert!(f.changes(1) && !f.changes(0));
        assert!(!f.uses(6));
    }
}
