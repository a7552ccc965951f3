use bitflags::bitflags;
use serde::Serialize;

use crate::operand::Operand;

pub const MAX_OPERANDS: usize = 6;

/// Index into an architecture's mnemonic table; 0 is the null kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Kind(pub u16);

impl Kind {
    pub const NULL: Kind = Kind(0);

    pub fn is_null(self) -> bool {
        self == Self::NULL
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    pub struct AuxFlags: u8 {
        const USER_PARALLEL = 1 << 0; // || prefix
        const LR = 1 << 1;            // .lr
        const CR = 1 << 2;            // .cr
    }
}

impl Default for AuxFlags {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Lockstep {
    Head { tail: u32 },
    Tail { head: u32 },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParallelGroup {
    /// Operand index where the second line of a two-line mnemonic starts.
    pub split: Option<u8>,
    pub lockstep: Option<Lockstep>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Instruction {
    pub address: u32,
    pub byte_length: u8,
    pub kind: Kind,
    pub operands: [Operand; MAX_OPERANDS],
    pub flags: AuxFlags,
    pub parallel: Option<ParallelGroup>,
    /// Slot of the operand a postfix byte may reinterpret.
    pub mem_operand: Option<u8>,
}

impl Instruction {
    pub fn new(address: u32) -> Self {
        Self { address, ..Self::default() }
    }

    pub fn operand_count(&self) -> usize {
        self.operands.iter().take_while(|op| !op.is_none()).count()
    }

    pub fn ops(&self) -> &[Operand] {
        &self.operands[..self.operand_count()]
    }

    pub fn end(&self) -> u32 {
        self.address.wrapping_add(self.byte_length as u32)
    }

    pub fn lockstep(&self) -> Option<Lockstep> {
        self.parallel.and_then(|p| p.lockstep)
    }

    pub fn split(&self) -> Option<u8> {
        self.parallel.and_then(|p| p.split)
    }

    pub(crate) fn group_mut(&mut self) -> &mut ParallelGroup {
        self.parallel.get_or_insert_with(ParallelGroup::default)
    }
}
