//! TMS320C55x tables and the hooks that run around table matching.

pub mod mnemonics;
pub mod ops;
pub mod patterns;
pub mod postfix;
pub mod regs;
pub mod sdual;
pub mod status;

use serde::{Deserialize, Serialize};

use crate::context::ContextStore;
use crate::decoder::Isa;
use crate::instruction::Instruction;
use crate::instructions::Mnemonic;
use crate::memory::Memory;
use crate::table::OpcodePattern;

pub use mnemonics::{Mn, MNEMONICS};
pub use patterns::PATTERNS;
pub use regs::Reg;

/// Reset values of the addressing-mode context registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextDefaults {
    pub arms: u32,
    pub cpl: u32,
    pub dp: u32,
    pub dph: u32,
    pub pdp: u32,
}

impl Default for ContextDefaults {
    fn default() -> Self {
        Self { arms: 0, cpl: 1, dp: 0, dph: 0, pdp: 0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct C55xConfig {
    /// Render low data addresses by their memory-mapped register name.
    pub mapped_registers: bool,
    pub defaults: ContextDefaults,
}

impl Default for C55xConfig {
    fn default() -> Self {
        Self { mapped_registers: true, defaults: ContextDefaults::default() }
    }
}

impl C55xConfig {
    /// A context store seeded with the configured reset values.
    pub fn context_store(&self) -> ContextStore {
        let d = self.defaults;
        ContextStore::new()
            .with_default(Reg::ARMS.id(), d.arms)
            .with_default(Reg::CPL.id(), d.cpl)
            .with_default(Reg::DP.id(), d.dp)
            .with_default(Reg::DPH.id(), d.dph)
            .with_default(Reg::PDP.id(), d.pdp)
    }
}

/// First bytes up to 0x5F with the low bit set run in parallel with the instruction before.
fn parallel_bit(first: u8) -> bool {
    first <= 0x5F && first & 1 == 1
}

#[derive(Debug, Clone, Copy, Default)]
pub struct C55x;

impl Isa for C55x {
    type Field = ops::Field;

    fn patterns(&self) -> &'static [OpcodePattern<ops::Field>] {
        PATTERNS
    }

    fn mnemonics(&self) -> &'static [Mnemonic] {
        MNEMONICS
    }

    fn code_address_mask(&self) -> u32 {
        0x00FF_FFFF
    }

    fn is_pair_marker(&self, first: u8) -> bool {
        sdual::is_marker(first)
    }

    fn unpack(&self, mem: &dyn Memory, head: u32) -> Option<(Vec<u8>, Vec<u8>)> {
        sdual::unpack(mem, head)
    }

    fn runs_in_lockstep(&self, first: u8) -> bool {
        parallel_bit(first)
    }

    fn fixup(&self, insn: &mut Instruction) {
        status::name_status_bit(insn);
    }

    fn user_parallel(&self, first: u8) -> bool {
        parallel_bit(first)
    }

    fn postfix(&self, insn: &mut Instruction, next: u8) -> bool {
        postfix::apply(insn, next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_seed_the_context() {
        let cfg: C55xConfig = serde_json::from_str(r#"{"defaults": {"cpl": 0, "dp": 512}}"#).unwrap();
        assert!(cfg.mapped_registers);
        let ctx = cfg.context_store();
        assert_eq!(ctx.get(0, Reg::CPL.id()), Some(0));
        assert_eq!(ctx.get(0, Reg::DP.id()), Some(512));
        assert_eq!(ctx.get(0, Reg::ARMS.id()), Some(0));
    }
}
