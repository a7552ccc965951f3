//! Cross-reference, flow and context classification of decoded C55x instructions.
//!
//! Classification only reads context; `Classification::apply` is the one place
//! that writes it, so a caller decides when a decode's side effects become visible.

use serde::Serialize;
use tracing::trace;

use crate::context::ContextStore;
use crate::instruction::{Instruction, Kind};
use crate::instructions::Features;
use crate::isa::c55x::{Mn, Reg};
use crate::operand::{Operand, OperandValue, Operators};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum XrefKind {
    Call,
    Jump,
    Read,
    Write,
    /// Informational data reference (repeat-block ends).
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Xref {
    pub from: u32,
    pub to: u32,
    pub kind: XrefKind,
    pub operand: u8,
}

impl Xref {
    pub fn is_code(&self) -> bool {
        matches!(self.kind, XrefKind::Call | XrefKind::Jump)
    }
}

/// A context register takes `value` from `address` on; `None` means unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContextWrite {
    pub address: u32,
    pub reg: u16,
    pub value: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub xrefs: Vec<Xref>,
    /// Execution may continue at the next instruction.
    pub flow: bool,
    pub context_writes: Vec<ContextWrite>,
    /// Stack pointer change in bytes.
    pub stack_delta: Option<i32>,
}

impl Classification {
    pub fn apply(&self, ctx: &mut ContextStore) {
        for w in &self.context_writes {
            ctx.set(w.address, w.reg, w.value);
        }
    }

    pub fn code_refs(&self) -> impl Iterator<Item = &Xref> {
        self.xrefs.iter().filter(|x| x.is_code())
    }
}

const PAGE_REGS: [Reg; 3] = [Reg::DP, Reg::DPH, Reg::PDP];

fn is_page_reg(id: u16) -> bool {
    PAGE_REGS.iter().any(|r| r.id() == id)
}

/// Byte address of a data-space operand, `None` when a page register it uses is unknown.
pub fn data_address(insn: &Instruction, op: &Operand, ctx: &ContextStore) -> Option<u32> {
    let OperandValue::DirectMemory { mut address, high, page, .. } = op.value else {
        return None;
    };
    let mut dph = 0;
    if high == Some(Reg::DPH.id()) {
        dph = ctx.get(insn.address, Reg::DPH.id())?;
        address &= 0xFFFF;
    }
    let mut dp = 0;
    if page == Some(Reg::DP.id()) {
        dp = ctx.get(insn.address, Reg::DP.id())?;
        address &= 0xFFFF;
    }
    Some((((dph & 0x7F) << 16) | dp.wrapping_add(address)) << 1)
}

/// I/O-space address of a port operand.
pub fn io_address(insn: &Instruction, op: &Operand, ctx: &ContextStore) -> Option<u32> {
    let OperandValue::DirectMemory { mut address, page, .. } = op.value else {
        return None;
    };
    let mut pdp = 0;
    if page == Some(Reg::PDP.id()) {
        pdp = ctx.get(insn.address, Reg::PDP.id())?;
        address &= 0x7F;
    }
    Some(((pdp & 0x1FF) << 7) | address)
}

#[rustfmt::skip]
static MAPPED: [Option<Reg>; 0x50] = {
    use Reg::*;
    [
        Some(IER0),   Some(IFR0),  Some(ST0_55), Some(ST1_55), Some(ST3_55), None,        Some(ST0),   Some(ST1),
        Some(AC0L),   Some(AC0H),  Some(AC0G),   Some(AC1L),   Some(AC1H),   Some(AC1G),  Some(T3),    Some(TRN0),
        Some(AR0),    Some(AR1),   Some(AR2),    Some(AR3),    Some(AR4),    Some(AR5),   Some(AR6),   Some(AR7),
        Some(SP),     Some(BK03),  Some(BRC0),   Some(RSA0L),  Some(REA0L),  Some(PMST),  Some(XPC),   None,
        Some(T0),     Some(T1),    Some(T2),     Some(T3),     Some(AC2L),   Some(AC2H),  Some(AC2G),  Some(CDP),
        Some(AC3L),   Some(AC3H),  Some(AC3H),   Some(DPH),    None,         None,        Some(DP),    Some(PDP),
        Some(BK47),   Some(BKC),   Some(BSA01),  Some(BSA23),  Some(BSA45),  Some(BSA67), Some(BSAC),  None,
        Some(TRN1),   Some(BRC1),  Some(BRS1),   Some(CSR),    Some(RSA0H),  Some(RSA0L), Some(REA0H), Some(REA0L),
        Some(RSA1H),  Some(RSA1L), Some(REA1H),  Some(REA1L),  Some(RPTC),   Some(IER1),  Some(IFR1),  Some(DBIER0),
        Some(DBIER1), Some(IVPD),  Some(IVPH),   Some(ST2_55), Some(SSP),    Some(SP),    Some(SPH),   Some(CDPH),
    ]
};

/// Memory-mapped register at byte address `addr`.
pub fn mapped_register(addr: u32) -> Option<Reg> {
    MAPPED.get((addr >> 1) as usize).copied().flatten()
}

pub fn is_alignment(kind: Kind) -> bool {
    matches!(Mn::from_kind(kind), Some(Mn::Nop | Mn::Nop16))
}

fn is_mn(kind: Kind, mn: Mn) -> bool {
    kind == mn.kind()
}

pub fn classify(insn: &Instruction, features: Features, ctx: &ContextStore) -> Classification {
    let mut out = Classification { flow: !features.contains(Features::STOP), ..Default::default() };
    let next = insn.end();
    let unknown = |reg: u16| ContextWrite { address: next, reg, value: None };

    let slots = insn.operand_count();
    let accesses = (0..slots)
        .filter(|&s| features.uses(s))
        .map(|s| (s, true))
        .chain((0..slots).filter(|&s| features.changes(s)).map(|s| (s, false)));

    for (slot, read) in accesses {
        let op = &insn.operands[slot];
        let operand = slot as u8;
        match op.value {
            OperandValue::Register { id } if !read && is_page_reg(id) => out.context_writes.push(unknown(id)),
            OperandValue::CodeTarget { address, .. } => {
                let kind = if is_mn(insn.kind, Mn::Rptb) || is_mn(insn.kind, Mn::Rptblocal) {
                    XrefKind::Info
                } else if features.contains(Features::CALL) {
                    XrefKind::Call
                } else {
                    XrefKind::Jump
                };
                out.xrefs.push(Xref { from: insn.address, to: address, kind, operand });
            }
            OperandValue::DirectMemory { form, .. } if !form.is_io() => {
                let Some(to) = data_address(insn, op, ctx) else { continue };
                let kind = if read { XrefKind::Read } else { XrefKind::Write };
                out.xrefs.push(Xref { from: insn.address, to, kind, operand });
                if !read {
                    if let Some(reg) = mapped_register(to).filter(|r| is_page_reg(r.id())) {
                        out.context_writes.push(unknown(reg.id()));
                    }
                }
            }
            _ => {}
        }
    }

    let (op1, op2) = (&insn.operands[0], &insn.operands[1]);
    if is_mn(insn.kind, Mn::Bclr1) || is_mn(insn.kind, Mn::Bset1) {
        if let Some(reg) = op1.register().filter(|&r| r == Reg::CPL.id() || r == Reg::ARMS.id()) {
            let value = u32::from(is_mn(insn.kind, Mn::Bset1));
            out.context_writes.push(ContextWrite { address: next, reg, value: Some(value) });
        }
    }
    if is_mn(insn.kind, Mn::Mov2) {
        if let (Some(k), Some(reg)) = (op1.immediate(), op2.register()) {
            let mask = match reg {
                r if r == Reg::DP.id() => Some(0xFFFF),
                r if r == Reg::DPH.id() => Some(0x7F),
                r if r == Reg::PDP.id() => Some(0x1FF),
                _ => None,
            };
            if let Some(mask) = mask {
                out.context_writes.push(ContextWrite { address: next, reg, value: Some(k as u32 & mask) });
            }
        }
    }

    out.stack_delta = stack_delta(insn);
    trace!(address = insn.address, xrefs = out.xrefs.len(), flow = out.flow, "classified");
    out
}

fn stack_delta(insn: &Instruction) -> Option<i32> {
    let dbl = insn.operands[0].operators.contains(Operators::DBL);
    let mn = Mn::from_kind(insn.kind)?;
    Some(match mn {
        Mn::Pop1 => if dbl { 4 } else { 2 },
        Mn::Pop2 => 4,
        Mn::Psh1 => if dbl { -4 } else { -2 },
        Mn::Psh2 => -4,
        Mn::Popboth | Mn::Ret => 2,
        Mn::Pshboth => -2,
        Mn::Reti => 6,
        Mn::Aadd if insn.operands[1].register() == Some(Reg::SP.id()) => {
            2 * insn.operands[0].immediate()? as i32
        }
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operand::{DataWidth, MemForm};
    use pretty_assertions::assert_eq;

    fn insn(mn: Mn, ops: &[Operand]) -> Instruction {
        let mut i = Instruction::new(0x200);
        i.byte_length = 2;
        i.kind = mn.kind();
        for (slot, op) in ops.iter().enumerate() {
            i.operands[slot] = op.clone();
        }
        i
    }

    #[test]
    fn mapped_register_table_edges() {
        assert_eq!(mapped_register(0), Some(Reg::IER0));
        assert_eq!(mapped_register(0x2E * 2), Some(Reg::DP));
        assert_eq!(mapped_register(0x4F * 2), Some(Reg::CDPH));
        assert_eq!(mapped_register(0x05 * 2), None);
        assert_eq!(mapped_register(0x50 * 2), None);
    }

    #[test]
    fn dma_operands_resolve_through_dp() {
        let ctx = ContextStore::new().with_default(Reg::DP.id(), 0x100).with_default(Reg::DPH.id(), 1);
        let value = OperandValue::DirectMemory {
            address: 0x10,
            high: Some(Reg::DPH.id()),
            page: Some(Reg::DP.id()),
            form: MemForm::Dma,
        };
        let i = insn(Mn::Mov2, &[Operand::new(value, DataWidth::Word), Operand::reg(Reg::AC0.id())]);
        assert_eq!(data_address(&i, &i.operands[0], &ctx), Some(((1 << 16) | 0x110) << 1));
        assert_eq!(data_address(&i, &i.operands[0], &ContextStore::new()), None);
    }

    #[test]
    fn pops_and_stack_adjustments() {
        let mut dbl = Operand::reg(Reg::AC0.id());
        dbl.operators = Operators::DBL;
        assert_eq!(stack_delta(&insn(Mn::Pop1, &[dbl])), Some(4));
        assert_eq!(stack_delta(&insn(Mn::Psh1, &[Operand::reg(Reg::T0.id())])), Some(-2));
        let aadd = insn(Mn::Aadd, &[Operand::imm(-3, true, DataWidth::Byte), Operand::reg(Reg::SP.id())]);
        assert_eq!(stack_delta(&aadd), Some(-6));
        assert_eq!(stack_delta(&insn(Mn::Nop, &[])), None);
    }
}
