//! `bclr`/`bset` of a named status-register bit.

use crate::instruction::Instruction;
use crate::operand::{Operand, OperandValue};

use super::mnemonics::Mn;
use super::regs::Reg::{self, *};

type BitNames = [Option<Reg>; 16];

static ST0: BitNames = [
    None, None, None, None, None, None, None, None, None,
    Some(ACOV1), Some(ACOV0), Some(CARRY), Some(TC2), Some(TC1), Some(ACOV3), Some(ACOV2),
];

static ST1: BitNames = [
    None, None, None, None, None,
    Some(C54CM), Some(FRCT), Some(C16), Some(SXMD), Some(SATD), Some(M40),
    Some(INTM), Some(HM), Some(XF), Some(CPL), Some(BRAF),
];

static ST2: BitNames = [
    Some(AR0LC), Some(AR1LC), Some(AR2LC), Some(AR3LC), Some(AR4LC), Some(AR5LC), Some(AR6LC), Some(AR7LC),
    Some(CDPLC), None, Some(RDM), Some(EALLOW), Some(DBGM), None, None, Some(ARMS),
];

static ST3: BitNames = [
    Some(SST), Some(SMUL), Some(CLKOFF), None, None, Some(SATA), Some(MPNMC), Some(CBERR),
    None, None, None, None, Some(HINT), Some(CACLR), Some(CAEN), Some(CAFRZ),
];

fn names(st: u16) -> Option<&'static BitNames> {
    [(ST0_55, &ST0), (ST1_55, &ST1), (ST2_55, &ST2), (ST3_55, &ST3)]
        .into_iter()
        .find(|(r, _)| r.id() == st)
        .map(|(_, n)| n)
}

/// Rewrites `bclr k, STx` / `bset k, STx` into the one-operand form naming the bit.
/// Bit numbers without a name are left alone.
pub fn name_status_bit(insn: &mut Instruction) {
    let one = match Mn::from_kind(insn.kind) {
        Some(Mn::Bclr2) => Mn::Bclr1,
        Some(Mn::Bset2) => Mn::Bset1,
        _ => return,
    };
    let (Some(bit), Some(st)) = (insn.operands[0].immediate(), insn.operands[1].register()) else {
        return;
    };
    let bit = usize::try_from(bit).ok();
    let Some(flag) = names(st).zip(bit).and_then(|(n, b)| n.get(b).copied().flatten()) else {
        return;
    };

    insn.kind = one.kind();
    let width = insn.operands[0].width;
    insn.operands[0] = Operand::new(OperandValue::Register { id: flag.id() }, width);
    insn.operands[1] = Operand::default();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operand::DataWidth;

    fn bclr(bit: i64, st: Reg) -> Instruction {
        let mut insn = Instruction::new(0);
        insn.kind = Mn::Bclr2.kind();
        insn.operands[0] = Operand::imm(bit, false, DataWidth::Byte);
        insn.operands[1] = Operand::reg(st.id());
        insn
    }

    #[test]
    fn named_bits_collapse_to_one_operand() {
        let mut insn = bclr(14, ST1_55);
        name_status_bit(&mut insn);
        assert_eq!(insn.kind, Mn::Bclr1.kind());
        assert_eq!(insn.operands[0].register(), Some(CPL.id()));
        assert_eq!(insn.operand_count(), 1);
    }

    #[test]
    fn reserved_bits_keep_the_two_operand_form() {
        let mut insn = bclr(3, ST0_55);
        let before = insn.clone();
        name_status_bit(&mut insn);
        assert_eq!(insn, before);
    }
}
