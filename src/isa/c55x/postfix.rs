//! Qualifier bytes that follow an instruction and change how its memory operand is read.

use crate::instruction::{AuxFlags, Instruction};
use crate::operand::{AddrMode, MemForm, Operand, OperandValue, Operators};

use super::regs::Reg;

pub const MMAP: u8 = 0x98;
pub const PORT_READ: u8 = 0x99;
pub const PORT_WRITE: u8 = 0x9A;
pub const LOCAL_REPEAT: u8 = 0x9C;
pub const CIRCULAR_REPEAT: u8 = 0x9D;

/// Applies the qualifier `next` to `insn`; returns true when the byte became part of it.
pub fn apply(insn: &mut Instruction, next: u8) -> bool {
    let consumed = match next {
        MMAP => mem_operand(insn).is_some_and(to_mmap),
        PORT_READ | PORT_WRITE => mem_operand(insn).is_some_and(to_port),
        LOCAL_REPEAT => {
            insn.flags |= AuxFlags::LR;
            true
        }
        CIRCULAR_REPEAT => {
            insn.flags |= AuxFlags::CR;
            true
        }
        _ => false,
    };
    if consumed {
        insn.byte_length += 1;
    }
    consumed
}

fn mem_operand(insn: &mut Instruction) -> Option<&mut Operand> {
    let slot = insn.mem_operand? as usize;
    insn.operands.get_mut(slot)
}

/// Page-relative and stack-relative accesses become memory-mapped register accesses.
fn to_mmap(op: &mut Operand) -> bool {
    let data_page = (Some(Reg::DPH.id()), Some(Reg::DP.id()));
    match op.value {
        OperandValue::DirectMemory { address, high, page, form: MemForm::Dma } if (high, page) == data_page => {
            op.value = OperandValue::DirectMemory { address, high: None, page: None, form: MemForm::Mmap };
        }
        OperandValue::IndirectMemory { base, mode: AddrMode::Offset(k) } if base == Reg::SP.id() => {
            op.value = OperandValue::DirectMemory { address: k as u32, high: None, page: None, form: MemForm::Mmap };
        }
        _ => return false,
    }
    true
}

/// Data accesses become peripheral-port accesses.
fn to_port(op: &mut Operand) -> bool {
    match op.value {
        OperandValue::DirectMemory { address, form, .. } if !form.is_io() => {
            op.value = OperandValue::DirectMemory {
                address: address >> 1,
                high: None,
                page: Some(Reg::PDP.id()),
                form: MemForm::PortDma,
            };
        }
        OperandValue::Register { .. } | OperandValue::IndirectMemory { .. } => op.operators |= Operators::PORT,
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operand::DataWidth;

    fn with_mem(value: OperandValue) -> Instruction {
        let mut insn = Instruction::new(0x100);
        insn.byte_length = 2;
        insn.operands[0] = Operand::new(value, DataWidth::Word);
        insn.mem_operand = Some(0);
        insn
    }

    #[test]
    fn mmap_rewrites_stack_offsets() {
        let mut insn = with_mem(OperandValue::IndirectMemory { base: Reg::SP.id(), mode: AddrMode::Offset(6) });
        assert!(apply(&mut insn, MMAP));
        assert_eq!(insn.byte_length, 3);
        assert_eq!(
            insn.operands[0].value,
            OperandValue::DirectMemory { address: 6, high: None, page: None, form: MemForm::Mmap }
        );
    }

    #[test]
    fn mmap_leaves_pointer_forms_alone() {
        let mut insn = with_mem(OperandValue::IndirectMemory { base: Reg::AR1.id(), mode: AddrMode::Plain });
        assert!(!apply(&mut insn, MMAP));
        assert_eq!(insn.byte_length, 2);
    }

    #[test]
    fn port_marks_indirect_operands() {
        let mut insn = with_mem(OperandValue::IndirectMemory { base: Reg::AR2.id(), mode: AddrMode::PostInc });
        assert!(apply(&mut insn, PORT_READ));
        assert!(insn.operands[0].operators.contains(Operators::PORT));
    }

    #[test]
    fn repeat_qualifiers_need_no_memory_operand() {
        let mut insn = Instruction::new(0);
        insn.byte_length = 2;
        assert!(apply(&mut insn, CIRCULAR_REPEAT));
        assert_eq!(insn.flags, AuxFlags::CR);
        assert!(!apply(&mut insn, 0x20));
        assert_eq!(insn.byte_length, 3);
    }
}
