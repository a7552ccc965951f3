//! Operand extractors named by opcode-table rows.

use crate::alias::SuffixRule;
use crate::instruction::{AuxFlags, Kind};
use crate::operand::{
    AddrMode, DataWidth, Direction, MemForm, Operand, OperandValue, Operators, RelOp, RelRhs, Shift,
    ShiftBy, Suffix,
};
use crate::table::{ExtractCx, ExtractError, Extractor};

use super::regs::Reg;

/// Mnemonic renames requested by a single decoded bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rename {
    RoundBoth,
    Wide40Both,
    RoundSecond,
    Wide40Second,
    Round,
    Wide40,
    RoundFirst,
    Unsigned,
    Pair,
    Quad,
}

impl Rename {
    pub const fn rule(self) -> SuffixRule {
        match self {
            Self::RoundBoth => SuffixRule::new("r", true, true, true),
            Self::Wide40Both => SuffixRule::new("40", true, true, true),
            Self::RoundSecond => SuffixRule::new("r", true, false, true),
            Self::Wide40Second => SuffixRule::new("40", true, false, true),
            Self::Round => SuffixRule::new("r", false, true, false),
            Self::Wide40 => SuffixRule::new("40", false, true, false),
            Self::RoundFirst => SuffixRule::new("r", true, true, false),
            Self::Unsigned => SuffixRule::new("u", false, true, false),
            Self::Pair => SuffixRule::new("p", false, true, false),
            Self::Quad => SuffixRule::new("4", false, true, false),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    // immediates
    K8,
    K16,
    SK8,
    SK16,
    NegK4,
    One,
    MinusOne,
    // registers
    Src,
    OptSrc,
    Tx,
    TCx,
    TRNx,
    StX,
    XReg,
    Bit,
    Fixed(Reg),
    // memory
    Xmem,
    Cmem,
    Smem,
    Lmem,
    ArnMod,
    Baddr,
    D16,
    // modifiers of the previous operand
    Op(Operators),
    ShlW,
    ShlWOut,
    ShlK,
    ShlTx,
    ShlT2,
    Shl16,
    Shr,
    EqK16,
    Neq0,
    Relop,
    RelopReg,
    RelopK8,
    // instruction-level
    Rename(Rename),
    UserParallel,
    Split,
    ShiftW,
    Swap,
    Cond,
    // code addresses
    L4,
    Pmad,
    L7,
    L8,
    L16,
    P24,
}

/// Sign-extends `v` within `mask` (all ones, sign bit on top).
fn signed(v: u64, mask: u64) -> i64 {
    let bits = mask >> 1;
    let sign = bits + 1;
    if v & sign != 0 { (v & bits) as i64 - sign as i64 } else { (v & mask) as i64 }
}

fn reg(r: Reg, n: u64) -> Operand {
    Operand::reg(r.offset(n))
}

fn indirect(base: u16, mode: AddrMode, width: DataWidth) -> Operand {
    Operand::new(OperandValue::IndirectMemory { base, mode }, width)
}

fn direct(address: u64, high: Option<Reg>, page: Option<Reg>, form: MemForm, width: DataWidth) -> Operand {
    let value = OperandValue::DirectMemory {
        address: address as u32,
        high: high.map(Reg::id),
        page: page.map(Reg::id),
        form,
    };
    Operand::new(value, width)
}

const XMEM_MODES: [AddrMode; 8] = [
    AddrMode::Plain,
    AddrMode::PostInc,
    AddrMode::PostDec,
    AddrMode::PostAdd(Reg::T0.id()),
    AddrMode::PostAdd(Reg::T1.id()),
    AddrMode::PostSub(Reg::T0.id()),
    AddrMode::PostSub(Reg::T1.id()),
    AddrMode::Indexed(Reg::T0.id()),
];

const XREGS: [Reg; 16] = [
    Reg::AC0, Reg::AC1, Reg::AC2, Reg::AC3, Reg::XSP, Reg::XSSP, Reg::XDP, Reg::XCDP,
    Reg::XAR0, Reg::XAR1, Reg::XAR2, Reg::XAR3, Reg::XAR4, Reg::XAR5, Reg::XAR6, Reg::XAR7,
];

/// Decodes an `AAAAAAAI` single-memory field, reading trailing address bytes as needed.
fn mem(v: u64, width: DataWidth, arn_mod: bool, cx: &mut ExtractCx<'_, '_>) -> Result<(), ExtractError> {
    let cdp = Reg::CDP.id();
    let op = if v & 1 == 0 {
        if cx.context(Reg::CPL.id()).unwrap_or(0) == 0 {
            direct(v >> 1, Some(Reg::DPH), Some(Reg::DP), MemForm::Dma, width)
        } else {
            indirect(Reg::SP.id(), AddrMode::Offset((v >> 1) as i32), width)
        }
    } else if v & 0x1F == 0x11 {
        match v >> 5 {
            0 => direct(cx.trailing(2)?, Some(Reg::DPH), None, MemForm::Abs16, width),
            1 => direct(cx.trailing(3)?, None, None, MemForm::Ptr, width),
            2 => direct(cx.trailing(2)?, None, None, MemForm::Port, width),
            3 => indirect(cdp, AddrMode::Plain, width),
            4 => indirect(cdp, AddrMode::PostInc, width),
            5 => indirect(cdp, AddrMode::PostDec, width),
            6 => indirect(cdp, AddrMode::Offset(signed(cx.trailing(2)?, 0xFFFF) as i32), width),
            _ => indirect(cdp, AddrMode::PreOffset(signed(cx.trailing(2)?, 0xFFFF) as i32), width),
        }
    } else {
        let base = Reg::AR0.offset(v >> 5);
        let t0 = Reg::T0.id();
        let t1 = Reg::T1.id();
        let mode = if v & 0x11 == 0x01 {
            match (v >> 1) & 0xF {
                0 => AddrMode::Plain,
                1 => AddrMode::PostInc,
                2 => AddrMode::PostDec,
                3 => AddrMode::PostAdd(t0),
                4 => AddrMode::PostSub(t0),
                5 => AddrMode::Indexed(t0),
                6 => AddrMode::Offset(signed(cx.trailing(2)?, 0xFFFF) as i32),
                _ => AddrMode::PreOffset(signed(cx.trailing(2)?, 0xFFFF) as i32),
            }
        } else {
            let lbits = (v >> 1) & 0x7;
            if arn_mod || cx.context(Reg::ARMS.id()).unwrap_or(0) == 0 {
                match lbits {
                    1 => AddrMode::PostAdd(t1),
                    2 => AddrMode::PostSub(t1),
                    3 => AddrMode::Indexed(t1),
                    4 => AddrMode::PreInc,
                    5 => AddrMode::PreDec,
                    6 => AddrMode::PostAddReverse(t0),
                    _ => AddrMode::PostSubReverse(t0),
                }
            } else {
                AddrMode::ShortOffset(lbits as u8)
            }
        };
        indirect(base, mode, width)
    };
    let slot = cx.push(op)?;
    cx.set_mem_operand(slot);
    Ok(())
}

/// Condition field `CCC CCCC`; reserved encodings leave the null kind.
fn cond(v: u64, cx: &mut ExtractCx<'_, '_>) -> Result<(), ExtractError> {
    let code = v as u8;
    let on = |reg_field: u64, code: u8| Operand::new(
        OperandValue::Condition { code, reg: Some(Reg::AC0.offset(reg_field)) },
        DataWidth::Unspecified,
    );
    let flag = |code: u8| Operand::new(OperandValue::Condition { code, reg: None }, DataWidth::Unspecified);

    let op = match v >> 2 {
        0x00..=0x17 => on(v & 0xF, code & 0x70),
        0x18 | 0x1C => on(v & 0x3, code & 0x7C),
        0x19 | 0x1A | 0x1D..=0x1F if v != 0x67 && v != 0x77 => flag(code),
        _ => {
            cx.set_kind(Kind::NULL);
            return Ok(());
        }
    };
    let slot = cx.push(op)?;
    if matches!(cx.operand(slot).map(|o| &o.value), Some(OperandValue::Condition { reg: Some(_), .. })) {
        cx.remember_optional(slot);
    }
    Ok(())
}

/// `swap()` register-pair selector.
fn swap(v: u64, cx: &mut ExtractCx<'_, '_>) -> Result<(), ExtractError> {
    use Reg::*;
    let (a, b, rename) = match v {
        0x00 => (AC0, AC2, None),
        0x01 => (AC1, AC3, None),
        0x04 => (T0, T2, None),
        0x05 => (T1, T3, None),
        0x08 => (AR0, AR2, None),
        0x09 => (AR1, AR3, None),
        0x0C => (AR4, T0, None),
        0x0D => (AR5, T1, None),
        0x0E => (AR6, T2, None),
        0x0F => (AR7, T3, None),
        0x10 => (AC0, AC2, Some(Rename::Pair)),
        0x14 => (T0, T2, Some(Rename::Pair)),
        0x18 => (AR0, AR2, Some(Rename::Pair)),
        0x1C => (AR4, T0, Some(Rename::Pair)),
        0x1E => (AR6, T2, Some(Rename::Pair)),
        0x2C => (AR4, T0, Some(Rename::Quad)),
        0x38 => (AR0, AR1, None),
        _ => {
            cx.set_kind(Kind::NULL);
            return Ok(());
        }
    };
    if let Some(r) = rename {
        cx.add_suffix(&r.rule())?;
    }
    cx.put(0, reg(a, 0))?;
    cx.put(1, reg(b, 0))
}

fn set_suffix(cx: &mut ExtractCx<'_, '_>, suffix: Suffix) {
    if let Some(op) = cx.last_mut() {
        op.suffix = Some(suffix);
    }
}

fn shift_imm(amount: i64, outside: bool) -> Suffix {
    let (dir, n) = if amount < 0 { (Direction::Right, -amount) } else { (Direction::Left, amount) };
    Suffix::Shift { shift: Shift { dir, by: ShiftBy::Imm(n as i32) }, outside }
}

fn shift_reg(reg: u16) -> Suffix {
    Suffix::Shift { shift: Shift { dir: Direction::Left, by: ShiftBy::Reg(reg) }, outside: false }
}

fn set_rhs(cx: &mut ExtractCx<'_, '_>, new: RelRhs) {
    if let Some(Operand { value: OperandValue::Relational { rhs, .. }, .. }) = cx.last_mut() {
        *rhs = new;
    }
}

impl Extractor for Field {
    fn extract(self, v: u64, cx: &mut ExtractCx<'_, '_>) -> Result<(), ExtractError> {
        use DataWidth::*;
        match self {
            Field::K8 => { cx.push(Operand::imm(v as i64, false, Byte))?; }
            Field::K16 => { cx.push(Operand::imm(v as i64, false, Word))?; }
            Field::SK8 => { cx.push(Operand::imm(signed(v, 0xFF), true, Byte))?; }
            Field::SK16 => { cx.push(Operand::imm(signed(v, 0xFFFF), true, Word))?; }
            Field::NegK4 => { cx.push(Operand::imm(-(v as i64), true, Byte))?; }
            Field::One => { cx.push(Operand::imm(1, false, Byte))?; }
            Field::MinusOne => { cx.push(Operand::imm(-1, true, Byte))?; }

            Field::Src => {
                let slot = cx.push(reg(Reg::AC0, v))?;
                cx.remember_optional(slot);
            }
            Field::OptSrc => cx.push_optional(reg(Reg::AC0, v))?,
            Field::Tx => { cx.push(reg(Reg::T0, v))?; }
            Field::TCx => { cx.push(reg(Reg::TC1, v))?; }
            Field::TRNx => { cx.push(reg(Reg::TRN0, v))?; }
            Field::StX => { cx.push(reg(Reg::ST0_55, v))?; }
            Field::Fixed(r) => { cx.push(reg(r, 0))?; }
            Field::XReg => {
                let r = XREGS[(v & 0xF) as usize];
                cx.push(Operand::new(OperandValue::Register { id: r.id() }, Dword))?;
            }
            Field::Bit => {
                let r = if v & 1 != 0 { Reg::TC2 } else { Reg::CARRY };
                cx.push(Operand::new(OperandValue::Register { id: r.id() }, Byte))?;
            }

            Field::Xmem => {
                let mode = XMEM_MODES[(v & 7) as usize];
                cx.push(indirect(Reg::AR0.offset(v >> 3), mode, Word))?;
            }
            Field::Cmem => {
                let mode = XMEM_MODES[(v & 3) as usize];
                cx.push(indirect(Reg::CDP.id(), mode, Word))?;
            }
            Field::Smem => mem(v, Word, false, cx)?,
            Field::Lmem => mem(v, Dword, false, cx)?,
            Field::ArnMod => mem(v, Word, true, cx)?,
            Field::Baddr if v & 1 == 0 => {
                let value = OperandValue::Immediate { value: (v >> 1) as i64, signed: false, dma: true };
                cx.push(Operand::new(value, Byte))?;
            }
            Field::Baddr => mem(v, Byte, false, cx)?,
            Field::D16 => { cx.push(direct(v, None, None, MemForm::Plain, Word))?; }

            Field::Op(operators) => {
                if v & 1 != 0 {
                    if let Some(op) = cx.last_mut() {
                        op.operators |= operators;
                    }
                }
            }
            Field::ShlW => set_suffix(cx, shift_imm(signed(v, 0x3F), false)),
            Field::ShlWOut => set_suffix(cx, shift_imm(signed(v, 0x3F), true)),
            Field::ShlK => set_suffix(cx, shift_imm(v as i64, false)),
            Field::ShlTx => set_suffix(cx, shift_reg(Reg::T0.offset(v))),
            Field::ShlT2 => set_suffix(cx, shift_reg(Reg::T2.id())),
            Field::Shl16 => set_suffix(cx, shift_imm(16, false)),
            Field::Shr => {
                let shift = Shift { dir: Direction::Right, by: ShiftBy::Imm(v as i32) };
                set_suffix(cx, Suffix::Shift { shift, outside: false });
            }
            Field::EqK16 => set_suffix(cx, Suffix::Equals(signed(v, 0xFFFF) as i32)),
            Field::Neq0 => set_suffix(cx, Suffix::NotEquals(0)),
            Field::Relop => {
                let op = match v & 3 {
                    0 => RelOp::Eq,
                    1 => RelOp::Lt,
                    2 => RelOp::Ge,
                    _ => RelOp::Ne,
                };
                if let Some(last) = cx.last_mut() {
                    if let OperandValue::Register { id } = last.value {
                        last.value = OperandValue::Relational { reg: id, op, rhs: RelRhs::Imm(0) };
                    }
                }
            }
            Field::RelopReg => {
                set_rhs(cx, RelRhs::Reg(Reg::AC0.offset(v)));
                if let Some(slot) = cx.last_slot() {
                    cx.remember_optional(slot);
                }
            }
            Field::RelopK8 => set_rhs(cx, RelRhs::Imm(signed(v, 0xFF) as i32)),

            Field::Rename(r) => {
                if v & 1 != 0 {
                    cx.add_suffix(&r.rule())?;
                }
            }
            Field::UserParallel => cx.set_flags(AuxFlags::USER_PARALLEL),
            Field::Split => cx.mark_split(),
            Field::ShiftW => {
                let amount = signed(v, 0x3F);
                let (dir, n) = if amount < 0 { (Direction::Right, -amount) } else { (Direction::Left, amount) };
                let value = OperandValue::Shift(Shift { dir, by: ShiftBy::Imm(n as i32) });
                cx.push(Operand::new(value, Unspecified))?;
            }
            Field::Swap => swap(v, cx)?,
            Field::Cond => cond(v, cx)?,

            Field::L4 | Field::Pmad => { cx.push(cx.relative(v as i64))?; }
            Field::L7 => { cx.push(cx.relative(signed(v, 0x7F)))?; }
            Field::L8 => { cx.push(cx.relative(signed(v, 0xFF)))?; }
            Field::L16 => { cx.push(cx.relative(signed(v, 0xFFFF)))?; }
            Field::P24 => {
                let address = cx.trailing(3)? as u32;
                let value = OperandValue::CodeTarget { address, displacement: None };
                cx.push(Operand::new(value, Code))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_extension_follows_the_mask() {
        assert_eq!(signed(0x3F, 0x3F), -1);
        assert_eq!(signed(0x20, 0x3F), -32);
        assert_eq!(signed(0x1F, 0x3F), 31);
        assert_eq!(signed(0x80, 0xFF), -128);
        assert_eq!(signed(0x7FFF, 0xFFFF), 32767);
    }

    #[test]
    fn rename_rules() {
        assert_eq!(Rename::Wide40Second.rule(), SuffixRule::new("40", true, false, true));
        assert_eq!(Rename::Unsigned.rule().chars, "u");
    }
}
