//! Assembler-syntax rendering of decoded C55x instructions.

use std::collections::HashMap;
use std::fmt::Write as _;

use crate::context::ContextStore;
use crate::emu::{data_address, io_address, mapped_register};
use crate::instruction::{AuxFlags, Instruction};
use crate::instructions::lookup;
use crate::isa::c55x::{regs, C55xConfig, Reg, MNEMONICS};
use crate::operand::{
    AddrMode, Direction, MemForm, Operand, OperandValue, Operators, RelOp, RelRhs, Shift, ShiftBy, Suffix,
};

const OPERATOR_TEXT: [(Operators, &str); 13] = [
    (Operators::T3, "T3="),
    (Operators::NOT, "!"),
    (Operators::UNS, "uns("),
    (Operators::DBL, "dbl("),
    (Operators::RND, "rnd("),
    (Operators::PAIR, "pair("),
    (Operators::LO, "lo("),
    (Operators::HI, "hi("),
    (Operators::LB, "low_byte("),
    (Operators::HB, "high_byte("),
    (Operators::SAT, "saturate("),
    (Operators::DUAL, "dual("),
    (Operators::PORT, "port("),
];

/// Small magnitudes in decimal, everything else in hex.
pub fn number(v: i64) -> String {
    match v {
        -9..=9 => v.to_string(),
        v if v < 0 => format!("-{:#x}", v.unsigned_abs()),
        v => format!("{v:#x}"),
    }
}

fn reg_name(id: u16) -> &'static str {
    regs::name(id).unwrap_or("?")
}

pub struct Renderer<'a> {
    cfg: &'a C55xConfig,
    ctx: &'a ContextStore,
    labels: Option<&'a HashMap<u32, String>>,
}

impl<'a> Renderer<'a> {
    pub fn new(cfg: &'a C55xConfig, ctx: &'a ContextStore) -> Self {
        Self { cfg, ctx, labels: None }
    }

    /// Code targets with a label render by name.
    pub fn with_labels(mut self, labels: &'a HashMap<u32, String>) -> Self {
        self.labels = Some(labels);
        self
    }

    pub fn render(&self, insn: &Instruction) -> String {
        let Some(mn) = lookup(MNEMONICS, insn.kind) else {
            return format!(".kind {}", insn.kind.0);
        };
        let mut s = String::new();
        if insn.flags.contains(AuxFlags::USER_PARALLEL) {
            s.push_str("|| ");
        }
        s.push_str(mn.name);
        if insn.flags.contains(AuxFlags::LR) {
            s.push_str(".lr");
        } else if insn.flags.contains(AuxFlags::CR) {
            s.push_str(".cr");
        }

        let split = insn.split().map(usize::from);
        for (i, op) in insn.ops().iter().enumerate() {
            if i == 0 {
                s.push(' ');
            } else if Some(i) == split {
                let _ = write!(s, "\n:: {} ", mn.second.unwrap_or("?"));
            } else {
                s.push_str(", ");
            }
            self.operand(&mut s, insn, op);
        }
        s
    }

    fn operand(&self, s: &mut String, insn: &Instruction, op: &Operand) {
        match &op.value {
            OperandValue::None => {}
            OperandValue::Register { id } => self.wrapped(s, op, |s| s.push_str(reg_name(*id))),
            OperandValue::IndirectMemory { base, mode } => self.wrapped(s, op, |s| indirect(s, *base, *mode)),
            OperandValue::DirectMemory { .. } => self.wrapped(s, op, |s| self.direct(s, insn, op)),
            OperandValue::Immediate { value, dma, .. } => {
                s.push(if *dma { '@' } else { '#' });
                s.push_str(&number(*value));
                if let Some(suffix) = &op.suffix {
                    write_suffix(s, suffix);
                }
            }
            OperandValue::CodeTarget { address, .. } => match self.labels.and_then(|l| l.get(address)) {
                Some(name) => s.push_str(name),
                None => {
                    let _ = write!(s, "{address:#x}");
                }
            },
            OperandValue::Condition { code, reg } => condition(s, *code, *reg),
            OperandValue::Shift(shift) => {
                let n = match shift.by {
                    ShiftBy::Imm(n) if shift.dir == Direction::Right => -n,
                    ShiftBy::Imm(n) => n,
                    ShiftBy::Reg(_) => 0,
                };
                let _ = write!(s, "#{n}");
            }
            OperandValue::Relational { reg, op, rhs } => {
                let rel = match op {
                    RelOp::Eq => " == ",
                    RelOp::Lt => " < ",
                    RelOp::Ge => " >= ",
                    RelOp::Ne => " != ",
                };
                s.push_str(reg_name(*reg));
                s.push_str(rel);
                match rhs {
                    RelRhs::Reg(r) => s.push_str(reg_name(*r)),
                    RelRhs::Imm(k) => {
                        s.push('#');
                        s.push_str(&number(i64::from(*k)));
                    }
                }
            }
            OperandValue::RegisterList { mask } => {
                let names: Vec<_> = (0u32..32).filter(|&b| *mask & (1 << b) != 0).map(|b| reg_name(b as u16)).collect();
                let _ = write!(s, "{{{}}}", names.join(", "));
            }
            OperandValue::RawText { bytes } => s.push_str(&String::from_utf8_lossy(bytes)),
        }
    }

    /// Operators open before `body`; inside shifts render before the brackets close.
    fn wrapped(&self, s: &mut String, op: &Operand, body: impl FnOnce(&mut String)) {
        let mut closes = 0;
        for (flag, text) in OPERATOR_TEXT {
            if op.operators.contains(flag) {
                s.push_str(text);
                if text.ends_with('(') {
                    closes += 1;
                }
            }
        }
        body(s);
        let outside = matches!(op.suffix, Some(Suffix::Shift { outside: true, .. }));
        if let Some(suffix) = op.suffix.as_ref().filter(|_| !outside) {
            write_suffix(s, suffix);
        }
        s.extend(std::iter::repeat(')').take(closes));
        if let Some(suffix) = op.suffix.as_ref().filter(|_| outside) {
            write_suffix(s, suffix);
        }
    }

    fn direct(&self, s: &mut String, insn: &Instruction, op: &Operand) {
        let OperandValue::DirectMemory { address, form, .. } = op.value else {
            return;
        };
        let mapped = if self.cfg.mapped_registers && !form.is_io() {
            data_address(insn, op, self.ctx).and_then(mapped_register)
        } else {
            None
        };

        let (open, close) = match form {
            MemForm::Plain => ("", ""),
            MemForm::Dma if mapped.is_some() => ("", ""),
            MemForm::Dma => ("@", ""),
            MemForm::Abs16 => ("*abs16(#", ")"),
            MemForm::Ptr => ("*(#", ")"),
            MemForm::Mmap => ("mmap(@", ")"),
            MemForm::Port => ("port(#", ")"),
            MemForm::PortDma => ("port(@", ")"),
        };
        s.push_str(open);
        match (mapped, form.is_io()) {
            (Some(reg), _) => s.push_str(reg_name(reg.id())),
            (None, true) => {
                let at = io_address(insn, op, self.ctx).unwrap_or(address);
                s.push_str(&number(i64::from(at)));
            }
            (None, false) => s.push_str(&number(i64::from(address))),
        }
        s.push_str(close);
    }
}

fn indirect(s: &mut String, base: u16, mode: AddrMode) {
    let r = reg_name(base);
    let _ = match mode {
        AddrMode::Plain => write!(s, "*{r}"),
        AddrMode::PostInc => write!(s, "*{r}+"),
        AddrMode::PostDec => write!(s, "*{r}-"),
        AddrMode::PreInc => write!(s, "*+{r}"),
        AddrMode::PreDec => write!(s, "*-{r}"),
        AddrMode::PostAdd(t) => write!(s, "*({r}+{})", reg_name(t)),
        AddrMode::PostSub(t) => write!(s, "*({r}-{})", reg_name(t)),
        AddrMode::Indexed(t) => write!(s, "*{r}({})", reg_name(t)),
        AddrMode::Offset(k) => write!(s, "*{r}(#{})", number(i64::from(k))),
        AddrMode::PreOffset(k) => write!(s, "*+{r}(#{})", number(i64::from(k))),
        AddrMode::ShortOffset(k) => write!(s, "*{r}(short(#{k}))"),
        AddrMode::PostAddReverse(_) => write!(s, "*({r}+T0B)"),
        AddrMode::PostSubReverse(_) => write!(s, "*({r}-T0B)"),
    };
}

fn write_suffix(s: &mut String, suffix: &Suffix) {
    let _ = match *suffix {
        Suffix::Shift { shift: Shift { dir, by }, .. } => {
            let arrows = if dir == Direction::Left { "<<" } else { ">>" };
            match by {
                ShiftBy::Imm(n) => write!(s, " {arrows} #{n}"),
                ShiftBy::Reg(r) => write!(s, " {arrows} {}", reg_name(r)),
            }
        }
        Suffix::Equals(n) => write!(s, " == #{n}"),
        Suffix::NotEquals(n) => write!(s, " != #{n}"),
    };
}

fn condition(s: &mut String, code: u8, reg: Option<u16>) {
    let r = reg.map_or("?", reg_name);
    let (tc1, tc2, carry) = (reg_name(Reg::TC1.id()), reg_name(Reg::TC2.id()), reg_name(Reg::CARRY.id()));
    let _ = match code {
        0x00 => write!(s, "{r} == #0"),
        0x10 => write!(s, "{r} != #0"),
        0x20 => write!(s, "{r} < #0"),
        0x30 => write!(s, "{r} <= #0"),
        0x40 => write!(s, "{r} > #0"),
        0x50 => write!(s, "{r} >= #0"),
        0x60 => write!(s, "overflow({r})"),
        0x70 => write!(s, "!overflow({r})"),
        0x64 => write!(s, "{tc1}"),
        0x65 => write!(s, "{tc2}"),
        0x66 => write!(s, "{carry}"),
        0x74 => write!(s, "!{tc1}"),
        0x75 => write!(s, "!{tc2}"),
        0x76 => write!(s, "!{carry}"),
        0x68..=0x6B | 0x78..=0x7F => {
            let op = match code & 0xFC {
                0x68 => "&",
                0x78 => "|",
                _ => "^",
            };
            let not1 = if code & 2 != 0 { "!" } else { "" };
            let not2 = if code & 1 != 0 { "!" } else { "" };
            write!(s, "{not1}{tc1} {op} {not2}{tc2}")
        }
        _ => write!(s, "cond({code:#x})"),
    };
}

/// Renders with no labels.
pub fn render(insn: &Instruction, cfg: &C55xConfig, ctx: &ContextStore) -> String {
    Renderer::new(cfg, ctx).render(insn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operand::DataWidth;
    use pretty_assertions::assert_eq;

    #[test]
    fn numbers_switch_to_hex_at_ten() {
        assert_eq!(number(9), "9");
        assert_eq!(number(10), "0xa");
        assert_eq!(number(-16), "-0x10");
    }

    #[test]
    fn conditions_cover_flag_combinations() {
        let mut s = String::new();
        condition(&mut s, 0x69, None);
        assert_eq!(s, "TC1 & !TC2");
        s.clear();
        condition(&mut s, 0x7A, None);
        assert_eq!(s, "!TC1 | TC2");
        s.clear();
        condition(&mut s, 0x7F, None);
        assert_eq!(s, "!TC1 ^ !TC2");
        s.clear();
        condition(&mut s, 0x30, Some(Reg::AC2.id()));
        assert_eq!(s, "AC2 <= #0");
    }

    #[test]
    fn operators_close_around_inside_shifts() {
        let cfg = C55xConfig::default();
        let ctx = ContextStore::new();
        let r = Renderer::new(&cfg, &ctx);
        let mut op = Operand::reg(Reg::AC1.id());
        op.operators = Operators::NOT | Operators::SAT | Operators::RND;
        op.suffix = Some(Suffix::Shift { shift: Shift { dir: Direction::Left, by: ShiftBy::Imm(3) }, outside: true });
        let mut s = String::new();
        r.operand(&mut s, &Instruction::new(0), &op);
        assert_eq!(s, "!rnd(saturate(AC1)) << #3");

        op.operators = Operators::DBL;
        op.value = OperandValue::IndirectMemory { base: Reg::AR2.id(), mode: AddrMode::Offset(-20) };
        op.width = DataWidth::Dword;
        op.suffix = None;
        s.clear();
        r.operand(&mut s, &Instruction::new(0), &op);
        assert_eq!(s, "dbl(*AR2(#-0x14))");
    }
}
