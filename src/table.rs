use thiserror::Error;
use tracing::{trace, warn};

use crate::alias::{resolve_suffix, AliasError, SuffixRule};
use crate::bytes::{ByteError, ByteSource};
use crate::error::DecodeError;
use crate::instruction::{AuxFlags, Instruction, Kind, MAX_OPERANDS};
use crate::instructions::Mnemonic;
use crate::operand::{DataWidth, Operand, OperandValue};

/// Where an operand's raw value lives inside the matched code word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMask {
    /// `(code & mask) >> trailing_zeros(mask)`; a zero mask yields 0.
    Bits(u64),
    /// Ignores the code and yields the constant.
    Imm(u64),
    /// Inverted single-bit field.
    Not(u64),
}

impl FieldMask {
    pub fn apply(self, code: u64) -> u64 {
        match self {
            Self::Bits(0) | Self::Not(0) => 0,
            Self::Bits(m) => (code & m) >> m.trailing_zeros(),
            Self::Imm(v) => v,
            Self::Not(m) => !((code & m) >> m.trailing_zeros()) & 1,
        }
    }
}

/// One row of an opcode table.
#[derive(Debug, Clone, Copy)]
pub struct OpcodePattern<F: 'static> {
    pub code: u64,
    pub mask: u64,
    /// Number of field units (bytes for 8-bit units).
    pub width: u8,
    pub kind: Kind,
    pub fields: &'static [(F, FieldMask)],
}

impl<F> OpcodePattern<F> {
    fn unit_matches(&self, n: u8, byte: u8, unit: u32) -> bool {
        let shift = (self.width - 1 - n) as u32 * unit;
        let umask = (1u64 << unit) - 1;
        let code = (self.code >> shift) & umask;
        let mask = (self.mask >> shift) & umask;
        (code & mask) == (byte as u64 & umask & mask)
    }
}

/// Width of the first pattern of at most four bytes matching the left-aligned `word`, or 0.
pub fn leading_width<F>(patterns: &[OpcodePattern<F>], word: u32) -> u8 {
    patterns
        .iter()
        .find(|p| p.width <= 4 && (p.mask & (word >> (8 * (4 - p.width as u32))) as u64) == p.code)
        .map_or(0, |p| p.width)
}

/// Services an extractor needs from the decoder that owns it.
pub trait Host {
    /// Address relative code targets are based on, counting a lockstep partner.
    fn next_ip(&self, address: u32, len: u8) -> u32;
    /// Addressing-mode context value at `address`, `None` when unknown.
    fn context(&self, address: u32, reg: u16) -> Option<u32>;
    fn code_address_mask(&self) -> u32 {
        u32::MAX
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("more than {MAX_OPERANDS} operands")]
    Overflow,
    #[error(transparent)]
    Alias(#[from] AliasError),
    #[error("trailing byte at {0:#08x} is unmapped")]
    Unmapped(u32),
    #[error("byte cache exhausted")]
    Exhausted,
}

impl From<ByteError> for ExtractError {
    fn from(e: ByteError) -> Self {
        match e {
            ByteError::Unmapped(addr) => Self::Unmapped(addr),
            ByteError::Exhausted => Self::Exhausted,
        }
    }
}

/// An operand-extraction operation named by a table row.
pub trait Extractor: Copy + std::fmt::Debug + 'static {
    fn extract(self, value: u64, cx: &mut ExtractCx<'_, '_>) -> Result<(), ExtractError>;
}

/// Instruction under construction plus everything extractors may consult.
pub struct ExtractCx<'a, 'm> {
    insn: Instruction,
    source: &'a mut ByteSource<'m>,
    mnemonics: &'a [Mnemonic],
    host: &'a dyn Host,
    optional: Option<usize>,
}

impl<'a, 'm> ExtractCx<'a, 'm> {
    pub fn address(&self) -> u32 {
        self.insn.address
    }

    pub fn kind(&self) -> Kind {
        self.insn.kind
    }

    pub fn set_kind(&mut self, kind: Kind) {
        self.insn.kind = kind;
    }

    pub fn byte_length(&self) -> u8 {
        self.insn.byte_length
    }

    /// Writes `op` to the next empty slot and returns its index.
    pub fn push(&mut self, op: Operand) -> Result<usize, ExtractError> {
        let slot = self.insn.operand_count();
        if slot >= MAX_OPERANDS { return Err(ExtractError::Overflow); }
        self.insn.operands[slot] = op;
        Ok(slot)
    }

    /// Overwrites a fixed slot regardless of what precedes it.
    pub fn put(&mut self, slot: usize, op: Operand) -> Result<(), ExtractError> {
        let dst = self.insn.operands.get_mut(slot).ok_or(ExtractError::Overflow)?;
        *dst = op;
        Ok(())
    }

    pub fn last_slot(&self) -> Option<usize> {
        self.insn.operand_count().checked_sub(1)
    }

    /// The operand written most recently, for refining extractors.
    pub fn last_mut(&mut self) -> Option<&mut Operand> {
        let slot = self.last_slot()?;
        Some(&mut self.insn.operands[slot])
    }

    pub fn operand(&self, slot: usize) -> Option<&Operand> {
        self.insn.operands.get(slot)
    }

    /// Marks `slot` as the operand a following optional operand is compared against.
    pub fn remember_optional(&mut self, slot: usize) {
        self.optional = Some(slot);
    }

    /// Appends an optional register operand unless it repeats the remembered one.
    /// Appending advances the kind to the long form.
    pub fn push_optional(&mut self, op: Operand) -> Result<(), ExtractError> {
        if let (Some(slot), Some(id)) = (self.optional, op.register()) {
            if self.insn.operands[slot].register() == Some(id) { return Ok(()); }
        }
        let slot = self.push(op)?;
        self.optional = None;
        self.insn.kind = Kind(self.insn.kind.0 + 1);
        trace!(slot, kind = self.insn.kind.0, "optional operand kept");
        Ok(())
    }

    pub fn add_suffix(&mut self, rule: &SuffixRule) -> Result<(), ExtractError> {
        self.insn.kind = resolve_suffix(self.mnemonics, self.insn.kind, rule)?;
        Ok(())
    }

    /// The second line of a two-line mnemonic starts after the operands written so far.
    pub fn mark_split(&mut self) {
        let n = self.insn.operand_count() as u8;
        self.insn.group_mut().split = Some(n);
    }

    pub fn set_flags(&mut self, flags: AuxFlags) {
        self.insn.flags |= flags;
    }

    pub fn set_mem_operand(&mut self, slot: usize) {
        self.insn.mem_operand = Some(slot as u8);
    }

    /// Reads `n` big-endian bytes right after the bytes consumed so far.
    pub fn trailing(&mut self, n: u8) -> Result<u64, ExtractError> {
        let mut v = 0u64;
        for _ in 0..n {
            let b = self.source.at(self.insn.byte_length as usize)?;
            v = (v << 8) | b as u64;
            self.insn.byte_length += 1;
        }
        Ok(v)
    }

    pub fn context(&self, reg: u16) -> Option<u32> {
        self.host.context(self.insn.address, reg)
    }

    /// Code target `displacement` away from the next instruction.
    pub fn relative(&self, displacement: i64) -> Operand {
        let next = self.host.next_ip(self.insn.address, self.insn.byte_length) as i64;
        let address = (next + displacement) as u32 & self.host.code_address_mask();
        let value = OperandValue::CodeTarget { address, displacement: Some(displacement as i32) };
        Operand::new(value, DataWidth::Code)
    }
}

/// An opcode table together with the mnemonic table its kinds index.
pub struct Engine<'a, F: 'static> {
    pub patterns: &'a [OpcodePattern<F>],
    pub mnemonics: &'a [Mnemonic],
    /// Field-unit width in bits, at most 8.
    pub unit_bits: u32,
}

impl<'a, F: Extractor> Engine<'a, F> {
    /// Tries every pattern in table order; the first full match is final.
    /// A match whose extractors leave the null kind is a reserved encoding.
    pub fn match_and_extract(
        &self,
        source: &mut ByteSource<'_>,
        host: &dyn Host,
    ) -> Result<Option<Instruction>, DecodeError> {
        let address = source.base();
        let unit = self.unit_bits;
        let umask = (1u64 << unit) - 1;
        let mut unmapped = false;

        'patterns: for (index, p) in self.patterns.iter().enumerate() {
            source.reset();
            let mut code = 0u64;
            for n in 0..p.width {
                let byte = match source.next() {
                    Ok(b) => b,
                    Err(ByteError::Unmapped(_)) => { unmapped = true; continue 'patterns; }
                    Err(ByteError::Exhausted) => continue 'patterns,
                };
                if !p.unit_matches(n, byte, unit) { continue 'patterns; }
                code = (code << unit) | (byte as u64 & umask);
            }
            trace!(address, index, code, "pattern matched");
            return self.extract(p, code, source, host);
        }

        if unmapped { Err(DecodeError::OutOfBounds { address }) } else { Ok(None) }
    }

    fn extract(
        &self,
        p: &OpcodePattern<F>,
        code: u64,
        source: &mut ByteSource<'_>,
        host: &dyn Host,
    ) -> Result<Option<Instruction>, DecodeError> {
        let address = source.base();
        let mut insn = Instruction::new(address);
        insn.kind = p.kind;
        insn.byte_length = p.width;
        let mut cx = ExtractCx { insn, source, mnemonics: self.mnemonics, host, optional: None };

        for &(field, mask) in p.fields {
            if let Err(e) = field.extract(mask.apply(code), &mut cx) {
                return Err(match e {
                    ExtractError::Unmapped(_) => DecodeError::OutOfBounds { address },
                    e => {
                        warn!(address, ?field, "extraction failed: {e}");
                        DecodeError::InternalInconsistency { address, detail: e.to_string() }
                    }
                });
            }
            if cx.insn.kind.is_null() {
                trace!(address, ?field, "reserved encoding");
                return Ok(None);
            }
        }
        Ok(Some(cx.insn))
    }
}
