use tracing::{debug, trace};

use crate::bytes::ByteSource;
use crate::context::ContextStore;
use crate::error::DecodeError;
use crate::instruction::{AuxFlags, Instruction, Kind, Lockstep};
use crate::instructions::{lookup, Features, Mnemonic};
use crate::memory::Memory;
use crate::operand::{OperandValue, Role};
use crate::pairing::{PairingState, PairingUpdate};
use crate::table::{Engine, Extractor, Host, OpcodePattern};

/// An architecture: its tables plus the hooks the façade runs around matching.
pub trait Isa {
    type Field: Extractor;

    fn patterns(&self) -> &'static [OpcodePattern<Self::Field>];
    fn mnemonics(&self) -> &'static [Mnemonic];

    fn unit_bits(&self) -> u32 {
        8
    }

    fn code_address_mask(&self) -> u32 {
        u32::MAX
    }

    fn instruction_feature_flags(&self, kind: Kind) -> Features {
        lookup(self.mnemonics(), kind).map(|m| m.features).unwrap_or_default()
    }

    /// First byte of a packed pair that the plain table does not cover.
    fn is_pair_marker(&self, _first: u8) -> bool {
        false
    }

    /// Reconstructs (head, tail) byte streams of the packed pair at `head`.
    fn unpack(&self, _mem: &dyn Memory, _head: u32) -> Option<(Vec<u8>, Vec<u8>)> {
        None
    }

    /// The instruction starting with `first` executes together with the one before it.
    fn runs_in_lockstep(&self, _first: u8) -> bool {
        false
    }

    /// Kind renames that depend on decoded operand values.
    fn fixup(&self, _insn: &mut Instruction) {}

    fn user_parallel(&self, _first: u8) -> bool {
        false
    }

    /// Applies the modifier byte following a plain instruction; true if it was consumed.
    fn postfix(&self, _insn: &mut Instruction, _next: u8) -> bool {
        false
    }
}

/// Result of one pure decode step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub insn: Instruction,
    pub update: Option<PairingUpdate>,
}

/// Decoder façade over one address space.
pub struct Decoder<I: Isa, M: Memory> {
    isa: I,
    mem: M,
    context: ContextStore,
    pairing: PairingState,
}

impl<I: Isa, M: Memory> Decoder<I, M> {
    pub fn new(isa: I, mem: M, context: ContextStore) -> Self {
        Self { isa, mem, context, pairing: PairingState::new() }
    }

    pub fn isa(&self) -> &I {
        &self.isa
    }

    pub fn memory(&self) -> &M {
        &self.mem
    }

    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.mem
    }

    pub fn context(&self) -> &ContextStore {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut ContextStore {
        &mut self.context
    }

    pub fn pairing(&self) -> &PairingState {
        &self.pairing
    }

    pub fn instruction_feature_flags(&self, kind: Kind) -> Features {
        self.isa.instruction_feature_flags(kind)
    }

    /// Decodes at `address` and records or clears pairing state accordingly.
    pub fn decode(&mut self, address: u32) -> Result<Instruction, DecodeError> {
        let Decoded { insn, update } = self.decode_pure(address)?;
        if let Some(update) = update {
            self.pairing.apply(update);
        }
        Ok(insn)
    }

    /// Forgets any tail half recorded for a pair headed at `address`.
    pub fn undo_pairing(&mut self, address: u32) {
        self.pairing.undo_pairing(address);
    }

    /// Decodes without touching pairing state; the caller decides whether to apply the update.
    pub fn decode_pure(&self, address: u32) -> Result<Decoded, DecodeError> {
        self.decode_with(address, self)
    }

    /// `host` resolves branch bases; the lockstep lookahead passes one that does not look further.
    fn decode_with(&self, address: u32, host: &dyn Host) -> Result<Decoded, DecodeError> {
        let mut decoded = match self.pairing.head_length_at(address) {
            Some(head_len) => self.decode_tail(address, head_len, host)?,
            None => self.decode_plain(address, host)?,
        };
        let features = self.isa.instruction_feature_flags(decoded.insn.kind);
        stamp_roles(&mut decoded.insn, features);
        Ok(decoded)
    }

    fn engine(&self) -> Engine<'static, I::Field> {
        Engine { patterns: self.isa.patterns(), mnemonics: self.isa.mnemonics(), unit_bits: self.isa.unit_bits() }
    }

    fn decode_plain(&self, address: u32, host: &dyn Host) -> Result<Decoded, DecodeError> {
        let mut source = ByteSource::new(&self.mem, address);
        let plain = self.engine().match_and_extract(&mut source, host);
        let first = self.mem.read_u8(address).map_err(|_| DecodeError::OutOfBounds { address })?;

        match plain {
            Ok(Some(mut insn)) => {
                let tail = insn.end();
                self.isa.fixup(&mut insn);
                if self.isa.user_parallel(first) {
                    insn.flags |= AuxFlags::USER_PARALLEL;
                }
                if let Ok(next) = self.mem.read_u8(insn.end()) {
                    if self.isa.postfix(&mut insn, next) {
                        debug!(address, next, "postfix applied");
                    }
                }
                Ok(Decoded { insn, update: Some(PairingUpdate::Clear { tail }) })
            }
            Ok(None) | Err(DecodeError::OutOfBounds { .. }) if self.isa.is_pair_marker(first) => {
                self.decode_head(address, host).map_err(|e| match e {
                    DecodeError::MalformedPairing { address } => {
                        debug!(address, "packed pair rejected");
                        DecodeError::Unrecognized { address }
                    }
                    e => e,
                })
            }
            Ok(None) => Err(DecodeError::Unrecognized { address }),
            Err(e) => Err(e),
        }
    }

    fn decode_head(&self, address: u32, host: &dyn Host) -> Result<Decoded, DecodeError> {
        let malformed = DecodeError::MalformedPairing { address };
        let (head, tail) = self.isa.unpack(&self.mem, address).ok_or(malformed.clone())?;
        let mut insn = self.match_exact(address, &head, host)?.ok_or(malformed.clone())?;
        let tail_addr = insn.end();
        if self.match_exact(tail_addr, &tail, host)?.is_none() {
            return Err(malformed);
        }

        self.isa.fixup(&mut insn);
        insn.group_mut().lockstep = Some(Lockstep::Head { tail: tail_addr });
        let update = PairingUpdate::Record { tail: tail_addr, head_len: insn.byte_length };
        Ok(Decoded { insn, update: Some(update) })
    }

    fn decode_tail(&self, address: u32, head_len: u8, host: &dyn Host) -> Result<Decoded, DecodeError> {
        let head = address.wrapping_sub(head_len as u32);
        let unrecognized = DecodeError::Unrecognized { address };
        let (head_bytes, tail) = self.isa.unpack(&self.mem, head).ok_or(unrecognized.clone())?;
        // the head was rewritten into a pair with a different split
        if head_bytes.len() != head_len as usize {
            debug!(address, head, head_len, "recorded head no longer unpacks to the same length");
            return Err(unrecognized);
        }
        let mut insn = self.match_exact(address, &tail, host)?.ok_or(unrecognized)?;

        self.isa.fixup(&mut insn);
        insn.flags |= AuxFlags::USER_PARALLEL;
        insn.group_mut().lockstep = Some(Lockstep::Tail { head });
        trace!(address, head, "tail half decoded");
        Ok(Decoded { insn, update: None })
    }

    /// Matches a reconstructed half, which must consume exactly its own bytes.
    fn match_exact(&self, address: u32, bytes: &[u8], host: &dyn Host) -> Result<Option<Instruction>, DecodeError> {
        let mut source = ByteSource::primed(&self.mem, address, bytes);
        match self.engine().match_and_extract(&mut source, host) {
            Ok(Some(insn)) if insn.byte_length as usize == bytes.len() => Ok(Some(insn)),
            Ok(_) | Err(DecodeError::OutOfBounds { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl<I: Isa, M: Memory> Host for Decoder<I, M> {
    fn next_ip(&self, address: u32, len: u8) -> u32 {
        let next = address.wrapping_add(len as u32);
        if len > 3 { return next; }
        match self.mem.read_u8(next) {
            Ok(b) if self.isa.runs_in_lockstep(b) => {
                let partner = self.decode_with(next, &NoLookahead(self)).map_or(0, |d| d.insn.byte_length);
                next.wrapping_add(partner as u32)
            }
            _ => next,
        }
    }

    fn context(&self, address: u32, reg: u16) -> Option<u32> {
        self.context.get(address, reg)
    }

    fn code_address_mask(&self) -> u32 {
        self.isa.code_address_mask()
    }
}

/// Branch bases for a lockstep partner decoded only for its length.
struct NoLookahead<'d, I: Isa, M: Memory>(&'d Decoder<I, M>);

impl<I: Isa, M: Memory> Host for NoLookahead<'_, I, M> {
    fn next_ip(&self, address: u32, len: u8) -> u32 {
        address.wrapping_add(len as u32)
    }

    fn context(&self, address: u32, reg: u16) -> Option<u32> {
        Host::context(self.0, address, reg)
    }

    fn code_address_mask(&self) -> u32 {
        Host::code_address_mask(self.0)
    }
}

fn stamp_roles(insn: &mut Instruction, features: Features) {
    let count = insn.operand_count();
    for (slot, op) in insn.operands[..count].iter_mut().enumerate() {
        let (uses, changes) = (features.uses(slot), features.changes(slot));
        op.role = match (&op.value, uses, changes) {
            (OperandValue::CodeTarget { .. }, true, _) => Role::Target,
            (_, true, true) => Role::ReadWrite,
            (_, false, true) => Role::Write,
            (_, true, false) => Role::Read,
            _ => Role::None,
        };
    }
}
