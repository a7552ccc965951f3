pub mod alias;
pub mod bytes;
pub mod context;
pub mod decoder;
pub mod disasm;
pub mod emu;
pub mod error;
pub mod instruction;
pub mod instructions;
pub mod memory;
pub mod operand;
pub mod pairing;
pub mod table;

pub mod isa {
    pub mod c55x;
}

pub use context::ContextStore;
pub use decoder::{Decoded, Decoder, Isa};
pub use error::{DecodeError, MemoryError};
pub use instruction::{AuxFlags, Instruction, Kind, Lockstep};
pub use isa::c55x::{C55x, C55xConfig};
pub use memory::{LinearMemory, Memory};
pub use operand::{Operand, OperandValue};

/// A decoder for C55x code in `mem`, with context defaults taken from `cfg`.
pub fn c55x_decoder<M: Memory>(mem: M, cfg: &C55xConfig) -> Decoder<C55x, M> {
    Decoder::new(C55x, mem, cfg.context_store())
}
