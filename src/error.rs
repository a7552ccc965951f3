#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    #[error("Unmapped address {addr:#08x}")]
    Unmapped { addr: u32 },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// No pattern and no pairing marker matched; the bytes are data.
    #[error("Unrecognized instruction at {address:#08x}")]
    Unrecognized { address: u32 },
    #[error("Instruction at {address:#08x} runs into unmapped memory")]
    OutOfBounds { address: u32 },
    /// Never returned by `Decoder::decode`, which degrades it to `Unrecognized`.
    #[error("Packed pair at {address:#08x} does not split into two instructions")]
    MalformedPairing { address: u32 },
    #[error("Inconsistent decode table at {address:#08x}: {detail}")]
    InternalInconsistency { address: u32, detail: String },
}

impl DecodeError {
    pub fn address(&self) -> u32 {
        match self {
            Self::Unrecognized { address }
            | Self::OutOfBounds { address }
            | Self::MalformedPairing { address }
            | Self::InternalInconsistency { address, .. } => *address,
        }
    }

    /// Recoverable errors ask the caller to retry at `address + 1` or mark data.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::InternalInconsistency { .. })
    }
}
