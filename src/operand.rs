use bitflags::bitflags;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum DataWidth {
    #[default]
    Unspecified,
    Byte,
    Word,  // 16 bits
    Dword, // 32 bits
    Code,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Role {
    #[default]
    None,
    Read,
    Write,
    ReadWrite,
    Target,
}

bitflags! {
    /// Operator wrappers applied around an operand, in rendering order.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    pub struct Operators: u16 {
        const T3   = 1 << 0;  // T3 = operand
        const NOT  = 1 << 1;  // !operand
        const UNS  = 1 << 2;
        const DBL  = 1 << 3;
        const RND  = 1 << 4;
        const PAIR = 1 << 5;
        const LO   = 1 << 6;
        const HI   = 1 << 7;
        const LB   = 1 << 8;  // low_byte
        const HB   = 1 << 9;  // high_byte
        const SAT  = 1 << 10;
        const DUAL = 1 << 11;
        const PORT = 1 << 12;
    }
}

impl Default for Operators {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShiftBy {
    Imm(i32),
    Reg(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shift {
    pub dir: Direction,
    pub by: ShiftBy,
}

/// Decoration written after an operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Suffix {
    /// `outside` renders the shift after the operator brackets close.
    Shift { shift: Shift, outside: bool },
    Equals(i32),
    NotEquals(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RelOp {
    Eq,
    Lt,
    Ge,
    Ne,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RelRhs {
    Reg(u16),
    Imm(i32),
}

/// Pointer arithmetic applied to the base register of an indirect operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AddrMode {
    Plain,                 // *ARn
    PostInc,               // *ARn+
    PostDec,               // *ARn-
    PreInc,                // *+ARn
    PreDec,                // *-ARn
    PostAdd(u16),          // *(ARn+T0)
    PostSub(u16),          // *(ARn-T0)
    Indexed(u16),          // *ARn(T0)
    Offset(i32),           // *ARn(#k)
    PreOffset(i32),        // *+ARn(#k)
    ShortOffset(u8),       // *ARn(short(#k))
    PostAddReverse(u16),   // *(ARn+T0B)
    PostSubReverse(u16),   // *(ARn-T0B)
}

/// How a direct address was encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MemForm {
    Plain,
    /// `@k`, relative to the data page.
    Dma,
    /// `*abs16(#k)`, within the page named by the high register.
    Abs16,
    /// `*(#k)`, full 23-bit address.
    Ptr,
    /// `mmap(@k)`, memory-mapped register space.
    Mmap,
    /// `port(#k)`
    Port,
    /// `port(@k)`, relative to the peripheral page.
    PortDma,
}

impl MemForm {
    pub fn is_io(self) -> bool {
        matches!(self, Self::Port | Self::PortDma)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum OperandValue {
    /// Unused slot.
    #[default]
    None,
    Register { id: u16 },
    Immediate { value: i64, signed: bool, dma: bool },
    DirectMemory { address: u32, high: Option<u16>, page: Option<u16>, form: MemForm },
    IndirectMemory { base: u16, mode: AddrMode },
    /// `displacement` is set for targets relative to the next instruction.
    CodeTarget { address: u32, displacement: Option<i32> },
    Condition { code: u8, reg: Option<u16> },
    Shift(Shift),
    Relational { reg: u16, op: RelOp, rhs: RelRhs },
    RegisterList { mask: u32 },
    RawText { bytes: Vec<u8> },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Operand {
    pub value: OperandValue,
    pub width: DataWidth,
    pub role: Role,
    pub operators: Operators,
    pub suffix: Option<Suffix>,
}

impl Operand {
    pub fn new(value: OperandValue, width: DataWidth) -> Self {
        Self { value, width, ..Self::default() }
    }

    pub fn reg(id: u16) -> Self {
        Self::new(OperandValue::Register { id }, DataWidth::Word)
    }

    pub fn imm(value: i64, signed: bool, width: DataWidth) -> Self {
        Self::new(OperandValue::Immediate { value, signed, dma: false }, width)
    }

    pub fn is_none(&self) -> bool {
        matches!(self.value, OperandValue::None)
    }

    pub fn register(&self) -> Option<u16> {
        match self.value {
            OperandValue::Register { id } => Some(id),
            _ => None,
        }
    }

    pub fn immediate(&self) -> Option<i64> {
        match self.value {
            OperandValue::Immediate { value, .. } => Some(value),
            _ => None,
        }
    }
}
