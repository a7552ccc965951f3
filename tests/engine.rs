use c55x_rs::alias::SuffixRule;
use c55x_rs::instructions::{Features, Mnemonic};
use c55x_rs::operand::Role;
use c55x_rs::table::{ExtractCx, ExtractError, Extractor, FieldMask::*, OpcodePattern};
use c55x_rs::{ContextStore, DecodeError, Decoder, Instruction, Isa, Kind, LinearMemory, Operand, OperandValue};
use pretty_assertions::assert_eq;

/// A toy architecture with one-byte register fields.
#[derive(Debug, Clone, Copy)]
enum Field {
    Reg,
    /// Register a following optional operand is compared against.
    Dst,
    Opt,
    /// Renames to the `r`-suffixed sibling when set.
    Round,
    /// Zero is a reserved encoding.
    NonZero,
}

impl Extractor for Field {
    fn extract(self, v: u64, cx: &mut ExtractCx<'_, '_>) -> Result<(), ExtractError> {
        match self {
            Field::Reg => {
                cx.push(Operand::reg(v as u16))?;
            }
            Field::Dst => {
                let slot = cx.push(Operand::reg(v as u16))?;
                cx.remember_optional(slot);
            }
            Field::Opt => cx.push_optional(Operand::reg(v as u16))?,
            Field::Round if v != 0 => cx.add_suffix(&SuffixRule::new("r", false, true, false))?,
            Field::Round => {}
            Field::NonZero if v == 0 => cx.set_kind(Kind::NULL),
            Field::NonZero => {}
        }
        Ok(())
    }
}

const MOV: Kind = Kind(1);
const ADD: Kind = Kind(2);
const ADD3: Kind = Kind(3);
const SAT: Kind = Kind(4);
const SATR: Kind = Kind(5);
const NEG: Kind = Kind(6);

static MNEMONICS: &[Mnemonic] = &[
    Mnemonic::new("", None, Features::empty()),
    Mnemonic::new("mov", None, Features::USE1),
    Mnemonic::new("add", None, Features::USE1.union(Features::CHG1)),
    Mnemonic::new("add", None, Features::USE1.union(Features::CHG2)),
    Mnemonic::new("sat", None, Features::USE1),
    Mnemonic::new("satr", None, Features::USE1),
    Mnemonic::new("neg", None, Features::USE1),
    // same name as the wanted sibling but different features
    Mnemonic::new("negr", None, Features::USE1.union(Features::CHG2)),
    Mnemonic::new("abs", None, Features::USE1),
    // past the run of `negr` rows, so never reached
    Mnemonic::new("negr", None, Features::USE1),
];

static PATTERNS: &[OpcodePattern<Field>] = &[
    OpcodePattern { code: 0x46FF, mask: 0xFFFF, width: 2, kind: SAT, fields: &[(Field::Reg, Imm(7))] },
    OpcodePattern { code: 0x4400, mask: 0xFE00, width: 2, kind: MOV, fields: &[(Field::Reg, Bits(0x00C0))] },
    OpcodePattern {
        code: 0x4600,
        mask: 0xFF00,
        width: 2,
        kind: SAT,
        fields: &[(Field::Reg, Bits(0x000F)), (Field::Round, Bits(0x0010))],
    },
    OpcodePattern {
        code: 0x5000,
        mask: 0xFF00,
        width: 2,
        kind: ADD,
        fields: &[(Field::Dst, Bits(0x00F0)), (Field::Opt, Bits(0x000F))],
    },
    OpcodePattern {
        code: 0x6000,
        mask: 0xFF00,
        width: 2,
        kind: NEG,
        fields: &[(Field::Reg, Bits(0x000F)), (Field::Round, Bits(0x0010))],
    },
    OpcodePattern {
        code: 0x7000,
        mask: 0xFF00,
        width: 2,
        kind: MOV,
        fields: &[(Field::NonZero, Bits(0x00FF)), (Field::Reg, Bits(0x000F))],
    },
    OpcodePattern { code: 0x800000, mask: 0xFF0000, width: 3, kind: MOV, fields: &[(Field::Reg, Bits(0x0000FF))] },
    OpcodePattern {
        code: 0x9000,
        mask: 0xFF00,
        width: 2,
        kind: MOV,
        fields: &[
            (Field::Reg, Imm(0)),
            (Field::Reg, Imm(1)),
            (Field::Reg, Imm(2)),
            (Field::Reg, Imm(3)),
            (Field::Reg, Imm(4)),
            (Field::Reg, Imm(5)),
            (Field::Reg, Imm(6)),
        ],
    },
];

struct Toy;

impl Isa for Toy {
    type Field = Field;

    fn patterns(&self) -> &'static [OpcodePattern<Field>] {
        PATTERNS
    }

    fn mnemonics(&self) -> &'static [Mnemonic] {
        MNEMONICS
    }
}

fn decoder(bytes: &[u8]) -> Decoder<Toy, LinearMemory> {
    Decoder::new(Toy, LinearMemory::from_bytes(0x100, bytes), ContextStore::new())
}

fn regs(insn: &Instruction) -> Vec<u16> {
    insn.ops().iter().filter_map(Operand::register).collect()
}

#[test]
fn register_field_from_second_byte() {
    let insn = decoder(&[0x44, 0xC0]).decode(0x100).unwrap();

    let mut expected = Instruction::new(0x100);
    expected.byte_length = 2;
    expected.kind = MOV;
    expected.operands[0] = Operand { role: Role::Read, ..Operand::reg(3) };
    assert_eq!(insn, expected);
    assert_eq!(insn.operands[0].value, OperandValue::Register { id: 3 });
}

#[test]
fn earlier_row_wins() {
    // 46 FF also fits the general `sat` row, which would read register 15
    let insn = decoder(&[0x46, 0xFF]).decode(0x100).unwrap();
    assert_eq!(insn.kind, SAT);
    assert_eq!(regs(&insn), vec![7]);

    let insn = decoder(&[0x46, 0x02]).decode(0x100).unwrap();
    assert_eq!(regs(&insn), vec![2]);
}

#[test]
fn optional_operand_elided_when_it_repeats() {
    let mut dec = decoder(&[0x50, 0x33, 0x50, 0x34]);

    let short = dec.decode(0x100).unwrap();
    assert_eq!((short.kind, regs(&short)), (ADD, vec![3]));
    assert_eq!(short.operands[0].role, Role::ReadWrite);

    let long = dec.decode(0x102).unwrap();
    assert_eq!((long.kind, regs(&long)), (ADD3, vec![3, 4]));
    assert_eq!(long.operands[1].role, Role::Write);
}

#[test]
fn suffix_resolves_to_the_next_sibling() {
    let insn = decoder(&[0x46, 0x15]).decode(0x100).unwrap();
    assert_eq!(insn.kind, SATR);
    assert_eq!(regs(&insn), vec![5]);
}

#[test]
fn suffix_search_stops_at_the_end_of_the_run() {
    let err = decoder(&[0x60, 0x11]).decode(0x100).unwrap_err();
    assert!(matches!(err, DecodeError::InternalInconsistency { address: 0x100, .. }), "{err:?}");
    assert!(!err.is_recoverable());

    // without the rename bit the row decodes normally
    let insn = decoder(&[0x60, 0x01]).decode(0x100).unwrap();
    assert_eq!(insn.kind, NEG);
}

#[test]
fn null_kind_is_reserved() {
    let err = decoder(&[0x70, 0x00]).decode(0x100).unwrap_err();
    assert_eq!(err, DecodeError::Unrecognized { address: 0x100 });

    let insn = decoder(&[0x70, 0x05]).decode(0x100).unwrap();
    assert_eq!(regs(&insn), vec![5]);
}

#[test]
fn truncated_instruction_is_out_of_bounds() {
    let err = decoder(&[0x80, 0x01]).decode(0x100).unwrap_err();
    assert_eq!(err, DecodeError::OutOfBounds { address: 0x100 });
    assert!(err.is_recoverable());

    let err = decoder(&[0x44, 0xC0]).decode(0x200).unwrap_err();
    assert_eq!(err, DecodeError::OutOfBounds { address: 0x200 });
}

#[test]
fn unknown_bytes_are_unrecognized() {
    let err = decoder(&[0xFF, 0xFF]).decode(0x100).unwrap_err();
    assert_eq!(err, DecodeError::Unrecognized { address: 0x100 });
}

#[test]
fn too_many_operands_is_inconsistent() {
    let err = decoder(&[0x90, 0x00]).decode(0x100).unwrap_err();
    assert!(matches!(err, DecodeError::InternalInconsistency { .. }), "{err:?}");
}

#[test]
fn decoding_is_repeatable() {
    let mut dec = decoder(&[0x44, 0xC0, 0x50, 0x34]);
    let pure = dec.decode_pure(0x102).unwrap();
    let first = dec.decode(0x102).unwrap();
    let second = dec.decode(0x102).unwrap();
    assert_eq!(pure.insn, first);
    assert_eq!(first, second);
    assert!(dec.pairing().is_empty());
}
