use std::collections::HashMap;

use c55x_rs::disasm::{render, Renderer};
use c55x_rs::emu::{self, XrefKind};
use c55x_rs::instruction::ParallelGroup;
use c55x_rs::isa::c55x::{ContextDefaults, Mn, Reg};
use c55x_rs::operand::{AddrMode, MemForm};
use c55x_rs::{
    c55x_decoder, AuxFlags, C55x, C55xConfig, DecodeError, Decoder, Instruction, LinearMemory, Lockstep, OperandValue,
};
use pretty_assertions::assert_eq;

fn decoder_with(cfg: &C55xConfig, base: u32, bytes: &[u8]) -> Decoder<C55x, LinearMemory> {
    c55x_decoder(LinearMemory::from_bytes(base, bytes), cfg)
}

fn decoder(base: u32, bytes: &[u8]) -> Decoder<C55x, LinearMemory> {
    decoder_with(&C55xConfig::default(), base, bytes)
}

fn page_zero_dma() -> C55xConfig {
    C55xConfig { defaults: ContextDefaults { cpl: 0, ..ContextDefaults::default() }, ..C55xConfig::default() }
}

/// Decodes, renders and classifies every instruction in order, the way a linear sweep does.
fn sweep(dec: &mut Decoder<C55x, LinearMemory>, cfg: &C55xConfig, mut pc: u32, end: u32) -> Vec<String> {
    let mut lines = Vec::new();
    while pc < end {
        let insn = dec.decode(pc).unwrap();
        lines.push(render(&insn, cfg, dec.context()));
        let features = dec.instruction_feature_flags(insn.kind);
        emu::classify(&insn, features, dec.context()).apply(dec.context_mut());
        pc = insn.end();
    }
    lines
}

#[test]
fn branch_targets_are_relative_to_the_next_instruction() {
    let mut dec = decoder(0x100, &[0x06, 0x00, 0x02, 0x20]);
    let insn = dec.decode(0x100).unwrap();
    assert_eq!(insn.kind, Mn::B.kind());
    assert_eq!(insn.byte_length, 3);
    assert_eq!(insn.operands[0].value, OperandValue::CodeTarget { address: 0x105, displacement: Some(2) });
    assert_eq!(render(&insn, &C55xConfig::default(), dec.context()), "b 0x105");

    let labels = HashMap::from([(0x105, "loop".to_string())]);
    let cfg = C55xConfig::default();
    let text = Renderer::new(&cfg, dec.context()).with_labels(&labels).render(&insn);
    assert_eq!(text, "b loop");
}

#[test]
fn lockstep_partner_moves_the_branch_base() {
    // 0x21 is a one-byte nop that runs in parallel with the branch
    let mut dec = decoder(0x100, &[0x06, 0x00, 0x02, 0x21]);
    let insn = dec.decode(0x100).unwrap();
    assert_eq!(insn.operands[0].value, OperandValue::CodeTarget { address: 0x106, displacement: Some(2) });

    let nop = dec.decode(0x103).unwrap();
    assert!(nop.flags.contains(AuxFlags::USER_PARALLEL));
    assert_eq!(render(&nop, &C55xConfig::default(), dec.context()), "|| nop");
}

#[test]
fn direct_operand_follows_cpl() {
    let stack = decoder(0, &[0xA0, 0x0A]).decode(0).unwrap();
    assert_eq!(stack.operands[0].value, OperandValue::IndirectMemory { base: Reg::SP.id(), mode: AddrMode::Offset(5) });
    assert_eq!(stack.mem_operand, Some(0));

    let dec = decoder_with(&page_zero_dma(), 0, &[0xA0, 0x0A]);
    let page = dec.decode_pure(0).unwrap().insn;
    assert_eq!(
        page.operands[0].value,
        OperandValue::DirectMemory { address: 5, high: Some(Reg::DPH.id()), page: Some(Reg::DP.id()), form: MemForm::Dma }
    );
    assert_eq!(render(&page, &page_zero_dma(), dec.context()), "mov @5, AC0");
}

#[test]
fn low_data_addresses_render_as_mapped_registers() {
    let cfg = page_zero_dma();
    let dec = decoder_with(&cfg, 0, &[0xA0, 0x5C]);
    let insn = dec.decode_pure(0).unwrap().insn;
    assert_eq!(render(&insn, &cfg, dec.context()), "mov DP, AC0");

    let plain = C55xConfig { mapped_registers: false, ..cfg };
    assert_eq!(render(&insn, &plain, dec.context()), "mov @0x2e, AC0");
}

#[test]
fn status_bit_names_replace_the_bit_number() {
    let mut dec = decoder(0, &[0x46, 0xE2, 0x46, 0x02]);
    let named = dec.decode(0).unwrap();
    assert_eq!(named.kind, Mn::Bclr1.kind());
    assert_eq!(named.ops().len(), 1);
    assert_eq!(render(&named, &C55xConfig::default(), dec.context()), "bclr CPL");

    let reserved = dec.decode(2).unwrap();
    assert_eq!(reserved.kind, Mn::Bclr2.kind());
    assert_eq!(render(&reserved, &C55xConfig::default(), dec.context()), "bclr #0, ST1_55");
}

#[test]
fn mmap_qualifier_is_part_of_the_instruction() {
    let mut dec = decoder(0, &[0xA0, 0x5C, 0x98, 0x20]);
    let insn = dec.decode(0).unwrap();
    assert_eq!(insn.byte_length, 3);
    assert_eq!(
        insn.operands[0].value,
        OperandValue::DirectMemory { address: 0x2E, high: None, page: None, form: MemForm::Mmap }
    );
    let cfg = C55xConfig::default();
    assert_eq!(render(&insn, &cfg, dec.context()), "mov mmap(@DP), AC0");
    let plain = C55xConfig { mapped_registers: false, ..cfg };
    assert_eq!(render(&insn, &plain, dec.context()), "mov mmap(@0x2e), AC0");
    assert_eq!(dec.decode(3).unwrap().kind, Mn::Nop.kind());
}

#[test]
fn repeat_qualifier_marks_the_mnemonic() {
    let dec = decoder(0, &[0xA0, 0x5C, 0x9C]);
    let insn = dec.decode_pure(0).unwrap().insn;
    assert_eq!(insn.byte_length, 3);
    assert!(insn.flags.contains(AuxFlags::LR));
    assert_eq!(render(&insn, &C55xConfig::default(), dec.context()), "mov.lr *SP(#0x2e), AC0");
}

#[test]
fn context_writes_change_later_decodes() {
    let bytes = [
        0x46, 0xE2,             // bclr CPL
        0x78, 0x01, 0x00, 0x00, // mov #0x100, DP
        0xA0, 0x5C,             // mov @0x2e, AC0
        0x48, 0x04,             // ret
    ];
    let cfg = C55xConfig::default();
    let mut dec = decoder_with(&cfg, 0, &bytes);
    let lines = sweep(&mut dec, &cfg, 0, bytes.len() as u32);
    assert_eq!(lines, vec!["bclr CPL", "mov #0x100, DP", "mov @0x2e, AC0", "ret"]);

    let ctx = dec.context();
    assert_eq!(ctx.get(0, Reg::CPL.id()), Some(1));
    assert_eq!(ctx.get(2, Reg::CPL.id()), Some(0));
    assert_eq!(ctx.get(6, Reg::DP.id()), Some(0x100));
    assert_eq!(ctx.get(5, Reg::DP.id()), Some(0));
}

#[test]
fn classification_reports_flow_and_references() {
    let cfg = page_zero_dma();
    let dec = decoder_with(&cfg, 0, &[0xA0, 0x0A, 0xC0, 0x5C, 0x08, 0x00, 0x02, 0x48, 0x04]);
    let classify = |pc: u32| {
        let insn = dec.decode_pure(pc).unwrap().insn;
        emu::classify(&insn, dec.instruction_feature_flags(insn.kind), dec.context())
    };

    let read = classify(0);
    assert!(read.flow);
    assert_eq!(read.xrefs.len(), 1);
    assert_eq!((read.xrefs[0].kind, read.xrefs[0].to), (XrefKind::Read, 10));
    assert!(read.context_writes.is_empty());

    // storing to the memory-mapped DP makes the page unknown
    let write = classify(2);
    assert_eq!(write.xrefs[0].kind, XrefKind::Write);
    assert_eq!(write.context_writes.len(), 1);
    assert_eq!((write.context_writes[0].reg, write.context_writes[0].value), (Reg::DP.id(), None));

    let call = classify(4);
    assert!(call.flow);
    assert_eq!(call.code_refs().map(|x| (x.kind, x.to)).collect::<Vec<_>>(), vec![(XrefKind::Call, 9)]);

    let ret = classify(7);
    assert!(!ret.flow);
    assert_eq!(ret.stack_delta, Some(2));
}

#[test]
fn packed_pair_decodes_as_head_then_tail() {
    // opc1 0xA0 (*AR0+) with opc2 0xC0 (*AR1+)
    let packed = [0x8A, 0x04, 0x90, 0xC0];
    let mut dec = decoder(0, &packed);

    let head = dec.decode(0).unwrap();
    assert_eq!(dec.pairing().head_length_at(2), Some(2));
    let tail = dec.decode(2).unwrap();

    let mut expected_head = decoder(0, &[0xA0, 0x03]).decode(0).unwrap();
    expected_head.parallel = Some(ParallelGroup { split: None, lockstep: Some(Lockstep::Head { tail: 2 }) });
    let mut expected_tail = decoder(2, &[0xC0, 0x23]).decode(2).unwrap();
    expected_tail.flags |= AuxFlags::USER_PARALLEL;
    expected_tail.parallel = Some(ParallelGroup { split: None, lockstep: Some(Lockstep::Tail { head: 0 }) });
    assert_eq!(head, expected_head);
    assert_eq!(tail, expected_tail);

    let cfg = C55xConfig::default();
    assert_eq!(render(&head, &cfg, dec.context()), "mov *AR0+, AC0");
    assert_eq!(render(&tail, &cfg, dec.context()), "|| mov AC0, *AR1+");
    assert_eq!(tail.end(), 4);
}

#[test]
fn undoing_a_pair_restores_the_plain_reading() {
    let mut dec = decoder(0, &[0x8A, 0x04, 0x90, 0xC0]);
    dec.decode(0).unwrap();
    dec.undo_pairing(0);
    assert!(dec.pairing().is_empty());
    let plain = dec.decode(2).unwrap();
    assert_eq!(plain.lockstep(), None);
    assert_eq!(plain.kind, Mn::Mov2.kind());
}

#[test]
fn short_tail_pair_decodes_as_head_then_tail() {
    // opc2 0x10 clears the layout bit: a three-byte head and a register tail
    let mut dec = decoder(0, &[0x88, 0x00, 0x00, 0x10, 0x00, 0x00, 0x00, 0x00]);

    let head = dec.decode(0).unwrap();
    assert_eq!((head.kind, head.byte_length), (Mn::Mov2.kind(), 3));
    assert_eq!(head.lockstep(), Some(Lockstep::Head { tail: 3 }));
    assert_eq!(dec.pairing().head_length_at(3), Some(3));

    let tail = dec.decode(3).unwrap();
    assert_eq!((tail.kind, tail.byte_length), (Mn::Aadd.kind(), 3));
    assert_eq!(tail.lockstep(), Some(Lockstep::Tail { head: 0 }));
    assert!(tail.flags.contains(AuxFlags::USER_PARALLEL));
}

#[test]
fn short_tail_of_the_wrong_width_is_data() {
    // opc2 0x20 names a two-byte tail
    let mut dec = decoder(0, &[0x88, 0x00, 0x00, 0x20, 0x00, 0x00, 0x00, 0x00]);
    assert_eq!(dec.decode(0).unwrap_err(), DecodeError::Unrecognized { address: 0 });
    assert!(dec.pairing().is_empty());
}

#[test]
fn rewriting_the_head_drops_the_pair() {
    let mut dec = decoder(0, &[0x8A, 0x04, 0x90, 0xC0]);
    dec.decode(0).unwrap();
    assert_eq!(dec.pairing().head_length_at(2), Some(2));

    // a plain two-byte mov over the packed word
    dec.memory_mut().write_bytes(0, &[0xA0, 0x0A]).unwrap();
    let head = dec.decode(0).unwrap();
    assert_eq!(head.lockstep(), None);
    assert_eq!(dec.pairing().head_length_at(2), None);

    let plain = dec.decode(2).unwrap();
    assert_eq!(plain.lockstep(), None);
    assert_eq!(plain.kind, Mn::Mov2.kind());
}

#[test]
fn tail_is_rejected_when_the_head_splits_differently() {
    let mut dec = decoder(0, &[0x8A, 0x04, 0x90, 0xC0, 0x00, 0x00, 0x00, 0x00]);
    dec.decode(0).unwrap();
    assert_eq!(dec.pairing().head_length_at(2), Some(2));

    // still a packed pair, but now with a three-byte head
    dec.memory_mut().write_bytes(0, &[0x88, 0x00, 0x00, 0x10]).unwrap();
    assert_eq!(dec.decode(2).unwrap_err(), DecodeError::Unrecognized { address: 2 });
}

#[test]
fn long_lockstep_chain_resolves_targets() {
    // every conditional branch here runs in lockstep with the next one
    let bytes: Vec<u8> = [0x05, 0x00, 0x00].repeat(300);
    let dec = decoder(0, &bytes);
    let insn = dec.decode_pure(0).unwrap().insn;
    assert_eq!(insn.kind, Mn::Bcc.kind());
    assert_eq!(insn.operands[0].value, OperandValue::CodeTarget { address: 6, displacement: Some(0) });

    let last = dec.decode_pure(3 * 299).unwrap().insn;
    assert_eq!(last.operands[0].value, OperandValue::CodeTarget { address: 3 * 300, displacement: Some(0) });
}

#[test]
fn malformed_pair_is_data() {
    let mut dec = decoder(0, &[0x88, 0xFF, 0xFF, 0xFF, 0x20]);
    assert_eq!(dec.decode(0).unwrap_err(), DecodeError::Unrecognized { address: 0 });
    assert!(dec.pairing().is_empty());
    assert_eq!(dec.pairing().head_length_at(4), None);
}

#[test]
fn pure_decode_leaves_pairing_alone() {
    let mut dec = decoder(0, &[0x8A, 0x04, 0x90, 0xC0]);
    let first = dec.decode_pure(0).unwrap();
    assert!(dec.pairing().is_empty());
    assert!(first.update.is_some());

    let applied = dec.decode(0).unwrap();
    assert_eq!(first.insn, applied);
    assert_eq!(dec.decode_pure(0).unwrap(), first);
}

#[test]
fn unknown_and_truncated_bytes() {
    assert_eq!(decoder(0, &[0xFF]).decode(0).unwrap_err(), DecodeError::Unrecognized { address: 0 });
    // call with its displacement cut off
    let err = decoder(0, &[0x08, 0x00]).decode(0).unwrap_err();
    assert_eq!(err, DecodeError::OutOfBounds { address: 0 });
}

#[test]
fn stack_adjustments_of_a_prologue() {
    let bytes = [
        0x50, 0x46, // psh T0
        0x38, 0x23, // psh AC2, AC3
        0x4E, 0xFC, // aadd #-4, SP
        0x20,       // nop
    ];
    let dec = decoder(0, &bytes);
    let deltas: Vec<Option<i32>> = [0, 2, 4, 6]
        .iter()
        .map(|&pc| {
            let insn: Instruction = dec.decode_pure(pc).unwrap().insn;
            emu::classify(&insn, dec.instruction_feature_flags(insn.kind), dec.context()).stack_delta
        })
        .collect();
    assert_eq!(deltas, vec![Some(-2), Some(-4), Some(-8), None]);
}
