use std::collections::{HashMap, HashSet, VecDeque};

use serde::Serialize;
use tracing::debug;

use c55x_rs::emu::{self, XrefKind};
use c55x_rs::{c55x_decoder, C55x, C55xConfig, Decoder, Memory};

use crate::model::Image;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind { Fallthrough, Branch, CondBranch, Call }

impl EdgeKind {
    pub fn tag(self) -> &'static str {
        match self {
            EdgeKind::Fallthrough => "ft",
            EdgeKind::Branch => "br",
            EdgeKind::CondBranch => "cbr",
            EdgeKind::Call => "call",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Edge { pub from: u32, pub to: u32, pub kind: EdgeKind }

/// Everything learned by walking code from a set of entries.
pub struct Analysis<'i> {
    /// Holds the pairing and context state the walk built up.
    pub decoder: Decoder<C55x, &'i Image>,
    pub visited: HashSet<u32>,
    pub widths: HashMap<u32, u8>,
    pub edges: Vec<Edge>,
    /// Instructions after which execution does not fall through.
    pub stops: HashSet<u32>,
}

pub fn analyze_entries<'i>(img: &'i Image, cfg: &C55xConfig, entries: &[u32], max_instr: usize) -> Analysis<'i> {
    let mut decoder = c55x_decoder(img, cfg);
    let mut queue: VecDeque<u32> = VecDeque::new();
    let mut visited: HashSet<u32> = HashSet::new();
    let mut widths: HashMap<u32, u8> = HashMap::new();
    let mut edges: Vec<Edge> = Vec::new();
    let mut stops: HashSet<u32> = HashSet::new();
    for &e in entries { if img.is_mapped(e) { queue.push_back(e); } }

    while let Some(pc) = queue.pop_front() {
        if visited.len() >= max_instr { break; }
        if visited.contains(&pc) { continue; }
        let insn = match decoder.decode(pc) {
            Ok(insn) => insn,
            Err(e) => {
                debug!(address = pc, "not code: {e}");
                continue;
            }
        };
        visited.insert(pc);
        widths.insert(pc, insn.byte_length);

        let features = decoder.instruction_feature_flags(insn.kind);
        let class = emu::classify(&insn, features, decoder.context());
        class.apply(decoder.context_mut());

        for x in class.code_refs() {
            let kind = match x.kind {
                XrefKind::Call => EdgeKind::Call,
                _ if class.flow => EdgeKind::CondBranch,
                _ => EdgeKind::Branch,
            };
            edges.push(Edge { from: pc, to: x.to, kind });
            if img.is_mapped(x.to) && !visited.contains(&x.to) { queue.push_back(x.to); }
        }
        let ft = insn.end();
        if !class.flow {
            stops.insert(pc);
        } else if img.is_mapped(ft) {
            edges.push(Edge { from: pc, to: ft, kind: EdgeKind::Fallthrough });
            if !visited.contains(&ft) { queue.push_back(ft); }
        }
    }
    Analysis { decoder, visited, widths, edges, stops }
}

#[derive(Debug, Clone, Serialize)]
pub struct Block { pub start: u32, pub end: u32 }

#[derive(Debug, Clone, Serialize)]
pub struct EdgeOut { pub from: u32, pub to: u32, pub kind: String }

#[derive(Debug, Clone, Serialize)]
pub struct FunctionOut { pub entry: u32, pub blocks: Vec<u32> }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Segment;

    fn image(bytes: &[u8]) -> Image {
        Image { segments: vec![Segment { name: "s".into(), base: 0, bytes: bytes.to_vec(), perms: "r-x", kind: "raw" }] }
    }

    #[test]
    fn branch_call_and_return_edges() {
        let img = image(&[
            0x06, 0x00, 0x02, // b 0x5
            0x20, 0x20,       // unreachable
            0x08, 0x00, 0x02, // call 0xa
            0x48, 0x04,       // ret
            0x20,             // nop
            0x48, 0x04,       // ret
        ]);
        let a = analyze_entries(&img, &C55xConfig::default(), &[0], 100);
        let has = |from, to, kind| a.edges.iter().any(|e| e.from == from && e.to == to && e.kind == kind);
        assert!(has(0, 5, EdgeKind::Branch));
        assert!(has(5, 0xA, EdgeKind::Call));
        assert!(has(5, 8, EdgeKind::Fallthrough));
        assert!(has(0xA, 0xB, EdgeKind::Fallthrough));
        assert!(!a.visited.contains(&3));
        assert_eq!(a.stops, HashSet::from([0, 8, 0xB]));
        assert_eq!(a.widths.get(&5), Some(&3));
    }
}
