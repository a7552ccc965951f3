use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::Write as _;
use std::path::Path;

use c55x_disasm::{analyze_entries, load_raw_bin, read_bytes, Analysis, Block, EdgeKind, EdgeOut, FunctionOut, Image};
use c55x_rs::disasm::Renderer;
use c55x_rs::{c55x_decoder, emu, C55xConfig, Memory};

#[derive(Parser, Debug)]
#[command(author, version, about = "TMS320C55x disassembler CLI", long_about=None)]
struct Cli {
    /// Load address for the binary in target address space
    #[arg(long, default_value_t = 0u32)]
    base: u32,
    /// Skip N bytes at start of file before loading
    #[arg(long, default_value_t = 0usize)]
    skip: usize,
    /// Input binary path
    #[arg(value_name = "BINFILE")]
    input: String,
    /// Limit bytes loaded (default: to EOF after --skip)
    #[arg(long)]
    len: Option<usize>,
    /// Decoder configuration (JSON): mapped register names and context reset values
    #[arg(long, value_name = "FILE")]
    config: Option<String>,
    /// Subcommand
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List loaded segments (simple single-segment for raw .bin)
    Sections,
    /// Disassemble a range [start, end) in bytes
    Range {
        /// Start address (hex or dec)
        start: String,
        /// End address (hex or dec, exclusive)
        end: String,
        /// Show instruction bytes
        #[arg(long)]
        show_bytes: bool,
        /// Write output to file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<String>,
    },
    /// Analyze code graph from entry points
    Analyze {
        /// Entry addresses (hex or dec). Repeat flag to add multiple entries.
        #[arg(long = "entry", value_name = "ADDR", num_args = 1.., required = false)]
        entries: Vec<String>,
        /// Maximum instructions to decode before stopping
        #[arg(long, default_value_t = 100_000usize)]
        max_instr: usize,
        /// Output format: text or json
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Emit a linear disassembly listing of analyzed code (text format only)
        #[arg(long)]
        listing: bool,
        /// Show instruction bytes in listing
        #[arg(long)]
        show_bytes: bool,
        /// Import labels from JSON (Vec<{ addr, name }>)
        #[arg(long, value_name = "FILE")]
        labels_in: Option<String>,
        /// Export labels to JSON (Vec<{ addr, name }>)
        #[arg(long, value_name = "FILE")]
        labels_out: Option<String>,
        /// Write analysis output to file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<String>,
    },
}

fn parse_u32(s: &str) -> Result<u32> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Ok(u32::from_str_radix(hex, 16)?)
    } else {
        Ok(s.parse::<u32>()?)
    }
}

fn load_config(path: Option<&str>) -> Result<C55xConfig> {
    let Some(path) = path else { return Ok(C55xConfig::default()) };
    let txt = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    serde_json::from_str(&txt).with_context(|| format!("parsing {path}"))
}

/// One listing line; continuation lines of two-line mnemonics line up under the text.
fn push_line(buf: &mut String, pc: u32, bytes: Option<&[u8]>, text: &str) {
    let mut head = format!("{pc:#08x}: ");
    if let Some(bytes) = bytes {
        for b in bytes { let _ = write!(head, "{b:02x} "); }
        head.push_str("  ");
    }
    let pad = " ".repeat(head.len());
    let _ = writeln!(buf, "{head}{}", text.replace('\n', &format!("\n{pad}")));
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat { Text, Json }

#[derive(Debug, Clone, serde::Serialize)]
struct BlockOut { start: u32, end: u32, insns: Vec<String> }

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct LabelKV { addr: u32, name: String }

#[derive(Debug, Clone, serde::Serialize)]
struct ReportWithLabels {
    entries: Vec<u32>,
    blocks: Vec<BlockOut>,
    edges: Vec<EdgeOut>,
    functions: Vec<FunctionOut>,
    labels: Vec<LabelKV>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let img = load_raw_bin(Path::new(&cli.input), cli.base, cli.skip, cli.len)?;
    let cfg = load_config(cli.config.as_deref())?;

    match cli.cmd {
        Command::Sections => {
            println!("{:<10} {:<10} {:<10} {:<6} {:<6}", "name", "start", "end", "perms", "kind");
            for s in &img.segments {
                println!("{:<10} {:#08x}   {:#08x}   {:<6} {:<6}", s.name, s.base, s.end(), s.perms, s.kind);
            }
        }
        Command::Range { start, end, show_bytes, out } => {
            let start = parse_u32(&start)?;
            let end = parse_u32(&end)?;
            anyhow::ensure!(end >= start, "end must be >= start");
            let buf = disassemble_range(&img, &cfg, start, end, show_bytes)?;
            if let Some(path) = out { std::fs::write(path, buf)?; } else { print!("{buf}"); }
        }
        Command::Analyze { entries, max_instr, format, listing, show_bytes, labels_in, labels_out, out } => {
            // default seed: start of first segment
            let mut seeds: Vec<u32> = if entries.is_empty() {
                img.segments.first().map(|s| s.base).into_iter().collect()
            } else {
                entries.iter().map(|e| parse_u32(e)).collect::<Result<_>>()?
            };
            seeds.sort_unstable();
            seeds.dedup();
            let analysis = analyze_entries(&img, &cfg, &seeds, max_instr);
            let (blocks, edges_out) = build_blocks(&analysis, &seeds);
            let functions = build_functions(&seeds, &edges_out);

            // Prepare labels (imported or autogenerated)
            let mut labels: HashMap<u32, String> = HashMap::new();
            if let Some(path) = &labels_in {
                let txt = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
                let v: Vec<LabelKV> = serde_json::from_str(&txt).with_context(|| format!("parsing {path}"))?;
                for kv in v { labels.insert(kv.addr, kv.name); }
            }
            for &e in &seeds { labels.entry(e).or_insert_with(|| format!("sub_{e:06x}")); }
            for e in &analysis.edges {
                if e.kind == EdgeKind::Call { labels.entry(e.to).or_insert_with(|| format!("sub_{:06x}", e.to)); }
            }
            for b in &blocks { labels.entry(b.start).or_insert_with(|| format!("loc_{:06x}", b.start)); }

            let mut lbl_vec: Vec<LabelKV> = labels.iter().map(|(k, v)| LabelKV { addr: *k, name: v.clone() }).collect();
            lbl_vec.sort_by_key(|kv| kv.addr);
            if let Some(outp) = &labels_out {
                std::fs::write(outp, serde_json::to_string_pretty(&lbl_vec)?)?;
            }

            let renderer = Renderer::new(&cfg, analysis.decoder.context()).with_labels(&labels);
            let line = |pc: u32| -> Option<String> {
                let insn = analysis.decoder.decode_pure(pc).ok()?.insn;
                let bytes = show_bytes.then(|| read_bytes(&img, pc, insn.byte_length));
                let mut s = String::new();
                push_line(&mut s, pc, bytes.as_deref(), &renderer.render(&insn));
                Some(s.trim_end().to_string())
            };

            let report = match format {
                OutputFormat::Json => {
                    let blocks = blocks
                        .iter()
                        .map(|b| {
                            let insns = block_pcs(&analysis, b).filter_map(|pc| line(pc)).collect();
                            BlockOut { start: b.start, end: b.end, insns }
                        })
                        .collect();
                    let report = ReportWithLabels { entries: seeds.clone(), blocks, edges: edges_out, functions, labels: lbl_vec };
                    serde_json::to_string_pretty(&report)? + "\n"
                }
                OutputFormat::Text => {
                    let mut buf = String::new();
                    let _ = writeln!(buf, "Analysis summary:");
                    let _ = writeln!(buf, "  entries   : {:?}", seeds.iter().map(|a| format!("{a:#08x}")).collect::<Vec<_>>());
                    let _ = writeln!(buf, "  insts     : {}", analysis.visited.len());
                    let _ = writeln!(buf, "  blocks    : {}", blocks.len());
                    let _ = writeln!(buf, "  edges     : {}", analysis.edges.len());
                    let _ = writeln!(buf, "  functions : {}", functions.len());
                    let _ = writeln!(buf, "Functions:");
                    for f in &functions {
                        let _ = writeln!(buf, "  {:#08x} blocks={}", f.entry, f.blocks.len());
                    }
                    let _ = writeln!(buf, "Edges:");
                    for e in &edges_out {
                        let _ = writeln!(buf, "  {:#08x} -> {:#08x} ({})", e.from, e.to, e.kind);
                    }
                    if listing {
                        let mut pcs: Vec<u32> = analysis.visited.iter().copied().collect();
                        pcs.sort_unstable();
                        let _ = writeln!(buf, "\nListing (analyzed PCs):");
                        for pc in pcs {
                            if let Some(lbl) = labels.get(&pc) {
                                let _ = writeln!(buf, "{pc:#08x} <{lbl}>:");
                            }
                            if let Some(l) = line(pc) {
                                let _ = writeln!(buf, "  {}", l.replace('\n', "\n  "));
                            }
                        }
                    }
                    buf
                }
            };
            if let Some(path) = out { std::fs::write(path, report)?; } else { print!("{report}"); }
        }
    }

    Ok(())
}

/// Linear decode of [start, end); undecodable bytes become `.byte` lines.
fn disassemble_range(img: &Image, cfg: &C55xConfig, start: u32, end: u32, show_bytes: bool) -> Result<String> {
    let mut dec = c55x_decoder(img, cfg);
    let mut pc = start;
    let mut buf = String::new();
    while pc < end {
        match dec.decode(pc) {
            Ok(insn) => {
                let features = dec.instruction_feature_flags(insn.kind);
                let text = Renderer::new(cfg, dec.context()).render(&insn);
                emu::classify(&insn, features, dec.context()).apply(dec.context_mut());
                let bytes = show_bytes.then(|| read_bytes(img, pc, insn.byte_length));
                push_line(&mut buf, pc, bytes.as_deref(), &text);
                pc = insn.end();
            }
            Err(e) if e.is_recoverable() => {
                let Ok(b) = img.read_u8(pc) else {
                    let _ = writeln!(buf, "{pc:#08x}: <oob>");
                    break;
                };
                push_line(&mut buf, pc, show_bytes.then_some(&[b][..]), &format!(".byte {b:#04x}"));
                pc = pc.wrapping_add(1);
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(buf)
}

fn block_pcs<'a>(analysis: &'a Analysis<'_>, b: &Block) -> impl Iterator<Item = u32> + 'a {
    let end = b.end;
    std::iter::successors(Some(b.start), move |&pc| {
        let w = *analysis.widths.get(&pc)?;
        Some(pc.wrapping_add(w as u32))
    })
    .take_while(move |&pc| pc < end)
}

/// Splits analyzed code into blocks at entries, edge targets and control transfers.
fn build_blocks(analysis: &Analysis<'_>, seeds: &[u32]) -> (Vec<Block>, Vec<EdgeOut>) {
    let mut block_starts: HashSet<u32> = seeds.iter().copied().collect();
    for e in &analysis.edges {
        if e.kind != EdgeKind::Fallthrough { block_starts.insert(e.to); }
    }
    let mut starts: Vec<u32> = block_starts.into_iter().collect();
    starts.sort_unstable();

    let transfers: HashSet<u32> = analysis
        .edges
        .iter()
        .filter(|e| matches!(e.kind, EdgeKind::Branch | EdgeKind::CondBranch))
        .map(|e| e.from)
        .collect();

    let mut blocks: Vec<Block> = Vec::new();
    let mut addr_to_block: HashMap<u32, u32> = HashMap::new(); // pc -> block start
    for &start in &starts {
        if !analysis.visited.contains(&start) || addr_to_block.contains_key(&start) { continue; }
        let mut cur = start;
        loop {
            let Some(&w) = analysis.widths.get(&cur) else { break };
            addr_to_block.insert(cur, start);
            let next = cur.wrapping_add(w as u32);
            let should_end = transfers.contains(&cur)
                || analysis.stops.contains(&cur)
                || !analysis.visited.contains(&next)
                || starts.binary_search(&next).is_ok();
            if should_end {
                blocks.push(Block { start, end: next });
                break;
            }
            cur = next;
        }
    }

    // Normalize edges to block-level; fallthrough inside a block is not an edge
    let block_of = |pc: u32| addr_to_block.get(&pc).copied().unwrap_or(pc);
    let edges_out = analysis
        .edges
        .iter()
        .filter(|e| e.kind != EdgeKind::Fallthrough || block_of(e.from) != block_of(e.to))
        .map(|e| EdgeOut { from: block_of(e.from), to: block_of(e.to), kind: e.kind.tag().to_string() })
        .collect();
    (blocks, edges_out)
}

/// Each seed roots a function made of the blocks reachable without following calls.
fn build_functions(seeds: &[u32], edges: &[EdgeOut]) -> Vec<FunctionOut> {
    let mut adj: HashMap<u32, Vec<u32>> = HashMap::new();
    for e in edges.iter().filter(|e| e.kind != EdgeKind::Call.tag()) {
        adj.entry(e.from).or_default().push(e.to);
    }
    seeds
        .iter()
        .map(|&entry| {
            let mut seen: HashSet<u32> = HashSet::new();
            let mut q = VecDeque::from([entry]);
            while let Some(b) = q.pop_front() {
                if !seen.insert(b) { continue; }
                if let Some(nexts) = adj.get(&b) { q.extend(nexts.iter().copied()); }
            }
            let mut blocks: Vec<u32> = seen.into_iter().collect();
            blocks.sort_unstable();
            FunctionOut { entry, blocks }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use c55x_disasm::Segment;
    use pretty_assertions::assert_eq;

    fn image(bytes: &[u8]) -> Image {
        Image { segments: vec![Segment { name: "s".into(), base: 0x100, bytes: bytes.to_vec(), perms: "r-x", kind: "raw" }] }
    }

    #[test]
    fn parse_u32_hex_and_dec() {
        assert_eq!(parse_u32("0x10").unwrap(), 0x10);
        assert_eq!(parse_u32("16").unwrap(), 16);
        assert!(parse_u32("zz").is_err());
    }

    #[test]
    fn range_falls_back_to_bytes() {
        // nop, an unassigned byte, ret
        let img = image(&[0x20, 0xFF, 0x48, 0x04]);
        let text = disassemble_range(&img, &C55xConfig::default(), 0x100, 0x104, true).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "0x000100: 20   nop");
        assert!(lines[1].ends_with(".byte 0xff"));
        assert!(lines[2].ends_with("ret"));
    }

    #[test]
    fn blocks_split_at_branch_targets() {
        // b +2; two skipped bytes; nop; ret
        let img = image(&[0x06, 0x00, 0x02, 0x20, 0x20, 0x20, 0x48, 0x04]);
        let analysis = analyze_entries(&img, &C55xConfig::default(), &[0x100], 100);
        let (blocks, edges) = build_blocks(&analysis, &[0x100]);
        let spans: Vec<(u32, u32)> = blocks.iter().map(|b| (b.start, b.end)).collect();
        assert_eq!(spans, vec![(0x100, 0x103), (0x105, 0x108)]);
        assert!(edges.iter().any(|e| e.from == 0x100 && e.to == 0x105 && e.kind == "br"));
        let functions = build_functions(&[0x100], &edges);
        assert_eq!(functions[0].blocks, vec![0x100, 0x105]);
    }
}
