use anyhow::{Context, Result};
use bitvec::prelude::*;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use c55x_rs::disasm::Renderer;
use c55x_rs::{c55x_decoder, emu, C55xConfig, LinearMemory, Lockstep};

#[derive(Parser, Debug)]
#[command(author, version, about = "Linear sweep over a raw TMS320C55x image")]
struct Opts {
    /// Load address of the first byte
    #[arg(long, default_value_t = 0u32)]
    base: u32,
    /// Decoder configuration (JSON)
    #[arg(long, value_name = "FILE")]
    config: Option<String>,
    /// Print every decoded instruction
    #[arg(long)]
    listing: bool,
    #[arg(value_name = "BINFILE")]
    input: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    let cfg: C55xConfig = match &opts.config {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)
            .with_context(|| format!("parsing {path}"))?,
        None => C55xConfig::default(),
    };
    let bytes = std::fs::read(&opts.input).with_context(|| format!("reading {}", opts.input))?;
    let len = bytes.len();
    let end = opts.base.wrapping_add(len as u32);
    let mut dec = c55x_decoder(LinearMemory::from_bytes(opts.base, &bytes), &cfg);

    let mut covered = bitvec![u8, Lsb0; 0; len];
    let (mut insns, mut pairs, mut data) = (0usize, 0usize, 0usize);
    let mut pc = opts.base;
    while pc < end {
        match dec.decode(pc) {
            Ok(insn) => {
                let features = dec.instruction_feature_flags(insn.kind);
                if opts.listing {
                    let text = Renderer::new(&cfg, dec.context()).render(&insn);
                    println!("{pc:#08x}: {}", text.replace('\n', "\n          "));
                }
                emu::classify(&insn, features, dec.context()).apply(dec.context_mut());

                let off = (pc - opts.base) as usize;
                let n = (insn.byte_length as usize).min(len - off);
                covered[off..off + n].fill(true);
                if matches!(insn.lockstep(), Some(Lockstep::Head { .. })) {
                    pairs += 1;
                }
                insns += 1;
                pc = insn.end();
            }
            Err(e) if e.is_recoverable() => {
                if opts.listing {
                    println!("{pc:#08x}: .byte {:#04x}", bytes[(pc - opts.base) as usize]);
                }
                data += 1;
                pc = pc.wrapping_add(1);
            }
            Err(e) => {
                warn!(address = e.address(), "sweep aborted");
                return Err(e.into());
            }
        }
    }

    info!(insns, pairs, data, "sweep finished");
    println!("instructions : {insns}");
    println!("packed pairs : {pairs}");
    println!("code bytes   : {}/{len}", covered.count_ones());
    println!("data bytes   : {data}");
    Ok(())
}
