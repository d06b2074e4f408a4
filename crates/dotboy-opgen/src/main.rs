//! Emits `opcode_table.rs` for `dotboy-core`.
//!
//! Every LR35902 opcode byte splits into fields `x = op[7:6]`, `y = op[5:3]`,
//! `z = op[2:0]`, `p = y >> 1`, `q = y & 1`; the instruction set is regular
//! enough that mnemonic, length, timing and flag behaviour all follow from
//! those fields. See <https://gbdev.io/gb-opcodes/optables/>.
//!
//! Usage: `cargo run -p dotboy-opgen -- --output crates/dotboy-core/src/opcode_table.rs`

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::Parser;
use log::info;

#[derive(Parser)]
struct Args {
    /// Write the generated source here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

struct Entry {
    value: u8,
    mnemonic: String,
    length: u8,
    cycles: u8,
    not_taken: u8,
    flags: &'static str,
}

const R: [&str; 8] = ["B", "C", "D", "E", "H", "L", "(HL)", "A"];
const RP: [&str; 4] = ["BC", "DE", "HL", "SP"];
const RP2: [&str; 4] = ["BC", "DE", "HL", "AF"];
const CC: [&str; 4] = ["NZ", "Z", "NC", "C"];

// (mnemonic prefix, flags) indexed by y
const ALU: [(&str, &str); 8] = [
    ("ADD A,", "Z0HC"),
    ("ADC A,", "Z0HC"),
    ("SUB ", "Z1HC"),
    ("SBC A,", "Z1HC"),
    ("AND ", "Z010"),
    ("XOR ", "Z000"),
    ("OR ", "Z000"),
    ("CP ", "Z1HC"),
];

const ACC_OPS: [(&str, &str); 8] = [
    ("RLCA", "000C"),
    ("RRCA", "000C"),
    ("RLA", "000C"),
    ("RRA", "000C"),
    ("DAA", "Z-0C"),
    ("CPL", "-11-"),
    ("SCF", "-001"),
    ("CCF", "-00C"),
];

const ROT: [&str; 8] = ["RLC", "RRC", "RL", "RR", "SLA", "SRA", "SWAP", "SRL"];

fn entry(value: u8, mnemonic: impl Into<String>, length: u8, cycles: u8) -> Entry {
    Entry {
        value,
        mnemonic: mnemonic.into(),
        length,
        cycles,
        not_taken: 0,
        flags: "----",
    }
}

impl Entry {
    fn flags(mut self, flags: &'static str) -> Self {
        self.flags = flags;
        self
    }

    fn not_taken(mut self, cycles: u8) -> Self {
        self.not_taken = cycles;
        self
    }
}

fn illegal(op: u8) -> Entry {
    entry(op, format!("ILLEGAL_{op:02X}"), 1, 4)
}

fn unprefixed(op: u8) -> Entry {
    let x = op >> 6;
    let y = ((op >> 3) & 0x07) as usize;
    let z = (op & 0x07) as usize;
    let p = y >> 1;
    let q = y & 0x01;
    let hl_cost = |reg: usize, fast: u8, slow: u8| if reg == 6 { slow } else { fast };

    match x {
        0 => match z {
            0 => match y {
                0 => entry(op, "NOP", 1, 4),
                1 => entry(op, "LD (a16),SP", 3, 20),
                2 => entry(op, "STOP", 2, 4),
                3 => entry(op, "JR r8", 2, 12),
                _ => entry(op, format!("JR {},r8", CC[y - 4]), 2, 12).not_taken(8),
            },
            1 if q == 0 => entry(op, format!("LD {},d16", RP[p]), 3, 12),
            1 => entry(op, format!("ADD HL,{}", RP[p]), 1, 8).flags("-0HC"),
            2 => {
                let ptr = ["(BC)", "(DE)", "(HL+)", "(HL-)"][p];
                if q == 0 {
                    entry(op, format!("LD {ptr},A"), 1, 8)
                } else {
                    entry(op, format!("LD A,{ptr}"), 1, 8)
                }
            }
            3 if q == 0 => entry(op, format!("INC {}", RP[p]), 1, 8),
            3 => entry(op, format!("DEC {}", RP[p]), 1, 8),
            4 => entry(op, format!("INC {}", R[y]), 1, hl_cost(y, 4, 12)).flags("Z0H-"),
            5 => entry(op, format!("DEC {}", R[y]), 1, hl_cost(y, 4, 12)).flags("Z1H-"),
            6 => entry(op, format!("LD {},d8", R[y]), 2, hl_cost(y, 8, 12)),
            _ => {
                let (name, flags) = ACC_OPS[y];
                entry(op, name, 1, 4).flags(flags)
            }
        },
        1 if y == 6 && z == 6 => entry(op, "HALT", 1, 4),
        1 => {
            let cost = if y == 6 || z == 6 { 8 } else { 4 };
            entry(op, format!("LD {},{}", R[y], R[z]), 1, cost)
        }
        2 => {
            let (prefix, flags) = ALU[y];
            entry(op, format!("{prefix}{}", R[z]), 1, hl_cost(z, 4, 8)).flags(flags)
        }
        _ => match z {
            0 => match y {
                0..=3 => entry(op, format!("RET {}", CC[y]), 1, 20).not_taken(8),
                4 => entry(op, "LDH (a8),A", 2, 12),
                5 => entry(op, "ADD SP,r8", 2, 16).flags("00HC"),
                6 => entry(op, "LDH A,(a8)", 2, 12),
                _ => entry(op, "LD HL,SP+r8", 2, 12).flags("00HC"),
            },
            1 if q == 0 => {
                let e = entry(op, format!("POP {}", RP2[p]), 1, 12);
                if p == 3 { e.flags("ZNHC") } else { e }
            }
            1 => match p {
                0 => entry(op, "RET", 1, 16),
                1 => entry(op, "RETI", 1, 16),
                2 => entry(op, "JP HL", 1, 4),
                _ => entry(op, "LD SP,HL", 1, 8),
            },
            2 => match y {
                0..=3 => entry(op, format!("JP {},a16", CC[y]), 3, 16).not_taken(12),
                4 => entry(op, "LD (C),A", 1, 8),
                5 => entry(op, "LD (a16),A", 3, 16),
                6 => entry(op, "LD A,(C)", 1, 8),
                _ => entry(op, "LD A,(a16)", 3, 16),
            },
            3 => match y {
                0 => entry(op, "JP a16", 3, 16),
                1 => entry(op, "PREFIX CB", 1, 4),
                6 => entry(op, "DI", 1, 4),
                7 => entry(op, "EI", 1, 4),
                _ => illegal(op),
            },
            4 if y <= 3 => entry(op, format!("CALL {},a16", CC[y]), 3, 24).not_taken(12),
            4 => illegal(op),
            5 if q == 0 => entry(op, format!("PUSH {}", RP2[p]), 1, 16),
            5 if p == 0 => entry(op, "CALL a16", 3, 24),
            5 => illegal(op),
            6 => {
                let (prefix, flags) = ALU[y];
                entry(op, format!("{prefix}d8"), 2, 8).flags(flags)
            }
            _ => entry(op, format!("RST {:02X}H", y * 8), 1, 16),
        },
    }
}

fn prefixed(op: u8) -> Entry {
    let x = op >> 6;
    let y = ((op >> 3) & 0x07) as usize;
    let z = (op & 0x07) as usize;
    let on_hl = z == 6;

    match x {
        0 => {
            let flags = if y == 6 { "Z000" } else { "Z00C" };
            entry(op, format!("{} {}", ROT[y], R[z]), 2, if on_hl { 16 } else { 8 }).flags(flags)
        }
        1 => entry(op, format!("BIT {y},{}", R[z]), 2, if on_hl { 12 } else { 8 }).flags("Z01-"),
        2 => entry(op, format!("RES {y},{}", R[z]), 2, if on_hl { 16 } else { 8 }),
        _ => entry(op, format!("SET {y},{}", R[z]), 2, if on_hl { 16 } else { 8 }),
    }
}

fn render() -> String {
    let mut out = String::new();
    out.push_str("// @generated by dotboy-opgen from the LR35902 encoding tables. Do not edit.\n\n");
    out.push_str("use crate::opcodes::OpcodeSpec;\n\n");

    out.push_str("#[rustfmt::skip]\npub static UNPREFIXED: [OpcodeSpec; 256] = [\n");
    for op in 0..=255u8 {
        let e = unprefixed(op);
        let _ = writeln!(
            out,
            "    OpcodeSpec::unprefixed(0x{:02X}, \"{}\", {}, {}, {}, \"{}\"),",
            e.value, e.mnemonic, e.length, e.cycles, e.not_taken, e.flags
        );
    }
    out.push_str("];\n\n");

    out.push_str("#[rustfmt::skip]\npub static CB_PREFIXED: [OpcodeSpec; 256] = [\n");
    for op in 0..=255u8 {
        let e = prefixed(op);
        let _ = writeln!(
            out,
            "    OpcodeSpec::prefixed(0x{:02X}, \"{}\", {}, \"{}\"),",
            e.value, e.mnemonic, e.cycles, e.flags
        );
    }
    out.push_str("];\n");
    out
}

fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let source = render();
    match args.output {
        Some(path) => {
            std::fs::write(&path, &source)?;
            info!("wrote 512 opcode entries to {}", path.display());
        }
        None => print!("{source}"),
    }
    Ok(())
}
