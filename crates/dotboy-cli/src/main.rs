mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use dotboy_core::decoder::decode;
use dotboy_core::frame::{FrameReceiver, frame_channel};
use dotboy_core::{GameBoy, RunExit};
use log::{debug, error, info, warn};

use config::{DotboyConfig, Revision};
use error::CliError;

#[derive(Parser)]
#[command(version, about = "Headless DMG Game Boy CPU and PPU emulator")]
struct Args {
    /// Path to ROM file
    rom: PathBuf,

    /// Number of frames to run
    #[arg(long)]
    frames: Option<u64>,

    /// Number of CPU cycles to run
    #[arg(long)]
    cycles: Option<u64>,

    /// Number of seconds to run
    #[arg(long)]
    seconds: Option<u64>,

    /// Stop and report before executing at this address (hex, repeatable)
    #[arg(long = "breakpoint", value_name = "HEX", value_parser = config::parse_address)]
    breakpoints: Vec<u16>,

    /// Path to the TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// DMG hardware revision whose post-boot state to start from
    #[arg(long, value_enum)]
    revision: Option<Revision>,

    /// Enable debug logging and a CPU state dump every 60 frames
    #[arg(long)]
    debug: bool,
}

struct Limits {
    frames: Option<u64>,
    cycles: Option<u64>,
    seconds: Option<Duration>,
}

impl Limits {
    fn reached(&self, gb: &GameBoy, frame_count: u64, start: Instant) -> bool {
        if let Some(max) = self.frames
            && frame_count >= max
        {
            return true;
        }
        if let Some(max) = self.cycles
            && gb.cpu.cycles >= max
        {
            return true;
        }
        if let Some(limit) = self.seconds
            && start.elapsed() >= limit
        {
            return true;
        }
        false
    }
}

fn init_logger(args: &Args, config: &DotboyConfig) {
    let level = if args.debug {
        "debug"
    } else {
        config.log_level.as_deref().unwrap_or("info")
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn report_breakpoint(gb: &GameBoy, pc: u16) {
    match decode(pc, &gb.mmu) {
        Ok(instr) => info!("breakpoint ${pc:04X}: {instr:<16} {}", gb.cpu.debug_state()),
        Err(e) => info!("breakpoint ${pc:04X}: <{e}> {}", gb.cpu.debug_state()),
    }
}

/// Drains the frame channel until the emulator side hangs up, returning how
/// many frames it took.
fn spawn_consumer(rx: FrameReceiver) -> thread::JoinHandle<u64> {
    thread::spawn(move || {
        let mut received = 0u64;
        while let Some(frame) = rx.recv() {
            received += 1;
            if frame.number() % 60 == 0 {
                let checksum = frame
                    .pixels()
                    .iter()
                    .fold(0u32, |acc, &b| acc.rotate_left(5) ^ b as u32);
                debug!("frame {} checksum {checksum:08X}", frame.number());
            }
        }
        received
    })
}

fn run(args: &Args, config: &DotboyConfig) -> Result<(), CliError> {
    let rom = std::fs::read(&args.rom).map_err(|source| CliError::Rom {
        path: args.rom.clone(),
        source,
    })?;

    let revision = args.revision.or(config.revision).unwrap_or_default();
    let mut gb = GameBoy::new_with_revision(revision.into());
    gb.load_rom(&rom);
    gb.set_palette(config.palette.to_palette()?);

    let mut breakpoints = config.breakpoint_addresses()?;
    breakpoints.extend(&args.breakpoints);
    gb.breakpoints.set_breakpoints(breakpoints);
    if !gb.breakpoints.is_empty() {
        let list: Vec<String> = gb
            .breakpoints
            .addresses()
            .map(|addr| format!("${addr:04X}"))
            .collect();
        info!("Breakpoints: {}", list.join(" "));
    }

    info!(
        "Loaded {} ({} bytes), DMG {}",
        args.rom.display(),
        rom.len(),
        gb.dmg_revision.label()
    );

    let (tx, rx) = frame_channel();
    gb.attach_frame_sender(tx);
    let consumer = spawn_consumer(rx);

    let limits = Limits {
        frames: args.frames.or(config.frames),
        cycles: args.cycles,
        seconds: args.seconds.map(Duration::from_secs),
    };

    let start = Instant::now();
    let mut frame_count = 0u64;
    let outcome = loop {
        if limits.reached(&gb, frame_count, start) {
            break Ok(());
        }
        match gb.run_frame() {
            Ok(RunExit::Frame(_)) => {
                frame_count += 1;
                if args.debug && frame_count.is_multiple_of(60) {
                    debug!("{}", gb.cpu.debug_state());
                }
            }
            Ok(RunExit::Breakpoint(pc)) => report_breakpoint(&gb, pc),
            Ok(RunExit::LcdOff) => {
                frame_count += 1;
            }
            Err(e) => {
                error!("{}", gb.cpu.debug_state());
                break Err(e);
            }
        }
    };

    let cycles = gb.cpu.cycles;
    let dropped = gb.ppu.dropped_frames();
    drop(gb);
    let received = consumer.join().unwrap_or_else(|_| {
        warn!("frame consumer panicked");
        0
    });
    info!(
        "{frame_count} frames in {cycles} cycles ({:.2?}); consumer took {received}, {dropped} dropped",
        start.elapsed()
    );

    outcome.map_err(CliError::from)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let (config, config_err) = match config::load(args.config.as_deref()) {
        Ok(cfg) => (cfg, None),
        Err(e) => (DotboyConfig::default(), Some(e)),
    };
    init_logger(&args, &config);
    if let Some(e) = config_err {
        warn!("{e}; using defaults");
    }

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
