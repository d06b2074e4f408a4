//! Cycle-counted DMG Game Boy CPU and PPU core.
//!
//! This crate contains the platform-agnostic emulator logic (CPU/PPU/memory
//! bus). Hosts drive it through the [`gameboy`] facade, or step [`cpu::Cpu`]
//! and [`ppu::Ppu`] themselves against any [`mmu::MemoryBus`].

/// Execution breakpoints for the driving loop.
pub mod breakpoints;

/// Per-scanline pixel FIFO, tile fetchers and sprite mixing.
pub mod compositor;

/// LR35902 CPU core: register state, interrupt handshake and the step loop.
pub mod cpu;

/// Instruction fetch and operand decoding.
pub mod decoder;

/// Errors raised by decode and execute.
pub mod error;

/// Instruction semantics.
mod execute;

/// Finished frames and their hand-off to a consumer.
pub mod frame;

/// High-level facade that wires the CPU, memory and PPU into a single machine.
pub mod gameboy;

/// Hardware revisions.
pub mod hardware;

/// Memory bus capability and the flat backing store.
pub mod mmu;

#[rustfmt::skip]
mod opcode_table;

/// Opcode metadata tables.
pub mod opcodes;

/// LCD mode state machine.
pub mod ppu;

/// The register file.
pub mod registers;

pub use cpu::{Cpu, Flow, Step};
pub use error::CpuError;
pub use frame::{Frame, frame_channel};
pub use gameboy::{GameBoy, MachineStep, RunExit};
