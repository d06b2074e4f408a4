#![allow(dead_code)]

use dotboy_core::compositor::{Palette, encode_tile_row};
use dotboy_core::cpu::Cpu;
use dotboy_core::frame::Frame;
use dotboy_core::mmu::Mmu;
use dotboy_core::ppu::Ppu;

pub const PROGRAM_START: u16 = 0xC000;
pub const STACK_TOP: u16 = 0xDFFE;

/// A cleared CPU about to execute `program` from WRAM.
pub fn machine(program: &[u8]) -> (Cpu, Mmu) {
    machine_at(PROGRAM_START, program)
}

pub fn machine_at(addr: u16, program: &[u8]) -> (Cpu, Mmu) {
    let mut mmu = Mmu::new();
    mmu.load(addr, program);
    let mut cpu = Cpu::new_power_on();
    cpu.regs.pc = addr;
    cpu.regs.sp = STACK_TOP;
    (cpu, mmu)
}

/// Step `count` instructions, returning the cycles they took.
pub fn run(cpu: &mut Cpu, mmu: &mut Mmu, count: usize) -> u32 {
    (0..count)
        .map(|_| cpu.step(mmu).expect("step failed").cycles)
        .sum()
}

/// Write the same row pattern to all eight rows of a tile at 0x8000.
pub fn fill_tile(mmu: &mut Mmu, tile: u8, row: [u8; 8]) {
    let (lo, hi) = encode_tile_row(row);
    let base = 0x8000 + tile as u16 * 16;
    for r in 0..8 {
        mmu.load(base + r * 2, &[lo, hi]);
    }
}

/// Run a fresh grayscale PPU from the top of a frame until it emits one.
pub fn render_frame(mmu: &mut Mmu) -> (Ppu, Frame) {
    let mut ppu = Ppu::with_palette(Palette::GRAYSCALE);
    loop {
        if let Some(frame) = ppu.step(456, mmu) {
            return (ppu, frame);
        }
    }
}

pub const WHITE: [u8; 3] = [0xFF; 3];
pub const LIGHT: [u8; 3] = [0xAA; 3];
pub const DARK: [u8; 3] = [0x55; 3];
pub const BLACK: [u8; 3] = [0x00; 3];
