use std::thread;

use dotboy_core::hardware::DmgRevision;
use dotboy_core::mmu::{MemoryBus, REG_IF};
use dotboy_core::{CpuError, GameBoy, RunExit, frame_channel};

const ENTRY: usize = 0x0100;

fn rom_with(program: &[u8]) -> Vec<u8> {
    let mut rom = vec![0u8; 0x8000];
    rom[ENTRY..ENTRY + program.len()].copy_from_slice(program);
    rom
}

fn machine(program: &[u8]) -> GameBoy {
    let mut gb = GameBoy::new();
    gb.load_rom(&rom_with(program));
    gb
}

#[test]
fn idle_loop_produces_frames_on_schedule() {
    // JR -2
    let mut gb = machine(&[0x18, 0xFE]);

    let RunExit::Frame(frame) = gb.run_frame().unwrap() else {
        panic!("expected a frame");
    };
    assert_eq!(frame.number(), 1);
    assert_eq!(gb.cpu.cycles, 65_664);

    let RunExit::Frame(frame) = gb.run_frame().unwrap() else {
        panic!("expected a frame");
    };
    assert_eq!(frame.number(), 2);
    assert_eq!(gb.cpu.cycles, 135_888);
    assert_eq!(gb.cpu.regs.pc, 0x0100);
}

#[test]
fn revision_selects_boot_registers() {
    let gb = GameBoy::new_with_revision(DmgRevision::Rev0);
    assert_eq!(
        gb.cpu.debug_state(),
        "AF:0100 BC:FF13 DE:00C1 HL:8403 PC:0100 SP:FFFE CY:0"
    );
    assert_eq!(gb.mmu.read_byte(0xFF40), 0x91);

    let gb = GameBoy::new_power_on(DmgRevision::RevB);
    assert_eq!(gb.cpu.regs.pc, 0x0000);
    assert_eq!(gb.dmg_revision, DmgRevision::RevB);
}

#[test]
fn breakpoint_stops_before_the_instruction() {
    // NOP ; JR -2 (to itself)
    let mut gb = machine(&[0x00, 0x18, 0xFE]);
    gb.breakpoints.add(0x0101);

    assert!(matches!(gb.run_frame(), Ok(RunExit::Breakpoint(0x0101))));
    assert_eq!(gb.cpu.regs.pc, 0x0101);
    assert_eq!(gb.cpu.cycles, 4);

    // Continuing runs the JR once and lands back on the breakpoint.
    assert!(matches!(gb.run_frame(), Ok(RunExit::Breakpoint(0x0101))));
    assert_eq!(gb.cpu.cycles, 16);

    gb.breakpoints.set_suspended(true);
    assert!(matches!(gb.run_frame(), Ok(RunExit::Frame(_))));
}

#[test]
fn vblank_interrupt_runs_handler() {
    // LD A,0 ; LDH (IF),A ; LD A,1 ; LDH (IE),A ; EI ; JR -2
    let mut rom = rom_with(&[0x3E, 0x00, 0xE0, 0x0F, 0x3E, 0x01, 0xE0, 0xFF, 0xFB, 0x18, 0xFE]);
    // LD A,$42 ; LD ($C000),A ; RETI
    rom[0x40..0x46].copy_from_slice(&[0x3E, 0x42, 0xEA, 0x00, 0xC0, 0xD9]);
    let mut gb = GameBoy::new();
    gb.load_rom(&rom);

    assert!(matches!(gb.run_frame(), Ok(RunExit::Frame(_))));
    assert!(gb.cpu.ime);
    assert_eq!(gb.mmu.read_byte(REG_IF) & 0x01, 0x01);

    let dispatch = gb.step().unwrap();
    assert_eq!(dispatch.step.instruction, None);
    assert_eq!(dispatch.step.cycles, 20);
    assert_eq!(gb.cpu.regs.pc, 0x0040);
    assert_eq!(gb.mmu.read_byte(REG_IF) & 0x01, 0);

    for _ in 0..3 {
        gb.step().unwrap();
    }
    assert_eq!(gb.mmu.read_byte(0xC000), 0x42);
    assert_eq!(gb.cpu.regs.pc, 0x0109);
    assert!(gb.cpu.ime);
}

#[test]
fn illegal_opcode_aborts_the_frame() {
    let mut gb = machine(&[0xD3]);
    assert_eq!(
        gb.run_frame().unwrap_err(),
        CpuError::IllegalOpcode {
            opcode: 0xD3,
            pc: 0x0100
        }
    );
}

#[test]
fn switched_off_lcd_still_returns() {
    // LD A,0 ; LDH (LCDC),A ; JR -2
    let mut gb = machine(&[0x3E, 0x00, 0xE0, 0x40, 0x18, 0xFE]);
    assert!(matches!(gb.run_frame(), Ok(RunExit::LcdOff)));
    assert_eq!(gb.ppu.frames(), 0);
    assert_eq!(gb.ppu.ly(), 0);
    assert!(gb.cpu.cycles >= 70_224);
}

#[test]
fn reset_keeps_rom_and_breakpoints() {
    // LD A,$77 ; LD ($C000),A ; JR -2
    let mut gb = machine(&[0x3E, 0x77, 0xEA, 0x00, 0xC0, 0x18, 0xFE]);
    gb.breakpoints.add(0x0150);
    for _ in 0..3 {
        gb.step().unwrap();
    }
    assert_eq!(gb.mmu.read_byte(0xC000), 0x77);

    gb.reset();
    assert_eq!(gb.cpu.regs.pc, 0x0100);
    assert_eq!(gb.cpu.cycles, 0);
    assert_eq!(gb.mmu.read_byte(0xC000), 0x00);
    assert_eq!(gb.mmu.read_byte(0x0100), 0x3E);
    assert!(gb.breakpoints.contains(0x0150));
    assert_eq!(gb.ppu.ly(), 0);
}

#[test]
fn consumer_thread_sees_every_frame_not_dropped() {
    let mut gb = machine(&[0x18, 0xFE]);
    let (tx, rx) = frame_channel();
    gb.attach_frame_sender(tx);

    let consumer = thread::spawn(move || {
        let mut seen = Vec::new();
        while let Some(frame) = rx.recv() {
            seen.push(frame.number());
        }
        seen
    });

    for expected in 1..=5 {
        match gb.run_frame() {
            Ok(RunExit::Frame(frame)) => assert_eq!(frame.number(), expected),
            other => panic!("unexpected exit {other:?}"),
        }
    }
    let dropped = gb.ppu.dropped_frames();
    drop(gb);

    let seen = consumer.join().unwrap();
    assert_eq!(seen.len() as u64 + dropped, 5);
    assert!(seen.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(seen.first(), Some(&1));
}
