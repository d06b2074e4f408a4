mod common;

use common::{PROGRAM_START, STACK_TOP, machine, machine_at, run};
use dotboy_core::cpu::Cpu;
use dotboy_core::error::CpuError;
use dotboy_core::mmu::{MemoryBus, REG_IE, REG_IF};
use dotboy_core::registers::{FLAG_C, FLAG_H, FLAG_N, FLAG_Z, Flag, Reg16};

#[test]
fn post_boot_state_matches_dmg() {
    let cpu = Cpu::new();
    assert_eq!(
        cpu.debug_state(),
        "AF:01B0 BC:0013 DE:00D8 HL:014D PC:0100 SP:FFFE CY:0"
    );
}

#[test]
fn add_and_sub_wrap_and_set_zero() {
    // ADD A,B ; SUB B ; ADC A,B ; SBC A,B
    let (mut cpu, mut mmu) = machine(&[0x80, 0x90, 0x88, 0x98]);
    let samples = [0x00, 0x01, 0x0F, 0x10, 0x7F, 0x80, 0xFE, 0xFF];
    for a in 0..=255u8 {
        for &b in &samples {
            for (offset, carry_in) in [(0u16, false), (1, false), (2, true), (3, true)] {
                cpu.regs.pc = PROGRAM_START + offset;
                cpu.regs.a = a;
                cpu.regs.b = b;
                cpu.regs.f = if carry_in { FLAG_C } else { 0 };
                cpu.step(&mut mmu).unwrap();

                let c = carry_in as u8;
                let expected = match offset {
                    0 => a.wrapping_add(b),
                    1 => a.wrapping_sub(b),
                    2 => a.wrapping_add(b).wrapping_add(c),
                    _ => a.wrapping_sub(b).wrapping_sub(c),
                };
                assert_eq!(cpu.regs.a, expected, "op {offset} a={a:02X} b={b:02X}");
                assert_eq!(cpu.regs.flag(Flag::Z), expected == 0);
                assert_eq!(cpu.regs.flag(Flag::N), offset % 2 == 1);
            }
        }
    }
}

#[test]
fn carry_and_half_carry_edges() {
    // ADD A,d8 ; CP d8
    let (mut cpu, mut mmu) = machine(&[0xC6, 0x01, 0xFE, 0x10]);
    cpu.regs.a = 0x0F;
    cpu.step(&mut mmu).unwrap();
    assert_eq!(cpu.regs.a, 0x10);
    assert_eq!(cpu.regs.f, FLAG_H);

    cpu.step(&mut mmu).unwrap();
    // CP leaves A alone.
    assert_eq!(cpu.regs.a, 0x10);
    assert_eq!(cpu.regs.f, FLAG_Z | FLAG_N);
}

#[test]
fn inc_dec_leave_carry_alone() {
    // INC B ; DEC C
    let (mut cpu, mut mmu) = machine(&[0x04, 0x0D]);
    cpu.regs.b = 0xFF;
    cpu.regs.c = 0x10;
    cpu.regs.f = FLAG_C;
    cpu.step(&mut mmu).unwrap();
    assert_eq!(cpu.regs.b, 0x00);
    assert_eq!(cpu.regs.f, FLAG_Z | FLAG_H | FLAG_C);
    cpu.step(&mut mmu).unwrap();
    assert_eq!(cpu.regs.c, 0x0F);
    assert_eq!(cpu.regs.f, FLAG_N | FLAG_H | FLAG_C);
}

#[test]
fn push_pop_round_trip_for_every_pair() {
    // PUSH rr ; LD rr,0 ; POP rr  (BC, DE, HL, AF)
    let programs: [(&[u8], Reg16); 4] = [
        (&[0xC5, 0x01, 0x00, 0x00, 0xC1], Reg16::BC),
        (&[0xD5, 0x11, 0x00, 0x00, 0xD1], Reg16::DE),
        (&[0xE5, 0x21, 0x00, 0x00, 0xE1], Reg16::HL),
        (&[0xF5, 0xAF, 0xF1], Reg16::AF),
    ];
    for (program, pair) in programs {
        let (mut cpu, mut mmu) = machine(program);
        let value = 0xBEE0;
        cpu.regs.set16(pair, value);

        cpu.step(&mut mmu).unwrap();
        assert_eq!(cpu.regs.sp, STACK_TOP - 2);
        assert_eq!(mmu.read_word(STACK_TOP - 2), Ok(value));

        run(&mut cpu, &mut mmu, 2);
        assert_eq!(cpu.regs.sp, STACK_TOP, "{pair:?}");
        assert_eq!(cpu.regs.get16(pair), value, "{pair:?}");
    }
}

#[test]
fn pop_af_masks_low_nibble() {
    // POP AF
    let (mut cpu, mut mmu) = machine(&[0xF1]);
    mmu.write_word(STACK_TOP, 0x12FF).unwrap();
    cpu.step(&mut mmu).unwrap();
    assert_eq!(cpu.regs.a, 0x12);
    assert_eq!(cpu.regs.f, 0xF0);
}

#[test]
fn pop_of_topmost_word_wraps_sp() {
    // POP BC
    let (mut cpu, mut mmu) = machine(&[0xC1]);
    cpu.regs.sp = 0xFFFE;
    mmu.write_word(0xFFFE, 0x1234).unwrap();
    cpu.step(&mut mmu).unwrap();
    assert_eq!(cpu.regs.get16(Reg16::BC), 0x1234);
    assert_eq!(cpu.regs.sp, 0x0000);
}

#[test]
fn stack_underflow_fails_without_side_effects() {
    // PUSH BC
    let (mut cpu, mut mmu) = machine(&[0xC5]);
    cpu.regs.sp = 0x0001;
    let before = cpu.regs;
    let err = cpu.step(&mut mmu).unwrap_err();
    assert!(matches!(err, CpuError::AddressOutOfRange { base: 0x0001, .. }));
    assert_eq!(cpu.regs, before);
    assert_eq!(cpu.cycles, 0);
}

#[test]
fn daa_overflow_correction() {
    let (mut cpu, mut mmu) = machine(&[0x27]);
    cpu.regs.a = 0x9A;
    cpu.regs.f = 0;
    cpu.step(&mut mmu).unwrap();
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.regs.flag(Flag::C));
    assert!(cpu.regs.flag(Flag::Z));
    assert!(!cpu.regs.flag(Flag::H));
}

#[test]
fn daa_after_bcd_add_and_sub() {
    // LD A,$45 ; ADD A,$38 ; DAA ; SUB $09 ; DAA
    let (mut cpu, mut mmu) = machine(&[0x3E, 0x45, 0xC6, 0x38, 0x27, 0xD6, 0x09, 0x27]);
    run(&mut cpu, &mut mmu, 3);
    assert_eq!(cpu.regs.a, 0x83);
    assert!(!cpu.regs.flag(Flag::C));
    run(&mut cpu, &mut mmu, 2);
    assert_eq!(cpu.regs.a, 0x74);
    assert!(cpu.regs.flag(Flag::N));
}

#[test]
fn jr_offsets_are_relative_to_the_next_instruction() {
    // Placed so the following instruction is at 0x0100.
    let (mut cpu, mut mmu) = machine_at(0x00FE, &[0x18, 0xFF]);
    let step = cpu.step(&mut mmu).unwrap();
    assert_eq!(cpu.regs.pc, 0x00FF);
    assert_eq!(step.cycles, 12);

    let (mut cpu, mut mmu) = machine_at(0x00FE, &[0x18, 0x7F]);
    cpu.step(&mut mmu).unwrap();
    assert_eq!(cpu.regs.pc, 0x017F);
}

#[test]
fn jr_to_itself_counts_as_a_jump() {
    let (mut cpu, mut mmu) = machine(&[0x18, 0xFE]);
    for _ in 0..3 {
        let step = cpu.step(&mut mmu).unwrap();
        assert_eq!(step.cycles, 12);
        assert_eq!(cpu.regs.pc, PROGRAM_START);
    }
}

#[test]
fn conditional_branches_charge_not_taken_cost() {
    // JR NZ,+2 with Z set: falls through.
    let (mut cpu, mut mmu) = machine(&[0x20, 0x02]);
    cpu.regs.f = FLAG_Z;
    assert_eq!(cpu.step(&mut mmu).unwrap().cycles, 8);
    assert_eq!(cpu.regs.pc, PROGRAM_START + 2);

    // CALL Z,$C100 taken, then RET C not taken, then RET.
    let (mut cpu, mut mmu) = machine(&[0xCC, 0x00, 0xC1]);
    mmu.load(0xC100, &[0xD8, 0xC9]);
    cpu.regs.f = FLAG_Z;
    assert_eq!(cpu.step(&mut mmu).unwrap().cycles, 24);
    assert_eq!(cpu.regs.pc, 0xC100);
    assert_eq!(mmu.read_word(cpu.regs.sp), Ok(PROGRAM_START + 3));
    assert_eq!(cpu.step(&mut mmu).unwrap().cycles, 8);
    assert_eq!(cpu.regs.pc, 0xC101);
    assert_eq!(cpu.step(&mut mmu).unwrap().cycles, 16);
    assert_eq!(cpu.regs.pc, PROGRAM_START + 3);
    assert_eq!(cpu.regs.sp, STACK_TOP);

    // JP NC,a16 not taken / taken.
    let (mut cpu, mut mmu) = machine(&[0xD2, 0x00, 0xD0]);
    cpu.regs.f = FLAG_C;
    assert_eq!(cpu.step(&mut mmu).unwrap().cycles, 12);
    cpu.regs.pc = PROGRAM_START;
    cpu.regs.f = 0;
    assert_eq!(cpu.step(&mut mmu).unwrap().cycles, 16);
    assert_eq!(cpu.regs.pc, 0xD000);
}

#[test]
fn rst_pushes_return_address() {
    // RST 10H at 0xF00C returns to 0xF00D.
    let (mut cpu, mut mmu) = machine_at(0xF00C, &[0xD7]);
    cpu.regs.sp = 0xCFFF;
    let step = cpu.step(&mut mmu).unwrap();
    assert_eq!(step.cycles, 16);
    assert_eq!(cpu.regs.sp, 0xCFFD);
    assert_eq!(mmu.read_word(0xCFFD), Ok(0xF00D));
    assert_eq!(cpu.regs.pc, 0x0010);
}

#[test]
fn rst_rejects_unaligned_vectors() {
    let (mut cpu, mut mmu) = machine(&[]);
    cpu.regs.sp = 0xCFFF;
    let err = cpu.restart(&mut mmu, 0x01, 0xF00D).unwrap_err();
    assert_eq!(
        err,
        CpuError::InvalidOperand {
            operand: "RST vector",
            value: 0x01
        }
    );
    assert_eq!(cpu.regs.sp, 0xCFFF);

    cpu.restart(&mut mmu, 0x38, 0xF00D).unwrap();
    assert_eq!(cpu.regs.pc, 0x0038);
}

#[test]
fn ei_takes_effect_after_the_next_instruction() {
    // EI ; NOP ; NOP
    let (mut cpu, mut mmu) = machine(&[0xFB, 0x00, 0x00]);
    cpu.step(&mut mmu).unwrap();
    assert!(!cpu.ime);
    assert!(cpu.ime_pending());
    cpu.step(&mut mmu).unwrap();
    assert!(cpu.ime);
    assert!(!cpu.ime_pending());
}

#[test]
fn di_right_after_ei_wins() {
    // EI ; DI ; NOP
    let (mut cpu, mut mmu) = machine(&[0xFB, 0xF3, 0x00]);
    run(&mut cpu, &mut mmu, 3);
    assert!(!cpu.ime);
}

#[test]
fn reti_enables_immediately() {
    let (mut cpu, mut mmu) = machine(&[0xD9]);
    mmu.write_word(STACK_TOP - 2, 0xC123).unwrap();
    cpu.regs.sp = STACK_TOP - 2;
    cpu.step(&mut mmu).unwrap();
    assert!(cpu.ime);
    assert_eq!(cpu.regs.pc, 0xC123);
}

#[test]
fn halt_idles_then_services_interrupt() {
    // HALT ; NOP
    let (mut cpu, mut mmu) = machine(&[0x76, 0x00]);
    cpu.ime = true;
    mmu.write_byte(REG_IE, 0x05);

    cpu.step(&mut mmu).unwrap();
    assert!(cpu.halted);
    for _ in 0..3 {
        let idle = cpu.step(&mut mmu).unwrap();
        assert_eq!(idle.instruction, None);
        assert_eq!(idle.cycles, 4);
        assert_eq!(cpu.regs.pc, PROGRAM_START + 1);
    }

    // Timer and VBlank both pending: VBlank has priority.
    mmu.write_byte(REG_IF, 0x05);
    let dispatch = cpu.step(&mut mmu).unwrap();
    assert_eq!(dispatch.instruction, None);
    assert_eq!(dispatch.cycles, 20);
    assert!(!cpu.halted);
    assert!(!cpu.ime);
    assert_eq!(cpu.regs.pc, 0x0040);
    assert_eq!(mmu.read_word(cpu.regs.sp), Ok(PROGRAM_START + 1));
    assert_eq!(mmu.read_byte(REG_IF), 0x04);
}

#[test]
fn halt_without_ime_wakes_and_continues() {
    // HALT ; INC A
    let (mut cpu, mut mmu) = machine(&[0x76, 0x3C]);
    mmu.write_byte(REG_IE, 0x01);
    cpu.step(&mut mmu).unwrap();
    assert!(cpu.halted);

    mmu.write_byte(REG_IF, 0x01);
    let step = cpu.step(&mut mmu).unwrap();
    assert!(!cpu.halted);
    assert_eq!(step.pc, PROGRAM_START + 1);
    assert_eq!(cpu.regs.a, 1);
    // Nothing was dispatched, so the request is still pending.
    assert_eq!(mmu.read_byte(REG_IF), 0x01);
}

#[test]
fn illegal_opcode_is_reported_and_pc_kept() {
    let (mut cpu, mut mmu) = machine(&[0xD3]);
    let err = cpu.step(&mut mmu).unwrap_err();
    assert_eq!(
        err,
        CpuError::IllegalOpcode {
            opcode: 0xD3,
            pc: PROGRAM_START
        }
    );
    assert_eq!(cpu.regs.pc, PROGRAM_START);
}

#[test]
fn fetch_past_end_of_address_space_fails() {
    // JP a16 in the very last byte.
    let (mut cpu, mut mmu) = machine_at(0xFFFF, &[0xC3]);
    assert!(matches!(
        cpu.step(&mut mmu),
        Err(CpuError::AddressOutOfRange { base: 0xFFFF, .. })
    ));
}

#[test]
fn sixteen_bit_arithmetic_flags() {
    // ADD HL,BC
    let (mut cpu, mut mmu) = machine(&[0x09]);
    cpu.regs.set16(Reg16::HL, 0x0FFF);
    cpu.regs.set16(Reg16::BC, 0x0001);
    cpu.regs.f = FLAG_Z | FLAG_N;
    cpu.step(&mut mmu).unwrap();
    assert_eq!(cpu.regs.hl(), 0x1000);
    assert_eq!(cpu.regs.f, FLAG_Z | FLAG_H);

    // ADD SP,+1 carries out of the low byte.
    let (mut cpu, mut mmu) = machine(&[0xE8, 0x01]);
    cpu.regs.sp = 0x00FF;
    cpu.regs.f = FLAG_Z;
    cpu.step(&mut mmu).unwrap();
    assert_eq!(cpu.regs.sp, 0x0100);
    assert_eq!(cpu.regs.f, FLAG_H | FLAG_C);

    // LD HL,SP-2
    let (mut cpu, mut mmu) = machine(&[0xF8, 0xFE]);
    cpu.regs.sp = 0xFFF8;
    cpu.step(&mut mmu).unwrap();
    assert_eq!(cpu.regs.hl(), 0xFFF6);
    assert_eq!(cpu.regs.sp, 0xFFF8);
    assert_eq!(cpu.regs.f, FLAG_H | FLAG_C);
}

#[test]
fn loads_through_memory() {
    // LD HL,$D000 ; LD (HL+),A ; LD (HL-),A ; LDH ($80),A ; LD C,$81 ; LD A,(C) ; LD ($D010),SP
    let (mut cpu, mut mmu) = machine(&[
        0x21, 0x00, 0xD0, 0x22, 0x32, 0xE0, 0x80, 0x0E, 0x81, 0xF2, 0x08, 0x10, 0xD0,
    ]);
    mmu.write_byte(0xFF81, 0x99);
    cpu.regs.a = 0x5A;
    run(&mut cpu, &mut mmu, 3);
    assert_eq!(mmu.read_byte(0xD000), 0x5A);
    assert_eq!(mmu.read_byte(0xD001), 0x5A);
    assert_eq!(cpu.regs.hl(), 0xD000);

    run(&mut cpu, &mut mmu, 3);
    assert_eq!(mmu.read_byte(0xFF80), 0x5A);
    assert_eq!(cpu.regs.a, 0x99);

    run(&mut cpu, &mut mmu, 1);
    assert_eq!(mmu.read_word(0xD010), Ok(STACK_TOP));
}

#[test]
fn cb_prefixed_operations() {
    // BIT 7,H ; SWAP (HL) ; RL C ; SET 0,B ; RES 7,A
    let (mut cpu, mut mmu) = machine(&[0xCB, 0x7C, 0xCB, 0x36, 0xCB, 0x11, 0xCB, 0xC0, 0xCB, 0xBF]);
    cpu.regs.set16(Reg16::HL, 0xD0F0);
    mmu.write_byte(0xD0F0, 0x1F);
    cpu.regs.f = FLAG_C;
    cpu.regs.c = 0x80;
    cpu.regs.a = 0xFF;

    let step = cpu.step(&mut mmu).unwrap();
    assert_eq!(step.cycles, 8);
    assert_eq!(cpu.regs.f, FLAG_H | FLAG_C);

    let step = cpu.step(&mut mmu).unwrap();
    assert_eq!(step.cycles, 16);
    assert_eq!(mmu.read_byte(0xD0F0), 0xF1);
    assert_eq!(cpu.regs.f, 0);

    cpu.regs.f = FLAG_C;
    cpu.step(&mut mmu).unwrap();
    assert_eq!(cpu.regs.c, 0x01);
    assert_eq!(cpu.regs.f, FLAG_C);

    run(&mut cpu, &mut mmu, 2);
    assert_eq!(cpu.regs.b, 0x01);
    assert_eq!(cpu.regs.a, 0x7F);
    assert_eq!(cpu.regs.pc, PROGRAM_START + 10);
}

#[test]
fn accumulator_rotates_clear_zero() {
    // RLCA ; RRA
    let (mut cpu, mut mmu) = machine(&[0x07, 0x1F]);
    cpu.regs.a = 0x80;
    cpu.regs.f = FLAG_Z;
    cpu.step(&mut mmu).unwrap();
    assert_eq!(cpu.regs.a, 0x01);
    assert_eq!(cpu.regs.f, FLAG_C);
    cpu.step(&mut mmu).unwrap();
    assert_eq!(cpu.regs.a, 0x80);
    assert_eq!(cpu.regs.f, FLAG_C);
}

#[test]
fn cycle_total_accumulates() {
    // NOP ; LD BC,d16 ; PUSH BC
    let (mut cpu, mut mmu) = machine(&[0x00, 0x01, 0x00, 0x00, 0xC5]);
    let spent = run(&mut cpu, &mut mmu, 3);
    assert_eq!(spent, 4 + 12 + 16);
    assert_eq!(cpu.cycles, 32);
}

#[test]
fn stop_idles_until_an_interrupt_is_pending() {
    // STOP ; INC A
    let (mut cpu, mut mmu) = machine(&[0x10, 0x00, 0x3C]);
    cpu.step(&mut mmu).unwrap();
    assert!(cpu.stopped);
    assert_eq!(cpu.regs.pc, PROGRAM_START + 2);

    let idle = cpu.step(&mut mmu).unwrap();
    assert_eq!(idle.instruction, None);
    assert_eq!(idle.cycles, 4);
    assert_eq!(cpu.regs.a, 0);

    mmu.write_byte(REG_IE, 0x10);
    mmu.write_byte(REG_IF, 0x10);
    cpu.step(&mut mmu).unwrap();
    assert!(!cpu.stopped);
    assert_eq!(cpu.regs.a, 1);
}

#[test]
fn failed_dispatch_stays_halted() {
    // HALT
    let (mut cpu, mut mmu) = machine(&[0x76]);
    cpu.ime = true;
    mmu.write_byte(REG_IE, 0x01);
    cpu.step(&mut mmu).unwrap();
    assert!(cpu.halted);

    cpu.regs.sp = 0x0001;
    mmu.write_byte(REG_IF, 0x01);
    assert!(matches!(
        cpu.step(&mut mmu),
        Err(CpuError::AddressOutOfRange { base: 0x0001, .. })
    ));
    assert!(cpu.halted);
    assert!(cpu.ime);
    assert_eq!(cpu.regs.pc, PROGRAM_START + 1);
    assert_eq!(cpu.regs.sp, 0x0001);
    assert_eq!(mmu.read_byte(REG_IF), 0x01);
}

#[test]
fn cpl_scf_ccf_flags() {
    // CPL ; SCF ; CCF ; CCF
    let (mut cpu, mut mmu) = machine(&[0x2F, 0x37, 0x3F, 0x3F]);
    cpu.regs.a = 0x35;
    cpu.regs.f = FLAG_Z | FLAG_C;

    cpu.step(&mut mmu).unwrap();
    assert_eq!(cpu.regs.a, 0xCA);
    assert_eq!(cpu.regs.f, FLAG_Z | FLAG_N | FLAG_H | FLAG_C);

    cpu.step(&mut mmu).unwrap();
    assert_eq!(cpu.regs.f, FLAG_Z | FLAG_C);

    cpu.step(&mut mmu).unwrap();
    assert_eq!(cpu.regs.f, FLAG_Z);

    cpu.step(&mut mmu).unwrap();
    assert_eq!(cpu.regs.f, FLAG_Z | FLAG_C);
    assert_eq!(cpu.regs.a, 0xCA);
}
