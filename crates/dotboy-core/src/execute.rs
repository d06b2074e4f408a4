//! Instruction semantics.
//!
//! Unprefixed opcodes are dispatched on the `x`/`z` fields of the opcode byte
//! (`x = op[7:6]`, `y = op[5:3]`, `z = op[2:0]`), which groups them into the
//! same blocks the encoding uses: loads and 16-bit arithmetic in block 0,
//! register moves in block 1, ALU in block 2, control flow and I/O in block 3.
//!
//! Handlers compute candidate Z/N/H/C values; the opcode's declared
//! [`FlagEffects`] decide which of them reach F.

use crate::cpu::{Cpu, Flow};
use crate::decoder::Instruction;
use crate::error::CpuError;
use crate::mmu::MemoryBus;
use crate::opcodes::FlagEffects;
use crate::registers::{Flag, Reg8, Reg16};

const IO_PAGE: u16 = 0xFF00;

/// Flag values an operation produced, before the opcode's effects apply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Computed {
    z: bool,
    n: bool,
    h: bool,
    c: bool,
}

/// An 8-bit operand slot: a register or the byte at (HL).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Operand8 {
    Reg(Reg8),
    IndirectHl,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Condition {
    NotZero,
    Zero,
    NoCarry,
    Carry,
}

fn operand8(index: u8) -> Result<Operand8, CpuError> {
    Ok(match index {
        0 => Operand8::Reg(Reg8::B),
        1 => Operand8::Reg(Reg8::C),
        2 => Operand8::Reg(Reg8::D),
        3 => Operand8::Reg(Reg8::E),
        4 => Operand8::Reg(Reg8::H),
        5 => Operand8::Reg(Reg8::L),
        6 => Operand8::IndirectHl,
        7 => Operand8::Reg(Reg8::A),
        _ => {
            return Err(CpuError::InvalidOperand {
                operand: "r8 selector",
                value: index as u16,
            });
        }
    })
}

/// `rp` table: BC, DE, HL, SP.
fn pair(index: u8) -> Result<Reg16, CpuError> {
    match index {
        0 => Ok(Reg16::BC),
        1 => Ok(Reg16::DE),
        2 => Ok(Reg16::HL),
        3 => Ok(Reg16::SP),
        _ => Err(CpuError::InvalidOperand {
            operand: "rp selector",
            value: index as u16,
        }),
    }
}

/// `rp2` table used by PUSH/POP: BC, DE, HL, AF.
fn stack_pair(index: u8) -> Result<Reg16, CpuError> {
    match index {
        3 => Ok(Reg16::AF),
        _ => pair(index),
    }
}

fn condition(index: u8) -> Result<Condition, CpuError> {
    match index {
        0 => Ok(Condition::NotZero),
        1 => Ok(Condition::Zero),
        2 => Ok(Condition::NoCarry),
        3 => Ok(Condition::Carry),
        _ => Err(CpuError::InvalidOperand {
            operand: "condition",
            value: index as u16,
        }),
    }
}

fn add8(a: u8, b: u8, carry: u8) -> (u8, Computed) {
    let sum = a as u16 + b as u16 + carry as u16;
    let result = sum as u8;
    let flags = Computed {
        z: result == 0,
        n: false,
        h: (a & 0x0F) + (b & 0x0F) + carry > 0x0F,
        c: sum > 0xFF,
    };
    (result, flags)
}

fn sub8(a: u8, b: u8, carry: u8) -> (u8, Computed) {
    let result = a.wrapping_sub(b).wrapping_sub(carry);
    let flags = Computed {
        z: result == 0,
        n: true,
        h: (a & 0x0F) < (b & 0x0F) + carry,
        c: (a as u16) < b as u16 + carry as u16,
    };
    (result, flags)
}

/// Rotate/shift family in CB order: RLC RRC RL RR SLA SRA SWAP SRL.
/// Returns the result and the bit shifted out.
fn shift(kind: u8, val: u8, carry_in: bool) -> (u8, bool) {
    match kind {
        0 => (val.rotate_left(1), val & 0x80 != 0),
        1 => (val.rotate_right(1), val & 0x01 != 0),
        2 => ((val << 1) | carry_in as u8, val & 0x80 != 0),
        3 => ((val >> 1) | ((carry_in as u8) << 7), val & 0x01 != 0),
        4 => (val << 1, val & 0x80 != 0),
        5 => ((val >> 1) | (val & 0x80), val & 0x01 != 0),
        6 => (val.rotate_left(4), false),
        _ => (val >> 1, val & 0x01 != 0),
    }
}

/// BCD-correct A after an addition or subtraction (gbdev.io/pandocs/CPU_Instruction_Set.html).
fn daa(a: u8, subtract: bool, half: bool, carry: bool) -> (u8, Computed) {
    let mut result = a;
    let mut carry_out = carry;
    if subtract {
        if carry {
            result = result.wrapping_sub(0x60);
        }
        if half {
            result = result.wrapping_sub(0x06);
        }
    } else {
        if carry || a > 0x99 {
            result = result.wrapping_add(0x60);
            carry_out = true;
        }
        if half || (a & 0x0F) > 0x09 {
            result = result.wrapping_add(0x06);
        }
    }
    let flags = Computed {
        z: result == 0,
        n: subtract,
        h: false,
        c: carry_out,
    };
    (result, flags)
}

impl Cpu {
    #[inline]
    fn read_operand<B: MemoryBus + ?Sized>(&self, bus: &B, operand: Operand8) -> u8 {
        match operand {
            Operand8::Reg(reg) => self.regs.get8(reg),
            Operand8::IndirectHl => bus.read_byte(self.regs.hl()),
        }
    }

    #[inline]
    fn write_operand<B: MemoryBus + ?Sized>(&mut self, bus: &mut B, operand: Operand8, val: u8) {
        match operand {
            Operand8::Reg(reg) => self.regs.set8(reg, val),
            Operand8::IndirectHl => bus.write_byte(self.regs.hl(), val),
        }
    }

    fn apply_flags(&mut self, effects: FlagEffects, computed: Computed) {
        if !effects.touches_any() {
            return;
        }
        let r = &mut self.regs;
        let z = effects.z.apply(r.flag(Flag::Z), computed.z);
        let n = effects.n.apply(r.flag(Flag::N), computed.n);
        let h = effects.h.apply(r.flag(Flag::H), computed.h);
        let c = effects.c.apply(r.flag(Flag::C), computed.c);
        r.set_flag(Flag::Z, z);
        r.set_flag(Flag::N, n);
        r.set_flag(Flag::H, h);
        r.set_flag(Flag::C, c);
    }

    fn test(&self, cond: Condition) -> bool {
        match cond {
            Condition::NotZero => !self.regs.flag(Flag::Z),
            Condition::Zero => self.regs.flag(Flag::Z),
            Condition::NoCarry => !self.regs.flag(Flag::C),
            Condition::Carry => self.regs.flag(Flag::C),
        }
    }

    fn jump(&mut self, target: u16) -> Flow {
        self.regs.pc = target;
        Flow::Jumped
    }

    fn call<B: MemoryBus + ?Sized>(
        &mut self,
        bus: &mut B,
        target: u16,
        return_addr: u16,
    ) -> Result<Flow, CpuError> {
        self.push(bus, return_addr)?;
        Ok(self.jump(target))
    }

    fn ret<B: MemoryBus + ?Sized>(&mut self, bus: &B) -> Result<Flow, CpuError> {
        let target = self.pop(bus)?;
        Ok(self.jump(target))
    }

    /// SP plus the signed immediate, with H and C taken from the low byte.
    fn sp_plus_offset(&self, instr: &Instruction) -> (u16, Computed) {
        let sp = self.regs.sp;
        let e = instr.offset() as i16 as u16;
        let flags = Computed {
            z: false,
            n: false,
            h: (sp & 0x000F) + (e & 0x000F) > 0x000F,
            c: (sp & 0x00FF) + (e & 0x00FF) > 0x00FF,
        };
        (sp.wrapping_add(e), flags)
    }

    fn alu(&mut self, instr: &Instruction, kind: u8, value: u8) {
        let a = self.regs.a;
        let carry = self.regs.flag(Flag::C) as u8;
        let (result, flags) = match kind {
            0 => add8(a, value, 0),
            1 => add8(a, value, carry),
            2 | 7 => sub8(a, value, 0),
            3 => sub8(a, value, carry),
            4 => {
                let r = a & value;
                (r, Computed { z: r == 0, h: true, ..Computed::default() })
            }
            5 => {
                let r = a ^ value;
                (r, Computed { z: r == 0, ..Computed::default() })
            }
            _ => {
                let r = a | value;
                (r, Computed { z: r == 0, ..Computed::default() })
            }
        };
        // CP only compares.
        if kind != 7 {
            self.regs.a = result;
        }
        self.apply_flags(instr.spec().flags, flags);
    }

    /// Apply `instr` to the register file and `bus`.
    ///
    /// PC is not advanced here: it still points at `instr` on entry, and the
    /// returned [`Flow`] tells the scheduler whether the instruction moved it.
    /// Operands are fetched and stack addresses validated before anything is
    /// written, so an `Err` leaves the machine as it was.
    pub fn execute<B: MemoryBus + ?Sized>(
        &mut self,
        instr: &Instruction,
        bus: &mut B,
    ) -> Result<Flow, CpuError> {
        let spec = instr.spec();
        if spec.is_illegal() {
            return Err(CpuError::IllegalOpcode {
                opcode: spec.value,
                pc: self.regs.pc,
            });
        }
        if instr.is_prefixed() {
            self.execute_cb(instr, bus)?;
            return Ok(Flow::Continue);
        }

        let op = instr.opcode();
        let x = op >> 6;
        let y = (op >> 3) & 0x07;
        let z = op & 0x07;
        let p = y >> 1;
        let q = y & 0x01;
        let next = instr.next_pc(self.regs.pc);

        match (x, z) {
            (0, 0) => match y {
                0 => {}
                1 => bus.write_word(instr.imm16(), self.regs.sp)?,
                2 => self.stopped = true,
                3 => return Ok(self.jump(next.wrapping_add_signed(instr.offset() as i16))),
                _ => {
                    if self.test(condition(y - 4)?) {
                        return Ok(self.jump(next.wrapping_add_signed(instr.offset() as i16)));
                    }
                }
            },
            (0, 1) => {
                let rp = pair(p)?;
                if q == 0 {
                    self.regs.set16(rp, instr.imm16());
                } else {
                    let hl = self.regs.hl();
                    let val = self.regs.get16(rp);
                    let sum = hl as u32 + val as u32;
                    self.regs.set16(Reg16::HL, sum as u16);
                    let flags = Computed {
                        z: false,
                        n: false,
                        h: (hl & 0x0FFF) + (val & 0x0FFF) > 0x0FFF,
                        c: sum > 0xFFFF,
                    };
                    self.apply_flags(spec.flags, flags);
                }
            }
            (0, 2) => {
                let hl = self.regs.hl();
                let addr = match p {
                    0 => self.regs.get16(Reg16::BC),
                    1 => self.regs.get16(Reg16::DE),
                    _ => hl,
                };
                if q == 0 {
                    bus.write_byte(addr, self.regs.a);
                } else {
                    self.regs.a = bus.read_byte(addr);
                }
                match p {
                    2 => self.regs.set16(Reg16::HL, hl.wrapping_add(1)),
                    3 => self.regs.set16(Reg16::HL, hl.wrapping_sub(1)),
                    _ => {}
                }
            }
            (0, 3) => {
                let rp = pair(p)?;
                let val = self.regs.get16(rp);
                let val = if q == 0 {
                    val.wrapping_add(1)
                } else {
                    val.wrapping_sub(1)
                };
                self.regs.set16(rp, val);
            }
            (0, 4) | (0, 5) => {
                let target = operand8(y)?;
                let val = self.read_operand(bus, target);
                let (result, flags) = if z == 4 {
                    let r = val.wrapping_add(1);
                    (r, Computed { z: r == 0, n: false, h: val & 0x0F == 0x0F, c: false })
                } else {
                    let r = val.wrapping_sub(1);
                    (r, Computed { z: r == 0, n: true, h: val & 0x0F == 0x00, c: false })
                };
                self.write_operand(bus, target, result);
                self.apply_flags(spec.flags, flags);
            }
            (0, 6) => {
                let target = operand8(y)?;
                self.write_operand(bus, target, instr.imm8());
            }
            (0, 7) => self.accumulator_op(instr, y),
            (1, _) => {
                if op == 0x76 {
                    self.halted = true;
                } else {
                    let val = self.read_operand(bus, operand8(z)?);
                    self.write_operand(bus, operand8(y)?, val);
                }
            }
            (2, _) => {
                let val = self.read_operand(bus, operand8(z)?);
                self.alu(instr, y, val);
            }
            (3, 0) => match y {
                0..=3 => {
                    if self.test(condition(y)?) {
                        return self.ret(bus);
                    }
                }
                4 => bus.write_byte(IO_PAGE | instr.imm8() as u16, self.regs.a),
                5 => {
                    let (sp, flags) = self.sp_plus_offset(instr);
                    self.regs.sp = sp;
                    self.apply_flags(spec.flags, flags);
                }
                6 => self.regs.a = bus.read_byte(IO_PAGE | instr.imm8() as u16),
                _ => {
                    let (val, flags) = self.sp_plus_offset(instr);
                    self.regs.set16(Reg16::HL, val);
                    self.apply_flags(spec.flags, flags);
                }
            },
            (3, 1) => match (q, p) {
                (0, _) => {
                    let val = self.pop(bus)?;
                    self.regs.set16(stack_pair(p)?, val);
                }
                (_, 0) => return self.ret(bus),
                (_, 1) => {
                    let flow = self.ret(bus)?;
                    self.ime = true;
                    return Ok(flow);
                }
                (_, 2) => return Ok(self.jump(self.regs.hl())),
                _ => self.regs.sp = self.regs.hl(),
            },
            (3, 2) => match y {
                0..=3 => {
                    if self.test(condition(y)?) {
                        return Ok(self.jump(instr.imm16()));
                    }
                }
                4 => bus.write_byte(IO_PAGE | self.regs.c as u16, self.regs.a),
                5 => bus.write_byte(instr.imm16(), self.regs.a),
                6 => self.regs.a = bus.read_byte(IO_PAGE | self.regs.c as u16),
                _ => self.regs.a = bus.read_byte(instr.imm16()),
            },
            (3, 3) => match y {
                0 => return Ok(self.jump(instr.imm16())),
                6 => {
                    self.ime = false;
                    self.ime_scheduled = false;
                }
                7 => self.ime_scheduled = true,
                // The prefix byte never reaches here through the decoder.
                _ => {
                    return Err(CpuError::InvalidOperand {
                        operand: "opcode",
                        value: op as u16,
                    });
                }
            },
            (3, 4) => {
                if self.test(condition(y)?) {
                    return self.call(bus, instr.imm16(), next);
                }
            }
            (3, 5) => {
                if q == 0 {
                    let val = self.regs.get16(stack_pair(p)?);
                    self.push(bus, val)?;
                } else {
                    return self.call(bus, instr.imm16(), next);
                }
            }
            (3, 6) => self.alu(instr, y, instr.imm8()),
            (3, 7) => {
                self.restart(bus, y * 8, next)?;
                return Ok(Flow::Jumped);
            }
            _ => {
                return Err(CpuError::InvalidOperand {
                    operand: "opcode",
                    value: op as u16,
                });
            }
        }
        Ok(Flow::Continue)
    }

    /// RLCA RRCA RLA RRA DAA CPL SCF CCF.
    fn accumulator_op(&mut self, instr: &Instruction, y: u8) {
        let a = self.regs.a;
        let carry = self.regs.flag(Flag::C);
        let flags = match y {
            0..=3 => {
                let (result, out) = shift(y, a, carry);
                self.regs.a = result;
                Computed { c: out, ..Computed::default() }
            }
            4 => {
                let (result, flags) = daa(
                    a,
                    self.regs.flag(Flag::N),
                    self.regs.flag(Flag::H),
                    carry,
                );
                self.regs.a = result;
                flags
            }
            5 => {
                self.regs.a = !a;
                Computed::default()
            }
            6 => Computed::default(),
            _ => Computed { c: !carry, ..Computed::default() },
        };
        self.apply_flags(instr.spec().flags, flags);
    }

    fn execute_cb<B: MemoryBus + ?Sized>(
        &mut self,
        instr: &Instruction,
        bus: &mut B,
    ) -> Result<(), CpuError> {
        let op = instr.opcode();
        let y = (op >> 3) & 0x07;
        let target = operand8(op & 0x07)?;
        let val = self.read_operand(bus, target);

        match op >> 6 {
            0 => {
                let (result, out) = shift(y, val, self.regs.flag(Flag::C));
                self.write_operand(bus, target, result);
                let flags = Computed {
                    z: result == 0,
                    c: out,
                    ..Computed::default()
                };
                self.apply_flags(instr.spec().flags, flags);
            }
            1 => {
                let flags = Computed {
                    z: val & (1 << y) == 0,
                    h: true,
                    ..Computed::default()
                };
                self.apply_flags(instr.spec().flags, flags);
            }
            2 => self.write_operand(bus, target, val & !(1 << y)),
            _ => self.write_operand(bus, target, val | (1 << y)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_carry_and_carry_on_add() {
        let (r, f) = add8(0x0F, 0x01, 0);
        assert_eq!(r, 0x10);
        assert!(f.h && !f.c && !f.z);

        let (r, f) = add8(0xFF, 0x01, 0);
        assert_eq!(r, 0x00);
        assert!(f.h && f.c && f.z);

        let (r, f) = add8(0x0E, 0x01, 1);
        assert_eq!(r, 0x10);
        assert!(f.h);
    }

    #[test]
    fn subtraction_flags_are_borrows() {
        let (r, f) = sub8(0x10, 0x01, 0);
        assert_eq!(r, 0x0F);
        assert!(f.n && f.h && !f.c);

        let (r, f) = sub8(0x00, 0x01, 0);
        assert_eq!(r, 0xFF);
        assert!(f.h && f.c);

        let (r, f) = sub8(0x01, 0x00, 1);
        assert_eq!(r, 0x00);
        assert!(f.z && !f.h && !f.c);
    }

    #[test]
    fn daa_corrects_both_nibbles() {
        assert_eq!(daa(0x9A, false, false, false).0, 0x00);
        assert!(daa(0x9A, false, false, false).1.c);
        assert_eq!(daa(0x0A, false, false, false).0, 0x10);
        assert_eq!(daa(0x12, false, true, false).0, 0x18);
        // 0x20 - 0x01 = 0x1F with H set corrects to 0x19.
        assert_eq!(daa(0x1F, true, true, false).0, 0x19);
        assert_eq!(daa(0xA0, true, false, true).0, 0x40);
    }

    #[test]
    fn shift_family() {
        assert_eq!(shift(0, 0x81, false), (0x03, true));
        assert_eq!(shift(1, 0x01, false), (0x80, true));
        assert_eq!(shift(2, 0x80, true), (0x01, true));
        assert_eq!(shift(3, 0x01, true), (0x80, true));
        assert_eq!(shift(4, 0xC0, false), (0x80, true));
        assert_eq!(shift(5, 0x81, false), (0xC0, true));
        assert_eq!(shift(6, 0xF1, true), (0x1F, false));
        assert_eq!(shift(7, 0x81, false), (0x40, true));
    }

    #[test]
    fn selectors_reject_out_of_range_indices() {
        assert!(matches!(
            operand8(8),
            Err(CpuError::InvalidOperand { value: 8, .. })
        ));
        assert!(pair(4).is_err());
        assert_eq!(stack_pair(3), Ok(Reg16::AF));
        assert!(condition(4).is_err());
    }
}
