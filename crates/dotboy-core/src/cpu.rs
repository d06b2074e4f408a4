use crate::decoder::{Instruction, decode};
use crate::error::{CpuError, offset_addr};
use crate::hardware::DmgRevision;
use crate::mmu::{MemoryBus, REG_IE, REG_IF};
use crate::registers::{Reg16, Registers};

#[cfg(feature = "cpu-trace")]
macro_rules! cpu_trace {
    ($($arg:tt)*) => {
        log::trace!(target: "dotboy::cpu", $($arg)*);
    };
}
#[cfg(not(feature = "cpu-trace"))]
macro_rules! cpu_trace {
    ($($arg:tt)*) => {};
}

// Interrupt vectors (gbdev.io/pandocs/Interrupts.html)
const INTERRUPT_VBLANK: u16 = 0x40;
const INTERRUPT_STAT: u16 = 0x48;
const INTERRUPT_TIMER: u16 = 0x50;
const INTERRUPT_SERIAL: u16 = 0x58;
const INTERRUPT_JOYPAD: u16 = 0x60;

// Two wait states, two pushes and the jump.
const INTERRUPT_DISPATCH_CYCLES: u32 = 20;
// A halted CPU still burns one machine cycle per step.
const IDLE_CYCLES: u32 = 4;

// Post-boot CPU state from gbdev.io/pandocs/Power_Up_Sequence.html
const BOOT_PC: u16 = 0x0100;
const BOOT_SP: u16 = 0xFFFE;

const DMG0_BOOT_A: u8 = 0x01;
const DMG0_BOOT_F: u8 = 0x00;
const DMG0_BOOT_B: u8 = 0xFF;
const DMG0_BOOT_C: u8 = 0x13;
const DMG0_BOOT_D: u8 = 0x00;
const DMG0_BOOT_E: u8 = 0xC1;
const DMG0_BOOT_H: u8 = 0x84;
const DMG0_BOOT_L: u8 = 0x03;

const DMG_ABC_BOOT_A: u8 = 0x01;
const DMG_ABC_BOOT_F: u8 = 0xB0;
const DMG_ABC_BOOT_B: u8 = 0x00;
const DMG_ABC_BOOT_C: u8 = 0x13;
const DMG_ABC_BOOT_D: u8 = 0x00;
const DMG_ABC_BOOT_E: u8 = 0xD8;
const DMG_ABC_BOOT_H: u8 = 0x01;
const DMG_ABC_BOOT_L: u8 = 0x4D;

/// Whether an executed instruction moved PC itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Fall through; the scheduler advances PC past the instruction.
    Continue,
    /// A jump, call, return or taken branch already set PC.
    Jumped,
}

/// Outcome of one [`Cpu::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// PC at the start of the step.
    pub pc: u16,
    /// `None` when the step serviced an interrupt or idled in HALT/STOP.
    pub instruction: Option<Instruction>,
    pub cycles: u32,
}

pub struct Cpu {
    pub regs: Registers,
    pub cycles: u64,
    pub ime: bool,
    pub halted: bool,
    pub stopped: bool,
    // Set by EI, consumed after the following instruction.
    pub(crate) ime_scheduled: bool,
}

impl Cpu {
    pub fn new() -> Self {
        Self::new_with_revision(DmgRevision::default())
    }

    /// Create a CPU initialized to the post-boot register state for the
    /// given DMG hardware revision.
    pub fn new_with_revision(revision: DmgRevision) -> Self {
        let (a, f, b, c, d, e, h, l) = if revision.is_dmg0() {
            (
                DMG0_BOOT_A,
                DMG0_BOOT_F,
                DMG0_BOOT_B,
                DMG0_BOOT_C,
                DMG0_BOOT_D,
                DMG0_BOOT_E,
                DMG0_BOOT_H,
                DMG0_BOOT_L,
            )
        } else {
            (
                DMG_ABC_BOOT_A,
                DMG_ABC_BOOT_F,
                DMG_ABC_BOOT_B,
                DMG_ABC_BOOT_C,
                DMG_ABC_BOOT_D,
                DMG_ABC_BOOT_E,
                DMG_ABC_BOOT_H,
                DMG_ABC_BOOT_L,
            )
        };
        Self {
            regs: Registers {
                a,
                f,
                b,
                c,
                d,
                e,
                h,
                l,
                sp: BOOT_SP,
                pc: BOOT_PC,
            },
            ..Self::new_power_on()
        }
    }

    /// Create a CPU with every register cleared, for running a boot ROM
    /// mapped at 0x0000.
    pub fn new_power_on() -> Self {
        Self {
            regs: Registers::default(),
            cycles: 0,
            ime: false,
            halted: false,
            stopped: false,
            ime_scheduled: false,
        }
    }

    /// Whether an EI is waiting for the next instruction boundary.
    #[inline]
    pub fn ime_pending(&self) -> bool {
        self.ime_scheduled
    }

    /// Formatted CPU state string for debugging.
    pub fn debug_state(&self) -> String {
        format!(
            "AF:{:04X} BC:{:04X} DE:{:04X} HL:{:04X} PC:{:04X} SP:{:04X} CY:{}",
            self.regs.get16(Reg16::AF),
            self.regs.get16(Reg16::BC),
            self.regs.get16(Reg16::DE),
            self.regs.hl(),
            self.regs.pc,
            self.regs.sp,
            self.cycles
        )
    }

    /// Push `val`, decrementing SP by two first. Fails without touching SP
    /// if the stack would run below 0x0000.
    pub(crate) fn push<B: MemoryBus + ?Sized>(
        &mut self,
        bus: &mut B,
        val: u16,
    ) -> Result<(), CpuError> {
        let sp = offset_addr(self.regs.sp, -2)?;
        bus.write_word(sp, val)?;
        self.regs.sp = sp;
        Ok(())
    }

    /// Pop a word, then increment SP by two. Popping the topmost word at
    /// 0xFFFE wraps SP to 0x0000.
    pub(crate) fn pop<B: MemoryBus + ?Sized>(&mut self, bus: &B) -> Result<u16, CpuError> {
        let val = bus.read_word(self.regs.sp)?;
        self.regs.sp = self.regs.sp.wrapping_add(2);
        Ok(val)
    }

    /// `RST`: push `return_addr` and jump to one of the eight restart
    /// vectors 0x00, 0x08, ..., 0x38.
    pub fn restart<B: MemoryBus + ?Sized>(
        &mut self,
        bus: &mut B,
        vector: u8,
        return_addr: u16,
    ) -> Result<(), CpuError> {
        if vector & !0x38 != 0 {
            return Err(CpuError::InvalidOperand {
                operand: "RST vector",
                value: vector as u16,
            });
        }
        self.push(bus, return_addr)?;
        self.regs.pc = vector as u16;
        Ok(())
    }

    fn next_interrupt(pending: u8) -> (u8, u16) {
        if pending & 0x01 != 0 {
            (0x01, INTERRUPT_VBLANK)
        } else if pending & 0x02 != 0 {
            (0x02, INTERRUPT_STAT)
        } else if pending & 0x04 != 0 {
            (0x04, INTERRUPT_TIMER)
        } else if pending & 0x08 != 0 {
            (0x08, INTERRUPT_SERIAL)
        } else {
            (0x10, INTERRUPT_JOYPAD)
        }
    }

    /// Wakes from HALT/STOP on any pending enabled interrupt and, with IME
    /// set, dispatches the highest-priority one. Returns the cycles spent
    /// dispatching.
    fn handle_interrupts<B: MemoryBus + ?Sized>(
        &mut self,
        bus: &mut B,
    ) -> Result<Option<u32>, CpuError> {
        let pending = bus.read_byte(REG_IE) & bus.read_byte(REG_IF) & 0x1F;
        if pending == 0 {
            return Ok(None);
        }

        // A dispatch that cannot push must fail before HALT/STOP is left.
        if self.ime {
            offset_addr(self.regs.sp, -2)?;
        }

        if self.halted || self.stopped {
            cpu_trace!("wake on IF&IE={pending:02X}");
            self.halted = false;
            self.stopped = false;
        }
        if !self.ime {
            return Ok(None);
        }

        let (bit, vector) = Self::next_interrupt(pending);
        self.push(bus, self.regs.pc)?;
        self.ime = false;
        let flags = bus.read_byte(REG_IF);
        bus.write_byte(REG_IF, flags & !bit);
        cpu_trace!("interrupt {bit:02X} from {:04X} -> {vector:04X}", self.regs.pc);
        self.regs.pc = vector;
        Ok(Some(INTERRUPT_DISPATCH_CYCLES))
    }

    /// Run one instruction (or one interrupt dispatch, or one idle machine
    /// cycle while halted) and report what happened.
    ///
    /// On error nothing the failed instruction would have written has been
    /// applied and PC still points at it.
    pub fn step<B: MemoryBus + ?Sized>(&mut self, bus: &mut B) -> Result<Step, CpuError> {
        let pc = self.regs.pc;

        if let Some(cycles) = self.handle_interrupts(bus)? {
            self.cycles += cycles as u64;
            return Ok(Step {
                pc,
                instruction: None,
                cycles,
            });
        }

        if self.halted || self.stopped {
            self.cycles += IDLE_CYCLES as u64;
            return Ok(Step {
                pc,
                instruction: None,
                cycles: IDLE_CYCLES,
            });
        }

        let instruction = decode(pc, bus)?;
        // Captured before execution so the EI that arms it is not the
        // instruction that consumes it.
        let enable_after = self.ime_scheduled;
        let cycles = match self.execute(&instruction, bus)? {
            Flow::Continue => {
                self.regs.pc = instruction.next_pc(pc);
                instruction.cycles(false)
            }
            Flow::Jumped => instruction.cycles(true),
        };
        if enable_after && self.ime_scheduled {
            self.ime = true;
            self.ime_scheduled = false;
        }
        self.cycles += cycles as u64;

        cpu_trace!("{pc:04X}  {instruction:<16} {}", self.debug_state());
        Ok(Step {
            pc,
            instruction: Some(instruction),
            cycles,
        })
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
