use crate::{
    breakpoints::BreakpointEngine,
    compositor::Palette,
    cpu::{Cpu, Step},
    error::CpuError,
    frame::{Frame, FrameSender},
    hardware::DmgRevision,
    mmu::{MemoryBus, Mmu, REG_LCDC},
    ppu::{FRAME_CYCLES, LcdControl, Ppu},
};

/// One CPU step and the PPU catching up with it.
#[derive(Clone, Debug)]
pub struct MachineStep {
    pub step: Step,
    pub frame: Option<Frame>,
}

/// Why [`GameBoy::run_frame`] returned.
#[derive(Clone, Debug)]
pub enum RunExit {
    Frame(Frame),
    /// PC reached a breakpoint; the instruction there has not run.
    Breakpoint(u16),
    /// A whole frame's worth of cycles passed with the LCD switched off.
    LcdOff,
}

pub struct GameBoy {
    pub cpu: Cpu,
    pub mmu: Mmu,
    pub ppu: Ppu,
    pub breakpoints: BreakpointEngine,
    pub dmg_revision: DmgRevision,
    rom: Vec<u8>,
}

impl GameBoy {
    pub fn new() -> Self {
        Self::new_with_revision(DmgRevision::default())
    }

    /// A machine in the state the boot ROM of `revision` hands over in.
    pub fn new_with_revision(revision: DmgRevision) -> Self {
        let mut mmu = Mmu::new();
        mmu.apply_boot_io_state();
        Self {
            cpu: Cpu::new_with_revision(revision),
            mmu,
            ppu: Ppu::new(),
            breakpoints: BreakpointEngine::default(),
            dmg_revision: revision,
            rom: Vec::new(),
        }
    }

    /// Create a Game Boy with cleared registers, for executing a boot ROM
    /// loaded at 0x0000.
    pub fn new_power_on(revision: DmgRevision) -> Self {
        Self {
            cpu: Cpu::new_power_on(),
            mmu: Mmu::new(),
            ppu: Ppu::new(),
            breakpoints: BreakpointEngine::default(),
            dmg_revision: revision,
            rom: Vec::new(),
        }
    }

    pub fn load_rom(&mut self, rom: &[u8]) {
        self.mmu.load_rom(rom);
        self.rom = rom.to_vec();
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.ppu.set_palette(palette);
    }

    pub fn attach_frame_sender(&mut self, sender: FrameSender) {
        self.ppu.attach_sender(sender);
    }

    /// Reset to the post-boot state, keeping the loaded ROM and breakpoints.
    pub fn reset(&mut self) {
        let mut fresh = Self::new_with_revision(self.dmg_revision);
        fresh.load_rom(&self.rom);
        self.cpu = fresh.cpu;
        self.mmu = fresh.mmu;
        self.ppu.reset();
    }

    /// Execute one instruction and advance the PPU by the cycles it took.
    pub fn step(&mut self) -> Result<MachineStep, CpuError> {
        let step = self.cpu.step(&mut self.mmu)?;
        let frame = self.ppu.step(step.cycles, &mut self.mmu);
        Ok(MachineStep { step, frame })
    }

    /// Run until the PPU completes a frame or PC reaches a breakpoint.
    ///
    /// Continuing after [`RunExit::Breakpoint`] runs the instruction at the
    /// breakpoint instead of stopping on it again.
    pub fn run_frame(&mut self) -> Result<RunExit, CpuError> {
        let mut spent = 0u32;
        loop {
            let pc = self.cpu.regs.pc;
            let at_boundary = !self.cpu.halted && !self.cpu.stopped;
            if at_boundary && self.breakpoints.should_break(pc) {
                self.breakpoints.resume(pc);
                return Ok(RunExit::Breakpoint(pc));
            }

            let MachineStep { step, frame } = self.step()?;
            if let Some(frame) = frame {
                return Ok(RunExit::Frame(frame));
            }

            spent = spent.saturating_add(step.cycles);
            if spent >= FRAME_CYCLES && !LcdControl(self.mmu.read_byte(REG_LCDC)).enabled() {
                return Ok(RunExit::LcdOff);
            }
        }
    }
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::new()
    }
}
