use log::debug;

use crate::compositor::{LineRegisters, Palette, composite, select_sprites};
use crate::frame::{Delivery, FRAME_BYTES, Frame, FrameSender, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::mmu::{MemoryBus, REG_LCDC, REG_LY, REG_LYC, REG_STAT};

#[cfg(feature = "ppu-trace")]
macro_rules! ppu_trace {
    ($($arg:tt)*) => {
        log::trace!(target: "dotboy::ppu", $($arg)*);
    };
}
#[cfg(not(feature = "ppu-trace"))]
macro_rules! ppu_trace {
    ($($arg:tt)*) => {};
}

// Timing constants per LCD mode in T-cycles
const MODE2_CYCLES: u16 = 80; // OAM scan
const MODE3_CYCLES: u16 = 172; // Pixel transfer
pub const LINE_CYCLES: u16 = 456;

// Number of lines spent in VBlank
const VBLANK_LINES: u8 = 10;
const LAST_LINE: u8 = SCREEN_HEIGHT as u8 + VBLANK_LINES - 1;

pub const FRAME_CYCLES: u32 = LINE_CYCLES as u32 * (LAST_LINE as u32 + 1);

const IF_VBLANK: u8 = 0x01;
const IF_STAT: u8 = 0x02;

/// LCDC (0xFF40) bitfield view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LcdControl(pub u8);

impl LcdControl {
    #[inline]
    pub fn enabled(self) -> bool {
        self.0 & 0x80 != 0
    }

    #[inline]
    pub fn window_map_base(self) -> u16 {
        if self.0 & 0x40 != 0 { 0x9C00 } else { 0x9800 }
    }

    #[inline]
    pub fn window_enabled(self) -> bool {
        self.0 & 0x20 != 0
    }

    /// Tile data at 0x8000 indexed unsigned, rather than 0x9000 signed.
    #[inline]
    pub fn unsigned_tile_data(self) -> bool {
        self.0 & 0x10 != 0
    }

    #[inline]
    pub fn bg_map_base(self) -> u16 {
        if self.0 & 0x08 != 0 { 0x9C00 } else { 0x9800 }
    }

    #[inline]
    pub fn sprite_height(self) -> u8 {
        if self.0 & 0x04 != 0 { 16 } else { 8 }
    }

    #[inline]
    pub fn sprites_enabled(self) -> bool {
        self.0 & 0x02 != 0
    }

    /// On DMG this gates both background and window.
    #[inline]
    pub fn bg_enabled(self) -> bool {
        self.0 & 0x01 != 0
    }
}

/// STAT (0xFF41) bitfield view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LcdStat(pub u8);

impl LcdStat {
    #[inline]
    pub fn lyc_interrupt(self) -> bool {
        self.0 & 0x40 != 0
    }

    #[inline]
    pub fn oam_interrupt(self) -> bool {
        self.0 & 0x20 != 0
    }

    #[inline]
    pub fn vblank_interrupt(self) -> bool {
        self.0 & 0x10 != 0
    }

    #[inline]
    pub fn hblank_interrupt(self) -> bool {
        self.0 & 0x08 != 0
    }

    #[inline]
    pub fn coincidence(self) -> bool {
        self.0 & 0x04 != 0
    }

    #[inline]
    pub fn mode(self) -> Mode {
        Mode::from_bits(self.0)
    }

    /// Replace the read-only bits, keeping the interrupt selects.
    pub fn with_status(self, mode: Mode, coincidence: bool) -> Self {
        LcdStat(0x80 | (self.0 & 0x78) | ((coincidence as u8) << 2) | mode.bits())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    HBlank,
    VBlank,
    OamSearch,
    PixelDrawing,
}

impl Mode {
    #[inline]
    pub fn bits(self) -> u8 {
        match self {
            Mode::HBlank => 0,
            Mode::VBlank => 1,
            Mode::OamSearch => 2,
            Mode::PixelDrawing => 3,
        }
    }

    #[inline]
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => Mode::HBlank,
            1 => Mode::VBlank,
            2 => Mode::OamSearch,
            _ => Mode::PixelDrawing,
        }
    }

    /// Dot within the line at which this mode ends.
    fn end_dot(self) -> u16 {
        match self {
            Mode::OamSearch => MODE2_CYCLES,
            Mode::PixelDrawing => MODE2_CYCLES + MODE3_CYCLES,
            Mode::HBlank | Mode::VBlank => LINE_CYCLES,
        }
    }
}

/// The LCD controller's mode state machine.
///
/// Advanced by the number of cycles the CPU just spent. LY and the STAT
/// status bits are mirrored onto the bus after every transition; a scanline
/// is drawn when the line enters pixel drawing.
pub struct Ppu {
    mode: Mode,
    ly: u8,
    dot: u16,
    /// Internal window line counter
    window_line: u8,
    lcd_on: bool,
    stat_irq_line: bool,
    palette: Palette,
    buffer: Box<[u8]>,
    frames: u64,
    last_frame: Option<Frame>,
    sender: Option<FrameSender>,
    dropped: u64,
}

impl Ppu {
    pub fn new() -> Self {
        Self::with_palette(Palette::default())
    }

    pub fn with_palette(palette: Palette) -> Self {
        Self {
            mode: Mode::OamSearch,
            ly: 0,
            dot: 0,
            window_line: 0,
            lcd_on: true,
            stat_irq_line: false,
            palette,
            buffer: vec![0; FRAME_BYTES].into_boxed_slice(),
            frames: 0,
            last_frame: None,
            sender: None,
            dropped: 0,
        }
    }

    /// Offer every completed frame to `sender` from now on.
    pub fn attach_sender(&mut self, sender: FrameSender) {
        self.sender = Some(sender);
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn ly(&self) -> u8 {
        self.ly
    }

    /// Dot within the current line, 0..456.
    #[inline]
    pub fn dot(&self) -> u16 {
        self.dot
    }

    pub fn window_line(&self) -> u8 {
        self.window_line
    }

    /// Number of frames completed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.last_frame.as_ref()
    }

    /// Frames the attached consumer was not ready for.
    pub fn dropped_frames(&self) -> u64 {
        self.dropped
    }

    /// Back to the top of a frame. The palette, the attached sender and the
    /// frame count survive.
    pub fn reset(&mut self) {
        self.mode = Mode::OamSearch;
        self.ly = 0;
        self.dot = 0;
        self.window_line = 0;
        self.lcd_on = true;
        self.stat_irq_line = false;
        self.buffer.fill(0);
    }

    /// Place the state machine at an arbitrary point of the frame.
    ///
    /// `dot` is clamped to the line. The bus registers are refreshed on the
    /// next [`Ppu::step`].
    pub fn seek(&mut self, ly: u8, mode: Mode, dot: u16) {
        self.ly = ly.min(LAST_LINE);
        self.mode = mode;
        self.dot = dot.min(LINE_CYCLES - 1);
        self.lcd_on = true;
    }

    /// Advance by `cycles` dots. Returns the frame completed on the way, if
    /// any.
    pub fn step<B: MemoryBus + ?Sized>(&mut self, cycles: u32, bus: &mut B) -> Option<Frame> {
        let lcdc = LcdControl(bus.read_byte(REG_LCDC));
        if !lcdc.enabled() {
            if self.lcd_on {
                self.switch_off(bus);
            }
            return None;
        }
        if !self.lcd_on {
            self.switch_on(bus);
        }

        let mut completed = None;
        let mut remaining = cycles;
        while remaining > 0 {
            let end = self.mode.end_dot();
            let advance = remaining.min(end.saturating_sub(self.dot) as u32);
            self.dot += advance as u16;
            remaining -= advance;
            if self.dot >= end {
                if let Some(frame) = self.advance_mode(bus) {
                    completed = Some(frame);
                }
            }
        }
        self.sync_registers(bus);
        self.update_stat_irq(bus);
        completed
    }

    fn switch_off<B: MemoryBus + ?Sized>(&mut self, bus: &mut B) {
        debug!("LCD off at LY={}", self.ly);
        self.lcd_on = false;
        self.mode = Mode::HBlank;
        self.ly = 0;
        self.dot = 0;
        self.window_line = 0;
        self.stat_irq_line = false;
        self.sync_registers(bus);
    }

    fn switch_on<B: MemoryBus + ?Sized>(&mut self, bus: &mut B) {
        debug!("LCD on");
        self.lcd_on = true;
        self.mode = Mode::OamSearch;
        self.ly = 0;
        self.dot = 0;
        self.window_line = 0;
        self.sync_registers(bus);
    }

    fn advance_mode<B: MemoryBus + ?Sized>(&mut self, bus: &mut B) -> Option<Frame> {
        let mut completed = None;
        match self.mode {
            Mode::OamSearch => {
                self.sync_registers(bus);
                self.draw_line(bus);
                self.mode = Mode::PixelDrawing;
            }
            Mode::PixelDrawing => {
                self.mode = Mode::HBlank;
            }
            Mode::HBlank => {
                self.dot = 0;
                self.ly += 1;
                if self.ly as usize == SCREEN_HEIGHT {
                    self.mode = Mode::VBlank;
                    bus.request_interrupt(IF_VBLANK);
                    completed = Some(self.finish_frame());
                } else {
                    self.mode = Mode::OamSearch;
                }
            }
            Mode::VBlank => {
                self.dot = 0;
                if self.ly >= LAST_LINE {
                    self.ly = 0;
                    self.window_line = 0;
                    self.mode = Mode::OamSearch;
                } else {
                    self.ly += 1;
                }
            }
        }
        ppu_trace!("LY={} dot={} -> {:?}", self.ly, self.dot, self.mode);
        self.sync_registers(bus);
        self.update_stat_irq(bus);
        completed
    }

    fn draw_line<B: MemoryBus + ?Sized>(&mut self, bus: &B) {
        let regs = LineRegisters::read(bus, self.window_line);
        let sprites = select_sprites(bus, self.ly, regs.lcdc);
        let line = composite(&regs, &sprites, bus, &self.palette);
        if line.window_drawn() {
            self.window_line = self.window_line.wrapping_add(1);
        }
        let start = self.ly as usize * SCREEN_WIDTH * 3;
        if let Some(row) = self.buffer.get_mut(start..start + SCREEN_WIDTH * 3) {
            row.copy_from_slice(line.rgb());
        }
    }

    fn finish_frame(&mut self) -> Frame {
        self.frames += 1;
        let frame = Frame::new(self.frames, self.buffer.to_vec());
        self.buffer.fill(0);

        if let Some(sender) = &self.sender {
            match sender.offer(frame.clone()) {
                Delivery::Delivered => {}
                Delivery::Dropped => {
                    self.dropped += 1;
                    debug!("frame {} dropped, consumer busy", self.frames);
                }
                Delivery::Disconnected => {
                    debug!("frame consumer disconnected");
                    self.sender = None;
                }
            }
        }
        self.last_frame = Some(frame.clone());
        frame
    }

    fn sync_registers<B: MemoryBus + ?Sized>(&self, bus: &mut B) {
        bus.write_byte(REG_LY, self.ly);
        let coincidence = self.ly == bus.read_byte(REG_LYC);
        let stat = LcdStat(bus.read_byte(REG_STAT)).with_status(self.mode, coincidence);
        bus.write_byte(REG_STAT, stat.0);
    }

    fn update_stat_irq<B: MemoryBus + ?Sized>(&mut self, bus: &mut B) {
        let stat = LcdStat(bus.read_byte(REG_STAT));
        let mode_signal = match self.mode {
            Mode::HBlank => stat.hblank_interrupt(),
            Mode::VBlank => stat.vblank_interrupt(),
            Mode::OamSearch => stat.oam_interrupt(),
            Mode::PixelDrawing => false,
        };
        let current = (stat.coincidence() && stat.lyc_interrupt()) || mode_signal;
        if current && !self.stat_irq_line {
            bus.request_interrupt(IF_STAT);
        }
        self.stat_irq_line = current;
    }
}

impl Default for Ppu {
    fn default() -> Self {
        Self::new()
    }
}
