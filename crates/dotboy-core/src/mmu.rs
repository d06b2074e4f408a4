use log::{trace, warn};

use crate::error::{CpuError, offset_addr};

const ADDRESS_SPACE: usize = 0x1_0000;
// Without an MBC only the two fixed 16KiB banks are visible.
const MAX_ROM_SIZE: usize = 0x8000;

pub const ROM_END: u16 = 0x7FFF;
pub const VRAM_START: u16 = 0x8000;
pub const OAM_START: u16 = 0xFE00;
pub const OAM_SIZE: u16 = 0xA0;

// I/O registers (gbdev.io/pandocs/Hardware_Reg_List.html)
pub const REG_JOYP: u16 = 0xFF00;
pub const REG_IF: u16 = 0xFF0F;
pub const REG_LCDC: u16 = 0xFF40;
pub const REG_STAT: u16 = 0xFF41;
pub const REG_SCY: u16 = 0xFF42;
pub const REG_SCX: u16 = 0xFF43;
pub const REG_LY: u16 = 0xFF44;
pub const REG_LYC: u16 = 0xFF45;
pub const REG_DMA: u16 = 0xFF46;
pub const REG_BGP: u16 = 0xFF47;
pub const REG_OBP0: u16 = 0xFF48;
pub const REG_OBP1: u16 = 0xFF49;
pub const REG_WY: u16 = 0xFF4A;
pub const REG_WX: u16 = 0xFF4B;
pub const REG_IE: u16 = 0xFFFF;

/// Byte and word access to the 16-bit address space.
///
/// Word accessors are little-endian, the order the LR35902 keeps 16-bit
/// values in memory, and fail if the second byte would fall past 0xFFFF.
// Not big-endian: ROM immediates and stacked return addresses are stored low
// byte first.
pub trait MemoryBus {
    fn read_byte(&self, addr: u16) -> u8;

    fn write_byte(&mut self, addr: u16, val: u8);

    fn read_word(&self, addr: u16) -> Result<u16, CpuError> {
        let hi_addr = offset_addr(addr, 1)?;
        Ok(u16::from_le_bytes([
            self.read_byte(addr),
            self.read_byte(hi_addr),
        ]))
    }

    fn write_word(&mut self, addr: u16, val: u16) -> Result<(), CpuError> {
        let hi_addr = offset_addr(addr, 1)?;
        let [lo, hi] = val.to_le_bytes();
        self.write_byte(addr, lo);
        self.write_byte(hi_addr, hi);
        Ok(())
    }

    /// Raises bits in IF.
    fn request_interrupt(&mut self, mask: u8) {
        let pending = self.read_byte(REG_IF);
        self.write_byte(REG_IF, pending | mask);
    }
}

/// Flat 64KiB backing store.
///
/// The cartridge area is read-only and ignores writes, which stands in for
/// bank switching. A write to DMA copies 160 bytes into OAM immediately.
pub struct Mmu {
    mem: Box<[u8]>,
}

impl Mmu {
    pub fn new() -> Self {
        Self {
            mem: vec![0; ADDRESS_SPACE].into_boxed_slice(),
        }
    }

    /// Map a cartridge image at 0x0000.
    pub fn load_rom(&mut self, rom: &[u8]) {
        if rom.len() > MAX_ROM_SIZE {
            warn!(
                "ROM is {} bytes; only the first {} are mapped (no MBC)",
                rom.len(),
                MAX_ROM_SIZE
            );
        }
        let len = rom.len().min(MAX_ROM_SIZE);
        self.mem[..len].copy_from_slice(&rom[..len]);
    }

    /// Copy raw bytes to `addr`, bypassing the read-only cartridge area.
    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        let start = addr as usize;
        let end = (start + bytes.len()).min(ADDRESS_SPACE);
        if end - start < bytes.len() {
            warn!(
                "load at ${addr:04X} truncated to {} of {} bytes",
                end - start,
                bytes.len()
            );
        }
        self.mem[start..end].copy_from_slice(&bytes[..end - start]);
    }

    /// I/O register values left behind by the DMG boot ROM
    /// (gbdev.io/pandocs/Power_Up_Sequence.html).
    pub fn apply_boot_io_state(&mut self) {
        const BOOT_IO: [(u16, u8); 14] = [
            (REG_JOYP, 0xCF),
            (0xFF02, 0x7E),
            (0xFF04, 0xAB),
            (0xFF07, 0xF8),
            (REG_IF, 0xE1),
            (REG_LCDC, 0x91),
            (REG_STAT, 0x85),
            (REG_LY, 0x00),
            (REG_DMA, 0xFF),
            (REG_BGP, 0xFC),
            (REG_OBP0, 0xFF),
            (REG_OBP1, 0xFF),
            (REG_WX, 0x00),
            (REG_IE, 0x00),
        ];
        for (addr, val) in BOOT_IO {
            self.mem[addr as usize] = val;
        }
    }

    fn oam_dma(&mut self, page: u8) {
        let src = (page as usize) << 8;
        let dst = OAM_START as usize;
        for i in 0..OAM_SIZE as usize {
            self.mem[dst + i] = self.mem[(src + i) & 0xFFFF];
        }
    }
}

impl MemoryBus for Mmu {
    #[inline]
    fn read_byte(&self, addr: u16) -> u8 {
        match addr {
            // No joypad attached: both button groups read as released.
            REG_JOYP => (self.mem[addr as usize] & 0x30) | 0xCF,
            _ => self.mem[addr as usize],
        }
    }

    #[inline]
    fn write_byte(&mut self, addr: u16, val: u8) {
        match addr {
            0x0000..=ROM_END => {
                trace!("ignored cartridge write ${val:02X} -> ${addr:04X}");
            }
            REG_DMA => {
                self.mem[addr as usize] = val;
                self.oam_dma(val);
            }
            _ => self.mem[addr as usize] = val,
        }
    }
}

impl Default for Mmu {
    fn default() -> Self {
        Self::new()
    }
}
