//! Per-scanline pixel pipeline.
//!
//! Background and window tile rows are fetched eight pixels at a time into a
//! pixel FIFO; sprite rows are mixed into a second FIFO that is shifted out in
//! lockstep. Each dequeued pixel is resolved against its palette register and
//! colourised.

use crate::frame::SCREEN_WIDTH;
use crate::mmu::{
    MemoryBus, OAM_START, REG_BGP, REG_LCDC, REG_LY, REG_OBP0, REG_OBP1, REG_SCX, REG_SCY, REG_WX,
    REG_WY, VRAM_START,
};
use crate::ppu::LcdControl;

const TILE_BYTES: u16 = 16;
const SIGNED_TILE_BASE: i32 = 0x9000;
const MAP_TILES_PER_ROW: u16 = 32;

const FIFO_CAPACITY: usize = 16;
const TILE_WIDTH: usize = 8;

// Sprite limits
pub const MAX_SPRITES_PER_LINE: usize = 10;
const TOTAL_SPRITES: u8 = 40;

// Window X position is clipped if greater than this value
const WINDOW_X_MAX: u8 = 166;

// OAM attribute bits
const ATTR_BEHIND_BG: u8 = 0x80;
const ATTR_Y_FLIP: u8 = 0x40;
const ATTR_X_FLIP: u8 = 0x20;
const ATTR_PALETTE: u8 = 0x10;

/// Which palette register a pixel is resolved through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaletteSource {
    #[default]
    Background,
    Object0,
    Object1,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pixel {
    /// Raw 2-bit colour index from tile data.
    pub color: u8,
    pub source: PaletteSource,
    /// Sprite pixel that only shows over background colour 0.
    pub behind_background: bool,
}

impl Pixel {
    const fn background(color: u8) -> Self {
        Self {
            color,
            source: PaletteSource::Background,
            behind_background: false,
        }
    }
}

/// One OAM entry, in raw OAM coordinates (screen position + 16 / + 8).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpriteAttribute {
    pub y: u8,
    pub x: u8,
    pub tile: u8,
    pub flags: u8,
    pub oam_index: u8,
}

impl SpriteAttribute {
    pub fn from_oam(oam_index: u8, bytes: [u8; 4]) -> Self {
        Self {
            y: bytes[0],
            x: bytes[1],
            tile: bytes[2],
            flags: bytes[3],
            oam_index,
        }
    }

    #[inline]
    pub fn screen_x(&self) -> i16 {
        self.x as i16 - 8
    }

    #[inline]
    pub fn screen_y(&self) -> i16 {
        self.y as i16 - 16
    }

    fn palette(&self) -> PaletteSource {
        if self.flags & ATTR_PALETTE != 0 {
            PaletteSource::Object1
        } else {
            PaletteSource::Object0
        }
    }
}

/// Four RGB colours that DMG shades 0 (lightest) to 3 map onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub shades: [[u8; 3]; 4],
}

impl Palette {
    /// The green-tinted LCD.
    pub const CLASSIC: Palette = Palette {
        shades: [
            [0x9B, 0xBC, 0x0F],
            [0x8B, 0xAC, 0x0F],
            [0x30, 0x62, 0x30],
            [0x0F, 0x38, 0x0F],
        ],
    };

    pub const GRAYSCALE: Palette = Palette {
        shades: [
            [0xFF, 0xFF, 0xFF],
            [0xAA, 0xAA, 0xAA],
            [0x55, 0x55, 0x55],
            [0x00, 0x00, 0x00],
        ],
    };

    #[inline]
    pub fn rgb(&self, shade: u8) -> [u8; 3] {
        self.shades[(shade & 0x03) as usize]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::CLASSIC
    }
}

/// The registers one scanline is drawn from, sampled when the line starts
/// drawing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineRegisters {
    pub lcdc: LcdControl,
    pub ly: u8,
    pub scx: u8,
    pub scy: u8,
    pub wx: u8,
    pub wy: u8,
    pub bgp: u8,
    pub obp0: u8,
    pub obp1: u8,
    /// Window rows already drawn this frame.
    pub window_line: u8,
}

impl LineRegisters {
    pub fn read<B: MemoryBus + ?Sized>(bus: &B, window_line: u8) -> Self {
        Self {
            lcdc: LcdControl(bus.read_byte(REG_LCDC)),
            ly: bus.read_byte(REG_LY),
            scx: bus.read_byte(REG_SCX),
            scy: bus.read_byte(REG_SCY),
            wx: bus.read_byte(REG_WX),
            wy: bus.read_byte(REG_WY),
            bgp: bus.read_byte(REG_BGP),
            obp0: bus.read_byte(REG_OBP0),
            obp1: bus.read_byte(REG_OBP1),
            window_line,
        }
    }

    fn window_visible(&self) -> bool {
        self.lcdc.bg_enabled()
            && self.lcdc.window_enabled()
            && self.ly >= self.wy
            && self.wx <= WINDOW_X_MAX
    }

    #[inline(always)]
    fn shade(&self, px: Pixel) -> u8 {
        let reg = match px.source {
            PaletteSource::Background => self.bgp,
            PaletteSource::Object0 => self.obp0,
            PaletteSource::Object1 => self.obp1,
        };
        (reg >> (px.color * 2)) & 0x03
    }
}

/// Unpack one tile row (low-bit plane, high-bit plane) into eight colour
/// indices, leftmost pixel first.
pub fn decode_tile_row(lo: u8, hi: u8) -> [u8; 8] {
    let mut out = [0u8; 8];
    for (i, px) in out.iter_mut().enumerate() {
        let bit = 7 - i;
        *px = (((hi >> bit) & 1) << 1) | ((lo >> bit) & 1);
    }
    out
}

/// Inverse of [`decode_tile_row`]; returns `(lo, hi)`.
pub fn encode_tile_row(colors: [u8; 8]) -> (u8, u8) {
    let mut lo = 0u8;
    let mut hi = 0u8;
    for (i, &c) in colors.iter().enumerate() {
        let bit = 7 - i;
        lo |= (c & 0x01) << bit;
        hi |= ((c >> 1) & 0x01) << bit;
    }
    (lo, hi)
}

/// Fixed-capacity ring of pending pixels.
#[derive(Clone, Debug)]
pub struct PixelFifo {
    slots: [Pixel; FIFO_CAPACITY],
    head: usize,
    len: usize,
}

impl PixelFifo {
    pub fn new() -> Self {
        Self {
            slots: [Pixel::default(); FIFO_CAPACITY],
            head: 0,
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    #[inline]
    fn slot(&self, i: usize) -> usize {
        (self.head + i) % FIFO_CAPACITY
    }

    /// Enqueue one tile row. Returns `false` (and enqueues nothing) when
    /// there is no room for all eight pixels.
    pub fn push_row(&mut self, row: [Pixel; 8]) -> bool {
        if self.len + TILE_WIDTH > FIFO_CAPACITY {
            return false;
        }
        for px in row {
            let i = self.slot(self.len);
            self.slots[i] = px;
            self.len += 1;
        }
        true
    }

    pub fn pop(&mut self) -> Option<Pixel> {
        if self.len == 0 {
            return None;
        }
        let px = self.slots[self.head];
        self.head = (self.head + 1) % FIFO_CAPACITY;
        self.len -= 1;
        Some(px)
    }

    pub fn discard(&mut self, count: usize) {
        let n = count.min(self.len);
        self.head = (self.head + n) % FIFO_CAPACITY;
        self.len -= n;
    }

    /// Mix a sprite row into the next eight slots, padding with transparent
    /// pixels. A slot already holding an opaque sprite pixel keeps it, and
    /// colour 0 never replaces anything.
    pub fn overlay(&mut self, row: &[Pixel]) {
        while self.len < row.len().min(TILE_WIDTH) {
            let i = self.slot(self.len);
            self.slots[i] = Pixel::default();
            self.len += 1;
        }
        for (n, px) in row.iter().take(TILE_WIDTH).enumerate() {
            let i = self.slot(n);
            if px.color != 0 && self.slots[i].color == 0 {
                self.slots[i] = *px;
            }
        }
    }
}

impl Default for PixelFifo {
    fn default() -> Self {
        Self::new()
    }
}

/// Walks one row of a tile map, producing eight pixels per fetch.
struct TileFetcher {
    map_base: u16,
    /// Pixel row within the 256x256 map.
    row: u8,
    tile_x: u8,
    unsigned_tiles: bool,
    enabled: bool,
}

impl TileFetcher {
    fn background(regs: &LineRegisters) -> Self {
        Self {
            map_base: regs.lcdc.bg_map_base(),
            row: regs.ly.wrapping_add(regs.scy),
            tile_x: regs.scx / 8,
            unsigned_tiles: regs.lcdc.unsigned_tile_data(),
            enabled: regs.lcdc.bg_enabled(),
        }
    }

    fn window(regs: &LineRegisters) -> Self {
        Self {
            map_base: regs.lcdc.window_map_base(),
            row: regs.window_line,
            tile_x: 0,
            unsigned_tiles: regs.lcdc.unsigned_tile_data(),
            enabled: true,
        }
    }

    fn tile_addr(&self, tile: u8) -> u16 {
        if self.unsigned_tiles {
            VRAM_START + tile as u16 * TILE_BYTES
        } else {
            (SIGNED_TILE_BASE + tile as i8 as i32 * TILE_BYTES as i32) as u16
        }
    }

    fn fetch<B: MemoryBus + ?Sized>(&mut self, bus: &B) -> [Pixel; 8] {
        if !self.enabled {
            return [Pixel::background(0); 8];
        }
        let map_addr =
            self.map_base + (self.row / 8) as u16 * MAP_TILES_PER_ROW + self.tile_x as u16;
        let tile = bus.read_byte(map_addr);
        let addr = self.tile_addr(tile) + (self.row % 8) as u16 * 2;
        let colors = decode_tile_row(bus.read_byte(addr), bus.read_byte(addr + 1));
        self.tile_x = (self.tile_x + 1) % MAP_TILES_PER_ROW as u8;
        colors.map(Pixel::background)
    }
}

/// The first ten OAM entries (in OAM order) whose rows cover line `ly`.
pub fn select_sprites<B: MemoryBus + ?Sized>(bus: &B, ly: u8, lcdc: LcdControl) -> Vec<SpriteAttribute> {
    let height = lcdc.sprite_height() as i16;
    let line = ly as i16;
    let mut sprites = Vec::with_capacity(MAX_SPRITES_PER_LINE);
    for i in 0..TOTAL_SPRITES {
        if sprites.len() >= MAX_SPRITES_PER_LINE {
            break;
        }
        let base = OAM_START + i as u16 * 4;
        let bytes = [
            bus.read_byte(base),
            bus.read_byte(base + 1),
            bus.read_byte(base + 2),
            bus.read_byte(base + 3),
        ];
        let sprite = SpriteAttribute::from_oam(i, bytes);
        let top = sprite.screen_y();
        if line >= top && line < top + height {
            sprites.push(sprite);
        }
    }
    sprites
}

fn sprite_row<B: MemoryBus + ?Sized>(
    sprite: &SpriteAttribute,
    regs: &LineRegisters,
    bus: &B,
) -> [Pixel; 8] {
    let height = regs.lcdc.sprite_height() as i16;
    let mut line = (regs.ly as i16 - sprite.screen_y()).clamp(0, height - 1);
    if sprite.flags & ATTR_Y_FLIP != 0 {
        line = height - 1 - line;
    }
    let tile = if height == 16 {
        sprite.tile & 0xFE
    } else {
        sprite.tile
    };
    let addr = VRAM_START + tile as u16 * TILE_BYTES + line as u16 * 2;
    let mut colors = decode_tile_row(bus.read_byte(addr), bus.read_byte(addr + 1));
    if sprite.flags & ATTR_X_FLIP != 0 {
        colors.reverse();
    }
    let source = sprite.palette();
    let behind_background = sprite.flags & ATTR_BEHIND_BG != 0;
    colors.map(|color| Pixel {
        color,
        source,
        behind_background,
    })
}

/// One finished line of packed RGB.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scanline {
    rgb: [u8; SCREEN_WIDTH * 3],
    window_drawn: bool,
}

impl Scanline {
    #[inline]
    pub fn rgb(&self) -> &[u8] {
        &self.rgb
    }

    /// Whether any window pixel landed on this line.
    #[inline]
    pub fn window_drawn(&self) -> bool {
        self.window_drawn
    }
}

/// Materialise one visible scanline.
///
/// `sprites` is the line's selection from [`select_sprites`]; they are
/// overlaid in order of X position, then OAM index, which gives the DMG
/// priority between overlapping sprites.
pub fn composite<B: MemoryBus + ?Sized>(
    regs: &LineRegisters,
    sprites: &[SpriteAttribute],
    bus: &B,
    palette: &Palette,
) -> Scanline {
    let mut rgb = [0u8; SCREEN_WIDTH * 3];

    let mut queue: Vec<SpriteAttribute> = if regs.lcdc.sprites_enabled() {
        sprites.iter().take(MAX_SPRITES_PER_LINE).copied().collect()
    } else {
        Vec::new()
    };
    queue.sort_by_key(|s| (s.x, s.oam_index));
    let mut next_sprite = 0;

    let mut bg = PixelFifo::new();
    let mut obj = PixelFifo::new();
    let mut fetcher = TileFetcher::background(regs);
    bg.push_row(fetcher.fetch(bus));
    bg.push_row(fetcher.fetch(bus));
    bg.discard((regs.scx % 8) as usize);

    let window_visible = regs.window_visible();
    let window_start = regs.wx.saturating_sub(7) as usize;
    let mut in_window = false;

    for x in 0..SCREEN_WIDTH {
        if window_visible && !in_window && x == window_start {
            in_window = true;
            bg.clear();
            fetcher = TileFetcher::window(regs);
            bg.push_row(fetcher.fetch(bus));
            bg.push_row(fetcher.fetch(bus));
            // WX < 7 pushes the window's left edge off screen.
            bg.discard(7usize.saturating_sub(regs.wx as usize));
        }

        while let Some(sprite) = queue.get(next_sprite) {
            if sprite.screen_x() > x as i16 {
                break;
            }
            let row = sprite_row(sprite, regs, bus);
            let clipped = (x as i16 - sprite.screen_x()) as usize;
            if clipped < TILE_WIDTH {
                obj.overlay(&row[clipped..]);
            }
            next_sprite += 1;
        }

        let bg_px = bg.pop().unwrap_or_default();
        let px = match obj.pop() {
            Some(sp) if sp.color != 0 && (!sp.behind_background || bg_px.color == 0) => sp,
            _ => bg_px,
        };
        let shade = regs.shade(px);
        rgb[x * 3..x * 3 + 3].copy_from_slice(&palette.rgb(shade));

        if bg.len() <= TILE_WIDTH {
            bg.push_row(fetcher.fetch(bus));
        }
    }

    Scanline {
        rgb,
        window_drawn: in_window,
    }
}
