// PPU constants

/// Screen width in pixels
pub const SCREEN_WIDTH: usize = 256;

/// Screen height in pixels (full NTSC field)
pub const SCREEN_HEIGHT: usize = 240;

/// Lines clipped from the top and bottom by the cropped output variant
pub const CROP_LINES: usize = 8;

/// Height of the cropped output (what most NTSC televisions showed)
pub const CROPPED_HEIGHT: usize = SCREEN_HEIGHT - 2 * CROP_LINES;

/// Size of one nametable in bytes (1KB)
pub(super) const NAMETABLE_SIZE: usize = 1024;

/// Number of nametable banks held internally (covers four-screen layouts)
pub(super) const NAMETABLE_BANKS: usize = 4;

/// Size of palette RAM in bytes
pub(super) const PALETTE_SIZE: usize = 32;

/// PPU register address mask: 8 registers mirrored through $2000-$3FFF
pub(super) const PPU_REGISTER_MASK: u16 = 0x0007;

// ========================================
// PPU timing (NTSC)
// ========================================

/// PPU cycles per scanline
pub(super) const CYCLES_PER_SCANLINE: u16 = 341;

/// Scanlines per frame
pub(super) const SCANLINES_PER_FRAME: u16 = 262;

/// Last visible scanline
pub(super) const LAST_VISIBLE_SCANLINE: u16 = 239;

/// Post-render scanline (idle)
pub(super) const POSTRENDER_SCANLINE: u16 = 240;

/// First vblank scanline; the vblank flag rises at cycle 1
pub(super) const FIRST_VBLANK_SCANLINE: u16 = 241;

/// Pre-render scanline; status flags clear at cycle 1
pub(super) const PRERENDER_SCANLINE: u16 = 261;

// ========================================
// CTRL register bits ($2000)
// ========================================

pub(super) const CTRL_ADDR_INC_32: u8 = 1 << 2;
pub(super) const CTRL_PT_SPRITES: u8 = 1 << 3;
pub(super) const CTRL_PT_BACKGROUND: u8 = 1 << 4;
pub(super) const CTRL_8X16_SPRITES: u8 = 1 << 5;
pub(super) const CTRL_NMI_ON_VBLANK: u8 = 1 << 7;

// ========================================
// MASK register bits ($2001)
// ========================================

pub(super) const MASK_NOCLIP_BACKGROUND: u8 = 1 << 1;
pub(super) const MASK_NOCLIP_SPRITES: u8 = 1 << 2;
pub(super) const MASK_RENDER_BACKGROUND: u8 = 1 << 3;
pub(super) const MASK_RENDER_SPRITES: u8 = 1 << 4;

// ========================================
// STATUS register bits ($2002)
// ========================================

pub(super) const STATUS_SPRITE_OVERFLOW: u8 = 1 << 5;
pub(super) const STATUS_SPRITE0_HIT: u8 = 1 << 6;
pub(super) const STATUS_VBLANK: u8 = 1 << 7;

// ========================================
// OAM attribute bits (sprite byte 2)
// ========================================

pub(super) const OAM_ATTR_PALETTE: u8 = 0x03;
pub(super) const OAM_ATTR_UNDER_BG: u8 = 1 << 5;
pub(super) const OAM_ATTR_FLIP_H: u8 = 1 << 6;
pub(super) const OAM_ATTR_FLIP_V: u8 = 1 << 7;
