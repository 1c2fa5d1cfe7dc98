// Sprite evaluation and pattern fetch
//
// Each visible line prepares the NEXT line's sprites: secondary OAM is
// cleared at the start of the evaluation window, the 64-entry OAM is
// scanned in order for up to 8 sprites covering the coming line, and
// their pattern rows are fetched into per-sprite latches during cycles
// 257-320. The one-line lookahead is also why OAM Y coordinates appear
// one line below their raw value on hardware.

use super::constants::*;
use super::Ppu;

impl Ppu {
    /// Sprite height per CTRL bit 5
    pub(super) fn sprite_height(&self) -> u16 {
        if self.ctrl & CTRL_8X16_SPRITES != 0 {
            16
        } else {
            8
        }
    }

    /// Wipe secondary OAM ahead of evaluation (cycles 1-64 window)
    pub(super) fn clear_secondary_oam(&mut self) {
        self.secondary_oam = [0xFF; 32];
        self.sprite_count_next = 0;
        self.sprite_zero_next = false;
    }

    /// Scan OAM in order for sprites covering the next scanline
    ///
    /// The first 8 win; a 9th candidate sets the overflow flag and stops
    /// the scan. (The hardware's buggy overflow walk is not reproduced.)
    pub(super) fn evaluate_sprites(&mut self) {
        let line = self.scanline + 1;
        let height = self.sprite_height();
        let mut count = 0;

        for sprite in 0..64 {
            let y = self.oam[sprite * 4] as u16;
            if line < y || line >= y + height {
                continue;
            }
            if count == 8 {
                self.status |= STATUS_SPRITE_OVERFLOW;
                break;
            }
            let src = sprite * 4;
            let dst = count * 4;
            self.secondary_oam[dst..dst + 4].copy_from_slice(&self.oam[src..src + 4]);
            if sprite == 0 {
                self.sprite_zero_next = true;
            }
            count += 1;
        }

        self.sprite_count_next = count;
    }

    /// Fetch one selected sprite's pattern row into the line latches
    /// (cycles 257-320, one sprite per 8-cycle slot)
    pub(super) fn fetch_sprite(&mut self, slot: usize) {
        if slot >= self.sprite_count {
            // Unused slots stay transparent and off-screen
            self.sprite_pattern_low[slot] = 0;
            self.sprite_pattern_high[slot] = 0;
            self.sprite_attrs[slot] = 0;
            self.sprite_x[slot] = 0xFF;
            return;
        }

        let base = slot * 4;
        let y = self.secondary_oam[base] as u16;
        let tile = self.secondary_oam[base + 1];
        let attrs = self.secondary_oam[base + 2];
        let x = self.secondary_oam[base + 3];

        let height = self.sprite_height();
        let line = self.scanline + 1;
        let mut row = line - y;
        if attrs & OAM_ATTR_FLIP_V != 0 {
            row = height - 1 - row;
        }

        let addr = if height == 16 {
            // 8x16 sprites: tile bit 0 selects the pattern table and the
            // even/odd pair spans the two halves
            let bank = ((tile & 0x01) as u16) << 12;
            let mut tile = (tile & 0xFE) as u16;
            if row >= 8 {
                tile += 1;
                row -= 8;
            }
            bank + tile * 16 + row
        } else {
            let bank = if self.ctrl & CTRL_PT_SPRITES != 0 {
                0x1000
            } else {
                0x0000
            };
            bank + (tile as u16) * 16 + row
        };

        self.sprite_pattern_low[slot] = self.read_vram(addr);
        self.sprite_pattern_high[slot] = self.read_vram(addr + 8);
        self.sprite_attrs[slot] = attrs;
        self.sprite_x[slot] = x;
    }
}
