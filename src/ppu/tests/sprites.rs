//! Sprite pipeline tests: evaluation, rendering, priority, flags

use crate::ppu::constants::*;
use crate::ppu::{palette, Ppu};
use crate::test_support::test_ppu;

const FULL_FRAME: u32 = CYCLES_PER_SCANLINE as u32 * SCANLINES_PER_FRAME as u32;

fn render_frames(ppu: &mut Ppu, frames: u32) {
    ppu.advance(FULL_FRAME * frames);
}

/// Write one OAM entry
fn put_sprite(ppu: &mut Ppu, index: usize, y: u8, tile: u8, attrs: u8, x: u8) {
    let base = index * 4;
    ppu.oam[base] = y;
    ppu.oam[base + 1] = tile;
    ppu.oam[base + 2] = attrs;
    ppu.oam[base + 3] = x;
}

/// Fill a pattern tile's low plane so every pixel is color index 1
fn solid_tile(ppu: &mut Ppu, tile: u16) {
    for row in 0..8 {
        ppu.write_vram(tile * 16 + row, 0xFF);
    }
}

#[test]
fn test_single_sprite_renders_at_its_position() {
    let mut ppu = test_ppu();
    solid_tile(&mut ppu, 1);
    ppu.palette_ram[0] = 0x0F;
    ppu.palette_ram[0x11] = 0x28; // sprite palette 0, entry 1
    ppu.mask = MASK_RENDER_SPRITES | MASK_NOCLIP_SPRITES;

    // 8x8 sprite at (16, 16), pattern filled, palette 0
    put_sprite(&mut ppu, 0, 16, 1, 0, 16);
    // Park the other 63 sprites off screen
    for i in 1..64 {
        put_sprite(&mut ppu, i, 0xFF, 0, 0, 0xFF);
    }

    render_frames(&mut ppu, 2);

    let sprite_color = palette::argb(0x28);
    let universal = palette::argb(0x0F);
    let frame = ppu.frame();

    for y in 16..24 {
        for x in 16..24 {
            assert_eq!(frame[y * SCREEN_WIDTH + x], sprite_color, "({}, {})", x, y);
        }
    }
    assert_eq!(frame[15 * SCREEN_WIDTH + 16], universal, "row above");
    assert_eq!(frame[24 * SCREEN_WIDTH + 16], universal, "row below");
    assert_eq!(frame[16 * SCREEN_WIDTH + 15], universal, "column left");
    assert_eq!(frame[16 * SCREEN_WIDTH + 24], universal, "column right");
}

#[test]
fn test_horizontal_flip() {
    let mut ppu = test_ppu();
    // Only the leftmost pixel of each row is opaque
    for row in 0..8 {
        ppu.write_vram(16 + row, 0x80);
    }
    ppu.palette_ram[0x11] = 0x28;
    ppu.mask = MASK_RENDER_SPRITES | MASK_NOCLIP_SPRITES;

    put_sprite(&mut ppu, 0, 50, 1, OAM_ATTR_FLIP_H, 100);
    for i in 1..64 {
        put_sprite(&mut ppu, i, 0xFF, 0, 0, 0xFF);
    }

    render_frames(&mut ppu, 2);

    let sprite_color = palette::argb(0x28);
    let frame = ppu.frame();
    assert_ne!(frame[50 * SCREEN_WIDTH + 100], sprite_color, "left edge empty");
    assert_eq!(frame[50 * SCREEN_WIDTH + 107], sprite_color, "pixel moved right");
}

#[test]
fn test_vertical_flip() {
    let mut ppu = test_ppu();
    // Only the top row of the tile is opaque
    ppu.write_vram(16, 0xFF);
    ppu.palette_ram[0x11] = 0x28;
    ppu.mask = MASK_RENDER_SPRITES | MASK_NOCLIP_SPRITES;

    put_sprite(&mut ppu, 0, 50, 1, OAM_ATTR_FLIP_V, 100);
    for i in 1..64 {
        put_sprite(&mut ppu, i, 0xFF, 0, 0, 0xFF);
    }

    render_frames(&mut ppu, 2);

    let sprite_color = palette::argb(0x28);
    let frame = ppu.frame();
    assert_ne!(frame[50 * SCREEN_WIDTH + 100], sprite_color, "top row empty");
    assert_eq!(frame[57 * SCREEN_WIDTH + 100], sprite_color, "row moved down");
}

#[test]
fn test_sprite_behind_background() {
    let mut ppu = test_ppu();
    solid_tile(&mut ppu, 0); // background tile everywhere
    solid_tile(&mut ppu, 1);
    ppu.palette_ram[0] = 0x0F;
    ppu.palette_ram[1] = 0x21; // background color
    ppu.palette_ram[0x11] = 0x28; // sprite color
    ppu.mask = MASK_RENDER_BACKGROUND
        | MASK_RENDER_SPRITES
        | MASK_NOCLIP_BACKGROUND
        | MASK_NOCLIP_SPRITES;

    put_sprite(&mut ppu, 0, 50, 1, OAM_ATTR_UNDER_BG, 100);
    for i in 1..64 {
        put_sprite(&mut ppu, i, 0xFF, 0, 0, 0xFF);
    }

    render_frames(&mut ppu, 2);

    assert_eq!(
        ppu.frame()[50 * SCREEN_WIDTH + 100],
        palette::argb(0x21),
        "an opaque background wins over a behind-background sprite"
    );
}

#[test]
fn test_sprite_in_front_of_background() {
    let mut ppu = test_ppu();
    solid_tile(&mut ppu, 0);
    solid_tile(&mut ppu, 1);
    ppu.palette_ram[1] = 0x21;
    ppu.palette_ram[0x11] = 0x28;
    ppu.mask = MASK_RENDER_BACKGROUND
        | MASK_RENDER_SPRITES
        | MASK_NOCLIP_BACKGROUND
        | MASK_NOCLIP_SPRITES;

    put_sprite(&mut ppu, 0, 50, 1, 0, 100);
    for i in 1..64 {
        put_sprite(&mut ppu, i, 0xFF, 0, 0, 0xFF);
    }

    render_frames(&mut ppu, 2);

    assert_eq!(ppu.frame()[50 * SCREEN_WIDTH + 100], palette::argb(0x28));
}

#[test]
fn test_sprite_zero_hit() {
    let mut ppu = test_ppu();
    solid_tile(&mut ppu, 0);
    solid_tile(&mut ppu, 1);
    ppu.mask = MASK_RENDER_BACKGROUND
        | MASK_RENDER_SPRITES
        | MASK_NOCLIP_BACKGROUND
        | MASK_NOCLIP_SPRITES;

    put_sprite(&mut ppu, 0, 50, 1, 0, 100);
    for i in 1..64 {
        put_sprite(&mut ppu, i, 0xFF, 0, 0, 0xFF);
    }

    // One frame to prime the pipeline, then into the middle of the next
    render_frames(&mut ppu, 1);
    ppu.advance(CYCLES_PER_SCANLINE as u32 * 100);

    assert_eq!(ppu.status & STATUS_SPRITE0_HIT, STATUS_SPRITE0_HIT);
}

#[test]
fn test_no_sprite_zero_hit_on_transparent_background() {
    let mut ppu = test_ppu();
    solid_tile(&mut ppu, 1); // tile 0 (the background) stays empty
    ppu.mask = MASK_RENDER_BACKGROUND
        | MASK_RENDER_SPRITES
        | MASK_NOCLIP_BACKGROUND
        | MASK_NOCLIP_SPRITES;

    put_sprite(&mut ppu, 0, 50, 1, 0, 100);
    for i in 1..64 {
        put_sprite(&mut ppu, i, 0xFF, 0, 0, 0xFF);
    }

    render_frames(&mut ppu, 1);
    ppu.advance(CYCLES_PER_SCANLINE as u32 * 100);

    assert_eq!(ppu.status & STATUS_SPRITE0_HIT, 0);
}

#[test]
fn test_evaluation_selects_at_most_eight() {
    let mut ppu = test_ppu();
    // Nine sprites share scanline 51
    for i in 0..9 {
        put_sprite(&mut ppu, i, 50, 1, 0, (i * 8) as u8);
    }
    for i in 9..64 {
        put_sprite(&mut ppu, i, 0xFF, 0, 0, 0xFF);
    }
    ppu.mask = MASK_RENDER_SPRITES;

    ppu.scanline = 50;
    ppu.clear_secondary_oam();
    ppu.evaluate_sprites();

    assert_eq!(ppu.sprite_count_next, 8);
    assert_eq!(
        ppu.status & STATUS_SPRITE_OVERFLOW,
        STATUS_SPRITE_OVERFLOW,
        "the ninth candidate raises the overflow flag"
    );
}

#[test]
fn test_evaluation_tracks_sprite_zero() {
    let mut ppu = test_ppu();
    put_sprite(&mut ppu, 0, 50, 1, 0, 0);
    put_sprite(&mut ppu, 1, 50, 1, 0, 8);
    for i in 2..64 {
        put_sprite(&mut ppu, i, 0xFF, 0, 0, 0xFF);
    }

    ppu.scanline = 50;
    ppu.clear_secondary_oam();
    ppu.evaluate_sprites();
    assert!(ppu.sprite_zero_next);

    // A line covered only by sprite 1
    ppu.scanline = 30;
    put_sprite(&mut ppu, 1, 31, 1, 0, 8);
    ppu.clear_secondary_oam();
    ppu.evaluate_sprites();
    assert!(!ppu.sprite_zero_next);
    assert_eq!(ppu.sprite_count_next, 1);
}

#[test]
fn test_tall_sprites_cover_sixteen_lines() {
    let mut ppu = test_ppu();
    ppu.ctrl = CTRL_8X16_SPRITES;
    put_sprite(&mut ppu, 0, 40, 2, 0, 0);
    for i in 1..64 {
        put_sprite(&mut ppu, i, 0xFF, 0, 0, 0xFF);
    }

    // Line 55 is inside the 16-line window starting at 40
    ppu.scanline = 54;
    ppu.clear_secondary_oam();
    ppu.evaluate_sprites();
    assert_eq!(ppu.sprite_count_next, 1);

    // Line 56 is past it
    ppu.scanline = 55;
    ppu.clear_secondary_oam();
    ppu.evaluate_sprites();
    assert_eq!(ppu.sprite_count_next, 0);
}
