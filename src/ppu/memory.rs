// PPU-side address space (14 bits)
//
// $0000-$1FFF pattern tables  -> cartridge CHR via the mapper
// $2000-$2FFF nametables      -> internal banks through the mirroring map
// $3000-$3EFF                 -> nametable mirror
// $3F00-$3FFF palette RAM     -> 32 bytes with the universal-color mirrors

use super::constants::NAMETABLE_SIZE;
use super::Ppu;
use crate::cartridge::Mirroring;

impl Ppu {
    /// Map a nametable address to an offset in internal VRAM
    ///
    /// The four logical tables fold onto physical banks according to the
    /// cartridge's layout; four-screen boards address all four banks.
    pub(super) fn nametable_offset(&self, addr: u16) -> usize {
        let addr = (addr & 0x0FFF) as usize;
        let table = addr / NAMETABLE_SIZE;
        let offset = addr % NAMETABLE_SIZE;

        let bank = match self.mirroring {
            Mirroring::Horizontal => [0, 0, 1, 1][table],
            Mirroring::Vertical => [0, 1, 0, 1][table],
            Mirroring::SingleScreen => 0,
            Mirroring::FourScreen => table,
        };

        bank * NAMETABLE_SIZE + offset
    }

    /// Map a palette address to an offset in palette RAM
    ///
    /// $3F10/$3F14/$3F18/$3F1C mirror $3F00/$3F04/$3F08/$3F0C: entry 0 of
    /// each sprite palette is the shared background color.
    pub(super) fn palette_offset(&self, addr: u16) -> usize {
        let offset = (addr & 0x001F) as usize;
        if offset >= 16 && offset % 4 == 0 {
            offset - 16
        } else {
            offset
        }
    }

    /// Read a byte from PPU address space
    pub(crate) fn read_vram(&self, addr: u16) -> u8 {
        let addr = addr & 0x3FFF;
        match addr {
            0x0000..=0x1FFF => match &self.mapper {
                Some(mapper) => mapper.borrow().ppu_read(addr),
                None => 0,
            },
            0x2000..=0x3EFF => self.nametables[self.nametable_offset(addr)],
            0x3F00..=0x3FFF => self.palette_ram[self.palette_offset(addr)],
            _ => unreachable!(),
        }
    }

    /// Write a byte to PPU address space
    pub(crate) fn write_vram(&mut self, addr: u16, data: u8) {
        let addr = addr & 0x3FFF;
        match addr {
            0x0000..=0x1FFF => {
                if let Some(mapper) = &self.mapper {
                    mapper.borrow_mut().ppu_write(addr, data);
                }
            }
            0x2000..=0x3EFF => {
                let offset = self.nametable_offset(addr);
                self.nametables[offset] = data;
            }
            0x3F00..=0x3FFF => {
                let offset = self.palette_offset(addr);
                self.palette_ram[offset] = data;
            }
            _ => unreachable!(),
        }
    }
}
