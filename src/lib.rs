// famicore - a cycle-approximate NES emulator core
//
// The core is the CPU interpreter, the PPU rendering pipeline, and the
// memory maps that join them; the machine drives them frame by frame.
// The display module is thin host glue around the core.

pub mod bus;
pub mod cartridge;
pub mod cpu;
pub mod display;
pub mod input;
pub mod machine;
pub mod ppu;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export the main types for convenience
pub use bus::Bus;
pub use cartridge::{create_mapper, Cartridge, INesError, Mapper, MapperError, Mirroring};
pub use cpu::{Cpu, StepError};
pub use input::{Controller, ControllerIO, InputState};
pub use machine::{Machine, MachineConfig};
pub use ppu::Ppu;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_components() {
        let _cpu = Cpu::new();
        let _ppu = Ppu::new();
        let _bus = Bus::new();
        let _controllers = ControllerIO::new();
    }
}
