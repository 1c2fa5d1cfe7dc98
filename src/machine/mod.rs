// Machine module - the console itself
//
// Owns the CPU and the bus (which owns the PPU, the controllers and the
// mapper handle) and drives them: one CPU instruction, then three PPU
// cycles per CPU cycle until the PPU closes the frame. NMI comes from
// the PPU at vblank, IRQ from the cartridge mapper; both are delivered
// between instructions.

mod config;
mod screenshot;


pub use config::{MachineConfig, TraceConfig, VideoConfig};
pub use screenshot::{save_screenshot, ScreenshotError};

use crate::bus::Bus;
use crate::cartridge::{create_mapper, Cartridge, MapperError};
use crate::cpu::{Cpu, StepError};
use crate::input::InputState;
use crate::ppu::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::ppu::palette;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// PPU cycles per CPU cycle (NTSC)
const PPU_CYCLES_PER_CPU_CYCLE: u64 = 3;

/// Extra CPU cycles charged by an OAM DMA (plus one on odd cycles)
const OAM_DMA_STALL: u64 = 513;

/// The assembled console
pub struct Machine {
    cpu: Cpu,
    bus: Bus,

    /// Total CPU cycles since reset
    cycles: u64,

    /// Emit one trace line per instruction
    verbose: bool,

    /// ROM path, for screenshot naming
    rom_path: Option<PathBuf>,
}

impl Machine {
    /// Build a machine around a parsed cartridge
    ///
    /// Fails when the cartridge names an unsupported mapper; a rejected
    /// cartridge never produces a machine.
    pub fn new(cartridge: Cartridge) -> Result<Machine, MapperError> {
        let mapper = Rc::new(RefCell::new(create_mapper(cartridge)?));
        let mut bus = Bus::new();
        bus.attach_mapper(mapper);

        let mut machine = Machine {
            cpu: Cpu::new(),
            bus,
            cycles: 0,
            verbose: false,
            rom_path: None,
        };
        machine.reset();
        Ok(machine)
    }

    /// Press the reset button: CPU vectors through $FFFC, PPU and
    /// controllers return to power-on state
    pub fn reset(&mut self) {
        self.bus.ppu_mut().reset();
        self.bus.controllers_mut().reset();
        self.cycles = self.cpu.reset(&mut self.bus) as u64;
    }

    /// Run until the PPU completes the current frame
    ///
    /// A decode failure is fatal: the error propagates and the loop
    /// stops mid-frame.
    pub fn advance_frame(&mut self) -> Result<(), StepError> {
        loop {
            let mut spent = 0u64;

            // Interrupts are delivered between instructions; NMI wins
            if self.bus.ppu_mut().take_nmi() {
                spent += self.cpu.nmi(&mut self.bus) as u64;
            } else if self.bus.poll_mapper_irq() {
                spent += self.cpu.irq(&mut self.bus) as u64;
            }

            if self.verbose {
                println!("{}", self.cpu.trace(&mut self.bus));
            }

            spent += self.cpu.step(&mut self.bus)? as u64;

            // An OAM DMA stalls the CPU; the odd-cycle alignment costs one more
            if self.bus.take_dma_stall() {
                spent += OAM_DMA_STALL + (self.cycles & 1);
            }

            self.cycles += spent;
            if self.bus.ppu_mut().advance((spent * PPU_CYCLES_PER_CPU_CYCLE) as u32) {
                break;
            }
        }

        self.sample_zapper();
        Ok(())
    }

    /// Execute exactly one instruction without advancing the PPU
    ///
    /// Tooling entry point; normal operation goes through `advance_frame`.
    pub fn step_instruction(&mut self) -> Result<u8, StepError> {
        let cycles = self.cpu.step(&mut self.bus)?;
        self.cycles += cycles as u64;
        Ok(cycles)
    }

    /// Apply the host's input snapshot (called before each frame)
    pub fn set_inputs(&mut self, inputs: &InputState) {
        self.bus.controllers_mut().set_inputs(inputs);
    }

    /// The completed ARGB8888 frame (256x240)
    pub fn frame(&self) -> &[u32] {
        self.bus.ppu().frame()
    }

    /// The completed frame with 8 lines cropped top and bottom (256x224)
    pub fn cropped_frame(&self) -> &[u32] {
        self.bus.ppu().cropped_frame()
    }

    /// Total CPU cycles since reset
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Remember the ROM path for screenshot naming
    pub fn set_rom_path<P: AsRef<Path>>(&mut self, path: P) {
        self.rom_path = Some(path.as_ref().to_path_buf());
    }

    /// Capture the completed frame as a PNG
    pub fn screenshot(&self, directory: &Path) -> Result<PathBuf, ScreenshotError> {
        save_screenshot(
            self.frame(),
            SCREEN_WIDTH as u32,
            SCREEN_HEIGHT as u32,
            directory,
            self.rom_path.as_deref(),
        )
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    /// Feed the light gun sensor from the completed frame
    fn sample_zapper(&mut self) {
        let Some(zapper) = self.bus.controllers().zapper() else {
            return;
        };
        let (x, y) = (zapper.x, zapper.y);
        let lit = (0..SCREEN_WIDTH as i32).contains(&x)
            && (0..SCREEN_HEIGHT as i32).contains(&y)
            && palette::is_bright(self.frame()[y as usize * SCREEN_WIDTH + x as usize]);
        self.bus.controllers_mut().update_zapper_light(lit);
    }
}
