// famicore - entry point
//
// Loads the ROM named on the command line, builds the machine, and hands
// it to the window frontend.

use famicore::cartridge::Cartridge;
use famicore::display::run_display;
use famicore::machine::{Machine, MachineConfig};
use std::env;
use std::process;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let rom_path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: famicore <rom.nes>");
            process::exit(2);
        }
    };

    let config = MachineConfig::load_or_default();

    let cartridge = Cartridge::from_ines_file(&rom_path)?;
    let mut machine = Machine::new(cartridge)?;
    machine.set_rom_path(&rom_path);

    // The VERBOSE environment variable overrides the config file
    let verbose = match env::var("VERBOSE") {
        Ok(value) => value != "0",
        Err(_) => config.trace.verbose,
    };
    machine.set_verbose(verbose);

    println!("famicore v{}", env!("CARGO_PKG_VERSION"));
    println!("loaded {}", rom_path);

    run_display(machine, &config)?;
    Ok(())
}
