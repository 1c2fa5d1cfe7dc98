// Configuration management
//
// User-facing settings persisted next to the executable as
// `famicore.toml`. Missing or unreadable files fall back to defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Default configuration file path
const CONFIG_FILE: &str = "famicore.toml";

/// Emulator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineConfig {
    pub video: VideoConfig,
    pub trace: TraceConfig,
    /// Directory screenshots are written into
    pub screenshot_directory: PathBuf,
}

/// Video settings consumed by the window frontend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoConfig {
    /// Window scale (1-8)
    pub scale: u32,

    /// Enable VSync
    pub vsync: bool,

    /// Target FPS (60 for NTSC)
    pub fps: u32,
}

/// Trace settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceConfig {
    /// Print one line per executed instruction
    pub verbose: bool,
}

impl Default for MachineConfig {
    fn default() -> Self {
        MachineConfig {
            video: VideoConfig {
                scale: 3,
                vsync: true,
                fps: 60,
            },
            trace: TraceConfig { verbose: false },
            screenshot_directory: PathBuf::from("screenshots"),
        }
    }
}

impl MachineConfig {
    /// Load the configuration file, falling back to defaults
    pub fn load_or_default() -> Self {
        match fs::read_to_string(CONFIG_FILE) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_default(),
            Err(_) => MachineConfig::default(),
        }
    }

    /// Persist the configuration
    pub fn save(&self) -> io::Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(CONFIG_FILE, contents)
    }
}
