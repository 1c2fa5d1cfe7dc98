// Screenshot capture
//
// Writes the completed ARGB8888 frame as a PNG under a per-ROM directory
// with a timestamped filename.

use std::fs;
use std::io;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Errors that can occur while saving a screenshot
#[derive(Debug)]
pub enum ScreenshotError {
    /// I/O error
    Io(io::Error),

    /// PNG encoding error
    PngEncoding(png::EncodingError),
}

impl std::fmt::Display for ScreenshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScreenshotError::Io(e) => write!(f, "I/O error: {}", e),
            ScreenshotError::PngEncoding(e) => write!(f, "PNG encoding error: {}", e),
        }
    }
}

impl std::error::Error for ScreenshotError {}

impl From<io::Error> for ScreenshotError {
    fn from(e: io::Error) -> Self {
        ScreenshotError::Io(e)
    }
}

impl From<png::EncodingError> for ScreenshotError {
    fn from(e: png::EncodingError) -> Self {
        ScreenshotError::PngEncoding(e)
    }
}

/// Save an ARGB8888 frame as a PNG
///
/// Returns the path of the written file.
pub fn save_screenshot(
    frame: &[u32],
    width: u32,
    height: u32,
    directory: &Path,
    rom_path: Option<&Path>,
) -> Result<PathBuf, ScreenshotError> {
    let target_dir = match rom_path.and_then(|p| p.file_stem()) {
        Some(stem) => directory.join(stem),
        None => directory.join("default"),
    };
    fs::create_dir_all(&target_dir)?;

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let file_path = target_dir.join(format!("screenshot_{}.png", timestamp));

    save_png(&file_path, &argb_to_rgb(frame), width, height)?;
    Ok(file_path)
}

/// Strip the alpha channel for the PNG encoder
fn argb_to_rgb(frame: &[u32]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(frame.len() * 3);
    for &pixel in frame {
        rgb.push((pixel >> 16) as u8);
        rgb.push((pixel >> 8) as u8);
        rgb.push(pixel as u8);
    }
    rgb
}

fn save_png(path: &Path, data: &[u8], width: u32, height: u32) -> Result<(), ScreenshotError> {
    let file = fs::File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(data)?;
    Ok(())
}
