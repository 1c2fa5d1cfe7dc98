// Window frontend - winit event loop plus a pixels surface
//
// Owns the machine for the session: polls keyboard input, runs one frame
// of emulation per redraw at the configured pace, and blits the PPU's
// ARGB8888 buffer into the RGBA surface.

use super::keyboard::KeyboardHandler;
use crate::input::InputState;
use crate::machine::{Machine, MachineConfig};
use crate::ppu::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use pixels::{Pixels, SurfaceTexture};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

struct DisplayWindow {
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
    machine: Machine,
    keyboard: KeyboardHandler,
    scale: u32,
    frame_duration: Duration,
    last_frame_time: Instant,
    screenshot_directory: PathBuf,
}

impl DisplayWindow {
    fn new(machine: Machine, config: &MachineConfig) -> Self {
        DisplayWindow {
            window: None,
            pixels: None,
            machine,
            keyboard: KeyboardHandler::new(),
            scale: config.video.scale.clamp(1, 8),
            frame_duration: Duration::from_micros(1_000_000 / config.video.fps.max(1) as u64),
            last_frame_time: Instant::now(),
            screenshot_directory: config.screenshot_directory.clone(),
        }
    }

    fn window_size(&self) -> (u32, u32) {
        (
            SCREEN_WIDTH as u32 * self.scale,
            SCREEN_HEIGHT as u32 * self.scale,
        )
    }

    /// One frame of emulation with the current input state
    fn run_frame(&mut self) -> Result<(), crate::cpu::StepError> {
        self.machine.set_inputs(&InputState {
            controller1: self.keyboard.player1_mask(),
            controller2: self.keyboard.player2_mask(),
            zapper: None,
        });
        self.machine.advance_frame()
    }

    /// Blit the completed frame and present it
    fn render(&mut self) -> Result<(), pixels::Error> {
        if let Some(pixels) = &mut self.pixels {
            let surface = pixels.frame_mut();
            for (dst, &src) in surface.chunks_exact_mut(4).zip(self.machine.frame()) {
                dst[0] = (src >> 16) as u8;
                dst[1] = (src >> 8) as u8;
                dst[2] = src as u8;
                dst[3] = 0xFF;
            }
            pixels.render()?;
        }
        Ok(())
    }

    fn frame_due(&mut self) -> bool {
        if self.last_frame_time.elapsed() >= self.frame_duration {
            self.last_frame_time = Instant::now();
            true
        } else {
            false
        }
    }
}

impl ApplicationHandler for DisplayWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let (width, height) = self.window_size();
        let window_attributes = Window::default_attributes()
            .with_title(format!("famicore - {}x{}", width, height))
            .with_inner_size(LogicalSize::new(width, height))
            .with_resizable(false);

        let window = Arc::new(
            event_loop
                .create_window(window_attributes)
                .expect("failed to create window"),
        );
        let window_size = window.inner_size();

        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, window.clone());
        let pixels = Pixels::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32, surface_texture)
            .expect("failed to create pixel surface");

        self.window = Some(window);
        self.pixels = Some(pixels);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key,
                        state,
                        ..
                    },
                ..
            } => {
                let pressed = state == ElementState::Pressed;
                match physical_key {
                    PhysicalKey::Code(KeyCode::Escape) if pressed => event_loop.exit(),
                    PhysicalKey::Code(KeyCode::F8) if pressed => self.machine.reset(),
                    PhysicalKey::Code(KeyCode::F9) if pressed => {
                        match self.machine.screenshot(&self.screenshot_directory) {
                            Ok(path) => println!("screenshot saved to {}", path.display()),
                            Err(err) => eprintln!("screenshot failed: {}", err),
                        }
                    }
                    key => self.keyboard.handle_key(key, pressed),
                }
            }

            WindowEvent::RedrawRequested => {
                if self.frame_due() {
                    if let Err(err) = self.run_frame() {
                        eprintln!("emulation halted: {}", err);
                        event_loop.exit();
                        return;
                    }
                    if let Err(err) = self.render() {
                        eprintln!("render error: {}", err);
                        event_loop.exit();
                        return;
                    }
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Run the machine inside a window until the user closes it
pub fn run_display(
    machine: Machine,
    config: &MachineConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(if config.video.vsync {
        ControlFlow::Wait
    } else {
        ControlFlow::Poll
    });

    let mut display = DisplayWindow::new(machine, config);
    event_loop.run_app(&mut display)?;
    Ok(())
}
