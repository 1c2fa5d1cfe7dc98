// Keyboard-to-controller mapping
//
// Maintains the two 8-bit button masks the core consumes (A, B, Select,
// Start, Up, Down, Left, Right = bits 0-7).

use winit::keyboard::{KeyCode, PhysicalKey};

/// Player 1: arrows + Z/X + Enter/right shift. Player 2: IJKL + G/H + N/M.
pub struct KeyboardHandler {
    player1: u8,
    player2: u8,
}

impl KeyboardHandler {
    pub fn new() -> Self {
        KeyboardHandler {
            player1: 0,
            player2: 0,
        }
    }

    /// Apply one key transition
    pub fn handle_key(&mut self, key: PhysicalKey, pressed: bool) {
        let PhysicalKey::Code(code) = key else {
            return;
        };

        let (mask, bit) = match code {
            // Player 1
            KeyCode::KeyZ => (&mut self.player1, 0x01),
            KeyCode::KeyX => (&mut self.player1, 0x02),
            KeyCode::ShiftRight => (&mut self.player1, 0x04),
            KeyCode::Enter => (&mut self.player1, 0x08),
            KeyCode::ArrowUp => (&mut self.player1, 0x10),
            KeyCode::ArrowDown => (&mut self.player1, 0x20),
            KeyCode::ArrowLeft => (&mut self.player1, 0x40),
            KeyCode::ArrowRight => (&mut self.player1, 0x80),

            // Player 2
            KeyCode::KeyG => (&mut self.player2, 0x01),
            KeyCode::KeyH => (&mut self.player2, 0x02),
            KeyCode::KeyN => (&mut self.player2, 0x04),
            KeyCode::KeyM => (&mut self.player2, 0x08),
            KeyCode::KeyI => (&mut self.player2, 0x10),
            KeyCode::KeyK => (&mut self.player2, 0x20),
            KeyCode::KeyJ => (&mut self.player2, 0x40),
            KeyCode::KeyL => (&mut self.player2, 0x80),

            _ => return,
        };

        if pressed {
            *mask |= bit;
        } else {
            *mask &= !bit;
        }
    }

    pub fn player1_mask(&self) -> u8 {
        self.player1
    }

    pub fn player2_mask(&self) -> u8 {
        self.player2
    }
}

impl Default for KeyboardHandler {
    fn default() -> Self {
        Self::new()
    }
}
