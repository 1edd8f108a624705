//! Double-buffered raw scancode states

use framekey_shared::{SCANCODE_COUNT, Scancode};

#[derive(Debug, Clone)]
pub struct RawStates {
    buffers: [[bool; SCANCODE_COUNT]; 2],
    current: usize,
}

impl Default for RawStates {
    fn default() -> Self {
        Self {
            buffers: [[false; SCANCODE_COUNT]; 2],
            current: 0,
        }
    }
}

impl RawStates {
    pub fn swap(&mut self) {
        self.current ^= 1;
    }

    /// Overwrite the current buffer with a platform key snapshot.
    pub fn capture(&mut self, keys: &[bool; SCANCODE_COUNT]) {
        self.buffers[self.current] = *keys;
    }

    pub fn pressed(&self, scancode: Scancode) -> bool {
        self.buffers[self.current]
            .get(scancode.index())
            .copied()
            .unwrap_or(false)
    }

    /// Pressed now and not pressed last frame.
    pub fn triggered(&self, scancode: Scancode) -> bool {
        let previous = self.buffers[self.current ^ 1]
            .get(scancode.index())
            .copied()
            .unwrap_or(false);
        self.pressed(scancode) && !previous
    }

    /// Lowest scancode held in both the current and the previous frame.
    pub fn first_held(&self) -> Option<Scancode> {
        let current = &self.buffers[self.current];
        let previous = &self.buffers[self.current ^ 1];
        current
            .iter()
            .zip(previous.iter())
            .position(|(&now, &before)| now && before)
            .map(|index| Scancode(index as u16))
    }
}
