//! Double-buffered logical button states

use framekey_shared::ButtonCode;

/// Number of state slots: one per button plus the shared null slot 0.
pub const BUTTON_SLOTS: usize = 24;

/// Per-frame state of one logical button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    /// Held this frame
    pub pressed: bool,
    /// Became held this frame
    pub triggered: bool,
    /// Auto-repeat fired this frame
    pub repeated: bool,
}

/// Dense slot of a button. `None` shares slot 0 with every unknown code.
const fn slot(code: ButtonCode) -> usize {
    match code {
        ButtonCode::None => 0,
        ButtonCode::Down => 1,
        ButtonCode::Left => 2,
        ButtonCode::Right => 3,
        ButtonCode::Up => 4,
        ButtonCode::A => 5,
        ButtonCode::B => 6,
        ButtonCode::C => 7,
        ButtonCode::X => 8,
        ButtonCode::Y => 9,
        ButtonCode::Z => 10,
        ButtonCode::L => 11,
        ButtonCode::R => 12,
        ButtonCode::Shift => 13,
        ButtonCode::Ctrl => 14,
        ButtonCode::Alt => 15,
        ButtonCode::F5 => 16,
        ButtonCode::F6 => 17,
        ButtonCode::F7 => 18,
        ButtonCode::F8 => 19,
        ButtonCode::F9 => 20,
        ButtonCode::MouseLeft => 21,
        ButtonCode::MouseMiddle => 22,
        ButtonCode::MouseRight => 23,
    }
}

/// Current and previous frame button states.
///
/// `swap` flips which buffer is current, so after a swap the previous
/// buffer holds last frame's final states without any copying.
#[derive(Debug, Clone)]
pub struct StateBuffers {
    buffers: [[ButtonState; BUTTON_SLOTS]; 2],
    current: usize,
}

impl Default for StateBuffers {
    fn default() -> Self {
        Self::new()
    }
}

impl StateBuffers {
    pub fn new() -> Self {
        Self {
            buffers: [[ButtonState::default(); BUTTON_SLOTS]; 2],
            current: 0,
        }
    }

    pub fn swap(&mut self) {
        self.current ^= 1;
    }

    /// Reset the current buffer to all-false.
    pub fn clear(&mut self) {
        self.buffers[self.current] = [ButtonState::default(); BUTTON_SLOTS];
    }

    pub fn get(&self, code: ButtonCode) -> ButtonState {
        self.buffers[self.current][slot(code)]
    }

    pub fn get_mut(&mut self, code: ButtonCode) -> &mut ButtonState {
        &mut self.buffers[self.current][slot(code)]
    }

    pub fn previous(&self, code: ButtonCode) -> ButtonState {
        self.buffers[self.current ^ 1][slot(code)]
    }

    /// State for a raw numeric code as passed in by scripts.
    ///
    /// Unknown and out-of-range values read the null slot, which is never
    /// set.
    pub fn get_checked(&self, value: i32) -> ButtonState {
        let code = ButtonCode::from_value(value).unwrap_or_default();
        self.get(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_are_dense_and_unique() {
        let mut seen = [false; BUTTON_SLOTS];
        for code in ButtonCode::ALL {
            let index = slot(code);
            assert!(index > 0 && index < BUTTON_SLOTS);
            assert!(!seen[index], "slot {} used twice", index);
            seen[index] = true;
        }
        assert!(seen[1..].iter().all(|&s| s));
    }

    #[test]
    fn test_swap_keeps_previous_frame() {
        let mut buffers = StateBuffers::new();
        buffers.get_mut(ButtonCode::A).pressed = true;

        buffers.swap();
        buffers.clear();

        assert!(!buffers.get(ButtonCode::A).pressed);
        assert!(buffers.previous(ButtonCode::A).pressed);
    }

    #[test]
    fn test_checked_lookup_falls_back_to_null_slot() {
        let mut buffers = StateBuffers::new();
        buffers.get_mut(ButtonCode::C).pressed = true;

        assert!(buffers.get_checked(13).pressed);
        assert_eq!(buffers.get_checked(-5), ButtonState::default());
        assert_eq!(buffers.get_checked(3), ButtonState::default());
        assert_eq!(buffers.get_checked(1000), ButtonState::default());
    }
}
