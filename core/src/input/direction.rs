//! 4-way and 8-way direction resolution
//!
//! Both resolvers look only at the `pressed` flag of the four cardinal
//! buttons. Dir4 remembers which direction it last settled on, so an
//! already-held direction keeps priority over one pressed later. Dir8 has
//! no memory.

use framekey_shared::ButtonCode;

const DIRS: [ButtonCode; 4] = ButtonCode::DIRECTIONS;

/// For each cardinal (in `DIRS` order), the directions checked as its
/// companion. Up's list repeats Up instead of naming Down.
const OTHER_DIRS: [[ButtonCode; 3]; 4] = [
    [ButtonCode::Left, ButtonCode::Right, ButtonCode::Up],
    [ButtonCode::Down, ButtonCode::Up, ButtonCode::Right],
    [ButtonCode::Down, ButtonCode::Up, ButtonCode::Left],
    [ButtonCode::Left, ButtonCode::Right, ButtonCode::Up],
];

/// Masks that cancel out entirely: Down+Up and Left+Right.
const DEAD_MASKS: [u8; 2] = [0b1001, 0b0110];

/// Row/column index of a cardinal in the direction tables.
const fn dir_index(dir: ButtonCode) -> usize {
    (dir.value() / 2 - 1) as usize
}

/// 8-way direction. Values follow the numpad layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Dir8 {
    #[default]
    None = 0,
    DownLeft = 1,
    Down = 2,
    DownRight = 3,
    Left = 4,
    Right = 6,
    UpLeft = 7,
    Up = 8,
    UpRight = 9,
}

impl Dir8 {
    pub const fn value(self) -> i32 {
        self as i32
    }

    const fn from_cardinal(dir: ButtonCode) -> Self {
        match dir {
            ButtonCode::Down => Dir8::Down,
            ButtonCode::Left => Dir8::Left,
            ButtonCode::Right => Dir8::Right,
            ButtonCode::Up => Dir8::Up,
            _ => Dir8::None,
        }
    }
}

/// Result of combining two pressed cardinals, indexed `[first][second]`.
const COMBOS: [[Dir8; 4]; 4] = [
    [Dir8::Down, Dir8::DownLeft, Dir8::DownRight, Dir8::None],
    [Dir8::DownLeft, Dir8::Left, Dir8::None, Dir8::UpLeft],
    [Dir8::DownRight, Dir8::None, Dir8::Right, Dir8::UpRight],
    [Dir8::None, Dir8::UpLeft, Dir8::UpRight, Dir8::Up],
];

/// Sticky 4-way resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dir4 {
    active: ButtonCode,
    previous: ButtonCode,
}

impl Dir4 {
    /// Resolved direction for the current frame.
    pub fn active(&self) -> ButtonCode {
        self.active
    }

    /// Direction remembered from earlier frames.
    pub fn previous(&self) -> ButtonCode {
        self.previous
    }

    pub fn update(&mut self, pressed: impl Fn(ButtonCode) -> bool) {
        let mask = DIRS
            .iter()
            .enumerate()
            .filter(|(_, dir)| pressed(**dir))
            .fold(0u8, |mask, (i, _)| mask | (1 << i));

        if DEAD_MASKS.contains(&mask) {
            self.active = ButtonCode::None;
            self.previous = ButtonCode::None;
            return;
        }

        if self.previous != ButtonCode::None && pressed(self.previous) {
            let others = OTHER_DIRS[dir_index(self.previous)];
            if let Some(other) = others.into_iter().find(|other| pressed(*other)) {
                self.active = other;
                return;
            }
        }

        match DIRS.into_iter().find(|dir| pressed(*dir)) {
            Some(dir) => {
                self.active = dir;
                self.previous = dir;
            }
            None => {
                self.active = ButtonCode::None;
                self.previous = ButtonCode::None;
            }
        }
    }
}

/// Resolve the 8-way direction from the cardinal pressed states.
pub fn resolve_dir8(pressed: impl Fn(ButtonCode) -> bool) -> Dir8 {
    let Some(first) = DIRS.into_iter().find(|dir| pressed(*dir)) else {
        return Dir8::None;
    };

    let row = dir_index(first);
    match OTHER_DIRS[row].into_iter().find(|other| pressed(*other)) {
        Some(other) => COMBOS[row][dir_index(other)],
        None => Dir8::from_cardinal(first),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(buttons: &[ButtonCode]) -> impl Fn(ButtonCode) -> bool + '_ {
        move |b| buttons.contains(&b)
    }

    #[test]
    fn test_dir4_single_direction() {
        let mut dir4 = Dir4::default();
        dir4.update(held(&[ButtonCode::Left]));
        assert_eq!(dir4.active(), ButtonCode::Left);
        assert_eq!(dir4.previous(), ButtonCode::Left);

        dir4.update(held(&[]));
        assert_eq!(dir4.active(), ButtonCode::None);
        assert_eq!(dir4.previous(), ButtonCode::None);
    }

    #[test]
    fn test_dir4_opposites_cancel() {
        let mut dir4 = Dir4::default();
        dir4.update(held(&[ButtonCode::Down]));
        dir4.update(held(&[ButtonCode::Down, ButtonCode::Up]));
        assert_eq!(dir4.active(), ButtonCode::None);
        assert_eq!(dir4.previous(), ButtonCode::None);

        dir4.update(held(&[ButtonCode::Left, ButtonCode::Right]));
        assert_eq!(dir4.active(), ButtonCode::None);
    }

    #[test]
    fn test_dir4_three_held_is_not_dead() {
        let mut dir4 = Dir4::default();
        dir4.update(held(&[ButtonCode::Down, ButtonCode::Up, ButtonCode::Left]));
        assert_eq!(dir4.active(), ButtonCode::Down);
    }

    #[test]
    fn test_dir4_held_direction_prefers_new_companion() {
        let mut dir4 = Dir4::default();
        dir4.update(held(&[ButtonCode::Right]));
        assert_eq!(dir4.active(), ButtonCode::Right);

        // Right is remembered; its first pressed companion wins
        dir4.update(held(&[ButtonCode::Right, ButtonCode::Down]));
        assert_eq!(dir4.active(), ButtonCode::Down);
        assert_eq!(dir4.previous(), ButtonCode::Right);

        dir4.update(held(&[ButtonCode::Right, ButtonCode::Up]));
        assert_eq!(dir4.active(), ButtonCode::Up);
    }

    #[test]
    fn test_dir4_falls_back_to_scan_order() {
        let mut dir4 = Dir4::default();
        dir4.update(held(&[ButtonCode::Up]));
        dir4.update(held(&[ButtonCode::Right]));
        assert_eq!(dir4.active(), ButtonCode::Right);
        assert_eq!(dir4.previous(), ButtonCode::Right);
    }

    #[test]
    fn test_dir8_diagonals() {
        assert_eq!(resolve_dir8(held(&[ButtonCode::Down, ButtonCode::Right])), Dir8::DownRight);
        assert_eq!(resolve_dir8(held(&[ButtonCode::Down, ButtonCode::Left])), Dir8::DownLeft);
        assert_eq!(resolve_dir8(held(&[ButtonCode::Up, ButtonCode::Left])), Dir8::UpLeft);
        assert_eq!(resolve_dir8(held(&[ButtonCode::Up, ButtonCode::Right])), Dir8::UpRight);
        assert_eq!(Dir8::DownRight.value(), 3);
        assert_eq!(Dir8::UpRight.value(), 9);
    }

    #[test]
    fn test_dir8_cardinals_and_opposites() {
        assert_eq!(resolve_dir8(held(&[])), Dir8::None);
        assert_eq!(resolve_dir8(held(&[ButtonCode::Right])), Dir8::Right);
        assert_eq!(resolve_dir8(held(&[ButtonCode::Up])), Dir8::Up);
        assert_eq!(resolve_dir8(held(&[ButtonCode::Down, ButtonCode::Up])), Dir8::None);
        assert_eq!(resolve_dir8(held(&[ButtonCode::Left, ButtonCode::Right])), Dir8::None);
    }
}
