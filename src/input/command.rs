use crate::selection::Direction;

/// High-level command bound to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    /// Load one of the numbered presets (0-based)
    LoadPreset(usize),
    /// Ask the user for a value, then insert it
    Insert,
    DeleteSelection,
    RotateClockwise,
    RotateCounterClockwise,
}

impl Command {
    /// Map a DOM `keyCode`
    ///
    /// Arrows navigate, `1`-`8` load presets, `A` adds, `D` deletes,
    /// `Q`/`E` rotate clockwise/counter-clockwise.
    pub fn from_key_code(code: u32) -> Option<Self> {
        let command = match code {
            37 => Command::Move(Direction::Left),
            38 => Command::Move(Direction::Up),
            39 => Command::Move(Direction::Right),
            40 => Command::Move(Direction::Down),
            49..=56 => Command::LoadPreset((code - 49) as usize),
            65 => Command::Insert,
            68 => Command::DeleteSelection,
            69 => Command::RotateCounterClockwise,
            81 => Command::RotateClockwise,
            _ => return None,
        };
        Some(command)
    }

    /// Whether the command changes the tree shape and starts a transition
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Command::Insert
                | Command::DeleteSelection
                | Command::RotateClockwise
                | Command::RotateCounterClockwise
        )
    }
}
