use crate::collision::Collidable;
use crate::config::CharacterConfig;
use sdl2::rect::Rect;

/// The runner. Only its vertical position ever changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub x: i32,
    pub y: i32,
    pub size: u32,
}

impl Character {
    /// Creates a character standing on the ground
    pub fn new(config: &CharacterConfig) -> Self {
        Character {
            x: config.x,
            y: config.ground_y,
            size: config.size,
        }
    }
}

impl Collidable for Character {
    fn get_bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.size, self.size)
    }
}
